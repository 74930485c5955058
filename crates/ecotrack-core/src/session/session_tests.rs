use super::*;
use crate::error::RedeemError;

#[test]
fn five_calls_complete_a_target_five_challenge() {
    // Challenge 1: target 5, 20 points.
    let mut session = Session::with_seeds(0, 0);

    for call in 1..=5 {
        let events = session.record_progress(1);
        let completed = events
            .iter()
            .any(|e| matches!(e, Event::ChallengeCompleted { .. }));
        assert_eq!(completed, call == 5, "completion only on call {call}");
    }

    let c = session.challenge(1).unwrap();
    assert_eq!(c.current, 5);
    assert!(c.completed);
    assert_eq!(session.points(), 20);
    assert_eq!(session.streak(), 1);
    assert_eq!(session.completed_log(), &[1]);
}

#[test]
fn completion_emits_events_in_order() {
    let mut session = Session::with_seeds(80, 3);
    let events = session.record_progress(5); // featured, target 1

    assert_eq!(events.len(), 4);
    assert!(matches!(events[0], Event::ProgressRecorded { current: 1, target: 1, .. }));
    assert!(matches!(
        events[1],
        Event::ChallengeCompleted { points_awarded: 50, .. }
    ));
    assert!(matches!(events[2], Event::PointsCredited { amount: 50, balance: 130, .. }));
    assert!(matches!(events[3], Event::StreakIncremented { streak: 4, .. }));
}

#[test]
fn no_op_progress_emits_nothing() {
    let mut session = Session::new();
    assert!(session.record_progress(42).is_empty());

    session.record_progress(5);
    // Already completed.
    assert!(session.record_progress(5).is_empty());
    assert_eq!(session.streak(), DEFAULT_SEED_STREAK + 1);
}

#[test]
fn partial_progress_does_not_touch_points_or_streak() {
    let mut session = Session::with_seeds(80, 3);
    let events = session.record_progress(2); // target 10
    assert_eq!(events.len(), 1);
    assert_eq!(session.points(), 80);
    assert_eq!(session.streak(), 3);
    assert!(session.completed_log().is_empty());
}

#[test]
fn redeem_debits_and_confirms() {
    let mut session = Session::with_seeds(80, 0);
    let (redemption, event) = session.redeem(3).unwrap(); // sticker, 30
    assert_eq!(redemption.remaining, 50);
    assert_eq!(session.points(), 50);
    match event {
        Event::RewardRedeemed { name, cost, remaining, .. } => {
            assert_eq!(name, "Eco-Friendly Sticker");
            assert_eq!(cost, 30);
            assert_eq!(remaining, 50);
        }
        other => panic!("expected RewardRedeemed, got {other:?}"),
    }
}

#[test]
fn redeem_rejections_leave_state_unchanged() {
    let mut session = Session::with_seeds(30, 0);
    assert_eq!(
        session.redeem(1).unwrap_err(), // costs 50
        RedeemError::CannotAfford { cost: 50, balance: 30 }
    );
    assert_eq!(session.redeem(77).unwrap_err(), RedeemError::UnknownReward(77));
    assert_eq!(session.points(), 30);
}

#[test]
fn reset_clears_progress_log_and_streak_but_keeps_points() {
    let mut session = Session::with_seeds(80, 3);
    session.record_progress(5);
    assert_eq!(session.points(), 130);

    session.reset_challenges();
    assert!(session.challenges().iter().all(|c| c.current == 0 && !c.completed));
    assert!(session.completed_log().is_empty());
    assert_eq!(session.streak(), 0);
    assert_eq!(session.points(), 130);
}

#[test]
fn snapshot_roundtrip_preserves_state() {
    let mut session = Session::with_seeds(80, 3);
    session.record_progress(1);
    session.record_progress(5);

    let restored = Session::from_snapshot(session.snapshot());
    assert_eq!(restored.points(), session.points());
    assert_eq!(restored.streak(), session.streak());
    assert_eq!(restored.completed_log(), session.completed_log());
    assert_eq!(restored.challenge(1).unwrap().current, 1);
}

#[test]
fn snapshot_event_summarizes_state() {
    let mut session = Session::with_seeds(80, 3);
    session.record_progress(5);
    match session.snapshot_event() {
        Event::StateSnapshot {
            points,
            streak,
            completed_challenges,
            total_challenges,
            ..
        } => {
            assert_eq!(points, 130);
            assert_eq!(streak, 4);
            assert_eq!(completed_challenges, 1);
            assert_eq!(total_challenges, 5);
        }
        other => panic!("expected StateSnapshot, got {other:?}"),
    }
}
