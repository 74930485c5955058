use clap::Subcommand;

use super::open_service;

#[derive(Subcommand)]
pub enum RewardsAction {
    /// List the reward catalog
    List,
    /// Redeem a reward, debiting the points balance
    Redeem {
        /// Reward id
        id: u32,
    },
}

pub fn run(action: RewardsAction) -> Result<(), Box<dyn std::error::Error>> {
    let mut service = open_service()?;

    match action {
        RewardsAction::List => {
            println!(
                "{}",
                serde_json::to_string_pretty(service.session().catalog().rewards())?
            );
        }
        RewardsAction::Redeem { id } => {
            let (_redemption, event) = service.redeem(id)?;
            println!("{}", serde_json::to_string_pretty(&event)?);
        }
    }

    Ok(())
}
