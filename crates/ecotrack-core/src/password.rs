//! Password strength scoring.
//!
//! Four character-class checks summed into a 0-4 score, plus the signup
//! form's acceptance rule (all four classes and a minimum length).
//! Scoring only -- nothing here talks to an identity provider.

use serde::{Deserialize, Serialize};

/// Minimum accepted password length.
pub const MIN_PASSWORD_LEN: usize = 8;

/// Outcome of the four character-class checks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PasswordChecks {
    pub has_lowercase: bool,
    pub has_uppercase: bool,
    pub has_digit: bool,
    pub has_special: bool,
}

impl PasswordChecks {
    pub fn evaluate(password: &str) -> Self {
        Self {
            has_lowercase: password.chars().any(|c| c.is_ascii_lowercase()),
            has_uppercase: password.chars().any(|c| c.is_ascii_uppercase()),
            has_digit: password.chars().any(|c| c.is_ascii_digit()),
            has_special: password.chars().any(|c| !c.is_ascii_alphanumeric()),
        }
    }

    /// Number of satisfied checks, 0-4.
    pub fn score(&self) -> u8 {
        [
            self.has_lowercase,
            self.has_uppercase,
            self.has_digit,
            self.has_special,
        ]
        .iter()
        .filter(|&&b| b)
        .count() as u8
    }

    pub fn all_satisfied(&self) -> bool {
        self.score() == 4
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PasswordStrength {
    Weak,
    Fair,
    Good,
    Strong,
    VeryStrong,
}

impl PasswordStrength {
    pub fn from_score(score: u8) -> Self {
        match score {
            0 => PasswordStrength::Weak,
            1 => PasswordStrength::Fair,
            2 => PasswordStrength::Good,
            3 => PasswordStrength::Strong,
            _ => PasswordStrength::VeryStrong,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            PasswordStrength::Weak => "Weak",
            PasswordStrength::Fair => "Fair",
            PasswordStrength::Good => "Good",
            PasswordStrength::Strong => "Strong",
            PasswordStrength::VeryStrong => "Very Strong",
        }
    }
}

/// Score a password.
pub fn strength(password: &str) -> PasswordStrength {
    PasswordStrength::from_score(PasswordChecks::evaluate(password).score())
}

/// The signup acceptance rule: all four classes present and at least
/// [`MIN_PASSWORD_LEN`] characters.
pub fn is_acceptable(password: &str) -> bool {
    password.len() >= MIN_PASSWORD_LEN && PasswordChecks::evaluate(password).all_satisfied()
}
