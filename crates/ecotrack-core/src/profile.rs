//! User profile document.
//!
//! The profile is an opaque JSON document in the kv store: create and
//! read only, the same contract the hosted document store offered.
//! Malformed stored data is treated as absent.

use serde::{Deserialize, Serialize};

use crate::error::StorageError;
use crate::storage::Database;

const PROFILE_KEY: &str = "user_profile";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Location {
    pub city: String,
    pub state: String,
    pub country: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub location: Option<Location>,
}

impl UserProfile {
    /// Read the stored profile, `None` when absent or unreadable.
    pub fn load(db: &Database) -> Result<Option<Self>, StorageError> {
        let Some(raw) = db.kv_get(PROFILE_KEY)? else {
            return Ok(None);
        };
        match serde_json::from_str(&raw) {
            Ok(profile) => Ok(Some(profile)),
            Err(e) => {
                tracing::warn!("discarding malformed user profile: {e}");
                Ok(None)
            }
        }
    }

    pub fn save(&self, db: &Database) -> Result<(), StorageError> {
        let raw = serde_json::to_string(self)
            .map_err(|e| StorageError::QueryFailed(e.to_string()))?;
        db.kv_set(PROFILE_KEY, &raw)
    }

    /// "City, State, Country" for display, when a location is set.
    pub fn display_location(&self) -> Option<String> {
        self.location
            .as_ref()
            .map(|l| format!("{}, {}, {}", l.city, l.state, l.country))
    }

    /// City to feed the weather lookup.
    pub fn city(&self) -> Option<&str> {
        self.location.as_ref().map(|l| l.city.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> UserProfile {
        UserProfile {
            name: "Maya".to_string(),
            email: "maya@example.com".to_string(),
            location: Some(Location {
                city: "Portland".to_string(),
                state: "Oregon".to_string(),
                country: "USA".to_string(),
            }),
        }
    }

    #[test]
    fn save_load_roundtrip() {
        let db = Database::open_memory().unwrap();
        assert!(UserProfile::load(&db).unwrap().is_none());

        sample().save(&db).unwrap();
        let loaded = UserProfile::load(&db).unwrap().unwrap();
        assert_eq!(loaded, sample());
        assert_eq!(loaded.city(), Some("Portland"));
    }

    #[test]
    fn malformed_profile_reads_as_absent() {
        let db = Database::open_memory().unwrap();
        db.kv_set("user_profile", "{broken").unwrap();
        assert!(UserProfile::load(&db).unwrap().is_none());
    }

    #[test]
    fn location_is_optional() {
        let db = Database::open_memory().unwrap();
        let profile = UserProfile {
            name: "Sam".to_string(),
            email: "sam@example.com".to_string(),
            location: None,
        };
        profile.save(&db).unwrap();
        let loaded = UserProfile::load(&db).unwrap().unwrap();
        assert!(loaded.display_location().is_none());
        assert!(loaded.city().is_none());
    }
}
