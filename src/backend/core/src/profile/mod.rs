//! Single-user profile.
//!
//! One profile record per process, held behind the same snapshot discipline
//! as the job store: reads clone, writes replace wholesale. Like the jobs
//! collection it is session-scoped with no persistence.

use parking_lot::RwLock;
use serde::{Deserialize, Serialize};

/// The user's profile.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub bio: String,
}

impl Default for Profile {
    fn default() -> Self {
        Self {
            name: "John Doe".to_string(),
            email: "john@example.com".to_string(),
            location: "New York, NY".to_string(),
            bio: "Frontend Developer with 5 years of experience".to_string(),
        }
    }
}

/// Owning component for the profile record.
#[derive(Debug, Default)]
pub struct ProfileStore {
    profile: RwLock<Profile>,
}

impl ProfileStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of the current profile.
    pub fn get(&self) -> Profile {
        self.profile.read().clone()
    }

    /// Replace the profile wholesale. Validation happens caller-side.
    pub fn replace(&self, profile: Profile) {
        *self.profile.write() = profile;
        tracing::debug!("profile updated");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_replace_then_get() {
        let store = ProfileStore::new();
        let updated = Profile {
            name: "Jane Roe".into(),
            email: "jane@example.org".into(),
            location: "Berlin".into(),
            bio: String::new(),
        };

        store.replace(updated.clone());
        assert_eq!(store.get(), updated);
    }

    #[test]
    fn test_get_returns_snapshot() {
        let store = ProfileStore::new();
        let snapshot = store.get();
        store.replace(Profile {
            name: "Changed".into(),
            ..snapshot.clone()
        });
        // The earlier snapshot is unaffected.
        assert_eq!(snapshot.name, "John Doe");
    }
}
