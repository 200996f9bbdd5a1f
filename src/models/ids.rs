//! Strongly-typed ID wrappers for stored records
//!
//! Newtypes keep transaction, category and goal IDs from being mixed up.
//! IDs display in a short prefixed form (`txn-1a2b3c4d`) and the CLI accepts
//! either that short form or the full UUID.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

macro_rules! define_id {
    ($name:ident, $display_prefix:literal) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(Uuid);

        impl $name {
            /// Create a new random ID
            pub fn new() -> Self {
                Self(Uuid::new_v4())
            }

            /// Get the underlying UUID
            pub fn as_uuid(&self) -> &Uuid {
                &self.0
            }

            /// Check whether a user-supplied reference names this ID
            ///
            /// Accepts the full UUID, the short display form, or a bare
            /// UUID prefix of at least four characters.
            pub fn matches(&self, reference: &str) -> bool {
                let reference = reference.trim();
                let bare = reference.strip_prefix($display_prefix).unwrap_or(reference);
                bare.len() >= 4 && self.0.to_string().starts_with(&bare.to_lowercase())
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::new()
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}{}", $display_prefix, &self.0.to_string()[..8])
            }
        }

        impl From<Uuid> for $name {
            fn from(uuid: Uuid) -> Self {
                Self(uuid)
            }
        }

        impl FromStr for $name {
            type Err = uuid::Error;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let s = s.strip_prefix($display_prefix).unwrap_or(s);
                Ok(Self(Uuid::parse_str(s)?))
            }
        }
    };
}

define_id!(TransactionId, "txn-");
define_id!(CategoryId, "cat-");
define_id!(SavingsGoalId, "goal-");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_id_display() {
        let id = TransactionId::new();
        let display = id.to_string();
        assert!(display.starts_with("txn-"));
        assert_eq!(display.len(), 12);
    }

    #[test]
    fn test_matches_short_and_full_forms() {
        let id = SavingsGoalId::new();
        let full = id.as_uuid().to_string();

        assert!(id.matches(&full));
        assert!(id.matches(&id.to_string()));
        assert!(id.matches(&full[..6]));
        assert!(!id.matches("goal-"));
        assert!(!id.matches("zz"));
    }

    #[test]
    fn test_from_str_full_uuid() {
        let uuid_str = "550e8400-e29b-41d4-a716-446655440000";
        let id: CategoryId = uuid_str.parse().unwrap();
        assert_eq!(id.as_uuid().to_string(), uuid_str);
    }

    #[test]
    fn test_id_serialization() {
        let id = TransactionId::new();
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, format!("\"{}\"", id.as_uuid()));
    }
}
