//! Party model
//!
//! A named group whose shared expenses are tracked as an append-only
//! sequence of entries.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::entry::Entry;
use super::ids::PartyId;

/// Maximum party name length, in characters
pub const MAX_NAME_LEN: usize = 100;

/// A party and its entries
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Party {
    /// Unique identifier
    pub id: PartyId,

    /// Display name, fixed at creation
    pub name: String,

    /// Entries in insertion order
    #[serde(default)]
    pub entries: Vec<Entry>,

    /// When the party was created
    pub created_at: DateTime<Utc>,
}

impl Party {
    /// Create a new party with no entries
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: PartyId::new(),
            name: name.into(),
            entries: Vec::new(),
            created_at: Utc::now(),
        }
    }

    pub fn entry_count(&self) -> usize {
        self.entries.len()
    }
}

/// Check a candidate party name; callers are expected to trim first
pub fn validate_name(name: &str) -> Result<(), PartyValidationError> {
    if name.trim().is_empty() {
        return Err(PartyValidationError::EmptyName);
    }

    let len = name.chars().count();
    if len > MAX_NAME_LEN {
        return Err(PartyValidationError::NameTooLong(len));
    }

    Ok(())
}

impl fmt::Display for Party {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.id)
    }
}

/// Validation errors for parties
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PartyValidationError {
    EmptyName,
    NameTooLong(usize),
}

impl fmt::Display for PartyValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyName => write!(f, "Party name cannot be empty"),
            Self::NameTooLong(len) => write!(
                f,
                "Party name too long ({} chars, max {})",
                len, MAX_NAME_LEN
            ),
        }
    }
}

impl std::error::Error for PartyValidationError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_party() {
        let party = Party::new("Trip");
        assert_eq!(party.name, "Trip");
        assert!(party.entries.is_empty());
        assert_eq!(party.entry_count(), 0);
    }

    #[test]
    fn test_validation() {
        assert_eq!(validate_name(""), Err(PartyValidationError::EmptyName));
        assert_eq!(validate_name(" \t "), Err(PartyValidationError::EmptyName));
        assert_eq!(
            validate_name(&"a".repeat(101)),
            Err(PartyValidationError::NameTooLong(101))
        );
        assert!(validate_name(&"é".repeat(100)).is_ok());
    }

    #[test]
    fn test_display() {
        let party = Party::new("Trip");
        assert_eq!(party.to_string(), format!("Trip ({})", party.id));
    }

    #[test]
    fn test_serialization() {
        let party = Party::new("Flatmates");
        let json = serde_json::to_string(&party).unwrap();
        let deserialized: Party = serde_json::from_str(&json).unwrap();
        assert_eq!(party, deserialized);
    }
}
