//! Entry model
//!
//! One financial event recorded against a party: a purchase (debit), or a
//! payment or return (credit).

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::EntryId;
use super::money::Money;

/// Kind of entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum EntryType {
    /// Goods bought from the party; decreases the balance
    #[default]
    Purchase,
    /// Money paid to the party; increases the balance
    Payment,
    /// Goods returned to the party; increases the balance
    Return,
}

impl EntryType {
    pub const ALL: [EntryType; 3] = [Self::Purchase, Self::Payment, Self::Return];

    /// Parse an entry type from user text (case-insensitive)
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "purchase" => Some(Self::Purchase),
            "payment" => Some(Self::Payment),
            "return" => Some(Self::Return),
            _ => None,
        }
    }

    /// Returns true for entries that add to the balance
    pub fn is_credit(&self) -> bool {
        matches!(self, Self::Payment | Self::Return)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Purchase => "purchase",
            Self::Payment => "payment",
            Self::Return => "return",
        }
    }
}

impl fmt::Display for EntryType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Payload for appending an entry; the store assigns the id
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewEntry {
    pub entry_type: EntryType,
    pub amount: Money,
    pub date: NaiveDate,
}

impl NewEntry {
    pub fn new(entry_type: EntryType, amount: Money, date: NaiveDate) -> Self {
        Self {
            entry_type,
            amount,
            date,
        }
    }

    /// Build a payload dated with the local calendar day
    pub fn today(entry_type: EntryType, amount: Money) -> Self {
        Self::new(entry_type, amount, chrono::Local::now().date_naive())
    }

    /// Validate the payload
    pub fn validate(&self) -> Result<(), EntryValidationError> {
        if !self.amount.is_positive() {
            return Err(EntryValidationError::NonPositiveAmount(self.amount));
        }
        Ok(())
    }
}

/// A recorded entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entry {
    /// Unique identifier
    pub id: EntryId,

    #[serde(rename = "type")]
    pub entry_type: EntryType,

    /// Always positive; the sign comes from `entry_type`
    pub amount: Money,

    /// Calendar day the entry was recorded
    pub date: NaiveDate,
}

impl Entry {
    pub(crate) fn from_new(new: NewEntry) -> Self {
        Self {
            id: EntryId::new(),
            entry_type: new.entry_type,
            amount: new.amount,
            date: new.date,
        }
    }

    /// The entry's contribution to the party balance
    pub fn signed_amount(&self) -> Money {
        if self.entry_type.is_credit() {
            self.amount
        } else {
            -self.amount
        }
    }
}

impl fmt::Display for Entry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {}",
            self.date.format("%Y-%m-%d"),
            self.entry_type,
            self.amount
        )
    }
}

/// Validation errors for entries
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EntryValidationError {
    NonPositiveAmount(Money),
}

impl fmt::Display for EntryValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NonPositiveAmount(amount) => {
                write!(f, "Amount must be greater than zero (got {})", amount)
            }
        }
    }
}

impl std::error::Error for EntryValidationError {}
