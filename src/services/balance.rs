//! Balance calculation
//!
//! A party's balance is derived from its entries on every read:
//! payments and returns are credits, purchases are debits.

use crate::models::{Entry, EntryType, Money, Party};

/// Net balance of a sequence of entries
///
/// Folds from zero in order, subtracting purchases and adding payments and
/// returns. The result does not depend on entry order. Cannot overflow for
/// entries held by a `PartyStore`, which keeps each party's purchase and
/// credit totals in range.
///
/// # Examples
/// ```
/// use party_ledger::services::balance::compute_balance;
/// assert_eq!(compute_balance(&[]).cents(), 0);
/// ```
pub fn compute_balance(entries: &[Entry]) -> Money {
    entries
        .iter()
        .fold(Money::zero(), |acc, entry| acc + entry.signed_amount())
}

/// A party with its computed totals
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PartySummary {
    pub party: Party,
    /// Credits minus purchases
    pub balance: Money,
    /// Sum of purchase amounts
    pub purchases: Money,
    /// Sum of payment and return amounts
    pub credits: Money,
    pub entry_count: usize,
}

/// Compute the summary for a party
pub fn summarize(party: &Party) -> PartySummary {
    let mut purchases = Money::zero();
    let mut credits = Money::zero();

    for entry in &party.entries {
        match entry.entry_type {
            EntryType::Purchase => purchases += entry.amount,
            EntryType::Payment | EntryType::Return => credits += entry.amount,
        }
    }

    PartySummary {
        party: party.clone(),
        balance: compute_balance(&party.entries),
        purchases,
        credits,
        entry_count: party.entries.len(),
    }
}
