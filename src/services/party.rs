//! Party service
//!
//! Business operations on top of the store: turning raw user input into
//! validated entries and pairing parties with their balances.

use crate::error::{LedgerError, LedgerResult};
use crate::models::{Entry, EntryType, Money, NewEntry, Party, PartyId};
use crate::store::PartyStore;

use super::balance::{compute_balance, summarize, PartySummary};

/// Read-only queries over a store
pub struct PartyService<'a> {
    store: &'a PartyStore,
}

impl<'a> PartyService<'a> {
    pub fn new(store: &'a PartyStore) -> Self {
        Self { store }
    }

    /// Find a party by name or id, failing with `NotFound`
    pub fn find(&self, identifier: &str) -> LedgerResult<&'a Party> {
        self.store
            .find(identifier)
            .ok_or_else(|| LedgerError::party_not_found(identifier.trim()))
    }

    /// All parties with their computed balances, in creation order
    pub fn list_with_balances(&self) -> Vec<PartySummary> {
        self.store.parties().iter().map(summarize).collect()
    }

    /// Summary for one party
    pub fn summary(&self, party_id: PartyId) -> LedgerResult<PartySummary> {
        self.store
            .get(party_id)
            .map(summarize)
            .ok_or_else(|| LedgerError::party_not_found(party_id.to_string()))
    }

    /// Current balance for one party
    pub fn balance(&self, party_id: PartyId) -> LedgerResult<Money> {
        self.store
            .get(party_id)
            .map(|p| compute_balance(&p.entries))
            .ok_or_else(|| LedgerError::party_not_found(party_id.to_string()))
    }
}

/// Create a party from a typed name
pub fn create(store: &mut PartyStore, name: &str) -> LedgerResult<Party> {
    store.add_party(name)
}

/// Record an entry from typed input, dated today
///
/// `raw_type` must be one of purchase, payment or return; `raw_amount` must
/// parse as a positive amount with at most two decimals.
pub fn record_entry(
    store: &mut PartyStore,
    party_id: PartyId,
    raw_type: &str,
    raw_amount: &str,
) -> LedgerResult<Entry> {
    let entry_type = parse_entry_type(raw_type)?;
    let amount = parse_amount(raw_amount)?;
    store.add_entry(party_id, NewEntry::today(entry_type, amount))
}

/// Parse an entry type, listing the valid choices on failure
pub fn parse_entry_type(raw: &str) -> LedgerResult<EntryType> {
    EntryType::parse(raw).ok_or_else(|| {
        let valid: Vec<_> = EntryType::ALL.iter().map(EntryType::as_str).collect();
        LedgerError::InvalidInput(format!(
            "Invalid entry type: '{}'. Valid types: {}",
            raw.trim(),
            valid.join(", ")
        ))
    })
}

/// Parse a positive amount
pub fn parse_amount(raw: &str) -> LedgerResult<Money> {
    let amount = Money::parse(raw).map_err(|e| LedgerError::InvalidInput(e.to_string()))?;
    if !amount.is_positive() {
        return Err(LedgerError::InvalidInput(format!(
            "Amount must be greater than zero (got {})",
            amount
        )));
    }
    Ok(amount)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_entry_from_text() {
        let mut store = PartyStore::new();
        let id = create(&mut store, "Trip").unwrap().id;

        let before = chrono::Local::now().date_naive();
        let entry = record_entry(&mut store, id, "Payment", "40.5").unwrap();
        let after = chrono::Local::now().date_naive();

        assert_eq!(entry.entry_type, EntryType::Payment);
        assert_eq!(entry.amount, Money::from_cents(4050));
        assert!(before <= entry.date && entry.date <= after);
    }

    #[test]
    fn test_record_entry_rejects_bad_input_without_mutation() {
        let mut store = PartyStore::new();
        let id = create(&mut store, "Trip").unwrap().id;

        let cases = [
            ("refund", "10"),
            ("purchase", ""),
            ("purchase", "ten"),
            ("purchase", "0"),
            ("payment", "-5"),
        ];
        for (raw_type, raw_amount) in cases {
            let err = record_entry(&mut store, id, raw_type, raw_amount).unwrap_err();
            assert!(err.is_invalid_input(), "{raw_type} {raw_amount}: {err}");
        }
        assert_eq!(store.get(id).unwrap().entry_count(), 0);
    }

    #[test]
    fn test_invalid_type_lists_choices() {
        let err = parse_entry_type("gift").unwrap_err();
        assert_eq!(
            err.to_string(),
            "Invalid input: Invalid entry type: 'gift'. Valid types: purchase, payment, return"
        );
    }

    #[test]
    fn test_find_and_balance() {
        let mut store = PartyStore::new();
        let id = create(&mut store, "Trip").unwrap().id;
        record_entry(&mut store, id, "purchase", "100").unwrap();
        record_entry(&mut store, id, "payment", "40").unwrap();
        record_entry(&mut store, id, "return", "10").unwrap();

        let service = PartyService::new(&store);
        assert_eq!(service.find("TRIP").unwrap().id, id);
        assert_eq!(service.balance(id).unwrap(), Money::from_units(-50));
        assert!(service.find("Nope").unwrap_err().is_not_found());
        assert!(service.balance(PartyId::new()).unwrap_err().is_not_found());
        assert!(service.summary(PartyId::new()).unwrap_err().is_not_found());
    }

    #[test]
    fn test_list_with_balances_in_creation_order() {
        let mut store = PartyStore::new();
        let a = create(&mut store, "A").unwrap().id;
        create(&mut store, "B").unwrap();
        record_entry(&mut store, a, "purchase", "50").unwrap();

        let summaries = PartyService::new(&store).list_with_balances();
        assert_eq!(summaries.len(), 2);
        assert_eq!(summaries[0].party.name, "A");
        assert_eq!(summaries[0].balance, Money::from_units(-50));
        assert_eq!(summaries[1].party.name, "B");
        assert_eq!(summaries[1].balance, Money::zero());
    }
}
