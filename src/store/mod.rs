//! In-memory party store
//!
//! `PartyStore` owns the session's parties and is the only place they are
//! created or appended to. It is an ordinary value: construct it once and
//! hand out `&PartyStore` for reads and `&mut PartyStore` for writes.
//! Nothing is persisted; the ledger lives as long as the store does.

use crate::audit::{AuditEntry, AuditLogger, EntityType};
use crate::error::{LedgerError, LedgerResult};
use crate::models::{party, Entry, Money, NewEntry, Party, PartyId};

/// Ordered, append-only collection of parties
#[derive(Debug, Default)]
pub struct PartyStore {
    parties: Vec<Party>,
    audit: Option<AuditLogger>,
}

impl PartyStore {
    /// Create an empty store with no audit trail
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty store that records every creation in `logger`
    pub fn with_audit(logger: AuditLogger) -> Self {
        Self {
            parties: Vec::new(),
            audit: Some(logger),
        }
    }

    /// Append a new party
    ///
    /// The name is trimmed before it is validated and stored. If an audit
    /// logger is attached and the write fails, the store is left unchanged.
    pub fn add_party(&mut self, name: &str) -> LedgerResult<Party> {
        let name = name.trim();
        party::validate_name(name).map_err(|e| LedgerError::InvalidInput(e.to_string()))?;

        let party = Party::new(name);
        self.record(AuditEntry::create(
            EntityType::Party,
            party.id.to_string(),
            Some(party.name.clone()),
            &party,
        ))?;

        self.parties.push(party.clone());
        Ok(party)
    }

    /// Append an entry to the party with `party_id`
    ///
    /// Fails with `NotFound` for an unknown id. Fails with `InvalidInput` for
    /// a non-positive amount, or when the party's purchase or credit total
    /// would no longer fit in `Money`. The store is unchanged on failure.
    pub fn add_entry(&mut self, party_id: PartyId, new: NewEntry) -> LedgerResult<Entry> {
        new.validate()
            .map_err(|e| LedgerError::InvalidInput(e.to_string()))?;

        let index = self
            .parties
            .iter()
            .position(|p| p.id == party_id)
            .ok_or_else(|| LedgerError::party_not_found(party_id.to_string()))?;

        if !totals_fit(&self.parties[index].entries, &new) {
            return Err(LedgerError::InvalidInput(format!(
                "Amount {} would overflow the totals for '{}'",
                new.amount, self.parties[index].name
            )));
        }

        let entry = Entry::from_new(new);
        self.record(AuditEntry::create(
            EntityType::Entry,
            entry.id.to_string(),
            Some(self.parties[index].name.clone()),
            &entry,
        ))?;

        let party = &mut self.parties[index];
        party.entries.push(entry.clone());
        Ok(entry)
    }

    /// All parties, in creation order
    pub fn parties(&self) -> &[Party] {
        &self.parties
    }

    /// Look up a party by id
    pub fn get(&self, party_id: PartyId) -> Option<&Party> {
        self.parties.iter().find(|p| p.id == party_id)
    }

    /// Find a party by name (case-insensitive), full id, or short display id
    pub fn find(&self, identifier: &str) -> Option<&Party> {
        let identifier = identifier.trim();
        if identifier.is_empty() {
            return None;
        }

        let name_lower = identifier.to_lowercase();
        if let Some(party) = self
            .parties
            .iter()
            .find(|p| p.name.to_lowercase() == name_lower)
        {
            return Some(party);
        }

        if let Ok(id) = identifier.parse::<PartyId>() {
            return self.get(id);
        }

        self.parties.iter().find(|p| p.id.matches_short(identifier))
    }

    pub fn len(&self) -> usize {
        self.parties.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parties.is_empty()
    }

    /// The attached audit logger, if any
    pub fn audit_logger(&self) -> Option<&AuditLogger> {
        self.audit.as_ref()
    }

    fn record(&self, entry: AuditEntry) -> LedgerResult<()> {
        match &self.audit {
            Some(logger) => logger.log(&entry),
            None => Ok(()),
        }
    }
}

/// Whether the purchase and credit totals stay in range once `new` is added
///
/// Both totals are non-negative, so any running balance between them is in
/// range as well.
fn totals_fit(entries: &[Entry], new: &NewEntry) -> bool {
    let mut purchases = Money::zero();
    let mut credits = Money::zero();

    let amounts = entries
        .iter()
        .map(|e| (e.entry_type, e.amount))
        .chain(std::iter::once((new.entry_type, new.amount)));
    for (entry_type, amount) in amounts {
        let total = if entry_type.is_credit() {
            &mut credits
        } else {
            &mut purchases
        };
        match total.checked_add(amount) {
            Some(sum) => *total = sum,
            None => return false,
        }
    }

    true
}
