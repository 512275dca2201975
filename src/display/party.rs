//! Party display formatting
//!
//! Formats parties and their entries for terminal output in table and
//! detail views.

use crate::models::{Entry, Money};
use crate::services::PartySummary;

/// Format a list of parties with balances as a table
pub fn format_party_list(summaries: &[PartySummary], symbol: &str) -> String {
    if summaries.is_empty() {
        return "No parties yet. Add one with: party add <name>\n".to_string();
    }

    let name_width = summaries
        .iter()
        .map(|s| s.party.name.chars().count())
        .max()
        .unwrap_or(4)
        .max(5);

    let mut output = String::new();
    output.push_str(&format!(
        "{:<12}  {:<name_width$}  {:>7}  {:>14}\n",
        "ID",
        "Party",
        "Entries",
        "Balance",
        name_width = name_width,
    ));
    output.push_str(&separator(name_width));

    for summary in summaries {
        output.push_str(&format!(
            "{:<12}  {:<name_width$}  {:>7}  {:>14}\n",
            summary.party.id.to_string(),
            summary.party.name,
            summary.entry_count,
            summary.balance.format_with_symbol(symbol),
            name_width = name_width,
        ));
    }

    let total = summaries
        .iter()
        .try_fold(Money::zero(), |acc, s| acc.checked_add(s.balance))
        .map_or_else(|| "out of range".to_string(), |t| t.format_with_symbol(symbol));
    let total_entries: usize = summaries.iter().map(|s| s.entry_count).sum();
    output.push_str(&separator(name_width));
    output.push_str(&format!(
        "{:<12}  {:<name_width$}  {:>7}  {:>14}\n",
        "TOTAL",
        "",
        total_entries,
        total,
        name_width = name_width,
    ));

    output
}

fn separator(name_width: usize) -> String {
    format!(
        "{:-<12}  {:-<name_width$}  {:->7}  {:->14}\n",
        "",
        "",
        "",
        "",
        name_width = name_width,
    )
}

/// Format one entry as a register row: type, amount, date
pub fn format_entry_row(entry: &Entry, symbol: &str, date_format: &str) -> String {
    format!(
        "{:<10} {:>14}  {}",
        entry.entry_type.as_str().to_uppercase(),
        entry.amount.format_with_symbol(symbol),
        entry.date.format(date_format)
    )
}

/// Format a party's detail view: header, balance, then every entry
pub fn format_party_details(summary: &PartySummary, symbol: &str, date_format: &str) -> String {
    let mut output = String::new();

    output.push_str(&format!("Party: {}\n", summary.party.name));
    output.push_str(&format!("ID: {}\n", summary.party.id));
    output.push_str(&format!(
        "Balance: {}\n",
        summary.balance.format_with_symbol(symbol)
    ));
    output.push_str(&format!(
        "Purchases: {}  Credits: {}\n",
        summary.purchases.format_with_symbol(symbol),
        summary.credits.format_with_symbol(symbol)
    ));
    output.push('\n');

    if summary.party.entries.is_empty() {
        output.push_str("No entries yet.\n");
        return output;
    }

    for entry in &summary.party.entries {
        output.push_str(&format_entry_row(entry, symbol, date_format));
        output.push('\n');
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{EntryType, NewEntry};
    use crate::services::summarize;
    use crate::store::PartyStore;
    use chrono::NaiveDate;

    fn trip_store() -> PartyStore {
        let mut store = PartyStore::new();
        let id = store.add_party("Trip").unwrap().id;
        let date = NaiveDate::from_ymd_opt(2025, 4, 9).unwrap();
        for (entry_type, units) in [
            (EntryType::Purchase, 100),
            (EntryType::Payment, 40),
            (EntryType::Return, 10),
        ] {
            store
                .add_entry(id, NewEntry::new(entry_type, Money::from_units(units), date))
                .unwrap();
        }
        store
    }

    #[test]
    fn test_empty_list() {
        assert!(format_party_list(&[], "₹").starts_with("No parties yet"));
    }

    #[test]
    fn test_list_shows_balances_and_total() {
        let mut store = trip_store();
        store.add_party("Flatmates").unwrap();
        let summaries: Vec<_> = store.parties().iter().map(summarize).collect();

        let output = format_party_list(&summaries, "₹");
        let lines: Vec<_> = output.lines().collect();

        assert!(lines[0].contains("Party"));
        assert!(lines[2].contains("Trip") && lines[2].ends_with("₹-50.00"));
        assert!(lines[3].contains("Flatmates") && lines[3].ends_with("₹0.00"));
        assert!(lines[5].starts_with("TOTAL") && lines[5].ends_with("₹-50.00"));
    }

    #[test]
    fn test_total_out_of_range() {
        let mut parties = Vec::new();
        for name in ["A", "B"] {
            let mut summary = summarize(&crate::models::Party::new(name));
            summary.balance = Money::from_cents(i64::MAX);
            parties.push(summary);
        }

        let output = format_party_list(&parties, "₹");
        let total = output.lines().last().unwrap();
        assert!(total.starts_with("TOTAL") && total.ends_with("out of range"));
    }

    #[test]
    fn test_entry_row() {
        let store = trip_store();
        let entry = &store.parties()[0].entries[0];
        assert_eq!(
            format_entry_row(entry, "₹", "%d/%m/%Y"),
            "PURCHASE          ₹100.00  09/04/2025"
        );
    }

    #[test]
    fn test_details() {
        let store = trip_store();
        let summary = summarize(&store.parties()[0]);

        let output = format_party_details(&summary, "$", "%Y-%m-%d");
        let lines: Vec<_> = output.lines().collect();
        assert_eq!(lines[0], "Party: Trip");
        assert_eq!(lines[2], "Balance: $-50.00");
        assert_eq!(lines[3], "Purchases: $100.00  Credits: $50.00");
        assert!(output.contains("PAYMENT"));
        assert!(output.contains("RETURN"));
        assert!(output.contains("2025-04-09"));
        assert_eq!(output.lines().filter(|l| l.ends_with("2025-04-09")).count(), 3);
    }

    #[test]
    fn test_details_without_entries() {
        let mut store = PartyStore::new();
        store.add_party("Empty").unwrap();
        let summary = summarize(&store.parties()[0]);

        let output = format_party_details(&summary, "₹", "%d/%m/%Y");
        assert!(output.contains("Balance: ₹0.00\n"));
        assert!(output.ends_with("No entries yet.\n"));
    }
}
