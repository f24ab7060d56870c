//! History Grouping
//!
//! Buckets activity entries by calendar day for the History tab and the
//! shopping list's completed purchases.

use chrono::{DateTime, NaiveDate, TimeZone, Utc};

use crate::models::{CompletedPurchase, HistoryEntry};

/// Group entries by calendar day in `tz`. Groups appear in the order their
/// first entry is encountered; entries keep their relative order.
pub fn group_by_day<Tz: TimeZone>(entries: &[HistoryEntry], tz: &Tz) -> Vec<(NaiveDate, Vec<HistoryEntry>)> {
    group_by(entries, |e| e.date.with_timezone(tz).date_naive())
}

/// Completed purchases grouped by purchase date
pub fn group_purchases(purchases: &[CompletedPurchase]) -> Vec<(NaiveDate, Vec<CompletedPurchase>)> {
    group_by(purchases, |p| p.purchase_date)
}

fn group_by<T: Clone>(items: &[T], key: impl Fn(&T) -> NaiveDate) -> Vec<(NaiveDate, Vec<T>)> {
    let mut groups: Vec<(NaiveDate, Vec<T>)> = Vec::new();
    for item in items {
        let day = key(item);
        match groups.iter_mut().find(|(d, _)| *d == day) {
            Some((_, bucket)) => bucket.push(item.clone()),
            None => groups.push((day, vec![item.clone()])),
        }
    }
    groups
}

/// "December 5, 2023"
pub fn format_day(day: NaiveDate) -> String {
    day.format("%B %-d, %Y").to_string()
}

/// "10:30 AM"
pub fn format_time<Tz: TimeZone>(at: &DateTime<Utc>, tz: &Tz) -> String
where
    Tz::Offset: std::fmt::Display,
{
    at.with_timezone(tz).format("%-I:%M %p").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures;
    use crate::models::HistoryAction;
    use chrono::FixedOffset;

    fn entry(id: u32, date: &str) -> HistoryEntry {
        HistoryEntry {
            id,
            action: HistoryAction::Added,
            item: format!("Item {}", id),
            quantity: 1,
            unit: "pieces".into(),
            category: "Pantry".into(),
            date: date.parse().unwrap(),
            user: "Tester".into(),
        }
    }

    #[test]
    fn groups_in_encounter_order() {
        let entries = vec![
            entry(1, "2023-12-05T10:00:00Z"),
            entry(2, "2023-12-03T10:00:00Z"),
            entry(3, "2023-12-05T08:00:00Z"),
            entry(4, "2023-12-04T10:00:00Z"),
        ];
        let groups = group_by_day(&entries, &Utc);
        let days: Vec<String> = groups.iter().map(|(d, _)| d.to_string()).collect();
        assert_eq!(days, vec!["2023-12-05", "2023-12-03", "2023-12-04"]);
        let first: Vec<u32> = groups[0].1.iter().map(|e| e.id).collect();
        assert_eq!(first, vec![1, 3]);
    }

    #[test]
    fn timezone_moves_entries_across_days() {
        let entries = vec![entry(1, "2023-12-05T02:00:00Z"), entry(2, "2023-12-05T10:00:00Z")];
        assert_eq!(group_by_day(&entries, &Utc).len(), 1);
        let pacific = FixedOffset::west_opt(8 * 3600).unwrap();
        let groups = group_by_day(&entries, &pacific);
        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].0.to_string(), "2023-12-04");
    }

    #[test]
    fn fixture_history_has_one_entry_per_day() {
        let entries = fixtures::history().unwrap().entries;
        let groups = group_by_day(&entries, &Utc);
        assert_eq!(groups.len(), entries.len());
        assert_eq!(format_day(groups[0].0), "December 5, 2023");
    }

    #[test]
    fn purchases_group_by_date() {
        let completed = fixtures::shopping_list().unwrap().completed;
        let groups = group_purchases(&completed);
        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].1.len(), 2);
        assert_eq!(format_day(groups[1].0), "November 25, 2023");
    }

    #[test]
    fn formats_twelve_hour_time() {
        let at: DateTime<Utc> = "2023-12-05T14:05:00Z".parse().unwrap();
        assert_eq!(format_time(&at, &Utc), "2:05 PM");
    }
}
