//! List Filtering
//!
//! Search box and dropdown filters shared by the list views. All filters
//! preserve source order.

use chrono::{NaiveDate, TimeZone};

use crate::models::{HistoryAction, HistoryEntry, InventoryItem, Named};

/// Case-insensitive substring match. An empty query matches everything.
pub fn matches_query(name: &str, query: &str) -> bool {
    if query.is_empty() {
        return true;
    }
    name.to_lowercase().contains(&query.to_lowercase())
}

/// Records whose name matches `query`
pub fn filter_by_name<T: Named + Clone>(items: &[T], query: &str) -> Vec<T> {
    items
        .iter()
        .filter(|item| matches_query(item.name(), query))
        .cloned()
        .collect()
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum CategoryFilter {
    #[default]
    All,
    Named(String),
}

impl CategoryFilter {
    /// Dropdown value; "All" maps back to [`CategoryFilter::All`]
    pub fn from_label(label: &str) -> Self {
        if label == "All" || label.is_empty() {
            CategoryFilter::All
        } else {
            CategoryFilter::Named(label.to_string())
        }
    }

    pub fn matches(&self, category: &str) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Named(name) => name == category,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum StatusFilter {
    #[default]
    All,
    LowStock,
    Expiring,
}

impl StatusFilter {
    pub const ALL: [StatusFilter; 3] = [StatusFilter::All, StatusFilter::LowStock, StatusFilter::Expiring];

    pub fn label(&self) -> &'static str {
        match self {
            StatusFilter::All => "All Items",
            StatusFilter::LowStock => "Low Stock",
            StatusFilter::Expiring => "Expiring Soon",
        }
    }

    pub fn matches(&self, item: &InventoryItem) -> bool {
        match self {
            StatusFilter::All => true,
            StatusFilter::LowStock => item.is_low_stock(),
            StatusFilter::Expiring => item.is_expiring(),
        }
    }
}

/// Inventory table filters
#[derive(Debug, Clone, Default, PartialEq)]
pub struct InventoryFilter {
    pub query: String,
    pub category: CategoryFilter,
    pub status: StatusFilter,
}

impl InventoryFilter {
    pub fn matches(&self, item: &InventoryItem) -> bool {
        matches_query(&item.name, &self.query)
            && self.category.matches(&item.category)
            && self.status.matches(item)
    }

    pub fn apply(&self, items: &[InventoryItem]) -> Vec<InventoryItem> {
        items.iter().filter(|i| self.matches(i)).cloned().collect()
    }

    /// Whether anything narrows the table
    pub fn is_active(&self) -> bool {
        !self.query.is_empty() || self.category != CategoryFilter::All || self.status != StatusFilter::All
    }
}

/// History tab filters. `None` means "any".
#[derive(Debug, Clone, Default, PartialEq)]
pub struct HistoryFilter {
    pub date: Option<NaiveDate>,
    pub category: Option<String>,
    pub action: Option<HistoryAction>,
}

impl HistoryFilter {
    /// Date comparison happens on the calendar day in `tz`
    pub fn matches<Tz: TimeZone>(&self, entry: &HistoryEntry, tz: &Tz) -> bool {
        if let Some(date) = self.date {
            if entry.date.with_timezone(tz).date_naive() != date {
                return false;
            }
        }
        if let Some(category) = &self.category {
            if &entry.category != category {
                return false;
            }
        }
        if let Some(action) = self.action {
            if entry.action != action {
                return false;
            }
        }
        true
    }

    pub fn apply<Tz: TimeZone>(&self, entries: &[HistoryEntry], tz: &Tz) -> Vec<HistoryEntry> {
        entries.iter().filter(|e| self.matches(e, tz)).cloned().collect()
    }

    pub fn is_active(&self) -> bool {
        self.date.is_some() || self.category.is_some() || self.action.is_some()
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures;
    use chrono::Utc;

    fn inventory() -> Vec<InventoryItem> {
        fixtures::inventory_items().unwrap()
    }

    fn names(items: &[InventoryItem]) -> Vec<&str> {
        items.iter().map(|i| i.name.as_str()).collect()
    }

    #[test]
    fn empty_filter_keeps_everything() {
        let items = inventory();
        let filter = InventoryFilter::default();
        assert!(!filter.is_active());
        assert_eq!(filter.apply(&items), items);
    }

    #[test]
    fn search_is_case_insensitive_substring() {
        let filter = InventoryFilter {
            query: "ChIcK".into(),
            ..Default::default()
        };
        assert_eq!(names(&filter.apply(&inventory())), vec!["Chicken Breast"]);
        assert!(filter.is_active());
    }

    #[test]
    fn search_result_is_exactly_the_matching_subset() {
        let items = inventory();
        for query in ["", "a", "E", "pa", "xyz", "milk", " "] {
            let filter = InventoryFilter {
                query: query.into(),
                ..Default::default()
            };
            let expected: Vec<InventoryItem> = items
                .iter()
                .filter(|i| i.name.to_lowercase().contains(&query.to_lowercase()))
                .cloned()
                .collect();
            assert_eq!(filter.apply(&items), expected, "query {query:?}");
        }
    }

    #[test]
    fn category_and_status_intersect_with_search() {
        let items = inventory();
        let filter = InventoryFilter {
            query: String::new(),
            category: CategoryFilter::Named("Refrigerator".into()),
            status: StatusFilter::Expiring,
        };
        assert_eq!(names(&filter.apply(&items)), vec!["Yogurt"]);

        let filter = InventoryFilter {
            query: "e".into(),
            category: CategoryFilter::Named("Pantry".into()),
            status: StatusFilter::All,
        };
        assert_eq!(names(&filter.apply(&items)), vec!["Rice", "Bread"]);

        let filter = InventoryFilter {
            status: StatusFilter::LowStock,
            ..Default::default()
        };
        assert_eq!(names(&filter.apply(&items)), vec!["Milk", "Chicken Breast"]);
    }

    #[test]
    fn category_filter_from_dropdown_value() {
        assert_eq!(CategoryFilter::from_label("All"), CategoryFilter::All);
        assert_eq!(CategoryFilter::from_label(""), CategoryFilter::All);
        assert_eq!(CategoryFilter::from_label("Freezer"), CategoryFilter::Named("Freezer".into()));
    }

    #[test]
    fn filter_by_name_works_for_categories() {
        let categories = fixtures::categories().unwrap();
        let hits = filter_by_name(&categories, "RE");
        let names: Vec<&str> = hits.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["Refrigerator", "Freezer"]);
    }

    #[test]
    fn history_filter_by_date_category_and_action() {
        let entries = fixtures::history().unwrap().entries;
        let mut filter = HistoryFilter {
            category: Some("Refrigerator".into()),
            ..Default::default()
        };
        assert_eq!(filter.apply(&entries, &Utc).len(), 4);

        filter.action = Some(HistoryAction::Removed);
        let hits = filter.apply(&entries, &Utc);
        let items: Vec<&str> = hits.iter().map(|e| e.item.as_str()).collect();
        assert_eq!(items, vec!["Eggs", "Apples"]);

        filter.clear();
        filter.date = NaiveDate::from_ymd_opt(2023, 12, 1);
        let hits = filter.apply(&entries, &Utc);
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].item, "Yogurt");

        filter.clear();
        assert!(!filter.is_active());
        assert_eq!(filter.apply(&entries, &Utc).len(), entries.len());
    }
}
