//! Mock Data Fixtures
//!
//! JSON datasets under `data/` compiled into the binary. Views call the
//! `load_*` helpers, which log and fall back to an empty dataset instead of
//! failing the render.

use serde::de::DeserializeOwned;
use serde::Deserialize;

use crate::error::{DataError, DataResult};
use crate::models::*;

const INVENTORY_JSON: &str = include_str!("../data/inventory.json");
const CATEGORIES_JSON: &str = include_str!("../data/categories.json");
const SHOPPING_LIST_JSON: &str = include_str!("../data/shopping_list.json");
const HOUSEHOLDS_JSON: &str = include_str!("../data/households.json");
const HISTORY_JSON: &str = include_str!("../data/history.json");
const DASHBOARD_JSON: &str = include_str!("../data/dashboard.json");
const NOTIFICATIONS_JSON: &str = include_str!("../data/notifications.json");

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ShoppingListData {
    pub current: Vec<ShoppingListEntry>,
    pub completed: Vec<CompletedPurchase>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct HouseholdsData {
    pub households: Vec<Household>,
    pub invitations: Vec<Invitation>,
    pub detail: HouseholdDetail,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct HistoryData {
    pub entries: Vec<HistoryEntry>,
    pub consumption: Vec<CategoryConsumption>,
    pub monthly: Vec<MonthlyActivity>,
    pub most_used: Vec<UsageStat>,
    pub most_wasted: Vec<UsageStat>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct DashboardData {
    pub stats: DashboardStats,
    pub summary: Vec<CategorySummary>,
    pub activity: Vec<RecentActivity>,
}

fn decode<T: DeserializeOwned>(name: &'static str, json: &str) -> DataResult<T> {
    serde_json::from_str(json).map_err(|source| DataError::Fixture { name, source })
}

pub fn inventory_items() -> DataResult<Vec<InventoryItem>> {
    decode("inventory", INVENTORY_JSON)
}

pub fn categories() -> DataResult<Vec<Category>> {
    decode("categories", CATEGORIES_JSON)
}

pub fn shopping_list() -> DataResult<ShoppingListData> {
    decode("shopping_list", SHOPPING_LIST_JSON)
}

pub fn households() -> DataResult<HouseholdsData> {
    decode("households", HOUSEHOLDS_JSON)
}

pub fn history() -> DataResult<HistoryData> {
    decode("history", HISTORY_JSON)
}

pub fn dashboard() -> DataResult<DashboardData> {
    decode("dashboard", DASHBOARD_JSON)
}

pub fn notifications() -> DataResult<Vec<Notification>> {
    decode("notifications", NOTIFICATIONS_JSON)
}

/// Unwrap a fixture for rendering, logging the failure
pub fn or_log<T>(result: DataResult<T>, fallback: impl FnOnce() -> T) -> T {
    match result {
        Ok(data) => data,
        Err(e) => {
            tracing::error!(error = %e, "falling back to empty dataset");
            fallback()
        }
    }
}

pub fn load_or_default<T: Default>(result: DataResult<T>) -> T {
    or_log(result, T::default)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_fixture_decodes() {
        assert_eq!(inventory_items().unwrap().len(), 8);
        assert_eq!(categories().unwrap().len(), 8);
        let shopping = shopping_list().unwrap();
        assert_eq!(shopping.current.len(), 5);
        assert_eq!(shopping.completed.len(), 3);
        let households = households().unwrap();
        assert_eq!(households.households.len(), 3);
        assert_eq!(households.detail.members.len(), 3);
        let history = history().unwrap();
        assert_eq!(history.entries.len(), 8);
        assert_eq!(history.monthly.len(), 12);
        assert_eq!(dashboard().unwrap().summary.len(), 5);
        assert_eq!(notifications().unwrap().len(), 4);
    }

    #[test]
    fn inventory_low_stock_flags_match_fixture_intent() {
        let items = inventory_items().unwrap();
        let low: Vec<&str> = items
            .iter()
            .filter(|i| i.is_low_stock())
            .map(|i| i.name.as_str())
            .collect();
        assert_eq!(low, vec!["Milk", "Chicken Breast"]);
        let expiring: Vec<&str> = items
            .iter()
            .filter(|i| i.is_expiring())
            .map(|i| i.name.as_str())
            .collect();
        assert_eq!(expiring, vec!["Bread", "Yogurt"]);
    }

    #[test]
    fn malformed_fixture_reports_its_name() {
        let err = decode::<Vec<Category>>("broken", "[{").unwrap_err();
        assert!(err.to_string().contains("broken"));
    }

    #[test]
    fn or_log_uses_fallback_on_error() {
        let result: DataResult<Vec<u32>> = decode("broken", "nope");
        assert!(load_or_default(result).is_empty());
    }
}
