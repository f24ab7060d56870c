//! Frontend Models
//!
//! Plain records rendered by the views. Nothing here is persisted; every
//! view owns its own copy decoded from the fixtures.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// Anything that can be matched by the name search box
pub trait Named {
    fn name(&self) -> &str;
}

macro_rules! impl_named {
    ($($ty:ty),* $(,)?) => {
        $(impl Named for $ty {
            fn name(&self) -> &str {
                &self.name
            }
        })*
    };
}

/// Stock status reported by the inventory fixture
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StockStatus {
    Ok,
    Expiring,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InventoryItem {
    pub id: u32,
    pub name: String,
    pub category: String,
    pub quantity: f64,
    pub unit: String,
    pub expiry_date: Option<NaiveDate>,
    pub reorder_point: f64,
    pub status: StockStatus,
}

impl InventoryItem {
    /// Quantity at or below the reorder point
    pub fn is_low_stock(&self) -> bool {
        self.quantity <= self.reorder_point
    }

    pub fn is_expiring(&self) -> bool {
        self.status == StockStatus::Expiring
    }

    /// Table row identity; any edited field yields a new key so the row is
    /// rebuilt
    pub fn row_key(&self) -> InventoryRowKey {
        (
            self.id,
            self.name.clone(),
            self.category.clone(),
            self.unit.clone(),
            self.quantity.to_bits(),
            self.reorder_point.to_bits(),
            self.expiry_date,
            self.status,
        )
    }
}

pub type InventoryRowKey = (u32, String, String, String, u64, u64, Option<NaiveDate>, StockStatus);

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    pub id: u32,
    pub name: String,
    pub color: String,
    pub item_count: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShoppingListEntry {
    pub id: u32,
    pub name: String,
    pub quantity: u32,
    pub unit: String,
    pub category: String,
    #[serde(default)]
    pub checked: bool,
    pub notes: Option<String>,
    #[serde(default)]
    pub low_stock: bool,
}

/// Entry on the shopping list's "Completed History" tab
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompletedPurchase {
    pub id: u32,
    pub name: String,
    pub quantity: u32,
    pub unit: String,
    pub category: String,
    pub purchase_date: NaiveDate,
    pub notes: Option<String>,
}

/// Household membership role, ordered from most to least privileged
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Owner,
    Admin,
    Member,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Owner => "owner",
            Role::Admin => "admin",
            Role::Member => "member",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "owner" => Some(Role::Owner),
            "admin" => Some(Role::Admin),
            "member" => Some(Role::Member),
            _ => None,
        }
    }

    pub fn badge_class(&self) -> &'static str {
        match self {
            Role::Owner => "badge badge-default",
            Role::Admin => "badge badge-secondary",
            Role::Member => "badge badge-outline",
        }
    }
}

/// Summary card on the households list
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Household {
    pub id: u32,
    pub name: String,
    pub role: Role,
    pub members: u32,
    pub inventory_items: u32,
    pub low_stock_items: u32,
    pub categories: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Invitation {
    pub id: u32,
    pub name: String,
    pub invited_by: String,
    pub date: NaiveDate,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MemberStatus {
    Active,
    Pending,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Member {
    pub id: u32,
    pub name: String,
    pub email: String,
    pub role: Role,
    pub status: MemberStatus,
}

/// Per-category row of an inventory summary
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategorySummary {
    pub category: String,
    pub item_count: u32,
    pub low_stock: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HouseholdDetail {
    pub id: u32,
    pub name: String,
    pub role: Role,
    pub members: Vec<Member>,
    pub inventory_summary: Vec<CategorySummary>,
    pub categories: u32,
    pub inventory_items: u32,
    pub shopping_list_items: u32,
    pub low_stock_items: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HistoryAction {
    Added,
    Removed,
    Expired,
}

impl HistoryAction {
    pub const ALL: [HistoryAction; 3] = [
        HistoryAction::Added,
        HistoryAction::Removed,
        HistoryAction::Expired,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            HistoryAction::Added => "added",
            HistoryAction::Removed => "removed",
            HistoryAction::Expired => "expired",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|a| a.as_str() == value)
    }

    pub fn label(&self) -> &'static str {
        match self {
            HistoryAction::Added => "Added",
            HistoryAction::Removed => "Removed",
            HistoryAction::Expired => "Expired",
        }
    }

    pub fn badge_class(&self) -> &'static str {
        match self {
            HistoryAction::Added => "badge action-added",
            HistoryAction::Removed => "badge action-removed",
            HistoryAction::Expired => "badge action-expired",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub id: u32,
    pub action: HistoryAction,
    pub item: String,
    pub quantity: u32,
    pub unit: String,
    pub category: String,
    pub date: DateTime<Utc>,
    pub user: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum NotificationKind {
    LowStock,
    Expiration,
    Shopping,
    Invitation,
}

impl NotificationKind {
    pub fn icon(&self) -> &'static str {
        match self {
            NotificationKind::LowStock => "📦",
            NotificationKind::Expiration => "⏰",
            NotificationKind::Shopping => "🛒",
            NotificationKind::Invitation => "🏠",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Notification {
    pub id: u32,
    pub title: String,
    pub description: String,
    pub timestamp: String,
    pub kind: NotificationKind,
    pub read: bool,
}

/// One slice of the consumption-by-category pie
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryConsumption {
    pub name: String,
    pub value: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthlyActivity {
    pub name: String,
    pub added: u32,
    pub removed: u32,
    pub expired: u32,
}

/// Most used / most wasted ranking row
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UsageStat {
    pub name: String,
    pub frequency: u32,
    pub category: String,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DashboardStats {
    pub total_items: u32,
    pub low_stock_items: u32,
    pub expiring_items: u32,
    pub categories: u32,
    pub shopping_list_items: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActivityKind {
    Inventory,
    Shopping,
    Alert,
    Category,
}

impl ActivityKind {
    pub fn icon(&self) -> &'static str {
        match self {
            ActivityKind::Inventory => "📦",
            ActivityKind::Shopping => "🛒",
            ActivityKind::Alert => "⚠",
            ActivityKind::Category => "🏷",
        }
    }
}

/// Line in the dashboard's recent activity card
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecentActivity {
    pub title: String,
    pub detail: String,
    pub when: String,
    pub kind: ActivityKind,
}

impl_named!(InventoryItem, Category, ShoppingListEntry, Household);

/// Units offered by the add-item dialogs: (value, label)
pub const UNITS: &[(&str, &str)] = &[
    ("pieces", "Pieces"),
    ("kg", "Kilograms"),
    ("g", "Grams"),
    ("lb", "Pounds"),
    ("oz", "Ounces"),
    ("l", "Liters"),
    ("ml", "Milliliters"),
    ("gallon", "Gallons"),
    ("boxes", "Boxes"),
    ("bottles", "Bottles"),
    ("cans", "Cans"),
    ("rolls", "Rolls"),
    ("packs", "Packs"),
];

/// Category names offered by the item dialogs and filters
pub const CATEGORY_NAMES: &[&str] = &[
    "Pantry",
    "Refrigerator",
    "Freezer",
    "Household",
    "Office Supplies",
];

#[cfg(test)]
mod tests {
    use super::*;

    fn milk() -> InventoryItem {
        InventoryItem {
            id: 1,
            name: "Milk".into(),
            category: "Refrigerator".into(),
            quantity: 1.0,
            unit: "gallon".into(),
            expiry_date: None,
            reorder_point: 1.0,
            status: StockStatus::Ok,
        }
    }

    #[test]
    fn low_stock_is_inclusive_of_reorder_point() {
        let mut item = milk();
        assert!(item.is_low_stock());
        item.quantity = 1.5;
        assert!(!item.is_low_stock());
    }

    #[test]
    fn row_key_changes_with_every_editable_field() {
        let original = milk();
        assert_eq!(original.row_key(), milk().row_key());

        let edits: [fn(&mut InventoryItem); 6] = [
            |i| i.name = "Oat Milk".into(),
            |i| i.category = "Pantry".into(),
            |i| i.unit = "liters".into(),
            |i| i.quantity = 2.0,
            |i| i.reorder_point = 3.0,
            |i| i.expiry_date = NaiveDate::from_ymd_opt(2024, 1, 5),
        ];
        for edit in edits {
            let mut edited = milk();
            edit(&mut edited);
            assert_ne!(edited.row_key(), original.row_key(), "{:?}", edited);
        }
    }

    #[test]
    fn raising_reorder_point_flips_low_stock_and_key() {
        let mut rice = milk();
        rice.quantity = 2.0;
        let before = rice.row_key();
        assert!(!rice.is_low_stock());
        rice.reorder_point = 5.0;
        assert!(rice.is_low_stock());
        assert_ne!(rice.row_key(), before);
    }

    #[test]
    fn history_action_parses_its_own_names() {
        for action in HistoryAction::ALL {
            assert_eq!(HistoryAction::parse(action.as_str()), Some(action));
        }
        assert_eq!(HistoryAction::parse(""), None);
    }

    #[test]
    fn role_round_trips_through_serde() {
        let json = serde_json::to_string(&Role::Admin).unwrap();
        assert_eq!(json, "\"admin\"");
        assert_eq!(Role::parse("admin"), Some(Role::Admin));
    }
}
