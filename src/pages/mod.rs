//! Routed Views
//!
//! One module per route. Each view decodes its own fixture and keeps its
//! state in local signals.

mod categories;
mod dashboard;
mod history;
mod household_detail;
mod households;
mod inventory;
mod not_found;
mod settings;
mod shopping_list;

pub use categories::CategoriesPage;
pub use dashboard::DashboardPage;
pub use history::HistoryPage;
pub use household_detail::HouseholdDetailPage;
pub use households::HouseholdsPage;
pub use inventory::InventoryPage;
pub use not_found::NotFound;
pub use settings::SettingsPage;
pub use shopping_list::ShoppingListPage;
