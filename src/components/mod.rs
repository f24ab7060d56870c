//! UI Components
//!
//! Reusable Leptos components shared by the pages.

mod layout;
mod sidebar;
mod notifications_panel;
mod toaster;
mod modal;
mod search_input;
mod delete_confirm_button;
mod unit_selector;
mod category_selector;
mod color_picker;
mod progress_bar;
mod tab_bar;
mod charts;

pub use layout::MainLayout;
pub use sidebar::AppSidebar;
pub use notifications_panel::NotificationsPanel;
pub use toaster::Toaster;
pub use modal::Modal;
pub use search_input::SearchInput;
pub use delete_confirm_button::DeleteConfirmButton;
pub use unit_selector::UnitSelector;
pub use category_selector::CategorySelector;
pub use color_picker::{ColorPicker, COLORS};
pub use progress_bar::ProgressBar;
pub use tab_bar::{tab, TabBar};
pub use charts::{BarChart, LineChart, PieChart};
