//! LifeStock Frontend App
//!
//! Provides the shared context and store, then routes every page inside the
//! layout shell.

use leptos::prelude::*;
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;
use reactive_stores::Store;

use crate::components::MainLayout;
use crate::config::Settings;
use crate::context::AppContext;
use crate::pages::{
    CategoriesPage, DashboardPage, HistoryPage, HouseholdDetailPage, HouseholdsPage, InventoryPage,
    NotFound, SettingsPage, ShoppingListPage,
};
use crate::store::SettingsState;
use crate::toast::ToastQueue;

#[component]
pub fn App() -> impl IntoView {
    // Provide context to all children
    provide_context(AppContext::new(signal(ToastQueue::default()), signal(false)));
    provide_context(Store::new(SettingsState::from(Settings::load())));

    view! {
        <Router>
            <MainLayout>
                <Routes fallback=|| view! { <NotFound /> }>
                    <Route path=path!("/") view=DashboardPage />
                    <Route path=path!("/inventory") view=InventoryPage />
                    <Route path=path!("/categories") view=CategoriesPage />
                    <Route path=path!("/shopping-list") view=ShoppingListPage />
                    <Route path=path!("/history") view=HistoryPage />
                    <Route path=path!("/households") view=HouseholdsPage />
                    <Route path=path!("/households/:id") view=HouseholdDetailPage />
                    <Route path=path!("/settings") view=SettingsPage />
                </Routes>
            </MainLayout>
        </Router>
    }
}
