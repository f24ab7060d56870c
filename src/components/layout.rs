//! Main Layout Component
//!
//! Sidebar, header with the notifications bell, overlay panel and toasts
//! wrapped around the routed page.

use leptos::prelude::*;
use leptos_router::hooks::{use_location, use_navigate};

use crate::components::{AppSidebar, NotificationsPanel, Toaster};
use crate::config::{DefaultScreen, Theme};
use crate::context::use_app_context;
use crate::routes::Page;
use crate::store::{use_settings_store, SettingsStateStoreFields};

fn apply_theme(theme: Theme) {
    let Some(root) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.document_element())
    else {
        return;
    };
    if let Err(e) = root.set_attribute("data-theme", theme.as_str()) {
        tracing::warn!(?e, "could not apply theme");
    }
}

#[component]
pub fn MainLayout(children: Children) -> impl IntoView {
    let ctx = use_app_context();
    let store = use_settings_store();
    let (sidebar_collapsed, set_sidebar_collapsed) = signal(false);

    // Keep the document theme in step with settings
    Effect::new(move |_| {
        apply_theme(store.display().read().theme);
    });

    let pathname = use_location().pathname;
    Effect::new(move |_| {
        pathname.with(|path| tracing::debug!(%path, page = ?Page::resolve(path), "route changed"));
    });

    // Open on the preferred screen when the app starts at the root
    let navigate = use_navigate();
    Effect::new(move |prev: Option<()>| {
        if prev.is_some() {
            return;
        }
        let screen = store.display().read_untracked().default_screen;
        if screen != DefaultScreen::Dashboard && pathname.get_untracked() == "/" {
            tracing::info!(path = screen.path(), "opening default screen");
            navigate(screen.path(), Default::default());
        }
    });

    view! {
        <div class="app-layout">
            <AppSidebar collapsed=sidebar_collapsed />

            <div class="app-main">
                <header class="app-header">
                    <div class="row">
                        <button
                            class="btn ghost icon"
                            aria-label="Toggle sidebar"
                            on:click=move |_| set_sidebar_collapsed.update(|v| *v = !*v)
                        >
                            "☰"
                        </button>
                        <h1 class="app-title">"LifeStock"</h1>
                    </div>
                    <button
                        class="btn ghost icon bell"
                        aria-label="Notifications"
                        on:click=move |_| ctx.toggle_notifications()
                    >
                        "🔔"
                        <span class="bell-dot"></span>
                    </button>
                </header>

                <main class="app-content">
                    <div
                        class=move || if ctx.notifications_open.get() { "overlay visible" } else { "overlay" }
                        on:click=move |_| ctx.close_notifications()
                    ></div>
                    <div class=move || {
                        if ctx.notifications_open.get() { "notifications-drawer open" } else { "notifications-drawer" }
                    }>
                        <NotificationsPanel />
                    </div>

                    {children()}
                </main>
            </div>

            <Toaster />
        </div>
    }
}
