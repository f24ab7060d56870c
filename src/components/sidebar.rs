//! App Sidebar Component
//!
//! Collapsible navigation built from the route table.

use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_location;

use crate::config::Theme;
use crate::routes::{is_active, NAV_ITEMS};
use crate::store::{store_update_display, use_settings_store, SettingsStateStoreFields};

/// Footer theme menu; applies the pick immediately
#[component]
fn ThemeMenu(collapsed: ReadSignal<bool>) -> impl IntoView {
    let store = use_settings_store();
    let (menu_open, set_menu_open) = signal(false);
    let theme = move || store.display().read().theme;

    let pick = move |picked: Theme| {
        tracing::debug!(theme = picked.as_str(), "theme picked from sidebar");
        let display = store.display().get_untracked().with_theme(picked);
        store_update_display(&store, display);
        set_menu_open.set(false);
    };

    view! {
        <div class="sidebar-footer">
            <Show when=move || !collapsed.get()>
                <span class="muted tiny">"LifeStock v1.0"</span>
            </Show>
            <div class="theme-menu">
                <button
                    class="btn ghost icon"
                    aria-label="Toggle theme"
                    on:click=move |_| set_menu_open.update(|v| *v = !*v)
                >
                    {move || theme().icon()}
                </button>
                <Show when=move || menu_open.get()>
                    <div class="theme-menu-list">
                        {Theme::ALL.into_iter().map(|t| view! {
                            <button
                                class=move || if theme() == t { "menu-item active" } else { "menu-item" }
                                on:click=move |_| pick(t)
                            >
                                {t.icon()} " " {t.label()}
                            </button>
                        }).collect_view()}
                    </div>
                </Show>
            </div>
        </div>
    }
}

#[component]
pub fn AppSidebar(collapsed: ReadSignal<bool>) -> impl IntoView {
    let pathname = use_location().pathname;

    view! {
        <aside class=move || if collapsed.get() { "sidebar collapsed" } else { "sidebar" }>
            <div class="sidebar-brand">
                <A href="/">
                    <span class="sidebar-logo">"L"</span>
                    <Show when=move || !collapsed.get()>
                        <span class="sidebar-title">"LifeStock"</span>
                    </Show>
                </A>
            </div>

            <nav class="sidebar-nav">
                <ul>
                    {NAV_ITEMS.iter().map(|item| {
                        let item_class = move || {
                            if pathname.with(|path| is_active(item, path)) { "nav-item active" } else { "nav-item" }
                        };
                        view! {
                            <li class=item_class title=item.label>
                                <A href=item.path>
                                    <span class="nav-icon">{item.icon}</span>
                                    <Show when=move || !collapsed.get()>
                                        <span class="nav-label">{item.label}</span>
                                    </Show>
                                </A>
                            </li>
                        }
                    }).collect_view()}
                </ul>
            </nav>

            <ThemeMenu collapsed=collapsed />
        </aside>
    }
}
