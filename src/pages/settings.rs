//! Settings View
//!
//! Account, notification and display preferences backed by the settings
//! store.

use leptos::prelude::*;

use crate::components::{tab, TabBar};
use crate::config::{DefaultScreen, DisplayPrefs, NotificationPref, Profile, Theme};
use crate::context::use_app_context;
use crate::store::{
    store_toggle_notification, store_update_display, store_update_profile, use_settings_store,
    SettingsStateStoreFields,
};
use crate::validation::{require_non_empty, validate_email};

/// Alert toggles: (preference, title, description)
const ALERTS: [(NotificationPref, &str, &str); 4] = [
    (NotificationPref::LowStock, "Low Stock Alerts", "Get notified when items are running low"),
    (NotificationPref::Expirations, "Expiration Alerts", "Get notified when items are about to expire"),
    (NotificationPref::Invitations, "Household Invitations", "Get notified when you're invited to a household"),
    (NotificationPref::ShoppingReminders, "Shopping Reminders", "Get reminders about your shopping list"),
];

#[component]
fn PreferenceSwitch(pref: NotificationPref, title: &'static str, description: &'static str) -> impl IntoView {
    let ctx = use_app_context();
    let store = use_settings_store();
    let enabled = move || store.notifications().read().is_enabled(pref);

    view! {
        <div class="setting-row">
            <div>
                <h4 class="setting-title">{title}</h4>
                <p class="muted small">{description}</p>
            </div>
            <label class="switch">
                <input
                    type="checkbox"
                    aria-label=title
                    prop:checked=enabled
                    on:change=move |_| {
                        let message = store_toggle_notification(&store, pref);
                        ctx.success(message);
                    }
                />
                <span class="switch-track"></span>
            </label>
        </div>
    }
}

#[component]
fn AccountTab() -> impl IntoView {
    let ctx = use_app_context();
    let store = use_settings_store();
    let current = store.profile().get_untracked();
    let (name, set_name) = signal(current.name);
    let (email, set_email) = signal(current.email);

    let save_profile = move || {
        let raw_name = name.get_untracked();
        let raw_email = email.get_untracked();
        let outcome = require_non_empty("Full name", &raw_name)
            .and_then(|n| validate_email(&raw_email).map(|e| (n, e)))
            .map(|(n, e)| Profile { name: n.to_string(), email: e.to_string() });
        if let Some(profile) = ctx.settle(outcome, |_| "Profile updated successfully".to_string()) {
            store_update_profile(&store, profile);
        }
    };

    view! {
        <div class="card">
            <div class="card-header">
                <h3 class="card-title">"Account Information"</h3>
                <p class="card-description">"Update your account details"</p>
            </div>
            <form class="card-content form" on:submit=move |ev| {
                ev.prevent_default();
                save_profile();
            }>
                <label class="field">
                    <span>"Full Name"</span>
                    <input
                        class="input"
                        placeholder="Enter your name"
                        prop:value=move || name.get()
                        on:input=move |ev| set_name.set(event_target_value(&ev))
                    />
                </label>
                <label class="field">
                    <span>"Email Address"</span>
                    <input
                        class="input"
                        type="email"
                        placeholder="Enter your email"
                        prop:value=move || email.get()
                        on:input=move |ev| set_email.set(event_target_value(&ev))
                    />
                </label>
                <div>
                    <button type="submit" class="btn primary">"Save Changes"</button>
                </div>
            </form>
        </div>
    }
}

#[component]
fn NotificationsTab() -> impl IntoView {
    view! {
        <div class="card">
            <div class="card-header">
                <h3 class="card-title">"Notification Preferences"</h3>
                <p class="card-description">"Configure what notifications you receive"</p>
            </div>
            <div class="card-content stack">
                {ALERTS.into_iter().map(|(pref, title, description)| view! {
                    <PreferenceSwitch pref=pref title=title description=description />
                }).collect_view()}
                <h3 class="section-title">"Notification Channels"</h3>
                <PreferenceSwitch
                    pref=NotificationPref::EmailNotifications
                    title="Email Notifications"
                    description="Receive notifications via email"
                />
            </div>
        </div>
    }
}

#[component]
fn DisplayTab() -> impl IntoView {
    let ctx = use_app_context();
    let store = use_settings_store();
    let (default_screen, set_default_screen) = signal(store.display().get_untracked().default_screen);
    let theme = move || store.display().read().theme;

    // Theme changes apply immediately; the default screen waits for save
    let pick_theme = move |picked: Theme| {
        let display = store.display().get_untracked().with_theme(picked);
        store_update_display(&store, display);
    };

    let save_display = move || {
        let display = DisplayPrefs {
            default_screen: default_screen.get_untracked(),
            ..store.display().get_untracked()
        };
        store_update_display(&store, display);
        ctx.success("Display settings updated");
    };

    let logout = move || {
        tracing::info!("logout requested");
        ctx.success("Logged out successfully");
    };

    view! {
        <div class="card">
            <div class="card-header">
                <h3 class="card-title">"Display Settings"</h3>
                <p class="card-description">"Customize your display preferences"</p>
            </div>
            <div class="card-content stack">
                <h3 class="section-title">"Theme"</h3>
                <div class="row">
                    {Theme::ALL.into_iter().map(|t| view! {
                        <button
                            class=move || if theme() == t { "btn primary" } else { "btn outline" }
                            on:click=move |_| pick_theme(t)
                        >
                            {t.icon()} " " {t.label()}
                        </button>
                    }).collect_view()}
                </div>

                <h3 class="section-title">"Default Screen"</h3>
                <select
                    class="select"
                    aria-label="Select default screen"
                    on:change=move |ev| {
                        if let Some(screen) = DefaultScreen::parse(&event_target_value(&ev)) {
                            set_default_screen.set(screen);
                        }
                    }
                >
                    {DefaultScreen::ALL.into_iter().map(|s| view! {
                        <option value=s.as_str() selected=move || default_screen.get() == s>{s.label()}</option>
                    }).collect_view()}
                </select>
                <p class="muted small">"Choose which screen to show when you open the app"</p>

                <div>
                    <button class="btn primary" on:click=move |_| save_display()>"Save Display Settings"</button>
                </div>
            </div>
        </div>

        <div class="card">
            <div class="card-header">
                <h3 class="card-title">"Session"</h3>
                <p class="card-description">"Manage your login sessions"</p>
            </div>
            <div class="card-content setting-row">
                <div>
                    <h4 class="setting-title">"Active Session"</h4>
                    <p class="muted small">"You are currently logged in"</p>
                </div>
                <button class="btn outline" on:click=move |_| logout()>"⎋ Logout"</button>
            </div>
        </div>
    }
}

#[component]
pub fn SettingsPage() -> impl IntoView {
    let (active_tab, set_active_tab) = signal("account");
    let tabs = vec![
        tab("account", "Account"),
        tab("notifications", "Notifications"),
        tab("display", "Display"),
    ];

    view! {
        <div class="page">
            <div class="page-header">
                <div>
                    <h2 class="page-title">"Settings"</h2>
                    <p class="muted">"Manage your account settings and preferences"</p>
                </div>
            </div>

            <TabBar tabs=tabs active=active_tab set_active=set_active_tab />

            <Show when=move || active_tab.get() == "account">
                <AccountTab />
            </Show>
            <Show when=move || active_tab.get() == "notifications">
                <NotificationsTab />
            </Show>
            <Show when=move || active_tab.get() == "display">
                <DisplayTab />
            </Show>
        </div>
    }
}
