//! Settings Store
//!
//! Uses Leptos reactive_stores so the layout can react to the theme alone.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::config::{DisplayPrefs, NotificationPref, NotificationPrefs, Profile, Settings};

/// Settings with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct SettingsState {
    pub profile: Profile,
    pub notifications: NotificationPrefs,
    pub display: DisplayPrefs,
}

impl From<Settings> for SettingsState {
    fn from(settings: Settings) -> Self {
        Self {
            profile: settings.profile,
            notifications: settings.notifications,
            display: settings.display,
        }
    }
}

impl SettingsState {
    pub fn snapshot(&self) -> Settings {
        Settings {
            profile: self.profile.clone(),
            notifications: self.notifications,
            display: self.display,
        }
    }
}

/// Type alias for the store
pub type SettingsStore = Store<SettingsState>;

/// Get the settings store from context
pub fn use_settings_store() -> SettingsStore {
    expect_context::<SettingsStore>()
}

// ========================
// Store Helper Functions
// ========================

fn persist(store: &SettingsStore) {
    let settings = store.read_untracked().snapshot();
    if let Err(e) = settings.save() {
        tracing::warn!(error = %e, "could not persist settings");
    }
}

pub fn store_update_profile(store: &SettingsStore, profile: Profile) {
    *store.profile().write() = profile;
    persist(store);
}

/// Flip one notification preference; returns the toast text
pub fn store_toggle_notification(store: &SettingsStore, pref: NotificationPref) -> String {
    let message = store.notifications().write().toggle(pref);
    persist(store);
    message
}

pub fn store_update_display(store: &SettingsStore, display: DisplayPrefs) {
    *store.display().write() = display;
    persist(store);
}
