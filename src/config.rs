//! User Settings
//!
//! Profile, notification and display preferences. Stored as one JSON value
//! in `localStorage`; anything missing or unreadable falls back to the
//! defaults.

use gloo_storage::errors::StorageError;
use gloo_storage::{LocalStorage, Storage};
use serde::{Deserialize, Serialize};

use crate::error::DataResult;

/// `localStorage` key holding the serialized [`Settings`]
pub const STORAGE_KEY: &str = "lifestock.settings";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    pub name: String,
    pub email: String,
}

impl Default for Profile {
    fn default() -> Self {
        Self {
            name: "Demo User".to_string(),
            email: "demo@example.com".to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NotificationPrefs {
    pub low_stock: bool,
    pub expirations: bool,
    pub invitations: bool,
    pub shopping_reminders: bool,
    pub email_notifications: bool,
}

impl Default for NotificationPrefs {
    fn default() -> Self {
        Self {
            low_stock: true,
            expirations: true,
            invitations: true,
            shopping_reminders: true,
            email_notifications: false,
        }
    }
}

/// Individually toggled notification preference
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationPref {
    LowStock,
    Expirations,
    Invitations,
    ShoppingReminders,
    EmailNotifications,
}

impl NotificationPref {
    pub fn key(&self) -> &'static str {
        match self {
            NotificationPref::LowStock => "lowStock",
            NotificationPref::Expirations => "expirations",
            NotificationPref::Invitations => "invitations",
            NotificationPref::ShoppingReminders => "shoppingReminders",
            NotificationPref::EmailNotifications => "emailNotifications",
        }
    }
}

impl NotificationPrefs {
    pub fn is_enabled(&self, pref: NotificationPref) -> bool {
        match pref {
            NotificationPref::LowStock => self.low_stock,
            NotificationPref::Expirations => self.expirations,
            NotificationPref::Invitations => self.invitations,
            NotificationPref::ShoppingReminders => self.shopping_reminders,
            NotificationPref::EmailNotifications => self.email_notifications,
        }
    }

    fn slot(&mut self, pref: NotificationPref) -> &mut bool {
        match pref {
            NotificationPref::LowStock => &mut self.low_stock,
            NotificationPref::Expirations => &mut self.expirations,
            NotificationPref::Invitations => &mut self.invitations,
            NotificationPref::ShoppingReminders => &mut self.shopping_reminders,
            NotificationPref::EmailNotifications => &mut self.email_notifications,
        }
    }

    /// Flip a preference and return the toast text describing the change
    pub fn toggle(&mut self, pref: NotificationPref) -> String {
        let slot = self.slot(pref);
        *slot = !*slot;
        let state = if *slot { "enabled" } else { "disabled" };
        format!("{} notifications {}", pref.key(), state)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
    System,
}

impl Theme {
    pub const ALL: [Theme; 3] = [Theme::Light, Theme::Dark, Theme::System];

    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
            Theme::System => "system",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Theme::Light => "Light",
            Theme::Dark => "Dark",
            Theme::System => "System",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            Theme::Light => "☀",
            Theme::Dark => "☾",
            Theme::System => "💻",
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DefaultScreen {
    #[default]
    Dashboard,
    Inventory,
    ShoppingList,
}

impl DefaultScreen {
    pub const ALL: [DefaultScreen; 3] = [DefaultScreen::Dashboard, DefaultScreen::Inventory, DefaultScreen::ShoppingList];

    pub fn as_str(&self) -> &'static str {
        match self {
            DefaultScreen::Dashboard => "dashboard",
            DefaultScreen::Inventory => "inventory",
            DefaultScreen::ShoppingList => "shopping-list",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.as_str() == value)
    }

    pub fn label(&self) -> &'static str {
        match self {
            DefaultScreen::Dashboard => "Dashboard",
            DefaultScreen::Inventory => "Inventory",
            DefaultScreen::ShoppingList => "Shopping List",
        }
    }

    /// Route the app opens on
    pub fn path(&self) -> &'static str {
        match self {
            DefaultScreen::Dashboard => "/",
            DefaultScreen::Inventory => "/inventory",
            DefaultScreen::ShoppingList => "/shopping-list",
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayPrefs {
    pub theme: Theme,
    pub default_screen: DefaultScreen,
}

impl DisplayPrefs {
    /// Same prefs with only the theme swapped
    pub fn with_theme(self, theme: Theme) -> Self {
        Self { theme, ..self }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub profile: Profile,
    pub notifications: NotificationPrefs,
    pub display: DisplayPrefs,
}

impl Settings {
    /// Read settings from `localStorage`, falling back to defaults
    pub fn load() -> Self {
        Self::from_stored(LocalStorage::get::<Settings>(STORAGE_KEY))
    }

    fn from_stored(stored: Result<Settings, StorageError>) -> Self {
        match stored {
            Ok(settings) => settings,
            Err(StorageError::KeyNotFound(_)) => Self::default(),
            Err(e) => {
                tracing::warn!(error = %e, "stored settings unreadable, using defaults");
                Self::default()
            }
        }
    }

    pub fn save(&self) -> DataResult<()> {
        LocalStorage::set(STORAGE_KEY, self)?;
        tracing::debug!(key = STORAGE_KEY, "settings saved");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_demo_account() {
        let settings = Settings::default();
        assert_eq!(settings.profile.name, "Demo User");
        assert!(settings.notifications.low_stock);
        assert!(!settings.notifications.email_notifications);
        assert_eq!(settings.display.theme, Theme::Light);
        assert_eq!(settings.display.default_screen, DefaultScreen::Dashboard);
    }

    #[test]
    fn partial_json_fills_in_defaults() {
        let settings: Settings = serde_json::from_str(r#"{"display":{"theme":"dark"}}"#).unwrap();
        assert_eq!(settings.display.theme, Theme::Dark);
        assert_eq!(settings.display.default_screen, DefaultScreen::Dashboard);
        assert_eq!(settings.profile, Profile::default());
    }

    #[test]
    fn settings_round_trip() {
        let mut settings = Settings::default();
        settings.display.default_screen = DefaultScreen::ShoppingList;
        let json = serde_json::to_string(&settings).unwrap();
        assert!(json.contains("\"shopping-list\""));
        assert_eq!(serde_json::from_str::<Settings>(&json).unwrap(), settings);
    }

    #[test]
    fn missing_or_garbage_storage_uses_defaults() {
        let missing = Settings::from_stored(Err(StorageError::KeyNotFound(STORAGE_KEY.to_string())));
        assert_eq!(missing, Settings::default());

        let garbage = serde_json::from_str::<Settings>("not json").unwrap_err();
        assert_eq!(Settings::from_stored(Err(StorageError::SerdeError(garbage))), Settings::default());
    }

    #[test]
    fn toggle_reports_new_state() {
        let mut prefs = NotificationPrefs::default();
        assert_eq!(prefs.toggle(NotificationPref::LowStock), "lowStock notifications disabled");
        assert!(!prefs.is_enabled(NotificationPref::LowStock));
        assert_eq!(
            prefs.toggle(NotificationPref::EmailNotifications),
            "emailNotifications notifications enabled"
        );
    }

    #[test]
    fn theme_pick_keeps_default_screen() {
        let display = DisplayPrefs { theme: Theme::Light, default_screen: DefaultScreen::Inventory };
        for theme in Theme::ALL {
            let picked = display.with_theme(theme);
            assert_eq!(picked.theme, theme);
            assert_eq!(picked.default_screen, DefaultScreen::Inventory);
        }
    }

    #[test]
    fn default_screen_paths() {
        assert_eq!(DefaultScreen::parse("inventory"), Some(DefaultScreen::Inventory));
        assert_eq!(DefaultScreen::ShoppingList.path(), "/shopping-list");
    }
}
