//! i18n - Internationalization Module
//!
//! Provides simple translation functions using HashMap-based lookups.

use std::collections::HashMap;
use std::sync::OnceLock;

use gpui::SharedString;

/// Supported locales
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Locale {
    /// English (US)
    #[default]
    EnUS,
    /// Chinese (Simplified)
    ZhCN,
}

impl Locale {
    /// Get display name
    pub fn display_name(&self) -> &'static str {
        match self {
            Locale::EnUS => "English",
            Locale::ZhCN => "中文",
        }
    }
}

/// Translation resources
static TRANSLATIONS: OnceLock<HashMap<&'static str, (&'static str, &'static str)>> =
    OnceLock::new();

/// Initialize translations (key -> (en, zh))
fn init_translations() -> HashMap<&'static str, (&'static str, &'static str)> {
    let mut map = HashMap::new();

    // App
    map.insert("app-title", ("Greet Demo", "问候演示"));

    // Home page
    map.insert("home-name-label", ("Your name", "您的姓名"));
    map.insert("home-name-placeholder", ("Enter a name...", "请输入姓名..."));
    map.insert("home-greeting-title", ("Greeting", "问候语"));
    map.insert("home-greeting-empty", ("No greeting yet", "暂无问候"));
    map.insert("home-time-title", ("Backend time", "后端时间"));
    map.insert("home-time-empty", ("Waiting for clock...", "等待时钟..."));

    // Actions
    map.insert("action-greet", ("Greet", "问候"));

    // Log panel
    map.insert("log-title", ("Logs", "日志"));
    map.insert("log-clear", ("Clear", "清除"));

    map
}

/// Get translations
fn translations() -> &'static HashMap<&'static str, (&'static str, &'static str)> {
    TRANSLATIONS.get_or_init(init_translations)
}

/// Translate a key
pub fn t(locale: Locale, key: &str) -> SharedString {
    if let Some(&(en, zh)) = translations().get(key) {
        match locale {
            Locale::EnUS => SharedString::from(en),
            Locale::ZhCN => SharedString::from(zh),
        }
    } else {
        // Fallback: return the key itself
        SharedString::from(key.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_key_translates() {
        assert_eq!(t(Locale::EnUS, "action-greet").as_ref(), "Greet");
        assert_eq!(t(Locale::ZhCN, "action-greet").as_ref(), "问候");
    }

    #[test]
    fn test_unknown_key_falls_back_to_key() {
        assert_eq!(t(Locale::EnUS, "nope").as_ref(), "nope");
    }
}
