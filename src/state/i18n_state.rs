//! I18nState - Internationalization State

use crate::i18n::Locale;

/// State for internationalization
#[derive(Debug, Clone, Default)]
pub struct I18nState {
    /// Current locale
    pub locale: Locale,
}

impl I18nState {
    /// Set the locale
    pub fn set_locale(&mut self, locale: Locale) {
        self.locale = locale;
    }

    /// Toggle between English and Chinese
    pub fn toggle_locale(&mut self) {
        self.locale = match self.locale {
            Locale::EnUS => Locale::ZhCN,
            Locale::ZhCN => Locale::EnUS,
        };
    }
}
