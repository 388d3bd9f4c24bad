//! Explicit locale switching: persist the choice and compute where the client
//! should land.

use chrono::{DateTime, Duration, Utc};

use crate::config::LocaleConfig;
use crate::models::Locale;
use crate::services::locale_routing::{strip_locale, with_locale};
use crate::utils::cookie::SetCookie;

/// What the caller must do after a switch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SwitchOutcome {
    pub locale: Locale,
    /// Preference cookie to write.
    pub cookie: SetCookie,
    /// Same page under the new locale prefix.
    pub location: String,
    /// Always true: direction and translated text are baked into the
    /// rendered document, so the client must load it again rather than
    /// reuse what it has.
    pub refresh: bool,
}

#[derive(Debug, Clone)]
pub struct LocaleSwitch {
    cookie_name: String,
    max_age: Duration,
    secure: bool,
}

impl LocaleSwitch {
    pub fn new(config: &LocaleConfig) -> Self {
        Self {
            cookie_name: config.cookie_name.clone(),
            max_age: Duration::days(config.cookie_max_age),
            secure: config.cookie_secure,
        }
    }

    pub fn switch(&self, current_path: &str, target: Locale) -> SwitchOutcome {
        self.switch_at(current_path, target, Utc::now())
    }

    pub fn switch_at(&self, current_path: &str, target: Locale, now: DateTime<Utc>) -> SwitchOutcome {
        let cookie = SetCookie::persistent(&self.cookie_name, target.code(), self.max_age, now)
            .secure(self.secure);
        let location = self.target_path(current_path, target);

        tracing::debug!("Locale switch {} -> {} ({})", current_path, location, target);

        SwitchOutcome { locale: target, cookie, location, refresh: true }
    }

    /// Path of the current page under `target`, without side effects.
    pub fn target_path(&self, current_path: &str, target: Locale) -> String {
        with_locale(target, &strip_locale(current_path))
    }
}
