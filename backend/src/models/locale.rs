//! Supported locales and the per-locale document attributes.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::utils::ApiError;

/// A locale the site is published in.
///
/// The set is closed: adding a locale means adding a variant, and every
/// per-locale table in the crate is a `match` that stops compiling until the
/// new variant is handled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    En,
    Ar,
}

impl Locale {
    /// All supported locales, in display order.
    pub const ALL: [Locale; 2] = [Locale::En, Locale::Ar];

    pub const DEFAULT: Locale = Locale::En;

    pub const fn code(self) -> &'static str {
        match self {
            Locale::En => "en",
            Locale::Ar => "ar",
        }
    }

    /// Name of the language written in that language.
    pub const fn display_name(self) -> &'static str {
        match self {
            Locale::En => "English",
            Locale::Ar => "العربية",
        }
    }

    pub const fn direction(self) -> TextDirection {
        match self {
            Locale::Ar => TextDirection::Rtl,
            Locale::En => TextDirection::Ltr,
        }
    }

    /// Exact, case-sensitive lookup by code.
    pub fn from_code(code: &str) -> Option<Locale> {
        Self::ALL.into_iter().find(|locale| locale.code() == code)
    }

    /// Switcher options with `active` flagged.
    pub fn options(active: Locale) -> Vec<LocaleOption> {
        Self::ALL
            .into_iter()
            .map(|locale| LocaleOption {
                code: locale,
                name: locale.display_name(),
                active: locale == active,
            })
            .collect()
    }
}

impl Default for Locale {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Locale {
    type Err = ApiError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_code(s).ok_or_else(|| ApiError::invalid_locale(s))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum TextDirection {
    Ltr,
    Rtl,
}

impl TextDirection {
    /// Value for the HTML `dir` attribute.
    pub const fn as_attr(self) -> &'static str {
        match self {
            TextDirection::Ltr => "ltr",
            TextDirection::Rtl => "rtl",
        }
    }
}

/// One entry of the language switcher.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct LocaleOption {
    pub code: Locale,
    #[schema(value_type = String)]
    pub name: &'static str,
    pub active: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_code_is_exact() {
        assert_eq!(Locale::from_code("en"), Some(Locale::En));
        assert_eq!(Locale::from_code("ar"), Some(Locale::Ar));
        assert_eq!(Locale::from_code("AR"), None);
        assert_eq!(Locale::from_code("en-US"), None);
        assert_eq!(Locale::from_code(""), None);
    }

    #[test]
    fn test_direction() {
        assert_eq!(Locale::Ar.direction().as_attr(), "rtl");
        assert_eq!(Locale::En.direction().as_attr(), "ltr");
    }

    #[test]
    fn test_options_flag_active_only() {
        let options = Locale::options(Locale::Ar);
        assert_eq!(options.len(), 2);
        assert_eq!(options[0].code, Locale::En);
        assert!(!options[0].active);
        assert_eq!(options[1].name, "العربية");
        assert!(options[1].active);
    }

    #[test]
    fn test_parse_unknown_locale_is_error() {
        assert!("fr".parse::<Locale>().is_err());
        assert_eq!("ar".parse::<Locale>().unwrap(), Locale::Ar);
    }

    #[test]
    fn test_serde_uses_code() {
        assert_eq!(serde_json::to_string(&Locale::Ar).unwrap(), "\"ar\"");
        let locale: Locale = serde_json::from_str("\"en\"").unwrap();
        assert_eq!(locale, Locale::En);
    }
}
