//! Decides, per request, whether a path already carries a locale or must be
//! redirected to one.
//!
//! The decision is a pure function of (path, query, cookie header) and the
//! immutable [`LocaleConfig`] the gatekeeper was built from, so one instance
//! is shared by every request without locking.

use crate::config::LocaleConfig;
use crate::models::Locale;
use crate::services::locale_routing::{locale_prefix, with_locale};
use crate::utils::cookie::get_cookie;

/// Outcome of inspecting one request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GateDecision {
    /// Infrastructure path (API, assets, favicon). Locale is the preference
    /// cookie or the default, used only for localising responses.
    Excluded(Locale),
    /// Path already starts with a locale segment.
    Pass(Locale),
    /// Path has no locale; send the client to `location`.
    Redirect { locale: Locale, location: String },
}

impl GateDecision {
    /// Locale the request is processed in.
    pub fn locale(&self) -> Locale {
        match self {
            GateDecision::Excluded(locale) | GateDecision::Pass(locale) => *locale,
            GateDecision::Redirect { locale, .. } => *locale,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Gatekeeper {
    default_locale: Locale,
    cookie_name: String,
    excluded_prefixes: Vec<String>,
    excluded_paths: Vec<String>,
}

impl Gatekeeper {
    pub fn new(config: &LocaleConfig) -> Self {
        Self {
            default_locale: config.default_locale,
            cookie_name: config.cookie_name.clone(),
            excluded_prefixes: config.excluded_prefixes.clone(),
            excluded_paths: config.excluded_paths.clone(),
        }
    }

    pub fn is_excluded(&self, path: &str) -> bool {
        self.excluded_paths.iter().any(|exact| exact == path)
            || self.excluded_prefixes.iter().any(|prefix| path.starts_with(prefix.as_str()))
    }

    /// Preferred locale from the `Cookie` header. Missing, undecodable and
    /// unsupported values all count as "no preference".
    pub fn preferred_locale(&self, cookie_header: Option<&str>) -> Option<Locale> {
        let value = get_cookie(cookie_header?, &self.cookie_name)?;
        let locale = Locale::from_code(&value);
        if locale.is_none() {
            tracing::debug!("Ignoring unsupported {} cookie value '{}'", self.cookie_name, value);
        }
        locale
    }

    pub fn decide(&self, path: &str, query: Option<&str>, cookie_header: Option<&str>) -> GateDecision {
        if self.is_excluded(path) {
            let locale = self.preferred_locale(cookie_header).unwrap_or(self.default_locale);
            return GateDecision::Excluded(locale);
        }

        if let Some(locale) = locale_prefix(path) {
            return GateDecision::Pass(locale);
        }

        let locale = self.preferred_locale(cookie_header).unwrap_or(self.default_locale);
        let mut location = with_locale(locale, path);
        if let Some(query) = query.filter(|q| !q.is_empty()) {
            location.push('?');
            location.push_str(query);
        }

        GateDecision::Redirect { locale, location }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn gatekeeper() -> Gatekeeper {
        Gatekeeper::new(&LocaleConfig::default())
    }

    fn redirect_to(decision: GateDecision) -> String {
        match decision {
            GateDecision::Redirect { location, .. } => location,
            other => panic!("expected redirect, got {:?}", other),
        }
    }

    #[test]
    fn test_root_without_cookie_goes_to_default() {
        assert_eq!(redirect_to(gatekeeper().decide("/", None, None)), "/en");
    }

    #[test]
    fn test_root_with_cookie_uses_preference() {
        let decision = gatekeeper().decide("/", None, Some("NEXT_LOCALE=ar"));
        assert_eq!(decision, GateDecision::Redirect { locale: Locale::Ar, location: "/ar".into() });
    }

    #[test]
    fn test_nested_path_keeps_remainder() {
        let gk = gatekeeper();
        assert_eq!(redirect_to(gk.decide("/foo/bar", None, Some("NEXT_LOCALE=ar"))), "/ar/foo/bar");
        assert_eq!(redirect_to(gk.decide("/foo", None, None)), "/en/foo");
    }

    #[test]
    fn test_invalid_cookie_falls_back_to_default() {
        let gk = gatekeeper();
        for cookie in ["NEXT_LOCALE=fr", "NEXT_LOCALE=", "NEXT_LOCALE=AR", "NEXT_LOCALE=%FF", "x=1"] {
            assert_eq!(redirect_to(gk.decide("/foo", None, Some(cookie))), "/en/foo", "{}", cookie);
        }
    }

    #[test]
    fn test_query_string_is_preserved() {
        let gk = gatekeeper();
        assert_eq!(redirect_to(gk.decide("/about", Some("ref=ad&x=1"), None)), "/en/about?ref=ad&x=1");
        assert_eq!(redirect_to(gk.decide("/", Some("q=1"), None)), "/en?q=1");
        assert_eq!(redirect_to(gk.decide("/", Some(""), None)), "/en");
    }

    #[test]
    fn test_locale_prefixed_paths_pass_through() {
        let gk = gatekeeper();
        for (path, locale) in [("/en", Locale::En), ("/en/", Locale::En), ("/ar/about", Locale::Ar)] {
            // The cookie never overrides an explicit prefix.
            assert_eq!(gk.decide(path, None, Some("NEXT_LOCALE=en")), GateDecision::Pass(locale));
            assert_eq!(gk.decide(path, None, None), GateDecision::Pass(locale));
        }
    }

    #[test]
    fn test_lookalike_segments_are_redirected() {
        let gk = gatekeeper();
        assert_eq!(redirect_to(gk.decide("/english", None, None)), "/en/english");
        assert_eq!(redirect_to(gk.decide("/arabic", None, None)), "/en/arabic");
    }

    #[test]
    fn test_redirect_target_carries_locale() {
        let gk = gatekeeper();
        for path in ["/", "/x", "/x/y/", "//z", "/fr/about"] {
            for cookie in [None, Some("NEXT_LOCALE=ar"), Some("NEXT_LOCALE=zz")] {
                let location = redirect_to(gk.decide(path, None, cookie));
                assert!(matches!(gk.decide(&location, None, cookie), GateDecision::Pass(_)));
            }
        }
    }

    #[test]
    fn test_excluded_paths_never_redirect() {
        let gk = gatekeeper();
        for path in [
            "/api/mock-data",
            "/api",
            "/_static/site.css",
            "/_image/logo.png",
            "/favicon.ico",
            "/swagger-ui/index.html",
        ] {
            for cookie in [None, Some("NEXT_LOCALE=ar"), Some("NEXT_LOCALE=bogus")] {
                assert!(matches!(gk.decide(path, None, cookie), GateDecision::Excluded(_)), "{}", path);
            }
        }
        // Exact match only for the favicon.
        assert_eq!(redirect_to(gk.decide("/favicon.ico.bak", None, None)), "/en/favicon.ico.bak");
    }

    #[test]
    fn test_excluded_locale_follows_cookie() {
        let gk = gatekeeper();
        assert_eq!(gk.decide("/api/x", None, Some("NEXT_LOCALE=ar")).locale(), Locale::Ar);
        assert_eq!(gk.decide("/api/x", None, None).locale(), Locale::En);
    }

    #[test]
    fn test_configured_default_and_cookie_name() {
        let config = LocaleConfig {
            default_locale: Locale::Ar,
            cookie_name: "lang".to_string(),
            ..LocaleConfig::default()
        };
        let gk = Gatekeeper::new(&config);
        assert_eq!(redirect_to(gk.decide("/", None, None)), "/ar");
        assert_eq!(redirect_to(gk.decide("/", None, Some("NEXT_LOCALE=en"))), "/ar");
        assert_eq!(redirect_to(gk.decide("/", None, Some("lang=en"))), "/en");
    }
}
