//! Locale prefix arithmetic on URL paths.
//!
//! A path "carries" a locale when its first segment is a supported code,
//! either as the whole path (`/en`) or followed by `/` (`/en/about`). All
//! functions here are total: any string maps to a defined result.

use crate::models::Locale;

/// Split a path into its locale and the remainder after the locale segment.
///
/// `/ar/brands/rest-1` -> `(Ar, "/brands/rest-1")`, `/ar` -> `(Ar, "")`.
fn split_locale(path: &str) -> Option<(Locale, &str)> {
    let rest = path.strip_prefix('/')?;
    let (segment, remainder) = match rest.find('/') {
        Some(idx) => (&rest[..idx], &rest[idx..]),
        None => (rest, ""),
    };
    Locale::from_code(segment).map(|locale| (locale, remainder))
}

/// Locale encoded in the first path segment, if any.
pub fn locale_prefix(path: &str) -> Option<Locale> {
    split_locale(path).map(|(locale, _)| locale)
}

pub fn has_locale_prefix(path: &str) -> bool {
    locale_prefix(path).is_some()
}

/// Remove one leading locale segment. Paths without one come back as-is,
/// and removing the only segment yields `/`.
pub fn strip_locale(path: &str) -> String {
    if path.is_empty() {
        return "/".to_string();
    }

    match split_locale(path) {
        Some((_, "")) => "/".to_string(),
        Some((_, remainder)) => remainder.to_string(),
        None => path.to_string(),
    }
}

/// Prefix `path` with `/{locale}`. The root path becomes `/{locale}`, never
/// `/{locale}/`.
pub fn with_locale(locale: Locale, path: &str) -> String {
    if path.is_empty() || path == "/" {
        format!("/{}", locale.code())
    } else {
        format!("/{}{}", locale.code(), path)
    }
}
