//! Request-scoped locale for localising messages.
//!
//! The locale middleware runs the rest of the request inside
//! [`scope_locale`]; code that has no explicit locale at hand (error
//! responses) reads it back with [`current_locale`]. The scope is a tokio
//! task-local, so it follows the request across `.await` points and worker
//! threads. Page rendering does not use this: it receives the locale
//! explicitly from the request path.

use std::future::Future;

use crate::models::Locale;

tokio::task_local! {
    static CURRENT_LOCALE: Locale;
}

/// Run `fut` with `locale` as the current locale.
pub async fn scope_locale<F>(locale: Locale, fut: F) -> F::Output
where
    F: Future,
{
    CURRENT_LOCALE.scope(locale, fut).await
}

/// Locale of the request being processed, or the default outside a request.
pub fn current_locale() -> Locale {
    CURRENT_LOCALE.try_with(|locale| *locale).unwrap_or(Locale::DEFAULT)
}
