//! Locale gatekeeper middleware
//!
//! Makes sure every user-facing request path starts with a supported locale
//! segment. Requests without one are redirected (307) to the same path under
//! the preferred or default locale; everything else passes through with the
//! resolved locale attached.

use std::sync::Arc;

use axum::{
    extract::{Request, State},
    http::header::COOKIE,
    middleware::Next,
    response::{IntoResponse, Redirect, Response},
};

use crate::models::Locale;
use crate::services::locale_gatekeeper::{GateDecision, Gatekeeper};
use crate::utils::scope_locale;

/// Locale resolved for the current request, stored in request extensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RequestLocale(pub Locale);

pub async fn locale_middleware(
    State(gatekeeper): State<Arc<Gatekeeper>>,
    mut req: Request,
    next: Next,
) -> Response {
    // HTTP/2 clients may split cookies over several headers
    let cookies = req
        .headers()
        .get_all(COOKIE)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .collect::<Vec<_>>()
        .join("; ");
    let cookie_header = (!cookies.is_empty()).then_some(cookies.as_str());

    let decision = gatekeeper.decide(req.uri().path(), req.uri().query(), cookie_header);

    match decision {
        GateDecision::Redirect { locale, location } => {
            tracing::debug!("Locale redirect {} -> {} ({})", req.uri().path(), location, locale);
            Redirect::temporary(&location).into_response()
        },
        GateDecision::Pass(locale) | GateDecision::Excluded(locale) => {
            req.extensions_mut().insert(RequestLocale(locale));
            scope_locale(locale, next.run(req)).await
        },
    }
}
