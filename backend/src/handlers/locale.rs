use std::sync::Arc;

use axum::{
    Extension, Json,
    extract::{Query, State},
    http::{
        HeaderValue, StatusCode,
        header::{CACHE_CONTROL, LOCATION, SET_COOKIE},
    },
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

use crate::AppState;
use crate::middleware::RequestLocale;
use crate::models::{Locale, LocaleOption};
use crate::services::locale_switch::SwitchOutcome;
use crate::utils::{ApiError, ApiResult};

#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct SwitchQuery {
    /// Target locale code
    pub to: String,
    /// Path of the page the switch was made from (defaults to `/`)
    pub from: Option<String>,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct SwitchLocaleRequest {
    /// Target locale code
    pub locale: String,
    /// Path of the page the switch was made from
    #[validate(length(min = 1, max = 2048))]
    pub current_path: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct SwitchLocaleResponse {
    pub locale: Locale,
    /// Where the client should navigate
    pub location: String,
    /// Whether the client must reload rather than reuse rendered content
    pub refresh: bool,
}

/// Reject anything that is not a same-site absolute path, so the endpoint
/// cannot be used to bounce users to another origin.
fn validate_origin_path(path: &str) -> ApiResult<()> {
    if !path.starts_with('/') || path.starts_with("//") || path.contains('\\') {
        return Err(ApiError::invalid_input(format!("'{}' is not a site path", path)));
    }
    if path.chars().any(char::is_control) {
        return Err(ApiError::invalid_input("path contains control characters"));
    }
    Ok(())
}

fn cookie_header(outcome: &SwitchOutcome) -> ApiResult<HeaderValue> {
    HeaderValue::from_str(&outcome.cookie.header_value())
        .map_err(|e| ApiError::internal_error(format!("invalid Set-Cookie value: {}", e)))
}

/// Switch locale and redirect to the same page under the new locale
#[utoipa::path(
    get,
    path = "/api/locale/switch",
    params(SwitchQuery),
    responses(
        (status = 303, description = "Preference stored; redirect to the page in the new locale"),
        (status = 400, description = "Unsupported locale or invalid origin path", body = ApiErrorResponse)
    ),
    tag = "Locale"
)]
pub async fn switch_locale(
    State(state): State<Arc<AppState>>,
    Query(query): Query<SwitchQuery>,
) -> ApiResult<Response> {
    let target: Locale = query.to.parse()?;
    let from = query.from.as_deref().unwrap_or("/");
    validate_origin_path(from)?;

    let outcome = state.locale_switch.switch(from, target);
    tracing::info!("Locale switched to {} from {}", target, from);

    let location = HeaderValue::from_str(&outcome.location)
        .map_err(|e| ApiError::invalid_input(format!("invalid redirect target: {}", e)))?;

    Ok((
        StatusCode::SEE_OTHER,
        [
            (LOCATION, location),
            (SET_COOKIE, cookie_header(&outcome)?),
            (CACHE_CONTROL, HeaderValue::from_static("no-store")),
        ],
    )
        .into_response())
}

/// Switch locale for script clients; the client navigates itself
#[utoipa::path(
    post,
    path = "/api/locale",
    request_body = SwitchLocaleRequest,
    responses(
        (status = 200, description = "Preference stored", body = SwitchLocaleResponse),
        (status = 400, description = "Unsupported locale or invalid path", body = ApiErrorResponse)
    ),
    tag = "Locale"
)]
pub async fn switch_locale_json(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<SwitchLocaleRequest>,
) -> ApiResult<Response> {
    payload.validate()?;
    let target: Locale = payload.locale.parse()?;
    validate_origin_path(&payload.current_path)?;

    let outcome = state.locale_switch.switch(&payload.current_path, target);
    tracing::info!("Locale switched to {} from {}", target, payload.current_path);

    let set_cookie = cookie_header(&outcome)?;
    let body = SwitchLocaleResponse {
        locale: outcome.locale,
        location: outcome.location,
        refresh: outcome.refresh,
    };

    Ok(([(SET_COOKIE, set_cookie)], Json(body)).into_response())
}

/// List supported locales with the request's locale marked active
#[utoipa::path(
    get,
    path = "/api/locales",
    responses(
        (status = 200, description = "Supported locales", body = Vec<LocaleOption>)
    ),
    tag = "Locale"
)]
pub async fn list_locales(
    request_locale: Option<Extension<RequestLocale>>,
) -> Json<Vec<LocaleOption>> {
    let active = request_locale.map(|Extension(RequestLocale(locale))| locale).unwrap_or_default();
    Json(Locale::options(active))
}
