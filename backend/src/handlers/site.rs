//! Rendered pages. The locale is taken from the first path segment and passed
//! to the renderer explicitly.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::Uri,
    response::{Html, IntoResponse, Redirect, Response},
};

use crate::AppState;
use crate::models::Locale;
use crate::models::content::find_restaurant;
use crate::services::locale_routing::has_locale_prefix;
use crate::services::page_renderer::Page;
use crate::utils::{ApiError, ApiResult};

fn path_locale(code: &str, uri: &Uri) -> ApiResult<Locale> {
    Locale::from_code(code).ok_or_else(|| ApiError::page_not_found(uri.path()))
}

/// Home page: `/{locale}`
pub async fn home(
    State(state): State<Arc<AppState>>,
    Path(locale): Path<String>,
    uri: Uri,
) -> ApiResult<Html<String>> {
    let locale = path_locale(&locale, &uri)?;
    tracing::debug!("Rendering home page in {}", locale);

    let html = state.renderer.render(Page::Home, locale, uri.path())?;
    Ok(Html(html))
}

/// Brand page: `/{locale}/brands/{id}`
pub async fn brand(
    State(state): State<Arc<AppState>>,
    Path((locale, id)): Path<(String, String)>,
    uri: Uri,
) -> ApiResult<Html<String>> {
    let locale = path_locale(&locale, &uri)?;
    let restaurant =
        find_restaurant(&id).ok_or_else(|| ApiError::not_found(format!("brand '{}'", id)))?;
    tracing::debug!("Rendering brand page {} in {}", restaurant.id, locale);

    let html = state.renderer.render(Page::Brand(restaurant), locale, uri.path())?;
    Ok(Html(html))
}

/// Anything no route matched. Locale paths with trailing slashes are sent to
/// their canonical form (`/en/` -> `/en`).
pub async fn not_found(uri: Uri) -> Response {
    let path = uri.path();
    let trimmed = path.trim_end_matches('/');
    if trimmed.len() < path.len() && has_locale_prefix(trimmed) {
        let location = match uri.query() {
            Some(query) => format!("{}?{}", trimmed, query),
            None => trimmed.to_string(),
        };
        tracing::debug!("Canonicalising {} -> {}", path, location);
        return Redirect::permanent(&location).into_response();
    }

    ApiError::page_not_found(path).into_response()
}
