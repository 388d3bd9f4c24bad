//! Land of Franchise site server.
//!
//! Serves the bilingual (English / Arabic) brochure site. Every user-facing
//! path carries its locale as the first segment; the locale middleware
//! redirects requests that lack one, and the switch endpoints persist an
//! explicit choice in a cookie.

use std::path::PathBuf;
use std::sync::Arc;

use axum::{
    Router, middleware as axum_middleware,
    routing::{get, post},
};
use tower_http::services::{ServeDir, ServeFile};
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

rust_i18n::i18n!("locales", fallback = "en");

pub mod config;
pub mod handlers;
pub mod middleware;
pub mod models;
pub mod services;
pub mod utils;

#[cfg(test)]
mod tests;

use config::Config;
use middleware::locale_middleware;
use services::{Gatekeeper, LocaleSwitch, PageRenderer};
use utils::ApiResult;

/// Shared, read-only application state
pub struct AppState {
    pub config: Config,
    pub gatekeeper: Arc<Gatekeeper>,
    pub locale_switch: LocaleSwitch,
    pub renderer: PageRenderer,
}

impl AppState {
    /// Build the state from `config`, rejecting values that would only fail
    /// later at request time.
    pub fn new(config: Config) -> ApiResult<Self> {
        config.validate()?;
        let gatekeeper = Arc::new(Gatekeeper::new(&config.locale));
        let locale_switch = LocaleSwitch::new(&config.locale);
        let renderer = PageRenderer::new()?;

        Ok(Self { config, gatekeeper, locale_switch, renderer })
    }
}

#[derive(OpenApi)]
#[openapi(
    paths(
        handlers::content::health,
        handlers::content::get_site_content,
        handlers::locale::list_locales,
        handlers::locale::switch_locale,
        handlers::locale::switch_locale_json,
    ),
    components(schemas(
        models::Locale,
        models::LocaleOption,
        models::TextDirection,
        models::SiteContent,
        models::CompanyInfo,
        models::CompanyStats,
        models::Restaurant,
        handlers::content::HealthResponse,
        handlers::locale::SwitchLocaleRequest,
        handlers::locale::SwitchLocaleResponse,
        utils::ApiErrorResponse,
    )),
    tags(
        (name = "Locale", description = "Locale listing and switching"),
        (name = "Content", description = "Embedded site content"),
        (name = "System", description = "Service health"),
    ),
    info(title = "Land of Franchise site API", version = "1.0.0")
)]
pub struct ApiDoc;

/// Build the full application router.
///
/// The locale middleware wraps every route and the fallback, so paths with no
/// route (including `/`) are still redirected before they can 404.
pub fn build_router(state: Arc<AppState>) -> Router {
    let api = Router::new()
        .route("/api/health", get(handlers::content::health))
        .route("/api/mock-data", get(handlers::content::get_site_content))
        .route("/api/locales", get(handlers::locale::list_locales))
        .route("/api/locale", post(handlers::locale::switch_locale_json))
        .route("/api/locale/switch", get(handlers::locale::switch_locale));

    let pages = Router::new()
        .route("/:locale", get(handlers::site::home))
        .route("/:locale/brands/:id", get(handlers::site::brand));

    let mut app = Router::new()
        .merge(api)
        .merge(pages)
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .fallback(handlers::site::not_found);

    let static_config = &state.config.static_config;
    if static_config.enabled {
        let web_root = PathBuf::from(&static_config.web_root);
        tracing::info!("Serving static assets from {}", web_root.display());
        app = app
            .nest_service("/_static", ServeDir::new(&web_root))
            .route_service("/favicon.ico", ServeFile::new(web_root.join("favicon.ico")));
    }

    let gatekeeper = Arc::clone(&state.gatekeeper);

    app.with_state(state)
        .layer(axum_middleware::from_fn_with_state(gatekeeper, locale_middleware))
        .layer(TraceLayer::new_for_http())
}
