//! API Routes
//!
//! Configures the Axum router with all translation catalog endpoints.

use axum::{
    extract::State,
    routing::{delete, get, post, put},
    Json, Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use super::{languages, texts, translations, AppState};
use crate::models::{HealthResponse, StatsResponse};

/// Creates the main router with all endpoints configured.
///
/// # Middleware
/// - CORS: Allows any origin (configurable for production)
/// - Tracing: Logs all requests for debugging
pub fn create_router(state: AppState) -> Router {
    // Configure CORS middleware
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // Build router with all endpoints
    Router::new()
        .route("/api/languages", get(languages::get_all))
        .route("/api/languages/find/byId/:id", get(languages::get_by_id))
        .route(
            "/api/languages/find/byLanguage/:language",
            get(languages::get_by_name),
        )
        .route("/api/languages/create", post(languages::create))
        .route("/api/languages/create/bulk", post(languages::create_bulk))
        .route("/api/languages/delete/:id", delete(languages::delete))
        .route("/api/languages/addText", put(languages::add_text))
        .route("/api/languages/delText", put(languages::remove_text))
        .route("/api/texts", get(texts::get_page))
        .route("/api/texts/find/byId/:id", get(texts::get_by_id))
        .route("/api/texts/find/byText/:text", get(texts::get_by_content))
        .route(
            "/api/texts/find/byLanguage/:language",
            get(texts::get_by_language),
        )
        .route(
            "/api/texts/find/byLanguage/sort/:language",
            get(texts::get_by_language_sorted),
        )
        .route("/api/texts/create", post(texts::create))
        .route("/api/texts/create/bulk", post(texts::create_bulk))
        .route("/api/texts/change", put(texts::change))
        .route("/api/texts/delete/byId/:id", delete(texts::delete))
        .route("/api/translations", get(translations::get_page))
        .route(
            "/api/translations/find/byId/:id",
            get(translations::get_by_id),
        )
        .route(
            "/api/translations/find/byTranslation/:translation",
            get(translations::get_by_translated_text),
        )
        .route("/api/translations/create", post(translations::create))
        .route(
            "/api/translations/create/bulk",
            post(translations::create_bulk),
        )
        .route("/api/translations/setText", put(translations::set_text))
        .route("/api/translations/delete/:id", delete(translations::delete))
        .route("/stats", get(stats_handler))
        .route("/health", get(health_handler))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Handler for GET /stats
///
/// Reports the request total together with table and cache sizes.
pub async fn stats_handler(State(state): State<AppState>) -> Json<StatsResponse> {
    Json(StatsResponse {
        requests: state.requests.count(),
        languages: state.languages.count().await,
        texts: state.texts.count().await,
        translations: state.translations.count().await,
        cached_languages: state.languages.cached_count().await,
        cached_texts: state.texts.cached_count().await,
        cached_translations: state.translations.cached_count().await,
    })
}

/// Handler for GET /health
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::healthy())
}
