//! Language Handlers
//!
//! HTTP request handlers for the `/api/languages` endpoints.

use axum::{
    extract::{Path, Query, State},
    Json,
};
use tracing::{debug, warn};

use crate::api::AppState;
use crate::error::{ApiError, Result};
use crate::models::{Language, LinkTextParams, MessageResponse, NewLanguage};

/// Handler for GET /api/languages
///
/// Lists every stored language.
pub async fn get_all(State(state): State<AppState>) -> Json<Vec<Language>> {
    debug!("List request for languages");
    Json(state.languages.get_all().await)
}

/// Handler for GET /api/languages/find/byId/:id
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<u64>,
) -> Result<Json<Language>> {
    debug!("Find request for language id {}", id);
    state
        .languages
        .get_by_id(id)
        .await
        .map(Json)
        .ok_or_else(|| ApiError::NotFound(format!("language with id {} doesn't exist", id)))
}

/// Handler for GET /api/languages/find/byLanguage/:language
pub async fn get_by_name(
    State(state): State<AppState>,
    Path(language): Path<String>,
) -> Result<Json<Language>> {
    debug!("Find request for language '{}'", language);
    state
        .languages
        .get_by_name(&language)
        .await
        .map(Json)
        .ok_or_else(|| ApiError::NotFound(format!("language '{}' doesn't exist", language)))
}

/// Handler for POST /api/languages/create
pub async fn create(
    State(state): State<AppState>,
    Json(req): Json<NewLanguage>,
) -> Result<Json<Language>> {
    if let Some(validation_error) = req.validate() {
        warn!("Invalid language create request: {}", validation_error);
        return Err(ApiError::InvalidRequest(validation_error));
    }
    debug!("Create request for language '{}'", req.name);

    let language = Language {
        id: 0,
        name: req.name,
    };
    Ok(Json(state.languages.save(language).await))
}

/// Handler for POST /api/languages/create/bulk
pub async fn create_bulk(
    State(state): State<AppState>,
    Json(reqs): Json<Vec<NewLanguage>>,
) -> Result<Json<Vec<String>>> {
    for req in &reqs {
        if let Some(validation_error) = req.validate() {
            warn!("Invalid language bulk request: {}", validation_error);
            return Err(ApiError::InvalidRequest(validation_error));
        }
    }
    debug!("Bulk create request for {} language(s)", reqs.len());

    let languages = reqs
        .into_iter()
        .map(|req| Language {
            id: 0,
            name: req.name,
        })
        .collect();
    Ok(Json(state.languages.bulk_save(languages).await))
}

/// Handler for DELETE /api/languages/delete/:id
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<u64>,
) -> Result<Json<MessageResponse>> {
    debug!("Delete request for language id {}", id);
    let language = state.languages.delete(id).await?;
    Ok(Json(MessageResponse::new(format!(
        "language '{}' deleted",
        language.name
    ))))
}

/// Handler for PUT /api/languages/addText
///
/// Links an existing text to an existing language.
pub async fn add_text(
    State(state): State<AppState>,
    Query(params): Query<LinkTextParams>,
) -> Result<Json<Language>> {
    debug!(
        "Link request: text {} into language {}",
        params.text_id, params.language_id
    );
    let language = state
        .languages
        .add_text(params.language_id, params.text_id)
        .await?;
    Ok(Json(language))
}

/// Handler for PUT /api/languages/delText
///
/// Unlinks a text from a language.
pub async fn remove_text(
    State(state): State<AppState>,
    Query(params): Query<LinkTextParams>,
) -> Result<Json<Language>> {
    debug!(
        "Unlink request: text {} out of language {}",
        params.text_id, params.language_id
    );
    let language = state
        .languages
        .remove_text(params.language_id, params.text_id)
        .await?;
    Ok(Json(language))
}
