//! Translation Handlers
//!
//! HTTP request handlers for the `/api/translations` endpoints.

use axum::{
    extract::{Path, Query, State},
    Json,
};
use tracing::{debug, warn};

use crate::api::AppState;
use crate::error::{ApiError, Result};
use crate::models::{NewTranslation, PageParams, PageResponse, SetTextParams, Translation};

/// Handler for GET /api/translations
///
/// Lists translations one page at a time, ordered by wording.
pub async fn get_page(
    State(state): State<AppState>,
    Query(params): Query<PageParams>,
) -> Result<Json<PageResponse<Translation>>> {
    if let Some(validation_error) = params.validate() {
        warn!("Invalid paging request: {}", validation_error);
        return Err(ApiError::InvalidRequest(validation_error));
    }
    debug!(
        "Page request for translations: page {} size {}",
        params.page, params.size
    );

    Ok(Json(
        state.translations.get_page(params.page, params.size).await,
    ))
}

/// Handler for GET /api/translations/find/byId/:id
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<u64>,
) -> Result<Json<Translation>> {
    debug!("Find request for translation id {}", id);
    state
        .translations
        .get_by_id(id)
        .await
        .map(Json)
        .ok_or_else(|| ApiError::NotFound(format!("translation with id {} doesn't exist", id)))
}

/// Handler for GET /api/translations/find/byTranslation/:translation
pub async fn get_by_translated_text(
    State(state): State<AppState>,
    Path(translation): Path<String>,
) -> Result<Json<Translation>> {
    debug!("Find request for translation '{}'", translation);
    state
        .translations
        .get_by_translated_text(&translation)
        .await
        .map(Json)
        .ok_or_else(|| ApiError::NotFound(format!("translation '{}' doesn't exist", translation)))
}

/// Handler for POST /api/translations/create
pub async fn create(
    State(state): State<AppState>,
    Json(req): Json<NewTranslation>,
) -> Result<Json<Translation>> {
    if let Some(validation_error) = req.validate() {
        warn!("Invalid translation create request: {}", validation_error);
        return Err(ApiError::InvalidRequest(validation_error));
    }
    debug!("Create request for translation '{}'", req.translated_text);

    let translation = Translation {
        id: 0,
        translated_text: req.translated_text,
        text_id: req.text_id,
    };
    Ok(Json(state.translations.save(translation).await?))
}

/// Handler for POST /api/translations/create/bulk
pub async fn create_bulk(
    State(state): State<AppState>,
    Json(reqs): Json<Vec<NewTranslation>>,
) -> Result<Json<Vec<String>>> {
    for req in &reqs {
        if let Some(validation_error) = req.validate() {
            warn!("Invalid translation bulk request: {}", validation_error);
            return Err(ApiError::InvalidRequest(validation_error));
        }
    }
    debug!("Bulk create request for {} translation(s)", reqs.len());

    let translations = reqs
        .into_iter()
        .map(|req| Translation {
            id: 0,
            translated_text: req.translated_text,
            text_id: req.text_id,
        })
        .collect();
    Ok(Json(state.translations.bulk_save(translations).await?))
}

/// Handler for PUT /api/translations/setText
///
/// Attaches an existing translation to an existing text.
pub async fn set_text(
    State(state): State<AppState>,
    Query(params): Query<SetTextParams>,
) -> Result<Json<Translation>> {
    debug!(
        "Attach request: translation {} onto text {}",
        params.translation_id, params.text_id
    );
    Ok(Json(
        state
            .translations
            .set_text(params.translation_id, params.text_id)
            .await?,
    ))
}

/// Handler for DELETE /api/translations/delete/:id
///
/// Removes a translation and returns the removed row.
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<u64>,
) -> Result<Json<Translation>> {
    debug!("Delete request for translation id {}", id);
    Ok(Json(state.translations.delete(id).await?))
}
