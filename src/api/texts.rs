//! Text Handlers
//!
//! HTTP request handlers for the `/api/texts` endpoints.

use axum::{
    extract::{Path, Query, State},
    Json,
};
use tracing::{debug, warn};

use crate::api::AppState;
use crate::error::{ApiError, Result};
use crate::models::{
    ChangeTextParams, MessageResponse, NewText, PageParams, PageResponse, Text,
};

/// Handler for GET /api/texts
///
/// Lists texts one page at a time, ordered by content.
pub async fn get_page(
    State(state): State<AppState>,
    Query(params): Query<PageParams>,
) -> Result<Json<PageResponse<Text>>> {
    if let Some(validation_error) = params.validate() {
        warn!("Invalid paging request: {}", validation_error);
        return Err(ApiError::InvalidRequest(validation_error));
    }
    debug!("Page request for texts: page {} size {}", params.page, params.size);

    Ok(Json(state.texts.get_page(params.page, params.size).await))
}

/// Handler for GET /api/texts/find/byId/:id
pub async fn get_by_id(State(state): State<AppState>, Path(id): Path<u64>) -> Result<Json<Text>> {
    debug!("Find request for text id {}", id);
    state
        .texts
        .get_by_id(id)
        .await
        .map(Json)
        .ok_or_else(|| ApiError::NotFound(format!("text with id {} doesn't exist", id)))
}

/// Handler for GET /api/texts/find/byText/:text
pub async fn get_by_content(
    State(state): State<AppState>,
    Path(text): Path<String>,
) -> Result<Json<Text>> {
    debug!("Find request for text '{}'", text);
    state
        .texts
        .get_by_content(&text)
        .await
        .map(Json)
        .ok_or_else(|| ApiError::NotFound(format!("text '{}' doesn't exist", text)))
}

/// Handler for GET /api/texts/find/byLanguage/:language
///
/// Contents of the texts linked to a language, in storage order.
pub async fn get_by_language(
    State(state): State<AppState>,
    Path(language): Path<String>,
) -> Json<Vec<String>> {
    debug!("Find request for texts in language '{}'", language);
    Json(state.texts.find_by_language(&language).await)
}

/// Handler for GET /api/texts/find/byLanguage/sort/:language
///
/// Contents of the texts linked to a language, alphabetically.
pub async fn get_by_language_sorted(
    State(state): State<AppState>,
    Path(language): Path<String>,
) -> Json<Vec<String>> {
    debug!("Sorted find request for texts in language '{}'", language);
    Json(state.texts.find_by_language_sorted(&language).await)
}

/// Handler for POST /api/texts/create
pub async fn create(State(state): State<AppState>, Json(req): Json<NewText>) -> Result<Json<Text>> {
    if let Some(validation_error) = req.validate() {
        warn!("Invalid text create request: {}", validation_error);
        return Err(ApiError::InvalidRequest(validation_error));
    }
    debug!("Create request for text '{}'", req.content);

    let text = Text {
        id: 0,
        content: req.content,
        language_ids: req.language_ids,
    };
    Ok(Json(state.texts.save(text).await?))
}

/// Handler for POST /api/texts/create/bulk
pub async fn create_bulk(
    State(state): State<AppState>,
    Json(reqs): Json<Vec<NewText>>,
) -> Result<Json<Vec<String>>> {
    for req in &reqs {
        if let Some(validation_error) = req.validate() {
            warn!("Invalid text bulk request: {}", validation_error);
            return Err(ApiError::InvalidRequest(validation_error));
        }
    }
    debug!("Bulk create request for {} text(s)", reqs.len());

    let texts = reqs
        .into_iter()
        .map(|req| Text {
            id: 0,
            content: req.content,
            language_ids: req.language_ids,
        })
        .collect();
    Ok(Json(state.texts.bulk_save(texts).await?))
}

/// Handler for PUT /api/texts/change
///
/// Rewords a text; a blank or missing replacement leaves it unchanged.
pub async fn change(
    State(state): State<AppState>,
    Query(params): Query<ChangeTextParams>,
) -> Result<Json<Text>> {
    debug!("Change request for text id {}", params.text_id);
    Ok(Json(
        state.texts.update_content(params.text_id, params.text).await?,
    ))
}

/// Handler for DELETE /api/texts/delete/byId/:id
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<u64>,
) -> Result<Json<MessageResponse>> {
    debug!("Delete request for text id {}", id);
    let text = state.texts.delete(id).await?;
    Ok(Json(MessageResponse::new(format!(
        "text '{}' deleted",
        text.content
    ))))
}
