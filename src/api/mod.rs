//! API Module
//!
//! HTTP handlers and routing for the translation catalog REST API.
//!
//! # Endpoints
//! Languages live under `/api/languages`, texts under `/api/texts` and
//! translations under `/api/translations`. `/stats` exposes the request
//! counter together with table and cache sizes, `/health` is a liveness
//! probe.

pub mod languages;
pub mod routes;
pub mod texts;
pub mod translations;

pub use routes::create_router;

use std::sync::Arc;

use tokio::sync::RwLock;

use crate::config::Config;
use crate::counter::RequestCounter;
use crate::repository::{LanguageRepository, TextRepository, TranslationRepository};
use crate::services::{LanguageService, TextService, TranslationService};

// == Application State ==
/// Shared state handed to every handler.
///
/// The three services share the repositories and the request counter;
/// each service owns its own cache.
#[derive(Clone)]
pub struct AppState {
    /// Language operations
    pub languages: LanguageService,
    /// Text operations
    pub texts: TextService,
    /// Translation operations
    pub translations: TranslationService,
    /// Request counter shared with the services
    pub requests: Arc<RequestCounter>,
}

impl AppState {
    /// Creates fresh repositories, caches, and services.
    ///
    /// # Arguments
    /// * `cache_capacity` - Maximum entries per entity cache
    pub fn new(cache_capacity: usize) -> Self {
        let languages = Arc::new(RwLock::new(LanguageRepository::new()));
        let texts = Arc::new(RwLock::new(TextRepository::new()));
        let translations = Arc::new(RwLock::new(TranslationRepository::new()));
        let requests = Arc::new(RequestCounter::new());

        Self {
            languages: LanguageService::new(
                Arc::clone(&languages),
                Arc::clone(&texts),
                cache_capacity,
                Arc::clone(&requests),
            ),
            texts: TextService::new(
                Arc::clone(&texts),
                Arc::clone(&translations),
                Arc::clone(&languages),
                cache_capacity,
                Arc::clone(&requests),
            ),
            translations: TranslationService::new(
                Arc::clone(&translations),
                Arc::clone(&texts),
                cache_capacity,
                Arc::clone(&requests),
            ),
            requests,
        }
    }

    /// Creates a new AppState from configuration.
    pub fn from_config(config: &Config) -> Self {
        Self::new(config.cache_capacity)
    }
}
