//! Translation Service
//!
//! Business operations for translations, with a bounded FIFO cache in
//! front of the repository.

use std::sync::Arc;

use tokio::sync::RwLock;

use crate::cache::{BoundedCache, CacheKey};
use crate::counter::RequestCounter;
use crate::error::{ApiError, Result};
use crate::models::{PageResponse, Translation};
use crate::repository::{TextRepository, TranslationRepository};

// == Translation Service ==
/// Business operations for translations.
///
/// Only by-id lookups are cached; the by-wording lookup always goes to
/// the repository.
#[derive(Clone)]
pub struct TranslationService {
    translations: Arc<RwLock<TranslationRepository>>,
    texts: Arc<RwLock<TextRepository>>,
    cache: Arc<RwLock<BoundedCache<CacheKey, Translation>>>,
    requests: Arc<RequestCounter>,
}

impl TranslationService {
    // == Constructor ==
    /// Creates a new service over shared repositories.
    ///
    /// # Arguments
    /// * `translations` - Shared translation table
    /// * `texts` - Shared text table, consulted for attachment checks
    /// * `cache_capacity` - Maximum entries in this service's cache
    /// * `requests` - Shared request counter
    pub fn new(
        translations: Arc<RwLock<TranslationRepository>>,
        texts: Arc<RwLock<TextRepository>>,
        cache_capacity: usize,
        requests: Arc<RequestCounter>,
    ) -> Self {
        Self {
            translations,
            texts,
            cache: Arc::new(RwLock::new(BoundedCache::new(cache_capacity))),
            requests,
        }
    }

    // == Read Operations ==
    /// Returns one page of translations ordered by wording, bypassing the
    /// cache.
    pub async fn get_page(&self, page: usize, size: usize) -> PageResponse<Translation> {
        self.requests.record("translation.get_page");

        let (translations, total) = self.translations.read().await.find_page(page, size);
        PageResponse::new(translations, page, size, total)
    }

    /// Retrieves a translation by id, serving repeated lookups from the
    /// cache.
    pub async fn get_by_id(&self, translation_id: u64) -> Option<Translation> {
        self.requests.record("translation.get_by_id");

        let key = CacheKey::Id(translation_id);
        if let Some(translation) = self.cache.read().await.get(&key) {
            return Some(translation.clone());
        }

        let translation = self.translations.read().await.find_by_id(translation_id);
        if let Some(translation) = &translation {
            self.cache.write().await.put(key, translation.clone());
        }
        translation
    }

    /// Retrieves a translation by exact wording, straight from the
    /// repository.
    pub async fn get_by_translated_text(&self, translated_text: &str) -> Option<Translation> {
        self.requests.record("translation.get_by_translated_text");

        self.translations
            .read()
            .await
            .find_by_translated_text(translated_text)
    }

    // == Write Operations ==
    /// Persists a new translation and caches it under its id key.
    ///
    /// When a text id is given, that text must exist.
    pub async fn save(&self, translation: Translation) -> Result<Translation> {
        self.requests.record("translation.save");

        self.ensure_text_exists(translation.text_id).await?;

        let saved = self.translations.write().await.save(translation);
        self.cache
            .write()
            .await
            .put(CacheKey::Id(saved.id), saved.clone());
        Ok(saved)
    }

    /// Persists a batch of translations, caching each under its id key.
    ///
    /// Returns one "wording - created" line per stored translation.
    pub async fn bulk_save(&self, translations: Vec<Translation>) -> Result<Vec<String>> {
        self.requests.record("translation.bulk_save");

        for translation in &translations {
            self.ensure_text_exists(translation.text_id).await?;
        }

        let saved = self.translations.write().await.save_all(translations);

        {
            let mut cache = self.cache.write().await;
            for translation in &saved {
                cache.put(CacheKey::Id(translation.id), translation.clone());
            }
        }

        Ok(saved
            .into_iter()
            .map(|translation| format!("{} - created", translation.translated_text))
            .collect())
    }

    /// Attaches a translation to a text and refreshes the id-keyed cache
    /// slot.
    pub async fn set_text(&self, translation_id: u64, text_id: u64) -> Result<Translation> {
        self.requests.record("translation.set_text");

        let mut translation = self
            .translations
            .read()
            .await
            .find_by_id(translation_id)
            .ok_or_else(|| {
                ApiError::NotFound(format!(
                    "translation with id {} doesn't exist",
                    translation_id
                ))
            })?;

        if self.texts.read().await.find_by_id(text_id).is_none() {
            return Err(ApiError::NotFound(format!(
                "text with id {} doesn't exist",
                text_id
            )));
        }

        translation.text_id = Some(text_id);
        let saved = self.translations.write().await.save(translation);
        self.cache
            .write()
            .await
            .put(CacheKey::Id(saved.id), saved.clone());
        Ok(saved)
    }

    /// Deletes a translation, returning the removed row.
    pub async fn delete(&self, translation_id: u64) -> Result<Translation> {
        self.requests.record("translation.delete");

        let removed = self.translations.write().await.delete_by_id(translation_id);
        let Some(translation) = removed else {
            return Err(ApiError::NotFound(format!(
                "translation with id {} doesn't exist",
                translation_id
            )));
        };

        self.cache
            .write()
            .await
            .remove(&CacheKey::Id(translation_id));

        Ok(translation)
    }

    // == Observability ==
    /// Number of stored translations.
    pub async fn count(&self) -> usize {
        self.translations.read().await.len()
    }

    /// Number of entries currently cached.
    pub async fn cached_count(&self) -> usize {
        self.cache.read().await.len()
    }

    async fn ensure_text_exists(&self, text_id: Option<u64>) -> Result<()> {
        let Some(text_id) = text_id else {
            return Ok(());
        };
        if self.texts.read().await.find_by_id(text_id).is_none() {
            return Err(ApiError::NotFound(format!(
                "text with id {} doesn't exist",
                text_id
            )));
        }
        Ok(())
    }
}
