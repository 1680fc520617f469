//! Text Service
//!
//! Business operations for texts, with a bounded FIFO cache in front of
//! the repository.

use std::sync::Arc;

use tokio::sync::RwLock;
use tracing::debug;

use crate::cache::{BoundedCache, CacheKey};
use crate::counter::RequestCounter;
use crate::error::{ApiError, Result};
use crate::models::{PageResponse, Text};
use crate::repository::{LanguageRepository, TextRepository, TranslationRepository};

// == Text Service ==
/// Business operations for texts.
///
/// By-id and by-content lookups are cached under independent keys.
/// Deletion drops the id slot only, so a content-keyed entry can outlive
/// its row until it is evicted.
#[derive(Clone)]
pub struct TextService {
    texts: Arc<RwLock<TextRepository>>,
    translations: Arc<RwLock<TranslationRepository>>,
    languages: Arc<RwLock<LanguageRepository>>,
    cache: Arc<RwLock<BoundedCache<CacheKey, Text>>>,
    requests: Arc<RequestCounter>,
}

impl TextService {
    // == Constructor ==
    /// Creates a new service over shared repositories.
    ///
    /// # Arguments
    /// * `texts` - Shared text table
    /// * `translations` - Shared translation table, detached on delete
    /// * `languages` - Shared language table, consulted for link checks
    /// * `cache_capacity` - Maximum entries in this service's cache
    /// * `requests` - Shared request counter
    pub fn new(
        texts: Arc<RwLock<TextRepository>>,
        translations: Arc<RwLock<TranslationRepository>>,
        languages: Arc<RwLock<LanguageRepository>>,
        cache_capacity: usize,
        requests: Arc<RequestCounter>,
    ) -> Self {
        Self {
            texts,
            translations,
            languages,
            cache: Arc::new(RwLock::new(BoundedCache::new(cache_capacity))),
            requests,
        }
    }

    // == Read Operations ==
    /// Returns one page of texts ordered by content, bypassing the cache.
    pub async fn get_page(&self, page: usize, size: usize) -> PageResponse<Text> {
        self.requests.record("text.get_page");

        let (texts, total) = self.texts.read().await.find_page(page, size);
        PageResponse::new(texts, page, size, total)
    }

    /// Retrieves a text by id, serving repeated lookups from the cache.
    pub async fn get_by_id(&self, text_id: u64) -> Option<Text> {
        self.requests.record("text.get_by_id");

        let key = CacheKey::Id(text_id);
        if let Some(text) = self.cache.read().await.get(&key) {
            return Some(text.clone());
        }

        let text = self.texts.read().await.find_by_id(text_id);
        if let Some(text) = &text {
            self.cache.write().await.put(key, text.clone());
        }
        text
    }

    /// Retrieves a text by exact content, serving repeated lookups from the
    /// cache.
    pub async fn get_by_content(&self, content: &str) -> Option<Text> {
        self.requests.record("text.get_by_content");

        let key = CacheKey::from(content);
        if let Some(text) = self.cache.read().await.get(&key) {
            return Some(text.clone());
        }

        let text = self.texts.read().await.find_by_content(content);
        if let Some(text) = &text {
            self.cache.write().await.put(key, text.clone());
        }
        text
    }

    /// Contents of the texts linked to a language, resolved by language
    /// name. Unknown languages yield an empty list.
    pub async fn find_by_language(&self, language_name: &str) -> Vec<String> {
        self.requests.record("text.find_by_language");

        let Some(language) = self.languages.read().await.find_by_name(language_name) else {
            return Vec::new();
        };
        self.texts.read().await.find_by_language(language.id)
    }

    /// Same as [`find_by_language`](Self::find_by_language) but ordered
    /// alphabetically.
    pub async fn find_by_language_sorted(&self, language_name: &str) -> Vec<String> {
        self.requests.record("text.find_by_language_sorted");

        let Some(language) = self.languages.read().await.find_by_name(language_name) else {
            return Vec::new();
        };
        self.texts.read().await.find_by_language_sorted(language.id)
    }

    // == Write Operations ==
    /// Persists a new text and caches it under its id key.
    ///
    /// Duplicate content is not stored twice; the already stored row is
    /// returned instead. Every linked language must exist.
    pub async fn save(&self, text: Text) -> Result<Text> {
        self.requests.record("text.save");

        if let Some(existing) = self.texts.read().await.find_by_content(&text.content) {
            return Ok(existing);
        }

        self.ensure_languages_exist(&text.language_ids).await?;

        let saved = self.texts.write().await.save(text);
        self.cache
            .write()
            .await
            .put(CacheKey::Id(saved.id), saved.clone());
        Ok(saved)
    }

    /// Persists a batch of texts, caching each under its id key.
    ///
    /// Returns one "content - created" line per stored text.
    pub async fn bulk_save(&self, texts: Vec<Text>) -> Result<Vec<String>> {
        self.requests.record("text.bulk_save");

        for text in &texts {
            self.ensure_languages_exist(&text.language_ids).await?;
        }

        let saved = self.texts.write().await.save_all(texts);

        {
            let mut cache = self.cache.write().await;
            for text in &saved {
                cache.put(CacheKey::Id(text.id), text.clone());
            }
        }

        Ok(saved
            .into_iter()
            .map(|text| format!("{} - created", text.content))
            .collect())
    }

    /// Rewords a text and refreshes its id-keyed cache slot.
    ///
    /// A blank or missing replacement leaves the content as it was.
    pub async fn update_content(&self, text_id: u64, new_content: Option<String>) -> Result<Text> {
        self.requests.record("text.update_content");

        let Some(mut text) = self.texts.read().await.find_by_id(text_id) else {
            return Err(ApiError::NotFound(format!(
                "text with id {} doesn't exist",
                text_id
            )));
        };

        if let Some(content) = new_content.filter(|content| !content.trim().is_empty()) {
            text.content = content;
        }

        let saved = self.texts.write().await.save(text);
        self.cache
            .write()
            .await
            .put(CacheKey::Id(saved.id), saved.clone());
        Ok(saved)
    }

    /// Deletes a text and detaches its translations.
    ///
    /// The id-keyed cache slot is dropped before the row is looked up, so
    /// the slot is cleared even for ids that turn out not to exist. A
    /// content-keyed slot for the same text survives until it is evicted.
    pub async fn delete(&self, text_id: u64) -> Result<Text> {
        self.requests.record("text.delete");

        self.cache.write().await.remove(&CacheKey::Id(text_id));

        let removed = self.texts.write().await.delete_by_id(text_id);
        let Some(text) = removed else {
            return Err(ApiError::NotFound(format!(
                "text with id {} doesn't exist",
                text_id
            )));
        };

        let detached = self.translations.write().await.detach_text(text_id);
        if detached > 0 {
            debug!("Detached {} translation(s) from text {}", detached, text_id);
        }

        Ok(text)
    }

    // == Observability ==
    /// Number of stored texts.
    pub async fn count(&self) -> usize {
        self.texts.read().await.len()
    }

    /// Number of entries currently cached.
    pub async fn cached_count(&self) -> usize {
        self.cache.read().await.len()
    }

    async fn ensure_languages_exist(&self, language_ids: &[u64]) -> Result<()> {
        let languages = self.languages.read().await;
        for language_id in language_ids {
            if languages.find_by_id(*language_id).is_none() {
                return Err(ApiError::NotFound(format!(
                    "language with id {} doesn't exist",
                    language_id
                )));
            }
        }
        Ok(())
    }
}

// == Tests ==
#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Language, Translation};

    fn setup() -> (
        TextService,
        Arc<RwLock<TextRepository>>,
        Arc<RwLock<TranslationRepository>>,
        Arc<RwLock<LanguageRepository>>,
    ) {
        let texts = Arc::new(RwLock::new(TextRepository::new()));
        let translations = Arc::new(RwLock::new(TranslationRepository::new()));
        let languages = Arc::new(RwLock::new(LanguageRepository::new()));
        let service = TextService::new(
            Arc::clone(&texts),
            Arc::clone(&translations),
            Arc::clone(&languages),
            5,
            Arc::new(RequestCounter::new()),
        );
        (service, texts, translations, languages)
    }

    fn text(content: &str, language_ids: Vec<u64>) -> Text {
        Text {
            id: 0,
            content: content.to_string(),
            language_ids,
        }
    }

    #[tokio::test]
    async fn test_get_page_math() {
        let (service, _, _, _) = setup();
        for content in ["cherry", "apple", "banana"] {
            service.save(text(content, vec![])).await.unwrap();
        }

        let page = service.get_page(1, 2).await;
        assert_eq!(page.total_elements, 3);
        assert_eq!(page.total_pages, 2);
        let contents: Vec<&str> = page.content.iter().map(|t| t.content.as_str()).collect();
        assert_eq!(contents, vec!["apple", "banana"]);
    }

    #[tokio::test]
    async fn test_save_caches_new_text() {
        let (service, texts, _, _) = setup();
        let saved = service.save(text("hello", vec![])).await.unwrap();

        texts.write().await.delete_by_id(saved.id);

        assert_eq!(service.get_by_id(saved.id).await.unwrap().content, "hello");
    }

    #[tokio::test]
    async fn test_save_deduplicates_by_content() {
        let (service, texts, _, _) = setup();
        let first = service.save(text("hello", vec![])).await.unwrap();
        let second = service.save(text("hello", vec![])).await.unwrap();

        assert_eq!(first.id, second.id);
        assert_eq!(texts.read().await.len(), 1);
    }

    #[tokio::test]
    async fn test_save_rejects_unknown_language() {
        let (service, _, _, _) = setup();
        let result = service.save(text("hello", vec![77])).await;
        assert!(matches!(result, Err(ApiError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_get_by_content_caches_under_content_key() {
        let (service, texts, _, _) = setup();
        let saved = service.save(text("good night", vec![])).await.unwrap();

        assert!(service.get_by_content("good night").await.is_some());
        texts.write().await.delete_by_id(saved.id);

        assert!(service.get_by_content("good night").await.is_some());
    }

    #[tokio::test]
    async fn test_update_content_rewrites_and_recaches() {
        let (service, texts, _, _) = setup();
        let saved = service.save(text("old wording", vec![])).await.unwrap();

        let updated = service
            .update_content(saved.id, Some("new wording".to_string()))
            .await
            .unwrap();
        assert_eq!(updated.content, "new wording");

        // The refreshed cache slot survives losing the row
        texts.write().await.delete_by_id(saved.id);
        assert_eq!(
            service.get_by_id(saved.id).await.unwrap().content,
            "new wording"
        );
    }

    #[tokio::test]
    async fn test_update_content_ignores_blank_replacement() {
        let (service, _, _, _) = setup();
        let saved = service.save(text("keep me", vec![])).await.unwrap();

        let updated = service
            .update_content(saved.id, Some("   ".to_string()))
            .await
            .unwrap();
        assert_eq!(updated.content, "keep me");

        let updated = service.update_content(saved.id, None).await.unwrap();
        assert_eq!(updated.content, "keep me");
    }

    #[tokio::test]
    async fn test_update_content_unknown_text_is_not_found() {
        let (service, _, _, _) = setup();
        let result = service.update_content(5, Some("x".to_string())).await;
        assert!(matches!(result, Err(ApiError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_delete_detaches_translations() {
        let (service, _, translations, _) = setup();
        let saved = service.save(text("source", vec![])).await.unwrap();
        let attached = translations.write().await.save(Translation {
            id: 0,
            translated_text: "quelle".to_string(),
            text_id: Some(saved.id),
        });

        service.delete(saved.id).await.unwrap();

        let row = translations.read().await.find_by_id(attached.id).unwrap();
        assert!(row.text_id.is_none());
    }

    #[tokio::test]
    async fn test_delete_drops_id_slot_but_not_content_slot() {
        let (service, _, _, _) = setup();
        let saved = service.save(text("doomed", vec![])).await.unwrap();
        service.get_by_content("doomed").await;

        service.delete(saved.id).await.unwrap();

        assert!(service.get_by_id(saved.id).await.is_none());
        // The content slot was never invalidated and still serves the row
        assert!(service.get_by_content("doomed").await.is_some());
    }

    #[tokio::test]
    async fn test_delete_unknown_text_is_not_found() {
        let (service, _, _, _) = setup();
        let result = service.delete(11).await;
        assert!(matches!(result, Err(ApiError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_find_by_language_resolves_name() {
        let (service, texts, _, languages) = setup();
        let french = languages.write().await.save(Language {
            id: 0,
            name: "french".to_string(),
        });
        texts.write().await.save(text("zebra", vec![french.id]));
        texts.write().await.save(text("ant", vec![french.id]));

        assert_eq!(service.find_by_language("french").await, vec!["zebra", "ant"]);
        assert_eq!(
            service.find_by_language_sorted("french").await,
            vec!["ant", "zebra"]
        );
        assert!(service.find_by_language("klingon").await.is_empty());
    }

    #[tokio::test]
    async fn test_bulk_save_returns_created_lines() {
        let (service, texts, _, _) = setup();
        let lines = service
            .bulk_save(vec![text("one", vec![]), text("two", vec![])])
            .await
            .unwrap();

        assert_eq!(lines, vec!["one - created", "two - created"]);
        assert_eq!(texts.read().await.len(), 2);
    }
}
