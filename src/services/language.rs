//! Language Service
//!
//! Business operations for languages, with a bounded FIFO cache in front
//! of the repository.

use std::sync::Arc;

use tokio::sync::RwLock;

use crate::cache::{BoundedCache, CacheKey};
use crate::counter::RequestCounter;
use crate::error::{ApiError, Result};
use crate::models::Language;
use crate::repository::{LanguageRepository, TextRepository};

// == Language Service ==
/// Business operations for languages.
///
/// Reads go through a bounded FIFO cache. By-id lookups are stored under
/// the id key and by-name lookups under the name key, and the two slots
/// for one language are refreshed independently: link updates rewrite the
/// name slot only, and deletion drops the name slot only, so an id-keyed
/// entry can keep serving a removed language until it is evicted.
#[derive(Clone)]
pub struct LanguageService {
    languages: Arc<RwLock<LanguageRepository>>,
    texts: Arc<RwLock<TextRepository>>,
    cache: Arc<RwLock<BoundedCache<CacheKey, Language>>>,
    requests: Arc<RequestCounter>,
}

impl LanguageService {
    // == Constructor ==
    /// Creates a new service over shared repositories.
    ///
    /// # Arguments
    /// * `languages` - Shared language table
    /// * `texts` - Shared text table, needed for link maintenance
    /// * `cache_capacity` - Maximum entries in this service's cache
    /// * `requests` - Shared request counter
    pub fn new(
        languages: Arc<RwLock<LanguageRepository>>,
        texts: Arc<RwLock<TextRepository>>,
        cache_capacity: usize,
        requests: Arc<RequestCounter>,
    ) -> Self {
        Self {
            languages,
            texts,
            cache: Arc::new(RwLock::new(BoundedCache::new(cache_capacity))),
            requests,
        }
    }

    // == Read Operations ==
    /// Returns every stored language, bypassing the cache.
    pub async fn get_all(&self) -> Vec<Language> {
        self.requests.record("language.get_all");
        self.languages.read().await.find_all()
    }

    /// Retrieves a language by id, serving repeated lookups from the cache.
    pub async fn get_by_id(&self, language_id: u64) -> Option<Language> {
        self.requests.record("language.get_by_id");

        let key = CacheKey::Id(language_id);
        if let Some(language) = self.cache.read().await.get(&key) {
            return Some(language.clone());
        }

        let language = self.languages.read().await.find_by_id(language_id);
        if let Some(language) = &language {
            self.cache.write().await.put(key, language.clone());
        }
        language
    }

    /// Retrieves a language by name, serving repeated lookups from the cache.
    pub async fn get_by_name(&self, name: &str) -> Option<Language> {
        self.requests.record("language.get_by_name");

        let key = CacheKey::from(name);
        if let Some(language) = self.cache.read().await.get(&key) {
            return Some(language.clone());
        }

        let language = self.languages.read().await.find_by_name(name);
        if let Some(language) = &language {
            self.cache.write().await.put(key, language.clone());
        }
        language
    }

    // == Write Operations ==
    /// Persists a new language without touching the cache.
    pub async fn save(&self, language: Language) -> Language {
        self.requests.record("language.save");
        self.languages.write().await.save(language)
    }

    /// Persists a batch of languages, caching each under its id key.
    ///
    /// Returns one "name - created" line per stored language.
    pub async fn bulk_save(&self, languages: Vec<Language>) -> Vec<String> {
        self.requests.record("language.bulk_save");

        let saved = self.languages.write().await.save_all(languages);

        {
            let mut cache = self.cache.write().await;
            for language in &saved {
                cache.put(CacheKey::Id(language.id), language.clone());
            }
        }

        saved
            .into_iter()
            .map(|language| format!("{} - created", language.name))
            .collect()
    }

    /// Deletes a language and unlinks it from every text.
    ///
    /// Only the name-keyed cache slot is invalidated; an id-keyed slot for
    /// the same language survives until it is evicted.
    pub async fn delete(&self, language_id: u64) -> Result<Language> {
        self.requests.record("language.delete");

        let removed = self.languages.write().await.delete_by_id(language_id);
        let Some(language) = removed else {
            return Err(ApiError::NotFound(format!(
                "language with id {} doesn't exist",
                language_id
            )));
        };

        self.texts.write().await.unlink_language(language_id);
        self.cache
            .write()
            .await
            .remove(&CacheKey::from(language.name.as_str()));

        Ok(language)
    }

    // == Link Maintenance ==
    /// Links a text to the language and refreshes the name-keyed cache slot.
    pub async fn add_text(&self, language_id: u64, text_id: u64) -> Result<Language> {
        self.requests.record("language.add_text");

        let language = self
            .languages
            .read()
            .await
            .find_by_id(language_id)
            .ok_or_else(|| {
                ApiError::NotFound(format!("language with id {} doesn't exist", language_id))
            })?;
        let text = self
            .texts
            .read()
            .await
            .find_by_id(text_id)
            .ok_or_else(|| ApiError::NotFound(format!("text with id {} doesn't exist", text_id)))?;

        if !text.language_ids.contains(&language_id) {
            let mut updated = text;
            updated.language_ids.push(language_id);
            self.texts.write().await.save(updated);
        }

        self.cache
            .write()
            .await
            .put(CacheKey::from(language.name.as_str()), language.clone());
        Ok(language)
    }

    /// Unlinks a text from the language and refreshes the name-keyed cache
    /// slot.
    pub async fn remove_text(&self, language_id: u64, text_id: u64) -> Result<Language> {
        self.requests.record("language.remove_text");

        let text = self
            .texts
            .read()
            .await
            .find_by_id(text_id)
            .ok_or_else(|| ApiError::NotFound(format!("text with id {} doesn't exist", text_id)))?;
        let language = self
            .languages
            .read()
            .await
            .find_by_id(language_id)
            .ok_or_else(|| {
                ApiError::NotFound(format!("language with id {} doesn't exist", language_id))
            })?;

        if text.language_ids.contains(&language_id) {
            let mut updated = text;
            updated.language_ids.retain(|id| *id != language_id);
            self.texts.write().await.save(updated);
        }

        self.cache
            .write()
            .await
            .put(CacheKey::from(language.name.as_str()), language.clone());
        Ok(language)
    }

    // == Observability ==
    /// Number of stored languages.
    pub async fn count(&self) -> usize {
        self.languages.read().await.len()
    }

    /// Number of entries currently cached.
    pub async fn cached_count(&self) -> usize {
        self.cache.read().await.len()
    }
}

// == Tests ==
#[cfg(test)]
mod tests {
    use super::*;

    fn setup() -> (
        LanguageService,
        Arc<RwLock<LanguageRepository>>,
        Arc<RwLock<TextRepository>>,
        Arc<RequestCounter>,
    ) {
        let languages = Arc::new(RwLock::new(LanguageRepository::new()));
        let texts = Arc::new(RwLock::new(TextRepository::new()));
        let requests = Arc::new(RequestCounter::new());
        let service = LanguageService::new(
            Arc::clone(&languages),
            Arc::clone(&texts),
            5,
            Arc::clone(&requests),
        );
        (service, languages, texts, requests)
    }

    fn language(name: &str) -> Language {
        Language {
            id: 0,
            name: name.to_string(),
        }
    }

    fn text_row(content: &str, language_ids: Vec<u64>) -> crate::models::Text {
        crate::models::Text {
            id: 0,
            content: content.to_string(),
            language_ids,
        }
    }

    #[tokio::test]
    async fn test_get_by_id_serves_repeated_lookups_from_cache() {
        let (service, languages, _, _) = setup();
        let saved = service.save(language("french")).await;

        assert!(service.get_by_id(saved.id).await.is_some());

        // Drop the row behind the cache's back
        languages.write().await.delete_by_id(saved.id);

        let cached = service.get_by_id(saved.id).await;
        assert_eq!(cached.unwrap().name, "french");
    }

    #[tokio::test]
    async fn test_get_by_id_unknown_is_none() {
        let (service, _, _, _) = setup();
        assert!(service.get_by_id(42).await.is_none());
    }

    #[tokio::test]
    async fn test_get_by_name_caches_under_name_key() {
        let (service, languages, _, _) = setup();
        let saved = service.save(language("german")).await;

        assert!(service.get_by_name("german").await.is_some());
        languages.write().await.delete_by_id(saved.id);

        assert!(service.get_by_name("german").await.is_some());
    }

    #[tokio::test]
    async fn test_save_does_not_cache() {
        let (service, languages, _, _) = setup();
        let saved = service.save(language("spanish")).await;

        languages.write().await.delete_by_id(saved.id);

        assert!(service.get_by_id(saved.id).await.is_none());
    }

    #[tokio::test]
    async fn test_bulk_save_caches_by_id() {
        let (service, languages, _, _) = setup();
        let lines = service
            .bulk_save(vec![language("dutch"), language("polish")])
            .await;
        assert_eq!(lines, vec!["dutch - created", "polish - created"]);

        {
            let mut table = languages.write().await;
            table.delete_by_id(1);
            table.delete_by_id(2);
        }

        assert_eq!(service.get_by_id(1).await.unwrap().name, "dutch");
        assert_eq!(service.get_by_id(2).await.unwrap().name, "polish");
    }

    #[tokio::test]
    async fn test_delete_drops_name_slot_but_not_id_slot() {
        let (service, _, _, _) = setup();
        let saved = service.save(language("italian")).await;

        // Populate both cache slots
        service.get_by_id(saved.id).await;
        service.get_by_name("italian").await;

        service.delete(saved.id).await.unwrap();

        assert!(service.get_by_name("italian").await.is_none());
        // The id slot was never invalidated and still serves the old row
        assert_eq!(service.get_by_id(saved.id).await.unwrap().name, "italian");
    }

    #[tokio::test]
    async fn test_delete_unknown_language_is_not_found() {
        let (service, _, _, _) = setup();
        let result = service.delete(9).await;
        assert!(matches!(result, Err(ApiError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_delete_unlinks_texts() {
        let (service, _, texts, _) = setup();
        let saved = service.save(language("english")).await;
        let linked = texts.write().await.save(text_row("hello", vec![saved.id]));

        service.delete(saved.id).await.unwrap();

        let row = texts.read().await.find_by_id(linked.id).unwrap();
        assert!(row.language_ids.is_empty());
    }

    #[tokio::test]
    async fn test_add_text_links_once() {
        let (service, _, texts, _) = setup();
        let saved = service.save(language("french")).await;
        let row = texts.write().await.save(text_row("hello", vec![]));

        service.add_text(saved.id, row.id).await.unwrap();
        service.add_text(saved.id, row.id).await.unwrap();

        let row = texts.read().await.find_by_id(row.id).unwrap();
        assert_eq!(row.language_ids, vec![saved.id]);
    }

    #[tokio::test]
    async fn test_add_text_refreshes_name_slot() {
        let (service, languages, texts, _) = setup();
        let saved = service.save(language("norwegian")).await;
        let row = texts.write().await.save(text_row("hei", vec![]));

        service.add_text(saved.id, row.id).await.unwrap();
        languages.write().await.delete_by_id(saved.id);

        assert!(service.get_by_name("norwegian").await.is_some());
    }

    #[tokio::test]
    async fn test_add_text_missing_text_is_not_found() {
        let (service, _, _, _) = setup();
        let saved = service.save(language("french")).await;
        let result = service.add_text(saved.id, 99).await;
        assert!(matches!(result, Err(ApiError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_remove_text_drops_link() {
        let (service, _, texts, _) = setup();
        let saved = service.save(language("french")).await;
        let row = texts.write().await.save(text_row("bonjour", vec![saved.id]));

        service.remove_text(saved.id, row.id).await.unwrap();

        let row = texts.read().await.find_by_id(row.id).unwrap();
        assert!(row.language_ids.is_empty());
    }

    #[tokio::test]
    async fn test_operations_count_requests() {
        let (service, _, _, requests) = setup();

        service.get_all().await;
        service.get_by_id(1).await;
        service.get_by_name("x").await;

        assert_eq!(requests.count(), 3);
    }
}
