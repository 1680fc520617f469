//! Language Repository
//!
//! In-memory table of languages with finders by id and by name.

use std::collections::HashMap;

use crate::models::Language;

/// In-memory language table.
#[derive(Debug, Default)]
pub struct LanguageRepository {
    rows: HashMap<u64, Language>,
    next_id: u64,
}

impl LanguageRepository {
    /// Creates an empty repository.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns every language, ordered by id.
    pub fn find_all(&self) -> Vec<Language> {
        let mut all: Vec<Language> = self.rows.values().cloned().collect();
        all.sort_by_key(|language| language.id);
        all
    }

    /// Looks up one language by id.
    pub fn find_by_id(&self, id: u64) -> Option<Language> {
        self.rows.get(&id).cloned()
    }

    /// Looks up one language by exact name.
    pub fn find_by_name(&self, name: &str) -> Option<Language> {
        self.rows
            .values()
            .find(|language| language.name == name)
            .cloned()
    }

    /// Inserts or updates a language, assigning an id to new rows.
    ///
    /// A language with id 0 is treated as new and gets the next free id.
    /// Returns the stored row.
    pub fn save(&mut self, mut language: Language) -> Language {
        if language.id == 0 {
            self.next_id += 1;
            language.id = self.next_id;
        }
        self.rows.insert(language.id, language.clone());
        language
    }

    /// Saves a batch of languages, returning the stored rows in order.
    pub fn save_all(&mut self, languages: Vec<Language>) -> Vec<Language> {
        languages
            .into_iter()
            .map(|language| self.save(language))
            .collect()
    }

    /// Removes a language by id, returning the removed row if it existed.
    pub fn delete_by_id(&mut self, id: u64) -> Option<Language> {
        self.rows.remove(&id)
    }

    /// Number of stored languages.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Returns true if no languages are stored.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}
