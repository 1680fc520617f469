//! Translation Repository
//!
//! In-memory table of translations with paginated listing and text joins.

use std::collections::HashMap;

use crate::models::Translation;

/// In-memory translation table.
#[derive(Debug, Default)]
pub struct TranslationRepository {
    rows: HashMap<u64, Translation>,
    next_id: u64,
}

impl TranslationRepository {
    /// Creates an empty repository.
    pub fn new() -> Self {
        Self::default()
    }

    /// Looks up one translation by id.
    pub fn find_by_id(&self, id: u64) -> Option<Translation> {
        self.rows.get(&id).cloned()
    }

    /// Looks up one translation by exact wording.
    pub fn find_by_translated_text(&self, translated_text: &str) -> Option<Translation> {
        self.rows
            .values()
            .find(|translation| translation.translated_text == translated_text)
            .cloned()
    }

    /// Returns one 1-based page of translations ordered by wording, plus the
    /// total row count.
    pub fn find_page(&self, page: usize, size: usize) -> (Vec<Translation>, usize) {
        let mut all: Vec<Translation> = self.rows.values().cloned().collect();
        all.sort_by(|a, b| a.translated_text.cmp(&b.translated_text));
        let total = all.len();
        let items = all
            .into_iter()
            .skip(page.saturating_sub(1).saturating_mul(size))
            .take(size)
            .collect();
        (items, total)
    }

    /// Inserts or updates a translation, assigning an id to new rows.
    ///
    /// A translation with id 0 is treated as new and gets the next free id.
    /// Returns the stored row.
    pub fn save(&mut self, mut translation: Translation) -> Translation {
        if translation.id == 0 {
            self.next_id += 1;
            translation.id = self.next_id;
        }
        self.rows.insert(translation.id, translation.clone());
        translation
    }

    /// Saves a batch of translations, returning the stored rows in order.
    pub fn save_all(&mut self, translations: Vec<Translation>) -> Vec<Translation> {
        translations
            .into_iter()
            .map(|translation| self.save(translation))
            .collect()
    }

    /// Removes a translation by id, returning the removed row if it existed.
    pub fn delete_by_id(&mut self, id: u64) -> Option<Translation> {
        self.rows.remove(&id)
    }

    /// Detaches every translation pointing at a text, returning how many
    /// rows were touched.
    pub fn detach_text(&mut self, text_id: u64) -> usize {
        let mut detached = 0;
        for translation in self.rows.values_mut() {
            if translation.text_id == Some(text_id) {
                translation.text_id = None;
                detached += 1;
            }
        }
        detached
    }

    /// Number of stored translations.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Returns true if no translations are stored.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}
