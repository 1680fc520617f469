//! Text Repository
//!
//! In-memory table of texts with paginated listing and language joins.

use std::collections::HashMap;

use crate::models::Text;

/// In-memory text table.
#[derive(Debug, Default)]
pub struct TextRepository {
    rows: HashMap<u64, Text>,
    next_id: u64,
}

impl TextRepository {
    /// Creates an empty repository.
    pub fn new() -> Self {
        Self::default()
    }

    /// Looks up one text by id.
    pub fn find_by_id(&self, id: u64) -> Option<Text> {
        self.rows.get(&id).cloned()
    }

    /// Looks up one text by exact content.
    pub fn find_by_content(&self, content: &str) -> Option<Text> {
        self.rows
            .values()
            .find(|text| text.content == content)
            .cloned()
    }

    /// Returns one 1-based page of texts ordered by content, plus the total
    /// row count.
    pub fn find_page(&self, page: usize, size: usize) -> (Vec<Text>, usize) {
        let mut all: Vec<Text> = self.rows.values().cloned().collect();
        all.sort_by(|a, b| a.content.cmp(&b.content));
        let total = all.len();
        let items = all
            .into_iter()
            .skip(page.saturating_sub(1).saturating_mul(size))
            .take(size)
            .collect();
        (items, total)
    }

    /// Contents of the texts linked to a language, ordered by text id.
    pub fn find_by_language(&self, language_id: u64) -> Vec<String> {
        let mut linked: Vec<&Text> = self
            .rows
            .values()
            .filter(|text| text.language_ids.contains(&language_id))
            .collect();
        linked.sort_by_key(|text| text.id);
        linked.iter().map(|text| text.content.clone()).collect()
    }

    /// Contents of the texts linked to a language, ordered alphabetically.
    pub fn find_by_language_sorted(&self, language_id: u64) -> Vec<String> {
        let mut contents = self.find_by_language(language_id);
        contents.sort();
        contents
    }

    /// Inserts or updates a text, assigning an id to new rows.
    ///
    /// A text with id 0 is treated as new and gets the next free id.
    /// Returns the stored row.
    pub fn save(&mut self, mut text: Text) -> Text {
        if text.id == 0 {
            self.next_id += 1;
            text.id = self.next_id;
        }
        self.rows.insert(text.id, text.clone());
        text
    }

    /// Saves a batch of texts, returning the stored rows in order.
    pub fn save_all(&mut self, texts: Vec<Text>) -> Vec<Text> {
        texts.into_iter().map(|text| self.save(text)).collect()
    }

    /// Removes a text by id, returning the removed row if it existed.
    pub fn delete_by_id(&mut self, id: u64) -> Option<Text> {
        self.rows.remove(&id)
    }

    /// Drops a language from every text's link list.
    pub fn unlink_language(&mut self, language_id: u64) {
        for text in self.rows.values_mut() {
            text.language_ids.retain(|id| *id != language_id);
        }
    }

    /// Number of stored texts.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Returns true if no texts are stored.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}
