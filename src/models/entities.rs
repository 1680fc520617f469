//! Domain entities for the translation catalog
//!
//! Cross-references between entities are carried as plain ids rather than
//! nested objects. Views that need the other side of a relation resolve it
//! with an explicit lookup against the owning repository.

use serde::{Deserialize, Serialize};

/// A language that texts can be linked to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Language {
    /// Row id, assigned by the repository on first save
    pub id: u64,
    /// Language name, e.g. "french"
    pub name: String,
}

/// A source text awaiting translation.
///
/// The many-to-many relation to languages is owned here as `language_ids`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Text {
    /// Row id, assigned by the repository on first save
    pub id: u64,
    /// The text itself
    pub content: String,
    /// Ids of the languages this text is linked to
    #[serde(default)]
    pub language_ids: Vec<u64>,
}

/// A translation of one text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Translation {
    /// Row id, assigned by the repository on first save
    pub id: u64,
    /// The translated wording
    pub translated_text: String,
    /// Id of the text this translates, if still attached to one
    #[serde(default)]
    pub text_id: Option<u64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_language_round_trip() {
        let language = Language {
            id: 3,
            name: "german".to_string(),
        };
        let json = serde_json::to_string(&language).unwrap();
        let back: Language = serde_json::from_str(&json).unwrap();
        assert_eq!(back, language);
    }

    #[test]
    fn test_text_language_ids_default_to_empty() {
        let json = r#"{"id": 1, "content": "hello world"}"#;
        let text: Text = serde_json::from_str(json).unwrap();
        assert!(text.language_ids.is_empty());
    }

    #[test]
    fn test_translation_text_id_defaults_to_none() {
        let json = r#"{"id": 4, "translated_text": "bonjour"}"#;
        let translation: Translation = serde_json::from_str(json).unwrap();
        assert!(translation.text_id.is_none());
    }
}
