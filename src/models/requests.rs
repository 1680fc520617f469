//! Request DTOs for the translation catalog API
//!
//! Defines the structure of incoming HTTP request bodies and query strings.
//! Query parameter structs keep the camelCase names the API is called with.

use serde::Deserialize;

/// Request body for creating a language (POST /api/languages/create)
#[derive(Debug, Clone, Deserialize)]
pub struct NewLanguage {
    /// Language name
    pub name: String,
}

impl NewLanguage {
    /// Validates the request data
    ///
    /// Returns an error message if validation fails, None if valid.
    pub fn validate(&self) -> Option<String> {
        if self.name.trim().is_empty() {
            return Some("Language name cannot be empty".to_string());
        }
        None
    }
}

/// Request body for creating a text (POST /api/texts/create)
#[derive(Debug, Clone, Deserialize)]
pub struct NewText {
    /// The text content
    pub content: String,
    /// Ids of languages to link the text to
    #[serde(default)]
    pub language_ids: Vec<u64>,
}

impl NewText {
    /// Validates the request data
    ///
    /// Returns an error message if validation fails, None if valid.
    pub fn validate(&self) -> Option<String> {
        if self.content.trim().is_empty() {
            return Some("Text content cannot be empty".to_string());
        }
        None
    }
}

/// Request body for creating a translation (POST /api/translations/create)
#[derive(Debug, Clone, Deserialize)]
pub struct NewTranslation {
    /// The translated wording
    pub translated_text: String,
    /// Id of the text being translated
    #[serde(default)]
    pub text_id: Option<u64>,
}

impl NewTranslation {
    /// Validates the request data
    ///
    /// Returns an error message if validation fails, None if valid.
    pub fn validate(&self) -> Option<String> {
        if self.translated_text.trim().is_empty() {
            return Some("Translated text cannot be empty".to_string());
        }
        None
    }
}

/// Query parameters for linking a text to a language
/// (PUT /api/languages/addText and /api/languages/delText)
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LinkTextParams {
    /// Id of the language side of the link
    pub language_id: u64,
    /// Id of the text side of the link
    pub text_id: u64,
}

/// Query parameters for rewording a text (PUT /api/texts/change)
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChangeTextParams {
    /// Id of the text to change
    pub text_id: u64,
    /// Replacement content; blank or missing leaves the text unchanged
    #[serde(default)]
    pub text: Option<String>,
}

/// Query parameters for attaching a translation to a text
/// (PUT /api/translations/setText)
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SetTextParams {
    /// Id of the translation to attach
    pub translation_id: u64,
    /// Id of the text to attach it to
    pub text_id: u64,
}

/// Query parameters for paginated listings (GET /api/texts, /api/translations)
///
/// Pages are 1-based.
#[derive(Debug, Clone, Deserialize)]
pub struct PageParams {
    /// 1-based page index
    #[serde(default = "default_page")]
    pub page: usize,
    /// Number of rows per page
    #[serde(default = "default_size")]
    pub size: usize,
}

impl PageParams {
    /// Validates the paging values
    ///
    /// Returns an error message if validation fails, None if valid.
    pub fn validate(&self) -> Option<String> {
        if self.page < 1 {
            return Some("Page index starts at 1".to_string());
        }
        if self.size < 1 {
            return Some("Page size must be at least 1".to_string());
        }
        None
    }
}

fn default_page() -> usize {
    1
}

fn default_size() -> usize {
    20
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_language_deserialize() {
        let json = r#"{"name": "french"}"#;
        let req: NewLanguage = serde_json::from_str(json).unwrap();
        assert_eq!(req.name, "french");
    }

    #[test]
    fn test_new_language_validate_blank() {
        let req = NewLanguage {
            name: "   ".to_string(),
        };
        assert!(req.validate().is_some());
    }

    #[test]
    fn test_new_text_without_languages() {
        let json = r#"{"content": "good morning"}"#;
        let req: NewText = serde_json::from_str(json).unwrap();
        assert_eq!(req.content, "good morning");
        assert!(req.language_ids.is_empty());
        assert!(req.validate().is_none());
    }

    #[test]
    fn test_new_text_validate_empty_content() {
        let req = NewText {
            content: "".to_string(),
            language_ids: vec![1],
        };
        assert!(req.validate().is_some());
    }

    #[test]
    fn test_new_translation_deserialize() {
        let json = r#"{"translated_text": "bonjour", "text_id": 2}"#;
        let req: NewTranslation = serde_json::from_str(json).unwrap();
        assert_eq!(req.translated_text, "bonjour");
        assert_eq!(req.text_id, Some(2));
    }

    #[test]
    fn test_link_params_use_camel_case() {
        let json = r#"{"languageId": 1, "textId": 2}"#;
        let params: LinkTextParams = serde_json::from_str(json).unwrap();
        assert_eq!(params.language_id, 1);
        assert_eq!(params.text_id, 2);
    }

    #[test]
    fn test_change_params_text_is_optional() {
        let json = r#"{"textId": 7}"#;
        let params: ChangeTextParams = serde_json::from_str(json).unwrap();
        assert_eq!(params.text_id, 7);
        assert!(params.text.is_none());
    }

    #[test]
    fn test_page_params_defaults() {
        let params: PageParams = serde_json::from_str("{}").unwrap();
        assert_eq!(params.page, 1);
        assert_eq!(params.size, 20);
        assert!(params.validate().is_none());
    }

    #[test]
    fn test_page_params_rejects_page_zero() {
        let params = PageParams { page: 0, size: 20 };
        assert!(params.validate().is_some());
    }

    #[test]
    fn test_page_params_rejects_size_zero() {
        let params = PageParams { page: 1, size: 0 };
        assert!(params.validate().is_some());
    }
}
