//! Response DTOs for the translation catalog API
//!
//! Defines the structure of outgoing HTTP response bodies.

use serde::Serialize;

/// Envelope for paginated listings (GET /api/texts, /api/translations)
#[derive(Debug, Clone, Serialize)]
pub struct PageResponse<T> {
    /// Rows on this page
    pub content: Vec<T>,
    /// 1-based page index
    pub page: usize,
    /// Requested page size
    pub size: usize,
    /// Total rows across all pages
    pub total_elements: usize,
    /// Total number of pages
    pub total_pages: usize,
}

impl<T> PageResponse<T> {
    /// Creates a new PageResponse, deriving the page count from the totals
    pub fn new(content: Vec<T>, page: usize, size: usize, total_elements: usize) -> Self {
        let total_pages = if size == 0 {
            0
        } else {
            total_elements.div_ceil(size)
        };
        Self {
            content,
            page,
            size,
            total_elements,
            total_pages,
        }
    }
}

/// Response body for delete and link operations
#[derive(Debug, Clone, Serialize)]
pub struct MessageResponse {
    /// Outcome message
    pub message: String,
}

impl MessageResponse {
    /// Creates a new MessageResponse
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Response body for the stats endpoint (GET /stats)
#[derive(Debug, Clone, Serialize)]
pub struct StatsResponse {
    /// Total service calls handled since startup
    pub requests: u64,
    /// Number of languages stored
    pub languages: usize,
    /// Number of texts stored
    pub texts: usize,
    /// Number of translations stored
    pub translations: usize,
    /// Current entries in the language cache
    pub cached_languages: usize,
    /// Current entries in the text cache
    pub cached_texts: usize,
    /// Current entries in the translation cache
    pub cached_translations: usize,
}

/// Response body for the health endpoint (GET /health)
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    /// Health status (e.g., "healthy")
    pub status: String,
    /// Current timestamp in ISO 8601 format
    pub timestamp: String,
}

impl HealthResponse {
    /// Creates a new HealthResponse with current timestamp
    pub fn healthy() -> Self {
        Self {
            status: "healthy".to_string(),
            timestamp: chrono::Utc::now().to_rfc3339(),
        }
    }
}

/// Error response body for all error conditions
#[derive(Debug, Clone, Serialize)]
pub struct ResponseMessage {
    /// Timestamp of the failure in ISO 8601 format
    pub time: String,
    /// HTTP status code
    pub status: u16,
    /// What went wrong
    pub message: String,
    /// Short hint on how to react
    pub description: String,
}

impl ResponseMessage {
    /// Creates a new ResponseMessage stamped with the current time
    pub fn new(status: u16, message: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            time: chrono::Utc::now().to_rfc3339(),
            status,
            message: message.into(),
            description: description.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_response_derives_page_count() {
        let resp = PageResponse::new(vec![1, 2], 1, 2, 5);
        assert_eq!(resp.total_elements, 5);
        assert_eq!(resp.total_pages, 3);
    }

    #[test]
    fn test_page_response_empty() {
        let resp: PageResponse<u64> = PageResponse::new(vec![], 1, 20, 0);
        assert_eq!(resp.total_pages, 0);
        assert!(resp.content.is_empty());
    }

    #[test]
    fn test_page_response_exact_fit() {
        let resp = PageResponse::new(vec!["a", "b"], 2, 2, 4);
        assert_eq!(resp.total_pages, 2);
    }

    #[test]
    fn test_message_response_serialize() {
        let resp = MessageResponse::new("language 'french' deleted");
        let json = serde_json::to_string(&resp).unwrap();
        assert!(json.contains("message"));
        assert!(json.contains("deleted"));
    }

    #[test]
    fn test_health_response_serialize() {
        let resp = HealthResponse::healthy();
        let json = serde_json::to_string(&resp).unwrap();
        assert!(json.contains("healthy"));
        assert!(json.contains("timestamp"));
    }

    #[test]
    fn test_response_message_carries_all_fields() {
        let resp = ResponseMessage::new(404, "text with id 9 doesn't exist", "Not found");
        let json = serde_json::to_string(&resp).unwrap();
        assert!(json.contains("\"status\":404"));
        assert!(json.contains("doesn't exist"));
        assert!(json.contains("\"time\""));
        assert!(json.contains("\"description\""));
    }
}
