//! Domain entities and API models for the translation catalog
//!
//! This module defines the stored entities along with the DTOs
//! (Data Transfer Objects) used for serializing/deserializing HTTP
//! request and response bodies.

pub mod entities;
pub mod requests;
pub mod responses;

// Re-export commonly used types
pub use entities::{Language, Text, Translation};
pub use requests::{
    ChangeTextParams, LinkTextParams, NewLanguage, NewText, NewTranslation, PageParams,
    SetTextParams,
};
pub use responses::{
    HealthResponse, MessageResponse, PageResponse, ResponseMessage, StatsResponse,
};
