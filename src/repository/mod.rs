//! Repository Module
//!
//! In-memory tables for the three entities. Each repository owns its rows
//! in a HashMap keyed by id and hands out clones, so callers never hold
//! references into the table. Ids are assigned on first save.

pub mod language;
pub mod text;
pub mod translation;

pub use language::LanguageRepository;
pub use text::TextRepository;
pub use translation::TranslationRepository;
