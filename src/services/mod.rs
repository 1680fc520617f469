//! Services Module
//!
//! Business logic for the three entities. Each service owns a bounded FIFO
//! cache sitting in front of its repository and shares one request counter
//! with the rest of the application.
//!
//! Repositories and caches are shared as `Arc<RwLock<_>>`. Lock guards are
//! held only for the single lookup or mutation at hand and are always
//! released before the next lock is taken.

pub mod language;
pub mod text;
pub mod translation;

pub use language::LanguageService;
pub use text::TextService;
pub use translation::TranslationService;
