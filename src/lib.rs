//! Web Translator - a translation catalog REST service
//!
//! Stores languages, texts, and translations in memory and fronts each
//! entity with a small bounded FIFO cache.

pub mod api;
pub mod cache;
pub mod config;
pub mod counter;
pub mod error;
pub mod models;
pub mod repository;
pub mod services;

pub use api::AppState;
pub use config::Config;
pub use counter::RequestCounter;
