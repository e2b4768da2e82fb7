//! Filter implementations for the query engine.
//!
//! This module contains the concrete filters that can be composed into a
//! FilterPipeline.

pub mod genre;
pub mod search_text;

// Re-export for convenience
pub use genre::ExactGenreFilter;
pub use search_text::SearchTextFilter;
