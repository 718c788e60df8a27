//! Recommendation client module
//!
//! Provides the text-generation seam, the Gemini HTTP client and the
//! recommender the shell calls.

pub mod client;
pub mod recommender;
pub mod types;

// Re-export key types for convenience
pub use client::{GeminiClient, TextGenerator, DEFAULT_BASE_URL, DEFAULT_MODEL};
pub use recommender::Recommender;
