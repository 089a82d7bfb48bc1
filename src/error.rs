//! Error Types
//!
//! Failures that can occur while loading the seed document.

use thiserror::Error;

/// Seed loading error
#[derive(Error, Debug)]
pub enum SeedError {
    /// The document is not valid JSON or does not match the todo shape
    #[error("Invalid seed document: {source}")]
    Json {
        #[from]
        source: serde_json::Error,
    },

    /// Two todos in the document share an id
    #[error("Duplicate todo id {id} in seed document")]
    DuplicateId { id: i64 },
}
