//! Error types for district_profiles

use thiserror::Error;

/// Result type alias for district_profiles operations
pub type Result<T> = std::result::Result<T, DistrictError>;

/// Errors that can occur while rendering the district table
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum DistrictError {
    /// serde_json failed to render a record
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
