//! Belagavi Division District Profiles
//!
//! Static descriptive records for the seven districts of the Belagavi
//! Division, prepared for merging into the site's `data.json`.
//!
//! - `districts/`: record type, the embedded table, and lookups
//! - `export`: JSON rendering of the prepared table (in memory only)
//! - `error`: crate error type

pub mod districts;
pub mod error;
pub mod export;

// Re-export commonly used types
pub use districts::{districts, district_names, find_district, search_districts, DistrictIndex, DistrictRecord};
pub use error::{DistrictError, Result};

/// Confirmation line printed once the table has been prepared.
pub const PREPARED_MESSAGE: &str =
    "New data structure prepared. Use this to update data.json manually or via script.";
