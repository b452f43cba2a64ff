//! District Table Module
//!
//! Read-only access to the embedded district records.
//!
//! Public API:
//! - districts() -> &'static [DistrictRecord]
//! - district_names() -> iterator of keys, in declared order
//! - find_district(name) -> Option<&'static DistrictRecord>
//! - search_districts(query) -> matching records, in declared order
//! - DistrictIndex for repeated lookups

pub mod table;
pub mod types;

use rustc_hash::FxHashMap;

pub use types::DistrictRecord;

use table::DISTRICTS;

// ============================================================================
// LOOKUP FUNCTIONS
// ============================================================================

/// All district records, in declared order.
pub fn districts() -> &'static [DistrictRecord] {
    DISTRICTS
}

/// District names (the table keys), in declared order.
pub fn district_names() -> impl Iterator<Item = &'static str> {
    DISTRICTS.iter().map(|d| d.name)
}

/// Find a district by name.
///
/// Matching ignores ASCII case and surrounding whitespace, the same way the
/// site front-end resolves `?district=` parameters.
///
/// # Examples
/// ```
/// use district_profiles::find_district;
///
/// let gadag = find_district("gadag").unwrap();
/// assert_eq!(gadag.name, "Gadag");
/// assert!(find_district("Mysuru").is_none());
/// ```
pub fn find_district(name: &str) -> Option<&'static DistrictRecord> {
    DISTRICTS.iter().find(|d| d.matches_name(name))
}

/// Districts whose name or geography contains `query`.
///
/// The query is trimmed and compared case-insensitively as a substring.
/// An empty query matches every district. Results keep declared order.
///
/// # Examples
/// ```
/// use district_profiles::search_districts;
///
/// let hits: Vec<_> = search_districts("deccan").map(|d| d.name).collect();
/// assert_eq!(hits, vec!["Vijayapura"]);
/// ```
pub fn search_districts(query: &str) -> impl Iterator<Item = &'static DistrictRecord> {
    let query = query.trim().to_lowercase();
    DISTRICTS.iter().filter(move |d| {
        query.is_empty()
            || d.name.to_lowercase().contains(&query)
            || d.geography.to_lowercase().contains(&query)
    })
}

/// Name → record index over the embedded table.
///
/// Keys are lowercased, so lookups are case-insensitive like `find_district`.
#[derive(Debug, Clone)]
pub struct DistrictIndex {
    by_name: FxHashMap<String, &'static DistrictRecord>,
}

impl DistrictIndex {
    /// Build the index from the embedded table.
    pub fn new() -> Self {
        let by_name = DISTRICTS
            .iter()
            .map(|d| (d.name.to_ascii_lowercase(), d))
            .collect::<FxHashMap<_, _>>();
        tracing::debug!("Indexed {} districts", by_name.len());
        Self { by_name }
    }

    /// Look up a district, ignoring case and surrounding whitespace.
    pub fn get(&self, name: &str) -> Option<&'static DistrictRecord> {
        self.by_name.get(&name.trim().to_ascii_lowercase()).copied()
    }

    /// True if `name` resolves to a district.
    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Number of indexed districts.
    pub fn len(&self) -> usize {
        self.by_name.len()
    }

    /// True if the index holds no districts.
    pub fn is_empty(&self) -> bool {
        self.by_name.is_empty()
    }
}

impl Default for DistrictIndex {
    fn default() -> Self {
        Self::new()
    }
}
