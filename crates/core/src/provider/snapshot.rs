//! Loading provider data from a JSON snapshot.
//!
//! ```json
//! {
//!   "202109": {
//!     "courses":  [{ "__catalogCourseId": "CSC110", "subjectCode": { "name": "CSC" } }],
//!     "details":  { "CSC110": { "title": "Fundamentals of Programming I" } },
//!     "sections": { "CSC110": [{ "crn": "10846", "sectionCode": "A01", "sectionType": "lecture" }] }
//!   }
//! }
//! ```

use super::memory::{InMemoryProvider, TermCatalog};
use crate::error::{CatalogError, Result};
use catalogscope_api::Term;
use std::collections::HashMap;
use std::path::Path;
use tracing::info;

pub fn parse_snapshot(content: &str) -> Result<HashMap<Term, TermCatalog>> {
    let raw: HashMap<String, TermCatalog> = serde_json::from_str(content)?;
    raw.into_iter()
        .map(|(term, catalog)| -> Result<(Term, TermCatalog)> {
            let term = Term::parse(&term).map_err(|e| CatalogError::Snapshot(e.to_string()))?;
            Ok((term, catalog))
        })
        .collect()
}

pub fn load_snapshot(path: &Path) -> Result<InMemoryProvider> {
    let content = std::fs::read_to_string(path)?;
    let catalogs = parse_snapshot(&content)?;
    let courses: usize = catalogs.values().map(|c| c.courses.len()).sum();
    info!(
        "Loaded snapshot {} ({} terms, {} courses)",
        path.display(),
        catalogs.len(),
        courses
    );
    Ok(InMemoryProvider::builder()
        .catalogs(catalogs)
        .name("snapshot")
        .build())
}
