//! Course data providers that need no network access.
//!
//! [`InMemoryProvider`] backs tests and serves JSON snapshots loaded through
//! [`snapshot::load_snapshot`].

pub mod memory;
pub mod snapshot;

pub use memory::{CallCounts, InMemoryProvider, InMemoryProviderBuilder, ProviderOperation, TermCatalog};
pub use snapshot::{load_snapshot, parse_snapshot};

/// Key under which details and sections of a course are stored.
pub fn course_key(subject: &str, code: &str) -> String {
    format!("{}{}", subject, code)
}
