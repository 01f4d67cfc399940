pub mod catalog;
pub mod detail;

pub use catalog::{CatalogResolver, matches_filters, paginate};
pub use detail::DetailResolver;
