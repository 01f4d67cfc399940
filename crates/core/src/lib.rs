pub mod config;
pub mod decompose;
pub mod error;
pub mod logging;
pub mod provider;
pub mod resolver;
pub mod service;
pub mod validate;

pub use config::{LoggingConfig, MalformedEntryPolicy, ServiceConfig};
pub use error::{CatalogError, Result};
pub use service::CatalogService;
