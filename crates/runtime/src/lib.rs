use catalogscope_api::CourseDataProvider;
use catalogscope_core::provider::{InMemoryProvider, load_snapshot};
use catalogscope_core::{CatalogService, LoggingConfig, ServiceConfig};
use std::sync::Arc;

/// Assembles the catalog service described by `config`.
///
/// The provider is the configured JSON snapshot; without one the service runs
/// against an empty catalog so that the HTTP surface can still be exercised.
pub fn build_default_service(config: &ServiceConfig) -> catalogscope_core::Result<CatalogService> {
    let provider: Arc<dyn CourseDataProvider> = match &config.snapshot {
        Some(path) => Arc::new(load_snapshot(path)?),
        None => {
            tracing::warn!("No catalog snapshot configured, serving an empty catalog");
            Arc::new(InMemoryProvider::new())
        }
    };
    tracing::info!("Using course data provider: {}", provider.name());
    Ok(CatalogService::new(provider, config))
}

/// Initializes the logging system for a specific component.
/// This delegates to the core logging module.
pub fn init_logging(component: &str, config: &LoggingConfig, to_stderr: bool) -> Option<impl Drop + use<>> {
    Some(catalogscope_core::logging::init_logging(
        component, config, to_stderr,
    ))
}
