mod extract;
mod handlers;
mod response;

pub use extract::{ApiPath, ApiQuery};
pub use response::ApiErrorResponse;

use axum::{routing::get, Router};
use catalogscope_core::CatalogService;
use std::net::SocketAddr;
use tokio::net::TcpListener;
use tokio_util::sync::CancellationToken;
use tracing::info;

pub fn router(service: CatalogService) -> Router {
    Router::new()
        .route("/semester", get(handlers::list_terms))
        .route("/semester/{term}/courses", get(handlers::list_courses))
        .route(
            "/semester/{term}/courses/{subject}/{code}",
            get(handlers::course_detail),
        )
        .route(
            "/semester/{term}/courses/{subject}/{code}/{section}",
            get(handlers::section_detail),
        )
        .with_state(service)
}

pub async fn run_http_server(
    service: CatalogService,
    addr: SocketAddr,
    cancel_token: CancellationToken,
) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let listener = TcpListener::bind(addr).await?;
    serve(listener, service, cancel_token).await
}

/// Serve on an already bound listener until `cancel_token` fires.
pub async fn serve(
    listener: TcpListener,
    service: CatalogService,
    cancel_token: CancellationToken,
) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    info!(
        "Catalog server listening on {} (provider: {})",
        listener.local_addr()?,
        service.provider_name()
    );

    axum::serve(listener, router(service))
        .with_graceful_shutdown(async move {
            cancel_token.cancelled().await;
        })
        .await?;

    info!("Catalog server stopped");
    Ok(())
}

/// Cancel `cancel_token` on Ctrl-C.
pub fn shutdown_on_ctrl_c(cancel_token: CancellationToken) {
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            info!("Received Ctrl-C, shutting down");
        }
        cancel_token.cancel();
    });
}
