use crate::CliResult;
use catalogscope_core::ServiceConfig;
use tokio_util::sync::CancellationToken;
use tracing::info;

pub async fn run(config: ServiceConfig) -> CliResult {
    let service = catalogscope_runtime::build_default_service(&config)?;

    let cancel_token = CancellationToken::new();
    catalogscope_server::shutdown_on_ctrl_c(cancel_token.clone());

    info!("Starting catalog server on {}", config.bind);
    catalogscope_server::run_http_server(service, config.bind, cancel_token).await?;
    Ok(())
}
