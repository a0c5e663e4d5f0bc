use std::sync::Arc;

use anyhow::Context;
use ip_tracker::{
    adapters::http::{HttpServer, HttpServerConfig},
    app_config::AppConfig,
    config::Config,
    IpApiRepository,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::from_env()?;
    let app_config = AppConfig::load().context("failed to load app config")?;

    let log_filter = std::env::var("RUST_LOG").unwrap_or_else(|_| app_config.log_filter.clone());
    tracing_subscriber::fmt().with_env_filter(log_filter).init();

    let ipapi = IpApiRepository::new(
        &config.ipapi_access_key,
        &config.ipapi_base_url,
        app_config.request_timeout(),
    )
    .context("failed to create ipapi client")?;

    let http_server = HttpServer::new(
        HttpServerConfig {
            port: config.server_port,
        },
        Arc::new(ipapi),
    )
    .await?;
    http_server.run().await
}
