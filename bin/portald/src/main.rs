//! `portald` — the bot access portal server binary.
//!
//! Usage:
//!   portald -c <context-name-or-path> [--listen <addr>]
//!
//! The context name resolves to `/etc/portal/<name>.toml`.
//! If a path with `/` or `.` is given, it's used directly.

mod bootstrap;
mod config;
mod routes;

use std::sync::Arc;

use clap::Parser;
use portal_core::Module;
use tracing::info;

use portal_access::service::AccessConfig;
use portal_access::AccessModule;
use portal_sheets::{SheetsClient, SheetsConfig};

use config::ServerConfig;

/// Bot access portal server.
#[derive(Parser, Debug)]
#[command(name = "portald", about = "Employee bot access portal server")]
struct Cli {
    /// Context name or path to config file.
    #[arg(short = 'c', long = "config", required = true)]
    config: String,

    /// Listen address.
    #[arg(long = "listen", default_value = "0.0.0.0:8080")]
    listen: String,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging.
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let cli = Cli::parse();

    // Load server configuration.
    let config_path = ServerConfig::resolve_path(&cli.config);
    info!("Loading configuration from {}", config_path.display());
    let server_config = ServerConfig::load(&config_path)?;

    // Verify configuration is valid.
    bootstrap::verify_config(&server_config)?;

    // Initialize the directory source.
    let mut sheets_config = SheetsConfig {
        sheet_id: server_config.sheets.sheet_id.clone(),
        api_key: server_config.sheets.api_key.clone(),
        timeout_secs: server_config.sheets.timeout_secs,
        retries: server_config.sheets.retries,
        ..Default::default()
    };
    if let Some(endpoint) = &server_config.sheets.endpoint {
        sheets_config.endpoint = endpoint.clone();
    }
    let source: Arc<dyn portal_sheets::SheetSource> = Arc::new(
        SheetsClient::new(sheets_config)
            .map_err(|e| anyhow::anyhow!("failed to build sheets client: {}", e))?,
    );

    // Initialize the access module.
    let access_config = AccessConfig {
        users_sheet: server_config.sheets.users_sheet.clone(),
        bots_sheet: server_config.sheets.bots_sheet.clone(),
        session_ttl_secs: server_config.session.ttl_secs,
    };
    let access_module = AccessModule::new(source, access_config);
    info!("Access module initialized");

    let module_routes = vec![(access_module.name(), access_module.routes())];

    // Build router.
    let app = routes::build_router(module_routes);

    // Start server.
    let listener = tokio::net::TcpListener::bind(&cli.listen).await?;
    info!("portald listening on {}", cli.listen);
    axum::serve(listener, app).await?;

    Ok(())
}
