use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use storefront::api::{AppState, StorefrontServer};
use storefront::catalog::CatalogClient;
use storefront::cli::{self, export::ExportConfig};
use storefront::config::StorefrontConfig;
use storefront::util::env as env_util;
use tracing::info;

#[derive(Parser, Debug)]
#[command(name = "storefront", version, about = "Server-rendered product storefront")]
struct Cli {
    /// Override CATALOG_BASE_URL
    #[arg(long, global = true)]
    catalog_url: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
#[command(rename_all = "kebab-case")]
enum Commands {
    /// Run the HTTP server (default)
    Serve {
        /// Override STOREFRONT_HOST
        #[arg(long)]
        host: Option<String>,
        /// Override STOREFRONT_PORT
        #[arg(long)]
        port: Option<u16>,
    },
    /// Print the statically known category routes
    Paths,
    /// Pre-render every category page into a directory
    Export {
        #[arg(long, default_value = "out")]
        out_dir: PathBuf,
    },
}

#[actix_web::main]
async fn main() -> Result<()> {
    env_util::init_env();
    storefront::telemetry::init_tracing(storefront::telemetry::DEFAULT_LOG_FILTER)?;

    let args = Cli::parse();

    let mut config = StorefrontConfig::from_env().context("loading configuration")?;
    if let Some(url) = args.catalog_url {
        config.catalog.base_url = url;
    }

    match args.command.unwrap_or(Commands::Serve {
        host: None,
        port: None,
    }) {
        Commands::Paths => {
            cli::print_paths(&config.categories);
        }
        Commands::Export { out_dir } => {
            let state = app_state(&config)?;
            let written = cli::export::run(&state, &ExportConfig { out_dir }).await?;
            info!(pages = written.len(), "export complete");
        }
        Commands::Serve { host, port } => {
            let mut server = StorefrontServer::from_env()?;
            if let Some(host) = host {
                server.host = host;
            }
            if let Some(port) = port {
                server.port = port;
            }
            server.run(app_state(&config)?).await?;
        }
    }

    Ok(())
}

fn app_state(config: &StorefrontConfig) -> Result<AppState> {
    let client = CatalogClient::new(&config.catalog).context("building catalog client")?;
    Ok(AppState::new(config, Arc::new(client)))
}
