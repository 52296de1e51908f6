use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tools_api::config::ToolsConfig;
use tools_calculator::catalog;
use tracing::info;

#[derive(Parser)]
#[command(name = "india-tools")]
#[command(version, about = "Age, CGPA, GST and EMI calculators over HTTP")]
struct Cli {
    /// Path to the TOML configuration file
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Address to bind the server to (overrides config and TOOLS_HOST)
    #[arg(long, global = true)]
    host: Option<String>,

    /// Port to listen on (overrides config and TOOLS_PORT)
    #[arg(long, global = true)]
    port: Option<u16>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Start the HTTP server (default)
    Serve,
    /// List the available tools
    Tools {
        /// Case-insensitive search over names, descriptions and keywords
        #[arg(long)]
        query: Option<String>,
        /// Exact category name, or "All"
        #[arg(long)]
        category: Option<String>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Some(Command::Tools { query, category }) => {
            print_tools(query.as_deref(), category.as_deref());
            Ok(())
        }
        Some(Command::Serve) | None => {
            let mut config = ToolsConfig::load(cli.config.as_deref())?.apply_env_overrides();
            if let Some(host) = cli.host {
                config.server.host = host;
            }
            if let Some(port) = cli.port {
                config.server.port = port;
            }
            start_server(config).await
        }
    }
}

fn print_tools(query: Option<&str>, category: Option<&str>) {
    let tools = catalog::search(query, category);
    if tools.is_empty() {
        println!("No tools match.");
        return;
    }
    for tool in tools {
        println!("{:<22} {:<10} POST {}", tool.name, tool.category, tool.endpoint);
        println!("    {}", tool.description);
    }
}

async fn start_server(config: ToolsConfig) -> anyhow::Result<()> {
    tools_api::tracing_setup::init_tracing(&config.logging)?;

    info!(version = env!("CARGO_PKG_VERSION"), "Starting India Tools API");

    let app = tools_api::create_app(&config);
    let addr = config.server.bind_address();
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    info!(%addr, "Endpoints: /api/age, /api/cgpa, /api/gst, /api/emi");

    axum::serve(listener, app).with_graceful_shutdown(shutdown_signal()).await?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    info!("Shutting down gracefully");
}
