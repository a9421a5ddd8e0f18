use clap::Parser;
use opentld_api::AppState;
use opentld_domain::config::CliOverrides;
use std::net::SocketAddr;
use tracing::info;

mod bootstrap;
mod di;
mod server;

#[derive(Parser)]
#[command(name = "opentld")]
#[command(version)]
#[command(about = "opentld - DNS-over-HTTPS resolver for user-claimed TLDs")]
struct Cli {
    /// Configuration file path
    #[arg(short = 'c', long, value_name = "FILE")]
    config: Option<String>,

    /// HTTP server port
    #[arg(short = 'p', long)]
    port: Option<u16>,

    /// Bind address
    #[arg(short = 'b', long)]
    bind: Option<String>,

    /// Database path
    #[arg(long)]
    database: Option<String>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long)]
    log_level: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let cli_overrides = CliOverrides {
        http_port: cli.port,
        bind_address: cli.bind.clone(),
        database_path: cli.database.clone(),
        log_level: cli.log_level.clone(),
    };

    let config = bootstrap::load_config(cli.config.as_deref(), cli_overrides)?;

    bootstrap::init_logging(&config);

    info!("Starting opentld v{}", env!("CARGO_PKG_VERSION"));

    let database_url = format!("sqlite:{}", config.database.path);
    let pool = bootstrap::init_database(&database_url, &config.database).await?;

    let repos = di::Repositories::new(pool);
    let services = di::Services::new(&config, &repos);

    let app_state = AppState {
        resolve: services.resolve,
    };

    let bind_addr: SocketAddr =
        format!("{}:{}", config.server.bind_address, config.server.http_port).parse()?;

    server::start_web_server(bind_addr, app_state).await?;

    info!("Server shutdown complete");
    Ok(())
}
