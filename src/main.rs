use std::net::SocketAddr;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Instant;

use clap::Parser;
use color_eyre::eyre::Result;
use itemlist_daemon::config::{default_config_path, load_config, Overrides, Settings};
use itemlist_daemon::cors::allows_all;
use itemlist_daemon::logging::{self, data_dir, init_logging, parse_rotation, LogConfig, LOG_FILENAME};
use itemlist_daemon::{build_router, shutdown_signal, Catalog, ItemService, RouterConfig};
use tokio::net::TcpListener;
use tracing::info;

/// Itemlist Daemon - paginated, searchable in-memory item catalog over HTTP/JSON
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Host address to bind to [default: 0.0.0.0]
    #[arg(long, env = "ITEMLIST_HOST")]
    host: Option<String>,

    /// Port to listen on [default: 5000]
    #[arg(short, long, env = "PORT")]
    port: Option<u16>,

    /// Number of synthetic items to generate at startup [default: 1000000]
    #[arg(long, env = "ITEMLIST_ITEM_COUNT")]
    item_count: Option<usize>,

    /// Maximum JSON request body size in bytes [default: 102400]
    #[arg(long, env = "ITEMLIST_MAX_BODY_BYTES")]
    max_body_bytes: Option<usize>,

    /// Comma-separated list of allowed CORS origins, or "*" for all [default: *]
    #[arg(long, env = "ITEMLIST_CORS_ORIGINS", value_delimiter = ',')]
    cors_origins: Option<Vec<String>>,

    /// Path to the TOML config file (default: ~/.itemlist/config.toml)
    #[arg(long, env = "ITEMLIST_CONFIG")]
    config: Option<PathBuf>,

    /// Enable JSON log format (for production/log aggregation)
    #[arg(long, env = "ITEMLIST_LOG_JSON", default_value = "false")]
    log_json: bool,

    /// Log rotation period: daily, hourly, or never
    #[arg(long, env = "ITEMLIST_LOG_ROTATION", default_value = "daily")]
    log_rotation: String,

    /// Custom log directory (default: ~/.itemlist/logs)
    #[arg(long, env = "ITEMLIST_LOG_DIR")]
    log_dir: Option<String>,
}

impl Args {
    fn overrides(&self) -> Overrides {
        Overrides {
            host: self.host.clone(),
            port: self.port,
            item_count: self.item_count,
            max_body_bytes: self.max_body_bytes,
            cors_origins: self.cors_origins.clone(),
        }
    }
}

fn report_bind_error(addr: SocketAddr, log_file: &Path, e: &std::io::Error) {
    eprintln!();
    if e.kind() == std::io::ErrorKind::AddrInUse {
        eprintln!("Error: Failed to start server - address {addr} is already in use");
        eprintln!();
        eprintln!("Options:");
        eprintln!("  1. Stop the existing process:   pkill itemlist-daemon");
        eprintln!("  2. Use a different port:        itemlist-daemon --port {}", addr.port().saturating_add(1));
        eprintln!("  3. Check what's using the port: lsof -i :{}", addr.port());
    } else {
        eprintln!("Error: Failed to bind {addr}: {e}");
    }
    eprintln!();
    eprintln!("Logs: {}", log_file.display());
    eprintln!();
}

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;

    // Parse CLI arguments first (before logging, so we can use log config)
    let args = Args::parse();

    let log_dir = args
        .log_dir
        .as_ref()
        .map_or_else(|| data_dir().join("logs"), PathBuf::from);
    let log_file = log_dir.join(LOG_FILENAME);
    logging::set_log_file_path(log_file.to_string_lossy().to_string());

    let log_config = LogConfig {
        log_dir,
        json_format: args.log_json,
        rotation: parse_rotation(&args.log_rotation),
        ..Default::default()
    };

    if let Err(e) = init_logging(log_config) {
        eprintln!();
        eprintln!("Error: Failed to initialize logging: {e}");
        eprintln!("Logs: {}", log_file.display());
        eprintln!();
        return Err(e);
    }

    let config_path = args.config.clone().unwrap_or_else(default_config_path);
    let file_config = load_config(&config_path)?;
    let settings = Settings::resolve(&file_config, args.overrides())?;

    info!(
        "CORS origins: {}",
        if allows_all(&settings.cors_origins) {
            "*".to_string()
        } else {
            settings.cors_origins.join(", ")
        }
    );

    let started = Instant::now();
    let catalog = Arc::new(Catalog::generate(settings.item_count));
    info!(
        items = catalog.len(),
        duration_ms = %started.elapsed().as_millis(),
        "Generated item catalog"
    );

    let service = Arc::new(ItemService::new(catalog));
    let app = build_router(
        service,
        RouterConfig {
            max_body_bytes: settings.max_body_bytes,
            cors_origins: settings.cors_origins,
        },
    );

    let listener = match TcpListener::bind(settings.addr).await {
        Ok(listener) => listener,
        Err(e) => {
            report_bind_error(settings.addr, &log_file, &e);
            return Err(e.into());
        }
    };

    info!("Starting Itemlist daemon on {}", settings.addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Itemlist daemon stopped");
    Ok(())
}
