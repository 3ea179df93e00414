use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{info, level_filters::LevelFilter};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use vibewave_server::config::{
    AppConfig, CliConfig, FileConfig, DEFAULT_DATA_FILE, DEFAULT_PORT, DEFAULT_RECENT_SONGS,
    DEFAULT_TOP_SONGS,
};
use vibewave_server::library::{seed_if_empty, DocumentStore};
use vibewave_server::{run_server, RequestsLoggingLevel, ServerConfig};

#[derive(Parser, Debug)]
struct CliArgs {
    /// Path to the JSON library document, created if missing.
    #[clap(long, default_value = DEFAULT_DATA_FILE)]
    pub data_file: PathBuf,

    /// The port to listen on.
    #[clap(short, long, env = "PORT", default_value_t = DEFAULT_PORT)]
    pub port: u16,

    /// Path to a TOML config file, its values override the command line.
    #[clap(long)]
    pub config: Option<PathBuf>,

    /// The level of logging to perform on each request.
    #[clap(long, default_value = "path")]
    pub logging_level: RequestsLoggingLevel,

    /// Path to the frontend directory to be statically served.
    #[clap(long)]
    pub frontend_dir_path: Option<String>,

    /// Number of most played songs listed on the dashboard.
    #[clap(long, default_value_t = DEFAULT_TOP_SONGS)]
    pub top_songs: usize,

    /// Number of songs listed as recent activity on the dashboard.
    #[clap(long, default_value_t = DEFAULT_RECENT_SONGS)]
    pub recent_songs: usize,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli_args = CliArgs::parse();

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(
            EnvFilter::builder()
                .with_default_directive(LevelFilter::INFO.into())
                .with_env_var("LOG_LEVEL")
                .from_env_lossy(),
        )
        .try_init()
        .context("Failed to initialize logging")?;

    let file_config = cli_args
        .config
        .as_deref()
        .map(FileConfig::load)
        .transpose()?;
    let cli_config = CliConfig {
        data_file: cli_args.data_file,
        port: cli_args.port,
        logging_level: cli_args.logging_level,
        frontend_dir_path: cli_args.frontend_dir_path,
        top_songs: cli_args.top_songs,
        recent_songs: cli_args.recent_songs,
    };
    let app_config = AppConfig::resolve(&cli_config, file_config)?;

    info!("Opening library document at {:?}...", app_config.data_file);
    let document_store = DocumentStore::load(&app_config.data_file)
        .with_context(|| format!("Could not load library from {:?}", app_config.data_file))?;
    seed_if_empty(&document_store).context("Could not seed the library")?;

    info!(
        "Library has:\n{} songs\n{} total plays",
        document_store.get_songs_count(),
        document_store.get_stats().total_plays
    );

    run_server(ServerConfig::from(&app_config), Arc::new(document_store)).await
}
