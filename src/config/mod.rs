mod file_config;

pub use file_config::FileConfig;

use crate::server::RequestsLoggingLevel;
use anyhow::{bail, Result};
use clap::ValueEnum;
use std::path::{Path, PathBuf};

pub const DEFAULT_PORT: u16 = 8080;
pub const DEFAULT_DATA_FILE: &str = "./music-data.json";
pub const DEFAULT_TOP_SONGS: usize = 3;
pub const DEFAULT_RECENT_SONGS: usize = 4;

/// CLI arguments that can be used for config resolution.
/// This struct mirrors the CLI arguments that can be overridden by TOML config.
#[derive(Debug, Clone)]
pub struct CliConfig {
    pub data_file: PathBuf,
    pub port: u16,
    pub logging_level: RequestsLoggingLevel,
    pub frontend_dir_path: Option<String>,
    pub top_songs: usize,
    pub recent_songs: usize,
}

impl Default for CliConfig {
    fn default() -> Self {
        CliConfig {
            data_file: PathBuf::from(DEFAULT_DATA_FILE),
            port: DEFAULT_PORT,
            logging_level: RequestsLoggingLevel::default(),
            frontend_dir_path: None,
            top_songs: DEFAULT_TOP_SONGS,
            recent_songs: DEFAULT_RECENT_SONGS,
        }
    }
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub data_file: PathBuf,
    pub port: u16,
    pub logging_level: RequestsLoggingLevel,
    pub frontend_dir_path: Option<String>,

    // Dashboard settings
    pub top_songs: usize,
    pub recent_songs: usize,
}

impl AppConfig {
    /// Resolve configuration from CLI arguments and optional TOML file config.
    /// TOML values override CLI values where present.
    pub fn resolve(cli: &CliConfig, file_config: Option<FileConfig>) -> Result<Self> {
        let file = file_config.unwrap_or_default();

        let data_file = file
            .data_file
            .map(PathBuf::from)
            .unwrap_or_else(|| cli.data_file.clone());

        if data_file.is_dir() {
            bail!("data_file is a directory: {:?}", data_file);
        }
        let data_dir = match data_file.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        if !data_dir.is_dir() {
            bail!("Directory of data_file does not exist: {:?}", data_dir);
        }

        let port = file.port.unwrap_or(cli.port);

        let logging_level = file
            .logging_level
            .and_then(|s| parse_logging_level(&s))
            .unwrap_or_else(|| cli.logging_level.clone());

        let frontend_dir_path = file
            .frontend_dir_path
            .or_else(|| cli.frontend_dir_path.clone());

        let top_songs = file.top_songs.unwrap_or(cli.top_songs);
        if top_songs == 0 {
            bail!("top_songs must be at least 1");
        }
        let recent_songs = file.recent_songs.unwrap_or(cli.recent_songs);
        if recent_songs == 0 {
            bail!("recent_songs must be at least 1");
        }

        Ok(Self {
            data_file,
            port,
            logging_level,
            frontend_dir_path,
            top_songs,
            recent_songs,
        })
    }
}

/// Parses a logging level string into RequestsLoggingLevel.
/// Uses clap's ValueEnum trait for parsing.
fn parse_logging_level(s: &str) -> Option<RequestsLoggingLevel> {
    RequestsLoggingLevel::from_str(s, true).ok()
}
