use super::RequestsLoggingLevel;
use crate::config::{AppConfig, DEFAULT_PORT, DEFAULT_RECENT_SONGS, DEFAULT_TOP_SONGS};

#[derive(Clone)]
pub struct ServerConfig {
    pub requests_logging_level: RequestsLoggingLevel,
    pub port: u16,
    pub frontend_dir_path: Option<String>,
    /// How many songs the dashboard ranks as top songs.
    pub top_songs: usize,
    /// How many songs the dashboard lists as recent activity.
    pub recent_songs: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        ServerConfig {
            requests_logging_level: RequestsLoggingLevel::Path,
            port: DEFAULT_PORT,
            frontend_dir_path: None,
            top_songs: DEFAULT_TOP_SONGS,
            recent_songs: DEFAULT_RECENT_SONGS,
        }
    }
}

impl From<&AppConfig> for ServerConfig {
    fn from(config: &AppConfig) -> Self {
        ServerConfig {
            requests_logging_level: config.logging_level.clone(),
            port: config.port,
            frontend_dir_path: config.frontend_dir_path.clone(),
            top_songs: config.top_songs,
            recent_songs: config.recent_songs,
        }
    }
}
