//! Runtime configuration and its environment loader.
use std::env;
use std::path::PathBuf;

const APPLICATION: &str = "respawn";

/// Configuration for opening a [`Session`](crate::Session).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RuntimeConfig {
    /// Directory holding one JSON file per state slot.
    pub data_dir: PathBuf,
    /// Local hour at which the game day rolls over.
    pub reset_hour: u32,
    /// Keep state in memory only.
    pub in_memory: bool,
    pub log_dir: PathBuf,
}

impl RuntimeConfig {
    pub const DEFAULT_RESET_HOUR: u32 = 4;

    /// Construct configuration from process environment variables.
    ///
    /// Environment variables:
    /// - `RESPAWN_DATA_DIR` - Directory for slot files (default: platform data dir)
    /// - `RESPAWN_RESET_HOUR` - Hour the game day rolls over, 0-23 (default: 4)
    /// - `RESPAWN_IN_MEMORY` - Do not persist anything (default: false)
    /// - `RESPAWN_LOG_DIR` - Rolling log directory (default: platform cache dir)
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Ok(dir) = env::var("RESPAWN_DATA_DIR") {
            config.data_dir = PathBuf::from(dir);
        }

        if let Some(hour) = read_env::<u32>("RESPAWN_RESET_HOUR") {
            config.reset_hour = hour.min(23);
        }

        if let Some(in_memory) = read_env::<bool>("RESPAWN_IN_MEMORY") {
            config.in_memory = in_memory;
        } else if env::var("RESPAWN_IN_MEMORY").is_ok() {
            // Accept a bare variable as "true"
            config.in_memory = true;
        }

        if let Ok(dir) = env::var("RESPAWN_LOG_DIR") {
            config.log_dir = PathBuf::from(dir);
        }

        config
    }
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            reset_hour: Self::DEFAULT_RESET_HOUR,
            in_memory: false,
            log_dir: default_log_dir(),
        }
    }
}

/// Platform data directory, falling back to `./save_data`.
pub fn default_data_dir() -> PathBuf {
    directories::ProjectDirs::from("", "", APPLICATION)
        .map(|dirs| dirs.data_dir().to_path_buf())
        .unwrap_or_else(|| PathBuf::from("./save_data"))
}

/// Platform cache directory plus `logs`.
pub fn default_log_dir() -> PathBuf {
    let base_dir = directories::ProjectDirs::from("", "", APPLICATION)
        .map(|dirs| dirs.cache_dir().to_path_buf())
        .unwrap_or_else(|| env::temp_dir().join(APPLICATION));

    base_dir.join("logs")
}

fn read_env<T>(key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    env::var(key).ok()?.parse().ok()
}
