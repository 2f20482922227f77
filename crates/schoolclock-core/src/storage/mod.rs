mod config;

pub use config::{Config, DisplayConfig, WatchConfig};

use std::path::PathBuf;

/// Returns `~/.config/schoolclock[-dev]/` based on SCHOOLCLOCK_ENV.
///
/// Set SCHOOLCLOCK_ENV=dev to use the development directory, or
/// SCHOOLCLOCK_CONFIG_DIR to point somewhere else entirely.
///
/// # Errors
/// Returns an error if creating the config directory fails.
pub fn data_dir() -> std::io::Result<PathBuf> {
    let dir = match std::env::var_os("SCHOOLCLOCK_CONFIG_DIR") {
        Some(dir) => PathBuf::from(dir),
        None => {
            let base_dir = dirs::home_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join(".config");
            let env = std::env::var("SCHOOLCLOCK_ENV").unwrap_or_else(|_| "production".to_string());
            if env == "dev" {
                base_dir.join("schoolclock-dev")
            } else {
                base_dir.join("schoolclock")
            }
        }
    };

    std::fs::create_dir_all(&dir)?;
    Ok(dir)
}
