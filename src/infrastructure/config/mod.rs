use figment::providers::{Env, Format, Serialized, Toml};
use figment::Figment;
use serde::{Deserialize, Serialize};

use crate::domain::error::{AppError, Result};

/// Runtime settings, merged from defaults, an optional `headcount.toml`,
/// and `HEADCOUNT_`-prefixed environment variables (highest precedence).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// SQLite database file path.
    pub database_path: String,

    /// CSV source file to load. Load requests fail until this is set.
    pub csv_file: Option<String>,

    pub http_host: String,
    pub http_port: u16,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            database_path: "headcount.db".to_string(),
            csv_file: None,
            http_host: "127.0.0.1".to_string(),
            http_port: 3001,
        }
    }
}

impl Settings {
    pub fn load() -> Result<Self> {
        Figment::from(Serialized::defaults(Settings::default()))
            .merge(Toml::file("headcount.toml"))
            .merge(Env::prefixed("HEADCOUNT_"))
            .extract()
            .map_err(|e| AppError::ConfigError(format!("Failed to load settings: {}", e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_extract_cleanly() {
        let settings: Settings = Figment::from(Serialized::defaults(Settings::default()))
            .extract()
            .unwrap();

        assert_eq!(settings.database_path, "headcount.db");
        assert_eq!(settings.csv_file, None);
        assert_eq!(settings.http_port, 3001);
    }
}
