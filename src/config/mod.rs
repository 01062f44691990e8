use crate::errors::{AppError, AppResult};
use crate::models::Coordinates;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

pub mod migrate;

pub const DEFAULT_TILE_URL: &str = "https://{s}.tile.openstreetmap.fr/hot/{z}/{x}/{y}.png";
pub const DEFAULT_TILE_ATTRIBUTION: &str =
    "&copy; <a href=\"https://www.openstreetmap.org/copyright\">OpenStreetMap</a> contributors";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_database")]
    pub database: String,
    #[serde(default = "default_zoom")]
    pub map_zoom_level: u8,
    #[serde(default = "default_tile_url")]
    pub tile_url: String,
    #[serde(default = "default_tile_attribution")]
    pub tile_attribution: String,
    #[serde(default = "default_restore_delay")]
    pub form_restore_delay_ms: u64,
    /// Where the map opens when `--at` is not given.
    #[serde(default)]
    pub home_position: Option<Coordinates>,
}

fn default_database() -> String {
    Config::database_file().to_string_lossy().to_string()
}
fn default_zoom() -> u8 {
    13
}
fn default_tile_url() -> String {
    DEFAULT_TILE_URL.to_string()
}
fn default_tile_attribution() -> String {
    DEFAULT_TILE_ATTRIBUTION.to_string()
}
fn default_restore_delay() -> u64 {
    1000
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database: default_database(),
            map_zoom_level: default_zoom(),
            tile_url: default_tile_url(),
            tile_attribution: default_tile_attribution(),
            form_restore_delay_ms: default_restore_delay(),
            home_position: None,
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            let appdata = std::env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join("rworkoutlog")
        } else {
            dirs::home_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join(".rworkoutlog")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("rworkoutlog.conf")
    }

    /// Return the full path of the SQLite database
    pub fn database_file() -> PathBuf {
        Self::config_dir().join("rworkoutlog.sqlite")
    }

    /// Load configuration from file, or return defaults if not found
    pub fn load() -> AppResult<Self> {
        Self::load_from(&Self::config_file())
    }

    pub fn load_from(path: &Path) -> AppResult<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)?;
        let cfg: Config = serde_yaml::from_str(&content)
            .map_err(|e| AppError::Config(format!("{}: {e}", path.display())))?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn validate(&self) -> AppResult<()> {
        if self.map_zoom_level > 19 {
            return Err(AppError::Config(format!(
                "map_zoom_level must be between 0 and 19, got {}",
                self.map_zoom_level
            )));
        }
        if let Some(home) = self.home_position
            && !home.is_valid()
        {
            return Err(AppError::Config(format!("home_position {home} is out of range")));
        }
        Ok(())
    }

    /// Initialize configuration and database files
    pub fn init_all(custom_db: Option<String>, is_test: bool) -> AppResult<Self> {
        let dir = Self::config_dir();
        fs::create_dir_all(&dir)?;

        // DB name: user provided or default
        let db_path = match custom_db {
            Some(name) => {
                let p = Path::new(&name);
                if p.is_absolute() {
                    p.to_path_buf()
                } else {
                    dir.join(p)
                }
            }
            None => Self::database_file(),
        };

        let config = Config {
            database: db_path.to_string_lossy().to_string(),
            ..Config::default()
        };

        // Write config file
        if !is_test {
            let yaml = serde_yaml::to_string(&config)?;
            let mut file = fs::File::create(Self::config_file())?;
            file.write_all(yaml.as_bytes())?;
            println!("✅ Config file: {:?}", Self::config_file());
        }

        Ok(config)
    }
}
