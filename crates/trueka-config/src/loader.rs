use parking_lot::RwLock;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::{info, warn};

use crate::schema::TruekaConfig;

/// Loads and reloads the Trueka configuration.
pub struct ConfigLoader {
    config: Arc<RwLock<TruekaConfig>>,
    config_path: PathBuf,
}

impl ConfigLoader {
    /// Resolve the config path: explicit path > TRUEKA_CONFIG env > ~/.trueka/trueka.toml
    pub fn resolve_path(explicit: Option<&Path>) -> PathBuf {
        if let Some(p) = explicit {
            return p.to_path_buf();
        }
        if let Ok(p) = std::env::var("TRUEKA_CONFIG") {
            return PathBuf::from(p);
        }
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".trueka")
            .join("trueka.toml")
    }

    /// Load the config from disk, falling back to defaults.
    pub fn load(path: Option<&Path>) -> trueka_core::Result<Self> {
        let config_path = Self::resolve_path(path);
        let config = if config_path.exists() {
            info!(?config_path, "loading configuration");
            Self::read_file(&config_path)?
        } else {
            info!(?config_path, "config file not found, using defaults");
            TruekaConfig::default()
        };

        let config = Self::apply_env_overrides(config);

        for w in config.validate()? {
            warn!("{}", w);
        }

        Ok(Self {
            config: Arc::new(RwLock::new(config)),
            config_path,
        })
    }

    /// Get a read snapshot of the current config.
    pub fn get(&self) -> TruekaConfig {
        self.config.read().clone()
    }

    /// Get a shared handle to the live config.
    pub fn shared(&self) -> Arc<RwLock<TruekaConfig>> {
        Arc::clone(&self.config)
    }

    /// Path the config was (or would have been) read from.
    pub fn path(&self) -> &Path {
        &self.config_path
    }

    /// Directory relative store paths are anchored at.
    pub fn config_dir(&self) -> &Path {
        self.config_path.parent().unwrap_or(Path::new("."))
    }

    /// Reload the config from disk.
    pub fn reload(&self) -> trueka_core::Result<()> {
        if !self.config_path.exists() {
            return Err(trueka_core::TruekaError::Config(format!(
                "config file not found: {}",
                self.config_path.display()
            )));
        }
        let new_config = Self::apply_env_overrides(Self::read_file(&self.config_path)?);
        new_config.validate()?;
        *self.config.write() = new_config;
        info!("configuration reloaded");
        Ok(())
    }

    fn read_file(path: &Path) -> trueka_core::Result<TruekaConfig> {
        let raw = std::fs::read_to_string(path)?;
        toml::from_str::<TruekaConfig>(&raw).map_err(|e| {
            trueka_core::TruekaError::Config(format!("failed to parse {}: {}", path.display(), e))
        })
    }

    /// Apply env var overrides (TRUEKA_DB_PATH, TRUEKA_SLOT, TRUEKA_LOG_LEVEL)
    fn apply_env_overrides(mut config: TruekaConfig) -> TruekaConfig {
        if let Ok(v) = std::env::var("TRUEKA_DB_PATH") {
            config.store.db_path = PathBuf::from(v);
        }
        if let Ok(v) = std::env::var("TRUEKA_SLOT") {
            config.store.slot = v;
        }
        if let Ok(v) = std::env::var("TRUEKA_LOG_LEVEL") {
            config.logging.level = v;
        }
        config
    }
}
