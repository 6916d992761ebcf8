use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Root configuration — maps to `trueka.toml`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TruekaConfig {
    pub store: StoreConfig,
    pub logging: LoggingConfig,
}

// ── Store ──────────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct StoreConfig {
    /// Path to the SQLite file holding the snapshot slots.
    /// `~/` paths live under the home directory; other relative paths are
    /// resolved against the config file's directory.
    pub db_path: PathBuf,
    /// Name of the slot the skill list is stored under.
    pub slot: String,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            db_path: PathBuf::from("trueka.db"),
            slot: "skills".into(),
        }
    }
}

impl StoreConfig {
    /// Absolute database path. A leading `~` expands to the home directory;
    /// other relative paths are anchored at `config_dir`.
    pub fn resolve_db_path(&self, config_dir: &Path) -> PathBuf {
        let path = expand_home(&self.db_path);
        if path.is_absolute() {
            path
        } else {
            config_dir.join(path)
        }
    }
}

/// Expand a leading `~` or `~/` to the user's home directory.
fn expand_home(path: &Path) -> PathBuf {
    if let Ok(rest) = path.strip_prefix("~") {
        if let Some(home) = dirs::home_dir() {
            return home.join(rest);
        }
    }
    path.to_path_buf()
}

// ── Logging ────────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Log level: "trace", "debug", "info", "warn", "error".
    pub level: String,
    /// Output format: "pretty", "json", "compact".
    pub format: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "warn".into(),
            format: "pretty".into(),
        }
    }
}

// ── Validation ─────────────────────────────────────────────────

/// A single config validation issue.
#[derive(Debug)]
pub struct ConfigWarning {
    pub field: String,
    pub message: String,
    pub severity: WarningSeverity,
    pub hint: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WarningSeverity {
    Error,
    Warning,
}

impl std::fmt::Display for ConfigWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let icon = match self.severity {
            WarningSeverity::Error => "❌",
            WarningSeverity::Warning => "⚠️ ",
        };
        write!(f, "{} {}: {}", icon, self.field, self.message)?;
        if let Some(ref h) = self.hint {
            write!(f, "\n   ↳ {}", h)?;
        }
        Ok(())
    }
}

impl TruekaConfig {
    /// Validate the config and return a list of warnings.
    /// Returns `Err` with the first hard error as a `ConfigValidation`.
    pub fn validate(&self) -> trueka_core::Result<Vec<ConfigWarning>> {
        let mut warnings = Vec::new();

        // ── Store slot ───
        if self.store.slot.is_empty() {
            warnings.push(ConfigWarning {
                field: "store.slot".into(),
                message: "slot name is empty".into(),
                severity: WarningSeverity::Error,
                hint: Some("Set to e.g. 'skills'".into()),
            });
        }

        // ── Store path ───
        if self.store.db_path.as_os_str().is_empty() {
            warnings.push(ConfigWarning {
                field: "store.db_path".into(),
                message: "database path is empty".into(),
                severity: WarningSeverity::Error,
                hint: Some("Set to e.g. 'trueka.db'".into()),
            });
        }

        // ── Logging format ───
        let valid_formats = ["pretty", "json", "compact"];
        if !valid_formats.contains(&self.logging.format.as_str()) {
            warnings.push(ConfigWarning {
                field: "logging.format".into(),
                message: format!("unknown log format '{}'", self.logging.format),
                severity: WarningSeverity::Warning,
                hint: Some(format!("Valid values: {}", valid_formats.join(", "))),
            });
        }

        // ── Logging level ───
        let valid_levels = ["trace", "debug", "info", "warn", "error"];
        if !valid_levels.contains(&self.logging.level.as_str()) {
            warnings.push(ConfigWarning {
                field: "logging.level".into(),
                message: format!("unknown log level '{}'", self.logging.level),
                severity: WarningSeverity::Warning,
                hint: Some(format!("Valid values: {}", valid_levels.join(", "))),
            });
        }

        if let Some(err) = warnings
            .iter()
            .find(|w| w.severity == WarningSeverity::Error)
        {
            return Err(trueka_core::TruekaError::ConfigValidation {
                field: err.field.clone(),
                reason: err.message.clone(),
            });
        }

        Ok(warnings)
    }
}
