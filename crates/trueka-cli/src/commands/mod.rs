use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::{Shell, generate};
use std::path::PathBuf;

use trueka_board::{SkillStore, SqliteSlots};
use trueka_config::{ConfigLoader, TruekaConfig};
use trueka_core::{KindFilter, SkillKind};

mod board;
mod render;

/// Trueka — swap skills with your community
#[derive(Parser)]
#[command(name = "trueka", version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to trueka.toml config file
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Log level override (e.g. debug, info, warn, error)
    #[arg(short, long, global = true)]
    log_level: Option<String>,

    /// Enable verbose output (debug logging)
    #[arg(short, long, global = true, conflicts_with = "quiet")]
    verbose: bool,

    /// Suppress all log output (errors only)
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    quiet: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Post a skill you offer or seek
    Add {
        /// Skill name, e.g. "Clases de costura"
        name: String,
        /// Your name
        #[arg(short, long)]
        user: String,
        /// offer (ofrece) or seek (busca)
        #[arg(short, long, default_value = "offer", value_parser = parse_kind)]
        kind: SkillKind,
    },
    /// Post a skill through an interactive form
    Post,
    /// List posted skills
    List {
        /// all (todos), offer (ofrece) or seek (busca)
        #[arg(short, long, default_value = "all", value_parser = parse_filter)]
        kind: KindFilter,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Show seekers paired with offerers of the same skill
    Matches {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Show current configuration
    Config {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Generate shell completions for bash, zsh, or fish
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

fn parse_kind(s: &str) -> std::result::Result<SkillKind, String> {
    s.parse().map_err(|e: trueka_core::TruekaError| e.to_string())
}

fn parse_filter(s: &str) -> std::result::Result<KindFilter, String> {
    s.parse().map_err(|e: trueka_core::TruekaError| e.to_string())
}

impl Cli {
    pub fn run(self) -> trueka_core::Result<()> {
        // Load config first so we can use it for log format
        let config_loader = ConfigLoader::load(self.config.as_deref())?;
        let config = config_loader.get();

        // Resolve log level: --verbose > --quiet > --log-level > config
        let log_level = if self.verbose {
            "debug"
        } else if self.quiet {
            "error"
        } else {
            self.log_level
                .as_deref()
                .unwrap_or(config.logging.level.as_str())
        };
        init_tracing(&config.logging.format, log_level);

        match self.command {
            Commands::Add { name, user, kind } => {
                let mut store = open_store(&config_loader, &config)?;
                board::cmd_add(&mut store, name, user, kind)
            }
            Commands::Post => {
                let mut store = open_store(&config_loader, &config)?;
                board::cmd_post(&mut store)
            }
            Commands::List { kind, json } => {
                let store = open_store(&config_loader, &config)?;
                board::cmd_list(&store, kind, json)
            }
            Commands::Matches { json } => {
                let store = open_store(&config_loader, &config)?;
                board::cmd_matches(&store, json)
            }
            Commands::Config { json } => Self::cmd_config(&config, json),
            Commands::Completions { shell } => {
                generate(shell, &mut Cli::command(), "trueka", &mut std::io::stdout());
                Ok(())
            }
        }
    }

    fn cmd_config(config: &TruekaConfig, json: bool) -> trueka_core::Result<()> {
        if json {
            println!("{}", serde_json::to_string_pretty(config)?);
        } else {
            println!(
                "{}",
                toml::to_string_pretty(config)
                    .map_err(|e| trueka_core::TruekaError::Config(e.to_string()))?
            );
        }
        Ok(())
    }
}

/// Install the global subscriber. Logs go to stderr so command output stays
/// pipeable. A subscriber that is already installed is left in place.
fn init_tracing(format: &str, level: &str) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);

    let installed = match format {
        "json" => builder.json().with_target(true).try_init(),
        "compact" => builder.compact().with_target(false).try_init(),
        _ => builder.with_target(false).try_init(),
    };
    if installed.is_err() {
        tracing::debug!("tracing subscriber already installed");
    }
}

/// Open the board backing this invocation.
fn open_store(loader: &ConfigLoader, config: &TruekaConfig) -> trueka_core::Result<SkillStore> {
    let db_path = config.store.resolve_db_path(loader.config_dir());
    if let Some(parent) = db_path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let slots = SqliteSlots::open(&db_path)?;
    Ok(SkillStore::open(Box::new(slots), config.store.slot.clone()))
}
