pub mod config;
pub mod run;

use clap::{Parser, Subcommand};

/// Solace — a sentiment-aware therapeutic reply gateway.
#[derive(Debug, Parser)]
#[command(name = "solace", version, about)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Start the gateway server (default when no subcommand is given).
    Serve,
    /// Configuration utilities.
    #[command(subcommand)]
    Config(ConfigCommand),
    /// Run one conversation turn and print the reply.
    Run {
        /// The user's message.
        message: String,
        /// Output the full response as JSON instead of plain text.
        #[arg(long)]
        json: bool,
    },
    /// Print version information.
    Version,
}

#[derive(Debug, Subcommand)]
pub enum ConfigCommand {
    /// Parse the config file and report any errors.
    Validate,
    /// Dump the resolved configuration (with defaults) as TOML.
    Show,
}

// ── Config loading helper ─────────────────────────────────────────────

/// Load the configuration from the path specified by `SOLACE_CONFIG`
/// (or `config.toml` by default).  Returns the parsed [`Config`] and
/// the path that was used.
pub fn load_config() -> anyhow::Result<(solace_domain::config::Config, String)> {
    let config_path =
        std::env::var("SOLACE_CONFIG").unwrap_or_else(|_| "config.toml".into());

    let config = if std::path::Path::new(&config_path).exists() {
        let raw = std::fs::read_to_string(&config_path)
            .map_err(|e| anyhow::anyhow!("reading {config_path}: {e}"))?;
        toml::from_str(&raw)
            .map_err(|e| anyhow::anyhow!("parsing {config_path}: {e}"))?
    } else {
        solace_domain::config::Config::default()
    };

    Ok((config, config_path))
}
