//! # Configuration Management Module
//!
//! Configuration for the tictacbot harness, kept deliberately small: the
//! bot's presentation and the logging setup. Game rules and session
//! behavior are fixed by the protocol and take no configuration.
//!
//! ## Configuration File Format
//!
//! tictacbot uses TOML for human-readable configuration:
//!
//! ```toml
//! [bot]
//! name = "TicTacBot"
//! banner = "Send 'start' to begin a game."
//!
//! [logging]
//! level = "info"
//! # file = "tictacbot.log"
//! ```
//!
//! ## Usage
//!
//! ```rust,no_run
//! use tictacbot::config::Config;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = Config::load("config.toml").await?;
//!     println!("Bot name: {}", config.bot.name);
//!     Ok(())
//! }
//! ```

use anyhow::{anyhow, Result};
use serde::{Deserialize, Serialize};
use tokio::fs;

/// Presentation settings for the bot itself.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BotConfig {
    /// Display name, shown in the console banner.
    pub name: String,
    /// One-line hint printed when the harness starts.
    pub banner: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level: "error", "warn", "info", "debug" or "trace".
    pub level: String,
    /// Optional log file; when set, records go there as well as (on a TTY)
    /// the console.
    pub file: Option<String>,
}

/// Main configuration structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub bot: BotConfig,
    pub logging: LoggingConfig,
}

impl Config {
    /// Load configuration from a file.
    pub async fn load(path: &str) -> Result<Self> {
        let content = fs::read_to_string(path)
            .await
            .map_err(|e| anyhow!("Failed to read config file {}: {}", path, e))?;

        let config: Config = toml::from_str(&content)
            .map_err(|e| anyhow!("Failed to parse config file {}: {}", path, e))?;

        Ok(config)
    }

    /// Create a default configuration file.
    pub async fn create_default(path: &str) -> Result<()> {
        let config = Config::default();
        let content = toml::to_string_pretty(&config)
            .map_err(|e| anyhow!("Failed to serialize default config: {}", e))?;

        fs::write(path, content)
            .await
            .map_err(|e| anyhow!("Failed to write config file {}: {}", path, e))?;

        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            bot: BotConfig {
                name: "TicTacBot".to_string(),
                banner: "Send 'start' to begin a game.".to_string(),
            },
            logging: LoggingConfig {
                level: "info".to_string(),
                file: None,
            },
        }
    }
}
