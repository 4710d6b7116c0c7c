//! Binary entrypoint for the tictacbot CLI.
//!
//! Commands:
//! - `start` - run the interactive console session
//! - `init` - create a starter `config.toml`
//!
//! See the library crate docs for module-level details: `tictacbot::`.
use anyhow::Result;
use clap::{Parser, Subcommand};
use log::{info, warn};

use tictacbot::config::Config;

#[derive(Parser)]
#[command(name = "tictacbot")]
#[command(about = "A tic-tac-toe game bot for text chat")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Configuration file path (can be used before or after subcommand)
    #[arg(short, long, default_value = "config.toml", global = true)]
    config: String,

    /// Verbose logging (-v, -vv for more; may appear before or after subcommand)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Start an interactive console session
    Start,
    /// Initialize a new bot configuration
    Init,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Load config early to configure logging (except for Init, which writes it)
    let pre_config = match cli.command {
        Commands::Init => None,
        _ => Config::load(&cli.config).await.ok(),
    };
    init_logging(&pre_config, cli.verbose);

    match cli.command {
        Commands::Start => {
            // A missing config is not fatal; the bot runs with defaults.
            let config = pre_config.unwrap_or_else(|| {
                warn!(
                    "Could not load {}; using defaults (run 'tictacbot init' to create one)",
                    cli.config
                );
                Config::default()
            });
            info!("Starting tictacbot v{}", env!("CARGO_PKG_VERSION"));
            tictacbot::console::run(&config).await
        }
        Commands::Init => {
            Config::create_default(&cli.config).await?;
            println!("Created starter configuration at {}", cli.config);
            Ok(())
        }
    }
}

fn init_logging(config: &Option<Config>, verbosity: u8) {
    use std::io::Write;
    let mut builder = env_logger::Builder::new();
    // Base level: CLI verbosity overrides config
    let base_level = match verbosity {
        0 => config
            .as_ref()
            .and_then(|c| c.logging.level.parse().ok())
            .unwrap_or(log::LevelFilter::Info),
        1 => log::LevelFilter::Debug,
        _ => log::LevelFilter::Trace,
    };
    builder.filter_level(base_level);
    if let Some(cfg) = config {
        if let Some(ref file) = cfg.logging.file {
            if let Ok(f) = std::fs::OpenOptions::new()
                .create(true)
                .append(true)
                .open(file)
            {
                let write_mutex = std::sync::Arc::new(std::sync::Mutex::new(f));

                // On a TTY, write to both the file and the console; when
                // stdout is redirected, the file alone gets the records.
                let is_tty = atty::is(atty::Stream::Stdout);

                builder.format(move |fmt, record| {
                    let ts = chrono::Utc::now().format("%Y-%m-%dT%H:%M:%SZ");
                    let line = format!("{} [{}] {}", ts, record.level(), record.args());

                    if let Ok(mut guard) = write_mutex.lock() {
                        let _ = writeln!(guard, "{}", line);
                    }

                    if is_tty {
                        writeln!(fmt, "{}", line)
                    } else {
                        Ok(())
                    }
                });
            } else {
                eprintln!("Warning: could not open log file {}", file);
            }
        }
    }
    builder.init();
}
