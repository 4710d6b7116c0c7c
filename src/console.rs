//! Console messaging harness: one line in, replies out on stdout.
//!
//! This is the transport side of the callback boundary. It owns exactly one
//! [`GameSession`] and pumps stdin into it until EOF; the session never
//! learns it is talking to a terminal.

use anyhow::Result;
use log::info;
use tokio::io::{AsyncBufReadExt, BufReader};

use crate::bot::GameSession;
use crate::config::Config;

/// Run the interactive console loop until stdin closes.
pub async fn run(config: &Config) -> Result<()> {
    println!("[{}] {}", config.bot.name, config.bot.banner);

    let mut session = GameSession::new("console", Box::new(|reply| println!("{reply}")));
    info!("console session open");

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        session.handle_message(&line);
    }

    info!("console session closed (stdin EOF)");
    Ok(())
}
