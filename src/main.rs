//! Address Book - Main entry point
//!
//! Runs the assistant bot as a read-eval-print loop: commands are read from
//! stdin, replies go to stdout and logs to stderr.

use address_book::{Assistant, Config};
use anyhow::Result;
use std::io::{self, BufRead, Write};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let config = Config::from_env();

    // Logs go to stderr so stdout carries only replies
    let log_level = config
        .as_ref()
        .map(|cfg| cfg.log_level.clone())
        .unwrap_or_else(|_| "error".to_string());
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    let config = match config {
        Ok(cfg) => {
            info!("Configuration loaded successfully");
            cfg
        }
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            return Err(e.into());
        }
    };

    info!("Birthday window: {} days", config.birthday_window_days);

    let mut assistant = Assistant::new(&config);
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    let mut line = String::new();

    println!("Welcome to the assistant bot!");
    loop {
        print!("{}", config.prompt);
        stdout.flush()?;

        line.clear();
        if stdin.lock().read_line(&mut line)? == 0 {
            info!("End of input, shutting down");
            break;
        }

        let reply = assistant.handle_line(&line);
        println!("{}", reply.text());
        if reply.is_exit() {
            break;
        }
    }

    info!(contacts = assistant.book().len(), "Session ended");
    Ok(())
}
