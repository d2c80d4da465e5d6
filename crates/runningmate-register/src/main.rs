//! RunningMate registration - terminal entry point.

mod config;
mod error;
mod terminal;

use crate::config::Config;
use crate::error::AppResult;
use crate::terminal::{ScreenExit, TerminalRouter, TerminalScreen};
use anyhow::Context;
use registration_form::RegistrationForm;
use signup_client::SignupClient;
use tokio::io::{stdin, stdout, BufReader};
use tokio::signal;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[tokio::main]
async fn main() -> AppResult<()> {
    // Load configuration
    let config = Config::load().context("Failed to load configuration")?;

    // Initialize logging
    init_logging(&config.log.level);

    info!("Starting RunningMate registration...");
    info!("Signup API: {}", config.api.url);

    let client = SignupClient::new(&config.api.url, config.api.timeout)?;

    let mut form = RegistrationForm::new(TerminalRouter::default());
    let mut screen = TerminalScreen::new(BufReader::new(stdin()), stdout());

    tokio::select! {
        exit = screen.run(&mut form, &client) => {
            match exit? {
                ScreenExit::Navigated(target) => info!("Left registration for {}", target),
                ScreenExit::Aborted => warn!("Registration abandoned"),
            }
        }
        _ = signal::ctrl_c() => {
            info!("Shutdown signal received");
        }
    }

    Ok(())
}

fn init_logging(level: &str) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}
