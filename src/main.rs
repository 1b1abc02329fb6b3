//! Tracker - A Discord bot recording activities, books and movies.
//!
//! This is the main entry point for the tracker bot, which keeps a personal log
//! of activities, books and movies in a spreadsheet and answers Discord slash
//! commands about it.
//!
//! # Overview
//!
//! Every tracked item lives in one of three tables and moves through a small
//! set of statuses (a book goes from the wishlist to the reading pile, then to
//! reading and finished). Free-text reports can be attached to any item, and
//! the bot summarizes the whole log in statistics and search results.
//!
//! # Features
//!
//! - **Item Tracking**: Add activities, books and movies and follow their status
//! - **Reports**: Attach dated notes to any item and browse or search them
//! - **Search**: Case-insensitive keyword search across items
//! - **Statistics**: Summary, weekly, monthly, per-book and in-progress views
//! - **Notifications**: Morning reading reminder, monthly wishlist, evening
//!   log reminder, weekly report and stale items, posted to a channel
//! - **Local Storage**: Tables kept in a JSON file when no spreadsheet is configured
//! - **YAML Configuration**: Simple configuration file format with environment variable support
//!
//! # Configuration
//!
//! Create a `config.yaml` file with your settings:
//!
//! ```yaml
//! discord:
//!   token: "your-bot-token"
//!   guild_id: 123456789012345678
//!
//! sheets:
//!   spreadsheet_id: "1AbC..."
//!   access_token: "ya29..."
//!
//! notifications:
//!   channel_id: 123456789012345678
//!
//! utc_offset: 9
//! ```
//!
//! # Environment Variable Overrides
//!
//! Override any configuration value using environment variables with the `TRACKER_` prefix:
//!
//! ```bash
//! export TRACKER_DISCORD__TOKEN="your-bot-token"
//! export TRACKER_SHEETS__ACCESS_TOKEN="ya29..."
//! ```
//!
//! # Usage
//!
//! ```bash
//! tracker --config config.yaml --data ./tracker-data
//! ```
//!
//! # Slash Commands
//!
//! - `/book add|buy|start|finish|list|wishlist`
//! - `/movie add|watch|skip|list`
//! - `/activity add|done|skip|list`
//! - `/report category:<kind> id:<id> content:<text>`
//! - `/reports history|recent|search`
//! - `/search book|movie|activity|all`
//! - `/stats summary|weekly|monthly|books|current`
//!
//! # Architecture
//!
//! The bot consists of several modules:
//!
//! - [`bot`] - Wiring of the Discord client, the tracker and the notifier
//! - [`commands`] - Slash command descriptors, parsing, handlers and replies
//! - [`config`] - YAML configuration file structures and loading with environment variable support
//! - [`discord`] - Gateway event handler, command registration and embed conversion
//! - [`notifications`] - Scheduled messages posted to a channel
//! - [`sheets`] - Spreadsheet API client and its local JSON stand-in
//! - [`tracker`] - Items, reports, search and statistics
//!
//! # Environment Variables
//!
//! - `RUST_LOG` - Controls logging level (default: `info`)
//!   - Set to `debug` for verbose output
//!   - Set to `warn` or `error` for minimal logging

use clap::Parser;
use env_logger::Env;
use log::{error, info};

use crate::{bot::Bot, config::Config};

mod bot;
mod commands;
mod config;
mod discord;
mod notifications;
mod sheets;
mod tracker;

/// Command-line arguments for the tracker bot.
///
/// # Examples
///
/// ```bash
/// tracker --config config.yaml --data ./tracker-data
/// ```
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Path to the YAML configuration file.
    ///
    /// See the [`config`] module for the expected format.
    #[arg(short, long)]
    config: String,

    /// Path to the directory for storing persistent data.
    ///
    /// Holds `sheets.json` when no spreadsheet is configured.
    #[arg(short, long)]
    data: String,
}

/// Main entry point for the tracker bot.
///
/// Configuration and initialization errors are logged and end the process
/// without panicking. Spreadsheet and Discord errors met while running are
/// logged and do not stop the bot.
///
/// # Examples
///
/// ```bash
/// RUST_LOG=debug tracker --config config.yaml --data ./tracker-data
/// ```
#[tokio::main]
async fn main() {
    // Put logger at info level by default
    let env = Env::default().filter_or("RUST_LOG", "info");
    env_logger::init_from_env(env);

    info!("Starting tracker {}...", env!("CARGO_PKG_VERSION"));

    let args = Args::parse();

    let mut config = match Config::load(&args.config) {
        Ok(cfg) => cfg,
        Err(e) => {
            error!("Failed to load config file: {}", e);
            return;
        }
    };

    // Normalize the spreadsheet URL by removing trailing slash if present
    if let Some(sheets) = config.sheets.as_mut() {
        while sheets.url.ends_with('/') {
            sheets.url.pop();
        }
    }

    let bot = match Bot::new(config, args).await {
        Ok(b) => b,
        Err(e) => {
            error!("Failed to initialize bot: {}", e);
            return;
        }
    };
    bot.start().await;
}
