//! Bot module wiring the tracker to Discord.
//!
//! This module provides the [`Bot`] that owns the Discord client. It builds the
//! spreadsheet backend from the configuration, shares one [`Tracker`] between
//! the slash commands and the scheduled notifications, and runs the gateway
//! connection until the process stops.
//!
//! # Architecture
//!
//! ```text
//!                 ┌──────────────┐
//! Discord ──────▶ │   Handler    │ ── Commander ──┐
//!                 └──────────────┘                ▼
//!                 ┌──────────────┐          ┌──────────┐      ┌──────────────┐
//! Schedules ────▶ │   Notifier   │ ───────▶ │ Tracker  │ ───▶ │ SheetsBackend│
//!                 └──────────────┘          └──────────┘      └──────────────┘
//! ```
//!
//! The notifier only runs when a notification channel is configured, and the
//! tables live in `sheets.json` under the data directory when no spreadsheet
//! is configured.

use std::{path::Path, sync::Arc, time::Duration};

use anyhow::anyhow;
use log::{error, info};
use serenity::{Client, all::GatewayIntents};

use crate::{
    Args,
    commands::Commander,
    config::Config,
    discord::Handler,
    notifications::Notifier,
    sheets::{LocalSheets, SheetsBackend, SheetsRequester},
    tracker::Tracker,
};

/// Main bot structure holding the Discord client.
pub struct Bot {
    client: Client,
}

impl Bot {
    /// Creates the bot from the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `utc_offset` is not a valid offset
    /// - The spreadsheet HTTP client cannot be built
    /// - The local sheets file exists but cannot be loaded
    /// - The Discord client cannot be created
    pub async fn new(config: Config, args: Args) -> Result<Self, anyhow::Error> {
        let offset = config
            .offset()
            .ok_or_else(|| anyhow!("invalid utc_offset: {}", config.utc_offset))?;

        let backend = match &config.sheets {
            Some(sheets) => {
                info!("using spreadsheet {}", sheets.spreadsheet_id);
                SheetsBackend::Remote(SheetsRequester::new(
                    &sheets.url,
                    &sheets.spreadsheet_id,
                    &sheets.access_token,
                    Duration::from_secs(sheets.timeout),
                )?)
            }
            None => {
                let path = Path::new(&args.data).join("sheets.json");
                info!("no spreadsheet configured, using {}", path.display());
                SheetsBackend::Local(LocalSheets::load(path).await?)
            }
        };

        let tracker = Arc::new(Tracker::new(backend));
        let commander = Arc::new(Commander::new());

        let notifier = config.notifications.as_ref().map(|notifications| {
            Arc::new(Notifier::new(
                Arc::clone(&tracker),
                notifications.channel_id,
                offset,
            ))
        });
        if notifier.is_none() {
            info!("no notification channel configured, notifications are disabled");
        }

        let handler = Handler::new(
            commander,
            tracker,
            config.discord.guild_id,
            offset,
            notifier,
        );

        let client = Client::builder(&config.discord.token, GatewayIntents::non_privileged())
            .event_handler(handler)
            .await?;

        Ok(Bot { client })
    }

    /// Connects to the gateway and processes events until the connection
    /// fails for good.
    pub async fn start(mut self) {
        if let Err(e) = self.client.start().await {
            error!("Discord client stopped: {}", e);
        }
    }
}
