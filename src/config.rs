//! Configuration file structures for the tracker bot.
//!
//! This module defines the configuration file format using YAML. Every value
//! can be overridden with an environment variable prefixed by `TRACKER_`,
//! nested keys being separated by `__`.
//!
//! # Configuration File Format
//!
//! ```yaml
//! # Discord bot settings
//! discord:
//!   # Bot token from the Discord developer portal
//!   token: "your-bot-token"
//!   # Register the commands in this guild only, they are global otherwise
//!   guild_id: 123456789012345678
//!
//! # Spreadsheet holding the tables, a local JSON file is used when missing
//! sheets:
//!   url: "https://sheets.googleapis.com"
//!   spreadsheet_id: "1AbC..."
//!   # OAuth token, never refreshed by the bot (see below)
//!   access_token: "ya29..."
//!   # Request timeout in seconds
//!   timeout: 10
//!
//! # Channel receiving the scheduled notifications, none are sent when missing
//! notifications:
//!   channel_id: 123456789012345678
//!
//! # Offset of the local time zone in hours, used for dates and schedules
//! utc_offset: 9
//! ```
//!
//! # Environment Variable Overrides
//!
//! ```bash
//! export TRACKER_DISCORD__TOKEN="your-bot-token"
//! export TRACKER_SHEETS__ACCESS_TOKEN="ya29..."
//! ```
//!
//! # Access Token Lifetime
//!
//! The bot sends `sheets.access_token` as is and has no service account
//! flow. Google OAuth access tokens expire after about an hour, after which
//! every spreadsheet request answers status 401 and commands reply with the
//! generic failure message. Restart the bot with a fresh token (for instance
//! from `gcloud auth print-access-token` in `TRACKER_SHEETS__ACCESS_TOKEN`),
//! or leave `sheets` out to keep the tables in the data directory.

use chrono::FixedOffset;
use figment::{
    Figment,
    providers::{Env, Format, Yaml},
};
use serde::Deserialize;

/// Root configuration structure.
#[derive(Debug, Deserialize)]
pub struct Config {
    pub discord: Discord,

    /// Remote spreadsheet, `None` keeps the tables in the data directory.
    pub sheets: Option<Sheets>,

    /// Scheduled notifications, `None` disables them.
    pub notifications: Option<Notifications>,

    /// Offset of the local time zone in hours.
    #[serde(default = "default_utc_offset")]
    pub utc_offset: i32,
}

#[derive(Debug, Deserialize)]
pub struct Discord {
    /// Bot token.
    pub token: String,

    /// Guild the slash commands are registered in.
    ///
    /// Guild commands show up at once, global commands can take an hour.
    pub guild_id: Option<u64>,
}

/// Google Sheets API settings.
#[derive(Debug, Deserialize)]
pub struct Sheets {
    #[serde(default = "default_sheets_url")]
    pub url: String,

    pub spreadsheet_id: String,

    /// OAuth access token sent as a bearer token.
    ///
    /// Read once at startup and never refreshed, see the module docs.
    pub access_token: String,

    /// Request timeout in seconds.
    #[serde(default = "default_timeout")]
    pub timeout: u64,
}

#[derive(Debug, Deserialize)]
pub struct Notifications {
    pub channel_id: u64,
}

fn default_utc_offset() -> i32 {
    9
}

fn default_sheets_url() -> String {
    "https://sheets.googleapis.com".to_owned()
}

fn default_timeout() -> u64 {
    10
}

impl Config {
    /// Loads the YAML file at `path`, then applies the `TRACKER_` environment
    /// variables.
    ///
    /// # Errors
    ///
    /// Returns an error if the file is not valid YAML or if a required value
    /// is missing from both the file and the environment.
    pub fn load(path: &str) -> Result<Self, figment::Error> {
        Figment::new()
            .merge(Yaml::file(path))
            .merge(Env::prefixed("TRACKER_").split("__"))
            .extract()
    }

    /// Local time zone, `None` when `utc_offset` is out of range.
    pub fn offset(&self) -> Option<FixedOffset> {
        FixedOffset::east_opt(self.utc_offset.checked_mul(3600)?)
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use serial_test::serial;
    use tempfile::NamedTempFile;

    use super::*;

    fn write_config(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    #[serial]
    fn test_load_full_config() {
        let file = write_config(
            r#"
discord:
  token: "discord-token"
  guild_id: 42
sheets:
  spreadsheet_id: "sheet-id"
  access_token: "access-token"
  timeout: 5
notifications:
  channel_id: 7
utc_offset: 1
"#,
        );

        let config = Config::load(file.path().to_str().unwrap()).unwrap();
        assert_eq!(config.discord.token, "discord-token");
        assert_eq!(config.discord.guild_id, Some(42));

        let sheets = config.sheets.as_ref().unwrap();
        assert_eq!(sheets.url, "https://sheets.googleapis.com");
        assert_eq!(sheets.spreadsheet_id, "sheet-id");
        assert_eq!(sheets.timeout, 5);

        assert_eq!(config.notifications.as_ref().unwrap().channel_id, 7);
        assert_eq!(config.offset(), FixedOffset::east_opt(3600));
    }

    #[test]
    #[serial]
    fn test_load_minimal_config() {
        let file = write_config("discord:\n  token: \"discord-token\"\n");

        let config = Config::load(file.path().to_str().unwrap()).unwrap();
        assert!(config.sheets.is_none());
        assert!(config.notifications.is_none());
        assert_eq!(config.discord.guild_id, None);
        assert_eq!(config.offset(), FixedOffset::east_opt(9 * 3600));
    }

    #[test]
    #[serial]
    fn test_env_overrides_file() {
        let file = write_config("discord:\n  token: \"from-file\"\n");

        unsafe { std::env::set_var("TRACKER_DISCORD__TOKEN", "from-env") };
        let config = Config::load(file.path().to_str().unwrap());
        unsafe { std::env::remove_var("TRACKER_DISCORD__TOKEN") };

        assert_eq!(config.unwrap().discord.token, "from-env");
    }

    #[test]
    #[serial]
    fn test_access_token_from_env() {
        let file = write_config(
            "discord:\n  token: \"t\"\nsheets:\n  spreadsheet_id: \"id\"\n  access_token: \"expired\"\n",
        );

        unsafe { std::env::set_var("TRACKER_SHEETS__ACCESS_TOKEN", "fresh") };
        let config = Config::load(file.path().to_str().unwrap());
        unsafe { std::env::remove_var("TRACKER_SHEETS__ACCESS_TOKEN") };

        assert_eq!(config.unwrap().sheets.unwrap().access_token, "fresh");
    }

    #[test]
    #[serial]
    fn test_missing_token_is_an_error() {
        let file = write_config("utc_offset: 9\n");
        assert!(Config::load(file.path().to_str().unwrap()).is_err());
    }

    #[test]
    #[serial]
    fn test_invalid_offset() {
        let file = write_config("discord:\n  token: \"t\"\nutc_offset: 30\n");
        let config = Config::load(file.path().to_str().unwrap()).unwrap();
        assert_eq!(config.offset(), None);
    }
}
