//! Slash command parsing and reply formatting.
//!
//! This module provides the complete command processing pipeline of the bot,
//! from a Discord interaction already split into a command name, a subcommand
//! and typed options, down to the [`Reply`] sent back.
//!
//! # Architecture
//!
//! ```text
//! Discord interaction
//!      │
//!      ▼
//! ┌─────────────┐
//! │ Invocation  │  ← command, subcommand and option values
//! └─────────────┘
//!      │
//!      ▼
//! ┌─────────────┐
//! │  Commander  │  ← parse() checks the descriptors, execute() routes
//! └─────────────┘
//!      │
//!      ├── parse() ─────────────┐
//!      │                        ▼
//!      │              ┌──────────────────┐
//!      │              │ command::Command │
//!      │              └──────────────────┘
//!      │
//!      └── execute() ───────────┐
//!                               ▼
//!                     ┌─────────────────────┐
//!                     │ Action Handlers     │
//!                     │  - handle_book      │
//!                     │  - handle_movie     │
//!                     │  - handle_activity  │
//!                     │  - handle_report    │
//!                     │  - handle_reports   │
//!                     │  - handle_search    │
//!                     │  - handle_stats     │
//!                     └─────────────────────┘
//!                               │
//!                               ▼
//!                     ┌─────────────────────┐
//!                     │ Reply (text/embed)  │
//!                     └─────────────────────┘
//! ```
//!
//! # Available Commands
//!
//! | Command    | Subcommands                                      |
//! |------------|--------------------------------------------------|
//! | `book`     | `add`, `buy`, `start`, `finish`, `list`, `wishlist` |
//! | `movie`    | `add`, `watch`, `skip`, `list`                   |
//! | `activity` | `add`, `done`, `skip`, `list`                    |
//! | `report`   | none, takes `category`, `id` and `content`       |
//! | `reports`  | `history`, `recent`, `search`                    |
//! | `search`   | `book`, `movie`, `activity`, `all`               |
//! | `stats`    | `summary`, `weekly`, `monthly`, `books`, `current` |
//!
//! # Error Handling
//!
//! Nothing a user types crashes a handler:
//!
//! - unknown subcommands and missing or invalid options are answered with a
//!   short text message, see [`command::CommandParsingError`]
//! - data source failures are logged and answered with a generic message that
//!   includes the error text
//!
//! # Module Organization
//!
//! - [`commander`] - entry point parsing and executing commands
//! - [`command`] - typed command enums and their parsing
//! - [`descriptors`] - static command metadata, also registered with Discord
//! - [`actions`] - one handler per command
//! - [`embed_response`] - reply formatting
//! - [`reply`] - reply structures

use std::collections::HashMap;

use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime};

use crate::{sheets::Requester, tracker::Tracker};

mod actions;
pub mod command;
mod commander;
pub mod descriptors;
pub mod embed_response;
pub mod reply;

pub use crate::commands::commander::Commander;
pub use crate::commands::reply::{Color, Embed, Reply};

/// Value of a command option.
#[derive(Debug, Clone, PartialEq)]
pub enum OptionValue {
    String(String),
    Integer(i64),
}

impl OptionValue {
    pub fn as_string(&self) -> String {
        match self {
            OptionValue::String(s) => s.clone(),
            OptionValue::Integer(i) => i.to_string(),
        }
    }

    /// Integer value, strings holding a number are accepted too.
    pub fn as_integer(&self) -> Option<i64> {
        match self {
            OptionValue::String(s) => s.trim().parse::<i64>().ok(),
            OptionValue::Integer(i) => Some(*i),
        }
    }
}

impl From<&str> for OptionValue {
    fn from(value: &str) -> Self {
        OptionValue::String(value.to_owned())
    }
}

impl From<i64> for OptionValue {
    fn from(value: i64) -> Self {
        OptionValue::Integer(value)
    }
}

/// A slash command as received from Discord.
///
/// # Examples
///
/// ```
/// let invocation = Invocation::new("activity")
///     .subcommand("add")
///     .option("content", "Jogging 30min");
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Invocation {
    pub command: String,
    pub subcommand: Option<String>,
    pub options: HashMap<String, OptionValue>,
}

impl Invocation {
    pub fn new(command: &str) -> Self {
        Invocation {
            command: command.to_owned(),
            ..Default::default()
        }
    }

    pub fn subcommand(mut self, name: &str) -> Self {
        self.subcommand = Some(name.to_owned());
        self
    }

    pub fn option(mut self, name: &str, value: impl Into<OptionValue>) -> Self {
        self.options.insert(name.to_owned(), value.into());
        self
    }
}

/// Runtime context for command execution.
///
/// # Fields
///
/// * `tracker` - Reads and writes items and reports
/// * `user` - Name of the Discord user who issued the command
/// * `now` - Time of the command in the configured time zone
pub struct CommandContext<'a, R: Requester> {
    pub tracker: &'a Tracker<R>,
    pub user: String,
    pub now: DateTime<FixedOffset>,
}

impl<R: Requester> CommandContext<'_, R> {
    pub fn today(&self) -> NaiveDate {
        self.now.date_naive()
    }

    /// Local wall clock time, as written in the sheets.
    pub fn local_now(&self) -> NaiveDateTime {
        self.now.naive_local()
    }
}
