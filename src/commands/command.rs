//! Command parsing and handling.
//!
//! This module converts an [`Invocation`] into a typed [`Command`] that the
//! handlers can match on exhaustively.

use log::debug;

use crate::{
    commands::{
        Invocation, Reply,
        embed_response::{
            format_invalid_option, format_missing_option, format_missing_subcommand,
            format_unknown_command, format_unknown_subcommand,
        },
    },
    tracker::{Category, SearchScope, Status},
};

/// Number of days `reports recent` covers when none is given.
pub const DEFAULT_RECENT_DAYS: i64 = 7;

/// Represents a parsed bot command.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Book(BookCommand),
    Movie(MovieCommand),
    Activity(ActivityCommand),
    /// Record a report about an item
    Report {
        category: Category,
        item_id: i64,
        content: String,
    },
    Reports(ReportsCommand),
    Search {
        scope: SearchScope,
        keyword: String,
    },
    Stats(StatsCommand),
}

#[derive(Debug, Clone, PartialEq)]
pub enum BookCommand {
    Add {
        title: String,
        author: String,
        /// Either `WantToBuy` or `WantToRead`
        status: Status,
        memo: String,
    },
    Buy(i64),
    Start(i64),
    Finish(i64),
    List,
    Wishlist,
}

#[derive(Debug, Clone, PartialEq)]
pub enum MovieCommand {
    Add { title: String, memo: String },
    Watch(i64),
    Skip(i64),
    List,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ActivityCommand {
    Add { content: String, memo: String },
    Done(i64),
    Skip(i64),
    List,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ReportsCommand {
    History { category: Category, item_id: i64 },
    Recent { days: i64 },
    Search { keyword: String },
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum StatsCommand {
    Summary,
    Weekly,
    Monthly,
    Books,
    Current,
}

/// Errors that can occur during command parsing.
#[derive(Debug, PartialEq)]
pub enum CommandParsingError {
    /// The command name is not one of the bot commands
    UnknownCommand(String),
    /// The subcommand is not known for this command
    UnknownSubcommand(String),
    /// The command needs a subcommand and none was given
    MissingSubcommand,
    /// A required option is missing or empty
    MissingOption(String),
    /// An option has a value of the wrong type or outside its choices
    InvalidOption(String),
}

fn required_string(invocation: &Invocation, name: &str) -> Result<String, CommandParsingError> {
    match invocation.options.get(name).map(|v| v.as_string()) {
        Some(value) if !value.trim().is_empty() => Ok(value.trim().to_owned()),
        _ => Err(CommandParsingError::MissingOption(name.to_owned())),
    }
}

fn optional_string(invocation: &Invocation, name: &str) -> String {
    invocation
        .options
        .get(name)
        .map(|v| v.as_string().trim().to_owned())
        .unwrap_or_default()
}

fn required_integer(invocation: &Invocation, name: &str) -> Result<i64, CommandParsingError> {
    let Some(value) = invocation.options.get(name) else {
        return Err(CommandParsingError::MissingOption(name.to_owned()));
    };
    value
        .as_integer()
        .ok_or_else(|| CommandParsingError::InvalidOption(name.to_owned()))
}

fn optional_integer(invocation: &Invocation, name: &str) -> Result<Option<i64>, CommandParsingError> {
    match invocation.options.get(name) {
        Some(value) => value
            .as_integer()
            .map(Some)
            .ok_or_else(|| CommandParsingError::InvalidOption(name.to_owned())),
        None => Ok(None),
    }
}

fn required_category(invocation: &Invocation) -> Result<Category, CommandParsingError> {
    let value = required_string(invocation, "category")?;
    Category::parse(&value).ok_or_else(|| CommandParsingError::InvalidOption("category".to_owned()))
}

impl Command {
    /// Parses an invocation into a Command.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The command is not a bot command - [`CommandParsingError::UnknownCommand`]
    /// - The subcommand is missing or unknown - [`CommandParsingError::MissingSubcommand`],
    ///   [`CommandParsingError::UnknownSubcommand`]
    /// - A required option is missing - [`CommandParsingError::MissingOption`]
    /// - An option value is invalid - [`CommandParsingError::InvalidOption`]
    ///
    /// # Examples
    ///
    /// ```
    /// let invocation = Invocation::new("stats").subcommand("weekly");
    /// let command = Command::parse(&invocation);
    /// assert_eq!(command, Ok(Command::Stats(StatsCommand::Weekly)));
    /// ```
    pub fn parse(invocation: &Invocation) -> Result<Self, CommandParsingError> {
        debug!("Parsing command: {:?}", invocation);

        if invocation.command == "report" {
            return Ok(Command::Report {
                category: required_category(invocation)?,
                item_id: required_integer(invocation, "id")?,
                content: required_string(invocation, "content")?,
            });
        }

        let subcommand = invocation
            .subcommand
            .as_deref()
            .ok_or(CommandParsingError::MissingSubcommand);

        match invocation.command.as_str() {
            "book" => Ok(Command::Book(Self::parse_book(invocation, subcommand?)?)),
            "movie" => Ok(Command::Movie(Self::parse_movie(invocation, subcommand?)?)),
            "activity" => Ok(Command::Activity(Self::parse_activity(
                invocation,
                subcommand?,
            )?)),
            "reports" => Ok(Command::Reports(Self::parse_reports(
                invocation,
                subcommand?,
            )?)),
            "search" => Self::parse_search(invocation, subcommand?),
            "stats" => Ok(Command::Stats(Self::parse_stats(subcommand?)?)),
            other => Err(CommandParsingError::UnknownCommand(other.to_owned())),
        }
    }

    fn parse_book(invocation: &Invocation, subcommand: &str) -> Result<BookCommand, CommandParsingError> {
        match subcommand {
            "add" => {
                let status = match optional_string(invocation, "status").as_str() {
                    "" | "want_to_read" => Status::WantToRead,
                    "want_to_buy" => Status::WantToBuy,
                    _ => return Err(CommandParsingError::InvalidOption("status".to_owned())),
                };
                Ok(BookCommand::Add {
                    title: required_string(invocation, "title")?,
                    author: required_string(invocation, "author")?,
                    status,
                    memo: optional_string(invocation, "memo"),
                })
            }
            "buy" => Ok(BookCommand::Buy(required_integer(invocation, "id")?)),
            "start" => Ok(BookCommand::Start(required_integer(invocation, "id")?)),
            "finish" => Ok(BookCommand::Finish(required_integer(invocation, "id")?)),
            "list" => Ok(BookCommand::List),
            "wishlist" => Ok(BookCommand::Wishlist),
            other => Err(CommandParsingError::UnknownSubcommand(other.to_owned())),
        }
    }

    fn parse_movie(invocation: &Invocation, subcommand: &str) -> Result<MovieCommand, CommandParsingError> {
        match subcommand {
            "add" => Ok(MovieCommand::Add {
                title: required_string(invocation, "title")?,
                memo: optional_string(invocation, "memo"),
            }),
            "watch" => Ok(MovieCommand::Watch(required_integer(invocation, "id")?)),
            "skip" => Ok(MovieCommand::Skip(required_integer(invocation, "id")?)),
            "list" => Ok(MovieCommand::List),
            other => Err(CommandParsingError::UnknownSubcommand(other.to_owned())),
        }
    }

    fn parse_activity(
        invocation: &Invocation,
        subcommand: &str,
    ) -> Result<ActivityCommand, CommandParsingError> {
        match subcommand {
            "add" => Ok(ActivityCommand::Add {
                content: required_string(invocation, "content")?,
                memo: optional_string(invocation, "memo"),
            }),
            "done" => Ok(ActivityCommand::Done(required_integer(invocation, "id")?)),
            "skip" => Ok(ActivityCommand::Skip(required_integer(invocation, "id")?)),
            "list" => Ok(ActivityCommand::List),
            other => Err(CommandParsingError::UnknownSubcommand(other.to_owned())),
        }
    }

    fn parse_reports(
        invocation: &Invocation,
        subcommand: &str,
    ) -> Result<ReportsCommand, CommandParsingError> {
        match subcommand {
            "history" => Ok(ReportsCommand::History {
                category: required_category(invocation)?,
                item_id: required_integer(invocation, "id")?,
            }),
            "recent" => Ok(ReportsCommand::Recent {
                days: optional_integer(invocation, "days")?.unwrap_or(DEFAULT_RECENT_DAYS),
            }),
            "search" => Ok(ReportsCommand::Search {
                keyword: required_string(invocation, "keyword")?,
            }),
            other => Err(CommandParsingError::UnknownSubcommand(other.to_owned())),
        }
    }

    fn parse_search(invocation: &Invocation, subcommand: &str) -> Result<Command, CommandParsingError> {
        let scope = match subcommand {
            "all" => SearchScope::All,
            other => match Category::parse(other) {
                Some(category) => SearchScope::Category(category),
                None => return Err(CommandParsingError::UnknownSubcommand(other.to_owned())),
            },
        };

        Ok(Command::Search {
            scope,
            keyword: optional_string(invocation, "keyword"),
        })
    }

    fn parse_stats(subcommand: &str) -> Result<StatsCommand, CommandParsingError> {
        match subcommand {
            "summary" => Ok(StatsCommand::Summary),
            "weekly" => Ok(StatsCommand::Weekly),
            "monthly" => Ok(StatsCommand::Monthly),
            "books" => Ok(StatsCommand::Books),
            "current" => Ok(StatsCommand::Current),
            other => Err(CommandParsingError::UnknownSubcommand(other.to_owned())),
        }
    }
}

/// Formats a command error into a user-friendly reply.
///
/// # Examples
///
/// ```
/// let error = CommandParsingError::UnknownSubcommand("dance".to_owned());
/// let reply = format_command_error(error);
/// assert_eq!(reply, Reply::Text("❌ 不明なサブコマンド: dance".to_owned()));
/// ```
pub fn format_command_error(error: CommandParsingError) -> Reply {
    let message = match error {
        CommandParsingError::UnknownCommand(name) => format_unknown_command(&name),
        CommandParsingError::UnknownSubcommand(name) => format_unknown_subcommand(&name),
        CommandParsingError::MissingSubcommand => format_missing_subcommand(),
        CommandParsingError::MissingOption(name) => format_missing_option(&name),
        CommandParsingError::InvalidOption(name) => format_invalid_option(&name),
    };
    Reply::Text(message)
}
