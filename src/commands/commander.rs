//! Command orchestration and execution.
//!
//! This module provides the [`Commander`] struct, which serves as the main entry point
//! for processing slash commands. It coordinates command parsing and execution, routing
//! commands to their appropriate handlers.
//!
//! # Architecture
//!
//! The Commander follows a two-phase processing model:
//!
//! 1. **Parsing Phase** - Checks the invocation against the command descriptors and
//!    parses it into a structured [`Command`]
//! 2. **Execution Phase** - Routes parsed commands to specialized handlers that produce replies
//!
//! # Flow
//!
//! ```text
//! Invocation → parse() → Command → execute() → Reply
//! ```
//!
//! # Examples
//!
//! ```no_run
//! # async fn example(tracker: Tracker<LocalSheets>) {
//! let commander = Commander::new();
//! let invocation = Invocation::new("stats").subcommand("weekly");
//! let context = CommandContext {
//!     tracker: &tracker,
//!     user: "alice".to_owned(),
//!     now: Utc::now().fixed_offset(),
//! };
//! let reply = commander.handle(&invocation, &context).await;
//! # }
//! ```

use log::{debug, error};

use crate::{
    commands::{
        CommandContext, Invocation, Reply,
        actions::{
            handle_activity, handle_book, handle_movie, handle_report, handle_reports,
            handle_search, handle_stats,
        },
        command::{Command, CommandParsingError, format_command_error},
        descriptors::{self, CommandDescriptor},
        embed_response::format_handler_error,
    },
    sheets::Requester,
};

/// Command orchestrator for parsing and executing slash commands.
///
/// The Commander is responsible for:
/// - Rejecting subcommands the descriptors do not know
/// - Parsing invocations into structured commands
/// - Routing commands to appropriate handlers
/// - Converting errors into user-friendly messages
pub struct Commander {
    descriptors: &'static [CommandDescriptor],
}

impl Default for Commander {
    fn default() -> Self {
        Self::new()
    }
}

impl Commander {
    pub fn new() -> Self {
        Commander {
            descriptors: descriptors::COMMANDS,
        }
    }

    /// Descriptors of the commands this commander handles.
    pub fn descriptors(&self) -> &'static [CommandDescriptor] {
        self.descriptors
    }

    fn check_descriptor(&self, invocation: &Invocation) -> Result<(), CommandParsingError> {
        let Some(descriptor) = self.descriptors.iter().find(|d| d.name == invocation.command)
        else {
            return Err(CommandParsingError::UnknownCommand(
                invocation.command.clone(),
            ));
        };

        if descriptor.subcommands.is_empty() {
            return Ok(());
        }

        match invocation.subcommand.as_deref() {
            None => Err(CommandParsingError::MissingSubcommand),
            Some(name) if descriptor.subcommand(name).is_none() => {
                Err(CommandParsingError::UnknownSubcommand(name.to_owned()))
            }
            Some(_) => Ok(()),
        }
    }

    /// Parses an invocation into a structured command.
    ///
    /// # Returns
    ///
    /// * `Ok(Command)` - Successfully parsed and validated command
    /// * `Err(Reply)` - Text reply explaining what is wrong with the invocation
    ///
    /// # Examples
    ///
    /// ```
    /// let commander = Commander::new();
    /// let result = commander.parse(&Invocation::new("book").subcommand("dance"));
    /// assert_eq!(result, Err(Reply::Text("❌ 不明なサブコマンド: dance".to_owned())));
    /// ```
    pub fn parse(&self, invocation: &Invocation) -> Result<Command, Reply> {
        self.check_descriptor(invocation)
            .and_then(|_| Command::parse(invocation))
            .map_err(|e| {
                debug!("invalid invocation {:?}: {:?}", invocation, e);
                format_command_error(e)
            })
    }

    /// Executes a parsed command and returns the reply.
    ///
    /// Handler errors never escape: they are logged and answered with a
    /// generic message holding the error text.
    ///
    /// # Command Handlers
    ///
    /// - [`Command::Book`] → [`handle_book`]
    /// - [`Command::Movie`] → [`handle_movie`]
    /// - [`Command::Activity`] → [`handle_activity`]
    /// - [`Command::Report`] → [`handle_report`]
    /// - [`Command::Reports`] → [`handle_reports`]
    /// - [`Command::Search`] → [`handle_search`]
    /// - [`Command::Stats`] → [`handle_stats`]
    pub async fn execute<R: Requester>(&self, command: &Command, context: &CommandContext<'_, R>) -> Reply {
        let result = match command {
            Command::Book(book) => handle_book(context, book).await,
            Command::Movie(movie) => handle_movie(context, movie).await,
            Command::Activity(activity) => handle_activity(context, activity).await,
            Command::Report {
                category,
                item_id,
                content,
            } => handle_report(context, *category, *item_id, content).await,
            Command::Reports(reports) => handle_reports(context, reports).await,
            Command::Search { scope, keyword } => handle_search(context, *scope, keyword).await,
            Command::Stats(stats) => handle_stats(context, *stats).await,
        };

        match result {
            Ok(reply) => reply,
            Err(e) => {
                error!("command {:?} from {} failed: {}", command, context.user, e);
                format_handler_error(&e.to_string())
            }
        }
    }

    /// Parses and executes an invocation.
    ///
    /// Embed replies are stamped with the time of the command.
    pub async fn handle<R: Requester>(&self, invocation: &Invocation, context: &CommandContext<'_, R>) -> Reply {
        let reply = match self.parse(invocation) {
            Ok(command) => self.execute(&command, context).await,
            Err(reply) => reply,
        };

        match reply {
            Reply::Embed(embed) => Reply::Embed(embed.timestamp(context.now)),
            text => text,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        commands::test_utils::{create_context, create_tracker, now},
        sheets::{MockRequester, SheetsError},
        tracker::{Category, Status, Tracker},
    };

    #[test]
    fn test_parse_unknown_subcommand_for_every_command() {
        let commander = Commander::new();
        for descriptor in commander.descriptors() {
            if descriptor.subcommands.is_empty() {
                continue;
            }
            let invocation = Invocation::new(descriptor.name).subcommand("dance");
            assert_eq!(
                commander.parse(&invocation),
                Err(Reply::Text("❌ 不明なサブコマンド: dance".to_owned())),
                "{}",
                descriptor.name
            );
        }
    }

    #[test]
    fn test_every_subcommand_parses() {
        let commander = Commander::new();
        for descriptor in commander.descriptors() {
            for subcommand in descriptor.subcommands {
                let mut invocation = Invocation::new(descriptor.name).subcommand(subcommand.name);
                for option in subcommand.options.iter().filter(|o| o.required) {
                    invocation = match option.name {
                        "id" => invocation.option("id", 1_i64),
                        "category" => invocation.option("category", "book"),
                        name => invocation.option(name, "value"),
                    };
                }
                assert!(
                    commander.parse(&invocation).is_ok(),
                    "{} {}",
                    descriptor.name,
                    subcommand.name
                );
            }
        }
    }

    #[test]
    fn test_parse_unknown_command() {
        let commander = Commander::new();
        let result = commander.parse(&Invocation::new("music"));
        assert_eq!(
            result,
            Err(Reply::Text("❌ 不明なコマンド: music".to_owned()))
        );
    }

    #[test]
    fn test_parse_missing_option() {
        let commander = Commander::new();
        let result = commander.parse(&Invocation::new("book").subcommand("start"));
        assert!(matches!(result, Err(Reply::Text(message)) if message.contains("`id`")));
    }

    #[tokio::test]
    async fn test_activity_flow() {
        let commander = Commander::new();
        let tracker = create_tracker();
        let context = create_context(&tracker);

        let add = Invocation::new("activity")
            .subcommand("add")
            .option("content", "Jogging 30min");
        let Reply::Embed(embed) = commander.handle(&add, &context).await else {
            panic!("expected an embed");
        };
        assert_eq!(embed.title, "🎯 活動を追加しました！");
        assert_eq!(embed.timestamp, Some(now()));
        let id = embed.field_value("ID").unwrap().parse::<i64>().unwrap();

        let done = Invocation::new("activity").subcommand("done").option("id", id);
        let Reply::Embed(embed) = commander.handle(&done, &context).await else {
            panic!("expected an embed");
        };
        assert_eq!(embed.title, "🎉 活動完了！");
        assert_eq!(embed.field_value("ステータス"), Some("予定 → 完了"));

        let activity = tracker.find_item(Category::Activity, id).await.unwrap().unwrap();
        assert_eq!(activity.status, Status::Done);
        assert_eq!(activity.updated_at, Some(context.today()));
    }

    #[tokio::test]
    async fn test_report_flow() {
        let commander = Commander::new();
        let tracker = create_tracker();
        let context = create_context(&tracker);

        let report = Invocation::new("report")
            .option("category", "movie")
            .option("id", 2_i64)
            .option("content", "Great soundtrack");
        commander.handle(&report, &context).await;

        let search = Invocation::new("reports")
            .subcommand("search")
            .option("keyword", "soundtrack");
        let Reply::Embed(embed) = commander.handle(&search, &context).await else {
            panic!("expected an embed");
        };
        assert_eq!(embed.field_value("📊 見つかった件数"), Some("1件"));
    }

    #[tokio::test]
    async fn test_recent_reports_with_huge_days_is_answered() {
        let commander = Commander::new();
        let tracker = create_tracker();
        let context = create_context(&tracker);

        for days in [1_000_000_000_i64, i64::MAX] {
            let recent = Invocation::new("reports")
                .subcommand("recent")
                .option("days", days);
            let reply = commander.handle(&recent, &context).await;
            assert!(matches!(reply, Reply::Embed(_)), "{}", days);
        }
    }

    #[tokio::test]
    async fn test_handler_error_is_answered() {
        let mut requester = MockRequester::new();
        requester
            .expect_read()
            .returning(|_| Err(SheetsError::Status(503)));
        let tracker = Tracker::new(requester);
        let context = CommandContext {
            tracker: &tracker,
            user: "alice".to_owned(),
            now: now(),
        };

        let reply = Commander::new()
            .handle(&Invocation::new("book").subcommand("list"), &context)
            .await;
        assert_eq!(
            reply,
            Reply::Text(
                "処理中にエラーが発生しました: spreadsheet api answered with status 503".to_owned()
            )
        );
    }
}
