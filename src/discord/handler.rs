//! Gateway event handler.
//!
//! On `ready` the slash commands are registered and the notifier is started.
//! Each command interaction is deferred at once, since reading the sheets can
//! take longer than the three seconds Discord waits for an answer, then the
//! reply replaces the deferred response.

use std::sync::{
    Arc,
    atomic::{AtomicBool, Ordering},
};

use chrono::{FixedOffset, Utc};
use log::{debug, error, info};
use serenity::{
    all::{CommandData, CommandInteraction, Interaction, ResolvedValue},
    async_trait,
    client::{Context, EventHandler},
    model::gateway::Ready,
};

use crate::{
    commands::{CommandContext, Commander, Invocation, OptionValue},
    discord::{embed::edit_response, registration::register_commands},
    notifications::Notifier,
    sheets::SheetsBackend,
    tracker::Tracker,
};

pub struct Handler {
    commander: Arc<Commander>,
    tracker: Arc<Tracker<SheetsBackend>>,
    guild_id: Option<u64>,
    offset: FixedOffset,
    notifier: Option<Arc<Notifier>>,
    /// Set once the notifier runs, `ready` fires again after reconnections
    notifier_started: AtomicBool,
}

impl Handler {
    pub fn new(
        commander: Arc<Commander>,
        tracker: Arc<Tracker<SheetsBackend>>,
        guild_id: Option<u64>,
        offset: FixedOffset,
        notifier: Option<Arc<Notifier>>,
    ) -> Self {
        Handler {
            commander,
            tracker,
            guild_id,
            offset,
            notifier,
            notifier_started: AtomicBool::new(false),
        }
    }

    async fn handle_command(&self, ctx: &Context, command: &CommandInteraction) {
        if let Err(e) = command.defer(&ctx.http).await {
            error!("failed to defer /{}: {}", command.data.name, e);
            return;
        }

        let invocation = invocation_from(&command.data);
        debug!("received {:?} from {}", invocation, command.user.name);

        let context = CommandContext {
            tracker: &*self.tracker,
            user: command.user.name.clone(),
            now: Utc::now().with_timezone(&self.offset),
        };
        let reply = self.commander.handle(&invocation, &context).await;

        if let Err(e) = command.edit_response(&ctx.http, edit_response(&reply)).await {
            error!("failed to answer /{}: {}", command.data.name, e);
        }
    }
}

/// Option value handled by the commands, other kinds are ignored.
pub fn option_value(value: &ResolvedValue) -> Option<OptionValue> {
    match value {
        ResolvedValue::String(s) => Some(OptionValue::String((*s).to_owned())),
        ResolvedValue::Integer(i) => Some(OptionValue::Integer(*i)),
        _ => None,
    }
}

fn invocation_from(data: &CommandData) -> Invocation {
    let mut invocation = Invocation::new(&data.name);

    for option in data.options() {
        match &option.value {
            ResolvedValue::SubCommand(sub_options) => {
                invocation = invocation.subcommand(option.name);
                for sub_option in sub_options {
                    if let Some(value) = option_value(&sub_option.value) {
                        invocation = invocation.option(sub_option.name, value);
                    }
                }
            }
            value => {
                if let Some(value) = option_value(value) {
                    invocation = invocation.option(option.name, value);
                }
            }
        }
    }

    invocation
}

#[async_trait]
impl EventHandler for Handler {
    async fn ready(&self, ctx: Context, ready: Ready) {
        info!("connected to Discord as {}", ready.user.name);

        if let Err(e) =
            register_commands(&ctx.http, self.guild_id, self.commander.descriptors()).await
        {
            error!("failed to register slash commands: {}", e);
        }

        if let Some(notifier) = &self.notifier {
            if !self.notifier_started.swap(true, Ordering::SeqCst) {
                notifier.start(Arc::clone(&ctx.http));
            }
        }
    }

    async fn interaction_create(&self, ctx: Context, interaction: Interaction) {
        if let Interaction::Command(command) = interaction {
            self.handle_command(&ctx, &command).await;
        }
    }
}
