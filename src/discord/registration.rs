//! Registration of the slash commands with Discord.

use log::info;
use serenity::{
    all::{Command, CommandOptionType, GuildId},
    builder::{CreateCommand, CreateCommandOption},
    http::Http,
};

use crate::commands::descriptors::{CommandDescriptor, OptionDescriptor, OptionKind};

fn create_option(option: &OptionDescriptor) -> CreateCommandOption {
    let kind = match option.kind {
        OptionKind::String => CommandOptionType::String,
        OptionKind::Integer => CommandOptionType::Integer,
    };

    let mut builder =
        CreateCommandOption::new(kind, option.name, option.description).required(option.required);
    if let Some((min, max)) = option.range {
        builder = builder.min_int_value(min).max_int_value(max);
    }

    option.choices.iter().fold(builder, |builder, (label, value)| {
        builder.add_string_choice(*label, *value)
    })
}

pub fn create_command(descriptor: &CommandDescriptor) -> CreateCommand {
    let mut command = CreateCommand::new(descriptor.name).description(descriptor.description);

    for option in descriptor.options {
        command = command.add_option(create_option(option));
    }
    for subcommand in descriptor.subcommands {
        let builder = subcommand.options.iter().fold(
            CreateCommandOption::new(
                CommandOptionType::SubCommand,
                subcommand.name,
                subcommand.description,
            ),
            |builder, option| builder.add_sub_option(create_option(option)),
        );
        command = command.add_option(builder);
    }

    command
}

/// Registers the commands in a guild, or globally when no guild is given.
///
/// Guild commands are available at once, global ones can take up to an hour
/// to show up.
pub async fn register_commands(
    http: &Http,
    guild_id: Option<u64>,
    descriptors: &[CommandDescriptor],
) -> Result<usize, serenity::Error> {
    let commands: Vec<CreateCommand> = descriptors.iter().map(create_command).collect();

    let registered = match guild_id {
        Some(guild_id) => GuildId::new(guild_id).set_commands(http, commands).await?,
        None => Command::set_global_commands(http, commands).await?,
    };

    info!(
        "registered {} slash commands {}",
        registered.len(),
        match guild_id {
            Some(id) => format!("in guild {}", id),
            None => "globally".to_owned(),
        }
    );

    Ok(registered.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::descriptors;

    #[test]
    fn test_create_command_with_subcommands() {
        let book = descriptors::find("book").unwrap();
        let value = serde_json::to_value(create_command(book)).unwrap();

        assert_eq!(value["name"], "book");
        assert_eq!(value["description"], "本の管理");

        let add = &value["options"][0];
        assert_eq!(add["name"], "add");
        assert_eq!(add["type"], 1);
        assert_eq!(add["options"][0]["name"], "title");
        assert_eq!(add["options"][0]["type"], 3);
        assert_eq!(add["options"][0]["required"], true);
        assert_eq!(add["options"][2]["choices"][0]["name"], "買いたい");
        assert_eq!(add["options"][2]["choices"][0]["value"], "want_to_buy");

        let buy = &value["options"][1];
        assert_eq!(buy["options"][0]["name"], "id");
        assert_eq!(buy["options"][0]["type"], 4);
    }

    #[test]
    fn test_create_command_with_options() {
        let report = descriptors::find("report").unwrap();
        let value = serde_json::to_value(create_command(report)).unwrap();

        let options = value["options"].as_array().unwrap();
        assert_eq!(options.len(), 3);
        assert_eq!(options[0]["name"], "category");
        assert_eq!(options[0]["choices"].as_array().unwrap().len(), 3);
        assert!(options[1].get("max_value").is_none_or(|v| v.is_null()));
    }

    #[test]
    fn test_create_command_with_bounded_integer() {
        let reports = descriptors::find("reports").unwrap();
        let value = serde_json::to_value(create_command(reports)).unwrap();

        let recent = &value["options"][1];
        assert_eq!(recent["name"], "recent");
        let days = &recent["options"][0];
        assert_eq!(days["name"], "days");
        assert_eq!(days["type"], 4);
        assert_eq!(days["min_value"], 1);
        assert_eq!(days["max_value"], descriptors::MAX_RECENT_DAYS);
    }
}
