use crate::cli::core::{CommandError, CommandResult, ShellContext};
use crate::cli::registry::CommandEntry;

pub(crate) fn definitions() -> Vec<CommandEntry> {
    vec![CommandEntry::new(
        "config",
        "Show or change configuration",
        "config [show | set <key> <value>]",
        cmd_config,
    )]
}

fn cmd_config(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    match args {
        [] | ["show"] => context.show_config(),
        ["set", key, value] => context.set_config_value(key, value),
        _ => Err(CommandError::InvalidArguments(
            "usage: config [show | set <key> <value>]".into(),
        )),
    }
}
