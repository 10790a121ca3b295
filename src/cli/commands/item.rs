use crate::cli::core::{CommandError, CommandResult, ShellContext};
use crate::cli::registry::CommandEntry;
use crate::ledger::ItemKind;

pub(crate) fn definitions() -> Vec<CommandEntry> {
    vec![
        CommandEntry::new(
            "add",
            "Add an income or expense item",
            "add [income|expense] [description] [value]",
            cmd_add,
        ),
        CommandEntry::new(
            "delete",
            "Delete an item by id",
            "delete [income|expense] [id]",
            cmd_delete,
        ),
        CommandEntry::new(
            "list",
            "List stored items",
            "list [income|expense]",
            cmd_list,
        ),
        CommandEntry::new("summary", "Show the current budget", "summary", cmd_summary),
    ]
}

fn parse_kind(token: &str) -> Result<ItemKind, CommandError> {
    ItemKind::from_token(token).ok_or_else(|| {
        CommandError::InvalidArguments(format!(
            "unknown item kind `{}` (expected income or expense)",
            token
        ))
    })
}

fn cmd_add(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    if args.is_empty() {
        return context.run_add_wizard();
    }
    if args.len() < 3 {
        return Err(CommandError::InvalidArguments(
            "usage: add <income|expense> <description> <value>".into(),
        ));
    }

    let kind = parse_kind(args[0])?;
    let value: f64 = args[args.len() - 1]
        .parse()
        .map_err(|_| CommandError::InvalidArguments("value must be numeric".into()))?;
    // everything between the kind and the value is the description
    let description = args[1..args.len() - 1].join(" ");
    context.add_item(kind, &description, value)
}

fn cmd_delete(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    match args {
        [] => context.run_delete_wizard(),
        [kind, id] => {
            let kind = parse_kind(kind)?;
            let id: u32 = id
                .parse()
                .map_err(|_| CommandError::InvalidArguments("id must be a non-negative integer".into()))?;
            context.delete_item(kind, id)
        }
        _ => Err(CommandError::InvalidArguments(
            "usage: delete <income|expense> <id>".into(),
        )),
    }
}

fn cmd_list(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let filter = match args.first() {
        Some(token) => Some(parse_kind(token)?),
        None => None,
    };
    context.render_items(filter)
}

fn cmd_summary(context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    context.render_summary();
    Ok(())
}
