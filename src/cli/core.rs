//! Shell context, command dispatch, and the handlers behind the item and
//! summary commands.

use std::io;

use dialoguer::{theme::ColorfulTheme, Input, Select};
use strsim::levenshtein;
use thiserror::Error;

use crate::{
    config::{Config, ConfigManager},
    core::services::{ItemService, ServiceError, SummaryService},
    errors::BudgetError,
    ledger::{ItemKind, Ledger},
};

use super::banner::Banner;
use super::commands;
use super::formatting::{format_percentage, format_signed_amount};
use super::io as cli_io;
use super::output;
use super::registry::{CommandEntry, CommandRegistry};
pub use crate::errors::CliError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CliMode {
    Interactive,
    Script,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum LoopControl {
    Continue,
    Exit,
}

pub type CommandResult = Result<(), CommandError>;

#[derive(Debug, Error)]
pub enum CommandError {
    #[error("{0}")]
    InvalidArguments(String),
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error(transparent)]
    Core(#[from] BudgetError),
    #[error(transparent)]
    Dialoguer(#[from] dialoguer::Error),
    #[error("exit requested")]
    ExitRequested,
}

impl From<ServiceError> for CommandError {
    fn from(err: ServiceError) -> Self {
        match err {
            ServiceError::Core(err) => CommandError::Core(err),
            ServiceError::Invalid(message) => CommandError::InvalidArguments(message),
        }
    }
}

/// Session state the command handlers operate on.
pub struct ShellContext {
    pub(crate) mode: CliMode,
    pub(crate) registry: CommandRegistry,
    pub(crate) ledger: Ledger,
    pub(crate) theme: ColorfulTheme,
    pub(crate) config_manager: ConfigManager,
    pub(crate) config: Config,
    pub(crate) running: bool,
}

impl ShellContext {
    pub fn new(mode: CliMode) -> Result<Self, CliError> {
        let config_manager = ConfigManager::new()?;
        Self::with_manager(mode, config_manager)
    }

    #[cfg(test)]
    pub(crate) fn with_base_dir(mode: CliMode, base: std::path::PathBuf) -> Result<Self, CliError> {
        let config_manager = ConfigManager::with_base_dir(base)?;
        Self::with_manager(mode, config_manager)
    }

    fn with_manager(mode: CliMode, config_manager: ConfigManager) -> Result<Self, CliError> {
        let mut registry = CommandRegistry::new();
        commands::register_all(&mut registry);
        let config = config_manager.load()?;

        Ok(ShellContext {
            mode,
            registry,
            ledger: Ledger::new(),
            theme: ColorfulTheme::default(),
            config_manager,
            config,
            running: true,
        })
    }

    pub(crate) fn prompt(&self) -> String {
        "budget> ".to_string()
    }

    pub(crate) fn command_names(&self) -> Vec<&'static str> {
        self.registry.names().collect()
    }

    pub(crate) fn command(&self, name: &str) -> Option<&CommandEntry> {
        self.registry.get(name)
    }

    pub(crate) fn render_startup(&self) {
        Banner::render();
        self.render_summary();
    }

    pub(crate) fn dispatch(
        &mut self,
        command: &str,
        raw: &str,
        args: &[&str],
    ) -> Result<LoopControl, CommandError> {
        if let Some(handler) = self.registry.handler(command) {
            match handler(self, args) {
                Ok(()) => Ok(LoopControl::Continue),
                Err(CommandError::ExitRequested) => Ok(LoopControl::Exit),
                Err(err) => Err(err),
            }
        } else {
            self.suggest_command(raw);
            Ok(LoopControl::Continue)
        }
    }

    pub(crate) fn suggest_command(&self, input: &str) {
        cli_io::print_warning(format!(
            "Unknown command `{}`. Type `help` to see available commands.",
            input
        ));

        let mut suggestions: Vec<_> = self
            .registry
            .names()
            .map(|key| (levenshtein(key, input), key))
            .collect();
        suggestions.sort_by_key(|(distance, _)| *distance);

        if let Some((distance, best)) = suggestions.first() {
            if *distance <= 3 {
                cli_io::print_info(format!("Suggestion: `{}`?", best));
            }
        }
    }

    pub(crate) fn confirm_exit(&self) -> Result<bool, CliError> {
        if self.mode == CliMode::Script {
            return Ok(true);
        }
        cli_io::confirm_action(&self.theme, "Exit shell?", true).map_err(CliError::from)
    }

    pub(crate) fn report_error(&self, err: CommandError) -> Result<(), CliError> {
        match err {
            CommandError::ExitRequested => Ok(()),
            CommandError::InvalidArguments(message) => {
                self.print_error(&message);
                self.print_hint("Use `help <command>` for usage details.");
                Ok(())
            }
            other => {
                self.print_error(&other.to_string());
                Ok(())
            }
        }
    }

    pub(crate) fn print_error(&self, message: &str) {
        cli_io::print_error(message);
    }

    pub(crate) fn print_warning(&self, message: &str) {
        cli_io::print_warning(message);
    }

    pub(crate) fn print_hint(&self, message: &str) {
        cli_io::print_info(message);
    }

    fn signed(&self, value: f64, negative: bool) -> String {
        format_signed_amount(value, negative, &self.config)
    }

    /// Adds a validated item, then refreshes and re-renders the summary so
    /// derived state follows every mutation.
    pub(crate) fn add_item(&mut self, kind: ItemKind, description: &str, value: f64) -> CommandResult {
        let (id, stored_description, stored_value) = {
            let item = ItemService::add(&mut self.ledger, kind, description, value)?;
            (item.id(), item.description().to_string(), item.value())
        };
        let amount = self.signed(stored_value, kind == ItemKind::Expense);
        cli_io::print_success(format!(
            "Added {kind} `{stored_description}`: {amount} [id {id}]"
        ));
        SummaryService::refresh(&mut self.ledger);
        self.render_summary();
        Ok(())
    }

    pub(crate) fn delete_item(&mut self, kind: ItemKind, id: u32) -> CommandResult {
        if ItemService::remove(&mut self.ledger, kind, id) {
            cli_io::print_success(format!("Removed {kind} item [id {id}]."));
            SummaryService::refresh(&mut self.ledger);
            self.render_summary();
        } else {
            // absent ids are a no-op in the ledger; only the shell comments
            cli_io::print_warning(format!("No {kind} item with id {id}; nothing removed."));
        }
        Ok(())
    }

    pub(crate) fn render_summary(&self) {
        let snapshot = SummaryService::snapshot(&self.ledger);
        output::section("Budget Overview");
        cli_io::print_info(format!(
            "  Available budget: {}",
            self.signed(snapshot.budget, snapshot.budget <= 0.0)
        ));
        cli_io::print_info(format!(
            "  Total income:     {}",
            self.signed(snapshot.total_income, false)
        ));
        cli_io::print_info(format!(
            "  Total expenses:   {}",
            self.signed(snapshot.total_expenses, true)
        ));
        cli_io::print_info(format!(
            "  Spent:            {}",
            format_percentage(snapshot.overall_percentage)
        ));
    }

    pub(crate) fn render_items(&self, filter: Option<ItemKind>) -> CommandResult {
        if filter.map_or(true, |kind| kind == ItemKind::Income) {
            output::section("Income");
            if self.ledger.incomes().is_empty() {
                cli_io::print_info("  (none)");
            }
            for item in self.ledger.incomes() {
                cli_io::print_info(format!(
                    "  [{:>3}] {:<24} {:>14}",
                    item.id,
                    item.description,
                    self.signed(item.value, false)
                ));
            }
        }
        if filter.map_or(true, |kind| kind == ItemKind::Expense) {
            output::section("Expenses");
            if self.ledger.expenses().is_empty() {
                cli_io::print_info("  (none)");
            }
            for item in self.ledger.expenses() {
                cli_io::print_info(format!(
                    "  [{:>3}] {:<24} {:>14} {:>6}",
                    item.id,
                    item.description,
                    self.signed(item.value, true),
                    format_percentage(item.percentage())
                ));
            }
        }
        Ok(())
    }

    pub(crate) fn run_add_wizard(&mut self) -> CommandResult {
        if self.mode != CliMode::Interactive {
            return Err(CommandError::InvalidArguments(
                "usage: add <income|expense> <description> <value>".into(),
            ));
        }

        let kind = self.prompt_item_kind()?;
        let description: String = Input::with_theme(&self.theme)
            .with_prompt("Description")
            .validate_with(|input: &String| -> Result<(), &str> {
                if input.trim().is_empty() {
                    Err("Description cannot be empty")
                } else {
                    Ok(())
                }
            })
            .interact_text()
            .map_err(CommandError::from)?;
        let value = Input::<f64>::with_theme(&self.theme)
            .with_prompt("Value")
            .validate_with(|value: &f64| -> Result<(), &str> {
                if !value.is_finite() || *value <= 0.0 {
                    Err("Value must be greater than 0")
                } else {
                    Ok(())
                }
            })
            .interact()
            .map_err(CommandError::from)?;

        self.add_item(kind, &description, value)
    }

    pub(crate) fn run_delete_wizard(&mut self) -> CommandResult {
        if self.mode != CliMode::Interactive {
            return Err(CommandError::InvalidArguments(
                "usage: delete <income|expense> <id>".into(),
            ));
        }

        let kind = self.prompt_item_kind()?;
        let choices: Vec<(u32, String)> = match kind {
            ItemKind::Income => self
                .ledger
                .incomes()
                .iter()
                .map(|item| {
                    (
                        item.id,
                        format!(
                            "[{}] {} ({})",
                            item.id,
                            item.description,
                            self.signed(item.value, false)
                        ),
                    )
                })
                .collect(),
            ItemKind::Expense => self
                .ledger
                .expenses()
                .iter()
                .map(|item| {
                    (
                        item.id,
                        format!(
                            "[{}] {} ({})",
                            item.id,
                            item.description,
                            self.signed(item.value, true)
                        ),
                    )
                })
                .collect(),
        };

        if choices.is_empty() {
            cli_io::print_warning(format!("No {kind} items to delete."));
            return Ok(());
        }

        let labels: Vec<&str> = choices.iter().map(|(_, label)| label.as_str()).collect();
        let selection = Select::with_theme(&self.theme)
            .with_prompt("Delete which item?")
            .items(&labels)
            .default(0)
            .interact()
            .map_err(CommandError::from)?;

        let id = choices[selection].0;
        self.delete_item(kind, id)
    }

    fn prompt_item_kind(&self) -> Result<ItemKind, CommandError> {
        let options = ["Income", "Expense"];
        let selection = Select::with_theme(&self.theme)
            .with_prompt("Item kind")
            .items(&options)
            .default(0)
            .interact()
            .map_err(CommandError::from)?;
        Ok(if selection == 0 {
            ItemKind::Income
        } else {
            ItemKind::Expense
        })
    }

    pub(crate) fn show_config(&self) -> CommandResult {
        output::section("Configuration");
        cli_io::print_info(format!(
            "  decimal_separator:  {}",
            self.config.decimal_separator
        ));
        cli_io::print_info(format!(
            "  grouping_separator: {}",
            self.config.grouping_separator
        ));
        cli_io::print_info(format!("  precision:          {}", self.config.precision));
        cli_io::print_info(format!(
            "  file:               {}",
            self.config_manager.path().display()
        ));
        Ok(())
    }

    pub(crate) fn set_config_value(&mut self, key: &str, value: &str) -> CommandResult {
        match key.to_lowercase().as_str() {
            "decimal_separator" => self.config.decimal_separator = parse_separator(value)?,
            "grouping_separator" => self.config.grouping_separator = parse_separator(value)?,
            "precision" => {
                let parsed: u8 = value.parse().map_err(|_| {
                    CommandError::InvalidArguments("precision must be numeric (0-6)".into())
                })?;
                if parsed > 6 {
                    return Err(CommandError::InvalidArguments(
                        "precision must be between 0 and 6".into(),
                    ));
                }
                self.config.precision = parsed;
            }
            other => {
                return Err(CommandError::InvalidArguments(format!(
                    "unknown config key `{}`",
                    other
                )))
            }
        }
        self.config_manager.save(&self.config)?;
        cli_io::print_success("Configuration updated.");
        Ok(())
    }

    #[cfg(test)]
    pub(crate) fn process_line(&mut self, line: &str) -> Result<LoopControl, CommandError> {
        let tokens = match crate::cli::shell::parse_command_line(line) {
            Ok(tokens) => tokens,
            Err(err) => {
                self.print_warning(&err.to_string());
                return Ok(LoopControl::Continue);
            }
        };

        if tokens.is_empty() {
            return Ok(LoopControl::Continue);
        }

        let command = tokens[0].to_lowercase();
        let args: Vec<&str> = tokens.iter().skip(1).map(String::as_str).collect();
        self.dispatch(&command, &tokens[0], &args)
    }
}

fn parse_separator(value: &str) -> Result<char, CommandError> {
    let mut chars = value.chars();
    match (chars.next(), chars.next()) {
        (Some(ch), None) => Ok(ch),
        _ => Err(CommandError::InvalidArguments(
            "separator must be a single character".into(),
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn script_context(temp: &tempfile::TempDir) -> ShellContext {
        ShellContext::with_base_dir(CliMode::Script, temp.path().to_path_buf())
            .expect("context for temp dir")
    }

    #[test]
    fn add_line_mutates_the_ledger() {
        let temp = tempdir().unwrap();
        let mut context = script_context(&temp);
        context
            .process_line("add income Salary 1250.50")
            .expect("add succeeds");
        assert_eq!(context.ledger.incomes().len(), 1);
        assert_eq!(context.ledger.get_budget().total_income, 1250.5);
    }

    #[test]
    fn multi_word_descriptions_join_between_kind_and_value() {
        let temp = tempdir().unwrap();
        let mut context = script_context(&temp);
        context
            .process_line("add expense Weekly grocery run 45.5")
            .expect("add succeeds");
        assert_eq!(context.ledger.expenses()[0].description, "Weekly grocery run");
    }

    #[test]
    fn invalid_add_leaves_the_ledger_untouched() {
        let temp = tempdir().unwrap();
        let mut context = script_context(&temp);
        let err = context
            .process_line("add income Salary nope")
            .expect_err("non-numeric value must fail");
        assert!(matches!(err, CommandError::InvalidArguments(_)));
        assert!(context.ledger.is_empty());
    }

    #[test]
    fn delete_of_missing_id_warns_but_succeeds() {
        let temp = tempdir().unwrap();
        let mut context = script_context(&temp);
        context
            .process_line("delete expense 3")
            .expect("missing id is not an error");
    }

    #[test]
    fn unknown_commands_fall_through_to_suggestions() {
        let temp = tempdir().unwrap();
        let mut context = script_context(&temp);
        let control = context.process_line("sumary").expect("no hard error");
        assert_eq!(control, LoopControl::Continue);
    }

    #[test]
    fn config_set_rejects_out_of_range_precision() {
        let temp = tempdir().unwrap();
        let mut context = script_context(&temp);
        let err = context
            .process_line("config set precision 9")
            .expect_err("precision 9 out of range");
        assert!(matches!(err, CommandError::InvalidArguments(_)));
    }

    #[test]
    fn config_set_persists_to_disk() {
        let temp = tempdir().unwrap();
        let mut context = script_context(&temp);
        context
            .process_line("config set grouping_separator .")
            .expect("set succeeds");
        let reloaded = context.config_manager.load().unwrap();
        assert_eq!(reloaded.grouping_separator, '.');
    }
}
