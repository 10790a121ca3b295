use assert_cmd::Command;
use predicates::{prelude::PredicateBooleanExt, str::contains};

mod common;

fn script_command(home: &std::path::Path) -> Command {
    let mut cmd = Command::cargo_bin("budget_tracker_cli").unwrap();
    cmd.env("BUDGET_TRACKER_CLI_SCRIPT", "1")
        .env("BUDGET_TRACKER_HOME", home);
    cmd
}

#[test]
fn script_mode_runs_basic_flow() {
    let home = common::setup_home();
    let input = "\
add income Salary 1250.50
add expense Rent 450
summary
exit
";

    script_command(&home)
        .write_stdin(input)
        .assert()
        .success()
        .stdout(
            contains("Added income `Salary`: + 1,250.50 [id 0]")
                .and(contains("Added expense `Rent`: - 450.00 [id 0]"))
                .and(contains("Available budget: + 800.50"))
                .and(contains("Spent:            36%")),
        );
}

#[test]
fn list_shows_percentages_and_the_sentinel() {
    let home = common::setup_home();
    let input = "\
add expense Rent 450
list expense
add income Salary 900
list expense
exit
";

    script_command(&home)
        .write_stdin(input)
        .assert()
        .success()
        // before any income exists the share renders as dashes, afterwards as 50%
        .stdout(contains("---").and(contains("50%")));
}

#[test]
fn deleting_an_item_updates_the_summary() {
    let home = common::setup_home();
    let input = "\
add income Salary 100
add expense Food 30
delete expense 0
summary
exit
";

    script_command(&home)
        .write_stdin(input)
        .assert()
        .success()
        .stdout(
            contains("Removed expense item [id 0].")
                .and(contains("Available budget: + 100.00"))
                .and(contains("Spent:            ---")),
        );
}

#[test]
fn deleting_a_missing_id_is_a_warning_not_an_error() {
    let home = common::setup_home();
    let input = "\
delete income 5
exit
";

    script_command(&home)
        .write_stdin(input)
        .assert()
        .success()
        .stdout(contains("No income item with id 5; nothing removed."));
}

#[test]
fn invalid_input_is_rejected_before_the_ledger() {
    let home = common::setup_home();
    let input = "\
add income Salary abc
add expense \"\" 10
summary
exit
";

    script_command(&home)
        .write_stdin(input)
        .assert()
        .success()
        .stdout(
            contains("value must be numeric")
                .and(contains("description must not be empty"))
                .and(contains("Total income:     + 0.00")),
        );
}

#[test]
fn unknown_commands_get_a_suggestion() {
    let home = common::setup_home();
    let input = "\
sumary
exit
";

    script_command(&home)
        .write_stdin(input)
        .assert()
        .success()
        .stdout(contains("Unknown command `sumary`").and(contains("Suggestion: `summary`?")));
}

#[test]
fn config_set_changes_the_rendered_separators() {
    let home = common::setup_home();
    let input = "\
config set grouping_separator .
config set decimal_separator ,
add income Salary 1250.5
exit
";

    script_command(&home)
        .write_stdin(input)
        .assert()
        .success()
        .stdout(contains("Added income `Salary`: + 1.250,50 [id 0]"));
}
