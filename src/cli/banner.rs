use chrono::Local;
use colored::Colorize;

/// Startup header: application title plus the current month.
pub struct Banner;

impl Banner {
    pub fn render() {
        let month = Local::now().format("%B %Y");
        println!("{}", "Budget Tracker".bold());
        println!("Available budget in {month}:");
    }
}
