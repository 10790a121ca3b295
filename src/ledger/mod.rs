//! In-memory budget ledger: item partitions and derived totals.

pub mod item;
#[allow(clippy::module_inception)]
pub mod ledger;

pub use item::{Expense, Income, ItemKind, ItemRef};
pub use ledger::{BudgetSnapshot, Ledger, Totals};
