use super::item::{percentage_of, Expense, Income, ItemKind, ItemRef};

/// In-memory ledger for one session: the income and expense partitions plus
/// derived totals recomputed from them on demand.
///
/// The ledger stores whatever it is handed and never fails; input checks and
/// recomputation ordering are the calling layer's contract (see
/// `core::services`). Create one instance per session, no global state.
#[derive(Debug, Clone, Default)]
pub struct Ledger {
    incomes: Vec<Income>,
    expenses: Vec<Expense>,
    totals: Totals,
    budget: f64,
    overall_percentage: Option<u32>,
}

/// Aggregated partition totals.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Totals {
    pub income: f64,
    pub expense: f64,
}

/// Read-only view over the derived budget state.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BudgetSnapshot {
    pub budget: f64,
    pub total_income: f64,
    pub total_expenses: f64,
    pub overall_percentage: Option<u32>,
}

impl Ledger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a new item to the `kind` partition and returns it.
    ///
    /// Ids continue from the partition's last element (or start at 0), so
    /// deleting the tail item makes its id available to the next insertion.
    /// Ids are per-partition; an income and an expense may share one.
    pub fn add_item(
        &mut self,
        kind: ItemKind,
        description: impl Into<String>,
        value: f64,
    ) -> ItemRef<'_> {
        match kind {
            ItemKind::Income => {
                let id = self.incomes.last().map_or(0, |item| item.id + 1);
                self.incomes.push(Income::new(id, description, value));
                ItemRef::Income(self.incomes.last().expect("item just pushed"))
            }
            ItemKind::Expense => {
                let id = self.expenses.last().map_or(0, |item| item.id + 1);
                self.expenses.push(Expense::new(id, description, value));
                ItemRef::Expense(self.expenses.last().expect("item just pushed"))
            }
        }
    }

    /// Removes the item with `id` from the `kind` partition.
    ///
    /// Returns `true` when an item was removed. Unknown ids are a no-op;
    /// remaining items keep their ids and order.
    pub fn delete_item(&mut self, kind: ItemKind, id: u32) -> bool {
        match kind {
            ItemKind::Income => {
                if let Some(index) = self.incomes.iter().position(|item| item.id == id) {
                    self.incomes.remove(index);
                    return true;
                }
                false
            }
            ItemKind::Expense => {
                if let Some(index) = self.expenses.iter().position(|item| item.id == id) {
                    self.expenses.remove(index);
                    return true;
                }
                false
            }
        }
    }

    /// Recomputes the partition totals and every derived budget field.
    ///
    /// Totals are full sums over the partitions, never incremental updates.
    pub fn calculate_budget(&mut self) {
        self.totals.income = self.incomes.iter().map(|item| item.value).sum();
        self.totals.expense = self.expenses.iter().map(|item| item.value).sum();
        self.budget = self.totals.income - self.totals.expense;
        self.overall_percentage = percentage_of(self.totals.expense, self.totals.income);
    }

    /// Updates every expense's share of `total_income`.
    ///
    /// Income is an explicit parameter so the result never depends on stale
    /// derived state.
    pub fn calculate_percentages(&mut self, total_income: f64) {
        for expense in &mut self.expenses {
            expense.calc_percentage(total_income);
        }
    }

    /// Runs `calculate_budget` then `calculate_percentages` in the order the
    /// derived state requires. Orchestrators call this after every mutation.
    pub fn recalculate(&mut self) {
        self.calculate_budget();
        let total_income = self.totals.income;
        self.calculate_percentages(total_income);
    }

    /// Current percentage of every expense, in stored (insertion) order.
    pub fn get_percentages(&self) -> Vec<Option<u32>> {
        self.expenses.iter().map(Expense::percentage).collect()
    }

    /// Pure read of the derived state; never triggers recomputation.
    pub fn get_budget(&self) -> BudgetSnapshot {
        BudgetSnapshot {
            budget: self.budget,
            total_income: self.totals.income,
            total_expenses: self.totals.expense,
            overall_percentage: self.overall_percentage,
        }
    }

    pub fn incomes(&self) -> &[Income] {
        &self.incomes
    }

    pub fn expenses(&self) -> &[Expense] {
        &self.expenses
    }

    pub fn totals(&self) -> Totals {
        self.totals
    }

    pub fn is_empty(&self) -> bool {
        self.incomes.is_empty() && self.expenses.is_empty()
    }
}
