use crate::ledger::{BudgetSnapshot, Ledger};

/// Read-side helpers over the ledger's derived state.
pub struct SummaryService;

impl SummaryService {
    /// Recomputes the derived state in the contract order: totals first, then
    /// per-expense percentages against the fresh income total.
    pub fn refresh(ledger: &mut Ledger) {
        ledger.recalculate();
    }

    pub fn snapshot(ledger: &Ledger) -> BudgetSnapshot {
        ledger.get_budget()
    }

    pub fn percentages(ledger: &Ledger) -> Vec<Option<u32>> {
        ledger.get_percentages()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ledger::ItemKind;

    #[test]
    fn refresh_updates_snapshot_and_percentages_together() {
        let mut ledger = Ledger::new();
        ledger.add_item(ItemKind::Income, "Salary", 200.0);
        ledger.add_item(ItemKind::Expense, "Rent", 50.0);
        ledger.add_item(ItemKind::Expense, "Food", 30.0);

        SummaryService::refresh(&mut ledger);

        let snapshot = SummaryService::snapshot(&ledger);
        assert_eq!(snapshot.budget, 120.0);
        assert_eq!(snapshot.overall_percentage, Some(40));
        assert_eq!(
            SummaryService::percentages(&ledger),
            vec![Some(25), Some(15)]
        );
    }

    #[test]
    fn snapshot_reads_do_not_recompute() {
        let mut ledger = Ledger::new();
        ledger.add_item(ItemKind::Income, "Salary", 100.0);
        // no refresh yet: derived state still at its zeroed defaults
        let snapshot = SummaryService::snapshot(&ledger);
        assert_eq!(snapshot.total_income, 0.0);
        assert_eq!(snapshot.overall_percentage, None);
    }
}
