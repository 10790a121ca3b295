//! Business logic helpers for managing ledger items.

use crate::core::services::{ServiceError, ServiceResult};
use crate::ledger::{ItemKind, ItemRef, Ledger};

/// Validated entry points for item mutations.
///
/// The ledger itself stores whatever it is handed; every user-facing path
/// goes through here so malformed input never reaches it.
pub struct ItemService;

impl ItemService {
    /// Validates and appends a new item, returning the stored entry.
    pub fn add<'a>(
        ledger: &'a mut Ledger,
        kind: ItemKind,
        description: &str,
        value: f64,
    ) -> ServiceResult<ItemRef<'a>> {
        let description = description.trim();
        if description.is_empty() {
            return Err(ServiceError::Invalid(
                "description must not be empty".into(),
            ));
        }
        if !value.is_finite() || value <= 0.0 {
            return Err(ServiceError::Invalid(
                "value must be a positive number".into(),
            ));
        }
        Ok(ledger.add_item(kind, description, value))
    }

    /// Removes the item with `id`; `false` means nothing matched.
    pub fn remove(ledger: &mut Ledger, kind: ItemKind, id: u32) -> bool {
        ledger.delete_item(kind, id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_rejects_blank_descriptions() {
        let mut ledger = Ledger::new();
        let err = ItemService::add(&mut ledger, ItemKind::Income, "   ", 10.0)
            .expect_err("blank description must fail");
        assert!(
            matches!(err, ServiceError::Invalid(ref message) if message.contains("description")),
            "unexpected error: {err:?}"
        );
        assert!(ledger.is_empty());
    }

    #[test]
    fn add_rejects_non_positive_and_non_finite_values() {
        let mut ledger = Ledger::new();
        for value in [0.0, -5.0, f64::NAN, f64::INFINITY] {
            let result = ItemService::add(&mut ledger, ItemKind::Expense, "Rent", value);
            assert!(result.is_err(), "value {value} should be rejected");
        }
        assert!(ledger.is_empty());
    }

    #[test]
    fn add_trims_the_description_before_storing() {
        let mut ledger = Ledger::new();
        let item = ItemService::add(&mut ledger, ItemKind::Income, "  Salary  ", 100.0)
            .expect("valid item");
        assert_eq!(item.description(), "Salary");
    }

    #[test]
    fn remove_reports_whether_anything_matched() {
        let mut ledger = Ledger::new();
        ItemService::add(&mut ledger, ItemKind::Expense, "Rent", 40.0).unwrap();
        assert!(ItemService::remove(&mut ledger, ItemKind::Expense, 0));
        assert!(!ItemService::remove(&mut ledger, ItemKind::Expense, 0));
    }
}
