use std::fmt;

/// Selects which partition of the ledger an operation targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ItemKind {
    Income,
    Expense,
}

impl ItemKind {
    /// Parses a user-entered kind token, case-insensitively.
    pub fn from_token(token: &str) -> Option<Self> {
        match token.to_ascii_lowercase().as_str() {
            "income" | "inc" => Some(ItemKind::Income),
            "expense" | "exp" => Some(ItemKind::Expense),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ItemKind::Income => "income",
            ItemKind::Expense => "expense",
        }
    }
}

impl fmt::Display for ItemKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A user-entered income line item.
#[derive(Debug, Clone, PartialEq)]
pub struct Income {
    pub id: u32,
    pub description: String,
    pub value: f64,
}

impl Income {
    pub fn new(id: u32, description: impl Into<String>, value: f64) -> Self {
        Self {
            id,
            description: description.into(),
            value,
        }
    }
}

/// A user-entered expense line item.
///
/// `percentage` is this expense's share of total income, unset until the
/// first recomputation or whenever total income is zero.
#[derive(Debug, Clone, PartialEq)]
pub struct Expense {
    pub id: u32,
    pub description: String,
    pub value: f64,
    percentage: Option<u32>,
}

impl Expense {
    pub fn new(id: u32, description: impl Into<String>, value: f64) -> Self {
        Self {
            id,
            description: description.into(),
            value,
            percentage: None,
        }
    }

    /// Updates this expense's share of `total_income`.
    pub fn calc_percentage(&mut self, total_income: f64) {
        self.percentage = percentage_of(self.value, total_income);
    }

    pub fn percentage(&self) -> Option<u32> {
        self.percentage
    }
}

/// Rounded share of `part` in `total`, unset when `total` is not positive.
/// The result may exceed 100.
pub(crate) fn percentage_of(part: f64, total: f64) -> Option<u32> {
    if total > 0.0 {
        Some((part / total * 100.0).round() as u32)
    } else {
        None
    }
}

/// Borrowed view over either item variant, handed back on insertion so the
/// caller can render the new item without re-scanning the partition.
#[derive(Debug, Clone, Copy)]
pub enum ItemRef<'a> {
    Income(&'a Income),
    Expense(&'a Expense),
}

impl ItemRef<'_> {
    pub fn kind(&self) -> ItemKind {
        match self {
            ItemRef::Income(_) => ItemKind::Income,
            ItemRef::Expense(_) => ItemKind::Expense,
        }
    }

    pub fn id(&self) -> u32 {
        match self {
            ItemRef::Income(item) => item.id,
            ItemRef::Expense(item) => item.id,
        }
    }

    pub fn description(&self) -> &str {
        match self {
            ItemRef::Income(item) => &item.description,
            ItemRef::Expense(item) => &item.description,
        }
    }

    pub fn value(&self) -> f64 {
        match self {
            ItemRef::Income(item) => item.value,
            ItemRef::Expense(item) => item.value,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_tokens_parse_case_insensitively() {
        assert_eq!(ItemKind::from_token("Income"), Some(ItemKind::Income));
        assert_eq!(ItemKind::from_token("EXP"), Some(ItemKind::Expense));
        assert_eq!(ItemKind::from_token("savings"), None);
    }

    #[test]
    fn expense_percentage_rounds_against_income() {
        let mut expense = Expense::new(0, "Rent", 1.0);
        expense.calc_percentage(3.0);
        assert_eq!(expense.percentage(), Some(33));
        expense.calc_percentage(0.0);
        assert_eq!(expense.percentage(), None);
    }

    #[test]
    fn percentage_can_exceed_one_hundred() {
        assert_eq!(percentage_of(300.0, 200.0), Some(150));
    }
}
