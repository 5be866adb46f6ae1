//! Entry-form drafts and their validation.
//!
//! Validation gates the submit action; an invalid draft simply cannot be
//! saved. Saving itself is a no-op on the seed lists — the sample app never
//! appends, and this layer mirrors that.

use chrono::NaiveDate;

use crate::{DomainError, MoneyCents, ResultDomain};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TransactionKind {
    #[default]
    Expense,
    Income,
}

impl TransactionKind {
    pub fn label(self) -> &'static str {
        match self {
            Self::Expense => "Expense",
            Self::Income => "Income",
        }
    }

    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Expense => Self::Income,
            Self::Income => Self::Expense,
        }
    }
}

/// Draft of the add-transaction form.
#[derive(Clone, Debug)]
pub struct TransactionDraft {
    pub title: String,
    pub amount: String,
    pub category: String,
    pub kind: TransactionKind,
    pub date: NaiveDate,
}

impl TransactionDraft {
    #[must_use]
    pub fn new(today: NaiveDate) -> Self {
        Self {
            title: String::new(),
            amount: String::new(),
            category: default_category().to_string(),
            kind: TransactionKind::default(),
            date: today,
        }
    }

    /// A draft is submittable when its required fields are non-empty and
    /// the amount parses. The signed amount is returned for display; the
    /// save itself never mutates the seed list.
    pub fn validate(&self) -> ResultDomain<MoneyCents> {
        if self.title.trim().is_empty() {
            return Err(DomainError::EmptyField("Title"));
        }
        if self.amount.trim().is_empty() {
            return Err(DomainError::EmptyField("Amount"));
        }
        let amount: MoneyCents = self.amount.parse()?;
        let amount = match self.kind {
            TransactionKind::Expense => -amount.abs(),
            TransactionKind::Income => amount.abs(),
        };
        Ok(amount)
    }

    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.validate().is_ok()
    }
}

/// Draft of the add-budget form.
#[derive(Clone, Debug, Default)]
pub struct BudgetDraft {
    pub name: String,
    pub amount: String,
}

impl BudgetDraft {
    /// Non-emptiness plus a positive parsed limit.
    pub fn validate(&self) -> ResultDomain<MoneyCents> {
        if self.name.trim().is_empty() {
            return Err(DomainError::EmptyField("Category Name"));
        }
        if self.amount.trim().is_empty() {
            return Err(DomainError::EmptyField("Budget Amount"));
        }
        let limit: MoneyCents = self.amount.parse()?;
        if !limit.is_positive() {
            return Err(DomainError::NonPositiveLimit(self.name.trim().to_string()));
        }
        Ok(limit)
    }

    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.validate().is_ok()
    }
}

/// Category options of the add-transaction picker.
pub const CATEGORIES: [&str; 7] = [
    "Food",
    "Transportation",
    "Entertainment",
    "Shopping",
    "Bills",
    "Income",
    "Other",
];

fn default_category() -> &'static str {
    CATEGORIES[0]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 2, 8).unwrap()
    }

    #[test]
    fn empty_title_blocks_submit() {
        let mut draft = TransactionDraft::new(today());
        draft.amount = "12.50".to_string();
        assert_eq!(draft.validate(), Err(DomainError::EmptyField("Title")));
        assert!(!draft.is_valid());
    }

    #[test]
    fn empty_amount_blocks_submit() {
        let mut draft = TransactionDraft::new(today());
        draft.title = "Coffee".to_string();
        assert_eq!(draft.validate(), Err(DomainError::EmptyField("Amount")));
    }

    #[test]
    fn kind_signs_the_amount() {
        let mut draft = TransactionDraft::new(today());
        draft.title = "Coffee".to_string();
        draft.amount = "4.50".to_string();
        assert_eq!(draft.validate(), Ok(MoneyCents::new(-450)));

        draft.kind = TransactionKind::Income;
        assert_eq!(draft.validate(), Ok(MoneyCents::new(450)));
    }

    #[test]
    fn budget_draft_requires_positive_limit() {
        let draft = BudgetDraft {
            name: "Travel".to_string(),
            amount: "0".to_string(),
        };
        assert_eq!(
            draft.validate(),
            Err(DomainError::NonPositiveLimit("Travel".to_string()))
        );

        let draft = BudgetDraft {
            name: "Travel".to_string(),
            amount: "250".to_string(),
        };
        assert_eq!(draft.validate(), Ok(MoneyCents::new(25_000)));
    }

    #[test]
    fn budget_draft_requires_both_fields() {
        let draft = BudgetDraft::default();
        assert_eq!(
            draft.validate(),
            Err(DomainError::EmptyField("Category Name"))
        );
    }
}
