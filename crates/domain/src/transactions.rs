//! Transaction records and the search/class filter projection.
//!
//! The filter is a pure function recomputed on every change. The source list
//! is small and static, so there is no incrementally maintained index.

use uuid::Uuid;

use crate::MoneyCents;

/// A single ledger entry. The sign of `amount` classifies it: positive is
/// income, negative is an expense.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Transaction {
    pub id: Uuid,
    pub title: String,
    pub amount: MoneyCents,
    pub category: String,
    /// Human date label as shown in the list ("Today", "Feb 15", ...).
    pub date_label: String,
    pub icon: &'static str,
}

impl Transaction {
    pub fn new(
        title: &str,
        amount: MoneyCents,
        category: &str,
        date_label: &str,
        icon: &'static str,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            title: title.to_string(),
            amount,
            category: category.to_string(),
            date_label: date_label.to_string(),
            icon,
        }
    }

    #[must_use]
    pub fn is_income(&self) -> bool {
        self.amount.is_positive()
    }

    #[must_use]
    pub fn is_expense(&self) -> bool {
        self.amount.is_negative()
    }
}

/// Three-way class toggle over the transaction list.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ClassFilter {
    #[default]
    All,
    Income,
    Expenses,
}

impl ClassFilter {
    pub fn label(self) -> &'static str {
        match self {
            Self::All => "All",
            Self::Income => "Income",
            Self::Expenses => "Expenses",
        }
    }

    /// Cycles All -> Income -> Expenses -> All.
    #[must_use]
    pub fn next(self) -> Self {
        match self {
            Self::All => Self::Income,
            Self::Income => Self::Expenses,
            Self::Expenses => Self::All,
        }
    }

    fn admits(self, transaction: &Transaction) -> bool {
        match self {
            Self::All => true,
            Self::Income => transaction.is_income(),
            Self::Expenses => transaction.is_expense(),
        }
    }
}

/// The two independent predicates of the transaction screen: free-text
/// search and the class toggle. A transaction must satisfy both.
#[derive(Clone, Debug, Default)]
pub struct TransactionQuery {
    pub search: String,
    pub class: ClassFilter,
}

impl TransactionQuery {
    /// Returns `true` when `transaction` satisfies both predicates.
    ///
    /// Empty or whitespace-only search text matches everything; otherwise
    /// the match is a case-insensitive substring test against the title OR
    /// the category.
    #[must_use]
    pub fn matches(&self, transaction: &Transaction) -> bool {
        let needle = self.search.trim();
        let matches_search = needle.is_empty() || {
            let needle = needle.to_lowercase();
            transaction.title.to_lowercase().contains(&needle)
                || transaction.category.to_lowercase().contains(&needle)
        };

        matches_search && self.class.admits(transaction)
    }
}

/// Produces the ordered subsequence of `transactions` satisfying `query`.
/// Source order is preserved.
#[must_use]
pub fn filter<'a>(
    transactions: &'a [Transaction],
    query: &TransactionQuery,
) -> Vec<&'a Transaction> {
    transactions.iter().filter(|t| query.matches(t)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Vec<Transaction> {
        vec![
            Transaction::new("Grocery Shopping", MoneyCents::new(-8250), "Food", "Today", "c"),
            Transaction::new("Salary Deposit", MoneyCents::new(250_000), "Income", "Yesterday", "$"),
            Transaction::new("Coffee Shop", MoneyCents::new(-450), "Food", "Yesterday", "u"),
        ]
    }

    #[test]
    fn empty_search_matches_everything() {
        let list = sample();
        let query = TransactionQuery::default();
        assert_eq!(filter(&list, &query).len(), list.len());
    }

    #[test]
    fn whitespace_search_matches_everything() {
        let list = sample();
        let query = TransactionQuery {
            search: "   ".to_string(),
            class: ClassFilter::All,
        };
        assert_eq!(filter(&list, &query).len(), list.len());
    }

    #[test]
    fn search_is_case_insensitive_over_title_and_category() {
        let list = sample();
        let by_title = TransactionQuery {
            search: "COFFEE".to_string(),
            class: ClassFilter::All,
        };
        assert_eq!(filter(&list, &by_title).len(), 1);

        let by_category = TransactionQuery {
            search: "food".to_string(),
            class: ClassFilter::All,
        };
        assert_eq!(filter(&list, &by_category).len(), 2);
    }

    #[test]
    fn predicates_are_conjoined() {
        let list = sample();
        let query = TransactionQuery {
            search: "food".to_string(),
            class: ClassFilter::Income,
        };
        assert!(filter(&list, &query).is_empty());
    }

    #[test]
    fn class_filter_partitions_by_sign() {
        let list = sample();
        let income = filter(
            &list,
            &TransactionQuery {
                search: String::new(),
                class: ClassFilter::Income,
            },
        );
        assert!(income.iter().all(|t| t.amount.is_positive()));

        let expenses = filter(
            &list,
            &TransactionQuery {
                search: String::new(),
                class: ClassFilter::Expenses,
            },
        );
        assert!(expenses.iter().all(|t| t.amount.is_negative()));
        assert_eq!(income.len() + expenses.len(), list.len());
    }

    #[test]
    fn filter_preserves_source_order() {
        let list = sample();
        let query = TransactionQuery {
            search: "food".to_string(),
            class: ClassFilter::All,
        };
        let filtered = filter(&list, &query);
        assert_eq!(filtered[0].title, "Grocery Shopping");
        assert_eq!(filtered[1].title, "Coffee Shop");
    }

    #[test]
    fn class_cycle_wraps() {
        assert_eq!(ClassFilter::All.next(), ClassFilter::Income);
        assert_eq!(ClassFilter::Income.next(), ClassFilter::Expenses);
        assert_eq!(ClassFilter::Expenses.next(), ClassFilter::All);
    }
}
