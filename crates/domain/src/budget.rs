//! Budget categories, the spent/limit ratio policy, and month navigation.

use chrono::{Datelike, Months, NaiveDate};

use crate::{DomainError, MoneyCents, ResultDomain};

/// A category's ratio at or above this value renders with the warning
/// indicator.
pub const WARN_THRESHOLD: f64 = 0.90;

/// A budget envelope: how much was spent against a monthly limit.
///
/// `limit` is strictly positive; [`BudgetCategory::new`] rejects anything
/// else so [`ratio`](BudgetCategory::ratio) is always defined.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BudgetCategory {
    pub name: String,
    pub spent: MoneyCents,
    pub limit: MoneyCents,
    pub icon: &'static str,
}

impl BudgetCategory {
    pub fn new(
        name: &str,
        spent: MoneyCents,
        limit: MoneyCents,
        icon: &'static str,
    ) -> ResultDomain<Self> {
        if !limit.is_positive() {
            return Err(DomainError::NonPositiveLimit(name.to_string()));
        }
        Ok(Self {
            name: name.to_string(),
            spent,
            limit,
            icon,
        })
    }

    /// Fraction of the limit already spent. May exceed 1.0.
    #[must_use]
    pub fn ratio(&self) -> f64 {
        self.spent.cents() as f64 / self.limit.cents() as f64
    }

    /// Whether this category should render with the warning indicator.
    #[must_use]
    pub fn over_threshold(&self) -> bool {
        self.ratio() >= WARN_THRESHOLD
    }
}

/// Totals across an ordered list of budget categories.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BudgetSummary {
    pub total_spent: MoneyCents,
    pub total_limit: MoneyCents,
}

impl BudgetSummary {
    /// Overall spent/limit ratio; 0.0 when there is no budget at all.
    #[must_use]
    pub fn ratio(&self) -> f64 {
        if self.total_limit.is_zero() {
            return 0.0;
        }
        self.total_spent.cents() as f64 / self.total_limit.cents() as f64
    }
}

/// Sums spent and limit across `categories`.
#[must_use]
pub fn summarize(categories: &[BudgetCategory]) -> BudgetSummary {
    BudgetSummary {
        total_spent: MoneyCents::sum(categories.iter().map(|c| c.spent)),
        total_limit: MoneyCents::sum(categories.iter().map(|c| c.limit)),
    }
}

/// Month selector of the budget screen. Pure date arithmetic; moving the
/// cursor never touches the budget data.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MonthCursor {
    first_of_month: NaiveDate,
}

impl MonthCursor {
    /// Cursor at the month containing `date`.
    #[must_use]
    pub fn at(date: NaiveDate) -> Self {
        // with_day(1) cannot fail for a date that already exists.
        let first_of_month = date.with_day(1).unwrap_or(date);
        Self { first_of_month }
    }

    #[must_use]
    pub fn prev(self) -> Self {
        Self {
            first_of_month: self.first_of_month - Months::new(1),
        }
    }

    #[must_use]
    pub fn next(self) -> Self {
        Self {
            first_of_month: self.first_of_month + Months::new(1),
        }
    }

    /// "February 2025" style label.
    #[must_use]
    pub fn label(self) -> String {
        self.first_of_month.format("%B %Y").to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn category(spent: i64, limit: i64) -> BudgetCategory {
        BudgetCategory::new("Food & Dining", MoneyCents::new(spent), MoneyCents::new(limit), "f")
            .unwrap()
    }

    #[test]
    fn ratio_is_spent_over_limit() {
        let c = category(45_000, 60_000);
        assert!((c.ratio() - 0.75).abs() < f64::EPSILON);
    }

    #[test]
    fn warning_flag_set_iff_ratio_at_threshold() {
        assert!(!category(35_000, 40_000).over_threshold()); // 0.875
        assert!(category(36_000, 40_000).over_threshold()); // exactly 0.90
        assert!(category(41_000, 40_000).over_threshold()); // over limit
    }

    #[test]
    fn zero_or_negative_limit_is_rejected() {
        let zero = BudgetCategory::new("Misc", MoneyCents::new(100), MoneyCents::ZERO, "m");
        assert_eq!(zero, Err(DomainError::NonPositiveLimit("Misc".to_string())));

        let negative =
            BudgetCategory::new("Misc", MoneyCents::new(100), MoneyCents::new(-10), "m");
        assert!(negative.is_err());
    }

    #[test]
    fn summary_sums_both_columns() {
        let categories = vec![category(45_000, 60_000), category(18_000, 30_000)];
        let summary = summarize(&categories);
        assert_eq!(summary.total_spent, MoneyCents::new(63_000));
        assert_eq!(summary.total_limit, MoneyCents::new(90_000));
        assert!((summary.ratio() - 0.7).abs() < 1e-9);
    }

    #[test]
    fn empty_summary_has_zero_ratio() {
        let summary = summarize(&[]);
        assert_eq!(summary.total_spent, MoneyCents::ZERO);
        assert_eq!(summary.ratio(), 0.0);
    }

    #[test]
    fn month_cursor_navigates_both_directions() {
        let feb = MonthCursor::at(NaiveDate::from_ymd_opt(2025, 2, 8).unwrap());
        assert_eq!(feb.label(), "February 2025");
        assert_eq!(feb.prev().label(), "January 2025");
        assert_eq!(feb.next().label(), "March 2025");
        assert_eq!(feb.prev().next(), feb);
    }

    #[test]
    fn month_cursor_crosses_year_boundaries() {
        let jan = MonthCursor::at(NaiveDate::from_ymd_opt(2025, 1, 15).unwrap());
        assert_eq!(jan.prev().label(), "December 2024");
        let dec = MonthCursor::at(NaiveDate::from_ymd_opt(2024, 12, 31).unwrap());
        assert_eq!(dec.next().label(), "January 2025");
    }
}
