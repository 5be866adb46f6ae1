//! Account overview figures: balance card and spending analysis rows.

use crate::MoneyCents;

/// The headline figures of the overview screen.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AccountOverview {
    pub balance: MoneyCents,
    pub monthly_income: MoneyCents,
    pub monthly_spending: MoneyCents,
}

/// One row of the spending analysis: category, amount, and its share of
/// the analysed spending (0.0..=1.0, precomputed in the dataset).
#[derive(Clone, Debug, PartialEq)]
pub struct SpendingSlice {
    pub category: String,
    pub amount: MoneyCents,
    pub share: f64,
}

impl SpendingSlice {
    pub fn new(category: &str, amount: MoneyCents, share: f64) -> Self {
        Self {
            category: category.to_string(),
            amount,
            share,
        }
    }
}

/// Time-frame selector above the analysis rows. Display-only: the sample
/// dataset does not change with the selection.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TimeFrame {
    Week,
    #[default]
    Month,
    Year,
}

impl TimeFrame {
    pub const ALL: [TimeFrame; 3] = [TimeFrame::Week, TimeFrame::Month, TimeFrame::Year];

    pub fn label(self) -> &'static str {
        match self {
            Self::Week => "This Week",
            Self::Month => "This Month",
            Self::Year => "This Year",
        }
    }

    #[must_use]
    pub fn next(self) -> Self {
        match self {
            Self::Week => Self::Month,
            Self::Month => Self::Year,
            Self::Year => Self::Week,
        }
    }
}
