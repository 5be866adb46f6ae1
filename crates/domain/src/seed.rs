//! Fixed sample datasets standing in for a real backend.
//!
//! Every screen owns its own copy; nothing here is shared across modules.

use crate::{
    AccountOverview, BudgetCategory, MoneyCents, SpendingSlice, Transaction,
};

/// The sample ledger of the transactions screen.
#[must_use]
pub fn transactions() -> Vec<Transaction> {
    vec![
        Transaction::new("Grocery Shopping", MoneyCents::new(-82_50), "Food", "Today", "🛒"),
        Transaction::new("Salary Deposit", MoneyCents::new(2_500_00), "Income", "Yesterday", "$"),
        Transaction::new("Coffee Shop", MoneyCents::new(-4_50), "Food", "Yesterday", "☕"),
        Transaction::new("Gas Station", MoneyCents::new(-45_00), "Transportation", "Feb 15", "⛽"),
        Transaction::new("Netflix", MoneyCents::new(-15_99), "Entertainment", "Feb 14", "▶"),
        Transaction::new("Freelance Work", MoneyCents::new(350_00), "Income", "Feb 13", "💼"),
    ]
}

/// The sample budget envelopes. Spent sums to $2000.00, limits to $2800.00.
#[must_use]
pub fn budgets() -> Vec<BudgetCategory> {
    // Struct literals on purpose: the values are vetted (every limit is
    // positive), and seed data must not be able to fail.
    let rows: [(&str, i64, i64, &'static str); 6] = [
        ("Food & Dining", 450_00, 600_00, "🍴"),
        ("Transportation", 180_00, 300_00, "🚗"),
        ("Entertainment", 120_00, 200_00, "📺"),
        ("Shopping", 350_00, 400_00, "🛍"),
        ("Bills", 800_00, 1_000_00, "📄"),
        ("Healthcare", 100_00, 300_00, "♥"),
    ];
    rows.into_iter()
        .map(|(name, spent, limit, icon)| BudgetCategory {
            name: name.to_string(),
            spent: MoneyCents::new(spent),
            limit: MoneyCents::new(limit),
            icon,
        })
        .collect()
}

/// Headline figures of the overview screen.
#[must_use]
pub fn overview() -> AccountOverview {
    AccountOverview {
        balance: MoneyCents::new(5_842_50),
        monthly_income: MoneyCents::new(3_240_00),
        monthly_spending: MoneyCents::new(1_234_56),
    }
}

/// Spending-analysis rows with their precomputed shares.
#[must_use]
pub fn spending_slices() -> Vec<SpendingSlice> {
    vec![
        SpendingSlice::new("Food & Dining", MoneyCents::new(485_50), 0.35),
        SpendingSlice::new("Transportation", MoneyCents::new(250_00), 0.20),
        SpendingSlice::new("Shopping", MoneyCents::new(325_75), 0.25),
        SpendingSlice::new("Bills", MoneyCents::new(173_31), 0.20),
    ]
}

/// Opening message of the assistant log.
pub const ASSISTANT_WELCOME: &str = "Hi! I'm your AI financial assistant. \
    I can help you with budgeting, spending analysis, and financial advice. \
    What would you like to know?";

/// Suggestion chips below the assistant log; sent verbatim when picked.
pub const ASSISTANT_SUGGESTIONS: [&str; 4] = [
    "💰 Budget Analysis",
    "📊 Spending Trends",
    "💡 Saving Tips",
    "🎯 Financial Goals",
];
