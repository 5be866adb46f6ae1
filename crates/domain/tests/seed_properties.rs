//! Properties of the fixed sample datasets and their derived views.

use std::time::Instant;

use domain::{
    filter, seed, Assistant, ClassFilter, MoneyCents, TransactionQuery, REPLY_DELAY,
    WARN_THRESHOLD,
};

#[test]
fn unmatched_search_yields_empty_list() {
    let ledger = seed::transactions();
    let query = TransactionQuery {
        search: "zzz-not-a-real-merchant".to_string(),
        class: ClassFilter::All,
    };
    assert!(filter(&ledger, &query).is_empty());
}

#[test]
fn class_filters_partition_the_seed_ledger_by_sign() {
    let ledger = seed::transactions();

    let all = filter(&ledger, &TransactionQuery::default());
    assert_eq!(all.len(), ledger.len());

    let income = filter(
        &ledger,
        &TransactionQuery {
            search: String::new(),
            class: ClassFilter::Income,
        },
    );
    assert_eq!(income.len(), 2);
    assert!(income.iter().all(|t| t.amount.is_positive()));

    let expenses = filter(
        &ledger,
        &TransactionQuery {
            search: String::new(),
            class: ClassFilter::Expenses,
        },
    );
    assert_eq!(expenses.len(), 4);
    assert!(expenses.iter().all(|t| t.amount.is_negative()));

    assert_eq!(income.len() + expenses.len(), all.len());
}

#[test]
fn coffee_search_finds_exactly_the_coffee_shop() {
    let ledger = seed::transactions();
    let query = TransactionQuery {
        search: "coffee".to_string(),
        class: ClassFilter::All,
    };
    let found = filter(&ledger, &query);
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].title, "Coffee Shop");
    assert_eq!(found[0].amount, MoneyCents::new(-450));
}

#[test]
fn seed_budgets_total_spent_is_2000() {
    let budgets = seed::budgets();
    let summary = domain::summarize(&budgets);
    assert_eq!(summary.total_spent, MoneyCents::new(2_000_00));
    assert_eq!(summary.total_limit, MoneyCents::new(2_800_00));
}

#[test]
fn seed_budget_ratios_and_warning_flags_agree() {
    for category in seed::budgets() {
        let expected = category.spent.cents() as f64 / category.limit.cents() as f64;
        assert!((category.ratio() - expected).abs() < 1e-12);
        assert_eq!(category.over_threshold(), category.ratio() >= WARN_THRESHOLD);
    }
}

#[test]
fn assistant_round_trip_over_seed_welcome() {
    let mut assistant = Assistant::new(seed::ASSISTANT_WELCOME);
    let t0 = Instant::now();

    assistant.send(seed::ASSISTANT_SUGGESTIONS[0], t0);
    assert_eq!(assistant.messages().len(), 2);

    assert!(assistant.poll(t0 + REPLY_DELAY));
    let reply = assistant.messages().last().unwrap();
    assert!(reply
        .text
        .contains(&seed::ASSISTANT_SUGGESTIONS[0].to_lowercase()));
}
