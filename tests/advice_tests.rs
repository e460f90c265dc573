// Copyright (c) 2025 Centime contributors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use centime::advice::generate;
use centime::models::{BudgetPlan, Severity, Transaction, TxKind};
use chrono::NaiveDate;
use rust_decimal::Decimal;

fn dec(s: &str) -> Decimal {
    s.parse().unwrap()
}

fn plan(entries: &[(&str, &str)]) -> BudgetPlan {
    entries
        .iter()
        .map(|(k, v)| (k.to_string(), dec(v)))
        .collect()
}

fn expense(category: &str, amount: &str) -> Transaction {
    Transaction {
        id: 1,
        description: String::new(),
        amount: dec(amount),
        kind: TxKind::Expense,
        category: category.to_string(),
        subcategory: None,
        date: NaiveDate::from_ymd_opt(2025, 3, 10).unwrap(),
    }
}

#[test]
fn exceeded_budget_emits_single_danger() {
    // Whole plan spent, so no daily-budget advice either
    let p = plan(&[("alimentation", "100")]);
    let txs = vec![expense("alimentation", "100")];
    let advices = generate(&txs, &p, 10, "FCFA");
    assert_eq!(advices.len(), 1);
    assert_eq!(advices[0].severity, Severity::Danger);
    assert!(advices[0].title.contains("Alimentation"));
    assert!(advices[0].message.contains("(100%)"));
}

#[test]
fn danger_then_daily_budget_advice() {
    let p = plan(&[("alimentation", "100"), ("transport", "200")]);
    let txs = vec![expense("alimentation", "100")];
    let advices = generate(&txs, &p, 10, "FCFA");
    assert_eq!(advices.len(), 2);
    assert_eq!(advices[0].severity, Severity::Danger);
    assert_eq!(advices[1].severity, Severity::Info);
    // (300 - 100) / 10 days
    assert!(advices[1].message.contains("20 FCFA"));
}

#[test]
fn warning_needs_more_than_five_days_left() {
    let p = plan(&[("transport", "100")]);
    let txs = vec![expense("transport", "80")];

    let with_time = generate(&txs, &p, 6, "FCFA");
    assert_eq!(with_time[0].severity, Severity::Warning);

    // At 5 days the warning no longer fires; only the daily advice remains
    let late = generate(&txs, &p, 5, "FCFA");
    assert_eq!(late.len(), 1);
    assert_eq!(late[0].severity, Severity::Info);
}

#[test]
fn last_day_of_month_still_fires_success_per_category() {
    // days_left = 0 blocks the daily advice but 0 < 10 satisfies the
    // success branch, so each budgeted category congratulates, no fallback.
    let p = plan(&[("alimentation", "100"), ("transport", "50")]);
    let advices = generate(&[], &p, 0, "FCFA");
    assert_eq!(advices.len(), 2);
    assert!(advices.iter().all(|a| a.severity == Severity::Success));
    assert!(advices.iter().all(|a| a.title.starts_with("Excellent")));
}

#[test]
fn zero_budget_categories_are_skipped() {
    // Spending against an unbudgeted category generates no advice at all,
    // and it drags total spending past the plan, so no daily advice either.
    let p = plan(&[("alimentation", "0"), ("transport", "100")]);
    let txs = vec![expense("alimentation", "500")];
    let advices = generate(&txs, &p, 15, "FCFA");
    assert_eq!(advices.len(), 1);
    assert_eq!(advices[0].severity, Severity::Success);
    assert_eq!(advices[0].title, "Tout va bien !");
}

#[test]
fn empty_plan_with_nothing_to_say_falls_back() {
    let p = plan(&[("alimentation", "0"), ("transport", "0")]);
    let advices = generate(&[], &p, 0, "FCFA");
    assert_eq!(advices.len(), 1);
    assert_eq!(advices[0].severity, Severity::Success);
    assert_eq!(advices[0].title, "Tout va bien !");
}

#[test]
fn categories_are_visited_in_catalog_order() {
    // Alphabetically "sante" sorts before "transport"; catalog order says
    // transport first.
    let p = plan(&[("sante", "100"), ("transport", "100")]);
    let txs = vec![expense("sante", "100"), expense("transport", "100")];
    let advices = generate(&txs, &p, 0, "FCFA");
    assert_eq!(advices.len(), 2);
    assert!(advices[0].title.contains("Transport"));
    assert!(advices[1].title.contains("Santé"));
}

#[test]
fn unknown_plan_keys_use_fallback_display() {
    let p = plan(&[("cryptomonnaie", "100")]);
    let txs = vec![expense("cryptomonnaie", "120")];
    let advices = generate(&txs, &p, 0, "FCFA");
    assert_eq!(advices[0].severity, Severity::Danger);
    assert!(advices[0].title.contains("cryptomonnaie"));
}

#[test]
fn amounts_are_formatted_with_grouping() {
    let p = plan(&[("alimentation", "150000")]);
    let txs = vec![expense("alimentation", "150000")];
    let advices = generate(&txs, &p, 10, "FCFA");
    assert!(advices[0].message.contains("150 000 FCFA"));
}
