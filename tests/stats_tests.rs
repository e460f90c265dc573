// Copyright (c) 2025 Centime contributors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use centime::models::{Transaction, TxKind};
use centime::stats::{
    BudgetStatus, budget_status, current_month_transactions, daily_budget, days_in_month,
    days_remaining_in_month, filter_by_date_range, group_by_category, percentage, savings_rate,
    total_by_type,
};
use chrono::NaiveDate;
use rust_decimal::Decimal;

fn d(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
}

fn dec(s: &str) -> Decimal {
    s.parse().unwrap()
}

fn tx(id: i64, amount: &str, kind: TxKind, category: &str, date: &str) -> Transaction {
    Transaction {
        id,
        description: String::new(),
        amount: dec(amount),
        kind,
        category: category.to_string(),
        subcategory: None,
        date: d(date),
    }
}

#[test]
fn percentage_zero_total_is_zero() {
    assert_eq!(percentage(dec("42"), Decimal::ZERO), 0);
    assert_eq!(percentage(Decimal::ZERO, Decimal::ZERO), 0);
}

#[test]
fn percentage_zero_part_is_zero() {
    assert_eq!(percentage(Decimal::ZERO, dec("250")), 0);
}

#[test]
fn percentage_full_is_hundred() {
    assert_eq!(percentage(dec("250"), dec("250")), 100);
}

#[test]
fn percentage_rounds_to_nearest() {
    assert_eq!(percentage(dec("1"), dec("3")), 33);
    assert_eq!(percentage(dec("2"), dec("3")), 67);
    assert_eq!(percentage(dec("50"), dec("200")), 25);
}

#[test]
fn total_by_type_empty_is_zero() {
    assert_eq!(total_by_type(&[], TxKind::Income), Decimal::ZERO);
    assert_eq!(total_by_type(&[], TxKind::Expense), Decimal::ZERO);
}

#[test]
fn total_by_type_ignores_other_kind_and_order() {
    let mut txs = vec![
        tx(1, "10", TxKind::Expense, "alimentation", "2025-03-01"),
        tx(2, "5.50", TxKind::Expense, "transport", "2025-03-02"),
        tx(3, "1000", TxKind::Income, "salaire", "2025-03-03"),
    ];
    let total = total_by_type(&txs, TxKind::Expense);
    assert_eq!(total, dec("15.50"));
    txs.reverse();
    assert_eq!(total_by_type(&txs, TxKind::Expense), total);
}

#[test]
fn group_by_category_partitions_input() {
    let txs = vec![
        tx(1, "10", TxKind::Expense, "alimentation", "2025-03-01"),
        tx(2, "20", TxKind::Expense, "transport", "2025-03-02"),
        tx(3, "30", TxKind::Expense, "alimentation", "2025-03-03"),
    ];
    let groups = group_by_category(&txs);
    assert_eq!(groups.len(), 2);
    // First-seen key order
    assert_eq!(groups[0].0, "alimentation");
    assert_eq!(groups[1].0, "transport");
    // Input order within groups
    let ids: Vec<i64> = groups[0].1.iter().map(|t| t.id).collect();
    assert_eq!(ids, vec![1, 3]);
    // Every transaction lands in exactly one group
    let total: usize = groups.iter().map(|(_, g)| g.len()).sum();
    assert_eq!(total, txs.len());
}

#[test]
fn filter_by_date_range_is_inclusive() {
    let txs = vec![
        tx(1, "1", TxKind::Expense, "autre", "2025-03-01"),
        tx(2, "1", TxKind::Expense, "autre", "2025-03-15"),
        tx(3, "1", TxKind::Expense, "autre", "2025-03-31"),
        tx(4, "1", TxKind::Expense, "autre", "2025-04-01"),
    ];
    let kept = filter_by_date_range(&txs, d("2025-03-01"), d("2025-03-31"));
    let ids: Vec<i64> = kept.iter().map(|t| t.id).collect();
    assert_eq!(ids, vec![1, 2, 3]);
}

#[test]
fn current_month_uses_injected_today() {
    let txs = vec![
        tx(1, "1", TxKind::Expense, "autre", "2025-02-28"),
        tx(2, "1", TxKind::Expense, "autre", "2025-03-01"),
        tx(3, "1", TxKind::Expense, "autre", "2025-03-31"),
        tx(4, "1", TxKind::Expense, "autre", "2024-03-15"),
    ];
    let kept = current_month_transactions(&txs, d("2025-03-10"));
    let ids: Vec<i64> = kept.iter().map(|t| t.id).collect();
    assert_eq!(ids, vec![2, 3]);
}

#[test]
fn days_remaining_counts_to_month_end() {
    assert_eq!(days_remaining_in_month(d("2025-08-29")), 2);
    assert_eq!(days_remaining_in_month(d("2025-08-31")), 0);
    assert_eq!(days_remaining_in_month(d("2025-02-28")), 0);
    assert_eq!(days_remaining_in_month(d("2024-02-28")), 1); // leap year
}

#[test]
fn days_in_month_handles_leap_years() {
    assert_eq!(days_in_month(d("2024-02-01")), 29);
    assert_eq!(days_in_month(d("2025-02-01")), 28);
    assert_eq!(days_in_month(d("2025-04-01")), 30);
    assert_eq!(days_in_month(d("2025-12-01")), 31);
}

#[test]
fn daily_budget_divides_remaining() {
    assert_eq!(daily_budget(dec("300"), 3), dec("100"));
    assert_eq!(daily_budget(dec("300"), 0), Decimal::ZERO);
    assert_eq!(daily_budget(dec("300"), -1), Decimal::ZERO);
}

#[test]
fn savings_rate_guards_zero_income() {
    assert_eq!(savings_rate(Decimal::ZERO, dec("500")), 0);
    assert_eq!(savings_rate(dec("1000"), dec("250")), 75);
    assert_eq!(savings_rate(dec("1000"), dec("1000")), 0);
}

#[test]
fn budget_status_thresholds() {
    assert_eq!(budget_status(dec("50"), Decimal::ZERO), BudgetStatus::None);
    assert_eq!(budget_status(dec("79"), dec("100")), BudgetStatus::Good);
    assert_eq!(budget_status(dec("80"), dec("100")), BudgetStatus::Warning);
    assert_eq!(budget_status(dec("100"), dec("100")), BudgetStatus::Exceeded);
    assert_eq!(budget_status(dec("150"), dec("100")), BudgetStatus::Exceeded);
}
