// Copyright (c) 2025 Centime contributors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Aggregation engine: pure, stateless functions over transaction lists.
//! Every division is guarded; out-of-range inputs yield zero rather than
//! an error.

use chrono::{Datelike, NaiveDate};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};

use crate::models::{Transaction, TxKind};

pub fn total_by_type(transactions: &[Transaction], kind: TxKind) -> Decimal {
    transactions
        .iter()
        .filter(|t| t.kind == kind)
        .map(|t| t.amount)
        .sum()
}

pub fn total_by_category(transactions: &[Transaction], category: &str) -> Decimal {
    transactions
        .iter()
        .filter(|t| t.category == category)
        .map(|t| t.amount)
        .sum()
}

/// Groups transactions by category key. Keys appear in first-seen order and
/// each group preserves the input order, so the groups are an exact
/// partition of the input.
pub fn group_by_category(transactions: &[Transaction]) -> Vec<(String, Vec<Transaction>)> {
    let mut groups: Vec<(String, Vec<Transaction>)> = Vec::new();
    for t in transactions {
        match groups.iter_mut().find(|(key, _)| *key == t.category) {
            Some((_, members)) => members.push(t.clone()),
            None => groups.push((t.category.clone(), vec![t.clone()])),
        }
    }
    groups
}

/// Inclusive on both ends.
pub fn filter_by_date_range(
    transactions: &[Transaction],
    start: NaiveDate,
    end: NaiveDate,
) -> Vec<Transaction> {
    transactions
        .iter()
        .filter(|t| t.date >= start && t.date <= end)
        .cloned()
        .collect()
}

/// Transactions falling in the month of `today`. The current instant is
/// caller-supplied so month boundaries are testable.
pub fn current_month_transactions(transactions: &[Transaction], today: NaiveDate) -> Vec<Transaction> {
    transactions
        .iter()
        .filter(|t| t.date.year() == today.year() && t.date.month() == today.month())
        .cloned()
        .collect()
}

/// Integer percentage, rounded half away from zero. Zero total yields zero
/// rather than an error.
pub fn percentage(part: Decimal, total: Decimal) -> i64 {
    if total.is_zero() {
        return 0;
    }
    round_to_i64(part / total * Decimal::ONE_HUNDRED)
}

pub fn days_in_month(today: NaiveDate) -> i64 {
    i64::from(days_in(today.year(), today.month()))
}

pub fn days_remaining_in_month(today: NaiveDate) -> i64 {
    i64::from(days_in(today.year(), today.month())) - i64::from(today.day())
}

/// What can still be spent per day. Zero once the month is over.
pub fn daily_budget(remaining: Decimal, days_left: i64) -> Decimal {
    if days_left > 0 {
        remaining / Decimal::from(days_left)
    } else {
        Decimal::ZERO
    }
}

pub fn savings_rate(income: Decimal, expenses: Decimal) -> i64 {
    if income.is_zero() {
        return 0;
    }
    round_to_i64((income - expenses) / income * Decimal::ONE_HUNDRED)
}

/// Spending level relative to a budget, used for report coloring.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BudgetStatus {
    None,
    Good,
    Warning,
    Exceeded,
}

impl BudgetStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            BudgetStatus::None => "-",
            BudgetStatus::Good => "ok",
            BudgetStatus::Warning => "warning",
            BudgetStatus::Exceeded => "exceeded",
        }
    }
}

pub fn budget_status(spent: Decimal, budget: Decimal) -> BudgetStatus {
    if budget.is_zero() {
        return BudgetStatus::None;
    }
    let pct = percentage(spent, budget);
    if pct >= 100 {
        BudgetStatus::Exceeded
    } else if pct >= 80 {
        BudgetStatus::Warning
    } else {
        BudgetStatus::Good
    }
}

fn round_to_i64(value: Decimal) -> i64 {
    value
        .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
        .to_i64()
        .unwrap_or(0)
}

fn days_in(year: i32, month: u32) -> u32 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        _ => {
            if NaiveDate::from_ymd_opt(year, 2, 29).is_some() {
                29
            } else {
                28
            }
        }
    }
}
