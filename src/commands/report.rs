// Copyright (c) 2025 Centime contributors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::{Context, Result};
use chrono::Local;
use rust_decimal::Decimal;
use serde::Serialize;

use crate::catalog;
use crate::models::TxKind;
use crate::stats::{
    current_month_transactions, daily_budget, days_remaining_in_month, group_by_category,
    percentage, savings_rate, total_by_type,
};
use crate::store::Store;
use crate::utils::{fmt_money, maybe_print_json, pretty_table};

pub fn handle(store: &Store, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("summary", sub)) => summary(store, sub)?,
        Some(("categories", sub)) => categories(store, sub)?,
        _ => {}
    }
    Ok(())
}

#[derive(Serialize)]
struct Summary {
    month: String,
    income: Decimal,
    expenses: Decimal,
    balance: Decimal,
    fixed_charges: Decimal,
    monthly_budget: Decimal,
    budget_used_pct: i64,
    savings_rate_pct: i64,
    days_left: i64,
    daily_budget: Decimal,
}

fn summary(store: &Store, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let profile = store
        .profile()?
        .context("No profile yet. Run 'centime profile set' first")?;
    let today = Local::now().date_naive();
    let month = current_month_transactions(&store.transactions()?, today);

    let income = total_by_type(&month, TxKind::Income);
    let expenses = total_by_type(&month, TxKind::Expense);
    let balance = income - expenses;
    let fixed: Decimal = store.fixed_charges()?.iter().map(|c| c.amount).sum();
    let monthly_budget = profile.salary - fixed;
    let days_left = days_remaining_in_month(today);

    let s = Summary {
        month: today.format("%Y-%m").to_string(),
        income,
        expenses,
        balance,
        fixed_charges: fixed,
        monthly_budget,
        budget_used_pct: percentage(expenses, monthly_budget),
        savings_rate_pct: savings_rate(income, expenses),
        days_left,
        daily_budget: daily_budget(balance, days_left),
    };

    if !maybe_print_json(json_flag, jsonl_flag, &s)? {
        let ccy = store.settings()?.currency;
        let rows = vec![
            vec!["Month".into(), s.month.clone()],
            vec!["Income".into(), fmt_money(&s.income, &ccy)],
            vec!["Expenses".into(), fmt_money(&s.expenses, &ccy)],
            vec!["Balance".into(), fmt_money(&s.balance, &ccy)],
            vec!["Fixed charges".into(), fmt_money(&s.fixed_charges, &ccy)],
            vec!["Monthly budget".into(), fmt_money(&s.monthly_budget, &ccy)],
            vec!["Budget used".into(), format!("{}%", s.budget_used_pct)],
            vec!["Savings rate".into(), format!("{}%", s.savings_rate_pct)],
            vec!["Days left".into(), s.days_left.to_string()],
            vec!["Daily budget".into(), fmt_money(&s.daily_budget, &ccy)],
        ];
        println!("{}", pretty_table(&["Metric", "Value"], rows));
    }
    Ok(())
}

#[derive(Serialize)]
struct CategoryRow {
    category: String,
    name: String,
    count: usize,
    total: Decimal,
    share_pct: i64,
    budget: Decimal,
    budget_pct: i64,
}

fn categories(store: &Store, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let today = Local::now().date_naive();
    let month = current_month_transactions(&store.transactions()?, today);
    let expenses: Vec<_> = month
        .iter()
        .filter(|t| t.kind == TxKind::Expense)
        .cloned()
        .collect();
    let total_expenses: Decimal = expenses.iter().map(|t| t.amount).sum();
    let plan = store.budget_plan()?.unwrap_or_default();

    let mut rows: Vec<CategoryRow> = group_by_category(&expenses)
        .into_iter()
        .map(|(category, txs)| {
            let total: Decimal = txs.iter().map(|t| t.amount).sum();
            let budget = plan.get(&category).copied().unwrap_or(Decimal::ZERO);
            let info = catalog::category_info(&category, TxKind::Expense);
            CategoryRow {
                name: format!("{} {}", info.icon, info.name),
                count: txs.len(),
                share_pct: percentage(total, total_expenses),
                budget_pct: if budget > Decimal::ZERO {
                    percentage(total, budget)
                } else {
                    0
                },
                category,
                total,
                budget,
            }
        })
        .collect();
    rows.sort_by(|a, b| b.total.cmp(&a.total));

    if !maybe_print_json(json_flag, jsonl_flag, &rows)? {
        if rows.is_empty() {
            println!("No expenses recorded this month");
            return Ok(());
        }
        let data: Vec<Vec<String>> = rows
            .iter()
            .map(|r| {
                vec![
                    r.name.clone(),
                    r.count.to_string(),
                    r.total.to_string(),
                    format!("{}%", r.share_pct),
                    r.budget.to_string(),
                    format!("{}%", r.budget_pct),
                ]
            })
            .collect();
        println!(
            "{}",
            pretty_table(
                &["Category", "Count", "Spent", "Share", "Budget", "Budget used"],
                data,
            )
        );
    }
    Ok(())
}
