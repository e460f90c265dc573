// Copyright (c) 2025 Centime contributors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::{Context, Result, bail};
use chrono::Local;
use rust_decimal::Decimal;
use std::io::{BufRead, Write};

use crate::catalog::{self, EXPENSE_CATEGORIES};
use crate::models::{BudgetPlan, TxKind};
use crate::planner::Planner;
use crate::stats::{budget_status, current_month_transactions, percentage, total_by_category};
use crate::store::Store;
use crate::utils::{fmt_money, maybe_print_json, parse_amount, pretty_table};

pub fn handle(store: &Store, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("plan", sub)) => plan(store, sub)?,
        Some(("set", sub)) => set(store, sub)?,
        Some(("show", sub)) => show(store, sub)?,
        Some(("report", sub)) => report(store, sub)?,
        _ => {}
    }
    Ok(())
}

fn plan(store: &Store, sub: &clap::ArgMatches) -> Result<()> {
    let profile = store
        .profile()?
        .context("No profile yet. Run 'centime profile set' first")?;
    let charges = store.fixed_charges()?;
    let total_charges: Decimal = charges.iter().map(|c| c.amount).sum();
    let settings = store.settings()?;

    let mut planner = Planner::new(profile.salary, total_charges);
    let plan = if sub.get_flag("auto") {
        Some(auto_plan(&mut planner)?)
    } else {
        run_wizard(&mut planner, &settings.currency)?
    };

    let Some(plan) = plan else {
        println!("Plan abandoned, nothing saved");
        return Ok(());
    };
    let total: Decimal = plan.values().copied().sum();
    store.save_budget_plan(&plan)?;
    println!(
        "Budget plan saved: {} allocated across {} categories",
        fmt_money(&total, &settings.currency),
        plan.len()
    );
    Ok(())
}

/// Accepts every suggestion (0 where there is none) and finalizes.
fn auto_plan(planner: &mut Planner) -> Result<BudgetPlan> {
    loop {
        planner.use_suggestion();
        if planner.is_blocked() {
            bail!("Suggested allocations exceed the available amount; run the wizard manually");
        }
        if let Some(plan) = planner.next() {
            return Ok(plan);
        }
    }
}

fn run_wizard(planner: &mut Planner, currency: &str) -> Result<Option<BudgetPlan>> {
    let stdin = std::io::stdin();
    let mut lines = stdin.lock().lines();
    println!("Budget plan wizard — type an amount, 's' to accept the suggestion,");
    println!("'b' to go back, Enter to continue, 'q' to quit.");
    loop {
        let cat = planner.current();
        println!();
        println!(
            "[{}/{}] {} {} — current: {}",
            planner.step() + 1,
            planner.len(),
            cat.icon,
            cat.name,
            fmt_money(&planner.amount(cat.key), currency)
        );
        println!(
            "  available {} | budgeted {} | remaining {}",
            fmt_money(&planner.available(), currency),
            fmt_money(&planner.total_budgeted(), currency),
            fmt_money(&planner.remaining(), currency)
        );
        if let Some(s) = planner.suggestion() {
            println!(
                "  suggestion: {} ({}% of available)",
                fmt_money(&s, currency),
                percentage(s, planner.available())
            );
        }
        print!("> ");
        std::io::stdout().flush()?;
        let Some(line) = lines.next() else {
            return Ok(None);
        };
        match line?.trim() {
            "q" => return Ok(None),
            "b" => planner.back(),
            "s" => planner.use_suggestion(),
            "" => {
                if planner.is_blocked() {
                    println!("⚠️ Allocations exceed the available amount; reduce something first");
                } else if let Some(plan) = planner.next() {
                    return Ok(Some(plan));
                }
            }
            input => match parse_amount(input) {
                Ok(v) => planner.set_amount(v),
                Err(e) => println!("{e:#}"),
            },
        }
    }
}

fn zeroed_plan() -> BudgetPlan {
    EXPENSE_CATEGORIES
        .iter()
        .map(|c| (c.key.to_string(), Decimal::ZERO))
        .collect()
}

fn set(store: &Store, sub: &clap::ArgMatches) -> Result<()> {
    let category = sub.get_one::<String>("category").unwrap();
    if !catalog::is_valid(category, TxKind::Expense) {
        let valid: Vec<&str> = EXPENSE_CATEGORIES.iter().map(|c| c.key).collect();
        bail!(
            "Unknown expense category '{}'. Valid categories: {}",
            category,
            valid.join(", ")
        );
    }
    let amount = parse_amount(sub.get_one::<String>("amount").unwrap())?;
    let mut plan = store.budget_plan()?.unwrap_or_else(zeroed_plan);
    plan.insert(category.to_string(), amount);
    store.save_budget_plan(&plan)?;
    let settings = store.settings()?;
    println!(
        "Budget set: {} = {}",
        category,
        fmt_money(&amount, &settings.currency)
    );
    Ok(())
}

fn show(store: &Store, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let Some(plan) = store.budget_plan()? else {
        println!("No budget plan yet. Run 'centime budget plan' first");
        return Ok(());
    };
    if !maybe_print_json(json_flag, jsonl_flag, &plan)? {
        let rows: Vec<Vec<String>> = crate::advice::plan_order(&plan)
            .into_iter()
            .map(|key| {
                let info = catalog::category_info(key, TxKind::Expense);
                vec![format!("{} {}", info.icon, info.name), plan[key].to_string()]
            })
            .collect();
        println!("{}", pretty_table(&["Category", "Budget"], rows));
        let total: Decimal = plan.values().copied().sum();
        let settings = store.settings()?;
        println!("Total: {}", fmt_money(&total, &settings.currency));
    }
    Ok(())
}

fn report(store: &Store, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let Some(plan) = store.budget_plan()? else {
        println!("No budget plan yet. Run 'centime budget plan' first");
        return Ok(());
    };
    let today = Local::now().date_naive();
    let month = current_month_transactions(&store.transactions()?, today);
    let expenses: Vec<_> = month
        .iter()
        .filter(|t| t.kind == TxKind::Expense)
        .cloned()
        .collect();

    let mut data = Vec::new();
    for key in crate::advice::plan_order(&plan) {
        let budget = plan[key];
        let spent = total_by_category(&expenses, key);
        let info = catalog::category_info(key, TxKind::Expense);
        data.push(vec![
            format!("{} {}", info.icon, info.name),
            budget.to_string(),
            spent.to_string(),
            format!("{}%", percentage(spent, budget)),
            budget_status(spent, budget).as_str().to_string(),
        ]);
    }
    if !maybe_print_json(json_flag, jsonl_flag, &data)? {
        println!(
            "{}",
            pretty_table(&["Category", "Budget", "Spent", "Used", "Status"], data)
        );
    }
    Ok(())
}
