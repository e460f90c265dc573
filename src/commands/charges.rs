// Copyright (c) 2025 Centime contributors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::{Result, bail};
use rust_decimal::Decimal;

use crate::catalog::{self, FIXED_CHARGE_TYPES};
use crate::models::{FixedCharge, next_id};
use crate::store::Store;
use crate::utils::{fmt_money, maybe_print_json, parse_amount, parse_day, pretty_table};

pub fn handle(store: &Store, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("add", sub)) => add(store, sub)?,
        Some(("list", sub)) => list(store, sub)?,
        Some(("update", sub)) => update(store, sub)?,
        Some(("rm", sub)) => rm(store, sub)?,
        _ => {}
    }
    Ok(())
}

fn checked_type(key: &str) -> Result<String> {
    if catalog::charge_type(key).is_none() {
        let valid: Vec<&str> = FIXED_CHARGE_TYPES.iter().map(|t| t.key).collect();
        bail!(
            "Unknown charge type '{}'. Valid types: {}",
            key,
            valid.join(", ")
        );
    }
    Ok(key.to_string())
}

fn add(store: &Store, sub: &clap::ArgMatches) -> Result<()> {
    let kind = checked_type(sub.get_one::<String>("type").unwrap())?;
    let name = sub.get_one::<String>("name").unwrap().to_string();
    let amount = parse_amount(sub.get_one::<String>("amount").unwrap())?;
    let due_date = parse_day(sub.get_one::<String>("due-date").unwrap())?;

    let mut charges = store.fixed_charges()?;
    let id = next_id(&charges, |c| c.id);
    charges.push(FixedCharge {
        id,
        kind,
        name: name.clone(),
        amount,
        due_date,
    });
    store.save_fixed_charges(&charges)?;

    let settings = store.settings()?;
    println!(
        "Added fixed charge '{}' of {} due on day {} (id: {})",
        name,
        fmt_money(&amount, &settings.currency),
        due_date,
        id
    );
    Ok(())
}

fn list(store: &Store, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let charges = store.fixed_charges()?;
    if !maybe_print_json(json_flag, jsonl_flag, &charges)? {
        let rows: Vec<Vec<String>> = charges
            .iter()
            .map(|c| {
                let label = match catalog::charge_type(&c.kind) {
                    Some(t) => format!("{} {}", t.icon, t.label),
                    None => c.kind.clone(),
                };
                vec![
                    c.id.to_string(),
                    label,
                    c.name.clone(),
                    c.amount.to_string(),
                    c.due_date.to_string(),
                ]
            })
            .collect();
        println!(
            "{}",
            pretty_table(&["Id", "Type", "Name", "Amount", "Due day"], rows)
        );
        let total: Decimal = charges.iter().map(|c| c.amount).sum();
        let settings = store.settings()?;
        println!("Total: {}", fmt_money(&total, &settings.currency));
    }
    Ok(())
}

fn update(store: &Store, sub: &clap::ArgMatches) -> Result<()> {
    let id = *sub.get_one::<i64>("id").unwrap();
    let mut charges = store.fixed_charges()?;
    let Some(charge) = charges.iter_mut().find(|c| c.id == id) else {
        bail!("Fixed charge {} not found", id);
    };
    if let Some(kind) = sub.get_one::<String>("type") {
        charge.kind = checked_type(kind)?;
    }
    if let Some(name) = sub.get_one::<String>("name") {
        charge.name = name.to_string();
    }
    if let Some(amount) = sub.get_one::<String>("amount") {
        charge.amount = parse_amount(amount)?;
    }
    if let Some(day) = sub.get_one::<String>("due-date") {
        charge.due_date = parse_day(day)?;
    }
    store.save_fixed_charges(&charges)?;
    println!("Updated fixed charge {}", id);
    Ok(())
}

fn rm(store: &Store, sub: &clap::ArgMatches) -> Result<()> {
    let id = *sub.get_one::<i64>("id").unwrap();
    let mut charges = store.fixed_charges()?;
    let before = charges.len();
    charges.retain(|c| c.id != id);
    if charges.len() == before {
        bail!("Fixed charge {} not found", id);
    }
    store.save_fixed_charges(&charges)?;
    println!("Removed fixed charge {}", id);
    Ok(())
}
