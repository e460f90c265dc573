// Copyright (c) 2025 Centime contributors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::{Result, bail};

use crate::models::{SavingsGoal, next_id};
use crate::stats::percentage;
use crate::store::Store;
use crate::utils::{fmt_money, maybe_print_json, parse_amount, pretty_table};

pub fn handle(store: &Store, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("add", sub)) => add(store, sub)?,
        Some(("list", sub)) => list(store, sub)?,
        Some(("fund", sub)) => fund(store, sub)?,
        Some(("rm", sub)) => rm(store, sub)?,
        _ => {}
    }
    Ok(())
}

fn add(store: &Store, sub: &clap::ArgMatches) -> Result<()> {
    let name = sub.get_one::<String>("name").unwrap().to_string();
    let target = parse_amount(sub.get_one::<String>("target").unwrap())?;
    let saved = parse_amount(sub.get_one::<String>("saved").unwrap())?;

    let mut goals = store.savings_goals()?;
    let id = next_id(&goals, |g| g.id);
    goals.push(SavingsGoal {
        id,
        name: name.clone(),
        target,
        saved,
    });
    store.save_savings_goals(&goals)?;
    let settings = store.settings()?;
    println!(
        "Added goal '{}' targeting {} (id: {})",
        name,
        fmt_money(&target, &settings.currency),
        id
    );
    Ok(())
}

fn list(store: &Store, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let goals = store.savings_goals()?;
    if !maybe_print_json(json_flag, jsonl_flag, &goals)? {
        let rows: Vec<Vec<String>> = goals
            .iter()
            .map(|g| {
                vec![
                    g.id.to_string(),
                    g.name.clone(),
                    g.saved.to_string(),
                    g.target.to_string(),
                    format!("{}%", percentage(g.saved, g.target)),
                ]
            })
            .collect();
        println!(
            "{}",
            pretty_table(&["Id", "Name", "Saved", "Target", "Progress"], rows)
        );
    }
    Ok(())
}

fn fund(store: &Store, sub: &clap::ArgMatches) -> Result<()> {
    let id = *sub.get_one::<i64>("id").unwrap();
    let amount = parse_amount(sub.get_one::<String>("amount").unwrap())?;
    let mut goals = store.savings_goals()?;
    let Some(goal) = goals.iter_mut().find(|g| g.id == id) else {
        bail!("Savings goal {} not found", id);
    };
    goal.saved += amount;
    let name = goal.name.clone();
    let saved = goal.saved;
    let target = goal.target;
    store.save_savings_goals(&goals)?;
    let settings = store.settings()?;
    println!(
        "Funded '{}': {} of {}",
        name,
        fmt_money(&saved, &settings.currency),
        fmt_money(&target, &settings.currency)
    );
    Ok(())
}

fn rm(store: &Store, sub: &clap::ArgMatches) -> Result<()> {
    let id = *sub.get_one::<i64>("id").unwrap();
    let mut goals = store.savings_goals()?;
    let before = goals.len();
    goals.retain(|g| g.id != id);
    if goals.len() == before {
        bail!("Savings goal {} not found", id);
    }
    store.save_savings_goals(&goals)?;
    println!("Removed savings goal {}", id);
    Ok(())
}
