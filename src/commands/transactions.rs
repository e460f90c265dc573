// Copyright (c) 2025 Centime contributors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::{Result, bail};
use chrono::Local;

use crate::catalog;
use crate::models::{Transaction, next_id};
use crate::store::Store;
use crate::utils::{
    fmt_money, maybe_print_json, parse_amount, parse_date, parse_kind, parse_month, pretty_table,
};

pub fn handle(store: &Store, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("add", sub)) => add(store, sub)?,
        Some(("list", sub)) => list(store, sub)?,
        Some(("rm", sub)) => rm(store, sub)?,
        _ => {}
    }
    Ok(())
}

fn add(store: &Store, sub: &clap::ArgMatches) -> Result<()> {
    let amount = parse_amount(sub.get_one::<String>("amount").unwrap())?;
    let kind = parse_kind(sub.get_one::<String>("type").unwrap())?;
    let category = sub.get_one::<String>("category").unwrap().to_string();
    if !catalog::is_valid(&category, kind) {
        let valid: Vec<&str> = catalog::categories_for(kind).iter().map(|c| c.key).collect();
        bail!(
            "Unknown {} category '{}'. Valid categories: {}",
            kind.as_str(),
            category,
            valid.join(", ")
        );
    }
    let description = sub.get_one::<String>("description").unwrap().to_string();
    let subcategory = sub.get_one::<String>("subcategory").map(|s| s.to_string());
    let date = match sub.get_one::<String>("date") {
        Some(s) => parse_date(s)?,
        None => Local::now().date_naive(),
    };

    let mut txs = store.transactions()?;
    let id = next_id(&txs, |t| t.id);
    // Newest first
    txs.insert(
        0,
        Transaction {
            id,
            description,
            amount,
            kind,
            category: category.clone(),
            subcategory,
            date,
        },
    );
    store.save_transactions(&txs)?;

    let settings = store.settings()?;
    println!(
        "Recorded {} of {} in '{}' on {} (id: {})",
        kind.as_str(),
        fmt_money(&amount, &settings.currency),
        category,
        date,
        id
    );
    Ok(())
}

fn list(store: &Store, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let data = query_rows(store, sub)?;
    if !maybe_print_json(json_flag, jsonl_flag, &data)? {
        let rows: Vec<Vec<String>> = data
            .iter()
            .map(|t| {
                let info = catalog::category_info(&t.category, t.kind);
                vec![
                    t.id.to_string(),
                    t.date.to_string(),
                    t.kind.as_str().to_string(),
                    format!("{} {}", info.icon, info.name),
                    t.subcategory.clone().unwrap_or_default(),
                    t.description.clone(),
                    t.amount.to_string(),
                ]
            })
            .collect();
        println!(
            "{}",
            pretty_table(
                &["Id", "Date", "Type", "Category", "Subcategory", "Description", "Amount"],
                rows,
            )
        );
    }
    Ok(())
}

/// Stored order is newest first, so the filters below preserve it.
pub fn query_rows(store: &Store, sub: &clap::ArgMatches) -> Result<Vec<Transaction>> {
    let mut txs = store.transactions()?;

    if let Some(month) = sub.get_one::<String>("month") {
        let month = parse_month(month)?;
        txs.retain(|t| t.date.format("%Y-%m").to_string() == month);
    }
    if let Some(cat) = sub.get_one::<String>("category") {
        txs.retain(|t| &t.category == cat);
    }
    if let Some(kind) = sub.get_one::<String>("type") {
        let kind = parse_kind(kind)?;
        txs.retain(|t| t.kind == kind);
    }
    if let Some(limit) = sub.get_one::<usize>("limit") {
        txs.truncate(*limit);
    }
    Ok(txs)
}

fn rm(store: &Store, sub: &clap::ArgMatches) -> Result<()> {
    let id = *sub.get_one::<i64>("id").unwrap();
    let mut txs = store.transactions()?;
    let before = txs.len();
    txs.retain(|t| t.id != id);
    if txs.len() == before {
        bail!("Transaction {} not found", id);
    }
    store.save_transactions(&txs)?;
    println!("Removed transaction {}", id);
    Ok(())
}
