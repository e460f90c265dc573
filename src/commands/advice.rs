// Copyright (c) 2025 Centime contributors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;
use chrono::Local;

use crate::stats::{current_month_transactions, days_remaining_in_month};
use crate::store::Store;
use crate::utils::maybe_print_json;

pub fn handle(store: &Store, m: &clap::ArgMatches) -> Result<()> {
    let json_flag = m.get_flag("json");
    let jsonl_flag = m.get_flag("jsonl");
    let Some(plan) = store.budget_plan()? else {
        println!("No budget plan yet. Run 'centime budget plan' first");
        return Ok(());
    };

    let today = Local::now().date_naive();
    let month = current_month_transactions(&store.transactions()?, today);
    let days_left = days_remaining_in_month(today);
    let settings = store.settings()?;

    let advices = crate::advice::generate(&month, &plan, days_left, &settings.currency);
    if !maybe_print_json(json_flag, jsonl_flag, &advices)? {
        for a in &advices {
            println!("{} [{}] {}", a.icon, a.severity.as_str(), a.title);
            println!("   {}", a.message);
        }
    }
    Ok(())
}
