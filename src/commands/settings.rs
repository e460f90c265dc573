// Copyright (c) 2025 Centime contributors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;

use crate::store::Store;
use crate::utils::{maybe_print_json, pretty_table};

pub fn handle(store: &Store, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("show", sub)) => show(store, sub)?,
        Some(("set", sub)) => set(store, sub)?,
        Some(("clear", sub)) => clear(store, sub)?,
        _ => {}
    }
    Ok(())
}

fn show(store: &Store, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let settings = store.settings()?;
    if !maybe_print_json(json_flag, jsonl_flag, &settings)? {
        let rows = vec![
            vec!["Currency".into(), settings.currency.clone()],
            vec!["Notifications".into(), settings.notifications.to_string()],
        ];
        println!("{}", pretty_table(&["Setting", "Value"], rows));
    }
    Ok(())
}

fn set(store: &Store, sub: &clap::ArgMatches) -> Result<()> {
    let mut settings = store.settings()?;
    if let Some(ccy) = sub.get_one::<String>("currency") {
        settings.currency = ccy.to_string();
    }
    if let Some(flag) = sub.get_one::<String>("notifications") {
        settings.notifications = flag == "true";
    }
    store.save_settings(&settings)?;
    println!(
        "Settings saved: currency {}, notifications {}",
        settings.currency, settings.notifications
    );
    Ok(())
}

fn clear(store: &Store, sub: &clap::ArgMatches) -> Result<()> {
    if !sub.get_flag("yes") {
        println!("This permanently deletes ALL stored data. Re-run with --yes to confirm.");
        return Ok(());
    }
    store.clear()?;
    println!("All data cleared");
    Ok(())
}
