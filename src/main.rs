// Copyright (c) 2025 Centime contributors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;

use centime::{cli, commands, store::Store};

fn main() -> Result<()> {
    let cli = cli::build_cli();
    let matches = cli.get_matches();

    let store = Store::open_default()?;

    match matches.subcommand() {
        Some(("init", _)) => {
            println!("Data store initialized at {}", store.path().display());
        }
        Some(("profile", sub)) => commands::profile::handle(&store, sub)?,
        Some(("charge", sub)) => commands::charges::handle(&store, sub)?,
        Some(("tx", sub)) => commands::transactions::handle(&store, sub)?,
        Some(("budget", sub)) => commands::budget::handle(&store, sub)?,
        Some(("advice", sub)) => commands::advice::handle(&store, sub)?,
        Some(("report", sub)) => commands::report::handle(&store, sub)?,
        Some(("goal", sub)) => commands::goals::handle(&store, sub)?,
        Some(("settings", sub)) => commands::settings::handle(&store, sub)?,
        _ => {
            cli::build_cli().print_help()?;
            println!();
        }
    }
    Ok(())
}
