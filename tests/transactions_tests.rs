// Copyright (c) 2025 Centime contributors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use centime::models::{Transaction, TxKind};
use centime::store::Store;
use centime::{cli, commands::transactions};
use chrono::NaiveDate;
use rust_decimal::Decimal;

fn setup() -> (tempfile::TempDir, Store) {
    let dir = tempfile::tempdir().unwrap();
    let store = Store::open_at(dir.path().join("data")).unwrap();
    // Stored newest first
    let txs: Vec<Transaction> = (1..=3)
        .rev()
        .map(|i| {
            let (kind, category) = if i == 2 {
                (TxKind::Income, "salaire")
            } else {
                (TxKind::Expense, "alimentation")
            };
            Transaction {
                id: i,
                description: format!("tx {i}"),
                amount: Decimal::from(10),
                kind,
                category: category.to_string(),
                subcategory: None,
                date: NaiveDate::from_ymd_opt(2025, 1, i as u32).unwrap(),
            }
        })
        .collect();
    store.save_transactions(&txs).unwrap();
    (dir, store)
}

fn list_matches(args: &[&str]) -> clap::ArgMatches {
    let mut argv = vec!["centime", "tx", "list"];
    argv.extend_from_slice(args);
    let matches = cli::build_cli().get_matches_from(argv);
    let Some(("tx", tx_m)) = matches.subcommand() else {
        panic!("no tx subcommand");
    };
    let Some(("list", list_m)) = tx_m.subcommand() else {
        panic!("no list subcommand");
    };
    list_m.clone()
}

#[test]
fn list_limit_respected() {
    let (_dir, store) = setup();
    let rows = transactions::query_rows(&store, &list_matches(&["--limit", "2"])).unwrap();
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].date, NaiveDate::from_ymd_opt(2025, 1, 3).unwrap());
}

#[test]
fn list_filters_by_type() {
    let (_dir, store) = setup();
    let rows = transactions::query_rows(&store, &list_matches(&["--type", "income"])).unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].id, 2);
}

#[test]
fn list_filters_by_category_and_month() {
    let (_dir, store) = setup();
    let rows = transactions::query_rows(
        &store,
        &list_matches(&["--month", "2025-01", "--category", "alimentation"]),
    )
    .unwrap();
    assert_eq!(rows.len(), 2);

    let rows = transactions::query_rows(&store, &list_matches(&["--month", "2025-02"])).unwrap();
    assert!(rows.is_empty());
}
