// Copyright (c) 2025 Centime contributors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::{Context, Result, bail};
use chrono::NaiveDate;
use comfy_table::{Cell, Table, presets::UTF8_FULL};
use rust_decimal::Decimal;

use crate::models::TxKind;

pub fn parse_date(s: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .with_context(|| format!("Invalid date '{}', expected YYYY-MM-DD", s))
}

pub fn parse_month(s: &str) -> Result<String> {
    NaiveDate::parse_from_str(&format!("{}-01", s), "%Y-%m-%d")
        .with_context(|| format!("Invalid month '{}', expected YYYY-MM", s))?;
    Ok(s.to_string())
}

pub fn parse_decimal(s: &str) -> Result<Decimal> {
    s.parse::<Decimal>()
        .with_context(|| format!("Invalid decimal '{}'", s))
}

/// Monetary input: a non-negative decimal. Direction is carried by the
/// transaction kind, never by a sign.
pub fn parse_amount(s: &str) -> Result<Decimal> {
    let d = parse_decimal(s)?;
    if d < Decimal::ZERO {
        bail!("Amount must be non-negative, got '{}'", s);
    }
    Ok(d)
}

pub fn parse_kind(s: &str) -> Result<TxKind> {
    match s {
        "income" => Ok(TxKind::Income),
        "expense" => Ok(TxKind::Expense),
        _ => bail!("Invalid type '{}', expected 'income' or 'expense'", s),
    }
}

/// Day of month, 1..=31.
pub fn parse_day(s: &str) -> Result<u32> {
    let day: u32 = s
        .parse()
        .with_context(|| format!("Invalid day '{}', expected 1-31", s))?;
    if !(1..=31).contains(&day) {
        bail!("Invalid day '{}', expected 1-31", s);
    }
    Ok(day)
}

/// Formats an amount with thousands grouping, currency code last:
/// `125 000 FCFA`.
pub fn fmt_money(d: &Decimal, ccy: &str) -> String {
    let v = d.round_dp(2).normalize();
    let text = v.abs().to_string();
    let (int_part, frac_part) = match text.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (text.as_str(), None),
    };
    let mut grouped = String::new();
    let len = int_part.len();
    for (i, c) in int_part.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            grouped.push(' ');
        }
        grouped.push(c);
    }
    let sign = if v < Decimal::ZERO { "-" } else { "" };
    match frac_part {
        Some(f) => format!("{sign}{grouped}.{f} {ccy}"),
        None => format!("{sign}{grouped} {ccy}"),
    }
}

pub fn pretty_table(headers: &[&str], rows: Vec<Vec<String>>) -> Table {
    let mut t = Table::new();
    t.load_preset(UTF8_FULL);
    t.set_header(headers.iter().map(|h| Cell::new(*h)));
    for r in rows {
        t.add_row(r.into_iter().map(Cell::new));
    }
    t
}

pub fn maybe_print_json<T: serde::Serialize>(
    json_flag: bool,
    jsonl_flag: bool,
    v: &T,
) -> Result<bool> {
    if json_flag {
        println!("{}", serde_json::to_string_pretty(v)?);
        return Ok(true);
    }
    if jsonl_flag {
        // If v is an array, stream each element; else stream single line
        let val = serde_json::to_value(v)?;
        if let Some(arr) = val.as_array() {
            for item in arr {
                println!("{}", serde_json::to_string(item)?);
            }
        } else {
            println!("{}", serde_json::to_string(&val)?);
        }
        return Ok(true);
    }
    Ok(false)
}
