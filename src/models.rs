// Copyright (c) 2025 Centime contributors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Direction of a transaction. Amounts are always non-negative; the kind
/// carries the sign.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TxKind {
    Income,
    Expense,
}

impl TxKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            TxKind::Income => "income",
            TxKind::Expense => "expense",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Transaction {
    pub id: i64,
    pub description: String,
    pub amount: Decimal,
    #[serde(rename = "type")]
    pub kind: TxKind,
    pub category: String,
    pub subcategory: Option<String>,
    pub date: NaiveDate,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FixedCharge {
    pub id: i64,
    #[serde(rename = "type")]
    pub kind: String,
    pub name: String,
    pub amount: Decimal,
    pub due_date: u32, // day of month, 1..=31
}

/// Category key -> monthly allocation. The plan builder emits an entry for
/// every catalog expense category, 0 when unset.
pub type BudgetPlan = BTreeMap<String, Decimal>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HousingType {
    Proprietaire,
    Locataire,
    Heberge,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TransportType {
    Voiture,
    Moto,
    TransportCommun,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EmploymentStatus {
    Salarie,
    Independant,
    Etudiant,
    Retraite,
    Autre,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub salary: Decimal,
    pub salary_date: u32, // day of month the salary lands, 1..=31
    pub dependents: u32,
    pub housing_type: HousingType,
    pub transport_type: TransportType,
    pub employment_status: EmploymentStatus,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SavingsGoal {
    pub id: i64,
    pub name: String,
    pub target: Decimal,
    pub saved: Decimal,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    pub currency: String,
    pub notifications: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            currency: "FCFA".to_string(),
            notifications: true,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Danger,
    Warning,
    Success,
    Info,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Danger => "danger",
            Severity::Warning => "warning",
            Severity::Success => "success",
            Severity::Info => "info",
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct Advice {
    pub severity: Severity,
    pub icon: &'static str,
    pub title: String,
    pub message: String,
}

/// Next id for a stored list. Small single-user lists, so max+1 is plenty.
pub fn next_id<T>(items: &[T], id_of: impl Fn(&T) -> i64) -> i64 {
    items.iter().map(&id_of).max().unwrap_or(0) + 1
}
