// Copyright (c) 2025 Centime contributors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Advice generator: turns current-month spending plus the budget plan into
//! an ordered list of severity-tagged recommendations. Fully pure; the list
//! is rebuilt from scratch on every call.

use rust_decimal::Decimal;

use crate::catalog::{self, EXPENSE_CATEGORIES};
use crate::models::{Advice, BudgetPlan, Severity, Transaction, TxKind};
use crate::stats::{daily_budget, percentage};
use crate::utils::fmt_money;

/// Generates advice for the given current-month transactions and plan.
/// Callers with no plan must skip the call entirely.
///
/// At most one advice per budgeted category, in plan order; the daily-budget
/// advice is evaluated unconditionally afterwards, and a single fallback is
/// appended when nothing else fired.
pub fn generate(
    transactions: &[Transaction],
    plan: &BudgetPlan,
    days_left: i64,
    currency: &str,
) -> Vec<Advice> {
    let mut advices = Vec::new();

    let expenses: Vec<&Transaction> = transactions
        .iter()
        .filter(|t| t.kind == TxKind::Expense)
        .collect();
    let spent_for = |category: &str| -> Decimal {
        expenses
            .iter()
            .filter(|t| t.category == category)
            .map(|t| t.amount)
            .sum()
    };

    for category in plan_order(plan) {
        let budget = plan[category];
        if budget.is_zero() {
            continue;
        }
        let spent = spent_for(category);
        let pct = percentage(spent, budget);
        let info = catalog::category_info(category, TxKind::Expense);

        if pct >= 100 {
            advices.push(Advice {
                severity: Severity::Danger,
                icon: "🚨",
                title: format!("Budget {} dépassé", info.name),
                message: format!(
                    "Vous avez dépensé {} sur {} ({}%)",
                    fmt_money(&spent, currency),
                    fmt_money(&budget, currency),
                    pct
                ),
            });
        } else if pct >= 80 && days_left > 5 {
            advices.push(Advice {
                severity: Severity::Warning,
                icon: "⚠️",
                title: format!("Attention au budget {}", info.name),
                message: format!(
                    "Vous avez utilisé {}% de votre budget et il reste {} jours",
                    pct, days_left
                ),
            });
        } else if pct < 50 && days_left < 10 {
            // Also fires on the last day of the month (days_left == 0).
            advices.push(Advice {
                severity: Severity::Success,
                icon: "✅",
                title: format!("Excellent ! Budget {}", info.name),
                message: format!(
                    "Vous êtes en dessous de votre budget avec seulement {}% utilisé",
                    pct
                ),
            });
        }
    }

    let total_budget: Decimal = plan.values().copied().sum();
    let total_spent: Decimal = expenses.iter().map(|t| t.amount).sum();
    let daily = daily_budget(total_budget - total_spent, days_left);
    if daily > Decimal::ZERO && days_left > 0 {
        advices.push(Advice {
            severity: Severity::Info,
            icon: "💡",
            title: "Budget journalier recommandé".to_string(),
            message: format!(
                "Il vous reste {} par jour pour les {} jours restants",
                fmt_money(&daily, currency),
                days_left
            ),
        });
    }

    if advices.is_empty() {
        advices.push(Advice {
            severity: Severity::Success,
            icon: "🎉",
            title: "Tout va bien !".to_string(),
            message: "Vous gérez bien votre budget ce mois-ci. Continuez comme ça !".to_string(),
        });
    }

    advices
}

/// Plan keys in insertion order. The plan builder writes categories in
/// catalog order, so catalog keys come first; anything else (hand-edited or
/// legacy keys) follows in stored order.
pub fn plan_order(plan: &BudgetPlan) -> Vec<&str> {
    let mut keys: Vec<&str> = EXPENSE_CATEGORIES
        .iter()
        .map(|c| c.key)
        .filter(|k| plan.contains_key(*k))
        .collect();
    for key in plan.keys() {
        if !keys.contains(&key.as_str()) {
            keys.push(key);
        }
    }
    keys
}
