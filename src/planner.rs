// Copyright (c) 2025 Centime contributors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Budget plan builder: a linear wizard over the expense categories that
//! allocates the salary left after fixed charges. Finishing is blocked while
//! the allocations exceed what is available.

use rust_decimal::{Decimal, RoundingStrategy};

use crate::catalog::{CategoryDef, EXPENSE_CATEGORIES};
use crate::models::BudgetPlan;

/// Fixed share of the available amount suggested per category. `logement`
/// and `abonnements` carry no share (manual entry only), while the
/// `epargne` entry matches no catalog category and is never offered by the
/// wizard; both quirks are kept as found in the advisory table.
pub fn suggested_share(category: &str) -> Option<Decimal> {
    let share = match category {
        "alimentation" => Decimal::new(35, 2),
        "transport" => Decimal::new(15, 2),
        "sante" => Decimal::new(10, 2),
        "loisirs" => Decimal::new(8, 2),
        "vetements" => Decimal::new(5, 2),
        "education" => Decimal::new(5, 2),
        "epargne" => Decimal::new(15, 2),
        "autre" => Decimal::new(7, 2),
        _ => return None,
    };
    Some(share)
}

#[derive(Debug, Clone)]
pub struct Planner {
    step: usize,
    budgets: BudgetPlan,
    available: Decimal, // salary minus fixed charges
}

impl Planner {
    pub fn new(salary: Decimal, total_fixed_charges: Decimal) -> Self {
        let budgets = EXPENSE_CATEGORIES
            .iter()
            .map(|c| (c.key.to_string(), Decimal::ZERO))
            .collect();
        Planner {
            step: 0,
            budgets,
            available: salary - total_fixed_charges,
        }
    }

    pub fn step(&self) -> usize {
        self.step
    }

    pub fn len(&self) -> usize {
        EXPENSE_CATEGORIES.len()
    }

    pub fn current(&self) -> &'static CategoryDef {
        &EXPENSE_CATEGORIES[self.step]
    }

    pub fn available(&self) -> Decimal {
        self.available
    }

    pub fn total_budgeted(&self) -> Decimal {
        self.budgets.values().copied().sum()
    }

    pub fn remaining(&self) -> Decimal {
        self.available - self.total_budgeted()
    }

    pub fn amount(&self, category: &str) -> Decimal {
        self.budgets.get(category).copied().unwrap_or(Decimal::ZERO)
    }

    /// Suggested allocation for the current category, rounded to a whole
    /// amount. None when the category carries no share.
    pub fn suggestion(&self) -> Option<Decimal> {
        suggested_share(self.current().key).map(|share| {
            (self.available * share)
                .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
        })
    }

    /// Free-form entry for the current category; overwrites any prior value.
    pub fn set_amount(&mut self, amount: Decimal) {
        self.budgets.insert(self.current().key.to_string(), amount);
    }

    /// Accepts the suggestion for the current category, when there is one.
    pub fn use_suggestion(&mut self) {
        if let Some(s) = self.suggestion() {
            self.set_amount(s);
        }
    }

    pub fn back(&mut self) {
        if self.step > 0 {
            self.step -= 1;
        }
    }

    /// True while the allocations exceed the available amount; advancing is
    /// refused in that state.
    pub fn is_blocked(&self) -> bool {
        self.remaining() < Decimal::ZERO
    }

    /// Advances one step, or finalizes on the last one. Returns the
    /// completed plan on finalization; `None` means the wizard either moved
    /// forward or stayed put because it is blocked. The planner is done once
    /// a plan comes back; restart from `new` to plan again.
    pub fn next(&mut self) -> Option<BudgetPlan> {
        if self.is_blocked() {
            return None;
        }
        if self.step < self.len() - 1 {
            self.step += 1;
            None
        } else {
            Some(self.budgets.clone())
        }
    }
}
