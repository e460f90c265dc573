// Copyright (c) 2025 Centime contributors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Persistence facade: named JSON blobs on disk, one file per key. Reads of
//! missing or malformed values behave as "absent"; only io failures surface
//! as errors.

use directories::ProjectDirs;
use once_cell::sync::Lazy;
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::models::{BudgetPlan, FixedCharge, SavingsGoal, Settings, Transaction, UserProfile};

static APP: Lazy<(&str, &str, &str)> = Lazy::new(|| ("com.centime", "Centime", "centime"));

pub const USER_PROFILE: &str = "user_profile";
pub const FIXED_CHARGES: &str = "fixed_charges";
pub const BUDGET_PLAN: &str = "budget_plan";
pub const TRANSACTIONS: &str = "transactions";
pub const SAVINGS_GOALS: &str = "savings_goals";
pub const SETTINGS: &str = "settings";

pub const KEYS: &[&str] = &[
    USER_PROFILE,
    FIXED_CHARGES,
    BUDGET_PLAN,
    TRANSACTIONS,
    SAVINGS_GOALS,
    SETTINGS,
];

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("could not determine platform-specific data dir")]
    NoDataDir,
    #[error("create data dir {path}")]
    CreateDir {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("read {path}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("write {path}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("serialize value for key '{key}'")]
    Serialize {
        key: String,
        source: serde_json::Error,
    },
}

pub struct Store {
    dir: PathBuf,
}

impl Store {
    /// Opens the store in the platform data directory, creating it on first
    /// use.
    pub fn open_default() -> Result<Self, StoreError> {
        let proj = ProjectDirs::from(APP.0, APP.1, APP.2).ok_or(StoreError::NoDataDir)?;
        Self::open_at(proj.data_dir().to_path_buf())
    }

    pub fn open_at(dir: PathBuf) -> Result<Self, StoreError> {
        fs::create_dir_all(&dir).map_err(|source| StoreError::CreateDir {
            path: dir.clone(),
            source,
        })?;
        Ok(Store { dir })
    }

    pub fn path(&self) -> &Path {
        &self.dir
    }

    fn file(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }

    /// Reads the value stored under `key`. A missing file is `None`; a
    /// value that fails to parse is treated as absent, per the storage
    /// contract.
    pub fn get<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>, StoreError> {
        let path = self.file(key);
        if !path.exists() {
            return Ok(None);
        }
        let data = fs::read_to_string(&path).map_err(|source| StoreError::Read {
            path: path.clone(),
            source,
        })?;
        Ok(serde_json::from_str(&data).ok())
    }

    /// Writes via a temp file and rename so a failed write never leaves a
    /// truncated blob behind.
    pub fn set<T: Serialize>(&self, key: &str, value: &T) -> Result<(), StoreError> {
        let json = serde_json::to_string_pretty(value).map_err(|source| StoreError::Serialize {
            key: key.to_string(),
            source,
        })?;
        let path = self.file(key);
        let tmp = self.dir.join(format!("{key}.json.tmp"));
        fs::write(&tmp, json).map_err(|source| StoreError::Write {
            path: tmp.clone(),
            source,
        })?;
        fs::rename(&tmp, &path).map_err(|source| StoreError::Write { path, source })?;
        Ok(())
    }

    /// Removes every known key. Destructive and unrecoverable; callers must
    /// confirm with the user first.
    pub fn clear(&self) -> Result<(), StoreError> {
        for key in KEYS {
            let path = self.file(key);
            if path.exists() {
                fs::remove_file(&path).map_err(|source| StoreError::Write { path, source })?;
            }
        }
        Ok(())
    }

    // Typed accessors over the fixed keys.

    pub fn profile(&self) -> Result<Option<UserProfile>, StoreError> {
        self.get(USER_PROFILE)
    }

    pub fn save_profile(&self, profile: &UserProfile) -> Result<(), StoreError> {
        self.set(USER_PROFILE, profile)
    }

    pub fn fixed_charges(&self) -> Result<Vec<FixedCharge>, StoreError> {
        Ok(self.get(FIXED_CHARGES)?.unwrap_or_default())
    }

    pub fn save_fixed_charges(&self, charges: &[FixedCharge]) -> Result<(), StoreError> {
        self.set(FIXED_CHARGES, &charges)
    }

    pub fn budget_plan(&self) -> Result<Option<BudgetPlan>, StoreError> {
        self.get(BUDGET_PLAN)
    }

    pub fn save_budget_plan(&self, plan: &BudgetPlan) -> Result<(), StoreError> {
        self.set(BUDGET_PLAN, plan)
    }

    pub fn transactions(&self) -> Result<Vec<Transaction>, StoreError> {
        Ok(self.get(TRANSACTIONS)?.unwrap_or_default())
    }

    pub fn save_transactions(&self, transactions: &[Transaction]) -> Result<(), StoreError> {
        self.set(TRANSACTIONS, &transactions)
    }

    pub fn savings_goals(&self) -> Result<Vec<SavingsGoal>, StoreError> {
        Ok(self.get(SAVINGS_GOALS)?.unwrap_or_default())
    }

    pub fn save_savings_goals(&self, goals: &[SavingsGoal]) -> Result<(), StoreError> {
        self.set(SAVINGS_GOALS, &goals)
    }

    pub fn settings(&self) -> Result<Settings, StoreError> {
        Ok(self.get(SETTINGS)?.unwrap_or_default())
    }

    pub fn save_settings(&self, settings: &Settings) -> Result<(), StoreError> {
        self.set(SETTINGS, settings)
    }
}
