// Copyright (c) 2025 Centime contributors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

pub mod advice;
pub mod catalog;
pub mod cli;
pub mod commands;
pub mod models;
pub mod planner;
pub mod stats;
pub mod store;
pub mod utils;
