// Copyright (c) 2025 Centime contributors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

pub mod profile;
pub mod charges;
pub mod transactions;
pub mod budget;
pub mod advice;
pub mod report;
pub mod goals;
pub mod settings;
