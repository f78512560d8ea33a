// Copyright (c) 2025 Finboard Authors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

pub mod dashboard;
pub mod transactions;
pub mod expenses;
pub mod goals;
pub mod reports;
pub mod settings;
pub mod exporter;
