// Copyright (c) 2025 Finboard Authors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use rust_decimal::Decimal;
use serde::Serialize;

/// Progress towards a savings target as a percentage clamped to [0, 100].
/// A zero or negative target reads as no progress rather than a division
/// error.
pub fn goal_progress(current_savings: Decimal, target_amount: Decimal) -> Decimal {
    if target_amount <= Decimal::ZERO {
        return Decimal::ZERO;
    }
    let pct = current_savings / target_amount * Decimal::ONE_HUNDRED;
    pct.clamp(Decimal::ZERO, Decimal::ONE_HUNDRED)
}

/// What is left to save, or the fact that the target is met. Savings exactly
/// equal to the target count as reached.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum GoalStanding {
    Remaining(Decimal),
    Reached,
}

pub fn goal_standing(current_savings: Decimal, target_amount: Decimal) -> GoalStanding {
    let remaining = target_amount - current_savings;
    if remaining > Decimal::ZERO {
        GoalStanding::Remaining(remaining)
    } else {
        GoalStanding::Reached
    }
}
