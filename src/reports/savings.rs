//! Savings goal progress

use serde::Serialize;

use crate::models::{Money, SavingsGoal, SavingsGoalId};

/// Combined progress across all goals
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SavingsProgress {
    pub total_current: Money,
    pub total_target: Money,
    /// Unclamped; may exceed 100
    pub percent: f64,
}

impl SavingsProgress {
    /// Percentage clamped to `[0, 100]` for progress bars
    pub fn display_percent(&self) -> f64 {
        self.percent.clamp(0.0, 100.0)
    }
}

/// Progress of a single goal
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GoalProgress {
    pub id: SavingsGoalId,
    pub name: String,
    pub current: Money,
    pub target: Money,
    /// Unclamped; may exceed 100
    pub percent: f64,
}

impl GoalProgress {
    pub fn display_percent(&self) -> f64 {
        self.percent.clamp(0.0, 100.0)
    }

    pub fn remaining(&self) -> Money {
        if self.current >= self.target {
            Money::zero()
        } else {
            self.target - self.current
        }
    }
}

pub fn goal_progress(goal: &SavingsGoal) -> GoalProgress {
    GoalProgress {
        id: goal.id,
        name: goal.name.clone(),
        current: goal.current_amount,
        target: goal.target_amount,
        percent: goal.current_amount.percent_of(goal.target_amount),
    }
}

pub fn savings_progress(goals: &[SavingsGoal]) -> SavingsProgress {
    let total_current: Money = goals.iter().map(|g| g.current_amount).sum();
    let total_target: Money = goals.iter().map(|g| g.target_amount).sum();

    SavingsProgress {
        total_current,
        total_target,
        percent: total_current.percent_of(total_target),
    }
}
