// ABOUTME: Extension point for adjusting a workout plan against a free-text disease note
// ABOUTME: The default review returns the plan unchanged
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::errors::AppResult;
use crate::intelligence::WorkoutPlan;

/// Reviews a predicted workout plan when the user describes known diseases
pub trait WorkoutPlanReview: Send + Sync {
    /// Return the plan to send to the user
    ///
    /// # Errors
    ///
    /// Implementations may fail if the external validator is unavailable
    fn review(&self, plan: WorkoutPlan, diseases_info: &str) -> AppResult<WorkoutPlan>;
}

/// Identity review
#[derive(Debug, Clone, Copy, Default)]
pub struct PassThroughReview;

impl WorkoutPlanReview for PassThroughReview {
    fn review(&self, plan: WorkoutPlan, diseases_info: &str) -> AppResult<WorkoutPlan> {
        tracing::debug!(
            note_len = diseases_info.len(),
            "Workout plan review requested, passing plan through"
        );
        Ok(plan)
    }
}
