// ABOUTME: Weekly workout plan prediction from body composition and age
// ABOUTME: Picks a goal from current vs dream weight and scales sessions by intensity
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Workout plan prediction
//!
//! Goal selection compares the current weight with the dream weight:
//! more than [`WEIGHT_TOLERANCE_KG`] above it is fat loss, more than that
//! below it is muscle gain, anything else is maintenance.
//!
//! Intensity follows ACSM pre-participation guidance: older or obese
//! individuals start low, middle-aged or overweight start moderate.

use crate::errors::{AppError, AppResult};
use crate::intelligence::nutrition_calculator::Gender;
use serde::{Deserialize, Serialize};

/// Weight difference treated as "already at target"
pub const WEIGHT_TOLERANCE_KG: f64 = 1.0;
/// Sustainable fat loss rate
const FAT_LOSS_KG_PER_WEEK: f64 = 0.5;
/// Sustainable lean mass gain rate
const MUSCLE_GAIN_KG_PER_WEEK: f64 = 0.25;

/// Training goal
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum WorkoutGoal {
    /// Caloric deficit, cardio-heavy
    FatLoss,
    /// Hypertrophy, strength-heavy
    MuscleGain,
    /// Keep current composition
    Maintenance,
}

/// Session intensity
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Intensity {
    /// Beginner / joint friendly
    Low,
    /// General population
    Moderate,
    /// Conditioned adults
    High,
}

/// What a session trains
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum SessionFocus {
    /// Steady-state aerobic work
    Cardio,
    /// Resistance training
    Strength,
    /// High intensity intervals
    Hiit,
    /// Stretching and mobility
    Mobility,
}

/// One training day
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct WorkoutSession {
    /// Day of week
    pub day: String,
    /// Session focus
    pub focus: SessionFocus,
    /// Planned duration
    pub duration_minutes: u32,
    /// Exercises in order
    pub exercises: Vec<String>,
}

/// Weekly workout plan
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct WorkoutPlan {
    /// Chosen goal
    pub goal: WorkoutGoal,
    /// Chosen intensity
    pub intensity: Intensity,
    /// Number of sessions in the schedule
    pub sessions_per_week: usize,
    /// Training days
    pub weekly_schedule: Vec<WorkoutSession>,
    /// Kilograms between current and dream weight
    pub weight_to_target_kg: f64,
    /// Weeks to reach the dream weight at a sustainable rate
    #[serde(skip_serializing_if = "Option::is_none")]
    pub estimated_weeks: Option<u32>,
    /// Guidance notes
    pub notes: Vec<String>,
}

type Template = &'static [(&'static str, SessionFocus)];

const FAT_LOSS_TEMPLATE: Template = &[
    ("Monday", SessionFocus::Cardio),
    ("Tuesday", SessionFocus::Strength),
    ("Wednesday", SessionFocus::Hiit),
    ("Thursday", SessionFocus::Mobility),
    ("Friday", SessionFocus::Cardio),
    ("Saturday", SessionFocus::Strength),
];

const MUSCLE_GAIN_TEMPLATE: Template = &[
    ("Monday", SessionFocus::Strength),
    ("Tuesday", SessionFocus::Strength),
    ("Wednesday", SessionFocus::Mobility),
    ("Thursday", SessionFocus::Strength),
    ("Friday", SessionFocus::Strength),
    ("Saturday", SessionFocus::Cardio),
];

const MAINTENANCE_TEMPLATE: Template = &[
    ("Monday", SessionFocus::Strength),
    ("Wednesday", SessionFocus::Cardio),
    ("Friday", SessionFocus::Strength),
    ("Saturday", SessionFocus::Mobility),
];

impl SessionFocus {
    const fn base_minutes(self) -> u32 {
        match self {
            Self::Cardio => 30,
            Self::Strength => 45,
            Self::Hiit => 20,
            Self::Mobility => 25,
        }
    }

    fn exercises(self, intensity: Intensity) -> Vec<String> {
        let list: &[&str] = match (self, intensity) {
            (Self::Cardio, Intensity::Low) => &["Brisk walking", "Stationary cycling"],
            (Self::Cardio, Intensity::Moderate) => &["Jogging", "Cycling", "Rowing"],
            (Self::Cardio, Intensity::High) => &["Tempo run", "Cycling intervals", "Rowing"],
            (Self::Strength, Intensity::Low) => {
                &["Chair squats", "Wall push-ups", "Resistance band rows"]
            }
            (Self::Strength, Intensity::Moderate) => &[
                "Goblet squats",
                "Push-ups",
                "Dumbbell rows",
                "Romanian deadlifts",
            ],
            (Self::Strength, Intensity::High) => &[
                "Barbell back squats",
                "Bench press",
                "Deadlifts",
                "Pull-ups",
                "Overhead press",
            ],
            (Self::Hiit, _) => &["Burpees", "Mountain climbers", "Jump squats", "Sprints"],
            (Self::Mobility, _) => &["Hip openers", "Thoracic rotations", "Hamstring stretch"],
        };
        list.iter().map(|&name| name.to_owned()).collect()
    }
}

impl Intensity {
    fn scale_minutes(self, minutes: u32) -> u32 {
        match self {
            Self::Low => minutes * 3 / 4,
            Self::Moderate => minutes,
            Self::High => minutes * 5 / 4,
        }
    }
}

fn choose_goal(weight_kg: f64, dream_weight_kg: f64) -> WorkoutGoal {
    let delta = weight_kg - dream_weight_kg;
    if delta > WEIGHT_TOLERANCE_KG {
        WorkoutGoal::FatLoss
    } else if delta < -WEIGHT_TOLERANCE_KG {
        WorkoutGoal::MuscleGain
    } else {
        WorkoutGoal::Maintenance
    }
}

fn choose_intensity(age: u32, bmi: f64) -> Intensity {
    if bmi >= 30.0 || age >= 60 {
        Intensity::Low
    } else if bmi >= 25.0 || age >= 40 {
        Intensity::Moderate
    } else {
        Intensity::High
    }
}

/// Predict a weekly workout plan
///
/// `gender` is accepted in any casing.
///
/// # Errors
///
/// Returns an error if `gender` is not male/female or weights are not positive
pub fn predict_workout_plan(
    gender: &str,
    age: u32,
    weight_kg: f64,
    dream_weight_kg: f64,
    bmi: f64,
) -> AppResult<WorkoutPlan> {
    let gender: Gender = gender.parse()?;
    if weight_kg <= 0.0 || dream_weight_kg <= 0.0 {
        return Err(AppError::invalid_input(
            "Weight and dream weight must be greater than 0 kg",
        ));
    }

    let goal = choose_goal(weight_kg, dream_weight_kg);
    let intensity = choose_intensity(age, bmi);

    let template = match goal {
        WorkoutGoal::FatLoss => FAT_LOSS_TEMPLATE,
        WorkoutGoal::MuscleGain => MUSCLE_GAIN_TEMPLATE,
        WorkoutGoal::Maintenance => MAINTENANCE_TEMPLATE,
    };

    let mut swapped_strength_day = false;
    let weekly_schedule: Vec<WorkoutSession> = template
        .iter()
        .map(|&(day, focus)| {
            let focus = match focus {
                SessionFocus::Hiit if intensity == Intensity::Low => SessionFocus::Cardio,
                SessionFocus::Strength
                    if intensity == Intensity::Low
                        && gender == Gender::Female
                        && !swapped_strength_day =>
                {
                    swapped_strength_day = true;
                    SessionFocus::Mobility
                }
                other => other,
            };
            WorkoutSession {
                day: day.to_owned(),
                focus,
                duration_minutes: intensity.scale_minutes(focus.base_minutes()),
                exercises: focus.exercises(intensity),
            }
        })
        .collect();

    let weight_to_target_kg = ((dream_weight_kg - weight_kg) * 10.0).round() / 10.0;
    let estimated_weeks = match goal {
        WorkoutGoal::FatLoss => {
            Some((weight_to_target_kg.abs() / FAT_LOSS_KG_PER_WEEK).ceil() as u32)
        }
        WorkoutGoal::MuscleGain => {
            Some((weight_to_target_kg / MUSCLE_GAIN_KG_PER_WEEK).ceil() as u32)
        }
        WorkoutGoal::Maintenance => None,
    };

    let mut notes = vec![format!(
        "Target weight {dream_weight_kg:.1} kg (currently {weight_kg:.1} kg)"
    )];
    match intensity {
        Intensity::Low => notes.push(
            "Start with low-impact sessions and progress volume before intensity".to_owned(),
        ),
        Intensity::Moderate => {
            notes.push(
                "Keep one rest day between strength sessions for the same muscles".to_owned(),
            );
        }
        Intensity::High => notes.push("Progressive overload: add load or reps weekly".to_owned()),
    }
    if age >= 60 {
        notes.push("Include balance work and consult a physician before starting".to_owned());
    }

    Ok(WorkoutPlan {
        goal,
        intensity,
        sessions_per_week: weekly_schedule.len(),
        weekly_schedule,
        weight_to_target_kg,
        estimated_weeks,
        notes,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_healthy_adult_maintains_at_high_intensity() {
        let plan = predict_workout_plan("Male", 30, 70.0, 70.0, 24.22).unwrap();
        assert_eq!(plan.goal, WorkoutGoal::Maintenance);
        assert_eq!(plan.intensity, Intensity::High);
        assert_eq!(plan.sessions_per_week, 4);
        assert!(plan.estimated_weeks.is_none());
        assert_eq!(plan.weekly_schedule[0].duration_minutes, 56);
    }

    #[test]
    fn test_obese_adult_gets_low_intensity_fat_loss() {
        let plan = predict_workout_plan("male", 35, 100.0, 80.7, 30.86).unwrap();
        assert_eq!(plan.goal, WorkoutGoal::FatLoss);
        assert_eq!(plan.intensity, Intensity::Low);
        assert!(plan
            .weekly_schedule
            .iter()
            .all(|session| session.focus != SessionFocus::Hiit));
        // 19.3 kg at 0.5 kg/week
        assert_eq!(plan.estimated_weeks, Some(39));
    }

    #[test]
    fn test_underweight_gains_muscle() {
        let plan = predict_workout_plan("FEMALE", 22, 50.0, 59.9, 15.43).unwrap();
        assert_eq!(plan.goal, WorkoutGoal::MuscleGain);
        assert!(plan.weight_to_target_kg > 9.0);
    }

    #[test]
    fn test_low_intensity_female_swaps_one_strength_day() {
        let plan = predict_workout_plan("female", 65, 60.0, 60.0, 23.0).unwrap();
        let strength_days = plan
            .weekly_schedule
            .iter()
            .filter(|s| s.focus == SessionFocus::Strength)
            .count();
        assert_eq!(strength_days, 1);
        assert!(plan.notes.iter().any(|n| n.contains("balance")));
    }

    #[test]
    fn test_invalid_gender_is_an_error() {
        assert!(predict_workout_plan("robot", 30, 70.0, 70.0, 24.0).is_err());
    }

    #[test]
    fn test_prediction_is_deterministic() {
        let a = predict_workout_plan("Male", 45, 82.0, 76.0, 26.8).unwrap();
        let b = predict_workout_plan("Male", 45, 82.0, 76.0, 26.8).unwrap();
        assert_eq!(a, b);
    }
}
