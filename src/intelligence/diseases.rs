// ABOUTME: Health-risk inference from BMI and an optional blood sugar reading
// ABOUTME: Produces the disease set that steers meal plan selection
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::config::intelligence::{BmiConfig, GlucoseConfig};
use crate::intelligence::blood_report::BloodSugarLevel;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;

/// Inferred health-risk category
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Disease {
    /// BMI below the healthy band
    Underweight,
    /// BMI 25 to 30
    Overweight,
    /// BMI 30 and above
    Obesity,
    /// Fasting glucose below 70 mg/dL
    Hypoglycemia,
    /// Fasting glucose 100 to 125 mg/dL
    Prediabetes,
    /// Fasting glucose 126 mg/dL and above
    Diabetes,
}

impl Disease {
    /// `snake_case` name, matching the serialized form
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Underweight => "underweight",
            Self::Overweight => "overweight",
            Self::Obesity => "obesity",
            Self::Hypoglycemia => "hypoglycemia",
            Self::Prediabetes => "prediabetes",
            Self::Diabetes => "diabetes",
        }
    }
}

impl fmt::Display for Disease {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Ordered set of inferred diseases
pub type DiseaseSet = BTreeSet<Disease>;

/// Infer diseases from BMI and, when available, a blood sugar reading
///
/// Without a reading only the BMI categories can be inferred.
#[must_use]
pub fn get_diseases(
    blood_sugar: Option<BloodSugarLevel>,
    bmi: f64,
    bmi_config: &BmiConfig,
    glucose_config: &GlucoseConfig,
) -> DiseaseSet {
    let mut diseases = DiseaseSet::new();

    if bmi < bmi_config.underweight_below {
        diseases.insert(Disease::Underweight);
    } else if bmi >= bmi_config.obese_from {
        diseases.insert(Disease::Obesity);
    } else if bmi >= bmi_config.overweight_from {
        diseases.insert(Disease::Overweight);
    }

    if let Some(level) = blood_sugar {
        let glucose = level.mg_per_dl();
        if glucose < glucose_config.hypoglycemia_below {
            diseases.insert(Disease::Hypoglycemia);
        } else if glucose >= glucose_config.diabetes_from {
            diseases.insert(Disease::Diabetes);
        } else if glucose >= glucose_config.prediabetes_from {
            diseases.insert(Disease::Prediabetes);
        }
    }

    diseases
}
