// ABOUTME: User profile model with goal and gender enums
// ABOUTME: Provides BMI derivation for the profile view
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::fmt;

use serde::{Deserialize, Serialize};

/// Biological sex used for demographic context in coaching prompts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    /// Male
    #[default]
    Male,
    /// Female
    Female,
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Male => "male",
            Self::Female => "female",
        })
    }
}

/// Training goal that drives the recommendation heuristics
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Goal {
    /// Maximal strength
    Strength,
    /// Hypertrophy
    Muscle,
    /// Fat loss
    WeightLoss,
    /// Aerobic capacity
    Endurance,
    /// General fitness
    #[default]
    General,
}

impl Goal {
    /// Wire representation
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Strength => "strength",
            Self::Muscle => "muscle",
            Self::WeightLoss => "weight_loss",
            Self::Endurance => "endurance",
            Self::General => "general",
        }
    }
}

impl fmt::Display for Goal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Body mass index band
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BmiCategory {
    /// Below 18.5
    Underweight,
    /// 18.5 up to 25
    Normal,
    /// 25 up to 30
    Overweight,
    /// 30 and above
    Obese,
}

impl BmiCategory {
    /// Classify a BMI value
    #[must_use]
    pub fn from_bmi(bmi: f64) -> Self {
        if bmi < 18.5 {
            Self::Underweight
        } else if bmi < 25.0 {
            Self::Normal
        } else if bmi < 30.0 {
            Self::Overweight
        } else {
            Self::Obese
        }
    }
}

/// Singleton user profile
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    /// Display name
    #[serde(default)]
    pub name: String,
    /// Age in years
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub age: Option<u32>,
    /// Bodyweight in kilograms
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weight: Option<f64>,
    /// Height in centimeters
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height: Option<f64>,
    /// Gender
    #[serde(default)]
    pub gender: Gender,
    /// Training goal
    #[serde(default)]
    pub goal: Goal,
}

impl UserProfile {
    /// Create a profile with only a name and goal set
    #[must_use]
    pub fn new(name: impl Into<String>, goal: Goal) -> Self {
        Self {
            name: name.into(),
            goal,
            ..Self::default()
        }
    }

    /// Bodyweight when present and nonzero
    #[must_use]
    pub fn bodyweight(&self) -> Option<f64> {
        self.weight.filter(|w| *w > 0.0)
    }

    /// Body mass index rounded to one decimal, when weight and height are known
    #[must_use]
    pub fn bmi(&self) -> Option<f64> {
        let weight = self.bodyweight()?;
        let height_m = self.height.filter(|h| *h > 0.0)? / 100.0;
        Some((weight / (height_m * height_m) * 10.0).round() / 10.0)
    }

    /// BMI band, when BMI is known
    #[must_use]
    pub fn bmi_category(&self) -> Option<BmiCategory> {
        self.bmi().map(BmiCategory::from_bmi)
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;

    #[test]
    fn test_bmi_requires_weight_and_height() {
        let mut profile = UserProfile::new("Kari", Goal::Strength);
        assert!(profile.bmi().is_none());
        profile.weight = Some(80.0);
        assert!(profile.bmi().is_none());
        profile.height = Some(180.0);
        assert_eq!(profile.bmi(), Some(24.7));
        assert_eq!(profile.bmi_category(), Some(BmiCategory::Normal));
    }

    #[test]
    fn test_goal_wire_format() {
        let profile: UserProfile =
            serde_json::from_str(r#"{"name":"Ola","goal":"weight_loss","gender":"female"}"#)
                .unwrap();
        assert_eq!(profile.goal, Goal::WeightLoss);
        assert_eq!(profile.gender, Gender::Female);
        assert!(profile.age.is_none());
    }
}
