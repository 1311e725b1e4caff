// ABOUTME: Daily nutrition scoring - goal ratios averaged into a letter grade
// ABOUTME: Fixed descending thresholds from A+ to F; ratios intentionally uncapped

//! Grade Calculator Module
//!
//! Converts one day's aggregated intake into a single letter grade against
//! the user's goals:
//!
//! 1. Sum calories, protein, carbs, and fat over the day's diary items.
//! 2. Per nutrient, ratio = actual / goal (0 when the actual is 0).
//! 3. Average the four ratios into one score.
//! 4. Map the score to a grade via fixed descending thresholds
//!    (see [`crate::constants::grade_thresholds`]).
//!
//! Ratios are not capped above 1.0: a day far over its goals can still
//! average >= 0.95 and earn an A+. The perfect-week achievement exercises
//! this behavior, so it is load-bearing rather than a rounding artifact.

use crate::constants::grade_thresholds;
use crate::intelligence::nutrition_calculator::NutrientTotals;
use crate::models::{DailyMealItem, Settings};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Letter grade summarizing how closely a day matched its goals
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum Grade {
    /// Score >= 0.95
    #[serde(rename = "A+")]
    APlus,
    /// Score >= 0.90
    #[serde(rename = "A")]
    A,
    /// Score >= 0.85
    #[serde(rename = "A-")]
    AMinus,
    /// Score >= 0.80
    #[serde(rename = "B+")]
    BPlus,
    /// Score >= 0.75
    #[serde(rename = "B")]
    B,
    /// Score >= 0.70
    #[serde(rename = "B-")]
    BMinus,
    /// Score >= 0.60
    #[serde(rename = "C+")]
    CPlus,
    /// Score >= 0.50
    #[serde(rename = "C")]
    C,
    /// Score >= 0.40
    #[serde(rename = "C-")]
    CMinus,
    /// Score >= 0.20
    #[serde(rename = "D")]
    D,
    /// Everything below
    #[serde(rename = "F")]
    F,
}

impl Grade {
    /// Map an averaged goal-ratio score onto the grade scale
    #[must_use]
    pub fn from_score(score: f64) -> Self {
        if score >= grade_thresholds::A_PLUS {
            Self::APlus
        } else if score >= grade_thresholds::A {
            Self::A
        } else if score >= grade_thresholds::A_MINUS {
            Self::AMinus
        } else if score >= grade_thresholds::B_PLUS {
            Self::BPlus
        } else if score >= grade_thresholds::B {
            Self::B
        } else if score >= grade_thresholds::B_MINUS {
            Self::BMinus
        } else if score >= grade_thresholds::C_PLUS {
            Self::CPlus
        } else if score >= grade_thresholds::C {
            Self::C
        } else if score >= grade_thresholds::C_MINUS {
            Self::CMinus
        } else if score >= grade_thresholds::D {
            Self::D
        } else {
            Self::F
        }
    }

    /// Display form ("A+" .. "F")
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::APlus => "A+",
            Self::A => "A",
            Self::AMinus => "A-",
            Self::BPlus => "B+",
            Self::B => "B",
            Self::BMinus => "B-",
            Self::CPlus => "C+",
            Self::C => "C",
            Self::CMinus => "C-",
            Self::D => "D",
            Self::F => "F",
        }
    }
}

impl fmt::Display for Grade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Full scoring result for one day
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DayScore {
    /// Summed intake for the day
    pub totals: NutrientTotals,
    /// actual / goal per nutrient, in calorie/protein/carbs/fat order
    pub ratios: [f64; 4],
    /// Unweighted mean of the four ratios
    pub score: f64,
    /// Resulting letter grade
    pub grade: Grade,
}

/// Sum a day's diary items (values are already scaled per item)
#[must_use]
pub fn sum_day(items: &[DailyMealItem]) -> NutrientTotals {
    let mut totals = NutrientTotals::default();
    for item in items {
        totals.calories += item.calories;
        totals.protein += item.protein;
        totals.carbs += item.carbs;
        totals.fat += item.fat;
    }
    totals
}

/// Ratio of actual intake to goal; 0 when nothing was logged or the goal
/// is not positive
fn goal_ratio(actual: f64, goal: f64) -> f64 {
    if actual <= 0.0 || goal <= 0.0 {
        0.0
    } else {
        actual / goal
    }
}

/// Score one day's diary items against the configured goals
///
/// A day with no logged items scores 0.0 on every ratio and grades F.
#[must_use]
pub fn score_day(items: &[DailyMealItem], settings: &Settings) -> DayScore {
    let totals = sum_day(items);
    let ratios = [
        goal_ratio(totals.calories, settings.calorie_goal),
        goal_ratio(totals.protein, settings.protein_goal),
        goal_ratio(totals.carbs, settings.carbs_goal),
        goal_ratio(totals.fat, settings.fat_goal),
    ];
    let score = ratios.iter().sum::<f64>() / ratios.len() as f64;
    DayScore {
        totals,
        ratios,
        score,
        grade: Grade::from_score(score),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grade_threshold_boundaries() {
        assert_eq!(Grade::from_score(0.95), Grade::APlus);
        assert_eq!(Grade::from_score(0.9499), Grade::A);
        assert_eq!(Grade::from_score(0.90), Grade::A);
        assert_eq!(Grade::from_score(0.20), Grade::D);
        assert_eq!(Grade::from_score(0.1999), Grade::F);
        assert_eq!(Grade::from_score(0.0), Grade::F);
    }

    #[test]
    fn test_overeating_is_not_capped() {
        // 3x every goal still averages 3.0 and grades A+
        assert_eq!(Grade::from_score(3.0), Grade::APlus);
    }

    #[test]
    fn test_grade_display() {
        assert_eq!(Grade::APlus.to_string(), "A+");
        assert_eq!(Grade::CMinus.to_string(), "C-");
        assert_eq!(serde_json::to_string(&Grade::BPlus).unwrap(), "\"B+\"");
    }

    #[test]
    fn test_empty_day_grades_f() {
        let score = score_day(&[], &Settings::default());
        assert_eq!(score.score, 0.0);
        assert_eq!(score.grade, Grade::F);
    }
}
