// ABOUTME: Achievement evaluation over the trailing seven-day diary window
// ABOUTME: Streak, goal-consistency, perfect-week, and water-goal badge checks

//! Achievement Engine Module
//!
//! Evaluates badge conditions against the persisted diary history. Every
//! check is stateless with respect to badge status and idempotent: the
//! checks look only at the trailing window ending today, and re-running a
//! satisfied check never alters an already-unlocked badge.
//!
//! Unlocking is a one-way transition. A badge stamps wall-clock "now" at
//! evaluation time (not the date the condition first held) and is never
//! re-locked, even if a later day breaks the streak.

use crate::constants::achievements;
use crate::intelligence::grade_calculator::{score_day, sum_day, Grade};
use crate::models::{Badge, DailyMeal, Settings};
use chrono::{DateTime, Duration, NaiveDate, Utc};
use std::collections::BTreeMap;

/// Read-only view of the history the checks need
#[derive(Debug, Clone, Copy)]
pub struct EvaluationContext<'a> {
    /// Diary entries keyed by date
    pub daily_meals: &'a BTreeMap<NaiveDate, DailyMeal>,
    /// Cumulative water intake (ml) keyed by date
    pub water_intake: &'a BTreeMap<NaiveDate, u32>,
    /// Current goals and targets
    pub settings: &'a Settings,
    /// The day the window ends on (inclusive)
    pub today: NaiveDate,
}

/// Rolling-window badge evaluator
#[derive(Debug, Clone)]
pub struct AchievementEngine {
    window_days: u32,
    consistency_tolerance: f64,
}

impl Default for AchievementEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl AchievementEngine {
    /// Engine with the standard 7-day window and 10% consistency tolerance
    #[must_use]
    pub const fn new() -> Self {
        Self {
            window_days: achievements::WINDOW_DAYS,
            consistency_tolerance: achievements::CONSISTENCY_TOLERANCE,
        }
    }

    /// The evaluation window: today and the preceding days, most recent first
    fn window(&self, today: NaiveDate) -> impl Iterator<Item = NaiveDate> {
        (0..i64::from(self.window_days)).map(move |offset| today - Duration::days(offset))
    }

    /// Streak: every day of the window has at least one logged diary item
    #[must_use]
    pub fn check_streak(&self, ctx: &EvaluationContext<'_>) -> bool {
        self.window(ctx.today).all(|date| {
            ctx.daily_meals
                .get(&date)
                .is_some_and(|day| !day.items.is_empty())
        })
    }

    /// Goal consistency: every day of the window has at least one logged
    /// item and each nutrient total falls within the tolerance band around
    /// its goal (bounds inclusive)
    #[must_use]
    pub fn check_goal_consistency(&self, ctx: &EvaluationContext<'_>) -> bool {
        self.window(ctx.today).all(|date| {
            let Some(day) = ctx.daily_meals.get(&date) else {
                return false;
            };
            if day.items.is_empty() {
                return false;
            }
            let totals = sum_day(&day.items);
            let pairs = [
                (totals.calories, ctx.settings.calorie_goal),
                (totals.protein, ctx.settings.protein_goal),
                (totals.carbs, ctx.settings.carbs_goal),
                (totals.fat, ctx.settings.fat_goal),
            ];
            pairs.iter().all(|&(actual, goal)| {
                actual >= goal * (1.0 - self.consistency_tolerance)
                    && actual <= goal * (1.0 + self.consistency_tolerance)
            })
        })
    }

    /// Perfect week: the day grade is exactly A+ on every day of the window
    #[must_use]
    pub fn check_perfect_week(&self, ctx: &EvaluationContext<'_>) -> bool {
        self.window(ctx.today).all(|date| {
            let items = ctx
                .daily_meals
                .get(&date)
                .map_or(&[] as &[_], |day| day.items.as_slice());
            score_day(items, ctx.settings).grade == Grade::APlus
        })
    }

    /// Water goal: today's cumulative intake reached the configured target
    #[must_use]
    pub fn check_water_goal(&self, ctx: &EvaluationContext<'_>) -> bool {
        ctx.water_intake
            .get(&ctx.today)
            .is_some_and(|&ml| ml >= ctx.settings.water_target_ml)
    }

    /// Run every check and unlock the corresponding badges
    ///
    /// Returns the ids of badges newly unlocked by this evaluation.
    /// Already-unlocked badges keep their original timestamp.
    pub fn evaluate(
        &self,
        ctx: &EvaluationContext<'_>,
        badges: &mut [Badge],
        now: DateTime<Utc>,
    ) -> Vec<String> {
        let results = [
            (achievements::STREAK_WEEK, self.check_streak(ctx)),
            (
                achievements::CONSISTENT_WEEK,
                self.check_goal_consistency(ctx),
            ),
            (achievements::PERFECT_WEEK, self.check_perfect_week(ctx)),
            (achievements::WATER_GOAL, self.check_water_goal(ctx)),
        ];

        let mut unlocked = Vec::new();
        for (id, satisfied) in results {
            if !satisfied {
                continue;
            }
            if let Some(badge) = badges.iter_mut().find(|badge| badge.id == id) {
                if badge.unlock(now) {
                    unlocked.push(badge.id.clone());
                }
            }
        }
        unlocked
    }
}
