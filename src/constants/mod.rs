// ABOUTME: Application constants and default configuration values
// ABOUTME: Centralizes defaults, grading thresholds, and environment variable names

//! Application constants and configuration values
//!
//! Single source of truth for defaults and fixed thresholds so that the
//! calculators, the state store, and the binaries never drift apart.

/// Service identity used in logs and startup banners
pub mod service_names {
    /// Canonical service name
    pub const MACROLOG: &str = "macrolog";
}

/// Environment variable names understood by `AppConfig::from_env`
pub mod env_config {
    /// Storage backend URL (`file:<dir>` or `memory:`)
    pub const STORAGE_URL: &str = "MACROLOG_STORAGE_URL";
    /// Well-known key the application snapshot is stored under
    pub const STATE_KEY: &str = "MACROLOG_STATE_KEY";
    /// Debounce quiet window for coalesced saves, in milliseconds
    pub const SAVE_DEBOUNCE_MS: &str = "MACROLOG_SAVE_DEBOUNCE_MS";
    /// Deployment environment (development, production, testing)
    pub const ENVIRONMENT: &str = "ENVIRONMENT";
}

/// Default values applied when the environment or persisted state is silent
pub mod defaults {
    /// Well-known storage key holding the full application snapshot
    pub const STATE_KEY: &str = "macrolog.state";

    /// Quiet window for the debounced save scheduler (milliseconds).
    /// A new mutation inside this window cancels and reschedules the
    /// pending write so only the final state of a burst is persisted.
    pub const SAVE_DEBOUNCE_MS: u64 = 500;

    /// Daily calorie goal (kcal)
    pub const CALORIE_GOAL: f64 = 2000.0;
    /// Daily protein goal (g)
    pub const PROTEIN_GOAL: f64 = 150.0;
    /// Daily carbohydrate goal (g)
    pub const CARBS_GOAL: f64 = 250.0;
    /// Daily fat goal (g)
    pub const FAT_GOAL: f64 = 65.0;

    /// Daily water target (ml)
    pub const WATER_TARGET_ML: u32 = 2000;
    /// Single glass capacity (ml)
    pub const GLASS_SIZE_ML: u32 = 250;
    /// Water reminder window start (hour of day, 24h clock)
    pub const REMINDER_START_HOUR: u8 = 9;
    /// Water reminder window end (hour of day, 24h clock)
    pub const REMINDER_END_HOUR: u8 = 21;
    /// Water reminder interval (minutes)
    pub const REMINDER_INTERVAL_MINUTES: u16 = 60;

    /// Catalog page size for list views
    pub const ITEMS_PER_PAGE: u32 = 20;
}

/// Letter-grade thresholds for the daily nutrition score
///
/// The score is the unweighted mean of the four nutrient ratios
/// (actual / goal). Thresholds are checked in descending order; the first
/// one the score meets wins. Ratios are intentionally uncapped above 1.0,
/// so a day far over its goals can still grade A+ (the perfect-week
/// achievement depends on this behavior).
pub mod grade_thresholds {
    /// Minimum score for A+
    pub const A_PLUS: f64 = 0.95;
    /// Minimum score for A
    pub const A: f64 = 0.90;
    /// Minimum score for A-
    pub const A_MINUS: f64 = 0.85;
    /// Minimum score for B+
    pub const B_PLUS: f64 = 0.80;
    /// Minimum score for B
    pub const B: f64 = 0.75;
    /// Minimum score for B-
    pub const B_MINUS: f64 = 0.70;
    /// Minimum score for C+
    pub const C_PLUS: f64 = 0.60;
    /// Minimum score for C
    pub const C: f64 = 0.50;
    /// Minimum score for C-
    pub const C_MINUS: f64 = 0.40;
    /// Minimum score for D; anything below grades F
    pub const D: f64 = 0.20;
}

/// Achievement evaluation parameters
pub mod achievements {
    /// Rolling evaluation window: today plus the six preceding days
    pub const WINDOW_DAYS: u32 = 7;

    /// Goal-consistency tolerance: each nutrient total must fall within
    /// [1 - TOLERANCE, 1 + TOLERANCE] of its goal, bounds inclusive
    pub const CONSISTENCY_TOLERANCE: f64 = 0.10;

    /// Badge id: at least one diary item on every day of the window
    pub const STREAK_WEEK: &str = "streak_week";
    /// Badge id: every nutrient within tolerance on every day of the window
    pub const CONSISTENT_WEEK: &str = "consistent_week";
    /// Badge id: grade A+ on every day of the window
    pub const PERFECT_WEEK: &str = "perfect_week";
    /// Badge id: today's water intake reached the configured target
    pub const WATER_GOAL: &str = "water_goal";
}

/// Hard limits guarding obviously corrupt input
pub mod limits {
    /// Upper bound on a single logged portion (grams)
    pub const MAX_PORTION_GRAMS: f64 = 5000.0;
    /// Upper bound on a single water addition (ml)
    pub const MAX_WATER_ADD_ML: u32 = 5000;
}
