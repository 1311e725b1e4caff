// ABOUTME: Platform capability abstractions - notifications, barcode scanning, detection
// ABOUTME: Narrow traits with local default implementations; delivery stays out of scope

//! Platform capabilities
//!
//! The engine consumes a few platform services through narrow traits so the
//! core never depends on how a given platform delivers them. The default
//! implementations here are local stand-ins: the notifier logs what it would
//! schedule, the scanner reports that no scan is available.

use crate::models::Settings;
use anyhow::Result;
use async_trait::async_trait;
use chrono::{DateTime, NaiveTime, Utc};
use tracing::info;

/// Runtime platform classification
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
    /// Native desktop/mobile build
    Native,
    /// Browser (wasm) build
    Web,
}

impl Platform {
    /// Detect the platform the binary was compiled for
    #[must_use]
    pub fn detect() -> Self {
        if cfg!(target_arch = "wasm32") {
            Self::Web
        } else {
            Self::Native
        }
    }
}

/// Local-notification scheduling capability
#[async_trait]
pub trait NotificationScheduler: Send + Sync {
    /// Whether the platform granted notification permission
    async fn has_permission(&self) -> bool;

    /// Schedule a notification at a point in time
    async fn schedule(&self, at: DateTime<Utc>, title: &str, body: &str) -> Result<()>;
}

/// Notifier that records schedules in the log instead of delivering them
#[derive(Debug, Clone, Copy, Default)]
pub struct LogNotifier;

#[async_trait]
impl NotificationScheduler for LogNotifier {
    async fn has_permission(&self) -> bool {
        true
    }

    async fn schedule(&self, at: DateTime<Utc>, title: &str, body: &str) -> Result<()> {
        info!(%at, title, body, "notification scheduled");
        Ok(())
    }
}

/// Barcode scanning capability
#[async_trait]
pub trait BarcodeScanner: Send + Sync {
    /// Run a scan, returning the decoded string when one was captured
    async fn scan(&self) -> Result<Option<String>>;
}

/// Scanner for platforms without a camera; never captures anything
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopScanner;

#[async_trait]
impl BarcodeScanner for NoopScanner {
    async fn scan(&self) -> Result<Option<String>> {
        Ok(None)
    }
}

/// Compute the reminder times inside the configured water reminder window
///
/// Slots start at the window's start hour and step by the interval while
/// they stay at or before the end hour. Disabled reminders, a zero
/// interval, or an inverted window produce no slots.
#[must_use]
pub fn water_reminder_slots(settings: &Settings) -> Vec<NaiveTime> {
    let reminder = &settings.water_reminder;
    if !reminder.enabled
        || reminder.interval_minutes == 0
        || reminder.start_hour > reminder.end_hour
    {
        return Vec::new();
    }

    let mut slots = Vec::new();
    let mut minutes = u32::from(reminder.start_hour) * 60;
    let end_minutes = u32::from(reminder.end_hour) * 60;
    while minutes <= end_minutes {
        if let Some(time) = NaiveTime::from_hms_opt(minutes / 60, minutes % 60, 0) {
            slots.push(time);
        }
        minutes += u32::from(reminder.interval_minutes);
    }
    slots
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reminder_slots_cover_window_inclusive() {
        let mut settings = Settings::default();
        settings.water_reminder.enabled = true;
        settings.water_reminder.start_hour = 9;
        settings.water_reminder.end_hour = 12;
        settings.water_reminder.interval_minutes = 90;

        let slots = water_reminder_slots(&settings);
        let rendered: Vec<String> = slots.iter().map(|t| t.format("%H:%M").to_string()).collect();
        assert_eq!(rendered, vec!["09:00", "10:30", "12:00"]);
    }

    #[test]
    fn test_disabled_reminders_produce_no_slots() {
        let settings = Settings::default();
        assert!(!settings.water_reminder.enabled);
        assert!(water_reminder_slots(&settings).is_empty());
    }

    #[test]
    fn test_inverted_window_produces_no_slots() {
        let mut settings = Settings::default();
        settings.water_reminder.enabled = true;
        settings.water_reminder.start_hour = 20;
        settings.water_reminder.end_hour = 8;
        assert!(water_reminder_slots(&settings).is_empty());
    }
}
