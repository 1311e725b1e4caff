// ABOUTME: Insight commands - badge evaluation, trailing statistics, reminder slots
// ABOUTME: Read-mostly views over the snapshot; badge checks mutate on unlock

use chrono::{Local, Utc};
use macrolog::platform::{water_reminder_slots, LogNotifier, NotificationScheduler};
use macrolog::state::StateStore;

/// Show badges, optionally evaluating the achievement checks first
pub async fn badges(store: &StateStore, check: bool) {
    if check {
        let today = Local::now().date_naive();
        let unlocked = store.evaluate_achievements(today, Utc::now()).await;
        for id in &unlocked {
            println!("unlocked: {id}");
        }
    }
    for badge in store.badges().await {
        let marker = if badge.unlocked { "[x]" } else { "[ ]" };
        let stamp = badge
            .unlocked_at
            .map(|at| format!("  ({})", at.format("%Y-%m-%d %H:%M")))
            .unwrap_or_default();
        println!("{marker} {}  - {}{stamp}", badge.name, badge.description);
    }
}

/// Show the trailing daily series and window summary
pub async fn stats(store: &StateStore, days: u32) {
    let today = Local::now().date_naive();
    let series = store.series(today, days).await;
    for point in &series {
        println!(
            "{}  {:>4.0} kcal  P {:>5.1}  C {:>5.1}  F {:>5.1}  {}",
            point.date,
            point.totals.calories,
            point.totals.protein,
            point.totals.carbs,
            point.totals.fat,
            point.grade
        );
    }

    let summary = store.summary(today, days).await;
    println!(
        "{} of {} days logged; averages {:.0} kcal  P {:.1}  C {:.1}  F {:.1}",
        summary.days_logged,
        summary.days,
        summary.avg_calories,
        summary.avg_protein,
        summary.avg_carbs,
        summary.avg_fat
    );
    let grades: Vec<String> = summary
        .grade_counts
        .iter()
        .map(|(grade, count)| format!("{grade}:{count}"))
        .collect();
    println!("grades: {}", grades.join("  "));
}

/// Show today's reminder slots and hand them to the notification scheduler
pub async fn reminders(store: &StateStore) {
    let settings = store.settings().await;
    let slots = water_reminder_slots(&settings);
    if slots.is_empty() {
        println!("water reminders are disabled");
        return;
    }

    let notifier = LogNotifier;
    let today = Local::now().date_naive();
    for slot in &slots {
        println!("reminder at {}", slot.format("%H:%M"));
        let at = today
            .and_time(*slot)
            .and_local_timezone(Local)
            .earliest()
            .map(|local| local.with_timezone(&Utc));
        if let Some(at) = at {
            if notifier
                .schedule(at, "Time to drink water", "Stay on track with your water goal")
                .await
                .is_err()
            {
                println!("  (could not schedule)");
            }
        }
    }
}
