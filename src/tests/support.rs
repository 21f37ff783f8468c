//! Shared builders for unit tests.

use crate::domain::{Priority, Task};
use chrono::{DateTime, TimeZone, Utc};
use mockable::DefaultClock;

/// A due date on the given day-of-March 2026 at the given hour.
pub fn due(day: u32, hour: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 3, day, hour, 0, 0)
        .single()
        .expect("valid timestamp")
}

/// Builds an active task with the given scheduling attributes.
pub fn task(title: &str, category: &str, priority: u8, due_date: DateTime<Utc>) -> Task {
    Task::new(
        title,
        category,
        Priority::new(priority).expect("valid priority"),
        due_date,
        &DefaultClock,
    )
    .expect("valid task")
}

/// Builds an active task carrying the given tags.
pub fn tagged_task(title: &str, tags: &[&str]) -> Task {
    task(title, "Personal", 3, due(10, 12)).with_tags(tags.iter().map(|tag| (*tag).to_owned()))
}
