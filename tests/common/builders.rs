use chrono::{Days, NaiveDate, Utc};
use serde_json::json;

/// Minimal valid task payload.
pub fn task_json(name: &str) -> serde_json::Value {
    json!({
        "name": name,
        "priority": "MEDIUM",
        "status": "TODO"
    })
}

/// Task payload with every field populated.
pub fn full_task_json(
    name: &str,
    description: &str,
    priority: &str,
    status: &str,
    due_date: NaiveDate,
) -> serde_json::Value {
    json!({
        "name": name,
        "description": description,
        "priority": priority,
        "status": status,
        "dueDate": due_date.to_string()
    })
}

/// Minimal valid project payload.
pub fn project_json(name: &str) -> serde_json::Value {
    json!({ "name": name })
}

pub fn today() -> NaiveDate {
    Utc::now().date_naive()
}

pub fn days_from_now(days: u64) -> NaiveDate {
    today() + Days::new(days)
}
