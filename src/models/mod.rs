// src/models/mod.rs

use chrono::{NaiveDateTime, Timelike};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

// ───────────────────────────────────────
// Status values the dashboard counts (stored as text)
// ───────────────────────────────────────
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskStatus {
    Open,
}

impl TaskStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            TaskStatus::Open => "Open",
        }
    }
}

/// Any other stored value counts as not active.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShiftStatus {
    Active,
}

impl ShiftStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            ShiftStatus::Active => "Active",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimeOffStatus {
    Pending,
}

impl TimeOffStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            TimeOffStatus::Pending => "Pending",
        }
    }
}

// ───────────────────────────────────────
// Rows read verbatim
// ───────────────────────────────────────
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Performance {
    pub id: i32,
    pub date: String, // label, e.g. "Mon"
    pub tasks_completed: i32,
    pub hours_worked: i32,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct ActivityLog {
    pub id: i32,
    pub description: String,
    pub timestamp: NaiveDateTime, // UTC, set on insert
}

/// One `shifts` row left-joined to its employee. Employee columns are
/// `None` when the referenced employee no longer exists.
#[derive(Debug, Clone, FromRow)]
pub struct ShiftWithEmployee {
    pub shift_id: i32,
    pub start_time: String,
    pub end_time: String,
    pub status: String,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub department: Option<String>,
}

// ───────────────────────────────────────
// Response DTOs
// ───────────────────────────────────────
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardSummary {
    pub active_employees: i64,
    pub open_tasks: i64,
    pub todays_shifts: i64,
    pub time_off_requests: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActivityItem {
    pub description: String,
    #[serde(serialize_with = "iso_timestamp")]
    pub timestamp: NaiveDateTime,
}

/// `YYYY-MM-DDTHH:MM:SS`, with `.ffffff` appended only when there is a
/// sub-second part.
fn iso_timestamp<S: serde::Serializer>(ts: &NaiveDateTime, s: S) -> Result<S::Ok, S::Error> {
    let fmt = if ts.nanosecond() == 0 {
        "%Y-%m-%dT%H:%M:%S"
    } else {
        "%Y-%m-%dT%H:%M:%S%.6f"
    };
    s.collect_str(&ts.format(fmt))
}

impl From<ActivityLog> for ActivityItem {
    fn from(a: ActivityLog) -> Self {
        Self { description: a.description, timestamp: a.timestamp }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PerformancePoint {
    pub date: String,
    pub tasks_completed: i32,
    pub hours_worked: i32,
}

impl From<Performance> for PerformancePoint {
    fn from(p: Performance) -> Self {
        Self { date: p.date, tasks_completed: p.tasks_completed, hours_worked: p.hours_worked }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShiftView {
    pub employee: String,
    pub department: Option<String>,
    pub shift_time: String,
    pub status: String,
}

impl ShiftWithEmployee {
    /// `None` for an orphaned shift (no matching employee row).
    pub fn into_view(self) -> Option<ShiftView> {
        let (first, last) = (self.first_name?, self.last_name?);
        Some(ShiftView {
            employee: format!("{first} {last}"),
            department: self.department,
            shift_time: format!("{} - {}", self.start_time, self.end_time),
            status: self.status,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn joined(first: Option<&str>, last: Option<&str>) -> ShiftWithEmployee {
        ShiftWithEmployee {
            shift_id: 7,
            start_time: "08:00".into(),
            end_time: "16:00".into(),
            status: "Active".into(),
            first_name: first.map(Into::into),
            last_name: last.map(Into::into),
            department: Some("Ops".into()),
        }
    }

    #[test]
    fn shift_view_formats_name_and_time_range() {
        let view = joined(Some("Ada"), Some("Lovelace")).into_view().unwrap();
        assert_eq!(view.employee, "Ada Lovelace");
        assert_eq!(view.shift_time, "08:00 - 16:00");
        assert_eq!(view.department.as_deref(), Some("Ops"));
        assert_eq!(view.status, "Active");
    }

    #[test]
    fn orphaned_shift_has_no_view() {
        assert!(joined(None, None).into_view().is_none());
    }

    #[test]
    fn summary_serializes_camel_case() {
        let s = DashboardSummary { active_employees: 1, open_tasks: 2, todays_shifts: 3, time_off_requests: 4 };
        let v = serde_json::to_value(&s).unwrap();
        assert_eq!(
            v,
            serde_json::json!({"activeEmployees":1,"openTasks":2,"todaysShifts":3,"timeOffRequests":4})
        );
    }

    #[test]
    fn shift_view_serializes_camel_case() {
        let v = serde_json::to_value(joined(Some("A"), Some("B")).into_view().unwrap()).unwrap();
        assert_eq!(v["shiftTime"], "08:00 - 16:00");
        assert_eq!(v["employee"], "A B");
    }

    #[test]
    fn activity_timestamp_is_iso8601_without_offset() {
        let ts = NaiveDate::from_ymd_opt(2024, 3, 5).unwrap().and_hms_opt(9, 30, 0).unwrap();
        let v = serde_json::to_value(ActivityItem { description: "x".into(), timestamp: ts }).unwrap();
        assert_eq!(v["timestamp"], "2024-03-05T09:30:00");
    }

    #[test]
    fn activity_timestamp_keeps_six_fraction_digits() {
        let ts = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap().and_hms_milli_opt(10, 0, 0, 123).unwrap();
        let v = serde_json::to_value(ActivityItem { description: "a".into(), timestamp: ts }).unwrap();
        assert_eq!(v["timestamp"], "2024-01-01T10:00:00.123000");

        let back: ActivityItem = serde_json::from_value(v).unwrap();
        assert_eq!(back.timestamp, ts);
    }

    #[test]
    fn status_text_matches_stored_values() {
        assert_eq!(TaskStatus::Open.as_str(), "Open");
        assert_eq!(TimeOffStatus::Pending.as_str(), "Pending");
        assert_eq!(ShiftStatus::Active.as_str(), "Active");
    }
}
