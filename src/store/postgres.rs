// src/store/postgres.rs

use async_trait::async_trait;
use sqlx::{query_as, query_scalar, Pool, Postgres};

use super::{ReportStore, StoreError, RECENT_ACTIVITY_LIMIT};
use crate::models::{
    ActivityItem, ActivityLog, DashboardSummary, Performance, PerformancePoint, ShiftStatus,
    ShiftView, ShiftWithEmployee, TaskStatus, TimeOffStatus,
};

#[derive(Clone)]
pub struct PgReportStore {
    pool: Pool<Postgres>,
}

impl PgReportStore {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ReportStore for PgReportStore {
    async fn summary(&self) -> Result<DashboardSummary, StoreError> {
        let active_employees = query_scalar::<_, i64>(
            r#"SELECT COUNT(*) FROM employees WHERE is_active = TRUE"#)
            .fetch_one(&self.pool);
        let open_tasks = query_scalar::<_, i64>(
            r#"SELECT COUNT(*) FROM tasks WHERE status = $1"#)
            .bind(TaskStatus::Open.as_str())
            .fetch_one(&self.pool);
        let todays_shifts = query_scalar::<_, i64>(
            r#"SELECT COUNT(*) FROM shifts WHERE status = $1"#)
            .bind(ShiftStatus::Active.as_str())
            .fetch_one(&self.pool);
        let time_off_requests = query_scalar::<_, i64>(
            r#"SELECT COUNT(*) FROM timeoff_requests WHERE status = $1"#)
            .bind(TimeOffStatus::Pending.as_str())
            .fetch_one(&self.pool);

        let (active_employees, open_tasks, todays_shifts, time_off_requests) =
            tokio::try_join!(active_employees, open_tasks, todays_shifts, time_off_requests)
                .map_err(StoreError::query("dashboard summary"))?;

        Ok(DashboardSummary { active_employees, open_tasks, todays_shifts, time_off_requests })
    }

    async fn recent_activities(&self) -> Result<Vec<ActivityItem>, StoreError> {
        let rows = query_as::<_, ActivityLog>(
            r#"SELECT id, description, timestamp
               FROM activity_log
               ORDER BY timestamp DESC, id DESC
               LIMIT $1"#)
            .bind(RECENT_ACTIVITY_LIMIT)
            .fetch_all(&self.pool)
            .await
            .map_err(StoreError::query("recent activities"))?;
        tracing::debug!(rows = rows.len(), "loaded recent activities");
        Ok(rows.into_iter().map(ActivityItem::from).collect())
    }

    async fn performance(&self) -> Result<Vec<PerformancePoint>, StoreError> {
        let rows = query_as::<_, Performance>(
            r#"SELECT id, date, tasks_completed, hours_worked FROM performance ORDER BY id"#)
            .fetch_all(&self.pool)
            .await
            .map_err(StoreError::query("performance"))?;
        tracing::debug!(rows = rows.len(), "loaded performance records");
        Ok(rows.into_iter().map(PerformancePoint::from).collect())
    }

    async fn shifts(&self) -> Result<Vec<ShiftView>, StoreError> {
        let rows = query_as::<_, ShiftWithEmployee>(
            r#"
            SELECT s.id AS shift_id, s.start_time, s.end_time, s.status,
                   e.first_name, e.last_name, e.department
            FROM shifts s
            LEFT JOIN employees e ON e.id = s.employee_id
            ORDER BY s.id
            "#)
            .fetch_all(&self.pool)
            .await
            .map_err(StoreError::query("shifts"))?;

        let total = rows.len();
        let views: Vec<ShiftView> = rows
            .into_iter()
            .filter_map(|row| {
                let shift_id = row.shift_id;
                let view = row.into_view();
                if view.is_none() {
                    tracing::warn!(shift_id, "shift references a missing employee, skipping");
                }
                view
            })
            .collect();
        tracing::debug!(rows = total, returned = views.len(), "loaded shifts");
        Ok(views)
    }
}
