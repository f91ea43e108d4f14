// src/store/mod.rs

use async_trait::async_trait;

use crate::models::{ActivityItem, DashboardSummary, PerformancePoint, ShiftView};

pub mod postgres;

pub use postgres::PgReportStore;

/// Upper bound on `/activities` results.
pub const RECENT_ACTIVITY_LIMIT: i64 = 10;

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("{report} query failed: {source}")]
    Query {
        report: &'static str,
        #[source]
        source: sqlx::Error,
    },
}

impl StoreError {
    pub fn query(report: &'static str) -> impl FnOnce(sqlx::Error) -> Self {
        move |source| StoreError::Query { report, source }
    }
}

/// Read-only access to the dashboard tables.
#[async_trait]
pub trait ReportStore: Send + Sync {
    async fn summary(&self) -> Result<DashboardSummary, StoreError>;

    /// Newest first, at most [`RECENT_ACTIVITY_LIMIT`] items.
    async fn recent_activities(&self) -> Result<Vec<ActivityItem>, StoreError>;

    async fn performance(&self) -> Result<Vec<PerformancePoint>, StoreError>;

    /// Shifts whose employee is missing are left out.
    async fn shifts(&self) -> Result<Vec<ShiftView>, StoreError>;
}
