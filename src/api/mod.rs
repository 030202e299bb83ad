use crate::{
    domain::{StatusTotals, TaskId, TaskItem, TaskStatus, WorkloadEntry},
    error::Result,
};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

#[cfg(feature = "http-api")]
pub mod http;
pub mod memory;

/// Backend serving task items and dashboard statistics
#[async_trait]
pub trait TodoApi: Send + Sync {
    /// Fetches one page of task items
    async fn list_todos(&self, page_size: u32) -> Result<Vec<TaskItem>>;

    /// Persists a new status for a task item
    async fn update_status(&self, id: &TaskId, status: TaskStatus) -> Result<()>;

    /// Fetches per-status totals
    async fn status_totals(&self) -> Result<StatusTotals>;

    /// Fetches the per-date workload breakdown
    async fn workload(&self) -> Result<Vec<WorkloadEntry>>;
}

#[async_trait]
impl<T: TodoApi + ?Sized> TodoApi for std::sync::Arc<T> {
    async fn list_todos(&self, page_size: u32) -> Result<Vec<TaskItem>> {
        (**self).list_todos(page_size).await
    }

    async fn update_status(&self, id: &TaskId, status: TaskStatus) -> Result<()> {
        (**self).update_status(id, status).await
    }

    async fn status_totals(&self) -> Result<StatusTotals> {
        (**self).status_totals().await
    }

    async fn workload(&self) -> Result<Vec<WorkloadEntry>> {
        (**self).workload().await
    }
}

/// Envelope of a paginated `/todos/` response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TodoPage {
    pub items: Vec<TaskItem>,
}

/// Body of a status update request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusPatch {
    pub status: TaskStatus,
}
