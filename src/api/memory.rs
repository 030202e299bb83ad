use crate::{
    api::TodoApi,
    domain::{StatusLabel, StatusTotals, TaskId, TaskItem, TaskStatus, WorkloadEntry},
    error::{BoardError, Result},
};
use async_trait::async_trait;
use std::collections::BTreeMap;
use tokio::sync::Mutex;

#[derive(Debug, Default)]
struct Inner {
    items: Vec<TaskItem>,
    fail_updates: bool,
    fail_reads: bool,
    updates: Vec<(TaskId, TaskStatus)>,
}

/// In-process backend holding items in memory.
///
/// Useful offline and in tests: failures can be switched on per operation
/// kind, and every attempted status update is recorded.
#[derive(Debug, Default)]
pub struct InMemoryTodoApi {
    inner: Mutex<Inner>,
}

impl InMemoryTodoApi {
    pub fn new(items: Vec<TaskItem>) -> Self {
        Self {
            inner: Mutex::new(Inner {
                items,
                ..Inner::default()
            }),
        }
    }

    /// Makes every following status update fail
    pub async fn set_fail_updates(&self, fail: bool) {
        self.inner.lock().await.fail_updates = fail;
    }

    /// Makes every following read fail
    pub async fn set_fail_reads(&self, fail: bool) {
        self.inner.lock().await.fail_reads = fail;
    }

    /// Status updates received so far, including failed ones
    pub async fn recorded_updates(&self) -> Vec<(TaskId, TaskStatus)> {
        self.inner.lock().await.updates.clone()
    }

    /// Current backend copy of the items
    pub async fn items(&self) -> Vec<TaskItem> {
        self.inner.lock().await.items.clone()
    }

    pub async fn insert(&self, item: TaskItem) {
        self.inner.lock().await.items.push(item);
    }
}

fn unavailable(operation: &str) -> BoardError {
    BoardError::Other(format!("backend unavailable: {}", operation))
}

#[async_trait]
impl TodoApi for InMemoryTodoApi {
    async fn list_todos(&self, page_size: u32) -> Result<Vec<TaskItem>> {
        let inner = self.inner.lock().await;
        if inner.fail_reads {
            return Err(unavailable("list todos"));
        }
        Ok(inner
            .items
            .iter()
            .take(page_size as usize)
            .cloned()
            .collect())
    }

    async fn update_status(&self, id: &TaskId, status: TaskStatus) -> Result<()> {
        let mut inner = self.inner.lock().await;
        inner.updates.push((id.clone(), status));
        if inner.fail_updates {
            return Err(unavailable("update status"));
        }

        let item = inner
            .items
            .iter_mut()
            .find(|item| &item.id == id)
            .ok_or_else(|| BoardError::TaskNotFound(id.to_string()))?;
        item.status = StatusLabel::Known(status);

        Ok(())
    }

    async fn status_totals(&self) -> Result<StatusTotals> {
        let inner = self.inner.lock().await;
        if inner.fail_reads {
            return Err(unavailable("status totals"));
        }

        let mut totals = StatusTotals::default();
        for item in &inner.items {
            match item.bucket() {
                TaskStatus::Backlog => totals.backlog += 1,
                TaskStatus::Pending => totals.pending += 1,
                TaskStatus::InProgress => totals.in_progress += 1,
                TaskStatus::Completed => totals.completed += 1,
            }
        }
        Ok(totals)
    }

    async fn workload(&self) -> Result<Vec<WorkloadEntry>> {
        let inner = self.inner.lock().await;
        if inner.fail_reads {
            return Err(unavailable("workload"));
        }

        let mut by_date: BTreeMap<String, WorkloadEntry> = BTreeMap::new();
        for item in &inner.items {
            let Some(due) = item.due_date else {
                continue;
            };
            let date = due.format("%Y-%m-%d").to_string();
            let entry = by_date.entry(date.clone()).or_insert_with(|| WorkloadEntry {
                date,
                ..WorkloadEntry::default()
            });
            entry.total += 1;
            match item.bucket() {
                TaskStatus::Backlog => entry.backlog += 1,
                TaskStatus::Pending => entry.pending += 1,
                TaskStatus::InProgress => entry.in_progress += 1,
                TaskStatus::Completed => entry.completed += 1,
            }
        }

        // Busiest dates first
        let mut entries: Vec<WorkloadEntry> = by_date.into_values().collect();
        entries.sort_by(|a, b| b.total.cmp(&a.total).then_with(|| a.date.cmp(&b.date)));
        Ok(entries)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn seeded() -> InMemoryTodoApi {
        let due = NaiveDate::from_ymd_opt(2026, 1, 15).unwrap();
        InMemoryTodoApi::new(vec![
            TaskItem::new("1", "A", TaskStatus::Pending).with_due_date(due),
            TaskItem::new("2", "B", TaskStatus::Completed).with_due_date(due),
            TaskItem::new("3", "C", TaskStatus::Completed),
        ])
    }

    #[tokio::test]
    async fn test_list_respects_page_size() {
        let api = seeded();
        assert_eq!(api.list_todos(2).await.unwrap().len(), 2);
        assert_eq!(api.list_todos(100).await.unwrap().len(), 3);
    }

    #[tokio::test]
    async fn test_update_status() {
        let api = seeded();
        api.update_status(&TaskId::from("1"), TaskStatus::InProgress)
            .await
            .unwrap();

        let items = api.items().await;
        assert_eq!(items[0].bucket(), TaskStatus::InProgress);
        assert_eq!(
            api.recorded_updates().await,
            vec![(TaskId::from("1"), TaskStatus::InProgress)]
        );
    }

    #[tokio::test]
    async fn test_update_unknown_task() {
        let api = seeded();
        let err = api
            .update_status(&TaskId::from("404"), TaskStatus::Backlog)
            .await
            .unwrap_err();
        assert!(matches!(err, BoardError::TaskNotFound(_)));
    }

    #[tokio::test]
    async fn test_failed_update_leaves_backend_untouched() {
        let api = seeded();
        api.set_fail_updates(true).await;

        assert!(api
            .update_status(&TaskId::from("1"), TaskStatus::Backlog)
            .await
            .is_err());
        assert_eq!(api.items().await[0].bucket(), TaskStatus::Pending);
        assert_eq!(api.recorded_updates().await.len(), 1);
    }

    #[tokio::test]
    async fn test_statistics() {
        let api = seeded();

        let totals = api.status_totals().await.unwrap();
        assert_eq!(totals.pending, 1);
        assert_eq!(totals.completed, 2);

        let workload = api.workload().await.unwrap();
        assert_eq!(workload.len(), 1);
        assert_eq!(workload[0].date, "2026-01-15");
        assert_eq!(workload[0].total, 2);
        assert_eq!(workload[0].completed, 1);
    }

    #[tokio::test]
    async fn test_read_failures() {
        let api = seeded();
        api.set_fail_reads(true).await;

        assert!(api.list_todos(10).await.is_err());
        assert!(api.status_totals().await.is_err());
        assert!(api.workload().await.is_err());
    }
}
