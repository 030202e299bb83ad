use async_trait::async_trait;
use taskboard_core::{
    load_dashboard, BoardError, DashboardView, Result, StatusTotals, TaskId, TaskItem,
    TaskStatus, TodoApi, WorkloadEntry,
};

/// Serves canned statistics responses
struct CannedStats {
    totals: Option<StatusTotals>,
    workload: Option<Vec<WorkloadEntry>>,
}

#[async_trait]
impl TodoApi for CannedStats {
    async fn list_todos(&self, _page_size: u32) -> Result<Vec<TaskItem>> {
        Ok(Vec::new())
    }

    async fn update_status(&self, id: &TaskId, _status: TaskStatus) -> Result<()> {
        Err(BoardError::TaskNotFound(id.to_string()))
    }

    async fn status_totals(&self) -> Result<StatusTotals> {
        self.totals
            .ok_or_else(|| BoardError::Other("stats offline".to_string()))
    }

    async fn workload(&self) -> Result<Vec<WorkloadEntry>> {
        self.workload
            .clone()
            .ok_or_else(|| BoardError::Other("stats offline".to_string()))
    }
}

fn status_data() -> StatusTotals {
    serde_json::from_value(serde_json::json!({
        "BACKLOG": 5,
        "PENDING": 3,
        "IN_PROGRESS": 2,
        "COMPLETED": 10,
    }))
    .unwrap()
}

fn workload_data() -> Vec<WorkloadEntry> {
    serde_json::from_value(serde_json::json!([{
        "_id": "2026-01-15",
        "total": 20,
        "backlog": 5,
        "pending": 3,
        "in_progress": 2,
        "completed": 10,
    }]))
    .unwrap()
}

#[tokio::test]
async fn test_renders_title_and_status_cards() {
    let api = CannedStats {
        totals: Some(status_data()),
        workload: Some(workload_data()),
    };

    let view = load_dashboard(&api).await;
    let rendered = view.to_string();

    assert!(rendered.starts_with(DashboardView::TITLE));
    let cards: Vec<(&str, u64)> = view
        .status_cards()
        .iter()
        .map(|card| (card.label, card.count))
        .collect();
    assert_eq!(
        cards,
        vec![
            ("Backlog", 5),
            ("Pending", 3),
            ("In progress", 2),
            ("Completed", 10),
        ]
    );
    for (label, count) in cards {
        assert!(rendered.contains(&format!("{}\n{}\n", label, count)));
    }
}

#[tokio::test]
async fn test_renders_workload_statistics() {
    let api = CannedStats {
        totals: Some(status_data()),
        workload: Some(workload_data()),
    };

    let view = load_dashboard(&api).await;
    let rendered = view.to_string();

    assert!(rendered.contains("Dates by workload"));
    assert!(rendered.contains("20 total"));
    assert_eq!(view.chart_dates(), vec!["2026-01-15"]);
    assert_eq!(view.chart_series().len(), 4);
}

#[tokio::test]
async fn test_failed_requests_leave_parts_empty() {
    let api = CannedStats {
        totals: None,
        workload: Some(workload_data()),
    };

    let view = load_dashboard(&api).await;
    assert_eq!(view.totals, StatusTotals::default());
    assert_eq!(view.workload.len(), 1);

    let api = CannedStats {
        totals: Some(status_data()),
        workload: None,
    };

    let view = load_dashboard(&api).await;
    assert_eq!(view.totals.completed, 10);
    assert!(view.workload.is_empty());
}
