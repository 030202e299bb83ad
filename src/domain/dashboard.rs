use crate::domain::task::TaskStatus;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Per-status item totals served by the status statistics endpoint
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE", default)]
pub struct StatusTotals {
    pub backlog: u64,
    pub pending: u64,
    pub in_progress: u64,
    pub completed: u64,
}

impl StatusTotals {
    pub fn get(&self, status: TaskStatus) -> u64 {
        match status {
            TaskStatus::Backlog => self.backlog,
            TaskStatus::Pending => self.pending,
            TaskStatus::InProgress => self.in_progress,
            TaskStatus::Completed => self.completed,
        }
    }

    pub fn total(&self) -> u64 {
        self.backlog + self.pending + self.in_progress + self.completed
    }
}

/// Workload for one date, broken down by status
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WorkloadEntry {
    #[serde(rename = "_id")]
    pub date: String,
    pub total: u64,
    pub backlog: u64,
    pub pending: u64,
    pub in_progress: u64,
    pub completed: u64,
}

impl WorkloadEntry {
    pub fn count(&self, status: TaskStatus) -> u64 {
        match status {
            TaskStatus::Backlog => self.backlog,
            TaskStatus::Pending => self.pending,
            TaskStatus::InProgress => self.in_progress,
            TaskStatus::Completed => self.completed,
        }
    }

    pub fn caption(&self) -> String {
        format!("{} total", self.total)
    }
}

/// A labeled count card
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusCard {
    pub status: TaskStatus,
    pub label: &'static str,
    pub count: u64,
    pub color: &'static str,
}

/// One bar series of the workload chart
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BarSeries {
    pub status: TaskStatus,
    pub label: &'static str,
    pub data: Vec<u64>,
}

/// Everything the dashboard page shows, derived from the two statistics
/// responses.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DashboardView {
    pub totals: StatusTotals,
    pub workload: Vec<WorkloadEntry>,
}

impl DashboardView {
    pub const TITLE: &'static str = "Main Status Board";
    pub const WORKLOAD_TITLE: &'static str = "Dates by workload";

    pub fn new(totals: StatusTotals, workload: Vec<WorkloadEntry>) -> Self {
        Self { totals, workload }
    }

    /// One card per status in board order
    pub fn status_cards(&self) -> Vec<StatusCard> {
        TaskStatus::ALL
            .into_iter()
            .map(|status| StatusCard {
                status,
                label: status.display_name(),
                count: self.totals.get(status),
                color: status.badge_color(),
            })
            .collect()
    }

    /// X axis of the workload chart
    pub fn chart_dates(&self) -> Vec<&str> {
        self.workload.iter().map(|e| e.date.as_str()).collect()
    }

    /// Stacked series for the workload chart, one per status
    pub fn chart_series(&self) -> Vec<BarSeries> {
        TaskStatus::ALL
            .into_iter()
            .map(|status| BarSeries {
                status,
                label: status.display_name(),
                data: self.workload.iter().map(|e| e.count(status)).collect(),
            })
            .collect()
    }
}

impl fmt::Display for DashboardView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", Self::TITLE)?;
        for card in self.status_cards() {
            writeln!(f, "{}", card.label)?;
            writeln!(f, "{}", card.count)?;
        }
        writeln!(f, "{}", Self::WORKLOAD_TITLE)?;
        for entry in &self.workload {
            writeln!(f, "{}", entry.date)?;
            writeln!(f, "{}", entry.caption())?;
        }
        Ok(())
    }
}
