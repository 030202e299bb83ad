pub mod board;
pub mod dashboard;
pub mod task;

pub use board::{BoardState, DragEffect, DragLocation, DragResult, StatusUpdate};
pub use dashboard::{BarSeries, DashboardView, StatusCard, StatusTotals, WorkloadEntry};
pub use task::{StatusLabel, TaskId, TaskItem, TaskStatus};
