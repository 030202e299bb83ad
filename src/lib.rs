//! # Task Board Core
//!
//! Board state and synchronization logic for a status-column task board.
//!
//! Items fetched from a REST backend are bucketed into Backlog, Pending,
//! In Progress and Completed columns. Drags between columns are applied
//! optimistically and persisted; a failed persist reloads the board from the
//! backend. Rendering is left to the embedding UI.

pub mod api;
pub mod config;
pub mod domain;
pub mod error;
pub mod manager;

// Re-export commonly used types
#[cfg(feature = "http-api")]
pub use api::http::HttpTodoApi;
pub use api::{memory::InMemoryTodoApi, TodoApi};
pub use config::ApiConfig;
pub use domain::{
    board::{BoardState, DragEffect, DragLocation, DragResult, StatusUpdate},
    dashboard::{DashboardView, StatusTotals, WorkloadEntry},
    task::{StatusLabel, TaskId, TaskItem, TaskStatus},
};
pub use error::{BoardError, Result};
pub use manager::{load_dashboard, BoardManager, DragOutcome};
