//! Board state manager: keeps the local board in sync with a `TodoApi`.

use crate::{
    api::TodoApi,
    config::ApiConfig,
    domain::{BoardState, DashboardView, DragEffect, DragResult, StatusUpdate},
};

/// What handling a drag-end event did
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DragOutcome {
    /// Cancelled or invalid drag; state unchanged
    Ignored,
    /// Reordered within one column; nothing persisted
    Reordered,
    /// Moved across columns and persisted
    Moved(StatusUpdate),
    /// Persisting the move failed and the board was re-fetched
    Reverted(StatusUpdate),
}

/// Owns the board state and applies fetches and drags to it.
///
/// All mutation goes through `&mut self`, so events are handled one at a
/// time.
pub struct BoardManager<A: TodoApi> {
    api: A,
    page_size: u32,
    state: BoardState,
}

impl<A: TodoApi> BoardManager<A> {
    /// Creates a manager with an empty board
    pub fn new(api: A) -> Self {
        Self {
            api,
            page_size: ApiConfig::DEFAULT_PAGE_SIZE,
            state: BoardState::new(),
        }
    }

    pub fn with_page_size(mut self, page_size: u32) -> Self {
        self.page_size = page_size;
        self
    }

    pub fn state(&self) -> &BoardState {
        &self.state
    }

    pub fn api(&self) -> &A {
        &self.api
    }

    /// Fetches all items and replaces the board with their partition.
    ///
    /// On failure the error is logged and the current board is kept.
    /// Returns whether the board was replaced.
    pub async fn refresh(&mut self) -> bool {
        match self.api.list_todos(self.page_size).await {
            Ok(items) => {
                self.state = BoardState::partition(items);
                tracing::debug!(items = self.state.len(), "board refreshed");
                true
            }
            Err(e) => {
                tracing::error!(error = %e, "failed to fetch todos, keeping current board");
                false
            }
        }
    }

    /// Applies a drag to local state only (the optimistic half of a move).
    ///
    /// Returns `None` when the drag was rejected. A `DragEffect::Moved`
    /// carries the status update to hand to [`BoardManager::persist`].
    pub fn apply_drag(&mut self, drag: &DragResult) -> Option<DragEffect> {
        match self.state.apply_drag(drag) {
            Ok(effect) => Some(effect),
            Err(e) => {
                tracing::warn!(error = %e, "ignoring drag");
                None
            }
        }
    }

    /// Persists a status update, re-fetching the whole board if it fails.
    ///
    /// Returns whether the update was persisted.
    pub async fn persist(&mut self, update: &StatusUpdate) -> bool {
        match self.api.update_status(&update.id, update.status).await {
            Ok(()) => {
                tracing::info!(id = %update.id, status = %update.status, "task moved");
                true
            }
            Err(e) => {
                tracing::error!(
                    id = %update.id,
                    status = %update.status,
                    error = %e,
                    "failed to update status, reloading board"
                );
                self.refresh().await;
                false
            }
        }
    }

    /// Handles a drag-end event: optimistic local update, then persistence
    /// for cross-column moves.
    pub async fn handle_drag_end(&mut self, drag: DragResult) -> DragOutcome {
        match self.apply_drag(&drag) {
            None | Some(DragEffect::Unchanged) => DragOutcome::Ignored,
            Some(DragEffect::Reordered) => DragOutcome::Reordered,
            Some(DragEffect::Moved(update)) => {
                if self.persist(&update).await {
                    DragOutcome::Moved(update)
                } else {
                    DragOutcome::Reverted(update)
                }
            }
        }
    }
}

/// Fetches both dashboard statistics.
///
/// Each request fails independently: a failed one is logged and its part
/// of the view stays empty.
pub async fn load_dashboard<A: TodoApi + ?Sized>(api: &A) -> DashboardView {
    let totals = api.status_totals().await.unwrap_or_else(|e| {
        tracing::error!(error = %e, "failed to fetch status totals");
        Default::default()
    });
    let workload = api.workload().await.unwrap_or_else(|e| {
        tracing::error!(error = %e, "failed to fetch workload");
        Vec::new()
    });
    DashboardView::new(totals, workload)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::memory::InMemoryTodoApi;
    use crate::domain::{DragLocation, TaskItem, TaskStatus};

    #[tokio::test]
    async fn test_new_manager_starts_empty() {
        let manager = BoardManager::new(InMemoryTodoApi::new(vec![TaskItem::new(
            "1",
            "A",
            TaskStatus::Pending,
        )]));
        assert!(manager.state().is_empty());
        assert_eq!(manager.state().columns().count(), 4);
    }

    #[tokio::test]
    async fn test_page_size_is_forwarded() {
        let items = (0..5)
            .map(|n| TaskItem::new(n.to_string().as_str(), "T", TaskStatus::Backlog))
            .collect();
        let mut manager = BoardManager::new(InMemoryTodoApi::new(items)).with_page_size(3);

        assert!(manager.refresh().await);
        assert_eq!(manager.state().len(), 3);
    }

    #[tokio::test]
    async fn test_invalid_drag_is_ignored() {
        let mut manager = BoardManager::new(InMemoryTodoApi::new(vec![TaskItem::new(
            "1",
            "A",
            TaskStatus::Pending,
        )]));
        manager.refresh().await;

        let outcome = manager
            .handle_drag_end(DragResult::new(
                DragLocation::new(TaskStatus::Backlog, 0),
                Some(DragLocation::new(TaskStatus::Pending, 0)),
            ))
            .await;

        assert_eq!(outcome, DragOutcome::Ignored);
        assert!(manager.api().recorded_updates().await.is_empty());
    }
}
