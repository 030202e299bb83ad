use crate::domain::task::{StatusLabel, TaskId, TaskItem, TaskStatus};
use crate::error::{BoardError, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A position inside a column, as reported by a drag-and-drop layer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DragLocation {
    pub column: TaskStatus,
    pub index: usize,
}

impl DragLocation {
    pub fn new(column: TaskStatus, index: usize) -> Self {
        Self { column, index }
    }
}

/// The end of a drag gesture. `destination` is `None` when the item was
/// dropped outside every column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DragResult {
    pub source: DragLocation,
    pub destination: Option<DragLocation>,
}

impl DragResult {
    pub fn new(source: DragLocation, destination: Option<DragLocation>) -> Self {
        Self {
            source,
            destination,
        }
    }

    pub fn cancelled(source: DragLocation) -> Self {
        Self::new(source, None)
    }
}

/// Status change that has been applied locally and still needs persisting
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusUpdate {
    pub id: TaskId,
    pub status: TaskStatus,
}

/// Local effect of applying a drag to the board
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DragEffect {
    /// No destination; nothing changed
    Unchanged,
    /// Order changed within one column; order is client-local
    Reordered,
    /// Item moved to another column and its status now needs persisting
    Moved(StatusUpdate),
}

/// Board state: every status column in board order, each holding its items
/// in on-screen order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardState {
    columns: BTreeMap<TaskStatus, Vec<TaskItem>>,
}

impl BoardState {
    /// Creates a board with every column present and empty
    pub fn new() -> Self {
        Self {
            columns: TaskStatus::ALL
                .into_iter()
                .map(|status| (status, Vec::new()))
                .collect(),
        }
    }

    /// Buckets a flat item list by status.
    ///
    /// Every item lands in exactly one column; items with an unrecognized
    /// status go to the default column. Input order is kept per column.
    pub fn partition(items: impl IntoIterator<Item = TaskItem>) -> Self {
        let mut board = Self::new();
        for item in items {
            if let StatusLabel::Unrecognized(raw) = &item.status {
                tracing::warn!(
                    id = %item.id,
                    status = %raw,
                    "unrecognized status, placing item in {}",
                    TaskStatus::DEFAULT
                );
            }
            board.column_mut(item.bucket()).push(item);
        }
        board
    }

    /// Items of one column in display order
    pub fn column(&self, status: TaskStatus) -> &[TaskItem] {
        self.columns.get(&status).map(Vec::as_slice).unwrap_or(&[])
    }

    fn column_mut(&mut self, status: TaskStatus) -> &mut Vec<TaskItem> {
        self.columns.entry(status).or_default()
    }

    /// Iterates `(status, items)` in board order
    pub fn columns(&self) -> impl Iterator<Item = (TaskStatus, &[TaskItem])> {
        self.columns
            .iter()
            .map(|(status, items)| (*status, items.as_slice()))
    }

    /// Number of items in a column
    pub fn count(&self, status: TaskStatus) -> usize {
        self.column(status).len()
    }

    /// Total number of items on the board
    pub fn len(&self) -> usize {
        self.columns.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Finds an item and the column it currently sits in
    pub fn find(&self, id: &TaskId) -> Option<(DragLocation, &TaskItem)> {
        self.columns.iter().find_map(|(status, items)| {
            items
                .iter()
                .position(|item| &item.id == id)
                .map(|index| (DragLocation::new(*status, index), &items[index]))
        })
    }

    /// Applies a finished drag to local state.
    ///
    /// A cross-column move rewrites the item's status to the destination
    /// column and reports the update that must be persisted. The destination
    /// index is clamped to the column length. An out of range source index
    /// leaves the board untouched.
    pub fn apply_drag(&mut self, drag: &DragResult) -> Result<DragEffect> {
        let Some(destination) = drag.destination else {
            return Ok(DragEffect::Unchanged);
        };
        let source = drag.source;

        let source_len = self.count(source.column);
        if source.index >= source_len {
            return Err(BoardError::PositionOutOfRange {
                column: source.column.to_string(),
                index: source.index,
                len: source_len,
            });
        }

        let mut item = self.column_mut(source.column).remove(source.index);

        if source.column == destination.column {
            let column = self.column_mut(source.column);
            let index = destination.index.min(column.len());
            column.insert(index, item);
            return Ok(DragEffect::Reordered);
        }

        item.status = StatusLabel::Known(destination.column);
        let update = StatusUpdate {
            id: item.id.clone(),
            status: destination.column,
        };

        let column = self.column_mut(destination.column);
        let index = destination.index.min(column.len());
        column.insert(index, item);

        Ok(DragEffect::Moved(update))
    }
}

impl Default for BoardState {
    fn default() -> Self {
        Self::new()
    }
}

impl FromIterator<TaskItem> for BoardState {
    fn from_iter<I: IntoIterator<Item = TaskItem>>(iter: I) -> Self {
        Self::partition(iter)
    }
}
