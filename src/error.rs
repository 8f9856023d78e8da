use chrono::{DateTime, Utc};
use thiserror::Error;

use crate::model::{ColumnId, StatusId};

/// Failure confined to a single issue's reconstruction.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum HistoryError {
  #[error(
    "inconsistent status history at {at}: transition leaves status {found} but the issue was in status {expected}"
  )]
  InconsistentHistory {
    expected: StatusId,
    found: StatusId,
    at: DateTime<Utc>,
  },
}

/// Board configuration problems; these are shared by every issue and abort the batch.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum BoardError {
  #[error("board has no columns")]
  EmptyBoard,

  #[error("column ids must be exactly 0..{expected_len}; found {found:?}")]
  NonContiguousColumns { expected_len: usize, found: Vec<ColumnId> },

  #[error("column id {0} is configured more than once")]
  DuplicateColumn(ColumnId),

  #[error("status {status} is mapped to both column {first} and column {second}")]
  StatusMappedTwice {
    status: StatusId,
    first: ColumnId,
    second: ColumnId,
  },
}

/// Raw input payloads that could not be turned into the model.
#[derive(Debug, Error)]
pub enum IngestError {
  #[error("missing field '{field}' in {context}")]
  MissingField { field: String, context: String },

  #[error("invalid timestamp '{value}' in {context}")]
  InvalidTimestamp { value: String, context: String },

  #[error("invalid status id '{value}' in {context}")]
  InvalidStatusId { value: String, context: String },

  #[error(transparent)]
  Json(#[from] serde_json::Error),
}
