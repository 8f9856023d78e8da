// === Module Header (agents-tooling) START ===
// header: Parsed by scripts/check_module_headers.sh for purpose/role presence; keep keys on single-line entries.
// purpose: Validate a board configuration and resolve status ids to column ids
// role: reconstruction/column mapper
// inputs: BoardConfig
// outputs: ColumnMap (immutable; shared across concurrent per-issue reconstructions)
// invariants:
// - column ids are exactly 0..n, so a column id is a valid slot index
// - each status id maps to at most one column
// errors: BoardError for empty boards, gaps or duplicates in column ids, and doubly-mapped statuses
// tie_breakers: contracts > orchestration > correctness > performance > minimal_diffs
// === Module Header END ===

use std::collections::HashMap;

use crate::error::BoardError;
use crate::model::{BoardConfig, ColumnId, StatusId};

#[derive(Debug, Clone)]
pub struct ColumnMap {
  /// Column names in configured order, paired with their ids.
  order: Vec<(ColumnId, String)>,
  status_to_column: HashMap<StatusId, ColumnId>,
}

impl ColumnMap {
  pub fn from_config(config: &BoardConfig) -> Result<Self, BoardError> {
    if config.columns.is_empty() {
      return Err(BoardError::EmptyBoard);
    }

    let n = config.columns.len();
    let mut seen = vec![false; n];
    let mut ids: Vec<ColumnId> = config.columns.iter().map(|c| c.id).collect();
    for &id in &ids {
      if id >= n {
        ids.sort_unstable();
        return Err(BoardError::NonContiguousColumns { expected_len: n, found: ids });
      }
      if seen[id] {
        return Err(BoardError::DuplicateColumn(id));
      }
      seen[id] = true;
    }

    let mut status_to_column = HashMap::new();
    for column in &config.columns {
      for status in &column.statuses {
        if let Some(first) = status_to_column.insert(status.id, column.id) {
          if first != column.id {
            return Err(BoardError::StatusMappedTwice {
              status: status.id,
              first,
              second: column.id,
            });
          }
        }
      }
    }

    let order = config.columns.iter().map(|c| (c.id, c.name.clone())).collect();

    Ok(Self { order, status_to_column })
  }

  pub fn column_of(&self, status: StatusId) -> Option<ColumnId> {
    self.status_to_column.get(&status).copied()
  }

  pub fn len(&self) -> usize {
    self.order.len()
  }

  pub fn is_empty(&self) -> bool {
    self.order.is_empty()
  }

  /// Columns in the order the board lists them.
  pub fn columns(&self) -> impl Iterator<Item = (ColumnId, &str)> {
    self.order.iter().map(|(id, name)| (*id, name.as_str()))
  }
}
