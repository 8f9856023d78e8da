use chrono::Duration;

use crate::board::ColumnMap;
use crate::model::{ColumnId, StatusSegment};

/// Time an issue spent per column, indexed by column id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnTimes {
  /// `None` for columns the issue never visited. The open segment marks its
  /// column as visited without adding time.
  pub durations: Vec<Option<Duration>>,
  pub max_reached: Option<ColumnId>,
  /// Names of statuses the issue passed through that no column maps, first occurrence order.
  pub unmapped: Vec<String>,
}

pub fn aggregate_column_times(issue_key: &str, segments: &[StatusSegment], columns: &ColumnMap) -> ColumnTimes {
  let mut durations: Vec<Option<Duration>> = vec![None; columns.len()];
  let mut max_reached: Option<ColumnId> = None;
  let mut unmapped: Vec<String> = Vec::new();

  for segment in segments {
    match columns.column_of(segment.status.id) {
      Some(column) => {
        let slot = &mut durations[column];
        *slot = Some(slot.unwrap_or_else(Duration::zero) + segment.elapsed());
        max_reached = Some(max_reached.map_or(column, |m| m.max(column)));
      }
      None => {
        tracing::info!(
          issue = issue_key,
          status = %segment.status.name,
          status_id = segment.status.id,
          "status not associated with any column"
        );
        if !unmapped.contains(&segment.status.name) {
          unmapped.push(segment.status.name.clone());
        }
      }
    }
  }

  ColumnTimes { durations, max_reached, unmapped }
}
