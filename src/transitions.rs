// === Module Header (agents-tooling) START ===
// header: Parsed by scripts/check_module_headers.sh for purpose/role presence; keep keys on single-line entries.
// purpose: Derive one synthetic entry date per board column from aggregated column times
// role: reconstruction/transition log
// inputs: StatusSegment[], ColumnTimes, ColumnMap, current status column, BoundaryPolicy, creation instant
// outputs: ColumnTransitionLog (one optional date per column)
// invariants:
// - log length equals the number of board columns
// - non-null dates are non-decreasing by column id
// - the anchor is the earliest segment entry whose column is within the boundary (ties keep the first seen)
// tie_breakers: contracts > orchestration > correctness > performance > minimal_diffs
// === Module Header END ===

use chrono::{DateTime, Duration, Utc};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::aggregate::ColumnTimes;
use crate::board::ColumnMap;
use crate::model::{ColumnId, StatusSegment};

/// Which column bounds the forward walk.
#[derive(Copy, Clone, Eq, PartialEq, Debug, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "kebab-case")]
#[value(rename_all = "kebab-case")]
pub enum BoundaryPolicy {
  /// Column of the issue's current status.
  #[default]
  CurrentColumn,
  /// Furthest column the issue ever reached.
  MaxColumn,
}

impl BoundaryPolicy {
  pub fn label(self) -> &'static str {
    match self {
      BoundaryPolicy::CurrentColumn => "current-column",
      BoundaryPolicy::MaxColumn => "max-column",
    }
  }
}

pub type ColumnTransitionLog = Vec<Option<DateTime<Utc>>>;

/// Resolve the boundary column. An issue whose current status is off the board
/// falls back to the furthest column it reached.
pub fn boundary_column(
  policy: BoundaryPolicy,
  current_column: Option<ColumnId>,
  max_reached: Option<ColumnId>,
) -> Option<ColumnId> {
  match policy {
    BoundaryPolicy::MaxColumn => max_reached,
    BoundaryPolicy::CurrentColumn => current_column.or(max_reached),
  }
}

/// Earliest `(column, date_in)` among segments whose column is at or before
/// `boundary`. Strictly earlier dates replace the running minimum.
pub fn first_entry(
  segments: &[StatusSegment],
  columns: &ColumnMap,
  boundary: ColumnId,
) -> Option<(ColumnId, DateTime<Utc>)> {
  segments
    .iter()
    .filter_map(|s| columns.column_of(s.status.id).map(|c| (c, s.date_in)))
    .filter(|&(c, _)| c <= boundary)
    .fold(None, |best, (c, at)| match best {
      Some((_, best_at)) if best_at <= at => best,
      _ => Some((c, at)),
    })
}

pub struct ReconstructInput<'a> {
  pub segments: &'a [StatusSegment],
  pub times: &'a ColumnTimes,
  pub columns: &'a ColumnMap,
  pub current_column: Option<ColumnId>,
  pub policy: BoundaryPolicy,
  pub created: DateTime<Utc>,
}

pub fn reconstruct_transition_log(input: &ReconstructInput) -> ColumnTransitionLog {
  let n = input.columns.len();
  let mut log: ColumnTransitionLog = vec![None; n];
  let never_moved = input.segments.len() <= 1;

  let anchor = boundary_column(input.policy, input.current_column, input.times.max_reached)
    .and_then(|boundary| first_entry(input.segments, input.columns, boundary).map(|first| (boundary, first)));

  let Some((boundary, (first_column, first_date))) = anchor else {
    // An issue that never moved is considered to sit in the first column since creation.
    if never_moved {
      log[0] = Some(input.created);
    }
    return log;
  };

  log[first_column] = Some(first_date);
  let mut prev_date = first_date;
  let mut prev_spent = input.times.durations[first_column].unwrap_or_else(Duration::zero);

  for column in (first_column + 1)..=boundary.min(n - 1) {
    if let Some(spent) = input.times.durations[column] {
      let entered = prev_date + prev_spent;
      log[column] = Some(entered);
      prev_date = entered;
      prev_spent = spent;
    }
  }

  if log[0].is_none() && !never_moved {
    log[0] = Some(input.created.min(first_date));
  }

  log
}
