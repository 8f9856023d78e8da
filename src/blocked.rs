// === Module Header (agents-tooling) START ===
// header: Parsed by scripts/check_module_headers.sh for purpose/role presence; keep keys on single-line entries.
// purpose: Count whole calendar days an issue spent flagged as blocked within its workflow window
// role: reconstruction/blocked time
// inputs: FlagChangeEvent[], StatusChangeEvent[] (for the window), sentinel flag label, Zone
// outputs: blocked day count (non-negative)
// invariants:
// - only flag changes inside [first status change, last status change] are considered
// - a clear without a preceding set counts from the window start
// - a period still open at the end of the scan closes at the window end
// - an issue without status changes has zero blocked days
// tie_breakers: contracts > orchestration > correctness > performance > minimal_diffs
// === Module Header END ===

use chrono::{DateTime, Utc};

use crate::model::{FlagChangeEvent, StatusChangeEvent};
use crate::zone::Zone;

pub const DEFAULT_BLOCKED_FLAG: &str = "Impediment";

/// Earliest and latest status-change instants, if any.
pub fn workflow_window(status_changes: &[StatusChangeEvent]) -> Option<(DateTime<Utc>, DateTime<Utc>)> {
  let start = status_changes.iter().map(|e| e.at).min()?;
  let end = status_changes.iter().map(|e| e.at).max()?;
  Some((start, end))
}

pub fn blocked_days(
  flag_changes: &[FlagChangeEvent],
  window: Option<(DateTime<Utc>, DateTime<Utc>)>,
  sentinel: &str,
  zone: &Zone,
) -> u64 {
  let Some((start, end)) = window else {
    return 0;
  };

  let mut sorted: Vec<&FlagChangeEvent> = flag_changes.iter().filter(|f| f.at >= start && f.at <= end).collect();
  sorted.sort_by_key(|f| f.at);

  let is_sentinel = |label: &Option<String>| label.as_deref() == Some(sentinel);

  let mut total: i64 = 0;
  let mut open: Option<DateTime<Utc>> = None;

  for change in sorted {
    if is_sentinel(&change.to) {
      open.get_or_insert(change.at);
    } else if is_sentinel(&change.from) {
      let since = open.take().unwrap_or(start);
      total += zone.days_between(since, change.at);
    }
  }

  if let Some(since) = open {
    total += zone.days_between(since, end);
  }

  debug_assert!(total >= 0, "blocked period ends before it starts");
  u64::try_from(total).unwrap_or_default()
}
