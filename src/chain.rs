// === Module Header (agents-tooling) START ===
// header: Parsed by scripts/check_module_headers.sh for purpose/role presence; keep keys on single-line entries.
// purpose: Turn an issue's status-change events into a contiguous, chronological chain of status segments
// role: reconstruction/status chain
// inputs: StatusChangeEvent[] (any order), creation instant, current status
// outputs: StatusSegment[] covering the issue's lifetime; only the last segment is open
// invariants:
// - segments are contiguous: segment n closes at the instant segment n+1 opens
// - segment n's status equals the `from` status of the transition that closes it
// errors: HistoryError::InconsistentHistory when a transition leaves a status the issue was not in
// tie_breakers: contracts > orchestration > correctness > performance > minimal_diffs
// === Module Header END ===

use chrono::{DateTime, Utc};

use crate::error::HistoryError;
use crate::model::{StatusChangeEvent, StatusRef, StatusSegment};

/// Sort status changes by timestamp. Equal timestamps keep their input order.
pub fn sorted_events(events: &[StatusChangeEvent]) -> Vec<&StatusChangeEvent> {
  let mut sorted: Vec<&StatusChangeEvent> = events.iter().collect();
  sorted.sort_by_key(|e| e.at);
  sorted
}

/// Builds the status chain. The first segment starts at `created` in the
/// `from` status of the earliest transition, or in `current` when the issue
/// never moved.
pub fn build_status_chain(
  events: &[StatusChangeEvent],
  created: DateTime<Utc>,
  current: &StatusRef,
) -> Result<Vec<StatusSegment>, HistoryError> {
  let sorted = sorted_events(events);

  let initial = match sorted.first() {
    Some(first) => first.from.clone(),
    None => current.clone(),
  };

  let mut chain = Vec::with_capacity(sorted.len() + 1);
  chain.push(StatusSegment::open(initial, created));

  for event in sorted {
    // chain is never empty here
    let Some(open) = chain.last_mut() else { break };
    if open.status.id != event.from.id {
      return Err(HistoryError::InconsistentHistory {
        expected: open.status.id,
        found: event.from.id,
        at: event.at,
      });
    }
    open.date_out = Some(event.at);
    chain.push(StatusSegment::open(event.to.clone(), event.at));
  }

  if let Some(last) = chain.last() {
    if last.status.id != current.id {
      tracing::debug!(
        last = last.status.id,
        current = current.id,
        "status chain ends in a status other than the issue's current status"
      );
    }
  }

  Ok(chain)
}
