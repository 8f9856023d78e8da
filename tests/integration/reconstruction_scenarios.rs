use chrono::{DateTime, Duration, TimeZone, Utc};

use flow_transition_report::engine::{Engine, EngineOptions};
use flow_transition_report::model::{BoardExport, IssueHistory};
use flow_transition_report::transitions::BoundaryPolicy;
use flow_transition_report::zone::Zone;

fn day(n: i64) -> DateTime<Utc> {
  Utc.with_ymd_and_hms(2024, 3, 1, 12, 0, 0).unwrap() + Duration::days(n)
}

fn utc_engine(export: &BoardExport) -> Engine {
  Engine::new(&export.board, EngineOptions { zone: Zone::Utc, ..EngineOptions::default() }).unwrap()
}

fn three_column_issue(value: serde_json::Value) -> (Engine, IssueHistory) {
  let export: BoardExport = serde_json::from_value(serde_json::json!({
    "board": { "name": "Team", "columns": [
      { "id": 0, "name": "To Do", "statuses": [ { "id": 1 } ] },
      { "id": 1, "name": "Doing", "statuses": [ { "id": 2 } ] },
      { "id": 2, "name": "Done", "statuses": [ { "id": 3 } ] }
    ] },
    "issues": [ value ]
  }))
  .unwrap();
  let engine = utc_engine(&export);
  let issue = export.issues.into_iter().next().unwrap();
  (engine, issue)
}

#[test]
fn forward_walk_uses_real_entry_dates() {
  let (engine, issue) = three_column_issue(serde_json::json!({
    "key": "PRJ-1",
    "created": day(0),
    "status": { "id": 3, "name": "C" },
    "status_changes": [
      { "at": day(2), "from": { "id": 1, "name": "A" }, "to": { "id": 2, "name": "B" } },
      { "at": day(5), "from": { "id": 2, "name": "B" }, "to": { "id": 3, "name": "C" } }
    ]
  }));
  let record = engine.reconstruct(&issue).unwrap();
  assert_eq!(record.column_dates, vec![Some(day(0)), Some(day(2)), Some(day(5))]);
}

#[test]
fn flag_set_then_cleared_counts_whole_days() {
  let (engine, issue) = three_column_issue(serde_json::json!({
    "key": "PRJ-2",
    "created": day(0),
    "status": { "id": 3, "name": "C" },
    "status_changes": [
      { "at": day(1), "from": { "id": 1, "name": "A" }, "to": { "id": 2, "name": "B" } },
      { "at": day(10), "from": { "id": 2, "name": "B" }, "to": { "id": 3, "name": "C" } }
    ],
    "flag_changes": [
      { "at": day(3), "from": null, "to": "Impediment" },
      { "at": day(4), "from": "Impediment", "to": null }
    ]
  }));
  assert_eq!(engine.reconstruct(&issue).unwrap().blocked_days, 1);
}

#[test]
fn clear_without_set_counts_from_window_start() {
  let (engine, issue) = three_column_issue(serde_json::json!({
    "key": "PRJ-3",
    "created": day(0),
    "status": { "id": 3, "name": "C" },
    "status_changes": [
      { "at": day(0), "from": { "id": 1, "name": "A" }, "to": { "id": 2, "name": "B" } },
      { "at": day(6), "from": { "id": 2, "name": "B" }, "to": { "id": 3, "name": "C" } }
    ],
    "flag_changes": [
      { "at": day(2), "from": "Impediment", "to": null }
    ]
  }));
  assert_eq!(engine.reconstruct(&issue).unwrap().blocked_days, 2);
}

#[test]
fn unmapped_status_is_skipped_without_failing() {
  let (engine, issue) = three_column_issue(serde_json::json!({
    "key": "PRJ-4",
    "created": day(0),
    "status": { "id": 3, "name": "C" },
    "status_changes": [
      { "at": day(1), "from": { "id": 1, "name": "A" }, "to": { "id": 9, "name": "On Hold" } },
      { "at": day(4), "from": { "id": 9, "name": "On Hold" }, "to": { "id": 2, "name": "B" } },
      { "at": day(6), "from": { "id": 2, "name": "B" }, "to": { "id": 3, "name": "C" } }
    ]
  }));
  let record = engine.reconstruct(&issue).unwrap();
  assert_eq!(record.unmapped_statuses, vec!["On Hold".to_string()]);
  // To Do held 1 day, so Doing is projected from day 1 and Done two days later
  assert_eq!(record.column_dates, vec![Some(day(0)), Some(day(1)), Some(day(3))]);
}

#[test]
fn fixture_board_matches_expected_rows() {
  let export: BoardExport = test_support::read_fixture_json("board_native.json");
  let engine = Engine::new(
    &export.board,
    EngineOptions { zone: Zone::Utc, policy: BoundaryPolicy::MaxColumn, ..EngineOptions::default() },
  )
  .unwrap();
  let outcome = engine.reconstruct_all(&export.issues);

  let keys: Vec<&str> = outcome.records.iter().map(|r| r.key.as_str()).collect();
  assert_eq!(keys, vec!["PRJ-1", "PRJ-2", "PRJ-4"]);
  assert_eq!(outcome.failures.len(), 1);
  assert_eq!(outcome.failures[0].key, "PRJ-3");
  assert_eq!(outcome.records[0].epic_name, "Payments");
  assert_eq!(outcome.records[0].project, "PRJ");
}
