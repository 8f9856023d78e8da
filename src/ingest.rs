// === Module Header (agents-tooling) START ===
// header: Parsed by scripts/check_module_headers.sh for purpose/role presence; keep keys on single-line entries.
// purpose: Load a board export (native JSON or raw tracker REST payloads) into the reconstruction model
// role: input/ingestion
// inputs: JSON text; InputFormat
// outputs: BoardExport (BoardConfig + IssueHistory[])
// side_effects: None (callers read files/stdin)
// invariants:
// - jira board columns receive ids by position (0..n)
// - changelog items with field "status" become status changes; field "Flagged" becomes flag changes
// - status ids given as strings or numbers are accepted
// errors: IngestError naming the missing/invalid path and the issue or board it belongs to
// tie_breakers: contracts > orchestration > correctness > performance > minimal_diffs
// === Module Header END ===

use chrono::{DateTime, Utc};
use clap::ValueEnum;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::error::IngestError;
use crate::ext::serde_json::JsonFetch;
use crate::model::{
  BoardColumn, BoardConfig, BoardExport, ColumnStatus, EpicRef, FlagChangeEvent, IssueHistory, StatusChangeEvent,
  StatusId, StatusRef,
};

#[derive(Copy, Clone, Eq, PartialEq, Debug, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
#[value(rename_all = "lowercase")]
pub enum InputFormat {
  #[default]
  Native,
  Jira,
}

pub const STATUS_FIELD: &str = "status";
pub const FLAG_FIELD: &str = "Flagged";

static REST_ORIGIN: Lazy<Regex> =
  Lazy::new(|| Regex::new(r"^(https?)://([^/:]+)(:\d+)?/").expect("valid REST origin pattern"));

pub fn load_export(text: &str, format: InputFormat) -> Result<BoardExport, IngestError> {
  match format {
    InputFormat::Native => Ok(serde_json::from_str(text)?),
    InputFormat::Jira => {
      let raw: serde_json::Value = serde_json::from_str(text)?;
      let board = jira_board(raw.fetch("board").value().unwrap_or(&serde_json::Value::Null))?;
      let issues = raw
        .fetch("issues")
        .items()
        .iter()
        .map(jira_issue)
        .collect::<Result<Vec<_>, _>>()?;
      Ok(BoardExport { board, issues })
    }
  }
}

/// Project key is the issue key up to its first `-`.
pub fn project_key(issue_key: &str) -> &str {
  issue_key.split_once('-').map_or(issue_key, |(project, _)| project)
}

/// Human-facing link derived from an issue's REST `self` URL.
pub fn browse_link(self_url: &str, issue_key: &str) -> Option<String> {
  let caps = REST_ORIGIN.captures(self_url)?;
  let scheme = caps.get(1)?.as_str();
  let host = caps.get(2)?.as_str();
  let port = caps.get(3).map_or("", |m| m.as_str());
  Some(format!("{scheme}://{host}{port}/browse/{issue_key}"))
}

/// Accepts RFC3339 and the tracker's `2024-01-02T10:00:00.000+0300` form.
pub fn parse_timestamp(value: &str, context: &str) -> Result<DateTime<Utc>, IngestError> {
  DateTime::parse_from_rfc3339(value)
    .or_else(|_| DateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S%.f%z"))
    .map(|dt| dt.with_timezone(&Utc))
    .map_err(|_| IngestError::InvalidTimestamp {
      value: value.to_string(),
      context: context.to_string(),
    })
}

fn status_id(value: Option<String>, field: &str, context: &str) -> Result<StatusId, IngestError> {
  let Some(raw) = value else {
    return Err(IngestError::MissingField { field: field.to_string(), context: context.to_string() });
  };
  raw.trim().parse().map_err(|_| IngestError::InvalidStatusId { value: raw, context: context.to_string() })
}

fn jira_board(raw: &serde_json::Value) -> Result<BoardConfig, IngestError> {
  let context = "board configuration";
  let columns = raw
    .fetch("columnConfig.columns")
    .items()
    .iter()
    .enumerate()
    .map(|(position, column)| -> Result<BoardColumn, IngestError> {
      let statuses = column
        .fetch("statuses")
        .items()
        .iter()
        .map(|s| -> Result<ColumnStatus, IngestError> {
          Ok(ColumnStatus {
            id: status_id(s.fetch("id").text(), "statuses.id", context)?,
            name: s.fetch("name").to::<String>(),
          })
        })
        .collect::<Result<Vec<_>, IngestError>>()?;
      Ok(BoardColumn {
        id: position,
        name: column.fetch("name").required::<String>(context)?,
        statuses,
      })
    })
    .collect::<Result<Vec<_>, IngestError>>()?;

  Ok(BoardConfig {
    name: raw.fetch("name").to_or_default(),
    columns,
  })
}

fn jira_issue(raw: &serde_json::Value) -> Result<IssueHistory, IngestError> {
  let key: String = raw.fetch("key").required("issue")?;
  let context = format!("issue {key}");

  let created_raw: String = raw.fetch("fields.created").required(&context)?;
  let created = parse_timestamp(&created_raw, &context)?;
  let status = StatusRef {
    id: status_id(raw.fetch("fields.status.id").text(), "fields.status.id", &context)?,
    name: raw.fetch("fields.status.name").to_or_default(),
  };

  let mut status_changes = Vec::new();
  let mut flag_changes = Vec::new();
  for history in raw.fetch("changelog.histories").items() {
    let at_raw: String = history.fetch("created").required(&context)?;
    let at = parse_timestamp(&at_raw, &context)?;
    for item in history.fetch("items").items() {
      match item.fetch("field").to::<String>().as_deref() {
        Some(STATUS_FIELD) => status_changes.push(StatusChangeEvent {
          at,
          from: StatusRef {
            id: status_id(item.fetch("from").text(), "items.from", &context)?,
            name: item.fetch("fromString").to_or_default(),
          },
          to: StatusRef {
            id: status_id(item.fetch("to").text(), "items.to", &context)?,
            name: item.fetch("toString").to_or_default(),
          },
        }),
        Some(FLAG_FIELD) => flag_changes.push(FlagChangeEvent {
          at,
          from: item.fetch("fromString").to::<String>(),
          to: item.fetch("toString").to::<String>(),
        }),
        _ => {}
      }
    }
  }

  let epic = raw.fetch("fields.epic.key").to::<String>().map(|epic_key| EpicRef {
    key: epic_key,
    name: raw.fetch("fields.epic.name").to_or_default(),
  });

  Ok(IssueHistory {
    self_url: raw.fetch("self").to::<String>(),
    summary: raw.fetch("fields.summary").to::<String>(),
    created,
    status,
    status_changes,
    flag_changes,
    issue_type: raw.fetch("fields.issuetype.name").to_or_default(),
    priority: raw.fetch("fields.priority.name").to_or_default(),
    labels: raw.fetch("fields.labels").to_or_default(),
    components: raw
      .fetch("fields.components")
      .items()
      .iter()
      .filter_map(|c| c.fetch("name").to::<String>())
      .collect(),
    epic,
    key,
  })
}
