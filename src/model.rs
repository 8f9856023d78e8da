// === Module Header (agents-tooling) START ===
// header: Parsed by scripts/check_module_headers.sh for purpose/role presence; keep keys on single-line entries.
// purpose: Define the input model (issue history, board configuration) and the per-issue output record
// role: model/types
// outputs: Serializable structs with stable field names; optional descriptive fields skipped when absent
// invariants: timestamps are UTC instants; column_dates.len() == number of board columns for every record
// tie_breakers: contracts > orchestration > correctness > performance > minimal_diffs
// === Module Header END ===

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub type StatusId = u64;
pub type ColumnId = usize;

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct StatusRef {
  pub id: StatusId,
  pub name: String,
}

impl StatusRef {
  pub fn new(id: StatusId, name: impl Into<String>) -> Self {
    Self { id, name: name.into() }
  }
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct StatusChangeEvent {
  pub at: DateTime<Utc>,
  pub from: StatusRef,
  pub to: StatusRef,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct FlagChangeEvent {
  pub at: DateTime<Utc>,
  #[serde(default)]
  pub from: Option<String>,
  #[serde(default)]
  pub to: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct EpicRef {
  pub key: String,
  #[serde(default)]
  pub name: String,
}

/// Workflow history of one issue plus the descriptive attributes that travel
/// alongside the reconstruction into the export.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct IssueHistory {
  pub key: String,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub self_url: Option<String>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub summary: Option<String>,
  pub created: DateTime<Utc>,
  pub status: StatusRef,
  #[serde(default)]
  pub status_changes: Vec<StatusChangeEvent>,
  #[serde(default)]
  pub flag_changes: Vec<FlagChangeEvent>,
  #[serde(default)]
  pub issue_type: String,
  #[serde(default)]
  pub priority: String,
  #[serde(default)]
  pub labels: Vec<String>,
  #[serde(default)]
  pub components: Vec<String>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub epic: Option<EpicRef>,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct ColumnStatus {
  pub id: StatusId,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub name: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct BoardColumn {
  pub id: ColumnId,
  pub name: String,
  #[serde(default)]
  pub statuses: Vec<ColumnStatus>,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct BoardConfig {
  #[serde(default)]
  pub name: String,
  pub columns: Vec<BoardColumn>,
}

/// An interval during which the issue held one status. `date_out` is `None`
/// only for the segment holding the issue's present status.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusSegment {
  pub status: StatusRef,
  pub date_in: DateTime<Utc>,
  pub date_out: Option<DateTime<Utc>>,
}

impl StatusSegment {
  pub fn open(status: StatusRef, date_in: DateTime<Utc>) -> Self {
    Self { status, date_in, date_out: None }
  }

  /// Completed time spent in the segment; zero while the segment is still open
  /// or when the issue was created after its first recorded transition.
  pub fn elapsed(&self) -> chrono::Duration {
    match self.date_out {
      Some(out) => (out - self.date_in).max(chrono::Duration::zero()),
      None => chrono::Duration::zero(),
    }
  }
}

/// Export-ready record for one successfully reconstructed issue.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct ExportableIssue {
  pub key: String,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub link: Option<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub name: Option<String>,
  pub project: String,
  pub issue_type: String,
  pub priority: String,
  pub labels: Vec<String>,
  pub components: Vec<String>,
  pub epic_key: String,
  pub epic_name: String,
  /// Synthetic entry date per board column, indexed by column id.
  pub column_dates: Vec<Option<DateTime<Utc>>>,
  pub blocked_days: u64,
  #[serde(skip_serializing_if = "Vec::is_empty", default)]
  pub unmapped_statuses: Vec<String>,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct IssueFailure {
  pub key: String,
  pub reason: String,
}

/// Input document accepted by the `native` input format.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct BoardExport {
  pub board: BoardConfig,
  #[serde(default)]
  pub issues: Vec<IssueHistory>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ReportColumn {
  pub id: ColumnId,
  pub name: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ReportTransition {
  pub column: String,
  pub entered: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ReportIssue {
  pub key: String,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub link: Option<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub name: Option<String>,
  pub transitions: Vec<ReportTransition>,
  pub blocked_days: u64,
  pub project: String,
  pub issue_type: String,
  pub priority: String,
  pub labels: Vec<String>,
  pub components: Vec<String>,
  pub epic_key: String,
  pub epic_name: String,
  #[serde(skip_serializing_if = "Vec::is_empty", default)]
  pub unmapped_statuses: Vec<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct Report {
  pub board: String,
  pub timezone: String,
  pub boundary: String,
  pub columns: Vec<ReportColumn>,
  pub count: usize,
  pub failed: usize,
  pub issues: Vec<ReportIssue>,
  pub failures: Vec<IssueFailure>,
}
