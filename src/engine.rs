// === Module Header (agents-tooling) START ===
// header: Parsed by scripts/check_module_headers.sh for purpose/role presence; keep keys on single-line entries.
// purpose: Reconstruct one export record per issue and fan a batch of issues out over rayon
// role: reconstruction/orchestrator
// inputs: BoardConfig (once), EngineOptions, IssueHistory[]
// outputs: ExportableIssue per success; IssueFailure per failed issue
// side_effects: None beyond tracing events
// invariants:
// - the column map is built once and only read afterwards
// - a failing issue never aborts its siblings; outcomes keep input order
// - reconstruction is deterministic for identical inputs
// errors: BoardError from Engine::new; IssueError per issue
// tie_breakers: contracts > orchestration > correctness > performance > minimal_diffs
// === Module Header END ===

use rayon::prelude::*;
use thiserror::Error;

use crate::aggregate::aggregate_column_times;
use crate::blocked::{DEFAULT_BLOCKED_FLAG, blocked_days, workflow_window};
use crate::board::ColumnMap;
use crate::chain::build_status_chain;
use crate::error::{BoardError, HistoryError};
use crate::ingest::{browse_link, project_key};
use crate::model::{BoardConfig, ExportableIssue, IssueFailure, IssueHistory};
use crate::transitions::{BoundaryPolicy, ReconstructInput, reconstruct_transition_log};
use crate::zone::Zone;

#[derive(Debug, Clone)]
pub struct EngineOptions {
  pub policy: BoundaryPolicy,
  pub blocked_flag: String,
  pub zone: Zone,
  pub show_name: bool,
}

impl Default for EngineOptions {
  fn default() -> Self {
    Self {
      policy: BoundaryPolicy::default(),
      blocked_flag: DEFAULT_BLOCKED_FLAG.to_string(),
      zone: Zone::default(),
      show_name: false,
    }
  }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum IssueError {
  #[error(transparent)]
  History(#[from] HistoryError),
}

#[derive(Debug, Default)]
pub struct BatchOutcome {
  pub records: Vec<ExportableIssue>,
  pub failures: Vec<IssueFailure>,
}

#[derive(Debug)]
pub struct Engine {
  columns: ColumnMap,
  options: EngineOptions,
}

impl Engine {
  pub fn new(board: &BoardConfig, options: EngineOptions) -> Result<Self, BoardError> {
    let columns = ColumnMap::from_config(board)?;
    Ok(Self { columns, options })
  }

  pub fn columns(&self) -> &ColumnMap {
    &self.columns
  }

  pub fn options(&self) -> &EngineOptions {
    &self.options
  }

  pub fn reconstruct(&self, issue: &IssueHistory) -> Result<ExportableIssue, IssueError> {
    let segments = build_status_chain(&issue.status_changes, issue.created, &issue.status)?;
    let times = aggregate_column_times(&issue.key, &segments, &self.columns);

    let column_dates = reconstruct_transition_log(&ReconstructInput {
      segments: &segments,
      times: &times,
      columns: &self.columns,
      current_column: self.columns.column_of(issue.status.id),
      policy: self.options.policy,
      created: issue.created,
    });

    let blocked = blocked_days(
      &issue.flag_changes,
      workflow_window(&issue.status_changes),
      &self.options.blocked_flag,
      &self.options.zone,
    );

    let (epic_key, epic_name) = match &issue.epic {
      Some(epic) => (epic.key.clone(), epic.name.clone()),
      None => (String::new(), String::new()),
    };

    Ok(ExportableIssue {
      key: issue.key.clone(),
      link: issue.self_url.as_deref().and_then(|url| browse_link(url, &issue.key)),
      name: if self.options.show_name { issue.summary.clone() } else { None },
      project: project_key(&issue.key).to_string(),
      issue_type: issue.issue_type.clone(),
      priority: issue.priority.clone(),
      labels: issue.labels.clone(),
      components: issue.components.clone(),
      epic_key,
      epic_name,
      column_dates,
      blocked_days: blocked,
      unmapped_statuses: times.unmapped,
    })
  }

  /// Reconstruct every issue on the current rayon pool. Failures are logged
  /// and collected next to the successes.
  pub fn reconstruct_all(&self, issues: &[IssueHistory]) -> BatchOutcome {
    let results: Vec<Result<ExportableIssue, IssueFailure>> = issues
      .par_iter()
      .map(|issue| {
        self.reconstruct(issue).map_err(|e| {
          tracing::warn!(issue = %issue.key, error = %e, "skipping issue");
          IssueFailure { key: issue.key.clone(), reason: e.to_string() }
        })
      })
      .collect();

    let mut outcome = BatchOutcome::default();
    for result in results {
      match result {
        Ok(record) => outcome.records.push(record),
        Err(failure) => outcome.failures.push(failure),
      }
    }
    tracing::info!(
      reconstructed = outcome.records.len(),
      failed = outcome.failures.len(),
      "batch reconstructed"
    );
    outcome
  }
}
