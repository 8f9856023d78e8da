// === Module Header (agents-tooling) START ===
// header: Parsed by scripts/check_module_headers.sh for purpose/role presence; keep keys on single-line entries.
// purpose: Render reconstructed records as a JSON report or a CSV table for flow analytics tools
// role: output/rendering
// inputs: ColumnMap, BatchOutcome, Zone, BoundaryPolicy
// outputs: Report (serde) or CSV text
// invariants:
// - CSV header: ID,Link,Name, board columns in configured order, then descriptive attributes
// - CSV dates are MM/DD/YYYY in the chosen zone; empty cell for columns never entered
// - failed issues never appear as rows; JSON lists them under failures[]
// tie_breakers: contracts > orchestration > correctness > performance > minimal_diffs
// === Module Header END ===

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::board::ColumnMap;
use crate::engine::BatchOutcome;
use crate::model::{ExportableIssue, Report, ReportColumn, ReportIssue, ReportTransition};
use crate::transitions::BoundaryPolicy;
use crate::zone::Zone;

pub const CSV_DATE_FORMAT: &str = "%m/%d/%Y";

#[derive(Copy, Clone, Eq, PartialEq, Debug, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
#[value(rename_all = "lowercase")]
pub enum OutputFormat {
  #[default]
  Json,
  Csv,
}

pub struct RenderParams<'a> {
  pub board_name: &'a str,
  pub columns: &'a ColumnMap,
  pub zone: Zone,
  pub policy: BoundaryPolicy,
}

pub fn build_report(params: &RenderParams, outcome: &BatchOutcome) -> Report {
  let columns = params
    .columns
    .columns()
    .map(|(id, name)| ReportColumn { id, name: name.to_string() })
    .collect();

  let issues = outcome
    .records
    .iter()
    .map(|record| ReportIssue {
      key: record.key.clone(),
      link: record.link.clone(),
      name: record.name.clone(),
      transitions: params
        .columns
        .columns()
        .map(|(id, name)| ReportTransition {
          column: name.to_string(),
          entered: record.column_dates.get(id).copied().flatten().map(|at| params.zone.iso(at)),
        })
        .collect(),
      blocked_days: record.blocked_days,
      project: record.project.clone(),
      issue_type: record.issue_type.clone(),
      priority: record.priority.clone(),
      labels: record.labels.clone(),
      components: record.components.clone(),
      epic_key: record.epic_key.clone(),
      epic_name: record.epic_name.clone(),
      unmapped_statuses: record.unmapped_statuses.clone(),
    })
    .collect();

  Report {
    board: params.board_name.to_string(),
    timezone: params.zone.to_string(),
    boundary: params.policy.label().to_string(),
    columns,
    count: outcome.records.len(),
    failed: outcome.failures.len(),
    issues,
    failures: outcome.failures.clone(),
  }
}

/// Quote a CSV cell when it carries a separator, a quote, or a line break.
pub fn csv_field(value: &str) -> String {
  if value.contains([',', '"', '\n', '\r']) {
    format!("\"{}\"", value.replace('"', "\"\""))
  } else {
    value.to_string()
  }
}

/// Multi-valued attributes share one cell, comma-joined.
pub fn csv_list(values: &[String]) -> String {
  csv_field(&values.join(","))
}

pub fn csv_header(columns: &ColumnMap) -> String {
  let mut cells: Vec<String> = vec!["ID".into(), "Link".into(), "Name".into()];
  cells.extend(columns.columns().map(|(_, name)| csv_field(name)));
  cells.extend(
    ["Project", "Type", "Blocked Days", "Labels", "Priority", "EpicKey", "EpicName", "Components"]
      .iter()
      .map(|s| s.to_string()),
  );
  cells.join(",")
}

pub fn csv_row(record: &ExportableIssue, columns: &ColumnMap, zone: &Zone) -> String {
  let mut cells: Vec<String> = vec![
    csv_field(&record.key),
    csv_field(record.link.as_deref().unwrap_or("")),
    csv_field(record.name.as_deref().unwrap_or("")),
  ];
  cells.extend(columns.columns().map(|(id, _)| {
    record
      .column_dates
      .get(id)
      .copied()
      .flatten()
      .map(|at| zone.format_date(at, CSV_DATE_FORMAT))
      .unwrap_or_default()
  }));
  cells.extend([
    csv_field(&record.project),
    csv_field(&record.issue_type),
    record.blocked_days.to_string(),
    csv_list(&record.labels),
    csv_field(&record.priority),
    csv_field(&record.epic_key),
    csv_field(&record.epic_name),
    csv_list(&record.components),
  ]);
  cells.join(",")
}

pub fn render_csv(columns: &ColumnMap, records: &[ExportableIssue], zone: &Zone) -> String {
  let mut out = csv_header(columns);
  out.push('\n');
  for record in records {
    out.push_str(&csv_row(record, columns, zone));
    out.push('\n');
  }
  out
}
