// === Module Header (agents-tooling) START ===
// header: Parsed by scripts/check_module_headers.sh for purpose/role presence; keep keys on single-line entries.
// purpose: Orchestrate one run: load the export, reconstruct every issue on a bounded pool, render and write the report
// role: processing/orchestrator
// inputs: EffectiveConfig
// outputs: JSON or CSV report on stdout or at --out
// side_effects: Reads input; builds a rayon pool; writes output
// invariants:
// - board configuration errors abort before any issue is processed
// - per-issue failures are reported but never abort the run
// errors: Propagates input, board, pool, and write errors with context
// tie_breakers: contracts > orchestration > correctness > performance > minimal_diffs
// === Module Header END ===

use anyhow::{Context, Result};

use crate::cli::EffectiveConfig;
use crate::engine::{BatchOutcome, Engine};
use crate::ingest::load_export;
use crate::model::BoardExport;
use crate::params::build_engine_options;
use crate::render::{OutputFormat, RenderParams, build_report, render_csv};
use crate::util;

/// Reconstruct every issue of `export` on a pool of `jobs` threads (0 = available cores).
pub fn process_export(engine: &Engine, export: &BoardExport, jobs: usize) -> Result<BatchOutcome> {
  let pool = rayon::ThreadPoolBuilder::new()
    .num_threads(jobs)
    .build()
    .context("building worker pool")?;
  tracing::info!(issues = export.issues.len(), threads = pool.current_num_threads(), "reconstructing");
  Ok(pool.install(|| engine.reconstruct_all(&export.issues)))
}

pub fn render_outcome(cfg: &EffectiveConfig, engine: &Engine, board_name: &str, outcome: &BatchOutcome) -> Result<String> {
  match cfg.format {
    OutputFormat::Json => {
      let report = build_report(
        &RenderParams {
          board_name,
          columns: engine.columns(),
          zone: cfg.tz,
          policy: cfg.boundary,
        },
        outcome,
      );
      let mut text = serde_json::to_string_pretty(&report)?;
      text.push('\n');
      Ok(text)
    }
    OutputFormat::Csv => Ok(render_csv(engine.columns(), &outcome.records, &cfg.tz)),
  }
}

pub fn run(cfg: &EffectiveConfig) -> Result<()> {
  let text = util::read_input(cfg.input.as_deref())?;
  let export = load_export(&text, cfg.input_format).context("loading board export")?;

  let engine = Engine::new(&export.board, build_engine_options(cfg)).context("invalid board configuration")?;
  let outcome = process_export(&engine, &export, cfg.jobs)?;

  let rendered = render_outcome(cfg, &engine, &export.board.name, &outcome)?;
  util::write_output(cfg.out.as_deref(), &rendered)
}
