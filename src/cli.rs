use anyhow::{Result, bail};
use clap::Parser;
use std::path::PathBuf;

use crate::ingest::InputFormat;
use crate::render::OutputFormat;
use crate::transitions::BoundaryPolicy;
use crate::util;
use crate::zone::Zone;

#[derive(Parser, Debug)]
#[command(
    name = "flow-transition-report",
    version,
    about = "Reconstruct per-column board entry dates and blocked days from issue workflow history",
    long_about = None
)]
pub struct Cli {
  /// Board export to read (JSON); "-" reads stdin
  #[arg(long, default_value = "-")]
  pub input: String,

  /// Shape of the input document
  #[arg(long, value_enum, default_value_t = InputFormat::Native)]
  pub input_format: InputFormat,

  /// Report format
  #[arg(long, value_enum, default_value_t = OutputFormat::Json)]
  pub format: OutputFormat,

  /// Output file path (default stdout "-")
  #[arg(long, default_value = "-")]
  pub out: String,

  /// Furthest column a synthetic entry date may be projected into
  #[arg(long, value_enum, default_value_t = BoundaryPolicy::CurrentColumn)]
  pub boundary: BoundaryPolicy,

  /// Flag value that marks an issue as blocked
  #[arg(long, default_value = crate::blocked::DEFAULT_BLOCKED_FLAG)]
  pub blocked_flag: String,

  /// Timezone for calendar-day counting and rendered dates: local, utc, or an IANA name
  #[arg(long, default_value = "local")]
  pub tz: Zone,

  /// Worker threads for per-issue reconstruction (0 = one per available core)
  #[arg(long, default_value_t = 0)]
  pub jobs: usize,

  /// Fill the Name column from the issue summary
  #[arg(long)]
  pub show_name: bool,

  /// Log progress and unmapped statuses to stderr
  #[arg(long, short)]
  pub verbose: bool,

  /// Emit a troff man page to stdout (internal; for packaging)
  #[arg(long, hide = true)]
  pub gen_man: bool,
}

#[derive(Debug)]
pub struct EffectiveConfig {
  pub input: Option<PathBuf>, // None reads stdin
  pub input_format: InputFormat,
  pub format: OutputFormat,
  pub out: Option<PathBuf>, // None writes stdout
  pub boundary: BoundaryPolicy,
  pub blocked_flag: String,
  pub tz: Zone,
  pub jobs: usize,
  pub show_name: bool,
  pub verbose: bool,
}

pub fn normalize(cli: Cli) -> Result<EffectiveConfig> {
  let blocked_flag = cli.blocked_flag.trim().to_string();
  if blocked_flag.is_empty() {
    bail!("--blocked-flag must not be empty");
  }

  let input = match cli.input.as_str() {
    "-" => None,
    path => Some(PathBuf::from(util::canonicalize_lossy(path))),
  };

  let out = match cli.out.as_str() {
    "-" => None,
    path => Some(PathBuf::from(path)),
  };

  Ok(EffectiveConfig {
    input,
    input_format: cli.input_format,
    format: cli.format,
    out,
    boundary: cli.boundary,
    blocked_flag,
    tz: cli.tz,
    jobs: cli.jobs,
    show_name: cli.show_name,
    verbose: cli.verbose,
  })
}
