use anyhow::Result;
use clap::Parser;

use flow_transition_report::cli::{Cli, normalize};
use flow_transition_report::{processor, util};

fn main() -> Result<()> {
  let cli = Cli::parse();

  if cli.gen_man {
    let page = util::render_man_page::<Cli>()?;
    print!("{}", page);
    return Ok(());
  }

  // Phase 1: normalize CLI
  let cfg = normalize(cli)?;
  util::init_logging(cfg.verbose);

  // Phase 2: load, reconstruct, render
  processor::run(&cfg)
}
