// === Module Header (agents-tooling) START ===
// header: Parsed by scripts/check_module_headers.sh for purpose/role presence; keep keys on single-line entries.
// purpose: Utilities for paths, stdin/stdout/file IO, logging setup, and man page rendering
// role: utilities/helpers
// inputs: Various primitives; paths; clap CommandFactory
// outputs: Canonicalized paths, input text, written reports, man page text
// side_effects: read_input reads files/stdin; write_output creates parent directories and writes files/stdout; init_logging installs the global subscriber
// invariants:
// - write_output with no path writes to stdout only
// - init_logging never fails when a subscriber is already installed
// errors: IO errors bubble with the offending path in context
// tie_breakers: contracts > orchestration > correctness > performance > minimal_diffs
// === Module Header END ===

use std::io::{Read, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::CommandFactory;
use tracing_subscriber::{EnvFilter, fmt};

pub fn canonicalize_lossy<P: AsRef<Path>>(p: P) -> String {
  let p = p.as_ref();
  let pb: PathBuf = match std::fs::canonicalize(p) {
    Ok(x) => x,
    Err(_) => match std::env::current_dir() {
      Ok(cwd) => cwd.join(p),
      Err(_) => PathBuf::from(p),
    },
  };
  pb.to_string_lossy().to_string()
}

/// Install a stderr `tracing` subscriber. `RUST_LOG` wins over the verbosity flag.
pub fn init_logging(verbose: bool) {
  let default = if verbose { "info" } else { "warn" };
  let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
  let _ = fmt()
    .with_env_filter(filter)
    .with_writer(std::io::stderr)
    .with_target(false)
    .try_init();
}

/// Read the whole input document from `path`, or stdin when `None`.
pub fn read_input(path: Option<&Path>) -> Result<String> {
  match path {
    Some(p) => std::fs::read_to_string(p).with_context(|| format!("reading input {}", p.display())),
    None => {
      let mut buf = String::new();
      std::io::stdin().read_to_string(&mut buf).context("reading input from stdin")?;
      Ok(buf)
    }
  }
}

/// Write `contents` to `path` (creating parent directories), or stdout when `None`.
pub fn write_output(path: Option<&Path>, contents: &str) -> Result<()> {
  match path {
    Some(p) => {
      if let Some(parent) = p.parent().filter(|d| !d.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).with_context(|| format!("creating directory {}", parent.display()))?;
      }
      std::fs::write(p, contents).with_context(|| format!("writing report {}", p.display()))
    }
    None => {
      let mut stdout = std::io::stdout().lock();
      stdout.write_all(contents.as_bytes())?;
      stdout.flush()?;
      Ok(())
    }
  }
}

/// Render a section-1 man page for a clap `CommandFactory` implementor.
/// Returns the troff content as a UTF-8 string.
pub fn render_man_page<T: CommandFactory>() -> anyhow::Result<String> {
  let cmd = T::command();
  let man = clap_mangen::Man::new(cmd);
  let mut buf: Vec<u8> = Vec::new();

  man.render(&mut buf)?;

  Ok(String::from_utf8_lossy(&buf).to_string())
}
