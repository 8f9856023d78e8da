//! Reconstruct per-column board entry dates and blocked days from issue
//! workflow history, for cumulative-flow analysis.
//!
//! The reconstruction is a pure function of `(IssueHistory, BoardConfig)`:
//! [`engine::Engine`] validates the board once and can then be shared across
//! threads to process any number of issues concurrently.

pub mod aggregate;
pub mod blocked;
pub mod board;
pub mod chain;
pub mod cli;
pub mod engine;
pub mod error;
pub mod ext;
pub mod ingest;
pub mod model;
pub mod params;
pub mod processor;
pub mod render;
pub mod transitions;
pub mod util;
pub mod zone;
