//! Library surface of the `scount` command line tool.
//!
//! The binary is a thin driver over [`reckon_core`]: it parses arguments,
//! sets up logging, runs either the statistics or the annotation flow and
//! renders the report.

pub mod app;
pub mod args;
pub mod logging;
pub mod presentation;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
