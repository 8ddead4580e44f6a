// src/args.rs
use std::path::PathBuf;

use clap::Parser;

/// Command line arguments of `scount`.
///
/// The built-in clap help and version flags are disabled: this tool uses
/// `-?`/`--help` and `-#`/`--version`, and argument errors must map to a
/// dedicated exit code.
#[derive(Parser, Debug)]
#[command(
    name = "scount",
    about = "Count source code lines in files.",
    disable_help_flag = true,
    disable_version_flag = true
)]
pub struct Args {
    /// The path to the input file or directory to process
    #[arg(value_name = "PATH")]
    pub paths: Vec<PathBuf>,

    /// Mark counted logical lines and output the result
    #[arg(long = "annotate-counts")]
    pub annotate_counts: bool,

    /// Stop processing on first error
    #[arg(long = "stop-on-error")]
    pub stop_on_error: bool,

    /// Enable verbose output
    #[arg(long)]
    pub verbose: bool,

    /// Show program version information
    #[arg(long)]
    pub version: bool,

    /// Show only the bare version string
    #[arg(short = '#', hide = true)]
    pub version_short: bool,

    /// Show this help message
    #[arg(short = '?', long)]
    pub help: bool,
}

pub fn show_usage() {
    println!("Usage: scount [--verbose] [--annotate-counts] [--stop-on-error] <PATH>");
}

pub fn show_help_text() {
    println!("scount: Count source code lines in files.");
    println!();
    show_usage();
    println!();
    println!("Positional Arguments:");
    println!();
    println!("  <PATH>              The path to the input file or directory to process.");
    println!();
    println!("Options:");
    println!();
    println!("  [--annotate-counts] Mark counted logical lines and output the result.");
    println!("                      This option can only be used on a single file input.");
    println!();
    println!("  [--stop-on-error]   Stop processing on first error.");
    println!();
    println!("  [--verbose]         Enable verbose output.");
    println!();
    println!("  [-#|--version]      Show program version information.");
    println!();
    println!("  [-?|--help]         Show this help message.");
    println!();
}

pub fn show_version(bare: bool) {
    if bare {
        println!("{}", crate::VERSION);
        return;
    }
    let dev_hint =
        if crate::VERSION.ends_with("-dev") { " (DEVELOPMENT VERSION)" } else { "" };
    println!("scount v{}{dev_hint}", crate::VERSION);
    println!("The scount executable is part of the Reckon project.");
    println!("This software is licensed under the Apache License, Version 2.0");
}
