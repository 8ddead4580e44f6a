// src/app.rs

//! The two operation flows of scount: statistics and source annotation.

use std::io::Write as _;
use std::path::Path;
use std::process::ExitCode;

use log::{debug, error};
use reckon_core::{ErrorKind, StatOptions, Statistics, mark_logical_lines_in_file};

use crate::args::{self, Args};
use crate::presentation;

/// Exit status codes of scount.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitStatus {
    Success = 0,
    InvalidArgument = 1,
    InvalidInput = 2,
    NothingProcessed = 3,
    ProgIoError = 4,
    UnspecifiedError = 126,
}

impl From<ExitStatus> for ExitCode {
    fn from(status: ExitStatus) -> Self {
        ExitCode::from(status as u8)
    }
}

/// Routes parsed arguments to the requested operation.
pub fn run(args: &Args) -> ExitStatus {
    if args.help {
        args::show_help_text();
        return ExitStatus::Success;
    }
    if args.version || args.version_short {
        args::show_version(args.version_short);
        return ExitStatus::Success;
    }
    let Some(path) = args.paths.first() else {
        error!("No input path specified.");
        args::show_usage();
        return ExitStatus::InvalidArgument;
    };
    if args.paths.len() > 1 {
        error!("Multiple input paths specified.");
        args::show_usage();
        return ExitStatus::InvalidArgument;
    }
    if args.annotate_counts {
        output_annotated_source(path)
    } else {
        output_statistics(path, args)
    }
}

/// Processes the input path and shows statistics on stdout.
pub fn output_statistics(path: &Path, args: &Args) -> ExitStatus {
    let mut stats = Statistics::for_path(path);
    if stats.state.error.is_some() {
        report_error(path, &stats);
        return ExitStatus::InvalidInput;
    }
    report_input_verbose(path, &stats);

    let options = StatOptions { stop_on_error: args.stop_on_error, ..StatOptions::default() };
    stats.count(options);

    if !stats.state.ok && stats.state.error != Some(ErrorKind::UnsupportedFormat) {
        report_error(path, &stats);
        return ExitStatus::InvalidInput;
    }
    if stats.size_processed == 0 {
        report_nothing_processed(path, &stats);
        return ExitStatus::NothingProcessed;
    }

    let report = if stats.files().len() == 1 {
        presentation::single_file_report(&stats)
    } else {
        presentation::directory_report(path, &stats)
    };
    write_stdout(report.as_bytes())
}

/// Processes the input path and shows annotated source code on stdout.
pub fn output_annotated_source(path: &Path) -> ExitStatus {
    match mark_logical_lines_in_file(path) {
        Ok(annotated) => write_stdout(annotated.as_bytes()),
        Err(_) => {
            error!("Failed to annotate source file '{}'", path.display());
            error!(
                "Check the logical line count of that file to try to \
                 get more information on the error."
            );
            error!(
                "Hint: Try to run the previous command \
                 without the '--annotate-counts' option."
            );
            ExitStatus::InvalidInput
        }
    }
}

fn write_stdout(bytes: &[u8]) -> ExitStatus {
    let mut stdout = std::io::stdout().lock();
    match stdout.write_all(bytes).and_then(|()| stdout.flush()) {
        Ok(()) => ExitStatus::Success,
        Err(_) => ExitStatus::ProgIoError,
    }
}

fn report_error(path: &Path, stats: &Statistics) {
    if stats.state.error == Some(ErrorKind::InvalidInput) {
        error!("Invalid input path: '{}'", path.display());
    } else {
        error!("An error has occurred for: '{}'", path.display());
    }
    let code = stats.state.error.map_or(0, ErrorKind::code);
    match stats.state.message {
        Some(message) => error!("{message} ({code:#04x})"),
        None => error!("An unknown error has occurred. Error code: {code:#04x}"),
    }
}

fn report_input_verbose(path: &Path, stats: &Statistics) {
    debug!("Processing input path: '{}'", path.display());
    let file_label = if stats.files().len() == 1 { "file" } else { "files" };
    debug!("A total of {} {file_label} found", stats.files().len());
    for file in stats.files() {
        debug!(
            "Found file: '{}' (status: {:#04x})",
            file.path().display(),
            file.status().code()
        );
    }
}

fn report_nothing_processed(path: &Path, stats: &Statistics) {
    if stats.files().len() == 1 {
        let file = &stats.files()[0];
        let input_is_directory = file.path() != path;
        let scanned = if input_is_directory { "directory" } else { "file" };
        error!("Scanned {scanned} '{}'", path.display());
        error!("The file '{}' cannot be processed.", file.name().to_string_lossy());
        match file.extension() {
            Some(extension) => error!(
                "It does not have an eligible format. \
                 The file extension is not supported: '{extension}'"
            ),
            None => error!("It does not have an eligible format."),
        }
    } else {
        error!("Scanned directory '{}'", path.display());
        error!("It contains no files with an eligible format.");
    }
}
