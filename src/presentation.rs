// src/presentation.rs

//! Rendering of count statistics into fixed-width text reports.

use std::path::Path;

use reckon_core::{Count, CountResultGroup, Statistics, TextFormat};

/// Number of printed file rows above which the file table collapses its
/// middle section into a single ellipsis row.
const LARGE_RESULT_THRESHOLD: usize = 16;

const WIDTH_COL0: usize = 26; // File / Language
const WIDTH_COL1: usize = 11; // LLC
const WIDTH_COL2: usize = 11; // PHL
const WIDTH_COL3: usize = 11; // WRD
const WIDTH_COL4: usize = 11; // CHR
const WIDTH_COL5: usize = 11; // SZE
const COLUMN_PADDING: usize = 2;

const METRIC_WIDTHS: [usize; 5] =
    [WIDTH_COL1, WIDTH_COL2, WIDTH_COL3, WIDTH_COL4, WIDTH_COL5];

const BORDER_HORIZONTAL_NORMAL: char = '-';
const BORDER_HORIZONTAL_EMPHASIS: char = '=';
const BORDER_VERTICAL: char = '|';
const BORDER_CORNER: char = 'o';
const TABLE_PADDING_LEFT: &str = "  ";

/// Renders the report for statistics tracking a single file.
#[must_use]
pub fn single_file_report(stats: &Statistics) -> String {
    let file = &stats.files()[0];
    let result = &stats.results()[0];
    let name = file.name().to_string_lossy();
    format!(
        "File: {name}\n\
         \n\
         \x20 Logical Lines of Code (LLC):   {:>8}\n\
         \x20 Physical Lines        (PHL):   {:>8}\n\
         \x20 Words                 (WRD):   {:>8}\n\
         \x20 Characters            (CHR):   {:>8}\n\
         \x20 Source Size in Bytes  (SZE):   {:>8}\n\
         \n",
        result.logical_lines,
        result.physical_lines,
        result.words,
        result.characters,
        result.source_size,
    )
}

/// Renders the report for statistics tracking a directory of files: a
/// per-file table followed by a per-language summary with totals.
#[must_use]
pub fn directory_report(path: &Path, stats: &Statistics) -> String {
    let mut out = String::new();

    let name = path_basename(path);
    out.push_str("Directory: ");
    out.push_str(if name.is_empty() { "(unknown name)" } else { &name });
    out.push('\n');
    out.push_str(&format!("Scanned files: {}\n\n", stats.files().len()));

    push_table_top(&mut out, "File");
    push_file_rows(&mut out, stats);
    push_table_bottom(&mut out, BORDER_HORIZONTAL_NORMAL);

    out.push_str("\nSummary:\n\n");

    push_table_top(&mut out, "Language");
    push_summary_rows(&mut out, stats);
    push_table_bottom(&mut out, BORDER_HORIZONTAL_EMPHASIS);
    push_totals_row(&mut out, stats);
    push_table_bottom(&mut out, BORDER_HORIZONTAL_EMPHASIS);
    out.push_str("\n\n");

    out
}

/// The final path component, with trailing separators trimmed.
fn path_basename(path: &Path) -> String {
    match path.file_name() {
        Some(name) => name.to_string_lossy().into_owned(),
        None => path.to_string_lossy().into_owned(),
    }
}

/// A count centered within the column width, truncated if it does not fit.
fn push_count(out: &mut String, value: Count, width: usize) {
    let width = width - COLUMN_PADDING;
    let mut text = value.to_string();
    text.truncate(width);
    let padding = width - text.len();
    let left = padding / 2;
    push_repeat(out, ' ', left);
    out.push_str(&text);
    push_repeat(out, ' ', padding - left);
}

/// Text left-aligned within the column width; over-long text keeps its tail
/// behind a leading ellipsis.
fn push_left_ellipsed(out: &mut String, text: &str, width: usize) {
    let width = width - COLUMN_PADDING;
    let length = text.chars().count();
    if length <= width {
        out.push_str(text);
        push_repeat(out, ' ', width - length);
    } else {
        out.push_str("...");
        let tail = width.saturating_sub(3);
        out.extend(text.chars().skip(length - tail));
    }
}

fn push_header_cell(out: &mut String, label: &str, width: usize) {
    let padding = width - (label.len() + 2);
    let left = padding / 2;
    push_repeat(out, '-', left);
    out.push(' ');
    out.push_str(label);
    out.push(' ');
    push_repeat(out, '-', padding - left);
}

fn push_repeat(out: &mut String, fill: char, count: usize) {
    for _ in 0..count {
        out.push(fill);
    }
}

fn push_table_top(out: &mut String, title: &str) {
    out.push_str(TABLE_PADDING_LEFT);
    out.push(BORDER_CORNER);
    push_header_cell(out, title, WIDTH_COL0);
    for (label, width) in ["LLC", "PHL", "WRD", "CHR", "SZE"].iter().zip(METRIC_WIDTHS) {
        out.push(BORDER_CORNER);
        push_header_cell(out, label, width);
    }
    out.push(BORDER_CORNER);
    out.push('\n');
}

fn push_table_bottom(out: &mut String, border: char) {
    out.push_str(TABLE_PADDING_LEFT);
    out.push(BORDER_CORNER);
    push_repeat(out, border, WIDTH_COL0);
    for width in METRIC_WIDTHS {
        out.push(BORDER_CORNER);
        push_repeat(out, border, width);
    }
    out.push(BORDER_CORNER);
    out.push('\n');
}

/// One row of centered ellipses, standing in for collapsed file rows.
fn push_skipped_row(out: &mut String) {
    out.push_str(TABLE_PADDING_LEFT);
    out.push(BORDER_VERTICAL);
    for width in std::iter::once(WIDTH_COL0).chain(METRIC_WIDTHS) {
        let ellipsis = if width % 2 == 0 { ".." } else { "..." };
        let side = (width - ellipsis.len()) / 2;
        push_repeat(out, ' ', side);
        out.push_str(ellipsis);
        push_repeat(out, ' ', side);
        out.push(BORDER_VERTICAL);
    }
    out.push('\n');
}

fn push_data_row(out: &mut String, label: &str, counts: [Count; 5]) {
    out.push_str(TABLE_PADDING_LEFT);
    out.push(BORDER_VERTICAL);
    out.push(' ');
    push_left_ellipsed(out, label, WIDTH_COL0);
    out.push(' ');
    for (value, width) in counts.iter().zip(METRIC_WIDTHS) {
        out.push(BORDER_VERTICAL);
        out.push(' ');
        push_count(out, *value, width);
        out.push(' ');
    }
    out.push(BORDER_VERTICAL);
    out.push('\n');
}

fn result_counts(result: &CountResultGroup) -> [Count; 5] {
    [
        result.logical_lines,
        result.physical_lines,
        result.words,
        result.characters,
        result.source_size,
    ]
}

fn push_file_rows(out: &mut String, stats: &Statistics) {
    let file_count = stats.files().len();
    let is_large_result = file_count > LARGE_RESULT_THRESHOLD;
    let mut ellipsis_row_printed = false;
    for (index, (file, result)) in stats.files().iter().zip(stats.results()).enumerate() {
        if result.state.error.is_some() {
            continue;
        }
        let in_skip_range =
            index >= LARGE_RESULT_THRESHOLD - 1 && index != file_count - 1;
        if is_large_result && in_skip_range {
            if !ellipsis_row_printed {
                push_skipped_row(out);
                ellipsis_row_printed = true;
            }
            continue;
        }
        let name = file.name().to_string_lossy();
        push_data_row(out, &name, result_counts(result));
    }
}

fn push_summary_rows(out: &mut String, stats: &Statistics) {
    for format in TextFormat::ALL {
        let index = format.index();
        if stats.source_size[index] == 0 {
            continue;
        }
        push_data_row(
            out,
            format.label(),
            [
                stats.logical_lines[index],
                stats.physical_lines[index],
                stats.words[index],
                stats.characters[index],
                stats.source_size[index],
            ],
        );
    }
}

fn push_totals_row(out: &mut String, stats: &Statistics) {
    push_data_row(
        out,
        "Total:",
        [
            stats.total_logical_lines,
            stats.total_physical_lines,
            stats.total_words,
            stats.total_characters,
            stats.total_source_size,
        ],
    );
}
