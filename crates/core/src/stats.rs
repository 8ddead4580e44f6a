// crates/core/src/stats.rs

//! Per-operation orchestration: running the selected counters over a set of
//! source files and folding per-file results into per-format and total
//! aggregates.

use std::path::Path;

use crate::fileio::{self, NativePlatform, Platform, SourceFile};
use crate::language::{NUM_FORMATS, TextFormat};
use crate::result::{Count, CountResultGroup, ErrorKind, ResultState};
use crate::source::SourceText;

/// Options to customize the behaviour of counting operations.
///
/// The default value selects all operations and all formats.
#[derive(Debug, Clone, Copy, Default)]
pub struct StatOptions {
    /// Bitmask of counting operations to perform, combined from the
    /// `COUNT_*` flags. Zero selects all operations.
    pub operations: u32,

    /// Bitmask of text formats to include, combined from
    /// [`TextFormat::flag`] values. Zero selects all formats.
    pub formats: u32,

    /// Whether to stop the processing on the first encountered error.
    ///
    /// Critical errors abort processing regardless of this option.
    pub stop_on_error: bool,

    /// Whether to keep loaded file content in memory after processing.
    pub keep_content: bool,
}

impl StatOptions {
    /// Count the number of characters (CHR).
    pub const COUNT_CHARACTERS: u32 = 0x01;
    /// Count the number of words (WRD).
    pub const COUNT_WORDS: u32 = 0x02;
    /// Count hard physical lines (PHL).
    pub const COUNT_PHYSICAL_LINES: u32 = 0x04;
    /// Count logical lines of code (LLC).
    pub const COUNT_LOGICAL_LINES: u32 = 0x08;

    /// A zero bitmask semantically selects everything; normalization makes
    /// that explicit so later checks need no special case.
    fn normalized(mut self) -> Self {
        if self.operations == 0 {
            self.operations = u32::MAX;
        }
        if self.formats == 0 {
            self.formats = u32::MAX;
        }
        self
    }

    fn operation_selected(&self, operation: u32) -> bool {
        self.operations & operation != 0
    }

    fn format_selected(&self, format: TextFormat) -> bool {
        self.formats & format.flag() != 0
    }
}

/// A collection of source code metrics for a set of source files.
///
/// Create one with [`Statistics::for_path`], populate it exactly once with
/// [`Statistics::count`], then read the aggregates and per-file results.
/// Calling `count` twice on the same value is not supported.
#[derive(Debug, Default)]
pub struct Statistics {
    /// Totals across all files and formats.
    pub total_logical_lines: Count,
    pub total_physical_lines: Count,
    pub total_words: Count,
    pub total_characters: Count,
    pub total_source_size: Count,

    /// Per-format tallies, indexed by [`TextFormat::index`].
    pub logical_lines: [Count; NUM_FORMATS],
    pub physical_lines: [Count; NUM_FORMATS],
    pub words: [Count; NUM_FORMATS],
    pub characters: [Count; NUM_FORMATS],
    pub source_size: [Count; NUM_FORMATS],

    files: Vec<SourceFile>,
    results: Vec<CountResultGroup>,

    /// The number of files that were actually processed.
    pub size_processed: usize,

    /// The state of the compound operation.
    ///
    /// If the statistics track exactly one file, this reflects the result
    /// state of that file after counting.
    pub state: ResultState,
}

impl Statistics {
    /// Creates statistics for the given file or directory path.
    ///
    /// A directory is scanned recursively for regular files. An invalid
    /// path yields a value whose state records [`ErrorKind::InvalidInput`].
    #[must_use]
    pub fn for_path(path: impl AsRef<Path>) -> Self {
        Self::for_path_with(&NativePlatform, path.as_ref())
    }

    pub(crate) fn for_path_with(platform: &impl Platform, path: &Path) -> Self {
        let mut stats = Self::default();
        if let Some(message) = fileio::validate_stats_input(platform, path) {
            stats.state.record(ErrorKind::InvalidInput, message);
            return stats;
        }
        if platform.is_directory(path) {
            let list = fileio::source_file_list_with(platform, path);
            if !list.ok {
                stats.state.record(ErrorKind::Unknown, "Failed to scan input directory");
                return stats;
            }
            stats.results = vec![CountResultGroup::default(); list.files.len()];
            stats.files = list.files;
        } else {
            stats.files = vec![SourceFile::new(path)];
            stats.results = vec![CountResultGroup::default()];
        }
        stats
    }

    /// The files subject to analysis, aligned by index with
    /// [`Statistics::results`].
    #[must_use]
    pub fn files(&self) -> &[SourceFile] {
        &self.files
    }

    /// The per-file count results, aligned by index with
    /// [`Statistics::files`].
    #[must_use]
    pub fn results(&self) -> &[CountResultGroup] {
        &self.results
    }

    /// Performs the counting operations selected by the given options.
    ///
    /// Files with unsupported formats are recorded as such and never abort
    /// processing. Other per-file failures are recorded in the file's
    /// result group; they elevate to the aggregate state and, with
    /// `stop_on_error`, halt the per-file loop. Critical errors always
    /// mark the aggregate as failed.
    pub fn count(&mut self, options: StatOptions) {
        if self.files.is_empty() {
            self.state.record(ErrorKind::InvalidInput, "No input files provided");
            return;
        }
        let options = options.normalized();

        // Set as successful upfront, potentially invalidated inside the loop
        self.state = ResultState::success();

        let mut files = std::mem::take(&mut self.files);
        let mut results = std::mem::take(&mut self.results);
        for (file, result) in files.iter_mut().zip(results.iter_mut()) {
            result.reset();

            let Some(format) = file.detect_format() else {
                result
                    .state
                    .record(ErrorKind::UnsupportedFormat, "The source format is not supported");
                continue;
            };
            if !options.format_selected(format) {
                continue;
            }
            let ok = self.count_file(&options, file, result, format);
            if !ok && (options.stop_on_error || !self.state.ok) {
                break;
            }
        }
        self.files = files;
        self.results = results;

        if self.files.len() == 1 {
            self.state = self.results[0].state;
        }
    }

    fn count_file(
        &mut self,
        options: &StatOptions,
        file: &mut SourceFile,
        result: &mut CountResultGroup,
        format: TextFormat,
    ) -> bool {
        log::debug!("Processing file: {}", file.path().display());

        let mut ok = self.ensure_file_content(options, file, result);
        if ok {
            if let Some(content) = file.content() {
                if options.operation_selected(StatOptions::COUNT_LOGICAL_LINES)
                    && format.is_programming_language()
                {
                    ok = self.count_logical(content, format, result);
                }
                if ok && options.operation_selected(StatOptions::COUNT_PHYSICAL_LINES) {
                    ok = self.count_physical(content, format, result);
                }
                if ok && options.operation_selected(StatOptions::COUNT_WORDS) {
                    ok = self.count_words(content, format, result);
                }
                if ok && options.operation_selected(StatOptions::COUNT_CHARACTERS) {
                    ok = self.count_characters(content, format, result);
                }
            }
        }
        if ok {
            let file_size = file.size();
            result.processed = true;
            result.source_size = file_size;
            self.size_processed += 1;
            self.total_source_size = self.total_source_size.wrapping_add(file_size);
            let slot = &mut self.source_size[format.index()];
            *slot = slot.wrapping_add(file_size);
        }
        if !options.keep_content {
            file.drop_content();
        }
        if !ok && options.stop_on_error {
            self.state = result.state;
            self.state.ok = false;
        }

        log::debug!("Done processing file: {}", file.path().display());
        ok
    }

    fn ensure_file_content(
        &mut self,
        options: &StatOptions,
        file: &mut SourceFile,
        result: &mut CountResultGroup,
    ) -> bool {
        let loaded = file.is_content_read() || file.read_content();
        if !loaded || !file.status().is_ok() || file.content().is_none() {
            result.state.record(ErrorKind::InvalidInput, "Failed to read file content");
            self.state.error = Some(ErrorKind::InvalidInput);
            self.state.message = Some("Failed to read file content");
            if options.stop_on_error {
                self.state.ok = false;
            }
            return false;
        }
        true
    }

    /// Folds an intermediate per-operation state into the aggregates.
    /// Returns `false` on failure, after zeroing the group's counts.
    fn check_intermediate(
        &mut self,
        result: &mut CountResultGroup,
        state: ResultState,
    ) -> bool {
        let Some(error) = state.error else {
            return true;
        };
        if error.is_critical() {
            self.state.ok = false;
            self.state.error = state.error;
            self.state.message = state.message;
        }
        result.state = state;
        result.state.ok = false;
        result.zero_counts();
        result.processed = false;
        false
    }

    fn count_logical(
        &mut self,
        content: &SourceText,
        format: TextFormat,
        result: &mut CountResultGroup,
    ) -> bool {
        let counted = crate::logical::count_logical_lines(format, content);
        if !self.check_intermediate(result, counted.state) {
            return false;
        }
        result.logical_lines = counted.count;
        result.state = ResultState::success();
        self.total_logical_lines = self.total_logical_lines.wrapping_add(counted.count);
        let slot = &mut self.logical_lines[format.index()];
        *slot = slot.wrapping_add(counted.count);
        true
    }

    fn count_physical(
        &mut self,
        content: &SourceText,
        format: TextFormat,
        result: &mut CountResultGroup,
    ) -> bool {
        let counted = crate::physical::count_physical_lines(content);
        if !self.check_intermediate(result, counted.state) {
            return false;
        }
        result.physical_lines = counted.count;
        result.state = ResultState::success();
        self.total_physical_lines = self.total_physical_lines.wrapping_add(counted.count);
        let slot = &mut self.physical_lines[format.index()];
        *slot = slot.wrapping_add(counted.count);
        true
    }

    fn count_words(
        &mut self,
        content: &SourceText,
        format: TextFormat,
        result: &mut CountResultGroup,
    ) -> bool {
        let counted = crate::words::count_words(content);
        if !self.check_intermediate(result, counted.state) {
            return false;
        }
        result.words = counted.count;
        result.state = ResultState::success();
        self.total_words = self.total_words.wrapping_add(counted.count);
        let slot = &mut self.words[format.index()];
        *slot = slot.wrapping_add(counted.count);
        true
    }

    fn count_characters(
        &mut self,
        content: &SourceText,
        format: TextFormat,
        result: &mut CountResultGroup,
    ) -> bool {
        let counted = crate::characters::count_characters(content);
        if !self.check_intermediate(result, counted.state) {
            return false;
        }
        result.characters = counted.count;
        result.state = ResultState::success();
        self.total_characters = self.total_characters.wrapping_add(counted.count);
        let slot = &mut self.characters[format.index()];
        *slot = slot.wrapping_add(counted.count);
        true
    }
}
