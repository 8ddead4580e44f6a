// crates/core/src/fileio/mod.rs

//! Interactions with the file system: reading source files and finding
//! regular files beneath a directory.

use std::fmt;
use std::fs::File;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::language::TextFormat;
use crate::result::Count;
use crate::source::SourceText;

pub mod platform;

pub use platform::{FileKind, NativePlatform, Platform};

/// The maximum size of a source file that will be processed.
/// Larger files are refused during reading.
pub const FILE_MAX_PROC_SIZE: u64 = 512 * 1024 * 1024;

/// The maximum number of files tracked per directory scan. This is an
/// arbitrary limit imposed to prevent resource exhaustion and infinite
/// loops during traversal of pathological trees.
pub const FILES_LIST_MAX_SIZE: usize = 10_000;

/// Enumeration of file processing operation status codes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub enum FileOpStatus {
    /// No error has occurred.
    #[default]
    Ok,
    /// A provided file path is invalid or malformed.
    InvalidPath,
    /// The file was not found in the file system.
    FileNotFound,
    /// An I/O error has occurred, e.g. permission denied or a read error.
    IoError,
    /// A memory allocation failure has occurred during file processing.
    AllocFailure,
    /// The file size exceeds [`FILE_MAX_PROC_SIZE`].
    FileTooLarge,
    /// Catch-all for errors that are not further specified.
    UnknownError,
}

impl FileOpStatus {
    #[must_use]
    pub fn is_ok(self) -> bool {
        self == Self::Ok
    }

    /// Numeric status code; zero indicates success.
    #[must_use]
    pub fn code(self) -> u32 {
        match self {
            Self::Ok => 0,
            Self::InvalidPath => 1,
            Self::FileNotFound => 2,
            Self::IoError => 3,
            Self::AllocFailure => 4,
            Self::FileTooLarge => 5,
            Self::UnknownError => 6,
        }
    }
}

impl fmt::Display for FileOpStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            Self::Ok => "ok",
            Self::InvalidPath => "invalid path",
            Self::FileNotFound => "file not found",
            Self::IoError => "I/O error",
            Self::AllocFailure => "allocation failure",
            Self::FileTooLarge => "file too large",
            Self::UnknownError => "unknown error",
        };
        f.write_str(text)
    }
}

/// A text source file: path metadata plus lazily loaded content.
///
/// The content may or may not be loaded at any given time; check
/// [`SourceFile::is_content_read`]. A read empty file has loaded content of
/// size zero.
#[derive(Debug)]
pub struct SourceFile {
    path: PathBuf,
    content: Option<SourceText>,
    status: FileOpStatus,
    content_read: bool,
}

impl SourceFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            content: None,
            status: FileOpStatus::Ok,
            content_read: false,
        }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// The file name, including the extension.
    #[must_use]
    pub fn name(&self) -> &std::ffi::OsStr {
        self.path.file_name().unwrap_or_else(|| self.path.as_os_str())
    }

    /// The file extension without the leading dot, or `None` if the name
    /// has no dot or ends with one.
    #[must_use]
    pub fn extension(&self) -> Option<&str> {
        let name = self.name().to_str()?;
        let dot = name.rfind('.')?;
        if dot + 1 >= name.len() {
            return None;
        }
        Some(&name[dot + 1..])
    }

    /// Detects the text format of this file from its extension.
    #[must_use]
    pub fn detect_format(&self) -> Option<TextFormat> {
        self.extension().and_then(TextFormat::from_extension)
    }

    #[must_use]
    pub fn status(&self) -> FileOpStatus {
        self.status
    }

    #[must_use]
    pub fn is_content_read(&self) -> bool {
        self.content_read
    }

    #[must_use]
    pub fn content(&self) -> Option<&SourceText> {
        self.content.as_ref()
    }

    /// The size of the loaded content in bytes, zero if not loaded.
    #[must_use]
    pub fn size(&self) -> Count {
        self.content.as_ref().map_or(0, |content| content.size() as Count)
    }

    /// Loads the entire file content into memory.
    ///
    /// A non-ok status on entry is sticky and makes this refuse without
    /// touching the file system. Calling this on an already loaded file is
    /// a no-op success. Returns `true` on success; on failure the status
    /// records the error kind.
    pub fn read_content(&mut self) -> bool {
        if !self.status.is_ok() {
            return false;
        }
        if self.content_read {
            return true;
        }
        if self.path.as_os_str().is_empty() {
            self.status = FileOpStatus::InvalidPath;
            return false;
        }
        let mut handle = match File::open(&self.path) {
            Ok(handle) => handle,
            Err(error) => {
                self.status = if error.kind() == io::ErrorKind::NotFound {
                    FileOpStatus::FileNotFound
                } else {
                    FileOpStatus::IoError
                };
                return false;
            }
        };
        let length = match handle.metadata() {
            Ok(metadata) => metadata.len(),
            Err(_) => {
                self.status = FileOpStatus::IoError;
                return false;
            }
        };
        if length > FILE_MAX_PROC_SIZE {
            self.status = FileOpStatus::FileTooLarge;
            return false;
        }
        let mut content = Vec::new();
        if content.try_reserve_exact(length as usize + 1).is_err() {
            self.status = FileOpStatus::AllocFailure;
            return false;
        }
        if handle.read_to_end(&mut content).is_err() {
            self.status = FileOpStatus::IoError;
            return false;
        }
        self.content = Some(SourceText::new(content));
        self.content_read = true;
        true
    }

    /// Releases any previously loaded file content. Safe to call multiple
    /// times.
    pub fn drop_content(&mut self) {
        self.content = None;
        self.content_read = false;
    }
}

/// A list of source files produced by a directory scan.
#[derive(Debug)]
pub struct SourceFileList {
    pub files: Vec<SourceFile>,
    pub ok: bool,
}

/// Creates a list of all regular files beneath the given directory path.
///
/// The traversal is iterative with an explicit directory stack. Entries
/// whose name begins with a dot are skipped, symbolic links are ignored
/// entirely, and entry kinds are resolved without following links. The
/// returned list is sorted ascending by file name under case-sensitive
/// byte comparison. The scan stops once [`FILES_LIST_MAX_SIZE`] files have
/// been collected.
#[must_use]
pub fn new_source_file_list(path: &Path) -> SourceFileList {
    source_file_list_with(&NativePlatform, path)
}

pub(crate) fn source_file_list_with(platform: &impl Platform, root: &Path) -> SourceFileList {
    let mut files: Vec<SourceFile> = Vec::new();
    let mut stack: Vec<PathBuf> = vec![root.to_path_buf()];
    while let Some(directory) = stack.pop() {
        scan_directory(platform, &directory, &mut stack, &mut files);
        if files.len() >= FILES_LIST_MAX_SIZE {
            break;
        }
    }
    files.sort_by(|a, b| a.name().as_encoded_bytes().cmp(b.name().as_encoded_bytes()));
    SourceFileList { files, ok: true }
}

fn scan_directory(
    platform: &impl Platform,
    directory: &Path,
    stack: &mut Vec<PathBuf>,
    files: &mut Vec<SourceFile>,
) {
    let Ok(entries) = platform.list_directory(directory) else {
        log::debug!("Cannot list directory: {}", directory.display());
        return;
    };
    for (name, kind) in entries {
        if name.as_encoded_bytes().first() == Some(&b'.') {
            continue; // dotfiles, including '.' and '..'
        }
        let full_path = directory.join(&name);
        match kind {
            FileKind::Regular => {
                if files.len() < FILES_LIST_MAX_SIZE {
                    files.push(SourceFile::new(full_path));
                }
            }
            FileKind::Directory => stack.push(full_path),
            FileKind::Symlink | FileKind::Other => {}
        }
    }
}

/// Checks whether the given path is a valid input for creating statistics.
/// Returns `None` if the path is valid, or a message describing the error.
pub(crate) fn validate_stats_input(
    platform: &impl Platform,
    path: &Path,
) -> Option<&'static str> {
    match platform.stat_no_follow(path) {
        Err(error) => Some(match error.kind() {
            io::ErrorKind::NotFound => "No such file or directory",
            io::ErrorKind::PermissionDenied => "Permission denied",
            _ => "Invalid input file path",
        }),
        Ok(FileKind::Regular | FileKind::Directory) => None,
        Ok(_) => Some("Is not a regular file or directory"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn name_and_extension_views() {
        let file = SourceFile::new("/tmp/dir/example.java");
        assert_eq!(file.name(), "example.java");
        assert_eq!(file.extension(), Some("java"));
        assert_eq!(file.detect_format(), Some(TextFormat::Java));

        assert_eq!(SourceFile::new("noext").extension(), None);
        assert_eq!(SourceFile::new("trailing.").extension(), None);
        assert_eq!(SourceFile::new("a.b.c").extension(), Some("c"));
    }

    #[test]
    fn uppercase_extensions_are_not_recognized() {
        assert_eq!(SourceFile::new("Main.JAVA").detect_format(), None);
        assert_eq!(SourceFile::new("main.C").detect_format(), None);
    }

    #[test]
    fn read_content_loads_bytes_and_is_idempotent() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("data.txt");
        fs::write(&path, b"hello\n").unwrap();

        let mut file = SourceFile::new(&path);
        assert!(file.read_content());
        assert!(file.is_content_read());
        assert_eq!(file.size(), 6);
        assert_eq!(file.content().unwrap().as_bytes(), b"hello\n");

        // A second read is a no-op success
        assert!(file.read_content());
        assert_eq!(file.size(), 6);

        file.drop_content();
        assert!(!file.is_content_read());
        assert_eq!(file.size(), 0);
    }

    #[test]
    fn reading_a_missing_file_sets_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let mut file = SourceFile::new(dir.path().join("nope.txt"));
        assert!(!file.read_content());
        assert_eq!(file.status(), FileOpStatus::FileNotFound);

        // The error status is sticky
        assert!(!file.read_content());
        assert_eq!(file.status(), FileOpStatus::FileNotFound);
    }

    #[test]
    fn oversized_files_are_refused() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("huge.txt");
        let handle = fs::File::create(&path).unwrap();
        handle.set_len(FILE_MAX_PROC_SIZE + 1).unwrap();

        let mut file = SourceFile::new(&path);
        assert!(!file.read_content());
        assert_eq!(file.status(), FileOpStatus::FileTooLarge);
        assert!(!file.is_content_read());
    }

    #[test]
    fn empty_path_is_an_invalid_path() {
        let mut file = SourceFile::new("");
        assert!(!file.read_content());
        assert_eq!(file.status(), FileOpStatus::InvalidPath);
    }

    #[test]
    fn scan_finds_nested_files_sorted_by_name() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir(dir.path().join("sub")).unwrap();
        fs::write(dir.path().join("zeta.txt"), "z").unwrap();
        fs::write(dir.path().join("sub/alpha.c"), "int x;\n").unwrap();
        fs::write(dir.path().join("beta.md"), "# b").unwrap();

        let list = new_source_file_list(dir.path());
        assert!(list.ok);
        let names: Vec<_> =
            list.files.iter().map(|f| f.name().to_string_lossy().into_owned()).collect();
        assert_eq!(names, ["alpha.c", "beta.md", "zeta.txt"]);
    }

    #[test]
    fn scan_skips_dotfiles_and_dot_directories() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir(dir.path().join(".git")).unwrap();
        fs::write(dir.path().join(".git/config.txt"), "x").unwrap();
        fs::write(dir.path().join(".hidden"), "x").unwrap();
        fs::write(dir.path().join("visible.txt"), "x").unwrap();

        let list = new_source_file_list(dir.path());
        let names: Vec<_> =
            list.files.iter().map(|f| f.name().to_string_lossy().into_owned()).collect();
        assert_eq!(names, ["visible.txt"]);
    }

    #[cfg(unix)]
    #[test]
    fn scan_ignores_symlinks() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("real.txt"), "x").unwrap();
        std::os::unix::fs::symlink(dir.path().join("real.txt"), dir.path().join("link.txt"))
            .unwrap();
        std::os::unix::fs::symlink(dir.path(), dir.path().join("loop")).unwrap();

        let list = new_source_file_list(dir.path());
        let names: Vec<_> =
            list.files.iter().map(|f| f.name().to_string_lossy().into_owned()).collect();
        assert_eq!(names, ["real.txt"]);
    }

    #[test]
    fn scan_of_unreadable_root_yields_empty_list() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("not-there");
        let list = new_source_file_list(&missing);
        assert!(list.ok);
        assert!(list.files.is_empty());
    }

    #[test]
    fn validate_reports_missing_paths() {
        let dir = tempfile::tempdir().unwrap();
        assert_eq!(
            validate_stats_input(&NativePlatform, &dir.path().join("missing")),
            Some("No such file or directory")
        );
        assert_eq!(validate_stats_input(&NativePlatform, dir.path()), None);
    }

    #[cfg(unix)]
    #[test]
    fn validate_rejects_symlinks() {
        let dir = tempfile::tempdir().unwrap();
        let target = dir.path().join("t.txt");
        fs::write(&target, "x").unwrap();
        let link = dir.path().join("l.txt");
        std::os::unix::fs::symlink(&target, &link).unwrap();
        assert_eq!(
            validate_stats_input(&NativePlatform, &link),
            Some("Is not a regular file or directory")
        );
    }
}
