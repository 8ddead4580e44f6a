// crates/core/src/fileio/platform.rs

//! Thin platform shim over the file system.
//!
//! Directory scanning needs exactly three operations, factored into a trait
//! so that traversal logic stays platform-neutral and testable.

use std::ffi::OsString;
use std::fs;
use std::io;
use std::path::Path;

/// The kind of a directory entry, resolved without following symlinks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileKind {
    Regular,
    Directory,
    Symlink,
    Other,
}

pub trait Platform {
    /// Lists the entries of a directory as `(name, kind)` pairs, in no
    /// particular order. Symbolic links are reported as such, never
    /// followed.
    fn list_directory(&self, path: &Path) -> io::Result<Vec<(OsString, FileKind)>>;

    /// Stats a path without following symbolic links.
    fn stat_no_follow(&self, path: &Path) -> io::Result<FileKind>;

    /// Tests whether the path refers to an existing directory.
    fn is_directory(&self, path: &Path) -> bool;
}

/// The standard-library backed platform implementation.
#[derive(Debug, Default, Clone, Copy)]
pub struct NativePlatform;

impl Platform for NativePlatform {
    fn list_directory(&self, path: &Path) -> io::Result<Vec<(OsString, FileKind)>> {
        let mut entries = Vec::new();
        for entry in fs::read_dir(path)? {
            let Ok(entry) = entry else {
                continue;
            };
            let kind = entry.file_type().map_or(FileKind::Other, kind_of);
            entries.push((entry.file_name(), kind));
        }
        Ok(entries)
    }

    fn stat_no_follow(&self, path: &Path) -> io::Result<FileKind> {
        fs::symlink_metadata(path).map(|metadata| kind_of(metadata.file_type()))
    }

    fn is_directory(&self, path: &Path) -> bool {
        matches!(self.stat_no_follow(path), Ok(FileKind::Directory))
    }
}

fn kind_of(file_type: fs::FileType) -> FileKind {
    if file_type.is_symlink() {
        FileKind::Symlink
    } else if file_type.is_dir() {
        FileKind::Directory
    } else if file_type.is_file() {
        FileKind::Regular
    } else {
        FileKind::Other
    }
}
