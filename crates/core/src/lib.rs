//! Core library of the Reckon project.
//!
//! Provides functionality to count the occurrences of various source code
//! related concepts, such as the number of words, physical lines and logical
//! lines of code. Counting is supported for multiple programming languages
//! and text formats, enumerated by [`TextFormat`]. Input text must be encoded
//! in UTF-8, or in UTF-16 with a BOM indicating endianness. Text with
//! encoding errors is processed gracefully but the computed result
//! is undefined.
//!
//! The typical usage is to create a [`Statistics`] value for a file or
//! directory path with [`Statistics::for_path`], select the desired counting
//! operations and formats through [`StatOptions`], and run
//! [`Statistics::count`]. Single-operation entry points such as
//! [`count_physical_lines`] and [`count_logical_lines`] are available for
//! callers that bring their own text.

pub mod annotation;
pub mod characters;
pub mod encoding;
pub mod fileio;
pub mod grammar;
pub mod language;
pub mod logical;
pub mod physical;
pub mod result;
pub mod source;
pub mod stats;
pub mod tree;
pub mod words;

pub use characters::count_characters;
pub use encoding::{Encoding, detect_encoding, has_utf8_bom};
pub use fileio::{FileOpStatus, SourceFile, SourceFileList, new_source_file_list};
pub use language::{NUM_FORMATS, TextFormat};
pub use logical::{count_logical_lines, mark_logical_lines, mark_logical_lines_in_file};
pub use physical::count_physical_lines;
pub use result::{Count, CountResult, CountResultGroup, ErrorKind, ResultState};
pub use source::SourceText;
pub use stats::{StatOptions, Statistics};
pub use words::count_words;
