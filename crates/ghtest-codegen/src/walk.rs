//! File walker factory for discovery.
//!
//! Uses the `ignore` crate for directory walking. Entries are sorted by file
//! name so that generated output does not depend on platform enumeration
//! order.
//!
//! ## Walking modes
//!
//! - `Raw`: disables all standard filters. Walks every file, including hidden
//!   files and ignored directories. This is the default for discovery.
//! - `RespectIgnoreFiles`: honors `.gitignore`, `.ignore` and `.ghtestignore`
//!   files and skips hidden entries.

use ignore::WalkBuilder;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Custom ignore file consulted in [`WalkMode::RespectIgnoreFiles`].
pub const IGNORE_FILENAME: &str = ".ghtestignore";

/// Walking mode for the file walker.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WalkMode {
    /// No filters: every file below the root is visited.
    #[default]
    Raw,
    /// Standard ignore-file and hidden-entry filtering.
    RespectIgnoreFiles,
}

impl WalkMode {
    #[must_use]
    pub const fn from_flag(respect_ignore_files: bool) -> Self {
        if respect_ignore_files {
            Self::RespectIgnoreFiles
        } else {
            Self::Raw
        }
    }
}

/// Build a sorted, recursive walker over `root`.
///
/// # Examples
///
/// ```no_run
/// use std::path::Path;
/// use ghtest_codegen::walk::{build_walker, WalkMode};
///
/// for entry in build_walker(Path::new("tests/gh"), WalkMode::Raw) {
///     println!("{:?}", entry.map(|e| e.into_path()));
/// }
/// ```
#[must_use]
pub fn build_walker(root: &Path, mode: WalkMode) -> ignore::Walk {
    let mut builder = WalkBuilder::new(root);

    match mode {
        WalkMode::Raw => {
            builder.standard_filters(false);
            builder.hidden(false);
        }
        WalkMode::RespectIgnoreFiles => {
            builder.add_custom_ignore_filename(IGNORE_FILENAME);
        }
    }

    builder.sort_by_file_name(|a, b| a.cmp(b));
    builder.build()
}
