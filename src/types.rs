use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// A single included file: where it lives on disk and how it is displayed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FileEntry {
    /// Absolute path, used when the renderer reads the content.
    pub path: PathBuf,
    /// Path relative to the scan root, used for all display.
    pub relative: String,
}

/// Diagnostics accumulated over one walk.
///
/// Each entry is a path relative to the scan root, in encounter order. A
/// fresh report is created per walk; together with the included-file list it
/// partitions everything under the root into four disjoint outcomes.
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub struct ScanReport {
    /// Directories not descended into because the depth limit was reached.
    pub skipped_depth_folders: Vec<String>,
    /// Directories skipped by name-based ignore rules or ignore patterns.
    pub ignored_folders: Vec<String>,
    /// Files that failed the extension/filename allow-list.
    pub skipped_unsupported_files: Vec<String>,
}

/// The complete result of one scan.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScanResult {
    /// The scan root all reported paths are relative to.
    pub root: PathBuf,
    /// The depth limit the scan ran with.
    pub max_depth: usize,
    /// Included files, in directory-listing encounter order. Never sorted.
    pub files: Vec<FileEntry>,
    /// Skip diagnostics for everything that was not included.
    pub report: ScanReport,
}

/// Counts reported back to the invoking shell after a successful export.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportSummary {
    pub files_included: usize,
    pub folders_skipped_depth: usize,
    pub folders_ignored: usize,
    pub files_skipped: usize,
    pub output_path: PathBuf,
}
