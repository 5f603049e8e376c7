use crate::error::ExportError;
use crate::options::ExportOptions;
use crate::output::{self, OutputFormat};
use crate::rules::FilterRules;
use crate::types::{ExportSummary, FileEntry, ScanReport, ScanResult};
use std::fs;
use std::path::{Path, PathBuf};
#[cfg(feature = "logging")]
use tracing;
struct Walker {
    root: PathBuf,
    max_depth: usize,
    rules: FilterRules,
    matcher: Option<globset::GlobSet>,
    files: Vec<FileEntry>,
    report: ScanReport,
}
impl Walker {
    fn new(options: &ExportOptions) -> Result<Self, ExportError> {
        let matcher = if !options.ignore_patterns.is_empty() {
            let mut glob_builder = globset::GlobSetBuilder::new();
            for pattern in &options.ignore_patterns {
                let glob = globset::Glob::new(pattern).map_err(|e| {
                    ExportError::Walk(format!("Invalid glob pattern '{}': {}", pattern, e))
                })?;
                glob_builder.add(glob);
            }
            Some(
                glob_builder
                    .build()
                    .map_err(|e| ExportError::Walk(format!("Failed to build glob set: {}", e)))?,
            )
        } else {
            None
        };
        Ok(Self {
            root: options.root.clone(),
            max_depth: options.max_depth,
            rules: FilterRules::from_options(options),
            matcher,
            files: Vec::new(),
            report: ScanReport::default(),
        })
    }
    fn matches_pattern(&self, relative: &str) -> bool {
        self.matcher.as_ref().is_some_and(|m| m.is_match(relative))
    }
    // Classification order for directories: name-based ignore, explicit
    // pattern, depth limit, then descend. The "lego" carve-out lives in the
    // name check only; user patterns are not subject to it.
    fn walk(&mut self, dir: &Path, depth: usize) -> Result<(), ExportError> {
        let entries = fs::read_dir(dir).map_err(|e| ExportError::io(dir, e))?;
        for entry in entries {
            let entry = entry.map_err(|e| ExportError::io(dir, e))?;
            let path = entry.path();
            let name = entry.file_name().to_string_lossy().into_owned();
            let relative = relative_to(&self.root, &path);
            let metadata = fs::metadata(&path).map_err(|e| ExportError::io(&path, e))?;
            if metadata.is_dir() {
                if self.rules.is_ignored_dir(&name) || self.matches_pattern(&relative) {
                    #[cfg(feature = "logging")]
                    tracing::debug!("Ignored folder: {}", relative);
                    self.report.ignored_folders.push(relative);
                    continue;
                }
                if depth >= self.max_depth {
                    #[cfg(feature = "logging")]
                    tracing::debug!("Depth limit reached at: {}", relative);
                    self.report.skipped_depth_folders.push(relative);
                    continue;
                }
                self.walk(&path, depth + 1)?;
            } else {
                if self.matches_pattern(&relative) || !self.rules.is_exportable(&path) {
                    self.report.skipped_unsupported_files.push(relative);
                    continue;
                }
                self.files.push(FileEntry { path, relative });
            }
        }
        Ok(())
    }
}
fn relative_to(root: &Path, path: &Path) -> String {
    path.strip_prefix(root)
        .unwrap_or(path)
        .to_string_lossy()
        .into_owned()
}

/// Walks the tree under `options.root` and classifies every entry.
///
/// No file content is read here; reading is deferred to render time, so a
/// scan only performs listing and `stat` calls. Listing order is whatever
/// the filesystem yields; it is preserved, not sorted. Any listing or stat
/// failure aborts the whole scan.
pub fn scan(options: &ExportOptions) -> Result<ScanResult, ExportError> {
    #[cfg(feature = "logging")]
    tracing::debug!("Starting scan with root: {}", options.root.display());
    let metadata = fs::metadata(&options.root).map_err(|e| ExportError::io(&options.root, e))?;
    if !metadata.is_dir() {
        return Err(ExportError::NotADirectory(
            options.root.display().to_string(),
        ));
    }
    let mut walker = Walker::new(options)?;
    let root = walker.root.clone();
    walker.walk(&root, 0)?;
    Ok(ScanResult {
        root: walker.root,
        max_depth: walker.max_depth,
        files: walker.files,
        report: walker.report,
    })
}

/// Scans, renders, and writes in one pass — the entry point the shells call.
pub fn export_to_file(
    options: &ExportOptions,
    format: OutputFormat,
    output_path: impl AsRef<Path>,
) -> Result<ExportSummary, ExportError> {
    let result = scan(options)?;
    output::write_scan_to_file(&result, format, &output_path)?;
    Ok(ExportSummary {
        files_included: result.files.len(),
        folders_skipped_depth: result.report.skipped_depth_folders.len(),
        folders_ignored: result.report.ignored_folders.len(),
        files_skipped: result.report.skipped_unsupported_files.len(),
        output_path: output_path.as_ref().to_path_buf(),
    })
}
