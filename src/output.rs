//! Output rendering for scan results.
//!
//! Provides functions to render a [`ScanResult`] into a plain-text or
//! Markdown report document. File contents are read here, at render time,
//! as UTF-8 text; the text variant passes content through unmodified, the
//! Markdown variant normalizes CRLF line endings inside code fences.

use crate::error::ExportError;
use crate::rules::fence_language;
use crate::types::{FileEntry, ScanResult};
use std::fs;
use std::path::Path;
#[cfg(feature = "logging")]
use tracing;

/// Supported report formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Markdown,
}

impl OutputFormat {
    /// Returns the conventional file extension for this format.
    pub fn extension(&self) -> &'static str {
        match self {
            OutputFormat::Text => "txt",
            OutputFormat::Markdown => "md",
        }
    }
}

/// Renders the scan into a single report document.
///
/// Section order is fixed — depth-skipped folders, ignored folders,
/// unsupported files, then the included files in scan order — so output on
/// an unchanged tree is diffable across runs.
pub fn format_scan(result: &ScanResult, format: OutputFormat) -> Result<String, ExportError> {
    match format {
        OutputFormat::Text => format_text(result),
        OutputFormat::Markdown => format_markdown(result),
    }
}

/// Renders the scan and writes the document to a file in one pass.
pub fn write_scan_to_file(
    result: &ScanResult,
    format: OutputFormat,
    path: impl AsRef<Path>,
) -> Result<(), ExportError> {
    let content = format_scan(result, format)?;
    #[cfg(feature = "logging")]
    tracing::debug!("Writing report to: {}", path.as_ref().display());
    fs::write(&path, content).map_err(|e| ExportError::io(path.as_ref(), e))?;
    Ok(())
}

// ----------------------- Internal formatting -----------------------

fn read_entry(entry: &FileEntry) -> Result<String, ExportError> {
    fs::read_to_string(&entry.path).map_err(|e| ExportError::io(&entry.path, e))
}

fn format_text(result: &ScanResult) -> Result<String, ExportError> {
    let mut out = String::with_capacity(1024);
    let report = &result.report;

    if !report.skipped_depth_folders.is_empty() {
        out.push_str(&format!(
            "===== Skipped Folders (Exceeded Depth {}) =====\n",
            result.max_depth
        ));
        for folder in &report.skipped_depth_folders {
            out.push_str(&format!("[SKIPPED FOLDER]: {}\n", folder));
        }
        out.push('\n');
    }

    if !report.ignored_folders.is_empty() {
        out.push_str("===== Ignored Folders (Pattern) =====\n");
        for folder in &report.ignored_folders {
            out.push_str(&format!("[IGNORED FOLDER]: {}\n", folder));
        }
        out.push('\n');
    }

    if !report.skipped_unsupported_files.is_empty() {
        out.push_str("===== Skipped Binary/Unsupported Files =====\n");
        for file in &report.skipped_unsupported_files {
            out.push_str(&format!("[SKIPPED FILE]: {}\n", file));
        }
        out.push('\n');
    }

    for entry in &result.files {
        let content = read_entry(entry)?;
        out.push_str("\n\n==============================\n");
        out.push_str(&format!("FILE: {}\n", entry.relative));
        out.push_str("==============================\n\n");
        out.push_str(&content);
        out.push('\n');
    }
    Ok(out)
}

fn format_markdown(result: &ScanResult) -> Result<String, ExportError> {
    let mut out = String::with_capacity(1024);
    let report = &result.report;
    out.push_str("# Export Report\n\n");

    if !report.skipped_depth_folders.is_empty() {
        out.push_str(&format!(
            "## Skipped Folders (Exceeded Depth {})\n",
            result.max_depth
        ));
        for folder in &report.skipped_depth_folders {
            out.push_str(&format!("- `{}`\n", folder));
        }
        out.push('\n');
    }

    if !report.ignored_folders.is_empty() {
        out.push_str("## Ignored Folders (Pattern)\n");
        for folder in &report.ignored_folders {
            out.push_str(&format!("- `{}`\n", folder));
        }
        out.push('\n');
    }

    if !report.skipped_unsupported_files.is_empty() {
        out.push_str("## Skipped Binary/Unsupported Files\n");
        for file in &report.skipped_unsupported_files {
            out.push_str(&format!("- `{}`\n", file));
        }
        out.push('\n');
    }

    for entry in &result.files {
        let content = read_entry(entry)?;
        let lang = fence_language(&entry.path);
        out.push_str("\n---\n\n");
        out.push_str(&format!("## `{}`\n\n", entry.relative));
        out.push_str(&format!("```{}\n", lang));
        out.push_str(&content.replace("\r\n", "\n"));
        out.push_str("\n```\n");
    }

    out.push_str("\n---\n");
    Ok(out)
}
