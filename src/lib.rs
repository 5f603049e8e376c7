//! # Repocat
//!
//! `repocat` walks a directory tree, filters out irrelevant or unsafe entries,
//! and concatenates the contents of the remaining files into a single report
//! document — plain text, or Markdown with syntax-highlighted code fences.
//!
//! Filtering combines three rules: directory names on a compiled-in ignore
//! list are skipped outright, directories beyond a configurable depth limit
//! are skipped, and only files whose extension or basename is on a text
//! allow-list are included. Everything that was skipped is recorded in a
//! [`ScanReport`] and listed at the top of the rendered document.
//!
//! # Features
//!
//! - `logging`: Enables debug logging via the `tracing` crate.
//!
//! # Example
//!
//! ```no_run
//! use repocat::{ExportBuilder, OutputFormat, format_scan, scan};
//!
//! let options = ExportBuilder::new("./my-project")
//!     .max_depth(5)
//!     .ignore_patterns(vec!["*.lock".to_string()])
//!     .build();
//!
//! let result = scan(&options).expect("Failed to scan directory");
//! let document = format_scan(&result, OutputFormat::Markdown).expect("Failed to render");
//!
//! println!("{}", document);
//! for file in &result.files {
//!     println!("Included: {}", file.relative);
//! }
//! ```

mod engine;
mod error;
mod options;
pub mod output;
mod rules;
mod tree;
mod types;

pub use engine::{export_to_file, scan};
pub use error::ExportError;
pub use options::{ExportBuilder, ExportOptions};
pub use output::{OutputFormat, format_scan, write_scan_to_file};
pub use rules::{FilterRules, fence_language};
pub use tree::structure_listing;
pub use types::{ExportSummary, FileEntry, ScanReport, ScanResult};
