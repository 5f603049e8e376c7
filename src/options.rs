use crate::rules;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportOptions {
    pub root: PathBuf,
    pub max_depth: usize,
    pub ignored_dir_names: Vec<String>,
    pub allowed_extensions: Vec<String>,
    pub allowed_filenames: Vec<String>,
    pub ignore_patterns: Vec<String>,
}
impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            root: PathBuf::from("."),
            max_depth: rules::DEFAULT_MAX_DEPTH,
            ignored_dir_names: rules::IGNORED_DIR_NAMES
                .iter()
                .map(|s| (*s).to_string())
                .collect(),
            allowed_extensions: rules::ALLOWED_EXTENSIONS
                .iter()
                .map(|s| (*s).to_string())
                .collect(),
            allowed_filenames: rules::ALLOWED_FILENAMES
                .iter()
                .map(|s| (*s).to_string())
                .collect(),
            ignore_patterns: Vec::new(),
        }
    }
}
#[derive(Debug, Default)]
pub struct ExportBuilder {
    options: ExportOptions,
}
impl ExportBuilder {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            options: ExportOptions {
                root: root.into(),
                ..Default::default()
            },
        }
    }
    pub fn max_depth(mut self, depth: usize) -> Self {
        self.options.max_depth = depth;
        self
    }
    pub fn ignored_dir_names(mut self, names: Vec<String>) -> Self {
        self.options.ignored_dir_names = names;
        self
    }
    pub fn allowed_extensions(mut self, extensions: Vec<String>) -> Self {
        self.options.allowed_extensions = extensions;
        self
    }
    pub fn allowed_filenames(mut self, names: Vec<String>) -> Self {
        self.options.allowed_filenames = names;
        self
    }
    pub fn ignore_patterns(mut self, patterns: Vec<String>) -> Self {
        self.options.ignore_patterns = patterns;
        self
    }
    pub fn build(self) -> ExportOptions {
        self.options
    }
}
