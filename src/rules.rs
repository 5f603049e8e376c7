//! Filtering rules: which directories are skipped outright, which files are
//! considered exportable text, and the extension-to-fence-language mapping.
//!
//! The default tables are compiled in; callers can override the sets through
//! [`ExportOptions`](crate::ExportOptions).

use crate::options::ExportOptions;
use std::collections::HashSet;
use std::path::Path;

/// Default maximum folder depth below the scan root (0 = the root itself).
pub const DEFAULT_MAX_DEPTH: usize = 15;

/// Directory names ignored entirely, compared lower-cased.
pub(crate) const IGNORED_DIR_NAMES: &[&str] = &[
    "node_modules",
    ".git",
    ".vscode",
    "dist",
    "build",
    "coverage",
    ".idea",
    "out",
    "uploads",
    "logs",
    "tmp",
    "temp",
    "sfml-2.6.2",
    ".temp-storage-area",
    "labs",
    "private",
];

/// Extensions considered readable text, lower-cased and without the dot.
pub(crate) const ALLOWED_EXTENSIONS: &[&str] = &[
    // Web / JS / TS
    "js", "mjs", "cjs", "ts", "tsx", "jsx", "json", "jsonc",
    // Markup / templates
    "html", "css", "scss", "sass", "less", "md", "txt", "njk",
    // Data / config (text)
    "yaml", "yml", "toml", "ini", "cfg", "properties", "xml",
    // Python
    "py", "pyi", "ipynb",
    // C / C++
    "c", "h", "cpp", "hpp", "cc", "cxx", "hh", "ipp",
    // C# / Java
    "cs", "csx", "java",
    // SQL
    "sql",
    // Common scripts
    "sh", "bash", "zsh", "ps1", "bat", "cmd",
    // Build / tooling
    "cmake", "mk",
    // Other common languages
    "rb", "go", "rs", "php", "kt", "kts", "swift", "dart", "lua", "r", "scala",
    "pl", "pm", "groovy", "gradle", "proto", "graphql", "gql",
    "dockerignore", "gitmodules",
    // CMake configure_file templates (e.g. foo.hpp.in)
    "in",
    // Objective-C / Obj-C++
    "mm", "m",
    "vue", "svelte",
];

/// Extensionless-but-important code/build files, matched on the full
/// lower-cased basename.
pub(crate) const ALLOWED_FILENAMES: &[&str] = &[
    "cmakelists.txt",
    "makefile",
    "dockerfile",
    ".gitignore",
    ".gitattributes",
    ".editorconfig",
    ".env.example",
    ".npmrc",
    ".nvmrc",
    ".prettierrc",
    ".eslintrc",
    ".eslintignore",
    ".prettierignore",
    "license",
    "readme",
];

/// Resolved lookup form of the filter configuration. Pure lookups, no state.
#[derive(Debug, Clone)]
pub struct FilterRules {
    ignored_dirs: HashSet<String>,
    allowed_extensions: HashSet<String>,
    allowed_filenames: HashSet<String>,
}

impl Default for FilterRules {
    fn default() -> Self {
        Self {
            ignored_dirs: IGNORED_DIR_NAMES.iter().map(|s| (*s).to_string()).collect(),
            allowed_extensions: ALLOWED_EXTENSIONS.iter().map(|s| (*s).to_string()).collect(),
            allowed_filenames: ALLOWED_FILENAMES.iter().map(|s| (*s).to_string()).collect(),
        }
    }
}

impl FilterRules {
    pub(crate) fn from_options(options: &ExportOptions) -> Self {
        Self {
            ignored_dirs: options
                .ignored_dir_names
                .iter()
                .map(|n| n.to_lowercase())
                .collect(),
            allowed_extensions: options
                .allowed_extensions
                .iter()
                .map(|e| e.to_lowercase())
                .collect(),
            allowed_filenames: options
                .allowed_filenames
                .iter()
                .map(|n| n.to_lowercase())
                .collect(),
        }
    }

    /// Whether a directory with this name is skipped without descending.
    ///
    /// Names containing "lego" are never ignored, regardless of ignore-set
    /// membership. The carve-out is deliberate and takes precedence.
    pub fn is_ignored_dir(&self, name: &str) -> bool {
        let lower = name.to_lowercase();
        if lower.contains("lego") {
            return false;
        }
        self.ignored_dirs.contains(&lower)
    }

    /// Whether a file passes the allow-list: known extensionless basename, or
    /// allow-listed extension. Case-insensitive on both.
    pub fn is_exportable(&self, path: &Path) -> bool {
        if let Some(base) = path.file_name() {
            let base = base.to_string_lossy().to_lowercase();
            if self.allowed_filenames.contains(&base) {
                return true;
            }
        }
        match path.extension() {
            Some(ext) => self
                .allowed_extensions
                .contains(&ext.to_string_lossy().to_lowercase()),
            None => false,
        }
    }
}

/// Short language tag for a fenced code block, derived from the extension.
///
/// Returns an empty string for unknown extensions, and for `.in` templates
/// whose language cannot be inferred from the extension alone.
pub fn fence_language(path: &Path) -> &'static str {
    let ext = match path.extension() {
        Some(ext) => ext.to_string_lossy().to_lowercase(),
        None => return "",
    };
    match ext.as_str() {
        "js" | "mjs" | "cjs" => "javascript",
        "ts" => "typescript",
        "md" => "markdown",
        "tsx" => "tsx",
        "jsx" => "jsx",
        "json" | "jsonc" => "json",
        "html" => "html",
        "css" | "scss" | "sass" | "less" => "css",
        "yaml" | "yml" => "yaml",
        "toml" => "toml",
        "xml" => "xml",
        "njk" => "njk",
        "sql" => "sql",
        "cs" | "csx" => "csharp",
        "java" => "java",
        "c" => "c",
        "cpp" | "h" | "hpp" | "cc" | "cxx" | "hh" | "ipp" => "cpp",
        "sh" | "bash" | "zsh" => "bash",
        "ps1" => "powershell",
        "py" | "pyi" => "python",
        // notebooks are JSON
        "ipynb" => "json",
        "rb" => "ruby",
        "go" => "go",
        "rs" => "rust",
        "php" => "php",
        "kt" | "kts" => "kotlin",
        "swift" => "swift",
        "dart" => "dart",
        "lua" => "lua",
        "r" => "r",
        "scala" => "scala",
        "pl" | "pm" => "perl",
        "groovy" | "gradle" => "groovy",
        "proto" => "proto",
        "graphql" | "gql" => "graphql",
        "bat" | "cmd" => "bat",
        "dockerignore" => "docker",
        "gitmodules" => "gitconfig",
        // template file, language depends on content
        "in" => "",
        "m" => "objectivec",
        "mm" => "objectivecpp",
        "vue" => "vue",
        "svelte" => "svelte",
        _ => "",
    }
}
