//! Command-line interface for repocat.
//!
//! Given a directory argument, runs a non-interactive export. Invoked with
//! no arguments, it walks the user through an interactive prompt flow:
//! pick a top-level folder (or type a custom path), pick a format, pick an
//! output filename, export.

use clap::{Parser, ValueEnum};
use repocat::{
    ExportBuilder, ExportOptions, ExportSummary, OutputFormat, export_to_file, scan,
    structure_listing,
};
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::process::exit;

/// repocat — single-document repository exporter
#[derive(Parser)]
#[command(name = "repocat", version, about, long_about = None)]
struct Cli {
    /// Directory to export; prompts interactively when omitted
    directory: Option<PathBuf>,

    /// Output file (default: <dirname>-export.<ext>)
    output: Option<PathBuf>,

    /// Output format
    #[arg(long, value_enum, default_value_t = Format::Text)]
    format: Format,

    /// Maximum folder depth below the root (0 = the root itself)
    #[arg(long)]
    max_depth: Option<usize>,

    /// Extra ignore patterns matched against relative paths (can be repeated)
    #[arg(short = 'I', long = "ignore")]
    ignore_patterns: Vec<String>,

    /// Print a tree-style structure listing instead of exporting contents
    #[arg(long)]
    structure: bool,

    /// Print the export summary as JSON
    #[arg(long)]
    json_summary: bool,
}

#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
enum Format {
    Text,
    Markdown,
}

impl Format {
    fn into_output(self) -> OutputFormat {
        match self {
            Format::Text => OutputFormat::Text,
            Format::Markdown => OutputFormat::Markdown,
        }
    }
}

fn main() {
    let cli = Cli::parse();
    match cli.directory.clone() {
        Some(directory) => run_export(&cli, directory),
        None => run_interactive(),
    }
}

fn build_options(root: PathBuf, max_depth: Option<usize>, ignore_patterns: Vec<String>) -> ExportOptions {
    let mut builder = ExportBuilder::new(root).ignore_patterns(ignore_patterns);
    if let Some(depth) = max_depth {
        builder = builder.max_depth(depth);
    }
    builder.build()
}

fn run_export(cli: &Cli, directory: PathBuf) {
    let format = cli.format.into_output();
    let options = build_options(directory, cli.max_depth, cli.ignore_patterns.clone());

    if cli.structure {
        run_structure(&options, cli.output.clone());
        return;
    }

    let output_path = cli
        .output
        .clone()
        .unwrap_or_else(|| default_output_name(&options.root, format));
    match export_to_file(&options, format, &output_path) {
        Ok(summary) => print_summary(&summary, options.max_depth, cli.json_summary),
        Err(e) => {
            eprintln!("Error: {}", e);
            exit(1);
        }
    }
}

fn run_structure(options: &ExportOptions, output: Option<PathBuf>) {
    let result = match scan(options) {
        Ok(r) => r,
        Err(e) => {
            eprintln!("Error: {}", e);
            exit(1);
        }
    };
    let listing = structure_listing(&result);
    print!("{}", listing);

    let output_path = output.unwrap_or_else(|| PathBuf::from("project-structure.txt"));
    if let Err(e) = fs::write(&output_path, &listing) {
        eprintln!("Error: {}", e);
        exit(1);
    }
    println!("\nSaved to {}", output_path.display());
}

fn default_output_name(root: &Path, format: OutputFormat) -> PathBuf {
    let base = root
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| "export".to_string());
    PathBuf::from(format!("{}-export.{}", base, format.extension()))
}

fn print_summary(summary: &ExportSummary, max_depth: usize, as_json: bool) {
    if as_json {
        let json = serde_json::to_string_pretty(summary).unwrap_or_else(|e| {
            eprintln!("JSON serialization error: {}", e);
            exit(1);
        });
        println!("{}", json);
        return;
    }
    println!("Export complete.");
    println!("   Files included: {}", summary.files_included);
    println!(
        "   Folders skipped (depth > {}): {}",
        max_depth, summary.folders_skipped_depth
    );
    println!("   Folders ignored (pattern): {}", summary.folders_ignored);
    println!(
        "   Files skipped (unsupported type): {}",
        summary.files_skipped
    );
    println!("   Output written to: {}", summary.output_path.display());
}

// ----------------------- Interactive flow -----------------------

fn run_interactive() {
    let base_dir = match std::env::current_dir() {
        Ok(d) => d,
        Err(e) => {
            eprintln!("Error: {}", e);
            exit(1);
        }
    };
    let folders = match list_folders(&base_dir) {
        Ok(f) => f,
        Err(e) => {
            eprintln!("Error: {}", e);
            exit(1);
        }
    };

    println!("Detected top-level folders in this directory:\n");
    for (index, folder) in folders.iter().enumerate() {
        println!("  {}) {}", index + 1, folder);
    }
    println!("  {}) [Custom Path]", folders.len() + 1);
    println!("  {}) Quit\n", folders.len() + 2);

    let max_option = folders.len() + 2;
    let choice = ask(&format!("Select a folder to export (1-{}): ", max_option));
    let choice_num: usize = match choice.parse() {
        Ok(n) if (1..=max_option).contains(&n) => n,
        _ => {
            eprintln!("Invalid choice. Exiting.");
            exit(1);
        }
    };

    if choice_num == max_option {
        println!("Quit selected. Exiting.");
        return;
    }

    let target_dir = if choice_num == folders.len() + 1 {
        let custom = ask("Enter custom path to export (relative or absolute): ");
        base_dir.join(custom)
    } else {
        base_dir.join(&folders[choice_num - 1])
    };

    if !target_dir.is_dir() {
        eprintln!("That path is not a directory. Exiting.");
        exit(1);
    }

    println!("\nChoose output format:");
    println!("  1) Text");
    println!("  2) Markdown\n");
    let fmt = ask("Format (1-2): ");
    let format = if fmt == "2" {
        OutputFormat::Markdown
    } else {
        OutputFormat::Text
    };

    let default_name = default_output_name(&target_dir, format);
    let answer = ask(&format!(
        "Output file name? (Enter for default: {}): ",
        default_name.display()
    ));
    let output_path = if answer.is_empty() {
        base_dir.join(default_name)
    } else {
        base_dir.join(answer)
    };

    println!("\nScanning and exporting...\n");

    let options = ExportBuilder::new(target_dir).build();
    match export_to_file(&options, format, &output_path) {
        Ok(summary) => print_summary(&summary, options.max_depth, false),
        Err(e) => {
            eprintln!("Error: {}", e);
            exit(1);
        }
    }
}

fn list_folders(base_dir: &Path) -> io::Result<Vec<String>> {
    let mut folders = Vec::new();
    for entry in fs::read_dir(base_dir)? {
        let entry = entry?;
        if fs::metadata(entry.path())?.is_dir() {
            folders.push(entry.file_name().to_string_lossy().into_owned());
        }
    }
    Ok(folders)
}

fn ask(prompt: &str) -> String {
    print!("{}", prompt);
    let _ = io::stdout().flush();
    let mut line = String::new();
    if io::stdin().read_line(&mut line).is_err() {
        eprintln!("Failed to read input");
        exit(1);
    }
    line.trim().to_string()
}
