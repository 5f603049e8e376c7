use repocat::{ExportBuilder, ExportError, ExportSummary, OutputFormat, export_to_file, scan};
use std::fs;
use tempfile::tempdir;
#[test]
fn integration_default_rules_example_tree() {
    let dir = tempdir().unwrap();
    fs::create_dir(dir.path().join("node_modules")).unwrap();
    fs::write(dir.path().join("node_modules/x.js"), "junk").unwrap();
    fs::create_dir(dir.path().join("src")).unwrap();
    fs::write(dir.path().join("src/a.py"), "a = 1").unwrap();
    fs::create_dir(dir.path().join("src/.legoignore")).unwrap();
    fs::write(dir.path().join("src/.legoignore/keep.txt"), "kept").unwrap();
    fs::write(dir.path().join("README"), "readme").unwrap();
    let options = ExportBuilder::new(dir.path()).build();
    let result = scan(&options).unwrap();
    let included: Vec<&str> = result.files.iter().map(|f| f.relative.as_str()).collect();
    assert_eq!(included.len(), 3);
    assert!(included.contains(&"src/a.py"));
    assert!(included.contains(&"src/.legoignore/keep.txt"));
    assert!(included.contains(&"README"));
    assert_eq!(result.report.ignored_folders, vec!["node_modules"]);
    assert!(result.report.skipped_depth_folders.is_empty());
    assert!(result.report.skipped_unsupported_files.is_empty());
}
#[test]
fn integration_export_markdown_to_file() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("main.rs"), "fn main() {}\n").unwrap();
    fs::write(dir.path().join("notes.bin"), b"\x00SECRET").unwrap();
    let output_path = dir.path().join("out.md");
    let options = ExportBuilder::new(dir.path()).build();
    let summary = export_to_file(&options, OutputFormat::Markdown, &output_path).unwrap();
    assert_eq!(summary.files_included, 1);
    assert_eq!(summary.files_skipped, 1);
    assert_eq!(summary.folders_ignored, 0);
    assert_eq!(summary.output_path, output_path);
    let document = fs::read_to_string(&output_path).unwrap();
    assert!(document.starts_with("# Export Report\n"));
    assert!(document.contains("## Skipped Binary/Unsupported Files\n- `notes.bin`"));
    assert!(document.contains("## `main.rs`"));
    assert!(document.contains("```rust\nfn main() {}\n"));
    assert!(!document.contains("SECRET"));
    assert!(document.ends_with("\n---\n"));
}
#[test]
fn integration_export_text_to_file() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("hello.py"), "print('hi')\n").unwrap();
    let output_path = dir.path().join("out.txt");
    let options = ExportBuilder::new(dir.path()).build();
    let summary = export_to_file(&options, OutputFormat::Text, &output_path).unwrap();
    assert_eq!(summary.files_included, 1);
    let document = fs::read_to_string(&output_path).unwrap();
    assert!(document.contains("==============================\nFILE: hello.py\n"));
    assert!(document.contains("print('hi')\n"));
}
#[test]
fn integration_summary_json_round_trip() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("a.rs"), "fn a() {}\n").unwrap();
    let output_path = dir.path().join("out.md");
    let options = ExportBuilder::new(dir.path()).build();
    let summary = export_to_file(&options, OutputFormat::Markdown, &output_path).unwrap();
    let json = serde_json::to_string(&summary).unwrap();
    let parsed: ExportSummary = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed.files_included, summary.files_included);
    assert_eq!(parsed.output_path, summary.output_path);
}
#[test]
fn integration_root_not_a_directory() {
    let dir = tempdir().unwrap();
    let file_path = dir.path().join("file.txt");
    fs::write(&file_path, "not a dir").unwrap();
    let options = ExportBuilder::new(&file_path).build();
    let err = scan(&options).unwrap_err();
    assert!(matches!(err, ExportError::NotADirectory(_)));
}
#[test]
fn integration_missing_root_fails() {
    let dir = tempdir().unwrap();
    let options = ExportBuilder::new(dir.path().join("does-not-exist")).build();
    assert!(scan(&options).is_err());
}
