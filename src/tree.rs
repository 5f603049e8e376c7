//! Tree-style structure listing built from a scan result.

use crate::types::ScanResult;
use std::path::Path;

#[derive(Default)]
struct Node {
    name: String,
    children: Vec<Node>,
}

/// Renders the included files of a scan as a tree-style listing.
///
/// Directories are derived from the relative path components of the
/// included files, so the same filters that shaped the scan shape the
/// listing. First-encounter order is preserved.
pub fn structure_listing(result: &ScanResult) -> String {
    let mut root = Node::default();
    for entry in &result.files {
        let mut node = &mut root;
        for component in Path::new(&entry.relative).components() {
            let name = component.as_os_str().to_string_lossy().into_owned();
            let index = match node.children.iter().position(|c| c.name == name) {
                Some(i) => i,
                None => {
                    node.children.push(Node {
                        name,
                        children: Vec::new(),
                    });
                    node.children.len() - 1
                }
            };
            node = &mut node.children[index];
        }
    }

    let mut lines = vec!["Project Structure".to_string(), String::new()];
    render_children(&root, "", &mut lines);
    let mut out = lines.join("\n");
    out.push('\n');
    out
}

fn render_children(node: &Node, prefix: &str, lines: &mut Vec<String>) {
    let count = node.children.len();
    for (index, child) in node.children.iter().enumerate() {
        let last = index + 1 == count;
        let pointer = if last { "└── " } else { "├── " };
        lines.push(format!("{}{}{}", prefix, pointer, child.name));
        let next_prefix = format!("{}{}", prefix, if last { "    " } else { "│   " });
        render_children(child, &next_prefix, lines);
    }
}
