//! ASCII rendering for ancestry traces.

use crate::models::{AncestryNode, CatalogColor};

/// Render an ancestry trace as ASCII art.
///
/// Color nodes carry their catalog swatch hex when the catalog knows the
/// name; combination nodes show the cross label as-is.
///
/// Example output:
/// ```text
/// Purple (#aa00aa)
/// └── Red + Blue
///     ├── Red (#ff0000)
///     └── Blue (#0000ff)
/// ```
pub fn render_tree(root: &AncestryNode, catalog: &[CatalogColor]) -> String {
    let mut output = String::new();
    render_node(&mut output, root, "", true, true, catalog);
    output
}

fn node_text(node: &AncestryNode, catalog: &[CatalogColor]) -> String {
    match node {
        AncestryNode::Color { name, .. } => match catalog.iter().find(|c| &c.name == name) {
            Some(entry) => format!("{} ({})", name, entry.hex),
            None => name.clone(),
        },
        AncestryNode::Combination { label, .. } => label.clone(),
    }
}

/// Recursively render a node and its children.
fn render_node(
    output: &mut String,
    node: &AncestryNode,
    prefix: &str,
    is_last: bool,
    is_root: bool,
    catalog: &[CatalogColor],
) {
    let text = node_text(node, catalog);

    if is_root {
        // Root node: just the color (no branch characters)
        output.push_str(&text);
        output.push('\n');
    } else {
        let branch = if is_last { "└── " } else { "├── " };
        output.push_str(prefix);
        output.push_str(branch);
        output.push_str(&text);
        output.push('\n');
    }

    let child_prefix = if is_root {
        String::new()
    } else {
        let continuation = if is_last { "    " } else { "│   " };
        format!("{}{}", prefix, continuation)
    };

    let children = node.children();
    for (i, child) in children.iter().enumerate() {
        let child_is_last = i == children.len() - 1;
        render_node(output, child, &child_prefix, child_is_last, false, catalog);
    }
}
