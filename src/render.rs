//! Plain-text renderings of a heading forest.
//!
//! The tree rendering mirrors what the browser shows, using box-drawing characters; the Markdown
//! rendering is a nested list of anchor links ready to paste above a document.

use crate::toc::{Forest, NodeId, ROOT_DISPLAY_DEPTH};
use std::fmt::Write;

/// One visible row of a rendered forest.
pub(crate) struct Row {
    pub id: NodeId,
    pub prefix: String,
}

/// Flatten `forest` into pre-order rows with their box-drawing prefixes.
///
/// `open` holds, for each ancestor of the current node, whether that ancestor still has siblings
/// below it. Roots get no prefix; the root's own entry never draws a column.
pub(crate) fn rows(forest: &Forest) -> Vec<Row> {
    fn walk(forest: &Forest, ids: &[NodeId], open: &mut Vec<bool>, out: &mut Vec<Row>) {
        for (pos, &id) in ids.iter().enumerate() {
            let is_last = pos + 1 == ids.len();
            let mut prefix = String::new();
            if !open.is_empty() {
                for &more in &open[1..] {
                    prefix.push_str(if more { "│   " } else { "    " });
                }
                prefix.push_str(if is_last { "└── " } else { "├── " });
            }
            out.push(Row { id, prefix });
            open.push(!is_last);
            walk(forest, forest.children(id), open, out);
            open.pop();
        }
    }

    let mut out = Vec::with_capacity(forest.len());
    walk(forest, forest.roots(), &mut Vec::new(), &mut out);
    out
}

#[must_use]
/// Render `forest` as an indented tree, one `title (#slug)` line per heading.
pub fn render_tree(forest: &Forest) -> String {
    let mut out = String::new();
    for row in rows(forest) {
        let node = forest.node(row.id);
        writeln!(out, "{}{} (#{})", row.prefix, node.title(), node.slug()).unwrap();
    }
    out
}

#[must_use]
/// Render `forest` as a nested Markdown list of anchor links.
///
/// Each level of display depth below the roots indents by `indent_width` spaces.
pub fn render_markdown(forest: &Forest, indent_width: usize) -> String {
    let mut out = String::new();
    for id in forest.iter() {
        let node = forest.node(id);
        let indent = (node.display_depth() - ROOT_DISPLAY_DEPTH) * indent_width;
        writeln!(out, "{:indent$}- [{}](#{})", "", node.title(), node.slug()).unwrap();
    }
    out
}

#[cfg(test)]
#[path = "tests/render.rs"]
mod tests;
