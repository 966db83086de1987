//! Heading forest construction.
//!
//! Headings arrive one at a time in document order and are placed by looking only at the most
//! recently placed node, walking its parent links when the new heading is shallower. Nodes live
//! in an arena owned by the [`Forest`]; children are index lists and the parent link is a plain
//! index, so there are no reference cycles.
//!
//! Raw marker depth only steers placement. What renderers see is the display depth: 2 for every
//! root, parent + 1 for everything else, whatever gaps the raw depths had.

use crate::scanner::{self, HeadingPattern, HeadingToken};
use crate::slug::slugify;
use serde::ser::{SerializeSeq, SerializeStruct};
use serde::{Serialize, Serializer};
use std::cmp::Ordering;

/// Display depth assigned to every root node.
pub const ROOT_DISPLAY_DEPTH: usize = 2;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
/// Stable handle of a node inside its [`Forest`].
pub struct NodeId(usize);

impl NodeId {
    #[must_use]
    /// Position of the node in document order.
    pub fn index(self) -> usize {
        self.0
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
/// One heading in the table of contents.
pub struct TocNode {
    title: String,
    slug: String,
    children: Vec<NodeId>,
    parent: Option<NodeId>,
    raw_depth: usize,
    display_depth: usize,
}

impl TocNode {
    #[must_use]
    /// Heading text as captured by the scanner.
    pub fn title(&self) -> &str {
        &self.title
    }

    #[must_use]
    /// Anchor derived from the title.
    pub fn slug(&self) -> &str {
        &self.slug
    }

    #[must_use]
    /// Nested headings in document order.
    pub fn children(&self) -> &[NodeId] {
        &self.children
    }

    #[must_use]
    /// Containing heading, `None` for roots.
    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    #[must_use]
    /// Normalised nesting depth for indentation, starting at [`ROOT_DISPLAY_DEPTH`].
    pub fn display_depth(&self) -> usize {
        self.display_depth
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
/// Ordered root headings of one document together with the arena holding every node.
pub struct Forest {
    nodes: Vec<TocNode>,
    roots: Vec<NodeId>,
}

impl Forest {
    #[must_use]
    /// Build a forest from an ordered token stream.
    pub fn from_tokens<'a, I>(tokens: I) -> Self
    where
        I: IntoIterator<Item = HeadingToken<'a>>,
    {
        let mut builder = ForestBuilder::new();
        for token in tokens {
            builder.push(token);
        }
        builder.finish()
    }

    #[must_use]
    /// Top-level headings in document order.
    pub fn roots(&self) -> &[NodeId] {
        &self.roots
    }

    #[must_use]
    /// Look up a node.
    ///
    /// # Panics
    ///
    /// Panics if `id` was issued by a different forest and is out of range.
    pub fn node(&self, id: NodeId) -> &TocNode {
        &self.nodes[id.0]
    }

    #[must_use]
    /// Containing heading of `id`.
    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.nodes[id.0].parent
    }

    #[must_use]
    /// Nested headings of `id`.
    pub fn children(&self, id: NodeId) -> &[NodeId] {
        &self.nodes[id.0].children
    }

    #[must_use]
    /// Total number of headings at every depth.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    #[must_use]
    /// True when the document had no heading lines.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Walk every node depth-first, parents before children, siblings in document order.
    pub fn iter(&self) -> impl Iterator<Item = NodeId> + '_ {
        let mut stack: Vec<NodeId> = self.roots.iter().rev().copied().collect();
        std::iter::from_fn(move || {
            let id = stack.pop()?;
            stack.extend(self.nodes[id.0].children.iter().rev().copied());
            Some(id)
        })
    }

    fn push_root(&mut self, node: TocNode) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(node);
        self.roots.push(id);
        id
    }

    fn attach(&mut self, parent: NodeId, mut node: TocNode) -> NodeId {
        let id = NodeId(self.nodes.len());
        node.parent = Some(parent);
        node.display_depth = self.nodes[parent.0].display_depth + 1;
        self.nodes.push(node);
        self.nodes[parent.0].children.push(id);
        id
    }
}

#[derive(Debug, Default)]
/// Incremental placement state: the forest so far and the last node placed.
pub struct ForestBuilder {
    forest: Forest,
    last: Option<NodeId>,
}

impl ForestBuilder {
    #[must_use]
    /// Start an empty forest.
    pub fn new() -> Self {
        Self::default()
    }

    /// Place the next heading and return its id.
    ///
    /// - Deeper than the last node: last child of the last node.
    /// - Same depth: last child of the last node's parent, or a root if the last node was one.
    /// - Shallower: walk up from the last node, at most `difference + 1` steps, stopping at the
    ///   first ancestor shallower than the new heading. Running out of ancestors makes a root.
    pub fn push(&mut self, token: HeadingToken<'_>) -> NodeId {
        let raw_depth = token.depth;
        let node = TocNode {
            title: token.title.to_string(),
            slug: slugify(token.title),
            children: Vec::new(),
            parent: None,
            raw_depth,
            display_depth: ROOT_DISPLAY_DEPTH,
        };

        let Some(last) = self.last else {
            let id = self.forest.push_root(node);
            self.last = Some(id);
            return id;
        };

        let last_depth = self.forest.nodes[last.0].raw_depth;
        let target = match last_depth.cmp(&raw_depth) {
            Ordering::Greater => {
                // Bounded at difference + 1 steps; parents are strictly shallower, so the
                // early stop always fires first.
                let steps = last_depth - raw_depth + 1;
                let mut ancestor = Some(last);
                for _ in 0..steps {
                    ancestor = ancestor.and_then(|id| self.forest.parent(id));
                    if ancestor.is_none_or(|id| self.forest.nodes[id.0].raw_depth < raw_depth) {
                        break;
                    }
                }
                ancestor
            }
            Ordering::Equal => self.forest.parent(last),
            Ordering::Less => Some(last),
        };

        let id = match target {
            Some(parent) => self.forest.attach(parent, node),
            None => self.forest.push_root(node),
        };
        tracing::trace!(
            title = token.title,
            raw_depth,
            parent = ?target.map(NodeId::index),
            display_depth = self.forest.nodes[id.0].display_depth,
            "placed heading"
        );
        self.last = Some(id);
        id
    }

    #[must_use]
    /// Hand over the finished forest.
    pub fn finish(self) -> Forest {
        self.forest
    }
}

#[must_use]
/// Extract the heading forest of a Markdown-style (`#`) document.
pub fn build_heading_forest(text: &str) -> Forest {
    Forest::from_tokens(scanner::scan(text))
}

#[must_use]
/// Extract the heading forest using a custom heading grammar.
pub fn build_heading_forest_with(pattern: &HeadingPattern, text: &str) -> Forest {
    Forest::from_tokens(pattern.scan(text))
}

struct NodeRef<'a> {
    forest: &'a Forest,
    id: NodeId,
}

struct NodeList<'a> {
    forest: &'a Forest,
    ids: &'a [NodeId],
}

impl Serialize for NodeRef<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let node = self.forest.node(self.id);
        let mut state = serializer.serialize_struct("TocNode", 4)?;
        state.serialize_field("title", &node.title)?;
        state.serialize_field("slug", &node.slug)?;
        state.serialize_field("displayDepth", &node.display_depth)?;
        state.serialize_field(
            "children",
            &NodeList {
                forest: self.forest,
                ids: &node.children,
            },
        )?;
        state.end()
    }
}

impl Serialize for NodeList<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut seq = serializer.serialize_seq(Some(self.ids.len()))?;
        for &id in self.ids {
            seq.serialize_element(&NodeRef {
                forest: self.forest,
                id,
            })?;
        }
        seq.end()
    }
}

impl Serialize for Forest {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        NodeList {
            forest: self,
            ids: &self.roots,
        }
        .serialize(serializer)
    }
}

#[cfg(test)]
#[path = "tests/toc.rs"]
mod tests;
