//! The navigation state behind the outline browser.
//!
//! A TUI needs a single source of truth that can be interrogated and mutated as the user moves
//! around. We keep every file's heading forest and, for the open file, its headings flattened in
//! pre-order so that list positions and tree relations can be translated into one another.

use crate::toc::{Forest, NodeId, TocNode};
use std::path::PathBuf;

#[derive(PartialEq, Debug)]
/// Determines navigation scope and quit behavior based on project size.
pub enum FileMode {
    /// Single-file mode quits directly to shell.
    Single,
    /// Multi-file mode returns to file list before quitting.
    Multi,
}

#[derive(PartialEq, Debug)]
/// Determines which UI screen renders and how input is interpreted.
pub enum View {
    /// Displays available files for multi-file projects.
    FileList,
    /// Shows the heading tree of the open file.
    Outline,
}

/// Browser state: the loaded forests, the open file and the selected heading.
pub struct AppState {
    /// Files in the order they are listed.
    pub files: Vec<PathBuf>,
    /// Heading forest of each file, parallel to `files`.
    pub forests: Vec<Forest>,
    /// Selected file in the file list view.
    pub current_file_index: usize,
    /// Controls navigation behavior and file list visibility.
    pub file_mode: FileMode,
    /// Active UI screen determining input handling.
    pub current_view: View,
    /// Selected row in the outline of the open file.
    pub current_node_index: usize,
    /// Status feedback displayed in the help bar.
    pub message: Option<String>,
    order: Vec<NodeId>,
}

impl AppState {
    #[must_use]
    /// Initialises browser state and determines file mode.
    ///
    /// A single file opens straight into its outline; several files start at the file list.
    pub fn new(files: Vec<PathBuf>, forests: Vec<Forest>) -> Self {
        let file_mode = if files.len() == 1 {
            FileMode::Single
        } else {
            FileMode::Multi
        };

        let mut state = Self {
            files,
            forests,
            current_file_index: 0,
            current_view: View::FileList,
            file_mode,
            current_node_index: 0,
            message: None,
            order: Vec::new(),
        };
        if state.file_mode == FileMode::Single {
            state.open_file();
        }
        state
    }

    /// Shows the outline of the selected file.
    pub fn open_file(&mut self) {
        let Some(forest) = self.forests.get(self.current_file_index) else {
            return;
        };
        self.order = forest.iter().collect();
        self.current_node_index = 0;
        self.message = if self.order.is_empty() {
            Some("No headings in this file".to_string())
        } else {
            None
        };
        self.current_view = View::Outline;
    }

    /// Leaves the outline for the file list.
    pub fn close_file(&mut self) {
        self.order.clear();
        self.message = None;
        self.current_view = View::FileList;
    }

    #[must_use]
    /// Forest of the selected file.
    pub fn forest(&self) -> Option<&Forest> {
        self.forests.get(self.current_file_index)
    }

    #[must_use]
    /// Headings of the open file in display order.
    pub fn outline(&self) -> &[NodeId] {
        &self.order
    }

    #[must_use]
    /// Heading under the cursor.
    pub fn current_node(&self) -> Option<&TocNode> {
        let id = *self.order.get(self.current_node_index)?;
        self.forest().map(|forest| forest.node(id))
    }

    fn current_id(&self) -> Option<NodeId> {
        self.order.get(self.current_node_index).copied()
    }

    fn position_of(&self, id: NodeId) -> Option<usize> {
        self.order.iter().position(|&other| other == id)
    }

    fn siblings(&self) -> Option<(&[NodeId], usize)> {
        let forest = self.forest()?;
        let id = self.current_id()?;
        let siblings = match forest.parent(id) {
            Some(parent) => forest.children(parent),
            None => forest.roots(),
        };
        let at = siblings.iter().position(|&other| other == id)?;
        Some((siblings, at))
    }

    fn current_depth(&self) -> Option<usize> {
        self.current_node().map(TocNode::display_depth)
    }

    #[must_use]
    /// Returns the following heading for sequential navigation.
    pub fn find_next_node(&self) -> Option<usize> {
        if self.current_node_index + 1 < self.order.len() {
            Some(self.current_node_index + 1)
        } else {
            None
        }
    }

    #[must_use]
    /// Returns the preceding heading for reverse navigation.
    pub fn find_prev_node(&self) -> Option<usize> {
        if self.current_node_index > 0 && !self.order.is_empty() {
            Some(self.current_node_index - 1)
        } else {
            None
        }
    }

    #[must_use]
    /// Moves to the containing heading.
    pub fn navigate_to_parent(&self) -> Option<usize> {
        let parent = self.forest()?.parent(self.current_id()?)?;
        self.position_of(parent)
    }

    #[must_use]
    /// Descends to the first nested heading.
    pub fn navigate_to_first_child(&self) -> Option<usize> {
        let child = *self.forest()?.children(self.current_id()?).first()?;
        self.position_of(child)
    }

    #[must_use]
    /// Finds the next heading sharing the current parent.
    pub fn navigate_to_next_sibling(&self) -> Option<usize> {
        let (siblings, at) = self.siblings()?;
        self.position_of(*siblings.get(at + 1)?)
    }

    #[must_use]
    /// Finds the previous heading sharing the current parent.
    pub fn navigate_to_prev_sibling(&self) -> Option<usize> {
        let (siblings, at) = self.siblings()?;
        self.position_of(*siblings.get(at.checked_sub(1)?)?)
    }

    #[must_use]
    /// Jumps to the first heading in the document.
    pub fn navigate_to_first(&self) -> Option<usize> {
        if self.order.is_empty() {
            None
        } else {
            Some(0)
        }
    }

    #[must_use]
    /// Jumps to the last heading in the document.
    pub fn navigate_to_last(&self) -> Option<usize> {
        self.order.len().checked_sub(1)
    }

    #[must_use]
    /// Finds the first heading at the same display depth.
    pub fn navigate_to_first_at_level(&self) -> Option<usize> {
        let depth = self.current_depth()?;
        let forest = self.forest()?;
        self.order
            .iter()
            .position(|&id| forest.node(id).display_depth() == depth)
    }

    #[must_use]
    /// Finds the last heading at the same display depth.
    pub fn navigate_to_last_at_level(&self) -> Option<usize> {
        let depth = self.current_depth()?;
        let forest = self.forest()?;
        self.order
            .iter()
            .rposition(|&id| forest.node(id).display_depth() == depth)
    }

    /// Moves the cursor if `target` is a position, keeping it otherwise.
    pub fn select(&mut self, target: Option<usize>) {
        if let Some(index) = target {
            self.current_node_index = index;
        }
    }
}

#[cfg(test)]
#[path = "tests/app_state.rs"]
mod tests;
