//! Navigator state - the explicit, observable position in the story.

use lesson_content::NodeId;
use serde::{Deserialize, Serialize};

/// Where the listener is in the story and how they got there.
///
/// The presentation layer reads this by reference after each operation; the
/// navigator is the only writer. Two invariants hold at all times: the stack
/// has at least one entry, and its last entry is the current node.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavigatorState {
    current: NodeId,
    stack: Vec<NodeId>,
    history: Vec<String>,
}

impl NavigatorState {
    /// Fresh state positioned at `start`.
    pub(crate) fn at(start: NodeId) -> Self {
        Self {
            stack: vec![start.clone()],
            current: start,
            history: Vec::new(),
        }
    }

    /// Id of the scene currently showing.
    pub fn current(&self) -> &NodeId {
        &self.current
    }

    /// Visited node ids, oldest first. Always ends with the current node.
    pub fn stack(&self) -> &[NodeId] {
        &self.stack
    }

    /// Human-readable record of choices taken, oldest first.
    ///
    /// Append-only: backward navigation never rewrites it.
    pub fn history(&self) -> &[String] {
        &self.history
    }

    /// Advance to `target`, recording `entry` in the choice log.
    pub(crate) fn push(&mut self, target: NodeId, entry: String) {
        self.stack.push(target.clone());
        self.history.push(entry);
        self.current = target;
    }

    /// Step back to the previous scene. Returns false when already at the
    /// earliest scene.
    pub(crate) fn pop(&mut self) -> bool {
        if self.stack.len() <= 1 {
            return false;
        }
        self.stack.pop();
        if let Some(previous) = self.stack.last() {
            self.current = previous.clone();
        }
        true
    }

    pub(crate) fn restore_history(&mut self, history: Vec<String>) {
        self.history = history;
    }
}
