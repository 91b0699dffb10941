//! Story Navigator - drives movement through the branching story.
//!
//! The navigator owns the immutable story graph and the listener's position.
//! Operations map one-to-one to user gestures:
//!
//! - [`StoryNavigator::select_choice`]: tap a choice button
//! - [`StoryNavigator::advance`]: swipe forward through a strictly-linear scene
//! - [`StoryNavigator::go_back`]: swipe back to the previous scene
//!
//! Every mutation is followed by a best-effort save of the current node id
//! and the choice log.

mod state;

pub use state::*;

use lesson_content::{NodeId, StoryChoice, StoryGraph, StoryNode};
use tracing::{debug, warn};

use crate::narration::Narrator;
use crate::progress::{keys, ProgressStore, StoreValue};

/// Drives a single listener through a story graph.
pub struct StoryNavigator {
    graph: StoryGraph,
    state: NavigatorState,
    narrator: Box<dyn Narrator>,
    store: Box<dyn ProgressStore>,
}

impl StoryNavigator {
    /// Create a navigator over `graph`, restoring any saved position.
    ///
    /// A saved node id that no longer resolves in the graph falls back to the
    /// start node with an empty choice log; a missing or unreadable save
    /// starts fresh. Restore is never an error.
    pub fn new(
        graph: StoryGraph,
        narrator: Box<dyn Narrator>,
        store: Box<dyn ProgressStore>,
    ) -> Self {
        let state = Self::restore(&graph, store.as_ref());
        Self {
            graph,
            state,
            narrator,
            store,
        }
    }

    fn restore(graph: &StoryGraph, store: &dyn ProgressStore) -> NavigatorState {
        let saved = store
            .get(keys::STORY_NODE)
            .and_then(|value| value.as_text().map(NodeId::new));
        let Some(id) = saved else {
            return NavigatorState::at(graph.start().clone());
        };
        if !graph.contains(&id) {
            debug!(%id, "saved scene no longer exists; starting the story over");
            return NavigatorState::at(graph.start().clone());
        }
        let mut state = NavigatorState::at(id);
        if let Some(StoreValue::List(history)) = store.get(keys::STORY_HISTORY) {
            state.restore_history(history);
        }
        state
    }

    /// The scene currently showing.
    pub fn current_node(&self) -> &StoryNode {
        self.graph
            .get(self.state.current())
            .expect("current node always resolves in the validated graph")
    }

    /// Read-only view of the navigation state.
    pub fn state(&self) -> &NavigatorState {
        &self.state
    }

    /// The story being played.
    pub fn graph(&self) -> &StoryGraph {
        &self.graph
    }

    /// Follow `choice` to its target scene.
    ///
    /// The choice is expected to come from the current node's choice list;
    /// that is the caller's responsibility and is not re-checked here. A
    /// target missing from the graph would be a content defect that
    /// construction-time validation already rules out, so it is guarded with
    /// a warning rather than a panic.
    pub fn select_choice(&mut self, choice: &StoryChoice) {
        let Some(target) = self.graph.get(&choice.target) else {
            warn!(node = %choice.target, "choice leads nowhere; ignoring");
            return;
        };
        let entry = format!("Chose: {} → {}", choice.text, target.text);
        let text = target.text.clone();

        self.state.push(choice.target.clone(), entry);
        self.narrator.narrate(&text);
        self.save();
    }

    /// Move forward through a strictly-linear scene.
    ///
    /// Fires only when the current scene has exactly one choice; zero or
    /// several choices require an explicit selection, so the state is left
    /// untouched.
    pub fn advance(&mut self) {
        match self.current_node().sole_choice() {
            Some(choice) => {
                let choice = choice.clone();
                self.select_choice(&choice);
            }
            None => debug!("no single next scene to advance to"),
        }
    }

    /// Step back to the previously shown scene.
    ///
    /// This is a view change only: the choice log keeps every entry. At the
    /// earliest scene this is a no-op.
    pub fn go_back(&mut self) {
        if !self.state.pop() {
            debug!("already at the start of the story");
            return;
        }
        let text = self.current_node().text.clone();
        self.narrator.narrate(&text);
        self.save();
    }

    /// Narrate the current scene, e.g. when the story screen appears.
    pub fn narrate_current(&self) {
        self.narrator.narrate(&self.current_node().text);
    }

    fn save(&mut self) {
        self.store.set(
            keys::STORY_NODE,
            StoreValue::text(self.state.current().as_str()),
        );
        self.store
            .set(keys::STORY_HISTORY, StoreValue::list(self.state.history().to_vec()));
    }
}
