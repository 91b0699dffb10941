//! Story definitions - the branching narrative content.

mod graph;

pub use graph::*;

use serde::{Deserialize, Serialize};

/// Unique key for story nodes.
///
/// Authored content uses short stable string keys (e.g. `"rabbit"`) rather
/// than random identifiers, so saved progress stays valid across releases.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NodeId(String);

impl NodeId {
    /// Create a node id from a string key.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for NodeId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<String> for NodeId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for NodeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A single option the listener can pick on a story node.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoryChoice {
    /// Text shown on the choice button.
    pub text: String,

    /// Node this choice leads to.
    pub target: NodeId,
}

impl StoryChoice {
    /// Create a new choice leading to `target`.
    pub fn new(text: impl Into<String>, target: impl Into<NodeId>) -> Self {
        Self {
            text: text.into(),
            target: target.into(),
        }
    }
}

/// A single scene in the story.
///
/// A node with no choices is a terminal scene; backward navigation is still
/// possible from it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoryNode {
    pub id: NodeId,

    /// Scene text, displayed and narrated.
    pub text: String,

    /// Optional illustration asset name.
    #[serde(default)]
    pub image: Option<String>,

    /// Ordered outgoing choices; empty for terminal scenes.
    #[serde(default)]
    pub choices: Vec<StoryChoice>,
}

impl StoryNode {
    /// Create a new scene with the given id and text.
    pub fn new(id: impl Into<NodeId>, text: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            text: text.into(),
            image: None,
            choices: Vec::new(),
        }
    }

    /// Set the illustration asset name.
    pub fn with_image(mut self, image: impl Into<String>) -> Self {
        self.image = Some(image.into());
        self
    }

    /// Append an outgoing choice.
    pub fn with_choice(mut self, choice: StoryChoice) -> Self {
        self.choices.push(choice);
        self
    }

    /// Check whether this scene ends the story.
    pub fn is_terminal(&self) -> bool {
        self.choices.is_empty()
    }

    /// The sole outgoing choice, if the scene is strictly linear.
    pub fn sole_choice(&self) -> Option<&StoryChoice> {
        match self.choices.as_slice() {
            [only] => Some(only),
            _ => None,
        }
    }
}
