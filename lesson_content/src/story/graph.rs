//! Story graph - the validated map of scenes keyed by node id.

use serde::Deserialize;
use std::collections::HashMap;

use super::{NodeId, StoryNode};
use crate::error::ContentError;

/// Raw authored story definition as written in TOML, before validation.
#[derive(Debug, Clone, Deserialize)]
struct StoryDef {
    start: NodeId,
    #[serde(default)]
    nodes: Vec<StoryNode>,
}

/// The full branching story, built once at startup and read-only after.
///
/// Construction enforces the graph-integrity invariant: node ids are unique,
/// every choice target resolves to a node, and the start id resolves.
/// Authored content that violates any of these fails fatally here instead of
/// surfacing mid-story.
#[derive(Debug, Clone)]
pub struct StoryGraph {
    nodes: HashMap<NodeId, StoryNode>,
    start: NodeId,
}

impl StoryGraph {
    /// Build and validate a story graph from its scenes.
    pub fn new(start: impl Into<NodeId>, nodes: Vec<StoryNode>) -> Result<Self, ContentError> {
        let start = start.into();

        let mut map = HashMap::with_capacity(nodes.len());
        for node in nodes {
            if map.contains_key(&node.id) {
                return Err(ContentError::DuplicateNode(node.id));
            }
            map.insert(node.id.clone(), node);
        }

        for node in map.values() {
            for choice in &node.choices {
                if !map.contains_key(&choice.target) {
                    return Err(ContentError::UnknownChoiceTarget {
                        node: node.id.clone(),
                        choice: choice.text.clone(),
                        target: choice.target.clone(),
                    });
                }
            }
        }

        if !map.contains_key(&start) {
            return Err(ContentError::UnknownStartNode(start));
        }

        Ok(Self { nodes: map, start })
    }

    /// Parse and validate an authored TOML story definition.
    pub fn from_toml(text: &str) -> Result<Self, ContentError> {
        let def: StoryDef = toml::from_str(text)?;
        Self::new(def.start, def.nodes)
    }

    /// Id of the designated opening scene.
    pub fn start(&self) -> &NodeId {
        &self.start
    }

    /// The designated opening scene.
    pub fn start_node(&self) -> &StoryNode {
        self.nodes
            .get(&self.start)
            .expect("start node is checked at construction")
    }

    /// Look up a scene by id.
    pub fn get(&self, id: &NodeId) -> Option<&StoryNode> {
        self.nodes.get(id)
    }

    /// Check whether a scene exists.
    pub fn contains(&self, id: &NodeId) -> bool {
        self.nodes.contains_key(id)
    }

    /// Number of scenes in the story.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Iterate over all scenes, in no particular order.
    pub fn nodes(&self) -> impl Iterator<Item = &StoryNode> {
        self.nodes.values()
    }
}
