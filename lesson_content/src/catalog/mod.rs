//! Bundled authored content, embedded at compile time.
//!
//! Each loader parses and validates its TOML definition; a failure means the
//! shipped content itself is broken, so callers treat it as fatal at startup.

use crate::error::ContentError;
use crate::lesson::Lesson;
use crate::shapes::TraceShape;
use crate::story::StoryGraph;

const RABBIT_ADVENTURE: &str = include_str!("../../content/rabbit_adventure.toml");
const TODDLER_BASICS: &str = include_str!("../../content/toddler_basics.toml");
const TRIANGLE: &str = include_str!("../../content/triangle.toml");

/// The rabbit-and-the-magical-door story.
pub fn rabbit_adventure() -> Result<StoryGraph, ContentError> {
    StoryGraph::from_toml(RABBIT_ADVENTURE)
}

/// The five-question starter lesson.
pub fn toddler_basics() -> Result<Lesson, ContentError> {
    Lesson::from_toml(TODDLER_BASICS)
}

/// The triangle tracing exercise.
pub fn triangle() -> Result<TraceShape, ContentError> {
    TraceShape::from_toml(TRIANGLE)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::story::NodeId;

    #[test]
    fn test_rabbit_adventure_validates() {
        let graph = rabbit_adventure().unwrap();
        assert_eq!(graph.len(), 9);
        assert_eq!(graph.start(), &NodeId::new("rabbit"));
        assert_eq!(graph.start_node().choices.len(), 2);
    }

    #[test]
    fn test_rabbit_adventure_has_terminal_scenes() {
        let graph = rabbit_adventure().unwrap();
        let terminals: Vec<_> = graph.nodes().filter(|n| n.is_terminal()).collect();
        // ignore, trap_room, flee, reward
        assert_eq!(terminals.len(), 4);
    }

    #[test]
    fn test_toddler_basics_validates() {
        let lesson = toddler_basics().unwrap();
        assert_eq!(lesson.title, "Basic Toddler Learning");
        assert_eq!(lesson.len(), 5);
        assert!(lesson.questions[1].is_correct("Cat"));
    }

    #[test]
    fn test_triangle_validates() {
        let shape = triangle().unwrap();
        assert_eq!(shape.name, "triangle");
        assert_eq!(shape.points.len(), 3);
        assert_eq!(shape.tolerance, 30.0);
    }
}
