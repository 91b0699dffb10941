//! Content validation errors.

use thiserror::Error;

use crate::story::NodeId;

/// Errors raised while parsing or validating authored content.
///
/// Authored content ships with the app, so any of these indicates a
/// content-authoring defect and is treated as fatal at startup rather than
/// recovered at play time.
#[derive(Debug, Error)]
pub enum ContentError {
    #[error("failed to parse content definition: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("duplicate story node '{0}'")]
    DuplicateNode(NodeId),

    #[error("choice '{choice}' on node '{node}' targets unknown node '{target}'")]
    UnknownChoiceTarget {
        node: NodeId,
        choice: String,
        target: NodeId,
    },

    #[error("start node '{0}' is not present in the story")]
    UnknownStartNode(NodeId),

    #[error("lesson '{0}' has no questions")]
    EmptyLesson(String),

    #[error("question '{question}' needs at least two options")]
    TooFewOptions { question: String },

    #[error("question '{question}' lists correct answer '{answer}' outside its options")]
    AnswerNotAmongOptions { question: String, answer: String },

    #[error("trace shape '{0}' has no reference points")]
    EmptyShape(String),

    #[error("trace shape '{shape}' has non-positive tolerance {tolerance}")]
    BadTolerance { shape: String, tolerance: f32 },
}
