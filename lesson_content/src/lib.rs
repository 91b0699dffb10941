//! # Lesson Content
//!
//! The "Lesson Bible" crate - contains all authored content for the Hopscotch
//! tutor: the branching story, quiz lessons, and trace shapes. This crate is
//! the single source of truth for what the app presents and does not contain
//! any engine logic.
//!
//! Content is authored in TOML, parsed with serde, and validated at
//! construction. A definition that fails validation is a content-authoring
//! defect and is rejected before the engine ever sees it.

pub mod catalog;
pub mod error;
pub mod lesson;
pub mod shapes;
pub mod story;

pub use catalog::*;
pub use error::*;
pub use lesson::*;
pub use shapes::*;
pub use story::*;
