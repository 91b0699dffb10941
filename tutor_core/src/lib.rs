//! # Tutor Core (Hopscotch)
//!
//! The engine behind the Hopscotch children's tutor. This crate consumes the
//! authored content in `lesson_content`, drives the branching story, quiz,
//! and trace-drawing activities, and tracks simple progress across sessions.
//!
//! ## Core Components
//!
//! - **story**: the story navigator - forward, choice-driven, and backward movement over the story graph
//! - **quiz**: multiple-choice quiz sessions with retry and completion handling
//! - **trace**: similarity scoring and feedback for the shape-drawing game
//! - **narration**: the text-to-speech collaborator contract
//! - **progress**: durable key-value progress storage
//!
//! ## Design Philosophy
//!
//! - **Event-Driven**: every operation runs synchronously on the interface
//!   thread in response to user input; nothing blocks, suspends, or locks
//! - **Fire-and-Forget Collaborators**: narration and persistence are
//!   best-effort; their failures are logged and swallowed, never surfaced to
//!   the child
//! - **Validated Content**: the engine only ever sees content that passed
//!   construction-time validation in `lesson_content`

pub mod narration;
pub mod progress;
pub mod quiz;
pub mod story;
pub mod trace;

pub use narration::*;
pub use progress::*;
pub use quiz::*;
pub use story::*;
pub use trace::*;
