//! Narration - the text-to-speech collaborator contract.

use std::cell::RefCell;
use std::rc::Rc;

/// Speaks text to the child.
///
/// Narration is best-effort and fire-and-forget: implementations must not
/// block, and the engine never observes or retries narration failures.
pub trait Narrator {
    fn narrate(&self, text: &str);
}

/// Narrator that discards everything. Useful when audio is unavailable.
#[derive(Debug, Clone, Copy, Default)]
pub struct SilentNarrator;

impl Narrator for SilentNarrator {
    fn narrate(&self, _text: &str) {}
}

/// Narrator that records utterances instead of speaking them.
///
/// Engine state lives on the interface thread, so the shared buffer is a
/// plain `Rc<RefCell<_>>`. Clones share the same buffer, which lets a test
/// keep a handle while the engine owns another.
#[derive(Debug, Clone, Default)]
pub struct RecordingNarrator {
    utterances: Rc<RefCell<Vec<String>>>,
}

impl RecordingNarrator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Everything narrated so far, oldest first.
    pub fn utterances(&self) -> Vec<String> {
        self.utterances.borrow().clone()
    }

    /// The most recent utterance.
    pub fn last(&self) -> Option<String> {
        self.utterances.borrow().last().cloned()
    }

    pub fn len(&self) -> usize {
        self.utterances.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.utterances.borrow().is_empty()
    }
}

impl Narrator for RecordingNarrator {
    fn narrate(&self, text: &str) {
        self.utterances.borrow_mut().push(text.to_string());
    }
}
