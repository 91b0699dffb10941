//! Quiz sessions - multiple-choice questions with narrated feedback.

use lesson_content::{Lesson, Question};
use tracing::debug;

use crate::narration::Narrator;
use crate::progress::{keys, ProgressStore, StoreValue};

/// Verdict on a submitted answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnswerFeedback {
    Correct,
    Incorrect,
}

impl AnswerFeedback {
    /// Child-facing feedback line.
    pub fn message(&self) -> &'static str {
        match self {
            AnswerFeedback::Correct => "Correct!",
            AnswerFeedback::Incorrect => "Wrong, try again!",
        }
    }

    pub fn is_correct(&self) -> bool {
        matches!(self, AnswerFeedback::Correct)
    }
}

/// Narrated once the last question has been answered.
pub const QUIZ_COMPLETE_MESSAGE: &str = "You've completed the quiz!";

/// A single run through a lesson's questions.
///
/// Wrong answers keep the cursor in place so the child can retry; the
/// presentation layer decides whether to retry or move on.
pub struct QuizSession {
    lesson: Lesson,
    cursor: usize,
    answered: Vec<String>,
    narrator: Box<dyn Narrator>,
    store: Box<dyn ProgressStore>,
}

impl QuizSession {
    /// Start a session over `lesson`, restoring the answered-questions log
    /// from earlier sessions.
    pub fn new(lesson: Lesson, narrator: Box<dyn Narrator>, store: Box<dyn ProgressStore>) -> Self {
        let answered = store
            .get(keys::TUTOR_HISTORY)
            .and_then(StoreValue::into_list)
            .unwrap_or_default();
        Self {
            lesson,
            cursor: 0,
            answered,
            narrator,
            store,
        }
    }

    /// The lesson being played.
    pub fn lesson(&self) -> &Lesson {
        &self.lesson
    }

    /// The question currently presented, if the session is still running.
    pub fn current_question(&self) -> Option<&Question> {
        self.lesson.questions.get(self.cursor)
    }

    /// Check whether every question has been passed.
    pub fn is_complete(&self) -> bool {
        self.cursor >= self.lesson.questions.len()
    }

    /// Position in the lesson: (questions passed, total).
    pub fn progress(&self) -> (usize, usize) {
        (self.cursor, self.lesson.questions.len())
    }

    /// Questions answered correctly, oldest first, including entries restored
    /// from earlier sessions.
    pub fn answered(&self) -> &[String] {
        &self.answered
    }

    /// Narrate the current question, e.g. when the quiz screen appears.
    pub fn narrate_question(&self) {
        if let Some(question) = self.current_question() {
            self.narrator.narrate(&question.text);
        }
    }

    /// Check `answer` against the current question and narrate the verdict.
    ///
    /// Returns `None` once the session is complete. A correct answer is
    /// recorded in the progress log; a wrong one leaves the cursor in place
    /// for a retry.
    pub fn submit(&mut self, answer: &str) -> Option<AnswerFeedback> {
        let question = self.current_question()?.clone();
        let feedback = if question.is_correct(answer) {
            AnswerFeedback::Correct
        } else {
            AnswerFeedback::Incorrect
        };

        self.narrator.narrate(feedback.message());
        if feedback.is_correct() {
            self.answered.push(question.text);
            self.store
                .set(keys::TUTOR_HISTORY, StoreValue::list(self.answered.clone()));
        }
        Some(feedback)
    }

    /// Move on to the next question and narrate it.
    ///
    /// Past the last question the session completes and the completion
    /// message is narrated once; further calls are no-ops.
    pub fn advance(&mut self) {
        if self.is_complete() {
            debug!("quiz already complete");
            return;
        }
        self.cursor += 1;
        match self.current_question() {
            Some(question) => self.narrator.narrate(&question.text),
            None => self.narrator.narrate(QUIZ_COMPLETE_MESSAGE),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::narration::{RecordingNarrator, SilentNarrator};
    use crate::progress::{MemoryStore, SharedStore};
    use lesson_content::catalog;

    fn session() -> (QuizSession, RecordingNarrator, SharedStore<MemoryStore>) {
        let narrator = RecordingNarrator::new();
        let store = SharedStore::new(MemoryStore::new());
        let session = QuizSession::new(
            catalog::toddler_basics().unwrap(),
            Box::new(narrator.clone()),
            Box::new(store.clone()),
        );
        (session, narrator, store)
    }

    #[test]
    fn test_presents_first_question() {
        let (session, narrator, _) = session();
        assert_eq!(
            session.current_question().unwrap().text,
            "What color is the apple?"
        );
        assert_eq!(session.progress(), (0, 5));

        session.narrate_question();
        assert_eq!(narrator.last().as_deref(), Some("What color is the apple?"));
    }

    #[test]
    fn test_correct_answer_is_recorded_and_narrated() {
        let (mut session, narrator, store) = session();
        let feedback = session.submit("Red").unwrap();

        assert!(feedback.is_correct());
        assert_eq!(narrator.last().as_deref(), Some("Correct!"));
        assert_eq!(session.answered().len(), 1);
        assert_eq!(
            store.get(keys::TUTOR_HISTORY).unwrap().as_list().unwrap(),
            &["What color is the apple?".to_string()]
        );
    }

    #[test]
    fn test_wrong_answer_allows_retry() {
        let (mut session, narrator, store) = session();
        let feedback = session.submit("Blue").unwrap();

        assert!(!feedback.is_correct());
        assert_eq!(narrator.last().as_deref(), Some("Wrong, try again!"));
        // Cursor stays put and nothing is recorded.
        assert_eq!(session.progress(), (0, 5));
        assert!(store.get(keys::TUTOR_HISTORY).is_none());

        assert!(session.submit("Red").unwrap().is_correct());
    }

    #[test]
    fn test_advance_narrates_next_question() {
        let (mut session, narrator, _) = session();
        assert!(session.submit("Red").unwrap().is_correct());
        session.advance();

        assert_eq!(
            narrator.last().as_deref(),
            Some("Which animal says 'Meow'?")
        );
        assert_eq!(session.progress(), (1, 5));
    }

    #[test]
    fn test_completion_is_narrated_once() {
        let (mut session, narrator, _) = session();
        for _ in 0..5 {
            let answer = session.current_question().unwrap().answer.clone();
            assert!(session.submit(&answer).unwrap().is_correct());
            session.advance();
        }

        assert!(session.is_complete());
        assert!(session.current_question().is_none());
        assert_eq!(narrator.last().as_deref(), Some(QUIZ_COMPLETE_MESSAGE));
        assert_eq!(session.answered().len(), 5);

        // Further submits and advances are no-ops.
        let utterances_before = narrator.len();
        assert!(session.submit("anything").is_none());
        session.advance();
        assert_eq!(narrator.len(), utterances_before);
    }

    #[test]
    fn test_restores_answered_log() {
        let mut seeded = MemoryStore::new();
        seeded.set(
            keys::TUTOR_HISTORY,
            StoreValue::list(vec!["What color is the apple?".to_string()]),
        );

        let session = QuizSession::new(
            catalog::toddler_basics().unwrap(),
            Box::new(SilentNarrator),
            Box::new(seeded),
        );
        assert_eq!(session.answered().len(), 1);
    }
}
