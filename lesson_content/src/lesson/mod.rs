//! Quiz lesson definitions.

use serde::{Deserialize, Serialize};

use crate::error::ContentError;

/// A multiple-choice question with a single correct answer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    pub id: u32,

    /// Prompt text, displayed and narrated.
    pub text: String,

    /// Ordered answer options shown to the child.
    pub options: Vec<String>,

    /// The correct option, verbatim.
    pub answer: String,
}

impl Question {
    /// Check a candidate answer against the answer key.
    pub fn is_correct(&self, candidate: &str) -> bool {
        self.answer == candidate
    }
}

/// An ordered set of questions presented as one lesson.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Lesson {
    pub id: u32,
    pub title: String,
    pub questions: Vec<Question>,
}

impl Lesson {
    /// Build and validate a lesson from its questions.
    pub fn new(
        id: u32,
        title: impl Into<String>,
        questions: Vec<Question>,
    ) -> Result<Self, ContentError> {
        let lesson = Self {
            id,
            title: title.into(),
            questions,
        };
        lesson.validate()?;
        Ok(lesson)
    }

    /// Parse and validate an authored TOML lesson definition.
    pub fn from_toml(text: &str) -> Result<Self, ContentError> {
        let lesson: Lesson = toml::from_str(text)?;
        lesson.validate()?;
        Ok(lesson)
    }

    fn validate(&self) -> Result<(), ContentError> {
        if self.questions.is_empty() {
            return Err(ContentError::EmptyLesson(self.title.clone()));
        }
        for question in &self.questions {
            if question.options.len() < 2 {
                return Err(ContentError::TooFewOptions {
                    question: question.text.clone(),
                });
            }
            if !question.options.iter().any(|option| option == &question.answer) {
                return Err(ContentError::AnswerNotAmongOptions {
                    question: question.text.clone(),
                    answer: question.answer.clone(),
                });
            }
        }
        Ok(())
    }

    /// Number of questions in the lesson.
    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }
}
