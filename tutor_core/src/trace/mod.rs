//! Trace game - scoring free-hand drawings against reference shapes.

use lesson_content::{Point, TraceShape};
use rand::seq::SliceRandom;
use tracing::debug;

use crate::narration::Narrator;
use crate::progress::{keys, ProgressStore, StoreValue};

/// How closely a finished drawing matches the shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TraceGrade {
    /// Clearly the right shape.
    Match,
    /// Recognizable but rough.
    Close,
    /// Doesn't look like the shape yet.
    Miss,
}

impl TraceGrade {
    /// Grade a similarity score in `[0, 1]`.
    pub fn from_similarity(similarity: f32) -> Self {
        if similarity > 0.7 {
            TraceGrade::Match
        } else if similarity > 0.4 {
            TraceGrade::Close
        } else {
            TraceGrade::Miss
        }
    }

    /// Child-facing feedback for a drawing of `shape_name`.
    pub fn message(&self, shape_name: &str) -> String {
        match self {
            TraceGrade::Match => format!("Wow! That looks like a {shape_name}!"),
            TraceGrade::Close => "That's close! Keep practicing!".to_string(),
            TraceGrade::Miss => "Hmm, that looks different. Want to try again?".to_string(),
        }
    }
}

/// Result of a finished drawing.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TraceOutcome {
    pub similarity: f32,
    pub grade: TraceGrade,
}

/// Cheers spoken when a new stroke begins.
const ENCOURAGEMENTS: [&str; 4] = [
    "Great job! Keep going!",
    "You're doing amazing!",
    "Almost there! Try again!",
    "Wow, that's looking great!",
];

/// One drawing attempt at a shape.
pub struct TraceSession {
    shape: TraceShape,
    drawing: Vec<Point>,
    finished: bool,
    narrator: Box<dyn Narrator>,
    store: Box<dyn ProgressStore>,
}

impl TraceSession {
    pub fn new(shape: TraceShape, narrator: Box<dyn Narrator>, store: Box<dyn ProgressStore>) -> Self {
        Self {
            shape,
            drawing: Vec::new(),
            finished: false,
            narrator,
            store,
        }
    }

    /// The shape being traced.
    pub fn shape(&self) -> &TraceShape {
        &self.shape
    }

    /// Points drawn so far.
    pub fn drawing(&self) -> &[Point] {
        &self.drawing
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// Start a fresh stroke at `point`, cheering the child on.
    pub fn begin_stroke(&mut self, point: Point) {
        self.drawing.clear();
        self.finished = false;
        self.drawing.push(point);
        if let Some(cheer) = ENCOURAGEMENTS.choose(&mut rand::thread_rng()) {
            self.narrator.narrate(cheer);
        }
    }

    /// Extend the current stroke to `point`.
    pub fn extend_stroke(&mut self, point: Point) {
        self.drawing.push(point);
    }

    /// Score the finished drawing, narrate the verdict, and record the
    /// attempt in the progress log. Returns `None` when nothing has been
    /// drawn yet.
    pub fn finish(&mut self) -> Option<TraceOutcome> {
        if self.drawing.is_empty() {
            debug!("nothing drawn yet");
            return None;
        }

        let similarity = self.shape.similarity(&self.drawing);
        let grade = TraceGrade::from_similarity(similarity);
        self.narrator.narrate(&grade.message(&self.shape.name));
        self.finished = true;

        let mut records = self
            .store
            .get(keys::TRACE_HISTORY)
            .and_then(StoreValue::into_list)
            .unwrap_or_default();
        records.push(format!("Completed a {} drawing", self.shape.name));
        self.store.set(keys::TRACE_HISTORY, StoreValue::list(records));

        Some(TraceOutcome { similarity, grade })
    }

    /// Clear the canvas for another attempt.
    pub fn reset(&mut self) {
        self.drawing.clear();
        self.finished = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::narration::RecordingNarrator;
    use crate::progress::{MemoryStore, SharedStore};
    use lesson_content::catalog;

    fn session() -> (TraceSession, RecordingNarrator, SharedStore<MemoryStore>) {
        let narrator = RecordingNarrator::new();
        let store = SharedStore::new(MemoryStore::new());
        let session = TraceSession::new(
            catalog::triangle().unwrap(),
            Box::new(narrator.clone()),
            Box::new(store.clone()),
        );
        (session, narrator, store)
    }

    fn trace_corners(session: &mut TraceSession) {
        session.begin_stroke(Point::new(100.0, 5.0));
        session.extend_stroke(Point::new(5.0, 195.0));
        session.extend_stroke(Point::new(195.0, 195.0));
    }

    #[test]
    fn test_grades() {
        assert_eq!(TraceGrade::from_similarity(1.0), TraceGrade::Match);
        assert_eq!(TraceGrade::from_similarity(0.71), TraceGrade::Match);
        assert_eq!(TraceGrade::from_similarity(0.5), TraceGrade::Close);
        assert_eq!(TraceGrade::from_similarity(0.4), TraceGrade::Miss);
        assert_eq!(TraceGrade::from_similarity(0.0), TraceGrade::Miss);
    }

    #[test]
    fn test_begin_stroke_cheers() {
        let (mut session, narrator, _) = session();
        session.begin_stroke(Point::new(10.0, 10.0));

        let cheer = narrator.last().unwrap();
        assert!(ENCOURAGEMENTS.contains(&cheer.as_str()));
        assert_eq!(session.drawing().len(), 1);
    }

    #[test]
    fn test_good_tracing_matches() {
        let (mut session, narrator, store) = session();
        trace_corners(&mut session);
        let outcome = session.finish().unwrap();

        assert_eq!(outcome.grade, TraceGrade::Match);
        assert!((outcome.similarity - 1.0).abs() < f32::EPSILON);
        assert_eq!(
            narrator.last().as_deref(),
            Some("Wow! That looks like a triangle!")
        );
        assert_eq!(
            store.get(keys::TRACE_HISTORY).unwrap().as_list().unwrap(),
            &["Completed a triangle drawing".to_string()]
        );
        assert!(session.is_finished());
    }

    #[test]
    fn test_partial_tracing_is_close() {
        let (mut session, _, _) = session();
        session.begin_stroke(Point::new(100.0, 5.0));
        session.extend_stroke(Point::new(5.0, 195.0));
        let outcome = session.finish().unwrap();

        assert_eq!(outcome.grade, TraceGrade::Close);
    }

    #[test]
    fn test_scribble_misses() {
        let (mut session, narrator, _) = session();
        session.begin_stroke(Point::new(400.0, 400.0));
        session.extend_stroke(Point::new(420.0, 410.0));
        let outcome = session.finish().unwrap();

        assert_eq!(outcome.grade, TraceGrade::Miss);
        assert_eq!(
            narrator.last().as_deref(),
            Some("Hmm, that looks different. Want to try again?")
        );
    }

    #[test]
    fn test_finish_without_drawing_is_a_no_op() {
        let (mut session, narrator, store) = session();
        assert!(session.finish().is_none());
        assert!(narrator.is_empty());
        assert!(store.get(keys::TRACE_HISTORY).is_none());
    }

    #[test]
    fn test_records_accumulate_across_attempts() {
        let (mut session, _, store) = session();
        trace_corners(&mut session);
        assert!(session.finish().is_some());
        session.reset();
        assert!(!session.is_finished());
        assert!(session.drawing().is_empty());

        trace_corners(&mut session);
        assert!(session.finish().is_some());

        assert_eq!(
            store.get(keys::TRACE_HISTORY).unwrap().as_list().unwrap().len(),
            2
        );
    }

    #[test]
    fn test_new_stroke_replaces_the_drawing() {
        let (mut session, _, _) = session();
        trace_corners(&mut session);
        session.begin_stroke(Point::new(50.0, 50.0));
        assert_eq!(session.drawing().len(), 1);
    }
}
