use std::{
    fmt,
    sync::atomic::{AtomicBool, AtomicUsize, Ordering},
};

use uuid::Uuid;

use crate::quiz::Question;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoreCard {
    pub score: usize,
    pub total: usize,
}

impl fmt::Display for ScoreCard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.score, self.total)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Grade {
    Correct,
    Incorrect { expected: String },
}

impl Grade {
    pub fn is_correct(&self) -> bool {
        matches!(self, Grade::Correct)
    }

    pub fn feedback(&self) -> String {
        match self {
            Grade::Correct => "✅ Correct!".to_string(),
            Grade::Incorrect { expected } => {
                format!("❌ Incorrect. The correct answer is: {}", expected)
            }
        }
    }
}

/// Shared by every submission handler of one run; handlers may fire from any task.
#[derive(Debug)]
pub struct QuizSession {
    id: Uuid,
    total: usize,
    score: AtomicUsize,
    answered: AtomicUsize,
    graded: Vec<AtomicBool>,
    reported: AtomicBool,
    closed: AtomicBool,
}

impl QuizSession {
    pub fn new(total: usize) -> Self {
        Self {
            id: Uuid::new_v4(),
            total,
            score: AtomicUsize::new(0),
            answered: AtomicUsize::new(0),
            graded: (0..total).map(|_| AtomicBool::new(false)).collect(),
            reported: AtomicBool::new(false),
            closed: AtomicBool::new(false),
        }
    }

    pub fn id(&self) -> &Uuid {
        &self.id
    }

    pub fn total(&self) -> usize {
        self.total
    }

    pub fn answered(&self) -> usize {
        self.answered.load(Ordering::SeqCst)
    }

    pub fn is_complete(&self) -> bool {
        self.answered() >= self.total
    }

    pub fn score(&self) -> ScoreCard {
        ScoreCard {
            score: self.score.load(Ordering::SeqCst),
            total: self.total,
        }
    }

    /// `None` if the question was already graded or `index` is out of range.
    /// A `selected` of `None` (no option resolved) is always wrong.
    pub fn grade(&self, index: usize, question: &Question, selected: Option<&str>) -> Option<Grade> {
        let slot = self.graded.get(index)?;
        if slot.swap(true, Ordering::SeqCst) {
            return None;
        }

        let grade = if selected.is_some_and(|selected| question.is_correct(selected)) {
            self.score.fetch_add(1, Ordering::SeqCst);
            Grade::Correct
        } else {
            Grade::Incorrect {
                expected: question.correct_answer().to_string(),
            }
        };
        self.answered.fetch_add(1, Ordering::SeqCst);

        Some(grade)
    }

    pub fn claim_final_report(&self) -> Option<ScoreCard> {
        if self.reported.swap(true, Ordering::SeqCst) {
            None
        } else {
            Some(self.score())
        }
    }

    pub fn is_reported(&self) -> bool {
        self.reported.load(Ordering::SeqCst)
    }

    /// True only for the first caller.
    pub fn close(&self) -> bool {
        !self.closed.swap(true, Ordering::SeqCst)
    }
}
