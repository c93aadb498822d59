use std::{collections::HashSet, slice};

use thiserror::Error;

/// One row of a declarative question table.
#[derive(Debug, Clone, Copy)]
pub struct QuestionEntry {
    pub prompt: &'static str,
    pub options: &'static [&'static str],
    pub answer: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Question {
    prompt: String,
    options: Vec<String>,
    correct_answer: String,
}

/// Immutable, ordered collection of validated questions.
#[derive(Debug, Clone, Default)]
pub struct QuestionBank {
    questions: Vec<Question>,
}

/// Reasons a question table is refused. `position` is 1-based.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BankError {
    #[error("question #{position} has an empty prompt")]
    EmptyPrompt { position: usize },

    #[error("question #{position} has {count} option(s), at least 2 are required")]
    TooFewOptions { position: usize, count: usize },

    #[error("question #{position} has a blank option")]
    BlankOption { position: usize },

    #[error("question #{position} lists option '{option}' more than once")]
    DuplicateOption { position: usize, option: String },

    #[error("question #{position}: answer '{answer}' is not one of its options")]
    AnswerNotAnOption { position: usize, answer: String },
}

impl Question {
    /// Builds a question, checking every invariant of a single item.
    pub fn new(
        position: usize,
        prompt: impl Into<String>,
        options: Vec<String>,
        correct_answer: impl Into<String>,
    ) -> Result<Self, BankError> {
        let prompt = prompt.into();
        let correct_answer = correct_answer.into();

        if prompt.trim().is_empty() {
            return Err(BankError::EmptyPrompt { position });
        }
        if options.len() < 2 {
            return Err(BankError::TooFewOptions {
                position,
                count: options.len(),
            });
        }

        let mut seen = HashSet::with_capacity(options.len());
        for option in &options {
            if option.trim().is_empty() {
                return Err(BankError::BlankOption { position });
            }
            if !seen.insert(option.as_str()) {
                return Err(BankError::DuplicateOption {
                    position,
                    option: option.clone(),
                });
            }
        }

        if !seen.contains(correct_answer.as_str()) {
            return Err(BankError::AnswerNotAnOption {
                position,
                answer: correct_answer,
            });
        }

        Ok(Self {
            prompt,
            options,
            correct_answer,
        })
    }

    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    pub fn options(&self) -> &[String] {
        &self.options
    }

    pub fn correct_answer(&self) -> &str {
        &self.correct_answer
    }

    /// Exact, case-sensitive comparison against the expected answer.
    pub fn is_correct(&self, selected: &str) -> bool {
        self.correct_answer == selected
    }
}

impl TryFrom<(usize, &QuestionEntry)> for Question {
    type Error = BankError;

    fn try_from((position, entry): (usize, &QuestionEntry)) -> Result<Self, Self::Error> {
        Question::new(
            position,
            entry.prompt,
            entry.options.iter().map(|option| option.to_string()).collect(),
            entry.answer,
        )
    }
}

impl QuestionBank {
    /// Validates the whole table; the first malformed question fails the batch.
    pub fn from_entries(entries: &[QuestionEntry]) -> Result<Self, BankError> {
        let questions = entries
            .iter()
            .enumerate()
            .map(|(i, entry)| Question::try_from((i + 1, entry)))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self { questions })
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    pub fn iter(&self) -> slice::Iter<'_, Question> {
        self.questions.iter()
    }

    pub fn get(&self, index: usize) -> Option<&Question> {
        self.questions.get(index)
    }
}

impl<'a> IntoIterator for &'a QuestionBank {
    type Item = &'a Question;
    type IntoIter = slice::Iter<'a, Question>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
