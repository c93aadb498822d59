use std::{fmt, sync::Arc};

use async_trait::async_trait;
use tracing::debug;

use crate::{
    quiz::Question,
    session::{Grade, QuizSession, ScoreCard},
};

#[async_trait]
pub trait QuizUi: Send + Sync {
    type Handle: Clone + fmt::Debug + Send + Sync;
    type Error: std::error::Error + Send + Sync + 'static;

    async fn render_question(
        &self,
        number: usize,
        prompt: &str,
        options: &[String],
    ) -> Result<Self::Handle, Self::Error>;

    fn on_submit(&self, handle: &Self::Handle, handler: SubmitHandler);

    /// Replaces earlier feedback for `handle`.
    async fn show_feedback(&self, handle: &Self::Handle, text: &str) -> Result<(), Self::Error>;

    async fn report_final_score(&self, score: ScoreCard) -> Result<(), Self::Error>;
}

/// One-shot grader for a single question. Owns a copy of that question.
#[derive(Debug)]
pub struct SubmitHandler {
    session: Arc<QuizSession>,
    index: usize,
    question: Question,
}

impl SubmitHandler {
    pub(crate) fn new(session: Arc<QuizSession>, index: usize, question: Question) -> Self {
        Self {
            session,
            index,
            question,
        }
    }

    pub(crate) fn grade(&self, selected: Option<&str>) -> Option<Grade> {
        let grade = self.session.grade(self.index, &self.question, selected);
        if grade.is_none() {
            debug!(
                session = %self.session.id(),
                question = self.index + 1,
                "question already graded"
            );
        }
        grade
    }

    /// `selected` is `None` when the submission named no option; it is graded wrong.
    pub async fn submit<U>(
        self,
        ui: &U,
        handle: &U::Handle,
        selected: Option<&str>,
    ) -> Result<Option<Grade>, U::Error>
    where
        U: QuizUi + ?Sized,
    {
        let Some(grade) = self.grade(selected) else {
            return Ok(None);
        };

        ui.show_feedback(handle, &grade.feedback()).await?;

        if self.session.is_complete() {
            if let Some(card) = self.session.claim_final_report() {
                ui.report_final_score(card).await?;
            }
        }

        Ok(Some(grade))
    }
}
