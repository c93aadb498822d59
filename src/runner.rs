use std::sync::{
    atomic::{AtomicBool, Ordering},
    Arc, Mutex, PoisonError,
};

use tracing::{info, instrument};

use crate::{
    quiz::QuestionBank,
    session::{QuizSession, ScoreCard},
    ui::{QuizUi, SubmitHandler},
};

#[derive(Debug)]
pub struct QuizRunner<U: QuizUi> {
    ui: U,
    session: Arc<QuizSession>,
    handles: Mutex<Vec<U::Handle>>,
    rendered: AtomicBool,
}

impl<U: QuizUi> QuizRunner<U> {
    /// A session sized to `bank` with nothing rendered yet.
    pub fn new(ui: U, bank: &QuestionBank) -> Self {
        Self {
            ui,
            session: Arc::new(QuizSession::new(bank.len())),
            handles: Mutex::new(Vec::with_capacity(bank.len())),
            rendered: AtomicBool::new(false),
        }
    }

    pub async fn start(ui: U, bank: &QuestionBank) -> Result<Self, U::Error> {
        let run = Self::new(ui, bank);
        run.render(bank).await?;
        Ok(run)
    }

    /// Renders every question in order without waiting for answers. Questions
    /// rendered before an error stay answerable. Only the first call renders.
    #[instrument(level = "info", skip_all, fields(session = %self.session.id(), questions = bank.len()))]
    pub async fn render(&self, bank: &QuestionBank) -> Result<(), U::Error> {
        if self.rendered.swap(true, Ordering::SeqCst) {
            return Ok(());
        }

        for (index, question) in bank.iter().enumerate() {
            let handle = self
                .ui
                .render_question(index + 1, question.prompt(), question.options())
                .await?;
            self.ui.on_submit(
                &handle,
                SubmitHandler::new(Arc::clone(&self.session), index, question.clone()),
            );
            self.handles
                .lock()
                .unwrap_or_else(PoisonError::into_inner)
                .push(handle);
        }

        info!("rendered {} question(s)", bank.len());

        if bank.is_empty() {
            if let Some(card) = self.session.claim_final_report() {
                self.ui.report_final_score(card).await?;
            }
        }

        Ok(())
    }

    pub fn ui(&self) -> &U {
        &self.ui
    }

    pub fn session(&self) -> &Arc<QuizSession> {
        &self.session
    }

    pub fn handles(&self) -> Vec<U::Handle> {
        self.handles
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Unanswered questions count toward the total only.
    pub fn final_score(&self) -> ScoreCard {
        self.session.score()
    }

    /// Reports the score unless it has been reported already.
    pub async fn finish(&self) -> Result<Option<ScoreCard>, U::Error> {
        match self.session.claim_final_report() {
            Some(card) => {
                info!(session = %self.session.id(), score = %card, "quiz finished");
                self.ui.report_final_score(card).await?;
                Ok(Some(card))
            }
            None => Ok(None),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use async_trait::async_trait;
    use thiserror::Error;

    use super::*;
    use crate::{
        quiz::QuestionEntry,
        session::Grade,
    };

    #[derive(Debug, Error)]
    #[error("send refused")]
    struct Refused;

    /// Records everything the runner asks for and lets tests answer by hand.
    #[derive(Debug, Default)]
    struct FakeUi {
        refuse_after: Option<usize>,
        rendered: Mutex<Vec<(String, Vec<String>)>>,
        pending: Mutex<HashMap<usize, SubmitHandler>>,
        feedback: Mutex<HashMap<usize, String>>,
        reports: Mutex<Vec<ScoreCard>>,
    }

    impl FakeUi {
        async fn answer(&self, handle: usize, selected: &str) -> Option<Grade> {
            let handler = self
                .pending
                .lock()
                .unwrap_or_else(PoisonError::into_inner)
                .remove(&handle)?;
            handler.submit(self, &handle, Some(selected)).await.unwrap()
        }

        fn feedback(&self, handle: usize) -> Option<String> {
            self.feedback.lock().unwrap().get(&handle).cloned()
        }

        fn reports(&self) -> Vec<ScoreCard> {
            self.reports.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl QuizUi for FakeUi {
        type Handle = usize;
        type Error = Refused;

        async fn render_question(
            &self,
            _number: usize,
            prompt: &str,
            options: &[String],
        ) -> Result<usize, Refused> {
            let mut rendered = self.rendered.lock().unwrap();
            if self.refuse_after == Some(rendered.len()) {
                return Err(Refused);
            }
            rendered.push((prompt.to_string(), options.to_vec()));
            Ok(rendered.len() - 1)
        }

        fn on_submit(&self, handle: &usize, handler: SubmitHandler) {
            self.pending.lock().unwrap().insert(*handle, handler);
        }

        async fn show_feedback(&self, handle: &usize, text: &str) -> Result<(), Refused> {
            self.feedback
                .lock()
                .unwrap()
                .insert(*handle, text.to_string());
            Ok(())
        }

        async fn report_final_score(&self, score: ScoreCard) -> Result<(), Refused> {
            self.reports.lock().unwrap().push(score);
            Ok(())
        }
    }

    const THREE: &[QuestionEntry] = &[
        QuestionEntry {
            prompt: "1+1?",
            options: &["1", "2", "3"],
            answer: "2",
        },
        QuestionEntry {
            prompt: "Capital of France?",
            options: &["Paris", "Rome"],
            answer: "Paris",
        },
        QuestionEntry {
            prompt: "Is Rust memory safe?",
            options: &["yes", "no"],
            answer: "yes",
        },
    ];

    fn bank(entries: &[QuestionEntry]) -> QuestionBank {
        QuestionBank::from_entries(entries).unwrap()
    }

    #[tokio::test]
    async fn renders_all_questions_before_any_answer() {
        let runner = QuizRunner::start(FakeUi::default(), &bank(THREE))
            .await
            .unwrap();

        let rendered = runner.ui().rendered.lock().unwrap().clone();
        assert_eq!(rendered.len(), 3);
        assert_eq!(rendered[0].0, "1+1?");
        assert_eq!(rendered[0].1, ["1", "2", "3"]);
        assert_eq!(runner.handles(), [0, 1, 2]);
        assert_eq!(runner.final_score(), ScoreCard { score: 0, total: 3 });
        assert!(runner.ui().reports().is_empty());
    }

    #[tokio::test]
    async fn correct_submission_scores_one() {
        let runner = QuizRunner::start(FakeUi::default(), &bank(&THREE[..1]))
            .await
            .unwrap();

        assert_eq!(runner.ui().answer(0, "2").await, Some(Grade::Correct));
        assert_eq!(runner.final_score(), ScoreCard { score: 1, total: 1 });
        assert_eq!(runner.ui().feedback(0).as_deref(), Some("✅ Correct!"));
    }

    #[tokio::test]
    async fn wrong_submission_names_the_answer() {
        let runner = QuizRunner::start(FakeUi::default(), &bank(&THREE[..1]))
            .await
            .unwrap();

        runner.ui().answer(0, "1").await;
        assert_eq!(runner.final_score(), ScoreCard { score: 0, total: 1 });
        assert_eq!(
            runner.ui().feedback(0).as_deref(),
            Some("❌ Incorrect. The correct answer is: 2")
        );
    }

    #[tokio::test]
    async fn handler_fires_only_once() {
        let runner = QuizRunner::start(FakeUi::default(), &bank(THREE))
            .await
            .unwrap();

        assert!(runner.ui().answer(0, "2").await.is_some());
        assert!(runner.ui().answer(0, "2").await.is_none());
        assert_eq!(runner.final_score().score, 1);
    }

    #[tokio::test]
    async fn reverse_order_matches_forward_order() {
        let answers = ["2", "Rome", "yes"];

        let forward = QuizRunner::start(FakeUi::default(), &bank(THREE))
            .await
            .unwrap();
        for (handle, answer) in answers.iter().enumerate() {
            forward.ui().answer(handle, answer).await;
        }

        let reverse = QuizRunner::start(FakeUi::default(), &bank(THREE))
            .await
            .unwrap();
        for (handle, answer) in answers.iter().enumerate().rev() {
            reverse.ui().answer(handle, answer).await;
        }

        assert_eq!(forward.final_score(), ScoreCard { score: 2, total: 3 });
        assert_eq!(reverse.final_score(), forward.final_score());
        assert_eq!(
            reverse.ui().feedback(1).as_deref(),
            Some("❌ Incorrect. The correct answer is: Paris")
        );
    }

    #[tokio::test]
    async fn unanswered_question_counts_in_total_only() {
        let runner = QuizRunner::start(FakeUi::default(), &bank(THREE))
            .await
            .unwrap();

        runner.ui().answer(0, "2").await;
        runner.ui().answer(2, "yes").await;

        assert_eq!(runner.final_score(), ScoreCard { score: 2, total: 3 });
        assert!(!runner.session().is_complete());
        assert!(runner.ui().reports().is_empty());
    }

    #[tokio::test]
    async fn last_answer_reports_final_score_once() {
        let runner = QuizRunner::start(FakeUi::default(), &bank(THREE))
            .await
            .unwrap();

        runner.ui().answer(1, "Paris").await;
        runner.ui().answer(0, "3").await;
        runner.ui().answer(2, "yes").await;

        assert_eq!(runner.ui().reports(), [ScoreCard { score: 2, total: 3 }]);
        assert_eq!(runner.finish().await.unwrap(), None);
        assert_eq!(runner.ui().reports().len(), 1);
    }

    #[tokio::test]
    async fn finish_reports_partial_progress() {
        let runner = QuizRunner::start(FakeUi::default(), &bank(THREE))
            .await
            .unwrap();

        runner.ui().answer(0, "2").await;
        let card = runner.finish().await.unwrap();

        assert_eq!(card, Some(ScoreCard { score: 1, total: 3 }));
        assert_eq!(runner.ui().reports(), [ScoreCard { score: 1, total: 3 }]);
        assert_eq!(runner.finish().await.unwrap(), None);
    }

    #[tokio::test]
    async fn failed_render_keeps_earlier_questions_answerable() {
        let ui = FakeUi {
            refuse_after: Some(2),
            ..FakeUi::default()
        };
        let runner = QuizRunner::new(ui, &bank(THREE));

        assert!(runner.render(&bank(THREE)).await.is_err());
        assert_eq!(runner.handles(), [0, 1]);

        assert_eq!(runner.ui().answer(1, "Paris").await, Some(Grade::Correct));
        assert_eq!(runner.final_score(), ScoreCard { score: 1, total: 3 });
        assert_eq!(
            runner.finish().await.unwrap(),
            Some(ScoreCard { score: 1, total: 3 })
        );
    }

    #[tokio::test]
    async fn render_runs_only_once() {
        let runner = QuizRunner::new(FakeUi::default(), &bank(THREE));

        runner.render(&bank(THREE)).await.unwrap();
        runner.render(&bank(THREE)).await.unwrap();

        assert_eq!(runner.ui().rendered.lock().unwrap().len(), 3);
        assert_eq!(runner.handles().len(), 3);
    }

    #[tokio::test]
    async fn empty_bank_reports_zero_of_zero() {
        let runner = QuizRunner::start(FakeUi::default(), &QuestionBank::default())
            .await
            .unwrap();

        assert_eq!(runner.final_score(), ScoreCard { score: 0, total: 0 });
        assert_eq!(runner.ui().reports(), [ScoreCard { score: 0, total: 0 }]);
        assert!(runner.handles().is_empty());
    }

    #[tokio::test]
    async fn score_stays_within_bounds() {
        let runner = QuizRunner::start(FakeUi::default(), &bank(THREE))
            .await
            .unwrap();

        for (handle, answer) in [(0, "2"), (1, "Paris"), (2, "yes"), (0, "2"), (1, "Paris")] {
            runner.ui().answer(handle, answer).await;
            let card = runner.final_score();
            assert!(card.score <= card.total);
        }
        assert_eq!(runner.final_score(), ScoreCard { score: 3, total: 3 });
    }
}
