use std::{
    collections::HashMap,
    fmt,
    sync::{Mutex, PoisonError},
};

use async_trait::async_trait;
use teloxide::{
    payloads::SendMessageSetters,
    prelude::Requester,
    types::{ChatId, MessageId},
    RequestError,
};
use thiserror::Error;
use tracing::{debug, instrument};

use crate::{
    keyboard::{answers_keyboard, selected_option},
    session::{Grade, ScoreCard},
    ui::{QuizUi, SubmitHandler},
    QuizBot,
};

#[derive(Debug, Error)]
pub enum UiError {
    #[error("telegram request failed: {0}")]
    Request(#[from] RequestError),
}

/// A question message sent to the chat.
#[derive(Debug, Clone)]
pub struct QuestionHandle {
    message_id: MessageId,
    text: String,
}

#[derive(Debug)]
struct PendingQuestion {
    handle: QuestionHandle,
    options: Vec<String>,
    handler: Option<SubmitHandler>,
}

/// A button press matched to its question, handler taken out of its slot.
#[derive(Debug)]
struct Submission {
    handle: QuestionHandle,
    handler: SubmitHandler,
    selected: Option<String>,
}

#[derive(Debug, Default)]
struct PendingQuestions {
    questions: Mutex<HashMap<MessageId, PendingQuestion>>,
}

impl PendingQuestions {
    fn insert(&self, handle: QuestionHandle, options: Vec<String>) {
        self.questions
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(
                handle.message_id,
                PendingQuestion {
                    handle,
                    options,
                    handler: None,
                },
            );
    }

    fn attach(&self, message_id: MessageId, handler: SubmitHandler) {
        let mut questions = self.questions.lock().unwrap_or_else(PoisonError::into_inner);
        if let Some(pending) = questions.get_mut(&message_id) {
            pending.handler = Some(handler);
        }
    }

    /// `None` for unknown messages and for questions already answered.
    fn take(&self, message_id: MessageId, data: &str) -> Option<Submission> {
        let mut questions = self.questions.lock().unwrap_or_else(PoisonError::into_inner);
        let pending = questions.get_mut(&message_id)?;
        let handler = pending.handler.take()?;

        Some(Submission {
            handle: pending.handle.clone(),
            handler,
            selected: selected_option(&pending.options, data).map(str::to_string),
        })
    }
}

/// Renders a quiz into one chat: a message with an inline keyboard per
/// question, edited in place to show feedback.
pub struct TelegramUi {
    bot: QuizBot,
    chat_id: ChatId,
    pending: PendingQuestions,
}

impl fmt::Debug for TelegramUi {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TelegramUi")
            .field("chat_id", &self.chat_id)
            .field("pending", &self.pending)
            .finish_non_exhaustive()
    }
}

impl TelegramUi {
    pub fn new(bot: QuizBot, chat_id: ChatId) -> Self {
        Self {
            bot,
            chat_id,
            pending: PendingQuestions::default(),
        }
    }

    /// Delivers a button press on `message_id` to its handler. `Ok(None)` when
    /// the message is not an open question of this quiz.
    #[instrument(level = "debug", skip(self))]
    pub async fn submit_choice(
        &self,
        message_id: MessageId,
        data: &str,
    ) -> Result<Option<Grade>, UiError> {
        let Some(submission) = self.pending.take(message_id, data) else {
            debug!("no pending question for message {:?}", message_id);
            return Ok(None);
        };

        submission
            .handler
            .submit(self, &submission.handle, submission.selected.as_deref())
            .await
    }
}

#[async_trait]
impl QuizUi for TelegramUi {
    type Handle = QuestionHandle;
    type Error = UiError;

    async fn render_question(
        &self,
        number: usize,
        prompt: &str,
        options: &[String],
    ) -> Result<QuestionHandle, UiError> {
        let text = format!("Question #{}\n{}", number, prompt);
        let message = self
            .bot
            .send_message(self.chat_id, text.clone())
            .reply_markup(answers_keyboard(options))
            .await?;

        let handle = QuestionHandle {
            message_id: message.id,
            text,
        };
        self.pending.insert(handle.clone(), options.to_vec());

        Ok(handle)
    }

    fn on_submit(&self, handle: &QuestionHandle, handler: SubmitHandler) {
        self.pending.attach(handle.message_id, handler);
    }

    async fn show_feedback(&self, handle: &QuestionHandle, text: &str) -> Result<(), UiError> {
        // Editing the text also drops the inline keyboard.
        self.bot
            .edit_message_text(
                self.chat_id,
                handle.message_id,
                format!("{}\n\n{}", handle.text, text),
            )
            .await?;
        Ok(())
    }

    async fn report_final_score(&self, score: ScoreCard) -> Result<(), UiError> {
        self.bot
            .send_message(self.chat_id, format!("Your final score: {}", score))
            .await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::{quiz::Question, session::QuizSession};

    fn default_return_value() -> Question {
        Question::new(
            1,
            "What is the default return value of a function that does not explicitly return anything?",
            vec![
                "None".into(),
                "0".into(),
                "False".into(),
                "Empty string".into(),
            ],
            "None",
        )
        .unwrap()
    }

    fn pending_with_question(session: &Arc<QuizSession>) -> PendingQuestions {
        let question = default_return_value();
        let pending = PendingQuestions::default();
        let handle = QuestionHandle {
            message_id: MessageId(10),
            text: question.prompt().to_string(),
        };

        pending.insert(handle, question.options().to_vec());
        pending.attach(
            MessageId(10),
            SubmitHandler::new(Arc::clone(session), 0, question),
        );
        pending
    }

    #[test]
    fn first_press_takes_the_handler() {
        let session = Arc::new(QuizSession::new(1));
        let pending = pending_with_question(&session);

        let submission = pending.take(MessageId(10), "0").unwrap();
        assert_eq!(submission.selected.as_deref(), Some("None"));
        assert_eq!(submission.handle.message_id, MessageId(10));
        assert_eq!(
            submission.handler.grade(submission.selected.as_deref()),
            Some(Grade::Correct)
        );
        assert_eq!(session.score(), ScoreCard { score: 1, total: 1 });

        assert!(pending.take(MessageId(10), "0").is_none());
    }

    #[test]
    fn unknown_message_is_ignored() {
        let session = Arc::new(QuizSession::new(1));
        let pending = pending_with_question(&session);

        assert!(pending.take(MessageId(99), "0").is_none());
        assert!(pending.take(MessageId(10), "1").is_some());
    }

    #[test]
    fn question_without_handler_is_not_taken() {
        let pending = PendingQuestions::default();
        pending.insert(
            QuestionHandle {
                message_id: MessageId(3),
                text: "Pick".into(),
            },
            vec!["a".into(), "b".into()],
        );

        assert!(pending.take(MessageId(3), "0").is_none());
    }

    #[test]
    fn option_text_as_data_is_graded_wrong() {
        let session = Arc::new(QuizSession::new(1));
        let pending = pending_with_question(&session);

        let submission = pending.take(MessageId(10), "None").unwrap();
        assert_eq!(submission.selected, None);

        let grade = submission
            .handler
            .grade(submission.selected.as_deref())
            .unwrap();
        assert!(!grade.is_correct());
        assert_eq!(session.score(), ScoreCard { score: 0, total: 1 });
    }
}
