use std::sync::Arc;

use crate::{runner::QuizRunner, telegram::TelegramUi};

pub type ActiveQuiz = Arc<QuizRunner<TelegramUi>>;

#[derive(Debug, Clone, Default)]
pub enum QuizState {
    #[default]
    Start,
    Running {
        run: ActiveQuiz,
    },
}
