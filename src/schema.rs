use std::sync::Arc;

use teloxide::{
    dispatching::{
        dialogue::{self, GetChatId, InMemStorage},
        UpdateFilterExt, UpdateHandler,
    },
    dptree,
    payloads::{AnswerCallbackQuerySetters, SendMessageSetters},
    prelude::Requester,
    types::{CallbackQuery, Message, ReplyMarkup, Update},
};
use tracing::{error, info, instrument, warn};

use crate::{
    commands::{cancel, finish, help, score, start, Command},
    keyboard::{action_keyboard, TAKE_QUIZ},
    quiz::QuestionBank,
    runner::QuizRunner,
    state::{ActiveQuiz, QuizState},
    telegram::TelegramUi,
    HandlerResult, QuizBot, UserDialogue,
};

pub fn schema() -> UpdateHandler<Box<dyn std::error::Error + Send + Sync + 'static>> {
    use dptree::case;

    let command_handler = teloxide::filter_command::<Command, _>()
        .branch(case![Command::Help].endpoint(help))
        .branch(case![Command::Start].endpoint(start))
        .branch(case![Command::Score].endpoint(score))
        .branch(case![Command::Finish].endpoint(finish))
        .branch(case![Command::Cancel].endpoint(cancel));

    let message_handler = Update::filter_message()
        .branch(command_handler)
        .branch(case![QuizState::Start].endpoint(choose_what_to_do))
        .branch(case![QuizState::Running { run }].endpoint(running_message))
        .endpoint(invalid_state);

    let callback_query_handler = Update::filter_callback_query()
        .branch(case![QuizState::Running { run }].endpoint(take_answer))
        .endpoint(stale_answer);

    dialogue::enter::<Update, InMemStorage<QuizState>, QuizState, _>()
        .branch(message_handler)
        .branch(callback_query_handler)
}

#[instrument(level = "info", skip(bot, dialogue, bank))]
async fn choose_what_to_do(
    bot: QuizBot,
    msg: Message,
    dialogue: UserDialogue,
    bank: Arc<QuestionBank>,
) -> HandlerResult {
    match msg.text() {
        Some(TAKE_QUIZ) => {
            info!(chat = ?msg.chat.id, "starting a quiz of {} question(s)", bank.len());
            bot.send_message(msg.chat.id, "Let's begin! Press an option under each question.")
                .reply_markup(ReplyMarkup::kb_remove())
                .await?;

            let run = Arc::new(QuizRunner::new(
                TelegramUi::new(bot.clone(), msg.chat.id),
                &bank,
            ));
            dialogue
                .update(QuizState::Running {
                    run: Arc::clone(&run),
                })
                .await?;

            if let Err(e) = run.render(&bank).await {
                error!(session = %run.session().id(), "failed to send the quiz: {:?}", e);
                bot.send_message(
                    msg.chat.id,
                    format!(
                        "Only {} of {} questions could be sent. Answer those or use /finish.",
                        run.handles().len(),
                        bank.len()
                    ),
                )
                .await?;
            }

            if run.session().is_complete() && run.session().close() {
                dialogue.update(QuizState::Start).await?;
                bot.send_message(msg.chat.id, "What do you want to do now?")
                    .reply_markup(action_keyboard())
                    .await?;
            }
        }
        other => {
            warn!(chat = ?msg.chat.id, "invalid message {:?}", other);
            bot.send_message(msg.chat.id, "Invalid input. Please try again.")
                .reply_markup(action_keyboard())
                .await?;
        }
    }

    Ok(())
}

async fn running_message(bot: QuizBot, msg: Message, run: ActiveQuiz) -> HandlerResult {
    let session = run.session();
    bot.send_message(
        msg.chat.id,
        format!(
            "Answer with the buttons under each question ({} of {} answered). \
             Use /score to see your progress or /finish to end the quiz.",
            session.answered(),
            session.total()
        ),
    )
    .await?;
    Ok(())
}

#[instrument(level = "info", skip(bot, dialogue, run), fields(session = %run.session().id()))]
async fn take_answer(
    bot: QuizBot,
    dialogue: UserDialogue,
    q: CallbackQuery,
    run: ActiveQuiz,
) -> HandlerResult {
    bot.answer_callback_query(&q.id).await?;

    let (Some(message), Some(data)) = (&q.message, &q.data) else {
        return Ok(());
    };

    match run.ui().submit_choice(message.id(), data).await {
        Ok(Some(grade)) => {
            info!(
                "{} answered question {:?}: correct = {}",
                q.from.username.clone().unwrap_or_default(),
                message.id(),
                grade.is_correct()
            );
        }
        Ok(None) => {}
        Err(e) => {
            error!("failed to grade an answer: {:?}", e);
            return Err(e.into());
        }
    }

    if run.session().is_complete() && run.session().close() {
        info!(score = %run.final_score(), "quiz completed");
        dialogue.update(QuizState::Start).await?;
        if let Some(chat_id) = q.chat_id() {
            bot.send_message(chat_id, "What do you want to do now?")
                .reply_markup(action_keyboard())
                .await?;
        }
    }

    Ok(())
}

async fn stale_answer(bot: QuizBot, q: CallbackQuery) -> HandlerResult {
    bot.answer_callback_query(&q.id)
        .text("This quiz is no longer running.")
        .await?;
    Ok(())
}

#[instrument(level = "info", skip(bot))]
async fn invalid_state(bot: QuizBot, msg: Message) -> HandlerResult {
    info!("{:?}: invalid input '{:?}'", msg.chat.id, msg.text());
    bot.send_message(
        msg.chat.id,
        "Unable to handle the message. Enter /help to see usages.",
    )
    .await?;
    Ok(())
}
