use teloxide::{
    payloads::SendMessageSetters, prelude::Requester, types::Message, utils::command::BotCommands,
};
use tracing::{info, instrument};

use crate::{keyboard::action_keyboard, state::QuizState, HandlerResult, QuizBot, UserDialogue};

#[derive(Debug, Clone, BotCommands)]
#[command(rename_rule = "lowercase")]
pub enum Command {
    #[command(description = "display help.")]
    Help,
    #[command(description = "start the bot")]
    Start,
    #[command(description = "show the score of the running quiz")]
    Score,
    #[command(description = "end the quiz and report the final score")]
    Finish,
    #[command(description = "abandon the running quiz")]
    Cancel,
}

pub(crate) async fn help(bot: QuizBot, msg: Message) -> HandlerResult {
    bot.send_message(msg.chat.id, Command::descriptions().to_string())
        .await?;
    Ok(())
}

pub(crate) async fn start(bot: QuizBot, msg: Message, dialogue: UserDialogue) -> HandlerResult {
    bot.send_message(
        msg.chat.id,
        "This quiz checks your knowledge of Python core concepts and object-oriented programming. \
         Answer each question by pressing one of its options.",
    )
    .reply_markup(action_keyboard())
    .await?;
    dialogue.update(QuizState::Start).await?;
    Ok(())
}

pub(crate) async fn cancel(bot: QuizBot, dialogue: UserDialogue, msg: Message) -> HandlerResult {
    if let Some(QuizState::Running { run }) = dialogue.get().await? {
        info!(session = %run.session().id(), "quiz abandoned");
    }
    bot.send_message(msg.chat.id, "Cancelling the quiz.")
        .reply_markup(action_keyboard())
        .await?;
    dialogue.update(QuizState::Start).await?;
    Ok(())
}

#[instrument(level = "info", skip(bot, dialogue))]
pub(crate) async fn score(bot: QuizBot, dialogue: UserDialogue, msg: Message) -> HandlerResult {
    let text = match dialogue.get().await? {
        Some(QuizState::Running { run }) => {
            let session = run.session();
            format!(
                "Score so far: {} ({} of {} answered)",
                run.final_score(),
                session.answered(),
                session.total()
            )
        }
        _ => "No quiz is running.".to_string(),
    };
    bot.send_message(msg.chat.id, text).await?;
    Ok(())
}

#[instrument(level = "info", skip(bot, dialogue))]
pub(crate) async fn finish(bot: QuizBot, dialogue: UserDialogue, msg: Message) -> HandlerResult {
    match dialogue.get().await? {
        Some(QuizState::Running { run }) => {
            run.finish().await?;
            dialogue.update(QuizState::Start).await?;
            if run.session().close() {
                bot.send_message(msg.chat.id, "What do you want to do now?")
                    .reply_markup(action_keyboard())
                    .await?;
            }
        }
        _ => {
            bot.send_message(msg.chat.id, "No quiz is running.").await?;
        }
    }
    Ok(())
}
