use std::{error::Error, sync::Arc};

use pyquizbot::{
    config::BotConfig, logging, quiz::QuestionBank, schema::schema, state::QuizState,
};
use teloxide::{
    adaptors::throttle::Limits,
    dispatching::dialogue::InMemStorage,
    error_handlers::IgnoringErrorHandlerSafe,
    prelude::*,
    update_listeners::webhooks::{self, Options},
};
use tracing::{error, info};

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error + Send + Sync>> {
    let config = BotConfig::from_env()?;
    logging::init(config.log_level)?;

    let bank = match QuestionBank::python_assessment() {
        Ok(bank) => Arc::new(bank),
        Err(e) => {
            error!("Question bank is malformed: {}", e);
            return Err(e.into());
        }
    };
    info!("Loaded {} questions", bank.len());

    let bot = Bot::new(config.token).throttle(Limits::default());
    info!("Starting bot...");

    let mut dispatcher = Dispatcher::builder(bot.clone(), schema())
        .dependencies(dptree::deps![InMemStorage::<QuizState>::new(), bank])
        .enable_ctrlc_handler()
        .build();

    if let Some(webhook) = config.webhook {
        let listener = webhooks::axum(bot, Options::new(webhook.addr, webhook.url)).await?;
        dispatcher
            .dispatch_with_listener(listener, Arc::new(IgnoringErrorHandlerSafe))
            .await
    } else {
        dispatcher.dispatch().await
    }

    Ok(())
}
