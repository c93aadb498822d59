use state::QuizState;
use teloxide::{
    adaptors::Throttle,
    dispatching::dialogue::InMemStorage,
    prelude::{Bot, Dialogue},
};

pub mod commands;
pub mod config;
pub mod keyboard;
pub mod logging;
pub mod questions;
pub mod quiz;
pub mod runner;
pub mod schema;
pub mod session;
pub mod state;
pub mod telegram;
pub mod ui;

pub type QuizBot = Throttle<Bot>;

type UserDialogue = Dialogue<QuizState, InMemStorage<QuizState>>;
type HandlerResult = Result<(), Box<dyn std::error::Error + Send + Sync + 'static>>;
