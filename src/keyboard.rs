use teloxide::types::{InlineKeyboardButton, InlineKeyboardMarkup, KeyboardButton, KeyboardMarkup};

pub(crate) const TAKE_QUIZ: &str = "Take the quiz📝";

/// One button per option; the callback data is the option's index, since
/// option text may exceed Telegram's 64-byte callback data limit.
pub(crate) fn answers_keyboard(options: &[String]) -> InlineKeyboardMarkup {
    let keyboard: Vec<Vec<InlineKeyboardButton>> = options
        .iter()
        .enumerate()
        .map(|(i, option)| vec![InlineKeyboardButton::callback(option.clone(), i.to_string())])
        .collect();

    InlineKeyboardMarkup::new(keyboard)
}

/// Maps callback data back to the option it indexes, `None` if it indexes nothing.
pub(crate) fn selected_option<'a>(options: &'a [String], data: &str) -> Option<&'a str> {
    data.parse::<usize>()
        .ok()
        .and_then(|i| options.get(i))
        .map(String::as_str)
}

pub(crate) fn action_keyboard() -> KeyboardMarkup {
    let keyboard = vec![vec![KeyboardButton::new(TAKE_QUIZ)]];

    KeyboardMarkup::new(keyboard)
}
