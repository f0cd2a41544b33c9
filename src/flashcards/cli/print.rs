use colored::Colorize;
use flashcards::api::{CmdMessage, MessageLevel};

pub(super) fn render_message(message: &CmdMessage, color: bool) -> String {
    if !color {
        return message.content.clone();
    }
    match message.level {
        MessageLevel::Info => message.content.normal().to_string(),
        MessageLevel::Success => message.content.green().to_string(),
        MessageLevel::Warning => message.content.yellow().to_string(),
        MessageLevel::Error => message.content.red().to_string(),
    }
}
