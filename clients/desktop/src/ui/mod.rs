//! View builders for the chat window.

pub mod chat;

use iced::Font;

/// Font used for message text and emoji buttons.
pub const EMOJI_FONT: Font = Font::with_name("Noto Color Emoji");
