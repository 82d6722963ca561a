//! State and update logic for the chatroom panel.
//!
//! The panel owns an append-only list of messages, a composer draft with an
//! `@`-triggered mention mode, an emoji picker flag and per-message like
//! counters. Nothing here knows about rendering: the desktop client drives a
//! [`ChatPanel`] with UI events and drains [`PanelEvent`]s to decide when the
//! message list should scroll.

pub mod composer;
pub mod config;
pub mod emoji;
pub mod message;
pub mod panel;
pub mod roster;
pub mod sender;

pub use composer::{Composer, ComposerKey, ComposerMode};
pub use config::PanelConfig;
pub use emoji::{decode_unified, EmojiEntry, CATALOG};
pub use message::{ChatMessage, MessageId};
pub use panel::{ChatPanel, PanelEvent};
pub use roster::Roster;
pub use sender::{CyclingSource, SeededSource, SenderSource, ThreadRngSource};

/// Errors returned by panel operations.
///
/// None of these are fatal; callers log them and carry on with the state
/// untouched.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum PanelError {
    #[error("emoji code is empty")]
    EmptyEmojiCode,
    #[error("emoji code segment {segment:?} is not hexadecimal")]
    InvalidEmojiSegment { segment: String },
    #[error("U+{0:X} is not a unicode scalar value")]
    NotAScalarValue(u32),
    #[error("roster must contain at least one name")]
    EmptyRoster,
    #[error("roster names must not be blank")]
    BlankRosterName,
    #[error("roster name {0:?} appears more than once")]
    DuplicateRosterName(String),
    #[error("{0:?} is not on the roster")]
    UnknownMember(String),
    #[error("no message at index {0}")]
    NoSuchMessage(usize),
    #[error("invalid panel config: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, PanelError>;
