//! Draft input with `@` mention mode and the emoji picker flag.

use tracing::debug;

use crate::emoji::decode_unified;
use crate::Result;

/// Whether the mention popup is open.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ComposerMode {
    #[default]
    Idle,
    /// `cursor` is the draft's byte length when `@` was pressed.
    Mentioning { cursor: usize },
}

/// Key presses the composer reacts to. Everything else is [`ComposerKey::Other`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ComposerKey {
    At,
    Backspace,
    Other,
}

#[derive(Debug, Clone, Default)]
pub struct Composer {
    draft: String,
    mode: ComposerMode,
    emoji_picker_visible: bool,
}

impl Composer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn draft(&self) -> &str {
        &self.draft
    }

    pub fn mode(&self) -> ComposerMode {
        self.mode
    }

    pub fn mention_popup_visible(&self) -> bool {
        matches!(self.mode, ComposerMode::Mentioning { .. })
    }

    pub fn mention_cursor(&self) -> Option<usize> {
        match self.mode {
            ComposerMode::Mentioning { cursor } => Some(cursor),
            ComposerMode::Idle => None,
        }
    }

    pub fn emoji_picker_visible(&self) -> bool {
        self.emoji_picker_visible
    }

    /// Replaces the draft verbatim. No validation, no length cap.
    pub fn set_draft(&mut self, draft: impl Into<String>) {
        self.draft = draft.into();
    }

    pub fn key_pressed(&mut self, key: ComposerKey) {
        match key {
            ComposerKey::At => {
                let cursor = self.draft.len();
                debug!(cursor, "mention popup opened");
                self.mode = ComposerMode::Mentioning { cursor };
            }
            // Any backspace closes the popup, even one that leaves the `@` in place.
            ComposerKey::Backspace => self.mode = ComposerMode::Idle,
            ComposerKey::Other => {}
        }
    }

    pub fn toggle_emoji_picker(&mut self) {
        self.emoji_picker_visible = !self.emoji_picker_visible;
    }

    /// Appends the emoji named by `unified` to the draft.
    ///
    /// On a malformed code the draft is left as it was.
    pub fn insert_emoji(&mut self, unified: &str) -> Result<()> {
        let emoji = decode_unified(unified)?;
        self.draft.push_str(&emoji);
        Ok(())
    }

    /// Appends `"<name> "` to the end of the draft and leaves mention mode.
    ///
    /// The recorded cursor is not used for splicing; the name always lands at
    /// the end.
    pub fn insert_mention(&mut self, name: &str) {
        self.draft.push_str(name);
        self.draft.push(' ');
        self.mode = ComposerMode::Idle;
    }

    /// Takes the trimmed draft if it has any content.
    ///
    /// On success the draft is cleared and the emoji picker hidden; mention
    /// mode is left alone. Whitespace-only drafts change nothing.
    pub fn take_submission(&mut self) -> Option<String> {
        let text = self.draft.trim();
        if text.is_empty() {
            return None;
        }
        let text = text.to_owned();
        self.draft.clear();
        self.emoji_picker_visible = false;
        Some(text)
    }
}
