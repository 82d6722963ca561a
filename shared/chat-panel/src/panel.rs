//! The chat panel: owns the message list, the composer and the roster.

use std::collections::VecDeque;
use std::fmt;

use tracing::{debug, warn};

use crate::composer::{Composer, ComposerKey};
use crate::config::PanelConfig;
use crate::message::ChatMessage;
use crate::roster::Roster;
use crate::sender::{SeededSource, SenderSource, ThreadRngSource};
use crate::{PanelError, Result};

/// Change notifications for the presentation layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanelEvent {
    /// A message was appended at `index`; the list should scroll to it.
    MessageAppended { index: usize },
}

pub struct ChatPanel {
    roster: Roster,
    senders: Box<dyn SenderSource>,
    messages: Vec<ChatMessage>,
    composer: Composer,
    events: VecDeque<PanelEvent>,
}

impl ChatPanel {
    pub fn new(roster: Roster, senders: Box<dyn SenderSource>) -> Self {
        Self {
            roster,
            senders,
            messages: Vec::new(),
            composer: Composer::new(),
            events: VecDeque::new(),
        }
    }

    /// Builds a panel from config, seeding sender choice when a seed is set.
    pub fn from_config(config: &PanelConfig) -> Result<Self> {
        let roster = config.roster()?;
        let senders: Box<dyn SenderSource> = match config.seed {
            Some(seed) => Box::new(SeededSource::new(seed)),
            None => Box::new(ThreadRngSource),
        };
        Ok(Self::new(roster, senders))
    }

    pub fn roster(&self) -> &Roster {
        &self.roster
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    pub fn composer(&self) -> &Composer {
        &self.composer
    }

    pub fn draft(&self) -> &str {
        self.composer.draft()
    }

    pub fn emoji_picker_visible(&self) -> bool {
        self.composer.emoji_picker_visible()
    }

    pub fn mention_popup_visible(&self) -> bool {
        self.composer.mention_popup_visible()
    }

    pub fn draft_changed(&mut self, draft: impl Into<String>) {
        self.composer.set_draft(draft);
    }

    pub fn key_pressed(&mut self, key: ComposerKey) {
        self.composer.key_pressed(key);
    }

    pub fn toggle_emoji_picker(&mut self) {
        self.composer.toggle_emoji_picker();
    }

    pub fn select_emoji(&mut self, unified: &str) -> Result<()> {
        self.composer.insert_emoji(unified).map_err(|e| {
            warn!(code = unified, error = %e, "ignoring emoji selection");
            e
        })
    }

    /// Inserts `name` as a mention. Names outside the roster are rejected.
    pub fn select_mention(&mut self, name: &str) -> Result<()> {
        if !self.roster.contains(name) {
            warn!(name, "mention is not on the roster");
            return Err(PanelError::UnknownMember(name.to_owned()));
        }
        self.composer.insert_mention(name);
        debug!(name, "mention inserted");
        Ok(())
    }

    /// Sends the current draft as a message from a randomly chosen sender.
    ///
    /// Returns `None` when the trimmed draft is empty; nothing changes then.
    pub fn submit(&mut self) -> Option<&ChatMessage> {
        let text = self.composer.take_submission()?;
        let pick = self.senders.pick(self.roster.len());
        // Out-of-range picks wrap.
        let sender = self.roster.names()[pick % self.roster.len()].clone();

        let index = self.messages.len();
        debug!(index, sender = %sender, "message appended");
        self.messages.push(ChatMessage::new(sender, text));
        self.events.push_back(PanelEvent::MessageAppended { index });
        self.messages.last()
    }

    /// Adds one like to the message at `index` and returns its new count.
    pub fn like(&mut self, index: usize) -> Result<u64> {
        let Some(message) = self.messages.get_mut(index) else {
            warn!(index, "like for missing message");
            return Err(PanelError::NoSuchMessage(index));
        };
        let count = message.like();
        debug!(index, count, "message liked");
        Ok(count)
    }

    /// Pending change notifications, oldest first.
    pub fn drain_events(&mut self) -> impl Iterator<Item = PanelEvent> + '_ {
        self.events.drain(..)
    }
}

impl fmt::Debug for ChatPanel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ChatPanel")
            .field("roster", &self.roster)
            .field("messages", &self.messages.len())
            .field("composer", &self.composer)
            .field("pending_events", &self.events.len())
            .finish()
    }
}
