//! Application state and event wiring for the chat window.

use chatroom_panel::{ChatPanel, ComposerKey, PanelConfig, PanelEvent};
use iced::keyboard::{self, key::Named, Key};
use iced::widget::{column, container, scrollable, Space};
use iced::{event, Application, Command, Element, Event, Length, Subscription, Theme};
use tracing::debug;

use crate::theme;
use crate::ui;

/// Startup values handed to [`ChatRoom::new`].
pub struct Flags {
    pub config: PanelConfig,
    pub panel: ChatPanel,
}

pub struct ChatRoom {
    config: PanelConfig,
    panel: ChatPanel,
    scroll_id: scrollable::Id,
}

#[derive(Debug, Clone)]
pub enum Message {
    DraftChanged(String),
    Key(ComposerKey),
    ToggleEmojiPicker,
    /// Unified code of the picked emoji
    EmojiSelected(&'static str),
    MentionSelected(String),
    Submit,
    /// Index into the message list
    Like(usize),
}

impl Application for ChatRoom {
    type Executor = iced::executor::Default;
    type Message = Message;
    type Theme = Theme;
    type Flags = Flags;

    fn new(flags: Flags) -> (Self, Command<Message>) {
        (
            Self {
                config: flags.config,
                panel: flags.panel,
                scroll_id: scrollable::Id::unique(),
            },
            Command::none(),
        )
    }

    fn title(&self) -> String {
        format!("{} - Chatroom", self.config.title)
    }

    fn update(&mut self, message: Message) -> Command<Message> {
        // Rejected emoji codes, mentions and likes are logged by the panel and
        // leave its state untouched; the UI stays silent about them.
        // The text input's DraftChanged for an `@` arrives before the key
        // subscription's Key(At), so the recorded mention cursor counts the `@`.
        match message {
            Message::DraftChanged(value) => self.panel.draft_changed(value),
            Message::Key(key) => self.panel.key_pressed(key),
            Message::ToggleEmojiPicker => self.panel.toggle_emoji_picker(),
            Message::EmojiSelected(code) => {
                let _ = self.panel.select_emoji(code);
            }
            Message::MentionSelected(name) => {
                let _ = self.panel.select_mention(&name);
            }
            Message::Submit => {
                self.panel.submit();
            }
            Message::Like(index) => {
                let _ = self.panel.like(index);
            }
        }
        self.flush_events()
    }

    fn view(&self) -> Element<Message> {
        let emoji_picker: Element<Message> = if self.panel.emoji_picker_visible() {
            ui::chat::emoji_picker()
        } else {
            Space::with_height(0).into()
        };

        let mention_popup: Element<Message> = if self.panel.mention_popup_visible() {
            ui::chat::mention_popup(self.panel.roster())
        } else {
            Space::with_height(0).into()
        };

        let content = column![
            ui::chat::header(&self.config),
            ui::chat::message_list(&self.panel, self.scroll_id.clone()),
            emoji_picker,
            mention_popup,
            ui::chat::composer(&self.panel, &self.config.placeholder),
        ]
        .width(Length::Fill)
        .height(Length::Fill);

        container(content)
            .width(Length::Fill)
            .height(Length::Fill)
            .style(theme::dark_container)
            .into()
    }

    fn subscription(&self) -> Subscription<Message> {
        event::listen_with(key_event)
    }

    fn theme(&self) -> Theme {
        Theme::Dark
    }
}

impl ChatRoom {
    /// Turns queued panel notifications into commands. Every append snaps the
    /// message list to its end.
    fn flush_events(&mut self) -> Command<Message> {
        let mut commands = Vec::new();
        for event in self.panel.drain_events() {
            match event {
                PanelEvent::MessageAppended { index } => {
                    debug!(index, "scrolling to newest message");
                    commands.push(scrollable::snap_to(
                        self.scroll_id.clone(),
                        scrollable::RelativeOffset::END,
                    ));
                }
            }
        }
        Command::batch(commands)
    }
}

/// Forwards `@` and Backspace presses handled by the focused text input.
fn key_event(event: Event, status: event::Status) -> Option<Message> {
    match event {
        Event::Keyboard(keyboard::Event::KeyPressed { key, .. }) => key_message(&key, status),
        _ => None,
    }
}

/// Only presses captured by the focused text input reach the composer.
fn key_message(key: &Key, status: event::Status) -> Option<Message> {
    match status {
        event::Status::Captured => composer_key(key).map(Message::Key),
        event::Status::Ignored => None,
    }
}

fn composer_key(key: &Key) -> Option<ComposerKey> {
    match key {
        Key::Character(c) if c.as_str() == "@" => Some(ComposerKey::At),
        Key::Named(Named::Backspace) => Some(ComposerKey::Backspace),
        _ => None,
    }
}
