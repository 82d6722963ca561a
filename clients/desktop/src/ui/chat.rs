//! Header, message list, popups and composer for the chat window.

use chatroom_panel::{ChatMessage, ChatPanel, PanelConfig, Roster, CATALOG};
use iced::widget::{button, column, container, row, scrollable, text, text_input, Column, Space};
use iced::{Alignment, Element, Length};

use super::EMOJI_FONT;
use crate::app::Message;
use crate::theme::{self, colors};

/// Emoji buttons per picker row.
const PICKER_COLUMNS: usize = 8;

pub fn header(config: &PanelConfig) -> Element<'_, Message> {
    let initial = config
        .title
        .chars()
        .next()
        .map(|c| c.to_uppercase().to_string())
        .unwrap_or_else(|| "#".to_string());

    let avatar = container(text(initial).size(18))
        .width(Length::Fixed(40.0))
        .height(Length::Fixed(40.0))
        .center_x()
        .center_y()
        .style(theme::avatar);

    let info = column![
        text(&config.title).size(18),
        text(&config.subtitle)
            .size(12)
            .style(iced::theme::Text::Color(colors::TEXT_SECONDARY)),
    ]
    .spacing(2);

    container(row![avatar, info].spacing(12).align_items(Alignment::Center))
        .padding([10, 16])
        .width(Length::Fill)
        .style(theme::header_bar)
        .into()
}

pub fn message_list(panel: &ChatPanel, scroll_id: scrollable::Id) -> Element<'_, Message> {
    let content: Element<Message> = if panel.messages().is_empty() {
        container(
            text("No messages yet. Say hello!")
                .size(12)
                .style(iced::theme::Text::Color(colors::TEXT_MUTED)),
        )
        .width(Length::Fill)
        .padding(24)
        .center_x()
        .into()
    } else {
        let bubbles: Vec<Element<Message>> = panel
            .messages()
            .iter()
            .enumerate()
            .map(|(index, message)| bubble(message, index))
            .collect();
        Column::with_children(bubbles).spacing(8).padding(16).into()
    };

    scrollable(content)
        .id(scroll_id)
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}

fn bubble(message: &ChatMessage, index: usize) -> Element<'_, Message> {
    let heading = row![
        text(&message.sender)
            .size(13)
            .style(iced::theme::Text::Color(colors::SENDER_GREEN)),
        text(message.time_label())
            .size(10)
            .style(iced::theme::Text::Color(colors::TEXT_MUTED)),
    ]
    .spacing(8)
    .align_items(Alignment::Center);

    let card = container(column![heading, text(&message.text).size(14).font(EMOJI_FONT)].spacing(3))
        .padding([8, 12])
        .max_width(360)
        .style(theme::bubble);

    let like = button(text(format!("👍 {}", message.like_count)).size(12).font(EMOJI_FONT))
        .padding([4, 8])
        .style(iced::theme::Button::Text)
        .on_press(Message::Like(index));

    row![card, like, Space::with_width(Length::Fill)]
        .spacing(6)
        .align_items(Alignment::Center)
        .width(Length::Fill)
        .into()
}

pub fn emoji_picker<'a>() -> Element<'a, Message> {
    let rows: Vec<Element<Message>> = CATALOG
        .chunks(PICKER_COLUMNS)
        .map(|chunk| {
            let buttons: Vec<Element<Message>> = chunk
                .iter()
                .filter_map(|entry| {
                    let glyph = entry.glyph().ok()?;
                    Some(
                        button(text(glyph).size(20).font(EMOJI_FONT))
                            .padding([4, 8])
                            .style(iced::theme::Button::Text)
                            .on_press(Message::EmojiSelected(entry.unified))
                            .into(),
                    )
                })
                .collect();
            row(buttons).spacing(4).into()
        })
        .collect();

    container(Column::with_children(rows).spacing(4))
        .padding(8)
        .style(theme::popup)
        .into()
}

pub fn mention_popup(roster: &Roster) -> Element<'_, Message> {
    let names: Vec<Element<Message>> = roster
        .names()
        .iter()
        .map(|name| {
            button(text(name).size(13))
                .padding([6, 12])
                .width(Length::Fill)
                .style(iced::theme::Button::Text)
                .on_press(Message::MentionSelected(name.clone()))
                .into()
        })
        .collect();

    container(Column::with_children(names).spacing(2))
        .padding(6)
        .width(Length::Fixed(180.0))
        .style(theme::popup)
        .into()
}

pub fn composer<'a>(panel: &'a ChatPanel, placeholder: &'a str) -> Element<'a, Message> {
    row![
        button(text("😀").font(EMOJI_FONT))
            .padding([6, 10])
            .on_press(Message::ToggleEmojiPicker),
        text_input(placeholder, panel.draft())
            .on_input(Message::DraftChanged)
            .on_submit(Message::Submit)
            .padding(10)
            .size(14),
        button(text("Send"))
            .padding([10, 16])
            .on_press(Message::Submit),
    ]
    .spacing(8)
    .padding(12)
    .align_items(Alignment::Center)
    .into()
}
