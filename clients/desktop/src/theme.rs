//! Chatroom dark theme
//!
//! Slack-style palette: dark channel background, lighter message cards.

use iced::widget::container;
use iced::{Background, Border, Color, Shadow, Theme, Vector};

/// Dark theme color palette
pub mod colors {
    use super::Color;

    // Background colors
    pub const BACKGROUND: Color = Color::from_rgb(0.102, 0.102, 0.118); // #1a1a1e
    pub const HEADER_BG: Color = Color::from_rgb(0.078, 0.078, 0.090); // #141417
    pub const CARD_BG: Color = Color::from_rgb(0.165, 0.165, 0.180); // #2a2a2e
    pub const POPUP_BG: Color = Color::from_rgb(0.130, 0.130, 0.145); // #212125

    // Accent colors
    pub const ACCENT_BLUE: Color = Color::from_rgb(0.173, 0.482, 0.898); // #2c7be5
    pub const SENDER_GREEN: Color = Color::from_rgb(0.196, 0.706, 0.196); // #32b432

    // Text colors
    pub const TEXT_PRIMARY: Color = Color::WHITE;
    pub const TEXT_SECONDARY: Color = Color::from_rgb(0.557, 0.557, 0.576); // #8e8e93
    pub const TEXT_MUTED: Color = Color::from_rgb(0.400, 0.400, 0.420); // #666666

    // Border/Divider
    pub const DIVIDER: Color = Color::from_rgb(0.227, 0.227, 0.235); // #3a3a3c
}

/// Whole-window background
pub fn dark_container(_theme: &Theme) -> container::Appearance {
    container::Appearance {
        background: Some(Background::Color(colors::BACKGROUND)),
        text_color: Some(colors::TEXT_PRIMARY),
        ..Default::default()
    }
}

/// Channel header strip
pub fn header_bar(_theme: &Theme) -> container::Appearance {
    container::Appearance {
        background: Some(Background::Color(colors::HEADER_BG)),
        text_color: Some(colors::TEXT_PRIMARY),
        border: Border {
            color: colors::DIVIDER,
            width: 1.0,
            ..Default::default()
        },
        ..Default::default()
    }
}

/// Round badge behind the channel initial
pub fn avatar(_theme: &Theme) -> container::Appearance {
    container::Appearance {
        background: Some(Background::Color(colors::ACCENT_BLUE)),
        text_color: Some(Color::WHITE),
        border: Border {
            radius: 20.0.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

/// Message card
pub fn bubble(_theme: &Theme) -> container::Appearance {
    container::Appearance {
        background: Some(Background::Color(colors::CARD_BG)),
        text_color: Some(colors::TEXT_PRIMARY),
        border: Border {
            radius: 12.0.into(),
            ..Default::default()
        },
        shadow: Shadow {
            color: Color::from_rgba(0.0, 0.0, 0.0, 0.15),
            offset: Vector { x: 2.0, y: 2.0 },
            blur_radius: 6.0,
        },
    }
}

/// Emoji picker and mention list panels
pub fn popup(_theme: &Theme) -> container::Appearance {
    container::Appearance {
        background: Some(Background::Color(colors::POPUP_BG)),
        text_color: Some(colors::TEXT_PRIMARY),
        border: Border {
            color: colors::DIVIDER,
            width: 1.0,
            radius: 8.0.into(),
        },
        shadow: Shadow {
            color: Color::from_rgba(0.0, 0.0, 0.0, 0.25),
            offset: Vector { x: 0.0, y: -2.0 },
            blur_radius: 8.0,
        },
    }
}
