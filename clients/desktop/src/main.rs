//! Chatroom desktop client - single channel with emoji, mentions and likes

mod app;
mod config;
mod theme;
mod ui;

use anyhow::Context;
use chatroom_panel::ChatPanel;
use iced::{Application, Settings};
use tracing::info;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

use crate::config::AppConfig;

fn init_tracing() {
    let filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::INFO.into())
        .from_env_lossy();

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .compact()
        .init();
}

fn main() -> anyhow::Result<()> {
    init_tracing();

    let config = AppConfig::from_env()?;
    let panel = ChatPanel::from_config(&config.panel).context("Failed to build chat panel")?;
    info!(
        channel = %config.panel.title,
        roster = panel.roster().len(),
        seed = ?config.panel.seed,
        source = ?config.source,
        "starting chatroom"
    );

    let mut settings = Settings::with_flags(app::Flags {
        config: config.panel,
        panel,
    });
    settings.window = iced::window::Settings {
        size: iced::Size::new(520.0, 720.0),
        min_size: Some(iced::Size::new(380.0, 480.0)),
        ..Default::default()
    };

    app::ChatRoom::run(settings).map_err(|e| anyhow::anyhow!("Chat window failed: {e}"))
}
