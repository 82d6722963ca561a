//! Fixtures shared by the contract tests.

use chatroom_panel::{ChatPanel, CyclingSource, Roster};

/// Panel over the default roster whose senders cycle from `Alan`.
pub fn scripted_panel() -> ChatPanel {
    ChatPanel::new(Roster::default(), Box::new(CyclingSource::default()))
}

/// Types `text` into the draft and submits it.
pub fn send(panel: &mut ChatPanel, text: &str) -> bool {
    panel.draft_changed(text);
    panel.submit().is_some()
}
