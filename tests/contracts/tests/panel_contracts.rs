use chatroom_contracts::{scripted_panel, send};
use chatroom_panel::{
    ChatPanel, ComposerKey, PanelError, PanelEvent, Roster, SeededSource, ThreadRngSource,
};

#[test]
fn whitespace_drafts_are_rejected_without_side_effects() {
    let mut panel = scripted_panel();
    send(&mut panel, "keep me");
    panel.drain_events().for_each(drop);

    for blank in ["", " ", "\t", "\n\n", " \u{3000} \r\n"] {
        panel.draft_changed(blank);
        assert!(panel.submit().is_none());
        assert_eq!(panel.draft(), blank);
        assert_eq!(panel.messages().len(), 1);
    }
    assert_eq!(panel.drain_events().count(), 0);
}

#[test]
fn submissions_keep_order_and_trim() {
    let mut panel = scripted_panel();
    let drafts = ["  one", "two  ", "", "  ", "three\n", "four"];
    for draft in drafts {
        send(&mut panel, draft);
    }

    let texts: Vec<&str> = panel.messages().iter().map(|m| m.text.as_str()).collect();
    assert_eq!(texts, ["one", "two", "three", "four"]);

    let senders: Vec<&str> = panel.messages().iter().map(|m| m.sender.as_str()).collect();
    assert_eq!(senders, ["Alan", "Bob", "Carol", "Dean"]);

    let appended: Vec<usize> = panel
        .drain_events()
        .map(|PanelEvent::MessageAppended { index }| index)
        .collect();
    assert_eq!(appended, [0, 1, 2, 3]);
}

#[test]
fn likes_are_monotonic_per_message() {
    let mut panel = scripted_panel();
    send(&mut panel, "a");
    send(&mut panel, "b");

    for n in 1..=5u64 {
        assert_eq!(panel.like(1), Ok(n));
    }
    assert_eq!(panel.messages()[0].like_count, 0);
    assert_eq!(panel.messages()[1].like_count, 5);
    assert_eq!(panel.like(2), Err(PanelError::NoSuchMessage(2)));
}

#[test]
fn mention_appends_name_and_closes_popup() {
    let mut panel = scripted_panel();
    panel.draft_changed("Hello ");
    panel.key_pressed(ComposerKey::At);
    panel.select_mention("Bob").unwrap();

    assert_eq!(panel.draft(), "Hello Bob ");
    assert!(!panel.mention_popup_visible());
}

#[test]
fn emoji_selection_appends_glyph() {
    let mut panel = scripted_panel();
    panel.draft_changed("Hi ");
    panel.select_emoji("1f600").unwrap();
    assert_eq!(panel.draft(), "Hi \u{1F600}");

    assert!(panel.select_emoji("1f600-xyz").is_err());
    assert_eq!(panel.draft(), "Hi 😀");
}

#[test]
fn full_flow() {
    let mut panel = ChatPanel::new(Roster::default(), Box::new(ThreadRngSource));
    assert!(panel.messages().is_empty());
    assert_eq!(panel.draft(), "");

    panel.draft_changed("hello team");
    panel.submit();

    assert_eq!(panel.messages().len(), 1);
    let message = &panel.messages()[0];
    assert_eq!(message.text, "hello team");
    assert_eq!(message.like_count, 0);
    assert!(panel.roster().contains(&message.sender));

    panel.like(0).unwrap();
    panel.like(0).unwrap();
    assert_eq!(panel.messages()[0].like_count, 2);
}

#[test]
fn at_then_backspace_toggles_popup() {
    let mut panel = scripted_panel();
    panel.key_pressed(ComposerKey::At);
    assert!(panel.mention_popup_visible());

    panel.draft_changed("@Al");
    panel.key_pressed(ComposerKey::Backspace);
    assert!(!panel.mention_popup_visible());
}

#[test]
fn submit_hides_picker_but_not_mentions() {
    let mut panel = scripted_panel();
    panel.toggle_emoji_picker();
    panel.key_pressed(ComposerKey::At);
    assert!(panel.emoji_picker_visible() && panel.mention_popup_visible());

    send(&mut panel, "hi @");
    assert!(!panel.emoji_picker_visible());
    assert!(panel.mention_popup_visible());
}

#[test]
fn seeded_panels_pick_the_same_senders() {
    let run = || {
        let mut panel = ChatPanel::new(Roster::default(), Box::new(SeededSource::new(2024)));
        for i in 0..20 {
            send(&mut panel, &format!("message {i}"));
        }
        panel
            .messages()
            .iter()
            .map(|m| m.sender.clone())
            .collect::<Vec<_>>()
    };
    assert_eq!(run(), run());
}
