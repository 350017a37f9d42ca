use super::*;

// =============================================================
// ChatSession defaults
// =============================================================

#[test]
fn chat_session_default_closed_and_empty() {
    let state = ChatSession::default();
    assert!(!state.open);
    assert!(state.messages.is_empty());
    assert!(!state.is_thinking());
}

// =============================================================
// Open / close
// =============================================================

#[test]
fn open_seeds_welcome_message() {
    let mut chat = ChatSession::default();
    chat.open("Welcome!", 1.0);
    assert!(chat.open);
    assert_eq!(chat.messages.len(), 1);
    assert_eq!(chat.messages[0].sender, Sender::Ai);
    assert_eq!(chat.messages[0].text, "Welcome!");
}

#[test]
fn open_twice_keeps_log() {
    let mut chat = ChatSession::default();
    chat.open("Welcome!", 1.0);
    chat.push_user("hi", 2.0);
    chat.open("Welcome!", 3.0);
    assert_eq!(chat.messages.len(), 2);
}

#[test]
fn close_discards_log() {
    let mut chat = ChatSession::default();
    chat.open("Welcome!", 1.0);
    chat.push_user("hi", 2.0);
    chat.close();
    assert!(!chat.open);
    assert!(chat.messages.is_empty());
}

// =============================================================
// Messages
// =============================================================

#[test]
fn push_user_trims_and_ignores_blank() {
    let mut chat = ChatSession::default();
    chat.open("w", 0.0);
    assert!(chat.push_user("   ", 1.0).is_none());
    let msg = chat.push_user("  hello  ", 1.0).unwrap();
    assert_eq!(msg.text, "hello");
    assert_eq!(msg.sender, Sender::User);
    assert_eq!(chat.messages.len(), 2);
}

#[test]
fn push_user_ignored_while_closed() {
    let mut chat = ChatSession::default();
    assert!(chat.push_user("hello", 1.0).is_none());
    assert!(chat.messages.is_empty());
}

#[test]
fn message_ids_are_unique() {
    let mut chat = ChatSession::default();
    chat.open("w", 0.0);
    let a = chat.push_user("a", 1.0).unwrap();
    let b = chat.push_user("b", 2.0).unwrap();
    assert_ne!(a.id, b.id);
}

#[test]
fn log_is_append_only_in_order() {
    let mut chat = ChatSession::default();
    chat.open("w", 0.0);
    chat.push_user("first", 1.0);
    let pending = chat.begin_reply();
    assert!(chat.finish_reply(pending, "reply".to_owned(), 2.0));
    chat.push_user("second", 3.0);
    let texts: Vec<_> = chat.messages.iter().map(|m| m.text.as_str()).collect();
    assert_eq!(texts, vec!["w", "first", "reply", "second"]);
}

// =============================================================
// Pending replies
// =============================================================

#[test]
fn pending_reply_tracks_thinking() {
    let mut chat = ChatSession::default();
    chat.open("w", 0.0);
    let first = chat.begin_reply();
    let second = chat.begin_reply();
    assert_eq!(chat.pending_replies, 2);
    assert!(chat.finish_reply(first, "one".to_owned(), 1.0));
    assert!(chat.is_thinking());
    assert!(chat.finish_reply(second, "two".to_owned(), 2.0));
    assert!(!chat.is_thinking());
}

#[test]
fn reply_for_closed_session_is_dropped() {
    let mut chat = ChatSession::default();
    chat.open("w", 0.0);
    let pending = chat.begin_reply();
    chat.close();
    chat.open("w", 1.0);
    assert!(!chat.finish_reply(pending, "late".to_owned(), 2.0));
    assert_eq!(chat.messages.len(), 1);
}

#[test]
fn can_send_respects_blocking_flag() {
    let mut chat = ChatSession::default();
    chat.open("w", 0.0);
    assert!(chat.can_send("hi", true));
    assert!(!chat.can_send("  ", false));
    chat.begin_reply();
    assert!(chat.can_send("hi", false));
    assert!(!chat.can_send("hi", true));
}
