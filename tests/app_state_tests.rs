//! Application state tests
//!
//! Tests for the friend list, selection, the two forms and how they
//! exclude each other.

use splitbill::assistant::{register_default_actions, LocalBridge};
use splitbill::forms::Payer;
use splitbill::ledger::{avatar, Directory, FriendId, SequentialIds};
use splitbill::ui::app::Focus;
use splitbill::ui::theme::Theme;
use splitbill::ui::App;

const CLARK: FriendId = FriendId(118_836);
const SARAH: FriendId = FriendId(933_372);

/// Helper to create a test app with the sample friends and predictable ids
fn create_test_app() -> App {
    let mut bridge = LocalBridge::new();
    register_default_actions(&mut bridge);
    App::new(
        Directory::sample(),
        Box::new(SequentialIds::starting_at(1000)),
        bridge,
        avatar::DEFAULT_AVATAR_BASE.to_string(),
        Theme::default_theme().clone(),
    )
}

fn balance(app: &App, id: FriendId) -> i64 {
    app.directory.get(id).map(|f| f.balance).expect("friend exists")
}

fn split(app: &mut App, id: FriendId, bill: i64, yours: i64, payer: Payer) {
    app.toggle_selection(id);
    app.split_bill_form.set_bill(Some(bill));
    assert!(app.split_bill_form.set_your_expense(Some(yours)));
    app.split_bill_form.payer = payer;
    app.submit_split_bill();
}

#[test]
fn test_cursor_wraps() {
    let mut app = create_test_app();
    assert_eq!(app.cursor, 0);

    app.previous();
    assert_eq!(app.cursor, 2);

    app.next();
    assert_eq!(app.cursor, 0);
    assert_eq!(app.cursor_friend().map(|f| f.id), Some(CLARK));
}

#[test]
fn test_cursor_on_empty_directory() {
    let mut app = App::new(
        Directory::new(),
        Box::new(SequentialIds::default()),
        LocalBridge::new(),
        avatar::DEFAULT_AVATAR_BASE.to_string(),
        Theme::default_theme().clone(),
    );
    app.next();
    app.previous();
    app.toggle_selection_at_cursor();
    assert_eq!(app.cursor, 0);
    assert!(app.selection.current().is_none());
}

#[test]
fn test_toggle_selection_twice_clears() {
    let mut app = create_test_app();

    app.toggle_selection(SARAH);
    assert_eq!(app.selection.current(), Some(SARAH));
    assert_eq!(app.focus, Focus::SplitBill);

    app.toggle_selection(SARAH);
    assert!(app.selection.current().is_none());
    assert_eq!(app.focus, Focus::FriendList);
}

#[test]
fn test_selecting_closes_add_friend_form() {
    let mut app = create_test_app();
    app.toggle_add_friend();
    app.add_friend_form.name = "half typed".to_string();
    assert!(app.show_add_friend);

    app.toggle_selection(CLARK);
    assert!(!app.show_add_friend);
    assert!(app.add_friend_form.name.is_empty());
}

#[test]
fn test_opening_add_friend_form_clears_selection() {
    let mut app = create_test_app();
    app.toggle_selection(CLARK);

    app.toggle_add_friend();
    assert!(app.show_add_friend);
    assert!(app.selection.current().is_none());
    assert_eq!(app.focus, Focus::AddFriend);
}

#[test]
fn test_add_friend_appends_record() {
    let mut app = create_test_app();
    app.toggle_add_friend();
    app.add_friend_form.name = "Dana".to_string();
    app.add_friend_form.image = "https://example.com/dana.png".to_string();
    app.submit_add_friend();

    assert_eq!(app.directory.len(), 4);
    let dana = app.directory.get(FriendId(1000)).expect("dana added");
    assert_eq!(dana.balance, 0);
    assert_eq!(dana.image, "https://example.com/dana.png?u=1000");
    assert!(!app.show_add_friend);
    assert_eq!(app.cursor, 3);
}

#[test]
fn test_add_friend_rejects_empty_fields() {
    let mut app = create_test_app();
    app.toggle_add_friend();
    app.submit_add_friend();

    assert_eq!(app.directory.len(), 3);
    assert!(app.show_add_friend);
}

#[test]
fn test_add_friend_ids_are_unique() {
    let mut app = create_test_app();
    for name in ["A", "B", "C"] {
        app.toggle_add_friend();
        app.add_friend_form.name = name.to_string();
        app.submit_add_friend();
    }

    let mut ids: Vec<FriendId> = app.directory.iter().map(|f| f.id).collect();
    ids.sort();
    ids.dedup();
    assert_eq!(ids.len(), 6);
}

#[test]
fn test_split_bill_you_paying() {
    let mut app = create_test_app();
    split(&mut app, SARAH, 100, 40, Payer::You);

    assert_eq!(balance(&app, SARAH), 80);
    assert!(app.selection.current().is_none());
    assert_eq!(app.focus, Focus::FriendList);
}

#[test]
fn test_split_bill_friend_paying() {
    let mut app = create_test_app();
    split(&mut app, CLARK, 100, 40, Payer::Friend);

    assert_eq!(balance(&app, CLARK), -47);
    assert!(app.selection.current().is_none());
}

#[test]
fn test_split_bill_incomplete_form_keeps_state() {
    let mut app = create_test_app();
    app.toggle_selection(SARAH);
    app.split_bill_form.set_bill(Some(100));
    app.submit_split_bill();

    assert_eq!(balance(&app, SARAH), 20);
    assert_eq!(app.selection.current(), Some(SARAH));
}

#[test]
fn test_split_bill_form_resets_on_new_selection() {
    let mut app = create_test_app();
    app.toggle_selection(SARAH);
    app.split_bill_form.set_bill(Some(50));

    app.toggle_selection(CLARK);
    assert_eq!(app.split_bill_form.bill(), None);
}

#[test]
fn test_cycle_focus_skips_closed_panes() {
    let mut app = create_test_app();
    app.cycle_focus();
    assert_eq!(app.focus, Focus::FriendList);

    app.toggle_selection(CLARK);
    app.focus = Focus::FriendList;
    app.cycle_focus();
    assert_eq!(app.focus, Focus::SplitBill);
    app.cycle_focus();
    assert_eq!(app.focus, Focus::FriendList);
}

#[test]
fn test_help_toggle() {
    let mut app = create_test_app();
    assert!(!app.show_help);
    app.toggle_help();
    assert!(app.show_help);
    app.toggle_help();
    assert!(!app.show_help);
}

#[test]
fn test_split_bill_overflow_keeps_form_and_selection() {
    let mut app = create_test_app();
    app.toggle_selection(SARAH);
    app.split_bill_form.set_bill(Some(i64::MAX));
    assert!(app.split_bill_form.set_your_expense(Some(1)));
    app.submit_split_bill();

    assert_eq!(balance(&app, SARAH), 20);
    assert_eq!(app.selection.current(), Some(SARAH));
    assert_eq!(app.split_bill_form.bill(), Some(i64::MAX));
    assert_eq!(app.focus, Focus::SplitBill);
}

#[test]
fn test_prompt_extreme_amounts_do_not_change_balances() {
    let mut app = create_test_app();

    let status = app
        .run_command("splitBill friendId=118836 amount=-9223372036854775808")
        .expect("status reported");
    assert!(status.is_error);
    assert!(status.text.contains("out of range"));

    let status = app
        .run_command("splitBill friendId=118836 amount=9223372036854775807")
        .expect("status reported");
    assert!(!status.is_error);

    assert_eq!(app.directory, Directory::sample());
}
