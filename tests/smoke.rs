mod helpers;

use helpers::TestContext;
use todos::input::{BACKSPACE, ENTER, Key};

#[test]
fn core_workflow_creates_toggles_deletes_and_saves() {
    let mut ctx = TestContext::new();

    ctx.press(Key::Char(ENTER));
    ctx.type_str("Smoke test entry");
    ctx.press(Key::Char(ENTER));

    assert!(ctx.screen_contains("  > - Smoke test entry"));
    assert_eq!(ctx.read_list(), "  Smoke test entry\n");

    ctx.press(Key::Char(b' '));
    assert_eq!(ctx.read_list(), "- Smoke test entry\n");
    assert!(ctx.screen_contains(" 1 -  0/ 1/ 1"));

    ctx.press(Key::Char(BACKSPACE));
    assert!(!ctx.screen_contains("Smoke test entry"));
    assert_eq!(ctx.read_list(), "");

    ctx.verify_invariants();
}

#[test]
fn ctrl_q_requests_quit() {
    let mut ctx = TestContext::new();
    ctx.feed(b"\x11");
    assert!(ctx.app.should_quit);
}
