use crate::act::{Act, DefaultAct};
use crate::extensions::ThemedWidget;
use crate::testutils::*;
use crate::text_popup::TextPopup;

#[test]
fn popup_is_hidden_by_default() {
    let popup = TextPopup::new("Error");
    assert!(!popup.is_shown());
}

#[test]
fn popup_shows_when_text_is_set() {
    let mut popup = TextPopup::new("Error");
    popup.set_text("something broke".to_string());
    assert!(popup.is_shown());
}

#[test]
fn popup_ignores_esc_for_the_app_while_shown() {
    let mut popup = TextPopup::new("Error");
    popup.set_text("something broke".to_string());

    let actions: DefaultAct = popup.handle_event(None);
    assert!(actions.is_esc_ignored());
}

#[test]
fn esc_dismisses_the_popup() {
    let mut popup = TextPopup::new("Error");
    popup.set_text("something broke".to_string());

    let _: DefaultAct = popup.handle_event(Some(&esc()));
    assert!(!popup.is_shown());
}

#[test]
fn enter_dismisses_the_popup() {
    let mut popup = TextPopup::new("Error");
    popup.set_text("something broke".to_string());

    let _: DefaultAct = popup.handle_event(Some(&enter()));
    assert!(!popup.is_shown());
}

#[test]
fn hidden_popup_renders_nothing() {
    let mut term = TestTerminal::new(40, 10);
    let popup = TextPopup::new("Error");

    popup.render(term.area, &mut term.buffer, &TestTheme);

    assert_eq!(term.render_to_string(), "");
}

#[test]
fn shown_popup_renders_title_and_text() {
    let mut term = TestTerminal::new(40, 10);
    let mut popup = TextPopup::new("Error");
    popup.set_text("something broke".to_string());

    popup.render(term.area, &mut term.buffer, &TestTheme);

    let rendered = term.render_to_string();
    assert!(rendered.contains("Error"));
    assert!(rendered.contains("something broke"));
}
