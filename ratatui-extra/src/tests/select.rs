use crate::extensions::ThemedWidget;
use crate::select::Select;
use crate::testutils::*;

fn symbols() -> Vec<String> {
    vec!["ETH".to_string(), "BTC".to_string(), "SOL".to_string()]
}

#[test]
fn select_renders_loading_placeholder_before_list_is_set() {
    let mut term = TestTerminal::new(20, 5);
    let select = Select::<String>::default().with_loading_text("Loading tokens...");

    select.render(term.area, &mut term.buffer, &TestTheme);

    assert_eq!(term.render_to_string(), "Loading tokens...");
}

#[test]
fn select_renders_empty_placeholder_for_empty_list() {
    let mut term = TestTerminal::new(20, 5);
    let mut select = Select::<String>::default().with_empty_text("no tokens");
    select.update_list(Some(vec![]));

    select.render(term.area, &mut term.buffer, &TestTheme);

    assert_eq!(term.render_to_string(), "no tokens");
}

#[test]
fn select_renders_all_items() {
    let mut term = TestTerminal::new(20, 5);
    let mut select = Select::default();
    select.update_list(Some(symbols()));

    select.render(term.area, &mut term.buffer, &TestTheme);

    assert_eq!(term.render_to_string(), "ETH\nBTC\nSOL");
}

#[test]
fn select_enter_returns_cursored_item() {
    let mut select = Select::default();
    select.update_list(Some(symbols()));

    select.handle_event(Some(&down())).unwrap();
    let selected = select.handle_event(Some(&enter())).unwrap();

    assert_eq!(selected, Some(&"BTC".to_string()));
}

#[test]
fn select_enter_on_loading_list_returns_nothing() {
    let mut select = Select::<String>::default();
    let selected = select.handle_event(Some(&enter())).unwrap();
    assert!(selected.is_none());
}

#[test]
fn select_update_list_clamps_cursor() {
    let mut select = Select::default();
    select.update_list(Some(symbols()));
    select.handle_event(Some(&up())).unwrap(); // wraps to last item
    assert_eq!(select.cursor(), 2);

    select.update_list(Some(vec!["ETH".to_string()]));
    assert_eq!(select.cursor(), 0);
}

#[test]
fn select_scrolls_to_keep_cursor_visible() {
    let mut term = TestTerminal::new(20, 2);
    let mut select = Select::default();
    select.update_list(Some(symbols()));
    select.handle_event(Some(&down())).unwrap();
    select.handle_event(Some(&down())).unwrap();

    select.render(term.area, &mut term.buffer, &TestTheme);

    assert_eq!(term.render_to_string(), "BTC\nSOL");
}
