use ratatui::{
    buffer::Buffer,
    crossterm::event::{KeyCode, KeyEvent},
    layout::Rect,
    text::Text,
    widgets::{Block, Clear, Paragraph, Widget, Wrap},
};

use crate::{
    act::Act,
    extensions::{KeyEventExt, RectExt, ThemedWidget},
    thematize::Thematize,
};

/// Popup that displays text over the whole screen. Shown only while it
/// holds text; Esc or Enter dismisses it.
#[derive(Debug, Default)]
pub struct TextPopup {
    title: &'static str,
    text: String,
}

impl TextPopup {
    pub fn new(title: &'static str) -> Self {
        Self {
            title,
            text: String::new(),
        }
    }

    pub fn set_text(&mut self, text: String) {
        self.text = text;
    }

    pub fn clear(&mut self) {
        self.text.clear();
    }

    pub fn is_shown(&self) -> bool {
        !self.text.is_empty()
    }

    pub fn handle_event<A: Act>(&mut self, key_event: Option<&KeyEvent>) -> A {
        let mut actions = A::default();

        if self.is_shown() {
            actions.ignore_esc();

            if let Some(key_event) = key_event {
                if key_event.is_pressed(KeyCode::Esc) || key_event.is_pressed(KeyCode::Enter) {
                    self.clear();
                }
            }
        }

        actions
    }
}

impl ThemedWidget for TextPopup {
    fn render(&self, area: Rect, buf: &mut Buffer, theme: &impl Thematize) {
        if !self.is_shown() {
            return;
        }

        let popup_area = area.centered(area.width.saturating_sub(8).min(70), 12);

        Clear.render(popup_area, buf);
        Block::bordered()
            .title(self.title)
            .style(theme.style())
            .border_type(theme.border_type())
            .render(popup_area, buf);

        Paragraph::new(Text::raw(&self.text))
            .style(theme.style())
            .wrap(Wrap { trim: false })
            .render(popup_area.block_inner(), buf);
    }
}
