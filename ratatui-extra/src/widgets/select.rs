use std::fmt::Display;

use ratatui::{
    buffer::Buffer,
    crossterm::event::{KeyCode, KeyEvent, KeyEventKind},
    layout::Rect,
    text::Line,
    widgets::{List, ListItem, Widget},
};

use crate::{cursor::Cursor, extensions::ThemedWidget, thematize::Thematize};

/// Keyboard-driven select list. `None` as the list means the data is
/// still loading, `Some(vec![])` means loaded but empty; both render a
/// placeholder instead of items.
#[derive(Debug)]
pub struct Select<T: Display + PartialEq> {
    loading_text: &'static str,
    empty_text: &'static str,
    focus: bool,
    list: Option<Vec<T>>,
    cursor: Cursor,
}

impl<T: Display + PartialEq> Default for Select<T> {
    fn default() -> Self {
        Self {
            loading_text: "Loading...",
            empty_text: "no items",
            focus: false,
            list: None,
            cursor: Cursor::default(),
        }
    }
}

impl<T: Display + PartialEq> Select<T> {
    pub fn with_loading_text(mut self, loading_text: &'static str) -> Self {
        self.loading_text = loading_text;
        self
    }

    pub fn with_empty_text(mut self, empty_text: &'static str) -> Self {
        self.empty_text = empty_text;
        self
    }

    pub fn set_focus(&mut self, focus: bool) {
        self.focus = focus;
    }

    pub fn list_is_none(&self) -> bool {
        self.list.is_none()
    }

    pub fn list_len(&self) -> usize {
        self.list.as_ref().map(|l| l.len()).unwrap_or(0)
    }

    pub fn cursor(&self) -> usize {
        self.cursor.current
    }

    /// Replaces the whole list, keeping the cursor in bounds.
    pub fn update_list(&mut self, new_list: Option<Vec<T>>) {
        self.list = new_list;
        self.cursor.clamp(self.list_len());
    }

    pub fn get_focussed_item(&self) -> crate::Result<&T> {
        self.list
            .as_ref()
            .ok_or(crate::Error::SelectListNotSet)
            .and_then(|list| {
                list.get(self.cursor.current)
                    .ok_or(crate::Error::SelectItemNotFound {
                        idx: self.cursor.current,
                        list_len: list.len(),
                    })
            })
    }

    /// Moves the cursor on arrow keys and returns the focussed item when
    /// Enter is pressed on a non-empty list.
    pub fn handle_event(&mut self, key_event: Option<&KeyEvent>) -> crate::Result<Option<&T>> {
        let Some(len) = self.list.as_ref().map(|list| list.len()) else {
            return Ok(None);
        };

        self.cursor.handle(key_event, len);

        if let Some(key_event) = key_event {
            if key_event.kind == KeyEventKind::Press && key_event.code == KeyCode::Enter && len > 0
            {
                return self.get_focussed_item().map(Some);
            }
        }

        Ok(None)
    }

    fn visible_range(&self, height: usize, len: usize) -> (usize, usize) {
        // Scroll so that the cursor stays on screen.
        let start = (self.cursor.current + 1).saturating_sub(height);
        let end = (start + height).min(len);
        (start, end)
    }
}

impl<T: Display + PartialEq> ThemedWidget for Select<T> {
    fn render(&self, area: Rect, buf: &mut Buffer, theme: &impl Thematize) {
        if area.height == 0 {
            return;
        }

        match self.list.as_ref() {
            None => Line::raw(self.loading_text)
                .style(theme.style())
                .render(area, buf),
            Some(list) if list.is_empty() => Line::raw(self.empty_text)
                .style(theme.style_dim())
                .render(area, buf),
            Some(list) => {
                let (start, end) = self.visible_range(area.height as usize, list.len());
                let items = list[start..end]
                    .iter()
                    .enumerate()
                    .map(|(i, member)| {
                        let style = if start + i == self.cursor.current && self.focus {
                            theme.select_focused()
                        } else {
                            theme.select_inactive()
                        };
                        ListItem::new(format!("{member}")).style(style)
                    })
                    .collect::<Vec<ListItem>>();

                List::new(items).render(area, buf);
            }
        }
    }
}
