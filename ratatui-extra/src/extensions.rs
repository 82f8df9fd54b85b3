use ratatui::{
    buffer::Buffer,
    crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    layout::Rect,
};

use crate::thematize::Thematize;

/// Widgets that render differently depending on the active theme.
pub trait ThemedWidget {
    fn render(&self, area: Rect, buf: &mut Buffer, theme: &impl Thematize);
}

pub trait KeyEventExt {
    fn is_pressed(&self, key: KeyCode) -> bool;
}

impl KeyEventExt for KeyEvent {
    fn is_pressed(&self, key: KeyCode) -> bool {
        self.kind == KeyEventKind::Press && self.code == key && self.modifiers == KeyModifiers::NONE
    }
}

pub trait RectExt {
    fn change_height(self, new_height: u16) -> Rect;

    fn margin_h(self, m: u16) -> Rect;

    fn margin_top(self, m: u16) -> Rect;

    fn block_inner(self) -> Rect;

    fn centered(self, width: u16, height: u16) -> Rect;
}

impl RectExt for Rect {
    #[track_caller]
    fn change_height(self, new_height: u16) -> Rect {
        Rect {
            x: self.x,
            y: self.y,
            width: self.width,
            height: new_height,
        }
    }

    #[track_caller]
    fn margin_h(self, m: u16) -> Rect {
        Rect {
            x: self.x + m,
            y: self.y,
            width: self.width.saturating_sub(2 * m),
            height: self.height,
        }
    }

    #[track_caller]
    fn margin_top(self, m: u16) -> Rect {
        Rect {
            x: self.x,
            y: self.y + m,
            width: self.width,
            height: self.height.saturating_sub(m),
        }
    }

    /// The area inside a one character border.
    #[track_caller]
    fn block_inner(self) -> Rect {
        Rect {
            x: self.x + 1,
            y: self.y + 1,
            width: self.width.saturating_sub(2),
            height: self.height.saturating_sub(2),
        }
    }

    /// A rect of at most `width` x `height` centered inside self.
    #[track_caller]
    fn centered(self, width: u16, height: u16) -> Rect {
        let width = width.min(self.width);
        let height = height.min(self.height);
        Rect {
            x: self.x + (self.width - width) / 2,
            y: self.y + (self.height - height) / 2,
            width,
            height,
        }
    }
}
