use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyEventKind};

/// Position inside a vertical list, moved with the arrow keys. Wraps
/// around at both ends.
#[derive(Clone, Debug, Default)]
pub struct Cursor {
    pub current: usize,
}

impl Cursor {
    pub fn reset(&mut self) {
        self.current = 0;
    }

    pub fn clamp(&mut self, max: usize) {
        if max == 0 {
            self.current = 0;
        } else if self.current >= max {
            self.current = max - 1;
        }
    }

    pub fn handle(&mut self, key_event: Option<&KeyEvent>, cursor_max: usize) {
        let Some(key_event) = key_event else {
            return;
        };

        if key_event.kind != KeyEventKind::Press || cursor_max == 0 {
            return;
        }

        match key_event.code {
            KeyCode::Up => self.current = (self.current + cursor_max - 1) % cursor_max,
            KeyCode::Down => self.current = (self.current + 1) % cursor_max,
            KeyCode::Home => self.current = 0,
            KeyCode::End => self.current = cursor_max - 1,
            _ => {}
        }
    }
}
