//! Test utilities for widget testing.
//!
//! Provides a test terminal with fixed dimensions to render widgets into
//! and compare the rendered text output.

use ratatui::{
    buffer::Buffer,
    crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyEventState, KeyModifiers},
    layout::{Position, Rect},
    style::{Color, Modifier, Style},
    widgets::BorderType,
};

use crate::thematize::Thematize;

/// A fixed-size test terminal for rendering widgets and comparing output.
pub struct TestTerminal {
    pub buffer: Buffer,
    pub area: Rect,
}

impl TestTerminal {
    pub fn new(width: u16, height: u16) -> Self {
        let area = Rect::new(0, 0, width, height);
        let buffer = Buffer::empty(area);
        Self { buffer, area }
    }

    /// Reset the buffer to empty state.
    pub fn clear(&mut self) {
        self.buffer = Buffer::empty(self.area);
    }

    /// Get the rendered terminal output as a string, one line per row,
    /// trailing blanks trimmed.
    pub fn render_to_string(&self) -> String {
        let mut lines = Vec::new();
        for y in 0..self.area.height {
            let mut line = String::new();
            for x in 0..self.area.width {
                let cell = self.buffer.cell(Position::new(x, y)).unwrap();
                let symbol = cell.symbol();
                if symbol.is_empty() {
                    line.push(' ');
                } else {
                    line.push_str(symbol);
                }
            }
            lines.push(line.trim_end().to_string());
        }
        while lines.last().map(|l| l.is_empty()).unwrap_or(false) {
            lines.pop();
        }
        lines.join("\n")
    }
}

/// A simple theme for testing with predictable styling.
#[derive(Default, Clone)]
pub struct TestTheme;

impl Thematize for TestTheme {
    fn popup(&self) -> Self {
        Self
    }

    fn error_popup(&self) -> Self {
        Self
    }

    fn style(&self) -> Style {
        Style::default()
    }

    fn style_dim(&self) -> Style {
        Style::default().fg(Color::DarkGray)
    }

    fn border_type(&self) -> BorderType {
        BorderType::Plain
    }

    fn button_focused(&self) -> Style {
        Style::default().add_modifier(Modifier::BOLD | Modifier::REVERSED)
    }

    fn button_notfocused(&self) -> Style {
        Style::default()
    }

    fn select_focused(&self) -> Style {
        Style::default().add_modifier(Modifier::BOLD | Modifier::REVERSED)
    }

    fn select_inactive(&self) -> Style {
        Style::default().fg(Color::Gray)
    }

    fn boxed(&self) -> bool {
        true
    }
}

// ============================================================================
// Event helpers for simulating keyboard input
// ============================================================================

fn key_code(code: KeyCode) -> KeyEvent {
    KeyEvent {
        code,
        modifiers: KeyModifiers::NONE,
        kind: KeyEventKind::Press,
        state: KeyEventState::NONE,
    }
}

pub fn key(c: char) -> KeyEvent {
    key_code(KeyCode::Char(c))
}

pub fn enter() -> KeyEvent {
    key_code(KeyCode::Enter)
}

pub fn esc() -> KeyEvent {
    key_code(KeyCode::Esc)
}

pub fn up() -> KeyEvent {
    key_code(KeyCode::Up)
}

pub fn down() -> KeyEvent {
    key_code(KeyCode::Down)
}

pub fn left() -> KeyEvent {
    key_code(KeyCode::Left)
}

pub fn right() -> KeyEvent {
    key_code(KeyCode::Right)
}
