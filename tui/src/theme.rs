use std::fmt::Formatter;

use ratatui::prelude::Color;
use ratatui::style::{Modifier, Style};
use ratatui::widgets::BorderType;
use strum::IntoEnumIterator;
use strum_macros::EnumIter;
use swarm_ratatui_extra::thematize::Thematize;

#[derive(Default, Debug, EnumIter)]
pub enum ThemeName {
    #[default]
    Monochrome,
    Dark,
}

impl std::fmt::Display for ThemeName {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{self:?}")
    }
}

impl std::str::FromStr for ThemeName {
    type Err = crate::Error;

    fn from_str(theme_name: &str) -> crate::Result<Self> {
        match theme_name {
            "Monochrome" => Ok(Self::Monochrome),
            "Dark" => Ok(Self::Dark),
            _ => Err(crate::Error::UnknownTheme(theme_name.to_string())),
        }
    }
}

impl ThemeName {
    pub fn list() -> Vec<String> {
        Self::iter().map(|theme| theme.to_string()).collect()
    }
}

#[derive(Clone)]
pub struct Theme {
    text: Option<Color>,
    bg: Option<Color>,
    highlight: Option<Color>,
    error_bg: Option<Color>,
    border_type: BorderType,
}

impl Theme {
    pub fn new(theme_name: ThemeName) -> Theme {
        match theme_name {
            ThemeName::Monochrome => Theme {
                text: None,
                bg: None,
                highlight: None,
                error_bg: None,
                border_type: BorderType::Plain,
            },
            ThemeName::Dark => Theme {
                text: Some(Color::White),
                bg: Some(Color::Black),
                highlight: Some(Color::Cyan),
                error_bg: Some(Color::Red),
                border_type: BorderType::Rounded,
            },
        }
    }

    pub fn error_style(&self) -> Style {
        Style::default()
            .fg(self.error_bg.unwrap_or(Color::Red))
            .add_modifier(Modifier::BOLD)
    }
}

impl Thematize for Theme {
    fn popup(&self) -> Theme {
        self.clone()
    }

    fn error_popup(&self) -> Theme {
        let mut theme = self.clone();
        theme.bg = theme.error_bg.or(theme.bg);
        theme
    }

    fn style(&self) -> Style {
        let mut style = Style::default();
        if let Some(text) = self.text {
            style = style.fg(text);
        }
        if let Some(bg) = self.bg {
            style = style.bg(bg);
        }
        style
    }

    fn style_dim(&self) -> Style {
        self.style().fg(Color::DarkGray)
    }

    fn border_type(&self) -> BorderType {
        self.border_type
    }

    fn button_focused(&self) -> Style {
        let mut style = self.style().add_modifier(Modifier::BOLD | Modifier::REVERSED);
        if let Some(highlight) = self.highlight {
            style = style.fg(highlight);
        }
        style
    }

    fn button_notfocused(&self) -> Style {
        self.style()
    }

    fn select_focused(&self) -> Style {
        let mut style = self.style().add_modifier(Modifier::BOLD | Modifier::REVERSED);
        if let Some(highlight) = self.highlight {
            style = style.fg(highlight);
        }
        style
    }

    fn select_inactive(&self) -> Style {
        self.style().fg(Color::Gray)
    }

    fn boxed(&self) -> bool {
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn theme_names_round_trip() {
        for name in ThemeName::list() {
            assert!(ThemeName::from_str(&name).is_ok());
        }
    }

    #[test]
    fn unknown_theme_name_errors() {
        assert!(matches!(
            ThemeName::from_str("Neon"),
            Err(crate::Error::UnknownTheme(_))
        ));
    }
}
