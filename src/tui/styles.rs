//! Colors shared by the dialogs

use ratatui::style::Color;

#[derive(Debug, Clone, Copy)]
pub struct Theme {
    pub title: Color,
    pub accent: Color,
    pub text: Color,
    pub dimmed: Color,
    pub hint: Color,
    pub marked: Color,
    pub error: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            title: Color::Cyan,
            accent: Color::LightBlue,
            text: Color::Reset,
            dimmed: Color::DarkGray,
            hint: Color::Yellow,
            marked: Color::Green,
            error: Color::Red,
        }
    }
}
