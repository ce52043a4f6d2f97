//! Overwrite confirmation dialog

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::prelude::*;
use ratatui::widgets::*;

use super::{centered, Dialog, DialogResult};
use crate::tui::styles::Theme;

pub struct ConfirmDialog {
    title: String,
    message: String,
    yes_selected: bool,
}

impl ConfirmDialog {
    /// Starts on "No" so a stray Enter never confirms.
    pub fn new(title: &str, message: &str) -> Self {
        Self {
            title: title.to_string(),
            message: message.to_string(),
            yes_selected: false,
        }
    }

    pub fn overwrite(path: &std::path::Path) -> Self {
        Self::new(
            "Overwrite?",
            &format!("{} already exists. Replace it?", path.display()),
        )
    }
}

impl Dialog for ConfirmDialog {
    type Output = ();

    fn handle_key(&mut self, key: KeyEvent) -> DialogResult<()> {
        match key.code {
            KeyCode::Esc | KeyCode::Char('n') | KeyCode::Char('N') => DialogResult::Cancel,
            KeyCode::Char('y') | KeyCode::Char('Y') => DialogResult::Submit(()),
            KeyCode::Enter if self.yes_selected => DialogResult::Submit(()),
            KeyCode::Enter => DialogResult::Cancel,
            KeyCode::Left | KeyCode::Char('h') => {
                self.yes_selected = true;
                DialogResult::Continue
            }
            KeyCode::Right | KeyCode::Char('l') => {
                self.yes_selected = false;
                DialogResult::Continue
            }
            KeyCode::Tab | KeyCode::BackTab => {
                self.yes_selected = !self.yes_selected;
                DialogResult::Continue
            }
            _ => DialogResult::Continue,
        }
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, theme: &Theme) {
        let dialog_area = centered(area, 56, 8);
        frame.render_widget(Clear, dialog_area);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme.error))
            .title(format!(" {} ", self.title))
            .title_style(Style::default().fg(theme.error).bold());

        let inner = block.inner(dialog_area);
        frame.render_widget(block, dialog_area);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .margin(1)
            .constraints([Constraint::Min(1), Constraint::Length(1)])
            .split(inner);

        frame.render_widget(
            Paragraph::new(self.message.as_str())
                .style(Style::default().fg(theme.text))
                .wrap(Wrap { trim: true }),
            chunks[0],
        );

        let button = |label: &'static str, active: bool, color: Color| {
            let style = if active {
                Style::default().fg(color).bold()
            } else {
                Style::default().fg(theme.dimmed)
            };
            Span::styled(label, style)
        };

        let buttons = Line::from(vec![
            button("[Yes]", self.yes_selected, theme.error),
            Span::raw("    "),
            button("[No]", !self.yes_selected, theme.marked),
        ]);
        frame.render_widget(
            Paragraph::new(buttons).alignment(Alignment::Center),
            chunks[1],
        );
    }
}
