//! Prompt for the name of a new custom template

use crossterm::event::{Event, KeyCode, KeyEvent};
use ratatui::prelude::*;
use ratatui::widgets::*;
use tui_input::backend::crossterm::EventHandler;
use tui_input::Input;

use super::{centered, Dialog, DialogResult};
use crate::tui::styles::Theme;

pub struct NamePromptDialog {
    title: String,
    input: Input,
    error: Option<String>,
}

impl NamePromptDialog {
    pub fn new(title: &str) -> Self {
        Self {
            title: title.to_string(),
            input: Input::default(),
            error: None,
        }
    }

    pub fn value(&self) -> &str {
        self.input.value()
    }
}

impl Dialog for NamePromptDialog {
    type Output = String;

    fn handle_key(&mut self, key: KeyEvent) -> DialogResult<String> {
        match key.code {
            KeyCode::Esc => DialogResult::Cancel,
            KeyCode::Enter => {
                let name = self.input.value().trim();
                if name.is_empty() {
                    self.error = Some("Name must not be empty".to_string());
                    DialogResult::Continue
                } else {
                    DialogResult::Submit(name.to_string())
                }
            }
            _ => {
                self.error = None;
                self.input.handle_event(&Event::Key(key));
                DialogResult::Continue
            }
        }
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, theme: &Theme) {
        let dialog_area = centered(area, 60, 9);
        frame.render_widget(Clear, dialog_area);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme.accent))
            .title(format!(" {} ", self.title))
            .title_style(Style::default().fg(theme.title).bold());

        let inner = block.inner(dialog_area);
        frame.render_widget(block, dialog_area);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .margin(1)
            .constraints([
                Constraint::Length(2),
                Constraint::Length(1),
                Constraint::Min(1),
            ])
            .split(inner);

        let label = "Name: ";
        let width = chunks[0].width.saturating_sub(label.len() as u16 + 1) as usize;
        let scroll = self.input.visual_scroll(width);
        let line = Line::from(vec![
            Span::styled(label, Style::default().fg(theme.accent)),
            Span::styled(
                self.input.value().chars().skip(scroll).collect::<String>(),
                Style::default().fg(theme.text),
            ),
        ]);
        frame.render_widget(Paragraph::new(line), chunks[0]);
        let cursor = self.input.visual_cursor().saturating_sub(scroll) as u16;
        frame.set_cursor_position((chunks[0].x + label.len() as u16 + cursor, chunks[0].y));

        if let Some(err) = &self.error {
            frame.render_widget(
                Paragraph::new(err.as_str()).style(Style::default().fg(theme.error)),
                chunks[1],
            );
        }

        let hint = Line::from(vec![
            Span::styled("Enter", Style::default().fg(theme.hint)),
            Span::raw(" create  "),
            Span::styled("Esc", Style::default().fg(theme.hint)),
            Span::raw(" cancel"),
        ]);
        frame.render_widget(Paragraph::new(hint), chunks[2]);
    }
}
