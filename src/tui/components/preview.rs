//! Read-only preview pane for the highlighted template

use ratatui::prelude::*;
use ratatui::widgets::*;

use crate::tui::styles::Theme;

pub struct Preview<'a> {
    title: &'a str,
    content: Option<&'a str>,
}

impl<'a> Preview<'a> {
    pub fn new(title: &'a str, content: Option<&'a str>) -> Self {
        Self { title, content }
    }

    pub fn render(&self, frame: &mut Frame, area: Rect, theme: &Theme) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme.dimmed))
            .title(format!(" {} ", self.title))
            .title_style(Style::default().fg(theme.title));

        let body = match self.content {
            Some(text) if !text.is_empty() => {
                // Only what fits is worth building lines for
                let visible = area.height.saturating_sub(2) as usize;
                let lines: Vec<Line> = text
                    .lines()
                    .take(visible)
                    .map(|l| {
                        let style = if l.trim_start().starts_with('#') {
                            Style::default().fg(theme.dimmed)
                        } else {
                            Style::default().fg(theme.text)
                        };
                        Line::styled(l.to_string(), style)
                    })
                    .collect();
                Paragraph::new(lines)
            }
            Some(_) => Paragraph::new("(empty)").style(Style::default().fg(theme.dimmed)),
            None => Paragraph::new("(no preview)").style(Style::default().fg(theme.dimmed)),
        };

        frame.render_widget(body.block(block), area);
    }
}
