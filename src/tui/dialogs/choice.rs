//! Filterable choice list
//!
//! Shows a list of labels with a fuzzy filter line on top. Enter submits the
//! index of the highlighted label in the original list, Esc cancels. When a
//! preview source is attached, the highlighted label's preview is rendered
//! next to the list and refreshed whenever the highlight moves.

use std::collections::BTreeSet;

use crossterm::event::{Event, KeyCode, KeyEvent, KeyModifiers};
use ratatui::prelude::*;
use ratatui::widgets::*;
use tui_input::backend::crossterm::EventHandler;
use tui_input::Input;

use super::{Dialog, DialogResult};
use crate::tui::components::Preview;
use crate::tui::fuzzy;
use crate::tui::styles::Theme;

type PreviewSource<'a> = Box<dyn FnMut(usize) -> Option<String> + 'a>;

const PAGE: usize = 10;

pub struct ChoiceDialog<'a> {
    title: String,
    labels: Vec<String>,
    marked: BTreeSet<usize>,
    pin_first: bool,
    filter: Input,
    visible: Vec<usize>,
    state: ListState,
    preview: Option<PreviewSource<'a>>,
    preview_cache: Option<(usize, Option<String>)>,
}

impl<'a> ChoiceDialog<'a> {
    pub fn new(title: &str, labels: Vec<String>) -> Self {
        let visible = (0..labels.len()).collect();
        let mut state = ListState::default();
        if !labels.is_empty() {
            state.select(Some(0));
        }
        Self {
            title: title.to_string(),
            labels,
            marked: BTreeSet::new(),
            pin_first: false,
            filter: Input::default(),
            visible,
            state,
            preview: None,
            preview_cache: None,
        }
    }

    /// Keep the first label visible whatever the filter says.
    pub fn pin_first(mut self) -> Self {
        self.pin_first = true;
        self
    }

    pub fn with_marked(mut self, marked: &BTreeSet<usize>) -> Self {
        self.marked = marked.clone();
        self
    }

    pub fn with_preview(mut self, source: impl FnMut(usize) -> Option<String> + 'a) -> Self {
        self.preview = Some(Box::new(source));
        self
    }

    /// Move the highlight to the label at `index` in the original list.
    pub fn highlight(mut self, index: usize) -> Self {
        if let Some(pos) = self.visible.iter().position(|&i| i == index) {
            self.state.select(Some(pos));
        }
        self
    }

    /// Index (in the original list) of the highlighted label.
    pub fn highlighted(&self) -> Option<usize> {
        self.state.selected().and_then(|pos| self.visible.get(pos).copied())
    }

    pub fn visible(&self) -> &[usize] {
        &self.visible
    }

    fn refilter(&mut self) {
        let previous = self.highlighted();
        self.visible = fuzzy::filter(&self.labels, self.filter.value(), self.pin_first);

        // While a query is typed the pinned label never keeps the highlight
        // over a real hit.
        let pinned_only = self.pin_first && !self.filter.value().trim().is_empty();
        let best = if pinned_only && self.visible.len() > 1 { 1 } else { 0 };
        let pos = previous
            .filter(|&idx| !(pinned_only && idx == 0))
            .and_then(|idx| self.visible.iter().position(|&i| i == idx))
            .or(if self.visible.is_empty() { None } else { Some(best) });
        self.state.select(pos);
    }

    fn move_by(&mut self, delta: isize) {
        if self.visible.is_empty() {
            return;
        }
        let last = self.visible.len() - 1;
        let current = self.state.selected().unwrap_or(0);
        let next = if delta.is_negative() {
            current.saturating_sub(delta.unsigned_abs())
        } else {
            current.saturating_add(delta as usize).min(last)
        };
        self.state.select(Some(next));
    }

    fn current_preview(&mut self) -> Option<String> {
        let idx = self.highlighted()?;
        if let Some((cached, content)) = &self.preview_cache {
            if *cached == idx {
                return content.clone();
            }
        }
        let source = self.preview.as_mut()?;
        let content = source(idx);
        self.preview_cache = Some((idx, content.clone()));
        content
    }
}

impl Dialog for ChoiceDialog<'_> {
    type Output = usize;

    fn handle_key(&mut self, key: KeyEvent) -> DialogResult<usize> {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        match key.code {
            KeyCode::Esc => DialogResult::Cancel,
            KeyCode::Char('c') if ctrl => DialogResult::Cancel,
            KeyCode::Enter => match self.highlighted() {
                Some(idx) => DialogResult::Submit(idx),
                None => DialogResult::Continue,
            },
            KeyCode::Up => {
                self.move_by(-1);
                DialogResult::Continue
            }
            KeyCode::Char('p') if ctrl => {
                self.move_by(-1);
                DialogResult::Continue
            }
            KeyCode::Down => {
                self.move_by(1);
                DialogResult::Continue
            }
            KeyCode::Char('n') if ctrl => {
                self.move_by(1);
                DialogResult::Continue
            }
            KeyCode::PageUp => {
                self.move_by(-(PAGE as isize));
                DialogResult::Continue
            }
            KeyCode::PageDown => {
                self.move_by(PAGE as isize);
                DialogResult::Continue
            }
            KeyCode::Home => {
                self.move_by(isize::MIN);
                DialogResult::Continue
            }
            KeyCode::End => {
                self.move_by(isize::MAX);
                DialogResult::Continue
            }
            _ => {
                if self.filter.handle_event(&Event::Key(key)).is_some() {
                    self.refilter();
                }
                DialogResult::Continue
            }
        }
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, theme: &Theme) {
        frame.render_widget(Clear, area);

        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Min(3),
                Constraint::Length(1),
            ])
            .split(area);

        let filter_block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme.accent))
            .title(format!(" {} ", self.title))
            .title_style(Style::default().fg(theme.title).bold());
        let filter_inner = filter_block.inner(rows[0]);
        let prompt = "> ";
        let width = filter_inner.width.saturating_sub(prompt.len() as u16 + 1) as usize;
        let scroll = self.filter.visual_scroll(width);
        let filter_line = Line::from(vec![
            Span::styled(prompt, Style::default().fg(theme.accent)),
            Span::raw(self.filter.value().chars().skip(scroll).collect::<String>()),
        ]);
        frame.render_widget(Paragraph::new(filter_line).block(filter_block), rows[0]);
        let cursor = self.filter.visual_cursor().saturating_sub(scroll) as u16;
        frame.set_cursor_position((
            filter_inner.x + prompt.len() as u16 + cursor,
            filter_inner.y,
        ));

        let body = if self.preview.is_some() {
            Layout::default()
                .direction(Direction::Horizontal)
                .constraints([Constraint::Percentage(45), Constraint::Percentage(55)])
                .split(rows[1])
        } else {
            Layout::default()
                .direction(Direction::Horizontal)
                .constraints([Constraint::Percentage(100)])
                .split(rows[1])
        };

        let items: Vec<ListItem> = self
            .visible
            .iter()
            .map(|&idx| {
                let label = &self.labels[idx];
                if self.pin_first && idx == 0 {
                    return ListItem::new(Line::from(vec![
                        Span::raw("  "),
                        Span::styled(label.clone(), Style::default().fg(theme.accent).bold()),
                    ]));
                }
                let (mark, style) = if self.marked.contains(&idx) {
                    ("✓ ", Style::default().fg(theme.marked))
                } else {
                    ("  ", Style::default().fg(theme.text))
                };
                ListItem::new(Line::from(vec![
                    Span::styled(mark, Style::default().fg(theme.marked)),
                    Span::styled(label.clone(), style),
                ]))
            })
            .collect();

        let counter = format!(" {}/{} ", self.visible.len(), self.labels.len());
        let list = List::new(items)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(theme.dimmed))
                    .title(counter),
            )
            .highlight_style(Style::default().add_modifier(Modifier::REVERSED))
            .highlight_symbol("▶ ");
        frame.render_stateful_widget(list, body[0], &mut self.state);

        if self.preview.is_some() {
            let content = self.current_preview();
            let title = self
                .highlighted()
                .map(|idx| self.labels[idx].clone())
                .unwrap_or_default();
            Preview::new(&title, content.as_deref()).render(frame, body[1], theme);
        }

        let mut hint = vec![
            Span::styled("↑/↓", Style::default().fg(theme.hint)),
            Span::raw(" move  "),
            Span::styled("type", Style::default().fg(theme.hint)),
            Span::raw(" filter  "),
            Span::styled("Enter", Style::default().fg(theme.hint)),
            Span::raw(" choose  "),
            Span::styled("Esc", Style::default().fg(theme.hint)),
            Span::raw(" cancel"),
        ];
        if !self.marked.is_empty() {
            hint.push(Span::styled(
                format!("  {} selected", self.marked.len()),
                Style::default().fg(theme.marked),
            ));
        }
        frame.render_widget(Paragraph::new(Line::from(hint)), rows[2]);
    }
}
