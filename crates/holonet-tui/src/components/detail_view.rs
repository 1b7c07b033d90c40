//! DetailView component — labeled fields of one record, pushed on top of a list.
//!
//! Renders only what the payload carries; nothing is fetched. Curated fields
//! come first in a fixed order (missing ones stay blank), then every other
//! field under "other fields".

use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyEventKind, MouseEvent, MouseEventKind};
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
    Frame,
};

use holonet_proto::payload::DetailPayload;
use holonet_proto::record::humanize_key;

use crate::{
    action::{Action, ComponentId},
    app_state::AppState,
    component::Component,
    theme::{C_LABEL, C_MUTED, C_PRIMARY, C_SEPARATOR, C_TITLE},
    widgets::pane_chrome::pane_chrome,
};

const LABEL_WIDTH: usize = 18;

pub struct DetailView {
    scroll: u16,
    /// Line count from the last draw, for clamping the scroll.
    content_height: u16,
    viewport_height: u16,
}

impl DetailView {
    pub fn new() -> Self {
        Self {
            scroll: 0,
            content_height: 0,
            viewport_height: 0,
        }
    }

    fn max_scroll(&self) -> u16 {
        self.content_height.saturating_sub(self.viewport_height)
    }

    fn scroll_by(&mut self, delta: i32) {
        let next = (self.scroll as i32 + delta).clamp(0, self.max_scroll() as i32);
        self.scroll = next as u16;
    }
}

impl Default for DetailView {
    fn default() -> Self {
        Self::new()
    }
}

/// Build the body lines for `payload`.
pub fn detail_lines(payload: &DetailPayload) -> Vec<Line<'static>> {
    let kind = payload.kind;
    let record = &payload.record;
    let mut lines = vec![
        Line::from(Span::styled(
            payload.title(),
            Style::default().fg(C_TITLE).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            kind.screen_name().to_lowercase(),
            Style::default().fg(C_MUTED),
        )),
        Line::from(""),
    ];

    for field in kind.detail_fields() {
        lines.push(labeled(field.label, record.text(field.key)));
    }

    let extras = record.extra_fields(kind);
    if !extras.is_empty() {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            "── other fields ──",
            Style::default().fg(C_SEPARATOR),
        )));
        for (key, value) in extras {
            lines.push(labeled(&humanize_key(key), value));
        }
    }
    lines
}

fn labeled(label: &str, value: String) -> Line<'static> {
    Line::from(vec![
        Span::styled(
            format!("{:<width$}", label, width = LABEL_WIDTH),
            Style::default().fg(C_LABEL),
        ),
        Span::styled(value, Style::default().fg(C_PRIMARY)),
    ])
}

/// Rows `lines` take once wrapped to `width` columns.
fn wrapped_height(lines: &[Line], width: u16) -> u16 {
    let width = width.max(1) as usize;
    lines
        .iter()
        .map(|l| l.width().max(1).div_ceil(width))
        .sum::<usize>()
        .min(u16::MAX as usize) as u16
}

impl Component for DetailView {
    fn id(&self) -> ComponentId {
        ComponentId::DetailView
    }

    fn handle_key(&mut self, key: KeyEvent, _state: &AppState) -> Vec<Action> {
        if key.kind == KeyEventKind::Release {
            return vec![];
        }
        match key.code {
            KeyCode::Esc | KeyCode::Backspace | KeyCode::Left | KeyCode::Char('h') => {
                return vec![Action::CloseDetail];
            }
            KeyCode::Down | KeyCode::Char('j') => self.scroll_by(1),
            KeyCode::Up | KeyCode::Char('k') => self.scroll_by(-1),
            KeyCode::PageDown => self.scroll_by(10),
            KeyCode::PageUp => self.scroll_by(-10),
            KeyCode::Home | KeyCode::Char('g') => self.scroll = 0,
            KeyCode::End | KeyCode::Char('G') => self.scroll = self.max_scroll(),
            _ => {}
        }
        vec![]
    }

    fn handle_mouse(&mut self, event: MouseEvent, _area: Rect, _state: &AppState) -> Vec<Action> {
        match event.kind {
            MouseEventKind::ScrollDown => self.scroll_by(1),
            MouseEventKind::ScrollUp => self.scroll_by(-1),
            _ => {}
        }
        vec![]
    }

    fn on_action(&mut self, action: &Action, _state: &AppState) {
        if let Action::OpenDetail(_) | Action::CloseDetail = action {
            self.scroll = 0;
        }
    }

    fn draw(&mut self, frame: &mut Frame, area: Rect, focused: bool, state: &AppState) {
        let Some(payload) = state.nav.top_detail() else {
            return;
        };
        let block = pane_chrome(payload.kind.screen_name(), None, focused, None);
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let lines = detail_lines(payload);
        self.content_height = wrapped_height(&lines, inner.width);
        let paragraph = Paragraph::new(lines).wrap(Wrap { trim: false });
        self.viewport_height = inner.height;
        self.scroll = self.scroll.min(self.max_scroll());
        frame.render_widget(paragraph.scroll((self.scroll, 0)), inner);
    }
}
