//! NavBar component — how the list screens are reached.
//!
//! Tabs style: a one-row strip at the bottom, always visible, not focusable.
//! Drawer style: a bordered list on the left that can be toggled with `d` and
//! takes focus (j/k to move, Enter to switch).

use ratatui::crossterm::event::{
    KeyCode, KeyEvent, KeyEventKind, MouseButton, MouseEvent, MouseEventKind,
};
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use holonet_proto::config::PresentationStyle;
use holonet_proto::record::ResourceKind;

use crate::{
    action::{Action, ComponentId},
    app_state::AppState,
    component::Component,
    theme::{
        C_MUTED, C_NUMBER_HINT, C_PRIMARY, C_SECONDARY, C_SELECTION_BG, C_TAB_ACTIVE_BG,
        C_TAB_ACTIVE_FG, C_TITLE,
    },
    widgets::{pane_chrome::pane_chrome, scrollable_list::ScrollableList},
};

/// Width of the drawer pane including borders.
pub const DRAWER_WIDTH: u16 = 20;

pub struct NavBar {
    cursor: ScrollableList,
}

impl NavBar {
    pub fn new() -> Self {
        Self {
            cursor: ScrollableList::new(),
        }
    }

    fn tab_label(index: usize, kind: ResourceKind) -> String {
        format!(" {} {} ", index + 1, kind.screen_name())
    }

    /// Screen under column `x` of the tab strip.
    pub fn tab_at(screens: &[ResourceKind], area: Rect, x: u16) -> Option<ResourceKind> {
        let mut start = area.x + 1;
        for (i, &kind) in screens.iter().enumerate() {
            let width = Self::tab_label(i, kind).chars().count() as u16;
            if x >= start && x < start + width {
                return Some(kind);
            }
            start += width + 1;
        }
        None
    }

    fn draw_tabs(&self, frame: &mut Frame, area: Rect, state: &AppState) {
        let active = state.nav.active_screen();
        let mut spans = vec![Span::raw(" ")];
        for (i, &kind) in state.nav.screens().iter().enumerate() {
            let style = if kind == active {
                Style::default()
                    .fg(C_TAB_ACTIVE_FG)
                    .bg(C_TAB_ACTIVE_BG)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(C_SECONDARY)
            };
            spans.push(Span::styled(Self::tab_label(i, kind), style));
            spans.push(Span::raw(" "));
        }
        frame.render_widget(Paragraph::new(Line::from(spans)), area);
    }

    fn draw_drawer(&mut self, frame: &mut Frame, area: Rect, focused: bool, state: &AppState) {
        let block = pane_chrome("holonet", None, focused, None);
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let screens = state.nav.screens();
        let active = state.nav.active_screen();
        self.cursor.clamp(screens.len());

        let lines: Vec<Line> = screens
            .iter()
            .enumerate()
            .map(|(i, &kind)| {
                let is_active = kind == active;
                let is_cursor = focused && i == self.cursor.selected;
                let name_style = if is_active {
                    Style::default().fg(C_TITLE).add_modifier(Modifier::BOLD)
                } else {
                    Style::default().fg(C_PRIMARY)
                };
                let bg = if is_cursor {
                    Style::default().bg(C_SELECTION_BG)
                } else {
                    Style::default()
                };
                Line::from(vec![
                    Span::styled(if is_active { "▸ " } else { "  " }, Style::default().fg(C_TITLE)),
                    Span::styled(format!("{} ", i + 1), Style::default().fg(C_NUMBER_HINT)),
                    Span::styled(kind.screen_name(), name_style),
                ])
                .style(bg)
            })
            .collect();
        frame.render_widget(Paragraph::new(lines), inner);

        if inner.height as usize > screens.len() + 1 {
            let hint = Rect {
                y: inner.y + inner.height - 1,
                height: 1,
                ..inner
            };
            frame.render_widget(
                Paragraph::new(Span::styled(" d to hide", Style::default().fg(C_MUTED))),
                hint,
            );
        }
    }
}

impl Default for NavBar {
    fn default() -> Self {
        Self::new()
    }
}

impl Component for NavBar {
    fn id(&self) -> ComponentId {
        ComponentId::NavBar
    }

    fn handle_key(&mut self, key: KeyEvent, state: &AppState) -> Vec<Action> {
        if key.kind == KeyEventKind::Release {
            return vec![];
        }
        let len = state.nav.screens().len();
        match key.code {
            KeyCode::Up | KeyCode::Char('k') => self.cursor.select_up(1),
            KeyCode::Down | KeyCode::Char('j') => self.cursor.select_down(1, len),
            KeyCode::Enter | KeyCode::Right | KeyCode::Char('l') => {
                if let Some(kind) = state.nav.screen_at(self.cursor.selected) {
                    return vec![Action::ShowScreen(kind), Action::FocusPane(ComponentId::ResourceList)];
                }
            }
            KeyCode::Esc => return vec![Action::ToggleDrawer],
            _ => {}
        }
        vec![]
    }

    fn handle_mouse(&mut self, event: MouseEvent, area: Rect, state: &AppState) -> Vec<Action> {
        if event.kind != MouseEventKind::Down(MouseButton::Left) {
            return vec![];
        }
        let screens = state.nav.screens();
        let hit = match state.nav.style() {
            PresentationStyle::Tabs => Self::tab_at(screens, area, event.column),
            PresentationStyle::Drawer => {
                // +1 for the border
                let row = event.row.saturating_sub(area.y + 1) as usize;
                if self.cursor.handle_click(row, screens.len()) {
                    state.nav.screen_at(self.cursor.selected)
                } else {
                    None
                }
            }
        };
        match hit {
            Some(kind) => vec![Action::ShowScreen(kind)],
            None => vec![],
        }
    }

    fn on_action(&mut self, action: &Action, state: &AppState) {
        if let Action::ShowScreen(_) | Action::NextScreen | Action::PrevScreen = action {
            self.cursor.selected = state.nav.active_index();
        }
    }

    fn draw(&mut self, frame: &mut Frame, area: Rect, focused: bool, state: &AppState) {
        match state.nav.style() {
            PresentationStyle::Tabs => self.draw_tabs(frame, area, state),
            PresentationStyle::Drawer => self.draw_drawer(frame, area, focused, state),
        }
    }
}
