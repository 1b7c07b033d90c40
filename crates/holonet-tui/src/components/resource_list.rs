//! ResourceList component — the card list shown by every list screen.
//!
//! One card per visible record (name/title on the first line, two summary
//! fields on the second). What is drawn follows `ScreenState::view()`:
//! spinner while loading, cards once records arrive, the offline text after
//! a failure.
//!
//! Keybindings (when focused):
//!   j/k ↑↓         — move selection
//!   Enter / → / l  — open the selected record
//!   /              — open search
//!   Esc            — clear search text (first press) / close search (second press)

use std::time::Instant;

use ratatui::crossterm::event::{
    KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
    Frame,
};

use holonet_proto::payload::DetailPayload;
use holonet_proto::record::{Record, ResourceKind};
use holonet_proto::screen::{Mount, ScreenView, OFFLINE_MESSAGE};

use crate::{
    action::{Action, ComponentId},
    app_state::AppState,
    component::Component,
    theme::{C_ERROR, C_MUTED, C_PRIMARY, C_SECONDARY, C_SELECTION_BG, C_TITLE},
    widgets::{
        enter_transition::EnterTransition,
        filter_input::{FilterAction, FilterInput},
        pane_chrome::{pane_chrome, Badge},
        scrollable_list::ScrollableList,
    },
};

/// Rows per card: title, summary, spacer.
pub const CARD_HEIGHT: u16 = 3;

const SPINNER_FRAMES: [&str; 10] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];
const DOUBLE_CLICK_MS: u128 = 400;

pub struct ResourceList {
    cursor: ScrollableList,
    filter_input: FilterInput,
    transition: EnterTransition,
    spinner_frame: usize,
    /// Mount whose records the cursor and transition belong to.
    mount: Option<Mount>,
    entered: bool,
    last_click: Option<(usize, Instant)>,
}

impl ResourceList {
    pub fn new(transition_ticks: u16) -> Self {
        Self {
            cursor: ScrollableList::new(),
            filter_input: FilterInput::new("search"),
            transition: EnterTransition::new(transition_ticks),
            spinner_frame: 0,
            mount: None,
            entered: false,
            last_click: None,
        }
    }

    /// Reset view state when the screen is remounted, and start the enter
    /// transition the first time records show up.
    fn sync(&mut self, state: &AppState) {
        let mount = state.screen.mount();
        if self.mount != Some(mount) {
            self.mount = Some(mount);
            self.cursor.reset();
            self.filter_input = FilterInput::new(format!(
                "search {}",
                mount.kind.screen_name().to_lowercase()
            ));
            self.transition.reset();
            self.entered = false;
            self.last_click = None;
        }
        if !self.entered && !state.screen.list().is_empty() {
            self.entered = true;
            self.transition.start();
        }
    }

    fn selected_record(&self, state: &AppState) -> Option<Record> {
        state.screen.visible().into_iter().nth(self.cursor.selected)
    }

    /// Only cards on screen can be opened; nothing opens while offline or checking.
    fn open_selected(&self, state: &AppState) -> Vec<Action> {
        if !matches!(state.screen.view(), ScreenView::Cards(_)) {
            return vec![];
        }
        match self.selected_record(state) {
            Some(record) => vec![Action::OpenDetail(DetailPayload::new(
                state.screen.kind(),
                record,
            ))],
            None => vec![],
        }
    }

    fn draw_card(&self, kind: ResourceKind, record: &Record, selected: bool) -> Vec<Line<'static>> {
        let indent = " ".repeat(1 + self.transition.indent());
        let marker = if selected { "▌" } else { " " };
        let title_fg = if selected { C_TITLE } else { C_PRIMARY };
        let title_style = if selected {
            Style::default()
                .fg(self.transition.fg(title_fg))
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(self.transition.fg(title_fg))
        };
        let bg = if selected {
            Style::default().bg(C_SELECTION_BG)
        } else {
            Style::default()
        };

        let summary: Vec<String> = kind
            .subtitle_fields()
            .iter()
            .map(|f| record.text(f))
            .filter(|s| !s.is_empty())
            .collect();

        vec![
            Line::from(vec![
                Span::styled(marker, Style::default().fg(C_TITLE)),
                Span::raw(indent.clone()),
                Span::styled(record.display(kind), title_style),
            ])
            .style(bg),
            Line::from(vec![
                Span::styled(marker, Style::default().fg(C_TITLE)),
                Span::raw(indent),
                Span::styled(
                    summary.join(" · "),
                    Style::default().fg(self.transition.fg(C_SECONDARY)),
                ),
            ])
            .style(bg),
            Line::from(""),
        ]
    }

    fn draw_message(frame: &mut Frame, area: Rect, line: Line<'static>) {
        frame.render_widget(
            Paragraph::new(vec![Line::from(""), line]).wrap(Wrap { trim: false }),
            area,
        );
    }
}

fn visible_cards(height: u16) -> usize {
    (height / CARD_HEIGHT).max(1) as usize
}

/// Rows between the borders that hold cards; the last inner row is the search bar.
fn list_height(area: Rect) -> u16 {
    area.height.saturating_sub(3)
}

/// Card slot under `row`, or None for the border, the search bar and the
/// leftover rows below the last whole card.
fn card_at(area: Rect, row: u16) -> Option<usize> {
    if row <= area.y {
        return None;
    }
    let rel_row = row - area.y - 1;
    let height = list_height(area);
    let card_rows = (visible_cards(height) as u16 * CARD_HEIGHT).min(height);
    if rel_row >= card_rows {
        return None;
    }
    Some((rel_row / CARD_HEIGHT) as usize)
}

impl Component for ResourceList {
    fn id(&self) -> ComponentId {
        ComponentId::ResourceList
    }

    fn handle_key(&mut self, key: KeyEvent, state: &AppState) -> Vec<Action> {
        if key.kind == KeyEventKind::Release {
            return vec![];
        }
        self.sync(state);
        let len = state.screen.visible().len();

        if self.filter_input.is_active() {
            match key.code {
                KeyCode::Up => {
                    self.cursor.select_up(1);
                    return vec![];
                }
                KeyCode::Down => {
                    self.cursor.select_down(1, len);
                    return vec![];
                }
                _ => {}
            }
            return match self.filter_input.handle_key(key) {
                FilterAction::Changed(q) => {
                    self.cursor.reset();
                    vec![Action::FilterChanged(q)]
                }
                FilterAction::Confirmed => vec![Action::CloseFilter],
                FilterAction::Cancelled => vec![Action::CloseFilter],
            };
        }

        let step = if key.modifiers.contains(KeyModifiers::SHIFT) {
            5
        } else {
            1
        };
        match key.code {
            KeyCode::Up | KeyCode::Char('k') => self.cursor.select_up(step),
            KeyCode::Down | KeyCode::Char('j') => self.cursor.select_down(step, len),
            KeyCode::PageUp => self.cursor.select_up(10),
            KeyCode::PageDown => self.cursor.select_down(10, len),
            KeyCode::Home | KeyCode::Char('g') => self.cursor.select_first(),
            KeyCode::End | KeyCode::Char('G') => self.cursor.select_last(len),
            KeyCode::Enter | KeyCode::Right | KeyCode::Char('l') => {
                return self.open_selected(state);
            }
            KeyCode::Char('/') => {
                self.filter_input.activate();
                return vec![Action::OpenFilter];
            }
            KeyCode::Esc if !self.filter_input.text().is_empty() => {
                self.filter_input.clear();
                self.cursor.reset();
                return vec![Action::FilterChanged(String::new())];
            }
            _ => {}
        }
        vec![]
    }

    fn handle_mouse(&mut self, event: MouseEvent, area: Rect, state: &AppState) -> Vec<Action> {
        self.sync(state);
        let len = state.screen.visible().len();
        match event.kind {
            MouseEventKind::ScrollUp => self.cursor.select_up(1),
            MouseEventKind::ScrollDown => self.cursor.select_down(1, len),
            MouseEventKind::Down(MouseButton::Left) => {
                let Some(card) = card_at(area, event.row) else {
                    self.last_click = None;
                    return vec![];
                };
                let now = Instant::now();
                let is_double = self
                    .last_click
                    .map(|(c, t)| c == card && t.elapsed().as_millis() < DOUBLE_CLICK_MS)
                    .unwrap_or(false);
                if self.cursor.handle_click(card, len) && is_double {
                    self.last_click = None;
                    return self.open_selected(state);
                }
                self.last_click = Some((card, now));
            }
            _ => {}
        }
        vec![]
    }

    fn tick(&mut self, state: &AppState) -> bool {
        self.sync(state);
        let mut redraw = self.transition.tick();
        if state.screen.view() == ScreenView::Spinner {
            self.spinner_frame = (self.spinner_frame + 1) % SPINNER_FRAMES.len();
            redraw = true;
        }
        redraw
    }

    fn on_action(&mut self, action: &Action, _state: &AppState) {
        if let Action::CloseFilter = action {
            self.filter_input.deactivate();
        }
    }

    fn draw(&mut self, frame: &mut Frame, area: Rect, focused: bool, state: &AppState) {
        self.sync(state);
        let screen = &state.screen;
        let kind = screen.kind();
        let view = screen.view();

        let badge = match view {
            ScreenView::Offline => Some(Badge {
                text: "offline".into(),
                color: C_ERROR,
            }),
            ScreenView::Cards(n) if !screen.search_text.is_empty() => Some(Badge {
                text: format!("{}/{}", n, screen.list().len()),
                color: C_SECONDARY,
            }),
            ScreenView::Cards(n) => Some(Badge {
                text: n.to_string(),
                color: C_MUTED,
            }),
            _ => None,
        };
        let key = char::from_digit(kind.index() as u32 + 1, 10);
        let block = pane_chrome(kind.screen_name(), key, focused, badge);
        let inner = block.inner(area);
        frame.render_widget(block, area);
        if inner.height == 0 {
            return;
        }

        // Bottom row is the search bar; it stays put even while offline.
        let list_area = Rect {
            height: inner.height.saturating_sub(1),
            ..inner
        };
        let search_area = Rect {
            y: inner.y + inner.height.saturating_sub(1),
            height: 1,
            ..inner
        };

        match view {
            ScreenView::Offline => {
                Self::draw_message(
                    frame,
                    list_area,
                    Line::from(Span::styled(
                        format!("  {OFFLINE_MESSAGE}"),
                        Style::default().fg(C_ERROR),
                    )),
                );
            }
            ScreenView::Checking => {
                Self::draw_message(
                    frame,
                    list_area,
                    Line::from(Span::styled(
                        "  checking connection…",
                        Style::default().fg(C_MUTED),
                    )),
                );
            }
            ScreenView::Spinner => {
                Self::draw_message(
                    frame,
                    list_area,
                    Line::from(vec![
                        Span::styled(
                            format!("  {} ", SPINNER_FRAMES[self.spinner_frame]),
                            Style::default().fg(C_TITLE),
                        ),
                        Span::styled(
                            format!("loading {}…", kind.screen_name().to_lowercase()),
                            Style::default().fg(C_MUTED),
                        ),
                    ]),
                );
            }
            ScreenView::Empty => {
                let msg = if screen.search_text.is_empty() {
                    format!("  no {} found", kind.screen_name().to_lowercase())
                } else {
                    format!("  nothing matches \"{}\"", screen.search_text)
                };
                Self::draw_message(
                    frame,
                    list_area,
                    Line::from(Span::styled(msg, Style::default().fg(C_MUTED))),
                );
            }
            ScreenView::Cards(_) => {
                let visible = screen.visible();
                let per_page = visible_cards(list_area.height);
                self.cursor.clamp(visible.len());
                self.cursor.ensure_visible(per_page);
                let range = self.cursor.visible_range(visible.len(), per_page);
                let lines: Vec<Line> = range
                    .map(|i| (i, &visible[i]))
                    .flat_map(|(i, record)| self.draw_card(kind, record, i == self.cursor.selected))
                    .collect();
                frame.render_widget(Paragraph::new(lines), list_area);
            }
        }

        self.filter_input.draw(frame, search_area);
    }
}
