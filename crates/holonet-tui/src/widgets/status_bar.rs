//! Status bar — bottom line with mode, load state, and keybindings.

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use holonet_proto::config::PresentationStyle;
use holonet_proto::screen::{LoadPhase, ScreenState};

use crate::theme::{C_ERROR, C_MODE_FILTER, C_MODE_NORMAL, C_MUTED, C_ONLINE, C_SECONDARY};

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputMode {
    Normal,
    Filter,
}

impl InputMode {
    pub fn label(self) -> &'static str {
        match self {
            Self::Normal => "NORMAL",
            Self::Filter => "SEARCH",
        }
    }

    pub fn color(self) -> ratatui::style::Color {
        match self {
            Self::Normal => C_MODE_NORMAL,
            Self::Filter => C_MODE_FILTER,
        }
    }
}

/// Short load-state summary: `● 10 loaded 14:02:11`, `⋯ loading`, `⋯ checking`, `○ offline`.
pub fn load_summary(screen: &ScreenState) -> Span<'static> {
    if !screen.network_ok() {
        return Span::styled("○ offline", Style::default().fg(C_ERROR));
    }
    if screen.probe_pending() {
        return Span::styled("⋯ checking", Style::default().fg(C_MODE_FILTER));
    }
    match screen.phase() {
        LoadPhase::Idle => Span::styled("· idle", Style::default().fg(C_MUTED)),
        LoadPhase::Loading => Span::styled("⋯ loading", Style::default().fg(C_MODE_FILTER)),
        LoadPhase::Loaded { fetched_at } => Span::styled(
            format!("● {} loaded {}", screen.list().len(), fetched_at.format("%H:%M:%S")),
            Style::default().fg(C_ONLINE),
        ),
        LoadPhase::Failed { .. } => Span::styled("✗ failed", Style::default().fg(C_ERROR)),
    }
}

/// Draw the keybindings footer bar (one row).
pub fn draw_keys_bar(
    frame: &mut Frame,
    area: Rect,
    mode: InputMode,
    style: PresentationStyle,
    in_detail: bool,
    screen: &ScreenState,
) {
    let mut spans = vec![
        Span::styled(
            format!(" {} ", mode.label()),
            Style::default()
                .fg(mode.color())
                .add_modifier(Modifier::BOLD),
        ),
        load_summary(screen),
        Span::raw("  "),
    ];

    let keys = match (mode, in_detail, style) {
        (InputMode::Filter, _, _) => "type to search  ↑↓ move  Enter keep  Esc clear+close",
        (InputMode::Normal, true, _) => "↑↓/jk scroll  Esc/←/h back  1-3 screens  ? help  q quit",
        (InputMode::Normal, false, PresentationStyle::Tabs) => {
            "↑↓/jk select  Enter/→ open  / search  1-3 or [ ] tabs  K keys  ? help  q quit"
        }
        (InputMode::Normal, false, PresentationStyle::Drawer) => {
            "↑↓/jk select  Enter/→ open  / search  d drawer  Tab focus  1-3 screens  ? help  q quit"
        }
    };
    spans.push(Span::styled(keys, Style::default().fg(C_SECONDARY)));

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}
