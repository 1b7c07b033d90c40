//! Color palette and style constants — black field, yellow titles, white text.

use ratatui::style::{Color, Modifier, Style};

// ── Color palette ─────────────────────────────────────────────────────────────

pub const C_BG: Color = Color::Rgb(0, 0, 0);
pub const C_TITLE: Color = Color::Rgb(255, 232, 31); // crawl yellow
pub const C_PRIMARY: Color = Color::Rgb(235, 235, 235);
pub const C_SECONDARY: Color = Color::Rgb(150, 150, 165);
pub const C_MUTED: Color = Color::Rgb(72, 72, 88);
pub const C_LABEL: Color = Color::Rgb(120, 170, 230);
pub const C_ERROR: Color = Color::Rgb(255, 80, 80);
pub const C_SEPARATOR: Color = Color::Rgb(40, 40, 52);
pub const C_SELECTION_BG: Color = Color::Rgb(30, 30, 18);
pub const C_PANEL_BORDER: Color = Color::Rgb(40, 40, 52);
pub const C_PANEL_BORDER_FOCUSED: Color = Color::Rgb(255, 232, 31);
pub const C_NUMBER_HINT: Color = Color::Rgb(90, 90, 115);
pub const C_FILTER_BG: Color = Color::Rgb(16, 16, 24);
pub const C_FILTER_FG: Color = Color::Rgb(255, 200, 80);
pub const C_TAB_ACTIVE_BG: Color = Color::Rgb(255, 232, 31);
pub const C_TAB_ACTIVE_FG: Color = Color::Rgb(0, 0, 0);
pub const C_TOAST_WARNING: Color = Color::Rgb(255, 184, 80);
pub const C_TOAST_ERROR: Color = Color::Rgb(255, 95, 95);
pub const C_MODE_NORMAL: Color = Color::Rgb(150, 150, 165);
pub const C_MODE_FILTER: Color = Color::Rgb(255, 200, 80);
pub const C_ONLINE: Color = Color::Rgb(80, 200, 120);

// ── Predefined styles ─────────────────────────────────────────────────────────

pub fn style_title() -> Style {
    Style::default().fg(C_TITLE).add_modifier(Modifier::BOLD)
}

pub fn style_secondary() -> Style {
    Style::default().fg(C_SECONDARY)
}

pub fn style_focused_border() -> Style {
    Style::default().fg(C_PANEL_BORDER_FOCUSED)
}

pub fn style_unfocused_border() -> Style {
    Style::default().fg(C_PANEL_BORDER)
}

pub fn style_muted() -> Style {
    Style::default().fg(C_MUTED)
}

/// Linear blend between two RGB colors; non-RGB colors snap to `to`.
pub fn blend(from: Color, to: Color, t: f32) -> Color {
    let t = t.clamp(0.0, 1.0);
    match (from, to) {
        (Color::Rgb(r1, g1, b1), Color::Rgb(r2, g2, b2)) => {
            let mix = |a: u8, b: u8| (a as f32 + (b as f32 - a as f32) * t).round() as u8;
            Color::Rgb(mix(r1, r2), mix(g1, g2), mix(b1, b2))
        }
        _ => to,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blend_endpoints() {
        assert_eq!(blend(C_MUTED, C_PRIMARY, 0.0), C_MUTED);
        assert_eq!(blend(C_MUTED, C_PRIMARY, 1.0), C_PRIMARY);
        assert_eq!(blend(Color::Reset, C_PRIMARY, 0.3), C_PRIMARY);
    }
}
