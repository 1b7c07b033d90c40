//! EnterTransition — one fade/slide-in shared by every card in a list.
//!
//! Started once when records first arrive and advanced on the UI tick. All
//! cards read the same progress; nothing is tracked per item.

use ratatui::style::Color;

use crate::theme::{blend, C_MUTED};

const SLIDE_COLUMNS: f32 = 4.0;

#[derive(Debug, Clone)]
pub struct EnterTransition {
    duration_ticks: u16,
    elapsed_ticks: u16,
    running: bool,
}

impl EnterTransition {
    pub fn new(duration_ticks: u16) -> Self {
        Self {
            duration_ticks,
            elapsed_ticks: 0,
            running: false,
        }
    }

    /// Start from zero. A zero duration finishes immediately.
    pub fn start(&mut self) {
        self.elapsed_ticks = 0;
        self.running = self.duration_ticks > 0;
    }

    pub fn reset(&mut self) {
        self.elapsed_ticks = 0;
        self.running = false;
    }

    /// Advance one tick. Returns true while the transition still needs redraws.
    pub fn tick(&mut self) -> bool {
        if !self.running {
            return false;
        }
        self.elapsed_ticks = self.elapsed_ticks.saturating_add(1);
        if self.elapsed_ticks >= self.duration_ticks {
            self.running = false;
        }
        true
    }

    pub fn progress(&self) -> f32 {
        if !self.running || self.duration_ticks == 0 {
            return 1.0;
        }
        (self.elapsed_ticks as f32 / self.duration_ticks as f32).min(1.0)
    }

    /// Foreground for a card whose settled color is `target`.
    pub fn fg(&self, target: Color) -> Color {
        blend(C_MUTED, target, self.progress())
    }

    /// Leading columns the cards are pushed right by.
    pub fn indent(&self) -> usize {
        ((1.0 - self.progress()) * SLIDE_COLUMNS).round() as usize
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::C_PRIMARY;

    #[test]
    fn test_runs_for_duration() {
        let mut t = EnterTransition::new(4);
        assert_eq!(t.progress(), 1.0);
        t.start();
        assert_eq!(t.progress(), 0.0);
        assert_eq!(t.indent(), 4);
        assert_eq!(t.fg(C_PRIMARY), C_MUTED);
        for _ in 0..4 {
            assert!(t.tick());
        }
        assert!(!t.tick());
        assert_eq!(t.indent(), 0);
        assert_eq!(t.fg(C_PRIMARY), C_PRIMARY);
    }

    #[test]
    fn test_zero_duration_is_instant() {
        let mut t = EnterTransition::new(0);
        t.start();
        assert!(!t.tick());
        assert_eq!(t.progress(), 1.0);
    }
}
