//! AppState — shared read-only data passed to all components during render/event.
//!
//! Components read this for the mounted screen and navigation, but never mutate it.
//! The App event-loop is the only thing that writes to AppState.

use holonet_proto::payload::DetailTransport;
use holonet_proto::screen::{Mount, ScreenState};

use crate::nav::NavShell;
use crate::widgets::status_bar::InputMode;

pub struct AppState {
    // ── Mounted list screen ─────────────────────────────────────────────────
    pub screen: ScreenState,
    /// Bumped on every mount; results tagged with an older value are stale.
    pub generation: u64,

    // ── Navigation ──────────────────────────────────────────────────────────
    pub nav: NavShell,
    pub transport: DetailTransport,

    // ── UI mode ─────────────────────────────────────────────────────────────
    pub input_mode: InputMode,
}

impl AppState {
    pub fn new(nav: NavShell, transport: DetailTransport) -> Self {
        let kind = nav.active_screen();
        Self {
            screen: ScreenState::new(Mount { kind, generation: 0 }),
            generation: 0,
            nav,
            transport,
            input_mode: InputMode::Normal,
        }
    }

    pub fn in_detail(&self) -> bool {
        self.nav.top_detail().is_some()
    }
}
