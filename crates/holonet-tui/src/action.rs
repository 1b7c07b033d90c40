//! Action enum — all user-initiated intents and navigation requests.

use holonet_proto::payload::DetailPayload;
use holonet_proto::record::ResourceKind;

/// Unique identifier for a focusable component.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ComponentId {
    ResourceList,
    DetailView,
    NavBar,
    HelpOverlay,
}

/// All actions that can flow through the system.
/// Components produce Actions; the App dispatches them.
#[derive(Debug, Clone)]
pub enum Action {
    // ── Navigation shell ─────────────────────────────────────────────────────
    ShowScreen(ResourceKind),
    NextScreen,
    PrevScreen,
    /// Push the detail screen with the selected record.
    OpenDetail(DetailPayload),
    CloseDetail,
    ToggleDrawer,

    // ── Focus ────────────────────────────────────────────────────────────────
    FocusNext,
    FocusPrev,
    FocusPane(ComponentId),

    // ── Search ───────────────────────────────────────────────────────────────
    OpenFilter,
    CloseFilter,
    FilterChanged(String),

    // ── UI toggles ───────────────────────────────────────────────────────────
    ToggleHelp,
    ToggleKeys,

    // ── System ───────────────────────────────────────────────────────────────
    Quit,
}
