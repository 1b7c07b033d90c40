//! Per-screen load lifecycle: `Idle → Loading → {Loaded, Failed}`.
//!
//! A `ScreenState` lives exactly as long as one mount of a list screen. Every
//! mount gets a fresh generation; outcomes tagged with any other generation
//! are stale and never applied.

use chrono::{DateTime, Local};

use crate::filter;
use crate::loader::FetchError;
use crate::reachability::Reachability;
use crate::record::{Record, ResourceKind};

/// Text shown instead of the list when the network is unavailable.
pub const OFFLINE_MESSAGE: &str = "No network connection. Check your connection and try again.";

/// Identifies one mount of one list screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Mount {
    pub kind: ResourceKind,
    pub generation: u64,
}

#[derive(Debug, Clone, PartialEq)]
pub enum LoadPhase {
    Idle,
    Loading,
    Loaded { fetched_at: DateTime<Local> },
    Failed { reason: String },
}

/// What the list renderer should draw for the current state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScreenView {
    /// Fetch outstanding and nothing to show yet.
    Spinner,
    /// Connectivity check outstanding; nothing is shown until it answers.
    Checking,
    /// This many cards.
    Cards(usize),
    /// Settled with nothing matching.
    Empty,
    /// Fixed offline text, no spinner, no cards.
    Offline,
}

/// Whether an incoming outcome was applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Applied {
    Yes,
    Stale,
}

#[derive(Debug, Clone)]
pub struct ScreenState {
    mount: Mount,
    phase: LoadPhase,
    list: Vec<Record>,
    pub search_text: String,
    network_ok: bool,
    probe_pending: bool,
}

impl ScreenState {
    pub fn new(mount: Mount) -> Self {
        Self {
            mount,
            phase: LoadPhase::Idle,
            list: Vec::new(),
            search_text: String::new(),
            network_ok: true,
            probe_pending: false,
        }
    }

    pub fn mount(&self) -> Mount {
        self.mount
    }

    pub fn kind(&self) -> ResourceKind {
        self.mount.kind
    }

    pub fn phase(&self) -> &LoadPhase {
        &self.phase
    }

    pub fn list(&self) -> &[Record] {
        &self.list
    }

    pub fn loading(&self) -> bool {
        self.phase == LoadPhase::Loading
    }

    pub fn network_ok(&self) -> bool {
        self.network_ok
    }

    pub fn probe_pending(&self) -> bool {
        self.probe_pending
    }

    /// Hold back the spinner and cards until `apply_reachability` reports.
    pub fn await_probe(&mut self) {
        self.probe_pending = true;
    }

    /// `Idle → Loading`. Returns false if a fetch was already started for this mount.
    pub fn begin(&mut self) -> bool {
        if self.phase != LoadPhase::Idle {
            return false;
        }
        self.phase = LoadPhase::Loading;
        true
    }

    /// Apply a fetch outcome for `mount`.
    pub fn settle(&mut self, mount: Mount, result: Result<Vec<Record>, FetchError>) -> Applied {
        if mount != self.mount || !self.loading() {
            return Applied::Stale;
        }
        match result {
            Ok(records) => {
                self.list = records;
                self.phase = LoadPhase::Loaded {
                    fetched_at: Local::now(),
                };
            }
            Err(e) => {
                self.network_ok = false;
                self.phase = LoadPhase::Failed {
                    reason: e.to_string(),
                };
            }
        }
        Applied::Yes
    }

    /// Apply a connectivity probe result for `mount`.
    pub fn apply_reachability(&mut self, mount: Mount, reachability: &Reachability) -> Applied {
        if mount != self.mount {
            return Applied::Stale;
        }
        self.probe_pending = false;
        if !reachability.is_reachable() {
            self.network_ok = false;
        }
        Applied::Yes
    }

    /// `filter(list, search_text)`, recomputed on every call.
    pub fn visible(&self) -> Vec<Record> {
        filter::filter_records(self.mount.kind, &self.list, &self.search_text)
    }

    pub fn view(&self) -> ScreenView {
        if !self.network_ok {
            return ScreenView::Offline;
        }
        if self.probe_pending {
            return ScreenView::Checking;
        }
        let visible = filter::matching_indices(self.mount.kind, &self.list, &self.search_text).len();
        if visible > 0 {
            ScreenView::Cards(visible)
        } else if self.loading() {
            ScreenView::Spinner
        } else {
            ScreenView::Empty
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn mount(generation: u64) -> Mount {
        Mount {
            kind: ResourceKind::Planets,
            generation,
        }
    }

    fn records() -> Vec<Record> {
        vec![
            Record::from(json!({"name": "Tatooine", "climate": "arid"})),
            Record::from(json!({"name": "Alderaan", "climate": "temperate"})),
            Record::from(json!({"name": "Yavin IV", "climate": "temperate, tropical"})),
        ]
    }

    fn parse_failure() -> FetchError {
        FetchError::Parse(serde_json::from_str::<serde_json::Value>("<html>").unwrap_err())
    }

    #[test]
    fn test_success_lifecycle() {
        let mut s = ScreenState::new(mount(1));
        assert_eq!(s.phase(), &LoadPhase::Idle);
        assert!(!s.loading());

        assert!(s.begin());
        assert!(s.loading());
        assert_eq!(s.view(), ScreenView::Spinner);
        assert!(!s.begin(), "one fetch per mount");

        assert_eq!(s.settle(mount(1), Ok(records())), Applied::Yes);
        assert!(!s.loading());
        assert!(matches!(s.phase(), LoadPhase::Loaded { .. }));
        assert_eq!(s.view(), ScreenView::Cards(3));

        s.search_text = "ta".to_string();
        assert_eq!(s.view(), ScreenView::Cards(1));
        assert_eq!(s.visible().len(), 1);

        // terminal: a second outcome does nothing
        assert_eq!(s.settle(mount(1), Ok(Vec::new())), Applied::Stale);
        assert_eq!(s.list().len(), 3);
    }

    #[test]
    fn test_failure_is_terminal_and_offline() {
        let mut s = ScreenState::new(mount(1));
        s.begin();
        assert_eq!(s.settle(mount(1), Err(parse_failure())), Applied::Yes);
        assert!(!s.loading());
        assert!(!s.network_ok());
        assert_eq!(s.view(), ScreenView::Offline);
        assert!(matches!(s.phase(), LoadPhase::Failed { .. }));
        assert!(!s.begin());
    }

    #[test]
    fn test_stale_generation_is_discarded() {
        let mut s = ScreenState::new(mount(2));
        s.begin();
        assert_eq!(s.settle(mount(1), Ok(records())), Applied::Stale);
        assert!(s.loading());
        assert!(s.list().is_empty());

        let other_kind = Mount {
            kind: ResourceKind::Films,
            generation: 2,
        };
        assert_eq!(s.settle(other_kind, Ok(records())), Applied::Stale);
        assert!(s.loading());
    }

    #[test]
    fn test_settle_before_begin_is_ignored() {
        let mut s = ScreenState::new(mount(1));
        assert_eq!(s.settle(mount(1), Ok(records())), Applied::Stale);
        assert_eq!(s.phase(), &LoadPhase::Idle);
    }

    #[test]
    fn test_empty_states() {
        let mut s = ScreenState::new(mount(1));
        s.begin();
        s.settle(mount(1), Ok(Vec::new()));
        assert_eq!(s.view(), ScreenView::Empty);

        let mut s = ScreenState::new(mount(1));
        s.begin();
        s.settle(mount(1), Ok(records()));
        s.search_text = "zzz".to_string();
        assert_eq!(s.view(), ScreenView::Empty);
    }

    #[test]
    fn test_unreachable_before_fetch_completes() {
        let mut s = ScreenState::new(mount(1));
        s.begin();
        let r = Reachability::Unreachable("no route".to_string());
        assert_eq!(s.apply_reachability(mount(1), &r), Applied::Yes);
        assert_eq!(s.view(), ScreenView::Offline);
        assert!(s.loading(), "fetch still outstanding");

        // late success still settles loading but the offline view sticks
        s.settle(mount(1), Ok(records()));
        assert!(!s.loading());
        assert_eq!(s.view(), ScreenView::Offline);
    }

    #[test]
    fn test_pending_probe_holds_spinner_and_cards() {
        let mut s = ScreenState::new(mount(1));
        s.begin();
        s.await_probe();
        assert_eq!(s.view(), ScreenView::Checking);

        // the fetch wins the race; cards stay hidden until the probe answers
        s.settle(mount(1), Ok(records()));
        assert_eq!(s.view(), ScreenView::Checking);

        let r = Reachability::Unreachable("timed out".to_string());
        assert_eq!(s.apply_reachability(mount(2), &r), Applied::Stale);
        assert!(s.probe_pending());
        s.apply_reachability(mount(1), &r);
        assert!(!s.probe_pending());
        assert_eq!(s.view(), ScreenView::Offline);
    }

    #[test]
    fn test_reachable_probe_releases_the_list() {
        let mut s = ScreenState::new(mount(1));
        s.begin();
        s.await_probe();
        s.apply_reachability(mount(1), &Reachability::Reachable);
        assert_eq!(s.view(), ScreenView::Spinner);
        s.settle(mount(1), Ok(records()));
        assert_eq!(s.view(), ScreenView::Cards(3));
    }

    #[test]
    fn test_reachable_probe_changes_nothing() {
        let mut s = ScreenState::new(mount(1));
        s.begin();
        s.apply_reachability(mount(1), &Reachability::Reachable);
        assert!(s.network_ok());
        assert_eq!(s.view(), ScreenView::Spinner);
        assert_eq!(
            s.apply_reachability(mount(9), &Reachability::Unreachable(String::new())),
            Applied::Stale
        );
        assert!(s.network_ok());
    }
}
