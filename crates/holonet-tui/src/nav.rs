//! NavShell — screen registry, active screen, and the detail stack.
//!
//! Tracks:
//! - The list screens registered by name, in tab/drawer order
//! - Which list screen is active
//! - The stack of pushed detail payloads (always push/pop, in both styles)
//! - Drawer visibility and the FocusRing for whatever is on screen
//!
//! Only the App mutates the shell; components ask for changes with Actions.

use holonet_proto::config::PresentationStyle;
use holonet_proto::payload::DetailPayload;
use holonet_proto::record::ResourceKind;

use crate::action::ComponentId;
use crate::focus::FocusRing;

/// What is on top of the navigation stack.
#[derive(Debug, Clone, PartialEq)]
pub enum Route<'a> {
    List(ResourceKind),
    Detail(&'a DetailPayload),
}

pub struct NavShell {
    style: PresentationStyle,
    screens: Vec<ResourceKind>,
    active: usize,
    stack: Vec<DetailPayload>,
    pub drawer_open: bool,
    pub show_help: bool,
    pub show_keys_bar: bool,
    focus: FocusRing,
}

impl NavShell {
    pub fn new(style: PresentationStyle) -> Self {
        let mut shell = Self {
            style,
            screens: Vec::new(),
            active: 0,
            stack: Vec::new(),
            drawer_open: style == PresentationStyle::Drawer,
            show_help: false,
            show_keys_bar: true,
            focus: FocusRing::default(),
        };
        shell.rebuild_focus_ring(None);
        shell
    }

    /// Shell with the three list screens registered.
    pub fn with_default_screens(style: PresentationStyle) -> Self {
        let mut shell = Self::new(style);
        for kind in ResourceKind::ALL {
            shell.register(kind);
        }
        shell
    }

    pub fn style(&self) -> PresentationStyle {
        self.style
    }

    pub fn register(&mut self, kind: ResourceKind) {
        if !self.screens.contains(&kind) {
            self.screens.push(kind);
        }
    }

    pub fn screens(&self) -> &[ResourceKind] {
        &self.screens
    }

    /// Look up a registered screen by its name.
    pub fn screen_by_name(&self, name: &str) -> Option<ResourceKind> {
        ResourceKind::from_name(name).filter(|k| self.screens.contains(k))
    }

    pub fn screen_at(&self, index: usize) -> Option<ResourceKind> {
        self.screens.get(index).copied()
    }

    pub fn active_screen(&self) -> ResourceKind {
        self.screens
            .get(self.active)
            .copied()
            .unwrap_or(ResourceKind::Planets)
    }

    pub fn active_index(&self) -> usize {
        self.active
    }

    /// Make `kind` the active list screen and clear the detail stack.
    /// Returns false if it is not registered.
    pub fn show(&mut self, kind: ResourceKind) -> bool {
        let Some(pos) = self.screens.iter().position(|&k| k == kind) else {
            return false;
        };
        self.active = pos;
        self.stack.clear();
        self.rebuild_focus_ring(Some(ComponentId::ResourceList));
        true
    }

    pub fn next_screen(&self) -> ResourceKind {
        let n = self.screens.len().max(1);
        self.screen_at((self.active + 1) % n).unwrap_or_else(|| self.active_screen())
    }

    pub fn prev_screen(&self) -> ResourceKind {
        let n = self.screens.len().max(1);
        self.screen_at((self.active + n - 1) % n)
            .unwrap_or_else(|| self.active_screen())
    }

    pub fn push_detail(&mut self, payload: DetailPayload) {
        self.stack.push(payload);
        self.rebuild_focus_ring(Some(ComponentId::DetailView));
    }

    pub fn pop_detail(&mut self) -> Option<DetailPayload> {
        let popped = self.stack.pop();
        self.rebuild_focus_ring(Some(ComponentId::ResourceList));
        popped
    }

    pub fn top_detail(&self) -> Option<&DetailPayload> {
        self.stack.last()
    }

    pub fn route(&self) -> Route<'_> {
        match self.stack.last() {
            Some(p) => Route::Detail(p),
            None => Route::List(self.active_screen()),
        }
    }

    /// `Planets › Tatooine` style breadcrumb.
    pub fn breadcrumb(&self) -> String {
        let mut parts = vec![self.active_screen().screen_name().to_string()];
        parts.extend(self.stack.iter().map(|p| p.title()));
        parts.join(" › ")
    }

    /// Drawer style only; tabs are always visible.
    pub fn toggle_drawer(&mut self) {
        if self.style == PresentationStyle::Drawer {
            self.drawer_open = !self.drawer_open;
            let prefer = self.drawer_open.then_some(ComponentId::NavBar);
            self.rebuild_focus_ring(prefer);
        }
    }

    pub fn drawer_visible(&self) -> bool {
        self.style == PresentationStyle::Drawer && self.drawer_open
    }

    fn rebuild_focus_ring(&mut self, prefer: Option<ComponentId>) {
        let main = if self.stack.is_empty() {
            ComponentId::ResourceList
        } else {
            ComponentId::DetailView
        };
        let items = if self.drawer_visible() {
            vec![ComponentId::NavBar, main]
        } else {
            vec![main]
        };
        self.focus.set_items(items, prefer.or(Some(main)));
    }

    pub fn focused(&self) -> Option<ComponentId> {
        self.focus.current()
    }

    pub fn focus_next(&mut self) -> Option<ComponentId> {
        self.focus.next()
    }

    pub fn focus_prev(&mut self) -> Option<ComponentId> {
        self.focus.prev()
    }

    pub fn focus_set(&mut self, id: ComponentId) {
        self.focus.set(id);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use holonet_proto::record::Record;
    use serde_json::json;

    fn payload(name: &str) -> DetailPayload {
        DetailPayload::new(ResourceKind::Planets, Record::from(json!({ "name": name })))
    }

    #[test]
    fn test_screens_registered_by_name() {
        let nav = NavShell::with_default_screens(PresentationStyle::Tabs);
        assert_eq!(nav.screens().len(), 3);
        assert_eq!(nav.screen_by_name("Spaceships"), Some(ResourceKind::Starships));
        assert_eq!(nav.screen_by_name("films"), Some(ResourceKind::Films));
        assert_eq!(nav.screen_by_name("people"), None);

        let mut partial = NavShell::new(PresentationStyle::Tabs);
        partial.register(ResourceKind::Films);
        partial.register(ResourceKind::Films);
        assert_eq!(partial.screens(), &[ResourceKind::Films]);
        assert_eq!(partial.screen_by_name("planets"), None);
        assert!(!partial.show(ResourceKind::Planets));
    }

    #[test]
    fn test_detail_is_stacked_in_both_styles() {
        for style in [PresentationStyle::Tabs, PresentationStyle::Drawer] {
            let mut nav = NavShell::with_default_screens(style);
            nav.push_detail(payload("Tatooine"));
            assert_eq!(nav.focused(), Some(ComponentId::DetailView));
            assert!(matches!(nav.route(), Route::Detail(p) if p.title() == "Tatooine"));
            assert_eq!(nav.breadcrumb(), "Planets › Tatooine");
            assert!(nav.pop_detail().is_some());
            assert_eq!(nav.route(), Route::List(ResourceKind::Planets));
            assert_eq!(nav.focused(), Some(ComponentId::ResourceList));
        }
    }

    #[test]
    fn test_switching_screen_clears_stack() {
        let mut nav = NavShell::with_default_screens(PresentationStyle::Tabs);
        nav.push_detail(payload("Hoth"));
        assert!(nav.show(ResourceKind::Films));
        assert!(nav.top_detail().is_none());
        assert_eq!(nav.active_screen(), ResourceKind::Films);
        assert_eq!(nav.next_screen(), ResourceKind::Starships);
        assert_eq!(nav.prev_screen(), ResourceKind::Planets);
        nav.show(ResourceKind::Starships);
        assert_eq!(nav.next_screen(), ResourceKind::Planets);
    }

    #[test]
    fn test_drawer_only_in_drawer_style() {
        let mut tabs = NavShell::with_default_screens(PresentationStyle::Tabs);
        assert!(!tabs.drawer_visible());
        tabs.toggle_drawer();
        assert!(!tabs.drawer_visible());
        assert_eq!(tabs.focus_next(), Some(ComponentId::ResourceList));

        let mut drawer = NavShell::with_default_screens(PresentationStyle::Drawer);
        assert!(drawer.drawer_visible());
        assert_eq!(drawer.focused(), Some(ComponentId::ResourceList));
        assert_eq!(drawer.focus_next(), Some(ComponentId::NavBar));
        drawer.toggle_drawer();
        assert!(!drawer.drawer_visible());
        assert_eq!(drawer.focused(), Some(ComponentId::ResourceList));
    }
}
