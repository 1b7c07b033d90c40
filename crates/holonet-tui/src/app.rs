//! App — the event loop and the only writer of `AppState`.
//!
//! Owns the components, the loader channel and the navigation shell. Each
//! list screen mount gets a fresh generation; loader results tagged with an
//! older generation are logged and dropped.

use std::io;
use std::time::Duration;

use ratatui::crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
        KeyModifiers, MouseEvent, MouseEventKind,
    },
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Paragraph},
    Frame, Terminal,
};
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

use holonet_proto::config::{Config, NetworkConfig, PresentationStyle};
use holonet_proto::loader::{spawn_fetch, spawn_probe, LoaderEvent, SwapiClient};
use holonet_proto::record::ResourceKind;
use holonet_proto::screen::{Applied, Mount, ScreenState};

use crate::{
    action::{Action, ComponentId},
    app_state::AppState,
    component::Component,
    components::{
        detail_view::DetailView,
        help_overlay::HelpOverlay,
        nav_bar::{NavBar, DRAWER_WIDTH},
        resource_list::ResourceList,
    },
    nav::{NavShell, Route},
    theme::{style_muted, style_secondary, style_title, C_BG},
    widgets::{
        status_bar::{self, InputMode},
        toast::ToastManager,
    },
};

/// Last-drawn layout rects — used for mouse hit-testing.
#[derive(Default, Clone)]
struct PaneAreas {
    nav: Rect,
    main: Rect,
}

pub struct App {
    // ── Shared state (passed read-only to components) ─────────────────────────
    pub state: AppState,

    // ── Components ────────────────────────────────────────────────────────────
    resource_list: ResourceList,
    detail_view: DetailView,
    nav_bar: NavBar,
    help_overlay: HelpOverlay,

    // ── Loading ───────────────────────────────────────────────────────────────
    client: SwapiClient,
    network: NetworkConfig,
    loader_tx: mpsc::Sender<LoaderEvent>,
    loader_rx: Option<mpsc::Receiver<LoaderEvent>>,
    /// Tasks started for the current mount; aborted on remount.
    inflight: Vec<JoinHandle<()>>,

    toast: ToastManager,
    pane_areas: PaneAreas,
    should_quit: bool,
}

impl App {
    /// `style` is resolved once by the caller and never changes afterwards.
    pub fn new(config: &Config, style: PresentationStyle) -> anyhow::Result<Self> {
        let client = SwapiClient::new(&config.api)?;
        let mut nav = NavShell::with_default_screens(style);
        nav.show_keys_bar = config.ui.show_keys_bar;
        let (loader_tx, loader_rx) = mpsc::channel::<LoaderEvent>(64);

        Ok(Self {
            state: AppState::new(nav, config.ui.detail_transport),
            resource_list: ResourceList::new(config.ui.enter_transition_ticks),
            detail_view: DetailView::new(),
            nav_bar: NavBar::new(),
            help_overlay: HelpOverlay::new(),
            client,
            network: config.network.clone(),
            loader_tx,
            loader_rx: Some(loader_rx),
            inflight: Vec::new(),
            toast: ToastManager::new(),
            pane_areas: PaneAreas::default(),
            should_quit: false,
        })
    }

    /// Mount the initial screen. Needs a tokio runtime.
    pub fn start(&mut self) {
        let kind = self.state.nav.active_screen();
        self.mount_screen(kind);
    }

    // ── Main run loop ─────────────────────────────────────────────────────────

    pub async fn run(mut self) -> anyhow::Result<()> {
        debug!("run(): enabling raw mode");
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend)?;
        debug!("run(): terminal created, size={:?}", terminal.size());

        let result = self.event_loop(&mut terminal).await;

        // ── Teardown ──────────────────────────────────────────────────────────
        disable_raw_mode()?;
        execute!(
            terminal.backend_mut(),
            LeaveAlternateScreen,
            DisableMouseCapture
        )?;
        terminal.show_cursor()?;
        info!("holonet exiting");
        result
    }

    async fn event_loop(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    ) -> anyhow::Result<()> {
        let mut loader_rx = self
            .loader_rx
            .take()
            .ok_or_else(|| anyhow::anyhow!("event loop already running"))?;

        // ── Background task: keyboard/mouse events ────────────────────────────
        let (event_tx, mut event_rx) = mpsc::channel::<Event>(256);
        tokio::task::spawn_blocking(move || loop {
            match event::read() {
                Ok(ev) => {
                    if event_tx.blocking_send(ev).is_err() {
                        break;
                    }
                }
                Err(_) => break,
            }
        });

        // Component maintenance tick: spinner, enter transition, toast expiry.
        let mut ui_tick = tokio::time::interval(Duration::from_millis(100));
        ui_tick.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Skip);

        self.start();

        let mut needs_redraw = true;
        loop {
            if needs_redraw {
                terminal.draw(|f| self.draw(f))?;
            }
            needs_redraw = false;

            if self.should_quit {
                break;
            }

            tokio::select! {
                Some(ev) = event_rx.recv() => {
                    needs_redraw = self.handle_event(ev);
                }

                Some(ev) = loader_rx.recv() => {
                    self.handle_loader_event(ev);
                    needs_redraw = true;
                }

                _ = ui_tick.tick() => {
                    let toasts_before = self.toast.len();
                    self.toast.tick();
                    needs_redraw = self.tick() || toasts_before != self.toast.len();
                }
            }
        }
        Ok(())
    }

    fn handle_event(&mut self, ev: Event) -> bool {
        let actions = match ev {
            Event::Key(key) if key.kind != KeyEventKind::Release => self.handle_key(key),
            Event::Mouse(m) => self.handle_mouse(m),
            Event::Resize(_, _) => return true,
            _ => return false,
        };
        for action in actions {
            self.dispatch(action);
        }
        true
    }

    fn tick(&mut self) -> bool {
        let s = &self.state;
        let mut redraw = false;
        redraw |= self.resource_list.tick(s);
        redraw |= self.detail_view.tick(s);
        redraw |= self.nav_bar.tick(s);
        redraw
    }

    // ── Screen lifecycle ──────────────────────────────────────────────────────

    /// Replace the mounted list screen with a fresh one for `kind` and start loading it.
    fn mount_screen(&mut self, kind: ResourceKind) {
        for task in self.inflight.drain(..) {
            task.abort();
        }
        self.state.generation += 1;
        let mount = Mount {
            kind,
            generation: self.state.generation,
        };
        self.state.screen = ScreenState::new(mount);
        self.state.input_mode = InputMode::Normal;

        if !self.state.screen.begin() {
            return;
        }
        info!("[{}#{}] mounted, fetching {}", kind, mount.generation, self.client.collection_url(kind));
        self.inflight
            .push(spawn_fetch(self.client.clone(), mount, self.loader_tx.clone()));
        if self.network.check_reachability {
            self.state.screen.await_probe();
            self.inflight.push(spawn_probe(
                self.client.base_url().to_string(),
                &self.network,
                mount,
                self.loader_tx.clone(),
            ));
        }
    }

    fn handle_loader_event(&mut self, event: LoaderEvent) {
        match event {
            LoaderEvent::Fetched { mount, result } => {
                let failure = result.as_ref().err().map(|e| e.to_string());
                let count = result.as_ref().map(|r| r.len()).unwrap_or(0);
                match self.state.screen.settle(mount, result) {
                    Applied::Stale => {
                        debug!("[{}#{}] dropping stale fetch result", mount.kind, mount.generation);
                    }
                    Applied::Yes => match failure {
                        Some(reason) => {
                            self.toast
                                .error(format!("{}: {}", mount.kind.screen_name(), reason));
                        }
                        None => info!("[{}#{}] {} records", mount.kind, mount.generation, count),
                    },
                }
            }
            LoaderEvent::Probed {
                mount,
                reachability,
            } => match self.state.screen.apply_reachability(mount, &reachability) {
                Applied::Stale => {
                    debug!("[{}#{}] dropping stale probe", mount.kind, mount.generation);
                }
                Applied::Yes if !reachability.is_reachable() => {
                    warn!("[{}#{}] {:?}", mount.kind, mount.generation, reachability);
                    self.toast.warning("API host unreachable");
                }
                Applied::Yes => {}
            },
        }
    }

    /// Wait for the next loader event and apply it.
    #[cfg(test)]
    async fn pump_loader(&mut self) -> bool {
        let Some(rx) = self.loader_rx.as_mut() else {
            return false;
        };
        match rx.recv().await {
            Some(ev) => {
                self.handle_loader_event(ev);
                true
            }
            None => false,
        }
    }

    // ── Input ─────────────────────────────────────────────────────────────────

    fn handle_key(&mut self, key: KeyEvent) -> Vec<Action> {
        let normal = self.state.input_mode == InputMode::Normal;

        // Global keys — always active regardless of focus/mode
        match key.code {
            KeyCode::Char('c') if key.modifiers == KeyModifiers::CONTROL => {
                return vec![Action::Quit];
            }
            KeyCode::Char('q') if key.modifiers == KeyModifiers::NONE && normal => {
                return vec![Action::Quit];
            }
            KeyCode::Char('?') if normal => return vec![Action::ToggleHelp],
            _ => {}
        }

        // Help overlay captures all keys when visible
        if self.state.nav.show_help {
            let actions = self.help_overlay.handle_key(key, &self.state);
            if !actions.is_empty() {
                return actions;
            }
            // Any other key closes the overlay
            return vec![Action::ToggleHelp];
        }

        match key.code {
            KeyCode::Tab => {
                if !normal {
                    return vec![Action::CloseFilter, Action::FocusNext];
                }
                return vec![Action::FocusNext];
            }
            KeyCode::BackTab => {
                if !normal {
                    return vec![Action::CloseFilter, Action::FocusPrev];
                }
                return vec![Action::FocusPrev];
            }
            _ => {}
        }

        if normal {
            match key.code {
                KeyCode::Char(c @ '1'..='9') => {
                    let index = c as usize - '1' as usize;
                    if let Some(kind) = self.state.nav.screen_at(index) {
                        return vec![Action::ShowScreen(kind)];
                    }
                    return vec![];
                }
                KeyCode::Char('[') => return vec![Action::PrevScreen],
                KeyCode::Char(']') => return vec![Action::NextScreen],
                KeyCode::Char('d') if self.state.nav.style() == PresentationStyle::Drawer => {
                    return vec![Action::ToggleDrawer];
                }
                KeyCode::Char('K') => return vec![Action::ToggleKeys],
                _ => {}
            }
        }

        // Dispatch to the focused component
        let s = &self.state;
        match s.nav.focused() {
            Some(ComponentId::ResourceList) => self.resource_list.handle_key(key, s),
            Some(ComponentId::DetailView) => self.detail_view.handle_key(key, s),
            Some(ComponentId::NavBar) => self.nav_bar.handle_key(key, s),
            Some(ComponentId::HelpOverlay) => self.help_overlay.handle_key(key, s),
            None => vec![],
        }
    }

    fn handle_mouse(&mut self, event: MouseEvent) -> Vec<Action> {
        let is_click = matches!(
            event.kind,
            MouseEventKind::Down(_) | MouseEventKind::ScrollUp | MouseEventKind::ScrollDown
        );
        if !is_click || self.state.nav.show_help {
            return vec![];
        }

        fn hit(r: Rect, col: u16, row: u16) -> bool {
            r.width > 0
                && r.height > 0
                && col >= r.x
                && col < r.x + r.width
                && row >= r.y
                && row < r.y + r.height
        }

        let areas = self.pane_areas.clone();
        let s = &self.state;
        let (id, mut actions) = if hit(areas.nav, event.column, event.row) {
            (
                self.nav_bar.id(),
                self.nav_bar.handle_mouse(event, areas.nav, s),
            )
        } else if hit(areas.main, event.column, event.row) {
            if self.state.in_detail() {
                (
                    self.detail_view.id(),
                    self.detail_view.handle_mouse(event, areas.main, s),
                )
            } else {
                (
                    self.resource_list.id(),
                    self.resource_list.handle_mouse(event, areas.main, s),
                )
            }
        } else {
            return vec![];
        };

        // Focus follows the click
        if s.nav.focused() != Some(id) && matches!(event.kind, MouseEventKind::Down(_)) {
            actions.insert(0, Action::FocusPane(id));
        }
        actions
    }

    // ── Action dispatcher ─────────────────────────────────────────────────────

    fn dispatch(&mut self, action: Action) {
        let echo = action.clone();
        self.apply_action(action);

        // Components see the action after the App has applied it.
        let s = &self.state;
        self.resource_list.on_action(&echo, s);
        self.detail_view.on_action(&echo, s);
        self.nav_bar.on_action(&echo, s);
        self.help_overlay.on_action(&echo, s);
    }

    fn apply_action(&mut self, action: Action) {
        debug!("apply_action: {:?}", action);
        match action {
            // ── Navigation shell ──────────────────────────────────────────────
            Action::ShowScreen(kind) => {
                let changed = kind != self.state.screen.kind();
                if self.state.nav.show(kind) && changed {
                    self.mount_screen(kind);
                }
            }
            Action::NextScreen => {
                let kind = self.state.nav.next_screen();
                self.apply_action(Action::ShowScreen(kind));
            }
            Action::PrevScreen => {
                let kind = self.state.nav.prev_screen();
                self.apply_action(Action::ShowScreen(kind));
            }
            Action::OpenDetail(payload) => {
                let title = payload.title();
                match payload.transport(self.state.transport) {
                    Ok(payload) => {
                        info!("opening {} '{}'", payload.kind.slug(), title);
                        self.state.input_mode = InputMode::Normal;
                        self.state.nav.push_detail(payload);
                    }
                    Err(e) => {
                        warn!("could not open '{}': {}", title, e);
                        self.toast.error(format!("could not open {title}"));
                    }
                }
            }
            Action::CloseDetail => {
                self.state.nav.pop_detail();
            }
            Action::ToggleDrawer => self.state.nav.toggle_drawer(),

            // ── Focus ─────────────────────────────────────────────────────────
            Action::FocusNext => {
                self.state.nav.focus_next();
            }
            Action::FocusPrev => {
                self.state.nav.focus_prev();
            }
            Action::FocusPane(id) => self.state.nav.focus_set(id),

            // ── Search ────────────────────────────────────────────────────────
            Action::OpenFilter => self.state.input_mode = InputMode::Filter,
            Action::CloseFilter => self.state.input_mode = InputMode::Normal,
            Action::FilterChanged(q) => self.state.screen.search_text = q,

            // ── UI toggles ────────────────────────────────────────────────────
            Action::ToggleHelp => self.state.nav.show_help = !self.state.nav.show_help,
            Action::ToggleKeys => self.state.nav.show_keys_bar = !self.state.nav.show_keys_bar,

            Action::Quit => self.should_quit = true,
        }
    }

    // ── Drawing ───────────────────────────────────────────────────────────────

    fn draw(&mut self, frame: &mut Frame) {
        let area = frame.area();
        frame.render_widget(Block::default().style(Style::default().bg(C_BG)), area);

        let style = self.state.nav.style();
        let tabs_h = if style == PresentationStyle::Tabs { 1u16 } else { 0 };
        let keys_h = if self.state.nav.show_keys_bar { 1u16 } else { 0 };

        let outer = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1),
                Constraint::Min(0),
                Constraint::Length(tabs_h),
                Constraint::Length(keys_h),
            ])
            .split(area);
        let (title_area, body_area, tabs_area, keys_area) = (outer[0], outer[1], outer[2], outer[3]);

        self.draw_title(frame, title_area);

        // ── Body: optional drawer | main pane ─────────────────────────────────
        let (nav_area, main_area) = if self.state.nav.drawer_visible() {
            let cols = Layout::default()
                .direction(Direction::Horizontal)
                .constraints([Constraint::Length(DRAWER_WIDTH), Constraint::Min(0)])
                .split(body_area);
            (cols[0], cols[1])
        } else if style == PresentationStyle::Tabs {
            (tabs_area, body_area)
        } else {
            (Rect::default(), body_area)
        };

        let focused = self.state.nav.focused();
        if nav_area.width > 0 && nav_area.height > 0 {
            let f = focused == Some(ComponentId::NavBar);
            self.nav_bar.draw(frame, nav_area, f, &self.state);
        }
        match self.state.nav.route() {
            Route::Detail(_) => {
                let f = focused == Some(ComponentId::DetailView);
                self.detail_view.draw(frame, main_area, f, &self.state);
            }
            Route::List(_) => {
                let f = focused == Some(ComponentId::ResourceList);
                self.resource_list.draw(frame, main_area, f, &self.state);
            }
        }
        self.pane_areas = PaneAreas {
            nav: nav_area,
            main: main_area,
        };

        if self.state.nav.show_keys_bar {
            status_bar::draw_keys_bar(
                frame,
                keys_area,
                self.state.input_mode,
                style,
                self.state.in_detail(),
                &self.state.screen,
            );
        }

        // ── Help overlay (on top of everything) ──────────────────────────────
        if self.state.nav.show_help {
            self.help_overlay.draw(frame, area, false, &self.state);
        }

        // ── Toast notifications (topmost layer) ──────────────────────────────
        self.toast.draw(frame, area);
    }

    fn draw_title(&self, frame: &mut Frame, area: Rect) {
        let mut spans = vec![
            Span::styled(" HOLONET ", style_title()),
            Span::styled(self.state.nav.breadcrumb(), style_secondary()),
        ];
        if self.state.nav.style() == PresentationStyle::Drawer && !self.state.nav.drawer_open {
            spans.push(Span::styled("   d ☰", style_muted()));
        }
        frame.render_widget(Paragraph::new(Line::from(spans)), area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use holonet_proto::config::StyleSetting;
    use holonet_proto::payload::DetailTransport;
    use holonet_proto::reachability::Reachability;
    use holonet_proto::record::Record;
    use holonet_proto::screen::{ScreenView, OFFLINE_MESSAGE};
    use ratatui::backend::TestBackend;
    use serde_json::json;

    fn config(style: StyleSetting, transport: DetailTransport) -> Config {
        let mut config = Config::default();
        // Nothing listens here; fetches fail fast and are never pumped unless a test asks.
        config.api.base_url = "http://127.0.0.1:9/api/".into();
        config.ui.presentation = style;
        config.ui.detail_transport = transport;
        config.ui.enter_transition_ticks = 0;
        config
    }

    fn app(transport: DetailTransport) -> App {
        let config = config(StyleSetting::Tabs, transport);
        let mut app = App::new(&config, config.ui.presentation.resolve()).unwrap();
        app.start();
        app
    }

    fn checked_app() -> App {
        let mut config = config(StyleSetting::Tabs, DetailTransport::Direct);
        config.network.check_reachability = true;
        let mut app = App::new(&config, PresentationStyle::Tabs).unwrap();
        app.start();
        app
    }

    fn planets() -> Vec<Record> {
        ["Tatooine", "Alderaan", "Hoth"]
            .iter()
            .map(|n| Record::from(json!({ "name": n, "climate": "arid", "terrain": "desert" })))
            .collect()
    }

    fn deliver(app: &mut App, result: Result<Vec<Record>, holonet_proto::loader::FetchError>) {
        let mount = app.state.screen.mount();
        app.handle_loader_event(LoaderEvent::Fetched { mount, result });
    }

    fn render(app: &mut App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(100, 30)).unwrap();
        terminal.draw(|f| app.draw(f)).unwrap();
        let buf = terminal.backend().buffer();
        let mut out = String::new();
        for y in 0..buf.area.height {
            for x in 0..buf.area.width {
                out.push_str(buf[(x, y)].symbol());
            }
            out.push('\n');
        }
        out
    }

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn press(app: &mut App, code: KeyCode) {
        for action in app.handle_key(key(code)) {
            app.dispatch(action);
        }
    }

    #[tokio::test]
    async fn test_spinner_while_loading() {
        let mut app = app(DetailTransport::Direct);
        assert_eq!(app.state.screen.view(), ScreenView::Spinner);
        assert!(render(&mut app).contains("loading planets…"));
    }

    #[tokio::test]
    async fn test_card_count_follows_search() {
        let mut app = app(DetailTransport::Direct);
        deliver(&mut app, Ok(planets()));
        let text = render(&mut app);
        assert!(text.contains("Tatooine") && text.contains("Alderaan") && text.contains("Hoth"));

        press(&mut app, KeyCode::Char('/'));
        assert_eq!(app.state.input_mode, InputMode::Filter);
        press(&mut app, KeyCode::Char('T'));
        assert_eq!(app.state.screen.search_text, "T");
        assert_eq!(app.state.screen.view(), ScreenView::Cards(2));
        let text = render(&mut app);
        assert!(text.contains("Tatooine") && text.contains("Hoth"));
        assert!(!text.contains("Alderaan"));

        press(&mut app, KeyCode::Esc);
        assert_eq!(app.state.screen.view(), ScreenView::Cards(3));
        press(&mut app, KeyCode::Esc);
        assert_eq!(app.state.input_mode, InputMode::Normal);
    }

    #[tokio::test]
    async fn test_search_with_no_match_shows_empty_state() {
        let mut app = app(DetailTransport::Direct);
        deliver(&mut app, Ok(planets()));
        app.dispatch(Action::FilterChanged("kamino".into()));
        assert_eq!(app.state.screen.view(), ScreenView::Empty);
        assert!(render(&mut app).contains("nothing matches \"kamino\""));
    }

    #[tokio::test]
    async fn test_fetch_failure_shows_only_offline_text() {
        let mut app = app(DetailTransport::Direct);
        let err = serde_json::from_str::<serde_json::Value>("<html>").unwrap_err();
        deliver(&mut app, Err(err.into()));
        assert_eq!(app.state.screen.view(), ScreenView::Offline);
        let text = render(&mut app);
        assert!(text.contains(OFFLINE_MESSAGE));
        assert!(!text.contains("loading"));
        assert_eq!(app.toast.len(), 1);
    }

    #[tokio::test]
    async fn test_pending_probe_shows_no_spinner_or_cards() {
        let mut app = checked_app();
        assert_eq!(app.inflight.len(), 2);
        let text = render(&mut app);
        assert!(!text.contains("loading planets"));
        assert!(text.contains("checking connection"));

        deliver(&mut app, Ok(planets()));
        assert!(!render(&mut app).contains("Tatooine"));

        let mount = app.state.screen.mount();
        app.handle_loader_event(LoaderEvent::Probed {
            mount,
            reachability: Reachability::Reachable,
        });
        assert!(render(&mut app).contains("Tatooine"));
    }

    #[tokio::test]
    async fn test_unreachable_before_fetch_hides_spinner() {
        let mut app = checked_app();
        assert!(!render(&mut app).contains("loading planets"));
        let mount = app.state.screen.mount();
        app.handle_loader_event(LoaderEvent::Probed {
            mount,
            reachability: Reachability::Unreachable("connection refused".into()),
        });
        let text = render(&mut app);
        assert!(text.contains(OFFLINE_MESSAGE));
        assert!(!text.contains("loading planets"));

        // A late success still ends loading but the screen stays offline.
        deliver(&mut app, Ok(planets()));
        assert!(!app.state.screen.loading());
        assert!(!render(&mut app).contains("Tatooine"));
    }

    #[tokio::test]
    async fn test_planet_detail_shows_all_labels_without_fetching() {
        for transport in [DetailTransport::Direct, DetailTransport::Serialized] {
            let mut app = app(transport);
            deliver(&mut app, Ok(planets()));
            let generation = app.state.generation;

            press(&mut app, KeyCode::Enter);
            let top = app.state.nav.top_detail().cloned().unwrap();
            assert_eq!(top.record, planets()[0]);
            assert_eq!(app.state.generation, generation);
            assert_eq!(app.inflight.len(), 1);

            let text = render(&mut app);
            for label in [
                "Climate",
                "Terrain",
                "Population",
                "Diameter",
                "Gravity",
                "Orbital Period",
                "Rotation Period",
            ] {
                assert!(text.contains(label), "missing {label}");
            }
            assert!(text.contains("Planets › Tatooine"));

            press(&mut app, KeyCode::Esc);
            assert!(!app.state.in_detail());
            assert_eq!(app.state.screen.list().len(), 3);
        }
    }

    #[tokio::test]
    async fn test_switching_screens_remounts_and_drops_stale_results() {
        let mut app = app(DetailTransport::Direct);
        let old = app.state.screen.mount();

        press(&mut app, KeyCode::Char('2'));
        assert_eq!(app.state.screen.kind(), ResourceKind::Films);
        assert!(app.state.screen.loading());
        assert_ne!(app.state.screen.mount(), old);

        app.handle_loader_event(LoaderEvent::Fetched {
            mount: old,
            result: Ok(planets()),
        });
        assert!(app.state.screen.list().is_empty());
        assert!(app.state.screen.loading());

        press(&mut app, KeyCode::Char(']'));
        assert_eq!(app.state.screen.kind(), ResourceKind::Starships);
        press(&mut app, KeyCode::Char(']'));
        assert_eq!(app.state.screen.kind(), ResourceKind::Planets);
        press(&mut app, KeyCode::Char('['));
        assert_eq!(app.state.screen.kind(), ResourceKind::Starships);
    }

    #[tokio::test]
    async fn test_real_fetch_failure_reaches_screen() {
        let mut app = app(DetailTransport::Direct);
        assert!(app.pump_loader().await);
        assert_eq!(app.state.screen.view(), ScreenView::Offline);
    }

    #[tokio::test]
    async fn test_focus_follows_click() {
        let config = config(StyleSetting::Drawer, DetailTransport::Direct);
        let mut app = App::new(&config, PresentationStyle::Drawer).unwrap();
        app.start();
        deliver(&mut app, Ok(planets()));
        render(&mut app);

        app.dispatch(Action::FocusPane(ComponentId::NavBar));
        let main = app.pane_areas.main;
        let actions = app.handle_mouse(MouseEvent {
            kind: MouseEventKind::Down(ratatui::crossterm::event::MouseButton::Left),
            column: main.x + 4,
            row: main.y + 1,
            modifiers: KeyModifiers::NONE,
        });
        assert!(matches!(
            actions.first(),
            Some(Action::FocusPane(ComponentId::ResourceList))
        ));
        for action in actions {
            app.dispatch(action);
        }
        assert_eq!(app.state.nav.focused(), Some(ComponentId::ResourceList));
    }

    #[tokio::test]
    async fn test_drawer_style_layout() {
        let config = config(StyleSetting::Drawer, DetailTransport::Direct);
        let mut app = App::new(&config, PresentationStyle::Drawer).unwrap();
        app.start();
        deliver(&mut app, Ok(planets()));
        let text = render(&mut app);
        assert!(text.contains("Spaceships"));
        assert!(text.contains("Tatooine"));

        press(&mut app, KeyCode::Char('d'));
        assert!(!app.state.nav.drawer_visible());
        assert!(!render(&mut app).contains("Spaceships"));
    }
}
