use crate::auth::{AuthClient, AuthError, AuthMode, AuthRequest, AuthResponse, Settled};
use crate::components::footer::Footer;
use crate::components::help_overlay::HelpOverlay;
use crate::components::{ComponentAction, Header};
use crate::config::Config;
use crate::keymap::Action;
use crate::router::Route;
use crate::screens::{
    AdminScreen, GalleryScreen, HomeScreen, RenderContext, Screen, ScreenAction, ScreenContext,
    ServiceListingScreen,
};
use crate::state::signal::viewport;
use crate::state::GlobalState;
use crate::tui::Tui;
use crate::utils::hit;
use anyhow::{Context, Result};
use crossterm::event::{Event, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::Frame;
use std::path::PathBuf;
use std::sync::mpsc::{self, Receiver, Sender};
use std::time::Instant;
use tokio::runtime::Runtime;
use tracing::{debug, error, info};

/// Hint bar: border row plus text row
const HINT_HEIGHT: u16 = 2;

type AuthOutcome = (AuthMode, Result<AuthResponse, AuthError>);

/// One screen per route.
struct Screens {
    home: HomeScreen,
    services: ServiceListingScreen,
    gallery: GalleryScreen,
    admin: AdminScreen,
}

impl Screens {
    fn new(config: &Config) -> Self {
        Self {
            home: HomeScreen::new(config),
            services: ServiceListingScreen::new(config),
            gallery: GalleryScreen::new(),
            admin: AdminScreen::new(),
        }
    }

    fn get(&self, route: Route) -> &dyn Screen {
        match route {
            Route::Home => &self.home,
            Route::Services => &self.services,
            Route::Gallery => &self.gallery,
            Route::Admin => &self.admin,
        }
    }

    fn get_mut(&mut self, route: Route) -> &mut dyn Screen {
        match route {
            Route::Home => &mut self.home,
            Route::Services => &mut self.services,
            Route::Gallery => &mut self.gallery,
            Route::Admin => &mut self.admin,
        }
    }
}

/// Everything on screen: header, routed page, hint bar and overlays.
///
/// Kept apart from the terminal so it can be driven from tests.
pub struct Site {
    config: Config,
    config_path: PathBuf,
    runtime: Runtime,
    client: AuthClient,
    auth_tx: Sender<AuthOutcome>,
    auth_rx: Receiver<AuthOutcome>,
    state: GlobalState,
    header: Header,
    header_area: Rect,
    route: Route,
    screens: Screens,
    should_quit: bool,
    last_tick: Instant,
}

impl Site {
    pub fn new(config: Config, config_path: PathBuf, route: Route) -> Result<Self> {
        let runtime = Runtime::new().context("Failed to create tokio runtime")?;
        let client = AuthClient::new(&config.api_base_url, config.request_timeout())
            .context("Failed to build HTTP client")?;
        let (auth_tx, auth_rx) = mpsc::channel();
        let screens = Screens::new(&config);
        let mut site = Self {
            config,
            config_path,
            runtime,
            client,
            auth_tx,
            auth_rx,
            state: GlobalState::new(),
            header: Header::new(),
            header_area: Rect::default(),
            route,
            screens,
            should_quit: false,
            last_tick: Instant::now(),
        };
        let ctx = ScreenContext::new(&site.config, &site.config_path);
        site.screens.get_mut(route).on_enter(&ctx)?;
        info!(route = %route, "Site opened");
        Ok(site)
    }

    pub fn route(&self) -> Route {
        self.route
    }

    pub fn state(&self) -> &GlobalState {
        &self.state
    }

    pub fn header(&self) -> &Header {
        &self.header
    }

    pub fn admin(&self) -> &AdminScreen {
        &self.screens.admin
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Switch routes, releasing the old screen's timers and subscriptions.
    pub fn navigate(&mut self, route: Route) -> Result<()> {
        self.header.close_all();
        if route == self.route {
            return Ok(());
        }
        info!(from = %self.route, to = %route, "Navigating");
        let ctx = ScreenContext::new(&self.config, &self.config_path);
        self.screens.get_mut(self.route).on_exit(&ctx)?;
        self.route = route;
        self.screens.get_mut(route).on_enter(&ctx)
    }

    fn apply(&mut self, action: ScreenAction) -> Result<()> {
        match action {
            ScreenAction::None | ScreenAction::Refresh => {}
            ScreenAction::Navigate(route) => self.navigate(route)?,
            ScreenAction::OpenAuth(mode) => {
                self.screens.admin.set_mode(mode);
                self.navigate(Route::Admin)?;
            }
            ScreenAction::Toast(toast) => self.state.toasts.push(toast),
            ScreenAction::SubmitAuth(mode, request) => self.send_auth(mode, request),
            ScreenAction::ShowHelp => self.state.toggle_help(),
            ScreenAction::Quit => self.should_quit = true,
        }
        Ok(())
    }

    fn send_auth(&mut self, mode: AuthMode, request: AuthRequest) {
        let client = self.client.clone();
        let tx = self.auth_tx.clone();
        self.runtime.spawn(async move {
            let result = client.submit(mode, &request).await;
            if tx.send((mode, result)).is_err() {
                debug!("Auth result dropped, app is shutting down");
            }
        });
    }

    /// Feed finished auth requests back into the admin form.
    pub fn drain_auth(&mut self) {
        while let Ok((mode, result)) = self.auth_rx.try_recv() {
            match self.screens.admin.settle(result) {
                Settled::LoggedIn { username, token } => {
                    self.state.toasts.success(mode.success_message());
                    self.state.sign_in(username, token);
                }
                Settled::Registered => self.state.toasts.success(mode.success_message()),
                Settled::Failed(message) => {
                    error!(?mode, error = %message, "Admin request failed");
                    self.state.toasts.error(message);
                }
            }
        }
    }

    /// Advance toasts, carousels and header state once per tick.
    pub fn tick(&mut self) {
        let elapsed = self.last_tick.elapsed();
        if elapsed < self.config.tick_rate() {
            return;
        }
        self.last_tick = Instant::now();
        self.state.toasts.tick(elapsed);
        self.header.sync();
        self.screens.get_mut(self.route).tick(elapsed);
    }

    pub fn handle_event(&mut self, event: Event) -> Result<()> {
        if let Event::Resize(width, height) = event {
            publish_size(width, height);
            return Ok(());
        }

        if self.state.show_help_overlay {
            let dismiss = match &event {
                Event::Key(key) => key.kind == KeyEventKind::Press,
                Event::Mouse(mouse) => matches!(mouse.kind, MouseEventKind::Down(_)),
                _ => false,
            };
            if dismiss {
                self.state.toggle_help();
            }
            return Ok(());
        }

        let input_focused = self.screens.get(self.route).is_input_focused();
        self.state.input_mode_active = input_focused;

        match event {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                let action = self.config.keymap.get_action(key.code, key.modifiers);
                if action == Some(Action::Quit)
                    && (!input_focused || key.modifiers.contains(KeyModifiers::CONTROL))
                {
                    self.should_quit = true;
                    return Ok(());
                }
                if self.header.any_open() {
                    if let Some(action) = action {
                        let result = self.header.handle_action(action);
                        self.apply(result.into())?;
                    }
                    return Ok(());
                }
                if !input_focused {
                    match action {
                        Some(Action::Help) => {
                            self.state.toggle_help();
                            return Ok(());
                        }
                        Some(toggle @ (Action::ToggleLoginMenu | Action::ToggleDrawer)) => {
                            let result = self.header.handle_action(toggle);
                            return self.apply(result.into());
                        }
                        Some(action) => {
                            if let Some(route) = action.route() {
                                return self.navigate(route);
                            }
                        }
                        None => {}
                    }
                }
                let ctx = ScreenContext::new(&self.config, &self.config_path);
                let result = self.screens.get_mut(self.route).handle_event(event, &ctx)?;
                self.apply(result)
            }
            Event::Mouse(mouse) => self.handle_mouse(mouse),
            _ => Ok(()),
        }
    }

    fn handle_mouse(&mut self, mouse: MouseEvent) -> Result<()> {
        let in_header = hit(self.header_area, mouse.column, mouse.row);
        if self.header.any_open() || in_header {
            // An open menu swallows the event, even a click outside it
            let result: ComponentAction = self.header.handle_mouse(mouse);
            return self.apply(result.into());
        }
        if mouse.kind == MouseEventKind::Down(MouseButton::Right) {
            return Ok(());
        }
        let ctx = ScreenContext::new(&self.config, &self.config_path);
        let result = self
            .screens
            .get_mut(self.route)
            .handle_event(Event::Mouse(mouse), &ctx)?;
        self.apply(result)
    }

    pub fn draw(&mut self, frame: &mut Frame) -> Result<()> {
        let area = frame.area();
        publish_size(area.width, area.height);
        self.header.sync();

        let [header_area, body, hint_area] = Layout::vertical([
            Constraint::Length(self.header.height()),
            Constraint::Min(0),
            Constraint::Length(HINT_HEIGHT),
        ])
        .areas(area);
        self.header_area = header_area;
        self.header
            .render(frame, header_area, self.route, self.state.session.as_ref());

        let render_ctx = RenderContext::new(&self.config);
        let screen = self.screens.get_mut(self.route);
        screen.render(frame, body, &render_ctx)?;
        let hints = screen.footer_hints(&self.config.keymap);

        self.header.render_overlays(frame, area);
        Footer::render_hints(frame, hint_area, &hints)?;
        self.state.toasts.render(frame, area);

        if self.state.show_help_overlay {
            let path = self.config_path.display().to_string();
            HelpOverlay::render(frame, area, &self.config.keymap, &path)?;
        }
        Ok(())
    }
}

/// Record a new terminal size on the viewport signal, keeping the scroll.
fn publish_size(width: u16, height: u16) {
    viewport().update(|v| {
        if v.width == width && v.height == height {
            return false;
        }
        v.width = width;
        v.height = height;
        true
    });
}

/// Main application: the site plus the terminal it draws on.
pub struct App {
    tui: Tui,
    site: Site,
}

impl App {
    pub fn new(config: Config, config_path: PathBuf, route: Route) -> Result<Self> {
        let tui = Tui::new()?;
        let site = Site::new(config, config_path, route)?;
        Ok(Self { tui, site })
    }

    pub fn run(&mut self) -> Result<()> {
        self.tui.enter()?;
        let result = self.event_loop();
        self.tui.exit()?;
        result
    }

    fn event_loop(&mut self) -> Result<()> {
        let tick_rate = self.site.config.tick_rate();
        loop {
            self.draw()?;

            if self.site.should_quit() {
                info!("Quit requested");
                break;
            }

            if let Some(event) = self.tui.poll_event(tick_rate)? {
                self.site.handle_event(event)?;
            }
            self.site.drain_auth();
            self.site.tick();
        }
        Ok(())
    }

    fn draw(&mut self) -> Result<()> {
        let site = &mut self.site;
        let mut result = Ok(());
        self.tui.terminal_mut().draw(|frame| {
            result = site.draw(frame);
        })?;
        result
    }
}
