//! Application state and core logic.
//!
//! The [`App`] owns the mounted page, runs page commands on spawned tasks and
//! feeds their outcomes back through the [`AppMessage`] channel.

mod actions;
mod handlers;
mod messages;
mod types;

pub use messages::AppMessage;
pub use types::{Screen, ServiceHealth};

use tokio::sync::mpsc;
use tracing::{debug, info};

use crate::api::ApiClient;
use crate::config::AppConfig;
use crate::input::{ActionRegistry, InputContext};
use crate::pages::{Command, Effect, FeedbackFocus, Page};
use crate::route::Route;

/// Ticks between two service status probes.
pub const SERVICE_PROBE_INTERVAL_TICKS: u64 = 300;

/// Main application state
pub struct App {
    /// The mounted screen
    pub page: Page,
    /// Bumped on every mount; outcomes tagged with an older value are dropped
    pub generation: u64,
    /// Records service client (cloned into spawned tasks)
    pub api: ApiClient,
    /// Last known reachability of the records service
    pub service_health: ServiceHealth,
    /// Receiver for async messages (taken by the event loop)
    pub message_rx: Option<mpsc::UnboundedReceiver<AppMessage>>,
    /// Sender for async messages (clone this to pass to async tasks)
    pub message_tx: mpsc::UnboundedSender<AppMessage>,
    /// Flag to track if the app should quit
    pub should_quit: bool,
    /// Dirty flag: set on state changes, cleared after each draw
    pub needs_redraw: bool,
    /// Tick counter for animations (spinner)
    pub tick_count: u64,
    registry: ActionRegistry,
}

impl App {
    /// Create an app talking to the service named by `config`.
    pub fn new(config: &AppConfig) -> Self {
        Self::with_api(ApiClient::from_config(config))
    }

    /// Create an app over an existing client. Nothing is mounted or fetched
    /// until [`App::start`] runs.
    pub fn with_api(api: ApiClient) -> Self {
        let (message_tx, message_rx) = mpsc::unbounded_channel();
        let (page, _) = Page::mount(Route::Dashboard);
        Self {
            page,
            generation: 0,
            api,
            service_health: ServiceHealth::Unknown,
            message_rx: Some(message_rx),
            message_tx,
            should_quit: false,
            needs_redraw: true,
            tick_count: 0,
            registry: ActionRegistry::new(),
        }
    }

    /// Mount the start screen and probe the service.
    pub fn start(&mut self, route: Route) {
        self.navigate(route);
        self.probe_service();
    }

    /// Get a clone of the message sender for passing to async tasks
    pub fn message_sender(&self) -> mpsc::UnboundedSender<AppMessage> {
        self.message_tx.clone()
    }

    pub fn route(&self) -> Route {
        self.page.route()
    }

    pub fn screen(&self) -> Screen {
        match self.page {
            Page::Dashboard(_) => Screen::Dashboard,
            Page::Session(_) => Screen::Session,
            Page::Feedback(_) => Screen::Feedback,
        }
    }

    /// Whether a text field on the mounted screen currently takes typing.
    pub fn is_editing(&self) -> bool {
        match &self.page {
            Page::Dashboard(page) => page.registration.is_some(),
            Page::Session(page) => page.session.is_some() && !page.loading,
            Page::Feedback(page) => page.focus == FeedbackFocus::Feedback,
        }
    }

    pub fn input_context(&self) -> InputContext {
        InputContext::new(self.screen(), self.is_editing())
    }

    /// Build a fresh page for `route` and start its mount fetch.
    pub fn navigate(&mut self, route: Route) {
        info!("Navigating to {}", route);
        let (page, command) = Page::mount(route);
        self.page = page;
        self.generation = self.generation.wrapping_add(1);
        self.mark_dirty();
        self.dispatch(command);
    }

    /// Run a page command on its own task; the outcome comes back through
    /// the message channel tagged with the current generation.
    pub fn dispatch(&self, command: Command) {
        debug!("Dispatching {} (generation {})", command.name(), self.generation);
        let tx = self.message_tx.clone();
        let api = self.api.clone();
        let generation = self.generation;
        tokio::spawn(async move {
            let outcome = command.execute(&api).await;
            let _ = tx.send(AppMessage::Outcome {
                generation,
                outcome,
            });
        });
    }

    /// Spawn a check of the service root and report it as a message.
    pub fn probe_service(&self) {
        let tx = self.message_tx.clone();
        let api = self.api.clone();
        tokio::spawn(async move {
            let online = api
                .service_status()
                .await
                .map(|status| status.is_running())
                .unwrap_or(false);
            let _ = tx.send(AppMessage::ServiceStatus(online));
        });
    }

    pub(crate) fn apply_effect(&mut self, effect: Effect) {
        match effect {
            Effect::None => {}
            Effect::Dispatch(command) => self.dispatch(command),
            Effect::Navigate(route) => self.navigate(route),
        }
    }

    /// Advance animations; re-probe the service now and then.
    pub fn tick(&mut self) {
        self.tick_count = self.tick_count.wrapping_add(1);
        if self.page.is_loading() || self.is_submitting() {
            self.mark_dirty();
        }
        if self.tick_count % SERVICE_PROBE_INTERVAL_TICKS == 0 {
            self.probe_service();
        }
    }

    /// Whether the mounted screen has a save or submit in flight.
    pub fn is_submitting(&self) -> bool {
        match &self.page {
            Page::Dashboard(page) => {
                page.starting_session.is_some()
                    || page.registration.as_ref().is_some_and(|form| form.submitting)
            }
            Page::Session(page) => page.saving,
            Page::Feedback(page) => page.submitting,
        }
    }

    /// Wait for the next async message and handle it. Returns `false` once
    /// the channel is closed or the receiver was taken.
    pub async fn process_next_message(&mut self) -> bool {
        let Some(rx) = self.message_rx.as_mut() else {
            return false;
        };
        let received = rx.recv().await;
        match received {
            Some(msg) => {
                self.handle_message(msg);
                true
            }
            None => false,
        }
    }

    pub fn mark_dirty(&mut self) {
        self.needs_redraw = true;
    }

    pub fn quit(&mut self) {
        self.should_quit = true;
    }
}
