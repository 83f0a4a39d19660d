//! Session shell.
//!
//! [`App`] owns the session: router, drawer, collaborators and one mounted
//! screen per back-stack entry. It follows the Elm loop:
//!
//! 1. [`App::update`] dispatches a [`Message`] to its handler. Intents for a
//!    screen that is not on top are dropped.
//! 2. The mounted screens are reconciled with the back-stack. Screens whose
//!    entry is gone are dropped and their tasks aborted; new entries are
//!    mounted and start their initial load.
//! 3. The handler's [`Task`] is spawned on a [`JoinSet`]. Each finished
//!    task yields another message.
//!
//! [`App::view`] builds the [`ViewSnapshot`] a frontend renders.

mod screens;
mod task;
mod view;

use std::collections::VecDeque;

use tokio::task::JoinSet;
use tracing::{debug, error, info};

use crate::handler::{
    self, DrawerHandler, HistoryHandler, HomeHandler, LandingHandler, LiveParkingHandler,
    LoginHandler, LogoutHandler, MessageHandler, ResetPasswordHandler, SignUpHandler,
};
use crate::message::Message;
use crate::navigation::{DrawerCoordinator, Router};
use crate::service::Services;
use crate::settings::Settings;
use crate::state::Route;

pub use screens::Screen;
pub use task::{Task, TaskScope};
pub use view::{DrawerView, ScreenSnapshot, ViewSnapshot};

use screens::MountedScreen;
use task::Job;

// =============================================================================
// APP STATE
// =============================================================================

/// Session state handed to the handlers.
pub struct AppState {
    pub router: Router,
    pub drawer: DrawerCoordinator,
    pub services: Services,
    pub settings: Settings,
    /// Bottom first, one per back-stack entry.
    screens: Vec<MountedScreen>,
}

impl AppState {
    /// Topmost mounted screen that `pick` accepts.
    pub fn find_screen<'a, T>(&'a self, pick: impl Fn(&'a Screen) -> Option<&'a T>) -> Option<&'a T> {
        self.screens
            .iter()
            .rev()
            .find_map(|mounted| pick(&mounted.screen))
    }

    /// Route of the screen mounted for the top back-stack entry.
    ///
    /// `None` while the router is ahead of the registry.
    pub fn top_screen_route(&self) -> Option<Route> {
        let top = self.router.snapshot().top().id;
        self.screens
            .iter()
            .rev()
            .find(|mounted| mounted.entry_id == top)
            .map(|mounted| mounted.screen.route())
    }

    /// Routes of the mounted screens, bottom first.
    pub fn mounted_routes(&self) -> Vec<Route> {
        self.screens
            .iter()
            .map(|mounted| mounted.screen.route())
            .collect()
    }
}

// =============================================================================
// APP
// =============================================================================

/// The session shell.
///
/// `update`, `step` and `settle` spawn tasks and must run inside a Tokio
/// runtime.
pub struct App {
    state: AppState,
    tasks: JoinSet<Message>,
    queue: VecDeque<Message>,
    synced_top: Option<u64>,
}

impl App {
    /// Start a session on the landing screen.
    pub fn new(services: Services, settings: Settings) -> Self {
        let router = Router::new(Route::START);
        let drawer = DrawerCoordinator::new(
            router.clone(),
            services.delay.clone(),
            settings.timing.drawer_close(),
        );
        let mut app = Self {
            state: AppState {
                router,
                drawer,
                services,
                settings,
                screens: Vec::new(),
            },
            tasks: JoinSet::new(),
            queue: VecDeque::new(),
            synced_top: None,
        };
        app.sync();
        info!(route = %Route::START, "session started");
        app
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn router(&self) -> &Router {
        &self.state.router
    }

    pub fn drawer(&self) -> &DrawerCoordinator {
        &self.state.drawer
    }

    /// Handle a message and everything it feeds back synchronously.
    pub fn update(&mut self, message: Message) {
        self.queue.push_back(message);
        self.drain();
    }

    /// Wait for the next background task and handle its message.
    ///
    /// Returns `false` once nothing is running.
    pub async fn step(&mut self) -> bool {
        self.drain();
        loop {
            match self.tasks.join_next().await {
                None => return false,
                Some(Ok(message)) => {
                    self.update(message);
                    return true;
                }
                Some(Err(err)) if err.is_cancelled() => {}
                Some(Err(err)) => {
                    error!(%err, "background task panicked");
                    return true;
                }
            }
        }
    }

    /// Run until no task is left.
    pub async fn settle(&mut self) {
        while self.step().await {}
    }

    /// Tasks currently attached to mounted screens.
    pub fn screen_tasks_in_flight(&self) -> usize {
        self.state.screens.iter().map(MountedScreen::in_flight).sum()
    }

    /// Snapshot for the renderer.
    pub fn view(&self) -> ViewSnapshot {
        let navigation = self.state.router.snapshot();
        let top = navigation.top();

        let screen = self
            .state
            .screens
            .iter()
            .find(|mounted| mounted.entry_id == top.id)
            .map_or(ScreenSnapshot::Transitioning(top.route), |mounted| {
                ScreenSnapshot::from(&mounted.screen)
            });
        let drawer = top.route.is_private().then(|| {
            DrawerView::new(self.state.drawer.state(), &self.state.settings.profile)
        });

        ViewSnapshot {
            route: top.route,
            back_stack: navigation.routes(),
            drawer,
            screen,
        }
    }

    /// Tear the session down, aborting every task.
    pub fn shutdown(&mut self) {
        self.tasks.abort_all();
        self.queue.clear();
        self.state.screens.clear();
        self.synced_top = None;
        info!("session closed");
    }

    // =========================================================================
    // LOOP
    // =========================================================================

    fn drain(&mut self) {
        while let Some(message) = self.queue.pop_front() {
            let origin = self.state.router.snapshot().top().id;
            let task = self.dispatch(message);
            self.sync();
            self.run(task, Some(origin));
        }
    }

    fn dispatch(&mut self, message: Message) -> Task {
        if let Some(target) = message.target() {
            let top = self.state.top_screen_route();
            if top != Some(target) {
                debug!(route = %target, top = ?top, "intent for a screen not on top ignored");
                return Task::none();
            }
        }

        let state = &mut self.state;
        match message {
            Message::Landing(msg) => LandingHandler.handle(state, msg),
            Message::Login(msg) => LoginHandler.handle(state, msg),
            Message::SignUp(msg) => SignUpHandler.handle(state, msg),
            Message::ResetPassword(msg) => ResetPasswordHandler.handle(state, msg),
            Message::Home(msg) => HomeHandler.handle(state, msg),
            Message::LiveParking(msg) => LiveParkingHandler.handle(state, msg),
            Message::History(msg) => HistoryHandler.handle(state, msg),
            Message::Logout(msg) => LogoutHandler.handle(state, msg),
            Message::Drawer(msg) => DrawerHandler.handle(state, msg),
            Message::Back => handler::handle_back(state),
            Message::Noop => Task::none(),
        }
    }

    /// Reconcile mounted screens with the back-stack.
    fn sync(&mut self) {
        let navigation = self.state.router.snapshot();
        let entries = navigation.entries();

        self.state.screens.retain(|mounted| {
            entries.iter().any(|entry| entry.id == mounted.entry_id)
        });

        for (index, entry) in entries.iter().enumerate() {
            let mounted = self
                .state
                .screens
                .get(index)
                .is_some_and(|mounted| mounted.entry_id == entry.id);
            if mounted {
                continue;
            }
            let (screen, task) =
                Screen::mount(entry.route, &self.state.services, &self.state.settings);
            self.state
                .screens
                .insert(index, MountedScreen::new(entry.id, screen));
            self.run(task, Some(entry.id));
        }

        let top = navigation.top();
        if self.synced_top != Some(top.id) {
            self.synced_top = Some(top.id);
            self.state.drawer.close();
            if top.route.is_private() {
                self.state.drawer.select(top.route);
            }
            debug!(route = %top.route, depth = navigation.depth(), "top of stack changed");
        }
    }

    fn run(&mut self, task: Task, origin: Option<u64>) {
        for job in task.into_jobs() {
            match job {
                Job::Message(message) => self.queue.push_back(message),
                Job::Spawn {
                    future,
                    scope: TaskScope::Session,
                } => {
                    self.tasks.spawn(future);
                }
                Job::Spawn {
                    future,
                    scope: TaskScope::Screen,
                } => {
                    let owner = origin.and_then(|id| {
                        self.state
                            .screens
                            .iter_mut()
                            .find(|mounted| mounted.entry_id == id)
                    });
                    match owner {
                        Some(mounted) => mounted.attach(self.tasks.spawn(future)),
                        None => debug!("owning screen already unmounted, task dropped"),
                    }
                }
            }
        }
    }
}

impl std::fmt::Debug for App {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("App")
            .field("back_stack", &self.state.router.snapshot().routes())
            .field("mounted", &self.state.mounted_routes())
            .field("tasks", &self.tasks.len())
            .finish_non_exhaustive()
    }
}
