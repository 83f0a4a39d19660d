//! SPARK - Smart Parking FT UGM
//!
//! Headless navigation shell and screen presenters for the parking-status
//! viewer. Rendering is left to a frontend: it reads [`app::ViewSnapshot`]s
//! and feeds user intents back as [`message::Message`]s.
//!
//! The architecture follows the Elm pattern (State, Message, Update, View):
//!
//! - [`state`]: routes, observable state holders and screen data
//! - [`navigation`]: back-stack router and the drawer coordinator
//! - [`presenter`]: one state machine per screen
//! - [`service`]: mocked collaborators behind the async delay boundary
//! - [`message`] / [`handler`]: intents and the handlers that apply them
//! - [`app`]: the session shell that mounts screens and runs tasks

pub mod app;
pub mod error;
pub mod handler;
pub mod message;
pub mod navigation;
pub mod presenter;
pub mod service;
pub mod settings;
pub mod state;
pub mod validation;

pub use app::{App, AppState, ScreenSnapshot, Task, ViewSnapshot};
pub use error::AppError;
pub use message::Message;
pub use navigation::{DrawerCoordinator, NavOptions, NavigateOutcome, NavigationError, Router};
pub use service::Services;
pub use settings::Settings;
pub use state::{Route, RouteGroup, StateHolder};
