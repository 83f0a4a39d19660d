//! Message handlers.
//!
//! Each handler implements [`MessageHandler`] for one message family and
//! is the only place that turns presenter outcomes into navigation:
//!
//! ```ignore
//! impl MessageHandler<LoginMessage> for LoginHandler {
//!     fn handle(&self, state: &mut AppState, msg: LoginMessage) -> Task {
//!         match msg {
//!             LoginMessage::SubmitFinished(outcome) if outcome.is_success() => {
//!                 state.router.complete_login();
//!                 Task::none()
//!             }
//!             // ...
//!         }
//!     }
//! }
//! ```

mod auth;
mod parking;
mod session;

use crate::app::{AppState, Task};
use crate::message::Message;
use crate::presenter::{SubmitOutcome, Submission};

pub use auth::{LandingHandler, LoginHandler, ResetPasswordHandler, SignUpHandler};
pub use parking::{HistoryHandler, HomeHandler, LiveParkingHandler};
pub use session::{DrawerHandler, LogoutHandler, handle_back};

/// Handles one message family.
pub trait MessageHandler<M> {
    /// Apply `msg` to the session and return follow-up work.
    fn handle(&self, state: &mut AppState, msg: M) -> Task;
}

/// Turn a submission into a task.
///
/// Only a pending submission spawns work. A synchronous success (demo
/// bypass) is fed back at once; anything else is already reflected in the
/// presenter's state.
fn submission_task(submission: Submission, finished: fn(SubmitOutcome) -> Message) -> Task {
    match submission {
        Submission::Pending(future) => Task::perform(future, finished),
        Submission::Done(outcome) if outcome.is_success() => Task::done(finished(outcome)),
        Submission::Done(_) => Task::none(),
    }
}
