//! Mocked collaborators behind the async delay boundary.
//!
//! Everything here is injected: presenters only see the traits, so tests
//! can swap in instant or failing implementations.

mod auth;
mod delay;
pub mod fixtures;
mod parking;

use std::sync::Arc;

use thiserror::Error;

use crate::settings::Settings;

pub use auth::{AuthRepository, AuthedUser, FakeAuthRepository, RegisterRequest};
pub use delay::{Delay, InstantDelay, TokioDelay};
pub use parking::{FakeParkingRepository, ParkingRepository};

/// Message shown when a collaborator cannot be reached.
pub const NETWORK_ERROR_MESSAGE: &str = "Terjadi masalah jaringan.";

/// Failure reported by a collaborator.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ServiceError {
    /// The backend refused the request.
    #[error("{reason}")]
    Rejected { reason: String },

    /// The backend could not be reached.
    #[error("Service unavailable: {reason}")]
    Unavailable { reason: String },
}

impl ServiceError {
    pub fn rejected(reason: impl Into<String>) -> Self {
        Self::Rejected {
            reason: reason.into(),
        }
    }

    pub fn unavailable(reason: impl Into<String>) -> Self {
        Self::Unavailable {
            reason: reason.into(),
        }
    }

    /// Text for the presenter's error field.
    pub fn user_message(&self) -> String {
        match self {
            Self::Rejected { reason } => reason.clone(),
            Self::Unavailable { .. } => NETWORK_ERROR_MESSAGE.to_string(),
        }
    }
}

/// Collaborators shared by every presenter of a session.
#[derive(Clone)]
pub struct Services {
    pub auth: Arc<dyn AuthRepository>,
    pub parking: Arc<dyn ParkingRepository>,
    pub delay: Arc<dyn Delay>,
}

impl std::fmt::Debug for Services {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Services").finish_non_exhaustive()
    }
}

impl Services {
    /// Fake collaborators on the real timer.
    pub fn fake(settings: &Settings) -> Self {
        Self::with_delay(Arc::new(TokioDelay), settings)
    }

    /// Fake collaborators on the given delay.
    pub fn with_delay(delay: Arc<dyn Delay>, settings: &Settings) -> Self {
        let timing = &settings.timing;
        Self {
            auth: Arc::new(FakeAuthRepository::new(
                Arc::clone(&delay),
                timing.login(),
                timing.register(),
            )),
            parking: Arc::new(FakeParkingRepository::new(
                Arc::clone(&delay),
                timing.clone(),
            )),
            delay,
        }
    }
}
