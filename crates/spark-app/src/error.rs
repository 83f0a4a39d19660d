//! Application-level error type.
//!
//! Presenters keep their errors local (as a message in their state), so
//! [`AppError`] only shows up at the edges: settings loading, the CLI and
//! anything that wants to classify a layer error for display.

use thiserror::Error;

use crate::navigation::NavigationError;
use crate::service::ServiceError;
use crate::settings::SettingsError;
use crate::state::UnknownRoute;
use crate::validation::ValidationError;

/// Errors from every layer of the shell.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum AppError {
    /// A form field was rejected.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// A collaborator failed.
    #[error(transparent)]
    Service(#[from] ServiceError),

    /// The router ignored a request.
    #[error(transparent)]
    Navigation(#[from] NavigationError),

    /// Settings could not be loaded.
    #[error(transparent)]
    Settings(#[from] SettingsError),

    /// A route identifier did not parse.
    #[error(transparent)]
    UnknownRoute(#[from] UnknownRoute),
}

impl AppError {
    /// Check if the user can simply try again.
    pub fn is_transient(&self) -> bool {
        matches!(
            self,
            Self::Service(ServiceError::Unavailable { .. }) | Self::Navigation(_)
        )
    }

    /// Get a user-facing hint, if there is one.
    pub fn suggestion(&self) -> Option<&'static str> {
        match self {
            Self::Validation(_) => Some("Periksa kembali isian formulir."),
            Self::Service(ServiceError::Unavailable { .. }) => {
                Some("Periksa koneksi lalu coba lagi.")
            }
            Self::Settings(_) => Some("Settings fall back to defaults if the file is broken."),
            Self::UnknownRoute(_) => Some("Run `spark routes` to list route identifiers."),
            Self::Service(ServiceError::Rejected { .. }) | Self::Navigation(_) => None,
        }
    }

    /// Get the error category for display purposes.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Validation(_) => ErrorCategory::Validation,
            Self::Service(_) => ErrorCategory::Service,
            Self::Navigation(_) | Self::UnknownRoute(_) => ErrorCategory::Navigation,
            Self::Settings(_) => ErrorCategory::Settings,
        }
    }
}

/// Error category for grouping related errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    Service,
    Navigation,
    Settings,
}

impl ErrorCategory {
    /// Get a human-readable label for this category.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Validation => "Validation",
            Self::Service => "Service",
            Self::Navigation => "Navigation",
            Self::Settings => "Settings",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::Route;
    use crate::validation::{Field, validate_email};

    #[test]
    fn conversions_pick_the_right_category() {
        let err: AppError = validate_email("x")
            .into_result(Field::Email)
            .unwrap_err()
            .into();
        assert_eq!(err.category(), ErrorCategory::Validation);
        assert_eq!(err.to_string(), "Email tidak valid");

        let err = AppError::from(NavigationError::PopUpToMissing {
            target: Route::Landing,
        });
        assert_eq!(err.category().label(), "Navigation");
    }

    #[test]
    fn only_unreachable_services_and_navigation_are_transient() {
        assert!(AppError::from(ServiceError::unavailable("down")).is_transient());
        assert!(!AppError::from(ServiceError::rejected("no")).is_transient());
        assert!(AppError::from(NavigationError::AtStackFloor).is_transient());
    }
}
