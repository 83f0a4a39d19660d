//! Authentication collaborator.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use tracing::debug;

use super::{Delay, ServiceError};

/// A signed-in account.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthedUser {
    pub id: String,
    pub name: String,
    pub email: String,
}

/// Registration form as sent to the backend.
#[derive(Clone, PartialEq, Eq)]
pub struct RegisterRequest {
    pub name: String,
    pub email: String,
    /// ISO date ("2005-04-23"), may be empty.
    pub birth_date: String,
    /// Phone in E.164 form ("+628123456789").
    pub phone_e164: String,
    pub password: String,
}

impl std::fmt::Debug for RegisterRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RegisterRequest")
            .field("name", &self.name)
            .field("email", &self.email)
            .field("birth_date", &self.birth_date)
            .field("phone_e164", &self.phone_e164)
            .finish_non_exhaustive()
    }
}

/// Backend contract for sign-in and registration.
#[async_trait]
pub trait AuthRepository: Send + Sync {
    async fn login(&self, email: &str, password: &str) -> Result<AuthedUser, ServiceError>;

    async fn register(&self, request: RegisterRequest) -> Result<AuthedUser, ServiceError>;
}

/// In-memory stand-in that accepts any plausible input after a delay.
pub struct FakeAuthRepository {
    delay: Arc<dyn Delay>,
    login_delay: Duration,
    register_delay: Duration,
}

impl FakeAuthRepository {
    pub fn new(delay: Arc<dyn Delay>, login_delay: Duration, register_delay: Duration) -> Self {
        Self {
            delay,
            login_delay,
            register_delay,
        }
    }
}

#[async_trait]
impl AuthRepository for FakeAuthRepository {
    async fn login(&self, email: &str, password: &str) -> Result<AuthedUser, ServiceError> {
        self.delay.sleep(self.login_delay).await;

        if !email.contains('@') || password.chars().count() < 6 {
            return Err(ServiceError::rejected("Email/Password tidak valid"));
        }
        debug!(email, "fake login accepted");
        Ok(AuthedUser {
            id: "temp-id".to_string(),
            name: "User".to_string(),
            email: email.to_string(),
        })
    }

    async fn register(&self, request: RegisterRequest) -> Result<AuthedUser, ServiceError> {
        self.delay.sleep(self.register_delay).await;

        if request.name.trim().is_empty() {
            return Err(ServiceError::rejected("Nama wajib diisi"));
        }
        if !request.email.contains('@') {
            return Err(ServiceError::rejected("Email tidak valid"));
        }
        if !request.phone_e164.starts_with('+') {
            return Err(ServiceError::rejected("Kode negara wajib, contoh +62"));
        }
        if request.password.chars().count() < 6 {
            return Err(ServiceError::rejected("Password ≥ 6 karakter"));
        }
        debug!(email = %request.email, "fake registration accepted");
        Ok(AuthedUser {
            id: "temp-id".to_string(),
            name: request.name,
            email: request.email,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::service::InstantDelay;

    fn repo() -> FakeAuthRepository {
        FakeAuthRepository::new(Arc::new(InstantDelay), Duration::ZERO, Duration::ZERO)
    }

    fn request() -> RegisterRequest {
        RegisterRequest {
            name: "Barbara".to_string(),
            email: "barbara@ugm.ac.id".to_string(),
            birth_date: "2005-04-23".to_string(),
            phone_e164: "+628123456789".to_string(),
            password: "rahasia".to_string(),
        }
    }

    #[tokio::test]
    async fn login_rejects_short_password() {
        let err = repo().login("a@b.com", "abc").await.unwrap_err();
        assert!(err.user_message().contains("Password"));
    }

    #[tokio::test]
    async fn login_accepts_plausible_credentials() {
        let user = repo().login("a@b.com", "abcdef").await.unwrap();
        assert_eq!(user.email, "a@b.com");
    }

    #[tokio::test]
    async fn register_checks_phone_prefix() {
        let err = repo()
            .register(RegisterRequest {
                phone_e164: "08123".to_string(),
                ..request()
            })
            .await
            .unwrap_err();
        assert_eq!(err, ServiceError::rejected("Kode negara wajib, contoh +62"));
    }

    #[tokio::test]
    async fn register_returns_named_user() {
        let user = repo().register(request()).await.unwrap();
        assert_eq!(user.name, "Barbara");
    }

    #[test]
    fn register_request_debug_hides_password() {
        let shown = format!("{:?}", request());
        assert!(!shown.contains("rahasia"));
    }
}
