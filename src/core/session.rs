use actix_web::{dev::Payload, FromRequest, HttpMessage, HttpRequest};
use serde::{Deserialize, Serialize};
use std::future::{ready, Ready};

use crate::core::{AppError, Result};

/// Header the web client uses to announce which side of the product it is on
pub const ROLE_HEADER: &str = "X-Ketravelan-Role";

/// Which side of the product the caller is using
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UserRole {
    #[default]
    Traveler,
    Agent,
}

impl UserRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Traveler => "traveler",
            Self::Agent => "agent",
        }
    }
}

impl std::fmt::Display for UserRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for UserRole {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "traveler" => Ok(Self::Traveler),
            "agent" => Ok(Self::Agent),
            other => Err(AppError::validation(format!("Unknown role: {}", other))),
        }
    }
}

/// Per-request session context.
///
/// Built fresh for every request by the session middleware; there is no
/// process-wide "current user". Callers start authenticated as travelers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Session {
    pub authenticated: bool,
    pub role: UserRole,
}

impl Default for Session {
    fn default() -> Self {
        Self {
            authenticated: true,
            role: UserRole::Traveler,
        }
    }
}

impl Session {
    pub fn new(role: UserRole) -> Self {
        Self {
            authenticated: true,
            role,
        }
    }

    /// Returns a copy of the session with a different role
    pub fn with_role(self, role: UserRole) -> Self {
        Self { role, ..self }
    }

    pub fn signed_out() -> Self {
        Self {
            authenticated: false,
            role: UserRole::Traveler,
        }
    }

    /// Reject anyone who is not a signed-in agent
    pub fn require_agent(&self) -> Result<()> {
        if !self.authenticated {
            return Err(AppError::forbidden("Sign in required"));
        }
        if self.role != UserRole::Agent {
            return Err(AppError::forbidden(format!(
                "Agent role required, current role is {}",
                self.role
            )));
        }
        Ok(())
    }
}

impl FromRequest for Session {
    type Error = AppError;
    type Future = Ready<Result<Self>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        let session = req
            .extensions()
            .get::<Session>()
            .copied()
            .unwrap_or_default();
        ready(Ok(session))
    }
}
