use chrono::{DateTime, Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Identity asserted by the sign-in provider
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    pub sub: String,
    /// Display name; optional for providers that only send a subject
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub exp: i64,
    pub iat: i64,
}

impl Claims {
    /// Lifetimes past chrono's range saturate at the latest representable instant
    pub fn new(sub: impl Into<String>, name: Option<String>, expiry_hours: u64) -> Self {
        let now = Utc::now();
        let lifetime = i64::try_from(expiry_hours)
            .ok()
            .and_then(Duration::try_hours)
            .unwrap_or(Duration::MAX);
        let exp = now
            .checked_add_signed(lifetime)
            .unwrap_or(DateTime::<Utc>::MAX_UTC)
            .timestamp();

        Self {
            sub: sub.into(),
            name,
            exp,
            iat: now.timestamp(),
        }
    }

    pub fn display_name(&self) -> &str {
        self.name.as_deref().filter(|n| !n.trim().is_empty()).unwrap_or(&self.sub)
    }
}

#[derive(Debug, Error)]
pub enum JwtError {
    #[error("JWT secret not configured")]
    InvalidSecret,

    #[error("JWT generation error: {0}")]
    TokenGeneration(String),

    #[error("Invalid JWT token: {0}")]
    InvalidToken(String),
}

pub fn generate_jwt(claims: &Claims, secret: &str) -> Result<String, JwtError> {
    if secret.is_empty() {
        return Err(JwtError::InvalidSecret);
    }

    let encoding_key = EncodingKey::from_secret(secret.as_bytes());
    encode(&Header::default(), claims, &encoding_key).map_err(|e| JwtError::TokenGeneration(e.to_string()))
}

pub fn validate_jwt(token: &str, secret: &str) -> Result<Claims, JwtError> {
    if secret.is_empty() {
        return Err(JwtError::InvalidSecret);
    }

    let decoding_key = DecodingKey::from_secret(secret.as_bytes());
    decode::<Claims>(token, &decoding_key, &Validation::default())
        .map(|data| data.claims)
        .map_err(|e| JwtError::InvalidToken(e.to_string()))
}

/// Sign-in state as seen by the dashboard
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthStatus {
    Loading,
    SignedOut,
    SignedIn { display_name: Option<String> },
}

/// What the top level of the dashboard renders
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Gate {
    Loading,
    SignIn,
    Dashboard,
}

impl AuthStatus {
    pub fn gate(&self) -> Gate {
        match self {
            AuthStatus::Loading => Gate::Loading,
            AuthStatus::SignedOut => Gate::SignIn,
            AuthStatus::SignedIn { .. } => Gate::Dashboard,
        }
    }

    pub fn is_signed_in(&self) -> bool {
        matches!(self, AuthStatus::SignedIn { .. })
    }

    pub fn display_name(&self) -> Option<&str> {
        match self {
            AuthStatus::SignedIn { display_name } => display_name.as_deref(),
            _ => None,
        }
    }
}
