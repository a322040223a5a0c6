//! Authentication API Endpoints
//! Mission: Exchange credentials for a signed token

use crate::auth::{
    jwt::JwtHandler,
    models::{LoginRequest, LoginResponse},
    user_store::UserStore,
};
use crate::validation::{email_regex, FieldErrors};
use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use std::sync::Arc;
use tracing::{error, info, warn};

/// Shared auth state
#[derive(Clone)]
pub struct AuthState {
    pub user_store: Arc<UserStore>,
    pub jwt_handler: Arc<JwtHandler>,
}

/// Login endpoint - POST /api/auth/login
pub async fn login(
    State(state): State<AuthState>,
    Json(payload): Json<LoginRequest>,
) -> Result<Json<LoginResponse>, AuthApiError> {
    let (email, password) = validate_login(payload)?;

    let user = state
        .user_store
        .authenticate(&email, &password)
        .map_err(|e| {
            error!("Credential check failed: {:#}", e);
            AuthApiError::Internal
        })?
        .ok_or_else(|| {
            warn!("❌ Failed login attempt: {}", email);
            AuthApiError::InvalidCredentials
        })?;

    let token = state.jwt_handler.issue(&user).map_err(|e| {
        error!("Token issuance failed: {:#}", e);
        AuthApiError::Internal
    })?;

    info!("✅ Login successful: {}", user.email);

    Ok(Json(LoginResponse { token }))
}

/// Check the login body and hand back the credentials to authenticate with.
/// The email is trimmed here so the validated form is also the one looked up.
fn validate_login(payload: LoginRequest) -> Result<(String, String), AuthApiError> {
    let email = payload.email.unwrap_or_default().trim().to_string();
    let password = payload.password.unwrap_or_default();

    let mut errors = FieldErrors::new();
    if !email_regex().is_match(&email) {
        errors.push("email", "Invalid email address");
    }
    if password.len() < 6 {
        errors.push("password", "Password must be at least 6 characters");
    }
    errors.into_result().map_err(AuthApiError::Validation)?;

    Ok((email, password))
}

/// Auth API errors
#[derive(Debug)]
pub enum AuthApiError {
    Validation(FieldErrors),
    InvalidCredentials,
    Internal,
}

impl IntoResponse for AuthApiError {
    fn into_response(self) -> Response {
        let (status, body) = match self {
            AuthApiError::Validation(fields) => (
                StatusCode::BAD_REQUEST,
                json!({ "error": "Validation failed", "fields": fields }),
            ),
            // One message for unknown email and wrong password alike
            AuthApiError::InvalidCredentials => (
                StatusCode::UNAUTHORIZED,
                json!({ "error": "Invalid credentials" }),
            ),
            AuthApiError::Internal => (
                StatusCode::INTERNAL_SERVER_ERROR,
                json!({ "error": "Internal server error" }),
            ),
        };

        (status, Json(body)).into_response()
    }
}
