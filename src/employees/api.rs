//! Employee CRUD Endpoints
//! Mission: Validate input, call the store, map outcomes to status codes

use crate::employees::{
    models::{Employee, EmployeePayload},
    store::{EmployeeStore, StoreError},
};
use crate::validation::{email_regex, FieldErrors};
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Deserialize;
use serde_json::json;
use std::sync::Arc;
use tracing::{error, info};

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub employee_store: Arc<EmployeeStore>,
}

#[derive(Debug, Deserialize)]
pub struct ListQuery {
    pub q: Option<String>,
}

/// GET /api/employees?q=
pub async fn list_employees(
    State(state): State<AppState>,
    Query(params): Query<ListQuery>,
) -> Result<Json<Vec<Employee>>, ApiError> {
    let employees = state.employee_store.list(params.q.as_deref())?;
    Ok(Json(employees))
}

/// POST /api/employees
pub async fn create_employee(
    State(state): State<AppState>,
    Json(payload): Json<EmployeePayload>,
) -> Result<(StatusCode, Json<Employee>), ApiError> {
    let input = validate_payload(payload)?;

    let employee = state
        .employee_store
        .create(&input.name, &input.email, &input.position)?;

    info!("✅ Employee created: {} (id {})", employee.name, employee.id);

    Ok((StatusCode::CREATED, Json(employee)))
}

/// PUT /api/employees/:id
pub async fn update_employee(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(payload): Json<EmployeePayload>,
) -> Result<Json<Employee>, ApiError> {
    let id = parse_id(&id)?;
    let input = validate_payload(payload)?;

    let employee = state
        .employee_store
        .update(id, &input.name, &input.email, &input.position)?;

    Ok(Json(employee))
}

/// DELETE /api/employees/:id
pub async fn delete_employee(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, ApiError> {
    let id = parse_id(&id)?;

    state.employee_store.remove(id)?;

    info!("🗑️  Employee deleted: {}", id);

    Ok(StatusCode::NO_CONTENT)
}

/// Reject non-numeric ids before they reach the store (400, not 404)
fn parse_id(raw: &str) -> Result<i64, ApiError> {
    raw.parse::<i64>()
        .ok()
        .filter(|&id| id > 0)
        .ok_or(ApiError::InvalidId)
}

/// Validated employee fields, trimmed and ready for the store
#[derive(Debug)]
struct EmployeeInput {
    name: String,
    email: String,
    position: String,
}

/// Trim text fields and check them before any store call. An absent field
/// is reported the same way as an empty one.
fn validate_payload(payload: EmployeePayload) -> Result<EmployeeInput, ApiError> {
    let name = payload.name.unwrap_or_default().trim().to_string();
    let email = payload.email.unwrap_or_default().trim().to_string();
    let position = payload.position.unwrap_or_default().trim().to_string();

    let mut errors = FieldErrors::new();
    if name.is_empty() {
        errors.push("name", "Name is required");
    }
    if !email_regex().is_match(&email) {
        errors.push("email", "Invalid email address");
    }
    if position.is_empty() {
        errors.push("position", "Position is required");
    }
    errors.into_result().map_err(ApiError::Validation)?;

    Ok(EmployeeInput {
        name,
        email,
        position,
    })
}

/// Employee API errors
#[derive(Debug)]
pub enum ApiError {
    Validation(FieldErrors),
    InvalidId,
    NotFound,
    DuplicateEmail,
    Internal,
}

impl From<StoreError> for ApiError {
    fn from(e: StoreError) -> Self {
        match e {
            StoreError::DuplicateEmail => ApiError::DuplicateEmail,
            StoreError::NotFound => ApiError::NotFound,
            StoreError::Db(err) => {
                // Real cause stays server-side
                error!("Database error: {}", err);
                ApiError::Internal
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, body) = match self {
            ApiError::Validation(fields) => (
                StatusCode::BAD_REQUEST,
                json!({ "error": "Validation failed", "fields": fields }),
            ),
            ApiError::InvalidId => (StatusCode::BAD_REQUEST, json!({ "error": "Invalid id" })),
            ApiError::NotFound => (StatusCode::NOT_FOUND, json!({ "error": "Not found" })),
            ApiError::DuplicateEmail => (
                StatusCode::CONFLICT,
                json!({ "error": "Email already exists" }),
            ),
            ApiError::Internal => (
                StatusCode::INTERNAL_SERVER_ERROR,
                json!({ "error": "Internal server error" }),
            ),
        };

        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_id_accepts_positive_integers() {
        assert_eq!(parse_id("1").unwrap(), 1);
        assert_eq!(parse_id("42").unwrap(), 42);
    }

    #[test]
    fn test_parse_id_rejects_everything_else() {
        assert!(parse_id("abc").is_err());
        assert!(parse_id("1.5").is_err());
        assert!(parse_id("0").is_err());
        assert!(parse_id("-3").is_err());
        assert!(parse_id("").is_err());
    }

    #[test]
    fn test_validate_payload_trims_fields() {
        let input = validate_payload(EmployeePayload {
            name: Some("  Ada Lovelace  ".to_string()),
            email: Some(" ada@example.com ".to_string()),
            position: Some(" Engineer ".to_string()),
        })
        .unwrap();

        assert_eq!(input.name, "Ada Lovelace");
        assert_eq!(input.email, "ada@example.com");
        assert_eq!(input.position, "Engineer");
    }

    #[test]
    fn test_validate_payload_collects_all_field_errors() {
        let err = validate_payload(EmployeePayload {
            name: Some("   ".to_string()),
            email: Some("not-an-email".to_string()),
            position: Some("".to_string()),
        })
        .unwrap_err();

        let ApiError::Validation(fields) = err else {
            panic!("Expected validation error");
        };
        let json = serde_json::to_value(&fields).unwrap();
        assert!(json.get("name").is_some());
        assert!(json.get("email").is_some());
        assert!(json.get("position").is_some());
    }

    #[test]
    fn test_validate_payload_reports_absent_fields() {
        let err = validate_payload(EmployeePayload {
            name: Some("Ada Lovelace".to_string()),
            email: Some("ada@example.com".to_string()),
            position: None,
        })
        .unwrap_err();

        let ApiError::Validation(fields) = err else {
            panic!("Expected validation error");
        };
        let json = serde_json::to_value(&fields).unwrap();
        assert!(json.get("position").is_some());
        assert!(json.get("name").is_none());
        assert!(json.get("email").is_none());
    }

    #[test]
    fn test_api_error_responses() {
        let invalid_id = ApiError::InvalidId.into_response();
        assert_eq!(invalid_id.status(), StatusCode::BAD_REQUEST);

        let not_found = ApiError::NotFound.into_response();
        assert_eq!(not_found.status(), StatusCode::NOT_FOUND);

        let conflict = ApiError::DuplicateEmail.into_response();
        assert_eq!(conflict.status(), StatusCode::CONFLICT);

        let internal = ApiError::Internal.into_response();
        assert_eq!(internal.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
