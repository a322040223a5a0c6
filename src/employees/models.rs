//! Employee data structures

use serde::{Deserialize, Serialize};

/// Employee row. Timestamps are RFC 3339 UTC strings, so lexicographic
/// order matches chronological order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Employee {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub position: String,
    pub created_at: String,
    pub updated_at: String,
}

/// Create/update request body. Fields arrive optional so an absent field
/// fails validation with field-level detail instead of a deserialize error.
#[derive(Debug, Default, Deserialize)]
pub struct EmployeePayload {
    pub name: Option<String>,
    pub email: Option<String>,
    pub position: Option<String>,
}
