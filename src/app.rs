//! Router Assembly
//! Mission: Wire route groups, auth gate and CORS around injected state

use crate::auth::{api as auth_api, auth_middleware, AuthState, JwtHandler, UserStore};
use crate::db::Database;
use crate::employees::{api as employees_api, AppState, EmployeeStore};
use axum::{
    http::{header, HeaderValue, Method},
    middleware,
    routing::{get, post, put},
    Json, Router,
};
use serde_json::json;
use std::sync::Arc;
use tower_http::{
    cors::CorsLayer,
    trace::TraceLayer,
};
use tracing::warn;

/// Build the full application router. Stores are injected so tests can run
/// against an isolated database.
pub fn create_app(
    db: Database,
    user_store: Arc<UserStore>,
    jwt_handler: Arc<JwtHandler>,
    allowed_origin: Option<&str>,
) -> Router {
    let auth_state = AuthState {
        user_store,
        jwt_handler: jwt_handler.clone(),
    };
    let state = AppState {
        employee_store: Arc::new(EmployeeStore::new(db)),
    };

    let auth_router = Router::new()
        .route("/api/auth/login", post(auth_api::login))
        .with_state(auth_state);

    // Every employee route sits behind the bearer-token gate
    let protected_routes = Router::new()
        .route(
            "/api/employees",
            get(employees_api::list_employees).post(employees_api::create_employee),
        )
        .route(
            "/api/employees/:id",
            put(employees_api::update_employee).delete(employees_api::delete_employee),
        )
        .route_layer(middleware::from_fn_with_state(jwt_handler, auth_middleware))
        .with_state(state);

    let public_routes = Router::new().route("/health", get(health_check));

    Router::new()
        .merge(public_routes)
        .merge(protected_routes)
        .merge(auth_router)
        .layer(cors_layer(allowed_origin))
        .layer(TraceLayer::new_for_http())
}

/// Health check endpoint
async fn health_check() -> Json<serde_json::Value> {
    Json(json!({ "ok": true }))
}

/// Lock CORS down to the configured frontend origin; stay permissive when
/// none is configured (local development).
fn cors_layer(allowed_origin: Option<&str>) -> CorsLayer {
    let origin = allowed_origin.and_then(|o| match o.parse::<HeaderValue>() {
        Ok(value) => Some(value),
        Err(_) => {
            warn!("Ignoring unparseable FRONTEND_URL: {}", o);
            None
        }
    });

    match origin {
        Some(origin) => CorsLayer::new()
            .allow_origin(origin)
            .allow_methods([
                Method::GET,
                Method::POST,
                Method::PUT,
                Method::DELETE,
                Method::OPTIONS,
            ])
            .allow_headers([header::AUTHORIZATION, header::CONTENT_TYPE]),
        None => CorsLayer::permissive(),
    }
}
