//! Route registration
//! Assembles the API router and applies authentication and tracking layers

use axum::{
    middleware::{from_fn, from_fn_with_state},
    routing::{get, post, put},
    Router,
};
use std::sync::Arc;
use tower_http::{cors::CorsLayer, limit::RequestBodyLimitLayer};

use crate::{
    auth::middleware::auth_middleware,
    handlers,
    middleware::{request_tracking_middleware, AppState},
};

/// Create the application router
pub fn create_router(state: Arc<AppState>) -> Router {
    // Probes stay outside the token gate
    let public_routes = Router::new()
        .route("/health", get(handlers::health::health_check))
        .route("/ready", get(handlers::health::readiness_check));

    // Credential issuance; unauthenticated by definition
    let auth_routes = Router::new()
        .route("/auth/register", post(handlers::auth::register))
        .route("/auth/login", post(handlers::auth::login));

    // Everything touching patient data requires a verified bearer token
    let protected_routes = Router::new()
        .route(
            "/patients",
            get(handlers::patient::list_patients).post(handlers::patient::create_patient),
        )
        .route(
            "/patients/{id}",
            get(handlers::patient::get_patient).put(handlers::patient::update_patient),
        )
        .route(
            "/appointments",
            get(handlers::appointment::list_appointments)
                .post(handlers::appointment::create_appointment),
        )
        // GET lists by patient id; PUT/DELETE address the appointment id
        .route(
            "/appointments/{id}",
            get(handlers::appointment::list_appointments_for_patient)
                .put(handlers::appointment::update_appointment)
                .delete(handlers::appointment::delete_appointment),
        )
        .route("/tasks", get(handlers::task::list_tasks))
        .route(
            "/tasks/{status}",
            get(handlers::task::list_tasks_by_status).put(handlers::task::update_task),
        )
        .route(
            "/tasks/markOverdue/{id}",
            put(handlers::task::mark_task_overdue),
        )
        .layer(from_fn_with_state(
            state.token_service.clone(),
            auth_middleware,
        ));

    Router::new()
        .merge(public_routes)
        .merge(auth_routes)
        .merge(protected_routes)
        .layer(from_fn(request_tracking_middleware))
        .layer(RequestBodyLimitLayer::new(1024 * 1024))
        .layer(CorsLayer::permissive())
        .with_state(state)
}
