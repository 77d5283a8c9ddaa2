//! NICE-OBF REST API
//!
//! HTTP boundary in front of the transformation dispatcher. It validates the
//! request, hands the code to the back-end of its type, and wraps the result
//! in the `{ success, data | error }` envelope.
//!
//! ## Endpoints
//!
//! - `POST /api/obfuscate` - Transform JavaScript, CSS or HTML
//! - `GET /api/health` - Health check
//!
//! `OPTIONS` is accepted on every path as a CORS preflight.

pub mod config;
pub mod cors;
pub mod handlers;
pub mod models;

use axum::{
    extract::DefaultBodyLimit,
    middleware,
    routing::{on, post, MethodFilter},
    Router,
};
use chrono::{DateTime, Utc};
use niceobf_transformer::Dispatcher;
use std::sync::Arc;
use tower_http::trace::TraceLayer;

/// Application state shared across handlers. Read-only after startup.
#[derive(Clone)]
pub struct AppState {
    /// Stateless dispatcher shared by all requests
    pub dispatcher: Arc<Dispatcher>,

    /// Deployment environment reported by the health endpoint
    pub environment: String,

    /// Largest request body accepted
    pub max_body_bytes: usize,

    pub started_at: DateTime<Utc>,
}

impl AppState {
    /// Create new application state around the bundled back-ends
    pub fn new(environment: impl Into<String>, max_body_bytes: usize) -> Self {
        Self::with_dispatcher(Dispatcher::new(), environment, max_body_bytes)
    }

    pub fn with_dispatcher(
        dispatcher: Dispatcher,
        environment: impl Into<String>,
        max_body_bytes: usize,
    ) -> Self {
        Self {
            dispatcher: Arc::new(dispatcher),
            environment: environment.into(),
            max_body_bytes,
            started_at: Utc::now(),
        }
    }
}

/// Create the API router
pub fn create_router(state: AppState) -> Router {
    let body_limit = state.max_body_bytes;
    let state = Arc::new(state);

    let router = Router::new()
        // Health check, GET only so HEAD falls through to 405
        .route(
            "/api/health",
            on(MethodFilter::GET, handlers::health_handler)
                .fallback(handlers::method_not_allowed_handler),
        )
        // Transformation
        .route(
            "/api/obfuscate",
            post(handlers::transform_handler).fallback(handlers::method_not_allowed_handler),
        )
        .fallback(handlers::not_found_handler)
        // Middleware
        .layer(DefaultBodyLimit::max(body_limit))
        .layer(middleware::from_fn(cors::preflight_middleware));

    cors::header_layers()
        .into_iter()
        .fold(router, |router, layer| router.layer(layer))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
