//! HTTP API Layer
//!
//! This crate provides the REST API for the shared ledger using Axum.
//!
//! # Architecture
//!
//! - **Handlers**: Request handlers for the summary, the book and each record type
//! - **Middleware**: Request ids, tracing and request logging
//! - **DTOs**: Request bodies, converted into book inputs
//! - **Error Handling**: Consistent error responses
//!
//! The book is process-local: it lives in [`AppState`] and is lost when the
//! server stops.
//!
//! # Example
//!
//! ```rust,ignore
//! use interface_api::{create_router, config::ApiConfig};
//! use domain_ledger::FinanceBook;
//!
//! let app = create_router(FinanceBook::new(), ApiConfig::default());
//! axum::serve(listener, app).await?;
//! ```

pub mod config;
pub mod error;
pub mod extract;
pub mod middleware;
pub mod handlers;
pub mod dto;

use std::sync::Arc;

use axum::{
    Router,
    routing::{get, post, put},
    middleware as axum_middleware,
};
use tokio::sync::RwLock;
use tower_http::cors::{Any, CorsLayer};
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::trace::TraceLayer;

use domain_ledger::FinanceBook;

use crate::config::ApiConfig;
use crate::handlers::{book, expenses, health, incomes, participants, summary, transfers};
use crate::middleware::request_logging;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    /// The process-local book; edits take the write lock
    pub book: Arc<RwLock<FinanceBook>>,
    pub config: ApiConfig,
}

/// Creates the main API router
///
/// # Arguments
///
/// * `book` - Initial contents of the shared book
/// * `config` - API configuration
///
/// # Returns
///
/// Configured Axum router with all routes and middleware
pub fn create_router(book: FinanceBook, config: ApiConfig) -> Router {
    let state = AppState {
        book: Arc::new(RwLock::new(book)),
        config,
    };

    let public_routes = Router::new().route("/health", get(health::health_check));

    let book_routes = Router::new()
        .route(
            "/",
            get(book::export_book)
                .put(book::replace_book)
                .delete(book::reset_book),
        )
        .route("/summary", get(summary::book_summary));

    let participant_routes = Router::new()
        .route(
            "/",
            get(participants::list_participants).post(participants::create_participant),
        )
        .route(
            "/:id",
            put(participants::update_participant).delete(participants::remove_participant),
        );

    let expense_routes = Router::new()
        .route("/", get(expenses::list_expenses).post(expenses::create_expense))
        .route("/:id", put(expenses::update_expense).delete(expenses::remove_expense));

    let income_routes = Router::new()
        .route("/", get(incomes::list_incomes).post(incomes::create_income))
        .route("/:id", put(incomes::update_income).delete(incomes::remove_income));

    let transfer_routes = Router::new()
        .route("/", get(transfers::list_transfers).post(transfers::create_transfer))
        .route("/:id", put(transfers::update_transfer).delete(transfers::remove_transfer));

    let api_routes = Router::new()
        .route("/summary", post(summary::compute))
        .nest("/book", book_routes)
        .nest("/participants", participant_routes)
        .nest("/expenses", expense_routes)
        .nest("/incomes", income_routes)
        .nest("/transfers", transfer_routes);

    // Layers run bottom-up: the request id is set before logging sees it
    Router::new()
        .merge(public_routes)
        .nest("/api/v1", api_routes)
        .layer(axum_middleware::from_fn(request_logging))
        .layer(TraceLayer::new_for_http())
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state)
}
