//! API module for HTTP handlers.
//!
//! Route definitions, request/response types, error mapping, and the
//! middleware stack.

pub mod dto;
pub mod error;
pub mod handlers;
pub mod middleware;

pub use dto::{ConversionResponse, RangeConversionsResponse, RomanNumeralQuery};
pub use error::{ApiErrorResponse, ErrorBody};
pub use handlers::{MISSING_PARAMETERS_HELP, index_html, roman_numeral};
pub use middleware::track_request;

use axum::{Router, routing::get};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

/// Builds the service router with its full middleware stack.
///
/// Kept separate from `main` so integration tests can drive the whole
/// HTTP surface through `tower::ServiceExt` without binding a socket.
#[must_use]
pub fn router() -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(index_html))
        .route("/romannumeral", get(roman_numeral))
        .layer(axum::middleware::from_fn(track_request))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
}
