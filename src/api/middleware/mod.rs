//! HTTP middleware for the API layer.

mod error_handler;
mod logging;
mod request_id;

pub use error_handler::error_status_code;
pub use logging::logging_middleware;
pub use request_id::{REQUEST_ID_HEADER, RequestId, request_id_middleware};
