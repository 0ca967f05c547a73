//! ERC Sentry API Module
//! REST API for standards browsing, source scanning, and recommendations

pub mod handlers;
pub mod middleware;
pub mod routes;
pub mod types;

pub use middleware::start_cleanup_task;
pub use routes::create_router;
pub use types::*;
