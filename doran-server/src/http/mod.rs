pub mod error;
pub mod handlers;
pub mod metrics;
pub mod rate_limit;
pub mod serve;

pub use error::ApiError;
pub use serve::{api_router, serve, AppState};

pub type Result<T, E = ApiError> = std::result::Result<T, E>;
