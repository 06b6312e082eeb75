//! HTTP surface for the user profile.

pub mod dto;
pub mod handlers;
pub mod routes;

pub use handlers::ProfileAppState;
pub use routes::profile_routes;
