//! HTTP surface for the metered processing action.

pub mod dto;
pub mod handlers;
pub mod routes;

pub use handlers::VideoAppState;
pub use routes::video_routes;
