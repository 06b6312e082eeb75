//! Account query/command handlers.

mod get_profile;
mod update_profile;

pub use get_profile::{GetProfileHandler, GetProfileQuery};
pub use update_profile::{UpdateProfileCommand, UpdateProfileHandler};
