pub mod loader;
pub mod types;
pub mod validation;

pub use loader::{load_profile, load_profile_async, parse_profile, ProfileFormat};
pub use types::{Industry, StartupProfile};
pub use validation::validate_profile;
