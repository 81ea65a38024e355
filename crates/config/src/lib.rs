// Configuration loading

pub mod actions;
pub mod error;
pub mod settings;

pub use actions::{ActionEntry, ActionTable};
pub use error::ConfigError;
pub use settings::Settings;
