/// Database connection and table management
pub mod database;

/// Server settings and category seeds loaded from config.toml and the environment
pub mod settings;

pub use settings::{CategorySeed, ServerSettings, Settings};
