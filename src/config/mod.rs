// Configuration layer - environment-sourced settings and bootstrap helpers
mod database;
mod logging;
mod settings;

pub use database::init_database;
pub use logging::{init_logging, LoggingConfig, LoggingError};
pub use settings::Settings;
