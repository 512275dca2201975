//! Configuration
//!
//! - Path resolution for the settings file and audit log
//! - User settings persistence

pub mod paths;
pub mod settings;

pub use paths::LedgerPaths;
pub use settings::Settings;
