//! User configuration: TOML file with named profiles.
//!
//! Settings are loaded once and passed into each scan as an immutable value,
//! keeping the scan a pure function of (vault snapshot, configuration).

pub mod loader;
pub mod types;

pub use loader::{ConfigError, ConfigLoader, default_config_path};
pub use types::{ConfigFile, LoggingConfig, Profile, ResolvedConfig};
