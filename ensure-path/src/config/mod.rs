//! Configuration system for ensure-path.
//!
//! Persistent defaults for the CLI can come from:
//! - A YAML configuration file (`~/.ensure-path/config.yaml` or an explicit file)
//! - `ENSURE_PATH_*` environment variables
//! - Programmatic overrides via [`ConfigBuilder::with_config`]
//!
//! # Configuration Precedence
//!
//! Highest to lowest:
//!
//! 1. Programmatic overrides (the CLI passes its flags here)
//! 2. Environment variables
//! 3. Configuration file
//! 4. Built-in defaults
//!
//! # Examples
//!
//! ```no_run
//! use ensure_path::config::ConfigBuilder;
//!
//! let config = ConfigBuilder::new()
//!     .with_config_file("/etc/ensure-path.yaml")
//!     .build()
//!     .unwrap();
//!
//! println!("reading {}", config.variable());
//! ```

pub mod builder;
pub mod environment;
pub mod loader;
pub mod schema;

pub use builder::ConfigBuilder;
pub use environment::EnvironmentConfig;
pub use loader::{ConfigLoader, ConfigSource};
pub use schema::Config;
