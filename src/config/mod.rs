//! Configuration management
//!
//! Process-wide settings read from the environment. Only the binary
//! consults these; the library takes its collaborators by injection.

pub mod settings;

pub use settings::{Config, GLOBAL_CONFIG};
