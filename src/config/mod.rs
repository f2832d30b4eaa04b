//! Configuration for physlock.
//!
//! This module defines the Config struct that represents `/etc/physlock.yaml`
//! (or the file named by `$PHYSLOCK_CONFIG`). Every field has a default, so a
//! missing or empty file yields a working configuration, and unknown fields
//! are ignored.

mod model;
mod operations;


// Re-export public API
pub use model::Config;
pub use operations::{CONFIG_ENV, DEFAULT_CONFIG_PATH};
