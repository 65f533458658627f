//! Layered configuration for the `compute` command.
//!
//! Values are resolved with increasing precedence from [`defaults`], the TOML
//! input file ([`file`]), `-S KEY=VALUE` overrides and finally dedicated CLI
//! flags.

pub mod builder;
pub mod defaults;
pub mod file;
pub mod models;

pub use builder::build_config;
pub use models::AppConfig;
