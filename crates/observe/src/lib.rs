//! This crate is intended to contain code that is required to provide or
//! improve the observability of the client. For now that is the logging setup
//! shared between the binary and the tests.
pub mod config;
pub mod panic_hook;
pub mod tracing;

pub use config::Config;
