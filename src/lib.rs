//! # `todo_cli`
//!
//! A personal todo tracker with urgency levels and groups.
//!
//! State lives in a single JSON document (see [`storage`]). All rules about
//! todos and groups are in [`todos`]; the [`cli`] module only parses
//! arguments and renders results.

#[cfg(feature = "cli")]
pub mod cli;
pub mod config;
pub mod error;
pub mod event_log;
#[cfg(feature = "cli")]
pub mod logging;
pub mod paths;
pub mod storage;
pub mod testing;
pub mod todos;
pub mod traits;

pub use error::{Error, ErrorKind, Result};
pub use storage::JsonFileStore;
pub use traits::StateStore;

/// Library version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_exists() {
        assert!(!VERSION.is_empty());
    }
}
