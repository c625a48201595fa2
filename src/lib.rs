pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::cli::{ConsoleAlerts, FixedLocationProvider};
#[cfg(feature = "cli")]
pub use config::CliConfig;
pub use config::toml_config::TomlScreenConfig;

pub use core::{api::HttpOrphanageApi, navigation::NavigationStack, screen::OrphanagesMapScreen};
pub use utils::error::{MapError, Result};
