pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;
pub use config::{cli::LocalStorage, toml_config::TomlConfig};

pub use crate::core::{catalog::Catalog, selection::SelectionStore, session::TeamSession};
pub use domain::model::{Character, CharacterId, ImportPolicy, Team, Theme, TEAM_CAPACITY};
pub use utils::error::{Result, TeamError};
