pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::CliConfig;

pub use crate::config::{toml_config::GuideConfig, OutputFormat};
pub use crate::core::dispatcher::Dispatcher;
pub use crate::core::engine::GuideEngine;
pub use crate::core::session::{Session, SharedSession};
pub use crate::domain::model::{BatchReport, CommandKind, CommandResult, Outcome};
pub use crate::utils::error::{GuideError, Result};
