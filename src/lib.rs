pub mod adapters;
pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use adapters::http::{build_client, HttpDataset, HttpMedia};
pub use app::render::OutputFormat;
pub use config::{cli::LocalStorage, toml_config::AppConfig};
pub use crate::core::{create::DrawMode, engine::DogEngine};
pub use utils::error::{DogError, Result};
