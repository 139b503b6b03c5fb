pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod export;
pub mod utils;

pub use app::sim_pipeline::SimPipeline;
pub use config::{CliConfig, ScrapeConfig};
pub use core::engine::ScrapeEngine;
pub use utils::error::{Result, ScrapeError};
