pub mod adapters;
#[cfg(feature = "cli")]
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use adapters::{EutilsClient, LocalStorage};
pub use core::{etl::EtlEngine, pipeline::PubMedPipeline};
pub use domain::model::{ExtractedRow, SummaryBatch};
pub use utils::error::{EtlError, Result};
