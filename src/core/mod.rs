pub mod etl;
pub mod pipeline;
pub mod writer;

pub use crate::domain::model::{ExtractedRow, SummaryBatch};
pub use crate::domain::ports::{ConfigProvider, Pipeline, Storage};
pub use crate::utils::error::Result;
