pub mod etl;
pub mod mapper;
pub mod normalize;
pub mod pipeline;
pub mod render;
pub mod schema;

pub use crate::domain::model::{OutputRow, Record, TransformResult};
pub use crate::domain::ports::{ConfigProvider, Pipeline, Storage};
pub use crate::utils::error::Result;
