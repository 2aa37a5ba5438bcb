pub mod create;
pub mod dataset;
pub mod engine;
pub mod find;
pub mod stats;

pub use crate::domain::model::{DogMatch, DogRecord, NameStats, NewDog};
pub use crate::domain::ports::{ConfigProvider, DatasetSource, MediaSource, MediaStream, Storage};
pub use crate::utils::error::Result;
