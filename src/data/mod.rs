//! Dataset loading and saving

mod error;
mod loader;

pub use error::{DataError, DataResult};
pub use loader::{
    Dataset, DatasetLoader, DatasetWriter, DERIVED_COLUMNS, SENTIMENT_COLUMN, TEXT_COLUMN,
    USER_COLUMN,
};
