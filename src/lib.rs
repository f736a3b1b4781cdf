pub mod config;
pub mod error;
pub mod extractor;
pub mod geocoding;
pub mod pipeline;
pub mod presenter;
pub mod ranking;

pub use error::{Error, Result};
