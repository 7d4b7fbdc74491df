pub mod cli;
pub mod error;
pub mod report;

pub use error::{Error, Result};
