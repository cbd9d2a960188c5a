pub mod config;
pub mod error;
pub mod fixtures;
pub mod types;

pub use config::{CompanionConfig, FolioConfig};
pub use error::{FolioError, Result};
pub use fixtures::Portfolio;
pub use types::*;
