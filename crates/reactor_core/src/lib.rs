pub mod config;
pub mod constants;
pub mod types;

pub use config::{ConfigError, ReactorConfig};
pub use constants::*;
pub use types::*;
