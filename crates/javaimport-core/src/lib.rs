//! javaimport-core: Core types, configuration, and logging for javaimport.

pub mod config;
pub mod error;
pub mod filter;
pub mod logging;
pub mod paths;

pub use config::{Config, FilterConfig};
pub use error::{Error, Result};
