pub mod config;
pub mod error;
pub mod estimate;
pub mod logging;
pub mod model;
pub mod server;

pub use error::{Error, Result};
