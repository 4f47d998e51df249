pub mod config;
pub mod describe;
pub mod dump;
pub mod error;
pub mod event;
pub mod raw;
pub mod source;

pub use error::{Error, Result};
