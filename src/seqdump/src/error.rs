//! Error types for the sequencer monitor.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
	#[error("IO error: {0}")]
	Io(#[from] std::io::Error),

	#[error("ALSA sequencer error: {0}")]
	Alsa(#[from] alsa::Error),

	#[error("JACK error: {0}")]
	Jack(#[from] jack::Error),

	#[error("Argument error: {0}")]
	Args(String),

	#[error("Invalid config: {0}")]
	InvalidConfig(String),

	#[error("Invalid name {0:?}: contains a NUL byte")]
	InvalidName(String),
}

pub type Result<T> = std::result::Result<T, Error>;
