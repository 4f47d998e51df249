use crate::error::{Error, Result};

pub const DEFAULT_CLIENT_NAME: &str = "MIDI message terminal";
pub const DEFAULT_PORT_NAME: &str = "in";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Backend {
	#[default]
	Alsa,
	Jack,
}

impl std::str::FromStr for Backend {
	type Err = Error;

	fn from_str(s: &str) -> Result<Self> {
		match s {
			"alsa" => Ok(Self::Alsa),
			"jack" => Ok(Self::Jack),
			x => Err(Error::InvalidConfig(format!(
				"unknown backend {:?}, expected alsa or jack",
				x
			))),
		}
	}
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Config {
	pub backend: Backend,
	pub client_name: String,
	pub port_name: String,
}

impl Default for Config {
	fn default() -> Self {
		Self {
			backend: Backend::default(),
			client_name: DEFAULT_CLIENT_NAME.to_string(),
			port_name: DEFAULT_PORT_NAME.to_string(),
		}
	}
}

impl Config {
	pub fn from_args() -> Result<Self> {
		let args = aarg::parse().map_err(|e| Error::Args(format!("{:?}", e)))?;
		Self::from_flags(|flag| args.get(flag).and_then(|vs| vs.first().cloned()))
	}

	/// Build from a flag lookup, `lookup("--backend")` returning the first
	/// value given for that flag.
	pub fn from_flags(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
		let mut config = Self::default();
		if let Some(backend) = lookup("--backend") {
			config.backend = backend.parse()?;
		}
		if let Some(name) = lookup("--client-name") {
			config.client_name = name;
		}
		if let Some(name) = lookup("--port-name") {
			config.port_name = name;
		}
		if config.client_name.is_empty() || config.port_name.is_empty() {
			return Err(Error::InvalidConfig("empty client or port name".to_string()));
		}
		Ok(config)
	}
}
