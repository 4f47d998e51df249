use midk_seqdump::config::{Backend, Config};
use midk_seqdump::dump::dump;
use midk_seqdump::source::{AlsaSource, EventSource, JackSource};
use midk_seqdump::Result;
use tracing::error;
use tracing_subscriber::EnvFilter;

fn run() -> Result<u64> {
	let config = Config::from_args()?;
	let mut source: Box<dyn EventSource> = match config.backend {
		Backend::Alsa => Box::new(AlsaSource::open(&config.client_name, &config.port_name)?),
		Backend::Jack => Box::new(JackSource::open(&config.client_name, &config.port_name)?),
	};
	let stdout = std::io::stdout();
	dump(&mut source, &mut stdout.lock())
}

fn main() {
	tracing_subscriber::fmt()
		.with_env_filter(
			EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
		)
		.with_writer(std::io::stderr)
		.init();

	if let Err(e) = run() {
		error!("{}", e);
		std::process::exit(1);
	}
}
