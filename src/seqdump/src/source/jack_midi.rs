use std::sync::mpsc::{channel, Receiver, Sender};

use tracing::{debug, info, warn};

use super::EventSource;
use crate::error::Result;
use crate::event::SeqEvent;
use crate::raw::decode;

#[derive(Debug, PartialEq)]
enum Slot {
	Event(SeqEvent),
	// enter or eof on stdin
	Stop,
	Shutdown(String),
}

struct Capture {
	midi_in: jack::Port<jack::MidiIn>,
	tx: Sender<Slot>,
}

impl jack::ProcessHandler for Capture {
	fn process(&mut self, _: &jack::Client, ps: &jack::ProcessScope) -> jack::Control {
		for event in self.midi_in.iter(ps) {
			if self.tx.send(Slot::Event(decode(event.bytes))).is_err() {
				return jack::Control::Quit;
			}
		}
		jack::Control::Continue
	}
}

struct Watch {
	tx: Sender<Slot>,
}

impl jack::NotificationHandler for Watch {
	fn shutdown(&mut self, _status: jack::ClientStatus, reason: &str) {
		let _ = self.tx.send(Slot::Shutdown(reason.to_string()));
	}
}

/// JACK midi input port. Raw messages are decoded in the process callback
/// and handed to the reader over a channel.
///
/// The stream closes when a line (or EOF) arrives on stdin, or when the
/// server shuts the client down.
pub struct JackSource {
	rx: Receiver<Slot>,
	client: Option<jack::AsyncClient<Watch, Capture>>,
}

impl JackSource {
	pub fn open(client_name: &str, port_name: &str) -> Result<Self> {
		let (client, _status) =
			jack::Client::new(client_name, jack::ClientOptions::NO_START_SERVER)?;
		let midi_in = client.register_port(port_name, jack::MidiIn::default())?;
		let (tx, rx) = channel();

		let quit = tx.clone();
		std::thread::spawn(move || {
			let mut line = String::new();
			let _ = std::io::stdin().read_line(&mut line);
			let _ = quit.send(Slot::Stop);
		});

		let watch = Watch { tx: tx.clone() };
		let active_client = client.activate_async(watch, Capture { midi_in, tx })?;
		info!(
			"listening on {}:{}, press enter to stop",
			active_client.as_client().name(),
			port_name,
		);
		Ok(Self {
			rx,
			client: Some(active_client),
		})
	}

	fn close(&mut self) -> Result<()> {
		if let Some(active_client) = self.client.take() {
			debug!("deactivating jack client");
			active_client.deactivate()?;
		}
		Ok(())
	}
}

impl EventSource for JackSource {
	fn next_event(&mut self) -> Result<Option<SeqEvent>> {
		if self.client.is_none() {
			return Ok(None);
		}
		match self.rx.recv() {
			Ok(Slot::Event(event)) => Ok(Some(event)),
			Ok(Slot::Shutdown(reason)) => {
				warn!("jack server shut the client down: {}", reason);
				// the server is gone, so the drop-time deactivate is unchecked
				self.client = None;
				Ok(None)
			}
			Ok(Slot::Stop) | Err(_) => {
				self.close()?;
				Ok(None)
			}
		}
	}
}
