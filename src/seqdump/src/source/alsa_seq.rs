use std::ffi::CString;

use alsa::seq::{self, EventType, Seq};
use tracing::{debug, info, warn};

use super::EventSource;
use crate::error::{Error, Result};
use crate::event::{Control, ControlKind, Note, NoteKind, SeqEvent};

// snd_seq_event_input reports a client input overrun this way
const ENOSPC: i32 = 28;

fn c_name(name: &str) -> Result<CString> {
	CString::new(name).map_err(|_| Error::InvalidName(name.to_string()))
}

/// Blocking input port on the alsa sequencer.
pub struct AlsaSource {
	seq: Seq,
}

impl AlsaSource {
	pub fn open(client_name: &str, port_name: &str) -> Result<Self> {
		let seq = Seq::open(None, Some(alsa::Direction::Capture), false)?;
		seq.set_client_name(&c_name(client_name)?)?;
		let port = seq.create_simple_port(
			&c_name(port_name)?,
			seq::PortCap::WRITE | seq::PortCap::SUBS_WRITE,
			seq::PortType::APPLICATION,
		)?;
		let client = seq.client_id()?;
		info!(client, port, "listening on {}:{} ({})", client, port, client_name);
		Ok(Self { seq })
	}
}

impl EventSource for AlsaSource {
	fn next_event(&mut self) -> Result<Option<SeqEvent>> {
		let mut input = self.seq.input();
		loop {
			match input.event_input() {
				Ok(ev) => return Ok(Some(convert(&ev))),
				Err(e) if e.errno() == ENOSPC => {
					warn!("sequencer input overrun, events were dropped");
				}
				Err(e) => return Err(e.into()),
			}
		}
	}
}

fn convert(ev: &seq::Event) -> SeqEvent {
	let raw = ev.get_type() as u8;
	let event = match ev.get_type() {
		EventType::Noteon | EventType::Noteoff => match ev.get_data::<seq::EvNote>() {
			Some(data) => {
				let kind = if matches!(ev.get_type(), EventType::Noteon) {
					NoteKind::On
				} else {
					NoteKind::Off
				};
				SeqEvent::Note(kind, Note {
					channel: data.channel,
					note: data.note,
					velocity: data.velocity,
				})
			}
			None => SeqEvent::Unknown(raw),
		},
		EventType::Controller | EventType::Pgmchange | EventType::Pitchbend => {
			match ev.get_data::<seq::EvCtrl>() {
				Some(data) => {
					let kind = match ev.get_type() {
						EventType::Controller => ControlKind::Controller,
						EventType::Pgmchange => ControlKind::ProgramChange,
						_ => ControlKind::PitchBend,
					};
					SeqEvent::Control(kind, Control {
						channel: data.channel,
						param: data.param,
						value: data.value,
					})
				}
				None => SeqEvent::Unknown(raw),
			}
		}
		_ => SeqEvent::from_raw_kind(raw),
	};
	debug!(?event, "sequencer event");
	event
}
