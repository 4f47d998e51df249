use crate::event::*;

/// Decode one complete MIDI 1.0 message into the event the alsa sequencer
/// would have delivered for it. Never fails; anything undecodable is
/// `SeqEvent::Unknown(SND_SEQ_EVENT_NONE)`.
pub fn decode(bytes: &[u8]) -> SeqEvent {
	let status = match bytes.first() {
		Some(&x) if x >= 0x80 => x,
		_ => return SeqEvent::Unknown(SND_SEQ_EVENT_NONE),
	};
	let channel = status & 0x0f;
	// data bytes, if present; a status byte in a data slot is malformed
	let data = |idx: usize| bytes.get(idx).copied().filter(|x| *x < 0x80);
	let (d1, d2) = (data(1), data(2));
	match (status & 0xf0, d1, d2) {
		(0x90, Some(note), Some(velocity)) => SeqEvent::note_on(channel, note, velocity),
		(0x80, Some(note), Some(velocity)) => SeqEvent::note_off(channel, note, velocity),
		(0xa0, Some(_), Some(_)) => SeqEvent::Unknown(SND_SEQ_EVENT_KEYPRESS),
		(0xb0, Some(param), Some(value)) => {
			SeqEvent::controller(channel, param as u32, value as i32)
		}
		(0xc0, Some(program), _) => SeqEvent::program_change(channel, program as i32),
		(0xd0, Some(_), _) => SeqEvent::Unknown(SND_SEQ_EVENT_CHANPRESS),
		(0xe0, Some(lsb), Some(msb)) => {
			let bend = ((msb as i32) << 7) | lsb as i32;
			SeqEvent::pitch_bend(channel, bend - 8192)
		}
		(0xf0, _, _) => decode_system(status),
		_ => SeqEvent::Unknown(SND_SEQ_EVENT_NONE),
	}
}

fn decode_system(status: u8) -> SeqEvent {
	match status {
		0xf0 => SeqEvent::Unknown(SND_SEQ_EVENT_SYSEX),
		0xf1 => SeqEvent::Unknown(SND_SEQ_EVENT_QFRAME),
		0xf2 => SeqEvent::Unknown(SND_SEQ_EVENT_SONGPOS),
		0xf3 => SeqEvent::Unknown(SND_SEQ_EVENT_SONGSEL),
		0xf6 => SeqEvent::Unknown(SND_SEQ_EVENT_TUNE_REQUEST),
		0xf8 => SeqEvent::Realtime(Realtime::Clock),
		0xf9 => SeqEvent::Realtime(Realtime::Tick),
		0xfa => SeqEvent::Realtime(Realtime::Start),
		0xfb => SeqEvent::Realtime(Realtime::Continue),
		0xfc => SeqEvent::Realtime(Realtime::Stop),
		0xfe => SeqEvent::Unknown(SND_SEQ_EVENT_SENSING),
		0xff => SeqEvent::Unknown(SND_SEQ_EVENT_RESET),
		_ => SeqEvent::Unknown(SND_SEQ_EVENT_NONE),
	}
}
