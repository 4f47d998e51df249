use std::fmt;

use crate::event::{Control, ControlKind, Note, NoteKind, Realtime, SeqEvent};

pub const CTL_MSB_BANK: u32 = 0;
pub const CTL_MSB_MODWHEEL: u32 = 1;
pub const CTL_ALL_SOUNDS_OFF: u32 = 120;
pub const CTL_ALL_NOTES_OFF: u32 = 123;

pub const PANIC_LINE: &str = "Panic! All notes turned off, releases hanged notes";

/// What a monitor line says about one event.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Message {
	NoteOn(Note),
	NoteOff(Note),
	ProgramChange(Control),
	PitchBend(Control),
	Realtime(Realtime),
	BankSelect(Control),
	ModWheel(Control),
	Panic,
	ControlChange(Control),
	Unrecognized(u8),
}

impl Message {
	pub fn classify(event: &SeqEvent) -> Self {
		match *event {
			SeqEvent::Note(NoteKind::On, note) if note.velocity != 0 => Self::NoteOn(note),
			// velocity 0 is a note off
			SeqEvent::Note(_, note) => Self::NoteOff(note),
			SeqEvent::Control(ControlKind::ProgramChange, ctrl) => Self::ProgramChange(ctrl),
			SeqEvent::Control(ControlKind::PitchBend, ctrl) => Self::PitchBend(ctrl),
			SeqEvent::Realtime(rt) => Self::Realtime(rt),
			SeqEvent::Control(ControlKind::Controller, ctrl) => match ctrl.param {
				CTL_MSB_BANK => Self::BankSelect(ctrl),
				CTL_MSB_MODWHEEL => Self::ModWheel(ctrl),
				CTL_ALL_SOUNDS_OFF | CTL_ALL_NOTES_OFF => Self::Panic,
				_ => Self::ControlChange(ctrl),
			},
			SeqEvent::Unknown(raw) => Self::Unrecognized(raw),
		}
	}
}

// channels are stored 0-based and shown 1-based
fn display_channel(channel: u8) -> u16 {
	channel as u16 + 1
}

fn write_note(f: &mut fmt::Formatter<'_>, label: &str, note: &Note) -> fmt::Result {
	write!(
		f,
		"{} Channel[{}] Note[{:3}] velocity({:3})",
		label,
		display_channel(note.channel),
		note.note,
		note.velocity,
	)
}

impl fmt::Display for Message {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::NoteOn(note) => write_note(f, "note on: ", note),
			Self::NoteOff(note) => write_note(f, "note off:", note),
			Self::ProgramChange(ctrl) => write!(
				f,
				"program change: on Channel[{}] to no.[{:2x}] ",
				display_channel(ctrl.channel),
				ctrl.value.wrapping_add(1),
			),
			Self::PitchBend(ctrl) => write!(
				f,
				"pitch bend: Channel[{}] value({:5}) ",
				display_channel(ctrl.channel),
				ctrl.value,
			),
			Self::Realtime(rt) => f.write_str(match rt {
				Realtime::Start => "START",
				Realtime::Continue => "CONTINUE",
				Realtime::Stop => "STOP",
				Realtime::Clock => "CLOCK",
				Realtime::Tick => "TICK",
			}),
			Self::BankSelect(ctrl) => write!(
				f,
				"Bank select: on Channel[{}] to no.[{}]",
				display_channel(ctrl.channel),
				ctrl.value,
			),
			Self::ModWheel(ctrl) => write!(
				f,
				"modulation wheel: on Channel[{}] Value({})",
				display_channel(ctrl.channel),
				ctrl.value,
			),
			Self::Panic => f.write_str(PANIC_LINE),
			Self::ControlChange(ctrl) => write!(
				f,
				"control change:  Channel[{}] CC[{}] Value({:3})",
				display_channel(ctrl.channel),
				ctrl.param,
				ctrl.value,
			),
			Self::Unrecognized(raw) => {
				write!(f, "unrecognized message: event type no. {}", raw)
			}
		}
	}
}

impl fmt::Display for SeqEvent {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		fmt::Display::fmt(&Message::classify(self), f)
	}
}

#[cfg(test)]
pub(crate) fn describe(event: &SeqEvent) -> String {
	Message::classify(event).to_string()
}
