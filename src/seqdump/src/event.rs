// event type numbers of the alsa sequencer abi (seq_event.h)
pub const SND_SEQ_EVENT_NONE: u8 = 0;
pub const SND_SEQ_EVENT_NOTEON: u8 = 6;
pub const SND_SEQ_EVENT_NOTEOFF: u8 = 7;
pub const SND_SEQ_EVENT_KEYPRESS: u8 = 8;
pub const SND_SEQ_EVENT_CONTROLLER: u8 = 10;
pub const SND_SEQ_EVENT_PGMCHANGE: u8 = 11;
pub const SND_SEQ_EVENT_CHANPRESS: u8 = 12;
pub const SND_SEQ_EVENT_PITCHBEND: u8 = 13;
pub const SND_SEQ_EVENT_SONGPOS: u8 = 20;
pub const SND_SEQ_EVENT_SONGSEL: u8 = 21;
pub const SND_SEQ_EVENT_QFRAME: u8 = 22;
pub const SND_SEQ_EVENT_START: u8 = 30;
pub const SND_SEQ_EVENT_CONTINUE: u8 = 31;
pub const SND_SEQ_EVENT_STOP: u8 = 32;
pub const SND_SEQ_EVENT_CLOCK: u8 = 36;
pub const SND_SEQ_EVENT_TICK: u8 = 37;
pub const SND_SEQ_EVENT_TUNE_REQUEST: u8 = 40;
pub const SND_SEQ_EVENT_RESET: u8 = 41;
pub const SND_SEQ_EVENT_SENSING: u8 = 42;
pub const SND_SEQ_EVENT_SYSEX: u8 = 130;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NoteKind {
	On,
	Off,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ControlKind {
	Controller,
	ProgramChange,
	PitchBend,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Realtime {
	Start,
	Continue,
	Stop,
	Clock,
	Tick,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Note {
	pub channel: u8,
	pub note: u8,
	pub velocity: u8,
}

// param and value keep the widths of snd_seq_ev_ctrl_t
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Control {
	pub channel: u8,
	pub param: u32,
	pub value: i32,
}

/// One event as delivered by a sequencer source.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SeqEvent {
	Note(NoteKind, Note),
	Control(ControlKind, Control),
	Realtime(Realtime),
	Unknown(u8),
}

impl SeqEvent {
	pub fn note_on(channel: u8, note: u8, velocity: u8) -> Self {
		Self::Note(NoteKind::On, Note { channel, note, velocity })
	}

	pub fn note_off(channel: u8, note: u8, velocity: u8) -> Self {
		Self::Note(NoteKind::Off, Note { channel, note, velocity })
	}

	pub fn controller(channel: u8, param: u32, value: i32) -> Self {
		Self::Control(ControlKind::Controller, Control { channel, param, value })
	}

	pub fn program_change(channel: u8, value: i32) -> Self {
		Self::Control(ControlKind::ProgramChange, Control { channel, param: 0, value })
	}

	pub fn pitch_bend(channel: u8, value: i32) -> Self {
		Self::Control(ControlKind::PitchBend, Control { channel, param: 0, value })
	}

	/// The sequencer event type number this event travels as.
	pub fn raw_kind(&self) -> u8 {
		match self {
			Self::Note(NoteKind::On, _) => SND_SEQ_EVENT_NOTEON,
			Self::Note(NoteKind::Off, _) => SND_SEQ_EVENT_NOTEOFF,
			Self::Control(ControlKind::Controller, _) => SND_SEQ_EVENT_CONTROLLER,
			Self::Control(ControlKind::ProgramChange, _) => SND_SEQ_EVENT_PGMCHANGE,
			Self::Control(ControlKind::PitchBend, _) => SND_SEQ_EVENT_PITCHBEND,
			Self::Realtime(Realtime::Start) => SND_SEQ_EVENT_START,
			Self::Realtime(Realtime::Continue) => SND_SEQ_EVENT_CONTINUE,
			Self::Realtime(Realtime::Stop) => SND_SEQ_EVENT_STOP,
			Self::Realtime(Realtime::Clock) => SND_SEQ_EVENT_CLOCK,
			Self::Realtime(Realtime::Tick) => SND_SEQ_EVENT_TICK,
			Self::Unknown(raw) => *raw,
		}
	}

	/// Realtime events carry no payload, so the type number alone is enough
	/// to rebuild them. Anything that needs a payload comes back as unknown.
	pub fn from_raw_kind(raw: u8) -> Self {
		match raw {
			SND_SEQ_EVENT_START => Self::Realtime(Realtime::Start),
			SND_SEQ_EVENT_CONTINUE => Self::Realtime(Realtime::Continue),
			SND_SEQ_EVENT_STOP => Self::Realtime(Realtime::Stop),
			SND_SEQ_EVENT_CLOCK => Self::Realtime(Realtime::Clock),
			SND_SEQ_EVENT_TICK => Self::Realtime(Realtime::Tick),
			x => Self::Unknown(x),
		}
	}
}
