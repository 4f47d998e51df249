mod alsa_seq;
mod jack_midi;

pub use alsa_seq::AlsaSource;
pub use jack_midi::JackSource;

use crate::error::Result;
use crate::event::SeqEvent;

/// A blocking supply of sequencer events.
///
/// `Ok(None)` means the source is closed and will not yield again.
pub trait EventSource {
	fn next_event(&mut self) -> Result<Option<SeqEvent>>;
}

/// Replays a fixed sequence, closing when it runs out.
pub struct Replay<I>(pub I);

impl<I: Iterator<Item = SeqEvent>> EventSource for Replay<I> {
	fn next_event(&mut self) -> Result<Option<SeqEvent>> {
		Ok(self.0.next())
	}
}

impl<S: EventSource + ?Sized> EventSource for Box<S> {
	fn next_event(&mut self) -> Result<Option<SeqEvent>> {
		(**self).next_event()
	}
}
