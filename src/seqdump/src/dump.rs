use std::io::Write;

use tracing::info;

use crate::error::Result;
use crate::source::EventSource;

/// Print one line per event until the source closes. Each line is flushed
/// before the next read. Returns the number of events printed.
pub fn dump<S, W>(source: &mut S, out: &mut W) -> Result<u64>
where
	S: EventSource + ?Sized,
	W: Write,
{
	let mut count = 0u64;
	while let Some(event) = source.next_event()? {
		writeln!(out, "{}", event)?;
		out.flush()?;
		count += 1;
	}
	info!(count, "event source closed");
	Ok(count)
}

#[cfg(test)]
mod tests {
	use super::*;
	use std::cell::RefCell;
	use std::rc::Rc;

	use crate::error::Error;
	use crate::event::{Realtime, SeqEvent};
	use crate::source::Replay;

	#[derive(Default)]
	struct Tally {
		written: usize,
		flushed: usize,
		flushes: usize,
	}

	struct TallyWriter(Rc<RefCell<Tally>>);

	impl Write for TallyWriter {
		fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
			self.0.borrow_mut().written += buf.len();
			Ok(buf.len())
		}

		fn flush(&mut self) -> std::io::Result<()> {
			let mut tally = self.0.borrow_mut();
			tally.flushed = tally.written;
			tally.flushes += 1;
			Ok(())
		}
	}

	// checks on every read that all output so far reached the writer's sink
	struct FlushChecked {
		tally: Rc<RefCell<Tally>>,
		events: std::vec::IntoIter<SeqEvent>,
		reads: usize,
	}

	impl EventSource for FlushChecked {
		fn next_event(&mut self) -> Result<Option<SeqEvent>> {
			let tally = self.tally.borrow();
			assert_eq!(tally.written, tally.flushed, "unflushed output before read {}", self.reads);
			assert_eq!(tally.flushes, self.reads);
			self.reads += 1;
			Ok(self.events.next())
		}
	}

	struct Failing;

	impl EventSource for Failing {
		fn next_event(&mut self) -> Result<Option<SeqEvent>> {
			Err(Error::InvalidConfig("gone".to_string()))
		}
	}

	#[test]
	fn empty_source_prints_nothing() {
		let mut out = Vec::new();
		let count = dump(&mut Replay(std::iter::empty::<SeqEvent>()), &mut out).unwrap();
		assert_eq!(count, 0);
		assert!(out.is_empty());
	}

	#[test]
	fn each_line_flushed_before_next_read() {
		let tally = Rc::new(RefCell::new(Tally::default()));
		let mut source = FlushChecked {
			tally: tally.clone(),
			events: vec![
				SeqEvent::note_on(0, 60, 100),
				SeqEvent::controller(0, 7, 5),
				SeqEvent::Realtime(Realtime::Stop),
			]
			.into_iter(),
			reads: 0,
		};
		let count = dump(&mut source, &mut TallyWriter(tally.clone())).unwrap();
		assert_eq!(count, 3);
		assert_eq!(source.reads, 4);
		assert!(tally.borrow().written > 0);
	}

	#[test]
	fn source_error_is_fatal() {
		let mut out = Vec::new();
		assert!(dump(&mut Failing, &mut out).is_err());
		assert!(out.is_empty());
	}
}
