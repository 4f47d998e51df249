use midk_seqdump::dump::dump;
use midk_seqdump::event::{Realtime, SeqEvent, SND_SEQ_EVENT_SYSEX};
use midk_seqdump::raw::decode;
use midk_seqdump::source::Replay;

fn dump_lines(events: Vec<SeqEvent>) -> (u64, String) {
	let mut out = Vec::new();
	let count = dump(&mut Replay(events.into_iter()), &mut out).unwrap();
	(count, String::from_utf8(out).unwrap())
}

#[test]
fn one_line_per_event() {
	let (count, text) = dump_lines(vec![
		SeqEvent::note_on(0, 60, 100),
		SeqEvent::note_on(0, 60, 0),
		SeqEvent::controller(3, 120, 0),
		SeqEvent::Realtime(Realtime::Clock),
		SeqEvent::Unknown(SND_SEQ_EVENT_SYSEX),
	]);
	assert_eq!(count, 5);
	assert_eq!(
		text,
		"note on:  Channel[1] Note[ 60] velocity(100)\n\
		 note off: Channel[1] Note[ 60] velocity(  0)\n\
		 Panic! All notes turned off, releases hanged notes\n\
		 CLOCK\n\
		 unrecognized message: event type no. 130\n",
	);
}

#[test]
fn repeated_events_print_identical_lines() {
	let ev = SeqEvent::pitch_bend(5, -100);
	let (count, text) = dump_lines(vec![ev, ev]);
	assert_eq!(count, 2);
	let lines: Vec<&str> = text.lines().collect();
	assert_eq!(lines, ["pitch bend: Channel[6] value( -100) "; 2]);
}

#[test]
fn raw_stream_matches_sequencer_stream() {
	let raw: [&[u8]; 7] = [
		&[0xfa],
		&[0xc2, 9],
		&[0xb2, 0, 1],
		&[0xb2, 1, 64],
		&[0xb2, 10, 3],
		&[0x82, 72, 40],
		&[0xfc],
	];
	let decoded = raw.into_iter().map(decode).collect();
	let (_, text) = dump_lines(decoded);
	assert_eq!(
		text,
		"START\n\
		 program change: on Channel[3] to no.[ a] \n\
		 Bank select: on Channel[3] to no.[1]\n\
		 modulation wheel: on Channel[3] Value(64)\n\
		 control change:  Channel[3] CC[10] Value(  3)\n\
		 note off: Channel[3] Note[ 72] velocity( 40)\n\
		 STOP\n",
	);
}
