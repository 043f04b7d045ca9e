use super::{ByteView, utf8_ignoring_invalid};

#[test]
fn reads_are_little_endian_and_bounds_checked() {
	let data = [0x34, 0x12, 0x78, 0x56, 0xff];
	let view = ByteView::new(&data);

	assert_eq!(view.u16_at(0), Some(0x1234));
	assert_eq!(view.u32_at(0), Some(0x5678_1234));
	assert_eq!(view.u32_at(2), None);
	assert_eq!(view.u16_at(usize::MAX), None);
	assert_eq!(view.slice(usize::MAX - 1, 4), None);
}

#[test]
fn cstr_stops_at_nul_or_end() {
	let data = *b"ab\0cd";
	let view = ByteView::new(&data);

	assert_eq!(view.cstr_at(0), b"ab");
	assert_eq!(view.cstr_at(3), b"cd");
	assert_eq!(view.cstr_at(2), b"");
	assert_eq!(view.cstr_at(99), b"");
}

#[test]
fn invalid_utf8_sequences_are_dropped() {
	assert_eq!(utf8_ignoring_invalid(b"ok\xffgo\xc3"), "okgo");
	assert_eq!(utf8_ignoring_invalid("caf\u{e9}".as_bytes()), "caf\u{e9}");
}
