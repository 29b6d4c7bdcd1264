#![no_main]

use libfuzzer_sys::fuzz_target;
use wamp_wire::Utf8Validator;

fuzz_target!(|data: &[u8]| {
    // First byte picks a split point; the verdict must match std wherever
    // the stream is cut.
    let (split, payload) = match data.split_first() {
        Some((s, rest)) => (*s as usize % (rest.len() + 1), rest),
        None => return,
    };

    let mut v = Utf8Validator::new();
    let ok = v.validate(&payload[..split]) && v.validate(&payload[split..]);

    match std::str::from_utf8(payload) {
        Ok(_) => assert!(ok && v.is_valid() && v.position() == payload.len()),
        Err(e) if e.error_len().is_some() => assert!(!ok && v.is_rejected()),
        Err(_) => assert!(ok && !v.is_valid()),
    }
});
