#![no_main]

use libfuzzer_sys::fuzz_target;
use wamp_wire::core::serialization::{decode_message, SerializationFormat};
use wamp_wire::protocol::message::{parse_number_at, validate_range};

fuzz_target!(|data: &[u8]| {
    // Untrusted payloads must never panic on the way to dispatch.
    for format in [SerializationFormat::Json, SerializationFormat::MessagePack] {
        if let Ok(msg) = decode_message(data, format) {
            let _ = validate_range(&msg, 36, "EVENT", 4, 6);
            let _ = parse_number_at(&msg, 1);
        }
    }
});
