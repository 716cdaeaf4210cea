#![no_main]

use libfuzzer_sys::fuzz_target;
use pgp_wire::Message;

fuzz_target!(|data: &[u8]| {
    // Fuzz the full parse loop - must return a structured error, never panic,
    // and anything that parses must re-serialize
    if let Ok(message) = Message::parse(data.to_vec()) {
        let _ = message.to_bytes();
    }
});
