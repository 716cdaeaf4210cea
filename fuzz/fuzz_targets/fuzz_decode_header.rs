#![no_main]

use libfuzzer_sys::fuzz_target;
use pgp_wire::decode_header;

fuzz_target!(|data: &[u8]| {
    // Fuzz header decoding - test for panics, crashes, out-of-bounds reads
    let _ = decode_header(data);
});
