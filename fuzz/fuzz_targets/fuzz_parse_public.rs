#![no_main]

use hybrid_envelope::decode_public;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &str| {
    let _ = decode_public(data);
});
