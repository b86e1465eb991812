#![no_main]

use hybrid_envelope::decode_private;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &str| {
    let _ = decode_private(data);
});
