#![no_main]

use hybrid_envelope::Envelope;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Raw framing and text framing should never panic
    if let Ok(envelope) = Envelope::try_from(data) {
        assert_eq!(envelope.to_bytes(), data);
    }
    if let Ok(text) = std::str::from_utf8(data) {
        if let Ok(envelope) = Envelope::try_from(text) {
            assert_eq!(envelope.to_string(), text);
        }
    }
});
