#![no_main]

use libfuzzer_sys::fuzz_target;
use vin_decode::{ReferenceData, VinDecoder};

fuzz_target!(|data: &[u8]| {
    let Ok(s) = std::str::from_utf8(data) else {
        return;
    };
    // Malformed tables must be rejected, never panic.
    if let Ok(decoder) = ReferenceData::from_json(s).and_then(|tables| VinDecoder::new(&tables)) {
        let _ = decoder.decode("W1K3FBCB3PN300965");
    }
});
