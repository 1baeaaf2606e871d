#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        // Must not panic on any input.
        let decoded = vin_decode::decode_vin(s);
        assert_eq!(decoded.is_valid, decoded.info.is_some());
        let _ = vin_decode::split_vin(s);
        let _ = vin_decode::get_model_year(s);
        let _ = vin_decode::get_manufacturer(s);
    }
});
