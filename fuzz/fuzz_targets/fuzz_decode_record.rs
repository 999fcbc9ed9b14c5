#![no_main]

use keyparams::{KeyRecord, KeySerialization};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Arbitrary JSON records must decode or fail cleanly - never panic
    if let Ok(record) = serde_json::from_slice::<KeyRecord>(data) {
        if let Ok(serialization) = KeySerialization::try_from(&record) {
            // Anything accepted must re-encode to the same record
            assert_eq!(KeyRecord::from(&serialization), record);
        }
    }
});
