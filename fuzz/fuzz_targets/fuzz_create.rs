#![no_main]

use keyparams::{KeyMaterialType, KeySerialization, Variant};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if data.len() < 7 {
        return;
    }
    let variant = Variant::ALL[usize::from(data[0] % 4)];
    let material = KeyMaterialType::ALL[usize::from(data[1] % 4)];
    let id = (data[2] & 1 == 1).then(|| u32::from_be_bytes([data[3], data[4], data[5], data[6]]));
    let type_url = String::from_utf8_lossy(&data[7..]).into_owned();

    // Accepted exactly when the id matches the variant and the URL is non-empty
    let result = KeySerialization::create(type_url.as_str(), data.to_vec(), material, variant, id);
    let expected = !type_url.is_empty() && variant.has_id_requirement() == id.is_some();
    assert_eq!(result.is_ok(), expected);
});
