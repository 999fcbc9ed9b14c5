//! End-to-end tests: parameters to serialization to storage and back.

#![allow(clippy::expect_used, clippy::panic, clippy::unwrap_used)]

use std::collections::HashSet;
use std::sync::Arc;
use std::thread;

use keyparams::{
    AesCmacParameters, KeyMaterialType, KeyParamsError, KeyParamsResult, KeyRecord,
    KeySerialization, OutputPrefix, Parameters, Variant,
};

const AES_CMAC_TYPE_URL: &str = "type.googleapis.com/google.crypto.tink.AesCmacKey";

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// Stands in for a key manager: allocates an id only when the parameters
/// demand one.
fn new_key(params: &dyn Parameters, next_id: u32) -> KeyParamsResult<KeySerialization> {
    let id = params.has_id_requirement().then_some(next_id);
    KeySerialization::for_parameters(
        params,
        AES_CMAC_TYPE_URL,
        vec![0x42; 34],
        KeyMaterialType::Symmetric,
        id,
    )
}

#[test]
fn test_parameters_drive_id_allocation() -> KeyParamsResult<()> {
    init_tracing();

    for variant in Variant::ALL {
        let params = AesCmacParameters::builder()
            .key_size_bytes(16)?
            .tag_size_bytes(12)?
            .variant(variant)
            .build()?;
        let serialization = new_key(&params, 77)?;

        assert_eq!(serialization.output_prefix_type(), variant);
        assert_eq!(
            serialization.id_requirement().is_some(),
            params.has_id_requirement()
        );
        assert_eq!(
            serialization.output_prefix().to_bytes().len() + params.cryptographic_tag_size_bytes(),
            params.total_tag_size_bytes()
        );
    }
    Ok(())
}

#[test]
#[cfg(feature = "serde")]
fn test_json_storage_roundtrip() -> Result<(), Box<dyn std::error::Error>> {
    init_tracing();

    let params = AesCmacParameters::builder()
        .key_size_bytes(32)?
        .tag_size_bytes(16)?
        .variant(Variant::Tink)
        .build()?;
    let original = new_key(&params, 0x0102_0304)?;

    let json = serde_json::to_string(&KeyRecord::from(&original))?;
    let record: KeyRecord = serde_json::from_str(&json)?;
    let restored = KeySerialization::try_from(record)?;

    assert_eq!(restored, original);
    assert_eq!(restored.type_url(), AES_CMAC_TYPE_URL);
    assert_eq!(restored.value(), original.value());
    assert_eq!(restored.key_material_type(), KeyMaterialType::Symmetric);
    assert_eq!(restored.output_prefix(), OutputPrefix::Tink(0x0102_0304));
    Ok(())
}

#[test]
#[cfg(feature = "serde")]
fn test_tampered_json_is_rejected() -> Result<(), Box<dyn std::error::Error>> {
    init_tracing();

    // A RAW key that claims an id.
    let json = r#"{"typeUrl":"myTypeUrl","value":"CgsM","keyMaterialType":1,"outputPrefixType":3,"keyId":5}"#;
    let record: KeyRecord = serde_json::from_str(json)?;
    let result = KeySerialization::try_from(record);
    assert!(matches!(
        result,
        Err(KeyParamsError::InvariantViolation {
            variant: Variant::NoPrefix,
            id_present: true
        })
    ));
    Ok(())
}

#[test]
fn test_deduplicate_parameters() -> KeyParamsResult<()> {
    let mut seen = HashSet::new();
    for _ in 0..3 {
        for key in [16, 32] {
            let params = AesCmacParameters::builder()
                .key_size_bytes(key)?
                .tag_size_bytes(16)?
                .variant(Variant::Crunchy)
                .build()?;
            seen.insert(params);
        }
    }
    assert_eq!(seen.len(), 2);
    Ok(())
}

#[test]
fn test_shared_across_threads() -> KeyParamsResult<()> {
    let params = Arc::new(
        AesCmacParameters::builder()
            .key_size_bytes(32)?
            .tag_size_bytes(16)?
            .variant(Variant::Legacy)
            .build()?,
    );
    let serialization = Arc::new(new_key(&*params, 9)?);

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let params = Arc::clone(&params);
            let serialization = Arc::clone(&serialization);
            thread::spawn(move || {
                (
                    params.total_tag_size_bytes(),
                    serialization.object_identifier().to_vec(),
                )
            })
        })
        .collect();

    for handle in handles {
        let (total, object_identifier) = handle.join().expect("thread panicked");
        assert_eq!(total, 21);
        assert_eq!(object_identifier, serialization.object_identifier());
    }
    Ok(())
}
