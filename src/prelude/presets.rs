//! Recommended parameter sets.
//!
//! | Preset | Key | Tag | Variant |
//! |--------|-----|-----|---------|
//! | [`aes_cmac()`] | 32 bytes | 16 bytes | `Tink` |
//! | [`aes_cmac_raw()`] | 32 bytes | 16 bytes | `NoPrefix` |
//!
//! Presets go through the same builder as any caller, so they can never hand
//! out a parameter set the builder would refuse.

use crate::core::error::KeyParamsResult;
use crate::core::parameters::AesCmacParameters;
use crate::core::variant::Variant;

/// AES-CMAC with a 256-bit key, 16-byte tags and the `Tink` prefix.
///
/// # Errors
///
/// Never fails in practice; the result is propagated from the builder.
pub fn aes_cmac() -> KeyParamsResult<AesCmacParameters> {
    aes_cmac_256(Variant::Tink)
}

/// AES-CMAC with a 256-bit key, 16-byte tags and no prefix.
///
/// # Errors
///
/// Never fails in practice; the result is propagated from the builder.
pub fn aes_cmac_raw() -> KeyParamsResult<AesCmacParameters> {
    aes_cmac_256(Variant::NoPrefix)
}

fn aes_cmac_256(variant: Variant) -> KeyParamsResult<AesCmacParameters> {
    AesCmacParameters::builder()
        .key_size_bytes(32)?
        .tag_size_bytes(16)?
        .variant(variant)
        .build()
}
