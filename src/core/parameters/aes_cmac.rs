//! `AesCmacParameters` - AES-CMAC key parameters.
//!
//! AES-CMAC keys are 16 or 32 bytes and produce tags of 10 to 16 bytes,
//! optionally preceded by a 5-byte output prefix.

use core::fmt::{self, Display};
use core::hash::{Hash, Hasher};
use core::ops::RangeInclusive;

use crate::core::error::{KeyParamsError, KeyParamsResult};
use crate::core::parameters::Parameters;
use crate::core::variant::Variant;

/// Allowed AES key sizes in bytes.
pub const KEY_SIZES: [usize; 2] = [16, 32];

/// Allowed cryptographic tag sizes in bytes.
pub const TAG_SIZES: RangeInclusive<usize> = 10..=16;

/// Validated parameters for an AES-CMAC key.
///
/// Instances only come out of [`AesCmacParametersBuilder::build`], so every
/// field is already known to be valid.
///
/// Two parameter sets are equal when their key size, *total* tag size and
/// variant agree. Configurations that look the same on the wire are the same
/// configuration.
///
/// # Example
///
/// ```rust
/// use keyparams::core::parameters::{AesCmacParameters, Parameters};
/// use keyparams::core::variant::Variant;
///
/// let params = AesCmacParameters::builder()
///     .key_size_bytes(32)?
///     .tag_size_bytes(16)?
///     .variant(Variant::Tink)
///     .build()?;
///
/// assert_eq!(params.total_tag_size_bytes(), 21);
/// assert!(params.has_id_requirement());
/// # Ok::<(), keyparams::KeyParamsError>(())
/// ```
#[derive(Debug, Clone, Copy)]
pub struct AesCmacParameters {
    key_size_bytes: usize,
    tag_size_bytes: usize,
    variant: Variant,
}

impl AesCmacParameters {
    /// Starts a new builder with nothing set and the `NoPrefix` variant.
    #[must_use]
    pub const fn builder() -> AesCmacParametersBuilder {
        AesCmacParametersBuilder::new()
    }

    /// Size of the AES key in bytes.
    #[must_use]
    pub const fn key_size_bytes(&self) -> usize {
        self.key_size_bytes
    }

    /// Size of the tag computed from the message, without any output prefix.
    #[must_use]
    pub const fn cryptographic_tag_size_bytes(&self) -> usize {
        self.tag_size_bytes
    }

    /// Size of the cryptographic tag plus the output prefix this key adds.
    #[must_use]
    pub const fn total_tag_size_bytes(&self) -> usize {
        self.tag_size_bytes + self.variant.prefix_size()
    }

    /// The output prefix variant.
    #[must_use]
    pub const fn variant(&self) -> Variant {
        self.variant
    }

    /// Returns `true` unless the variant is `NoPrefix`.
    #[must_use]
    pub const fn has_id_requirement(&self) -> bool {
        self.variant.has_id_requirement()
    }
}

impl Parameters for AesCmacParameters {
    fn variant(&self) -> Variant {
        self.variant
    }

    fn total_tag_size_bytes(&self) -> usize {
        Self::total_tag_size_bytes(self)
    }
}

// =============================================================================
// Equality and hashing over the wire-visible configuration
// =============================================================================

impl PartialEq for AesCmacParameters {
    fn eq(&self, other: &Self) -> bool {
        self.key_size_bytes == other.key_size_bytes
            && self.total_tag_size_bytes() == other.total_tag_size_bytes()
            && self.variant == other.variant
    }
}

impl Eq for AesCmacParameters {}

impl Hash for AesCmacParameters {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.key_size_bytes.hash(state);
        self.total_tag_size_bytes().hash(state);
        self.variant.hash(state);
    }
}

impl Display for AesCmacParameters {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "AES-CMAC Parameters (variant: {}, {}-byte tags, and {}-byte key)",
            self.variant, self.tag_size_bytes, self.key_size_bytes
        )
    }
}

// =============================================================================
// Builder
// =============================================================================

/// Builder for [`AesCmacParameters`].
///
/// Each setter checks its value immediately and consumes the builder, so a
/// rejected value leaves nothing behind to build from.
#[derive(Debug, Clone, Copy, Default)]
pub struct AesCmacParametersBuilder {
    key_size_bytes: Option<usize>,
    tag_size_bytes: Option<usize>,
    variant: Variant,
}

impl AesCmacParametersBuilder {
    /// Creates an empty builder.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            key_size_bytes: None,
            tag_size_bytes: None,
            variant: Variant::NoPrefix,
        }
    }

    /// Sets the AES key size.
    ///
    /// # Errors
    ///
    /// Returns `KeyParamsError::InvalidParameter` unless `key_size_bytes` is
    /// 16 or 32.
    pub fn key_size_bytes(mut self, key_size_bytes: usize) -> KeyParamsResult<Self> {
        if !KEY_SIZES.contains(&key_size_bytes) {
            tracing::debug!(key_size_bytes, "rejecting AES-CMAC key size");
            return Err(KeyParamsError::InvalidParameter {
                name: "key size",
                value: key_size_bytes.to_string(),
                allowed: "16 or 32",
            });
        }
        self.key_size_bytes = Some(key_size_bytes);
        Ok(self)
    }

    /// Sets the cryptographic tag size.
    ///
    /// # Errors
    ///
    /// Returns `KeyParamsError::InvalidParameter` unless `tag_size_bytes` is
    /// between 10 and 16 inclusive.
    pub fn tag_size_bytes(mut self, tag_size_bytes: usize) -> KeyParamsResult<Self> {
        if !TAG_SIZES.contains(&tag_size_bytes) {
            tracing::debug!(tag_size_bytes, "rejecting AES-CMAC tag size");
            return Err(KeyParamsError::InvalidParameter {
                name: "tag size",
                value: tag_size_bytes.to_string(),
                allowed: "10..=16",
            });
        }
        self.tag_size_bytes = Some(tag_size_bytes);
        Ok(self)
    }

    /// Sets the output prefix variant.
    #[must_use]
    pub const fn variant(mut self, variant: Variant) -> Self {
        self.variant = variant;
        self
    }

    /// Finishes the parameter set.
    ///
    /// # Errors
    ///
    /// Returns `KeyParamsError::IncompleteConfiguration` if the key size or
    /// the tag size was never set.
    pub fn build(self) -> KeyParamsResult<AesCmacParameters> {
        let Some(key_size_bytes) = self.key_size_bytes else {
            return Err(KeyParamsError::IncompleteConfiguration {
                missing: "key size",
            });
        };
        let Some(tag_size_bytes) = self.tag_size_bytes else {
            return Err(KeyParamsError::IncompleteConfiguration {
                missing: "tag size",
            });
        };
        Ok(AesCmacParameters {
            key_size_bytes,
            tag_size_bytes,
            variant: self.variant,
        })
    }
}
