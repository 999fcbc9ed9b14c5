//! `KeySerialization` - the provider-agnostic key envelope.
//!
//! An envelope carries an opaque key payload together with the metadata a
//! registry needs to find a provider for it: the type URL, the key material
//! type and the output prefix (with its id, when one is required).
//!
//! The payload is never interpreted here.

use core::fmt::{self, Debug};
use core::hash::{Hash, Hasher};

use base64::prelude::*;
use subtle::ConstantTimeEq;
use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::core::error::{KeyParamsError, KeyParamsResult};
use crate::core::material::KeyMaterialType;
use crate::core::parameters::Parameters;
use crate::core::prefix::OutputPrefix;
use crate::core::variant::Variant;

/// Byte separating the type URL from the id in an object identifier.
///
/// `0xFF` never appears in UTF-8, so the split point is unambiguous.
pub const OBJECT_IDENTIFIER_ID_MARKER: u8 = 0xFF;

/// A serialized key: opaque payload plus validated metadata.
///
/// # Security
///
/// - Payload bytes are zeroized on drop
/// - Debug output redacts payloads holding secret material
/// - Payload comparison is constant-time
///
/// # Example
///
/// ```rust
/// use keyparams::core::material::KeyMaterialType;
/// use keyparams::core::serialization::KeySerialization;
/// use keyparams::core::variant::Variant;
///
/// let serialization = KeySerialization::create(
///     "myTypeUrl",
///     vec![10, 11, 12],
///     KeyMaterialType::Symmetric,
///     Variant::Tink,
///     Some(123),
/// )?;
/// assert_eq!(serialization.id_requirement(), Some(123));
///
/// // A prefixed key without an id is rejected.
/// let result = KeySerialization::create(
///     "myTypeUrl",
///     vec![10, 11, 12],
///     KeyMaterialType::Symmetric,
///     Variant::Tink,
///     None,
/// );
/// assert!(result.is_err());
/// # Ok::<(), keyparams::KeyParamsError>(())
/// ```
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct KeySerialization {
    #[zeroize(skip)]
    type_url: String,
    value: Vec<u8>,
    #[zeroize(skip)]
    key_material_type: KeyMaterialType,
    #[zeroize(skip)]
    output_prefix: OutputPrefix,
    #[zeroize(skip)]
    object_identifier: Vec<u8>,
}

impl KeySerialization {
    /// Creates an envelope from loose fields.
    ///
    /// # Errors
    ///
    /// - `KeyParamsError::InvalidParameter` if `type_url` is empty
    /// - `KeyParamsError::InvariantViolation` if `id_requirement` is present
    ///   for `NoPrefix`, or absent for any other variant
    pub fn create(
        type_url: impl Into<String>,
        value: Vec<u8>,
        key_material_type: KeyMaterialType,
        output_prefix_type: Variant,
        id_requirement: Option<u32>,
    ) -> KeyParamsResult<Self> {
        let output_prefix = OutputPrefix::new(output_prefix_type, id_requirement)?;
        Self::new(type_url, value, key_material_type, output_prefix)
    }

    /// Creates an envelope from an already paired output prefix.
    ///
    /// # Errors
    ///
    /// Returns `KeyParamsError::InvalidParameter` if `type_url` is empty.
    pub fn new(
        type_url: impl Into<String>,
        value: Vec<u8>,
        key_material_type: KeyMaterialType,
        output_prefix: OutputPrefix,
    ) -> KeyParamsResult<Self> {
        let type_url = type_url.into();
        if type_url.is_empty() {
            tracing::debug!("rejecting key serialization with empty type URL");
            return Err(KeyParamsError::InvalidParameter {
                name: "type URL",
                value: String::from("\"\""),
                allowed: "non-empty string",
            });
        }
        let object_identifier = object_identifier(&type_url, output_prefix.id_requirement());
        Ok(Self {
            type_url,
            value,
            key_material_type,
            output_prefix,
            object_identifier,
        })
    }

    /// Creates an envelope for a key described by `params`.
    ///
    /// The output prefix kind is taken from the parameters' variant.
    ///
    /// # Errors
    ///
    /// Same as [`KeySerialization::create`]; in particular an id must be
    /// given exactly when `params.has_id_requirement()` is `true`.
    pub fn for_parameters<P: Parameters + ?Sized>(
        params: &P,
        type_url: impl Into<String>,
        value: Vec<u8>,
        key_material_type: KeyMaterialType,
        id_requirement: Option<u32>,
    ) -> KeyParamsResult<Self> {
        Self::create(
            type_url,
            value,
            key_material_type,
            params.variant(),
            id_requirement,
        )
    }

    /// The type URL naming the key format.
    #[must_use]
    pub fn type_url(&self) -> &str {
        &self.type_url
    }

    /// The opaque serialized key.
    #[must_use]
    pub fn value(&self) -> &[u8] {
        &self.value
    }

    /// Consumes the envelope and returns the payload.
    #[must_use]
    pub fn into_value(mut self) -> Vec<u8> {
        core::mem::take(&mut self.value)
    }

    /// What kind of material the payload holds.
    #[must_use]
    pub const fn key_material_type(&self) -> KeyMaterialType {
        self.key_material_type
    }

    /// The output prefix kind.
    #[must_use]
    pub const fn output_prefix_type(&self) -> Variant {
        self.output_prefix.variant()
    }

    /// The output prefix kind paired with its id.
    #[must_use]
    pub const fn output_prefix(&self) -> OutputPrefix {
        self.output_prefix
    }

    /// The key id, present exactly when the output prefix kind requires one.
    #[must_use]
    pub const fn id_requirement(&self) -> Option<u32> {
        self.output_prefix.id_requirement()
    }

    /// Bytes identifying this envelope for lookup when nothing richer exists.
    ///
    /// The UTF-8 type URL when no id is required, otherwise the type URL
    /// followed by [`OBJECT_IDENTIFIER_ID_MARKER`] and the big-endian id.
    #[must_use]
    pub fn object_identifier(&self) -> &[u8] {
        &self.object_identifier
    }
}

fn object_identifier(type_url: &str, id_requirement: Option<u32>) -> Vec<u8> {
    let Some(id) = id_requirement else {
        return type_url.as_bytes().to_vec();
    };
    let mut out = Vec::with_capacity(type_url.len() + 5);
    out.extend_from_slice(type_url.as_bytes());
    out.push(OBJECT_IDENTIFIER_ID_MARKER);
    out.extend_from_slice(&id.to_be_bytes());
    out
}

// =============================================================================
// Debug (security: don't expose secret key material)
// =============================================================================

impl Debug for KeySerialization {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut s = f.debug_struct("KeySerialization");
        s.field("type_url", &self.type_url);
        if self.key_material_type.is_secret() {
            s.field("value", &"[REDACTED]");
        } else {
            s.field("value", &BASE64_STANDARD.encode(&self.value));
        }
        s.field("key_material_type", &self.key_material_type)
            .field("output_prefix", &self.output_prefix)
            .finish()
    }
}

// =============================================================================
// PartialEq / Hash (structural; the object identifier is derived)
// =============================================================================

impl PartialEq for KeySerialization {
    fn eq(&self, other: &Self) -> bool {
        let value_eq: bool = self.value.ct_eq(&other.value).into();
        value_eq
            && self.type_url == other.type_url
            && self.key_material_type == other.key_material_type
            && self.output_prefix == other.output_prefix
    }
}

impl Eq for KeySerialization {}

impl Hash for KeySerialization {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.type_url.hash(state);
        self.value.hash(state);
        self.key_material_type.hash(state);
        self.output_prefix.hash(state);
    }
}
