//! `KeyRecord` - flat wire form of a [`KeySerialization`].
//!
//! Enumerations travel as their wire numbers and the payload as standard
//! base64, so a record can be stored as JSON (with the `serde` feature) or
//! copied field by field into a generated message type. Decoding a record
//! re-runs every envelope check.

use base64::prelude::*;
use zeroize::Zeroize;

use crate::core::error::{KeyParamsError, KeyParamsResult};
use crate::core::material::KeyMaterialType;
use crate::core::serialization::KeySerialization;
use crate::core::variant::Variant;

/// A key serialization with every field in its wire representation.
///
/// # Example
///
/// ```rust
/// use keyparams::core::material::KeyMaterialType;
/// use keyparams::core::serialization::{KeyRecord, KeySerialization};
/// use keyparams::core::variant::Variant;
///
/// let serialization = KeySerialization::create(
///     "myTypeUrl",
///     vec![10, 11, 12],
///     KeyMaterialType::Symmetric,
///     Variant::Crunchy,
///     Some(5),
/// )?;
///
/// let record = KeyRecord::from(&serialization);
/// assert_eq!(record.value, "CgsM");
/// assert_eq!(record.output_prefix_type, 4);
///
/// let decoded = KeySerialization::try_from(record)?;
/// assert_eq!(decoded, serialization);
/// # Ok::<(), keyparams::KeyParamsError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Zeroize)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "camelCase")
)]
pub struct KeyRecord {
    /// Type URL of the key format.
    #[zeroize(skip)]
    pub type_url: String,
    /// Base64 (standard alphabet, padded) of the key payload.
    pub value: String,
    /// `KeyMaterialType` wire number.
    #[zeroize(skip)]
    pub key_material_type: i32,
    /// `OutputPrefixType` wire number.
    #[zeroize(skip)]
    pub output_prefix_type: i32,
    /// Key id; present exactly when the output prefix type is not `RAW`.
    #[zeroize(skip)]
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub key_id: Option<u32>,
}

impl From<&KeySerialization> for KeyRecord {
    fn from(serialization: &KeySerialization) -> Self {
        Self {
            type_url: serialization.type_url().to_owned(),
            value: BASE64_STANDARD.encode(serialization.value()),
            key_material_type: serialization.key_material_type().wire_value(),
            output_prefix_type: serialization.output_prefix_type().wire_value(),
            key_id: serialization.id_requirement(),
        }
    }
}

impl TryFrom<&KeyRecord> for KeySerialization {
    type Error = KeyParamsError;

    fn try_from(record: &KeyRecord) -> KeyParamsResult<Self> {
        let key_material_type = KeyMaterialType::try_from(record.key_material_type)?;
        let output_prefix_type = Variant::try_from(record.output_prefix_type)?;
        let value = BASE64_STANDARD
            .decode(&record.value)
            .map_err(KeyParamsError::Base64Decode)?;

        Self::create(
            record.type_url.as_str(),
            value,
            key_material_type,
            output_prefix_type,
            record.key_id,
        )
    }
}

impl TryFrom<KeyRecord> for KeySerialization {
    type Error = KeyParamsError;

    fn try_from(mut record: KeyRecord) -> KeyParamsResult<Self> {
        let result = Self::try_from(&record);
        record.zeroize();
        result
    }
}
