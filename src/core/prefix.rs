//! `OutputPrefix` - an output prefix kind paired with its key id.
//!
//! The id is present exactly when the variant requires one. Holding both in a
//! single enum makes the mismatched combinations unrepresentable; the only
//! fallible step is [`OutputPrefix::new`], which checks a loose
//! `(Variant, Option<u32>)` pair coming from outside.

use crate::core::error::{KeyParamsError, KeyParamsResult};
use crate::core::variant::{Variant, NON_RAW_PREFIX_SIZE};

/// First prefix byte for [`Variant::Tink`].
pub const TINK_START_BYTE: u8 = 0x01;

/// First prefix byte for [`Variant::Crunchy`] and [`Variant::Legacy`].
pub const LEGACY_START_BYTE: u8 = 0x00;

/// An output prefix kind together with the key id it derives from.
///
/// # Example
///
/// ```rust
/// use keyparams::core::prefix::OutputPrefix;
/// use keyparams::core::variant::Variant;
///
/// let prefix = OutputPrefix::new(Variant::Tink, Some(0x0102_0304))?;
/// assert_eq!(prefix.to_bytes(), vec![0x01, 0x01, 0x02, 0x03, 0x04]);
///
/// assert!(OutputPrefix::new(Variant::NoPrefix, Some(7)).is_err());
/// # Ok::<(), keyparams::KeyParamsError>(())
/// ```
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OutputPrefix {
    /// No prefix and no id.
    #[default]
    NoPrefix,
    /// `0x01 || id`.
    Tink(u32),
    /// `0x00 || id`.
    Crunchy(u32),
    /// `0x00 || id`.
    Legacy(u32),
}

impl OutputPrefix {
    /// Pairs a variant with an optional id.
    ///
    /// # Errors
    ///
    /// Returns `KeyParamsError::InvariantViolation` if an id is given for
    /// `NoPrefix`, or missing for any other variant.
    pub fn new(variant: Variant, id_requirement: Option<u32>) -> KeyParamsResult<Self> {
        match (variant, id_requirement) {
            (Variant::NoPrefix, None) => Ok(Self::NoPrefix),
            (Variant::Tink, Some(id)) => Ok(Self::Tink(id)),
            (Variant::Crunchy, Some(id)) => Ok(Self::Crunchy(id)),
            (Variant::Legacy, Some(id)) => Ok(Self::Legacy(id)),
            (variant, id) => {
                tracing::debug!(
                    %variant,
                    id_present = id.is_some(),
                    "rejecting id requirement that disagrees with output prefix kind"
                );
                Err(KeyParamsError::InvariantViolation {
                    variant,
                    id_present: id.is_some(),
                })
            }
        }
    }

    /// The output prefix kind.
    #[must_use]
    pub const fn variant(&self) -> Variant {
        match self {
            Self::NoPrefix => Variant::NoPrefix,
            Self::Tink(_) => Variant::Tink,
            Self::Crunchy(_) => Variant::Crunchy,
            Self::Legacy(_) => Variant::Legacy,
        }
    }

    /// The key id, if this kind requires one.
    #[must_use]
    pub const fn id_requirement(&self) -> Option<u32> {
        match self {
            Self::NoPrefix => None,
            Self::Tink(id) | Self::Crunchy(id) | Self::Legacy(id) => Some(*id),
        }
    }

    /// The bytes prepended to every output produced with this prefix.
    ///
    /// Empty for `NoPrefix`, otherwise [`NON_RAW_PREFIX_SIZE`] bytes: a start
    /// byte followed by the id in big-endian order.
    #[must_use]
    pub fn to_bytes(&self) -> Vec<u8> {
        let (start, id) = match self {
            Self::NoPrefix => return Vec::new(),
            Self::Tink(id) => (TINK_START_BYTE, id),
            Self::Crunchy(id) | Self::Legacy(id) => (LEGACY_START_BYTE, id),
        };
        let mut out = Vec::with_capacity(NON_RAW_PREFIX_SIZE);
        out.push(start);
        out.extend_from_slice(&id.to_be_bytes());
        out
    }
}
