//! Key material classification.

use core::fmt::{self, Display};

use crate::core::error::{KeyParamsError, KeyParamsResult};

/// What kind of key material a serialized payload holds.
///
/// A registry uses this to pick a provider able to parse the payload. The
/// serialization envelope itself only carries it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyMaterialType {
    /// A symmetric secret key.
    Symmetric,
    /// The private half of an asymmetric key pair.
    AsymmetricPrivate,
    /// The public half of an asymmetric key pair.
    AsymmetricPublic,
    /// A reference to key material held elsewhere (e.g., in a KMS).
    Remote,
}

impl KeyMaterialType {
    /// All material types, in wire order.
    pub const ALL: [Self; 4] = [
        Self::Symmetric,
        Self::AsymmetricPrivate,
        Self::AsymmetricPublic,
        Self::Remote,
    ];

    /// Returns `true` if the payload is secret and must not be disclosed.
    #[must_use]
    pub const fn is_secret(self) -> bool {
        matches!(self, Self::Symmetric | Self::AsymmetricPrivate)
    }

    /// The canonical name (e.g., `"ASYMMETRIC_PUBLIC"`).
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Symmetric => "SYMMETRIC",
            Self::AsymmetricPrivate => "ASYMMETRIC_PRIVATE",
            Self::AsymmetricPublic => "ASYMMETRIC_PUBLIC",
            Self::Remote => "REMOTE",
        }
    }

    /// The `KeyMaterialType` number used on the wire.
    #[must_use]
    pub const fn wire_value(self) -> i32 {
        match self {
            Self::Symmetric => 1,
            Self::AsymmetricPrivate => 2,
            Self::AsymmetricPublic => 3,
            Self::Remote => 4,
        }
    }
}

impl Display for KeyMaterialType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl TryFrom<i32> for KeyMaterialType {
    type Error = KeyParamsError;

    fn try_from(value: i32) -> KeyParamsResult<Self> {
        match value {
            1 => Ok(Self::Symmetric),
            2 => Ok(Self::AsymmetricPrivate),
            3 => Ok(Self::AsymmetricPublic),
            4 => Ok(Self::Remote),
            _ => {
                tracing::debug!(value, "rejecting unknown key material type");
                Err(KeyParamsError::UnknownVariant {
                    enumeration: "KeyMaterialType",
                    value,
                })
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_secret() {
        assert!(KeyMaterialType::Symmetric.is_secret());
        assert!(KeyMaterialType::AsymmetricPrivate.is_secret());
        assert!(!KeyMaterialType::AsymmetricPublic.is_secret());
        assert!(!KeyMaterialType::Remote.is_secret());
    }

    #[test]
    fn test_wire_values() -> KeyParamsResult<()> {
        for material in KeyMaterialType::ALL {
            assert_eq!(KeyMaterialType::try_from(material.wire_value())?, material);
        }
        Ok(())
    }

    #[test]
    fn test_unknown_wire_value() {
        let result = KeyMaterialType::try_from(0);
        assert!(matches!(
            result,
            Err(KeyParamsError::UnknownVariant {
                enumeration: "KeyMaterialType",
                value: 0
            })
        ));
    }

    #[test]
    fn test_display() {
        assert_eq!(KeyMaterialType::Symmetric.to_string(), "SYMMETRIC");
        assert_eq!(KeyMaterialType::Remote.to_string(), "REMOTE");
    }
}
