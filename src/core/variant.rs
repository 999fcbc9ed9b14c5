//! Output prefix variants.
//!
//! A [`Variant`] says whether a key's output carries a 5-byte prefix derived
//! from the key id, and how that prefix interacts with the primitive. The same
//! vocabulary describes a parameter set's variant and a key serialization's
//! output prefix kind.

use core::fmt::{self, Display};

use crate::core::error::{KeyParamsError, KeyParamsResult};

/// Size in bytes of the prefix added by every variant except [`Variant::NoPrefix`].
pub const NON_RAW_PREFIX_SIZE: usize = 5;

/// The output prefix kind of a key.
///
/// `NoPrefix` keys produce bare output. The other three prepend a
/// [`NON_RAW_PREFIX_SIZE`]-byte prefix computed from the key id, so keys using
/// them must always carry one.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Variant {
    /// Versioned prefix `0x01 || id`.
    Tink,
    /// Legacy prefix `0x00 || id`.
    Crunchy,
    /// Legacy prefix `0x00 || id`; the primitive also appends a zero byte to
    /// the message before computing its tag.
    Legacy,
    /// No prefix at all.
    #[default]
    NoPrefix,
}

impl Variant {
    /// All variants, in wire order.
    pub const ALL: [Self; 4] = [Self::Tink, Self::Legacy, Self::NoPrefix, Self::Crunchy];

    /// Returns `true` if keys with this variant must carry a numeric id.
    #[must_use]
    pub const fn has_id_requirement(self) -> bool {
        !matches!(self, Self::NoPrefix)
    }

    /// Number of prefix bytes this variant adds to every output.
    #[must_use]
    pub const fn prefix_size(self) -> usize {
        match self {
            Self::NoPrefix => 0,
            Self::Tink | Self::Crunchy | Self::Legacy => NON_RAW_PREFIX_SIZE,
        }
    }

    /// The canonical name (e.g., `"NO_PREFIX"`).
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Tink => "TINK",
            Self::Crunchy => "CRUNCHY",
            Self::Legacy => "LEGACY",
            Self::NoPrefix => "NO_PREFIX",
        }
    }

    /// The `OutputPrefixType` number used on the wire. `NoPrefix` is `RAW`.
    #[must_use]
    pub const fn wire_value(self) -> i32 {
        match self {
            Self::Tink => 1,
            Self::Legacy => 2,
            Self::NoPrefix => 3,
            Self::Crunchy => 4,
        }
    }
}

impl Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl TryFrom<i32> for Variant {
    type Error = KeyParamsError;

    fn try_from(value: i32) -> KeyParamsResult<Self> {
        match value {
            1 => Ok(Self::Tink),
            2 => Ok(Self::Legacy),
            3 => Ok(Self::NoPrefix),
            4 => Ok(Self::Crunchy),
            _ => {
                tracing::debug!(value, "rejecting unknown output prefix type");
                Err(KeyParamsError::UnknownVariant {
                    enumeration: "OutputPrefixType",
                    value,
                })
            }
        }
    }
}
