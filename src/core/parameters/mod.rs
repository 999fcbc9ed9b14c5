//! Primitive parameter sets.
//!
//! A parameter set is an immutable, validated description of how keys of one
//! primitive are configured. Each family implements [`Parameters`] so the
//! serialization layer can wrap its keys without knowing its shape.
//!
//! - [`AesCmacParameters`] - AES-CMAC message authentication

mod aes_cmac;

pub use aes_cmac::{AesCmacParameters, AesCmacParametersBuilder};

use crate::core::variant::Variant;

/// Common view of a validated parameter set.
pub trait Parameters: Send + Sync {
    /// The output prefix variant keys with these parameters use.
    fn variant(&self) -> Variant;

    /// Size of each output tag as it appears on the wire, prefix included.
    fn total_tag_size_bytes(&self) -> usize;

    /// Returns `true` if keys with these parameters must carry a numeric id.
    ///
    /// A key serialization for such a key must be created with an id exactly
    /// when this returns `true`.
    fn has_id_requirement(&self) -> bool {
        self.variant().has_id_requirement()
    }
}
