//! Validated key parameters and a provider-agnostic key serialization envelope.
//!
//! This crate describes *how* a key is configured and *how* it travels, without
//! ever touching the cryptography itself:
//!
//! - a parameter set (e.g. [`AesCmacParameters`]) is validated field by field
//!   while it is built and is immutable afterwards
//! - a [`KeySerialization`] wraps an opaque key payload with its type URL,
//!   material type and output prefix, and refuses to exist if the key id does
//!   not match the output prefix kind
//!
//! # Quick Start
//!
//! ```rust
//! use keyparams::{AesCmacParameters, KeyMaterialType, KeySerialization, Variant};
//!
//! let params = AesCmacParameters::builder()
//!     .key_size_bytes(32)?
//!     .tag_size_bytes(16)?
//!     .variant(Variant::Tink)
//!     .build()?;
//! assert_eq!(params.total_tag_size_bytes(), 21);
//!
//! // Prefixed keys need an id.
//! let id = params.has_id_requirement().then_some(0x1234);
//! let serialization = KeySerialization::for_parameters(
//!     &params,
//!     "type.googleapis.com/google.crypto.tink.AesCmacKey",
//!     vec![0u8; 34],
//!     KeyMaterialType::Symmetric,
//!     id,
//! )?;
//! assert_eq!(serialization.id_requirement(), Some(0x1234));
//! # Ok::<(), keyparams::KeyParamsError>(())
//! ```
//!
//! # Output Prefix Variants
//!
//! | Variant | Prefix | Id required |
//! |---------|--------|-------------|
//! | `NoPrefix` | none | no |
//! | `Tink` | `0x01 \|\| id` | yes |
//! | `Crunchy` | `0x00 \|\| id` | yes |
//! | `Legacy` | `0x00 \|\| id` | yes |
//!
//! # Features
//!
//! - `serde` (default) - `Serialize`/`Deserialize` for [`KeyRecord`]
//! - `prelude` (default) - the [`prelude`] module with parameter presets
//!
//! # Security
//!
//! - Serialized key payloads are zeroized on drop
//! - Debug output redacts secret payloads
//! - Payload comparison is constant-time
//! - No unsafe code
//!
//! # Modules
//!
//! - [`core`] - Core types and operations
//! - [`prelude`] - Ergonomic imports and presets (requires `prelude` feature)

pub mod core;

#[cfg(feature = "prelude")]
pub mod prelude;

// Re-export commonly used items at crate root
pub use crate::core::error::{KeyParamsError, KeyParamsResult};
pub use crate::core::material::KeyMaterialType;
pub use crate::core::parameters::{AesCmacParameters, AesCmacParametersBuilder, Parameters};
pub use crate::core::prefix::OutputPrefix;
pub use crate::core::serialization::{KeyRecord, KeySerialization};
pub use crate::core::variant::Variant;
