//! Ergonomic layer for key parameters.
//!
//! The prelude re-exports the everyday types and adds [`presets`], the
//! recommended parameter sets.
//!
//! # Usage
//!
//! ```rust
//! use keyparams::prelude::*;
//!
//! let params = presets::aes_cmac()?;
//! assert_eq!(params.variant(), Variant::Tink);
//! # Ok::<(), KeyParamsError>(())
//! ```

pub mod presets;

// Re-export core types for convenience
pub use crate::core::error::{KeyParamsError, KeyParamsResult};
pub use crate::core::material::KeyMaterialType;
pub use crate::core::parameters::{AesCmacParameters, AesCmacParametersBuilder, Parameters};
pub use crate::core::prefix::OutputPrefix;
pub use crate::core::serialization::{KeyRecord, KeySerialization};
pub use crate::core::variant::Variant;
