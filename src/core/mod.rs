//! Core key parameter and key serialization types.
//!
//! This module provides the building blocks of the crate:
//!
//! - [`error`] - Error types for all operations
//! - [`variant`] - Output prefix variants shared by parameters and serializations
//! - [`prefix`] - Output prefix kind paired with its key id
//! - [`material`] - Key material classification
//! - [`parameters`] - Validated primitive parameter sets
//! - [`serialization`] - The key serialization envelope and its wire form

pub mod error;
pub mod material;
pub mod parameters;
pub mod prefix;
pub mod serialization;
pub mod variant;

// Re-export commonly used items
pub use error::{KeyParamsError, KeyParamsResult};
pub use variant::Variant;
