//! Key serialization envelope.
//!
//! - [`KeySerialization`] - validated envelope around an opaque key payload
//! - [`KeyRecord`] - the same envelope with wire-numbered enumerations

mod key;
mod wire;

pub use key::{KeySerialization, OBJECT_IDENTIFIER_ID_MARKER};
pub use wire::KeyRecord;
