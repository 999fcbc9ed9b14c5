//! Test vector types for key parameter and key serialization tests.

// Some fields are only informational
#![allow(dead_code)]

use keyparams::KeyRecord;
use serde::Deserialize;

/// A test vector suite (top-level JSON structure).
#[derive(Debug, Deserialize)]
pub struct TestVectorSuite<T> {
    pub name: String,
    pub tests: Vec<T>,
}

/// Test vector for AES-CMAC parameter construction.
#[derive(Debug, Deserialize)]
pub struct AesCmacParametersTestVector {
    pub name: String,
    #[serde(rename = "expect-fail")]
    pub expect_fail: bool,
    #[serde(default)]
    pub comment: Option<String>,
    /// Key size to set (null: never set)
    #[serde(rename = "key-size")]
    pub key_size: Option<usize>,
    /// Tag size to set (null: never set)
    #[serde(rename = "tag-size")]
    pub tag_size: Option<usize>,
    /// Variant name (null: left at the default)
    pub variant: Option<String>,
    /// Expected total tag size (null for fail tests)
    #[serde(rename = "total-tag-size", default)]
    pub total_tag_size: Option<usize>,
    /// Expected id requirement (null for fail tests)
    #[serde(rename = "has-id-requirement", default)]
    pub has_id_requirement: Option<bool>,
}

/// Test vector for decoding a key record into a key serialization.
#[derive(Debug, Deserialize)]
pub struct KeySerializationTestVector {
    pub name: String,
    #[serde(rename = "expect-fail")]
    pub expect_fail: bool,
    #[serde(default)]
    pub comment: Option<String>,
    /// The wire record to decode
    pub record: KeyRecord,
    /// Hex-encoded payload (null for fail tests)
    #[serde(rename = "value-hex", default)]
    pub value_hex: Option<String>,
    /// Hex-encoded expected object identifier (null for fail tests)
    #[serde(rename = "object-identifier-hex", default)]
    pub object_identifier_hex: Option<String>,
}

// =============================================================================
// Helper functions
// =============================================================================

/// Decode a hex string to bytes.
/// Returns `None` if the string is not valid hex.
pub fn hex_decode(s: &str) -> Option<Vec<u8>> {
    hex::decode(s).ok()
}

/// Load a test vector suite from a JSON file.
pub fn load_vectors<T: serde::de::DeserializeOwned>(path: &str) -> TestVectorSuite<T> {
    let content = std::fs::read_to_string(path)
        .unwrap_or_else(|e| panic!("Failed to read test vector file {path}: {e}"));
    serde_json::from_str(&content)
        .unwrap_or_else(|e| panic!("Failed to parse test vector file {path}: {e}"))
}
