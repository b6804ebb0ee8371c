//! `telejson-json-text` — canonical JSON text encoding of blueprint-declared
//! records.
//!
//! One encoder serves every record type: it walks the type's
//! [`MessageDescriptor`](telejson_schema::MessageDescriptor) in declaration
//! order and pulls field values through the
//! [`Record`](telejson_schema::Record) reflection trait (typed path) or out
//! of a [`serde_json::Value`] (dynamic path). Both paths produce identical
//! bytes for equivalent input.
//!
//! Output rules:
//!
//! - Object keys are the schema-declared identifiers, in declaration order.
//! - Integers and timestamps encode as base-10 text; booleans as `true` /
//!   `false`; enums as their integer tag, uniformly.
//! - Fixed arrays always emit exactly their declared length.
//! - No whitespace, no trailing newline; the fixed-buffer path appends a NUL
//!   terminator after the closing brace.
//!
//! On any error the destination content is unspecified and must not be
//! treated as JSON.

pub mod encoder;
pub mod error;
pub mod value;

pub use encoder::{encode_to_slice, encode_to_vec, JsonTextEncoder};
pub use error::EncodeError;
pub use value::{encode_value_to_slice, encode_value_to_vec};
