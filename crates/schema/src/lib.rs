//! `telejson-schema` — the intermediate description of blueprint-declared
//! record types.
//!
//! A blueprint compiler reduces each record type to a [`MessageDescriptor`]:
//! an ordered list of named, typed fields, with enum and fixed-array metadata.
//! Encoders are driven generically off this description instead of being
//! hand-written per record type.
//!
//! The crate carries three pieces:
//!
//! - [`descriptor`]: the static data model (`MessageDescriptor`,
//!   `FieldDescriptor`, `FieldKind`, `EnumDescriptor`).
//! - [`record`]: the [`Record`] reflection trait generated record types
//!   implement so a generic encoder can walk their fields.
//! - [`size`]: worst-case encoded-size computation, usable in `const` context
//!   so generated code can expose buffer-size constants.

pub mod descriptor;
pub mod record;
pub mod size;

pub use descriptor::{
    EnumDescriptor, EnumVariant, FieldDescriptor, FieldKind, IntWidth, MessageDescriptor,
};
pub use record::{ArrayValue, FieldValue, Record};
pub use size::{max_json_size, max_kind_size};
