//! Static descriptors for blueprint-declared types.
//!
//! Descriptors are plain data with `&'static` links, declared as `const`
//! items by generated code so they can participate in `const` size
//! computation.

/// A record type: a named aggregate of fields in declaration order.
///
/// Declaration order is the canonical JSON key-emission order.
#[derive(Debug)]
pub struct MessageDescriptor {
    pub name: &'static str,
    pub fields: &'static [FieldDescriptor],
}

/// One field of a record.
#[derive(Debug)]
pub struct FieldDescriptor {
    /// The schema-declared identifier, emitted verbatim as the JSON key.
    pub name: &'static str,
    pub kind: FieldKind,
}

/// The semantic type of a field.
#[derive(Debug)]
pub enum FieldKind {
    Bool,
    Int(IntWidth),
    Uint(IntWidth),
    /// An unsigned integer count (e.g. epoch milliseconds). Encodes exactly
    /// like `Uint(IntWidth::W64)`; no date formatting is applied.
    Timestamp,
    Enum(&'static EnumDescriptor),
    Message(&'static MessageDescriptor),
    /// Fixed-size array; the length is part of the type, not runtime state.
    Array {
        elem: &'static FieldKind,
        len: usize,
    },
}

/// Storage width of an integer field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IntWidth {
    W8,
    W16,
    W32,
    W64,
}

/// A closed set of named integer tags.
#[derive(Debug)]
pub struct EnumDescriptor {
    pub name: &'static str,
    pub variants: &'static [EnumVariant],
}

#[derive(Debug)]
pub struct EnumVariant {
    pub name: &'static str,
    pub tag: u32,
}

impl EnumDescriptor {
    /// Whether `tag` belongs to the closed set.
    pub fn contains(&self, tag: u32) -> bool {
        self.variants.iter().any(|v| v.tag == tag)
    }

    /// Canonical name of `tag`, if declared.
    pub fn name_of(&self, tag: u32) -> Option<&'static str> {
        self.variants
            .iter()
            .find(|v| v.tag == tag)
            .map(|v| v.name)
    }

    /// Largest declared tag. Zero for an empty enum.
    pub const fn max_tag(&self) -> u32 {
        let mut max = 0;
        let mut i = 0;
        while i < self.variants.len() {
            if self.variants[i].tag > max {
                max = self.variants[i].tag;
            }
            i += 1;
        }
        max
    }
}
