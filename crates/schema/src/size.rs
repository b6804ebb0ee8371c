//! Worst-case encoded-size computation.
//!
//! Every field kind has a schema-known maximum JSON text length, so the
//! worst case for a whole record is computable from the descriptor alone,
//! with no value in hand. All functions are `const fn` so generated code can
//! expose per-type buffer-size constants.

use crate::descriptor::{FieldKind, IntWidth, MessageDescriptor};

/// Maximum JSON text length of one encoded record (terminator excluded).
///
/// A destination of `max_json_size(desc) + 1` bytes always suffices for the
/// fixed-buffer encoding path, which appends a NUL terminator.
pub const fn max_json_size(desc: &MessageDescriptor) -> usize {
    let n = desc.fields.len();
    let mut size = 2; // braces
    if n > 0 {
        size += n - 1; // commas
    }
    let mut i = 0;
    while i < n {
        let field = &desc.fields[i];
        size += field.name.len() + 3; // key quotes and colon
        size += max_kind_size(&field.kind);
        i += 1;
    }
    size
}

/// Maximum JSON text length of one value of the given kind.
pub const fn max_kind_size(kind: &FieldKind) -> usize {
    match kind {
        FieldKind::Bool => 5, // "false"
        FieldKind::Int(width) => match width {
            IntWidth::W8 => 4,   // -128
            IntWidth::W16 => 6,  // -32768
            IntWidth::W32 => 11, // -2147483648
            IntWidth::W64 => 20, // -9223372036854775808
        },
        FieldKind::Uint(width) => match width {
            IntWidth::W8 => 3,
            IntWidth::W16 => 5,
            IntWidth::W32 => 10,
            IntWidth::W64 => 20,
        },
        FieldKind::Timestamp => 20,
        FieldKind::Enum(desc) => decimal_len(desc.max_tag() as u64),
        FieldKind::Message(desc) => max_json_size(desc),
        FieldKind::Array { elem, len } => {
            let mut size = 2; // brackets
            if *len > 0 {
                size += *len - 1; // commas
            }
            size + *len * max_kind_size(elem)
        }
    }
}

const fn decimal_len(mut v: u64) -> usize {
    let mut len = 1;
    while v >= 10 {
        v /= 10;
        len += 1;
    }
    len
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::descriptor::{EnumDescriptor, EnumVariant, FieldDescriptor};

    const MODE: EnumDescriptor = EnumDescriptor {
        name: "Mode",
        variants: &[
            EnumVariant {
                name: "OFF",
                tag: 0,
            },
            EnumVariant {
                name: "ON",
                tag: 107,
            },
        ],
    };

    const FLAG: MessageDescriptor = MessageDescriptor {
        name: "Flag",
        fields: &[FieldDescriptor {
            name: "ok",
            kind: FieldKind::Bool,
        }],
    };

    #[test]
    fn bool_record_worst_case_is_exact() {
        // {"ok":false}
        assert_eq!(max_json_size(&FLAG), 12);
    }

    #[test]
    fn empty_record() {
        const EMPTY: MessageDescriptor = MessageDescriptor {
            name: "Empty",
            fields: &[],
        };
        assert_eq!(max_json_size(&EMPTY), 2);
    }

    #[test]
    fn integer_widths() {
        assert_eq!(max_kind_size(&FieldKind::Int(IntWidth::W8)), 4);
        assert_eq!(max_kind_size(&FieldKind::Int(IntWidth::W64)), 20);
        assert_eq!(max_kind_size(&FieldKind::Uint(IntWidth::W8)), 3);
        assert_eq!(max_kind_size(&FieldKind::Uint(IntWidth::W32)), 10);
        assert_eq!(max_kind_size(&FieldKind::Timestamp), 20);
    }

    #[test]
    fn enum_size_tracks_largest_tag() {
        assert_eq!(max_kind_size(&FieldKind::Enum(&MODE)), 3); // "107"
    }

    #[test]
    fn array_includes_commas_and_brackets() {
        const KIND: FieldKind = FieldKind::Array {
            elem: &FieldKind::Int(IntWidth::W32),
            len: 3,
        };
        // [ + 3 * 11 + 2 commas + ]
        assert_eq!(max_kind_size(&KIND), 2 + 33 + 2);
    }

    #[test]
    fn nested_message_size_composes() {
        const INNER: MessageDescriptor = MessageDescriptor {
            name: "Inner",
            fields: &[FieldDescriptor {
                name: "v",
                kind: FieldKind::Uint(IntWidth::W8),
            }],
        };
        const OUTER: MessageDescriptor = MessageDescriptor {
            name: "Outer",
            fields: &[
                FieldDescriptor {
                    name: "inner",
                    kind: FieldKind::Message(&INNER),
                },
                FieldDescriptor {
                    name: "ok",
                    kind: FieldKind::Bool,
                },
            ],
        };
        // {"v":255} is 9 bytes
        assert_eq!(max_json_size(&INNER), 9);
        // {"inner":{"v":255},"ok":false}
        assert_eq!(max_json_size(&OUTER), 2 + 1 + (5 + 3 + 9) + (2 + 3 + 5));
    }

    #[test]
    fn size_is_usable_in_const_context() {
        const SIZE: usize = max_json_size(&FLAG);
        assert_eq!(SIZE, 12);
    }
}
