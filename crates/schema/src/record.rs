//! The reflection seam between generated record types and generic encoders.

use crate::descriptor::MessageDescriptor;

/// A typed record value that can be walked field by field.
///
/// Generated record types implement this so a single generic encoder can
/// serialize any of them; the implementation is mechanical, mapping each
/// descriptor field index to the corresponding struct member.
pub trait Record {
    /// The static description of this record type.
    fn descriptor(&self) -> &'static MessageDescriptor;

    /// Value of the field at `index` in declaration order.
    ///
    /// `index` is always below `descriptor().fields.len()` when called by the
    /// encoders in this workspace.
    fn field(&self, index: usize) -> FieldValue<'_>;
}

/// Borrowed view of one field value.
pub enum FieldValue<'a> {
    Bool(bool),
    Int(i64),
    Uint(u64),
    /// Raw enum tag; validated against the field's `EnumDescriptor` at
    /// encode time.
    Enum(u32),
    Record(&'a dyn Record),
    Array(&'a dyn ArrayValue),
}

/// Borrowed view of a fixed-size array field.
pub trait ArrayValue {
    fn len(&self) -> usize;

    /// Element at `index`, which is always below `len()` when called by the
    /// encoders in this workspace.
    fn at(&self, index: usize) -> FieldValue<'_>;
}

macro_rules! signed_array_value {
    ($($ty:ty),* $(,)?) => {
        $(
            impl<const N: usize> ArrayValue for [$ty; N] {
                fn len(&self) -> usize {
                    N
                }

                fn at(&self, index: usize) -> FieldValue<'_> {
                    FieldValue::Int(self[index] as i64)
                }
            }
        )*
    };
}

macro_rules! unsigned_array_value {
    ($($ty:ty),* $(,)?) => {
        $(
            impl<const N: usize> ArrayValue for [$ty; N] {
                fn len(&self) -> usize {
                    N
                }

                fn at(&self, index: usize) -> FieldValue<'_> {
                    FieldValue::Uint(self[index] as u64)
                }
            }
        )*
    };
}

signed_array_value!(i8, i16, i32, i64);
unsigned_array_value!(u8, u16, u32, u64);

impl<T: Record, const N: usize> ArrayValue for [T; N] {
    fn len(&self) -> usize {
        N
    }

    fn at(&self, index: usize) -> FieldValue<'_> {
        FieldValue::Record(&self[index])
    }
}

impl<const N: usize> ArrayValue for [bool; N] {
    fn len(&self) -> usize {
        N
    }

    fn at(&self, index: usize) -> FieldValue<'_> {
        FieldValue::Bool(self[index])
    }
}
