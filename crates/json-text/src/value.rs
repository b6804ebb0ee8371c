//! The dynamic encoding path: interprets a `serde_json::Value` against a
//! descriptor.
//!
//! Gives dynamic producers (tooling, tests, bridge code) the same canonical
//! bytes as the typed path. The descriptor is authoritative: keys are emitted
//! in declaration order, missing fields encode as their zero value, fixed
//! arrays are padded or cut to the declared length, and unknown input keys
//! are ignored. Input whose shape disagrees with the descriptor is an error.

use serde_json::Value;
use telejson_buffers::{FixedWriter, Sink, Writer};
use telejson_schema::{FieldKind, IntWidth, MessageDescriptor};

use crate::encoder::JsonTextEncoder;
use crate::error::EncodeError;

/// Dynamic counterpart of [`encode_to_slice`](crate::encode_to_slice).
pub fn encode_value_to_slice(
    value: &Value,
    desc: &MessageDescriptor,
    dst: &mut [u8],
) -> Result<usize, EncodeError> {
    let mut writer = FixedWriter::new(dst);
    JsonTextEncoder::new(&mut writer).write_value(value, desc)?;
    Ok(writer.terminate()?)
}

/// Dynamic counterpart of [`encode_to_vec`](crate::encode_to_vec).
pub fn encode_value_to_vec(
    value: &Value,
    desc: &MessageDescriptor,
) -> Result<Vec<u8>, EncodeError> {
    let mut writer = Writer::new();
    JsonTextEncoder::new(&mut writer).write_value(value, desc)?;
    Ok(writer.flush())
}

impl<S: Sink> JsonTextEncoder<S> {
    /// Writes one complete JSON object for `value` interpreted as `desc`.
    ///
    /// `Value::Null` stands for an entirely unset record and encodes as the
    /// zero value of every field.
    pub fn write_value(
        &mut self,
        value: &Value,
        desc: &MessageDescriptor,
    ) -> Result<(), EncodeError> {
        let obj = match value {
            Value::Object(map) => Some(map),
            Value::Null => None,
            _ => return Err(EncodeError::NotAnObject { message: desc.name }),
        };
        self.sink.push(b'{')?;
        for (i, field) in desc.fields.iter().enumerate() {
            if i > 0 {
                self.sink.push(b',')?;
            }
            self.write_key(field.name)?;
            match obj.and_then(|map| map.get(field.name)) {
                Some(item) => self.write_value_kind(item, &field.kind, desc.name, field.name)?,
                None => self.write_zero(&field.kind, desc.name, field.name)?,
            }
        }
        self.sink.push(b'}')?;
        Ok(())
    }

    fn write_value_kind(
        &mut self,
        value: &Value,
        kind: &FieldKind,
        message: &'static str,
        field: &'static str,
    ) -> Result<(), EncodeError> {
        let mismatch = EncodeError::KindMismatch { message, field };
        match kind {
            FieldKind::Bool => match value {
                Value::Bool(b) => self.write_bool(*b),
                Value::Null => self.write_bool(false),
                _ => Err(mismatch),
            },
            FieldKind::Int(width) => {
                let int = value
                    .as_i64()
                    .filter(|&i| fits_int(i, *width))
                    .ok_or(mismatch)?;
                self.write_int(int)
            }
            FieldKind::Uint(width) => {
                let uint = value
                    .as_u64()
                    .filter(|&u| fits_uint(u, *width))
                    .ok_or(mismatch)?;
                self.write_uint(uint)
            }
            FieldKind::Timestamp => {
                let uint = value.as_u64().ok_or(mismatch)?;
                self.write_uint(uint)
            }
            FieldKind::Enum(desc) => {
                let tag = value
                    .as_u64()
                    .and_then(|u| u32::try_from(u).ok())
                    .ok_or(mismatch)?;
                self.write_enum(tag, *desc)
            }
            FieldKind::Message(desc) => self.write_value(value, desc),
            FieldKind::Array { elem, len } => {
                let items: &[Value] = match value {
                    Value::Array(items) => items.as_slice(),
                    Value::Null => &[],
                    _ => return Err(mismatch),
                };
                self.sink.push(b'[')?;
                for i in 0..*len {
                    if i > 0 {
                        self.sink.push(b',')?;
                    }
                    match items.get(i) {
                        Some(item) => self.write_value_kind(item, elem, message, field)?,
                        None => self.write_zero(elem, message, field)?,
                    }
                }
                self.sink.push(b']')?;
                Ok(())
            }
        }
    }

    /// Writes the zero value of a kind: `false`, `0`, tag 0, or a record /
    /// array of zero values. An enum whose closed set lacks tag 0 has no
    /// zero value and is rejected.
    fn write_zero(
        &mut self,
        kind: &FieldKind,
        message: &'static str,
        field: &'static str,
    ) -> Result<(), EncodeError> {
        match kind {
            FieldKind::Bool => self.write_bool(false),
            FieldKind::Int(_) | FieldKind::Uint(_) | FieldKind::Timestamp => {
                self.sink.push(b'0')?;
                Ok(())
            }
            FieldKind::Enum(desc) => self.write_enum(0, desc),
            FieldKind::Message(desc) => self.write_value(&Value::Null, desc),
            FieldKind::Array { elem, len } => {
                self.sink.push(b'[')?;
                for i in 0..*len {
                    if i > 0 {
                        self.sink.push(b',')?;
                    }
                    self.write_zero(elem, message, field)?;
                }
                self.sink.push(b']')?;
                Ok(())
            }
        }
    }
}

fn fits_int(i: i64, width: IntWidth) -> bool {
    match width {
        IntWidth::W8 => i >= i8::MIN as i64 && i <= i8::MAX as i64,
        IntWidth::W16 => i >= i16::MIN as i64 && i <= i16::MAX as i64,
        IntWidth::W32 => i >= i32::MIN as i64 && i <= i32::MAX as i64,
        IntWidth::W64 => true,
    }
}

fn fits_uint(u: u64, width: IntWidth) -> bool {
    match width {
        IntWidth::W8 => u <= u8::MAX as u64,
        IntWidth::W16 => u <= u16::MAX as u64,
        IntWidth::W32 => u <= u32::MAX as u64,
        IntWidth::W64 => true,
    }
}
