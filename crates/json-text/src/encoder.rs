//! The typed encoding path: scalar and composite encoders driven by a
//! record's descriptor.

use telejson_buffers::{FixedWriter, Sink, Writer};
use telejson_schema::{ArrayValue, EnumDescriptor, FieldKind, FieldValue, Record};

use crate::error::EncodeError;

/// Encodes one record into a caller-supplied buffer and NUL-terminates it.
///
/// Returns the text length, terminator excluded. A destination of
/// [`max_json_size`](telejson_schema::max_json_size)` + 1` bytes always
/// suffices. On error the destination content is unspecified.
///
/// # Example
///
/// ```
/// use telejson_schema::{FieldDescriptor, FieldKind, FieldValue, MessageDescriptor, Record};
///
/// const FLAG: MessageDescriptor = MessageDescriptor {
///     name: "Flag",
///     fields: &[FieldDescriptor { name: "ok", kind: FieldKind::Bool }],
/// };
///
/// struct Flag {
///     ok: bool,
/// }
///
/// impl Record for Flag {
///     fn descriptor(&self) -> &'static MessageDescriptor {
///         &FLAG
///     }
///     fn field(&self, _index: usize) -> FieldValue<'_> {
///         FieldValue::Bool(self.ok)
///     }
/// }
///
/// let mut buf = [0u8; 16];
/// let len = telejson_json_text::encode_to_slice(&Flag { ok: true }, &mut buf).unwrap();
/// assert_eq!(&buf[..len], br#"{"ok":true}"#);
/// assert_eq!(buf[len], 0);
/// ```
pub fn encode_to_slice(record: &dyn Record, dst: &mut [u8]) -> Result<usize, EncodeError> {
    let mut writer = FixedWriter::new(dst);
    JsonTextEncoder::new(&mut writer).write_record(record)?;
    Ok(writer.terminate()?)
}

/// Encodes one record into a freshly grown buffer (no terminator).
pub fn encode_to_vec(record: &dyn Record) -> Result<Vec<u8>, EncodeError> {
    let mut writer = Writer::new();
    JsonTextEncoder::new(&mut writer).write_record(record)?;
    Ok(writer.flush())
}

/// JSON text encoder over any [`Sink`].
///
/// All punctuation and token writes funnel through the sink so the capacity
/// contract is enforced centrally; the encoder itself holds no other state.
pub struct JsonTextEncoder<S> {
    pub(crate) sink: S,
}

impl<S: Sink> JsonTextEncoder<S> {
    pub fn new(sink: S) -> Self {
        Self { sink }
    }

    pub fn into_sink(self) -> S {
        self.sink
    }

    /// Writes one complete JSON object for `record`, fields in declaration
    /// order.
    pub fn write_record(&mut self, record: &dyn Record) -> Result<(), EncodeError> {
        let desc = record.descriptor();
        self.sink.push(b'{')?;
        for (i, field) in desc.fields.iter().enumerate() {
            if i > 0 {
                self.sink.push(b',')?;
            }
            self.write_key(field.name)?;
            self.write_field(record.field(i), &field.kind, desc.name, field.name)?;
        }
        self.sink.push(b'}')?;
        Ok(())
    }

    pub(crate) fn write_key(&mut self, name: &str) -> Result<(), EncodeError> {
        self.sink.push(b'"')?;
        self.sink.push_slice(name.as_bytes())?;
        self.sink.push(b'"')?;
        self.sink.push(b':')?;
        Ok(())
    }

    fn write_field(
        &mut self,
        value: FieldValue<'_>,
        kind: &FieldKind,
        message: &'static str,
        field: &'static str,
    ) -> Result<(), EncodeError> {
        match (kind, value) {
            (FieldKind::Bool, FieldValue::Bool(b)) => self.write_bool(b),
            (FieldKind::Int(_), FieldValue::Int(int)) => self.write_int(int),
            (FieldKind::Uint(_), FieldValue::Uint(uint))
            | (FieldKind::Timestamp, FieldValue::Uint(uint)) => self.write_uint(uint),
            (FieldKind::Enum(desc), FieldValue::Enum(tag)) => self.write_enum(tag, *desc),
            (FieldKind::Message(_), FieldValue::Record(record)) => self.write_record(record),
            (FieldKind::Array { elem, len }, FieldValue::Array(arr)) => {
                self.write_array(arr, elem, *len, message, field)
            }
            // Shape disagreement between descriptor and value.
            _ => Err(EncodeError::KindMismatch { message, field }),
        }
    }

    fn write_array(
        &mut self,
        arr: &dyn ArrayValue,
        elem: &FieldKind,
        len: usize,
        message: &'static str,
        field: &'static str,
    ) -> Result<(), EncodeError> {
        if arr.len() != len {
            return Err(EncodeError::KindMismatch { message, field });
        }
        self.sink.push(b'[')?;
        for i in 0..len {
            if i > 0 {
                self.sink.push(b',')?;
            }
            self.write_field(arr.at(i), elem, message, field)?;
        }
        self.sink.push(b']')?;
        Ok(())
    }

    pub fn write_bool(&mut self, b: bool) -> Result<(), EncodeError> {
        self.sink.push_slice(if b { b"true" } else { b"false" })?;
        Ok(())
    }

    pub fn write_int(&mut self, int: i64) -> Result<(), EncodeError> {
        self.sink.push_slice(int.to_string().as_bytes())?;
        Ok(())
    }

    pub fn write_uint(&mut self, uint: u64) -> Result<(), EncodeError> {
        self.sink.push_slice(uint.to_string().as_bytes())?;
        Ok(())
    }

    /// Writes an enum tag, rejecting tags outside the closed set.
    pub fn write_enum(&mut self, tag: u32, desc: &EnumDescriptor) -> Result<(), EncodeError> {
        if !desc.contains(tag) {
            return Err(EncodeError::InvalidEnumTag {
                enum_name: desc.name,
                tag,
            });
        }
        self.write_uint(tag as u64)
    }
}
