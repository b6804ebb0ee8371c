use telejson_buffers::CapacityError;
use thiserror::Error;

/// Failure outcomes of one encode call.
///
/// `Capacity` is a destination problem; the remaining variants are data
/// problems, reported distinctly so callers can tell a short buffer from a
/// corrupt record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum EncodeError {
    /// Destination buffer cannot hold the full encoded text plus terminator.
    #[error(transparent)]
    Capacity(#[from] CapacityError),

    /// An enum field holds a tag outside its closed set.
    #[error("enum {enum_name} has no tag {tag}")]
    InvalidEnumTag { enum_name: &'static str, tag: u32 },

    /// A field value's shape disagrees with its declared kind.
    #[error("field {field} of message {message} does not match its declared kind")]
    KindMismatch {
        message: &'static str,
        field: &'static str,
    },

    /// Dynamic input for a record position was not a JSON object.
    #[error("value for message {message} is not a JSON object")]
    NotAnObject { message: &'static str },
}
