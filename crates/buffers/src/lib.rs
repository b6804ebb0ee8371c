//! `telejson-buffers` — output buffer writers for telejson encoders.
//!
//! Two destinations are supported:
//!
//! - [`FixedWriter`]: a cursor over a caller-supplied byte slice. Every append
//!   is bounds-checked and a full buffer is reported as [`CapacityError`],
//!   never truncated or written past the end.
//! - [`Writer`]: an auto-growing buffer for callers that do not want to size
//!   the destination up front.
//!
//! Encoders write through the [`Sink`] trait so the overflow contract is
//! enforced in one place rather than per field.

pub mod fixed;
pub mod sink;
pub mod writer;

pub use fixed::FixedWriter;
pub use sink::{CapacityError, Sink};
pub use writer::Writer;
