//! Error definitions shared across library modules.
//! Each type models a specific failure scenario (layout validation, value
//! encoding, bit-level writes, transport hand-off).
use thiserror_no_std::Error;

#[derive(Error, Debug, PartialEq, Eq)]
/// Structural defects in a message layout or its binding to a value list.
/// Fatal for the caller: the configuration must be fixed, not retried.
pub enum LayoutError {
    /// Value list length does not match the field count.
    #[error("Value count mismatch -> expected: {expected}, provided: {provided}")]
    ValueCountMismatch { expected: usize, provided: usize },
    /// Two fields share the same binding rank.
    #[error("Duplicate field order {order} in layout")]
    DuplicateOrder { order: u8 },
    /// Two fields claim intersecting bit ranges.
    #[error("Fields {first} and {second} overlap in the payload")]
    OverlappingFields {
        first: &'static str,
        second: &'static str,
    },
    /// Field width outside the supported 1..=64 range.
    #[error("Invalid bit length {bits} for field {field}")]
    InvalidBitLength { field: &'static str, bits: u32 },
    /// Resolution factor is not a positive finite number.
    #[error("Invalid resolution for field {field}")]
    InvalidResolution { field: &'static str },
    /// Alignment hint exceeds the declared offset.
    #[error("Bit start {bit_start} exceeds bit offset {bit_offset} for field {field}")]
    InvalidAlignment {
        field: &'static str,
        bit_offset: u32,
        bit_start: u32,
    },
    /// Field extends past the declared payload length.
    #[error("Field {field} does not fit within the {total_bits} bit payload")]
    FieldOutOfBounds {
        field: &'static str,
        total_bits: usize,
    },
    /// Layout declares more fields than the engine supports.
    #[error("Layout declares {declared} fields, maximum is {max}")]
    TooManyFields { max: usize, declared: usize },
}

//================================================================================ENCODE_ERROR

#[derive(Error, Debug, PartialEq)]
/// Issues encountered while encoding a value list into a payload.
/// Every variant is detected before a single byte is emitted.
pub enum EncodeError {
    /// Layout or binding defect surfaced during encoding.
    #[error(transparent)]
    Layout(#[from] LayoutError),
    /// Scaled value does not fit the field's `(signed, bit_length)` range.
    #[error("Value {value} for field {field} is outside [{min}, {max}]")]
    OutOfRange {
        field: &'static str,
        value: i128,
        min: i128,
        max: i128,
    },
    /// Value is NaN or infinite, before or after scaling.
    #[error("Non-finite value for field {field}")]
    NonFinite { field: &'static str },
    /// Negative value supplied for an unsigned field.
    #[error("Negative value for unsigned field {field}")]
    NegativeUnsigned { field: &'static str },
    /// Provided buffer is too small for the declared payload length.
    #[error("Buffer too small -> needed: {needed}, available: {available}")]
    BufferTooSmall { needed: usize, available: usize },
    /// Failed while writing bits into the output buffer.
    #[error("BitWrite error: {err}")]
    BitWrite { err: BitWriterError },
}

//==================================================================================SEND_ERROR

#[derive(Debug, Error)]
/// Errors encountered when handing a message to the transport boundary
/// (encode + dispatch).
pub enum SendError<E: core::fmt::Debug> {
    /// Payload encoding failed.
    #[error("Payload encoding failed: {0}")]
    Encode(EncodeError),
    /// Transport layer refused or failed to dispatch the payload.
    #[error("Transport send error: {0:?}")]
    Send(E),
}

//==================================================================================BITWRITER_ERRORS

#[derive(Debug, Error, PartialEq, Eq)]
/// Errors raised during bitwise writes into a buffer.
pub enum BitWriterError {
    /// Attempted to write beyond the provided capacity.
    #[error("Attempted to write out of bounds -> asked: {asked}, available: {available}")]
    OutOfBounds { asked: usize, available: usize },
    /// Field is too large for the provided type.
    #[error("Cannot write more than {max} bits. Requested: {asked}")]
    TooLongForType { max: u8, asked: u8 },
}
