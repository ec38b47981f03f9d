//! Public traits exposed by the codec engine. They decouple typed message
//! structures from the encoding logic and give upper layers (notably the
//! transport boundary) a uniform API.
use crate::error::EncodeError;

//==================================================================================TO_PAYLOAD
/// Serialize a message structure into a wire-ready byte sequence.
///
/// Implemented by every typed message; implementations bind their fields to
/// the message's static [`MessageLayout`](crate::core::MessageLayout) and
/// delegate to the encoding engine.
pub trait ToPayload {
    /// Parameter Group Number transmitted alongside the payload.
    fn pgn(&self) -> u32;

    /// Serialize the structure into the provided buffer.
    ///
    /// * `buffer`: destination buffer for serialized bytes.
    ///
    /// Returns the number of bytes written on success.
    fn to_payload(&self, buffer: &mut [u8]) -> Result<usize, EncodeError>;

    /// Serialized payload length for this structure.
    fn payload_len(&self) -> usize;
}
