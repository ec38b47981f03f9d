//! Boundary toward the CAN/J1939 transport layer.
//!
//! The encoder produces a flat byte sequence and a PGN; wrapping them into a
//! bus frame (arbitration identifier, fast-packet segmentation, actual I/O)
//! is the transport collaborator's job. This module only defines the seam and
//! a convenience helper that encodes on the stack before handing off.
use crate::core::MAX_PAYLOAD_BYTES;
use crate::error::SendError;
use crate::infra::codec::traits::ToPayload;

/// Implemented by the transport collaborator that ships encoded payloads.
pub trait PayloadSink {
    /// Transport-specific failure type.
    type Error: core::fmt::Debug;

    /// Dispatch one encoded payload for the given PGN.
    fn send_payload(&mut self, pgn: u32, payload: &[u8]) -> Result<(), Self::Error>;
}

/// Encode `message` into a stack buffer and hand it to `sink`.
///
/// # Errors
///
/// Returns:
/// - [`SendError::Encode`] when payload encoding fails (nothing is sent)
/// - [`SendError::Send`] when the transport refuses the payload
pub fn send_message<M, S>(message: &M, sink: &mut S) -> Result<(), SendError<S::Error>>
where
    M: ToPayload,
    S: PayloadSink,
{
    // Stack-allocate the working buffer to stay heap-free.
    let mut payload_buffer = [0u8; MAX_PAYLOAD_BYTES];

    let len = message
        .to_payload(&mut payload_buffer)
        .map_err(SendError::Encode)?;

    sink.send_payload(message.pgn(), &payload_buffer[..len])
        .map_err(SendError::Send)?;

    Ok(())
}
