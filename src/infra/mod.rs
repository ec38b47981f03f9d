//! Infrastructure layer: bit-manipulation primitives and the payload
//! encoding engine.
pub mod codec;
