//! Codec components: the MSB-first bit writer, the layout-driven encoding
//! engine, and the payload traits exposed to upper layers.
pub mod bits;
pub mod engine;
pub mod traits;
