//! `n2k-encode` library: bit-level encoding of NMEA 2000 payloads in a
//! `no_std` environment. Message layouts are declared as static field tables;
//! the codec engine turns an ordered list of optional values into the exact
//! byte sequence expected on the wire, sentinel-filling absent fields.
#![no_std]
//==================================================================================
/// Core data types shared by layout tables and the codec engine.
pub mod core;
/// Domain and low-level errors (layout validation, encoding, bit writes).
pub mod error;
/// Bit-manipulation primitives and the payload encoding engine.
pub mod infra;
/// NMEA 2000 protocol surface: lookup tables, message definitions, and the
/// transport boundary.
pub mod protocol;
//==================================================================================
