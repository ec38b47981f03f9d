//! High-level NMEA 2000 surface: lookup tables for enumerated field values,
//! message layout definitions, and the transport-layer boundary.
pub mod lookups;
pub mod messages;
pub mod transport;
