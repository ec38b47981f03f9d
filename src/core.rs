//! Defines the "data contract" between static message layouts (the tables)
//! and the encoding engine (the interpreter).
//!
//! Layouts are declared once per PGN as `static` items built from these types.
//! The `engine` module consumes them to build binary payloads.

use crate::error::LayoutError;

/// Maximum payload size handled by [`PayloadBytes`]. 223 bytes is the Fast
/// Packet payload limit.
pub const MAX_PAYLOAD_BYTES: usize = 223;

/// Maximum number of fields a single layout may declare.
pub const MAX_LAYOUT_FIELDS: usize = 32;

/// Descriptor for a single field within a PGN payload.
///
/// Bit positions are absolute and counted from the most-significant bit of
/// byte 0 (byte 0 bit 0 = offset 0).
#[derive(Debug)]
pub struct FieldSpec {
    /// 1. Binding rank: the Nth value of a value list maps to the field with
    ///    the Nth-smallest `order`. Must be unique within a layout.
    pub order: u8,
    /// 2. Field identifier.
    pub id: &'static str,
    /// 3. Human-readable name (diagnostics).
    pub name: &'static str,
    /// 4. Field width in bits (1..=64).
    pub bit_length: u32,
    /// 5. Absolute bit offset of the field within the payload.
    pub bit_offset: u32,
    /// 6. Sub-byte alignment hint. Zero means the offset designates the
    ///    containing byte and short fields are right-justified within it;
    ///    nonzero means the offset already includes the alignment and must be
    ///    rewound by `bit_start` to find the write position.
    pub bit_start: u32,
    /// 7. Two's-complement encoding when `true`, plain unsigned otherwise.
    pub signed: bool,
    /// 8. Physical-unit-per-LSB scale factor, when relevant. Must be positive.
    pub resolution: Option<f64>,
    /// 9. Physical unit (e.g. "K", "hPa"). Diagnostics only.
    pub unit: Option<&'static str>,
}

impl FieldSpec {
    /// Resolve the canonical bit position at which this field is written.
    ///
    /// Short fields (`bit_length < 8`) with no alignment hint pack from the
    /// high end of their containing byte downward. Fields carrying a nonzero
    /// `bit_start` already store an adjusted offset and are rewound to their
    /// true start.
    pub fn position(&self) -> Result<usize, LayoutError> {
        if self.bit_start == 0 {
            if self.bit_length < 8 {
                Ok((self.bit_offset + 8 - self.bit_length) as usize)
            } else {
                Ok(self.bit_offset as usize)
            }
        } else {
            let position = self.bit_offset.checked_sub(self.bit_start).ok_or(
                LayoutError::InvalidAlignment {
                    field: self.id,
                    bit_offset: self.bit_offset,
                    bit_start: self.bit_start,
                },
            )?;
            Ok(position as usize)
        }
    }
}

/// Descriptor for an entire PGN payload layout.
#[derive(Debug)]
pub struct MessageLayout {
    /// 1. Parameter Group Number carried alongside the payload.
    pub pgn: u32,
    /// 2. Layout identifier.
    pub id: &'static str,
    /// 3. User-facing description.
    pub name: &'static str,
    /// 4. Total payload length in bytes (8 for single-frame PGNs).
    pub byte_length: u16,
    /// 5. Field table. Declaration order need not follow `order`.
    pub fields: &'static [FieldSpec],
}

impl MessageLayout {
    /// Total payload length in bits.
    #[inline]
    pub fn bit_length(&self) -> usize {
        self.byte_length as usize * 8
    }

    /// Check the layout for structural defects at load time: out-of-range bit
    /// lengths, non-positive resolutions, fields spilling past the payload,
    /// duplicate `order` values, and overlapping bit ranges.
    ///
    /// The engine trusts a validated layout and does not re-check overlap on
    /// every encode call.
    pub fn validate(&self) -> Result<(), LayoutError> {
        if self.fields.len() > MAX_LAYOUT_FIELDS {
            return Err(LayoutError::TooManyFields {
                max: MAX_LAYOUT_FIELDS,
                declared: self.fields.len(),
            });
        }

        for field in self.fields {
            if !(1..=64).contains(&field.bit_length) {
                return Err(LayoutError::InvalidBitLength {
                    field: field.id,
                    bits: field.bit_length,
                });
            }

            if let Some(resolution) = field.resolution {
                if !(resolution.is_finite() && resolution > 0.0) {
                    return Err(LayoutError::InvalidResolution { field: field.id });
                }
            }

            let position = field.position()?;
            if position + field.bit_length as usize > self.bit_length() {
                return Err(LayoutError::FieldOutOfBounds {
                    field: field.id,
                    total_bits: self.bit_length(),
                });
            }
        }

        // Pairwise scans; layouts are small so quadratic cost is irrelevant.
        for (idx, field) in self.fields.iter().enumerate() {
            for other in &self.fields[idx + 1..] {
                if field.order == other.order {
                    return Err(LayoutError::DuplicateOrder { order: field.order });
                }

                let field_start = field.position()?;
                let field_end = field_start + field.bit_length as usize;
                let other_start = other.position()?;
                let other_end = other_start + other.bit_length as usize;
                if field_start < other_end && other_start < field_end {
                    return Err(LayoutError::OverlappingFields {
                        first: field.id,
                        second: other.id,
                    });
                }
            }
        }

        Ok(())
    }
}

/// A single field value supplied by the caller.
///
/// A value list is a `&[Option<FieldValue>]` with one entry per field, bound
/// positionally in ascending `order`. `None` means "data not available" and
/// encodes as the all-ones sentinel.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum FieldValue {
    /// Raw unsigned quantity.
    Unsigned(u64),
    /// Raw signed quantity.
    Signed(i64),
    /// Physical quantity; divided by the field resolution before encoding.
    Float(f64),
}

/// Fixed-capacity byte buffer returned by the convenience encode path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PayloadBytes {
    pub len: usize,
    pub data: [u8; MAX_PAYLOAD_BYTES],
}

impl Default for PayloadBytes {
    fn default() -> Self {
        Self {
            len: 0,
            data: [0; MAX_PAYLOAD_BYTES],
        }
    }
}

impl PayloadBytes {
    /// Create an empty buffer.
    pub const fn new() -> Self {
        Self {
            len: 0,
            data: [0; MAX_PAYLOAD_BYTES],
        }
    }

    /// Number of valid bytes stored.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Checks whether the buffer is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Reset the buffer.
    #[inline]
    pub fn clear(&mut self) {
        self.len = 0;
    }

    /// Copy bytes into the buffer and update `len`.
    #[inline]
    pub fn copy_from_slice(&mut self, slice: &[u8]) {
        let clamped = slice.len().min(MAX_PAYLOAD_BYTES);
        self.data[..clamped].copy_from_slice(&slice[..clamped]);
        self.len = clamped;
    }

    /// Immutable view over the populated bytes.
    #[inline]
    pub fn as_slice(&self) -> &[u8] {
        &self.data[..self.len]
    }

    /// Mutable view over the populated bytes.
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [u8] {
        &mut self.data[..self.len]
    }
}
