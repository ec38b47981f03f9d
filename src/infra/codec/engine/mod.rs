//! Layout-driven payload encoding engine. It binds a caller-supplied value
//! list to the fields of a static [`MessageLayout`] and lays every field into
//! the output buffer through the bit-level writer.
//!
//! Encoding is a pure transform with no retained state: either the whole
//! payload is produced, or an error is returned before any byte is written.
use super::bits::BitWriter;
use crate::core::{
    FieldSpec, FieldValue, MessageLayout, PayloadBytes, MAX_LAYOUT_FIELDS, MAX_PAYLOAD_BYTES,
};
use crate::error::{EncodeError, LayoutError};

/// A field resolved and validated during the prepare pass, ready to be laid
/// into the buffer.
#[derive(Debug, Clone, Copy)]
struct PreparedField {
    /// Canonical write position (MSB-first bit address).
    position: usize,
    /// Field width in bits.
    bit_length: u32,
    /// Final bit pattern, right-aligned in the u64.
    bits: u64,
}

impl PreparedField {
    const fn empty() -> Self {
        Self {
            position: 0,
            bit_length: 0,
            bits: 0,
        }
    }
}

/// Encodes a value list into `buffer` according to `layout`.
///
/// Values bind positionally: the Nth entry corresponds to the field with the
/// Nth-smallest `order` (ties broken by declaration order). `None` entries
/// encode as the "data not available" sentinel. Bits not covered by any field
/// are left at zero, so the output always spans the full declared length.
///
/// # Return value
/// Number of bytes written into the buffer (always `layout.byte_length`).
///
/// # Errors
/// All failure modes are detected during a prepare pass, before any byte of
/// `buffer` is modified: layout/binding defects ([`LayoutError`]), values that
/// do not fit their field after scaling, negative values for unsigned fields,
/// and undersized buffers.
pub fn encode(
    layout: &MessageLayout,
    values: &[Option<FieldValue>],
    buffer: &mut [u8],
) -> Result<usize, EncodeError> {
    if values.len() != layout.fields.len() {
        return Err(LayoutError::ValueCountMismatch {
            expected: layout.fields.len(),
            provided: values.len(),
        }
        .into());
    }
    if layout.fields.len() > MAX_LAYOUT_FIELDS {
        return Err(LayoutError::TooManyFields {
            max: MAX_LAYOUT_FIELDS,
            declared: layout.fields.len(),
        }
        .into());
    }

    let byte_length = layout.byte_length as usize;
    if buffer.len() < byte_length {
        return Err(EncodeError::BufferTooSmall {
            needed: byte_length,
            available: buffer.len(),
        });
    }

    // ==================== Prepare pass ====================
    // Resolve positions, scale values, and range-check everything up front so
    // that encoding stays all-or-nothing.
    let mut prepared = [PreparedField::empty(); MAX_LAYOUT_FIELDS];

    for (field_index, field) in layout.fields.iter().enumerate() {
        if !(1..=64).contains(&field.bit_length) {
            return Err(LayoutError::InvalidBitLength {
                field: field.id,
                bits: field.bit_length,
            }
            .into());
        }
        if let Some(resolution) = field.resolution {
            if !(resolution.is_finite() && resolution > 0.0) {
                return Err(LayoutError::InvalidResolution { field: field.id }.into());
            }
        }

        let position = field.position()?;
        if position + field.bit_length as usize > layout.bit_length() {
            return Err(LayoutError::FieldOutOfBounds {
                field: field.id,
                total_bits: layout.bit_length(),
            }
            .into());
        }

        let value_index = binding_rank(layout.fields, field_index);
        let bits = match &values[value_index] {
            Some(value) => prepare_value(field, value)?,
            None => sentinel_bits(field),
        };

        #[cfg(feature = "defmt")]
        defmt::trace!(
            "field {} -> position: {}, length: {}",
            field.id,
            position,
            field.bit_length
        );

        prepared[field_index] = PreparedField {
            position,
            bit_length: field.bit_length,
            bits,
        };
    }

    // ==================== Write pass ====================
    // Unwritten bits stay zero: that is the padding up to the declared length.
    buffer[..byte_length].fill(0x00);
    let mut writer = BitWriter::new(&mut buffer[..byte_length]);

    for field in &prepared[..layout.fields.len()] {
        if field.bit_length % 8 == 0 {
            // Whole-byte fields are stored least-significant byte first.
            let num_bytes = (field.bit_length / 8) as usize;
            for byte_index in 0..num_bytes {
                let byte = (field.bits >> (8 * byte_index)) & 0xFF;
                writer
                    .overwrite_u64(byte, field.position + 8 * byte_index, 8)
                    .map_err(|e| EncodeError::BitWrite { err: e })?;
            }
        } else {
            // Sub-byte and other non-multiple widths keep MSB-first bit order.
            writer
                .overwrite_u64(field.bits, field.position, field.bit_length as u8)
                .map_err(|e| EncodeError::BitWrite { err: e })?;
        }
    }

    Ok(byte_length)
}

/// Convenience wrapper around [`encode`] returning a stack-allocated buffer.
pub fn encode_payload(
    layout: &MessageLayout,
    values: &[Option<FieldValue>],
) -> Result<PayloadBytes, EncodeError> {
    if layout.byte_length as usize > MAX_PAYLOAD_BYTES {
        return Err(EncodeError::BufferTooSmall {
            needed: layout.byte_length as usize,
            available: MAX_PAYLOAD_BYTES,
        });
    }

    let mut payload = PayloadBytes::new();
    payload.len = encode(layout, values, &mut payload.data)?;
    Ok(payload)
}

/// Rank of `index` among the layout's fields when sorted by ascending
/// `order`, declaration order breaking ties. The rank is the index into the
/// value list that binds to this field.
fn binding_rank(fields: &[FieldSpec], index: usize) -> usize {
    let field = &fields[index];
    let mut rank = 0;
    for (other_index, other) in fields.iter().enumerate() {
        if (other.order, other_index) < (field.order, index) {
            rank += 1;
        }
    }
    rank
}

/// Scale, truncate, and range-check a present value; returns the final bit
/// pattern right-aligned in a u64.
fn prepare_value(field: &FieldSpec, value: &FieldValue) -> Result<u64, EncodeError> {
    let scaled: i128 = match field.resolution {
        Some(resolution) => {
            let raw = match value {
                FieldValue::Unsigned(raw) => *raw as f64,
                FieldValue::Signed(raw) => *raw as f64,
                FieldValue::Float(raw) => *raw,
            };
            truncate_to_int(field, raw / resolution)?
        }
        None => match value {
            FieldValue::Unsigned(raw) => *raw as i128,
            FieldValue::Signed(raw) => *raw as i128,
            FieldValue::Float(raw) => truncate_to_int(field, *raw)?,
        },
    };

    check_range(field, scaled)
}

/// Narrow a scaled float to an integer, truncating toward zero as the
/// reference encoder does. Non-finite inputs are rejected instead of being
/// clamped, and negative floats never reach an unsigned field: truncation
/// would fold values in (-1.0, 0.0) onto zero and hide the sign error.
fn truncate_to_int(field: &FieldSpec, value: f64) -> Result<i128, EncodeError> {
    if !value.is_finite() {
        return Err(EncodeError::NonFinite { field: field.id });
    }
    if !field.signed && value < 0.0 {
        return Err(EncodeError::NegativeUnsigned { field: field.id });
    }
    Ok(value as i128)
}

/// Verify that `scaled` is representable on `(signed, bit_length)` and return
/// its two's-complement/unsigned bit pattern. Over-wide values fail loudly;
/// nothing is silently truncated.
fn check_range(field: &FieldSpec, scaled: i128) -> Result<u64, EncodeError> {
    let bits = field.bit_length;

    if field.signed {
        let min = -(1i128 << (bits - 1));
        let max = (1i128 << (bits - 1)) - 1;
        if scaled < min || scaled > max {
            return Err(EncodeError::OutOfRange {
                field: field.id,
                value: scaled,
                min,
                max,
            });
        }
        Ok((scaled as i64 as u64) & width_mask(bits))
    } else {
        if scaled < 0 {
            return Err(EncodeError::NegativeUnsigned { field: field.id });
        }
        let max = if bits == 64 {
            u64::MAX as i128
        } else {
            (1i128 << bits) - 1
        };
        if scaled > max {
            return Err(EncodeError::OutOfRange {
                field: field.id,
                value: scaled,
                min: 0,
                max,
            });
        }
        Ok(scaled as u64)
    }
}

/// "Data not available" bit pattern: all ones, with the sign bit forced to
/// zero for signed fields (the standard's sentinel is `2^(L-1) - 1`, not a
/// two's-complement -1).
fn sentinel_bits(field: &FieldSpec) -> u64 {
    let ones = width_mask(field.bit_length);
    if field.signed {
        ones >> 1
    } else {
        ones
    }
}

/// Mask covering the low `bits` bits of a u64.
fn width_mask(bits: u32) -> u64 {
    if bits >= 64 {
        u64::MAX
    } else {
        (1u64 << bits) - 1
    }
}

//==================================================================================TESTS
