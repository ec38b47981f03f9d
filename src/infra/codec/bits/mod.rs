//! Low-level bit manipulation for payload buffers.
//!
//! NMEA 2000 field tables address bits from the most-significant bit of
//! byte 0 (bit 0 = MSB of the first byte), and fields are laid down at
//! absolute positions rather than through a running cursor. The writer
//! below follows that convention: every write names its position explicitly
//! and overwrites exactly the targeted bit range.
use crate::error::BitWriterError;

/// Writer that lays bit segments into a `&mut [u8]` at absolute,
/// MSB-first-addressed positions. Used by the encoding engine to rebuild
/// NMEA 2000 payloads field by field.
pub struct BitWriter<'a> {
    /// Target buffer (typically the payload under construction).
    buffer: &'a mut [u8],
}

impl<'a> BitWriter<'a> {
    /// Create a writer over the provided buffer.
    pub fn new(buffer: &'a mut [u8]) -> Self {
        Self { buffer }
    }

    /// Buffer capacity in bits.
    pub fn bit_capacity(&self) -> usize {
        self.buffer.len() * 8
    }

    /// Overwrite the bits `[position, position + num_bits)` with the
    /// `num_bits` low-order bits of `value`, most-significant bit first.
    /// `num_bits` must stay in the [1, 64] range. Bits outside the target
    /// range are preserved.
    pub fn overwrite_u64(
        &mut self,
        value: u64,
        position: usize,
        num_bits: u8,
    ) -> Result<(), BitWriterError> {
        // Validate admissible bit length.
        if !(1..=64).contains(&num_bits) {
            return Err(BitWriterError::TooLongForType {
                max: 64,
                asked: num_bits,
            });
        }

        let buffer_len_bits = self.buffer.len() * 8;
        let write_end_bit = position + num_bits as usize;

        // Prevent writing beyond the buffer.
        if write_end_bit > buffer_len_bits {
            return Err(BitWriterError::OutOfBounds {
                asked: num_bits as usize,
                available: buffer_len_bits.saturating_sub(position),
            });
        }

        let mut bits_written: u8 = 0;

        while bits_written < num_bits {
            let current_bit = position + bits_written as usize;
            let current_byte_index = current_bit / 8;
            // Distance from the MSB of the current byte.
            let current_bit_offset = current_bit % 8;

            // Number of bits landing in the current byte.
            let bits_to_write_this_iteration =
                (8 - current_bit_offset).min((num_bits - bits_written) as usize) as u8;

            // Bits of `value` still pending after this iteration; the chunk
            // to write sits just above them.
            let bits_remaining = num_bits - bits_written - bits_to_write_this_iteration;

            let mask = ((1u16 << bits_to_write_this_iteration) - 1) as u8;
            let chunk = ((value >> bits_remaining) as u8) & mask;

            // Align the chunk under the byte's MSB-first addressing.
            let shift = 8 - current_bit_offset as u8 - bits_to_write_this_iteration;

            // Update only the relevant bits.
            self.buffer[current_byte_index] &= !(mask << shift);
            self.buffer[current_byte_index] |= chunk << shift;

            bits_written += bits_to_write_this_iteration;
        }

        Ok(())
    }

    /// Convenience helper to overwrite up to 8 bits.
    pub fn overwrite_u8(
        &mut self,
        value: u8,
        position: usize,
        num_bits: u8,
    ) -> Result<(), BitWriterError> {
        if num_bits > 8 {
            return Err(BitWriterError::TooLongForType {
                max: 8,
                asked: num_bits,
            });
        }
        self.overwrite_u64(value as u64, position, num_bits)
    }

    /// Convenience helper to overwrite up to 16 bits.
    pub fn overwrite_u16(
        &mut self,
        value: u16,
        position: usize,
        num_bits: u8,
    ) -> Result<(), BitWriterError> {
        if num_bits > 16 {
            return Err(BitWriterError::TooLongForType {
                max: 16,
                asked: num_bits,
            });
        }
        self.overwrite_u64(value as u64, position, num_bits)
    }

    /// Convenience helper to overwrite up to 32 bits.
    pub fn overwrite_u32(
        &mut self,
        value: u32,
        position: usize,
        num_bits: u8,
    ) -> Result<(), BitWriterError> {
        if num_bits > 32 {
            return Err(BitWriterError::TooLongForType {
                max: 32,
                asked: num_bits,
            });
        }
        self.overwrite_u64(value as u64, position, num_bits)
    }
}
