//! Load-time layout validation: malformed field tables must be rejected
//! before any encoding is attempted.

use n2k_encode::core::{FieldSpec, MessageLayout, MAX_LAYOUT_FIELDS};
use n2k_encode::error::LayoutError;

fn field(order: u8, id: &'static str, bit_length: u32, bit_offset: u32) -> FieldSpec {
    FieldSpec {
        order,
        id,
        name: id,
        bit_length,
        bit_offset,
        bit_start: 0,
        signed: false,
        resolution: None,
        unit: None,
    }
}

fn layout(byte_length: u16, fields: Vec<FieldSpec>) -> MessageLayout {
    MessageLayout {
        pgn: 0,
        id: "test",
        name: "Test layout",
        byte_length,
        fields: Box::leak(fields.into_boxed_slice()),
    }
}

#[test]
fn test_valid_layout() {
    // "c" carries the sub-byte alignment hint and rewinds to bits 8..10;
    // "b" right-justifies to bits 10..16.
    let mut high = field(3, "c", 2, 14);
    high.bit_start = 6;
    let layout = layout(2, vec![field(1, "a", 8, 0), field(2, "b", 6, 8), high]);
    layout.validate().unwrap();
}

#[test]
fn test_duplicate_order() {
    let layout = layout(2, vec![field(1, "a", 8, 0), field(1, "b", 8, 8)]);
    assert_eq!(
        layout.validate().unwrap_err(),
        LayoutError::DuplicateOrder { order: 1 }
    );
}

#[test]
fn test_overlapping_fields() {
    let layout = layout(2, vec![field(1, "a", 12, 0), field(2, "b", 8, 8)]);
    assert_eq!(
        layout.validate().unwrap_err(),
        LayoutError::OverlappingFields {
            first: "a",
            second: "b"
        }
    );
}

#[test]
/// Right-justified short fields overlap through their resolved positions,
/// not their declared offsets.
fn test_overlap_uses_resolved_positions() {
    // "a" is declared at offset 8 but right-justifies to bits 13..16;
    // "b" rewinds to position 12 and occupies bits 12..16 of the same byte.
    let mut short = field(2, "b", 4, 16);
    short.bit_start = 4;
    let layout = layout(2, vec![field(1, "a", 3, 8), short]);
    assert_eq!(
        layout.validate().unwrap_err(),
        LayoutError::OverlappingFields {
            first: "a",
            second: "b"
        }
    );
}

#[test]
fn test_invalid_bit_length() {
    for bits in [0, 65] {
        let layout = layout(9, vec![field(1, "a", bits, 0)]);
        assert_eq!(
            layout.validate().unwrap_err(),
            LayoutError::InvalidBitLength { field: "a", bits }
        );
    }
}

#[test]
fn test_invalid_resolution() {
    for resolution in [0.0, -0.01, f64::NAN, f64::INFINITY] {
        let mut bad = field(1, "a", 16, 0);
        bad.resolution = Some(resolution);
        let layout = layout(2, vec![bad]);
        assert_eq!(
            layout.validate().unwrap_err(),
            LayoutError::InvalidResolution { field: "a" }
        );
    }
}

#[test]
fn test_field_out_of_bounds() {
    let layout = layout(8, vec![field(1, "a", 16, 56)]);
    assert_eq!(
        layout.validate().unwrap_err(),
        LayoutError::FieldOutOfBounds {
            field: "a",
            total_bits: 64
        }
    );
}

#[test]
fn test_invalid_alignment() {
    let mut bad = field(1, "a", 2, 4);
    bad.bit_start = 6;
    let layout = layout(1, vec![bad]);
    assert_eq!(
        layout.validate().unwrap_err(),
        LayoutError::InvalidAlignment {
            field: "a",
            bit_offset: 4,
            bit_start: 6
        }
    );
}

#[test]
fn test_too_many_fields() {
    let count = MAX_LAYOUT_FIELDS + 1;
    let fields: Vec<FieldSpec> = (0..count)
        .map(|index| field(index as u8, "f", 8, index as u32 * 8))
        .collect();
    let layout = layout(count as u16, fields);
    assert_eq!(
        layout.validate().unwrap_err(),
        LayoutError::TooManyFields {
            max: MAX_LAYOUT_FIELDS,
            declared: count
        }
    );
}
