//! Message definitions: one static [`MessageLayout`] per PGN plus a typed
//! wrapper struct that binds its fields to the layout's value list.
use crate::core::{FieldSpec, FieldValue, MessageLayout};
use crate::error::EncodeError;
use crate::infra::codec::engine;
use crate::infra::codec::traits::ToPayload;
use crate::protocol::lookups::{HumiditySource, TemperatureSource};

/// Field table for PGN 130311 "Environmental Parameters" (single frame,
/// 8 bytes).
static ENVIRONMENTAL_PARAMETERS_FIELDS: [FieldSpec; 6] = [
    FieldSpec {
        order: 1,
        id: "sid",
        name: "SID",
        bit_length: 8,
        bit_offset: 0,
        bit_start: 0,
        signed: false,
        resolution: None,
        unit: None,
    },
    FieldSpec {
        order: 2,
        id: "temperatureSource",
        name: "Temperature Source",
        bit_length: 6,
        bit_offset: 8,
        bit_start: 0,
        signed: false,
        resolution: None,
        unit: None,
    },
    FieldSpec {
        order: 3,
        id: "humiditySource",
        name: "Humidity Source",
        bit_length: 2,
        bit_offset: 14,
        bit_start: 6,
        signed: false,
        resolution: None,
        unit: None,
    },
    FieldSpec {
        order: 4,
        id: "temperature",
        name: "Temperature",
        bit_length: 16,
        bit_offset: 16,
        bit_start: 0,
        signed: false,
        resolution: Some(0.01),
        unit: Some("K"),
    },
    FieldSpec {
        order: 5,
        id: "humidity",
        name: "Humidity",
        bit_length: 16,
        bit_offset: 32,
        bit_start: 0,
        signed: true,
        resolution: Some(0.004),
        unit: Some("%"),
    },
    FieldSpec {
        order: 6,
        id: "atmosphericPressure",
        name: "Atmospheric Pressure",
        bit_length: 16,
        bit_offset: 48,
        bit_start: 0,
        signed: false,
        resolution: None,
        unit: Some("hPa"),
    },
];

/// Layout for PGN 130311 "Environmental Parameters".
pub static ENVIRONMENTAL_PARAMETERS: MessageLayout = MessageLayout {
    pgn: 130311,
    id: "environmentalParameters",
    name: "Environmental Parameters",
    byte_length: 8,
    fields: &ENVIRONMENTAL_PARAMETERS_FIELDS,
};

/// Typed "Environmental Parameters" message (PGN 130311).
///
/// Every reading is optional; absent readings encode as the standard's
/// "data not available" sentinel.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct EnvironmentalParameters {
    /// Sequence identifier linking readings taken at the same instant.
    pub sid: u8,
    pub temperature_source: Option<TemperatureSource>,
    pub humidity_source: Option<HumiditySource>,
    /// Temperature in kelvin.
    pub temperature: Option<f64>,
    /// Relative humidity in percent.
    pub humidity: Option<f64>,
    /// Atmospheric pressure in hectopascal.
    pub atmospheric_pressure: Option<u16>,
}

impl EnvironmentalParameters {
    /// Create a message with every reading absent.
    pub const fn new() -> Self {
        Self {
            sid: 0,
            temperature_source: None,
            humidity_source: None,
            temperature: None,
            humidity: None,
            atmospheric_pressure: None,
        }
    }

    /// Bind the struct fields to the layout's value list, in `order`.
    fn values(&self) -> [Option<FieldValue>; 6] {
        [
            Some(FieldValue::Unsigned(self.sid as u64)),
            self.temperature_source
                .map(|source| FieldValue::Unsigned(source as u64)),
            self.humidity_source
                .map(|source| FieldValue::Unsigned(source as u64)),
            self.temperature.map(FieldValue::Float),
            self.humidity.map(FieldValue::Float),
            self.atmospheric_pressure
                .map(|pressure| FieldValue::Unsigned(pressure as u64)),
        ]
    }
}

impl Default for EnvironmentalParameters {
    fn default() -> Self {
        Self::new()
    }
}

impl ToPayload for EnvironmentalParameters {
    fn pgn(&self) -> u32 {
        ENVIRONMENTAL_PARAMETERS.pgn
    }

    fn to_payload(&self, buffer: &mut [u8]) -> Result<usize, EncodeError> {
        engine::encode(&ENVIRONMENTAL_PARAMETERS, &self.values(), buffer)
    }

    fn payload_len(&self) -> usize {
        ENVIRONMENTAL_PARAMETERS.byte_length as usize
    }
}
