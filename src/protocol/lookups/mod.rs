//! Lookup tables for enumerated field values. Each table is a plain enum
//! whose discriminant is the on-wire code, replacing per-code constants with
//! typed values.

/// Source of a temperature reading (PGN 130311 and relatives).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum TemperatureSource {
    SeaTemperature = 0,
    OutsideTemperature = 1,
    InsideTemperature = 2,
    EngineRoomTemperature = 3,
    MainCabinTemperature = 4,
    LiveWellTemperature = 5,
    BaitWellTemperature = 6,
    RefrigerationTemperature = 7,
    HeatingSystemTemperature = 8,
    DewPointTemperature = 9,
    ApparentWindChillTemperature = 10,
    TheoreticalWindChillTemperature = 11,
    HeatIndexTemperature = 12,
    FreezerTemperature = 13,
    ExhaustGasTemperature = 14,
}

impl TemperatureSource {
    /// Every defined source, in wire-code order.
    pub const ALL: [Self; 15] = [
        Self::SeaTemperature,
        Self::OutsideTemperature,
        Self::InsideTemperature,
        Self::EngineRoomTemperature,
        Self::MainCabinTemperature,
        Self::LiveWellTemperature,
        Self::BaitWellTemperature,
        Self::RefrigerationTemperature,
        Self::HeatingSystemTemperature,
        Self::DewPointTemperature,
        Self::ApparentWindChillTemperature,
        Self::TheoreticalWindChillTemperature,
        Self::HeatIndexTemperature,
        Self::FreezerTemperature,
        Self::ExhaustGasTemperature,
    ];

    /// Map a wire code back to its variant.
    pub fn from_raw(raw: u8) -> Option<Self> {
        Self::ALL.get(raw as usize).copied()
    }

    /// Human-readable description.
    pub fn label(&self) -> &'static str {
        match self {
            Self::SeaTemperature => "Sea Temperature",
            Self::OutsideTemperature => "Outside Temperature",
            Self::InsideTemperature => "Inside Temperature",
            Self::EngineRoomTemperature => "Engine Room Temperature",
            Self::MainCabinTemperature => "Main Cabin Temperature",
            Self::LiveWellTemperature => "Live Well Temperature",
            Self::BaitWellTemperature => "Bait Well Temperature",
            Self::RefrigerationTemperature => "Refrigeration Temperature",
            Self::HeatingSystemTemperature => "Heating System Temperature",
            Self::DewPointTemperature => "Dew Point Temperature",
            Self::ApparentWindChillTemperature => "Apparent Wind Chill Temperature",
            Self::TheoreticalWindChillTemperature => "Theoretical Wind Chill Temperature",
            Self::HeatIndexTemperature => "Heat Index Temperature",
            Self::FreezerTemperature => "Freezer Temperature",
            Self::ExhaustGasTemperature => "Exhaust Gas Temperature",
        }
    }
}

/// Source of a humidity reading.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum HumiditySource {
    Inside = 0,
    Outside = 1,
}

impl HumiditySource {
    /// Every defined source, in wire-code order.
    pub const ALL: [Self; 2] = [Self::Inside, Self::Outside];

    /// Map a wire code back to its variant.
    pub fn from_raw(raw: u8) -> Option<Self> {
        Self::ALL.get(raw as usize).copied()
    }

    /// Human-readable description.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Inside => "Inside Humidity",
            Self::Outside => "Outside Humidity",
        }
    }
}
