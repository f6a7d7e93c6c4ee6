/// Sensor hardware variant, selecting the measurement interval.
///
/// The iAQ-Core C runs a continuous conversion cycle, the iAQ-Core P a
/// pulsed low-power one, so the two must not be polled at the same rate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Variant {
    /// iAQ-Core C, continuous measurement, 1100 ms interval.
    C,
    /// iAQ-Core P, pulsed measurement, 2000 ms interval.
    P,
}

impl Variant {
    /// Minimum time between bus transactions for this variant.
    pub fn interval_ms(self) -> u32 {
        match self {
            Variant::C => 1100,
            Variant::P => 2000,
        }
    }
}

/// Sensor-defined status codes (datasheet, register byte 0).
pub(crate) mod status_code {
    pub const OK: u8 = 0x00;
    pub const BUSY: u8 = 0x01;
    pub const RUN_IN: u8 = 0x10;
    pub const ERROR: u8 = 0x80;

    // Driver-synthetic codes, chosen to collide with none of the above.
    pub const UPDATING: u8 = 0x20;
    pub const NOT_UPDATED: u8 = 0x40;
    pub const I2C_REQUEST_FAILED: u8 = 0x08;
}

/// Validity of the last reading, decoded from the reply's status byte.
///
/// The first four variants are reported by the sensor itself; the last
/// three are synthesised by the driver and never appear on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Status {
    /// Data valid.
    Ok,
    /// The sensor is in the middle of a conversion, data is from the
    /// previous cycle.
    Busy,
    /// Warm-up phase after power-on, data not yet trustworthy.
    RunIn,
    /// The sensor reports an internal fault.
    SensorError,
    /// No update has been attempted since construction.
    NotUpdated,
    /// A transaction was started but never completed.
    Updating,
    /// The last I2C transaction failed.
    I2cRequestFailed,
    /// A status byte outside the documented set, passed through verbatim.
    Unknown(u8),
}

impl Status {
    pub(crate) fn from_raw(raw: u8) -> Self {
        match raw {
            status_code::OK => Status::Ok,
            status_code::BUSY => Status::Busy,
            status_code::RUN_IN => Status::RunIn,
            status_code::ERROR => Status::SensorError,
            status_code::NOT_UPDATED => Status::NotUpdated,
            status_code::UPDATING => Status::Updating,
            status_code::I2C_REQUEST_FAILED => Status::I2cRequestFailed,
            other => Status::Unknown(other),
        }
    }

    /// Whether the decoded fields of the reading can be trusted.
    pub fn is_valid(self) -> bool {
        self == Status::Ok
    }
}

/// One decoded reading, bundling all fields of a full update.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Measurement {
    /// Validity of this reading.
    pub status: Status,
    /// Predicted CO2 concentration [ppm]
    pub co2_ppm: u16,
    /// Predicted total VOC concentration [ppb]
    pub tvoc_ppb: u16,
    /// Sensing element resistance [Ohm]
    pub resistance_ohm: u32,
}
