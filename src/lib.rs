#![cfg_attr(not(test), no_std)]
//! Driver for the ams iAQ-Core C/P indoor air quality sensor.
//!
//! The sensor measures on its own conversion cycle and exposes the latest
//! result as a 9-byte I2C register block: a status byte, a predicted CO2
//! concentration, the sensing element resistance and a predicted TVOC
//! concentration. The driver rate-limits bus traffic to the variant's
//! conversion interval and decodes the fields on demand from the last
//! reply it stored.
//!
//! The I2C bus is any [`embedded_hal::i2c::I2c`] implementation; the clock
//! is any free-running millisecond counter implementing [`MillisClock`].
//!
//! ```
//! # use embedded_hal_mock::eh1::i2c::{Mock as I2cMock, Transaction};
//! use iaq_core_rs::{IaqCore, MillisClock, Variant, SENSOR_ADDRESS};
//!
//! # struct Uptime(u32);
//! # impl MillisClock for Uptime {
//! #     fn now_ms(&mut self) -> u32 {
//! #         self.0
//! #     }
//! # }
//! # let i2c = I2cMock::new(&[Transaction::read(
//! #     SENSOR_ADDRESS,
//! #     vec![0x00, 0x01, 0xF4, 0x00, 0x00, 0x64, 0x00, 0x00, 0x32],
//! # )]);
//! let mut sensor = IaqCore::new(i2c, Uptime(0), Variant::C);
//! if sensor.update_all().is_valid() {
//!     let co2_ppm = sensor.co2_prediction_ppm();
//!     let tvoc_ppb = sensor.tvoc_prediction_ppb();
//! #     assert_eq!(co2_ppm, 500);
//! #     assert_eq!(tvoc_ppb, 50);
//! }
//! # let (mut i2c, _) = sensor.release();
//! # i2c.done();
//! ```

mod clock;
mod frame;
mod types;

use embedded_hal::i2c::I2c;

pub use crate::clock::MillisClock;
pub use crate::frame::{RESPONSE_LEN, SENSOR_ADDRESS, SHORT_READ_LEN};
pub use crate::types::{Measurement, Status, Variant};

use crate::frame::{
    CO2_PREDICTION_OFFSET, RESISTANCE_OFFSET, STATUS_OFFSET, TVOC_PREDICTION_OFFSET,
};
use crate::types::status_code;

/// iAQ-Core driver over an injected I2C bus and millisecond clock.
///
/// Construction performs no bus traffic; the first [`update`](Self::update)
/// or [`update_all`](Self::update_all) does. All accessors decode the last
/// stored reply and never touch the bus, so they can be called at any rate.
pub struct IaqCore<I2C, CLK> {
    i2c: I2C,
    clock: CLK,
    interval_ms: u32,
    last_read_ms: u32,
    data: [u8; RESPONSE_LEN],
}

impl<I2C, CLK> IaqCore<I2C, CLK>
where
    I2C: I2c,
    CLK: MillisClock,
{
    /// Creates a driver for the given variant.
    ///
    /// The bus and clock must already be initialised by the caller.
    pub fn new(i2c: I2C, clock: CLK, variant: Variant) -> Self {
        let interval_ms = variant.interval_ms();
        let mut data = [0u8; RESPONSE_LEN];
        data[STATUS_OFFSET] = status_code::NOT_UPDATED;
        Self {
            i2c,
            clock,
            interval_ms,
            // Backdated so the first update passes the rate limit.
            last_read_ms: 0u32.wrapping_sub(interval_ms),
            data,
        }
    }

    /// Rate-limited short read refreshing the status byte (and the high
    /// byte of the CO2 prediction) only.
    ///
    /// Use [`update_all`](Self::update_all) before trusting any of the
    /// decoded fields.
    pub fn update(&mut self) -> Status {
        self.request_update(SHORT_READ_LEN)
    }

    /// Rate-limited full read refreshing status, CO2, resistance and TVOC.
    pub fn update_all(&mut self) -> Status {
        self.request_update(RESPONSE_LEN)
    }

    fn request_update(&mut self, len: usize) -> Status {
        // Polling faster than the sensor's conversion cycle is the normal
        // steady state; answer from the stored reply without bus traffic.
        let now = self.clock.now_ms();
        if now.wrapping_sub(self.last_read_ms) < self.interval_ms {
            return self.status();
        }
        self.last_read_ms = now;

        self.data = [0u8; RESPONSE_LEN];
        // Provisional status in case the transaction never completes.
        self.data[STATUS_OFFSET] = status_code::UPDATING;

        // The datasheet leaves open whether a conversion has to be
        // triggered explicitly; like the vendor's application note this
        // driver relies on the sensor's own cycle and only ever reads.
        let mut reply = [0u8; RESPONSE_LEN];
        match self.i2c.read(SENSOR_ADDRESS, &mut reply[..len]) {
            Ok(()) => self.data[..len].copy_from_slice(&reply[..len]),
            Err(_) => self.data[STATUS_OFFSET] = status_code::I2C_REQUEST_FAILED,
        }
        self.status()
    }

    /// Status of the last stored reply.
    pub fn status(&self) -> Status {
        Status::from_raw(self.status_raw())
    }

    /// Status byte of the last stored reply, verbatim.
    pub fn status_raw(&self) -> u8 {
        self.data[STATUS_OFFSET]
    }

    /// Predicted CO2 concentration [ppm] from the last full reply.
    pub fn co2_prediction_ppm(&self) -> u16 {
        frame::read_u16_be(&self.data, CO2_PREDICTION_OFFSET)
    }

    /// Sensing element resistance [Ohm] from the last full reply.
    pub fn sensor_resistance_ohm(&self) -> u32 {
        frame::read_u24_be(&self.data, RESISTANCE_OFFSET)
    }

    /// Predicted TVOC concentration [ppb] from the last full reply.
    pub fn tvoc_prediction_ppb(&self) -> u16 {
        frame::read_u16_be(&self.data, TVOC_PREDICTION_OFFSET)
    }

    /// All decoded fields of the last stored reply as one value.
    pub fn measurement(&self) -> Measurement {
        Measurement {
            status: self.status(),
            co2_ppm: self.co2_prediction_ppm(),
            tvoc_ppb: self.tvoc_prediction_ppb(),
            resistance_ohm: self.sensor_resistance_ohm(),
        }
    }

    /// Consumes the driver and hands back the bus and clock.
    pub fn release(self) -> (I2C, CLK) {
        (self.i2c, self.clock)
    }
}
