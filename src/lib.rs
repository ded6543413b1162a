//! Platform agnostic `no_std` driver for the DFRobot LUX V30B ambient light sensor.
//!
//! The sensor sits at the fixed I2C address `0x4a` and exposes a 4 byte illuminance
//! register and a 1 byte configuration register. Any blocking
//! [`embedded_hal::i2c::I2c`] can be used as transport.
//!
//! ```rust,no_run
//! # use embedded_hal::i2c::I2c;
//! # use luxv30b_rs::LuxV30bResult;
//! use luxv30b_rs::LuxV30b;
//! # fn demo<I: I2c>(i2c: I) -> LuxV30bResult<(), I::Error> {
//! let mut sensor = LuxV30b::new_i2c(i2c);
//! sensor.check()?;
//!
//! let lux = sensor.get_lux()?;
//! let conf = sensor.config()?;
//! # Ok(()) }
//! ```
#![no_std]

pub mod bus;
pub mod error;
pub mod register;
mod luxv30b;

#[cfg(test)]
mod testing;

pub use crate::error::LuxV30bError;
pub use crate::luxv30b::{check, LuxV30b, LuxV30bI2c, LuxV30bResult, LUXV30B_ADDRESS};
pub use crate::register::config::{AcquisitionTime, ConfigFields, MeasurementMode, ShuntRatio};
pub use crate::register::lux::lux_from_raw;
