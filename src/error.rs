//! Errors that can occur when using the LUX V30B device.
//!
//! This module provides an error type that encapsulates all possible errors that can occur during communication with the LUX V30B.
//! It is generic over the underlying bus error type.

use core::fmt::{Debug, Display, Formatter};
use embedded_hal::i2c::SevenBitAddress;
use crate::register::InvalidRegisterField;

/// This represents all possible errors that can occur when using the LUX V30B device.
#[derive(Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum LuxV30bError<BusError> {
    /// An error has occurred in the I2C driver
    Bus(BusError),

    /// No device answered at the expected address during a bus scan.
    ///
    /// Could possibly indicate an error with wiring or power.
    DeviceNotFound(SevenBitAddress),

    /// The operation is not available in this driver.
    ///
    /// Returned by [`LuxV30b::set_conf`](crate::LuxV30b::set_conf).
    NotImplemented,

    /// Reading from a register returned unexpected data, e.g. reserved bits set.
    UnexpectedRegisterData(InvalidRegisterField),
}

impl<BusError: Debug> Display for LuxV30bError<BusError> {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        match self {
            LuxV30bError::Bus(e) => write!(f, "I2C bus error: {:?}", e),
            LuxV30bError::DeviceNotFound(address) => {
                write!(f, "LUX V30B not found at I2C address {:#x}", address)
            }
            LuxV30bError::NotImplemented => f.write_str("operation not implemented"),
            LuxV30bError::UnexpectedRegisterData(field) => write!(
                f,
                "unexpected value {:#010b} in register {:#04x} at bit {}",
                field.value, field.register, field.bit_offset
            ),
        }
    }
}

impl<BusError: Debug> core::error::Error for LuxV30bError<BusError> {}

impl<BusError> From<InvalidRegisterField> for LuxV30bError<BusError> {
    fn from(field: InvalidRegisterField) -> Self {
        LuxV30bError::UnexpectedRegisterData(field)
    }
}
