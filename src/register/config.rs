//! ### CONFIG - Acquisition configuration (`0x04`, 1 byte, R)
//!
//! ```text
//! | b7 |   b6   | b5 | b4 | b3  | b2 | b1 | b0 |
//! |  0 | MANUAL |  0 |  0 | CDR |     TIM      |
//! ```
//!
//! In automatic mode the device picks CDR and TIM by itself, in manual mode they are
//! fixed by the user.
//!
//! ### Default values
//! 0x00 (Automatic mode, CDR 0, 800 ms)
#![doc(alias = "CONFIG")]
use crate::register::{InvalidRegisterField, Readable, Reg};

const MANUAL_BIT: u8 = 6;
const CDR_BIT: u8 = 3;
const TIM_MASK: u8 = 0b0000_0111;
const RESERVED_MASK: u8 = 0b1011_0000;

/// Marker type for CONFIG (0x04) register
pub struct Config;
impl Reg for Config { const ADDR: u8 = 0x04; }

/// The payload for the CONFIG (0x04) register.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ConfigFields {
    pub mode: MeasurementMode,
    pub cdr: ShuntRatio,
    pub time: AcquisitionTime,
}

impl ConfigFields {
    /// Packs the fields into a configuration byte. Reserved bits are always zero.
    pub fn bits(&self) -> u8 {
        self.mode as u8 | self.cdr as u8 | self.time as u8
    }
}

impl Default for ConfigFields {
    fn default() -> Self {
        Self {
            mode: MeasurementMode::Auto,
            cdr: ShuntRatio::Cdr0,
            time: AcquisitionTime::T800ms,
        }
    }
}

impl Readable for Config {
    type Out = ConfigFields;

    fn decode(b: &[u8]) -> Result<Self::Out, InvalidRegisterField> {
        let reserved = b[0] & RESERVED_MASK;
        if reserved != 0 {
            return Err(InvalidRegisterField::new(Self::ADDR, b[0], reserved.trailing_zeros() as u8));
        }

        Ok(ConfigFields {
            mode: MeasurementMode::from((b[0] >> MANUAL_BIT) & 1),
            cdr: ShuntRatio::from((b[0] >> CDR_BIT) & 1),
            time: AcquisitionTime::from(b[0] & TIM_MASK),
        })
    }
}

/// MANUAL bit, stored pre-shifted into bit 6.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum MeasurementMode {
    /// The device assigns CDR and TIM by itself
    Auto = 0 << 6,
    /// CDR and TIM are set by the user
    Manual = 1 << 6,
}

impl From<u8> for MeasurementMode {
    fn from(field: u8) -> Self {
        match field {
            0 => MeasurementMode::Auto,
            _ => MeasurementMode::Manual,
        }
    }
}

/// CDR (shunt ratio) bit, stored pre-shifted into bit 3.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum ShuntRatio {
    /// All photodiode current goes into the ADC
    Cdr0 = 0 << 3,
    /// 1/8 of the photodiode current goes into the ADC. Meant for bright scenes.
    Cdr1 = 1 << 3,
}

impl From<u8> for ShuntRatio {
    fn from(field: u8) -> Self {
        match field {
            0 => ShuntRatio::Cdr0,
            _ => ShuntRatio::Cdr1,
        }
    }
}

/// TIM\[2:0\], the acquisition time.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum AcquisitionTime {
    /// Preferred in low light
    T800ms = 0b000,
    T400ms = 0b001,
    T200ms = 0b010,
    /// Preferred in strong light
    T100ms = 0b011,
    T50ms = 0b100,
    T25ms = 0b101,
    T12_5ms = 0b110,
    T6_25ms = 0b111,
}

impl AcquisitionTime {
    /// Acquisition time in microseconds.
    pub fn duration_us(&self) -> u32 {
        match self {
            AcquisitionTime::T800ms => 800_000,
            AcquisitionTime::T400ms => 400_000,
            AcquisitionTime::T200ms => 200_000,
            AcquisitionTime::T100ms => 100_000,
            AcquisitionTime::T50ms => 50_000,
            AcquisitionTime::T25ms => 25_000,
            AcquisitionTime::T12_5ms => 12_500,
            AcquisitionTime::T6_25ms => 6_250,
        }
    }

    /// The four shortest times can only be selected in [`MeasurementMode::Manual`].
    pub fn is_manual_only(&self) -> bool {
        (*self as u8) & 0b100 != 0
    }
}

impl From<u8> for AcquisitionTime {
    fn from(field: u8) -> Self {
        match field & TIM_MASK {
            0b000 => AcquisitionTime::T800ms,
            0b001 => AcquisitionTime::T400ms,
            0b010 => AcquisitionTime::T200ms,
            0b011 => AcquisitionTime::T100ms,
            0b100 => AcquisitionTime::T50ms,
            0b101 => AcquisitionTime::T25ms,
            0b110 => AcquisitionTime::T12_5ms,
            _ => AcquisitionTime::T6_25ms,
        }
    }
}
