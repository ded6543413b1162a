//! Typed register markers for the LUX V30B.
//!
//! Each register is a zero-sized marker implementing [`Reg`] (its sub-address) and
//! [`Readable`] (its length and how to decode the bytes read from it).
//!
//! | sub-address | length | register |
//! |---|---|---|
//! | `0x00` | 4 | [`lux::Lux`] |
//! | `0x04` | 1 | [`config::Config`] |

pub mod config;
pub mod lux;

/// A register returned bits that the driver does not expect, e.g. reserved bits set.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct InvalidRegisterField {
    pub register: u8,
    pub value: u8,
    pub bit_offset: u8,
}

impl InvalidRegisterField {
    pub fn new(register: u8, value: u8, bit_offset: u8) -> Self {
        Self { register, value, bit_offset }
    }
}

pub trait Reg { const ADDR: u8; }

pub trait Readable: Reg {
    type Out;
    const N: usize = 1;
    fn decode(b: &[u8]) -> Result<Self::Out, InvalidRegisterField>;
}
