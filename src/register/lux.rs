//! ### Illuminance data (`0x00`..`0x03`, 4 bytes, R)
//!
//! Raw illuminance count, little endian. One count corresponds to 1.4 mlx.
#![doc(alias = "DATA")]
use crate::register::{InvalidRegisterField, Readable, Reg};

/// Milli-lux per raw count.
pub const MILLILUX_PER_COUNT: f64 = 1.4;

/// Marker struct for the illuminance data (0x00 - 0x03) registers.
///
/// - **Length:** 4 bytes
/// - **Access:** Read-only
///
/// Used by [`LuxV30b::get_lux()`](crate::LuxV30b::get_lux) and
/// [`LuxV30b::raw_lux()`](crate::LuxV30b::raw_lux).
pub struct Lux;
impl Reg for Lux { const ADDR: u8 = 0x00; }

impl Readable for Lux {
    type Out = u32;

    const N: usize = 4;

    fn decode(b: &[u8]) -> Result<Self::Out, InvalidRegisterField> {
        Ok(u32::from_le_bytes([b[0], b[1], b[2], b[3]]))
    }
}

/// Converts a raw illuminance count into lux.
///
/// Done in `f64` so the full `u32` range is representable without overflow.
pub fn lux_from_raw(raw: u32) -> f64 {
    (raw as f64 * MILLILUX_PER_COUNT) / 1000.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lux_decode_is_little_endian() {
        assert_eq!(0x0001_0000, Lux::decode(&[0x00, 0x00, 0x01, 0x00]).unwrap());
        assert_eq!(0xDDCC_BBAA, Lux::decode(&[0xAA, 0xBB, 0xCC, 0xDD]).unwrap());
        assert_eq!(0x0000_0001, Lux::decode(&[0x01, 0x00, 0x00, 0x00]).unwrap());
    }

    #[test]
    fn lux_from_raw_known_values() {
        assert_eq!(0.0, lux_from_raw(0));
        assert!((lux_from_raw(65536) - 91.7504).abs() < 1e-9);
        assert!((lux_from_raw(u32::MAX) - 6_012_954.213).abs() < 1e-6);
    }

    #[test]
    fn lux_from_raw_is_strictly_increasing() {
        let samples = [0u32, 1, 2, 255, 256, 65_535, 65_536, 1 << 24, u32::MAX - 1, u32::MAX];
        for pair in samples.windows(2) {
            assert!(lux_from_raw(pair[0]) < lux_from_raw(pair[1]));
        }
    }
}
