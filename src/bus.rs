//! The transport seam between the driver and the I2C bus.
//!
//! [`Bus`] is the minimal capability the driver needs: scan for responding addresses and
//! block read/write at a register sub-address. [`I2c`] implements it over any blocking
//! [`embedded_hal::i2c::I2c`].

use embedded_hal::i2c::{Error, ErrorKind, SevenBitAddress};

/// Lowest 7-bit address visited by a scan (0x00 - 0x07 are reserved).
pub const SCAN_START_ADDR: SevenBitAddress = 0x08;
/// Highest 7-bit address visited by a scan (0x78 - 0x7F are reserved).
pub const SCAN_END_ADDR: SevenBitAddress = 0x77;
/// Maximum number of addresses a scan can report.
pub const SCAN_CAPACITY: usize = (SCAN_END_ADDR - SCAN_START_ADDR + 1) as usize;

/// Addresses that acknowledged during a scan, in ascending order.
pub type ScanResult = heapless::Vec<SevenBitAddress, SCAN_CAPACITY>;

pub trait Bus {
    type Error;

    /// Returns every address that responds on the bus.
    fn scan(&mut self) -> Result<ScanResult, Self::Error>;

    /// Reads `data.len()` bytes starting at `sub_address` of the device at `address`.
    fn read_block(&mut self, address: SevenBitAddress, sub_address: u8, data: &mut [u8]) -> Result<(), Self::Error>;

    /// Writes `data` starting at `sub_address` of the device at `address`.
    fn write_block(&mut self, address: SevenBitAddress, sub_address: u8, data: &[u8]) -> Result<(), Self::Error>;
}

pub struct I2c<I2cType> {
    i2c: I2cType,
}

impl<I2cType> I2c<I2cType>
where
    I2cType: embedded_hal::i2c::I2c
{
    pub fn new(i2c: I2cType) -> Self {
        Self { i2c }
    }

    /// Hands back the wrapped bus.
    pub fn release(self) -> I2cType {
        self.i2c
    }
}

impl<I2cType> Bus for I2c<I2cType>
where
    I2cType: embedded_hal::i2c::I2c,
{
    type Error = I2cType::Error;

    /// Reads one byte from each address. Zero length transfers are not supported by
    /// every HAL, and a read leaves the devices' register pointers alone.
    ///
    /// A NACK means the address is absent. Any other bus error aborts the scan.
    fn scan(&mut self) -> Result<ScanResult, Self::Error> {
        let mut found = ScanResult::new();
        let mut scratch = [0u8; 1];
        for address in SCAN_START_ADDR..=SCAN_END_ADDR {
            match self.i2c.read(address, &mut scratch) {
                Ok(()) => {
                    // Capacity covers the whole scanned range.
                    let _ = found.push(address);
                }
                Err(e) if matches!(e.kind(), ErrorKind::NoAcknowledge(_)) => {}
                Err(e) => return Err(e),
            }
        }

        #[cfg(feature = "defmt")]
        defmt::debug!("I2C scan found {=[u8]:#x}", found.as_slice());

        Ok(found)
    }

    fn read_block(&mut self, address: SevenBitAddress, sub_address: u8, data: &mut [u8]) -> Result<(), Self::Error> {
        self.i2c.write_read(address, &[sub_address], data)?;

        Ok(())
    }

    fn write_block(&mut self, address: SevenBitAddress, sub_address: u8, data: &[u8]) -> Result<(), Self::Error> {
        use embedded_hal::i2c::Operation;
        // Adjacent writes are sent back to back without a repeated start.
        self.i2c.transaction(
            address,
            &mut [Operation::Write(&[sub_address]), Operation::Write(data)],
        )?;

        Ok(())
    }
}
