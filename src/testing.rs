use crate::bus::{Bus, ScanResult};
use crate::register::Readable;
use embedded_hal::i2c::SevenBitAddress;
use heapless::LinearMap;

const MAX_REG_BYTES: usize = 4;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FakeBusError;

#[derive(Debug)]
struct RegisterValue {
    bytes: [u8; MAX_REG_BYTES],
    len: usize,
}

/// In-memory bus serving canned register responses for a single device.
pub struct FakeBus<const N: usize> {
    address: SevenBitAddress,
    regs: LinearMap<(u8, usize), RegisterValue, N>,
    present: ScanResult,
    failing: bool,
    pub reads: usize,
    pub writes: usize,
}

impl<const N: usize> FakeBus<N> {
    pub fn new(address: SevenBitAddress) -> Self {
        FakeBus {
            address,
            regs: LinearMap::new(),
            present: ScanResult::new(),
            failing: false,
            reads: 0,
            writes: 0,
        }
    }

    pub fn with_response<R: Readable>(&mut self, data: &[u8]) {
        let mut bytes = [0u8; MAX_REG_BYTES];
        bytes[..data.len()].copy_from_slice(data);
        self.regs.insert((R::ADDR, R::N), RegisterValue { bytes, len: data.len() }).unwrap();
    }

    pub fn with_devices(&mut self, addresses: &[SevenBitAddress]) {
        self.present = ScanResult::from_slice(addresses).unwrap();
    }

    /// Every subsequent transaction fails with [`FakeBusError`].
    pub fn failing(&mut self) {
        self.failing = true;
    }
}

impl<const N: usize> Bus for FakeBus<N> {
    type Error = FakeBusError;

    fn scan(&mut self) -> Result<ScanResult, Self::Error> {
        if self.failing {
            return Err(FakeBusError);
        }

        Ok(self.present.clone())
    }

    fn read_block(&mut self, address: SevenBitAddress, sub_address: u8, data: &mut [u8]) -> Result<(), Self::Error> {
        self.reads += 1;
        if self.failing || address != self.address {
            return Err(FakeBusError);
        }

        if let Some(value) = self.regs.get(&(sub_address, data.len())) {
            if value.len == data.len() {
                data.copy_from_slice(&value.bytes[..value.len]);
                return Ok(());
            }
        }

        panic!("No mocked value for register 0x{:x} and length {}", sub_address, data.len())
    }

    fn write_block(&mut self, address: SevenBitAddress, _sub_address: u8, _data: &[u8]) -> Result<(), Self::Error> {
        self.writes += 1;
        if self.failing || address != self.address {
            return Err(FakeBusError);
        }

        Ok(())
    }
}
