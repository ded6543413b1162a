use crate::bus::{Bus, I2c};
use crate::error::LuxV30bError;
use crate::register::config::{AcquisitionTime, Config, ConfigFields, MeasurementMode, ShuntRatio};
use crate::register::lux::{lux_from_raw, Lux};
use crate::register::{Readable, Reg};
use embedded_hal::i2c::SevenBitAddress;

/// I2C address of the LUX V30B. It is fixed in hardware.
pub const LUXV30B_ADDRESS: SevenBitAddress = 0x4a;

/// Type alias for a LUX V30B communicating over I2C
pub type LuxV30bI2c<T> = LuxV30b<I2c<T>>;

/// Type alias used to simplify return types throughout the driver
pub type LuxV30bResult<T, BusError> = Result<T, LuxV30bError<BusError>>;

/// Scans the bus and checks that a LUX V30B answers at [`LUXV30B_ADDRESS`].
///
/// Validates wiring only, no driver instance is needed. There is no retry.
pub fn check<B: Bus>(bus: &mut B) -> LuxV30bResult<(), B::Error> {
    let found = bus.scan().map_err(LuxV30bError::Bus)?;

    if found.contains(&LUXV30B_ADDRESS) {
        Ok(())
    } else {
        #[cfg(feature = "defmt")]
        defmt::warn!("LUX V30B not found at {=u8:#x}", LUXV30B_ADDRESS);

        Err(LuxV30bError::DeviceNotFound(LUXV30B_ADDRESS))
    }
}

/// Main LUX V30B driver struct
pub struct LuxV30b<B> {
    bus: B,
    address: SevenBitAddress,
    raw: [u8; 4],
    conf: [u8; 1],
}

impl<T> LuxV30bI2c<T>
where
    T: embedded_hal::i2c::I2c,
{
    /// Constructs a new driver instance communicating over I2C at the default address.
    ///
    /// No bus traffic happens here; call [`check`](LuxV30b::check) to verify the wiring.
    ///
    /// # Examples
    ///
    /// ```rust,no_run
    /// # use embedded_hal::i2c::I2c;
    /// # use luxv30b_rs::LuxV30bResult;
    /// use luxv30b_rs::LuxV30b;
    /// # fn demo<I: I2c>(i2c: I) -> LuxV30bResult<(), I::Error> {
    /// let mut sensor = LuxV30b::new_i2c(i2c);
    /// sensor.check()?;
    /// let lux = sensor.get_lux()?;
    /// # Ok(())
    /// # }
    /// ```
    pub fn new_i2c(i2c: T) -> Self {
        Self::new(I2c::new(i2c))
    }
}

impl<B> LuxV30b<B>
where
    B: Bus,
{
    /// Creates a driver bound to `bus` at [`LUXV30B_ADDRESS`].
    pub fn new(bus: B) -> Self {
        Self::with_address(bus, LUXV30B_ADDRESS)
    }

    /// Creates a driver bound to `bus` at a custom address.
    ///
    /// The device itself cannot change its address, this exists for bus translators and tests.
    pub fn with_address(bus: B, address: SevenBitAddress) -> Self {
        LuxV30b {
            bus,
            address,
            raw: [0u8; 4],
            // Power on default
            conf: [0x00; 1],
        }
    }

    /// The address this driver talks to.
    pub fn address(&self) -> SevenBitAddress {
        self.address
    }

    /// Consumes the driver and returns the bus.
    pub fn release(self) -> B {
        self.bus
    }

    /// Scans the bus and checks that the sensor is present. See [`check`].
    pub fn check(&mut self) -> LuxV30bResult<(), B::Error> {
        check(&mut self.bus)
    }

    /// Reads the raw illuminance count from the data registers (0x00 - 0x03).
    pub fn raw_lux(&mut self) -> LuxV30bResult<u32, B::Error> {
        self.bus.read_block(self.address, Lux::ADDR, &mut self.raw)
            .map_err(LuxV30bError::Bus)?;

        Ok(Lux::decode(&self.raw)?)
    }

    /// Reads the current illuminance in lux.
    pub fn get_lux(&mut self) -> LuxV30bResult<f64, B::Error> {
        let raw = self.raw_lux()?;

        #[cfg(feature = "defmt")]
        defmt::trace!("raw illuminance {=u32}", raw);

        Ok(lux_from_raw(raw))
    }

    /// Reads the CONFIG (0x04) register and returns the raw byte.
    ///
    /// The byte is kept and can be retrieved later with [`cached_conf`](Self::cached_conf).
    pub fn get_conf(&mut self) -> LuxV30bResult<u8, B::Error> {
        self.bus.read_block(self.address, Config::ADDR, &mut self.conf)
            .map_err(LuxV30bError::Bus)?;

        Ok(self.conf[0])
    }

    /// Reads the CONFIG (0x04) register and decodes it.
    ///
    /// Returns [`LuxV30bError::UnexpectedRegisterData`] if reserved bits are set.
    pub fn config(&mut self) -> LuxV30bResult<ConfigFields, B::Error> {
        self.get_conf()?;

        Ok(Config::decode(&self.conf)?)
    }

    /// The content of the configuration buffer, without bus traffic.
    ///
    /// This is the power on default 0x00 until [`get_conf`](Self::get_conf) is first called.
    /// After a failed [`get_conf`](Self::get_conf) the value is unspecified, since the bus
    /// may have written part of the transfer before failing.
    pub fn cached_conf(&self) -> u8 {
        self.conf[0]
    }

    /// Writing the configuration is not supported yet.
    ///
    /// Which CDR/TIM combinations are legal depends on the mode and is not settled, so
    /// this never touches the bus and always returns [`LuxV30bError::NotImplemented`].
    pub fn set_conf(
        &mut self,
        _mode: MeasurementMode,
        _cdr: ShuntRatio,
        _time: AcquisitionTime,
    ) -> LuxV30bResult<(), B::Error> {
        Err(LuxV30bError::NotImplemented)
    }
}
