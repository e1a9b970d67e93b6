//! I2C interface implementation built on top of `embedded-hal` `I2c`.

use embedded_hal::i2c::I2c;

use super::Lis3dhInterface;

/// Default device address with the SA0 pad pulled high.
pub const DEFAULT_ADDRESS: u8 = 0x19;
/// Alternate device address with the SA0 pad pulled low.
pub const ALTERNATE_ADDRESS: u8 = 0x18;

/// I2C-based interface implementation for the LIS3DH driver.
///
/// Unlike the SPI variant no framing is needed: the bus protocol already
/// carries the register address, so reads and writes delegate directly to the
/// single-byte register primitives.
pub struct I2cInterface<I2C> {
    i2c: I2C,
    address: u8,
}

impl<I2C> I2cInterface<I2C> {
    /// Creates a new interface targeting the given 7-bit device address.
    pub const fn new(i2c: I2C, address: u8) -> Self {
        Self { i2c, address }
    }

    /// Creates a new interface using the SA0-high default address.
    pub const fn with_default_address(i2c: I2C) -> Self {
        Self::new(i2c, DEFAULT_ADDRESS)
    }

    /// Returns the 7-bit device address in use.
    pub const fn address(&self) -> u8 {
        self.address
    }

    /// Provides mutable access to the wrapped I2C bus.
    pub fn i2c_mut(&mut self) -> &mut I2C {
        &mut self.i2c
    }

    /// Consumes the interface and returns the owned I2C bus.
    pub fn release(self) -> I2C {
        self.i2c
    }
}

impl<I2C> Lis3dhInterface for I2cInterface<I2C>
where
    I2C: I2c,
{
    type Error = I2C::Error;

    fn write_register(&mut self, register: u8, value: u8) -> core::result::Result<(), Self::Error> {
        self.i2c.write(self.address, &[register, value])
    }

    fn read_register(&mut self, register: u8) -> core::result::Result<u8, Self::Error> {
        let mut value = [0u8; 1];
        self.i2c
            .write_read(self.address, &[register], &mut value)?;
        Ok(value[0])
    }
}

#[cfg(test)]
mod tests {
    use super::{I2cInterface, DEFAULT_ADDRESS};
    use crate::interface::Lis3dhInterface;
    use embedded_hal_mock::eh1::i2c::{Mock, Transaction};

    #[test]
    fn read_addresses_register_then_reads_one_byte() {
        let expectations = [Transaction::write_read(
            DEFAULT_ADDRESS,
            [0x27].to_vec(),
            [0b0000_1000].to_vec(),
        )];
        let mut i2c = Mock::new(&expectations);
        let mut interface = I2cInterface::with_default_address(i2c.clone());

        let value = interface.read_register(0x27).unwrap();
        assert_eq!(value, 0b0000_1000);
        i2c.done();
    }

    #[test]
    fn write_sends_register_and_value_in_one_message() {
        let expectations = [Transaction::write(0x18, [0x20, 0x47].to_vec())];
        let mut i2c = Mock::new(&expectations);
        let mut interface = I2cInterface::new(i2c.clone(), 0x18);

        interface.write_register(0x20, 0x47).unwrap();
        i2c.done();
    }
}
