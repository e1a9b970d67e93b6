//! Bus interface abstraction for the LIS3DH driver.
//!
//! The device speaks the same single-register protocol over SPI and I2C; the
//! trait below is the whole contract the upper layers rely on. Both
//! implementations must be indistinguishable to callers: identical
//! address/value semantics and one logical register transaction per call.

pub mod i2c;
pub mod spi;

/// Abstraction over the low-level bus access required by the driver.
pub trait Lis3dhInterface {
    /// Error type produced by the concrete bus implementation.
    type Error;

    /// Writes a single register.
    fn write_register(&mut self, register: u8, value: u8) -> core::result::Result<(), Self::Error>;

    /// Reads a single register.
    fn read_register(&mut self, register: u8) -> core::result::Result<u8, Self::Error>;
}
