//! SPI interface implementation built on top of `embedded-hal` `SpiDevice`.

use embedded_hal::spi::{Operation, SpiDevice};

use super::Lis3dhInterface;

// Address-byte framing bits: bit 7 selects read, bit 6 enables address
// auto-increment (always set, matching the device's multi-byte convention
// even though this driver only issues single-register transactions).
const READ_BIT: u8 = 0x80;
const AUTO_INCREMENT_BIT: u8 = 0x40;

/// SPI-based interface implementation for the LIS3DH driver.
pub struct SpiInterface<SPI> {
    spi: SPI,
}

impl<SPI> SpiInterface<SPI> {
    /// Creates a new interface from the provided SPI device abstraction.
    pub const fn new(spi: SPI) -> Self {
        Self { spi }
    }

    /// Builds the address byte used to frame register transactions over SPI.
    fn address_byte(register: u8, is_read: bool) -> u8 {
        let mut address = (register & 0x3F) | AUTO_INCREMENT_BIT;
        if is_read {
            address |= READ_BIT;
        }
        address
    }

    /// Provides mutable access to the wrapped SPI device.
    pub fn spi_mut(&mut self) -> &mut SPI {
        &mut self.spi
    }

    /// Consumes the interface and returns the owned SPI device.
    pub fn release(self) -> SPI {
        self.spi
    }
}

impl<SPI> Lis3dhInterface for SpiInterface<SPI>
where
    SPI: SpiDevice,
{
    type Error = SPI::Error;

    fn write_register(&mut self, register: u8, value: u8) -> core::result::Result<(), Self::Error> {
        let frame = [Self::address_byte(register, false), value];
        let mut operations = [Operation::Write(&frame)];
        self.spi.transaction(&mut operations)
    }

    fn read_register(&mut self, register: u8) -> core::result::Result<u8, Self::Error> {
        let address = [Self::address_byte(register, true)];
        let mut value = [0u8; 1];
        let mut operations = [Operation::Write(&address), Operation::Read(&mut value)];
        self.spi.transaction(&mut operations)?;
        Ok(value[0])
    }
}

#[cfg(test)]
mod tests {
    use super::SpiInterface;
    use crate::interface::Lis3dhInterface;
    use core::convert::Infallible;
    use embedded_hal::spi::{ErrorType, Operation, SpiDevice};

    struct MockDevice<'a> {
        expectations: &'a [TransactionExpectation],
        index: usize,
    }

    impl<'a> MockDevice<'a> {
        fn new(expectations: &'a [TransactionExpectation]) -> Self {
            Self { expectations, index: 0 }
        }
    }

    impl<'a> Drop for MockDevice<'a> {
        fn drop(&mut self) {
            assert_eq!(
                self.index,
                self.expectations.len(),
                "not all SPI expectations consumed"
            );
        }
    }

    impl<'a> ErrorType for MockDevice<'a> {
        type Error = Infallible;
    }

    impl<'a> SpiDevice for MockDevice<'a> {
        fn transaction<'b>(
            &mut self,
            operations: &mut [Operation<'b, u8>],
        ) -> Result<(), Self::Error> {
            let expected = self
                .expectations
                .get(self.index)
                .expect("unexpected SPI transaction");
            self.index += 1;

            match *expected {
                TransactionExpectation::Read { address, response } => {
                    assert_eq!(operations.len(), 2, "expected write+read operations");
                    let (first, rest) = operations.split_first_mut().expect("missing first op");
                    match first {
                        Operation::Write(data) => {
                            assert_eq!(data.len(), 1, "address length mismatch");
                            assert_eq!(data[0], address, "address byte mismatch");
                        }
                        _ => panic!("first operation must be write"),
                    }

                    let second = rest.first_mut().expect("missing second op");
                    match second {
                        Operation::Read(buf) => {
                            assert_eq!(buf.len(), 1, "response length mismatch");
                            buf[0] = response;
                        }
                        _ => panic!("second operation must be read"),
                    }
                }
                TransactionExpectation::Write { frame } => {
                    assert_eq!(operations.len(), 1, "expected a single write operation");
                    match operations.first().expect("missing op") {
                        Operation::Write(data) => {
                            assert_eq!(*data, frame, "frame mismatch");
                        }
                        _ => panic!("operation must be write"),
                    }
                }
            }

            Ok(())
        }
    }

    #[derive(Clone, Copy)]
    enum TransactionExpectation {
        Read { address: u8, response: u8 },
        Write { frame: [u8; 2] },
    }

    #[test]
    fn read_frames_read_and_autoincrement_bits() {
        // CTRL_REG1 read: 0b11 in the top bits, address in the low six.
        let expectations = [TransactionExpectation::Read {
            address: 0b1110_0000,
            response: 0x47,
        }];
        let mock = MockDevice::new(&expectations);
        let mut interface = SpiInterface::new(mock);

        let value = interface.read_register(0x20).unwrap();
        assert_eq!(value, 0x47);
    }

    #[test]
    fn write_frames_autoincrement_bit_only() {
        let expectations = [TransactionExpectation::Write {
            frame: [0b0110_0000, 0x47],
        }];
        let mock = MockDevice::new(&expectations);
        let mut interface = SpiInterface::new(mock);

        interface.write_register(0x20, 0x47).unwrap();
    }

    #[test]
    fn address_is_masked_to_six_bits() {
        let expectations = [TransactionExpectation::Write {
            frame: [0b0111_1101, 0x10],
        }];
        let mock = MockDevice::new(&expectations);
        let mut interface = SpiInterface::new(mock);

        interface.write_register(0x3D, 0x10).unwrap();
    }
}
