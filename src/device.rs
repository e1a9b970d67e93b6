//! High-level LIS3DH device driver implementation.

use crate::config::Config;
use crate::convert::{decode_accel, duration_code, threshold_code, DurationCap};
use crate::error::{Error, Result};
use crate::interface::i2c::I2cInterface;
use crate::interface::spi::SpiInterface;
use crate::interface::Lis3dhInterface;
use crate::params::{
    AdcState,
    AxisState,
    BlockDataUpdate,
    DataRate,
    FullScale,
    InterruptLatch,
    InterruptLevel,
    PowerMode,
};
use crate::registers::{
    AuxStatus,
    ClickConfig,
    ClickSource,
    CtrlReg1,
    CtrlReg4,
    CtrlReg5,
    CtrlReg6,
    FifoSource,
    Int1Config,
    Int1PinRouting,
    Int1Source,
    Register,
    Status,
    TempCfg,
    REG_CLICK_THS,
    REG_INT1_DURATION,
    REG_INT1_THS,
    REG_OUT_X_H,
    REG_OUT_X_L,
    REG_OUT_Y_H,
    REG_OUT_Y_L,
    REG_OUT_Z_H,
    REG_OUT_Z_L,
    REG_TEMP_H,
    REG_TEMP_L,
    REG_TIME_LATENCY,
    REG_TIME_LIMIT,
    REG_TIME_WINDOW,
    TEMP_CFG_ADC_AND_TEMP_ON,
};
use embedded_hal::i2c::I2c;
use embedded_hal::spi::SpiDevice;

/// High-level synchronous driver for the LIS3DH accelerometer.
///
/// Owns the bus interface exclusively and caches the two register-backed
/// values downstream conversions depend on: the current full-scale range and
/// output data rate. Both are updated in the same call that writes the
/// corresponding configuration register, never speculatively.
pub struct Lis3dh<IFACE> {
    interface: IFACE,
    scale: FullScale,
    odr: DataRate,
    temperature_offset: i16,
}

/// One decoded acceleration triplet, in raw LSB counts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Acceleration {
    /// X-axis reading.
    pub x: i16,
    /// Y-axis reading.
    pub y: i16,
    /// Z-axis reading.
    pub z: i16,
}

#[cfg(feature = "defmt")]
impl defmt::Format for Acceleration {
    fn format(&self, f: defmt::Formatter) {
        defmt::write!(
            f,
            "Acceleration {{ x: {}, y: {}, z: {} }}",
            self.x,
            self.y,
            self.z
        );
    }
}

impl<IFACE> Lis3dh<IFACE> {
    // ==================================================================
    // == Driver Construction & Ownership ===============================
    // ==================================================================
    /// Creates a new driver instance from the provided bus interface.
    ///
    /// Cached state starts at the device reset values: 2 g full scale,
    /// 50 Hz data rate, zero temperature offset.
    pub fn new(interface: IFACE) -> Self {
        Self {
            interface,
            scale: FullScale::G2,
            odr: DataRate::Hz50,
            temperature_offset: 0,
        }
    }

    /// Consumes the driver and returns the owned interface.
    pub fn release(self) -> IFACE {
        self.interface
    }

    /// Provides mutable access to the underlying interface.
    pub fn interface_mut(&mut self) -> &mut IFACE {
        &mut self.interface
    }

    /// Returns the cached full-scale range.
    pub fn full_scale(&self) -> FullScale {
        self.scale
    }

    /// Returns the cached output data rate.
    pub fn data_rate(&self) -> DataRate {
        self.odr
    }

    /// Returns the bias added to decoded temperature readings.
    pub fn temperature_offset(&self) -> i16 {
        self.temperature_offset
    }

    /// Sets the bias added to decoded temperature readings (°C).
    pub fn set_temperature_offset(&mut self, offset: i16) {
        self.temperature_offset = offset;
    }
}

impl<SPI> Lis3dh<SpiInterface<SPI>>
where
    SPI: SpiDevice,
{
    // ==================================================================
    // == SPI Convenience Constructors ==================================
    // ==================================================================
    /// Convenience constructor for SPI transports.
    pub fn new_spi(spi: SPI) -> Self {
        Self::new(SpiInterface::new(spi))
    }

    /// Releases the driver, returning the SPI device.
    pub fn release_spi(self) -> SPI {
        self.release().release()
    }
}

impl<I2C> Lis3dh<I2cInterface<I2C>>
where
    I2C: I2c,
{
    // ==================================================================
    // == I2C Convenience Constructors ==================================
    // ==================================================================
    /// Convenience constructor for I2C transports at a 7-bit device address.
    pub fn new_i2c(i2c: I2C, address: u8) -> Self {
        Self::new(I2cInterface::new(i2c, address))
    }

    /// Releases the driver, returning the I2C bus.
    pub fn release_i2c(self) -> I2C {
        self.release().release()
    }
}

impl<IFACE, CommE> Lis3dh<IFACE>
where
    IFACE: Lis3dhInterface<Error = CommE>,
{
    // ==================================================================
    // == Initialization & Global Configuration =========================
    // ==================================================================
    /// Applies a power-on configuration in one shot.
    ///
    /// Programs the data rate and power mode, enables all three axes, and
    /// sets interrupt polarity, INT1 latch, block data update, and full
    /// scale, in that order.
    pub fn init(&mut self, config: &Config) -> Result<(), CommE> {
        self.set_data_rate(config.data_rate_hz, config.power_mode)?;
        self.enable_axes(AxisState::On, AxisState::On, AxisState::On)?;
        self.set_interrupt_level(config.interrupt_level)?;
        self.set_interrupt_latch(config.interrupt_latch)?;
        self.set_block_data_update(config.block_data_update)?;
        self.set_full_scale(config.scale_g)?;
        Ok(())
    }

    /// Enables or disables each axis independently (`CTRL_REG1[2:0]`).
    pub fn enable_axes(
        &mut self,
        x: AxisState,
        y: AxisState,
        z: AxisState,
    ) -> Result<(), CommE> {
        self.update_register::<CtrlReg1, _>(|reg| {
            reg.set_x_enable(x);
            reg.set_y_enable(y);
            reg.set_z_enable(z);
        })
    }

    /// Sets the output data rate and power mode (`CTRL_REG1[7:3]`).
    ///
    /// `hz` is matched against the device's rate table; an unrecognized
    /// frequency falls back to 50 Hz (code `0100`) rather than failing.
    /// [`PowerMode::Off`] forces the rate code to `0000` (power-down)
    /// regardless of the requested frequency; the cached rate still updates
    /// so a later wake-up resumes duration conversions at the matched rate.
    pub fn set_data_rate(&mut self, hz: u16, mode: PowerMode) -> Result<(), CommE> {
        let rate = match DataRate::from_hz(hz) {
            Some(rate) => rate,
            None => DataRate::FALLBACK,
        };

        let code = match mode {
            PowerMode::Off => 0b0000,
            _ => rate.code(),
        };

        self.update_register::<CtrlReg1, _>(|reg| {
            reg.set_odr(code);
            reg.set_low_power(matches!(mode, PowerMode::Low));
        })?;

        self.odr = rate;
        Ok(())
    }

    /// Puts the device into power-down mode.
    pub fn power_down(&mut self) -> Result<(), CommE> {
        self.set_data_rate(50, PowerMode::Off)
    }

    /// Sets the full-scale range (`CTRL_REG4[5:4]`).
    ///
    /// `g` must be one of 2, 4, 8, 16; anything else falls back to 2 g.
    /// Updates the cached scale used by subsequent threshold conversions.
    pub fn set_full_scale(&mut self, g: u8) -> Result<(), CommE> {
        let scale = match FullScale::from_g(g) {
            Some(scale) => scale,
            None => FullScale::FALLBACK,
        };

        self.update_register::<CtrlReg4, _>(|reg| reg.set_full_scale(scale))?;

        self.scale = scale;
        Ok(())
    }

    /// Enables or disables block data update (`CTRL_REG4.BDU`).
    pub fn set_block_data_update(&mut self, bdu: BlockDataUpdate) -> Result<(), CommE> {
        self.update_register::<CtrlReg4, _>(|reg| reg.set_block_data_update(bdu))
    }

    // ==================================================================
    // == Temperature & Auxiliary ADC ===================================
    // ==================================================================
    /// Enables the auxiliary ADC and the on-board temperature sensor.
    pub fn enable_temperature(&mut self) -> Result<(), CommE> {
        self.interface
            .write_register(TempCfg::ADDRESS, TEMP_CFG_ADC_AND_TEMP_ON)
            .map_err(Error::from)
    }

    /// Disables the temperature sensor, optionally keeping the ADC running.
    pub fn disable_temperature(&mut self, adc: AdcState) -> Result<(), CommE> {
        self.update_register::<TempCfg, _>(|reg| {
            reg.set_temp_enable(false);
            reg.set_adc_enable(adc);
        })
    }

    /// Enables or disables the auxiliary 10-bit ADC (`TEMP_CFG_REG` bit 7).
    pub fn set_adc(&mut self, state: AdcState) -> Result<(), CommE> {
        self.update_register::<TempCfg, _>(|reg| reg.set_adc_enable(state))
    }

    // ==================================================================
    // == Interrupt Configuration =======================================
    // ==================================================================
    /// Sets the interrupt pin polarity (`CTRL_REG6` bit 1).
    pub fn set_interrupt_level(&mut self, level: InterruptLevel) -> Result<(), CommE> {
        self.update_register::<CtrlReg6, _>(|reg| reg.set_interrupt_level(level))
    }

    /// Latches or unlatches the INT1 interrupt request (`CTRL_REG5` bit 3).
    pub fn set_interrupt_latch(&mut self, latch: InterruptLatch) -> Result<(), CommE> {
        self.update_register::<CtrlReg5, _>(|reg| reg.set_latch_int1(latch))
    }

    /// Routes interrupt sources to the INT1 pin (`CTRL_REG3`).
    pub fn set_int1_routing(&mut self, routing: Int1PinRouting) -> Result<(), CommE> {
        self.interface
            .write_register(Int1PinRouting::ADDRESS, u8::from(routing))
            .map_err(Error::from)
    }

    /// Programs the INT1 event configuration (`INT1_CFG`).
    pub fn set_int1_config(&mut self, config: Int1Config) -> Result<(), CommE> {
        self.interface
            .write_register(Int1Config::ADDRESS, u8::from(config))
            .map_err(Error::from)
    }

    /// Sets the INT1 wake-up threshold in milli-g (`INT1_THS`).
    ///
    /// Quantized against the cached full-scale range; negative inputs use
    /// their absolute value.
    pub fn set_int1_threshold(&mut self, threshold_mg: i32) -> Result<(), CommE> {
        self.interface
            .write_register(REG_INT1_THS, threshold_code(threshold_mg, self.scale))
            .map_err(Error::from)
    }

    /// Sets the minimum INT1 event duration in milliseconds (`INT1_DURATION`).
    ///
    /// Quantized against the cached output data rate; saturates to the 7-bit
    /// maximum when over range.
    pub fn set_int1_duration(&mut self, duration_ms: i32) -> Result<(), CommE> {
        self.interface
            .write_register(
                REG_INT1_DURATION,
                duration_code(duration_ms, self.odr, DurationCap::SevenBit),
            )
            .map_err(Error::from)
    }

    // ==================================================================
    // == Click Detection ===============================================
    // ==================================================================
    /// Programs the click detection configuration (`CLICK_CFG`).
    pub fn set_click_config(&mut self, config: ClickConfig) -> Result<(), CommE> {
        self.interface
            .write_register(ClickConfig::ADDRESS, u8::from(config))
            .map_err(Error::from)
    }

    /// Sets the click detection threshold in milli-g (`CLICK_THS`).
    pub fn set_click_threshold(&mut self, threshold_mg: i32) -> Result<(), CommE> {
        self.interface
            .write_register(REG_CLICK_THS, threshold_code(threshold_mg, self.scale))
            .map_err(Error::from)
    }

    /// Sets the click time limit in milliseconds (`TIME_LIMIT`).
    pub fn set_click_time_limit(&mut self, duration_ms: i32) -> Result<(), CommE> {
        self.interface
            .write_register(
                REG_TIME_LIMIT,
                duration_code(duration_ms, self.odr, DurationCap::SevenBit),
            )
            .map_err(Error::from)
    }

    /// Sets the click time latency in milliseconds (`TIME_LATENCY`).
    pub fn set_click_time_latency(&mut self, duration_ms: i32) -> Result<(), CommE> {
        self.interface
            .write_register(
                REG_TIME_LATENCY,
                duration_code(duration_ms, self.odr, DurationCap::EightBit),
            )
            .map_err(Error::from)
    }

    /// Sets the click time window in milliseconds (`TIME_WINDOW`).
    pub fn set_click_time_window(&mut self, duration_ms: i32) -> Result<(), CommE> {
        self.interface
            .write_register(
                REG_TIME_WINDOW,
                duration_code(duration_ms, self.odr, DurationCap::EightBit),
            )
            .map_err(Error::from)
    }

    // ==================================================================
    // == Status ========================================================
    // ==================================================================
    /// Reads the auxiliary ADC status register (`STATUS_REG_AUX`).
    pub fn aux_status(&mut self) -> Result<AuxStatus, CommE> {
        self.read_register_as::<AuxStatus>()
    }

    /// Reads the main status register (`STATUS_REG`).
    pub fn status(&mut self) -> Result<Status, CommE> {
        self.read_register_as::<Status>()
    }

    /// Reads the FIFO status register (`FIFO_SRC_REG`).
    pub fn fifo_source(&mut self) -> Result<FifoSource, CommE> {
        self.read_register_as::<FifoSource>()
    }

    /// Reads the INT1 event source register (`INT1_SRC`).
    ///
    /// Reading clears a latched INT1 request.
    pub fn int1_source(&mut self) -> Result<Int1Source, CommE> {
        self.read_register_as::<Int1Source>()
    }

    /// Reads the click event source register (`CLICK_SRC`).
    pub fn click_source(&mut self) -> Result<ClickSource, CommE> {
        self.read_register_as::<ClickSource>()
    }

    // ==================================================================
    // == Data Acquisition ==============================================
    // ==================================================================
    /// Reads the X-axis acceleration in raw LSB counts.
    pub fn acceleration_x(&mut self) -> Result<i16, CommE> {
        self.read_axis(REG_OUT_X_H, REG_OUT_X_L)
    }

    /// Reads the Y-axis acceleration in raw LSB counts.
    pub fn acceleration_y(&mut self) -> Result<i16, CommE> {
        self.read_axis(REG_OUT_Y_H, REG_OUT_Y_L)
    }

    /// Reads the Z-axis acceleration in raw LSB counts.
    pub fn acceleration_z(&mut self) -> Result<i16, CommE> {
        self.read_axis(REG_OUT_Z_H, REG_OUT_Z_L)
    }

    /// Reads all three axes as one triplet.
    ///
    /// Built from three single-axis reads; there is no atomicity guarantee
    /// across the pairs beyond what BDU provides in hardware.
    pub fn acceleration(&mut self) -> Result<Acceleration, CommE> {
        Ok(Acceleration {
            x: self.acceleration_x()?,
            y: self.acceleration_y()?,
            z: self.acceleration_z()?,
        })
    }

    /// Reads the on-board temperature sensor, in °C plus the configured
    /// offset.
    pub fn temperature(&mut self) -> Result<i16, CommE> {
        let msb = self.interface.read_register(REG_TEMP_H).map_err(Error::from)?;
        let lsb = self.interface.read_register(REG_TEMP_L).map_err(Error::from)?;

        Ok(decode_accel(msb, lsb) + self.temperature_offset)
    }

    // ==================================================================
    // == Internal Register Helpers =====================================
    // ==================================================================

    /// Reads a register and decodes it into its bitfield type.
    fn read_register_as<R>(&mut self) -> Result<R, CommE>
    where
        R: Register<Raw = u8> + From<u8>,
    {
        let raw = self
            .interface
            .read_register(R::ADDRESS)
            .map_err(Error::from)?;
        Ok(R::from(raw))
    }

    /// Read-modify-write cycle over a shared register.
    ///
    /// The mutator touches only the bitfield members its caller owns, so
    /// unrelated bits round-trip untouched. The write always happens, even
    /// when the mutation produced the byte already in the register.
    fn update_register<R, F>(&mut self, mutate: F) -> Result<(), CommE>
    where
        R: Register<Raw = u8> + From<u8>,
        u8: From<R>,
        F: FnOnce(&mut R),
    {
        let current = self
            .interface
            .read_register(R::ADDRESS)
            .map_err(Error::from)?;

        let mut reg = R::from(current);
        mutate(&mut reg);

        self.interface
            .write_register(R::ADDRESS, u8::from(reg))
            .map_err(Error::from)
    }

    /// Reads one left-justified sample pair, high byte first.
    ///
    /// No atomicity across the two transactions: if the second read fails
    /// the whole logical read fails and no partial value is returned.
    fn read_axis(&mut self, msb_reg: u8, lsb_reg: u8) -> Result<i16, CommE> {
        let msb = self.interface.read_register(msb_reg).map_err(Error::from)?;
        let lsb = self.interface.read_register(lsb_reg).map_err(Error::from)?;

        Ok(decode_accel(msb, lsb))
    }
}
