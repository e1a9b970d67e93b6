//! Configuration primitives for the LIS3DH driver.

use crate::params::{BlockDataUpdate, InterruptLatch, InterruptLevel, PowerMode};

/// User-facing power-on configuration for the LIS3DH sensor.
///
/// Applied in one shot by [`Lis3dh::init`](crate::device::Lis3dh::init); every
/// field can also be changed later through the individual setters. Rates and
/// ranges are plain numbers because the device setters document a fallback for
/// unmatched values (50 Hz, 2 g) rather than rejecting them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Config {
    /// Output data rate in hertz.
    pub data_rate_hz: u16,
    /// Power mode applied together with the data rate.
    pub power_mode: PowerMode,
    /// Full-scale range magnitude in g.
    pub scale_g: u8,
    /// Block data update selection.
    pub block_data_update: BlockDataUpdate,
    /// Interrupt pin polarity.
    pub interrupt_level: InterruptLevel,
    /// INT1 latch selection.
    pub interrupt_latch: InterruptLatch,
}

impl Config {
    /// Begins building a [`Config`] using the builder pattern.
    pub fn new() -> ConfigBuilder {
        ConfigBuilder::new()
    }
}

/// Builder for [`Config`] allowing piecemeal construction.
#[derive(Debug, Clone, Copy)]
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    /// Creates a new builder seeded with [`Config::default()`].
    pub fn new() -> Self {
        Self {
            config: Config::default(),
        }
    }

    /// Overrides the output data rate in hertz.
    pub fn data_rate_hz(mut self, hz: u16) -> Self {
        self.config.data_rate_hz = hz;
        self
    }

    /// Overrides the power mode.
    pub fn power_mode(mut self, mode: PowerMode) -> Self {
        self.config.power_mode = mode;
        self
    }

    /// Overrides the full-scale range magnitude in g.
    pub fn scale_g(mut self, g: u8) -> Self {
        self.config.scale_g = g;
        self
    }

    /// Sets the block data update selection.
    pub fn block_data_update(mut self, bdu: BlockDataUpdate) -> Self {
        self.config.block_data_update = bdu;
        self
    }

    /// Sets the interrupt pin polarity.
    pub fn interrupt_level(mut self, level: InterruptLevel) -> Self {
        self.config.interrupt_level = level;
        self
    }

    /// Sets the INT1 latch selection.
    pub fn interrupt_latch(mut self, latch: InterruptLatch) -> Self {
        self.config.interrupt_latch = latch;
        self
    }

    /// Finalizes the builder and returns the [`Config`].
    pub fn build(self) -> Config {
        self.config
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_rate_hz: 50,
            power_mode: PowerMode::Normal,
            scale_g: 2,
            block_data_update: BlockDataUpdate::Enabled,
            interrupt_level: InterruptLevel::ActiveHigh,
            interrupt_latch: InterruptLatch::Enabled,
        }
    }
}
