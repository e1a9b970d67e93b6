//! Register map definitions for the LIS3DH accelerometer.
#![allow(unused_parens)]

use modular_bitfield::prelude::*;

use crate::params::{
    AdcState, AxisState, BlockDataUpdate, FullScale, InterruptLatch, InterruptLevel,
};

/// Register address of `STATUS_REG_AUX`.
pub const REG_STATUS_AUX: u8 = 0x07;
/// Register address of `OUT_ADC3_L` (temperature output, low byte).
pub const REG_TEMP_L: u8 = 0x0C;
/// Register address of `OUT_ADC3_H` (temperature output, high byte).
pub const REG_TEMP_H: u8 = 0x0D;
/// Register address of `TEMP_CFG_REG`.
pub const REG_TEMP_CFG: u8 = 0x1F;
/// Register address of `CTRL_REG1`.
pub const REG_CTRL1: u8 = 0x20;
/// Register address of `CTRL_REG3`.
pub const REG_CTRL3: u8 = 0x22;
/// Register address of `CTRL_REG4`.
pub const REG_CTRL4: u8 = 0x23;
/// Register address of `CTRL_REG5`.
pub const REG_CTRL5: u8 = 0x24;
/// Register address of `CTRL_REG6`.
pub const REG_CTRL6: u8 = 0x25;
/// Register address of `STATUS_REG`.
pub const REG_STATUS: u8 = 0x27;
/// Register address of `OUT_X_L`.
pub const REG_OUT_X_L: u8 = 0x28;
/// Register address of `OUT_X_H`.
pub const REG_OUT_X_H: u8 = 0x29;
/// Register address of `OUT_Y_L`.
pub const REG_OUT_Y_L: u8 = 0x2A;
/// Register address of `OUT_Y_H`.
pub const REG_OUT_Y_H: u8 = 0x2B;
/// Register address of `OUT_Z_L`.
pub const REG_OUT_Z_L: u8 = 0x2C;
/// Register address of `OUT_Z_H`.
pub const REG_OUT_Z_H: u8 = 0x2D;
/// Register address of `FIFO_SRC_REG`.
pub const REG_FIFO_SRC: u8 = 0x2F;
/// Register address of `INT1_CFG`.
pub const REG_INT1_CFG: u8 = 0x30;
/// Register address of `INT1_SRC`.
pub const REG_INT1_SRC: u8 = 0x31;
/// Register address of `INT1_THS`.
pub const REG_INT1_THS: u8 = 0x32;
/// Register address of `INT1_DURATION`.
pub const REG_INT1_DURATION: u8 = 0x33;
/// Register address of `CLICK_CFG`.
pub const REG_CLICK_CFG: u8 = 0x38;
/// Register address of `CLICK_SRC`.
pub const REG_CLICK_SRC: u8 = 0x39;
/// Register address of `CLICK_THS`.
pub const REG_CLICK_THS: u8 = 0x3A;
/// Register address of `TIME_LIMIT`.
pub const REG_TIME_LIMIT: u8 = 0x3B;
/// Register address of `TIME_LATENCY`.
pub const REG_TIME_LATENCY: u8 = 0x3C;
/// Register address of `TIME_WINDOW`.
pub const REG_TIME_WINDOW: u8 = 0x3D;

/// Value written to `TEMP_CFG_REG` to enable both the ADC and the
/// temperature sensor in one shot.
pub const TEMP_CFG_ADC_AND_TEMP_ON: u8 = 0xC0;

/// Access permissions encoded for each register.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegisterAccess {
    /// Read-only register.
    ReadOnly,
    /// Write-only register.
    WriteOnly,
    /// Read/write register.
    ReadWrite,
}

/// Minimal metadata exposed by every register value type.
pub trait Register {
    /// Raw storage backing the register payload.
    type Raw: Copy;
    /// Register address as documented in the datasheet.
    const ADDRESS: u8;
    /// Access permission classification.
    const ACCESS: RegisterAccess;
    /// Optional reset/default value defined by the datasheet.
    const RESET_VALUE: Option<Self::Raw>;
}

/// Bitfield representation of `CTRL_REG1` (address `0x20`).
#[allow(unused_parens)]
#[bitfield]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CtrlReg1 {
    // X-axis enable (bit 0).
    pub x_enable: AxisState,
    // Y-axis enable (bit 1).
    pub y_enable: AxisState,
    // Z-axis enable (bit 2).
    pub z_enable: AxisState,
    // Low-power mode enable (bit 3).
    pub low_power: bool,
    // Output data rate code (bits 7:4).
    pub odr: B4,
}

impl From<u8> for CtrlReg1 {
    fn from(value: u8) -> Self {
        Self::from_bytes([value])
    }
}

impl From<CtrlReg1> for u8 {
    fn from(value: CtrlReg1) -> Self {
        value.into_bytes()[0]
    }
}

/// Bitfield representation of `TEMP_CFG_REG` (address `0x1F`).
#[allow(unused_parens)]
#[bitfield]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TempCfg {
    #[skip]
    __: B6,
    // Temperature sensor enable (bit 6).
    pub temp_enable: bool,
    // Auxiliary ADC enable (bit 7).
    pub adc_enable: AdcState,
}

impl From<u8> for TempCfg {
    fn from(value: u8) -> Self {
        Self::from_bytes([value])
    }
}

impl From<TempCfg> for u8 {
    fn from(value: TempCfg) -> Self {
        value.into_bytes()[0]
    }
}

/// Bitfield representation of `CTRL_REG3` (address `0x22`), routing interrupt
/// sources to the INT1 pin.
///
/// This register is fully owned by
/// [`Lis3dh::set_int1_routing`](crate::device::Lis3dh::set_int1_routing), so
/// it is written whole rather than read-modify-written.
#[allow(unused_parens)]
#[bitfield]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Int1PinRouting {
    #[skip]
    __: B1,
    // FIFO overrun interrupt on INT1 (bit 1).
    pub overrun: bool,
    // FIFO watermark interrupt on INT1 (bit 2).
    pub watermark: bool,
    // DRDY2 interrupt on INT1 (bit 3).
    pub data_ready_2: bool,
    // DRDY1 interrupt on INT1 (bit 4).
    pub data_ready_1: bool,
    // AOI2 interrupt on INT1 (bit 5).
    pub aoi2: bool,
    // AOI1 interrupt on INT1 (bit 6).
    pub aoi1: bool,
    // Click interrupt on INT1 (bit 7).
    pub click: bool,
}

impl From<u8> for Int1PinRouting {
    fn from(value: u8) -> Self {
        Self::from_bytes([value])
    }
}

impl From<Int1PinRouting> for u8 {
    fn from(value: Int1PinRouting) -> Self {
        value.into_bytes()[0]
    }
}

/// Bitfield representation of `CTRL_REG4` (address `0x23`).
#[allow(unused_parens)]
#[bitfield]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CtrlReg4 {
    #[skip]
    __: B4,
    // Full-scale selection (bits 5:4).
    pub full_scale: FullScale,
    #[skip]
    __: B1,
    // Block data update (bit 7).
    pub block_data_update: BlockDataUpdate,
}

impl From<u8> for CtrlReg4 {
    fn from(value: u8) -> Self {
        Self::from_bytes([value])
    }
}

impl From<CtrlReg4> for u8 {
    fn from(value: CtrlReg4) -> Self {
        value.into_bytes()[0]
    }
}

/// Bitfield representation of `CTRL_REG5` (address `0x24`).
#[allow(unused_parens)]
#[bitfield]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CtrlReg5 {
    #[skip]
    __: B3,
    // Latch interrupt request on INT1 (bit 3).
    pub latch_int1: InterruptLatch,
    #[skip]
    __: B4,
}

impl From<u8> for CtrlReg5 {
    fn from(value: u8) -> Self {
        Self::from_bytes([value])
    }
}

impl From<CtrlReg5> for u8 {
    fn from(value: CtrlReg5) -> Self {
        value.into_bytes()[0]
    }
}

/// Bitfield representation of `CTRL_REG6` (address `0x25`).
#[allow(unused_parens)]
#[bitfield]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CtrlReg6 {
    #[skip]
    __: B1,
    // Interrupt pin polarity (bit 1).
    pub interrupt_level: InterruptLevel,
    #[skip]
    __: B6,
}

impl From<u8> for CtrlReg6 {
    fn from(value: u8) -> Self {
        Self::from_bytes([value])
    }
}

impl From<CtrlReg6> for u8 {
    fn from(value: CtrlReg6) -> Self {
        value.into_bytes()[0]
    }
}

/// Bitfield representation of `INT1_CFG` (address `0x30`).
///
/// Fully owned by one packer; written whole.
#[allow(unused_parens)]
#[bitfield]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Int1Config {
    // X low event enable (bit 0).
    pub x_low: bool,
    // X high event enable (bit 1).
    pub x_high: bool,
    // Y low event enable (bit 2).
    pub y_low: bool,
    // Y high event enable (bit 3).
    pub y_high: bool,
    // Z low event enable (bit 4).
    pub z_low: bool,
    // Z high event enable (bit 5).
    pub z_high: bool,
    // 6-direction detection enable (bit 6).
    pub six_d: bool,
    // AND/OR combination of enabled events (bit 7).
    pub aoi: bool,
}

impl From<u8> for Int1Config {
    fn from(value: u8) -> Self {
        Self::from_bytes([value])
    }
}

impl From<Int1Config> for u8 {
    fn from(value: Int1Config) -> Self {
        value.into_bytes()[0]
    }
}

/// Bitfield representation of `CLICK_CFG` (address `0x38`).
///
/// Fully owned by one packer; written whole.
#[allow(unused_parens)]
#[bitfield]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClickConfig {
    // X single-click enable (bit 0).
    pub x_single: bool,
    // X double-click enable (bit 1).
    pub x_double: bool,
    // Y single-click enable (bit 2).
    pub y_single: bool,
    // Y double-click enable (bit 3).
    pub y_double: bool,
    // Z single-click enable (bit 4).
    pub z_single: bool,
    // Z double-click enable (bit 5).
    pub z_double: bool,
    #[skip]
    __: B2,
}

impl From<u8> for ClickConfig {
    fn from(value: u8) -> Self {
        Self::from_bytes([value])
    }
}

impl From<ClickConfig> for u8 {
    fn from(value: ClickConfig) -> Self {
        value.into_bytes()[0]
    }
}

/// Bitfield representation of `STATUS_REG_AUX` (address `0x07`).
#[allow(unused_parens)]
#[bitfield]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AuxStatus {
    // New data available on ADC channel 1 (bit 0).
    pub adc1_new_data: bool,
    // New data available on ADC channel 2 (bit 1).
    pub adc2_new_data: bool,
    // New data available on ADC channel 3 (bit 2).
    pub adc3_new_data: bool,
    // New data available on any ADC channel (bit 3).
    pub adc321_new_data: bool,
    // ADC channel 1 overrun (bit 4).
    pub adc1_overrun: bool,
    // ADC channel 2 overrun (bit 5).
    pub adc2_overrun: bool,
    // ADC channel 3 overrun (bit 6).
    pub adc3_overrun: bool,
    // Any ADC channel overrun (bit 7).
    pub adc321_overrun: bool,
}

impl From<u8> for AuxStatus {
    fn from(value: u8) -> Self {
        Self::from_bytes([value])
    }
}

impl From<AuxStatus> for u8 {
    fn from(value: AuxStatus) -> Self {
        value.into_bytes()[0]
    }
}

/// Bitfield representation of `STATUS_REG` (address `0x27`).
#[allow(unused_parens)]
#[bitfield]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Status {
    // New X-axis data available (bit 0).
    pub x_new_data: bool,
    // New Y-axis data available (bit 1).
    pub y_new_data: bool,
    // New Z-axis data available (bit 2).
    pub z_new_data: bool,
    // New data available on all axes (bit 3).
    pub xyz_new_data: bool,
    // X-axis data overrun (bit 4).
    pub x_overrun: bool,
    // Y-axis data overrun (bit 5).
    pub y_overrun: bool,
    // Z-axis data overrun (bit 6).
    pub z_overrun: bool,
    // Data overrun on all axes (bit 7).
    pub xyz_overrun: bool,
}

impl From<u8> for Status {
    fn from(value: u8) -> Self {
        Self::from_bytes([value])
    }
}

impl From<Status> for u8 {
    fn from(value: Status) -> Self {
        value.into_bytes()[0]
    }
}

/// Bitfield representation of `FIFO_SRC_REG` (address `0x2F`).
#[allow(unused_parens)]
#[bitfield]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FifoSource {
    // Number of unread FIFO samples (bits 4:0).
    pub unread_samples: B5,
    // FIFO empty flag (bit 5).
    pub empty: bool,
    // FIFO overrun flag (bit 6).
    pub overrun: bool,
    // Watermark level exceeded (bit 7).
    pub watermark: bool,
}

impl From<u8> for FifoSource {
    fn from(value: u8) -> Self {
        Self::from_bytes([value])
    }
}

impl From<FifoSource> for u8 {
    fn from(value: FifoSource) -> Self {
        value.into_bytes()[0]
    }
}

/// Bitfield representation of `INT1_SRC` (address `0x31`).
#[allow(unused_parens)]
#[bitfield]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Int1Source {
    // X low event occurred (bit 0).
    pub x_low: bool,
    // X high event occurred (bit 1).
    pub x_high: bool,
    // Y low event occurred (bit 2).
    pub y_low: bool,
    // Y high event occurred (bit 3).
    pub y_high: bool,
    // Z low event occurred (bit 4).
    pub z_low: bool,
    // Z high event occurred (bit 5).
    pub z_high: bool,
    // Interrupt active flag (bit 6).
    pub interrupt_active: bool,
    #[skip]
    __: B1,
}

impl From<u8> for Int1Source {
    fn from(value: u8) -> Self {
        Self::from_bytes([value])
    }
}

impl From<Int1Source> for u8 {
    fn from(value: Int1Source) -> Self {
        value.into_bytes()[0]
    }
}

/// Bitfield representation of `CLICK_SRC` (address `0x39`).
#[allow(unused_parens)]
#[bitfield]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClickSource {
    // Click detected on X (bit 0).
    pub x: bool,
    // Click detected on Y (bit 1).
    pub y: bool,
    // Click detected on Z (bit 2).
    pub z: bool,
    // Click sign, set for negative acceleration (bit 3).
    pub negative: bool,
    // Single-click event detected (bit 4).
    pub single_click: bool,
    // Double-click event detected (bit 5).
    pub double_click: bool,
    // Interrupt active flag (bit 6).
    pub interrupt_active: bool,
    #[skip]
    __: B1,
}

impl From<u8> for ClickSource {
    fn from(value: u8) -> Self {
        Self::from_bytes([value])
    }
}

impl From<ClickSource> for u8 {
    fn from(value: ClickSource) -> Self {
        value.into_bytes()[0]
    }
}

impl Register for CtrlReg1 {
    type Raw = u8;
    const ADDRESS: u8 = REG_CTRL1;
    const ACCESS: RegisterAccess = RegisterAccess::ReadWrite;
    const RESET_VALUE: Option<Self::Raw> = Some(0x07);
}

impl Register for TempCfg {
    type Raw = u8;
    const ADDRESS: u8 = REG_TEMP_CFG;
    const ACCESS: RegisterAccess = RegisterAccess::ReadWrite;
    const RESET_VALUE: Option<Self::Raw> = Some(0x00);
}

impl Register for Int1PinRouting {
    type Raw = u8;
    const ADDRESS: u8 = REG_CTRL3;
    const ACCESS: RegisterAccess = RegisterAccess::ReadWrite;
    const RESET_VALUE: Option<Self::Raw> = Some(0x00);
}

impl Register for CtrlReg4 {
    type Raw = u8;
    const ADDRESS: u8 = REG_CTRL4;
    const ACCESS: RegisterAccess = RegisterAccess::ReadWrite;
    const RESET_VALUE: Option<Self::Raw> = Some(0x00);
}

impl Register for CtrlReg5 {
    type Raw = u8;
    const ADDRESS: u8 = REG_CTRL5;
    const ACCESS: RegisterAccess = RegisterAccess::ReadWrite;
    const RESET_VALUE: Option<Self::Raw> = Some(0x00);
}

impl Register for CtrlReg6 {
    type Raw = u8;
    const ADDRESS: u8 = REG_CTRL6;
    const ACCESS: RegisterAccess = RegisterAccess::ReadWrite;
    const RESET_VALUE: Option<Self::Raw> = Some(0x00);
}

impl Register for Int1Config {
    type Raw = u8;
    const ADDRESS: u8 = REG_INT1_CFG;
    const ACCESS: RegisterAccess = RegisterAccess::ReadWrite;
    const RESET_VALUE: Option<Self::Raw> = Some(0x00);
}

impl Register for ClickConfig {
    type Raw = u8;
    const ADDRESS: u8 = REG_CLICK_CFG;
    const ACCESS: RegisterAccess = RegisterAccess::ReadWrite;
    const RESET_VALUE: Option<Self::Raw> = Some(0x00);
}

impl Register for AuxStatus {
    type Raw = u8;
    const ADDRESS: u8 = REG_STATUS_AUX;
    const ACCESS: RegisterAccess = RegisterAccess::ReadOnly;
    const RESET_VALUE: Option<Self::Raw> = None;
}

impl Register for Status {
    type Raw = u8;
    const ADDRESS: u8 = REG_STATUS;
    const ACCESS: RegisterAccess = RegisterAccess::ReadOnly;
    const RESET_VALUE: Option<Self::Raw> = None;
}

impl Register for FifoSource {
    type Raw = u8;
    const ADDRESS: u8 = REG_FIFO_SRC;
    const ACCESS: RegisterAccess = RegisterAccess::ReadOnly;
    const RESET_VALUE: Option<Self::Raw> = None;
}

impl Register for Int1Source {
    type Raw = u8;
    const ADDRESS: u8 = REG_INT1_SRC;
    const ACCESS: RegisterAccess = RegisterAccess::ReadOnly;
    const RESET_VALUE: Option<Self::Raw> = None;
}

impl Register for ClickSource {
    type Raw = u8;
    const ADDRESS: u8 = REG_CLICK_SRC;
    const ACCESS: RegisterAccess = RegisterAccess::ReadOnly;
    const RESET_VALUE: Option<Self::Raw> = None;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::params::{AxisState, BlockDataUpdate, FullScale, InterruptLatch, InterruptLevel};

    /// Validates that CTRL_REG1 bitfields match the datasheet layout.
    #[test]
    fn ctrl_reg1_layout_matches_datasheet() {
        let reg = CtrlReg1::new()
            .with_x_enable(AxisState::On)
            .with_y_enable(AxisState::On)
            .with_z_enable(AxisState::On)
            .with_low_power(false)
            .with_odr(0b0100);

        assert_eq!(u8::from(reg), 0b0100_0111);

        let decoded = CtrlReg1::from(0b0101_1010u8);
        assert_eq!(decoded.odr(), 0b0101);
        assert!(decoded.low_power());
        assert_eq!(decoded.x_enable(), AxisState::Off);
        assert_eq!(decoded.y_enable(), AxisState::On);
        assert_eq!(decoded.z_enable(), AxisState::Off);
    }

    /// Ensures the interrupt routing packer places each source on its
    /// documented bit.
    #[test]
    fn int1_routing_layout_matches_datasheet() {
        let routing = Int1PinRouting::new().with_aoi1(true);
        assert_eq!(u8::from(routing), 0b0100_0000);

        let routing = Int1PinRouting::new().with_click(true).with_overrun(true);
        assert_eq!(u8::from(routing), 0b1000_0010);
    }

    #[test]
    fn ctrl_reg4_owns_only_bdu_and_scale() {
        let decoded = CtrlReg4::from(0b1011_1111u8);
        assert_eq!(decoded.block_data_update(), BlockDataUpdate::Enabled);
        assert_eq!(decoded.full_scale(), FullScale::G16);

        // Bits outside BDU/FS survive a field update untouched.
        let updated = decoded.with_full_scale(FullScale::G2);
        assert_eq!(u8::from(updated), 0b1000_1111);
    }

    #[test]
    fn ctrl_reg5_latch_is_bit_3() {
        let reg = CtrlReg5::from(0u8).with_latch_int1(InterruptLatch::Enabled);
        assert_eq!(u8::from(reg), 0b0000_1000);
    }

    #[test]
    fn ctrl_reg6_polarity_is_bit_1() {
        let reg = CtrlReg6::from(0u8).with_interrupt_level(InterruptLevel::ActiveLow);
        assert_eq!(u8::from(reg), 0b0000_0010);
    }

    #[test]
    fn int1_config_packs_6d_positioning_setup() {
        // All axes high+low, AOI and 6D set: the 6D positioning example value.
        let cfg = Int1Config::new()
            .with_aoi(true)
            .with_six_d(true)
            .with_x_low(true)
            .with_x_high(true)
            .with_y_low(true)
            .with_y_high(true)
            .with_z_low(true)
            .with_z_high(true);
        assert_eq!(u8::from(cfg), 0xFF);
    }

    #[test]
    fn click_source_decodes_z_single_click() {
        let src = ClickSource::from(0b0101_0100u8);
        assert!(src.z());
        assert!(src.single_click());
        assert!(src.interrupt_active());
        assert!(!src.double_click());
        assert!(!src.negative());
    }

    #[test]
    fn fifo_source_sample_count() {
        let src = FifoSource::from(0b1001_1010u8);
        assert_eq!(src.unread_samples(), 26);
        assert!(src.watermark());
        assert!(!src.overrun());
    }
}
