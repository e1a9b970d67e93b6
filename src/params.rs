//! Strongly typed parameter enumerations for the LIS3DH driver.
//!
//! These enums map directly to datasheet field encodings and replace the
//! stringly-typed toggles of ad-hoc register pokes. Prefer these types over
//! raw integers to keep configuration values valid and explicit.
//!
//! # Examples
//!
//! ```rust
//! use lis3dh::params::{AxisState, DataRate, FullScale, PowerMode};
//!
//! let rate = DataRate::Hz100;
//! let scale = FullScale::G4;
//! let mode = PowerMode::Normal;
//! let x = AxisState::On;
//! let _ = (rate, scale, mode, x);
//! ```

use modular_bitfield::prelude::Specifier;

/// Per-axis enable state (`CTRL_REG1[2:0]`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Specifier)]
#[repr(u8)]
#[bits = 1]
pub enum AxisState {
    /// Axis output disabled.
    Off = 0,
    /// Axis output enabled.
    On = 1,
}

/// Power mode applied together with the output data rate.
///
/// `Off` forces the ODR code to `0000` (power-down) regardless of the
/// requested rate; `Low` sets the low-power bit (`CTRL_REG1.LPEN`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PowerMode {
    /// Normal (high-resolution) operation.
    Normal,
    /// Low-power operation.
    Low,
    /// Power-down mode.
    Off,
}

/// Available output data rate (ODR) selections (`CTRL_REG1[7:4]`).
///
/// 1250 Hz and 5000 Hz share register code `0b1001`; the device interprets it
/// as 1.25 kHz in normal mode and 5 kHz in low-power mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DataRate {
    /// 1 Hz output data rate.
    Hz1,
    /// 10 Hz output data rate.
    Hz10,
    /// 25 Hz output data rate.
    Hz25,
    /// 50 Hz output data rate.
    Hz50,
    /// 100 Hz output data rate.
    Hz100,
    /// 200 Hz output data rate.
    Hz200,
    /// 400 Hz output data rate.
    Hz400,
    /// 1600 Hz output data rate (low-power mode).
    Hz1600,
    /// 1250 Hz output data rate (normal mode).
    Hz1250,
    /// 5000 Hz output data rate (low-power mode).
    Hz5000,
}

impl DataRate {
    /// Rate applied when a requested frequency matches no table entry.
    pub const FALLBACK: Self = Self::Hz50;

    /// Returns the 4-bit ODR register code.
    pub const fn code(self) -> u8 {
        match self {
            Self::Hz1 => 0b0001,
            Self::Hz10 => 0b0010,
            Self::Hz25 => 0b0011,
            Self::Hz50 => 0b0100,
            Self::Hz100 => 0b0101,
            Self::Hz200 => 0b0110,
            Self::Hz400 => 0b0111,
            Self::Hz1600 => 0b1000,
            Self::Hz1250 => 0b1001,
            Self::Hz5000 => 0b1001,
        }
    }

    /// Returns the ODR in hertz as an integer value.
    pub const fn hz(self) -> u16 {
        match self {
            Self::Hz1 => 1,
            Self::Hz10 => 10,
            Self::Hz25 => 25,
            Self::Hz50 => 50,
            Self::Hz100 => 100,
            Self::Hz200 => 200,
            Self::Hz400 => 400,
            Self::Hz1600 => 1_600,
            Self::Hz1250 => 1_250,
            Self::Hz5000 => 5_000,
        }
    }

    /// Looks up a rate by frequency in hertz.
    pub const fn from_hz(hz: u16) -> Option<Self> {
        match hz {
            1 => Some(Self::Hz1),
            10 => Some(Self::Hz10),
            25 => Some(Self::Hz25),
            50 => Some(Self::Hz50),
            100 => Some(Self::Hz100),
            200 => Some(Self::Hz200),
            400 => Some(Self::Hz400),
            1_600 => Some(Self::Hz1600),
            1_250 => Some(Self::Hz1250),
            5_000 => Some(Self::Hz5000),
            _ => None,
        }
    }
}

/// Full-scale range selections (`CTRL_REG4[5:4]`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Specifier)]
#[repr(u8)]
#[bits = 2]
pub enum FullScale {
    /// ±2 g range.
    G2 = 0b00,
    /// ±4 g range.
    G4 = 0b01,
    /// ±8 g range.
    G8 = 0b10,
    /// ±16 g range.
    G16 = 0b11,
}

impl FullScale {
    /// Scale applied when a requested range matches no table entry.
    pub const FALLBACK: Self = Self::G2;

    /// Returns the range magnitude in g.
    pub const fn g(self) -> u8 {
        match self {
            Self::G2 => 2,
            Self::G4 => 4,
            Self::G8 => 8,
            Self::G16 => 16,
        }
    }

    /// Bit-position offset of the threshold LSB weight at this range.
    ///
    /// The 7-bit threshold registers weigh bit `i` as `2^(i + offset)` mg, so
    /// one LSB is 16/32/64/128 mg at 2/4/8/16 g.
    pub const fn threshold_shift(self) -> u8 {
        match self {
            Self::G2 => 4,
            Self::G4 => 5,
            Self::G8 => 6,
            Self::G16 => 7,
        }
    }

    /// Looks up a range by magnitude in g.
    pub const fn from_g(g: u8) -> Option<Self> {
        match g {
            2 => Some(Self::G2),
            4 => Some(Self::G4),
            8 => Some(Self::G8),
            16 => Some(Self::G16),
            _ => None,
        }
    }
}

/// Interrupt pin polarity (`CTRL_REG6.INT_POLARITY`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Specifier)]
#[repr(u8)]
#[bits = 1]
pub enum InterruptLevel {
    /// Interrupt pins drive active high (default).
    ActiveHigh = 0,
    /// Interrupt pins drive active low.
    ActiveLow = 1,
}

/// INT1 latch control (`CTRL_REG5.LIR_INT1`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Specifier)]
#[repr(u8)]
#[bits = 1]
pub enum InterruptLatch {
    /// Interrupt request not latched.
    Disabled = 0,
    /// Interrupt request latched until INT1_SRC is read.
    Enabled = 1,
}

/// Block data update control (`CTRL_REG4.BDU`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Specifier)]
#[repr(u8)]
#[bits = 1]
pub enum BlockDataUpdate {
    /// Output registers update continuously.
    Disabled = 0,
    /// Output registers hold until both bytes of a sample are read.
    Enabled = 1,
}

/// Auxiliary 10-bit ADC control (`TEMP_CFG_REG.ADC_EN`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Specifier)]
#[repr(u8)]
#[bits = 1]
pub enum AdcState {
    /// Auxiliary ADC disabled.
    Disabled = 0,
    /// Auxiliary ADC enabled.
    Enabled = 1,
}
