//! Conversions between engineering units and LIS3DH register encodings.
//!
//! Thresholds arrive in milli-g, durations in milliseconds, and samples leave
//! the device as left-justified two's-complement byte pairs. Everything here
//! is pure arithmetic; register traffic stays in the device layer.

use crate::params::{DataRate, FullScale};

/// Saturation cap applied by [`duration_code`].
///
/// `TIME_LIMIT` and `INT1_DURATION` are 7-bit fields, so their saturation
/// point is `127000 / ODR` ms. `TIME_LATENCY` and `TIME_WINDOW` are 8-bit
/// fields on the device and the original threshold check admits codes up to
/// 255, yet the final value is still masked to 7 bits. Inputs between the
/// two caps therefore wrap; this is preserved behavior.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DurationCap {
    /// 7-bit field: saturates above `127000 / ODR` ms.
    SevenBit,
    /// 8-bit field with 7-bit mask: saturates above `255000 / ODR` ms.
    EightBit,
}

impl DurationCap {
    const fn max_code(self) -> u32 {
        match self {
            Self::SevenBit => 127,
            Self::EightBit => 255,
        }
    }
}

/// Decodes a left-justified 10-bit two's-complement sample.
///
/// The device delivers each axis (and the temperature channel) as a 10-bit
/// signed reading left-justified in a 16-bit word, low 6 bits zero. The
/// big-endian sign-extension plus arithmetic shift below is bit-identical to
/// splitting off the sign, inverting, adding one, and shifting the adjusted
/// magnitude. Results land in [-512, 511] and are raw LSB counts; no
/// scale-dependent conversion to physical units happens here.
#[inline]
pub const fn decode_accel(msb: u8, lsb: u8) -> i16 {
    i16::from_be_bytes([msb, lsb]) >> 6
}

/// Quantizes a threshold in milli-g into a 7-bit register code.
///
/// Greedy binary decomposition: for bit `i` from 6 down to 0, the bit is set
/// and `2^(i + shift)` mg subtracted when the remaining magnitude covers it,
/// where `shift` comes from the current full-scale range
/// ([`FullScale::threshold_shift`]). Negative thresholds are treated as their
/// absolute value. Bit 7 is never examined, so the result is 7-bit by
/// construction; over-range inputs simply fill all seven bits.
pub fn threshold_code(threshold_mg: i32, scale: FullScale) -> u8 {
    let mut remaining = threshold_mg.unsigned_abs();
    let shift = scale.threshold_shift() as u32;
    let mut code = 0u8;

    for i in (0..=6u32).rev() {
        let weight = 1u32 << (i + shift);
        if remaining >= weight {
            code |= 1 << i;
            remaining -= weight;
        }
    }

    code
}

/// Quantizes a duration in milliseconds into a 7-bit register code.
///
/// `code = floor(ms / 1000 * ODR)`, masked to 7 bits. Durations beyond the
/// cap for the target field saturate to `0x7F` instead of wrapping; see
/// [`DurationCap`] for the wrap that survives below the 8-bit cap.
pub fn duration_code(duration_ms: i32, odr: DataRate, cap: DurationCap) -> u8 {
    let ms = duration_ms.unsigned_abs() as u64;
    let odr_hz = odr.hz() as u64;

    // max representable input: max_code * 1000 / ODR ms
    if ms * odr_hz > cap.max_code() as u64 * 1000 {
        return 0x7F;
    }

    ((ms * odr_hz / 1000) as u8) & 0x7F
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Encodes a signed 10-bit value the way the device stores it: two's
    /// complement, left-justified in a 16-bit word.
    fn encode_left_justified(value: i16) -> (u8, u8) {
        let word = ((value as u16) << 6).to_be_bytes();
        (word[0], word[1])
    }

    #[test]
    fn decode_zero() {
        assert_eq!(decode_accel(0x00, 0x00), 0);
    }

    #[test]
    fn decode_minus_one() {
        // All-ones 10-bit field, left-justified.
        assert_eq!(decode_accel(0xFF, 0xC0), -1);
    }

    #[test]
    fn decode_extremes() {
        assert_eq!(decode_accel(0x7F, 0xC0), 511);
        assert_eq!(decode_accel(0x80, 0x00), -512);
    }

    #[test]
    fn decode_round_trips_full_range() {
        for value in -512i16..=511 {
            let (msb, lsb) = encode_left_justified(value);
            assert_eq!(decode_accel(msb, lsb), value, "value {}", value);
        }
    }

    #[test]
    fn threshold_256_mg_at_2g() {
        // 16 mg per LSB at 2 g: 256 / 16 = 0x10.
        assert_eq!(threshold_code(256, FullScale::G2), 0x10);
    }

    #[test]
    fn threshold_1088_mg_at_2g() {
        // 1088 = 1024 (bit 6) + 64 (bit 2) -> 0b1000100. Equivalently
        // 1088 / 16 = 68.
        assert_eq!(threshold_code(1088, FullScale::G2), 0x44);
    }

    #[test]
    fn threshold_500_mg_at_4g() {
        // 32 mg per LSB at 4 g: floor(500 / 32) = 15.
        assert_eq!(threshold_code(500, FullScale::G4), 0x0F);
    }

    #[test]
    fn threshold_matches_integer_division_everywhere() {
        for scale in [FullScale::G2, FullScale::G4, FullScale::G8, FullScale::G16] {
            let step = 1i32 << scale.threshold_shift();
            for mg in (0..step * 128).step_by(7) {
                let expected = (mg / step).min(0x7F) as u8;
                assert_eq!(threshold_code(mg, scale), expected, "{} mg", mg);
            }
        }
    }

    #[test]
    fn threshold_uses_absolute_value() {
        assert_eq!(
            threshold_code(-256, FullScale::G2),
            threshold_code(256, FullScale::G2)
        );
    }

    #[test]
    fn duration_basic_quantization() {
        // 120 ms at 50 Hz -> floor(0.12 * 50) = 6.
        assert_eq!(
            duration_code(120, DataRate::Hz50, DurationCap::SevenBit),
            6
        );
        // 320 ms at 50 Hz -> 16.
        assert_eq!(
            duration_code(320, DataRate::Hz50, DurationCap::EightBit),
            16
        );
    }

    #[test]
    fn duration_saturates_seven_bit_field() {
        // Max for a 7-bit field at 50 Hz is 127000/50 = 2540 ms.
        assert_eq!(
            duration_code(3000, DataRate::Hz50, DurationCap::SevenBit),
            0x7F
        );
        assert_eq!(
            duration_code(2540, DataRate::Hz50, DurationCap::SevenBit),
            127
        );
    }

    #[test]
    fn duration_wraps_between_caps_on_eight_bit_field() {
        // 3000 ms at 50 Hz is below the 255000/50 = 5100 ms cap, so the
        // computed code 150 survives the check and wraps under the 7-bit
        // mask: 150 & 0x7F = 22.
        assert_eq!(
            duration_code(3000, DataRate::Hz50, DurationCap::EightBit),
            22
        );
        // Beyond the 8-bit cap it saturates.
        assert_eq!(
            duration_code(6000, DataRate::Hz50, DurationCap::EightBit),
            0x7F
        );
    }

    #[test]
    fn duration_uses_absolute_value() {
        assert_eq!(
            duration_code(-120, DataRate::Hz50, DurationCap::SevenBit),
            duration_code(120, DataRate::Hz50, DurationCap::SevenBit)
        );
    }

    #[test]
    fn duration_zero_is_zero() {
        assert_eq!(duration_code(0, DataRate::Hz400, DurationCap::SevenBit), 0);
    }
}
