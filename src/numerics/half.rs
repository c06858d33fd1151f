// Bit layout helpers for the binary16 -> binary32 widening. The exponent field of a
// half shifted into f32 position, and the rebias constants for normal and Inf/NaN values.
pub(crate) const SHIFTED_EXP: u32 = 0x7c00 << 13;
pub(crate) const EXP_REBIAS: u32 = (127 - 15) << 23;
pub(crate) const INF_NAN_REBIAS: u32 = (128 - 16) << 23;
// 2^-14 as an f32, the value subtracted to renormalize half subnormals.
pub(crate) const SUBNORMAL_MAGIC: u32 = 113 << 23;

/// An IEEE 754 binary16 value, stored as its raw bit pattern.
///
/// `Half` is a storage format only: it has no arithmetic of its own. Every kernel widens
/// it to `f32` before computing and narrows back with round-to-nearest-even.
#[repr(transparent)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Half(u16);

impl Half {
    pub const ZERO: Half = Half(0x0000);
    pub const ONE: Half = Half(0x3c00);
    pub const INFINITY: Half = Half(0x7c00);
    pub const NEG_INFINITY: Half = Half(0xfc00);
    pub const NAN: Half = Half(0x7e00);
    /// Largest finite value, 65504.
    pub const MAX: Half = Half(0x7bff);
    /// Smallest positive subnormal, 2^-24.
    pub const MIN_POSITIVE_SUBNORMAL: Half = Half(0x0001);

    pub const fn from_bits(bits: u16) -> Self {
        Half(bits)
    }

    pub const fn to_bits(self) -> u16 {
        self.0
    }

    #[inline]
    pub fn from_f32(value: f32) -> Self {
        f32_to_half(value)
    }

    #[inline]
    pub fn to_f32(self) -> f32 {
        half_to_f32(self)
    }

    pub const fn is_nan(self) -> bool {
        self.0 & 0x7c00 == 0x7c00 && self.0 & 0x03ff != 0
    }
}

impl From<Half> for f32 {
    fn from(value: Half) -> Self {
        half_to_f32(value)
    }
}

impl std::fmt::Display for Half {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_f32())
    }
}

/// Widens a half to `f32`. Exact for every encoding, subnormals included; NaN payloads
/// keep their position in the high mantissa bits.
#[inline]
pub fn half_to_f32(value: Half) -> f32 {
    let bits = value.0 as u32;
    let mut out = (bits & 0x7fff) << 13;
    let exp = out & SHIFTED_EXP;
    out += EXP_REBIAS;

    if exp == SHIFTED_EXP {
        out += INF_NAN_REBIAS;
    } else if exp == 0 {
        // zero or subnormal: bump to the smallest normal and let the FPU renormalize
        out += 1 << 23;
        out = (f32::from_bits(out) - f32::from_bits(SUBNORMAL_MAGIC)).to_bits();
    }

    f32::from_bits(out | (bits & 0x8000) << 16)
}

/// Narrows an `f32` to a half with round-to-nearest-even.
///
/// Magnitudes past the finite half range (including those that round up past 65504)
/// become an infinity of the same sign. Magnitudes at or below half of the smallest
/// subnormal flush to a signed zero. NaN stays NaN, with the quiet bit set.
#[inline]
pub fn f32_to_half(value: f32) -> Half {
    let x = value.to_bits();
    let sign = (x & 0x8000_0000) >> 16;
    let exp = (x & 0x7f80_0000) >> 23;
    let man = x & 0x007f_ffff;

    if exp == 0xff {
        if man == 0 {
            return Half((sign | 0x7c00) as u16);
        }
        return Half((sign | 0x7e00 | (man >> 13)) as u16);
    }

    let half_exp = exp as i32 - 127 + 15;
    if half_exp >= 0x1f {
        return Half((sign | 0x7c00) as u16);
    }

    if half_exp <= 0 {
        if 14 - half_exp > 24 {
            return Half(sign as u16);
        }
        let man = man | 0x0080_0000;
        let mut half_man = man >> (14 - half_exp);
        let round_bit = 1 << (13 - half_exp);
        if (man & round_bit) != 0 && (man & (3 * round_bit - 1)) != 0 {
            half_man += 1;
        }
        return Half((sign | half_man) as u16);
    }

    let packed = sign | (half_exp as u32) << 10 | man >> 13;
    let round_bit = 0x0000_1000;
    if (man & round_bit) != 0 && (man & (3 * round_bit - 1)) != 0 {
        // a carry out of the mantissa bumps the exponent, up to infinity if need be
        Half((packed + 1) as u16)
    } else {
        Half(packed as u16)
    }
}

pub fn f32s_to_halves(values: &[f32]) -> Vec<Half> {
    values.iter().copied().map(f32_to_half).collect()
}

pub fn halves_to_f32s(values: &[Half]) -> Vec<f32> {
    values.iter().copied().map(half_to_f32).collect()
}

/// # Panics
///
/// Panics if `src` and `dst` have different lengths.
pub fn convert_f32s_into(src: &[f32], dst: &mut [Half]) {
    assert_eq!(src.len(), dst.len());
    for (d, &s) in dst.iter_mut().zip(src) {
        *d = f32_to_half(s);
    }
}

/// # Panics
///
/// Panics if `src` and `dst` have different lengths.
pub fn convert_halves_into(src: &[Half], dst: &mut [f32]) {
    assert_eq!(src.len(), dst.len());
    for (d, &s) in dst.iter_mut().zip(src) {
        *d = half_to_f32(s);
    }
}
