use std::ops::{Add, AddAssign, Mul};
#[cfg(any(feature = "lanes4", feature = "lanes8", feature = "half8"))]
use std::simd::Simd;
#[cfg(feature = "half8")]
use std::simd::{
    Select,
    cmp::SimdPartialEq,
    num::{SimdFloat, SimdUint},
};

#[cfg(feature = "half8")]
use crate::numerics::half::{
    EXP_REBIAS, Half, INF_NAN_REBIAS, SHIFTED_EXP, SUBNORMAL_MAGIC, f32_to_half, half_to_f32,
};

/// A fixed-width register of `f32` lanes, loaded from and stored to slices of [`Self::Elem`].
///
/// This is the only seam between the dot product and the lane width: the algorithm in
/// [`crate::numerics::dot_product`] is written once against this trait, and every width is a
/// monomorphized copy of it. Addition and multiplication are lane-wise and never move data
/// across lanes; only [`LaneVector::horizontal_sum`] does.
///
/// # Contract
///
/// - `load` and `store` require a window of at least [`LaneVector::SIZE`] elements; only the
///   first `SIZE` are touched. The window does not need any particular alignment.
/// - `horizontal_sum` adds the lanes strictly left to right, starting from lane 0. Changing
///   that order changes the rounding of every dot product.
pub trait LaneVector:
    Copy + Default + Add<Output = Self> + Mul<Output = Self> + AddAssign
{
    const SIZE: usize;
    type Elem: Copy;

    fn zero() -> Self;
    fn load(src: &[Self::Elem]) -> Self;
    fn store(self, dest: &mut [Self::Elem]);
    fn horizontal_sum(self) -> f32;

    /// Scalar product of two elements, used for the tail that does not fill a register.
    fn multiply_one(a: Self::Elem, b: Self::Elem) -> f32;
}

// The f32-backed registers only differ by their width, so the operator boilerplate is shared.
#[cfg(any(feature = "lanes4", feature = "lanes8", feature = "half8"))]
macro_rules! lane_ops {
    ($name:ident) => {
        impl Add for $name {
            type Output = Self;

            #[inline(always)]
            fn add(self, rhs: Self) -> Self {
                $name(self.0 + rhs.0)
            }
        }

        impl Mul for $name {
            type Output = Self;

            #[inline(always)]
            fn mul(self, rhs: Self) -> Self {
                $name(self.0 * rhs.0)
            }
        }

        impl AddAssign for $name {
            #[inline(always)]
            fn add_assign(&mut self, rhs: Self) {
                *self = *self + rhs;
            }
        }

        impl Default for $name {
            fn default() -> Self {
                $name(Simd::splat(0.0))
            }
        }
    };
}

/// Four `f32` lanes.
#[cfg(feature = "lanes4")]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Float4(Simd<f32, 4>);

#[cfg(feature = "lanes4")]
lane_ops!(Float4);

#[cfg(feature = "lanes4")]
impl Float4 {
    pub fn from_array(lanes: [f32; 4]) -> Self {
        Float4(Simd::from_array(lanes))
    }

    pub fn to_array(self) -> [f32; 4] {
        self.0.to_array()
    }
}

#[cfg(feature = "lanes4")]
impl LaneVector for Float4 {
    const SIZE: usize = 4;
    type Elem = f32;

    #[inline(always)]
    fn zero() -> Self {
        Float4(Simd::splat(0.0))
    }

    #[inline(always)]
    fn load(src: &[f32]) -> Self {
        Float4(Simd::from_slice(src))
    }

    #[inline(always)]
    fn store(self, dest: &mut [f32]) {
        self.0.copy_to_slice(dest);
    }

    #[inline(always)]
    fn horizontal_sum(self) -> f32 {
        let x = self.0.to_array();
        x[0] + x[1] + x[2] + x[3]
    }

    #[inline(always)]
    fn multiply_one(a: f32, b: f32) -> f32 {
        a * b
    }
}

/// Eight `f32` lanes.
#[cfg(feature = "lanes8")]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Float8(Simd<f32, 8>);

#[cfg(feature = "lanes8")]
lane_ops!(Float8);

#[cfg(feature = "lanes8")]
impl Float8 {
    pub fn from_array(lanes: [f32; 8]) -> Self {
        Float8(Simd::from_array(lanes))
    }

    pub fn to_array(self) -> [f32; 8] {
        self.0.to_array()
    }
}

#[cfg(feature = "lanes8")]
impl LaneVector for Float8 {
    const SIZE: usize = 8;
    type Elem = f32;

    #[inline(always)]
    fn zero() -> Self {
        Float8(Simd::splat(0.0))
    }

    #[inline(always)]
    fn load(src: &[f32]) -> Self {
        Float8(Simd::from_slice(src))
    }

    #[inline(always)]
    fn store(self, dest: &mut [f32]) {
        self.0.copy_to_slice(dest);
    }

    #[inline(always)]
    fn horizontal_sum(self) -> f32 {
        let x = self.0.to_array();
        x[0] + x[1] + x[2] + x[3] + x[4] + x[5] + x[6] + x[7]
    }

    #[inline(always)]
    fn multiply_one(a: f32, b: f32) -> f32 {
        a * b
    }
}

/// Eight `f32` lanes loaded from and stored to [`Half`] values.
///
/// Loads widen all eight halves at once with lane-parallel integer arithmetic, which gives
/// bit-for-bit the same result as [`half_to_f32`]. Stores narrow lane by lane with
/// round-to-nearest-even.
#[cfg(feature = "half8")]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Half8(Simd<f32, 8>);

#[cfg(feature = "half8")]
lane_ops!(Half8);

#[cfg(feature = "half8")]
impl Half8 {
    pub fn from_array(lanes: [f32; 8]) -> Self {
        Half8(Simd::from_array(lanes))
    }

    pub fn to_array(self) -> [f32; 8] {
        self.0.to_array()
    }

    #[inline(always)]
    fn widen(halves: Simd<u16, 8>) -> Simd<f32, 8> {
        let bits: Simd<u32, 8> = halves.cast();
        let mut out = (bits & Simd::splat(0x7fff)) << Simd::splat(13);
        let exp = out & Simd::splat(SHIFTED_EXP);
        out += Simd::splat(EXP_REBIAS);

        let inf_nan = exp.simd_eq(Simd::splat(SHIFTED_EXP));
        let subnormal = exp.simd_eq(Simd::splat(0));

        out = inf_nan.select(out + Simd::splat(INF_NAN_REBIAS), out);
        let renormalized = (Simd::<f32, 8>::from_bits(out + Simd::splat(1 << 23))
            - Simd::splat(f32::from_bits(SUBNORMAL_MAGIC)))
        .to_bits();
        out = subnormal.select(renormalized, out);

        Simd::<f32, 8>::from_bits(out | (bits & Simd::splat(0x8000)) << Simd::splat(16))
    }
}

#[cfg(feature = "half8")]
impl LaneVector for Half8 {
    const SIZE: usize = 8;
    type Elem = Half;

    #[inline(always)]
    fn zero() -> Self {
        Half8(Simd::splat(0.0))
    }

    #[inline(always)]
    fn load(src: &[Half]) -> Self {
        let src = &src[..Self::SIZE];
        let raw = Simd::from_array(std::array::from_fn(|i| src[i].to_bits()));
        Half8(Self::widen(raw))
    }

    #[inline(always)]
    fn store(self, dest: &mut [Half]) {
        let dest = &mut dest[..Self::SIZE];
        for (d, lane) in dest.iter_mut().zip(self.0.to_array()) {
            *d = f32_to_half(lane);
        }
    }

    #[inline(always)]
    fn horizontal_sum(self) -> f32 {
        let x = self.0.to_array();
        x[0] + x[1] + x[2] + x[3] + x[4] + x[5] + x[6] + x[7]
    }

    #[inline(always)]
    fn multiply_one(a: Half, b: Half) -> f32 {
        half_to_f32(a) * half_to_f32(b)
    }
}
