//! SIMD dot product kernels and the half precision conversions they rely on.
//!
//! The dot product is written once, generically over a [`LaneVector`], and instantiated for
//! three register shapes: 4 x f32, 8 x f32, and 8 x f32 loaded from half precision storage.
//! Which shapes exist is decided at build time through the `lanes4`, `lanes8` and `half8`
//! Cargo features; [`describe_selected_lane_widths`] reports the result.

mod capabilities;
mod dot;
mod half;
mod lane;

pub use capabilities::{Capabilities, describe_selected_lane_widths};
pub use dot::{dot_product, dot_product_naive};
#[cfg(feature = "half8")]
pub use dot::dot_product_half_w8;
#[cfg(feature = "lanes4")]
pub use dot::dot_product_w4;
#[cfg(feature = "lanes8")]
pub use dot::dot_product_w8;
pub use half::{
    Half, convert_f32s_into, convert_halves_into, f32_to_half, f32s_to_halves, half_to_f32,
    halves_to_f32s,
};
pub use lane::LaneVector;
#[cfg(feature = "half8")]
pub use lane::Half8;
#[cfg(feature = "lanes4")]
pub use lane::Float4;
#[cfg(feature = "lanes8")]
pub use lane::Float8;
