use lanedot::numerics::{
    Half, describe_selected_lane_widths, dot_product_half_w8, dot_product_naive, dot_product_w4,
    dot_product_w8, f32_to_half, f32s_to_halves, half_to_f32, halves_to_f32s,
};
use pyo3::{PyResult, exceptions::PyValueError, pyfunction};

use crate::vecpy::VecPy;

/// The kernels take the length from their first operand and only read that many elements
/// of the second; Python callers get a ValueError instead.
fn check_lengths(a: &VecPy, b: &VecPy) -> PyResult<()> {
    if a.inner.len() != b.inner.len() {
        return Err(PyValueError::new_err(format!(
            "operands have different lengths: {} and {}",
            a.inner.len(),
            b.inner.len()
        )));
    }
    Ok(())
}

/// Scalar reference dot product, summed left to right.
#[pyfunction]
pub fn dot_naive(a: VecPy, b: VecPy) -> PyResult<f32> {
    check_lengths(&a, &b)?;
    Ok(dot_product_naive(a.as_ref(), b.as_ref()))
}

/// Dot product with 4 lanes of f32.
#[pyfunction]
pub fn dot_w4(a: VecPy, b: VecPy) -> PyResult<f32> {
    check_lengths(&a, &b)?;
    Ok(dot_product_w4(a.as_ref(), b.as_ref()))
}

/// Dot product with 8 lanes of f32.
#[pyfunction]
pub fn dot_w8(a: VecPy, b: VecPy) -> PyResult<f32> {
    check_lengths(&a, &b)?;
    Ok(dot_product_w8(a.as_ref(), b.as_ref()))
}

/// Dot product over half precision copies of both operands, accumulated in f32.
///
/// Args:
///     a: First operand, rounded to half precision before use
///     b: Second operand, rounded to half precision before use
#[pyfunction]
pub fn dot_half_w8(a: VecPy, b: VecPy) -> PyResult<f32> {
    check_lengths(&a, &b)?;
    let (ha, hb) = (f32s_to_halves(a.as_ref()), f32s_to_halves(b.as_ref()));
    Ok(dot_product_half_w8(&ha, &hb))
}

/// Round a float to half precision and return the 16 bit pattern.
#[pyfunction]
pub fn float_to_half(x: f32) -> u16 {
    f32_to_half(x).to_bits()
}

/// Widen a 16 bit half precision pattern to a float.
#[pyfunction]
pub fn half_to_float(bits: u16) -> f32 {
    half_to_f32(Half::from_bits(bits))
}

/// Round every value of the list to the nearest half precision value.
#[pyfunction]
pub fn quantize(values: VecPy) -> VecPy {
    VecPy {
        inner: halves_to_f32s(&f32s_to_halves(values.as_ref())),
    }
}

/// Lane widths and target features this module was compiled with.
#[pyfunction]
pub fn describe() -> String {
    describe_selected_lane_widths()
}
