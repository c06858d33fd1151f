use pyo3::prelude::*;

mod kernels;
mod vecpy;

/// A Python module implemented in Rust exposing SIMD dot product kernels.
///
/// Each kernel computes the same dot product with a different lane width: a scalar
/// reference, 4 and 8 lanes of f32, and 8 lanes fed from half precision values. Results
/// agree within single precision rounding, not bit for bit.
#[pymodule]
fn lanedotpy(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(kernels::dot_naive, m)?)?;
    m.add_function(wrap_pyfunction!(kernels::dot_w4, m)?)?;
    m.add_function(wrap_pyfunction!(kernels::dot_w8, m)?)?;
    m.add_function(wrap_pyfunction!(kernels::dot_half_w8, m)?)?;
    m.add_function(wrap_pyfunction!(kernels::float_to_half, m)?)?;
    m.add_function(wrap_pyfunction!(kernels::half_to_float, m)?)?;
    m.add_function(wrap_pyfunction!(kernels::quantize, m)?)?;
    m.add_function(wrap_pyfunction!(kernels::describe, m)?)?;
    Ok(())
}
