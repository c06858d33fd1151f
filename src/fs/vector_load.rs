use std::path::Path;

use crate::error::{Error, Result};

/// Loads a float32 NumPy array and flattens it in row-major order.
///
/// One and two dimensional arrays are accepted; a matrix of shape `(rows, dim)` becomes one
/// sequence of `rows * dim` values.
pub fn load_f32_npy(path: impl AsRef<Path>) -> Result<Vec<f32>> {
    let path = path.as_ref();
    let bytes = std::fs::read(path)?;
    let npy_err = |source: std::io::Error| Error::Npy {
        path: path.to_path_buf(),
        source,
    };

    let npy = npyz::NpyFile::new(&bytes[..]).map_err(npy_err)?;
    let shape = npy.shape().to_vec();
    if shape.is_empty() || shape.len() > 2 {
        return Err(Error::Shape(shape));
    }

    let total: u64 = shape.iter().product();
    let mut values = Vec::with_capacity(total as usize);
    for value in npy.data::<f32>().map_err(|e| npy_err(std::io::Error::other(e)))? {
        values.push(value.map_err(npy_err)?);
    }

    if values.is_empty() {
        return Err(Error::EmptyInput(path.to_path_buf()));
    }
    tracing::debug!(path = %path.display(), ?shape, "loaded input vector");
    Ok(values)
}
