use pyo3::{
    Bound, FromPyObject, IntoPyObject, PyErr,
    types::{PyAnyMethods, PyList},
};

/// A vector of f32 values crossing the Python boundary as a plain list.
pub struct VecPy {
    pub inner: Vec<f32>,
}

impl AsRef<[f32]> for VecPy {
    fn as_ref(&self) -> &[f32] {
        self.inner.as_ref()
    }
}

/// Parse a Python list of floats into an owned vector. This copies, because the kernels
/// need a contiguous f32 buffer and Python cannot be trusted to keep the list alive.
///
/// Anything that is not a list of numbers surfaces as a TypeError on the Python side.
impl<'a> FromPyObject<'a> for VecPy {
    fn extract_bound(ob: &pyo3::Bound<'a, pyo3::PyAny>) -> pyo3::PyResult<Self> {
        let list: Vec<f32> = ob.downcast::<PyList>()?.extract()?;
        Ok(VecPy { inner: list })
    }
}

// Hand the values back as a Python list
impl<'a> IntoPyObject<'a> for VecPy {
    type Target = PyList;
    type Output = Bound<'a, PyList>;
    type Error = PyErr;

    fn into_pyobject(self, py: pyo3::Python<'a>) -> Result<Self::Output, Self::Error> {
        let internal = self.inner;
        PyList::new(py, internal)
    }
}
