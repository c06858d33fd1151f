//! File system I/O for benchmark inputs.
//!
//! Input sequences are read from NumPy `.npy` files holding float32 data.

mod vector_load;

pub use vector_load::*;
