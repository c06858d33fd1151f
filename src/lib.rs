#![feature(portable_simd)]

pub mod error;
pub mod fs;
pub mod harness;
pub mod numerics;
pub mod statistics;
