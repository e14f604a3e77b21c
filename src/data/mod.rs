//! Sample data and query grids.

pub mod sample;

pub use sample::*;
