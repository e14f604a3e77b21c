//! Terminal plotting of samples and fitted curves.

pub mod ascii;

pub use ascii::*;
