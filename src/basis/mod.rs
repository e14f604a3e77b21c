//! Basis sets and the strategies that build them from breakpoints.
//!
//! A `BasisSet` is an ordered list of `MonoFunction`s; the order defines the
//! column order of the design matrix and therefore of the coefficient vector.

pub mod factory;
pub mod set;

pub use factory::*;
pub use set::*;
