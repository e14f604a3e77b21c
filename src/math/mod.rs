//! Mathematical building blocks: basis functions and the least-squares solve.

pub mod mono;
pub mod ols;

pub use mono::*;
pub use ols::*;
