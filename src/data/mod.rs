//! Data module: the liquid-holding glass.

pub mod glass;

pub use glass::{DEFAULT_CAPACITY, Glass};
