//! # tanhsinh-math
//!
//! Closed-form abscissa and weight functions of the tanh-sinh (double
//! exponential) substitution `x = tanh(π/2 · sinh(t))`, sampled at `t = h·j`.
//!
//! This crate provides [`abscissa`], [`weight`] and the paired [`node`], plus
//! [`pow10`] for the decimal thresholds derived from a precision.
//! All functions are pure and total over the reals, so they can be called
//! from any thread without coordination.
//!
//! **Zero external dependencies**, auditable in isolation.

pub mod powers;
pub mod transform;

pub use powers::pow10;
pub use transform::{abscissa, node, weight, Node, HALF_PI};
