#![no_std]
#![doc = include_str!("../README.md")]
#![warn(missing_docs)]
#![warn(clippy::all)]

//! lanefold: generic, allocation-free array kernels over fixed-width numeric types
//!
//! The crate is organized in layers, leaves first:
//!
//! - [`element`]: the ten supported scalar types behind the [`Element`] trait,
//!   carrying identities, wrapping combinators, and the per-type lane count.
//! - [`traits`] / [`lanes`]: the [`SimdVector`] abstraction and its lane-array
//!   implementation, one accumulator-register's worth of elements.
//! - [`horizontal`]: the lane-halving combine shared by every reduction.
//! - [`strategy`]: the per-(type, operation) execution-plan table.
//! - [`reduce`], [`fold`], [`map`], [`predicate`], [`scan`]: the kernel
//!   families themselves.
//!
//! # Contract
//!
//! Kernels borrow caller-owned slices, never allocate, and run to completion
//! synchronously. Two-input kernels require equal-length slices and map
//! kernels require an output at least as long as the inputs; violations
//! panic (the uniform fail-fast policy, applied to every kernel alike).
//! Integer overflow wraps and is never an error.

// Float min/max/abs/fma in a no_std context.
extern crate libm;

// Scalar element types and their per-type facts
pub mod element;

// Core vector abstraction trait
pub mod traits;

// Lane-array vector implementation
pub mod lanes;

// Lane-halving horizontal combine
pub mod horizontal;

// Per-(type, operation) execution plans
pub mod strategy;

// Whole-array reductions to a single scalar
pub mod reduce;

// Single-pass map-then-reduce kernels
pub mod fold;

// Elementwise transform kernels
pub mod map;

// Early-exit boolean scans
pub mod predicate;

// Inclusive prefix sums
pub mod scan;

pub use element::{Element, FloatElement};
pub use lanes::Lanes;
pub use strategy::{plan_for, OpKind, Plan};
pub use traits::SimdVector;

pub use fold::{dot_product, sum_of_abs_diff, sum_of_squares};
pub use map::{abs, clamp, elementwise_add, offset, scale, scaled_add, sqrt};
pub use predicate::{all_eq, all_gt, any_gt};
pub use reduce::{reduce_add, reduce_max, reduce_min, reduce_mul};
pub use scan::scan_add;
