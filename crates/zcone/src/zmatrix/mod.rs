//! Exact integer vectors and matrices (arbitrary precision).
//!
//! Purpose
//! - Provide the row-oriented integer linear algebra the cone engine runs on:
//!   dot products, primitive normalization, rank, kernels, reduced bases,
//!   normal forms modulo a subspace and integral (unimodular) row reduction.
//!
//! Why this design (short)
//! - Entries are `BigInt`, so nothing here can overflow or round; all
//!   reductions over Q go through `BigRational` and come back as primitive
//!   integer rows.
//! - `ZVector` wraps an `nalgebra::DVector<BigInt>`; `ZMatrix` is a list of such
//!   rows with an explicit width, because every algorithm in the engine appends,
//!   removes and sorts whole rows.
//!
//! Conventions
//! - "Primitive" means divided by the (non-negative) gcd of its entries; the
//!   sign is never changed. The zero vector stays zero.
//! - The total order on vectors compares length first, then entries
//!   lexicographically. Matrices compare width, height, then rows.
//!
//! References
//! - Code cross-refs: `crate::cone` (all state transitions), `crate::lp`, `crate::dd`

mod matrix;
mod reduce;
mod vector;

pub use matrix::ZMatrix;
pub use vector::ZVector;

pub(crate) use reduce::{integral_row_echelon, Echelon};

/// Scalar type of all vector and matrix entries.
pub type Integer = num_bigint::BigInt;
