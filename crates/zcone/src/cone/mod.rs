//! Lazily reduced polyhedral cones over the integer lattice.
//!
//! Purpose
//! - `Cone` stores `{x ∈ R^n : A·x >= 0, E·x = 0}` as supplied and reduces the
//!   description only as far as a query needs: cheap queries (vector
//!   containment, lineality dimension) read the rows as they are, dimension
//!   needs the implied equations, extreme rays need facets, comparison needs the
//!   canonical form.
//!
//! Why this design (short)
//! - Reads take `&self`. The description lives in a private `RefCell` and only
//!   ever moves forward through `ConeState`; extreme rays sit in a `OnceCell`
//!   filled at most once. No accessor hands out a borrow guard.
//! - Preassumption flags let constructors that know their output is already
//!   reduced skip the LP passes. They are trusted, never checked.
//!
//! Assumptions and conventions
//! - Every row and every vector passed in has length `n`; only debug builds
//!   check this outside `Cone::try_new`.
//! - The origin cone is the degenerate case: all inequalities become implied
//!   equations and the equations span the whole dual space.
//! - `Cone` is `Send` but not `Sync`.
//!
//! References
//! - Code cross-refs: `crate::lp` (state transitions), `crate::dd` (extreme rays),
//!   `crate::zmatrix` (row reductions)

mod compare;
mod display;
mod ops;
mod queries;
mod rays;
mod state;
mod types;

pub use ops::{intersection, product};
pub use types::{ConeState, Preassumptions};

use std::cell::{OnceCell, RefCell};

use num_bigint::BigInt;
use num_traits::One;

use crate::error::{ConeError, ConeResult};
use crate::zmatrix::{ZMatrix, ZVector};

/// Mutable part of a cone: the rows and how far they have been reduced.
#[derive(Clone, Debug)]
struct Description {
    state: ConeState,
    inequalities: ZMatrix,
    equations: ZMatrix,
}

/// Polyhedral cone `{x : inequalities·x >= 0, equations·x = 0}`.
///
/// Invariants:
/// - Both matrices have width `n` for the lifetime of the value.
/// - `state` never decreases; the extreme-ray cache is never reset.
#[derive(Clone, Debug)]
pub struct Cone {
    n: usize,
    preassumptions: Preassumptions,
    multiplicity: BigInt,
    linear_forms: ZMatrix,
    description: RefCell<Description>,
    extreme_rays: OnceCell<ZMatrix>,
}

impl Cone {
    /// Cone from raw rows. The ambient dimension is the width of `inequalities`.
    ///
    /// Width mismatches are only caught in debug builds; use [`Cone::try_new`]
    /// for untrusted input.
    pub fn new(inequalities: ZMatrix, equations: ZMatrix, preassumptions: Preassumptions) -> Self {
        debug_assert_eq!(
            inequalities.width(),
            equations.width(),
            "inequalities and equations must have the same width"
        );
        let n = inequalities.width();
        Self {
            n,
            preassumptions,
            multiplicity: BigInt::one(),
            linear_forms: ZMatrix::new(n),
            description: RefCell::new(Description {
                state: ConeState::Raw,
                inequalities,
                equations,
            }),
            extreme_rays: OnceCell::new(),
        }
    }

    /// Checked variant of [`Cone::new`] with an explicit ambient dimension.
    pub fn try_new(
        n: usize,
        inequalities: ZMatrix,
        equations: ZMatrix,
        preassumptions: Preassumptions,
    ) -> ConeResult<Self> {
        for (what, m) in [("inequalities", &inequalities), ("equations", &equations)] {
            if m.width() != n {
                return Err(ConeError::DimensionMismatch {
                    what,
                    expected: n,
                    found: m.width(),
                });
            }
        }
        Ok(Self::new(inequalities, equations, preassumptions))
    }

    /// Checked construction from plain rows of length `n`.
    pub fn try_from_rows(
        n: usize,
        inequalities: Vec<ZVector>,
        equations: Vec<ZVector>,
        preassumptions: Preassumptions,
    ) -> ConeResult<Self> {
        let inequalities = ZMatrix::try_from_rows(n, inequalities)?;
        let equations = ZMatrix::try_from_rows(n, equations)?;
        Self::try_new(n, inequalities, equations, preassumptions)
    }

    /// Cone with inequalities only and no preassumptions.
    pub fn from_inequalities(inequalities: ZMatrix) -> Self {
        let equations = ZMatrix::new(inequalities.width());
        Self::new(inequalities, equations, Preassumptions::NONE)
    }

    /// `{x : x_i >= 0 for all i}`.
    pub fn positive_orthant(n: usize) -> Self {
        Self::new(ZMatrix::identity(n), ZMatrix::new(n), Preassumptions::ALL)
    }

    /// All of `R^n`.
    pub fn full_space(n: usize) -> Self {
        Self::new(ZMatrix::new(n), ZMatrix::new(n), Preassumptions::ALL)
    }

    #[inline]
    pub fn ambient_dimension(&self) -> usize {
        self.n
    }

    #[inline]
    pub fn preassumptions(&self) -> Preassumptions {
        self.preassumptions
    }

    pub fn multiplicity(&self) -> BigInt {
        self.multiplicity.clone()
    }

    pub fn set_multiplicity(&mut self, m: BigInt) {
        self.multiplicity = m;
    }

    pub fn linear_forms(&self) -> ZMatrix {
        self.linear_forms.clone()
    }

    pub fn set_linear_forms(&mut self, forms: ZMatrix) {
        debug_assert_eq!(forms.width(), self.n, "linear forms have wrong width");
        self.linear_forms = forms;
    }

    /// Inequalities as currently stored; no reduction is triggered.
    pub fn inequalities(&self) -> ZMatrix {
        self.description.borrow().inequalities.clone()
    }

    /// Equations as currently stored; no reduction is triggered.
    pub fn equations(&self) -> ZMatrix {
        self.description.borrow().equations.clone()
    }

    /// Current `(inequalities, equations)` in one borrow.
    fn rows(&self) -> (ZMatrix, ZMatrix) {
        let d = self.description.borrow();
        (d.inequalities.clone(), d.equations.clone())
    }
}
