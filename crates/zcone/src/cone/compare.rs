//! Equality, order and hashing on canonical descriptions.
//!
//! Each comparison canonicalizes both operands first (cached by the state
//! machine), so two cones compare equal iff they are the same set.
//! The hashed key lives behind a `RefCell` but is fixed once canonical, so
//! `clippy::mutable_key_type` on `HashSet<Cone>` is a false positive.

use std::cmp::Ordering;
use std::hash::{Hash, Hasher};

use super::Cone;

impl Cone {
    fn canonical_key(&self) -> (usize, crate::ZMatrix, crate::ZMatrix) {
        self.canonicalize();
        let (inequalities, equations) = self.rows();
        (self.n, equations, inequalities)
    }
}

impl PartialEq for Cone {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Cone {}

impl Ord for Cone {
    fn cmp(&self, other: &Self) -> Ordering {
        self.canonical_key().cmp(&other.canonical_key())
    }
}

impl PartialOrd for Cone {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Hash for Cone {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.canonical_key().hash(state);
    }
}
