//! Knowledge levels and preassumption flags.

use std::fmt;
use std::ops::BitOr;

/// How much of a cone's description is known to be reduced.
///
/// Ordered: `Raw < EquationsKnown < FacetsKnown < Canonical`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum ConeState {
    /// Rows as supplied.
    #[default]
    Raw = 0,
    /// Equations are a basis of all linear forms vanishing on the cone.
    EquationsKnown = 1,
    /// Additionally every inequality defines a distinct facet.
    FacetsKnown = 2,
    /// Additionally both matrices are in normal form.
    Canonical = 3,
}

impl ConeState {
    /// Levels strictly above `Raw`, in order.
    pub(crate) const ADVANCING: [ConeState; 3] = [
        ConeState::EquationsKnown,
        ConeState::FacetsKnown,
        ConeState::Canonical,
    ];
}

impl fmt::Display for ConeState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ConeState::Raw => "raw",
            ConeState::EquationsKnown => "equations known",
            ConeState::FacetsKnown => "facets known",
            ConeState::Canonical => "canonical",
        };
        f.write_str(s)
    }
}

/// Claims about the input rows made at construction and trusted without checks.
///
/// A false claim yields wrong answers, not a panic.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub struct Preassumptions {
    /// The equations span every linear form vanishing on the cone.
    pub implied_equations_known: bool,
    /// Every inequality defines a distinct facet.
    pub facets_known: bool,
}

impl Preassumptions {
    pub const NONE: Self = Self {
        implied_equations_known: false,
        facets_known: false,
    };
    pub const IMPLIED_EQUATIONS_KNOWN: Self = Self {
        implied_equations_known: true,
        facets_known: false,
    };
    pub const FACETS_KNOWN: Self = Self {
        implied_equations_known: false,
        facets_known: true,
    };
    pub const ALL: Self = Self {
        implied_equations_known: true,
        facets_known: true,
    };

    /// Flags held by both.
    #[inline]
    pub fn intersect(self, other: Self) -> Self {
        Self {
            implied_equations_known: self.implied_equations_known && other.implied_equations_known,
            facets_known: self.facets_known && other.facets_known,
        }
    }

    /// The flag standing in for `state`, if there is one.
    pub(crate) fn covers(self, state: ConeState) -> bool {
        match state {
            ConeState::Raw => true,
            ConeState::EquationsKnown => self.implied_equations_known,
            ConeState::FacetsKnown => self.facets_known,
            ConeState::Canonical => false,
        }
    }
}

impl BitOr for Preassumptions {
    type Output = Self;
    fn bitor(self, rhs: Self) -> Self {
        Self {
            implied_equations_known: self.implied_equations_known || rhs.implied_equations_known,
            facets_known: self.facets_known || rhs.facets_known,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flags_combine() {
        let both = Preassumptions::IMPLIED_EQUATIONS_KNOWN | Preassumptions::FACETS_KNOWN;
        assert_eq!(both, Preassumptions::ALL);
        assert_eq!(both.intersect(Preassumptions::FACETS_KNOWN), Preassumptions::FACETS_KNOWN);
        assert_eq!(Preassumptions::NONE | Preassumptions::NONE, Preassumptions::NONE);
    }

    #[test]
    fn flags_never_cover_canonical() {
        assert!(Preassumptions::NONE.covers(ConeState::Raw));
        assert!(Preassumptions::ALL.covers(ConeState::FacetsKnown));
        assert!(!Preassumptions::ALL.covers(ConeState::Canonical));
        assert!(!Preassumptions::FACETS_KNOWN.covers(ConeState::EquationsKnown));
    }
}
