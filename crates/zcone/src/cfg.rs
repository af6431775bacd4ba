//! Fixed policy constants (internal).
//!
//! Policy
//! - Exact arithmetic needs no tolerances; the only knobs are row-count
//!   thresholds. They are constants, not runtime configuration.

/// Redundancy elimination is skipped for fewer inequality rows than this:
/// after dedup a single nonzero row always defines a facet.
pub(crate) const MIN_ROWS_FOR_REDUNDANCY: usize = 2;
