//! Random source port — uniform draws used to generate mock data.

/// Produces uniformly distributed integers.
///
/// Implementations must be usable from many requests at once; each call is an
/// independent draw.
pub trait RandomSource {
    /// Draw an integer in `low..=high`. Callers guarantee `low <= high`.
    fn int_inclusive(&self, low: i64, high: i64) -> i64;

    /// Draw an index in `0..len`. Callers guarantee `len > 0`.
    fn index(&self, len: usize) -> usize;
}
