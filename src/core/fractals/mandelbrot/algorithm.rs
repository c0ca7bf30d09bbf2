use crate::core::data::complex::Complex;

/// Squared magnitude above which an orbit is considered to have diverged (`|z| > 2`).
pub const ESCAPE_RADIUS_SQUARED: f64 = 4.0;

#[inline]
#[must_use]
pub fn has_escaped(z: Complex) -> bool {
    z.magnitude_squared() > ESCAPE_RADIUS_SQUARED
}

/// Escape time of a single point, computed without any working set.
///
/// The orbit starts at `z = c`. Returns the 0-based round at which `|z|² > 4`
/// was first observed, so any `c` with `|c|² > 4` yields 0, and `max_iter` if
/// the orbit stays bounded for every round.
#[must_use]
pub fn escape_time(c: Complex, max_iter: u32) -> u32 {
    let mut z = c;

    for iteration in 0..max_iter {
        if has_escaped(z) {
            return iteration;
        }
        z = z.step(c);
    }

    max_iter
}
