//! Modular hop arithmetic for rings.
//!
//! Language-level `%` truncates toward zero, which is wrong for negative
//! offsets on a ring. Everything here uses floored (Euclidean) remainders,
//! so results always land in `[0, modulus)`.

/// Reduce a signed offset to a forward step count in `[0, modulus)`.
///
/// A `modulus` of zero describes a ring with nowhere to go; the result is
/// then always `0` instead of a division fault.
///
/// ```
/// use gyre_ring::wrap_steps;
///
/// assert_eq!(wrap_steps(-3, 6), 3);
/// assert_eq!(wrap_steps(13, 6), 1);
/// assert_eq!(wrap_steps(5, 0), 0);
/// ```
pub fn wrap_steps(offset: i64, modulus: usize) -> usize {
    if modulus == 0 {
        return 0;
    }
    offset.rem_euclid(modulus as i64) as usize
}

/// Signed hop count equivalent to `steps` forward hops on a ring of
/// `modulus` positions, choosing whichever direction is shorter.
///
/// Positive results walk toward `next`, negative toward `prev`. Ties go
/// forward. `steps` must already be reduced into `[0, modulus)`.
///
/// ```
/// use gyre_ring::shortest_hops;
///
/// assert_eq!(shortest_hops(2, 6), 2);
/// assert_eq!(shortest_hops(3, 6), 3);
/// assert_eq!(shortest_hops(5, 6), -1);
/// ```
pub fn shortest_hops(steps: usize, modulus: usize) -> i64 {
    debug_assert!(steps < modulus.max(1), "steps {steps} not reduced mod {modulus}");
    if steps > modulus / 2 {
        steps as i64 - modulus as i64
    } else {
        steps as i64
    }
}
