//! Float comparison helpers for tests.
//!
//! Trig-heavy code differs by a few ULP between libm builds and CPU
//! architectures, so exact equality is the wrong tool for most assertions.
//! [`assert_ulp_lt!`] compares by units-in-last-place distance;
//! [`assert_within!`] compares by absolute tolerance for cases where a
//! meaningful epsilon is known (convergence tolerances, table lookups).

/// Maps a float onto the integers so that ULP distance is a simple
/// subtraction. Negative floats are flipped so ordering is monotonic
/// across zero.
#[inline]
pub fn ordered_bits(x: f64) -> u64 {
    let bits = x.to_bits();
    if bits >> 63 == 1 {
        !bits
    } else {
        bits | (1 << 63)
    }
}

#[inline]
pub fn ulp_distance(a: f64, b: f64) -> u64 {
    ordered_bits(a).abs_diff(ordered_bits(b))
}

#[track_caller]
pub fn check_ulp(a: f64, b: f64, max_ulp: u64, ctx: &str) {
    if a == 0.0 && b == 0.0 {
        return;
    }
    assert!(a.is_finite() && b.is_finite(), "non-finite value in {ctx}");
    let d = ulp_distance(a, b);
    assert!(
        d <= max_ulp,
        "{ctx}: ULP={d} exceeds {max_ulp}, a={a} (0x{:016x}) b={b} (0x{:016x})",
        a.to_bits(),
        b.to_bits()
    );
}

#[track_caller]
pub fn check_within(a: f64, b: f64, tolerance: f64, ctx: &str) {
    if a == b {
        return;
    }
    assert!(
        (a - b).abs() < tolerance,
        "{ctx}: |{a} - {b}| = {} exceeds {tolerance}",
        (a - b).abs()
    );
}

#[macro_export]
macro_rules! assert_ulp_lt {
    ($a:expr, $b:expr, $max_ulp:expr) => {
        $crate::test_helpers::check_ulp(
            $a,
            $b,
            $max_ulp,
            &format!("{} vs {}", stringify!($a), stringify!($b)),
        )
    };
}

#[macro_export]
macro_rules! assert_within {
    ($a:expr, $b:expr, $tolerance:expr) => {
        $crate::test_helpers::check_within(
            $a,
            $b,
            $tolerance,
            &format!("{} vs {}", stringify!($a), stringify!($b)),
        )
    };
}
