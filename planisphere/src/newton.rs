use std::ops::{Div, Sub};

use num_complex::Complex64;

use crate::error::{ProjError, ProjResult};

/// Configuration for the Newton-Raphson solver.
///
/// The defaults are loose enough to converge for every solve in this
/// crate; callers with unusual targets can tighten or relax them. The
/// `context` label ends up in convergence-failure messages.
pub struct NewtonConfig {
    /// Step size below which the iteration is considered converged.
    pub tolerance: f64,
    /// Derivative magnitude below which a Newton step is not trusted.
    pub epsilon: f64,
    pub max_iterations: usize,
    /// Cap on the magnitude of a single step; an overshooting step is
    /// scaled back to this length. Infinite by default.
    pub max_step: f64,
    pub context: &'static str,
}

impl NewtonConfig {
    pub const DEFAULT_TOLERANCE: f64 = 1e-12;
    pub const DEFAULT_EPSILON: f64 = 1e-15;
    pub const DEFAULT_MAX_ITERATIONS: usize = 100;

    pub const fn new(context: &'static str) -> Self {
        Self {
            tolerance: Self::DEFAULT_TOLERANCE,
            epsilon: Self::DEFAULT_EPSILON,
            max_iterations: Self::DEFAULT_MAX_ITERATIONS,
            max_step: f64::INFINITY,
            context,
        }
    }

    pub const fn with_max_step(context: &'static str, max_step: f64) -> Self {
        let mut config = Self::new(context);
        config.max_step = max_step;
        config
    }
}

/// Arithmetic domain the solver can iterate over.
pub trait NewtonScalar: Copy + Sub<Output = Self> + Div<Output = Self> {
    fn magnitude(self) -> f64;
    fn scale(self, factor: f64) -> Self;
}

impl NewtonScalar for f64 {
    #[inline]
    fn magnitude(self) -> f64 {
        self.abs()
    }

    #[inline]
    fn scale(self, factor: f64) -> Self {
        self * factor
    }
}

impl NewtonScalar for Complex64 {
    #[inline]
    fn magnitude(self) -> f64 {
        self.norm()
    }

    #[inline]
    fn scale(self, factor: f64) -> Self {
        self * factor
    }
}

/// Searches for a zero of `f` by Newton-Raphson starting from `initial`.
///
/// Each step evaluates `f` and `f_prime` at the current guess. A
/// derivative smaller in magnitude than `config.epsilon` aborts the
/// search; a step smaller than `config.tolerance` ends it successfully;
/// running out of iterations reports failure.
///
/// Failure is a [`ProjError::ConvergenceFailure`], never a panic:
/// projection inverses that call this supply their own fallback, such as
/// clamping to the nearest pole.
pub fn newton_raphson<T, F, D>(initial: T, f: F, f_prime: D, config: &NewtonConfig) -> ProjResult<T>
where
    T: NewtonScalar,
    F: Fn(T) -> T,
    D: Fn(T) -> T,
{
    let mut x = initial;
    for _ in 0..config.max_iterations {
        let y = f(x);
        let y_prime = f_prime(x);

        if y_prime.magnitude() < config.epsilon {
            return Err(ProjError::convergence_failure(format!(
                "{}: derivative too small",
                config.context
            )));
        }

        let mut step = y / y_prime;
        let step_size = step.magnitude();
        if step_size > config.max_step {
            step = step.scale(config.max_step / step_size);
        }

        let next = x - step;
        if (next - x).magnitude() < config.tolerance {
            return Ok(next);
        }
        x = next;
    }

    Err(ProjError::convergence_failure(format!(
        "{}: no convergence after {} iterations",
        config.context, config.max_iterations
    )))
}

#[cfg(test)]
mod tests {
    use super::*;
    use planisphere_core::assert_within;

    fn sqrt_config() -> NewtonConfig {
        NewtonConfig {
            tolerance: 1e-6,
            epsilon: 1e-12,
            ..NewtonConfig::new("sqrt test")
        }
    }

    #[test]
    fn test_real_sqrt_converges() {
        for k in [2.0, 4.0, 100.0, 123.0, 612.0, 1e-3] {
            let root = newton_raphson(
                k / 2.0 + 0.5,
                |x| x * x - k,
                |x| 2.0 * x,
                &sqrt_config(),
            )
            .unwrap();
            assert_within!(root, k.sqrt(), 1e-5);
        }
    }

    #[test]
    fn test_no_real_root_fails_without_looping_forever() {
        // x^2 + 1 has no real zero; the iteration must give up.
        let result = newton_raphson(1.0, |x| x * x + 1.0, |x| 2.0 * x, &sqrt_config());
        assert!(matches!(
            result,
            Err(ProjError::ConvergenceFailure { .. })
        ));
    }

    #[test]
    fn test_flat_derivative_aborts() {
        let result = newton_raphson(0.0, |x| x * x - 2.0, |x| 2.0 * x, &sqrt_config());
        let err = result.unwrap_err();
        assert!(err.to_string().contains("derivative too small"));
    }

    #[test]
    fn test_iteration_cap_respected() {
        let config = NewtonConfig {
            tolerance: 1e-30,
            max_iterations: 3,
            ..NewtonConfig::new("cap test")
        };
        let result = newton_raphson(100.0, |x| x * x - 2.0, |x| 2.0 * x, &config);
        assert!(result.is_err());
    }

    #[test]
    fn test_step_cap_still_converges() {
        // f has a wild first step from this guess; the cap walks it in
        let config = NewtonConfig::with_max_step("capped sqrt", 0.5);
        let root = newton_raphson(10.0, |x| x * x - 2.0, |x| 2.0 * x, &config).unwrap();
        assert_within!(root, 2.0_f64.sqrt(), 1e-9);
    }

    #[test]
    fn test_complex_sqrt_of_negative() {
        let k = Complex64::new(-4.0, 0.0);
        let root = newton_raphson(
            Complex64::new(1.0, 1.0),
            |z| z * z - k,
            |z| 2.0 * z,
            &NewtonConfig::new("complex sqrt"),
        )
        .unwrap();
        assert_within!(root.re, 0.0, 1e-9);
        assert_within!(root.im.abs(), 2.0, 1e-9);
    }

    #[test]
    fn test_complex_cube_root_of_unity() {
        let one = Complex64::new(1.0, 0.0);
        let root = newton_raphson(
            Complex64::new(-0.6, 0.9),
            |z| z * z * z - one,
            |z| 3.0 * z * z,
            &NewtonConfig::new("cube root"),
        )
        .unwrap();
        // starting near e^(2 pi i / 3) lands on that root, not on 1
        assert_within!(root.re, -0.5, 1e-9);
        assert_within!(root.im, 0.75_f64.sqrt(), 1e-9);
    }

    #[test]
    fn test_complex_flat_derivative_aborts() {
        let result = newton_raphson(
            Complex64::new(0.0, 0.0),
            |z| z * z - Complex64::new(2.0, 0.0),
            |z| 2.0 * z,
            &NewtonConfig::new("complex flat"),
        );
        assert!(result.is_err());
    }
}
