use crate::core::data::complex::Complex;

/// |z|² at or beyond which an orbit is considered escaped (radius 2).
pub const ESCAPE_RADIUS_SQUARED: f64 = 4.0;

/// Outcome of iterating one point.
///
/// `iterations` is the 1-based step on which the orbit escaped, or
/// `max_iterations` when it never did.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct EscapeTime {
    pub iterations: u32,
    pub max_iterations: u32,
}

impl EscapeTime {
    #[must_use]
    pub fn is_in_set(&self) -> bool {
        self.iterations >= self.max_iterations
    }

    /// `iterations / max_iterations`, in `[0, 1]`.
    #[must_use]
    pub fn fraction(&self) -> f64 {
        if self.max_iterations == 0 {
            return 1.0;
        }

        self.iterations.min(self.max_iterations) as f64 / self.max_iterations as f64
    }
}

/// Iterates `z ← z² + c` from `z = 0` until `|z|² >= 4` or the cap is hit.
#[must_use]
pub fn escape_time(c: Complex, max_iterations: u32) -> EscapeTime {
    let mut z = Complex::ZERO;

    for iteration in 1..=max_iterations {
        z = z.square() + c;

        if z.magnitude_squared() >= ESCAPE_RADIUS_SQUARED {
            return EscapeTime {
                iterations: iteration,
                max_iterations,
            };
        }
    }

    EscapeTime {
        iterations: max_iterations,
        max_iterations,
    }
}
