/// π/2, the scale of the inner `sinh` in the double-exponential substitution.
pub const HALF_PI: f64 = std::f64::consts::FRAC_PI_2;

/// A single sample of the transform: location in (-1, 1) and its Jacobian.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Node {
    pub abscissa: f64,
    pub weight: f64,
}

/// Abscissa at node `j` for step size `h`.
///
/// Formula: `x = tanh(π/2 · sinh(h·j))`
///
/// Odd in `j`. Saturates to exactly ±1.0 once `1 - |x|` drops below
/// half an ulp of 1.0.
#[inline]
pub fn abscissa(h: f64, j: f64) -> f64 {
    (HALF_PI * (h * j).sinh()).tanh()
}

/// Weight (derivative of the transform) at node `j` for step size `h`.
///
/// Formula: `w = π/2 · cosh(h·j) / cosh²(π/2 · sinh(h·j))`
///
/// Even in `j`, and decays double-exponentially as `|j|` grows.
#[inline]
pub fn weight(h: f64, j: f64) -> f64 {
    let inner = (HALF_PI * (h * j).sinh()).cosh();
    HALF_PI * (h * j).cosh() / inner.powi(2)
}

/// Abscissa and weight evaluated together.
#[inline]
pub fn node(h: f64, j: f64) -> Node {
    Node {
        abscissa: abscissa(h, j),
        weight: weight(h, j),
    }
}
