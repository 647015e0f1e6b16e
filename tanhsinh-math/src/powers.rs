/// Correctly rounded `10^exp`.
///
/// Repeated multiplication (`f64::powi`) drifts by a few ulps past `10^22`;
/// parsing the decimal literal does not. Overflows to `inf` above `1e308`
/// and underflows to `0.0` below the subnormal range.
pub fn pow10(exp: i32) -> f64 {
    // `1e<i32>` is always a well-formed float literal
    format!("1e{}", exp).parse().unwrap_or(f64::NAN)
}
