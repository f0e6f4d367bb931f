//! Floating-point power and its textual rendering.

/// Raises `base` to `exponent`, both promoted to `f64`.
///
/// # Examples
///
/// ```
/// use cviceni_core::power;
///
/// assert_eq!(power(5, 2), 25.0);
/// ```
pub fn power(base: i32, exponent: i32) -> f64 {
    f64::from(base).powf(f64::from(exponent))
}

/// Renders a number the way the lesson prints it.
///
/// Whole values print without a fractional part (`25`, not `25.0`);
/// anything else uses the shortest decimal form that round-trips.
pub fn format_number(value: f64) -> String {
    if value.is_finite() && value.fract() == 0.0 {
        format!("{value:.0}")
    } else {
        value.to_string()
    }
}
