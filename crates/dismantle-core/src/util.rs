//! Small numeric helpers.

/// Round `value` to `decimals` decimal places.
///
/// # Examples
///
/// ```
/// use dismantle_core::util::round_to;
///
/// assert_eq!(round_to(1.2000000000000002, 2), 1.2);
/// assert_eq!(round_to(62.14, 1), 62.1);
/// ```
pub fn round_to(value: f64, decimals: i32) -> f64 {
    let scale = 10f64.powi(decimals);
    (value * scale).round() / scale
}
