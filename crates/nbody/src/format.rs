//! Number formatting compatible with C's `%g` conversion
//!
//! Golden outputs (vector strings, text dumps) were produced with six
//! significant digits in "general" notation: fixed for moderate exponents,
//! scientific otherwise, trailing zeros removed.

/// Significant digits used by [`general`]
pub const PRECISION: usize = 6;

/// Formats `value` the way `printf("%g", value)` does
///
/// # Examples
///
/// ```
/// use nbody::format::general;
///
/// assert_eq!(general(1e55), "1e+55");
/// assert_eq!(general(29788.4676), "29788.5");
/// assert_eq!(general(47360.0), "47360");
/// assert_eq!(general(0.0001), "0.0001");
/// assert_eq!(general(0.00001), "1e-05");
/// ```
pub fn general(value: f64) -> String {
    if value.is_nan() {
        return "nan".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "inf" } else { "-inf" }.to_string();
    }
    if value == 0.0 {
        return if value.is_sign_negative() { "-0" } else { "0" }.to_string();
    }

    // Rounding to the target precision first decides the exponent, so
    // 999999.5 becomes 1e+06 rather than 1000000.
    let scientific = format!("{:.*e}", PRECISION - 1, value);
    let Some((mantissa, exponent)) = scientific.split_once('e') else {
        return scientific;
    };
    let exponent: i32 = exponent.parse().unwrap_or(0);

    if exponent < -4 || exponent >= PRECISION as i32 {
        let sign = if exponent < 0 { '-' } else { '+' };
        format!(
            "{}e{}{:02}",
            strip_trailing_zeros(mantissa),
            sign,
            exponent.unsigned_abs()
        )
    } else {
        let decimals = (PRECISION as i32 - 1 - exponent) as usize;
        strip_trailing_zeros(&format!("{:.*}", decimals, value)).to_string()
    }
}

fn strip_trailing_zeros(digits: &str) -> &str {
    if digits.contains('.') {
        digits.trim_end_matches('0').trim_end_matches('.')
    } else {
        digits
    }
}
