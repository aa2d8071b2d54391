//! Exact numbers.
//!
//! Kernel values are arbitrary precision rationals. Missing values are never
//! embedded in the number type; containers represent them as
//! `Option<Exact>`, so every algorithm must handle `None` explicitly.
//!
//! Conversions from `f64` are exact: every finite double is a dyadic rational.
//! Conversions into `f64` round to the nearest double and are only used at
//! the boundary (numeric tables, formatting, distances).

use num::{BigInt, BigRational, ToPrimitive};

/// Exact scalar of the kernel.
pub type Exact = BigRational;

/// Converts a double into an exact number.
///
/// Returns `None` for NaN and infinities, which have no exact counterpart.
pub fn from_f64(value: f64) -> Option<Exact> {
    if value.is_finite() {
        BigRational::from_float(value)
    }
    else {
        None
    }
}

/// Converts an integer into an exact number.
pub fn from_i64(value: i64) -> Exact {
    BigRational::from_integer(BigInt::from(value))
}

/// Converts an exact number into the nearest double.
///
/// Magnitudes that cannot be represented convert to NaN.
pub fn to_f64(value: &Exact) -> f64 {
    value.to_f64().unwrap_or(f64::NAN)
}

/// Formats a double with the given number of significant digits.
///
/// This mirrors the `%g` conversion: fixed notation for moderate exponents and
/// scientific notation otherwise, with trailing zeros removed.
pub fn format_significant(value: f64, digits: usize) -> String {
    if value == 0.0 {
        return "0".to_owned();
    }
    if value.is_nan() {
        return "NaN".to_owned();
    }
    if value.is_infinite() {
        return if value > 0.0 { "Inf" } else { "-Inf" }.to_owned();
    }
    let digits = digits.max(1);
    // Rounding to the requested precision may carry into the exponent, so it
    // is read back from the scientific rendering.
    let scientific = format!("{:.*e}", digits - 1, value);
    let (mantissa, exponent) = match scientific.split_once('e') {
        Some((mantissa, exponent)) => (mantissa, exponent.parse::<i32>().unwrap_or(0)),
        None => (scientific.as_str(), 0),
    };
    if exponent < -4 || exponent >= digits as i32 {
        format!(
            "{}e{}{:02}",
            trim_zeros(mantissa),
            if exponent < 0 { '-' } else { '+' },
            exponent.abs(),
        )
    }
    else {
        let decimals = (digits as i32 - 1 - exponent).max(0) as usize;
        trim_zeros(&format!("{:.*}", decimals, value)).to_owned()
    }
}

fn trim_zeros(text: &str) -> &str {
    if text.contains('.') {
        text.trim_end_matches('0').trim_end_matches('.')
    }
    else {
        text
    }
}

#[cfg(test)]
mod tests {
    use num::BigRational;

    use crate::exact::{self, format_significant};

    #[test]
    fn convert_doubles_exactly() {
        let half = exact::from_f64(0.5).unwrap();
        assert_eq!(
            BigRational::new(1.into(), 2.into()),
            half,
        );
        assert_eq!(0.1, exact::to_f64(&exact::from_f64(0.1).unwrap()));
        assert!(exact::from_f64(f64::NAN).is_none());
        assert!(exact::from_f64(f64::INFINITY).is_none());
    }

    #[test]
    fn format_three_significant_digits() {
        assert_eq!("1", format_significant(1.0, 3));
        assert_eq!("0.5", format_significant(0.5, 3));
        assert_eq!("0.333", format_significant(1.0 / 3.0, 3));
        assert_eq!("-2.5", format_significant(-2.5, 3));
        assert_eq!("123", format_significant(123.4, 3));
        assert_eq!("1.23e+03", format_significant(1234.5, 3));
        assert_eq!("1e+03", format_significant(999.9, 3));
        assert_eq!("0.000123", format_significant(0.0001234, 3));
        assert_eq!("1.23e-05", format_significant(0.00001234, 3));
        assert_eq!("Inf", format_significant(f64::INFINITY, 3));
    }
}
