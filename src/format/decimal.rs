//! Decimal rendering of numbers
//!
//! Two rounding flavours are needed:
//! - fixed-point (`to_fixed`) rounds the exact binary value, ties upward;
//! - locale formatting (`to_locale_string`) rounds the shortest decimal
//!   representation half away from zero and groups thousands with `,`.
//!
//! Both work on plain decimal digit strings so no precision is lost to
//! intermediate float arithmetic.

use super::coerce::number_to_js_string;

/// Enough fraction digits to print any finite `f64` exactly
const EXACT_FRACTION_DIGITS: usize = 1074;

/// Magnitude from which fixed-point output falls back to `String(n)`
const FIXED_LIMIT: f64 = 1e21;

/// Round an unsigned plain decimal string (`"1234.5678"`) to `frac_digits`
/// places, half away from zero. Returns the integer and fraction digits.
fn round_plain(plain: &str, frac_digits: usize) -> (String, String) {
    let (int_part, frac_part) = plain.split_once('.').unwrap_or((plain, ""));

    let mut digits: Vec<u8> = int_part
        .bytes()
        .chain(frac_part.bytes().chain(std::iter::repeat(b'0')).take(frac_digits))
        .collect();
    let mut int_len = int_part.len();

    if frac_part.as_bytes().get(frac_digits).map_or(false, |d| *d >= b'5') {
        let mut carry = true;
        for digit in digits.iter_mut().rev() {
            if *digit == b'9' {
                *digit = b'0';
            } else {
                *digit += 1;
                carry = false;
                break;
            }
        }
        if carry {
            digits.insert(0, b'1');
            int_len += 1;
        }
    }

    let frac: String = digits[int_len..].iter().map(|&b| b as char).collect();
    let int: String = digits[..int_len].iter().map(|&b| b as char).collect();
    (int, frac)
}

/// Fixed-point text with exactly `frac_digits` decimals
pub fn to_fixed(n: f64, frac_digits: usize) -> String {
    if !n.is_finite() || n.abs() >= FIXED_LIMIT {
        return number_to_js_string(n);
    }

    let sign = if n < 0.0 { "-" } else { "" };
    let exact = format!("{:.*}", EXACT_FRACTION_DIGITS, n.abs());
    let (int, frac) = round_plain(&exact, frac_digits);

    if frac.is_empty() {
        format!("{}{}", sign, int)
    } else {
        format!("{}{}.{}", sign, int, frac)
    }
}

/// Insert `,` between groups of three integer digits
fn group_thousands(int: &str) -> String {
    let len = int.len();
    let mut grouped = String::with_capacity(len + len / 3);
    for (i, c) in int.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    grouped
}

/// Locale text (`,` grouping, `.` decimal point) with between
/// `min_frac` and `max_frac` fraction digits
pub fn to_locale_string(n: f64, min_frac: usize, max_frac: usize) -> String {
    if n.is_nan() {
        return "NaN".to_string();
    }

    let sign = if n.is_sign_negative() { "-" } else { "" };
    if n.is_infinite() {
        return format!("{}∞", sign);
    }

    // `{}` on f64 is the shortest round-trip decimal, never in exponent form
    let shortest = format!("{}", n.abs());
    let (int, mut frac) = round_plain(&shortest, max_frac);

    while frac.len() > min_frac && frac.ends_with('0') {
        frac.pop();
    }

    let grouped = group_thousands(&int);
    if frac.is_empty() {
        format!("{}{}", sign, grouped)
    } else {
        format!("{}{}.{}", sign, grouped, frac)
    }
}
