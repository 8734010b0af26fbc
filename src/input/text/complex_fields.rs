use crate::core::data::complex::Complex;

/// Reads one component of `c` from free text.
///
/// Surrounding whitespace is ignored and the longest leading run that reads
/// as a decimal number is used, so `"0.3abc"` gives `0.3`. The run is an
/// optional sign followed by either the exact keyword `Infinity` or digits
/// with an optional fraction and exponent. Anything else, including `NaN`,
/// `inf` and empty text, gives `0.0`.
#[must_use]
pub fn parse_component(text: &str) -> f64 {
    let text = text.trim();
    let length = numeric_prefix_len(text.as_bytes());

    // the prefix is ASCII, so `length` is a char boundary
    match text[..length].parse::<f64>() {
        Ok(value) if !value.is_nan() => value,
        _ => 0.0,
    }
}

const INFINITY_KEYWORD: &[u8] = b"Infinity";

fn numeric_prefix_len(bytes: &[u8]) -> usize {
    let mut end = usize::from(matches!(bytes.first(), Some(b'+' | b'-')));

    if bytes[end..].starts_with(INFINITY_KEYWORD) {
        return end + INFINITY_KEYWORD.len();
    }

    let integer_digits = count_digits(&bytes[end..]);
    end += integer_digits;

    let mut fraction_digits = 0;
    if bytes.get(end) == Some(&b'.') {
        fraction_digits = count_digits(&bytes[end + 1..]);
        end += 1 + fraction_digits;
    }

    if integer_digits + fraction_digits == 0 {
        return 0;
    }

    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let mut exponent_start = end + 1;
        if matches!(bytes.get(exponent_start), Some(b'+' | b'-')) {
            exponent_start += 1;
        }

        let exponent_digits = count_digits(&bytes[exponent_start..]);
        if exponent_digits > 0 {
            end = exponent_start + exponent_digits;
        }
    }

    end
}

fn count_digits(bytes: &[u8]) -> usize {
    bytes.iter().take_while(|byte| byte.is_ascii_digit()).count()
}

/// The two text fields a host shows for `c`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ComplexFields {
    pub re: String,
    pub im: String,
}

impl ComplexFields {
    pub fn new(re: impl Into<String>, im: impl Into<String>) -> Self {
        Self {
            re: re.into(),
            im: im.into(),
        }
    }

    #[must_use]
    pub fn to_complex(&self) -> Complex {
        Complex::new(parse_component(&self.re), parse_component(&self.im))
    }
}

impl From<Complex> for ComplexFields {
    fn from(c: Complex) -> Self {
        Self::new(c.real.to_string(), c.imag.to_string())
    }
}
