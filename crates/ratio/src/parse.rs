use core::str::FromStr;

use crate::error::ErrorKind;
use crate::{Approximator, Error, Fraction};

/// Parse text into a fraction.
///
/// Accepts either `<int>/<int>`, with optional whitespace around each part,
/// or a plain integer or decimal literal. Integers are converted exactly,
/// other decimals are approximated with [`DEFAULT_TOLERANCE`].
///
/// [`DEFAULT_TOLERANCE`]: crate::DEFAULT_TOLERANCE
///
/// # Errors
///
/// Errors if the text is malformed, or if an explicit denominator is zero.
///
/// # Examples
///
/// ```
/// use ratio::Fraction;
///
/// assert_eq!(ratio::parse(" 3 / -12 ")?, Fraction::new(-1, 4)?);
/// assert_eq!(ratio::parse("5.125")?, Fraction::new(41, 8)?);
/// assert_eq!(ratio::parse("-7")?, Fraction::from(-7));
///
/// assert!(ratio::parse("1/0").unwrap_err().is_invalid_denominator());
/// assert!(ratio::parse("1/2/3").unwrap_err().is_parse_error());
/// # Ok::<_, ratio::Error>(())
/// ```
#[inline]
pub fn parse(text: &str) -> Result<Fraction, Error> {
    parse_with(&Approximator::new(), text)
}

pub(crate) fn parse_with(approximator: &Approximator, text: &str) -> Result<Fraction, Error> {
    let trimmed = text.trim();

    if trimmed.is_empty() {
        return Err(parse_error(text));
    }

    if let Some((num, denom)) = trimmed.split_once('/') {
        let (Ok(num), Ok(denom)) = (num.trim().parse::<i64>(), denom.trim().parse::<i64>()) else {
            return Err(parse_error(text));
        };

        return Fraction::new(num, denom);
    }

    if let Ok(value) = trimmed.parse::<i64>() {
        return Ok(Fraction::from_integer(value));
    }

    match trimmed.parse::<f64>() {
        Ok(value) if value.is_finite() => approximator.approximate(value),
        _ => Err(parse_error(text)),
    }
}

#[inline]
fn parse_error(text: &str) -> Error {
    #[cfg(not(feature = "alloc"))]
    let _ = text;

    Error::new(ErrorKind::ParseError {
        #[cfg(feature = "alloc")]
        input: text.into(),
    })
}

impl FromStr for Fraction {
    type Err = Error;

    #[inline]
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse(s)
    }
}
