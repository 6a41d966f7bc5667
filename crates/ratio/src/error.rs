use core::error;
use core::fmt;

#[cfg(feature = "alloc")]
use alloc::boxed::Box;

/// The error raised by fraction construction, arithmetic, parsing and
/// approximation.
#[non_exhaustive]
pub struct Error {
    kind: ErrorKind,
}

impl Error {
    /// Create a new `Error` with the specified kind.
    #[inline]
    pub(crate) fn new(kind: ErrorKind) -> Self {
        Self { kind }
    }

    /// Get the kind of error.
    #[inline]
    #[cfg(all(test, feature = "alloc"))]
    pub(crate) fn kind(&self) -> &ErrorKind {
        &self.kind
    }

    /// Test if a zero denominator was provided.
    ///
    /// # Examples
    ///
    /// ```
    /// use ratio::Fraction;
    ///
    /// assert!(Fraction::new(1, 0).unwrap_err().is_invalid_denominator());
    /// ```
    #[inline]
    pub fn is_invalid_denominator(&self) -> bool {
        matches!(self.kind, ErrorKind::InvalidDenominator)
    }

    /// Test if a division by a zero fraction was attempted.
    #[inline]
    pub fn is_division_by_zero(&self) -> bool {
        matches!(self.kind, ErrorKind::DivisionByZero)
    }

    /// Test if a numerator or denominator left the range of `i64`.
    ///
    /// # Examples
    ///
    /// ```
    /// use ratio::Fraction;
    ///
    /// let max = Fraction::from(i64::MAX);
    /// assert!(max.checked_add(Fraction::ONE).unwrap_err().is_overflow());
    /// ```
    #[inline]
    pub fn is_overflow(&self) -> bool {
        matches!(self.kind, ErrorKind::ArithmeticOverflow)
    }

    /// Test if the error was caused by malformed text.
    #[inline]
    pub fn is_parse_error(&self) -> bool {
        matches!(self.kind, ErrorKind::ParseError { .. })
    }

    /// Test if an approximation ran out of iterations.
    #[inline]
    pub fn is_not_converged(&self) -> bool {
        matches!(self.kind, ErrorKind::ApproximationDidNotConverge { .. })
    }

    /// Test if an approximation was requested with an unusable tolerance.
    #[inline]
    pub fn is_invalid_tolerance(&self) -> bool {
        matches!(self.kind, ErrorKind::InvalidTolerance)
    }

    /// Test if an approximation was requested for NaN or an infinity.
    #[inline]
    pub fn is_non_finite(&self) -> bool {
        matches!(self.kind, ErrorKind::NonFiniteValue)
    }
}

impl From<ErrorKind> for Error {
    #[inline]
    fn from(kind: ErrorKind) -> Self {
        Error::new(kind)
    }
}

#[derive(Debug)]
#[cfg_attr(test, derive(PartialEq))]
pub(crate) enum ErrorKind {
    InvalidDenominator,
    DivisionByZero,
    ArithmeticOverflow,
    ParseError {
        #[cfg(feature = "alloc")]
        input: Box<str>,
    },
    ApproximationDidNotConverge {
        iterations: usize,
    },
    InvalidTolerance,
    NonFiniteValue,
}

#[cfg(test)]
impl PartialEq<ErrorKind> for &ErrorKind {
    #[inline]
    fn eq(&self, other: &ErrorKind) -> bool {
        **self == *other
    }
}

impl error::Error for Error {}

impl fmt::Debug for Error {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.kind.fmt(f)
    }
}

impl fmt::Display for Error {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            ErrorKind::InvalidDenominator => write!(f, "Denominator is zero"),
            ErrorKind::DivisionByZero => write!(f, "Division by a zero fraction"),
            ErrorKind::ArithmeticOverflow => write!(f, "Arithmetic overflow"),
            #[cfg(feature = "alloc")]
            ErrorKind::ParseError { input } => {
                write!(f, "Cannot convert `{input}` to a fraction")
            }
            #[cfg(not(feature = "alloc"))]
            ErrorKind::ParseError {} => write!(f, "Cannot convert input to a fraction"),
            ErrorKind::ApproximationDidNotConverge { iterations } => {
                write!(f, "Approximation did not converge after {iterations} iterations")
            }
            ErrorKind::InvalidTolerance => {
                write!(f, "Tolerance must be a finite, non-negative number")
            }
            ErrorKind::NonFiniteValue => write!(f, "Cannot approximate a non-finite value"),
        }
    }
}
