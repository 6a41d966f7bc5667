//! Approximation of floating point values by fractions through a search of
//! the Stern–Brocot tree.

use crate::error::ErrorKind;
use crate::{Error, Fraction};

/// The tolerance used when none is specified.
pub const DEFAULT_TOLERANCE: f64 = 1e-15;

/// The number of search iterations before an approximation gives up.
pub const DEFAULT_MAX_ITERATIONS: usize = 1_000_000;

/// Finds the simplest fraction within a tolerance of a floating point value.
///
/// The integer part of the value is split off first, after which the
/// fractional part is bracketed between `0/1` and `1/1` and the bracket is
/// narrowed by taking mediants until one of them lies within the tolerance.
/// The first such mediant has the smallest denominator of all fractions in
/// range.
///
/// # Examples
///
/// ```
/// use ratio::Approximator;
///
/// let approximator = Approximator::new().with_tolerance(1e-6);
/// let pi = approximator.approximate(core::f64::consts::PI)?;
/// assert_eq!(pi.into_parts(), (355, 113));
/// # Ok::<_, ratio::Error>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Approximator {
    tolerance: f64,
    max_iterations: usize,
}

impl Approximator {
    /// Construct an approximator using [`DEFAULT_TOLERANCE`] and
    /// [`DEFAULT_MAX_ITERATIONS`].
    #[inline]
    pub const fn new() -> Self {
        Self {
            tolerance: DEFAULT_TOLERANCE,
            max_iterations: DEFAULT_MAX_ITERATIONS,
        }
    }

    /// Set the largest accepted distance between the value and its
    /// approximation.
    ///
    /// The tolerance is validated when approximating; it has to be finite and
    /// non-negative.
    #[inline]
    pub const fn with_tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = tolerance;
        self
    }

    /// Set the number of search iterations before giving up.
    ///
    /// An iteration advances one bound of the search past every mediant on
    /// the same side of the value, so a few dozen iterations are enough for
    /// any fraction that fits in `i64`.
    #[inline]
    pub const fn with_max_iterations(mut self, max_iterations: usize) -> Self {
        self.max_iterations = max_iterations;
        self
    }

    /// Get the configured tolerance.
    #[inline]
    pub const fn tolerance(&self) -> f64 {
        self.tolerance
    }

    /// Get the configured iteration limit.
    #[inline]
    pub const fn max_iterations(&self) -> usize {
        self.max_iterations
    }

    /// Approximate `value` by a reduced fraction.
    ///
    /// # Errors
    ///
    /// Errors if the value is not finite, if the tolerance is negative or not
    /// finite, if the integer part or the resulting fraction does not fit in
    /// `i64`, or if no fraction in range was found within the iteration
    /// limit.
    ///
    /// # Examples
    ///
    /// ```
    /// use ratio::Approximator;
    ///
    /// let approximator = Approximator::new();
    /// assert_eq!(approximator.approximate(-5.125)?.into_parts(), (-41, 8));
    /// assert!(approximator.approximate(f64::NAN).is_err());
    /// # Ok::<_, ratio::Error>(())
    /// ```
    pub fn approximate(&self, value: f64) -> Result<Fraction, Error> {
        if !value.is_finite() {
            return Err(Error::new(ErrorKind::NonFiniteValue));
        }

        let tolerance = self.tolerance;

        if !tolerance.is_finite() || tolerance < 0.0 {
            return Err(Error::new(ErrorKind::InvalidTolerance));
        }

        // `i64::MIN as f64` is exact and `i64::MAX as f64` rounds up to 2^63.
        if value < i64::MIN as f64 || value >= i64::MAX as f64 {
            return Err(Error::new(ErrorKind::ArithmeticOverflow));
        }

        let whole = floor(value)?;
        let frac = value - whole as f64;

        if frac < tolerance {
            return Ok(Fraction::from_integer(whole));
        }

        if 1.0 - tolerance < frac {
            let whole = whole.checked_add(1).ok_or(ErrorKind::ArithmeticOverflow)?;
            return Ok(Fraction::from_integer(whole));
        }

        let (num, denom) = self.search(frac)?;

        let num = whole
            .checked_mul(denom)
            .and_then(|n| n.checked_add(num))
            .ok_or(ErrorKind::ArithmeticOverflow)?;

        Fraction::new(num, denom)
    }

    /// Search for the mediant within tolerance of `frac`, which lies in the
    /// open interval `(0, 1)`.
    ///
    /// Each iteration covers a whole run of mediants moving the same bound,
    /// so the number of iterations grows with the logarithm of the
    /// denominator rather than with the denominator itself.
    fn search(&self, frac: f64) -> Result<(i64, i64), Error> {
        let high = frac + self.tolerance;
        let low = frac - self.tolerance;

        let too_large = |(num, denom): (i64, i64)| denom as f64 * high < num as f64;
        let too_small = |(num, denom): (i64, i64)| (num as f64) < low * denom as f64;

        let mut lower = (0i64, 1i64);
        let mut upper = (1i64, 1i64);

        for iteration in 0..self.max_iterations {
            let mediant = advance(upper, lower, 1).ok_or(ErrorKind::ArithmeticOverflow)?;

            if too_large(mediant) {
                upper = skip(mediant, lower, too_large);
            } else if too_small(mediant) {
                lower = skip(mediant, upper, too_small);
            } else {
                let (num, denom) = mediant;
                tracing::trace!(iterations = iteration + 1, num, denom, "Approximation converged");
                return Ok(mediant);
            }
        }

        Err(Error::new(ErrorKind::ApproximationDidNotConverge {
            iterations: self.max_iterations,
        }))
    }

    /// Parse text into a fraction, approximating plain decimal literals with
    /// this approximator.
    ///
    /// See [`parse`](crate::parse) for the accepted syntax.
    ///
    /// # Examples
    ///
    /// ```
    /// use ratio::Approximator;
    ///
    /// let approximator = Approximator::new().with_tolerance(1e-3);
    /// assert_eq!(approximator.parse("0.333")?.into_parts(), (1, 3));
    /// assert_eq!(approximator.parse("333/1000")?.into_parts(), (333, 1000));
    /// # Ok::<_, ratio::Error>(())
    /// ```
    #[inline]
    pub fn parse(&self, text: &str) -> Result<Fraction, Error> {
        crate::parse::parse_with(self, text)
    }
}

/// Compute `from + k * step`, or `None` if either part leaves `i64`.
#[inline]
fn advance(from: (i64, i64), step: (i64, i64), k: i64) -> Option<(i64, i64)> {
    let num = step.0.checked_mul(k)?.checked_add(from.0)?;
    let denom = step.1.checked_mul(k)?.checked_add(from.1)?;
    Some((num, denom))
}

/// Find the furthest point `from + k * step` which still `overshoots`, where
/// `from` itself does.
///
/// Successive mediants towards a fixed bound are exactly these points, so
/// this lands where stepping one mediant at a time would. The run is bounded
/// by doubling `k` and then bisected.
fn skip<F>(from: (i64, i64), step: (i64, i64), overshoots: F) -> (i64, i64)
where
    F: Fn((i64, i64)) -> bool,
{
    let candidate = |k| advance(from, step, k).filter(|&point| overshoots(point));

    let mut best = from;
    let mut good = 0i64;
    let mut bad = 1i64;

    // `bad` saturates at `i64::MAX`, which never fits since `step.1 >= 1`.
    while let Some(point) = candidate(bad) {
        best = point;
        good = bad;
        bad = bad.saturating_mul(2);
    }

    while bad - good > 1 {
        let mid = good + (bad - good) / 2;

        match candidate(mid) {
            Some(point) => {
                best = point;
                good = mid;
            }
            None => bad = mid,
        }
    }

    best
}

/// Round a finite value in `[i64::MIN, 2^63)` towards negative infinity.
///
/// Values outside of the exactly representable integer range are whole
/// already, so truncation only needs adjusting for small negative values.
#[inline]
fn floor(value: f64) -> Result<i64, Error> {
    let truncated = value as i64;

    if (truncated as f64) > value {
        return truncated
            .checked_sub(1)
            .ok_or_else(|| Error::new(ErrorKind::ArithmeticOverflow));
    }

    Ok(truncated)
}

impl Default for Approximator {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl Fraction {
    /// Approximate `value` by the simplest fraction within `tolerance`.
    ///
    /// # Errors
    ///
    /// See [`Approximator::approximate`].
    ///
    /// # Examples
    ///
    /// ```
    /// use ratio::Fraction;
    ///
    /// let f = Fraction::approximate(0.01276993355481727574750830564784, 1e-36)?;
    /// assert_eq!(f.into_parts(), (123, 9632));
    /// # Ok::<_, ratio::Error>(())
    /// ```
    #[inline]
    pub fn approximate(value: f64, tolerance: f64) -> Result<Self, Error> {
        Approximator::new().with_tolerance(tolerance).approximate(value)
    }

    /// Approximate `value` using [`DEFAULT_TOLERANCE`].
    ///
    /// # Examples
    ///
    /// ```
    /// use ratio::Fraction;
    ///
    /// assert_eq!(Fraction::from_f64(0.75)?, Fraction::new(3, 4)?);
    /// # Ok::<_, ratio::Error>(())
    /// ```
    #[inline]
    pub fn from_f64(value: f64) -> Result<Self, Error> {
        Approximator::new().approximate(value)
    }
}

impl TryFrom<f64> for Fraction {
    type Error = Error;

    #[inline]
    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Self::from_f64(value)
    }
}
