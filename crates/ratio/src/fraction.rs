use core::cmp::Ordering;

use crate::error::ErrorKind;
use crate::{Error, gcd, lcm};

/// A fraction defined by its numerator and denominator.
///
/// A `Fraction` is always stored in canonical form: the denominator is
/// positive, numerator and denominator share no common factor, and zero is
/// represented as `0/1`. Two fractions are therefore equal exactly when their
/// fields are equal.
///
/// # Examples
///
/// ```
/// use ratio::Fraction;
///
/// let a = Fraction::new(4, 2)?;
/// let b = Fraction::new(-6, -3)?;
/// assert_eq!(a, b);
/// assert_eq!(a.into_parts(), (2, 1));
/// # Ok::<_, ratio::Error>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Fraction {
    pub(crate) num: i64,
    pub(crate) denom: i64,
}

impl Fraction {
    /// The fraction `0/1`.
    pub const ZERO: Self = Self { num: 0, denom: 1 };

    /// The fraction `1/1`.
    pub const ONE: Self = Self { num: 1, denom: 1 };

    /// Construct a new reduced fraction.
    ///
    /// The sign is moved to the numerator and both parts are divided by their
    /// greatest common divisor.
    ///
    /// # Errors
    ///
    /// Errors if `denom` is zero, or if the reduced fraction cannot be
    /// represented with a positive `i64` denominator, such as `1/i64::MIN`.
    ///
    /// # Examples
    ///
    /// ```
    /// use ratio::Fraction;
    ///
    /// let f = Fraction::new(3, -12)?;
    /// assert_eq!(f.numerator(), -1);
    /// assert_eq!(f.denominator(), 4);
    ///
    /// assert!(Fraction::new(3, 0).is_err());
    /// # Ok::<_, ratio::Error>(())
    /// ```
    pub fn new(num: i64, denom: i64) -> Result<Self, Error> {
        if denom == 0 {
            return Err(Error::new(ErrorKind::InvalidDenominator));
        }

        let negative = (num < 0) != (denom < 0);
        let (num_abs, denom_abs) = (num.unsigned_abs(), denom.unsigned_abs());
        let g = gcd(num_abs, denom_abs);

        let num = i128::from(num_abs / g);
        let num = if negative { -num } else { num };

        let num = i64::try_from(num).map_err(|_| ErrorKind::ArithmeticOverflow)?;
        let denom = i64::try_from(denom_abs / g).map_err(|_| ErrorKind::ArithmeticOverflow)?;
        Ok(Self { num, denom })
    }

    /// Construct a whole number fraction `value/1`.
    ///
    /// # Examples
    ///
    /// ```
    /// use ratio::Fraction;
    ///
    /// assert_eq!(Fraction::from_integer(-3).into_parts(), (-3, 1));
    /// ```
    #[inline]
    pub const fn from_integer(value: i64) -> Self {
        Self {
            num: value,
            denom: 1,
        }
    }

    /// Get the numerator, which carries the sign of the fraction.
    #[inline]
    pub const fn numerator(&self) -> i64 {
        self.num
    }

    /// Get the denominator, which is always positive.
    #[inline]
    pub const fn denominator(&self) -> i64 {
        self.denom
    }

    /// Split the fraction into its `(numerator, denominator)` pair.
    ///
    /// # Examples
    ///
    /// ```
    /// use ratio::Fraction;
    ///
    /// let (n, d) = Fraction::new(11, 37)?.into_parts();
    /// assert_eq!((n, d), (11, 37));
    /// # Ok::<_, ratio::Error>(())
    /// ```
    #[inline]
    pub const fn into_parts(self) -> (i64, i64) {
        (self.num, self.denom)
    }

    /// Test if the fraction is zero.
    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.num == 0
    }

    /// Test if the fraction is strictly positive.
    #[inline]
    pub const fn is_positive(&self) -> bool {
        self.num > 0
    }

    /// Test if the fraction is strictly negative.
    #[inline]
    pub const fn is_negative(&self) -> bool {
        self.num < 0
    }

    /// Test if the fraction is a whole number.
    #[inline]
    pub const fn is_integer(&self) -> bool {
        self.denom == 1
    }

    /// Get the sign of the fraction as `-1`, `0` or `1`.
    #[inline]
    pub const fn signum(&self) -> i64 {
        self.num.signum()
    }

    /// Add two fractions.
    ///
    /// The sum is formed over the least common multiple of the denominators.
    ///
    /// # Errors
    ///
    /// Errors with an overflow if any intermediate value leaves `i64`.
    ///
    /// # Examples
    ///
    /// ```
    /// use ratio::Fraction;
    ///
    /// let a = Fraction::new(1, 6)?;
    /// let b = Fraction::new(1, 4)?;
    /// assert_eq!(a.checked_add(b)?, Fraction::new(5, 12)?);
    /// # Ok::<_, ratio::Error>(())
    /// ```
    pub fn checked_add(self, rhs: Self) -> Result<Self, Error> {
        if self.num == 0 {
            return Ok(rhs);
        }

        if rhs.num == 0 {
            return Ok(self);
        }

        let (lhs_num, rhs_num, denom) = self.common_denominator(rhs)?;
        let num = lhs_num
            .checked_add(rhs_num)
            .ok_or(ErrorKind::ArithmeticOverflow)?;
        Self::new(num, denom)
    }

    /// Subtract `rhs` from this fraction.
    ///
    /// # Errors
    ///
    /// Errors with an overflow if any intermediate value leaves `i64`.
    ///
    /// # Examples
    ///
    /// ```
    /// use ratio::Fraction;
    ///
    /// let a = Fraction::new(1, 6)?;
    /// let b = Fraction::new(1, 4)?;
    /// assert_eq!(a.checked_sub(b)?, Fraction::new(-1, 12)?);
    /// # Ok::<_, ratio::Error>(())
    /// ```
    pub fn checked_sub(self, rhs: Self) -> Result<Self, Error> {
        if rhs.num == 0 {
            return Ok(self);
        }

        let (lhs_num, rhs_num, denom) = self.common_denominator(rhs)?;
        let num = lhs_num
            .checked_sub(rhs_num)
            .ok_or(ErrorKind::ArithmeticOverflow)?;
        Self::new(num, denom)
    }

    /// Multiply two fractions.
    ///
    /// # Errors
    ///
    /// Errors with an overflow if either product leaves `i64`.
    ///
    /// # Examples
    ///
    /// ```
    /// use ratio::Fraction;
    ///
    /// let a = Fraction::new(5, 11)?;
    /// let b = Fraction::new(7, 3)?;
    /// assert_eq!(a.checked_mul(b)?.into_parts(), (35, 33));
    /// # Ok::<_, ratio::Error>(())
    /// ```
    pub fn checked_mul(self, rhs: Self) -> Result<Self, Error> {
        let num = self
            .num
            .checked_mul(rhs.num)
            .ok_or(ErrorKind::ArithmeticOverflow)?;
        let denom = self
            .denom
            .checked_mul(rhs.denom)
            .ok_or(ErrorKind::ArithmeticOverflow)?;
        Self::new(num, denom)
    }

    /// Divide this fraction by `rhs`.
    ///
    /// # Errors
    ///
    /// Errors if `rhs` is zero, or with an overflow if either product leaves
    /// `i64`.
    ///
    /// # Examples
    ///
    /// ```
    /// use ratio::Fraction;
    ///
    /// let a = Fraction::new(5, 11)?;
    /// let b = Fraction::new(7, 3)?;
    /// assert_eq!(a.checked_div(b)?.into_parts(), (15, 77));
    ///
    /// let zero = Fraction::new(0, 11)?;
    /// assert!(Fraction::from(4).checked_div(zero).unwrap_err().is_division_by_zero());
    /// # Ok::<_, ratio::Error>(())
    /// ```
    pub fn checked_div(self, rhs: Self) -> Result<Self, Error> {
        if rhs.num == 0 {
            return Err(Error::new(ErrorKind::DivisionByZero));
        }

        let num = self
            .num
            .checked_mul(rhs.denom)
            .ok_or(ErrorKind::ArithmeticOverflow)?;
        let denom = self
            .denom
            .checked_mul(rhs.num)
            .ok_or(ErrorKind::ArithmeticOverflow)?;
        Self::new(num, denom)
    }

    /// Negate the fraction.
    ///
    /// # Errors
    ///
    /// Errors with an overflow if the numerator is `i64::MIN`.
    #[inline]
    pub fn checked_neg(self) -> Result<Self, Error> {
        let num = self.num.checked_neg().ok_or(ErrorKind::ArithmeticOverflow)?;

        Ok(Self {
            num,
            denom: self.denom,
        })
    }

    /// Get the absolute value of the fraction.
    ///
    /// # Errors
    ///
    /// Errors with an overflow if the numerator is `i64::MIN`.
    #[inline]
    pub fn checked_abs(self) -> Result<Self, Error> {
        if self.num < 0 {
            self.checked_neg()
        } else {
            Ok(self)
        }
    }

    /// Get the reciprocal `denominator/numerator` of the fraction.
    ///
    /// # Errors
    ///
    /// Errors if the fraction is zero.
    ///
    /// # Examples
    ///
    /// ```
    /// use ratio::Fraction;
    ///
    /// let f = Fraction::new(-2, 3)?;
    /// assert_eq!(f.checked_recip()?.into_parts(), (-3, 2));
    /// assert!(Fraction::ZERO.checked_recip().is_err());
    /// # Ok::<_, ratio::Error>(())
    /// ```
    #[inline]
    pub fn checked_recip(self) -> Result<Self, Error> {
        Self::ONE.checked_div(self)
    }

    /// Convert the fraction into a floating point value.
    ///
    /// Both parts are converted to `f64` before dividing, so very large parts
    /// are subject to the usual floating point rounding.
    ///
    /// # Examples
    ///
    /// ```
    /// use ratio::Fraction;
    ///
    /// assert_eq!(Fraction::new(3, 2)?.to_f64(), 1.5);
    /// # Ok::<_, ratio::Error>(())
    /// ```
    #[inline]
    pub fn to_f64(&self) -> f64 {
        self.num as f64 / self.denom as f64
    }

    /// Round the fraction to the nearest integer, with ties rounding to the
    /// even neighbour.
    ///
    /// # Examples
    ///
    /// ```
    /// use ratio::Fraction;
    ///
    /// assert_eq!(Fraction::new(5, 2)?.to_i64_round(), 2);
    /// assert_eq!(Fraction::new(7, 2)?.to_i64_round(), 4);
    /// assert_eq!(Fraction::new(-5, 3)?.to_i64_round(), -2);
    /// # Ok::<_, ratio::Error>(())
    /// ```
    pub fn to_i64_round(&self) -> i64 {
        let whole = self.num.div_euclid(self.denom);
        let rem = self.num.rem_euclid(self.denom);

        // A non-zero remainder implies denom >= 2, so `whole + 1` cannot overflow.
        match rem.cmp(&(self.denom - rem)) {
            Ordering::Less => whole,
            Ordering::Greater => whole + 1,
            Ordering::Equal if whole % 2 == 0 => whole,
            Ordering::Equal => whole + 1,
        }
    }

    /// Scale both numerators to the least common denominator.
    fn common_denominator(self, rhs: Self) -> Result<(i64, i64, i64), Error> {
        let denom = lcm(self.denom.unsigned_abs(), rhs.denom.unsigned_abs())
            .and_then(|denom| i64::try_from(denom).ok())
            .ok_or(ErrorKind::ArithmeticOverflow)?;

        let lhs_num = self
            .num
            .checked_mul(denom / self.denom)
            .ok_or(ErrorKind::ArithmeticOverflow)?;
        let rhs_num = rhs
            .num
            .checked_mul(denom / rhs.denom)
            .ok_or(ErrorKind::ArithmeticOverflow)?;
        Ok((lhs_num, rhs_num, denom))
    }
}

impl Default for Fraction {
    #[inline]
    fn default() -> Self {
        Self::ZERO
    }
}

impl PartialOrd for Fraction {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Fractions are ordered by value.
///
/// Both denominators are positive, so comparing the cross products
/// `a.num * b.denom` and `b.num * a.denom` preserves the sign. The products are
/// widened to `i128` where they cannot overflow.
///
/// # Examples
///
/// ```
/// use ratio::Fraction;
///
/// let mut list = [Fraction::new(3, 13)?, Fraction::new(3, 7)?, Fraction::new(2, 7)?];
/// list.sort();
/// assert_eq!(list, [Fraction::new(3, 13)?, Fraction::new(2, 7)?, Fraction::new(3, 7)?]);
/// # Ok::<_, ratio::Error>(())
/// ```
impl Ord for Fraction {
    #[inline]
    fn cmp(&self, other: &Self) -> Ordering {
        let lhs = i128::from(self.num) * i128::from(other.denom);
        let rhs = i128::from(other.num) * i128::from(self.denom);
        lhs.cmp(&rhs)
    }
}

macro_rules! impl_from_integer {
    ($($ty:ty),* $(,)?) => {
        $(
            impl From<$ty> for Fraction {
                #[inline]
                fn from(value: $ty) -> Self {
                    Self::from_integer(i64::from(value))
                }
            }
        )*
    };
}

impl_from_integer!(i8, i16, i32, i64, u8, u16, u32);

impl TryFrom<(i64, i64)> for Fraction {
    type Error = Error;

    #[inline]
    fn try_from((num, denom): (i64, i64)) -> Result<Self, Self::Error> {
        Self::new(num, denom)
    }
}

impl From<Fraction> for (i64, i64) {
    #[inline]
    fn from(value: Fraction) -> Self {
        value.into_parts()
    }
}

impl From<Fraction> for f64 {
    #[inline]
    fn from(value: Fraction) -> Self {
        value.to_f64()
    }
}
