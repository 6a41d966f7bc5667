use crate::error::ErrorKind;
use crate::{Error, Fraction};

use super::samples;

#[test]
fn test_reduce() -> Result<(), Error> {
    assert_eq!(Fraction::new(4, 2)?.into_parts(), (2, 1));
    assert_eq!(Fraction::new(-6, -3)?.into_parts(), (2, 1));
    assert_eq!(Fraction::new(3, -12)?.into_parts(), (-1, 4));
    assert_eq!(Fraction::new(-3, 12)?.into_parts(), (-1, 4));
    assert_eq!(Fraction::new(35, 33)?.into_parts(), (35, 33));
    Ok(())
}

#[test]
fn test_zero_is_canonical() -> Result<(), Error> {
    assert_eq!(Fraction::new(0, -5)?, Fraction::ZERO);
    assert_eq!(Fraction::new(0, i64::MIN)?.into_parts(), (0, 1));
    assert_eq!(Fraction::default(), Fraction::ZERO);
    Ok(())
}

#[test]
fn test_zero_denominator() {
    assert_eq!(
        Fraction::new(1, 0).unwrap_err().kind(),
        ErrorKind::InvalidDenominator
    );
    assert_eq!(
        Fraction::new(0, 0).unwrap_err().kind(),
        ErrorKind::InvalidDenominator
    );
    assert_eq!(
        Fraction::try_from((7, 0)).unwrap_err().kind(),
        ErrorKind::InvalidDenominator
    );
}

#[test]
fn test_extremes() -> Result<(), Error> {
    assert_eq!(Fraction::new(i64::MIN, 1)?.into_parts(), (i64::MIN, 1));
    assert_eq!(Fraction::new(i64::MIN, i64::MIN)?, Fraction::ONE);
    assert_eq!(Fraction::new(i64::MIN, 2)?.into_parts(), (i64::MIN / 2, 1));
    assert_eq!(Fraction::new(2, i64::MIN)?.into_parts(), (-1, 1 << 62));
    assert_eq!(Fraction::new(i64::MAX, -1)?.into_parts(), (-i64::MAX, 1));

    assert_eq!(
        Fraction::new(1, i64::MIN).unwrap_err().kind(),
        ErrorKind::ArithmeticOverflow
    );
    assert_eq!(
        Fraction::new(i64::MIN, -1).unwrap_err().kind(),
        ErrorKind::ArithmeticOverflow
    );
    assert_eq!(
        Fraction::new(i64::MAX, i64::MIN).unwrap_err().kind(),
        ErrorKind::ArithmeticOverflow
    );
    Ok(())
}

#[test]
fn test_reduction_is_idempotent() -> Result<(), Error> {
    let pairs = [
        (4, 2),
        (-6, -3),
        (3, -12),
        (0, 7),
        (123, 9632),
        (i64::MAX, 3),
        (i64::MIN, 6),
        (-1_000_000, 250_000),
    ];

    for (num, denom) in pairs {
        let f = Fraction::new(num, denom)?;
        let (n, d) = f.into_parts();
        assert_eq!(Fraction::new(n, d)?, f);
        assert!(f.denominator() > 0, "{f:?}");
        assert_eq!(crate::gcd(n.unsigned_abs(), d.unsigned_abs()), 1, "{f:?}");
    }

    for f in samples() {
        assert_eq!(Fraction::new(f.numerator(), f.denominator())?, f);
    }

    Ok(())
}

#[test]
fn test_conversions() -> Result<(), Error> {
    assert_eq!(Fraction::from(5i32).into_parts(), (5, 1));
    assert_eq!(Fraction::from(u32::MAX).into_parts(), (u32::MAX as i64, 1));
    assert_eq!(Fraction::try_from((10, -4))?.into_parts(), (-5, 2));

    let (n, d): (i64, i64) = Fraction::new(11, 37)?.into();
    assert_eq!((n, d), (11, 37));

    assert_eq!(Fraction::new(3, 2)?.to_f64(), 1.5);
    assert_eq!(f64::from(Fraction::new(-1, 4)?), -0.25);
    Ok(())
}

#[test]
fn test_predicates() -> Result<(), Error> {
    let f = Fraction::new(-2, 3)?;
    assert!(f.is_negative());
    assert!(!f.is_positive());
    assert!(!f.is_zero());
    assert!(!f.is_integer());
    assert_eq!(f.signum(), -1);

    assert!(Fraction::ZERO.is_zero());
    assert_eq!(Fraction::ZERO.signum(), 0);
    assert!(Fraction::new(8, 4)?.is_integer());
    Ok(())
}

#[test]
fn test_round() -> Result<(), Error> {
    let cases = [
        ((5, 2), 2),
        ((7, 2), 4),
        ((-5, 2), -2),
        ((-7, 2), -4),
        ((5, 3), 2),
        ((-5, 3), -2),
        ((4, 3), 1),
        ((0, 1), 0),
        ((i64::MAX, 1), i64::MAX),
        ((i64::MIN, 1), i64::MIN),
        ((i64::MAX, 2), (i64::MAX / 2) + 1),
    ];

    for ((num, denom), expected) in cases {
        assert_eq!(Fraction::new(num, denom)?.to_i64_round(), expected, "{num}/{denom}");
    }

    Ok(())
}

#[test]
fn test_recip() -> Result<(), Error> {
    assert_eq!(Fraction::new(-2, 3)?.checked_recip()?.into_parts(), (-3, 2));
    assert_eq!(
        Fraction::ZERO.checked_recip().unwrap_err().kind(),
        ErrorKind::DivisionByZero
    );
    assert_eq!(
        Fraction::from(i64::MIN).checked_recip().unwrap_err().kind(),
        ErrorKind::ArithmeticOverflow
    );
    Ok(())
}
