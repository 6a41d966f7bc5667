use alloc::format;
use alloc::string::ToString;

use crate::error::ErrorKind;
use crate::{Approximator, Error, Fraction};

use super::samples;

#[test]
fn test_parse() -> Result<(), Error> {
    assert_eq!(crate::parse("1/2")?.into_parts(), (1, 2));
    assert_eq!(crate::parse(" 3 / -12 ")?.into_parts(), (-1, 4));
    assert_eq!(crate::parse("+4/2")?, Fraction::from(2));
    assert_eq!(crate::parse("0/-9")?, Fraction::ZERO);
    assert_eq!(crate::parse("5.125")?.into_parts(), (41, 8));
    assert_eq!(crate::parse("-0.75")?.into_parts(), (-3, 4));
    assert_eq!(crate::parse("-7")?, Fraction::from(-7));
    assert_eq!(crate::parse("\t42\n")?, Fraction::from(42));
    assert_eq!(crate::parse("0.0000001")?.into_parts(), (1, 10_000_000));

    // Integers bypass floating point and stay exact.
    assert_eq!(
        crate::parse("9007199254740993")?.into_parts(),
        (9_007_199_254_740_993, 1)
    );
    Ok(())
}

#[test]
fn test_parse_errors() {
    let inputs = [
        "",
        "   ",
        "1/2/3",
        "abc",
        "1/",
        "/2",
        "inf",
        "NaN",
        "1.5/2",
        "1 2",
        "99999999999999999999/1",
    ];

    for input in inputs {
        assert_eq!(
            crate::parse(input).unwrap_err().kind(),
            ErrorKind::ParseError {
                input: input.into()
            },
            "{input:?}"
        );
    }

    assert_eq!(
        crate::parse("1/0").unwrap_err().kind(),
        ErrorKind::InvalidDenominator
    );
    assert_eq!(
        crate::parse("1e300").unwrap_err().kind(),
        ErrorKind::ArithmeticOverflow
    );
}

#[test]
fn test_from_str() -> Result<(), Error> {
    let f: Fraction = "10/4".parse()?;
    assert_eq!(f.into_parts(), (5, 2));
    assert!("x/4".parse::<Fraction>().unwrap_err().is_parse_error());
    Ok(())
}

#[test]
fn test_parse_with_approximator() -> Result<(), Error> {
    let approximator = Approximator::new().with_tolerance(1e-3);
    assert_eq!(approximator.parse("0.333")?.into_parts(), (1, 3));
    assert_eq!(approximator.parse("333/1000")?.into_parts(), (333, 1000));
    assert_eq!(crate::parse("0.333")?.into_parts(), (333, 1000));
    Ok(())
}

#[test]
fn test_display_round_trip() -> Result<(), Error> {
    for f in samples() {
        let text = f.to_string();
        assert_eq!(crate::parse(&text)?, f, "{text}");
    }

    Ok(())
}

#[test]
fn test_display() -> Result<(), Error> {
    assert_eq!(Fraction::new(35, 33)?.to_string(), "35/33");
    assert_eq!(Fraction::new(1, -2)?.to_string(), "-1/2");
    assert_eq!(Fraction::from(7).to_string(), "7/1");
    assert_eq!(Fraction::ZERO.to_string(), "0/1");
    assert_eq!(
        Fraction::from(i64::MIN).to_string(),
        "-9223372036854775808/1"
    );
    Ok(())
}

#[test]
fn test_format_flags() -> Result<(), Error> {
    let half = Fraction::new(1, 2)?;
    let neg_half = Fraction::new(-1, 2)?;

    assert_eq!(format!("{half:>8}"), "     1/2");
    assert_eq!(format!("{half:<6}|"), "1/2   |");
    assert_eq!(format!("{half:*^7}"), "**1/2**");
    // Zeros pad between the sign and the numerator.
    assert_eq!(format!("{neg_half:08}"), "-00001/2");
    assert_eq!(format!("{half:06}"), "0001/2");
    assert_eq!(format!("{:+}", Fraction::ZERO), "+0/1");
    assert_eq!(format!("{half:+}"), "+1/2");
    Ok(())
}

#[test]
fn test_radix_formats() -> Result<(), Error> {
    let f = Fraction::new(-255, 16)?;
    assert_eq!(format!("{f:x}"), "-ff/10");
    assert_eq!(format!("{f:X}"), "-FF/10");
    assert_eq!(format!("{f:#x}"), "-0xff/0x10");
    assert_eq!(format!("{f:o}"), "-377/20");

    let f = Fraction::new(5, 2)?;
    assert_eq!(format!("{f:b}"), "101/10");
    assert_eq!(format!("{f:#b}"), "0b101/0b10");
    assert_eq!(format!("{f:#o}"), "0o5/0o2");

    // The widest rendering fits the stack buffer.
    let f = Fraction::new(i64::MIN, i64::MAX)?;
    let text = format!("{f:#b}");
    assert!(text.starts_with("-0b1000"));
    assert!(text.ends_with("/0b111111111111111111111111111111111111111111111111111111111111111"));
    Ok(())
}

#[test]
fn test_error_display() {
    let error = crate::parse("abc").unwrap_err();
    assert_eq!(error.to_string(), "Cannot convert `abc` to a fraction");

    let error = Fraction::new(1, 0).unwrap_err();
    assert_eq!(error.to_string(), "Denominator is zero");

    let error = Fraction::ONE.checked_div(Fraction::ZERO).unwrap_err();
    assert_eq!(error.to_string(), "Division by a zero fraction");

    let error = Fraction::from(i64::MAX).checked_add(Fraction::ONE).unwrap_err();
    assert_eq!(error.to_string(), "Arithmetic overflow");

    let error = Approximator::new()
        .with_max_iterations(3)
        .approximate(core::f64::consts::PI)
        .unwrap_err();
    assert!(error.is_not_converged());
    assert_eq!(
        error.to_string(),
        "Approximation did not converge after 3 iterations"
    );

    let error = Fraction::approximate(0.5, -1.0).unwrap_err();
    assert!(error.is_invalid_tolerance());
    assert_eq!(
        error.to_string(),
        "Tolerance must be a finite, non-negative number"
    );

    let error = Fraction::from_f64(f64::NEG_INFINITY).unwrap_err();
    assert!(error.is_non_finite());
    assert_eq!(error.to_string(), "Cannot approximate a non-finite value");
}
