// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

#![cfg(test)]

use anyhow::Result;
use dynval::Number;

#[test]
fn equality_across_textual_forms() -> Result<()> {
    // Same mathematical value, different renditions.
    assert_eq!("1".parse::<Number>()?, "1.0".parse::<Number>()?);
    assert_eq!("1".parse::<Number>()?, "1e0".parse::<Number>()?);
    assert_eq!("0.1".parse::<Number>()?, "1e-1".parse::<Number>()?);
    assert_eq!("-2".parse::<Number>()?, "-2.0".parse::<Number>()?);

    assert_ne!("1".parse::<Number>()?, "1.5".parse::<Number>()?);
    assert_ne!("1".parse::<Number>()?, "-1".parse::<Number>()?);
    Ok(())
}

#[test]
fn equality_beyond_f64_precision() -> Result<()> {
    // 20 digits; f64 would conflate neighbors at this magnitude.
    let a = "12345678901234567890".parse::<Number>()?;
    let b = "1.234567890123456789e19".parse::<Number>()?;
    let c = "12345678901234567891".parse::<Number>()?;

    assert_eq!(a, b);
    assert_ne!(a, c);
    Ok(())
}

#[test]
fn equality_across_variants() {
    assert_eq!(Number::from(1i64), Number::from(1u64));
    assert_eq!(Number::from(1i64), Number::from(1.0));
    assert_ne!(Number::from(1i64), Number::from(1.25));
}

#[test]
fn nan_is_equal_to_nothing() {
    let nan = Number::from(f64::NAN);
    assert_ne!(nan, nan.clone());
    assert_ne!(nan, Number::from(0i64));
}

#[test]
fn ordering() -> Result<()> {
    assert!("1".parse::<Number>()? < "2".parse::<Number>()?);
    assert!("1.5".parse::<Number>()? < "2".parse::<Number>()?);
    assert!("-3".parse::<Number>()? < "0.5".parse::<Number>()?);
    assert!("12345678901234567890".parse::<Number>()? < "12345678901234567891".parse::<Number>()?);
    Ok(())
}

#[test]
fn parse_forms() -> Result<()> {
    assert_eq!(".5".parse::<Number>()?, "0.5".parse::<Number>()?);
    assert_eq!("-.5".parse::<Number>()?, "-0.5".parse::<Number>()?);
    assert_eq!("1_000_000".parse::<Number>()?, "1000000".parse::<Number>()?);

    assert!("".parse::<Number>().is_err());
    assert!("abc".parse::<Number>().is_err());
    assert!("1.2.3".parse::<Number>().is_err());
    Ok(())
}

#[test]
fn format_decimal() -> Result<()> {
    assert_eq!(Number::from(42u64).format_decimal(), "42");
    assert_eq!(Number::from(-7i64).format_decimal(), "-7");
    assert_eq!(Number::from(1.0).format_decimal(), "1");
    assert_eq!(Number::from(1.5).format_decimal(), "1.5");
    assert_eq!(
        "12345678901234567890".parse::<Number>()?.format_decimal(),
        "12345678901234567890"
    );
    Ok(())
}

#[test]
fn checked_accessors() -> Result<()> {
    assert_eq!(Number::from(5i64).as_u64(), Some(5));
    assert_eq!(Number::from(-5i64).as_u64(), None);
    assert_eq!(Number::from(5.0).as_i64(), Some(5));
    assert_eq!(Number::from(5.5).as_i64(), None);
    assert_eq!("12345678901234567890".parse::<Number>()?.as_i64(), None);
    assert!(Number::from(5i64).is_integer());
    assert!(Number::from(5.0).is_integer());
    assert!(!Number::from(5.5).is_integer());
    Ok(())
}
