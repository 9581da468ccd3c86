use crate::format::general;

#[test]
fn test_zero_and_sign() {
    assert_eq!(general(0.0), "0");
    assert_eq!(general(-0.0), "-0");
    assert_eq!(general(-2.5), "-2.5");
}

#[test]
fn test_fixed_notation_range() {
    assert_eq!(general(1.0), "1");
    assert_eq!(general(123456.0), "123456");
    assert_eq!(general(29_788.4676), "29788.5");
    assert_eq!(general(0.000123456), "0.000123456");
    assert_eq!(general(3.14159265), "3.14159");
}

#[test]
fn test_scientific_notation_range() {
    assert_eq!(general(1234567.0), "1.23457e+06");
    assert_eq!(general(1e55), "1e+55");
    assert_eq!(general(1.98892e30), "1.98892e+30");
    assert_eq!(general(-1.21724e22), "-1.21724e+22");
    assert_eq!(general(1.5e-7), "1.5e-07");
    assert_eq!(general(1e100), "1e+100");
}

#[test]
fn test_rounding_moves_exponent() {
    assert_eq!(general(999_999.7), "1e+06");
    assert_eq!(general(9.999996), "10");
}

#[test]
fn test_non_finite() {
    assert_eq!(general(f64::INFINITY), "inf");
    assert_eq!(general(f64::NEG_INFINITY), "-inf");
    assert_eq!(general(f64::NAN), "nan");
}
