use proptest::prelude::*;
use rill_runtime::{Outcome, div, float, int32, int64, rem};

#[test]
fn div_and_rem_truncate_toward_zero() {
    assert_eq!(div(7i64, 2), Outcome::Ok(3));
    assert_eq!(rem(7i64, 2), Outcome::Ok(1));
    assert_eq!(div(-7i64, 2), Outcome::Ok(-3));
    assert_eq!(rem(-7i64, 2), Outcome::Ok(-1));
}

#[test]
fn div_by_zero_fails_for_every_width() {
    assert_eq!(div(1i32, 0).code(), 3);
    assert_eq!(rem(1i32, 0).code(), 3);
    assert_eq!(div(1i64, 0).code(), 3);
    assert_eq!(rem(1i64, 0).code(), 3);
    assert_eq!(div(1.0f64, 0.0).code(), 3);
    assert_eq!(rem(1.0f64, 0.0).code(), 3);
}

#[test]
fn pow_rejects_negative_exponents() {
    assert_eq!(int32::pow(2, -1).code(), 10);
    assert_eq!(int64::pow(2, -1).code(), 10);
}

#[test]
fn pow_with_zero_exponent_is_one() {
    assert_eq!(int32::pow(0, 0), Outcome::Ok(1));
    assert_eq!(int32::pow(-9, 0), Outcome::Ok(1));
    assert_eq!(int64::pow(i64::MIN, 0), Outcome::Ok(1));
}

#[test]
fn abs_min_max_are_total() {
    assert_eq!(int32::abs(-5), 5);
    assert_eq!(int32::min(10, 5), 5);
    assert_eq!(int32::max(10, 5), 10);
    assert_eq!(int64::abs(-5), 5);
    assert_eq!(int64::min(10, 5), 5);
    assert_eq!(int64::max(10, 5), 10);
    assert_eq!(float::abs(-5.5), 5.5);
    assert_eq!(float::min(1.5, 2.5), 1.5);
    assert_eq!(float::max(1.5, 2.5), 2.5);
}

#[test]
fn float_checked_ops_validate_their_domain() {
    assert_eq!(float::sqrt(4.0), Outcome::Ok(2.0));
    assert_eq!(float::sqrt(0.0), Outcome::Ok(0.0));
    assert_eq!(float::sqrt(-1.0).code(), 10);
    assert_eq!(float::log(1.0), Outcome::Ok(0.0));
    assert_eq!(float::log(0.0).code(), 10);
    assert_eq!(float::log(-1.0).code(), 10);
}

#[test]
fn float_totals_delegate_to_host_semantics() {
    assert_eq!(float::pow(2.0, 3.0), 8.0);
    assert_eq!(float::floor(2.9), 2.0);
    assert_eq!(float::ceil(2.1), 3.0);
    assert_eq!(float::sin(0.0), 0.0);
    assert_eq!(float::cos(0.0), 1.0);
    assert_eq!(float::tan(0.0), 0.0);
    assert_eq!(float::exp(0.0), 1.0);
    assert_eq!(float::log(float::E), Outcome::Ok(1.0));
}

proptest! {
    #[test]
    fn div_and_rem_reconstruct_the_dividend(a in any::<i64>(), b in any::<i64>()) {
        prop_assume!(b != 0);
        prop_assume!(!(a == i64::MIN && b == -1));
        let q = div(a, b).get_value();
        let r = rem(a, b).get_value();
        prop_assert_eq!(q * b + r, a);
        if b != i64::MIN {
            prop_assert!(r.abs() < b.abs());
        }
    }
}

proptest! {
    #[test]
    fn pow_matches_checked_pow_off_the_overflow_path(base in -8i64..=8, exp in 0i64..=15) {
        let expected = base.checked_pow(exp as u32).unwrap();
        prop_assert_eq!(int64::pow(base, exp), Outcome::Ok(expected));
    }
}

proptest! {
    #[test]
    fn pow_fails_for_every_negative_exponent(base in any::<i64>(), exp in i64::MIN..0) {
        prop_assert_eq!(int64::pow(base, exp).code(), 10);
    }
}

proptest! {
    #[test]
    fn sqrt_fails_iff_negative(x in any::<f64>()) {
        prop_assert_eq!(float::sqrt(x).is_ok(), !(x < 0.0));
    }
}
