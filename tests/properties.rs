mod common;

use big_number::{BigNumber, BigNumberError};
use common::*;
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;

#[test]
fn test_text_round_trip_is_canonical() {
    init_logger();
    let mut prng = ChaCha20Rng::seed_from_u64(0);
    for _ in 0..200 {
        let s = random_text(&mut prng, 40);
        let n = big(&s);
        assert_eq!(n.to_string(), canonical(&s), "input = {:?}", s);
    }
    assert_eq!(canonical("-000"), "0");
    assert_eq!(big("-000").to_string(), "0");
}

#[test]
fn test_commutative_and_associative() {
    init_logger();
    let mut prng = ChaCha20Rng::seed_from_u64(0);
    for _ in 0..50 {
        let a = random_big(&mut prng, 30);
        let b = random_big(&mut prng, 30);
        let c = random_big(&mut prng, 30);
        assert_eq!(&a + &b, &b + &a, "a = {}, b = {}", a, b);
        assert_eq!(&a * &b, &b * &a, "a = {}, b = {}", a, b);
        assert_eq!((&a + &b) + &c, &a + (&b + &c));
        assert_eq!((&a * &b) * &c, &a * (&b * &c));
    }
}

#[test]
fn test_identities() {
    init_logger();
    let zero = BigNumber::default();
    let one = BigNumber::from(1);
    let mut prng = ChaCha20Rng::seed_from_u64(1);
    for _ in 0..100 {
        let a = random_big(&mut prng, 30);
        assert_eq!(&a + &zero, a);
        assert_eq!((&a + &-&a).to_string(), "0");
        assert_eq!(&a * &one, a);
        assert_eq!((&a * &zero).to_string(), "0");
        assert_eq!(&a - &a, zero);
    }
}

#[test]
fn test_div_rem_consistency() {
    init_logger();
    let mut prng = ChaCha20Rng::seed_from_u64(2);
    for _ in 0..100 {
        let a = random_big(&mut prng, 40);
        let b = random_big(&mut prng, 15);
        if b.is_zero() {
            assert_eq!(a.checked_div(&b), Err(BigNumberError::DivisionByZero));
            assert_eq!(a.checked_rem(&b), Err(BigNumberError::DivisionByZero));
            continue;
        }
        let q = a.checked_div(&b).unwrap();
        let r = a.checked_rem(&b).unwrap();
        assert_eq!(&q * &b + &r, a, "a = {}, b = {}", a, b);
        assert!(r.abs() < b.abs());
        assert!(r.is_zero() || r.is_negative() == a.is_negative());
    }
}

#[test]
fn test_pow_properties() {
    init_logger();
    let mut prng = ChaCha20Rng::seed_from_u64(3);
    for _ in 0..30 {
        let a = random_big(&mut prng, 8);
        assert_eq!(a.pow(&big("0")), Ok(big("1")));
        assert_eq!(a.pow(&big("-3")), Err(BigNumberError::NegativePower));
        assert_eq!(a.pow(&big("5")).unwrap(), &a * &a * &a * &a * &a);
        assert_eq!(a.pow_u32(7), a.pow(&big("7")).unwrap());
        assert!(!a.pow_u32(6).is_negative());
    }
}

#[test]
fn test_self_aliasing() {
    init_logger();
    let two = big("2");
    let mut prng = ChaCha20Rng::seed_from_u64(4);
    for _ in 0..50 {
        let x = random_big(&mut prng, 25);

        let mut a = x.clone();
        let y = a.clone();
        a += y;
        assert_eq!(a, &x * &two);

        let mut a = x.clone();
        let y = a.clone();
        a *= y;
        assert_eq!(a, x.pow(&two).unwrap());

        let mut a = x.clone();
        let y = a.clone();
        a -= y;
        assert_eq!(a.to_string(), "0");

        if !x.is_zero() {
            let mut a = x.clone();
            let y = a.clone();
            a /= y;
            assert_eq!(a, big("1"));
        }
    }
}

#[test]
fn test_trichotomy() {
    init_logger();
    let mut prng = ChaCha20Rng::seed_from_u64(5);
    for _ in 0..200 {
        let a = random_big(&mut prng, 4);
        let b = random_big(&mut prng, 4);
        let relations = [a < b, a == b, b < a];
        assert_eq!(relations.iter().filter(|r| **r).count(), 1, "a = {}, b = {}", a, b);
    }
}

#[test]
fn test_scenarios() {
    init_logger();
    assert_eq!((big("123") + big("877")).to_string(), "1000");
    assert_eq!((big("1000") - big("1")).to_string(), "999");
    assert_eq!((big("999") * big("999")).to_string(), "998001");
    assert_eq!((big("100") / big("7")).to_string(), "14");
    assert_eq!((big("100") % big("7")).to_string(), "2");
    assert_eq!(big("2").pow(&big("10")).unwrap().to_string(), "1024");
    let sum = big("-5") + big("5");
    assert_eq!(sum.to_string(), "0");
    assert!(!sum.is_negative());
}
