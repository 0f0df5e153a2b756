#![allow(dead_code)]

use big_number::BigNumber;
use rand::Rng;
use rand_chacha::ChaCha20Rng;

pub fn init_logger() {
    let _ = env_logger::Builder::from_default_env().is_test(true).try_init();
}

pub fn big(s: &str) -> BigNumber {
    s.parse().unwrap()
}

/// Decimal text with up to `max_digits` digits, a random sign and possibly leading zeros.
pub fn random_text(prng: &mut ChaCha20Rng, max_digits: usize) -> String {
    let mut s = String::new();
    match prng.gen_range(0..3) {
        0 => s.push('-'),
        1 => s.push('+'),
        _ => {}
    }
    let len = prng.gen_range(1..=max_digits);
    for _ in 0..len {
        s.push(char::from(b'0' + prng.gen_range(0..10u8)));
    }
    s
}

pub fn random_big(prng: &mut ChaCha20Rng, max_digits: usize) -> BigNumber {
    big(&random_text(prng, max_digits))
}

/// What `s` should print as once parsed.
pub fn canonical(s: &str) -> String {
    let (negative, digits) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };
    let digits = digits.trim_start_matches('0');
    if digits.is_empty() {
        "0".to_string()
    } else if negative {
        format!("-{}", digits)
    } else {
        digits.to_string()
    }
}
