//! # BigNumber
//! Arbitrary-precision signed integers stored as decimal digits, least significant first.
//! Every value is kept canonical: no leading zeros, and zero is never negative.
//! # Example
//! ```
//! use big_number::BigNumber;
//!
//! let a: BigNumber = "10000000000000".parse().unwrap();
//! let b: BigNumber = "900000000000".parse().unwrap();
//! println!("a = {}", a);
//! println!("a + b = {}", &a + &b);
//! println!("a - b = {}", &a - &b);
//! println!("a * b = {}", &a * &b);
//! println!("a / b = {}", &a / &b);
//! println!("a % b = {}", &a % &b);
//! println!("a << 10 = {}", &a << 10);
//! println!("a >> 10 = {}", &a >> 10);
//! println!("a ^ 3 = {}", a.pow_u32(3));
//! ```
//!

use std::cmp::Ordering;
use std::fmt::{self, Display};
use std::hash::{Hash, Hasher};
use std::ops::{
    Add, AddAssign,
    Sub, SubAssign,
    Mul, MulAssign,
    Div, DivAssign,
    Rem, RemAssign,
    Shl, ShlAssign,
    Shr, ShrAssign,
    Neg,
};
use std::str::FromStr;

use log::{debug, trace};

use crate::big_number_cache::*;
use crate::big_number_constants::*;
use crate::error::{BigNumberError, ParseBigNumberError, Result};

#[derive(Debug, Clone)]
pub struct BigNumber {
    digits: Vec<u8>,
    sign: bool,
}

// 杂项辅助函数
impl BigNumber {
    pub(crate) fn from_raw(digits: Vec<u8>, sign: bool) -> Self {
        BigNumber { digits, sign }
    }

    /// Restores the canonical form. An empty or all-zero vector becomes `[0]` with a positive sign.
    fn discard_leading_zeros(&mut self) {
        while let Some(&0) = self.digits.last() {
            self.digits.pop();
        }
        if self.digits.is_empty() {
            self.digits.push(0);
            self.sign = true;
        }
    }

    /// Number of decimal digits. Zero has one digit.
    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize {
        self.digits.len()
    }

    /// The `i`-th least significant digit.
    pub fn digit(&self, i: usize) -> Option<u8> {
        self.digits.get(i).copied()
    }

    /// Digits, least significant first.
    pub fn digits(&self) -> &[u8] {
        &self.digits
    }

    pub fn is_zero(&self) -> bool {
        self.digits.len() == 1 && self.digits[0] == 0
    }

    pub fn is_negative(&self) -> bool {
        !self.sign
    }

    pub fn is_even(&self) -> bool {
        self.digits[0] % 2 == 0
    }

    pub fn is_odd(&self) -> bool {
        !self.is_even()
    }

    pub fn increment(&mut self) -> &mut Self {
        self.add_in_place(&ONE);
        self
    }

    pub fn decrement(&mut self) -> &mut Self {
        self.sub_in_place(&ONE);
        self
    }
}

impl Default for BigNumber {
    fn default() -> Self {
        ZERO.clone()
    }
}

// 实现打印
impl Display for BigNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s: String = self.digits
            .iter()
            .rev()
            .map(|d| char::from(b'0' + d))
            .collect();
        f.pad_integral(self.sign, "", &s)
    }
}

// 实现解析
impl BigNumber {
    /// Parses `[+-]?[0-9]*`. The empty string and a lone sign both parse to zero.
    pub fn parse(val: &str) -> std::result::Result<BigNumber, ParseBigNumberError> {
        let (sign, cursor) = match val.as_bytes().first() {
            None => return Ok(BigNumber::default()),
            Some(b'-') => (false, 1),
            Some(b'+') => (true, 1),
            Some(_) => (true, 0),
        };

        let mut digits = Vec::with_capacity(val.len() - cursor);
        for (position, c) in val[cursor..].char_indices() {
            match c.to_digit(RADIX as u32) {
                Some(d) => digits.push(d as u8),
                None => {
                    debug!("rejecting {:?}: {:?} is not a decimal digit", val, c);
                    return Err(ParseBigNumberError::InvalidDigit {
                        digit: c,
                        position: position + cursor,
                    });
                }
            }
        }
        digits.reverse();

        let mut result = BigNumber::from_raw(digits, sign);
        result.discard_leading_zeros();
        Ok(result)
    }

    /// Builds a value from the output of a native integer's `to_string`.
    fn from_native_text(text: &str) -> BigNumber {
        let (sign, magnitude) = match text.strip_prefix('-') {
            Some(magnitude) => (false, magnitude),
            None => (true, text),
        };
        let digits = magnitude.bytes().rev().map(|b| b - b'0').collect();
        let mut result = BigNumber::from_raw(digits, sign);
        result.discard_leading_zeros();
        result
    }
}

impl FromStr for BigNumber {
    type Err = ParseBigNumberError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        BigNumber::parse(s)
    }
}

macro_rules! impl_native_to_big_number {
    ($($t: ty),*) => {
    $(
    impl From<$t> for BigNumber {
        fn from(val: $t) -> Self {
            if let Ok(small) = i64::try_from(val) {
                let index = small.unsigned_abs();
                if index <= MAX_CONSTANT as u64 {
                    return if small < 0 {
                        NEG_CACHE[index as usize].clone()
                    } else {
                        POS_CACHE[index as usize].clone()
                    };
                }
            }
            BigNumber::from_native_text(&val.to_string())
        }
    }
    )*
    };
}
impl_native_to_big_number!(u8, u16, u32, u64, u128, usize);
impl_native_to_big_number!(i8, i16, i32, i64, i128, isize);

// 实现大小比较
impl BigNumber {
    fn compare_mag(&self, other: &BigNumber) -> Ordering {
        match self.digits.len().cmp(&other.digits.len()) {
            Ordering::Equal => {}
            ord => return ord,
        }
        for (a, b) in self.digits.iter().rev().zip(other.digits.iter().rev()) {
            if a != b {
                return a.cmp(b);
            }
        }
        Ordering::Equal
    }

    /// Strict signed order. Everything else in this section is derived from it.
    fn less_than(&self, other: &BigNumber) -> bool {
        match (self.sign, other.sign) {
            (false, true) => true,
            (true, false) => false,
            // -a < -b  <=>  |b| < |a|
            (false, false) => other.compare_mag(self).is_lt(),
            (true, true) => self.compare_mag(other).is_lt(),
        }
    }
}

impl PartialEq for BigNumber {
    fn eq(&self, other: &Self) -> bool {
        !self.less_than(other) && !other.less_than(self)
    }
}
impl Eq for BigNumber {}

impl PartialOrd for BigNumber {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for BigNumber {
    fn cmp(&self, other: &Self) -> Ordering {
        if self.less_than(other) {
            Ordering::Less
        } else if other.less_than(self) {
            Ordering::Greater
        } else {
            Ordering::Equal
        }
    }
}

impl Hash for BigNumber {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.sign.hash(state);
        self.digits.hash(state);
    }
}

// 实现绝对值与取反
impl BigNumber {
    pub fn abs(&self) -> BigNumber {
        if self.sign {
            self.clone()
        } else {
            -self
        }
    }
}

impl Neg for BigNumber {
    type Output = BigNumber;

    fn neg(mut self) -> Self::Output {
        if !self.is_zero() {
            self.sign = !self.sign;
        }
        self
    }
}

impl Neg for &BigNumber {
    type Output = BigNumber;

    fn neg(self) -> Self::Output {
        self.clone().neg()
    }
}

// 实现加法
impl BigNumber {
    fn add_in_place(&mut self, rhs: &BigNumber) {
        if self.sign != rhs.sign {
            if self.sign {
                // a + (-b) = a - b
                self.sub_in_place(&rhs.abs());
            } else {
                // (-a) + b = b - a
                let mut result = rhs.clone();
                result.sub_in_place(&self.abs());
                *self = result;
            }
            return;
        }
        BigNumber::add_mag(&mut self.digits, &rhs.digits);
        self.discard_leading_zeros();
    }

    /// `x += y` on magnitudes, carrying into new digits as needed.
    fn add_mag(x: &mut Vec<u8>, y: &[u8]) {
        x.reserve(x.len().max(y.len()) + 1 - x.len());
        let common = x.len().min(y.len());
        let mut carry = 0;
        for i in 0..common {
            let sum = x[i] + y[i] + carry;
            x[i] = sum % RADIX;
            carry = sum / RADIX;
        }
        if x.len() > y.len() {
            for d in x[common..].iter_mut() {
                if carry == 0 {
                    break;
                }
                let sum = *d + carry;
                *d = sum % RADIX;
                carry = sum / RADIX;
            }
        } else {
            for &d in &y[common..] {
                let sum = d + carry;
                x.push(sum % RADIX);
                carry = sum / RADIX;
            }
        }
        if carry != 0 {
            x.push(carry);
        }
    }
}

// 实现减法
impl BigNumber {
    fn sub_in_place(&mut self, rhs: &BigNumber) {
        if self.sign != rhs.sign {
            // a - (-b) = a + b, (-a) - b = -(a + b)
            let final_sign = self.sign;
            BigNumber::add_mag(&mut self.digits, &rhs.digits);
            self.sign = final_sign;
            self.discard_leading_zeros();
            return;
        }

        // both captured before the digits are overwritten
        let final_sign = !self.less_than(rhs);
        let self_mag_larger = self.compare_mag(rhs).is_ge();

        if self_mag_larger {
            BigNumber::sub_mag(&mut self.digits, &rhs.digits);
        } else {
            let mut digits = rhs.digits.clone();
            BigNumber::sub_mag(&mut digits, &self.digits);
            self.digits = digits;
        }
        self.sign = final_sign;
        self.discard_leading_zeros();
    }

    /// `big -= little` on magnitudes. Requires `|big| >= |little|`.
    fn sub_mag(big: &mut [u8], little: &[u8]) {
        let mut borrow = 0;
        for i in 0..big.len() {
            if borrow == 0 && i >= little.len() {
                break;
            }
            let sub = borrow + little.get(i).copied().unwrap_or(0);
            if sub > big[i] {
                big[i] = big[i] + RADIX - sub;
                borrow = 1;
            } else {
                big[i] -= sub;
                borrow = 0;
            }
        }
    }
}

// 实现左移与右移 (以十为底)
impl BigNumber {
    /// Multiplies by `10^n`.
    fn shl_in_place(&mut self, n: usize) {
        if self.is_zero() || n == 0 {
            return;
        }
        self.digits.splice(0..0, std::iter::repeat(0).take(n));
    }

    /// Divides by `10^n`, dropping the low digits.
    fn shr_in_place(&mut self, n: usize) {
        if self.digits.len() <= n {
            *self = ZERO.clone();
            return;
        }
        self.digits.drain(..n);
    }
}

impl Shl<usize> for BigNumber {
    type Output = BigNumber;

    fn shl(mut self, n: usize) -> Self::Output {
        self.shl_in_place(n);
        self
    }
}

impl Shl<usize> for &BigNumber {
    type Output = BigNumber;

    fn shl(self, n: usize) -> Self::Output {
        self.clone() << n
    }
}

impl ShlAssign<usize> for BigNumber {
    fn shl_assign(&mut self, n: usize) {
        self.shl_in_place(n);
    }
}

impl Shr<usize> for BigNumber {
    type Output = BigNumber;

    fn shr(mut self, n: usize) -> Self::Output {
        self.shr_in_place(n);
        self
    }
}

impl Shr<usize> for &BigNumber {
    type Output = BigNumber;

    fn shr(self, n: usize) -> Self::Output {
        self.clone() >> n
    }
}

impl ShrAssign<usize> for BigNumber {
    fn shr_assign(&mut self, n: usize) {
        self.shr_in_place(n);
    }
}

// 实现乘法
impl BigNumber {
    fn mul_in_place(&mut self, rhs: &BigNumber) {
        let initial_this_sign = self.sign;
        let initial_rhs_sign = rhs.sign;

        let mut product = ZERO.clone();
        product.digits.reserve(self.digits.len() + rhs.digits.len());
        for &d in rhs.digits.iter().rev() {
            product.shl_in_place(1);
            product.add_in_place(&self.mul_digit(d));
        }

        *self = product;
        if initial_this_sign != initial_rhs_sign && !self.is_zero() {
            self.sign = false;
        }
    }

    /// `|self| * n` for a single digit `n`.
    fn mul_digit(&self, n: u8) -> BigNumber {
        if n == 0 {
            return ZERO.clone();
        }
        let mut digits = Vec::with_capacity(self.digits.len() + 1);
        let mut carry = 0;
        for &d in &self.digits {
            let product = n * d + carry;
            digits.push(product % RADIX);
            carry = product / RADIX;
        }
        if carry != 0 {
            digits.push(carry);
        }
        BigNumber::from_raw(digits, true)
    }
}

// 实现除法与求余
impl BigNumber {
    /// Truncating division. Fails with [`BigNumberError::DivisionByZero`] when `rhs` is zero.
    pub fn checked_div(&self, rhs: &BigNumber) -> Result<BigNumber> {
        let mut quotient = self.clone();
        quotient.checked_div_assign(rhs)?;
        Ok(quotient)
    }

    pub fn checked_div_assign(&mut self, rhs: &BigNumber) -> Result<()> {
        if *rhs == *ZERO {
            debug!("division of {} by zero", self);
            return Err(BigNumberError::DivisionByZero);
        }
        self.divide(rhs);
        Ok(())
    }

    /// Remainder of truncating division, taking the sign of the dividend.
    pub fn checked_rem(&self, rhs: &BigNumber) -> Result<BigNumber> {
        let mut remainder = self.clone();
        remainder.checked_rem_assign(rhs)?;
        Ok(remainder)
    }

    pub fn checked_rem_assign(&mut self, rhs: &BigNumber) -> Result<()> {
        let mut product = self.checked_div(rhs)?;
        product.mul_in_place(rhs);
        self.sub_in_place(&product);
        Ok(())
    }

    /// Long division by repeated subtraction of the shifted divisor. `rhs` must be non-zero.
    fn divide(&mut self, rhs: &BigNumber) {
        let initial_this_sign = self.sign;
        let initial_rhs_sign = rhs.sign;
        let initial_shift = self.digits.len().saturating_sub(rhs.digits.len());

        let mut denom = rhs << initial_shift;
        denom.sign = true;
        let mut num = std::mem::take(self);
        num.sign = true;

        let mut q = ZERO.clone();
        q.digits.reserve(initial_shift + 1);
        for step in (0..=initial_shift).rev() {
            let mut q_digit = 0;
            while num >= denom {
                num.sub_in_place(&denom);
                q_digit += 1;
            }
            trace!("divide: shift {} gives quotient digit {}", step, q_digit);
            q.shl_in_place(1);
            q.digits[0] = q_digit;
            denom.shr_in_place(1);
        }

        *self = q;
        if initial_this_sign != initial_rhs_sign && !self.is_zero() {
            self.sign = false;
        }
    }

    fn div_or_panic(&mut self, rhs: &BigNumber) {
        if let Err(e) = self.checked_div_assign(rhs) {
            panic!("{}", e);
        }
    }

    fn rem_or_panic(&mut self, rhs: &BigNumber) {
        if let Err(e) = self.checked_rem_assign(rhs) {
            panic!("{}", e);
        }
    }
}

// 实现乘方
impl BigNumber {
    /// Exponentiation by squaring. Fails with [`BigNumberError::NegativePower`] for a negative exponent.
    pub fn pow(&self, exponent: &BigNumber) -> Result<BigNumber> {
        if exponent.is_negative() {
            debug!("{} raised to negative power {}", self, exponent);
            return Err(BigNumberError::NegativePower);
        }
        Ok(self.pow_by_squaring(exponent))
    }

    pub fn pow_assign(&mut self, exponent: &BigNumber) -> Result<()> {
        *self = self.pow(exponent)?;
        Ok(())
    }

    pub fn pow_u32(&self, exponent: u32) -> BigNumber {
        self.pow_by_squaring(&BigNumber::from(exponent))
    }

    fn pow_by_squaring(&self, exponent: &BigNumber) -> BigNumber {
        if *exponent == *ZERO {
            return ONE.clone();
        }
        if *exponent == *ONE {
            return self.clone();
        }
        trace!("pow: exponent {}", exponent);

        let even = exponent.is_even();
        let mut half = if even {
            exponent.clone()
        } else {
            exponent - &*ONE
        };
        half.divide(&TWO);

        let mut result = self.pow_by_squaring(&half);
        let root = result.clone();
        result.mul_in_place(&root);
        if even {
            result.sign = true;
        } else {
            result.mul_in_place(self);
        }
        result
    }
}

macro_rules! impl_binary_op {
    ($op: ident, $method: ident, $op_assign: ident, $method_assign: ident, $in_place: ident) => {
        impl $op for BigNumber {
            type Output = BigNumber;

            fn $method(mut self, rhs: BigNumber) -> Self::Output {
                self.$in_place(&rhs);
                self
            }
        }

        impl $op<&BigNumber> for BigNumber {
            type Output = BigNumber;

            fn $method(mut self, rhs: &BigNumber) -> Self::Output {
                self.$in_place(rhs);
                self
            }
        }

        impl $op<BigNumber> for &BigNumber {
            type Output = BigNumber;

            fn $method(self, rhs: BigNumber) -> Self::Output {
                let mut result = self.clone();
                result.$in_place(&rhs);
                result
            }
        }

        impl $op<&BigNumber> for &BigNumber {
            type Output = BigNumber;

            fn $method(self, rhs: &BigNumber) -> Self::Output {
                let mut result = self.clone();
                result.$in_place(rhs);
                result
            }
        }

        impl $op_assign for BigNumber {
            fn $method_assign(&mut self, rhs: BigNumber) {
                self.$in_place(&rhs);
            }
        }

        impl $op_assign<&BigNumber> for BigNumber {
            fn $method_assign(&mut self, rhs: &BigNumber) {
                self.$in_place(rhs);
            }
        }
    };
}

impl_binary_op!(Add, add, AddAssign, add_assign, add_in_place);
impl_binary_op!(Sub, sub, SubAssign, sub_assign, sub_in_place);
impl_binary_op!(Mul, mul, MulAssign, mul_assign, mul_in_place);
// panics on a zero divisor, like the primitive integers
impl_binary_op!(Div, div, DivAssign, div_assign, div_or_panic);
impl_binary_op!(Rem, rem, RemAssign, rem_assign, rem_or_panic);

#[cfg(test)]
fn big(s: &str) -> BigNumber {
    s.parse().unwrap()
}

#[test]
fn test_parse() {
    let a = big("000123");
    assert_eq!(a.digits(), &[3, 2, 1]);
    assert!(!a.is_negative());

    let a = big("-0042");
    assert_eq!(a.digits(), &[2, 4]);
    assert!(a.is_negative());

    let a = big("+7");
    assert_eq!(a.digits(), &[7]);
    assert!(!a.is_negative());

    for zero in ["", "+", "-", "0", "-0", "+000"] {
        let z = big(zero);
        assert_eq!(z.digits(), &[0], "input = {:?}", zero);
        assert!(!z.is_negative(), "input = {:?}", zero);
    }
}

#[test]
fn test_parse_rejects_non_digits() {
    assert_eq!(
        BigNumber::parse("12a4"),
        Err(ParseBigNumberError::InvalidDigit { digit: 'a', position: 2 })
    );
    assert_eq!(
        BigNumber::parse("-1 2"),
        Err(ParseBigNumberError::InvalidDigit { digit: ' ', position: 2 })
    );
    assert_eq!(
        "+-1".parse::<BigNumber>(),
        Err(ParseBigNumberError::InvalidDigit { digit: '-', position: 1 })
    );
    assert_eq!(
        "1٣".parse::<BigNumber>(),
        Err(ParseBigNumberError::InvalidDigit { digit: '٣', position: 1 })
    );
}

#[test]
fn test_from() {
    assert_eq!(BigNumber::from(0_i32).to_string(), "0");
    assert_eq!(BigNumber::from(12_i8).to_string(), "12");
    assert_eq!(BigNumber::from(-16_i16).to_string(), "-16");
    assert_eq!(BigNumber::from(-17_i16).to_string(), "-17");
    assert_eq!(BigNumber::from(100_u32).to_string(), "100");
    assert_eq!(BigNumber::from(-10000_isize).to_string(), "-10000");
    assert_eq!(BigNumber::from(i64::MIN).to_string(), i64::MIN.to_string());
    assert_eq!(BigNumber::from(u64::MAX).to_string(), u64::MAX.to_string());
    assert_eq!(BigNumber::from(i128::MIN).to_string(), i128::MIN.to_string());
    assert_eq!(BigNumber::from(u128::MAX).to_string(), u128::MAX.to_string());
    assert_eq!(BigNumber::from(-113132_i64), big("-113132"));
    assert_eq!(BigNumber::default(), big("0"));
}

#[test]
fn test_to_string() {
    let s = "12345678909876523784950683472613487560983287654321";
    assert_eq!(big(s).to_string(), s);
    assert_eq!(big("-00012").to_string(), "-12");
    assert_eq!(big("-0").to_string(), "0");
    assert_eq!(format!("{:>5}", big("-12")), "  -12");
    assert_eq!(format!("{:+}", big("12")), "+12");
}

#[test]
fn test_compare() {
    assert!(big("-1") < big("0"));
    assert!(big("-100") < big("-99"));
    assert!(big("99") < big("100"));
    assert!(big("123") < big("124"));
    assert!(big("-124") < big("-123"));
    assert!(big("0") == big("-0"));
    assert!(big("5") > big("-5"));
    assert_eq!(big("42").cmp(&big("42")), Ordering::Equal);
    assert_eq!(std::cmp::max(big("-3"), big("2")), big("2"));
    assert_eq!(std::cmp::min(big("-3"), big("2")), big("-3"));
}

#[test]
fn test_add() {
    assert_eq!(big("123") + big("877"), big("1000"));
    assert_eq!(big("-5") + big("5"), big("0"));
    assert_eq!((big("-5") + big("5")).to_string(), "0");
    assert_eq!(big("-5") + big("3"), big("-2"));
    assert_eq!(big("5") + big("-8"), big("-3"));
    assert_eq!(big("-5") + big("-8"), big("-13"));
    assert_eq!(big("9999999999") + big("1"), big("10000000000"));
    assert_eq!(big("1") + big("9999999999"), big("10000000000"));
}

#[test]
fn test_sub() {
    assert_eq!(big("1000") - big("1"), big("999"));
    assert_eq!(big("1") - big("1000"), big("-999"));
    assert_eq!(big("-5") - big("-3"), big("-2"));
    assert_eq!(big("-3") - big("-5"), big("2"));
    assert_eq!(big("-3") - big("5"), big("-8"));
    assert_eq!(big("3") - big("-5"), big("8"));
    assert_eq!((big("-7") - big("-7")).to_string(), "0");
    assert_eq!(big("100000000000000000000") - big("1"), big("99999999999999999999"));
}

#[test]
fn test_shift() {
    assert_eq!(big("123") << 3, big("123000"));
    assert_eq!(big("-123") << 2, big("-12300"));
    assert_eq!((big("0") << 5).to_string(), "0");
    assert_eq!(big("123456") >> 2, big("1234"));
    assert_eq!(big("-123456") >> 5, big("-1"));
    assert_eq!((big("-123456") >> 6).to_string(), "0");
    assert_eq!((big("-123456") >> 10).to_string(), "0");

    let mut a = big("42");
    a <<= 2;
    assert_eq!(a, big("4200"));
    a >>= 3;
    assert_eq!(a, big("4"));
}

#[test]
fn test_mul() {
    assert_eq!(big("999") * big("999"), big("998001"));
    assert_eq!(big("-12") * big("12"), big("-144"));
    assert_eq!(big("-12") * big("-12"), big("144"));
    assert_eq!((big("-12") * big("0")).to_string(), "0");
    assert_eq!((big("0") * big("-12")).to_string(), "0");
    assert_eq!(
        big("123456789012345678901234567890") * big("987654321098765432109876543210"),
        big("121932631137021795226185032733622923332237463801111263526900")
    );
}

#[test]
fn test_div() {
    assert_eq!(big("120") / big("13"), big("9"));
    assert_eq!(big("100") / big("7"), big("14"));
    assert_eq!(big("-100") / big("7"), big("-14"));
    assert_eq!(big("100") / big("-7"), big("-14"));
    assert_eq!(big("-100") / big("-7"), big("14"));
    assert_eq!((big("-3") / big("7")).to_string(), "0");
    assert_eq!(big("7") / big("7"), big("1"));
    assert_eq!(
        big("10000000000000000000000000000000000") / big("1000"),
        big("10000000000000000000000000000000")
    );
    assert_eq!(
        big("121932631137021795226185032733622923332237463801111263526900")
            / big("987654321098765432109876543210"),
        big("123456789012345678901234567890")
    );
}

#[test]
fn test_mod() {
    assert_eq!(big("100") % big("7"), big("2"));
    assert_eq!(big("12") % big("8"), big("4"));
    assert_eq!(big("-100") % big("7"), big("-2"));
    assert_eq!(big("100") % big("-7"), big("2"));
    assert_eq!(big("10000000000000000") % big("10"), big("0"));
    assert_eq!(
        big("23456789873625348759607098765432345678909876325346546543456453573434839063464369876543245")
            % big("526738495607659438721653478560954837265378495607"),
        big("393707270751296419349581795408095683999332705291")
    );
}

#[test]
fn test_divide_by_zero() {
    assert_eq!(big("5").checked_div(&big("0")), Err(BigNumberError::DivisionByZero));
    assert_eq!(big("5").checked_rem(&big("-0")), Err(BigNumberError::DivisionByZero));
    let mut a = big("5");
    assert_eq!(a.checked_div_assign(&ZERO), Err(BigNumberError::DivisionByZero));
    assert_eq!(a, big("5"));
}

#[test]
#[should_panic(expected = "Error: Division by zero.")]
fn test_div_operator_panics_on_zero() {
    let _ = big("5") / big("0");
}

#[test]
fn test_pow() {
    assert_eq!(big("2").pow(&big("10")), Ok(big("1024")));
    assert_eq!(big("0").pow(&big("0")), Ok(big("1")));
    assert_eq!(big("-7").pow(&big("0")), Ok(big("1")));
    assert_eq!(big("-7").pow(&big("1")), Ok(big("-7")));
    assert_eq!(big("-2").pow(&big("3")), Ok(big("-8")));
    assert_eq!(big("-2").pow(&big("4")), Ok(big("16")));
    assert_eq!(big("3").pow(&big("-1")), Err(BigNumberError::NegativePower));
    assert_eq!(big("10").pow_u32(30), big("1000000000000000000000000000000"));
    assert_eq!(big("2").pow_u32(127), BigNumber::from(1_u128 << 127));

    let mut a = big("3");
    a.pow_assign(&big("5")).unwrap();
    assert_eq!(a, big("243"));
    assert_eq!(a.pow_assign(&big("-2")), Err(BigNumberError::NegativePower));
    assert_eq!(a, big("243"));
}

#[test]
fn test_self_operation() {
    let x = big("-98765432123456789");

    let mut a = x.clone();
    let y = a.clone();
    a += y;
    assert_eq!(a, &x * &big("2"));

    let mut a = x.clone();
    let y = a.clone();
    a -= &y;
    assert_eq!(a.to_string(), "0");

    let mut a = x.clone();
    let y = a.clone();
    a *= y;
    assert_eq!(a, x.pow_u32(2));

    let mut a = x.clone();
    let y = a.clone();
    a /= &y;
    assert_eq!(a, big("1"));

    let mut a = x.clone();
    let y = a.clone();
    a %= y;
    assert_eq!(a.to_string(), "0");

    let mut a = big("3");
    let y = a.clone();
    a.pow_assign(&y).unwrap();
    assert_eq!(a, big("27"));
}

#[test]
fn test_misc() {
    assert_eq!(big("-12").abs(), big("12"));
    assert_eq!(-big("12"), big("-12"));
    assert_eq!((-big("0")).to_string(), "0");
    assert!(big("-12").is_even());
    assert!(big("7").is_odd());
    assert!(big("0").is_zero());
    assert_eq!(big("-305").len(), 3);
    assert_eq!(big("-305").digit(0), Some(5));
    assert_eq!(big("-305").digit(3), None);

    let mut a = big("-1");
    a.increment();
    assert_eq!(a.to_string(), "0");
    a.decrement().decrement();
    assert_eq!(a, big("-2"));
    let mut b = big("999");
    b.increment();
    assert_eq!(b, big("1000"));
}

#[test]
fn test_hash_agrees_with_eq() {
    use std::collections::HashSet;

    let mut set = HashSet::new();
    set.insert(big("-0"));
    set.insert(big("0"));
    set.insert(big("007"));
    set.insert(big("7"));
    set.insert(big("-7"));
    assert_eq!(set.len(), 3);
}
