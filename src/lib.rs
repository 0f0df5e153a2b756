//! Big Number \
//! This crate provides:
//! - [`BigNumber`]: arbitrary-precision signed integers kept as decimal digits, with the full
//!   arithmetic operator set, decimal shifts, exponentiation by squaring and a total order.
//! - [`BigNumberError`]: the two invalid-argument conditions, `DivisionByZero` and `NegativePower`.

mod big_number;
mod big_number_cache;
mod big_number_constants;
mod error;

pub use big_number::BigNumber;
pub use error::{BigNumberError, ParseBigNumberError, Result};

#[cfg(test)]
mod tests {
    use crate::BigNumber;

    fn init_logger() {
        let _ = env_logger::Builder::from_default_env().is_test(true).try_init();
    }

    #[test]
    fn it_works() {
        init_logger();
        let a: BigNumber = "10000000000000".parse().unwrap();
        let b: BigNumber = "900000000000".parse().unwrap();
        println!("a = {}", a);
        println!("a + b = {}", &a + &b);
        println!("a - b = {}", &a - &b);
        println!("a * b = {}", &a * &b);
        println!("a / b = {}", &a / &b);
        println!("a % b = {}", &a % &b);
        println!("a << 10 = {}", &a << 10);
        println!("a >> 10 = {}", &a >> 10);
        println!("a ^ 2 = {}", a.pow(&"2".parse().unwrap()).unwrap());
        assert_eq!((&a + &b).to_string(), "10900000000000");
        assert_eq!((&a - &b).to_string(), "9100000000000");
        assert_eq!((&a / &b).to_string(), "11");
        assert_eq!((&a % &b).to_string(), "100000000000");
    }
}
