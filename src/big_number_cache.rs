use lazy_static::*;

use crate::BigNumber;
use crate::big_number_constants::*;

lazy_static! {
    pub static ref POS_CACHE: [BigNumber; MAX_CONSTANT + 1] = [
        BigNumber::from_raw(vec![0]   , true),
        BigNumber::from_raw(vec![1]   , true),
        BigNumber::from_raw(vec![2]   , true),
        BigNumber::from_raw(vec![3]   , true),
        BigNumber::from_raw(vec![4]   , true),
        BigNumber::from_raw(vec![5]   , true),
        BigNumber::from_raw(vec![6]   , true),
        BigNumber::from_raw(vec![7]   , true),
        BigNumber::from_raw(vec![8]   , true),
        BigNumber::from_raw(vec![9]   , true),
        BigNumber::from_raw(vec![0, 1], true),
        BigNumber::from_raw(vec![1, 1], true),
        BigNumber::from_raw(vec![2, 1], true),
        BigNumber::from_raw(vec![3, 1], true),
        BigNumber::from_raw(vec![4, 1], true),
        BigNumber::from_raw(vec![5, 1], true),
        BigNumber::from_raw(vec![6, 1], true),
    ];
    // NEG_CACHE[0] is zero, which is never negative
    pub static ref NEG_CACHE: [BigNumber; MAX_CONSTANT + 1] = [
        BigNumber::from_raw(vec![0]   , true),
        BigNumber::from_raw(vec![1]   , false),
        BigNumber::from_raw(vec![2]   , false),
        BigNumber::from_raw(vec![3]   , false),
        BigNumber::from_raw(vec![4]   , false),
        BigNumber::from_raw(vec![5]   , false),
        BigNumber::from_raw(vec![6]   , false),
        BigNumber::from_raw(vec![7]   , false),
        BigNumber::from_raw(vec![8]   , false),
        BigNumber::from_raw(vec![9]   , false),
        BigNumber::from_raw(vec![0, 1], false),
        BigNumber::from_raw(vec![1, 1], false),
        BigNumber::from_raw(vec![2, 1], false),
        BigNumber::from_raw(vec![3, 1], false),
        BigNumber::from_raw(vec![4, 1], false),
        BigNumber::from_raw(vec![5, 1], false),
        BigNumber::from_raw(vec![6, 1], false),
    ];
    pub static ref ZERO: BigNumber = POS_CACHE[0].clone();
    pub static ref ONE: BigNumber = POS_CACHE[1].clone();
    pub static ref TWO: BigNumber = POS_CACHE[2].clone();
}

#[test]
fn test_cache_matches_parse() {
    for i in 0..=MAX_CONSTANT {
        let pos: BigNumber = i.to_string().parse().unwrap();
        let neg: BigNumber = format!("-{}", i).parse().unwrap();
        assert_eq!(POS_CACHE[i].digits(), pos.digits());
        assert_eq!(POS_CACHE[i].is_negative(), pos.is_negative());
        assert_eq!(NEG_CACHE[i].digits(), neg.digits());
        assert_eq!(NEG_CACHE[i].is_negative(), neg.is_negative());
    }
}
