pub const RADIX: u8 = 10;

pub const MAX_CONSTANT: usize = 16;
