use crate::error::{EncodingError, Result};
use num_traits::{AsPrimitive, Bounded};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Only the low 7 bits of a packed value are significant
pub const QINT_MASK: u8 = 0x7F;
pub const DIGIT_BITS: u8 = 3;
const DIGIT_MASK: u8 = (1 << DIGIT_BITS) - 1;
const EXPONENT_MASK: u8 = QINT_MASK >> DIGIT_BITS;

/// Nanotons per TON, the divisor used when reporting decoded amounts
pub const NANOTONS_PER_TON: u64 = 1_000_000_000;
/// Decimal places kept when a decoded amount is shown in TON
pub const TON_DECIMALS: i32 = 5;

/// Decodes a packed quantized number into nanotons.
///
/// Any integer is accepted, only the low 7 bits are used:
///  - 0 is 0
///  - the low 3 bits are a digit, a zero digit counts as 0.8 instead of 0
///  - the high 4 bits are a decimal exponent
///
/// The result is `(digit * 10 * 10^exponent) >> 3`.
pub fn unpack<T: AsPrimitive<u8>>(packed: T) -> u64 {
    let masked = packed.as_() & QINT_MASK;
    if masked == 0 {
        return 0;
    }

    let mut num = (masked & DIGIT_MASK) as u64 * 10;
    if num == 0 {
        num = 8;
    }
    let exponent = (masked >> DIGIT_BITS) as u32;
    (num * 10_u64.pow(exponent)) >> 3
}

/// Decoded value of every packed value, indexed by the packed value
pub fn full_lookup() -> [u64; QINT_MASK as usize + 1] {
    std::array::from_fn(|bits| unpack(bits as u8))
}

/// Parses a decimal TON amount such as `1`, `0.025` or `.5` into nanotons
pub fn parse_nanotons(amount: &str) -> Result<u64> {
    let invalid = || EncodingError::InvalidAmount(amount.to_string());
    let (whole, fraction) = amount.trim().split_once('.').unwrap_or((amount.trim(), ""));
    let all_digits = |part: &str| part.bytes().all(|byte| byte.is_ascii_digit());
    if (whole.is_empty() && fraction.is_empty())
        || fraction.len() > 9
        || !all_digits(whole)
        || !all_digits(fraction)
    {
        return Err(invalid());
    }

    let whole = match whole {
        "" => 0,
        _ => whole.parse::<u64>().map_err(|_| invalid())?,
    };
    let fraction = format!("{:0<9}", fraction).parse::<u64>().map_err(|_| invalid())?;
    whole
        .checked_mul(NANOTONS_PER_TON)
        .and_then(|nanotons| nanotons.checked_add(fraction))
        .ok_or_else(invalid)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Qint(u8);

impl Qint {
    pub const MIN: Qint = Qint(0);
    pub const MAX: Qint = Qint(QINT_MASK);

    pub fn new(bits: u8) -> Self {
        Qint(bits & QINT_MASK)
    }

    pub fn from_parts(exponent: u8, digit: u8) -> Self {
        Qint(((exponent & EXPONENT_MASK) << DIGIT_BITS) | (digit & DIGIT_MASK))
    }

    /// Largest qint that decodes to at most `amount` nanotons.
    /// Amounts beyond the representable range saturate to `Qint::MAX`.
    pub fn floor_from_nanotons(amount: u64) -> Self {
        // unpack(0) == 0, so at least one entry always satisfies the predicate
        let above = full_lookup().partition_point(|&value| value <= amount);
        Qint::new((above - 1) as u8)
    }

    /// Smallest qint that decodes to at least `amount` nanotons
    pub fn ceil_from_nanotons(amount: u64) -> Option<Self> {
        let index = full_lookup().partition_point(|&value| value < amount);
        if index > QINT_MASK as usize {
            None
        } else {
            Some(Qint::new(index as u8))
        }
    }

    pub fn bits(&self) -> u8 {
        self.0
    }

    pub fn digit(&self) -> u8 {
        self.0 & DIGIT_MASK
    }

    pub fn exponent(&self) -> u8 {
        self.0 >> DIGIT_BITS
    }

    pub fn decode(&self) -> u64 {
        unpack(self.0)
    }

    /// Decoded amount in TON, rounded to `TON_DECIMALS` places
    pub fn to_ton(&self) -> f64 {
        let scale = 10_f64.powi(TON_DECIMALS);
        (self.decode() as f64 / NANOTONS_PER_TON as f64 * scale).round() / scale
    }
}

impl From<Qint> for u8 {
    fn from(value: Qint) -> Self {
        value.0
    }
}

impl Bounded for Qint {
    fn min_value() -> Self {
        Qint::MIN
    }

    fn max_value() -> Self {
        Qint::MAX
    }
}

impl fmt::Display for Qint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.*} TON", TON_DECIMALS as usize, self.to_ton())
    }
}
