//! BCD encoded date masks and 5-bit encoded two-letter codes.
//!
//! Date mask layout, one BCD digit per nibble, 0 meaning unspecified or unknown:
//!  - bits 31..16 year
//!  - bits 15..8 month
//!  - bits 7..0 day
//!
//! So `0x20250100` is `2025-01-*` and `0x20250000` is `2025-*`.

use crate::error::{EncodingError, Result};

const MAX_YEAR: u32 = 9999;
const MAX_MONTH: u32 = 12;
const MAX_DAY: u32 = 31;

const LETTER_BITS: u16 = 5;
const LETTER_MASK: u16 = (1 << LETTER_BITS) - 1;

fn to_bcd(value: u32, digits: u32) -> u32 {
    (0..digits).fold(0, |acc, i| acc | ((value / 10_u32.pow(i)) % 10) << (4 * i))
}

/// Encoding stops at the first missing or out of range component,
/// later components are left unspecified
pub fn encode_date_mask(year: Option<u32>, month: Option<u32>, day: Option<u32>) -> u32 {
    let Some(year) = year.filter(|year| *year <= MAX_YEAR) else {
        return 0;
    };
    let mut bcd = to_bcd(year, 4) << 16;

    let Some(month) = month.filter(|month| *month <= MAX_MONTH) else {
        return bcd;
    };
    bcd |= to_bcd(month, 2) << 8;

    let Some(day) = day.filter(|day| *day <= MAX_DAY) else {
        return bcd;
    };
    bcd | to_bcd(day, 2)
}

/// Parses masks such as `*`, `2024`, `2024-*`, `2024-10-*` and `2024-10-20`
pub fn parse_date_mask(mask: &str) -> Result<u32> {
    let components = mask
        .split('-')
        .take(3)
        .map(|component| match component {
            "*" => Ok(0),
            _ => component
                .parse::<u32>()
                .map_err(|_| EncodingError::InvalidDateComponent(component.to_string())),
        })
        .collect::<Result<Vec<u32>>>()?;

    Ok(encode_date_mask(
        components.first().copied(),
        components.get(1).copied(),
        components.get(2).copied(),
    ))
}

fn bcd_digit(mask: u32, shift: u32) -> Result<char> {
    let nibble = (mask >> shift) & 0xF;
    char::from_digit(nibble, 10).ok_or(EncodingError::InvalidBcdDigit {
        mask,
        shift,
        nibble,
    })
}

pub fn decode_date_mask(mask: u32) -> Result<String> {
    if (mask >> 16) & 0xFFFF == 0 {
        return Ok("*".to_string());
    }

    let mut decoded = String::with_capacity(10);
    for shift in (0..=28).rev().step_by(4) {
        decoded.push(bcd_digit(mask, shift)?);
        // After the last digit of the year and of the month
        if shift == 16 || shift == 8 {
            decoded.push('-');
            if (mask >> (shift - 8)) & 0xFF == 0 {
                decoded.push('*');
                break;
            }
        }
    }
    Ok(decoded)
}

fn letter_bits(letter: u8) -> u16 {
    (letter.to_ascii_uppercase() - b'A') as u16 & LETTER_MASK
}

/// Packs an ISO 639 language code or ISO 3166-1 alpha-2 country code, case-insensitive
pub fn encode_letter_code(code: &str) -> Result<u16> {
    match code.as_bytes() {
        [first, second] if first.is_ascii_alphabetic() && second.is_ascii_alphabetic() => {
            Ok(letter_bits(*first) << LETTER_BITS | letter_bits(*second))
        }
        _ => Err(EncodingError::InvalidLetterCode(code.to_string())),
    }
}

/// Always upper-case
pub fn decode_letter_code(code: u16) -> String {
    [(code >> LETTER_BITS) & LETTER_MASK, code & LETTER_MASK]
        .iter()
        .map(|bits| (b'A' + *bits as u8) as char)
        .collect()
}
