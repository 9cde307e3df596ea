use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum EncodingError {
    #[error("invalid date mask component '{0}' (expected a number or '*')")]
    InvalidDateComponent(String),

    #[error("nibble {nibble:#x} at bit {shift} of date mask {mask:#010x} is not a BCD digit")]
    InvalidBcdDigit { mask: u32, shift: u32, nibble: u32 },

    #[error("'{0}' is not a TON amount with at most 9 decimals")]
    InvalidAmount(String),

    #[error("'{0}' is not a two-letter code")]
    InvalidLetterCode(String),
}

pub type Result<T> = std::result::Result<T, EncodingError>;
