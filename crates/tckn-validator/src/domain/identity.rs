//! # Identity Number
//!
//! Structural and check-digit validation of the 11-digit T.C. Kimlik No.
//!
//! With digits `d[0]..d[10]`:
//!
//! | Rule | Check |
//! |------|-------|
//! | Shape | exactly 11 ASCII digits, `d[0] != 0` |
//! | 10th digit | `d[9] == (7 * (d[0]+d[2]+d[4]+d[6]+d[8]) - (d[1]+d[3]+d[5]+d[7])) mod 10` |
//! | 11th digit | `d[10] == (d[0] + ... + d[9]) mod 10` |
//!
//! Everything here is pure: no I/O, no allocation on the happy path.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Number of digits in an identity number.
pub const TCKN_LENGTH: usize = 11;

/// Why an identity number failed the local checks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum StructuralError {
    /// Input is not exactly 11 bytes long.
    #[error("identity number must be 11 digits, got {0} characters")]
    Length(usize),

    /// Input contains something other than `0-9`.
    #[error("identity number contains a non-digit character")]
    NonDigit,

    /// First digit is zero.
    #[error("identity number cannot start with 0")]
    LeadingZero,

    /// 10th digit does not match the weighted odd/even sum.
    #[error("tenth check digit mismatch")]
    TenthDigit,

    /// 11th digit does not match the sum of the first ten digits.
    #[error("eleventh check digit mismatch")]
    EleventhDigit,
}

/// An identity number that passed every local check.
///
/// Can only be obtained through [`IdentityNumber::parse`], so holding one is
/// proof that the checksum holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct IdentityNumber([u8; TCKN_LENGTH]);

impl IdentityNumber {
    /// Parse and validate an identity number.
    pub fn parse(input: &str) -> Result<Self, StructuralError> {
        // Byte length on purpose: any multi-byte character is a non-digit anyway.
        if input.len() != TCKN_LENGTH {
            return Err(StructuralError::Length(input.len()));
        }

        let mut digits = [0u8; TCKN_LENGTH];
        for (slot, byte) in digits.iter_mut().zip(input.bytes()) {
            if !byte.is_ascii_digit() {
                return Err(StructuralError::NonDigit);
            }
            *slot = byte - b'0';
        }

        if digits[0] == 0 {
            return Err(StructuralError::LeadingZero);
        }

        if digits[9] != tenth_check_digit(&digits) {
            return Err(StructuralError::TenthDigit);
        }

        if digits[10] != eleventh_check_digit(&digits) {
            return Err(StructuralError::EleventhDigit);
        }

        Ok(Self(digits))
    }

    /// The eleven digits, most significant first.
    pub fn digits(&self) -> &[u8; TCKN_LENGTH] {
        &self.0
    }

    /// Integer form used on the wire by the civil-registry service.
    pub fn as_u64(&self) -> u64 {
        self.0
            .iter()
            .fold(0u64, |acc, &d| acc * 10 + u64::from(d))
    }

    /// Log-safe rendering: first three and last two digits only.
    pub fn masked(&self) -> String {
        let s = self.to_string();
        format!("{}******{}", &s[..3], &s[9..])
    }
}

impl fmt::Display for IdentityNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for d in self.0 {
            write!(f, "{}", d)?;
        }
        Ok(())
    }
}

impl FromStr for IdentityNumber {
    type Err = StructuralError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

/// Boolean form of the checksum test. Malformed input simply yields `false`.
pub fn is_valid_tckn(input: &str) -> bool {
    IdentityNumber::parse(input).is_ok()
}

fn tenth_check_digit(digits: &[u8; TCKN_LENGTH]) -> u8 {
    let odd: i32 = digits[0..9].iter().step_by(2).map(|&d| i32::from(d)).sum();
    let even: i32 = digits[1..8].iter().step_by(2).map(|&d| i32::from(d)).sum();
    // rem_euclid keeps the result in 0..=9 when 7*odd < even
    (odd * 7 - even).rem_euclid(10) as u8
}

fn eleventh_check_digit(digits: &[u8; TCKN_LENGTH]) -> u8 {
    let sum: u32 = digits[..10].iter().map(|&d| u32::from(d)).sum();
    (sum % 10) as u8
}
