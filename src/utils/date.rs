//! Calendar dates from front matter.
//!
//! The index keeps dates as plain `YYYY-MM-DD` strings and never validates
//! them. `PostDate` is used where calendar meaning matters: the `check`
//! command (reject `2024-02-30`) and the `stats` archive years.
//!
//! ```ignore
//! let date = PostDate::parse("2024-06-15").unwrap();
//! assert_eq!(date.year, 2024);
//! assert!(PostDate::parse("2024-13-40").is_none());
//! ```

use anyhow::{Result, bail};

/// A validated `YYYY-MM-DD` date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct PostDate {
    pub year: u16,
    pub month: u8,
    pub day: u8,
}

impl PostDate {
    pub const fn new(year: u16, month: u8, day: u8) -> Self {
        Self { year, month, day }
    }

    /// Parse and validate a `YYYY-MM-DD` string.
    pub fn parse(s: &str) -> Option<Self> {
        Self::parse_strict(s).ok()
    }

    /// Like [`PostDate::parse`], but explains why `s` is not a calendar date.
    pub fn parse_strict(s: &str) -> Result<Self> {
        let Some((year, month, day)) = split_ymd(s) else {
            bail!("expected YYYY-MM-DD, got `{s}`");
        };
        let date = Self::new(year, month, day);
        date.validate()?;
        Ok(date)
    }

    /// Whether `s` has the `YYYY-MM-DD` shape, regardless of calendar validity.
    pub fn is_ymd_shaped(s: &str) -> bool {
        split_ymd(s).is_some()
    }

    #[allow(clippy::trivially_copy_pass_by_ref)] // Method style is more idiomatic
    pub fn validate(&self) -> Result<()> {
        let Self { year, month, day } = *self;

        if !(1..=12).contains(&month) {
            bail!("month is invalid: {month}");
        }

        let max_days = Self::days_in_month(year, month);
        if day == 0 || day > max_days {
            bail!("day is invalid: {day}");
        }

        Ok(())
    }

    #[inline]
    #[allow(clippy::manual_is_multiple_of)] // Manual impl for const fn
    const fn is_leap_year(year: u16) -> bool {
        year % 4 == 0 && (year % 100 != 0 || year % 400 == 0)
    }

    #[inline]
    const fn days_in_month(year: u16, month: u8) -> u8 {
        match month {
            1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
            4 | 6 | 9 | 11 => 30,
            2 if Self::is_leap_year(year) => 29,
            2 => 28,
            _ => 0,
        }
    }
}

/// Split `YYYY-MM-DD` into numbers without range checks.
fn split_ymd(s: &str) -> Option<(u16, u8, u8)> {
    let bytes = s.as_bytes();
    if bytes.len() != 10 || bytes[4] != b'-' || bytes[7] != b'-' {
        return None;
    }
    Some((
        parse_u16(&bytes[0..4])?,
        parse_u8(&bytes[5..7])?,
        parse_u8(&bytes[8..10])?,
    ))
}

/// Parse 2-digit ASCII number
#[inline]
fn parse_u8(bytes: &[u8]) -> Option<u8> {
    if bytes.len() != 2 {
        return None;
    }
    let d1 = bytes[0].wrapping_sub(b'0');
    let d2 = bytes[1].wrapping_sub(b'0');
    if d1 > 9 || d2 > 9 {
        return None;
    }
    Some(d1 * 10 + d2)
}

/// Parse 4-digit ASCII number
#[inline]
fn parse_u16(bytes: &[u8]) -> Option<u16> {
    if bytes.len() != 4 {
        return None;
    }
    let mut result = 0u16;
    for &b in bytes {
        let d = b.wrapping_sub(b'0');
        if d > 9 {
            return None;
        }
        result = result * 10 + u16::from(d);
    }
    Some(result)
}
