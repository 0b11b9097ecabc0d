//! # Money Module
//!
//! Provides the `Money` type used for product prices.
//!
//! ## Why Integer Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                             │
//! │                                                                         │
//! │  The price field arrives as text: "29.99"                               │
//! │  parseFloat("29.99") * 100 = 2998.9999999999995  ❌                     │
//! │                                                                         │
//! │  OUR SOLUTION: parse the decimal text straight into integer cents       │
//! │    "29.99"  → 2999                                                      │
//! │    "12.345" → 1235 (half-up at the third decimal)                       │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use catalog_core::money::Money;
//!
//! let price = Money::parse_non_negative("999.99").unwrap();
//! assert_eq!(price.cents(), 99999);
//! assert_eq!(price.to_decimal_string(), "999.99");
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use ts_rs::TS;

// =============================================================================
// Money Type
// =============================================================================

/// A monetary value in the smallest currency unit (cents).
///
/// Catalog prices are never negative; the validator rejects negative input
/// before a `Money` is ever built from form text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from cents.
    #[inline]
    pub const fn from_cents(cents: i64) -> Self {
        Money(cents)
    }

    /// Returns the value in cents.
    #[inline]
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Returns the whole-rupee part (truncates toward zero).
    #[inline]
    pub const fn major(&self) -> i64 {
        self.0 / 100
    }

    /// Returns the paise part (always 0-99).
    #[inline]
    pub const fn cents_part(&self) -> i64 {
        (self.0 % 100).abs()
    }

    /// Zero money. A price of zero is a valid (free) price.
    #[inline]
    pub const fn zero() -> Self {
        Money(0)
    }

    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Parses decimal text from the price field into cents.
    ///
    /// ## Accepted Forms
    /// `"12"`, `"12.5"`, `"12.50"`, `".5"`, `"5."`, `"+3"`, with surrounding
    /// whitespace, and exponent forms such as `"1e3"` or `"1.5E-2"`. Digits
    /// past the second decimal round half-up.
    ///
    /// ## Rejected Forms
    /// - Anything that is not a decimal number (`"abc"`, `"1,5"`, `"1e"`)
    /// - Negative values (`"-5"`, `"-0.001"`); `"-0"` is zero and accepted
    /// - Values that overflow `i64` cents
    ///
    /// ## Example
    /// ```rust
    /// use catalog_core::money::Money;
    ///
    /// assert_eq!(Money::parse_non_negative("12.345").unwrap().cents(), 1235);
    /// assert_eq!(Money::parse_non_negative("1.5e2").unwrap().cents(), 15000);
    /// assert!(Money::parse_non_negative("-5").is_none());
    /// assert!(Money::parse_non_negative("ten").is_none());
    /// ```
    pub fn parse_non_negative(input: &str) -> Option<Money> {
        let text = input.trim();
        let (negative, number) = match text.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, text.strip_prefix('+').unwrap_or(text)),
        };

        let (mantissa, exponent) = match number.find(|c: char| c == 'e' || c == 'E') {
            Some(at) => (&number[..at], parse_exponent(&number[at + 1..])?),
            None => (number, 0),
        };

        let (whole, frac) = mantissa.split_once('.').unwrap_or((mantissa, ""));
        if whole.is_empty() && frac.is_empty() {
            return None;
        }
        if !whole.bytes().all(|b| b.is_ascii_digit()) || !frac.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }

        // "-0.00" is a signed zero, anything else with a minus sign is negative
        if negative && mantissa.bytes().any(|b| matches!(b, b'1'..=b'9')) {
            return None;
        }

        // The exponent only moves the decimal point within the digit string.
        let digits: Vec<i64> = whole
            .bytes()
            .chain(frac.bytes())
            .map(|b| i64::from(b - b'0'))
            .collect();
        let digit_at = |k: i64| {
            usize::try_from(k)
                .ok()
                .and_then(|i| digits.get(i))
                .copied()
                .unwrap_or(0)
        };

        let len = i64::try_from(digits.len()).ok()?;
        let point = i64::try_from(whole.len()).ok()?.saturating_add(exponent);
        let cents_end = point.saturating_add(2);

        let mut cents: i64 = 0;
        let mut k = 0;
        while k < cents_end {
            // only zeros remain past the digit string
            if k >= len && cents == 0 {
                break;
            }
            cents = cents.checked_mul(10)?.checked_add(digit_at(k))?;
            k += 1;
        }
        if digit_at(cents_end) >= 5 {
            cents = cents.checked_add(1)?;
        }

        Some(Money(cents))
    }

    /// Renders the value as plain decimal text (`"29.99"`), the way the
    /// price input expects it when a product is loaded for editing.
    pub fn to_decimal_string(&self) -> String {
        let sign = if self.0 < 0 { "-" } else { "" };
        format!("{}{}.{:02}", sign, self.major().abs(), self.cents_part())
    }
}

/// Parses the `[+-]digits` part after an `e`. Magnitudes beyond `i64`
/// saturate; the cents arithmetic rejects or zeroes them.
fn parse_exponent(text: &str) -> Option<i64> {
    let (negative, digits) = match text.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, text.strip_prefix('+').unwrap_or(text)),
    };
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    let magnitude = digits.parse::<i64>().unwrap_or(i64::MAX);
    Some(if negative { -magnitude } else { magnitude })
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Display shows the value with a rupee sign, the way the catalog
/// prints prices.
///
/// ## Note
/// This is for logs and debugging. The UI shell formats prices itself.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        write!(f, "{}₹{}.{:02}", sign, self.major().abs(), self.cents_part())
    }
}

impl Default for Money {
    fn default() -> Self {
        Money::zero()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
