//! Type-safe price representation using decimal arithmetic.
//!
//! Prices on the storefront are single-currency (euro) and are read back out
//! of rendered product cards, so parsing is deliberately lenient: whatever
//! leading number the text carries is the price, and text without one is
//! worth zero.
//!
//! In stored carts a price is a plain JSON number, the format the page has
//! always written:
//!
//! ```json
//! {"id": "carta-01", "title": "Carta", "price": 12.5, "qty": 1}
//! ```
//!
//! Every `Price` holds the shortest decimal that survives that JSON number
//! unchanged, so a cart reloaded from storage equals the cart that was saved.

use std::fmt;
use std::iter::Sum;
use std::str::FromStr;

use rust_decimal::Decimal;
use rust_decimal::prelude::FromPrimitive;
use serde::{Deserialize, Deserializer, Serialize, Serializer, ser};

/// A non-negative euro amount.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Price(Decimal);

impl Price {
    /// Zero euros.
    pub const ZERO: Self = Self(Decimal::ZERO);

    /// Create a price, clamping negative amounts to zero.
    ///
    /// Digits beyond what a stored JSON number keeps are rounded away:
    /// `19.999999999999999999` becomes `20`.
    #[must_use]
    pub fn new(amount: Decimal) -> Self {
        let amount = amount.max(Decimal::ZERO);
        Self(to_stored(amount).and_then(from_stored).unwrap_or(amount))
    }

    /// Parse a price out of display text such as `"12,00 €"` or `"€ 9.90"`.
    ///
    /// The first occurrence of `symbol` is removed, surrounding whitespace is
    /// trimmed, and the longest leading decimal number is taken. Anything
    /// that does not start with a number (`""`, `"—"`) yields zero.
    ///
    /// ```rust
    /// # use love_letters_core::Price;
    /// assert_eq!(Price::parse_display("12.50 €", "€").to_string(), "12.5");
    /// assert_eq!(Price::parse_display("—", "€"), Price::ZERO);
    /// ```
    #[must_use]
    pub fn parse_display(text: &str, symbol: &str) -> Self {
        let stripped = if symbol.is_empty() {
            text.to_owned()
        } else {
            text.replacen(symbol, "", 1)
        };
        leading_decimal(stripped.trim()).map_or(Self::ZERO, Self::new)
    }

    /// The underlying amount.
    #[must_use]
    pub const fn amount(&self) -> Decimal {
        self.0
    }

    /// The price of `qty` units.
    ///
    /// Saturates instead of overflowing.
    #[must_use]
    pub fn times(self, qty: u32) -> Self {
        Self(
            self.0
                .checked_mul(Decimal::from(qty))
                .unwrap_or(Decimal::MAX),
        )
    }

    /// Add two prices, saturating on overflow.
    #[must_use]
    pub fn saturating_add(self, other: Self) -> Self {
        Self(self.0.checked_add(other.0).unwrap_or(Decimal::MAX))
    }
}

impl fmt::Display for Price {
    /// Formats the amount without trailing zeros: `10`, `12.5`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.normalize())
    }
}

impl Sum for Price {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, Self::saturating_add)
    }
}

impl From<Decimal> for Price {
    fn from(amount: Decimal) -> Self {
        Self::new(amount)
    }
}

impl Serialize for Price {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let value = to_stored(self.0)
            .ok_or_else(|| ser::Error::custom(format!("price {} is not a number", self.0)))?;
        serializer.serialize_f64(value)
    }
}

/// Shapes a stored price may take.
///
/// Browsers encode `NaN` as `null`, and older hand-edited carts sometimes
/// carry prices as strings.
#[derive(Deserialize)]
#[serde(untagged)]
enum StoredAmount {
    Number(f64),
    Text(String),
}

impl<'de> Deserialize<'de> for Price {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let amount = match Option::<StoredAmount>::deserialize(deserializer)? {
            Some(StoredAmount::Number(value)) => from_stored(value),
            Some(StoredAmount::Text(text)) => leading_decimal(text.trim()),
            None => None,
        };
        Ok(amount.map_or(Self::ZERO, Self::new))
    }
}

/// The `f64` nearest to `amount`.
fn to_stored(amount: Decimal) -> Option<f64> {
    f64::from_str(&amount.to_string())
        .ok()
        .filter(|value| value.is_finite())
}

/// The shortest decimal that reads back as `value`.
fn from_stored(value: f64) -> Option<Decimal> {
    if !value.is_finite() {
        return None;
    }
    Decimal::from_str(&value.to_string())
        .ok()
        .or_else(|| Decimal::from_f64(value))
}

/// Parse the longest leading decimal number of `text`.
///
/// Accepts an optional sign, integer digits, and a fractional part.
/// Returns `None` when no digit is found before the first other character.
fn leading_decimal(text: &str) -> Option<Decimal> {
    let bytes = text.as_bytes();
    let mut pos = 0;

    let negative = match bytes.first() {
        Some(b'-') => {
            pos = 1;
            true
        }
        Some(b'+') => {
            pos = 1;
            false
        }
        _ => false,
    };

    let int_start = pos;
    while bytes.get(pos).is_some_and(u8::is_ascii_digit) {
        pos += 1;
    }
    let int_digits = text.get(int_start..pos)?;

    let mut frac_digits = "";
    if bytes.get(pos) == Some(&b'.') {
        let frac_start = pos + 1;
        let mut frac_end = frac_start;
        while bytes.get(frac_end).is_some_and(u8::is_ascii_digit) {
            frac_end += 1;
        }
        frac_digits = text.get(frac_start..frac_end)?;
    }

    if int_digits.is_empty() && frac_digits.is_empty() {
        return None;
    }

    let mut normalized = String::with_capacity(int_digits.len() + frac_digits.len() + 3);
    if negative {
        normalized.push('-');
    }
    normalized.push_str(if int_digits.is_empty() { "0" } else { int_digits });
    if !frac_digits.is_empty() {
        normalized.push('.');
        normalized.push_str(frac_digits);
    }

    Decimal::from_str(&normalized).ok()
}
