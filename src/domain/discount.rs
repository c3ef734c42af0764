use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::debug;

/// Percentage at or above which a discount is granted.
pub const DISCOUNT_THRESHOLD: Decimal = dec!(20);

const ONE_HUNDRED: Decimal = dec!(100);

/// A monetary amount.
///
/// No currency and no rounding rule are attached: the wrapped `Decimal` is
/// carried through the calculation as-is. Negative prices are accepted.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Price(pub Decimal);

impl Price {
    pub const ZERO: Self = Self(Decimal::ZERO);

    pub fn new(amount: Decimal) -> Self {
        Self(amount)
    }

    pub fn value(&self) -> Decimal {
        self.0
    }
}

impl From<Decimal> for Price {
    fn from(value: Decimal) -> Self {
        Self(value)
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.normalize())
    }
}

/// A discount expressed in percent (`20` means 20%).
///
/// Values outside `[0, 100]` are not rejected; they are computed arithmetically.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DiscountPercent(pub Decimal);

impl DiscountPercent {
    pub fn new(percent: Decimal) -> Self {
        Self(percent)
    }

    pub fn value(&self) -> Decimal {
        self.0
    }

    /// Whether this percentage reaches the discount threshold.
    pub fn qualifies(&self) -> bool {
        self.0 >= DISCOUNT_THRESHOLD
    }
}

impl From<Decimal> for DiscountPercent {
    fn from(value: Decimal) -> Self {
        Self(value)
    }
}

impl fmt::Display for DiscountPercent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.normalize())
    }
}

/// Applies `discount_percent` to `price` when it reaches the threshold.
///
/// Below [`DISCOUNT_THRESHOLD`] the price is returned unchanged. Results beyond
/// the `Decimal` range saturate at its bounds.
pub fn apply_discount(price: Price, discount_percent: DiscountPercent) -> Price {
    if !discount_percent.qualifies() {
        debug!(%price, %discount_percent, "below discount threshold");
        return price;
    }

    // price - price * percent / 100
    let remaining = Decimal::ONE - discount_percent.0 / ONE_HUNDRED;
    let final_price = Price(price.0.saturating_mul(remaining));
    debug!(%price, %discount_percent, %final_price, "discount applied");
    final_price
}

/// Outcome of a single discount evaluation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Quote {
    pub original: Price,
    pub final_price: Price,
}

impl Quote {
    /// True when the final price differs from the original one.
    ///
    /// A qualifying discount on a zero price yields `false`.
    pub fn discounted(&self) -> bool {
        self.final_price != self.original
    }
}

pub fn quote(price: Price, discount_percent: DiscountPercent) -> Quote {
    Quote {
        original: price,
        final_price: apply_discount(price, discount_percent),
    }
}
