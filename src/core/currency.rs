use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use std::fmt;

/// Currencies accepted by the iPay88 merchant account, with their decimal precision
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Currency {
    /// Malaysian Ringgit (2 decimal places)
    MYR,
    /// US Dollar (2 decimal places)
    USD,
}

/// An amount expressed in the smallest unit of its currency (sen, cents).
///
/// Displays as a bare integer, which is the form the gateway expects in both
/// the `Amount` form field and the signature pre-image.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct MinorUnits(u64);

impl MinorUnits {
    pub fn value(&self) -> u64 {
        self.0
    }
}

impl From<u64> for MinorUnits {
    fn from(value: u64) -> Self {
        MinorUnits(value)
    }
}

impl fmt::Display for MinorUnits {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Currency {
    /// Returns the decimal scale for this currency
    pub fn scale(&self) -> u32 {
        match self {
            Currency::MYR | Currency::USD => 2,
        }
    }

    /// Converts a major-unit amount into minor units.
    ///
    /// Fractions of a minor unit round half away from zero, so `0.005` MYR
    /// becomes `1` sen. Returns `None` for negative amounts or when the
    /// result does not fit in a `u64`.
    pub fn to_minor_units(&self, amount: Decimal) -> Option<MinorUnits> {
        if amount.is_sign_negative() && !amount.is_zero() {
            return None;
        }

        let factor = Decimal::from(10u64.pow(self.scale()));
        amount
            .checked_mul(factor)?
            .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
            .to_u64()
            .map(MinorUnits)
    }

    /// Returns the smallest unit for this currency
    pub fn smallest_unit(&self) -> Decimal {
        Decimal::new(1, self.scale())
    }

    /// ISO 4217 code as sent to the gateway
    pub fn code(&self) -> &'static str {
        match self {
            Currency::MYR => "MYR",
            Currency::USD => "USD",
        }
    }
}

impl Default for Currency {
    fn default() -> Self {
        Currency::MYR
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl std::str::FromStr for Currency {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "MYR" => Ok(Currency::MYR),
            "USD" => Ok(Currency::USD),
            _ => Err(format!("Invalid currency: {}", s)),
        }
    }
}
