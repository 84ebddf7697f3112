//! Validated position terms shared by every strategy.

use super::StrategyKind;
use crate::error::{Error, Result};
use crate::utils::{CONTRACT_MULTIPLIER, days_between, parse_calendar_date, today};
use chrono::NaiveDate;
use rust_decimal::Decimal;
use tracing::warn;

/// Position fields as they arrive from a form, before validation.
pub(crate) struct RawTerms<'a> {
    pub kind: StrategyKind,
    pub symbol: &'a str,
    pub quantity: i64,
    pub strike: Decimal,
    pub premium: Decimal,
    pub expiration: &'a str,
    pub evaluation_date: Option<&'a str>,
    pub fee: Option<Decimal>,
    pub current_price: Option<Decimal>,
}

/// The immutable, validated terms of one position.
///
/// Quantity and strike are strictly positive, premium and fee are
/// non-negative and both dates are real calendar dates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PositionTerms {
    symbol: String,
    quantity: u32,
    strike: Decimal,
    premium: Decimal,
    expiration: NaiveDate,
    evaluation_date: NaiveDate,
    fee: Decimal,
    current_price: Option<Decimal>,
}

impl PositionTerms {
    pub(crate) fn validate(raw: RawTerms<'_>) -> Result<Self> {
        Self::check(&raw).inspect_err(|err| {
            warn!(strategy = %raw.kind, symbol = raw.symbol, %err, "rejected position input");
        })
    }

    fn check(raw: &RawTerms<'_>) -> Result<Self> {
        let quantity = validate_quantity(raw.quantity)?;
        let shares = Decimal::from(quantity) * CONTRACT_MULTIPLIER;
        let strike = require_positive("strike", raw.strike)?;
        let strike_notional = require_notional("strike", strike, shares)?;
        let premium = require_non_negative("premium", raw.premium)?;
        let premium_notional = require_notional("premium", premium, shares)?;
        let fee = require_non_negative("fee", raw.fee.unwrap_or(Decimal::ZERO))?;
        require_total("fee", &[strike_notional, premium_notional, fee])?;
        let current_price = raw
            .current_price
            .map(|price| {
                let price = require_positive("current_price", price)?;
                require_notional("current_price", price, shares)?;
                Ok::<Decimal, Error>(price)
            })
            .transpose()?;
        let expiration = parse_calendar_date("expiration", raw.expiration)?;
        let evaluation_date = match raw.evaluation_date {
            Some(date) => parse_calendar_date("evaluation_date", date)?,
            None => today(),
        };

        Ok(Self {
            symbol: raw.symbol.trim().to_uppercase(),
            quantity,
            strike,
            premium,
            expiration,
            evaluation_date,
            fee,
            current_price,
        })
    }

    /// Underlying symbol, trimmed and uppercased.
    #[must_use]
    pub fn symbol(&self) -> &str {
        &self.symbol
    }

    /// Number of contracts.
    #[must_use]
    pub const fn quantity(&self) -> u32 {
        self.quantity
    }

    /// Strike price per share.
    #[must_use]
    pub const fn strike(&self) -> Decimal {
        self.strike
    }

    /// Premium per share.
    #[must_use]
    pub const fn premium(&self) -> Decimal {
        self.premium
    }

    /// Expiration date.
    #[must_use]
    pub const fn expiration(&self) -> NaiveDate {
        self.expiration
    }

    /// Date the position is evaluated at.
    #[must_use]
    pub const fn evaluation_date(&self) -> NaiveDate {
        self.evaluation_date
    }

    /// Total transaction fee for the position.
    #[must_use]
    pub const fn fee(&self) -> Decimal {
        self.fee
    }

    /// Current underlying price, if known.
    #[must_use]
    pub const fn current_price(&self) -> Option<Decimal> {
        self.current_price
    }

    /// Shares controlled: `quantity * 100`.
    #[must_use]
    pub fn shares(&self) -> Decimal {
        Decimal::from(self.quantity) * CONTRACT_MULTIPLIER
    }

    /// Premium for the whole position: `premium * 100 * quantity`.
    #[must_use]
    pub fn total_premium(&self) -> Decimal {
        self.premium * self.shares()
    }

    /// Calendar days from the evaluation date to expiration.
    #[must_use]
    pub fn days_to_expiration(&self) -> i64 {
        days_between(self.evaluation_date, self.expiration)
    }
}

fn validate_quantity(quantity: i64) -> Result<u32> {
    if quantity <= 0 {
        return Err(Error::validation(
            "quantity",
            format!("must be greater than zero, got {quantity}"),
        ));
    }
    u32::try_from(quantity)
        .map_err(|_| Error::validation("quantity", format!("{quantity} contracts is too large")))
}

/// Ensures `value > 0`.
pub(crate) fn require_positive(field: &'static str, value: Decimal) -> Result<Decimal> {
    if value <= Decimal::ZERO {
        return Err(Error::validation(
            field,
            format!("must be greater than zero, got {value}"),
        ));
    }
    Ok(value)
}

/// Position-level amount `per_share * shares`, rejected when it does not fit
/// in a `Decimal`.
pub(crate) fn require_notional(
    field: &'static str,
    per_share: Decimal,
    shares: Decimal,
) -> Result<Decimal> {
    per_share.checked_mul(shares).ok_or_else(|| {
        Error::validation(
            field,
            format!("{per_share} is too large for a position of {shares} shares"),
        )
    })
}

/// Sum of position-level amounts, rejected when it does not fit in a `Decimal`.
///
/// Every metric is a signed combination of these amounts, so a representable
/// total keeps metric computation free of overflow.
pub(crate) fn require_total(field: &'static str, amounts: &[Decimal]) -> Result<Decimal> {
    amounts
        .iter()
        .try_fold(Decimal::ZERO, |total, amount| total.checked_add(*amount))
        .ok_or_else(|| {
            Error::validation(field, "too large: position total exceeds the supported range")
        })
}

/// Ensures `value >= 0`.
pub(crate) fn require_non_negative(field: &'static str, value: Decimal) -> Result<Decimal> {
    if value < Decimal::ZERO {
        return Err(Error::validation(
            field,
            format!("must not be negative, got {value}"),
        ));
    }
    Ok(value)
}
