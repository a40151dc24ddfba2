//! Loosely typed bid requests
//!
//! Bids that arrive as JSON (or any other dynamically typed source) are
//! checked here, before they reach the auction. This is the only place a
//! bidder name that is not a string or an amount that is not a number can
//! show up, and it is reported as [`AuctionError::TypeMismatch`].
use crate::auction::{Amount, BidderName};
use crate::error::{AuctionError, AuctionResult};
use serde_json::{Number, Value};

pub const BIDDER_FIELD: &str = "bidder";
pub const AMOUNT_FIELD: &str = "amount";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BidRequest {
    /// As submitted, not yet normalized
    pub bidder: BidderName,
    pub amount: Amount,
}

impl BidRequest {
    pub fn new(bidder: impl Into<BidderName>, amount: Amount) -> Self {
        Self {
            bidder: bidder.into(),
            amount,
        }
    }

    pub fn from_values(bidder: &Value, amount: &Value) -> AuctionResult<Self> {
        let bidder = bidder
            .as_str()
            .ok_or_else(|| AuctionError::type_mismatch(BIDDER_FIELD, "string"))?;
        let amount = match amount {
            Value::Number(number) => amount_from_number(number)?,
            _ => return Err(AuctionError::type_mismatch(AMOUNT_FIELD, "number")),
        };
        Ok(Self::new(bidder, amount))
    }

    /// Parse a `{"bidder": ..., "amount": ...}` object
    pub fn from_json(json: &str) -> AuctionResult<Self> {
        let value: Value =
            serde_json::from_str(json).map_err(|e| AuctionError::Malformed(e.to_string()))?;
        let object = value
            .as_object()
            .ok_or_else(|| AuctionError::Malformed("expected a JSON object".to_owned()))?;

        let field = |name: &str| {
            object
                .get(name)
                .ok_or_else(|| AuctionError::Malformed(format!("missing field `{name}`")))
        };
        Self::from_values(field(BIDDER_FIELD)?, field(AMOUNT_FIELD)?)
    }
}

fn amount_from_number(number: &Number) -> AuctionResult<Amount> {
    if let Some(i) = number.as_i64() {
        return Ok(Amount::from(i));
    }
    if let Some(u) = number.as_u64() {
        return Ok(Amount::from(u));
    }
    number
        .as_f64()
        .and_then(|f| Amount::try_from(f).ok())
        .ok_or_else(|| AuctionError::invalid_amount(number))
}
