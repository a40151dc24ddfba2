use crate::auction::Amount;
use thiserror::Error;

/// Everything that can go wrong when configuring an auction or bidding in it
///
/// A call that fails with any of these leaves the auction exactly as it was.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AuctionError {
    #[error("bidding increment must be positive, got {0}")]
    InvalidConfiguration(Amount),
    #[error("{field} must be a {expected}")]
    TypeMismatch {
        field: &'static str,
        expected: &'static str,
    },
    #[error("{0}")]
    InvalidBidder(&'static str),
    #[error("bidding not allowed now")]
    BiddingClosed,
    #[error("amount is invalid: {0}")]
    InvalidAmount(String),
    #[error("bid of {amount} is too low, must be at least {minimum}")]
    BidTooLow { amount: Amount, minimum: Amount },
    #[error("malformed bid request: {0}")]
    Malformed(String),
}

impl AuctionError {
    pub fn type_mismatch(field: &'static str, expected: &'static str) -> Self {
        Self::TypeMismatch { field, expected }
    }

    pub fn invalid_amount(amount: impl ToString) -> Self {
        Self::InvalidAmount(amount.to_string())
    }
}

pub type AuctionResult<T> = Result<T, AuctionError>;
