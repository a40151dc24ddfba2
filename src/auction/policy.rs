//! Bid acceptance policies
//!
//! Before recording a bid the auction asks its policy whether the bid
//! may stand. Only [`StandardPolicy`] implements the real rules, checked
//! in this order:
//!
//! 1. bidding must be open,
//! 2. the amount must be positive,
//! 3. the amount must be at least the best bid plus the minimum increment.
//!
//! The policy also decides who the winner is, whether a new auction opens
//! right away and whether a name that normalizes to nothing is refused.
//! The default hooks do what a correct auction does.
//!
//! Every other policy bends exactly one of these rules. They are meant for
//! checking that a test suite can tell a correct auction from a broken
//! one, and are only ever used when a caller asks for them by name.
use super::{Amount, Auction, BidderNameRef};
use crate::error::{AuctionError, AuctionResult};
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};
use thiserror::Error;

/// Outcome of a check that did not fail outright
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Verdict {
    Accept,
    /// Drop the bid without reporting an error
    Reject,
}

pub trait AcceptancePolicy: fmt::Debug + Send + Sync {
    fn kind(&self) -> PolicyKind;

    fn check(
        &self,
        auction: &Auction,
        bidder: BidderNameRef,
        amount: Amount,
    ) -> AuctionResult<Verdict>;

    fn winner<'a>(&self, auction: &'a Auction) -> BidderNameRef<'a> {
        auction.highest_bidder()
    }

    fn starts_active(&self) -> bool {
        false
    }

    fn refuses_blank_names(&self) -> bool {
        true
    }
}

fn ensure_open(auction: &Auction) -> AuctionResult<()> {
    if !auction.is_active() {
        return Err(AuctionError::BiddingClosed);
    }
    Ok(())
}

fn ensure_positive(amount: Amount) -> AuctionResult<()> {
    if amount <= Amount::ZERO {
        return Err(AuctionError::invalid_amount(amount));
    }
    Ok(())
}

fn ensure_outbids(auction: &Auction, amount: Amount) -> AuctionResult<()> {
    match auction.next_valid_bid() {
        Some(minimum) if minimum <= amount => Ok(()),
        minimum => Err(AuctionError::BidTooLow {
            amount,
            minimum: minimum.unwrap_or(Amount::MAX),
        }),
    }
}

#[derive(Copy, Clone, Debug, Default)]
pub struct StandardPolicy;

impl AcceptancePolicy for StandardPolicy {
    fn kind(&self) -> PolicyKind {
        PolicyKind::Standard
    }

    fn check(
        &self,
        auction: &Auction,
        _bidder: BidderNameRef,
        amount: Amount,
    ) -> AuctionResult<Verdict> {
        ensure_open(auction)?;
        ensure_positive(amount)?;
        ensure_outbids(auction, amount)?;
        Ok(Verdict::Accept)
    }
}

/// Refuses a bid of exactly best bid plus increment
#[derive(Copy, Clone, Debug, Default)]
pub struct StrictIncrementPolicy;

impl AcceptancePolicy for StrictIncrementPolicy {
    fn kind(&self) -> PolicyKind {
        PolicyKind::StrictIncrement
    }

    fn check(
        &self,
        auction: &Auction,
        _bidder: BidderNameRef,
        amount: Amount,
    ) -> AuctionResult<Verdict> {
        ensure_open(auction)?;
        ensure_positive(amount)?;
        match auction.next_valid_bid() {
            Some(minimum) if minimum < amount => Ok(Verdict::Accept),
            minimum => Err(AuctionError::BidTooLow {
                amount,
                minimum: minimum.unwrap_or(Amount::MAX),
            }),
        }
    }
}

/// Accepts anything above the best bid, ignoring the increment
#[derive(Copy, Clone, Debug, Default)]
pub struct AnyHigherBidPolicy;

impl AcceptancePolicy for AnyHigherBidPolicy {
    fn kind(&self) -> PolicyKind {
        PolicyKind::AnyHigherBid
    }

    fn check(
        &self,
        auction: &Auction,
        _bidder: BidderNameRef,
        amount: Amount,
    ) -> AuctionResult<Verdict> {
        ensure_open(auction)?;
        ensure_positive(amount)?;
        let best = auction.best_bid();
        if amount <= best {
            return Err(AuctionError::BidTooLow {
                amount,
                minimum: best,
            });
        }
        Ok(Verdict::Accept)
    }
}

/// Takes bids even while bidding is stopped
#[derive(Copy, Clone, Debug, Default)]
pub struct IgnoresClosedPolicy;

impl AcceptancePolicy for IgnoresClosedPolicy {
    fn kind(&self) -> PolicyKind {
        PolicyKind::IgnoresClosed
    }

    fn check(
        &self,
        auction: &Auction,
        _bidder: BidderNameRef,
        amount: Amount,
    ) -> AuctionResult<Verdict> {
        ensure_positive(amount)?;
        ensure_outbids(auction, amount)?;
        Ok(Verdict::Accept)
    }
}

/// Drops invalid or too low amounts instead of reporting them
#[derive(Copy, Clone, Debug, Default)]
pub struct SilentRejectPolicy;

impl AcceptancePolicy for SilentRejectPolicy {
    fn kind(&self) -> PolicyKind {
        PolicyKind::SilentReject
    }

    fn check(
        &self,
        auction: &Auction,
        _bidder: BidderNameRef,
        amount: Amount,
    ) -> AuctionResult<Verdict> {
        ensure_open(auction)?;
        if ensure_positive(amount).is_err() || ensure_outbids(auction, amount).is_err() {
            return Ok(Verdict::Reject);
        }
        Ok(Verdict::Accept)
    }
}

/// Treats any fractional amount as a type error
#[derive(Copy, Clone, Debug, Default)]
pub struct WholeAmountsPolicy;

impl AcceptancePolicy for WholeAmountsPolicy {
    fn kind(&self) -> PolicyKind {
        PolicyKind::WholeAmounts
    }

    fn check(
        &self,
        auction: &Auction,
        bidder: BidderNameRef,
        amount: Amount,
    ) -> AuctionResult<Verdict> {
        if !amount.fract().is_zero() {
            return Err(AuctionError::type_mismatch("amount", "whole number"));
        }
        StandardPolicy.check(auction, bidder, amount)
    }
}

/// Names whoever bid last as the winner, not whoever bid highest
#[derive(Copy, Clone, Debug, Default)]
pub struct LastBidderWinsPolicy;

impl AcceptancePolicy for LastBidderWinsPolicy {
    fn kind(&self) -> PolicyKind {
        PolicyKind::LastBidderWins
    }

    fn check(
        &self,
        auction: &Auction,
        bidder: BidderNameRef,
        amount: Amount,
    ) -> AuctionResult<Verdict> {
        StandardPolicy.check(auction, bidder, amount)
    }

    fn winner<'a>(&self, auction: &'a Auction) -> BidderNameRef<'a> {
        auction.last_bidder()
    }
}

/// Opens bidding as soon as the auction is created
#[derive(Copy, Clone, Debug, Default)]
pub struct StartsActivePolicy;

impl AcceptancePolicy for StartsActivePolicy {
    fn kind(&self) -> PolicyKind {
        PolicyKind::StartsActive
    }

    fn check(
        &self,
        auction: &Auction,
        bidder: BidderNameRef,
        amount: Amount,
    ) -> AuctionResult<Verdict> {
        StandardPolicy.check(auction, bidder, amount)
    }

    fn starts_active(&self) -> bool {
        true
    }
}

/// Lets a whitespace-only name through as an empty bidder name
#[derive(Copy, Clone, Debug, Default)]
pub struct AllowsBlankNamesPolicy;

impl AcceptancePolicy for AllowsBlankNamesPolicy {
    fn kind(&self) -> PolicyKind {
        PolicyKind::AllowsBlankNames
    }

    fn check(
        &self,
        auction: &Auction,
        bidder: BidderNameRef,
        amount: Amount,
    ) -> AuctionResult<Verdict> {
        StandardPolicy.check(auction, bidder, amount)
    }

    fn refuses_blank_names(&self) -> bool {
        false
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown acceptance policy: {0}")]
pub struct UnknownPolicy(String);

/// Names of the available policies, for picking one at runtime
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PolicyKind {
    #[default]
    Standard,
    StrictIncrement,
    AnyHigherBid,
    IgnoresClosed,
    SilentReject,
    WholeAmounts,
    LastBidderWins,
    StartsActive,
    AllowsBlankNames,
}

impl PolicyKind {
    pub const ALL: [PolicyKind; 9] = [
        PolicyKind::Standard,
        PolicyKind::StrictIncrement,
        PolicyKind::AnyHigherBid,
        PolicyKind::IgnoresClosed,
        PolicyKind::SilentReject,
        PolicyKind::WholeAmounts,
        PolicyKind::LastBidderWins,
        PolicyKind::StartsActive,
        PolicyKind::AllowsBlankNames,
    ];

    pub fn as_str(self) -> &'static str {
        use PolicyKind::*;
        match self {
            Standard => "standard",
            StrictIncrement => "strict-increment",
            AnyHigherBid => "any-higher-bid",
            IgnoresClosed => "ignores-closed",
            SilentReject => "silent-reject",
            WholeAmounts => "whole-amounts",
            LastBidderWins => "last-bidder-wins",
            StartsActive => "starts-active",
            AllowsBlankNames => "allows-blank-names",
        }
    }

    pub fn into_policy(self) -> Box<dyn AcceptancePolicy> {
        use PolicyKind::*;
        match self {
            Standard => Box::new(StandardPolicy),
            StrictIncrement => Box::new(StrictIncrementPolicy),
            AnyHigherBid => Box::new(AnyHigherBidPolicy),
            IgnoresClosed => Box::new(IgnoresClosedPolicy),
            SilentReject => Box::new(SilentRejectPolicy),
            WholeAmounts => Box::new(WholeAmountsPolicy),
            LastBidderWins => Box::new(LastBidderWinsPolicy),
            StartsActive => Box::new(StartsActivePolicy),
            AllowsBlankNames => Box::new(AllowsBlankNamesPolicy),
        }
    }
}

impl fmt::Display for PolicyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PolicyKind {
    type Err = UnknownPolicy;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| UnknownPolicy(s.to_owned()))
    }
}
