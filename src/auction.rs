//! A single-item auction
//!
//! Bidders are identified by their normalized name and hold at most one
//! bid each. Whoever holds the highest bid is the winner.
mod name;
pub mod policy;

pub use self::name::normalize;
pub use self::policy::{AcceptancePolicy, PolicyKind, StandardPolicy, Verdict};

use crate::error::{AuctionError, AuctionResult};
use crate::request::BidRequest;
use rust_decimal::Decimal;
use serde::Serialize;
use std::fmt;
use tracing::debug;

pub type Amount = Decimal;
pub type BidderName = String;
pub type BidderNameRef<'s> = &'s str;

/// Key of the entry that stands in for "nobody has bid yet"
///
/// Lowercase, so it can never collide with a normalized bidder name.
pub const NO_BIDS: BidderNameRef<'static> = "no bids";

pub const DEFAULT_MIN_INCREMENT: Amount = Decimal::ONE;

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct BidEntry {
    pub bidder: BidderName,
    pub amount: Amount,
}

impl BidEntry {
    fn no_bids() -> Self {
        Self {
            bidder: NO_BIDS.to_owned(),
            amount: Amount::ZERO,
        }
    }
}

pub struct Auction {
    name: String,
    min_increment: Amount,
    // the `NO_BIDS` entry first, then bidders in the order they first bid
    bids: Vec<BidEntry>,
    // whoever made the latest attempt, accepted or not
    last_bidder: BidderName,
    active: bool,
    policy: Box<dyn AcceptancePolicy>,
}

impl Auction {
    pub fn new(name: impl Into<String>, min_increment: Amount) -> AuctionResult<Self> {
        Self::with_policy(name, min_increment, Box::new(StandardPolicy))
    }

    pub fn with_default_increment(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            min_increment: DEFAULT_MIN_INCREMENT,
            bids: vec![BidEntry::no_bids()],
            last_bidder: NO_BIDS.to_owned(),
            active: false,
            policy: Box::new(StandardPolicy),
        }
    }

    /// Create an auction that decides on bids using `policy`
    pub fn with_policy(
        name: impl Into<String>,
        min_increment: Amount,
        policy: Box<dyn AcceptancePolicy>,
    ) -> AuctionResult<Self> {
        if min_increment <= Amount::ZERO {
            return Err(AuctionError::InvalidConfiguration(min_increment));
        }

        Ok(Self {
            min_increment,
            active: policy.starts_active(),
            policy,
            ..Self::with_default_increment(name)
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn min_increment(&self) -> Amount {
        self.min_increment
    }

    pub fn policy_kind(&self) -> PolicyKind {
        self.policy.kind()
    }

    pub fn start(&mut self) {
        if !self.active {
            debug!(auction = %self.name, "bidding opened");
        }
        self.active = true;
    }

    pub fn stop(&mut self) {
        if self.active {
            debug!(auction = %self.name, "bidding closed");
        }
        self.active = false;
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Submit a bid of `amount` on behalf of `bidder_name`
    ///
    /// The name is normalized first, so `" alice "` and `"Alice"` are the
    /// same bidder and the later bid replaces the earlier one.
    pub fn bid(&mut self, bidder_name: &str, amount: Amount) -> AuctionResult<()> {
        if bidder_name.is_empty() {
            return Err(AuctionError::InvalidBidder("missing bidder name"));
        }

        let bidder = normalize(bidder_name);
        if bidder.is_empty() && self.policy.refuses_blank_names() {
            return Err(AuctionError::InvalidBidder("bidder name may not be blank"));
        }

        self.last_bidder.clone_from(&bidder);
        match self.policy.check(self, &bidder, amount)? {
            Verdict::Accept => self.record(bidder, amount),
            Verdict::Reject => {
                debug!(auction = %self.name, %bidder, %amount, "bid quietly rejected");
            }
        }
        Ok(())
    }

    pub fn submit(&mut self, request: BidRequest) -> AuctionResult<()> {
        self.bid(&request.bidder, request.amount)
    }

    fn record(&mut self, bidder: BidderName, amount: Amount) {
        debug!(auction = %self.name, %bidder, %amount, "bid accepted");
        match self.bids.iter_mut().find(|entry| entry.bidder == bidder) {
            Some(entry) => entry.amount = amount,
            None => self.bids.push(BidEntry { bidder, amount }),
        }
    }

    pub fn best_bid(&self) -> Amount {
        self.bids
            .iter()
            .map(|entry| entry.amount)
            .max()
            .unwrap_or(Amount::ZERO)
    }

    /// Smallest amount that would still beat the current best bid
    ///
    /// `None` if that amount is not representable.
    pub fn next_valid_bid(&self) -> Option<Amount> {
        self.best_bid().checked_add(self.min_increment)
    }

    /// Name of the winning bidder, as decided by the policy
    ///
    /// With the standard policy this is [`Auction::highest_bidder`].
    pub fn winner(&self) -> BidderNameRef<'_> {
        self.policy.winner(self)
    }

    /// Name of the bidder holding the best bid
    ///
    /// On a tie the bidder who entered the auction first wins. Returns
    /// [`NO_BIDS`] while nobody has bid.
    pub fn highest_bidder(&self) -> BidderNameRef<'_> {
        let best = self.best_bid();
        self.bids
            .iter()
            .find(|entry| entry.amount == best)
            .map(|entry| entry.bidder.as_str())
            .unwrap_or(NO_BIDS)
    }

    /// Real bids, in the order bidders first entered
    pub fn bids(&self) -> &[BidEntry] {
        self.bids.get(1..).unwrap_or(&[])
    }

    pub fn has_bids(&self) -> bool {
        !self.bids().is_empty()
    }

    /// Bidder of the latest well-formed bid, even a refused one
    pub fn last_bidder(&self) -> BidderNameRef<'_> {
        &self.last_bidder
    }
}

impl fmt::Debug for Auction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.min_increment == DEFAULT_MIN_INCREMENT {
            write!(f, "Auction({:?})", self.name)
        } else {
            write!(f, "Auction({:?}, min_increment={})", self.name, self.min_increment)
        }
    }
}

impl fmt::Display for Auction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Auction for {}", self.name)
    }
}
