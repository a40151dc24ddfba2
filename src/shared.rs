//! Thread-safe handle to a single auction
//!
//! `Auction::bid` reads the best bid and then writes the new one, so two
//! threads bidding at once could both clear the same minimum. Every call
//! through [`SharedAuction`] holds one lock for the whole operation.
use crate::auction::{Amount, Auction, BidEntry, BidderName};
use crate::error::AuctionResult;
use crate::request::BidRequest;
use parking_lot::{Mutex, MutexGuard};
use std::sync::Arc;

#[derive(Clone, Debug)]
pub struct SharedAuction(Arc<Mutex<Auction>>);

impl SharedAuction {
    pub fn new(auction: Auction) -> Self {
        Self(Arc::new(Mutex::new(auction)))
    }

    /// Hold the lock for several operations in a row
    pub fn lock(&self) -> MutexGuard<'_, Auction> {
        self.0.lock()
    }

    pub fn name(&self) -> String {
        self.lock().name().to_owned()
    }

    pub fn min_increment(&self) -> Amount {
        self.lock().min_increment()
    }

    pub fn start(&self) {
        self.lock().start()
    }

    pub fn stop(&self) {
        self.lock().stop()
    }

    pub fn is_active(&self) -> bool {
        self.lock().is_active()
    }

    pub fn bid(&self, bidder_name: &str, amount: Amount) -> AuctionResult<()> {
        self.lock().bid(bidder_name, amount)
    }

    pub fn submit(&self, request: BidRequest) -> AuctionResult<()> {
        self.lock().submit(request)
    }

    pub fn best_bid(&self) -> Amount {
        self.lock().best_bid()
    }

    pub fn winner(&self) -> BidderName {
        self.lock().winner().to_owned()
    }

    pub fn bids(&self) -> Vec<BidEntry> {
        self.lock().bids().to_vec()
    }
}

impl From<Auction> for SharedAuction {
    fn from(auction: Auction) -> Self {
        Self::new(auction)
    }
}
