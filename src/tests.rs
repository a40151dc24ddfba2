mod console;
mod request;

use crate::auction::{Amount, Auction, BidEntry};
use anyhow::Result;

/// A started auction with the standard rules
fn open_auction(min_increment: Amount) -> Result<Auction> {
    let mut auction = Auction::new("Tesla Model Y", min_increment)?;
    auction.start();
    Ok(auction)
}

/// Everything a failed bid must leave untouched
fn snapshot(auction: &Auction) -> (bool, Vec<BidEntry>, Amount) {
    (auction.is_active(), auction.bids().to_vec(), auction.best_bid())
}
