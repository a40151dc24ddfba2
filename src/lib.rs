pub mod auction;
pub mod console;
pub mod error;
pub mod request;
pub mod shared;

pub use self::auction::{Amount, Auction};
pub use self::error::{AuctionError, AuctionResult};
pub use self::shared::SharedAuction;

#[cfg(test)]
mod tests;
