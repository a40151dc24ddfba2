use super::open_auction;
use crate::error::AuctionError;
use crate::request::BidRequest;
use anyhow::Result;
use rust_decimal_macros::dec;
use serde_json::json;

#[test]
fn accepts_integer_and_float_amounts() -> Result<()> {
    assert_eq!(
        BidRequest::from_values(&json!("alice"), &json!(10))?,
        BidRequest::new("alice", dec!(10))
    );
    assert_eq!(
        BidRequest::from_values(&json!("alice"), &json!(10.5))?,
        BidRequest::new("alice", dec!(10.5))
    );
    assert_eq!(
        BidRequest::from_values(&json!("alice"), &json!(u64::MAX))?.amount,
        rust_decimal::Decimal::from(u64::MAX)
    );
    Ok(())
}

#[test]
fn non_string_bidder_is_a_type_mismatch() {
    for bidder in [json!(42), json!(null), json!(["alice"]), json!({"name": "alice"})] {
        assert_eq!(
            BidRequest::from_values(&bidder, &json!(10)),
            Err(AuctionError::type_mismatch("bidder", "string"))
        );
    }
}

#[test]
fn non_numeric_amount_is_a_type_mismatch() {
    for amount in [json!("10"), json!(null), json!(true), json!([10])] {
        assert_eq!(
            BidRequest::from_values(&json!("alice"), &amount),
            Err(AuctionError::type_mismatch("amount", "number"))
        );
    }
}

#[test]
fn parses_json_objects() -> Result<()> {
    assert_eq!(
        BidRequest::from_json(r#"{"bidder": " harry  hacker", "amount": 25}"#)?,
        BidRequest::new(" harry  hacker", dec!(25))
    );
    assert!(matches!(
        BidRequest::from_json(r#"{"bidder": "alice", "amount": "25"}"#),
        Err(AuctionError::TypeMismatch { field: "amount", .. })
    ));
    Ok(())
}

#[test]
fn malformed_json_is_reported() {
    for json in [
        "{",
        "[1, 2]",
        r#"{"bidder": "alice"}"#,
        r#"{"amount": 3}"#,
    ] {
        assert!(matches!(
            BidRequest::from_json(json),
            Err(AuctionError::Malformed(_))
        ));
    }
}

#[test]
fn requests_go_through_the_auction_rules() -> Result<()> {
    let mut auction = open_auction(dec!(10))?;

    auction.submit(BidRequest::from_json(r#"{"bidder": "alice", "amount": 10}"#)?)?;
    assert!(matches!(
        auction.submit(BidRequest::from_values(&json!("bob"), &json!(15.0))?),
        Err(AuctionError::BidTooLow { .. })
    ));
    assert!(matches!(
        auction.submit(BidRequest::from_values(&json!("  "), &json!(50))?),
        Err(AuctionError::InvalidBidder(_))
    ));

    assert_eq!(auction.winner(), "Alice");
    assert_eq!(auction.best_bid(), dec!(10));
    Ok(())
}
