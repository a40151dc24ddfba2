use crate::auction::{Auction, BidEntry, PolicyKind};
use crate::console::{Command, Console, ConsoleError, Reply};
use crate::error::AuctionError;
use crate::request::BidRequest;
use crate::shared::SharedAuction;
use anyhow::Result;
use rust_decimal_macros::dec;
use std::io::Cursor;

fn console(min_increment: rust_decimal::Decimal) -> Result<Console> {
    Ok(Console::new(SharedAuction::new(Auction::new(
        "vase",
        min_increment,
    )?)))
}

#[test]
fn parses_commands() -> Result<()> {
    assert_eq!("start".parse::<Command>()?, Command::Start);
    assert_eq!("  stop".parse::<Command>()?, Command::Stop);
    assert_eq!("exit".parse::<Command>()?, Command::Quit);
    assert_eq!(
        "bid 12.5  harry   haCkeR ".parse::<Command>()?,
        Command::Bid(BidRequest::new(" harry   haCkeR ", dec!(12.5)))
    );
    assert_eq!(
        r#"{"bidder": "alice", "amount": 3}"#.parse::<Command>()?,
        Command::Bid(BidRequest::new("alice", dec!(3)))
    );
    Ok(())
}

#[test]
fn reports_bad_commands() {
    assert_eq!(
        "sell".parse::<Command>(),
        Err(ConsoleError::UnknownCommand("sell".to_owned()))
    );
    assert_eq!("bid".parse::<Command>(), Err(ConsoleError::MissingAmount));
    assert_eq!(
        "bid lots alice".parse::<Command>(),
        Err(ConsoleError::BadAmount("lots".to_owned()))
    );
    assert_eq!(
        r#"{"bidder": 7, "amount": 3}"#.parse::<Command>(),
        Err(ConsoleError::Auction(AuctionError::type_mismatch(
            "bidder", "string"
        )))
    );
}

#[test]
fn bid_without_name_reaches_the_auction() -> Result<()> {
    let mut console = console(dec!(1))?;
    console.execute(Command::Start)?;
    assert!(matches!(
        console.execute_line("bid 10"),
        Err(ConsoleError::Auction(AuctionError::InvalidBidder(_)))
    ));
    Ok(())
}

#[test]
fn executes_a_bidding_session() -> Result<()> {
    let mut console = console(dec!(10))?;

    assert_eq!(
        console.execute_line("bid 10 alice"),
        Err(ConsoleError::Auction(AuctionError::BiddingClosed))
    );
    assert_eq!(console.execute_line("start")?, Reply::Started);
    assert_eq!(
        console.execute_line("bid 10 alice")?,
        Reply::BidTaken {
            best_bid: dec!(10),
            winner: "Alice".to_owned(),
        }
    );
    assert!(console.execute_line("bid 15 bob").is_err());
    console.execute_line("bid 20 bob")?;

    assert_eq!(console.execute_line("best")?, Reply::Best(dec!(20)));
    assert_eq!(console.execute_line("winner")?, Reply::Winner("Bob".to_owned()));
    assert_eq!(
        console.execute_line("bids")?,
        Reply::Bids(vec![
            BidEntry {
                bidder: "Alice".to_owned(),
                amount: dec!(10),
            },
            BidEntry {
                bidder: "Bob".to_owned(),
                amount: dec!(20),
            },
        ])
    );
    assert_eq!(
        console.execute_line("status")?,
        Reply::Status {
            name: "vase".to_owned(),
            active: true,
            min_increment: dec!(10),
            best_bid: dec!(20),
            policy: PolicyKind::Standard,
        }
    );
    Ok(())
}

#[test]
fn run_keeps_going_after_errors_and_stops_on_quit() -> Result<()> {
    let mut console = console(dec!(1))?;
    let input = Cursor::new("start\n\nbid -5 alice\nbid 3 alice\nwinner\nquit\nbid 100 bob\n");
    let mut output = Vec::new();

    console.run(input, &mut output)?;

    let output = String::from_utf8(output)?;
    let lines: Vec<_> = output.lines().collect();
    assert_eq!(
        lines,
        [
            "bidding is open",
            "error: amount is invalid: -5",
            "best bid is now 3 by Alice",
            "Alice",
            "bye",
        ]
    );
    Ok(())
}

#[test]
fn replies_render_for_people() {
    assert_eq!(
        Reply::Status {
            name: "vase".to_owned(),
            active: false,
            min_increment: dec!(1),
            best_bid: dec!(0),
            policy: PolicyKind::SilentReject,
        }
        .to_string(),
        "Auction for vase: closed, best bid 0, min increment 1, policy silent-reject"
    );
    assert_eq!(
        Reply::Bids(vec![BidEntry {
            bidder: "Alice".to_owned(),
            amount: dec!(2.5),
        }])
        .to_string(),
        r#"[{"bidder":"Alice","amount":"2.5"}]"#
    );
}
