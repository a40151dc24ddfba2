//! Line-oriented console for driving one auction
//!
//! Each input line is one command:
//!
//! ```text
//! start | stop | status | best | winner | bids | help | quit
//! bid <amount> <bidder name>
//! {"bidder": "<name>", "amount": <number>}
//! ```
use crate::auction::{Amount, BidEntry, BidderName, PolicyKind};
use crate::error::AuctionError;
use crate::request::BidRequest;
use crate::shared::SharedAuction;
use anyhow::Result;
use std::fmt;
use std::io::{BufRead, Write};
use std::str::FromStr;
use thiserror::Error;
use tracing::{debug, warn};

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConsoleError {
    #[error("unknown command: {0} (try `help`)")]
    UnknownCommand(String),
    #[error("usage: bid <amount> <bidder name>")]
    MissingAmount,
    #[error("not a number: {0}")]
    BadAmount(String),
    #[error(transparent)]
    Auction(#[from] AuctionError),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    Start,
    Stop,
    Status,
    Bid(BidRequest),
    Best,
    Winner,
    Bids,
    Help,
    Quit,
}

impl FromStr for Command {
    type Err = ConsoleError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let line = line.trim_start();
        if line.starts_with('{') {
            return Ok(Command::Bid(BidRequest::from_json(line)?));
        }

        let (word, rest) = line.split_once(char::is_whitespace).unwrap_or((line, ""));
        Ok(match word {
            "start" => Command::Start,
            "stop" => Command::Stop,
            "status" => Command::Status,
            "best" => Command::Best,
            "winner" => Command::Winner,
            "bids" => Command::Bids,
            "help" => Command::Help,
            "quit" | "exit" => Command::Quit,
            "bid" => parse_bid(rest)?,
            other => return Err(ConsoleError::UnknownCommand(other.to_owned())),
        })
    }
}

// The bidder name is passed on untouched, normalizing it is up to the auction.
fn parse_bid(args: &str) -> Result<Command, ConsoleError> {
    let args = args.trim_start();
    if args.is_empty() {
        return Err(ConsoleError::MissingAmount);
    }
    let (amount, bidder) = args.split_once(char::is_whitespace).unwrap_or((args, ""));
    let amount =
        Amount::from_str(amount).map_err(|_| ConsoleError::BadAmount(amount.to_owned()))?;

    Ok(Command::Bid(BidRequest::new(bidder, amount)))
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Reply {
    Started,
    Stopped,
    Status {
        name: String,
        active: bool,
        min_increment: Amount,
        best_bid: Amount,
        policy: PolicyKind,
    },
    BidTaken {
        best_bid: Amount,
        winner: BidderName,
    },
    Best(Amount),
    Winner(BidderName),
    Bids(Vec<BidEntry>),
    Help,
    Quit,
}

impl fmt::Display for Reply {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Reply::Started => write!(f, "bidding is open"),
            Reply::Stopped => write!(f, "bidding is closed"),
            Reply::Status {
                name,
                active,
                min_increment,
                best_bid,
                policy,
            } => write!(
                f,
                "Auction for {name}: {}, best bid {best_bid}, min increment {min_increment}, policy {policy}",
                if *active { "open" } else { "closed" }
            ),
            Reply::BidTaken { best_bid, winner } => {
                write!(f, "best bid is now {best_bid} by {winner}")
            }
            Reply::Best(amount) => write!(f, "{amount}"),
            Reply::Winner(name) => write!(f, "{name}"),
            Reply::Bids(bids) => match serde_json::to_string(bids) {
                Ok(json) => write!(f, "{json}"),
                Err(_) => Err(fmt::Error),
            },
            Reply::Help => write!(
                f,
                "commands: start, stop, status, best, winner, bids, quit, \
                 bid <amount> <bidder name>, {{\"bidder\": <name>, \"amount\": <number>}}"
            ),
            Reply::Quit => write!(f, "bye"),
        }
    }
}

pub struct Console {
    auction: SharedAuction,
}

impl Console {
    pub fn new(auction: SharedAuction) -> Self {
        Self { auction }
    }

    pub fn execute(&mut self, command: Command) -> Result<Reply, ConsoleError> {
        debug!(?command, "command");
        Ok(match command {
            Command::Start => {
                self.auction.start();
                Reply::Started
            }
            Command::Stop => {
                self.auction.stop();
                Reply::Stopped
            }
            Command::Status => {
                let auction = self.auction.lock();
                Reply::Status {
                    name: auction.name().to_owned(),
                    active: auction.is_active(),
                    min_increment: auction.min_increment(),
                    best_bid: auction.best_bid(),
                    policy: auction.policy_kind(),
                }
            }
            Command::Bid(request) => {
                let mut auction = self.auction.lock();
                auction.submit(request)?;
                Reply::BidTaken {
                    best_bid: auction.best_bid(),
                    winner: auction.winner().to_owned(),
                }
            }
            Command::Best => Reply::Best(self.auction.best_bid()),
            Command::Winner => Reply::Winner(self.auction.winner()),
            Command::Bids => Reply::Bids(self.auction.bids()),
            Command::Help => Reply::Help,
            Command::Quit => Reply::Quit,
        })
    }

    pub fn execute_line(&mut self, line: &str) -> Result<Reply, ConsoleError> {
        let command = line.parse()?;
        self.execute(command)
    }

    /// Run commands from `input` until it ends or `quit` is read
    ///
    /// A failed command is reported on `output` and the session goes on.
    pub fn run(&mut self, input: impl BufRead, mut output: impl Write) -> Result<()> {
        for line in input.lines() {
            let line = line?;
            if line.trim().is_empty() {
                continue;
            }

            match self.execute_line(&line) {
                Ok(reply) => {
                    writeln!(output, "{reply}")?;
                    if reply == Reply::Quit {
                        break;
                    }
                }
                Err(e) => {
                    warn!(%line, error = %e, "command failed");
                    writeln!(output, "error: {e}")?;
                }
            }
        }
        output.flush()?;
        Ok(())
    }
}
