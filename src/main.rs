use anyhow::Result;
use auction::{auction::PolicyKind, console::Console, Amount, Auction, SharedAuction};
use clap::Parser;
use tracing::{info, Level};

/// Run a single-item auction, reading commands from stdin
#[derive(Parser, Debug)]
#[command(version)]
struct Args {
    /// Item being auctioned
    #[arg(long, default_value = "item")]
    item: String,

    /// Smallest amount a new bid must add to the best bid
    #[arg(long, default_value = "1")]
    min_increment: Amount,

    /// Rules used to accept bids
    #[arg(long, default_value_t = PolicyKind::Standard)]
    policy: PolicyKind,

    /// Open bidding right away
    #[arg(long)]
    start: bool,

    /// More logging, repeat for more
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> Result<()> {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_max_level(match args.verbose {
            0 => Level::WARN,
            1 => Level::INFO,
            2 => Level::DEBUG,
            _ => Level::TRACE,
        })
        .init();

    let mut auction =
        Auction::with_policy(args.item, args.min_increment, args.policy.into_policy())?;
    if args.start {
        auction.start();
    }
    info!(%auction, policy = %args.policy, "ready");

    Console::new(SharedAuction::new(auction))
        .run(std::io::stdin().lock(), std::io::stdout().lock())
}
