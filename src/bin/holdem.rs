use anyhow::Context;
use clap::Parser;
use holdem_sim::deck::Deck;
use holdem_sim::events::log_sink;
use holdem_sim::sim::play_hand;
use holdem_sim::table::MAX_SEATS;
use log::LevelFilter;
use std::fs::File;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(author, version, about = "Deal and score Texas Hold'em hands", long_about = None)]
struct Args {
    /// Seats at the table
    #[arg(short, long, default_value_t = 9)]
    players: usize,

    /// Hands to play, each with a fresh deck and table
    #[arg(long, default_value_t = 1)]
    hands: usize,

    /// Log file, truncated on start
    #[arg(long, default_value = "logfile.log")]
    log_file: PathBuf,

    /// Lowest level written to the terminal and the log file
    #[arg(long, default_value_t = LevelFilter::Info)]
    log_level: LevelFilter,
}

fn init_logging(args: &Args) -> anyhow::Result<()> {
    let config = simplelog::ConfigBuilder::new()
        .set_location_level(LevelFilter::Off)
        .set_target_level(LevelFilter::Off)
        .set_thread_level(LevelFilter::Off)
        .build();
    let file = File::create(&args.log_file)
        .with_context(|| format!("create log file {}", args.log_file.display()))?;
    let term = simplelog::TermLogger::new(
        args.log_level,
        config.clone(),
        simplelog::TerminalMode::Stdout,
        simplelog::ColorChoice::Auto,
    );
    let file = simplelog::WriteLogger::new(args.log_level, config, file);
    simplelog::CombinedLogger::init(vec![term, file]).context("initialize logger")?;
    Ok(())
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    if args.players == 0 || args.players > MAX_SEATS {
        anyhow::bail!("--players must be between 1 and {MAX_SEATS}, got {}", args.players);
    }
    init_logging(&args)?;
    log::info!("holdem-sim {}", holdem_sim::VERSION);

    for hand in 1..=args.hands {
        log::info!("Hand {hand} of {}", args.hands);
        let mut deck = Deck::new();
        let outcome = play_hand(args.players, &mut deck, log_sink())
            .with_context(|| format!("hand {hand} failed"))?;
        if let Some(best) = outcome.winning_result() {
            log::info!("Hand {hand} won by player {} with a {}.", best.seat, best.category);
        }
    }
    Ok(())
}
