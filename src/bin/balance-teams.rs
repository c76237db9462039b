//! Balanced teams from a roster file.
//!
//! # Usage
//!
//! ```sh
//! balance-teams --roster players.json --teams 2 --format 8 --bib --share
//! balance-teams --roster players.json --teams 3 --per-team 4 --seed 42 \
//!     --pick ed --pick ky --pick ...
//! ```
//!
//! The roster is a JSON array of participants
//! (`{"id", "name", "rating", "position", "realGK", "canPlayGK"}`).

use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use bevy_prng::WyRand;
use clap::Parser;
use rand_core::SeedableRng;
use tracing::info;

use team_balance::report::{Summary, pick_bib, share_message};
use team_balance::{BalanceConfig, MatchFormat, Roster, balance_with};

/// Command line arguments.
#[derive(Parser, Debug)]
#[command(name = "balance-teams")]
#[command(about = "Split a rated roster into evenly matched teams")]
struct Args {
    /// Roster JSON file.
    #[arg(short, long, env = "TEAM_BALANCE_ROSTER")]
    roster: PathBuf,

    /// Number of teams.
    #[arg(short, long, default_value_t = 2)]
    teams: usize,

    /// Preset side size: 5, 6, 7, 8 or 11.
    #[arg(short, long, conflicts_with = "per_team")]
    format: Option<usize>,

    /// Custom side size (at least 3).
    #[arg(long)]
    per_team: Option<usize>,

    /// Participant ids to play; defaults to the whole roster.
    #[arg(short, long)]
    pick: Vec<String>,

    /// Seed for reproducible teams; random when omitted.
    #[arg(short, long)]
    seed: Option<u64>,

    /// JSON file overriding optimizer settings.
    #[arg(short, long, env = "TEAM_BALANCE_CONFIG")]
    config: Option<PathBuf>,

    /// Pick one team at random to wear bibs.
    #[arg(long)]
    bib: bool,

    /// Print the chat message instead of the summary table.
    #[arg(long)]
    share: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    let format = match (args.format, args.per_team) {
        (Some(n), _) => match MatchFormat::from_size(n) {
            MatchFormat::Custom(_) => bail!("unknown preset format {n}; use --per-team for custom sizes"),
            preset => preset,
        },
        (None, Some(n)) => MatchFormat::Custom(n),
        (None, None) => MatchFormat::default(),
    };

    let cfg = match &args.config {
        Some(path) => BalanceConfig::from_path(path)
            .with_context(|| format!("loading config {}", path.display()))?,
        None => BalanceConfig::default(),
    };

    let roster = Roster::from_path(&args.roster)
        .with_context(|| format!("loading roster {}", args.roster.display()))?;
    let players = if args.pick.is_empty() {
        roster.players().to_vec()
    } else {
        roster.select(&args.pick).context("selecting players")?
    };

    let per_team = format.per_team();
    let needed = format.required_players(args.teams);
    if players.len() != needed {
        bail!(
            "{} needs {} players for {} teams, got {}",
            format,
            needed,
            args.teams,
            players.len()
        );
    }

    let mut rng = match args.seed {
        Some(seed) => WyRand::from_seed(seed.to_le_bytes()),
        None => WyRand::from_os_rng(),
    };

    info!(teams = args.teams, per_team, players = players.len(), "balancing");
    let balanced = balance_with(&players, args.teams, per_team, &cfg, &mut rng)?;
    info!(score = balanced.score, starts = balanced.runs.len(), "done");

    let bib = if args.bib { pick_bib(&mut rng, balanced.teams.len()) } else { None };
    if args.share {
        println!("{}", share_message(&balanced.teams, bib));
    } else {
        println!("{}", Summary::new(&balanced.teams));
        if let Some(b) = bib {
            println!("bibs: Team {}", b + 1);
        }
    }
    Ok(())
}
