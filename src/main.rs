//! Simulates a CPU-vs-CPU battle between two teams and prints the log.

use anyhow::{Context, Result};
use clap::Parser;
use critter_clash::{BattleRunner, MoveCatalog, SpeciesCatalog, Team, TurnRng};
use std::path::PathBuf;

/// Run a random-AI battle between two teams of critters
#[derive(Parser, Debug)]
#[command(name = "critter-clash", version)]
struct Args {
    /// Seed for the battle RNG (random if omitted)
    #[arg(long)]
    seed: Option<u64>,

    /// Directory holding moves.ron and species.ron (built-in data if omitted)
    #[arg(long)]
    data_dir: Option<PathBuf>,

    /// Stop after this many turns even if nobody has won
    #[arg(long, default_value = "200")]
    max_turns: u32,

    /// Print the whole log as JSON instead of text
    #[arg(long)]
    json: bool,

    /// Comma-separated species ids for the first team
    #[arg(long, default_value = "jumpingSpider,puffballMushroom,dragonfly")]
    team_a: String,

    /// Comma-separated species ids for the second team
    #[arg(long, default_value = "dragonfly,jumpingSpider,puffballMushroom")]
    team_b: String,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::WARN.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    let (moves, species) = match &args.data_dir {
        Some(dir) => {
            let moves = MoveCatalog::load_from_dir(dir)
                .with_context(|| format!("loading moves from {}", dir.display()))?;
            let species = SpeciesCatalog::load_from_dir(dir)
                .with_context(|| format!("loading species from {}", dir.display()))?;
            (moves, species)
        }
        None => (MoveCatalog::builtin().clone(), SpeciesCatalog::builtin().clone()),
    };
    species.validate_against(&moves)?;

    let team_a = build_team("Team Meadow", "a", &args.team_a, &species)?;
    let team_b = build_team("Team Hollow", "b", &args.team_b, &species)?;

    let mut rng = match args.seed {
        Some(seed) => TurnRng::seeded(seed),
        None => TurnRng::new_random(),
    };
    tracing::info!(seed = ?args.seed, max_turns = args.max_turns, "starting battle");

    let mut runner = BattleRunner::new(&moves, team_a, team_b);
    let winner = runner.run_to_completion(&mut rng, args.max_turns)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(runner.log())?);
    } else {
        for message in runner.log() {
            println!("{}", message);
        }
        if winner.is_none() {
            println!("No winner after {} turns.", runner.turn_number());
        }
    }

    Ok(())
}

fn build_team(name: &str, prefix: &str, ids: &str, species: &SpeciesCatalog) -> Result<Team> {
    let members = ids
        .split(',')
        .map(str::trim)
        .filter(|id| !id.is_empty())
        .enumerate()
        .map(|(slot, species_id)| {
            species
                .spawn(format!("{}-{}", prefix, slot), species_id)
                .with_context(|| format!("unknown species '{}'", species_id))
        })
        .collect::<Result<Vec<_>>>()?;
    anyhow::ensure!(!members.is_empty(), "{} has no members", name);
    Ok(Team::new(name, members))
}
