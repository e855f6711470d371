use rand::{Rng as _, SeedableRng as _, rngs::StdRng};
use serde::Serialize;
use tilefold_engine::{Board, Direction, GameSession, GameStats, SpawnSeed};

/// Move order of the cycling policy; a decent mechanical baseline that
/// keeps the big tiles in a corner.
const CYCLE_ORDER: [Direction; 4] = [
    Direction::Left,
    Direction::Down,
    Direction::Right,
    Direction::Up,
];

#[derive(Debug, Clone, clap::Args)]
pub(crate) struct SimArg {
    /// Number of games to run
    #[clap(long, default_value_t = 100)]
    episodes: usize,
    /// Board dimension
    #[clap(long, default_value_t = Board::DEFAULT_SIZE)]
    size: usize,
    /// Master seed for per-episode spawn seeds and policy draws
    #[clap(long, default_value_t = 42)]
    seed: u64,
    /// Move selection policy
    #[clap(long, value_enum, default_value_t = Policy::Random)]
    policy: Policy,
    /// Stop an episode after this many turns (0 = unlimited)
    #[clap(long, default_value_t = 10_000)]
    max_turns: usize,
    /// Print one JSON line per episode
    #[clap(long)]
    verbose: bool,
}

#[derive(Debug, Clone, Copy, clap::ValueEnum)]
enum Policy {
    /// Uniformly random directions
    Random,
    /// Cycle Left, Down, Right, Up
    Cycle,
}

#[derive(Debug, Serialize)]
struct EpisodeReport {
    episode: usize,
    spawn_seed: SpawnSeed,
    #[serde(flatten)]
    stats: GameStats,
    max_tile: u32,
    game_over: bool,
}

#[derive(Debug, Serialize)]
struct Summary {
    episodes: usize,
    seed: u64,
    mean_score: f64,
    max_score: u64,
    mean_turns: f64,
    max_tile: u32,
}

impl Summary {
    #[expect(clippy::cast_precision_loss)]
    fn from_reports(seed: u64, reports: &[EpisodeReport]) -> Self {
        let total_score: u64 = reports.iter().map(|r| r.stats.score()).sum();
        let total_turns: usize = reports.iter().map(|r| r.stats.turns()).sum();
        let count = reports.len().max(1);
        Self {
            episodes: reports.len(),
            seed,
            mean_score: total_score as f64 / count as f64,
            max_score: reports.iter().map(|r| r.stats.score()).max().unwrap_or(0),
            mean_turns: total_turns as f64 / count as f64,
            max_tile: reports.iter().map(|r| r.max_tile).max().unwrap_or(0),
        }
    }
}

pub(crate) fn run(arg: &SimArg) -> anyhow::Result<()> {
    let SimArg {
        episodes,
        size,
        seed,
        policy,
        max_turns,
        verbose,
    } = arg;

    let mut rng = StdRng::seed_from_u64(*seed);
    let mut reports = Vec::with_capacity(*episodes);

    for episode in 0..*episodes {
        let spawn_seed: SpawnSeed = rng.random();
        let mut session = GameSession::with_seed(*size, spawn_seed)?;

        let mut turn = 0;
        while session.session_state().is_playing() && (*max_turns == 0 || turn < *max_turns) {
            let direction = match policy {
                Policy::Random => Direction::ALL[rng.random_range(0..Direction::ALL.len())],
                Policy::Cycle => CYCLE_ORDER[turn % CYCLE_ORDER.len()],
            };
            session.advance(direction);
            turn += 1;
        }

        let report = EpisodeReport {
            episode,
            spawn_seed,
            stats: session.stats().clone(),
            max_tile: session.board().max_tile(),
            game_over: session.session_state().is_game_over(),
        };
        if *verbose {
            println!("{}", serde_json::to_string(&report)?);
        }
        reports.push(report);

        if (episode + 1) % 100 == 0 {
            eprintln!("finished {}/{episodes} episodes", episode + 1);
        }
    }

    let summary = Summary::from_reports(*seed, &reports);
    println!("{}", serde_json::to_string_pretty(&summary)?);
    Ok(())
}
