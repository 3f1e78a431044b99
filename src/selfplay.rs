//! Self-play training and strength evaluation.
//!
//! Trains the n-tuple network with TD(0) over self-play games: each
//! side keeps the indices of its last after-state, updates them toward
//! the value seen at its next decision point, and at the end of the
//! game toward the final disc differential from its own perspective.
//! Training runs sequentially because the weight tables require an
//! exclusive owner; evaluation games against the random baseline only
//! read the tables and are played concurrently with rayon.

use std::time::Instant;

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::board::{Coord, Outcome, Player};
use crate::game::Game;
use crate::movegen;
use crate::nn::NTupleNetwork;

/// Configuration for a training run.
#[derive(Clone)]
pub struct SelfPlayConfig {
    /// Number of self-play episodes to train on.
    pub episodes: usize,
    /// TD learning rate at episode 0.
    pub learning_rate: f64,
    /// Multiplied into the learning rate after each episode.
    pub lr_decay: f64,
    /// Exploration rate at episode 0 (epsilon-greedy behavior policy).
    pub epsilon: f64,
    /// Multiplied into epsilon after each episode.
    pub epsilon_decay: f64,
    /// Random seed (0 = use entropy).
    pub seed: u64,
    /// Suppress per-episode progress output.
    pub quiet: bool,
}

impl Default for SelfPlayConfig {
    fn default() -> Self {
        SelfPlayConfig {
            episodes: 1000,
            learning_rate: 0.1,
            lr_decay: 0.999,
            epsilon: 0.1,
            epsilon_decay: 0.998,
            seed: 0,
            quiet: false,
        }
    }
}

/// Per-episode training statistics.
#[derive(Debug, Clone, Copy)]
pub struct EpisodeStats {
    /// Moves actually played (passes are implicit and not counted).
    pub moves: usize,
    /// Final disc differential, Black positive.
    pub score: i32,
    /// Mean absolute TD error across this episode's updates.
    pub mean_abs_delta: f64,
}

fn player_index(player: Player) -> usize {
    match player {
        Player::Black => 0,
        Player::White => 1,
    }
}

/// Terminal training target: the final disc differential from the
/// updating player's perspective, scaled into [-1, 1].
fn terminal_target(score: i32, player: Player) -> f64 {
    f64::from(score * player.sign()) / 64.0
}

/// Epsilon-greedy move choice over after-state values. Returns None
/// only when the mover has no legal move.
fn choose_move(
    net: &NTupleNetwork,
    game: &Game,
    epsilon: f64,
    rng: &mut SmallRng,
) -> Option<Coord> {
    let player = game.current_player();
    let moves = game.legal_moves(player);
    if moves.is_empty() {
        return None;
    }
    if epsilon > 0.0 && rng.gen::<f64>() < epsilon {
        return Some(moves[rng.gen_range(0..moves.len())]);
    }

    let mut best = moves[0];
    let mut best_value = f64::NEG_INFINITY;
    for &(row, col) in &moves {
        let mut after = *game;
        if after.play(row, col, player).is_err() {
            continue;
        }
        let value = net.value(after.board(), player);
        if value > best_value {
            best_value = value;
            best = (row, col);
        }
    }
    Some(best)
}

/// Plays one self-play episode, updating the network in place.
pub fn train_episode(
    net: &mut NTupleNetwork,
    learning_rate: f64,
    epsilon: f64,
    rng: &mut SmallRng,
) -> EpisodeStats {
    let mut game = Game::new();
    // Last after-state indices per side, awaiting their TD backup.
    let mut pending: [Option<Vec<usize>>; 2] = [None, None];
    let mut moves = 0;
    let mut abs_delta_sum = 0.0;
    let mut updates = 0;

    while !game.terminal() {
        let mover = game.current_player();

        // Back up the mover's previous after-state toward the value at
        // this decision point.
        let here = net.indices_for(game.board(), mover);
        if let Some(prev) = pending[player_index(mover)].take() {
            let target = net.value_from_indices(&here);
            abs_delta_sum += net.update(&prev, target, learning_rate).abs();
            updates += 1;
        }

        // The side to move always has a move in a non-terminal state.
        let Some((row, col)) = choose_move(net, &game, epsilon, rng) else {
            break;
        };
        if game.play(row, col, mover).is_err() {
            break;
        }
        pending[player_index(mover)] = Some(net.indices_for(game.board(), mover));
        moves += 1;
    }

    let score = game.score();
    for player in [Player::Black, Player::White] {
        if let Some(indices) = pending[player_index(player)].take() {
            let target = terminal_target(score, player);
            abs_delta_sum += net.update(&indices, target, learning_rate).abs();
            updates += 1;
        }
    }

    EpisodeStats {
        moves,
        score,
        mean_abs_delta: if updates > 0 {
            abs_delta_sum / updates as f64
        } else {
            0.0
        },
    }
}

/// Runs a full training session from a zero-initialized network.
pub fn train(config: &SelfPlayConfig) -> (NTupleNetwork, Vec<EpisodeStats>) {
    let mut net = NTupleNetwork::new();
    let stats = train_existing(&mut net, config);
    (net, stats)
}

/// Continues training an existing network.
pub fn train_existing(net: &mut NTupleNetwork, config: &SelfPlayConfig) -> Vec<EpisodeStats> {
    let mut rng = if config.seed != 0 {
        SmallRng::seed_from_u64(config.seed)
    } else {
        SmallRng::from_entropy()
    };

    let mut learning_rate = config.learning_rate;
    let mut epsilon = config.epsilon;
    let mut stats = Vec::with_capacity(config.episodes);
    let start = Instant::now();

    for episode in 0..config.episodes {
        let episode_stats = train_episode(net, learning_rate, epsilon, &mut rng);
        stats.push(episode_stats);
        learning_rate *= config.lr_decay;
        epsilon *= config.epsilon_decay;

        if !config.quiet && (episode + 1) % 100 == 0 {
            eprintln!(
                "episode {}/{}: {} moves, score {:+}, mean |delta| {:.4} ({:.1}s)",
                episode + 1,
                config.episodes,
                episode_stats.moves,
                episode_stats.score,
                episode_stats.mean_abs_delta,
                start.elapsed().as_secs_f64(),
            );
        }
    }
    stats
}

/// Outcome tally of an evaluation run, from the network's side.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EvalReport {
    pub games: usize,
    pub wins: usize,
    pub losses: usize,
    pub draws: usize,
}

impl EvalReport {
    pub fn win_rate(&self) -> f64 {
        if self.games == 0 {
            return 0.0;
        }
        self.wins as f64 / self.games as f64
    }
}

/// Plays one greedy-network-vs-random game. `net_side` is the color the
/// network plays; the game runs to termination.
fn play_eval_game(net: &NTupleNetwork, net_side: Player, rng: &mut SmallRng) -> Outcome {
    let mut game = Game::new();
    while !game.terminal() {
        let mover = game.current_player();
        let chosen = if mover == net_side {
            choose_move(net, &game, 0.0, rng)
        } else {
            movegen::random_move(game.board(), mover, rng)
        };
        let Some((row, col)) = chosen else { break };
        if game.play(row, col, mover).is_err() {
            break;
        }
    }
    match game.winner() {
        Ok(outcome) => outcome,
        // The loop only exits on terminal states.
        Err(_) => Outcome::Draw,
    }
}

/// Measures the network's strength against the uniform-random baseline.
///
/// Alternates the network's color between games. With `threads > 1` the
/// games run concurrently on a rayon pool; each worker gets its own
/// seeded RNG and only reads the shared frozen network.
pub fn evaluate_vs_random(
    net: &NTupleNetwork,
    games: usize,
    threads: usize,
    seed: u64,
) -> EvalReport {
    let outcome_for = |i: usize| -> (Player, Outcome) {
        let net_side = if i % 2 == 0 {
            Player::Black
        } else {
            Player::White
        };
        let mut rng = if seed != 0 {
            SmallRng::seed_from_u64(seed.wrapping_add(i as u64))
        } else {
            SmallRng::from_entropy()
        };
        (net_side, play_eval_game(net, net_side, &mut rng))
    };

    let results: Vec<(Player, Outcome)> = if threads > 1 {
        use rayon::prelude::*;
        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(threads)
            .build()
            .expect("failed to build rayon thread pool");
        pool.install(|| (0..games).into_par_iter().map(outcome_for).collect())
    } else {
        (0..games).map(outcome_for).collect()
    };

    let mut report = EvalReport {
        games,
        ..EvalReport::default()
    };
    for (net_side, outcome) in results {
        match outcome {
            Outcome::Win(winner) if winner == net_side => report.wins += 1,
            Outcome::Win(_) => report.losses += 1,
            Outcome::Draw => report.draws += 1,
        }
    }
    report
}

/// Prints a short stderr summary of a training run.
pub fn print_summary(stats: &[EpisodeStats]) {
    if stats.is_empty() {
        return;
    }
    let tail = &stats[stats.len().saturating_sub(100)..];
    let mean_moves = tail.iter().map(|s| s.moves).sum::<usize>() as f64 / tail.len() as f64;
    let mean_delta = tail.iter().map(|s| s.mean_abs_delta).sum::<f64>() / tail.len() as f64;
    let black_wins = stats.iter().filter(|s| s.score > 0).count();
    let white_wins = stats.iter().filter(|s| s.score < 0).count();
    eprintln!(
        "trained {} episodes: last-100 mean {:.1} moves, mean |delta| {:.4}; black {} / white {} / draw {}",
        stats.len(),
        mean_moves,
        mean_delta,
        black_wins,
        white_wins,
        stats.len() - black_wins - white_wins,
    );
}
