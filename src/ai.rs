//! Opponent targeting: four difficulty tiers sharing a hunt-and-target queue.

use alloc::collections::VecDeque;
use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;
use core::str::FromStr;
use rand::Rng;

use crate::{
    board::Board,
    common::{adjacent_coords, Coord, ShotResult},
    config::{ADJACENT_HIT_BONUS, BOARD_SIZE, HIT_SPAN_BONUS},
    ship::ship_cells,
};

/// Opponent strength.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "std", derive(clap::ValueEnum, serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "std", serde(rename_all = "lowercase"))]
pub enum Difficulty {
    /// Uniform random shots.
    Easy,
    /// Random search, then follow up on hits.
    #[default]
    Medium,
    /// Density-weighted search, then follow up on hits.
    Hard,
    /// Reads the true board.
    Impossible,
}

impl Difficulty {
    pub const ALL: [Difficulty; 4] = [
        Difficulty::Easy,
        Difficulty::Medium,
        Difficulty::Hard,
        Difficulty::Impossible,
    ];

    fn uses_queue(self) -> bool {
        matches!(self, Difficulty::Medium | Difficulty::Hard)
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Difficulty::Easy => "Easy",
            Difficulty::Medium => "Medium",
            Difficulty::Hard => "Hard",
            Difficulty::Impossible => "Impossible",
        };
        f.write_str(label)
    }
}

impl FromStr for Difficulty {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "easy" => Ok(Difficulty::Easy),
            "medium" => Ok(Difficulty::Medium),
            "hard" => Ok(Difficulty::Hard),
            "impossible" => Ok(Difficulty::Impossible),
            other => Err(alloc::format!("unknown difficulty '{}'", other)),
        }
    }
}

/// Follow-up targets queued after hits, consumed first in, first out.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AiMemory {
    queue: VecDeque<Coord>,
}

impl AiMemory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn queue(&self) -> &VecDeque<Coord> {
        &self.queue
    }

    pub fn reset(&mut self) {
        self.queue.clear();
    }

    /// Queue every unshot on-board coordinate in `coords` that is not
    /// queued yet.
    pub fn enqueue_targets(&mut self, board: &Board, coords: &[Coord]) {
        for &c in coords {
            if !c.in_bounds() || board.cell_at(c).shot || self.queue.contains(&c) {
                continue;
            }
            self.queue.push_back(c);
        }
    }

    /// Drop queued coordinates that have since been fired upon.
    pub fn prune(&mut self, board: &Board) {
        self.queue.retain(|c| c.in_bounds() && !board.cell_at(*c).shot);
    }

    /// Update the queue after the AI fired at `target`.
    pub fn observe(&mut self, board: &Board, target: Coord, result: &ShotResult) {
        match result {
            ShotResult::Hit { .. } => self.enqueue_targets(board, &adjacent_coords(target)),
            ShotResult::Sunk { .. } => self.prune(board),
            ShotResult::Miss { .. } => {}
        }
    }

    fn pop(&mut self) -> Option<Coord> {
        self.queue.pop_front()
    }
}

/// Per-cell score produced by [`hard_weights`], indexed `[y][x]`.
pub type WeightMap = [[u32; BOARD_SIZE]; BOARD_SIZE];

/// Score every unshot cell by how many plausible placements of the remaining
/// ships cover it, favouring placements that extend known hits.
///
/// Shot cells score 0; every unshot cell scores at least 1.
pub fn hard_weights(board: &Board) -> WeightMap {
    let mut weights = [[0u32; BOARD_SIZE]; BOARD_SIZE];
    for c in board.unshot_coords() {
        weights[c.y][c.x] = 1;
    }

    for len in board.remaining_ship_lengths() {
        for y in 0..BOARD_SIZE {
            for x in 0..BOARD_SIZE {
                for horizontal in [true, false] {
                    let span = ship_cells(x, y, len, horizontal);
                    if !span.iter().all(Coord::in_bounds) {
                        continue;
                    }
                    // sunk cells and misses rule the span out
                    if span.iter().any(|c| {
                        let cell = board.cell_at(*c);
                        cell.sunk || cell.is_miss()
                    }) {
                        continue;
                    }
                    let n_hits = span
                        .iter()
                        .filter(|c| board.cell_at(**c).is_unresolved_hit())
                        .count() as u32;
                    let weight = 1 + HIT_SPAN_BONUS * n_hits;
                    for c in span.iter().filter(|c| !board.cell_at(**c).shot) {
                        weights[c.y][c.x] += weight;
                    }
                }
            }
        }
    }

    for hit in board.unresolved_hits() {
        for n in adjacent_coords(hit) {
            if !board.cell_at(n).shot {
                weights[n.y][n.x] += ADJACENT_HIT_BONUS;
            }
        }
    }

    weights
}

/// Pick uniformly among the unshot cells tied for the highest weight.
pub fn hard_weight_shot<R: Rng + ?Sized>(board: &Board, rng: &mut R) -> Option<Coord> {
    let weights = hard_weights(board);
    let mut best = Vec::new();
    let mut max_weight = 0;
    for c in board.unshot_coords() {
        let w = weights[c.y][c.x];
        if w > max_weight {
            max_weight = w;
            best.clear();
            best.push(c);
        } else if w == max_weight {
            best.push(c);
        }
    }
    random_item(&best, rng)
}

/// Choose the computer's next target on `board` (the player's board).
///
/// Returns `None` only when every cell has been fired upon.
pub fn choose_ai_target<R: Rng + ?Sized>(
    board: &Board,
    difficulty: Difficulty,
    memory: &mut AiMemory,
    rng: &mut R,
) -> Option<Coord> {
    let unshot = board.unshot_coords();
    if unshot.is_empty() {
        return None;
    }
    memory.prune(board);

    if difficulty == Difficulty::Impossible {
        let ships: Vec<Coord> = unshot
            .iter()
            .copied()
            .filter(|c| board.cell_at(*c).is_occupied())
            .collect();
        let target = random_item(&ships, rng).or_else(|| random_item(&unshot, rng));
        log::debug!("impossible AI picked {:?}", target);
        return target;
    }

    if difficulty.uses_queue() {
        if let Some(queued) = memory.pop() {
            log::debug!("{} AI following up at {}", difficulty, queued);
            return Some(queued);
        }
    }

    if difficulty == Difficulty::Hard {
        if let Some(weighted) = hard_weight_shot(board, rng) {
            log::debug!("hard AI weighted pick {}", weighted);
            return Some(weighted);
        }
    }

    random_item(&unshot, rng)
}

/// Uniform choice from `items`, `None` when empty.
pub fn random_item<T: Copy, R: Rng + ?Sized>(items: &[T], rng: &mut R) -> Option<T> {
    if items.is_empty() {
        return None;
    }
    Some(items[rng.random_range(0..items.len())])
}
