//! Headless AI benchmark: the computer fires at randomly dealt fleets until
//! they are sunk, and the shot counts are summarised.

use rand::Rng;

use crate::{
    ai::{choose_ai_target, AiMemory, Difficulty},
    board::Board,
    common::BoardError,
    config::BOARD_CELLS,
    placement::place_fleet_random,
};

/// Shot statistics over a batch of simulated games.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "std", derive(serde::Serialize))]
pub struct SimStats {
    pub difficulty: Difficulty,
    pub games: usize,
    pub min_shots: usize,
    pub max_shots: usize,
    pub mean_shots: f64,
}

/// Number of shots `difficulty` needs to sink a freshly dealt fleet.
pub fn shots_to_sink_fleet<R: Rng + ?Sized>(
    difficulty: Difficulty,
    rng: &mut R,
) -> Result<usize, BoardError> {
    let mut board = Board::new();
    place_fleet_random(&mut board, rng)?;
    let mut memory = AiMemory::new();

    let mut shots = 0;
    while !board.all_ships_sunk() && shots < BOARD_CELLS {
        let Some(target) = choose_ai_target(&board, difficulty, &mut memory, rng) else {
            break;
        };
        match board.fire(target.x, target.y) {
            Ok(result) => {
                shots += 1;
                memory.observe(&board, target, &result);
            }
            Err(e) if e.is_repeated() => continue,
            Err(e) => return Err(e),
        }
    }
    Ok(shots)
}

/// Play `games` simulated games at `difficulty`.
pub fn simulate<R: Rng + ?Sized>(
    difficulty: Difficulty,
    games: usize,
    rng: &mut R,
) -> Result<SimStats, BoardError> {
    let mut min_shots = usize::MAX;
    let mut max_shots = 0;
    let mut total = 0;
    for _ in 0..games {
        let shots = shots_to_sink_fleet(difficulty, rng)?;
        min_shots = min_shots.min(shots);
        max_shots = max_shots.max(shots);
        total += shots;
    }
    if games == 0 {
        min_shots = 0;
    }
    log::info!("simulated {} games on {}: {} shots total", games, difficulty, total);
    Ok(SimStats {
        difficulty,
        games,
        min_shots,
        max_shots,
        mean_shots: if games == 0 { 0.0 } else { total as f64 / games as f64 },
    })
}
