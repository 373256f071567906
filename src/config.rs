//! Fixed game constants and the runtime game configuration.

use alloc::format;
use alloc::string::String;
use alloc::vec::Vec;
use core::time::Duration;

use crate::ai::Difficulty;
use crate::ship::ShipClass;

pub const BOARD_SIZE: usize = 10;
pub const BOARD_CELLS: usize = BOARD_SIZE * BOARD_SIZE;

/// Fleet manifest shared by both sides.
pub const FLEET: [ShipClass; 4] = [
    ShipClass::new("Carrier", 5, 1),
    ShipClass::new("Destroyer", 4, 1),
    ShipClass::new("Submarine", 3, 2),
    ShipClass::new("Patrol", 2, 1),
];

/// Total number of ship segments in the fleet.
pub const TOTAL_SHIP_CELLS: usize = 5 + 4 + 3 + 3 + 2;

/// Random draws allowed per ship before placement gives up.
///
/// Tuning knob, not a success guarantee: exhaustion is reported as an error.
pub const PLACEMENT_ATTEMPTS: usize = 500;

/// Hard AI: bonus per unresolved hit inside a candidate ship span.
pub const HIT_SPAN_BONUS: u32 = 6;
/// Hard AI: bonus for every unshot neighbour of an unresolved hit.
pub const ADJACENT_HIT_BONUS: u32 = 12;

/// Pause before the computer answers a player shot.
pub const DEFAULT_THINK_DELAY: Duration = Duration::from_millis(600);

/// One ship instance to be placed, in fleet order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FleetEntry {
    pub name: &'static str,
    pub label: String,
    pub length: usize,
}

/// Expand the fleet manifest into one entry per ship instance.
///
/// Classes with more than one ship get numbered labels ("Submarine 1").
pub fn placement_queue() -> Vec<FleetEntry> {
    let mut queue = Vec::new();
    for class in FLEET.iter() {
        for i in 1..=class.count() {
            let label = if class.count() > 1 {
                format!("{} {}", class.name(), i)
            } else {
                class.name().into()
            };
            queue.push(FleetEntry {
                name: class.name(),
                label,
                length: class.length(),
            });
        }
    }
    queue
}

/// How a new game starts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GameMode {
    /// The player places their fleet by hand before the battle.
    #[default]
    Classic,
    /// Both fleets are placed randomly and the battle starts immediately.
    Quick,
}

/// Runtime settings for a game session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    pub difficulty: Difficulty,
    /// Fixed RNG seed for reproducible games.
    pub seed: Option<u64>,
    pub think_delay: Duration,
    pub mode: GameMode,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            difficulty: Difficulty::Medium,
            seed: None,
            think_delay: DEFAULT_THINK_DELAY,
            mode: GameMode::Classic,
        }
    }
}
