//! Fleet placement: random placement with a bounded retry budget and the
//! manual placement queue used while the player sets up their board.

use alloc::string::String;
use alloc::vec::Vec;
use rand::Rng;

use crate::board::Board;
use crate::common::{in_bounds, BoardError, Coord};
use crate::config::{placement_queue, FleetEntry, BOARD_SIZE, PLACEMENT_ATTEMPTS};
use crate::ship::{ship_cells, Orientation};

/// A committed ship placement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Placement {
    pub name: &'static str,
    pub label: String,
    pub length: usize,
    pub cells: Vec<Coord>,
}

impl Placement {
    fn new(entry: &FleetEntry, cells: Vec<Coord>) -> Self {
        Self {
            name: entry.name,
            label: entry.label.clone(),
            length: entry.length,
            cells,
        }
    }
}

/// Draws up to [`PLACEMENT_ATTEMPTS`] random spans for `entry` and returns
/// the first one that fits on `board`.
pub fn random_placement<R: Rng + ?Sized>(
    board: &Board,
    entry: &FleetEntry,
    rng: &mut R,
) -> Result<Vec<Coord>, BoardError> {
    for _ in 0..PLACEMENT_ATTEMPTS {
        let horizontal = rng.random_bool(0.5);
        let max_x = if horizontal {
            BOARD_SIZE - entry.length
        } else {
            BOARD_SIZE - 1
        };
        let max_y = if horizontal {
            BOARD_SIZE - 1
        } else {
            BOARD_SIZE - entry.length
        };
        let x = rng.random_range(0..=max_x);
        let y = rng.random_range(0..=max_y);
        let cells = ship_cells(x, y, entry.length, horizontal);
        if board.can_place_ship(&cells) {
            return Ok(cells);
        }
    }
    log::error!(
        "gave up placing {} after {} attempts",
        entry.label,
        PLACEMENT_ATTEMPTS
    );
    Err(BoardError::UnableToPlaceShip {
        label: entry.label.clone(),
    })
}

/// Place the whole fleet at random positions on `board`.
pub fn place_fleet_random<R: Rng + ?Sized>(board: &mut Board, rng: &mut R) -> Result<(), BoardError> {
    for entry in placement_queue().iter() {
        let cells = random_placement(board, entry, rng)?;
        board.place_ship(entry.label.as_str(), entry.length, cells, entry.name)?;
    }
    Ok(())
}

/// Build a fresh board holding exactly `placements`, in order.
pub fn board_from_placements(placements: &[Placement]) -> Result<Board, BoardError> {
    let mut board = Board::new();
    for p in placements.iter() {
        board.place_ship(p.label.as_str(), p.length, p.cells.clone(), p.name)?;
    }
    Ok(board)
}

/// Player-driven placement: a queue of ships still to place, the committed
/// placements and the current orientation.
///
/// The board is always rebuilt from the full placement list, so undo and
/// clear are plain list edits.
#[derive(Debug, Clone)]
pub struct ManualPlacement {
    queue: Vec<FleetEntry>,
    placements: Vec<Placement>,
    orientation: Orientation,
    board: Board,
}

impl Default for ManualPlacement {
    fn default() -> Self {
        Self::new()
    }
}

impl ManualPlacement {
    pub fn new() -> Self {
        Self {
            queue: placement_queue(),
            placements: Vec::new(),
            orientation: Orientation::Horizontal,
            board: Board::new(),
        }
    }

    /// Board built from the committed placements.
    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn placements(&self) -> &[Placement] {
        &self.placements
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    pub fn toggle_orientation(&mut self) -> Orientation {
        self.orientation = self.orientation.toggled();
        self.orientation
    }

    /// The next ship to place, or `None` once the fleet is complete.
    pub fn next_entry(&self) -> Option<&FleetEntry> {
        self.queue.get(self.placements.len())
    }

    pub fn is_complete(&self) -> bool {
        self.placements.len() == self.queue.len()
    }

    /// Place the next ship with its origin at (`x`, `y`) using the current
    /// orientation. Returns `Ok(None)` when the fleet is already complete.
    pub fn try_place(&mut self, x: usize, y: usize) -> Result<Option<&Placement>, BoardError> {
        let Some(entry) = self.next_entry() else {
            return Ok(None);
        };
        if !in_bounds(x, y) {
            return Err(BoardError::OutOfBounds);
        }
        let cells = ship_cells(x, y, entry.length, self.orientation.is_horizontal());
        if !self.board.can_place_ship(&cells) {
            return Err(if cells.iter().all(Coord::in_bounds) {
                BoardError::ShipOverlaps
            } else {
                BoardError::OutOfBounds
            });
        }
        let placement = Placement::new(entry, cells);
        self.commit(placement)?;
        Ok(self.placements.last())
    }

    /// Randomly place every remaining ship. Either all of them are placed or
    /// nothing changes.
    pub fn auto_place_remaining<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<(), BoardError> {
        let mut placements = self.placements.clone();
        let mut board = board_from_placements(&placements)?;
        for entry in self.queue[placements.len()..].iter() {
            let cells = random_placement(&board, entry, rng)?;
            board.place_ship(entry.label.as_str(), entry.length, cells.clone(), entry.name)?;
            placements.push(Placement::new(entry, cells));
        }
        self.placements = placements;
        self.board = board;
        Ok(())
    }

    /// Remove the most recent placement.
    pub fn undo(&mut self) -> Option<Placement> {
        let removed = self.placements.pop()?;
        self.rebuild();
        Some(removed)
    }

    pub fn clear(&mut self) {
        self.placements.clear();
        self.board = Board::new();
    }

    fn commit(&mut self, placement: Placement) -> Result<(), BoardError> {
        self.placements.push(placement);
        match board_from_placements(&self.placements) {
            Ok(board) => {
                self.board = board;
                Ok(())
            }
            Err(e) => {
                self.placements.pop();
                Err(e)
            }
        }
    }

    fn rebuild(&mut self) {
        // A prefix of valid placements is always valid.
        self.board = board_from_placements(&self.placements).unwrap_or_default();
    }
}
