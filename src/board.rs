//! Game board state: a 10×10 grid of cells plus the ships that occupy it.

use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;

use crate::common::{in_bounds, BoardError, Coord, ShotResult};
use crate::config::BOARD_SIZE;
use crate::ship::Ship;

/// State of a single grid cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Cell {
    /// Index into the owning board's ship list, `None` for water.
    pub ship_id: Option<usize>,
    pub shot: bool,
    /// Set once the occupying ship is fully sunk.
    pub sunk: bool,
}

impl Cell {
    pub fn is_occupied(&self) -> bool {
        self.ship_id.is_some()
    }

    /// Shot, occupied and its ship still afloat.
    pub fn is_unresolved_hit(&self) -> bool {
        self.shot && self.is_occupied() && !self.sunk
    }

    pub fn is_miss(&self) -> bool {
        self.shot && !self.is_occupied()
    }
}

/// One side's grid and fleet.
#[derive(Clone, PartialEq, Eq)]
pub struct Board {
    cells: [[Cell; BOARD_SIZE]; BOARD_SIZE],
    ships: Vec<Ship>,
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl Board {
    /// Create an empty board (no ships placed, nothing fired upon).
    pub fn new() -> Self {
        Board {
            cells: [[Cell::default(); BOARD_SIZE]; BOARD_SIZE],
            ships: Vec::new(),
        }
    }

    /// Cell at (`x`, `y`), or `None` when off the board.
    pub fn cell(&self, x: usize, y: usize) -> Option<&Cell> {
        if in_bounds(x, y) {
            Some(&self.cells[y][x])
        } else {
            None
        }
    }

    pub(crate) fn cell_at(&self, at: Coord) -> &Cell {
        &self.cells[at.y][at.x]
    }

    pub fn ships(&self) -> &[Ship] {
        &self.ships
    }

    /// `true` iff every cell is on the board and not owned by a ship.
    pub fn can_place_ship(&self, cells: &[Coord]) -> bool {
        cells
            .iter()
            .all(|c| c.in_bounds() && !self.cell_at(*c).is_occupied())
    }

    /// Append a ship covering `cells` and return its id.
    ///
    /// The placement is checked again here; an invalid one is rejected
    /// without touching the board.
    pub fn place_ship(
        &mut self,
        label: impl Into<String>,
        length: usize,
        cells: Vec<Coord>,
        name: &'static str,
    ) -> Result<usize, BoardError> {
        if let Some(bad) = cells.iter().find(|c| !c.in_bounds()) {
            log::debug!("rejected placement off the board at ({}, {})", bad.x, bad.y);
            return Err(BoardError::OutOfBounds);
        }
        if !self.can_place_ship(&cells) {
            return Err(BoardError::ShipOverlaps);
        }
        let id = self.ships.len();
        for c in cells.iter() {
            self.cells[c.y][c.x].ship_id = Some(id);
        }
        self.ships.push(Ship::new(id, label.into(), name, length, cells));
        Ok(id)
    }

    /// Process a shot at (`x`, `y`), marking the cell and reporting the result.
    ///
    /// Off-board and repeated shots are rejected with no state change.
    pub fn fire(&mut self, x: usize, y: usize) -> Result<ShotResult, BoardError> {
        if !in_bounds(x, y) {
            return Err(BoardError::OutOfBounds);
        }
        let cell = &mut self.cells[y][x];
        if cell.shot {
            return Err(BoardError::AlreadyShot);
        }
        cell.shot = true;

        let at = Coord::new(x, y);
        let Some(ship_id) = cell.ship_id else {
            return Ok(ShotResult::Miss { at });
        };

        let ship = &mut self.ships[ship_id];
        ship.register_hit();
        if ship.is_sunk() {
            let cells = ship.cells().to_vec();
            let name = ship.name();
            for c in cells.iter() {
                self.cells[c.y][c.x].sunk = true;
            }
            return Ok(ShotResult::Sunk { ship: name, cells });
        }
        Ok(ShotResult::Hit {
            at,
            ship: ship.name(),
        })
    }

    /// Returns `true` when every ship is sunk.
    pub fn all_ships_sunk(&self) -> bool {
        self.ships.iter().all(Ship::is_sunk)
    }

    /// All coordinates not yet fired upon, row by row.
    pub fn unshot_coords(&self) -> Vec<Coord> {
        self.coords_where(|cell| !cell.shot)
    }

    /// Hits on ships that are still afloat.
    pub fn unresolved_hits(&self) -> Vec<Coord> {
        self.coords_where(Cell::is_unresolved_hit)
    }

    /// Lengths of ships not yet sunk, in fleet order.
    pub fn remaining_ship_lengths(&self) -> Vec<usize> {
        self.ships
            .iter()
            .filter(|s| !s.is_sunk())
            .map(Ship::length)
            .collect()
    }

    /// Number of cells fired upon so far.
    pub fn shots_fired(&self) -> usize {
        self.cells.iter().flatten().filter(|c| c.shot).count()
    }

    fn coords_where(&self, pred: impl Fn(&Cell) -> bool) -> Vec<Coord> {
        let mut out = Vec::new();
        for (y, row) in self.cells.iter().enumerate() {
            for (x, cell) in row.iter().enumerate() {
                if pred(cell) {
                    out.push(Coord::new(x, y));
                }
            }
        }
        out
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Board {{")?;
        for row in self.cells.iter() {
            write!(f, "  ")?;
            for cell in row.iter() {
                let ch = match (cell.shot, cell.ship_id) {
                    (true, Some(_)) if cell.sunk => '#',
                    (true, Some(_)) => 'X',
                    (true, None) => 'o',
                    (false, Some(_)) => 'S',
                    (false, None) => '.',
                };
                write!(f, "{}", ch)?;
            }
            writeln!(f)?;
        }
        writeln!(f, "  ships: {:?}", self.ships)?;
        write!(f, "}}")
    }
}
