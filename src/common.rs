//! Common types for Battleship: coordinates, shot results and board errors.

use alloc::format;
use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;

use crate::config::BOARD_SIZE;

/// A cell position: `x` is the column, `y` the row, both 0-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct Coord {
    pub x: usize,
    pub y: usize,
}

impl Coord {
    pub const fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }

    pub fn in_bounds(&self) -> bool {
        in_bounds(self.x, self.y)
    }
}

impl From<(usize, usize)> for Coord {
    fn from((x, y): (usize, usize)) -> Self {
        Self { x, y }
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let row = char::from(b'A'.wrapping_add(self.y as u8));
        write!(f, "{}{}", row, self.x + 1)
    }
}

/// Returns `true` if (`x`, `y`) lies on the board.
pub fn in_bounds(x: usize, y: usize) -> bool {
    x < BOARD_SIZE && y < BOARD_SIZE
}

/// In-bounds orthogonal neighbours of `at`, ordered +x, -x, +y, -y.
pub fn adjacent_coords(at: Coord) -> Vec<Coord> {
    let candidates = [
        at.x.checked_add(1).map(|x| Coord::new(x, at.y)),
        at.x.checked_sub(1).map(|x| Coord::new(x, at.y)),
        at.y.checked_add(1).map(|y| Coord::new(at.x, y)),
        at.y.checked_sub(1).map(|y| Coord::new(at.x, y)),
    ];
    candidates
        .into_iter()
        .flatten()
        .filter(Coord::in_bounds)
        .collect()
}

/// Human-readable label: row letter then column number, e.g. (4, 2) -> "C5".
pub fn coord_to_human(at: Coord) -> String {
    format!("{}", at)
}

/// Parse a label such as "C5" or "j10" back into a coordinate.
pub fn parse_coord(input: &str) -> Result<Coord, String> {
    let input = input.trim();
    let mut chars = input.chars();
    let row_ch = chars
        .next()
        .ok_or_else(|| String::from("Empty input"))?
        .to_ascii_uppercase();
    if !row_ch.is_ascii_uppercase() {
        return Err(format!("Invalid row '{}' - must be a letter A-J", row_ch));
    }
    let y = (row_ch as u8 - b'A') as usize;
    if y >= BOARD_SIZE {
        return Err(format!("Row '{}' out of bounds - must be A-J", row_ch));
    }
    let col_str = chars.as_str();
    let invalid_col = || format!("Invalid column '{}' - must be a number 1-10", col_str);
    // digits only, no sign or leading zero
    if col_str.is_empty()
        || col_str.starts_with('0')
        || !col_str.bytes().all(|b| b.is_ascii_digit())
    {
        return Err(invalid_col());
    }
    let col: usize = col_str.parse().map_err(|_| invalid_col())?;
    if col == 0 || col > BOARD_SIZE {
        return Err(format!("Column {} out of bounds - must be 1-10", col));
    }
    Ok(Coord::new(col - 1, y))
}

/// Classification of a resolved shot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum ShotKind {
    Miss,
    Hit,
    Sunk,
}

/// Result of a shot that was accepted by the board.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShotResult {
    /// Shot landed in open water.
    Miss { at: Coord },
    /// Shot hit a ship that is still afloat.
    Hit { at: Coord, ship: &'static str },
    /// Shot sank a ship; carries every cell of that ship.
    Sunk { ship: &'static str, cells: Vec<Coord> },
}

impl ShotResult {
    pub fn kind(&self) -> ShotKind {
        match self {
            ShotResult::Miss { .. } => ShotKind::Miss,
            ShotResult::Hit { .. } => ShotKind::Hit,
            ShotResult::Sunk { .. } => ShotKind::Sunk,
        }
    }

    /// Coordinates affected by the shot: the target cell, or the whole ship
    /// when it was sunk.
    pub fn coords(&self) -> &[Coord] {
        match self {
            ShotResult::Miss { at } | ShotResult::Hit { at, .. } => core::slice::from_ref(at),
            ShotResult::Sunk { cells, .. } => cells.as_slice(),
        }
    }

    /// Base class name of the ship that was struck, if any.
    pub fn ship_name(&self) -> Option<&'static str> {
        match self {
            ShotResult::Miss { .. } => None,
            ShotResult::Hit { ship, .. } | ShotResult::Sunk { ship, .. } => Some(*ship),
        }
    }
}

/// Errors returned by Board operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BoardError {
    /// Coordinate is off the board.
    OutOfBounds,
    /// The cell was already fired upon.
    AlreadyShot,
    /// Ship placement overlaps another ship.
    ShipOverlaps,
    /// Random placement ran out of attempts for this ship.
    UnableToPlaceShip { label: String },
}

impl BoardError {
    /// `true` for a shot at a cell that was already fired upon.
    pub fn is_repeated(&self) -> bool {
        matches!(self, BoardError::AlreadyShot)
    }
}

impl fmt::Display for BoardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoardError::OutOfBounds => write!(f, "Coordinate is out of bounds"),
            BoardError::AlreadyShot => write!(f, "That coordinate has already been fired on"),
            BoardError::ShipOverlaps => write!(f, "Ship placement overlaps with another ship"),
            BoardError::UnableToPlaceShip { label } => {
                write!(f, "Could not place {}. Please restart", label)
            }
        }
    }
}

impl core::error::Error for BoardError {}
