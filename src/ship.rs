//! Ship classes, placed ships and the span generator used for placement.

use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;

use crate::common::Coord;

/// Orientation of a ship on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Orientation {
    #[default]
    Horizontal,
    Vertical,
}

impl Orientation {
    pub fn is_horizontal(self) -> bool {
        self == Orientation::Horizontal
    }

    /// The other orientation.
    pub fn toggled(self) -> Self {
        match self {
            Orientation::Horizontal => Orientation::Vertical,
            Orientation::Vertical => Orientation::Horizontal,
        }
    }
}

impl fmt::Display for Orientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Orientation::Horizontal => write!(f, "Horizontal"),
            Orientation::Vertical => write!(f, "Vertical"),
        }
    }
}

/// Entry of the fleet manifest: class name, length and how many of them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShipClass {
    name: &'static str,
    length: usize,
    count: usize,
}

impl ShipClass {
    pub const fn new(name: &'static str, length: usize, count: usize) -> Self {
        Self {
            name,
            length,
            count,
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn length(&self) -> usize {
        self.length
    }

    pub fn count(&self) -> usize {
        self.count
    }
}

/// `length` contiguous cells from (`x`, `y`), along +x when `horizontal`,
/// otherwise along +y. Bounds are not checked.
pub fn ship_cells(x: usize, y: usize, length: usize, horizontal: bool) -> Vec<Coord> {
    (0..length)
        .map(|i| {
            if horizontal {
                Coord::new(x + i, y)
            } else {
                Coord::new(x, y + i)
            }
        })
        .collect()
}

/// A ship owned by a board.
#[derive(Clone, PartialEq, Eq)]
pub struct Ship {
    id: usize,
    label: String,
    name: &'static str,
    length: usize,
    cells: Vec<Coord>,
    hits: usize,
}

impl Ship {
    pub(crate) fn new(
        id: usize,
        label: String,
        name: &'static str,
        length: usize,
        cells: Vec<Coord>,
    ) -> Self {
        Self {
            id,
            label,
            name,
            length,
            cells,
            hits: 0,
        }
    }

    /// Index of the ship in its board's ship list.
    pub fn id(&self) -> usize {
        self.id
    }

    /// Per-instance label, e.g. "Submarine 2".
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Class name used in messages, e.g. "Submarine".
    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn length(&self) -> usize {
        self.length
    }

    pub fn cells(&self) -> &[Coord] {
        &self.cells
    }

    pub fn hits(&self) -> usize {
        self.hits
    }

    /// Check if the ship is sunk (every segment hit).
    pub fn is_sunk(&self) -> bool {
        self.hits >= self.length
    }

    pub(crate) fn register_hit(&mut self) {
        if self.hits < self.length {
            self.hits += 1;
        }
    }
}

impl fmt::Debug for Ship {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Ship {{ id: {}, label: \"{}\", cells: {:?}, hits: {}/{} }}",
            self.id, self.label, self.cells, self.hits, self.length,
        )
    }
}
