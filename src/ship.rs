//! Ships: kinds, orientation and hit tracking.

use alloc::vec::Vec;
use core::fmt;

use crate::bitboard::CellSet;
use crate::common::PlacementError;
use crate::coord::Coordinate;

/// Orientation of a ship on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Orientation {
    Vertical,
    Horizontal,
}

/// Kind of ship, determined by its size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum ShipKind {
    Submarine,
    Destroyer,
    Cruiser,
    Battleship,
    Carrier,
}

impl ShipKind {
    pub const fn size(self) -> usize {
        match self {
            ShipKind::Submarine => 1,
            ShipKind::Destroyer => 2,
            ShipKind::Cruiser => 3,
            ShipKind::Battleship => 4,
            ShipKind::Carrier => 5,
        }
    }

    pub const fn from_size(size: usize) -> Option<Self> {
        match size {
            1 => Some(ShipKind::Submarine),
            2 => Some(ShipKind::Destroyer),
            3 => Some(ShipKind::Cruiser),
            4 => Some(ShipKind::Battleship),
            5 => Some(ShipKind::Carrier),
            _ => None,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            ShipKind::Submarine => "Submarine",
            ShipKind::Destroyer => "Destroyer",
            ShipKind::Cruiser => "Cruiser",
            ShipKind::Battleship => "Battleship",
            ShipKind::Carrier => "Carrier",
        }
    }
}

impl fmt::Display for ShipKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A placed ship.
#[derive(Clone, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "std", serde(try_from = "ShipRepr"))]
pub struct Ship {
    kind: ShipKind,
    orientation: Orientation,
    cells: Vec<Coordinate>,
    hit_count: usize,
}

impl Ship {
    /// Build a ship from its ordered cells.
    ///
    /// The cells must be unique and form a straight line without gaps along
    /// the axis given by `orientation`; a single cell is valid in either
    /// orientation. The length picks the [`ShipKind`].
    pub fn new(cells: Vec<Coordinate>, orientation: Orientation) -> Result<Self, PlacementError> {
        let kind = ShipKind::from_size(cells.len()).ok_or(PlacementError::InvalidSize(cells.len()))?;
        // (fixed axis, running axis) for the orientation
        let axes = |c: Coordinate| match orientation {
            Orientation::Vertical => (c.col(), c.row()),
            Orientation::Horizontal => (c.row(), c.col()),
        };
        let fixed = axes(cells[0]).0;
        if cells.iter().any(|&c| axes(c).0 != fixed) {
            return Err(PlacementError::NotContiguous);
        }
        let mut along: Vec<usize> = cells.iter().map(|&c| axes(c).1).collect();
        along.sort_unstable();
        if along.windows(2).any(|w| w[1] != w[0] + 1) {
            return Err(PlacementError::NotContiguous);
        }
        Ok(Ship {
            kind,
            orientation,
            cells,
            hit_count: 0,
        })
    }

    pub fn kind(&self) -> ShipKind {
        self.kind
    }

    pub fn size(&self) -> usize {
        self.cells.len()
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// Cells in placement order, anchor first.
    pub fn cells(&self) -> &[Coordinate] {
        &self.cells
    }

    pub fn hit_count(&self) -> usize {
        self.hit_count
    }

    pub fn contains(&self, at: Coordinate) -> bool {
        self.cells.contains(&at)
    }

    /// Occupancy mask of the ship.
    pub fn mask(&self) -> CellSet {
        self.cells.iter().copied().collect()
    }

    /// Record a hit at `at`. Returns `true` if `at` belongs to this ship.
    /// The count saturates at the ship's size.
    pub fn register_hit(&mut self, at: Coordinate) -> bool {
        if !self.contains(at) {
            return false;
        }
        if self.hit_count < self.cells.len() {
            self.hit_count += 1;
        }
        true
    }

    pub fn is_sunk(&self) -> bool {
        self.hit_count >= self.cells.len()
    }
}

/// Wire form of a [`Ship`]; deserialized ships go through [`Ship::new`].
#[cfg(feature = "std")]
#[derive(serde::Deserialize)]
struct ShipRepr {
    orientation: Orientation,
    cells: Vec<Coordinate>,
    hit_count: usize,
}

#[cfg(feature = "std")]
impl TryFrom<ShipRepr> for Ship {
    type Error = PlacementError;

    fn try_from(repr: ShipRepr) -> Result<Self, Self::Error> {
        let mut ship = Ship::new(repr.cells, repr.orientation)?;
        ship.hit_count = repr.hit_count.min(ship.cells.len());
        Ok(ship)
    }
}

impl fmt::Debug for Ship {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Ship {{ kind: {}, origin: {}, orientation: {:?}, hits: {}/{} }}",
            self.kind,
            self.cells[0],
            self.orientation,
            self.hit_count,
            self.cells.len(),
        )
    }
}
