//! Board state: cell grids and the own-fleet board.
//!
//! Each player owns two grids. The fleet grid shows their own ships and
//! every shot the opponent fired at them; it never contains `Unknown`. The
//! knowledge grid records what they have learned about the opponent's
//! fleet and starts fully `Unknown`.

use alloc::vec::Vec;
use core::fmt;

use crate::bitboard::CellSet;
use crate::config::{BOARD_SIZE, FLEET_SHIPS};
use crate::coord::Coordinate;
use crate::ship::Ship;

/// State of a single cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum CellState {
    Unknown,
    EmptyRevealed,
    ShipPresent,
    ShipHit { sunk: bool },
    MissRevealed,
    /// Player-set marker on an unknown knowledge cell.
    Highlighted,
}

impl CellState {
    /// Only unknown or highlighted knowledge cells may be shot.
    pub fn is_shootable(self) -> bool {
        matches!(self, CellState::Unknown | CellState::Highlighted)
    }

    pub fn is_ship(self) -> bool {
        matches!(self, CellState::ShipPresent | CellState::ShipHit { .. })
    }

    /// One-character rendering used by `Grid`'s `Display`.
    pub fn symbol(self) -> char {
        match self {
            CellState::Unknown => '.',
            CellState::EmptyRevealed => ' ',
            CellState::ShipPresent => 'S',
            CellState::ShipHit { sunk: false } => 'x',
            CellState::ShipHit { sunk: true } => 'X',
            CellState::MissRevealed => 'o',
            CellState::Highlighted => '?',
        }
    }
}

/// A 10×10 grid of cell states. Also serves as the snapshot handed to the
/// render layer.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct Grid {
    cells: [[CellState; BOARD_SIZE]; BOARD_SIZE],
}

/// Snapshot of one board as consumed by a renderer.
pub type BoardSnapshot = Grid;

impl Grid {
    pub fn filled(state: CellState) -> Self {
        Grid {
            cells: [[state; BOARD_SIZE]; BOARD_SIZE],
        }
    }

    /// Fresh knowledge grid.
    pub fn unknown() -> Self {
        Self::filled(CellState::Unknown)
    }

    pub fn get(&self, at: Coordinate) -> CellState {
        self.cells[at.row()][at.col()]
    }

    pub fn set(&mut self, at: Coordinate, state: CellState) {
        self.cells[at.row()][at.col()] = state;
    }

    /// Rows top to bottom, each indexed by column.
    pub fn rows(&self) -> &[[CellState; BOARD_SIZE]; BOARD_SIZE] {
        &self.cells
    }

    pub fn iter(&self) -> impl Iterator<Item = (Coordinate, CellState)> + '_ {
        Coordinate::all().map(move |at| (at, self.get(at)))
    }

    /// Cells matching `pred`.
    pub fn select(&self, pred: impl Fn(CellState) -> bool) -> CellSet {
        self.iter()
            .filter(|&(_, state)| pred(state))
            .map(|(at, _)| at)
            .collect()
    }

    /// Cells that may still be shot.
    pub fn shootable(&self) -> CellSet {
        self.select(CellState::is_shootable)
    }

    pub fn count(&self, state: CellState) -> usize {
        self.iter().filter(|&(_, s)| s == state).count()
    }
}

/// Knowledge grids start out unknown.
impl Default for Grid {
    fn default() -> Self {
        Grid::unknown()
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "   ")?;
        for c in 0..BOARD_SIZE {
            write!(f, " {}", (b'A' + c as u8) as char)?;
        }
        writeln!(f)?;
        for (r, row) in self.cells.iter().enumerate() {
            write!(f, "{:2} ", r + 1)?;
            for state in row {
                write!(f, " {}", state.symbol())?;
            }
            if r + 1 < BOARD_SIZE {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}

impl fmt::Debug for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Grid {{")?;
        writeln!(f, "{}", self)?;
        write!(f, "}}")
    }
}

/// A player's own board: ships, their occupancy and the fleet grid.
#[derive(Clone, PartialEq, Eq)]
pub struct FleetBoard {
    grid: Grid,
    ships: Vec<Ship>,
    ship_map: CellSet,
    ships_remaining: usize,
}

impl FleetBoard {
    /// Empty board with open water everywhere.
    pub fn new() -> Self {
        FleetBoard {
            grid: Grid::filled(CellState::EmptyRevealed),
            ships: Vec::with_capacity(FLEET_SHIPS),
            ship_map: CellSet::new(),
            ships_remaining: 0,
        }
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn ships(&self) -> &[Ship] {
        &self.ships
    }

    /// Union of all ship cells.
    pub fn ship_map(&self) -> CellSet {
        self.ship_map
    }

    /// Ships that are not sunk yet.
    pub fn ships_remaining(&self) -> usize {
        self.ships_remaining
    }

    pub fn all_sunk(&self) -> bool {
        self.ships_remaining == 0
    }

    /// Index of the ship occupying `at`.
    pub fn ship_at(&self, at: Coordinate) -> Option<usize> {
        if !self.ship_map.contains(at) {
            return None;
        }
        self.ships.iter().position(|s| s.contains(at))
    }

    /// Add a ship whose footprint has already been validated.
    pub(crate) fn add_ship(&mut self, ship: Ship) {
        for &at in ship.cells() {
            self.grid.set(at, CellState::ShipPresent);
            self.ship_map.insert(at);
        }
        self.ships.push(ship);
        self.ships_remaining += 1;
    }

    pub(crate) fn grid_mut(&mut self) -> &mut Grid {
        &mut self.grid
    }

    pub(crate) fn ship_mut(&mut self, idx: usize) -> &mut Ship {
        &mut self.ships[idx]
    }

    pub(crate) fn mark_sunk(&mut self) {
        self.ships_remaining = self.ships_remaining.saturating_sub(1);
    }
}

impl Default for FleetBoard {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for FleetBoard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "FleetBoard {{\n  remaining: {},\n  ships: {:?},\n  grid:\n{}\n}}",
            self.ships_remaining, self.ships, self.grid
        )
    }
}
