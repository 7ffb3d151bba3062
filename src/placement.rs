//! Ship placement: footprints, validation and placement sessions.
//!
//! A footprint is the ordered list of cells a ship would occupy. Vertical
//! ships grow from the anchor toward lower row indices, horizontal ships
//! toward higher column indices. A footprint is valid when it is fully on
//! the board and neither covers nor touches (diagonals included) a ship
//! already on the board.

use alloc::vec::Vec;

use log::{debug, warn};
use rand::Rng;

use crate::common::PlacementError;
use crate::config::{fleet_quota, BOARD_SIZE, FLEET, FLEET_SHIPS};
use crate::board::{FleetBoard, Grid};
use crate::coord::Coordinate;
use crate::ship::{Orientation, Ship, ShipKind};

/// Attempts per ship before random placement restarts the fleet.
const SHIP_ATTEMPTS: usize = 200;
/// Whole-fleet restarts before random placement gives up.
const FLEET_ATTEMPTS: usize = 32;

/// Step from one footprint cell to the next.
fn step(orientation: Orientation) -> (i8, i8) {
    match orientation {
        Orientation::Vertical => (0, -1),
        Orientation::Horizontal => (1, 0),
    }
}

/// Ordered cells of a `size`-long ship anchored at `anchor`.
pub fn footprint(
    anchor: Coordinate,
    size: usize,
    orientation: Orientation,
) -> Result<Vec<Coordinate>, PlacementError> {
    if ShipKind::from_size(size).is_none() {
        return Err(PlacementError::InvalidSize(size));
    }
    let (dc, dr) = step(orientation);
    let mut cells = Vec::with_capacity(size);
    let mut at = anchor;
    cells.push(at);
    for _ in 1..size {
        at = at.offset(dc, dr).ok_or(PlacementError::OutOfBounds)?;
        cells.push(at);
    }
    Ok(cells)
}

/// Check `cells` against the ships already on `board`.
pub fn validate(board: &FleetBoard, cells: &[Coordinate]) -> Result<(), PlacementError> {
    let occupied = board.ship_map();
    if cells.iter().any(|&at| occupied.contains(at)) {
        return Err(PlacementError::Overlaps);
    }
    let touching = cells
        .iter()
        .flat_map(|at| at.neighbours8())
        .any(|n| occupied.contains(n));
    if touching {
        return Err(PlacementError::Adjacent);
    }
    Ok(())
}

/// Footprint of a candidate ship, checked against `board`.
pub fn check(
    board: &FleetBoard,
    anchor: Coordinate,
    size: usize,
    orientation: Orientation,
) -> Result<Vec<Coordinate>, PlacementError> {
    let cells = footprint(anchor, size, orientation)?;
    validate(board, &cells)?;
    Ok(cells)
}

/// Hover feedback for a candidate ship: the on-board part of its footprint
/// and whether it could be placed there. Sizes no ship has yield no cells.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct PlacementPreview {
    pub cells: Vec<Coordinate>,
    pub valid: bool,
}

/// Preview a candidate ship without placing it.
pub fn preview(
    board: &FleetBoard,
    anchor: Coordinate,
    size: usize,
    orientation: Orientation,
) -> PlacementPreview {
    let Some(kind) = ShipKind::from_size(size) else {
        return PlacementPreview {
            cells: Vec::new(),
            valid: false,
        };
    };
    let (dc, dr) = step(orientation);
    let cells: Vec<Coordinate> = (0..kind.size() as i8)
        .map_while(|i| anchor.offset(dc * i, dr * i))
        .collect();
    let valid = check(board, anchor, size, orientation).is_ok();
    PlacementPreview { cells, valid }
}

/// One player's placement session.
///
/// Tracks how many ships of each size may still be placed and builds the
/// fleet board. [`FleetBuilder::confirm`] hands the board over once the full
/// fleet is in place.
#[derive(Debug, Clone)]
pub struct FleetBuilder {
    board: FleetBoard,
    // indexed by ship size
    remaining: [usize; 6],
}

impl FleetBuilder {
    pub fn new() -> Self {
        FleetBuilder {
            board: FleetBoard::new(),
            remaining: core::array::from_fn(fleet_quota),
        }
    }

    /// Ships of `size` still to be placed.
    pub fn remaining(&self, size: usize) -> usize {
        self.remaining.get(size).copied().unwrap_or(0)
    }

    pub fn placed(&self) -> usize {
        self.board.ships().len()
    }

    pub fn is_complete(&self) -> bool {
        self.remaining.iter().all(|&n| n == 0) && self.placed() == FLEET_SHIPS
    }

    pub fn board(&self) -> &FleetBoard {
        &self.board
    }

    /// Grid of the board under construction.
    pub fn grid(&self) -> &Grid {
        self.board.grid()
    }

    /// Place a ship of `size` at `anchor`, consuming one unit of that size's
    /// quota. Nothing changes on rejection.
    pub fn place(
        &mut self,
        anchor: Coordinate,
        size: usize,
        orientation: Orientation,
    ) -> Result<&Ship, PlacementError> {
        if ShipKind::from_size(size).is_none() {
            return Err(PlacementError::InvalidSize(size));
        }
        if self.remaining(size) == 0 {
            return Err(PlacementError::QuotaExhausted { size });
        }
        let cells = check(&self.board, anchor, size, orientation)?;
        let ship = Ship::new(cells, orientation)?;
        self.remaining[size] -= 1;
        self.board.add_ship(ship);
        let idx = self.board.ships().len() - 1;
        Ok(&self.board.ships()[idx])
    }

    pub fn preview(&self, anchor: Coordinate, size: usize, orientation: Orientation) -> PlacementPreview {
        preview(&self.board, anchor, size, orientation)
    }

    /// Drop every placed ship and restore all quotas.
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    /// Finish the session, yielding the frozen fleet.
    pub fn confirm(self) -> Result<FleetBoard, PlacementError> {
        if !self.is_complete() {
            return Err(PlacementError::FleetIncomplete {
                placed: self.placed(),
            });
        }
        Ok(self.board)
    }

    /// Fill the remaining quotas with randomly placed ships, largest first.
    /// Ships already placed stay where they are.
    pub fn fill_random<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<(), PlacementError> {
        for entry in FLEET.iter().rev() {
            let size = entry.kind.size();
            while self.remaining(size) > 0 {
                self.place_random(rng, size)?;
            }
        }
        Ok(())
    }

    fn place_random<R: Rng + ?Sized>(&mut self, rng: &mut R, size: usize) -> Result<(), PlacementError> {
        for _ in 0..SHIP_ATTEMPTS {
            let orientation = if rng.random() {
                Orientation::Horizontal
            } else {
                Orientation::Vertical
            };
            let anchor = Coordinate::new(
                rng.random_range(0..BOARD_SIZE),
                rng.random_range(0..BOARD_SIZE),
            )
            .map_err(|_| PlacementError::OutOfBounds)?;
            match self.place(anchor, size, orientation) {
                Ok(_) => return Ok(()),
                Err(
                    PlacementError::OutOfBounds | PlacementError::Overlaps | PlacementError::Adjacent,
                ) => continue,
                Err(e) => return Err(e),
            }
        }
        Err(PlacementError::UnableToPlace)
    }
}

impl Default for FleetBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Generate a complete random fleet.
pub fn random_fleet<R: Rng + ?Sized>(rng: &mut R) -> Result<FleetBoard, PlacementError> {
    for attempt in 0..FLEET_ATTEMPTS {
        let mut builder = FleetBuilder::new();
        match builder.fill_random(rng) {
            Ok(()) => {
                debug!("random fleet generated after {} restarts", attempt);
                return builder.confirm();
            }
            Err(PlacementError::UnableToPlace) => continue,
            Err(e) => return Err(e),
        }
    }
    warn!("random fleet generation gave up after {} restarts", FLEET_ATTEMPTS);
    Err(PlacementError::UnableToPlace)
}
