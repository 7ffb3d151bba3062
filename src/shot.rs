//! Shot resolution against a fleet board.

use log::debug;

use crate::board::{CellState, FleetBoard, Grid};
use crate::common::ShotOutcome;
use crate::coord::Coordinate;

/// Fire at `at` on `target`, recording the result on the shooter's
/// `knowledge` grid.
///
/// Only cells still unknown (or highlighted) on the knowledge grid can be
/// shot; anything else comes back with `already_taken` set and leaves both
/// boards untouched. Sinking a ship marks all of its cells sunk and reveals
/// the water around it on the knowledge grid. The fleet grid already shows
/// that water as `EmptyRevealed`.
pub fn resolve(target: &mut FleetBoard, knowledge: &mut Grid, at: Coordinate) -> ShotOutcome {
    let seen = knowledge.get(at);
    let actual = target.grid().get(at);
    if !seen.is_shootable() || matches!(actual, CellState::ShipHit { .. } | CellState::MissRevealed) {
        return ShotOutcome::already_taken(at);
    }

    let Some(idx) = target.ship_at(at) else {
        target.grid_mut().set(at, CellState::MissRevealed);
        knowledge.set(at, CellState::MissRevealed);
        debug!("shot at {} missed", at);
        return ShotOutcome::miss(at);
    };

    let ship = target.ship_mut(idx);
    ship.register_hit(at);
    if !ship.is_sunk() {
        target.grid_mut().set(at, CellState::ShipHit { sunk: false });
        knowledge.set(at, CellState::ShipHit { sunk: false });
        debug!("shot at {} hit", at);
        return ShotOutcome::hit(at, None);
    }

    let kind = ship.kind();
    let mask = ship.mask();
    let sunk = CellState::ShipHit { sunk: true };
    for cell in mask.iter() {
        target.grid_mut().set(cell, sunk);
        knowledge.set(cell, sunk);
    }
    for cell in (mask.dilate() - mask).iter() {
        if knowledge.get(cell) == CellState::Unknown {
            knowledge.set(cell, CellState::EmptyRevealed);
        }
    }
    target.mark_sunk();
    debug!("shot at {} sank a {}, {} ships left", at, kind, target.ships_remaining());
    ShotOutcome::hit(at, Some(kind))
}
