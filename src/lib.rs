#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

mod ai;
mod bitboard;
mod board;
mod common;
mod config;
mod coord;
mod engine;
#[cfg(feature = "std")]
mod logging;
pub mod placement;
mod ship;
pub mod shot;
#[cfg(feature = "std")]
pub mod text;
mod turn;

pub use ai::{AiPlanner, PlannerMode};
pub use bitboard::{BitBoard, BitBoardError, CellSet};
pub use board::{BoardSnapshot, CellState, FleetBoard, Grid};
pub use common::{GameError, PlacementError, ShotOutcome, TurnError};
pub use config::*;
pub use coord::Coordinate;
pub use engine::{GameEngine, GameEvent, MatchState};
#[cfg(feature = "std")]
pub use logging::{init_logging, init_logging_with};
pub use placement::{random_fleet, FleetBuilder, PlacementPreview};
pub use ship::{Orientation, Ship, ShipKind};
pub use turn::{Phase, PlayerId, TurnController};
