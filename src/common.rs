//! Common types for the engine: errors and shot outcomes.

use core::fmt;

use crate::coord::Coordinate;
use crate::ship::ShipKind;
use crate::turn::{Phase, PlayerId};

/// Result of a shot at an opponent's fleet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct ShotOutcome {
    /// Target cell.
    pub at: Coordinate,
    /// The cell had already been revealed; nothing changed.
    pub already_taken: bool,
    /// A ship segment was hit.
    pub hit: bool,
    /// The hit sank its ship.
    pub sunk: bool,
    /// Kind of the ship that went down, when `sunk`.
    pub sunk_kind: Option<ShipKind>,
}

impl ShotOutcome {
    pub(crate) fn already_taken(at: Coordinate) -> Self {
        Self {
            at,
            already_taken: true,
            hit: false,
            sunk: false,
            sunk_kind: None,
        }
    }

    pub(crate) fn miss(at: Coordinate) -> Self {
        Self {
            at,
            already_taken: false,
            hit: false,
            sunk: false,
            sunk_kind: None,
        }
    }

    pub(crate) fn hit(at: Coordinate, sunk_kind: Option<ShipKind>) -> Self {
        Self {
            at,
            already_taken: false,
            hit: true,
            sunk: sunk_kind.is_some(),
            sunk_kind,
        }
    }
}

/// Reasons a ship placement or fleet confirmation is rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum PlacementError {
    /// Part of the footprint falls off the board.
    OutOfBounds,
    /// The footprint covers an existing ship.
    Overlaps,
    /// The footprint touches an existing ship, diagonals included.
    Adjacent,
    /// Every ship of this size has already been placed.
    QuotaExhausted { size: usize },
    /// No ship of this size exists in the fleet.
    InvalidSize(usize),
    /// Cells do not form a straight contiguous line.
    NotContiguous,
    /// Confirmation attempted before the whole fleet was placed.
    FleetIncomplete { placed: usize },
    /// Random placement gave up.
    UnableToPlace,
}

impl fmt::Display for PlacementError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlacementError::OutOfBounds => write!(f, "ship does not fit on the board"),
            PlacementError::Overlaps => write!(f, "ship overlaps another ship"),
            PlacementError::Adjacent => write!(f, "ship touches another ship"),
            PlacementError::QuotaExhausted { size } => {
                write!(f, "no ships of size {} left to place", size)
            }
            PlacementError::InvalidSize(size) => write!(f, "no ship has size {}", size),
            PlacementError::NotContiguous => write!(f, "ship cells are not a straight line"),
            PlacementError::FleetIncomplete { placed } => {
                write!(f, "only {} ships placed", placed)
            }
            PlacementError::UnableToPlace => write!(f, "unable to place ship"),
        }
    }
}

/// Actions attempted by the wrong player or at the wrong time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum TurnError {
    NotYourTurn { acting: PlayerId, current: PlayerId },
    /// A second shot in the same turn.
    ShotAlreadyTaken,
    /// Ending a turn without having shot.
    NoShotTaken,
    WrongPhase { expected: Phase, actual: Phase },
}

impl fmt::Display for TurnError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TurnError::NotYourTurn { acting, current } => {
                write!(f, "{} acted during {}'s turn", acting, current)
            }
            TurnError::ShotAlreadyTaken => write!(f, "a shot was already taken this turn"),
            TurnError::NoShotTaken => write!(f, "no shot taken this turn"),
            TurnError::WrongPhase { expected, actual } => {
                write!(f, "expected {:?} phase, match is in {:?}", expected, actual)
            }
        }
    }
}

/// Errors returned by engine operations. None of them leave partial state
/// behind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum GameError {
    InvalidPlacement(PlacementError),
    /// Shot at a cell that is already revealed.
    IllegalShot(Coordinate),
    OutOfTurnAction(TurnError),
    /// Coordinate outside the board.
    OutOfBounds { col: usize, row: usize },
    /// Text that is not a coordinate.
    Unparsable,
}

impl From<PlacementError> for GameError {
    fn from(err: PlacementError) -> Self {
        GameError::InvalidPlacement(err)
    }
}

impl From<TurnError> for GameError {
    fn from(err: TurnError) -> Self {
        GameError::OutOfTurnAction(err)
    }
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameError::InvalidPlacement(e) => write!(f, "invalid placement: {}", e),
            GameError::IllegalShot(at) => write!(f, "{} has already been shot", at),
            GameError::OutOfTurnAction(e) => write!(f, "out of turn: {}", e),
            GameError::OutOfBounds { col, row } => {
                write!(f, "({}, {}) is off the board", col, row)
            }
            GameError::Unparsable => write!(f, "not a coordinate"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for GameError {}
