//! Match phases and turn order.

use core::fmt;

use log::info;

use crate::common::TurnError;

/// One of the two seats in a match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum PlayerId {
    One,
    Two,
}

impl PlayerId {
    pub fn other(self) -> Self {
        match self {
            PlayerId::One => PlayerId::Two,
            PlayerId::Two => PlayerId::One,
        }
    }

    /// Zero-based seat index.
    pub fn index(self) -> usize {
        match self {
            PlayerId::One => 0,
            PlayerId::Two => 1,
        }
    }

    pub fn number(self) -> u8 {
        self.index() as u8 + 1
    }
}

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Player {}", self.number())
    }
}

/// Phase of a match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Phase {
    /// Fleets are being placed, player 1 first.
    Placement,
    /// Waiting for the current player to acknowledge their turn.
    Ready,
    /// The current player may take one shot.
    Shooting,
    /// Terminal.
    Finished,
}

/// Tracks phase, whose turn it is and whether they have fired.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TurnController {
    phase: Phase,
    current: PlayerId,
    shot_taken: bool,
    winner: Option<PlayerId>,
}

impl TurnController {
    /// Start in `Placement` with player 1 placing.
    pub fn new() -> Self {
        TurnController {
            phase: Phase::Placement,
            current: PlayerId::One,
            shot_taken: false,
            winner: None,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn current(&self) -> PlayerId {
        self.current
    }

    pub fn shot_taken(&self) -> bool {
        self.shot_taken
    }

    pub fn winner(&self) -> Option<PlayerId> {
        self.winner
    }

    pub fn expect_phase(&self, expected: Phase) -> Result<(), TurnError> {
        if self.phase != expected {
            return Err(TurnError::WrongPhase {
                expected,
                actual: self.phase,
            });
        }
        Ok(())
    }

    /// The current player's fleet is confirmed. Player 1 hands over to
    /// player 2; after player 2 the match becomes `Ready` for player 1.
    pub fn fleet_confirmed(&mut self) -> Result<(), TurnError> {
        self.expect_phase(Phase::Placement)?;
        match self.current {
            PlayerId::One => self.current = PlayerId::Two,
            PlayerId::Two => {
                self.current = PlayerId::One;
                self.set_phase(Phase::Ready);
            }
        }
        Ok(())
    }

    /// Acknowledge the ready screen; the current player may now shoot.
    pub fn begin_shooting(&mut self) -> Result<PlayerId, TurnError> {
        self.expect_phase(Phase::Ready)?;
        self.shot_taken = false;
        self.set_phase(Phase::Shooting);
        Ok(self.current)
    }

    /// Check that `acting` may fire now.
    pub fn authorize_shot(&self, acting: PlayerId) -> Result<(), TurnError> {
        self.expect_phase(Phase::Shooting)?;
        if acting != self.current {
            return Err(TurnError::NotYourTurn {
                acting,
                current: self.current,
            });
        }
        if self.shot_taken {
            return Err(TurnError::ShotAlreadyTaken);
        }
        Ok(())
    }

    pub fn record_shot(&mut self) {
        self.shot_taken = true;
    }

    /// Pass the turn to the other player after a shot.
    pub fn end_turn(&mut self) -> Result<PlayerId, TurnError> {
        self.expect_phase(Phase::Shooting)?;
        if !self.shot_taken {
            return Err(TurnError::NoShotTaken);
        }
        self.current = self.current.other();
        self.shot_taken = false;
        self.set_phase(Phase::Ready);
        Ok(self.current)
    }

    pub fn finish(&mut self, winner: PlayerId) {
        self.winner = Some(winner);
        self.set_phase(Phase::Finished);
    }

    fn set_phase(&mut self, phase: Phase) {
        if self.phase != phase {
            info!("{:?} -> {:?} ({})", self.phase, phase, self.current);
        }
        self.phase = phase;
    }
}

impl Default for TurnController {
    fn default() -> Self {
        Self::new()
    }
}
