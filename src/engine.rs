//! The game engine: owns every piece of match state and exposes the
//! operations a front end drives.
//!
//! A front end calls the placement operations until both fleets are
//! confirmed, then alternates `ready` / `take_shot` / `end_turn`. After each
//! call it pulls grids with the snapshot accessors and drains
//! [`GameEvent`]s to learn what happened. Rejected calls return a
//! [`GameError`] and leave the state untouched.

use alloc::vec::Vec;
use core::mem;

use log::{debug, info, warn};
use rand::rngs::SmallRng;

use crate::{
    ai::AiPlanner,
    board::{CellState, FleetBoard, Grid},
    common::{GameError, PlacementError, ShotOutcome, TurnError},
    config::{MatchConfig, PlayerCount, FLEET_SHIPS},
    coord::Coordinate,
    placement::{self, FleetBuilder, PlacementPreview},
    ship::{Orientation, Ship, ShipKind},
    shot,
    turn::{Phase, PlayerId, TurnController},
};

/// Something the render layer may want to react to.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum GameEvent {
    ShipPlaced {
        player: PlayerId,
        kind: ShipKind,
        cells: Vec<Coordinate>,
    },
    FleetReset { player: PlayerId },
    FleetConfirmed { player: PlayerId },
    PhaseChanged { phase: Phase, current: PlayerId },
    ShotResolved { player: PlayerId, outcome: ShotOutcome },
    TurnEnded { next: PlayerId },
    Victory { winner: PlayerId },
}

/// Match-level state for a renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct MatchState {
    pub phase: Phase,
    pub current_player: PlayerId,
    pub shot_taken: bool,
    /// Ships still afloat, indexed by seat. A seat still placing reports
    /// its full fleet.
    pub ships_remaining: [usize; 2],
    pub winner: Option<PlayerId>,
    pub players: PlayerCount,
}

/// Both boards of one seat.
#[derive(Debug, Clone, Default)]
struct Side {
    fleet: FleetBoard,
    knowledge: Grid,
    /// Set once the fleet is locked in; until then `fleet` is empty.
    confirmed: bool,
}

impl Side {
    /// Ships still afloat. A seat that is still placing counts its whole
    /// fleet, so zero only ever means defeat.
    fn ships_remaining(&self) -> usize {
        if self.confirmed {
            self.fleet.ships_remaining()
        } else {
            FLEET_SHIPS
        }
    }
}

/// Core engine holding both seats, the turn controller and AI memory.
pub struct GameEngine {
    players: PlayerCount,
    sides: [Side; 2],
    builder: FleetBuilder,
    turn: TurnController,
    ai: Option<AiPlanner>,
    rng: SmallRng,
    events: Vec<GameEvent>,
}

impl GameEngine {
    /// Start a match in the placement phase.
    pub fn new(config: MatchConfig) -> Self {
        Self::with_rng(config.players, config.rng())
    }

    /// Start a match using the given RNG for AI fleets and shots.
    pub fn with_rng(players: PlayerCount, rng: SmallRng) -> Self {
        let mut engine = GameEngine {
            players,
            sides: Default::default(),
            builder: FleetBuilder::new(),
            turn: TurnController::new(),
            ai: None,
            rng,
            events: Vec::new(),
        };
        engine.start_match(players);
        engine
    }

    /// Throw away the current match and start a new one.
    pub fn start_match(&mut self, players: PlayerCount) {
        info!("starting {}-player match", players.count());
        self.players = players;
        self.sides = Default::default();
        self.builder = FleetBuilder::new();
        self.turn = TurnController::new();
        self.ai = match players {
            PlayerCount::One => Some(AiPlanner::new()),
            PlayerCount::Two => None,
        };
        self.events.clear();
        self.emit_phase();
    }

    pub fn players(&self) -> PlayerCount {
        self.players
    }

    pub fn phase(&self) -> Phase {
        self.turn.phase()
    }

    pub fn current_player(&self) -> PlayerId {
        self.turn.current()
    }

    pub fn match_state(&self) -> MatchState {
        MatchState {
            phase: self.turn.phase(),
            current_player: self.turn.current(),
            shot_taken: self.turn.shot_taken(),
            ships_remaining: [self.sides[0].ships_remaining(), self.sides[1].ships_remaining()],
            winner: self.turn.winner(),
            players: self.players,
        }
    }

    /// `player`'s own fleet as the opponent's shots left it.
    pub fn fleet_snapshot(&self, player: PlayerId) -> Grid {
        *self.sides[player.index()].fleet.grid()
    }

    /// What `player` knows about the opponent's fleet.
    pub fn knowledge_snapshot(&self, player: PlayerId) -> Grid {
        self.sides[player.index()].knowledge
    }

    /// The board of the placement session in progress.
    pub fn placement_snapshot(&self) -> Grid {
        *self.builder.grid()
    }

    pub fn ships(&self, player: PlayerId) -> &[Ship] {
        self.sides[player.index()].fleet.ships()
    }

    /// Ships of `size` the placing player still has to place.
    pub fn remaining_quota(&self, size: usize) -> usize {
        self.builder.remaining(size)
    }

    /// AI memory, in single-player matches.
    pub fn ai_planner(&self) -> Option<&AiPlanner> {
        self.ai.as_ref()
    }

    /// Take every event emitted since the last call.
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        mem::take(&mut self.events)
    }

    /// Place one ship for the player currently placing.
    pub fn place_ship_attempt(
        &mut self,
        anchor: Coordinate,
        size: usize,
        orientation: Orientation,
    ) -> Result<(), GameError> {
        self.turn.expect_phase(Phase::Placement)?;
        let player = self.turn.current();
        let ship = self.builder.place(anchor, size, orientation).map_err(|e| {
            debug!("{} rejected ship at {}: {}", player, anchor, e);
            e
        })?;
        let event = GameEvent::ShipPlaced {
            player,
            kind: ship.kind(),
            cells: ship.cells().to_vec(),
        };
        debug!("{} placed {:?}", player, ship);
        self.events.push(event);
        Ok(())
    }

    /// Hover feedback for a ship the placing player is positioning.
    pub fn placement_preview(
        &self,
        anchor: Coordinate,
        size: usize,
        orientation: Orientation,
    ) -> PlacementPreview {
        self.builder.preview(anchor, size, orientation)
    }

    /// Replace the current session with a random complete fleet.
    pub fn auto_place_fleet(&mut self) -> Result<(), GameError> {
        self.turn.expect_phase(Phase::Placement)?;
        let fleet = placement::random_fleet(&mut self.rng)?;
        let player = self.turn.current();
        self.builder.reset();
        self.events.push(GameEvent::FleetReset { player });
        for ship in fleet.ships() {
            self.builder
                .place(ship.cells()[0], ship.size(), ship.orientation())?;
            self.events.push(GameEvent::ShipPlaced {
                player,
                kind: ship.kind(),
                cells: ship.cells().to_vec(),
            });
        }
        Ok(())
    }

    /// Discard the ships placed so far in this session.
    pub fn reset_fleet(&mut self) -> Result<(), GameError> {
        self.turn.expect_phase(Phase::Placement)?;
        self.builder.reset();
        self.events.push(GameEvent::FleetReset {
            player: self.turn.current(),
        });
        Ok(())
    }

    /// Lock in the placing player's fleet. In a single-player match the
    /// AI's fleet is generated right after player 1 confirms.
    pub fn confirm_fleet(&mut self) -> Result<(), GameError> {
        self.turn.expect_phase(Phase::Placement)?;
        if !self.builder.is_complete() {
            return Err(PlacementError::FleetIncomplete {
                placed: self.builder.placed(),
            }
            .into());
        }
        if self.players == PlayerCount::One && self.turn.current() == PlayerId::One {
            // generate the AI fleet first so a failure leaves player 1 placing
            let ai_fleet = placement::random_fleet(&mut self.rng)?;
            self.commit_fleet()?;
            let ai_side = &mut self.sides[PlayerId::Two.index()];
            ai_side.fleet = ai_fleet;
            ai_side.confirmed = true;
            self.events.push(GameEvent::FleetConfirmed {
                player: PlayerId::Two,
            });
            self.turn.fleet_confirmed()?;
        } else {
            self.commit_fleet()?;
        }
        self.emit_phase();
        Ok(())
    }

    fn commit_fleet(&mut self) -> Result<(), GameError> {
        let player = self.turn.current();
        let fleet = mem::take(&mut self.builder).confirm()?;
        let side = &mut self.sides[player.index()];
        side.fleet = fleet;
        side.confirmed = true;
        self.events.push(GameEvent::FleetConfirmed { player });
        self.turn.fleet_confirmed()?;
        Ok(())
    }

    /// Acknowledge the ready screen for the current player.
    pub fn ready(&mut self) -> Result<PlayerId, GameError> {
        let player = self.turn.begin_shooting()?;
        self.emit_phase();
        Ok(player)
    }

    /// Shoot as the current player.
    pub fn take_shot(&mut self, at: Coordinate) -> Result<ShotOutcome, GameError> {
        self.take_shot_as(self.turn.current(), at)
    }

    /// Shoot as `player`, who must be the current player and must not have
    /// fired yet this turn.
    pub fn take_shot_as(&mut self, player: PlayerId, at: Coordinate) -> Result<ShotOutcome, GameError> {
        self.turn.authorize_shot(player)?;
        let (shooter, target) = self.split_sides(player);
        let outcome = shot::resolve(&mut target.fleet, &mut shooter.knowledge, at);
        if outcome.already_taken {
            debug!("{} re-shot {}", player, at);
            return Err(GameError::IllegalShot(at));
        }
        let defeated = target.fleet.all_sunk();
        self.turn.record_shot();
        self.events.push(GameEvent::ShotResolved { player, outcome });
        if defeated {
            info!("{} wins", player);
            self.turn.finish(player);
            self.events.push(GameEvent::Victory { winner: player });
            self.emit_phase();
        }
        Ok(outcome)
    }

    /// Mark or unmark an unknown cell on the current player's knowledge
    /// grid. Returns the cell's new state.
    pub fn toggle_highlight(&mut self, at: Coordinate) -> Result<CellState, GameError> {
        let phase = self.turn.phase();
        if !matches!(phase, Phase::Ready | Phase::Shooting) {
            return Err(TurnError::WrongPhase {
                expected: Phase::Shooting,
                actual: phase,
            }
            .into());
        }
        let knowledge = &mut self.sides[self.turn.current().index()].knowledge;
        let next = match knowledge.get(at) {
            CellState::Unknown => CellState::Highlighted,
            CellState::Highlighted => CellState::Unknown,
            _ => return Err(GameError::IllegalShot(at)),
        };
        knowledge.set(at, next);
        Ok(next)
    }

    /// Finish the current player's turn. In a single-player match the AI
    /// plays its whole turn before this returns.
    pub fn end_turn(&mut self) -> Result<(), GameError> {
        let next = self.turn.end_turn()?;
        self.events.push(GameEvent::TurnEnded { next });
        if self.players == PlayerCount::One && next == PlayerId::Two {
            self.ai_turn()?;
        }
        if self.turn.phase() != Phase::Finished {
            self.emit_phase();
        }
        Ok(())
    }

    fn ai_turn(&mut self) -> Result<(), GameError> {
        self.turn.begin_shooting()?;
        let Some(mut planner) = self.ai.take() else {
            warn!("single-player match without AI memory");
            self.ai = Some(AiPlanner::new());
            return Ok(());
        };
        let knowledge = self.sides[PlayerId::Two.index()].knowledge;
        let result = match planner.choose_shot(&knowledge, &mut self.rng) {
            Some(at) => self.take_shot_as(PlayerId::Two, at).map(|outcome| {
                let knowledge = self.sides[PlayerId::Two.index()].knowledge;
                planner.record(&knowledge, &outcome);
            }),
            None => {
                warn!("AI found nothing left to shoot");
                self.turn.record_shot();
                Ok(())
            }
        };
        self.ai = Some(planner);
        result?;
        if self.turn.phase() == Phase::Shooting {
            let next = self.turn.end_turn()?;
            self.events.push(GameEvent::TurnEnded { next });
        }
        Ok(())
    }

    /// Shooter's side and target's side, borrowed together.
    fn split_sides(&mut self, shooter: PlayerId) -> (&mut Side, &mut Side) {
        let [one, two] = &mut self.sides;
        match shooter {
            PlayerId::One => (one, two),
            PlayerId::Two => (two, one),
        }
    }

    fn emit_phase(&mut self) {
        self.events.push(GameEvent::PhaseChanged {
            phase: self.turn.phase(),
            current: self.turn.current(),
        });
    }
}
