// Hunt/target shot selection for the computer opponent.
// Works on the AI's knowledge grid only and never sees the real fleet.

use alloc::vec::Vec;

use log::{debug, warn};
use rand::Rng;

use crate::{
    bitboard::CellSet,
    board::Grid,
    common::ShotOutcome,
    coord::Coordinate,
    ship::Orientation,
};

/// What the planner is doing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum PlannerMode {
    /// No damaged ship known; shoot at random.
    Hunt,
    /// Finishing off a damaged ship.
    Target,
}

/// Memory of the ship currently being hunted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AiPlanner {
    known_hits: Vec<Coordinate>,
    candidates: CellSet,
    orientation: Option<Orientation>,
}

impl AiPlanner {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn mode(&self) -> PlannerMode {
        if self.known_hits.is_empty() {
            PlannerMode::Hunt
        } else {
            PlannerMode::Target
        }
    }

    /// Hits on the ship being hunted, in the order they landed.
    pub fn known_hits(&self) -> &[Coordinate] {
        &self.known_hits
    }

    /// Cells the next target-mode shot is drawn from.
    pub fn candidates(&self) -> CellSet {
        self.candidates
    }

    pub fn orientation(&self) -> Option<Orientation> {
        self.orientation
    }

    pub fn reset(&mut self) {
        self.known_hits.clear();
        self.candidates.clear();
        self.orientation = None;
    }

    /// Pick the next cell to fire at.
    ///
    /// Returns `None` only when nothing on the knowledge grid is left to
    /// shoot. If the target pool runs dry without a sink the memory is
    /// dropped and a hunt shot is drawn instead.
    pub fn choose_shot<R: Rng + ?Sized>(&mut self, knowledge: &Grid, rng: &mut R) -> Option<Coordinate> {
        if self.mode() == PlannerMode::Target {
            if let Some(at) = draw(self.candidates, knowledge, rng) {
                debug!("AI targets {} ({} known hits)", at, self.known_hits.len());
                return Some(at);
            }
            warn!("AI target pool exhausted without a sink, back to hunting");
            self.reset();
        }
        let at = draw(CellSet::full(), knowledge, rng)?;
        debug!("AI hunts at {}", at);
        Some(at)
    }

    /// Update memory with the outcome of the shot just fired. `knowledge`
    /// is the AI's grid after the shot.
    pub fn record(&mut self, knowledge: &Grid, outcome: &ShotOutcome) {
        if outcome.already_taken {
            return;
        }
        let at = outcome.at;
        if outcome.sunk {
            debug!("AI sank a ship at {}", at);
            self.reset();
            return;
        }
        if !outcome.hit {
            self.candidates.remove(at);
            return;
        }

        let unexplored = |c: &Coordinate| knowledge.get(*c).is_shootable();
        match self.mode() {
            PlannerMode::Hunt => {
                self.known_hits.push(at);
                self.candidates = at.neighbours4().filter(unexplored).collect();
            }
            PlannerMode::Target => {
                self.known_hits.push(at);
                self.candidates.clear();
                if self.known_hits.len() == 2 {
                    self.orientation = Some(infer_orientation(self.known_hits[0], self.known_hits[1]));
                    debug!("AI infers {:?} ship", self.orientation);
                }
                if let Some(orientation) = self.orientation {
                    self.candidates = chain_ends(&self.known_hits, orientation)
                        .into_iter()
                        .flatten()
                        .filter(unexplored)
                        .collect();
                }
            }
        }
    }
}

/// Two hits on the same ship lie in a row when their columns differ.
fn infer_orientation(first: Coordinate, second: Coordinate) -> Orientation {
    if first.col() != second.col() {
        Orientation::Horizontal
    } else {
        Orientation::Vertical
    }
}

/// Cells one step beyond both ends of a straight chain of hits.
fn chain_ends(hits: &[Coordinate], orientation: Orientation) -> [Option<Coordinate>; 2] {
    let key = |c: &&Coordinate| match orientation {
        Orientation::Vertical => c.row(),
        Orientation::Horizontal => c.col(),
    };
    let (Some(low), Some(high)) = (hits.iter().min_by_key(key), hits.iter().max_by_key(key)) else {
        return [None, None];
    };
    match orientation {
        Orientation::Vertical => [low.offset(0, -1), high.offset(0, 1)],
        Orientation::Horizontal => [low.offset(-1, 0), high.offset(1, 0)],
    }
}

/// Draw uniformly from `pool` until a shootable cell turns up. Cells that
/// cannot be shot are dropped from the pool, so the loop ends.
fn draw<R: Rng + ?Sized>(mut pool: CellSet, knowledge: &Grid, rng: &mut R) -> Option<Coordinate> {
    while !pool.is_empty() {
        let at = pool.nth(rng.random_range(0..pool.len()))?;
        if knowledge.get(at).is_shootable() {
            return Some(at);
        }
        pool.remove(at);
    }
    None
}
