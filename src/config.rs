use crate::ship::ShipKind;
use rand::rngs::SmallRng;
use rand::SeedableRng;

pub const BOARD_SIZE: usize = 10;

/// How many ships of one kind a fleet carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FleetEntry {
    pub kind: ShipKind,
    pub count: usize,
}

impl FleetEntry {
    pub const fn new(kind: ShipKind, count: usize) -> Self {
        Self { kind, count }
    }
}

pub const NUM_KINDS: usize = 5;
pub const FLEET: [FleetEntry; NUM_KINDS] = [
    FleetEntry::new(ShipKind::Submarine, 2),
    FleetEntry::new(ShipKind::Destroyer, 2),
    FleetEntry::new(ShipKind::Cruiser, 1),
    FleetEntry::new(ShipKind::Battleship, 1),
    FleetEntry::new(ShipKind::Carrier, 1),
];

/// Number of ships every player places.
pub const FLEET_SHIPS: usize = 2 + 2 + 1 + 1 + 1;

/// Total number of ship segments in a complete fleet.
pub const FLEET_CELLS: usize = 2 * 1 + 2 * 2 + 3 + 4 + 5;

/// Number of ships of the given size in a full fleet. Sizes that are not
/// part of the fleet yield zero.
pub fn fleet_quota(size: usize) -> usize {
    FLEET
        .iter()
        .find(|entry| entry.kind.size() == size)
        .map_or(0, |entry| entry.count)
}

/// Whether one or two humans take part in a match.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum PlayerCount {
    /// Player 1 against the built-in AI.
    One,
    /// Two humans sharing the engine, taking turns.
    Two,
}

impl PlayerCount {
    pub fn from_count(count: u8) -> Option<Self> {
        match count {
            1 => Some(PlayerCount::One),
            2 => Some(PlayerCount::Two),
            _ => None,
        }
    }

    pub fn count(self) -> u8 {
        match self {
            PlayerCount::One => 1,
            PlayerCount::Two => 2,
        }
    }
}

/// Runtime settings for a match.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MatchConfig {
    pub players: PlayerCount,
    /// Fixed RNG seed for reproducible games.
    pub seed: Option<u64>,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            players: PlayerCount::One,
            seed: None,
        }
    }
}

impl MatchConfig {
    /// RNG for the match: seeded when a seed is configured, otherwise drawn
    /// from the thread RNG. `no_std` builds without a seed use seed 0.
    pub fn rng(&self) -> SmallRng {
        match self.seed {
            Some(seed) => SmallRng::seed_from_u64(seed),
            None => entropy_rng(),
        }
    }
}

#[cfg(feature = "std")]
fn entropy_rng() -> SmallRng {
    let mut seed_rng = rand::rng();
    SmallRng::from_rng(&mut seed_rng)
}

#[cfg(not(feature = "std"))]
fn entropy_rng() -> SmallRng {
    SmallRng::seed_from_u64(0)
}
