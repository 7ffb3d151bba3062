use proptest::prelude::*;
use rand::{rngs::SmallRng, Rng, SeedableRng};
use seabattle::{
    random_fleet, CellState, Coordinate, FleetBuilder, Orientation, PlacementError, ShipKind,
    BOARD_SIZE, FLEET, FLEET_CELLS, FLEET_SHIPS,
};

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn random_fleet_is_legal(seed in any::<u64>()) {
        let mut rng = SmallRng::seed_from_u64(seed);
        let fleet = random_fleet(&mut rng).unwrap();

        prop_assert_eq!(fleet.ships().len(), FLEET_SHIPS);
        prop_assert_eq!(fleet.ship_map().len(), FLEET_CELLS);
        prop_assert_eq!(fleet.grid().count(CellState::ShipPresent), FLEET_CELLS);
        for entry in FLEET.iter() {
            let n = fleet.ships().iter().filter(|s| s.kind() == entry.kind).count();
            prop_assert_eq!(n, entry.count);
        }
        // no two ships touch, diagonals included
        for (i, a) in fleet.ships().iter().enumerate() {
            for b in fleet.ships().iter().skip(i + 1) {
                prop_assert!(!a.mask().dilate().intersects(&b.mask()));
            }
        }
    }

    #[test]
    fn builder_accepts_only_legal_ships(seed in any::<u64>()) {
        let mut rng = SmallRng::seed_from_u64(seed);
        let mut builder = FleetBuilder::new();
        for _ in 0..200 {
            let size = rng.random_range(1..=5);
            let orientation = if rng.random() { Orientation::Vertical } else { Orientation::Horizontal };
            let anchor = Coordinate::new(
                rng.random_range(0..BOARD_SIZE),
                rng.random_range(0..BOARD_SIZE),
            ).unwrap();
            let before = builder.board().ship_map();
            let quota = builder.remaining(size);
            match builder.place(anchor, size, orientation) {
                Ok(ship) => {
                    prop_assert_eq!(ship.kind(), ShipKind::from_size(size).unwrap());
                    prop_assert!(!ship.mask().dilate().intersects(&before));
                    prop_assert_eq!(builder.remaining(size), quota - 1);
                }
                Err(PlacementError::QuotaExhausted { .. }) => prop_assert_eq!(quota, 0),
                Err(_) => {
                    prop_assert_eq!(builder.board().ship_map(), before);
                    prop_assert_eq!(builder.remaining(size), quota);
                }
            }
        }
        prop_assert!(builder.placed() <= FLEET_SHIPS);
    }
}
