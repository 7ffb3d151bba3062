use rand::rngs::SmallRng;
use rand::SeedableRng;
use seabattle::placement::{footprint, preview};
use seabattle::{
    random_fleet, CellState, Coordinate, FleetBuilder, Orientation, PlacementError, FLEET_CELLS,
    FLEET_SHIPS,
};

fn c(col: usize, row: usize) -> Coordinate {
    Coordinate::new(col, row).unwrap()
}

#[test]
fn test_footprint_directions() {
    assert_eq!(
        footprint(c(3, 3), 3, Orientation::Vertical).unwrap(),
        vec![c(3, 3), c(3, 2), c(3, 1)]
    );
    assert_eq!(
        footprint(c(3, 3), 3, Orientation::Horizontal).unwrap(),
        vec![c(3, 3), c(4, 3), c(5, 3)]
    );
    assert_eq!(
        footprint(c(3, 1), 3, Orientation::Vertical).unwrap_err(),
        PlacementError::OutOfBounds
    );
    assert_eq!(
        footprint(c(8, 0), 3, Orientation::Horizontal).unwrap_err(),
        PlacementError::OutOfBounds
    );
    assert_eq!(
        footprint(c(0, 9), 6, Orientation::Vertical).unwrap_err(),
        PlacementError::InvalidSize(6)
    );
}

#[test]
fn test_overlap_and_adjacency_rejected() {
    let mut builder = FleetBuilder::new();
    builder.place(c(0, 0), 1, Orientation::Vertical).unwrap();

    assert_eq!(
        builder.place(c(0, 1), 1, Orientation::Vertical).unwrap_err(),
        PlacementError::Adjacent
    );
    assert_eq!(
        builder.place(c(1, 1), 1, Orientation::Vertical).unwrap_err(),
        PlacementError::Adjacent
    );
    assert_eq!(
        builder.place(c(0, 0), 1, Orientation::Vertical).unwrap_err(),
        PlacementError::Overlaps
    );
    // a destroyer whose tail would touch the submarine
    assert_eq!(
        builder.place(c(0, 2), 2, Orientation::Vertical).unwrap_err(),
        PlacementError::Adjacent
    );
    assert_eq!(builder.placed(), 1);
    assert_eq!(builder.remaining(1), 1);

    builder.place(c(2, 0), 1, Orientation::Vertical).unwrap();
    assert_eq!(builder.remaining(1), 0);
}

#[test]
fn test_quota_enforced() {
    let mut builder = FleetBuilder::new();
    builder.place(c(0, 0), 1, Orientation::Vertical).unwrap();
    builder.place(c(5, 5), 1, Orientation::Vertical).unwrap();
    assert_eq!(
        builder.place(c(9, 9), 1, Orientation::Vertical).unwrap_err(),
        PlacementError::QuotaExhausted { size: 1 }
    );
    assert_eq!(
        builder.place(c(9, 9), 0, Orientation::Vertical).unwrap_err(),
        PlacementError::InvalidSize(0)
    );
    builder.place(c(0, 9), 5, Orientation::Horizontal).unwrap();
    assert_eq!(
        builder.place(c(9, 9), 5, Orientation::Vertical).unwrap_err(),
        PlacementError::QuotaExhausted { size: 5 }
    );
}

#[test]
fn test_preview_clips_and_does_not_place() {
    let mut builder = FleetBuilder::new();
    builder.place(c(5, 5), 1, Orientation::Vertical).unwrap();

    let clipped = builder.preview(c(0, 1), 3, Orientation::Vertical);
    assert_eq!(clipped.cells, vec![c(0, 1), c(0, 0)]);
    assert!(!clipped.valid);

    let touching = builder.preview(c(3, 4), 2, Orientation::Horizontal);
    assert_eq!(touching.cells, vec![c(3, 4), c(4, 4)]);
    assert!(!touching.valid);

    let fine = preview(builder.board(), c(0, 9), 4, Orientation::Vertical);
    assert_eq!(fine.cells.len(), 4);
    assert!(fine.valid);

    assert_eq!(builder.placed(), 1);
    assert_eq!(builder.grid().count(CellState::ShipPresent), 1);
}

#[test]
fn test_confirm_requires_full_fleet() {
    let mut builder = FleetBuilder::new();
    builder.place(c(0, 0), 1, Orientation::Vertical).unwrap();
    assert_eq!(
        builder.clone().confirm().unwrap_err(),
        PlacementError::FleetIncomplete { placed: 1 }
    );

    let mut rng = SmallRng::seed_from_u64(11);
    builder.fill_random(&mut rng).unwrap();
    assert!(builder.is_complete());
    let fleet = builder.confirm().unwrap();
    assert_eq!(fleet.ships().len(), FLEET_SHIPS);
    assert_eq!(fleet.ship_map().len(), FLEET_CELLS);
    // the hand-placed ship survives random filling
    assert_eq!(fleet.ship_at(c(0, 0)), Some(0));
}

#[test]
fn test_reset_restores_quotas() {
    let mut builder = FleetBuilder::new();
    builder.place(c(0, 0), 5, Orientation::Horizontal).unwrap();
    assert_eq!(builder.remaining(5), 0);
    builder.reset();
    assert_eq!(builder.remaining(5), 1);
    assert_eq!(builder.remaining(1), 2);
    assert_eq!(builder.placed(), 0);
    assert!(builder.board().ship_map().is_empty());
}

#[test]
fn test_random_fleet_is_deterministic_per_seed() {
    let a = random_fleet(&mut SmallRng::seed_from_u64(3)).unwrap();
    let b = random_fleet(&mut SmallRng::seed_from_u64(3)).unwrap();
    assert_eq!(a, b);
    assert_eq!(a.ships_remaining(), FLEET_SHIPS);
}

#[test]
fn test_preview_of_unknown_size_is_empty() {
    let builder = FleetBuilder::new();
    for size in [0, 6, 9, 127, 200] {
        let preview = builder.preview(c(0, 9), size, Orientation::Vertical);
        assert!(preview.cells.is_empty(), "size {}", size);
        assert!(!preview.valid);
    }
    let carrier = builder.preview(c(0, 9), 5, Orientation::Vertical);
    assert_eq!(carrier.cells.len(), 5);
    assert!(carrier.valid);
}
