use seabattle::{Coordinate, Orientation, PlacementError, Ship, ShipKind};

fn c(col: usize, row: usize) -> Coordinate {
    Coordinate::new(col, row).unwrap()
}

#[test]
fn test_new_keeps_order_and_kind() -> Result<(), PlacementError> {
    let ship = Ship::new(vec![c(3, 5), c(3, 4), c(3, 3)], Orientation::Vertical)?;
    assert_eq!(ship.kind(), ShipKind::Cruiser);
    assert_eq!(ship.size(), 3);
    assert_eq!(ship.cells(), &[c(3, 5), c(3, 4), c(3, 3)]);
    assert!(ship.contains(c(3, 4)));
    assert!(!ship.contains(c(3, 6)));
    assert_eq!(ship.mask().len(), 3);
    Ok(())
}

#[test]
fn test_new_rejects_bad_shapes() {
    // gap
    assert_eq!(
        Ship::new(vec![c(0, 0), c(2, 0)], Orientation::Horizontal).unwrap_err(),
        PlacementError::NotContiguous
    );
    // wrong axis
    assert_eq!(
        Ship::new(vec![c(0, 0), c(1, 0)], Orientation::Vertical).unwrap_err(),
        PlacementError::NotContiguous
    );
    // diagonal
    assert_eq!(
        Ship::new(vec![c(0, 0), c(1, 1)], Orientation::Horizontal).unwrap_err(),
        PlacementError::NotContiguous
    );
    // duplicate cell
    assert_eq!(
        Ship::new(vec![c(4, 4), c(4, 4)], Orientation::Vertical).unwrap_err(),
        PlacementError::NotContiguous
    );
    assert_eq!(
        Ship::new(vec![], Orientation::Vertical).unwrap_err(),
        PlacementError::InvalidSize(0)
    );
    let six: Vec<_> = (0..6).map(|col| c(col, 0)).collect();
    assert_eq!(
        Ship::new(six, Orientation::Horizontal).unwrap_err(),
        PlacementError::InvalidSize(6)
    );
}

#[test]
fn test_single_cell_ship_either_orientation() {
    assert!(Ship::new(vec![c(7, 7)], Orientation::Vertical).is_ok());
    assert!(Ship::new(vec![c(7, 7)], Orientation::Horizontal).is_ok());
}

#[test]
fn test_register_hit_and_sunk() -> Result<(), PlacementError> {
    let mut ship = Ship::new(vec![c(1, 1), c(2, 1)], Orientation::Horizontal)?;
    assert!(!ship.is_sunk());
    assert!(!ship.register_hit(c(0, 0)));
    assert_eq!(ship.hit_count(), 0);

    assert!(ship.register_hit(c(1, 1)));
    assert!(!ship.is_sunk());
    assert!(ship.register_hit(c(2, 1)));
    assert!(ship.is_sunk());

    // saturates at size
    ship.register_hit(c(2, 1));
    assert_eq!(ship.hit_count(), 2);
    Ok(())
}

#[test]
fn test_kind_sizes() {
    for size in 1..=5 {
        assert_eq!(ShipKind::from_size(size).unwrap().size(), size);
    }
    assert_eq!(ShipKind::from_size(0), None);
    assert_eq!(ShipKind::Carrier.to_string(), "Carrier");
}

#[test]
fn test_deserialize_validates_cells() -> Result<(), PlacementError> {
    let mut ship = Ship::new(vec![c(1, 1), c(2, 1)], Orientation::Horizontal)?;
    ship.register_hit(c(1, 1));
    let json = serde_json::to_string(&ship).unwrap();
    let back: Ship = serde_json::from_str(&json).unwrap();
    assert_eq!(back, ship);
    assert_eq!(back.hit_count(), 1);

    let empty = r#"{"kind":"Submarine","orientation":"Vertical","cells":[],"hit_count":0}"#;
    assert!(serde_json::from_str::<Ship>(empty).is_err());

    let gap = r#"{"kind":"Destroyer","orientation":"Horizontal","cells":[{"col":0,"row":0},{"col":2,"row":0}],"hit_count":0}"#;
    assert!(serde_json::from_str::<Ship>(gap).is_err());

    let off_board = r#"{"kind":"Submarine","orientation":"Vertical","cells":[{"col":12,"row":0}],"hit_count":0}"#;
    assert!(serde_json::from_str::<Ship>(off_board).is_err());
    Ok(())
}
