use seabattle::{CellState, Coordinate, FleetBoard, FleetBuilder, Grid, Orientation};

fn c(col: usize, row: usize) -> Coordinate {
    Coordinate::new(col, row).unwrap()
}

#[test]
fn test_new_fleet_board_is_open_water() {
    let board = FleetBoard::new();
    assert_eq!(board.grid().count(CellState::EmptyRevealed), 100);
    assert!(board.ships().is_empty());
    assert!(board.ship_map().is_empty());
    assert!(board.all_sunk());
    assert_eq!(board.ship_at(c(0, 0)), None);
}

#[test]
fn test_knowledge_grid_starts_unknown() {
    let grid = Grid::default();
    assert_eq!(grid, Grid::unknown());
    assert_eq!(grid.count(CellState::Unknown), 100);
    assert_eq!(grid.shootable().len(), 100);
}

#[test]
fn test_ship_occupancy() {
    let mut builder = FleetBuilder::new();
    builder.place(c(2, 5), 3, Orientation::Vertical).unwrap();
    builder.place(c(6, 0), 2, Orientation::Horizontal).unwrap();
    let board = builder.board();

    assert_eq!(board.ships().len(), 2);
    assert_eq!(board.ships_remaining(), 2);
    assert_eq!(board.ship_map().len(), 5);
    assert_eq!(board.grid().count(CellState::ShipPresent), 5);
    for at in [c(2, 5), c(2, 4), c(2, 3)] {
        assert_eq!(board.ship_at(at), Some(0));
        assert_eq!(board.grid().get(at), CellState::ShipPresent);
    }
    assert_eq!(board.ship_at(c(7, 0)), Some(1));
    assert_eq!(board.ship_at(c(2, 6)), None);
}

#[test]
fn test_set_get_and_select() {
    let mut grid = Grid::unknown();
    grid.set(c(3, 7), CellState::Highlighted);
    grid.set(c(4, 7), CellState::MissRevealed);
    assert_eq!(grid.get(c(3, 7)), CellState::Highlighted);
    assert_eq!(grid.rows()[7][4], CellState::MissRevealed);

    // highlighted cells can still be shot
    assert_eq!(grid.shootable().len(), 99);
    let misses = grid.select(|s| s == CellState::MissRevealed);
    assert_eq!(misses.iter().collect::<Vec<_>>(), vec![c(4, 7)]);
}

#[test]
fn test_cell_state_predicates() {
    assert!(CellState::Unknown.is_shootable());
    assert!(CellState::Highlighted.is_shootable());
    assert!(!CellState::MissRevealed.is_shootable());
    assert!(!CellState::EmptyRevealed.is_shootable());
    assert!(!CellState::ShipHit { sunk: false }.is_shootable());
    assert!(CellState::ShipHit { sunk: true }.is_ship());
    assert!(CellState::ShipPresent.is_ship());
    assert!(!CellState::MissRevealed.is_ship());
}

#[test]
fn test_display_layout() {
    let mut grid = Grid::unknown();
    grid.set(c(0, 0), CellState::ShipHit { sunk: false });
    grid.set(c(9, 9), CellState::MissRevealed);
    let text = grid.to_string();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), 11);
    assert!(lines[0].trim_start().starts_with("A B C"));
    assert!(lines[1].starts_with(" 1  x"));
    assert!(lines[10].starts_with("10 "));
    assert!(lines[10].ends_with('o'));
}
