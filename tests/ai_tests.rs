use rand::rngs::SmallRng;
use rand::SeedableRng;
use seabattle::{AiPlanner, CellState, Coordinate, Grid, Orientation, PlannerMode, ShipKind, ShotOutcome};

fn c(col: usize, row: usize) -> Coordinate {
    Coordinate::new(col, row).unwrap()
}

fn outcome(at: Coordinate, hit: bool, sunk_kind: Option<ShipKind>) -> ShotOutcome {
    ShotOutcome {
        at,
        already_taken: false,
        hit,
        sunk: sunk_kind.is_some(),
        sunk_kind,
    }
}

/// Mark `at` as a live hit on `knowledge` and tell the planner about it.
fn hit(planner: &mut AiPlanner, knowledge: &mut Grid, at: Coordinate) {
    knowledge.set(at, CellState::ShipHit { sunk: false });
    planner.record(knowledge, &outcome(at, true, None));
}

#[test]
fn test_hunt_picks_shootable_cells() {
    let mut rng = SmallRng::seed_from_u64(1);
    let mut planner = AiPlanner::new();
    assert_eq!(planner.mode(), PlannerMode::Hunt);

    let mut knowledge = Grid::filled(CellState::MissRevealed);
    knowledge.set(c(6, 2), CellState::Unknown);
    assert_eq!(planner.choose_shot(&knowledge, &mut rng), Some(c(6, 2)));

    knowledge.set(c(6, 2), CellState::Highlighted);
    assert_eq!(planner.choose_shot(&knowledge, &mut rng), Some(c(6, 2)));

    knowledge.set(c(6, 2), CellState::MissRevealed);
    assert_eq!(planner.choose_shot(&knowledge, &mut rng), None);
}

#[test]
fn test_first_hit_targets_orthogonal_neighbours() {
    let mut rng = SmallRng::seed_from_u64(2);
    let mut planner = AiPlanner::new();
    let mut knowledge = Grid::unknown();
    knowledge.set(c(3, 2), CellState::MissRevealed);

    hit(&mut planner, &mut knowledge, c(3, 3));
    assert_eq!(planner.mode(), PlannerMode::Target);
    assert_eq!(planner.known_hits(), &[c(3, 3)]);
    let mut candidates: Vec<_> = planner.candidates().iter().collect();
    candidates.sort();
    assert_eq!(candidates, vec![c(2, 3), c(3, 4), c(4, 3)]);

    for _ in 0..20 {
        let at = planner.choose_shot(&knowledge, &mut rng).unwrap();
        assert!(candidates.contains(&at));
    }
}

#[test]
fn test_second_hit_fixes_vertical_axis() {
    let mut planner = AiPlanner::new();
    let mut knowledge = Grid::unknown();
    hit(&mut planner, &mut knowledge, c(3, 3));
    hit(&mut planner, &mut knowledge, c(3, 4));

    assert_eq!(planner.orientation(), Some(Orientation::Vertical));
    let candidates: Vec<_> = planner.candidates().iter().collect();
    assert_eq!(candidates, vec![c(3, 2), c(3, 5)]);
}

#[test]
fn test_second_hit_fixes_horizontal_axis() {
    let mut planner = AiPlanner::new();
    let mut knowledge = Grid::unknown();
    hit(&mut planner, &mut knowledge, c(4, 3));
    hit(&mut planner, &mut knowledge, c(3, 3));
    assert_eq!(planner.orientation(), Some(Orientation::Horizontal));
    let candidates: Vec<_> = planner.candidates().iter().collect();
    assert_eq!(candidates, vec![c(2, 3), c(5, 3)]);

    // a third hit extends the chain on the left
    hit(&mut planner, &mut knowledge, c(2, 3));
    let candidates: Vec<_> = planner.candidates().iter().collect();
    assert_eq!(candidates, vec![c(1, 3), c(5, 3)]);
}

#[test]
fn test_chain_end_on_the_edge_is_dropped() {
    let mut planner = AiPlanner::new();
    let mut knowledge = Grid::unknown();
    hit(&mut planner, &mut knowledge, c(0, 5));
    hit(&mut planner, &mut knowledge, c(1, 5));
    let candidates: Vec<_> = planner.candidates().iter().collect();
    assert_eq!(candidates, vec![c(2, 5)]);
}

#[test]
fn test_miss_removes_candidate_and_sink_resets() {
    let mut planner = AiPlanner::new();
    let mut knowledge = Grid::unknown();
    hit(&mut planner, &mut knowledge, c(5, 5));
    assert_eq!(planner.candidates().len(), 4);

    knowledge.set(c(5, 4), CellState::MissRevealed);
    planner.record(&knowledge, &outcome(c(5, 4), false, None));
    assert_eq!(planner.candidates().len(), 3);
    assert!(!planner.candidates().contains(c(5, 4)));
    assert_eq!(planner.mode(), PlannerMode::Target);

    planner.record(&knowledge, &outcome(c(5, 6), true, Some(ShipKind::Destroyer)));
    assert_eq!(planner.mode(), PlannerMode::Hunt);
    assert!(planner.known_hits().is_empty());
    assert!(planner.candidates().is_empty());
    assert_eq!(planner.orientation(), None);
}

#[test]
fn test_already_taken_is_ignored() {
    let mut planner = AiPlanner::new();
    let knowledge = Grid::unknown();
    let repeat = ShotOutcome {
        at: c(1, 1),
        already_taken: true,
        hit: false,
        sunk: false,
        sunk_kind: None,
    };
    planner.record(&knowledge, &repeat);
    assert_eq!(planner, AiPlanner::new());
}

#[test]
fn test_exhausted_targets_fall_back_to_hunting() {
    let mut rng = SmallRng::seed_from_u64(4);
    let mut planner = AiPlanner::new();
    let mut knowledge = Grid::unknown();
    knowledge.set(c(1, 0), CellState::MissRevealed);
    knowledge.set(c(0, 1), CellState::MissRevealed);
    hit(&mut planner, &mut knowledge, c(0, 0));
    assert_eq!(planner.mode(), PlannerMode::Target);
    assert!(planner.candidates().is_empty());

    let at = planner.choose_shot(&knowledge, &mut rng).unwrap();
    assert!(knowledge.get(at).is_shootable());
    assert_eq!(planner.mode(), PlannerMode::Hunt);
}
