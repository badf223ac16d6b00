use rand::rngs::SmallRng;
use rand::SeedableRng;

use sea_battle::{
    random_board, FleetGenerator, ShipType, FLEET, MAX_PLACEMENT_ATTEMPTS, NUM_SHIPS,
    TOTAL_SHIP_CELLS,
};

#[test]
fn test_default_generator() {
    let fleets = FleetGenerator::default();
    assert_eq!(fleets.budget(), MAX_PLACEMENT_ATTEMPTS);
    assert_eq!(fleets.manifest(), &FLEET[..]);
    let lengths: Vec<usize> = fleets.manifest().iter().map(|t| t.length()).collect();
    assert_eq!(lengths, vec![3, 2, 2, 1, 1, 1, 1]);
}

#[test]
fn test_random_board_always_complete() {
    let mut rng = SmallRng::seed_from_u64(2024);
    for _ in 0..1000 {
        let board = random_board(&mut rng);
        assert_eq!(board.ships().len(), NUM_SHIPS);
        assert_eq!(board.live_ships(), NUM_SHIPS);
        let cells: usize = board.ships().iter().map(|s| s.length()).sum();
        assert_eq!(cells, TOTAL_SHIP_CELLS);
        assert!(board.attacked().is_empty());
    }
}

#[test]
fn test_form_board_places_manifest_in_order() {
    let fleets = FleetGenerator::new();
    let mut rng = SmallRng::seed_from_u64(5);
    let board = loop {
        if let Some(board) = fleets.form_board(&mut rng) {
            break board;
        }
    };
    let placed: Vec<ShipType> = board.ships().iter().map(|s| s.ship_type()).collect();
    assert_eq!(placed, FLEET.to_vec());
}

#[test]
fn test_zero_budget_fails() {
    let fleets = FleetGenerator::with_manifest(&FLEET, 0);
    let mut rng = SmallRng::seed_from_u64(1);
    assert!(fleets.form_board(&mut rng).is_none());
}

#[test]
fn test_empty_manifest_gives_empty_board() {
    let fleets = FleetGenerator::with_manifest(&[], 0);
    let mut rng = SmallRng::seed_from_u64(1);
    let board = fleets.form_board(&mut rng).unwrap();
    assert!(board.ships().is_empty());
    assert!(board.all_sunk());
}

#[test]
fn test_impossible_manifest_exhausts_budget() {
    // a 7-deck ship never fits on a 6x6 grid
    let manifest = [ShipType::new("Carrier", 7)];
    let fleets = FleetGenerator::with_manifest(&manifest, 50);
    let mut rng = SmallRng::seed_from_u64(3);
    assert!(fleets.form_board(&mut rng).is_none());

    // at most nine boats fit without touching
    let crowd = [ShipType::new("Boat", 1); 10];
    let fleets = FleetGenerator::with_manifest(&crowd, MAX_PLACEMENT_ATTEMPTS);
    assert!(fleets.form_board(&mut rng).is_none());
}

#[test]
fn test_same_seed_same_fleet() {
    let a = random_board(&mut SmallRng::seed_from_u64(99));
    let b = random_board(&mut SmallRng::seed_from_u64(99));
    assert_eq!(a.ships(), b.ships());
    assert_eq!(a.render(), b.render());
}
