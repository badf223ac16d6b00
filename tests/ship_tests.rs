use sea_battle::{Coord, Orientation, Ship, ShipType};

#[test]
fn test_cells_horizontal() {
    let ship = Ship::new(ShipType::new("Test", 3), Coord::new(2, 1), Orientation::Horizontal);
    let cells: Vec<_> = ship.cells().collect();
    assert_eq!(cells, vec![Coord::new(2, 1), Coord::new(2, 2), Coord::new(2, 3)]);
}

#[test]
fn test_cells_vertical() {
    let ship = Ship::new(ShipType::new("Test", 2), Coord::new(4, 5), Orientation::Vertical);
    let cells: Vec<_> = ship.cells().collect();
    assert_eq!(cells, vec![Coord::new(4, 5), Coord::new(5, 5)]);
    assert!(ship.occupies(Coord::new(5, 5)));
    assert!(!ship.occupies(Coord::new(4, 6)));
}

#[test]
fn test_cells_may_leave_the_board() {
    // Bounds are the board's concern; the ship just extends from its bow.
    let ship = Ship::new(ShipType::new("Test", 3), Coord::new(5, 5), Orientation::Vertical);
    let cells: Vec<_> = ship.cells().collect();
    assert_eq!(cells[2], Coord::new(7, 5));
    assert!(cells[2].is_out_of_bounds());
}

#[test]
fn test_register_hit_and_sunk() {
    let mut ship = Ship::new(ShipType::new("Test", 2), Coord::new(1, 1), Orientation::Horizontal);
    assert_eq!(ship.life(), 2);
    assert!(!ship.is_sunk());
    assert!(!ship.register_hit());
    assert_eq!(ship.life(), 1);
    assert!(ship.register_hit());
    assert!(ship.is_sunk());
    // life never drops below zero
    assert!(!ship.register_hit());
    assert_eq!(ship.life(), 0);
}

#[test]
fn test_accessors() {
    let def = ShipType::new("Cruiser", 3);
    let ship = Ship::new(def, Coord::new(0, 2), Orientation::Vertical);
    assert_eq!(ship.ship_type(), def);
    assert_eq!(ship.length(), 3);
    assert_eq!(ship.bow(), Coord::new(0, 2));
    assert_eq!(ship.orientation(), Orientation::Vertical);
}
