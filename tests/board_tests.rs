use solo_battleship::{
    coord_to_human, in_bounds, parse_coord, ship_cells, Board, BoardError, Coord, ShotKind,
    ShotResult,
};

fn board_with_patrol() -> Board {
    let mut board = Board::new();
    board
        .place_ship("Patrol", 2, ship_cells(0, 0, 2, true), "Patrol")
        .unwrap();
    board
}

#[test]
fn test_new_board_is_empty() {
    let board = Board::new();
    assert!(board.ships().is_empty());
    assert_eq!(board.unshot_coords().len(), 100);
    assert_eq!(board.shots_fired(), 0);
}

#[test]
fn test_in_bounds() {
    assert!(in_bounds(0, 0));
    assert!(in_bounds(9, 9));
    assert!(!in_bounds(10, 0));
    assert!(!in_bounds(0, 10));
}

#[test]
fn test_hit_then_sink_length_two_ship() {
    let mut board = board_with_patrol();

    let first = board.fire(0, 0).unwrap();
    assert_eq!(
        first,
        ShotResult::Hit {
            at: Coord::new(0, 0),
            ship: "Patrol"
        }
    );

    let second = board.fire(1, 0).unwrap();
    assert_eq!(second.kind(), ShotKind::Sunk);
    assert_eq!(second.coords(), &[Coord::new(0, 0), Coord::new(1, 0)]);
    assert_eq!(second.ship_name(), Some("Patrol"));

    assert!(board.all_ships_sunk());
    assert!(board.cell(0, 0).unwrap().sunk);
    assert!(board.cell(1, 0).unwrap().sunk);
}

#[test]
fn test_repeated_shot_on_empty_board() {
    let mut board = Board::new();
    let first = board.fire(5, 5).unwrap();
    assert_eq!(first.kind(), ShotKind::Miss);
    assert_eq!(first.coords(), &[Coord::new(5, 5)]);
    assert_eq!(first.ship_name(), None);

    let err = board.fire(5, 5).unwrap_err();
    assert_eq!(err, BoardError::AlreadyShot);
    assert!(err.is_repeated());
    assert!(board.cell(5, 5).unwrap().shot);
    assert_eq!(board.shots_fired(), 1);
}

#[test]
fn test_out_of_bounds_shot_is_rejected() {
    let mut board = Board::new();
    let err = board.fire(10, 3).unwrap_err();
    assert_eq!(err, BoardError::OutOfBounds);
    assert!(!err.is_repeated());
    assert_eq!(board.shots_fired(), 0);
}

#[test]
fn test_repeated_hit_does_not_double_count() {
    let mut board = board_with_patrol();
    board.fire(0, 0).unwrap();
    assert!(board.fire(0, 0).is_err());
    assert_eq!(board.ships()[0].hits(), 1);
    assert!(!board.ships()[0].is_sunk());
}

#[test]
fn test_can_place_ship() {
    let board = board_with_patrol();
    assert!(!board.can_place_ship(&ship_cells(1, 0, 3, false)));
    assert!(!board.can_place_ship(&ship_cells(8, 5, 3, true)));
    assert!(board.can_place_ship(&ship_cells(2, 0, 3, true)));
    assert!(board.can_place_ship(&ship_cells(9, 7, 3, false)));
}

#[test]
fn test_place_ship_assigns_ids_and_rejects_overlap() {
    let mut board = board_with_patrol();
    let id = board
        .place_ship("Submarine 1", 3, ship_cells(0, 1, 3, true), "Submarine")
        .unwrap();
    assert_eq!(id, 1);
    assert_eq!(board.cell(2, 1).unwrap().ship_id, Some(1));
    assert_eq!(board.ships()[1].label(), "Submarine 1");
    assert_eq!(board.ships()[1].name(), "Submarine");

    let before = board.clone();
    assert_eq!(
        board.place_ship("Carrier", 5, ship_cells(1, 0, 5, false), "Carrier"),
        Err(BoardError::ShipOverlaps)
    );
    assert_eq!(
        board.place_ship("Carrier", 5, ship_cells(7, 5, 5, true), "Carrier"),
        Err(BoardError::OutOfBounds)
    );
    assert_eq!(board, before);
}

#[test]
fn test_unresolved_hits_and_remaining_lengths() {
    let mut board = board_with_patrol();
    board
        .place_ship("Carrier", 5, ship_cells(0, 4, 5, false), "Carrier")
        .unwrap();
    board.fire(0, 4).unwrap();
    board.fire(0, 0).unwrap();
    board.fire(1, 0).unwrap();

    assert_eq!(board.unresolved_hits(), vec![Coord::new(0, 4)]);
    assert_eq!(board.remaining_ship_lengths(), vec![5]);
    assert!(!board.all_ships_sunk());
}

#[test]
fn test_sunk_result_uses_base_name() {
    let mut board = Board::new();
    board
        .place_ship("Submarine 2", 3, ship_cells(4, 4, 3, false), "Submarine")
        .unwrap();
    board.fire(4, 4).unwrap();
    board.fire(4, 5).unwrap();
    match board.fire(4, 6).unwrap() {
        ShotResult::Sunk { ship, cells } => {
            assert_eq!(ship, "Submarine");
            assert_eq!(cells.len(), 3);
        }
        other => panic!("expected sunk, got {:?}", other),
    }
}

#[test]
fn test_coordinate_formatting() {
    assert_eq!(coord_to_human(Coord::new(0, 0)), "A1");
    assert_eq!(coord_to_human(Coord::new(4, 2)), "C5");
    assert_eq!(coord_to_human(Coord::new(9, 9)), "J10");
}

#[test]
fn test_parse_coord() {
    assert_eq!(parse_coord("A1"), Ok(Coord::new(0, 0)));
    assert_eq!(parse_coord("c5"), Ok(Coord::new(4, 2)));
    assert_eq!(parse_coord(" J10 "), Ok(Coord::new(9, 9)));
    assert!(parse_coord("K1").is_err());
    assert!(parse_coord("A0").is_err());
    assert!(parse_coord("A11").is_err());
    assert!(parse_coord("5A").is_err());
    assert!(parse_coord("").is_err());
    assert!(parse_coord("A").is_err());
}

#[test]
fn test_parse_coord_rejects_signs_and_leading_zeros() {
    assert!(parse_coord("A+5").is_err());
    assert!(parse_coord("A05").is_err());
    assert!(parse_coord("A-1").is_err());
    assert!(parse_coord("A 5").is_err());
    assert!(parse_coord("A５").is_err());
    assert_eq!(parse_coord("A10"), Ok(Coord::new(9, 0)));
}
