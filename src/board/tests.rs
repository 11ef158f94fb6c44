use super::*;
use crate::error::BoardError;

#[test]
fn test_stone_opponent() {
    assert_eq!(Stone::Black.opponent(), Stone::White);
    assert_eq!(Stone::White.opponent(), Stone::Black);
    assert_eq!(Stone::Empty.opponent(), Stone::Empty);
}

#[test]
fn test_stone_value_is_negated_by_opponent() {
    for stone in [Stone::Black, Stone::White] {
        assert_eq!(stone.opponent().value(), -stone.value());
        assert_eq!(Stone::from_value(stone.value()), Some(stone));
    }
    assert_eq!(Stone::from_value(0), Some(Stone::Empty));
    assert_eq!(Stone::from_value(2), None);
}

#[test]
fn test_pos_conversion() {
    let pos = Pos::new(3, 5);
    assert_eq!(pos.to_index(), 3 * 8 + 5);
    assert_eq!(Pos::from_index(29), pos);
}

#[test]
fn test_pos_validity() {
    assert!(Pos::is_valid(0, 0));
    assert!(Pos::is_valid(7, 7));
    assert!(!Pos::is_valid(-1, 0));
    assert!(!Pos::is_valid(0, -1));
    assert!(!Pos::is_valid(8, 0));
    assert!(!Pos::is_valid(0, 8));
}

#[test]
fn test_pos_offset() {
    assert_eq!(Pos::new(0, 0).offset(1, 1, 2), Some(Pos::new(2, 2)));
    assert_eq!(Pos::new(0, 0).offset(-1, 0, 1), None);
    assert_eq!(Pos::new(7, 3).offset(1, 0, 1), None);
}

#[test]
fn test_board_constants() {
    assert_eq!(BOARD_SIZE, 8);
    assert_eq!(TOTAL_CELLS, 64);
    assert_eq!(Pos::all().count(), 64);
}

#[test]
fn test_initial_position() {
    let board = Board::initial();
    assert_eq!(board.get(Pos::new(3, 3)), Stone::White);
    assert_eq!(board.get(Pos::new(4, 4)), Stone::White);
    assert_eq!(board.get(Pos::new(3, 4)), Stone::Black);
    assert_eq!(board.get(Pos::new(4, 3)), Stone::Black);
    assert_eq!(board.count(Stone::Black), 2);
    assert_eq!(board.count(Stone::White), 2);
    assert_eq!(board.count(Stone::Empty), 60);
}

#[test]
fn test_place_stone_replaces_color() {
    let mut board = Board::new();
    let pos = Pos::new(2, 6);
    board.place_stone(pos, Stone::Black);
    board.place_stone(pos, Stone::White);
    assert_eq!(board.get(pos), Stone::White);
    assert_eq!(board.stone_count(), 1);

    board.place_stone(pos, Stone::Empty);
    assert!(board.is_empty(pos));
    assert!(board.is_board_empty());
}

#[test]
fn test_bitboard_iter_ones_ascending() {
    let mut bb = Bitboard::new();
    bb.set(Pos::new(7, 7));
    bb.set(Pos::new(0, 1));
    bb.set(Pos::new(3, 0));
    let found: Vec<Pos> = bb.iter_ones().collect();
    assert_eq!(found, vec![Pos::new(0, 1), Pos::new(3, 0), Pos::new(7, 7)]);
    assert_eq!(bb.count(), 3);
}

#[test]
fn test_payload_round_trip_preserves_x_major_order() {
    let mut board = Board::new();
    board.place_stone(Pos::new(0, 1), Stone::Black);
    board.place_stone(Pos::new(1, 0), Stone::White);

    let payload = board.to_payload();
    let tokens: Vec<&str> = payload.split(' ').collect();
    assert_eq!(tokens.len(), 64);
    assert_eq!(tokens[1], "1");
    assert_eq!(tokens[8], "-1");

    assert_eq!(Board::from_payload(&payload), Ok(board));
}

#[test]
fn test_payload_errors() {
    assert_eq!(
        Board::from_payload("0 0 1"),
        Err(BoardError::WrongCellCount(3))
    );

    let mut tokens = vec!["0"; 64];
    tokens[10] = "x";
    assert!(matches!(
        Board::from_payload(&tokens.join(" ")),
        Err(BoardError::InvalidToken { index: 10, .. })
    ));

    tokens[10] = "2";
    assert_eq!(
        Board::from_payload(&tokens.join(" ")),
        Err(BoardError::InvalidCell { index: 10, value: 2 })
    );
}

#[test]
fn test_cells_round_trip() {
    let board = Board::initial();
    let cells = board.to_cells();
    assert_eq!(cells[3][4], 1);
    assert_eq!(cells[3][3], -1);
    assert_eq!(Board::from_cells(&cells), Ok(board));

    let mut bad = cells;
    bad[0][0] = 5;
    assert!(Board::from_cells(&bad).is_err());
}
