use sapper_core::*;

/// 10x10 board whose top-left 2x6 block is a zero region.
///
/// Mines in row 3 and column 7 border the region with 1s and 2s, the rest are
/// far away in rows 6 to 9.
const MINES: [Coord2; 15] = [
    (3, 1),
    (3, 4),
    (0, 7),
    (2, 7),
    (6, 0),
    (6, 2),
    (6, 4),
    (6, 6),
    (6, 8),
    (8, 1),
    (8, 3),
    (8, 5),
    (8, 7),
    (8, 9),
    (9, 9),
];

fn fixed_board() -> Board {
    Board::from_mine_coords(10, 10, &MINES).unwrap()
}

fn revealed_coords(board: &Board) -> Vec<Coord2> {
    board
        .iter()
        .filter(|cell| cell.revealed)
        .map(Cell::coords)
        .collect()
}

#[test]
fn fixed_layout_has_expected_counts() {
    let board = fixed_board();

    assert_eq!(board.mine_count(), 15);
    for row in 0..2 {
        for col in 0..6 {
            assert_eq!(board[(row, col)].adjacent_mine_count, 0);
        }
    }
    assert_eq!(board[(1, 6)].adjacent_mine_count, 2);
    assert_eq!(board[(0, 6)].adjacent_mine_count, 1);
    assert_eq!(board[(2, 6)].adjacent_mine_count, 1);
}

#[test]
fn reveal_corner_opens_zero_region_and_border() {
    let board = fixed_board();

    let (next, status) = reveal(&board, GameStatus::InProgress, (0, 0)).unwrap();

    assert_eq!(status, GameStatus::InProgress);

    let mut expected: Vec<Coord2> = Vec::new();
    for row in 0..2 {
        for col in 0..7 {
            expected.push((row, col));
        }
    }
    for col in 0..7 {
        expected.push((2, col));
    }
    expected.sort();
    assert_eq!(revealed_coords(&next), expected);

    let zeros = next
        .iter()
        .filter(|cell| cell.revealed && cell.adjacent_mine_count == 0)
        .count();
    assert_eq!(zeros, 12);
    assert!(
        next.iter()
            .filter(|cell| cell.revealed && cell.adjacent_mine_count != 0)
            .all(|cell| matches!(cell.adjacent_mine_count, 1 | 2))
    );
    assert!(next.iter().all(|cell| !(cell.revealed && cell.is_mine)));
}

#[test]
fn flagged_cell_cannot_be_revealed() {
    let board = fixed_board();
    let flagged = toggle_flag(&board, GameStatus::InProgress, (3, 3)).unwrap();

    let (next, status) = reveal(&flagged, GameStatus::InProgress, (3, 3)).unwrap();

    assert_eq!(next, flagged);
    assert_eq!(status, GameStatus::InProgress);
    assert!(next[(3, 3)].flagged);
    assert!(!next[(3, 3)].revealed);
}

#[test]
fn revealing_mine_on_fresh_board_reveals_every_mine() {
    let board = fixed_board();

    let (next, status) = reveal(&board, GameStatus::InProgress, (3, 1)).unwrap();

    assert_eq!(status, GameStatus::Lost);
    assert_eq!(next.iter().filter(|cell| cell.is_mine && cell.revealed).count(), 15);
    assert!(next.iter().filter(|cell| cell.is_safe()).all(|cell| !cell.revealed));
}

#[test]
fn game_session_plays_fixed_layout_to_loss() {
    let mut game = Game::from_board(fixed_board());

    assert_eq!(game.reveal((0, 0)).unwrap(), RevealOutcome::Revealed);
    assert_eq!(game.toggle_flag((3, 1)).unwrap(), MarkOutcome::Changed);
    assert_eq!(game.mines_left(), 14);
    assert_eq!(game.reveal((3, 4)).unwrap(), RevealOutcome::HitMine);
    assert!(game.board()[(3, 1)].revealed);
    assert_eq!(game.toggle_flag((9, 0)).unwrap(), MarkOutcome::NoChange);
}

#[test]
fn board_snapshot_survives_json() {
    let board = fixed_board();
    let (board, _) = reveal(&board, GameStatus::InProgress, (0, 0)).unwrap();

    let json = serde_json::to_string(&board).unwrap();
    let restored: Board = serde_json::from_str(&json).unwrap();

    assert_eq!(restored, board);
}

fn small_board_json() -> serde_json::Value {
    let board = Board::from_mine_coords(2, 2, &[(0, 0)]).unwrap();
    serde_json::to_value(&board).unwrap()
}

#[test]
fn snapshot_with_wrong_mine_count_is_rejected() {
    for declared in [0, 2, 9] {
        let mut value = small_board_json();
        value["mine_count"] = declared.into();

        assert!(serde_json::from_value::<Board>(value).is_err());
    }
}

#[test]
fn snapshot_with_wrong_adjacency_is_rejected() {
    let mut value = small_board_json();
    value["cells"]["data"][3]["adjacent_mine_count"] = 0.into();

    assert!(serde_json::from_value::<Board>(value).is_err());
}

#[test]
fn snapshot_with_moved_cell_is_rejected() {
    let mut value = small_board_json();
    value["cells"]["data"][1]["col"] = 0.into();

    assert!(serde_json::from_value::<Board>(value).is_err());
}

#[test]
fn snapshot_without_safe_cells_is_rejected() {
    let mut value = small_board_json();
    for index in 1..4 {
        value["cells"]["data"][index]["is_mine"] = true.into();
        value["cells"]["data"][index]["adjacent_mine_count"] = 0.into();
    }
    value["mine_count"] = 4.into();

    assert!(serde_json::from_value::<Board>(value).is_err());
}

#[test]
fn restored_snapshot_keeps_playing() {
    let board = Board::from_mine_coords(2, 2, &[(0, 0)]).unwrap();
    let board = toggle_flag(&board, GameStatus::InProgress, (0, 0)).unwrap();
    let json = serde_json::to_string(&board).unwrap();

    let restored: Board = serde_json::from_str(&json).unwrap();
    assert_eq!(restored.size(), (2, 2));
    assert_eq!(restored.safe_cell_count(), 3);
    assert!(restored[(0, 0)].flagged);

    let mut state = (restored, GameStatus::InProgress);
    for coords in [(0, 1), (1, 0), (1, 1)] {
        state = reveal(&state.0, state.1, coords).unwrap();
    }
    assert_eq!(state.1, GameStatus::Won);
}

#[test]
fn game_snapshot_takes_config_from_board() {
    let mut game = Game::from_board(fixed_board());
    game.reveal((0, 0)).unwrap();

    let json = serde_json::to_string(&game).unwrap();
    let restored: Game = serde_json::from_str(&json).unwrap();

    assert_eq!(restored, game);
    assert_eq!(restored.config(), GameConfig::default());
    assert_eq!(restored.config(), restored.board().config());
}

#[test]
fn game_snapshot_with_tampered_board_is_rejected() {
    let game = Game::from_board(fixed_board());
    let mut value = serde_json::to_value(&game).unwrap();
    value["board"]["mine_count"] = 9.into();

    assert!(serde_json::from_value::<Game>(value).is_err());
}
