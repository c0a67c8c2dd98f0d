//! Selector behavior tests: legality, blocking, symmetry, full rounds.

use shifu_tictactoe::{Game, GameStatus, Mark, Move, Position, Shifu};
use std::collections::HashSet;

#[test]
fn test_choice_is_always_an_open_cell() {
    // Walk a handful of positions deep into a round; at every turn the
    // selector's choice must be one of the open cells.
    let mut game = Game::new(Mark::X);
    let shifu_x = Shifu::new(Mark::X);
    let shifu_o = Shifu::new(Mark::O);

    while !game.game_over() {
        let shifu = if game.is_current_turn(Mark::X) {
            &shifu_x
        } else {
            &shifu_o
        };
        let choice = shifu.choose_move(&game).unwrap();
        assert!(game.open_cells().contains(&choice));
        game.make_move(Move::new(shifu.mark(), choice)).unwrap();
    }
}

#[test]
fn test_blocks_the_unique_open_threat() {
    // X holds two cells of the top row and threatens nothing else.
    // The blocking cell is the unique maximum, so the choice is
    // deterministic despite the random tie-break.
    let moves = [
        Move::new(Mark::X, Position::TopLeft),
        Move::new(Mark::O, Position::Center),
        Move::new(Mark::X, Position::TopCenter),
    ];
    let game = Game::replay(Mark::X, &moves).unwrap();
    let shifu = Shifu::new(Mark::O);

    for _ in 0..50 {
        assert_eq!(shifu.choose_move(&game).unwrap(), Position::TopRight);
    }
}

#[test]
fn test_top_row_scenario_defense_weights_and_block() {
    // Starting mark X, selector plays O. The human has taken positions
    // 1 and 2 (TopLeft, TopCenter), leaving 3 open in the top row.
    let moves = [
        Move::new(Mark::X, Position::TopLeft),
        Move::new(Mark::O, Position::BottomCenter),
        Move::new(Mark::X, Position::TopCenter),
    ];
    let game = Game::replay(Mark::X, &moves).unwrap();
    let shifu = Shifu::new(Mark::O);

    let defense = shifu.defense_weights(&game);
    // MiddleRight sits on no line containing an X, so its defense
    // weight stays at the base value.
    let blocking = defense[Position::TopRight.to_index()];
    let unrelated = defense[Position::MiddleRight.to_index()];
    assert!(blocking > unrelated);
    assert_eq!(unrelated, 1.0);

    for _ in 0..50 {
        assert_eq!(shifu.choose_move(&game).unwrap(), Position::TopRight);
    }
}

#[test]
fn test_empty_board_opening_is_symmetric() {
    // On an empty board the defense table is flat and the offense table
    // is symmetric under the board's symmetries, so equivalent cells
    // carry equal weight and the tie-break decides among them.
    let game = Game::new(Mark::X);
    let shifu = Shifu::new(Mark::X);

    let defense = shifu.defense_weights(&game);
    assert!(defense.iter().all(|&w| w == 1.0));

    let offense = shifu.offense_weights(&game);
    let corner = offense[Position::TopLeft.to_index()];
    for pos in [Position::TopRight, Position::BottomLeft, Position::BottomRight] {
        assert_eq!(offense[pos.to_index()], corner);
    }
    let edge = offense[Position::TopCenter.to_index()];
    for pos in [Position::MiddleLeft, Position::MiddleRight, Position::BottomCenter] {
        assert_eq!(offense[pos.to_index()], edge);
    }

    // The center sits on the most lines, so the opening is forced.
    assert_eq!(shifu.choose_move(&game).unwrap(), Position::Center);
}

#[test]
fn test_ties_are_broken_at_random() {
    // After the selector's forced center opening and a corner reply,
    // several cells tie for the maximum; over many trials more than
    // one of them must be chosen.
    let moves = [
        Move::new(Mark::X, Position::Center),
        Move::new(Mark::O, Position::TopLeft),
    ];
    let game = Game::replay(Mark::X, &moves).unwrap();
    let shifu = Shifu::new(Mark::X);

    let mut seen = HashSet::new();
    for _ in 0..500 {
        seen.insert(shifu.choose_move(&game).unwrap());
    }
    assert!(seen.len() > 1, "tie-break never varied: {seen:?}");
    for choice in &seen {
        assert!(game.open_cells().contains(choice));
    }
}

#[test]
fn test_full_round_terminates_within_nine_half_moves() {
    // Shifu vs Shifu, both blocking correctly: the round must reach a
    // terminal state in at most 9 half-moves, for either starting mark.
    for starting_mark in [Mark::X, Mark::O] {
        for _ in 0..20 {
            let mut game = Game::new(starting_mark);
            let shifu_x = Shifu::new(Mark::X);
            let shifu_o = Shifu::new(Mark::O);

            let mut half_moves = 0;
            while !game.game_over() {
                assert!(half_moves < 9, "round failed to terminate");
                let shifu = if game.is_current_turn(Mark::X) {
                    &shifu_x
                } else {
                    &shifu_o
                };
                let played = shifu.play(&mut game).unwrap();
                assert!(played.is_some());
                half_moves += 1;
            }

            assert!(matches!(
                game.status(),
                GameStatus::Won(_) | GameStatus::Draw
            ));
            assert!(game.history().len() <= 9);
        }
    }
}
