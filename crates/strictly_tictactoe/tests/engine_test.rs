//! Tests for the computer opponent.

use rand::SeedableRng;
use rand::rngs::StdRng;
use strictly_tictactoe::{
    Board, Difficulty, EngineError, Game, Outcome, Player, heuristic_move, select_move,
    select_move_with_rng,
};
use strum::IntoEnumIterator;

fn board(text: &str) -> Board {
    text.parse().unwrap()
}

#[test]
fn test_medium_takes_immediate_win() {
    let board = board("OO_|___|___");
    let mut rng = StdRng::seed_from_u64(1);
    let index =
        select_move_with_rng(&board, Difficulty::Medium, Player::O, Player::X, &mut rng).unwrap();
    assert_eq!(index, 2);
}

#[test]
fn test_medium_blocks_opponent_win() {
    let board = board("XX_|___|___");
    let mut rng = StdRng::seed_from_u64(1);
    let index =
        select_move_with_rng(&board, Difficulty::Medium, Player::O, Player::X, &mut rng).unwrap();
    assert_eq!(index, 2);
}

#[test]
fn test_medium_prefers_winning_over_blocking() {
    // X threatens row 0 at 2, O can finish row 1 at 5.
    let board = board("XX_|OO_|X__");
    assert_eq!(heuristic_move(&board, Player::O, Player::X), Some(5));
}

#[test]
fn test_medium_blocks_first_line_in_order() {
    // X threatens both row 0 (gap 2) and column 0 (gap 6).
    let board = board("XX_|XO_|__O");
    assert_eq!(heuristic_move(&board, Player::O, Player::X), Some(2));
}

#[test]
fn test_medium_ignores_line_with_two_empties() {
    // Row 0 holds one O and two gaps; that is not a threat for either side.
    let board = board("O__|___|___");
    assert_eq!(heuristic_move(&board, Player::O, Player::X), None);
    assert_eq!(heuristic_move(&board, Player::X, Player::O), None);
}

#[test]
fn test_medium_falls_back_to_random_without_threats() {
    let board = board("X__|_O_|___");
    assert_eq!(heuristic_move(&board, Player::O, Player::X), None);

    for seed in 0..50 {
        let mut rng = StdRng::seed_from_u64(seed);
        let index =
            select_move_with_rng(&board, Difficulty::Medium, Player::O, Player::X, &mut rng)
                .unwrap();
        assert!(board.is_empty(index), "seed {seed} picked {index}");
    }
}

#[test]
fn test_easy_only_picks_empty_squares_and_covers_them_all() {
    let board = board("X_O|_X_|O__");
    let mut rng = StdRng::seed_from_u64(7);
    let mut seen = [false; 9];

    for _ in 0..500 {
        let index =
            select_move_with_rng(&board, Difficulty::Easy, Player::X, Player::O, &mut rng).unwrap();
        assert!(board.is_empty(index));
        seen[index] = true;
    }

    for index in board.available_cells() {
        assert!(seen[index], "square {index} never picked");
    }
}

#[test]
fn test_easy_is_reproducible_with_seed() {
    let board = Board::new();
    let picks = |seed| {
        let mut rng = StdRng::seed_from_u64(seed);
        (0..10)
            .map(|_| {
                select_move_with_rng(&board, Difficulty::Easy, Player::X, Player::O, &mut rng)
                    .unwrap()
            })
            .collect::<Vec<_>>()
    };
    assert_eq!(picks(42), picks(42));
}

#[test]
fn test_every_tier_rejects_full_board() {
    let full = board("XOX|OXO|OXO");
    for difficulty in Difficulty::iter() {
        assert_eq!(
            select_move(&full, difficulty, Player::O, Player::X),
            Err(EngineError::NoAvailableCells)
        );
    }
}

#[test]
fn test_identical_marks_rejected() {
    assert_eq!(
        select_move(&Board::new(), Difficulty::Hard, Player::X, Player::X),
        Err(EngineError::IdenticalMarks(Player::X))
    );
}

#[test]
fn test_hard_takes_win_over_block() {
    let board = board("XX_|OO_|X__");
    assert_eq!(select_move(&board, Difficulty::Hard, Player::O, Player::X), Ok(5));
}

#[test]
fn test_hard_blocks_fork_setup() {
    // After X corner, O centre, X opposite corner, O must take an edge.
    let board = board("X__|_O_|__X");
    let index = select_move(&board, Difficulty::Hard, Player::O, Player::X).unwrap();
    assert!([1, 3, 5, 7].contains(&index), "picked corner {index}");
}

#[test]
fn test_hard_vs_hard_always_draws() {
    let mut rng = StdRng::seed_from_u64(0);
    let mut game = Game::new();

    while game.is_active() {
        game.computer_move(Difficulty::Hard, &mut rng).unwrap();
    }

    assert_eq!(game.outcome(), Outcome::Draw);
    assert_eq!(game.history().len(), 9);
}

/// Plays every possible opponent line against the hard engine.
///
/// Returns the number of finished games the engine won.
fn explore_against_hard(game: &Game, computer: Player, rng: &mut StdRng) -> usize {
    if !game.is_active() {
        assert_ne!(
            game.outcome().winner(),
            Some(computer.opponent()),
            "hard engine lost:\n{}",
            game.board().display()
        );
        return usize::from(game.outcome() == Outcome::Won(computer));
    }

    if game.to_move() == computer {
        let mut next = game.clone();
        next.computer_move(Difficulty::Hard, rng).unwrap();
        return explore_against_hard(&next, computer, rng);
    }

    game.board()
        .available_cells()
        .into_iter()
        .map(|index| {
            let mut next = game.clone();
            next.play(index).unwrap();
            explore_against_hard(&next, computer, rng)
        })
        .sum()
}

#[test]
fn test_hard_second_player_never_loses() {
    let mut rng = StdRng::seed_from_u64(0);
    let wins = explore_against_hard(&Game::new(), Player::O, &mut rng);
    assert!(wins > 0, "hard engine never punished a mistake");
}

#[test]
fn test_hard_first_player_never_loses() {
    let mut rng = StdRng::seed_from_u64(0);
    let wins = explore_against_hard(&Game::new(), Player::X, &mut rng);
    assert!(wins > 0, "hard engine never punished a mistake");
}

#[test]
fn test_hard_beats_medium_or_draws() {
    for seed in 0..20 {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut game = Game::new();
        while game.is_active() {
            let difficulty = match game.to_move() {
                Player::X => Difficulty::Medium,
                Player::O => Difficulty::Hard,
            };
            game.computer_move(difficulty, &mut rng).unwrap();
        }
        assert_ne!(game.outcome(), Outcome::Won(Player::X), "seed {seed}");
    }
}
