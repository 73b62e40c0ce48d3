#[cfg(test)]
mod tests {
    use super::super::{Mark, TicTacToeAction, TicTacToeGame, TicTacToeState};
    use crate::error::Error;
    use crate::game_trait::Game;
    use crate::player::{Player, DRAW, LOSS, WIN};

    fn with_marks(x_cells: &[usize], o_cells: &[usize], to_move: Mark) -> TicTacToeState {
        let mut state = TicTacToeState::initial();
        for &cell in x_cells {
            state.cells[cell] = Some(Mark::X);
        }
        for &cell in o_cells {
            state.cells[cell] = Some(Mark::O);
        }
        state.to_move = to_move;
        state
    }

    #[test]
    fn initial_state_offers_every_cell_to_x() {
        let game = TicTacToeGame::new();
        let state = TicTacToeState::initial();
        assert_eq!(game.side_to_move(&state), Player::Maximizer);

        let actions = game.legal_actions(&state);
        assert_eq!(actions.len(), 9);
        for (cell, action) in actions.iter().enumerate() {
            assert_eq!(*action, TicTacToeAction { mark: Mark::X, cell });
        }
    }

    #[test]
    fn transition_places_the_mark_and_flips_the_turn() {
        let game = TicTacToeGame::new();
        let state = TicTacToeState::initial();
        let action = TicTacToeAction { mark: Mark::X, cell: 4 };

        let next = game.transition(&state, &action).unwrap();
        assert_eq!(next.cells[4], Some(Mark::X));
        assert_eq!(next.to_move, Mark::O);
        assert_eq!(game.side_to_move(&next), Player::Minimizer);
        // Input untouched
        assert_eq!(state.cells[4], None);
    }

    #[test]
    fn transition_rejects_bad_actions() {
        let game = TicTacToeGame::new();
        let state = with_marks(&[4], &[], Mark::O);

        let occupied = TicTacToeAction { mark: Mark::O, cell: 4 };
        assert_eq!(
            game.transition(&state, &occupied),
            Err(Error::OccupiedCell { cell: 4 })
        );

        let wrong_mark = TicTacToeAction { mark: Mark::X, cell: 0 };
        assert_eq!(
            game.transition(&state, &wrong_mark),
            Err(Error::WrongSideToMove)
        );
    }

    #[test]
    fn winner_detection_covers_rows_columns_and_diagonals() {
        assert_eq!(with_marks(&[3, 4, 5], &[0, 1], Mark::O).winner(), Some(Mark::X));
        assert_eq!(with_marks(&[0, 4], &[2, 5, 8], Mark::X).winner(), Some(Mark::O));
        assert_eq!(with_marks(&[0, 4, 8], &[1, 2], Mark::O).winner(), Some(Mark::X));
        assert_eq!(with_marks(&[2, 4, 6], &[0, 1], Mark::O).winner(), Some(Mark::X));
        assert_eq!(TicTacToeState::initial().winner(), None);
    }

    #[test]
    fn no_actions_after_a_win() {
        let game = TicTacToeGame::new();
        let state = with_marks(&[0, 1, 2], &[3, 4], Mark::O);
        assert!(game.is_terminal(&state));
        assert!(game.legal_actions(&state).is_empty());
    }

    #[test]
    fn full_board_without_a_line_is_a_draw() {
        // X O X / X O O / O X X
        let game = TicTacToeGame::new();
        let state = with_marks(&[0, 2, 3, 7, 8], &[1, 4, 5, 6], Mark::O);
        assert_eq!(state.winner(), None);
        assert!(state.is_full());
        assert!(game.is_terminal(&state));
        assert_eq!(game.exact_utility(&state), Ok(DRAW));
    }

    #[test]
    fn exact_utility_per_outcome() {
        let game = TicTacToeGame::new();
        assert_eq!(
            game.exact_utility(&with_marks(&[0, 1, 2], &[3, 4], Mark::O)),
            Ok(WIN)
        );
        assert_eq!(
            game.exact_utility(&with_marks(&[0, 1], &[6, 7, 8], Mark::X)),
            Ok(LOSS)
        );
        assert_eq!(
            game.exact_utility(&TicTacToeState::initial()),
            Err(Error::NonTerminalState)
        );
    }

    #[test]
    fn heuristic_matches_exact_utility_on_terminal_states() {
        let game = TicTacToeGame::new();
        for state in [
            with_marks(&[0, 1, 2], &[3, 4], Mark::O),
            with_marks(&[0, 1], &[6, 7, 8], Mark::X),
            with_marks(&[0, 2, 3, 7, 8], &[1, 4, 5, 6], Mark::O),
        ] {
            assert_eq!(game.heuristic_value(&state), game.exact_utility(&state).unwrap());
        }
        // Live positions fall back to balanced.
        assert_eq!(game.heuristic_value(&TicTacToeState::initial()), DRAW);
    }

    #[test]
    fn cutoff_is_terminal_only() {
        let game = TicTacToeGame::new();
        let live = with_marks(&[4], &[0], Mark::X);
        assert!(!game.is_cutoff(&live, 1_000));
        assert!(game.is_cutoff(&with_marks(&[0, 1, 2], &[3, 4], Mark::O), 0));
    }
}
