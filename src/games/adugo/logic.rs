//! # Game Rules
//!
//! Pure, stateless rule logic for Adugo. Every function takes a state as
//! input and returns results without side effects; transitions produce a
//! fresh state and never touch the input. The trait impl in `game.rs`
//! delegates here.

use crate::error::{Error, Result};
use crate::player::{Utility, DRAW, LOSS, WIN};

use super::board;
use super::game::HeuristicWeights;
use super::{AdugoAction, AdugoState, Cell, Side};

/// Dogs on the board at game start.
pub const STARTING_DOGS: usize = 14;

/// Captures the jaguar needs to win.
pub const CAPTURE_THRESHOLD: usize = 5;

/// Most simple moves the jaguar can ever have (degree of the best
/// connected cells); normalizes the mobility term of the heuristic.
pub const MAX_JAGUAR_MOBILITY: usize = 8;

/// Non-terminal heuristic values are clamped strictly inside the terminal
/// range so a horizon estimate can never be mistaken for a proven result.
const HEURISTIC_CLAMP: Utility = 0.9999;

/// Legal moves for the given side, ignoring whose turn it actually is.
///
/// Deterministic: pieces in board-scan order, destinations in
/// neighbor-table order, so equal searches pick equal actions. Only the
/// jaguar emits captures.
pub fn legal_actions_for(state: &AdugoState, side: Side) -> Vec<AdugoAction> {
    let mut actions = Vec::new();
    for origin in 0..board::GRID_DIMENSION {
        if state.cell(origin) != side.piece() {
            continue;
        }
        for &neighbor in board::neighbors(origin) {
            match state.cell(neighbor) {
                Cell::Empty => actions.push(AdugoAction::new(side, origin, neighbor)),
                Cell::Dog if side == Side::Jaguar => {
                    push_captures_over(state, origin, neighbor, &mut actions);
                }
                _ => {}
            }
        }
    }
    actions
}

/// Capture actions for a jaguar at `origin` jumping the dog at `middle`.
fn push_captures_over(
    state: &AdugoState,
    origin: usize,
    middle: usize,
    actions: &mut Vec<AdugoAction>,
) {
    for &landing in board::neighbors(middle) {
        if state.cell(landing) == Cell::Empty && board::is_aligned(origin, middle, landing) {
            actions.push(AdugoAction::new(Side::Jaguar, origin, landing));
        }
    }
}

/// Legal moves for the side to move.
pub fn legal_actions(state: &AdugoState) -> Vec<AdugoAction> {
    legal_actions_for(state, state.to_move)
}

/// State resulting from the action; the input state is never mutated.
///
/// Fails with [`Error::WrongSideToMove`] or [`Error::BlockedDestination`]
/// for actions that do not fit the state. A capture whose middle cell
/// cannot be uniquely resolved fails with [`Error::InconsistentCapture`];
/// for actions produced by [`legal_actions`] that indicates a bug in the
/// move generator, not a playable position.
pub fn apply_action(state: &AdugoState, action: &AdugoAction) -> Result<AdugoState> {
    if action.side != state.to_move {
        return Err(Error::WrongSideToMove);
    }
    if state.cell(action.to) == Cell::Blocked {
        return Err(Error::BlockedDestination { cell: action.to });
    }

    let mut next = state.clone();
    if action.is_capture() {
        let middle = board::find_middle_position(action.from, action.to).ok_or(
            Error::InconsistentCapture {
                origin: action.from,
                destination: action.to,
            },
        )?;
        next.cells[middle] = Cell::Empty;
    }
    next.cells[action.from] = Cell::Empty;
    next.cells[action.to] = action.side.piece();
    next.to_move = state.to_move.opponent();
    Ok(next)
}

fn count_cells(state: &AdugoState, cell: Cell) -> usize {
    state.cells.iter().filter(|&&c| c == cell).count()
}

/// Dogs the jaguar has captured so far.
pub fn captured_dogs(state: &AdugoState) -> usize {
    STARTING_DOGS.saturating_sub(count_cells(state, Cell::Dog))
}

/// Side that has won, if the game is over.
///
/// The jaguar wins once it has captured [`CAPTURE_THRESHOLD`] dogs; the
/// dogs win once the jaguar has no legal action left, regardless of whose
/// turn it is.
pub fn winner(state: &AdugoState) -> Option<Side> {
    if captured_dogs(state) >= CAPTURE_THRESHOLD {
        return Some(Side::Jaguar);
    }
    if legal_actions_for(state, Side::Jaguar).is_empty() {
        return Some(Side::Dogs);
    }
    None
}

pub fn is_terminal(state: &AdugoState) -> bool {
    winner(state).is_some()
}

/// Exact utility of a terminal state, maximizer (dogs) perspective.
pub fn exact_utility(state: &AdugoState) -> Result<Utility> {
    match winner(state) {
        Some(Side::Dogs) => Ok(WIN),
        Some(Side::Jaguar) => Ok(LOSS),
        None => Err(Error::NonTerminalState),
    }
}

/// Heuristic value of a state, maximizer (dogs) perspective.
///
/// Combines the jaguar's capture progress with its mobility, each
/// normalized against its maximum and weighted by `weights`; more captures
/// and a freer jaguar push the estimate toward the dogs' loss:
///
/// ```text
/// value = 1 - 2 * (captures * wc + mobility * wm) / (5 * wc + 8 * wm)
/// ```
///
/// Delegates to [`exact_utility`] on terminal states, so a search horizon
/// never changes the value of a finished game.
pub fn heuristic_value(state: &AdugoState, weights: &HeuristicWeights) -> Utility {
    if let Some(side) = winner(state) {
        return match side {
            Side::Dogs => WIN,
            Side::Jaguar => LOSS,
        };
    }

    let max_score = CAPTURE_THRESHOLD as f32 * weights.capture
        + MAX_JAGUAR_MOBILITY as f32 * weights.mobility;
    if max_score <= 0.0 {
        return DRAW;
    }

    let captures = captured_dogs(state) as f32;
    let mobility = legal_actions_for(state, Side::Jaguar).len() as f32;
    let jaguar_score = (captures * weights.capture + mobility * weights.mobility) / max_score;
    let value = 1.0 - 2.0 * jaguar_score.clamp(0.0, 1.0);
    value.clamp(-HEURISTIC_CLAMP, HEURISTIC_CLAMP)
}

/// Where the jaguar currently stands, if it is on the board.
pub fn jaguar_position(state: &AdugoState) -> Option<usize> {
    state.cells.iter().position(|&c| c == Cell::Jaguar)
}
