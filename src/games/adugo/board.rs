//! # Board Graph
//!
//! Static adjacency and alignment data for the Adugo board.
//!
//! The board is a 35-slot array laid out as seven rows of five columns:
//!
//! ```text
//! 0   1  2  3  4
//! 5   6  7  8  9
//! 10 11 12 13 14
//! 15 16 17 18 19
//! 20 21 22 23 24
//! 25 26 27 28 29      (25 and 29 blocked)
//! 30 31 32 33 34      (31 and 33 blocked)
//! ```
//!
//! Rows 0-4 form a 5x5 Alquerque grid: orthogonal edges everywhere,
//! diagonal edges on cells whose row+column sum is even. Rows 5-6 form the
//! triangular extension hanging under cell 22; its playable cells are 26,
//! 27, 28, 30, 32 and 34.
//!
//! Alignment inside the grid follows from row/column arithmetic. The
//! extension is not a grid, so the straight lines running through it are
//! enumerated explicitly in [`EXTENSION_LINES`]; a capture there is aligned
//! exactly when one recognized line carries all three cells. The line table
//! is built so that any capture's middle cell is unique by construction.

use smallvec::SmallVec;

/// Total number of board slots, blocked ones included.
pub const GRID_DIMENSION: usize = 35;

/// Columns per row.
pub const BOARD_WIDTH: usize = 5;

/// Slots below this index form the regular 5x5 grid region.
const GRID_CELLS: usize = 25;

/// Direct neighbors of every slot. Blocked slots have none.
static NEIGHBORS: [&[usize]; GRID_DIMENSION] = [
    // Row 0
    &[1, 5, 6],
    &[0, 2, 6],
    &[1, 3, 6, 7, 8],
    &[2, 4, 8],
    &[3, 8, 9],
    // Row 1
    &[0, 6, 10],
    &[0, 1, 2, 5, 7, 10, 11, 12],
    &[2, 6, 8, 12],
    &[2, 3, 4, 7, 9, 12, 13, 14],
    &[4, 8, 14],
    // Row 2
    &[5, 6, 11, 15, 16],
    &[6, 10, 12, 16],
    &[6, 7, 8, 11, 13, 16, 17, 18],
    &[8, 12, 14, 18],
    &[8, 9, 13, 18, 19],
    // Row 3
    &[10, 16, 20],
    &[10, 11, 12, 15, 17, 20, 21, 22],
    &[12, 16, 18, 22],
    &[12, 13, 14, 17, 19, 22, 23, 24],
    &[14, 18, 24],
    // Row 4
    &[15, 16, 21],
    &[16, 20, 22],
    &[16, 17, 18, 21, 23, 26, 27, 28],
    &[18, 22, 24],
    &[18, 19, 23],
    // Row 5 (triangle)
    &[],
    &[22, 27, 30],
    &[22, 26, 28, 32],
    &[22, 27, 34],
    &[],
    // Row 6 (triangle base)
    &[26, 32],
    &[],
    &[27, 30, 34],
    &[],
    &[28, 32],
];

/// Straight lines that run through the triangular extension.
///
/// Every capture with an endpoint in the extension must lie on one of
/// these. The table includes the grid cells each line passes through so
/// that jumps crossing the grid/extension boundary are recognized.
static EXTENSION_LINES: [&[usize]; 5] = [
    &[2, 7, 12, 17, 22, 27, 32], // center column
    &[22, 26, 30],               // left edge of the triangle
    &[22, 28, 34],               // right edge of the triangle
    &[26, 27, 28],               // mid row
    &[30, 32, 34],               // base row
];

/// Alignment class of two grid cells.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Alignment {
    Horizontal,
    Vertical,
    Diagonal,
    NotAligned,
}

/// Direct neighbors of a slot (empty for blocked or out-of-range slots).
pub fn neighbors(cell: usize) -> &'static [usize] {
    NEIGHBORS.get(cell).copied().unwrap_or(&[])
}

/// True iff the two slots share a direct graph edge.
///
/// Symmetric and irreflexive; blocked slots neighbor nothing.
pub fn is_neighbor(a: usize, b: usize) -> bool {
    neighbors(a).contains(&b)
}

/// Alignment class of two slots from their row/column coordinates.
///
/// Only meaningful inside the regular grid region; the extension uses
/// [`EXTENSION_LINES`] instead.
fn alignment(a: usize, b: usize) -> Alignment {
    let (row_a, col_a) = (a / BOARD_WIDTH, a % BOARD_WIDTH);
    let (row_b, col_b) = (b / BOARD_WIDTH, b % BOARD_WIDTH);
    if row_a == row_b {
        Alignment::Horizontal
    } else if col_a == col_b {
        Alignment::Vertical
    } else if row_a.abs_diff(row_b) == col_a.abs_diff(col_b) {
        Alignment::Diagonal
    } else {
        Alignment::NotAligned
    }
}

/// True iff one recognized extension line carries all three slots.
fn on_common_extension_line(a: usize, b: usize, c: usize) -> bool {
    EXTENSION_LINES
        .iter()
        .any(|line| line.contains(&a) && line.contains(&b) && line.contains(&c))
}

/// True iff the three slots form a capture-shaped straight line:
/// pairwise distinct, `start`-`middle` and `middle`-`landing` adjacent, and
/// all three on one recognized line.
///
/// Symmetric under reversal: `is_aligned(a, b, c) == is_aligned(c, b, a)`.
pub fn is_aligned(start: usize, middle: usize, landing: usize) -> bool {
    if start == middle || start == landing || middle == landing {
        return false;
    }
    if !is_neighbor(start, middle) || !is_neighbor(middle, landing) {
        return false;
    }
    if start < GRID_CELLS && middle < GRID_CELLS && landing < GRID_CELLS {
        let to_middle = alignment(start, middle);
        to_middle != Alignment::NotAligned && to_middle == alignment(start, landing)
    } else {
        on_common_extension_line(start, middle, landing)
    }
}

/// The unique slot between two non-adjacent slots, if any.
///
/// Valid only for non-neighbors; returns `None` when zero or several
/// candidate middles exist. Symmetric in its arguments.
pub fn find_middle_position(start: usize, landing: usize) -> Option<usize> {
    if is_neighbor(start, landing) {
        return None;
    }

    let mut candidates: SmallVec<[usize; 4]> = SmallVec::new();
    for &middle in neighbors(start) {
        if is_neighbor(middle, landing) && is_aligned(start, middle, landing) {
            candidates.push(middle);
        }
    }

    match candidates.as_slice() {
        [middle] => Some(*middle),
        _ => None,
    }
}
