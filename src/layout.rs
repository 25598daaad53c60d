use rand::Rng;
use rand::rngs::SmallRng;

use crate::grid::{Cell, Grid};

/// Where hint cells may be dropped into the interior.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum HintPlacement {
    /// Any number cell is a valid candidate.
    Anywhere,
    /// Reject candidates that would pinch a neighbor into a degenerate
    /// zero- or one-cell gap. Repair has less to undo this way.
    #[default]
    AvoidSingles,
}

// Draw budget per interior cell; keeps the loop finite even when
// gap_fraction asks for more hints than the policy can place.
const DRAWS_PER_CELL: usize = 16;

/// Build the initial hint/number partition: a bordered frame around a
/// `width x height` interior, with roughly `gap_fraction` of the interior
/// converted to hint cells at random. Never fails; if the budget runs out
/// the grid simply carries fewer hints than asked for.
pub fn generate_layout(
    width: usize,
    height: usize,
    gap_fraction: f64,
    placement: HintPlacement,
    rng: &mut SmallRng,
) -> Grid {
    let mut grid = Grid::bordered(width, height);
    let interior = width * height;
    let target = (gap_fraction * interior as f64).round() as usize;

    let mut placed = 0;
    let mut draws = 0;
    while placed < target && draws < interior * DRAWS_PER_CELL {
        draws += 1;
        let x = rng.random_range(1..=width) as i32;
        let y = rng.random_range(1..=height) as i32;
        if !grid.is_number(x, y) {
            continue;
        }
        if placement == HintPlacement::AvoidSingles && !placement_ok(&grid, x, y) {
            continue;
        }
        grid.set(x, y, Cell::hint());
        placed += 1;
    }
    grid
}

/// A candidate is rejected when a neighboring cell is already a hint but
/// the cell two steps beyond it is not: converting the candidate would
/// leave a zero-length run context between the two hints.
fn placement_ok(grid: &Grid, x: i32, y: i32) -> bool {
    for (dx, dy) in [(1, 0), (-1, 0), (0, 1), (0, -1)] {
        let near_hint = grid.is_hint(x + dx, y + dy);
        let far_hint = grid.is_hint(x + 2 * dx, y + 2 * dy);
        if near_hint && !far_hint {
            return false;
        }
    }
    true
}
