use rand::Rng;
use rand::rngs::SmallRng;

use crate::error::BoardError;
use crate::grid::{Cell, Grid};
use crate::scan::{DIRS, scan_run};

// A sweep that converts nothing is a fixed point; a board that keeps
// churning past this many sweeps is discarded instead of looped on.
const MAX_SWEEPS: usize = 64;

/// Longest run nine distinct digits can cover.
pub const MAX_RUN_LEN: usize = 9;

/// Knock the layout into shape: eliminate runs of length 1 by converting
/// one of the two hints bounding them, and break runs longer than nine by
/// sprinkling hints into them. Empty runs are legal (the hint simply has
/// no clue in that direction). Repeats until a full two-direction sweep
/// makes no change, then verifies every run. Randomized and best-effort;
/// a board that will not stabilize comes back as `MalformedRun` and the
/// caller retries from a fresh layout.
pub fn repair(grid: &mut Grid, rng: &mut SmallRng) -> Result<(), BoardError> {
    for _ in 0..MAX_SWEEPS {
        if !sweep(grid, rng) {
            break;
        }
    }
    check_runs(grid)
}

fn sweep(grid: &mut Grid, rng: &mut SmallRng) -> bool {
    let mut changed = false;
    for dir in DIRS {
        for y in 0..grid.height() as i32 {
            for x in 0..grid.width() as i32 {
                if !grid.is_hint(x, y) {
                    continue;
                }
                let scan = scan_run(grid, x, y, dir);
                if scan.len == 1 {
                    changed |= shrink(grid, rng, x, y, scan.end);
                } else if scan.len > MAX_RUN_LEN {
                    let (dx, dy) = dir.step();
                    for i in 1..=scan.len as i32 {
                        if rng.random_bool(0.5) {
                            grid.set(x + i * dx, y + i * dy, Cell::hint());
                            changed = true;
                        }
                    }
                }
            }
        }
    }
    changed
}

/// Resolve a degenerate run by turning its originating hint or the hint
/// closing it back into a number cell. Border hints stay hints; when both
/// ends are pinned nothing happens and `check_runs` reports the leftover.
fn shrink(grid: &mut Grid, rng: &mut SmallRng, x: i32, y: i32, end: (i32, i32)) -> bool {
    let origin_border = grid.get(x, y).is_some_and(Cell::is_border);
    let end_cell = grid.get(end.0, end.1);
    let end_missing = end_cell.is_none();
    let end_border = end_cell.is_some_and(Cell::is_border);

    if (end_missing || end_border || rng.random_bool(0.5)) && !origin_border {
        grid.set(x, y, Cell::number());
        true
    } else if !end_missing && !end_border {
        grid.set(end.0, end.1, Cell::number());
        true
    } else {
        false
    }
}

/// Verify that every run on the board has a legal length: 0 (no clue) or
/// 2..=9. Reports the first offending hint.
pub fn check_runs(grid: &Grid) -> Result<(), BoardError> {
    for dir in DIRS {
        for y in 0..grid.height() as i32 {
            for x in 0..grid.width() as i32 {
                if !grid.is_hint(x, y) {
                    continue;
                }
                let len = scan_run(grid, x, y, dir).len;
                if len == 1 || len > MAX_RUN_LEN {
                    return Err(BoardError::MalformedRun { x, y, len });
                }
            }
        }
    }
    Ok(())
}
