use rand::Rng;
use rand::rngs::SmallRng;

use crate::error::BoardError;
use crate::grid::{Cell, Grid};
use crate::scan::{DIRS, Dir, for_each_in_run};

type DigitMask = u16;

#[inline]
fn bit(digit: u8) -> DigitMask {
    1 << (digit - 1)
}

/// Which run each number cell belongs to, per direction, plus the digits
/// already used in each run. Cells in the same run share a run id, so a
/// placement by one cell is visible to every other member.
struct RunTable {
    across: Vec<Option<usize>>,
    down: Vec<Option<usize>>,
    seen: Vec<DigitMask>,
}

fn tag_runs(grid: &Grid) -> RunTable {
    let width = grid.width();
    let cells = width * grid.height();
    let mut table = RunTable {
        across: vec![None; cells],
        down: vec![None; cells],
        seen: Vec::new(),
    };

    for y in 0..grid.height() as i32 {
        for x in 0..width as i32 {
            if !grid.is_hint(x, y) {
                continue;
            }
            for dir in DIRS {
                let id = table.seen.len();
                let lane = match dir {
                    Dir::Across => &mut table.across,
                    Dir::Down => &mut table.down,
                };
                let scan = for_each_in_run(grid, x, y, dir, |cx, cy, _| {
                    lane[cy as usize * width + cx as usize] = Some(id);
                });
                if scan.len > 0 {
                    table.seen.push(0);
                }
            }
        }
    }
    table
}

/// Give every number cell a digit 1..=9 that is unique within both of its
/// runs, then stamp the clue sums onto the hint cells. Greedy with a
/// random starting digit per cell and circular probing; a cell with no
/// free digit aborts the whole attempt with `DigitCollision`.
pub fn assign_digits(grid: &mut Grid, rng: &mut SmallRng) -> Result<(), BoardError> {
    let width = grid.width();
    let mut runs = tag_runs(grid);

    for y in 0..grid.height() as i32 {
        for x in 0..width as i32 {
            if !grid.is_number(x, y) {
                continue;
            }
            let idx = y as usize * width + x as usize;
            // The border ring guarantees every number cell sits in a run
            // in both directions; a missing tag is a tagging bug, not a
            // board to emit.
            let across = runs.across[idx].expect("number cell has no across run");
            let down = runs.down[idx].expect("number cell has no down run");

            let taken = runs.seen[across] | runs.seen[down];
            let start = rng.random_range(1..=9u8);
            let mut digit = start;
            while taken & bit(digit) != 0 {
                digit = digit % 9 + 1;
                if digit == start {
                    return Err(BoardError::DigitCollision { x, y });
                }
            }

            runs.seen[across] |= bit(digit);
            runs.seen[down] |= bit(digit);
            if let Some(Cell::Number(n)) = grid.get_mut(x, y) {
                n.value = Some(digit);
            }
        }
    }

    write_sums(grid);
    Ok(())
}

/// Stamp each hint with the totals of its two runs; an empty run totals 0,
/// which renderers read as "no clue".
fn write_sums(grid: &mut Grid) {
    for y in 0..grid.height() as i32 {
        for x in 0..grid.width() as i32 {
            if !grid.is_hint(x, y) {
                continue;
            }
            let mut across = 0u32;
            for_each_in_run(grid, x, y, Dir::Across, |_, _, n| {
                across += u32::from(n.value.unwrap_or(0));
            });
            let mut down = 0u32;
            for_each_in_run(grid, x, y, Dir::Down, |_, _, n| {
                down += u32::from(n.value.unwrap_or(0));
            });
            if let Some(Cell::Hint(h)) = grid.get_mut(x, y) {
                h.across_sum = Some(across);
                h.down_sum = Some(down);
            }
        }
    }
}
