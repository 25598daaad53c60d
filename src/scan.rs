use crate::grid::{Cell, Grid, NumberCell};

/// The two directions a run can extend in: rightward or downward.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Dir {
    Across,
    Down,
}

pub const DIRS: [Dir; 2] = [Dir::Across, Dir::Down];

impl Dir {
    pub fn step(self) -> (i32, i32) {
        match self {
            Dir::Across => (1, 0),
            Dir::Down => (0, 1),
        }
    }
}

/// Result of walking one run: how many number cells it holds and the first
/// non-number coordinate past it. `end` may lie outside the grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RunScan {
    pub len: usize,
    pub end: (i32, i32),
}

/// Walk the run starting one step from `(x, y)` along `dir`, calling
/// `visit` for every number cell in it.
pub fn for_each_in_run(
    grid: &Grid,
    x: i32,
    y: i32,
    dir: Dir,
    mut visit: impl FnMut(i32, i32, &NumberCell),
) -> RunScan {
    let (dx, dy) = dir.step();
    let (mut cx, mut cy) = (x + dx, y + dy);
    let mut len = 0;
    while let Some(Cell::Number(n)) = grid.get(cx, cy) {
        visit(cx, cy, n);
        len += 1;
        cx += dx;
        cy += dy;
    }
    RunScan { len, end: (cx, cy) }
}

/// Length and end coordinate of the run starting one step from `(x, y)`.
pub fn scan_run(grid: &Grid, x: i32, y: i32, dir: Dir) -> RunScan {
    for_each_in_run(grid, x, y, dir, |_, _, _| {})
}
