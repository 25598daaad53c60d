use kakuro::connect::check_connected;
use kakuro::repair::check_runs;
use kakuro::scan::{DIRS, Dir, for_each_in_run, scan_run};
use kakuro::{BoardConfig, Cell, Generator, Grid};
use rand::{RngCore, SeedableRng};
use rand_xoshiro::SplitMix64;

/// Every invariant a finished board must satisfy.
fn assert_valid(board: &Grid, interior_w: usize, interior_h: usize) {
    assert_eq!(board.width(), interior_w + 2);
    assert_eq!(board.height(), interior_h + 2);

    // The outer ring is border hints, always.
    for (x, y, cell) in board.iter() {
        let on_ring = x == 0
            || y == 0
            || x == board.width() as i32 - 1
            || y == board.height() as i32 - 1;
        if on_ring {
            assert!(cell.is_border(), "ring cell ({x}, {y}) is not a border hint");
        } else {
            assert!(!cell.is_border(), "interior cell ({x}, {y}) claims border");
        }
    }

    // Run lengths are 0 or 2..=9 and the digits in a run never repeat;
    // every hint's clue equals the literal total of its run.
    check_runs(board).unwrap();
    for (x, y, cell) in board.iter() {
        let Cell::Hint(hint) = cell else { continue };
        for dir in DIRS {
            let mut total = 0u32;
            let mut mask = 0u16;
            let scan = for_each_in_run(board, x, y, dir, |cx, cy, n| {
                let v = n.value.unwrap_or_else(|| panic!("unset cell ({cx}, {cy})"));
                assert!((1..=9).contains(&v), "value {v} at ({cx}, {cy})");
                assert_eq!(mask & (1 << (v - 1)), 0, "digit {v} repeats at ({cx}, {cy})");
                mask |= 1 << (v - 1);
                total += u32::from(v);
            });
            let clue = match dir {
                Dir::Across => hint.across_sum,
                Dir::Down => hint.down_sum,
            };
            assert_eq!(clue, Some(total), "clue at ({x}, {y}) {dir:?}");
            if scan.len == 0 {
                assert_eq!(clue, Some(0));
            }
        }
    }

    // One 4-connected region of number cells.
    check_connected(board).unwrap();
}

#[test]
fn ten_by_ten_half_gaps_is_valid() {
    let mut seeds = SplitMix64::seed_from_u64(7);
    for _ in 0..8 {
        let seed = seeds.next_u64();
        let mut generator = Generator::with_seed(BoardConfig::new(10, 10, 0.5), seed);
        let board = generator.generate().unwrap_or_else(|e| panic!("seed {seed}: {e}"));
        assert_valid(&board, 10, 10);
    }
}

#[test]
fn assorted_shapes_are_valid() {
    let mut seeds = SplitMix64::seed_from_u64(11);
    for (w, h, gap) in [(4, 4, 0.2), (6, 9, 0.35), (9, 5, 0.5), (8, 8, 0.0)] {
        let seed = seeds.next_u64();
        let mut generator = Generator::with_seed(BoardConfig::new(w, h, gap), seed);
        let board = generator.generate().unwrap_or_else(|e| panic!("seed {seed}: {e}"));
        assert_valid(&board, w, h);
    }
}

#[test]
fn scanning_a_finished_board_is_idempotent() {
    let mut generator = Generator::with_seed(BoardConfig::new(6, 6, 0.3), 99);
    let board = generator.generate().unwrap();
    for (x, y, cell) in board.iter() {
        if !cell.is_hint() {
            continue;
        }
        for dir in DIRS {
            assert_eq!(scan_run(&board, x, y, dir), scan_run(&board, x, y, dir));
        }
    }
}

#[test]
fn generation_is_reproducible() {
    let config = BoardConfig::new(10, 10, 0.5);
    let a = Generator::with_seed(config, 123).generate().unwrap();
    let b = Generator::with_seed(config, 123).generate().unwrap();
    assert_eq!(a, b);
}
