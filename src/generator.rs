use rand::SeedableRng;
use rand::rngs::SmallRng;

use crate::assign::assign_digits;
use crate::connect::check_connected;
use crate::error::{BoardError, GenerateError};
use crate::grid::Grid;
use crate::layout::{HintPlacement, generate_layout};
use crate::repair::repair;

const DEFAULT_MAX_ATTEMPTS: usize = 1000;

/// Board shape and generation knobs.
#[derive(Clone, Copy, Debug)]
pub struct BoardConfig {
    /// Interior width; the finished grid is two wider.
    pub width: usize,
    /// Interior height; the finished grid is two taller.
    pub height: usize,
    /// Fraction of interior cells converted to hints, in `[0, 1)`.
    pub gap_fraction: f64,
    pub placement: HintPlacement,
    /// Whole-pipeline retries before giving up.
    pub max_attempts: usize,
}

impl BoardConfig {
    /// # Panics
    ///
    /// Panics unless `width >= 3`, `height >= 3` and
    /// `0.0 <= gap_fraction < 1.0`.
    pub fn new(width: usize, height: usize, gap_fraction: f64) -> Self {
        assert!(width >= 3 && height >= 3, "interior must be at least 3x3");
        assert!(
            (0.0..1.0).contains(&gap_fraction),
            "gap_fraction must be in [0, 1)"
        );
        BoardConfig {
            width,
            height,
            gap_fraction,
            placement: HintPlacement::default(),
            max_attempts: DEFAULT_MAX_ATTEMPTS,
        }
    }
}

/// Runs the pipeline — layout, repair, connectivity, digits — restarting
/// from a fresh layout whenever a stage finds a defect. Owns the rng, so a
/// seeded generator reproduces its boards exactly.
pub struct Generator {
    config: BoardConfig,
    rng: SmallRng,
}

impl Generator {
    pub fn new(config: BoardConfig) -> Self {
        Generator {
            config,
            rng: SmallRng::from_os_rng(),
        }
    }

    pub fn with_seed(config: BoardConfig, seed: u64) -> Self {
        Generator {
            config,
            rng: SmallRng::seed_from_u64(seed),
        }
    }

    pub fn generate(&mut self) -> Result<Grid, GenerateError> {
        for _ in 0..self.config.max_attempts {
            match self.attempt() {
                Ok(grid) => return Ok(grid),
                // Routine randomized-generation misses; try a new layout.
                Err(
                    BoardError::MalformedRun { .. }
                    | BoardError::Disconnected
                    | BoardError::DigitCollision { .. },
                ) => continue,
            }
        }
        Err(GenerateError::Exhausted {
            attempts: self.config.max_attempts,
        })
    }

    fn attempt(&mut self) -> Result<Grid, BoardError> {
        let cfg = &self.config;
        let mut grid = generate_layout(
            cfg.width,
            cfg.height,
            cfg.gap_fraction,
            cfg.placement,
            &mut self.rng,
        );
        repair(&mut grid, &mut self.rng)?;
        check_connected(&grid)?;
        assign_digits(&mut grid, &mut self.rng)?;
        Ok(grid)
    }
}

/// One-call entry point for renderers: a finished board for an interior of
/// `width x height` with roughly `gap_fraction` of it given over to hints.
pub fn generate_board(
    width: usize,
    height: usize,
    gap_fraction: f64,
) -> Result<Grid, GenerateError> {
    Generator::new(BoardConfig::new(width, height, gap_fraction)).generate()
}
