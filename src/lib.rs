//! Procedural Kakuro board generation: layout synthesis, structural
//! repair, connectivity validation and constrained digit assignment,
//! driven by a randomized retry loop. The output grid is read-only data
//! for whatever renders it.

pub mod assign;
pub mod connect;
pub mod error;
pub mod generator;
pub mod grid;
pub mod layout;
pub mod repair;
pub mod scan;

pub use error::{BoardError, GenerateError};
pub use generator::{BoardConfig, Generator, generate_board};
pub use grid::{Cell, Grid, HintCell, NumberCell};
