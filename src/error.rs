use thiserror::Error;

/// Defects detected in a single generation attempt. All of these are
/// routine outcomes of randomized layout work: the orchestrator discards
/// the grid wholesale and retries from a fresh layout.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum BoardError {
    #[error("run at ({x}, {y}) stabilized with length {len}, want 0 or 2..=9")]
    MalformedRun { x: i32, y: i32, len: usize },
    #[error("number cells do not form a single connected region")]
    Disconnected,
    #[error("no free digit left for cell ({x}, {y})")]
    DigitCollision { x: i32, y: i32 },
}

/// Fatal generation failure, surfaced to the caller.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum GenerateError {
    #[error("no valid board within {attempts} attempts")]
    Exhausted { attempts: usize },
}
