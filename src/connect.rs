use crate::error::BoardError;
use crate::grid::Grid;

/// Flood-fill the number cells from an arbitrary seed and require that
/// every number cell was reached: the puzzle must be one 4-connected
/// region, not a set of isolated pockets. A board with no number cells at
/// all is rejected too.
pub fn check_connected(grid: &Grid) -> Result<(), BoardError> {
    let width = grid.width();
    let total = grid.number_count();

    let Some(seed) = grid
        .iter()
        .find(|(_, _, cell)| cell.is_number())
        .map(|(x, y, _)| (x, y))
    else {
        return Err(BoardError::Disconnected);
    };

    let mut seen = vec![false; width * grid.height()];
    let mut stack = vec![seed];
    seen[seed.1 as usize * width + seed.0 as usize] = true;
    let mut visited = 1;

    while let Some((x, y)) = stack.pop() {
        for (dx, dy) in [(1, 0), (-1, 0), (0, 1), (0, -1)] {
            let (nx, ny) = (x + dx, y + dy);
            if !grid.is_number(nx, ny) {
                continue;
            }
            let idx = ny as usize * width + nx as usize;
            if !seen[idx] {
                seen[idx] = true;
                visited += 1;
                stack.push((nx, ny));
            }
        }
    }

    if visited == total {
        Ok(())
    } else {
        Err(BoardError::Disconnected)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::Cell;

    #[test]
    fn open_interior_is_connected() {
        let g = Grid::bordered(4, 4);
        check_connected(&g).unwrap();
    }

    #[test]
    fn isolated_cell_is_rejected() {
        // 4x4 interior with (1, 1) walled off: its other two orthogonal
        // neighbors are border hints already.
        let mut g = Grid::bordered(4, 4);
        g.set(2, 1, Cell::hint());
        g.set(1, 2, Cell::hint());
        assert_eq!(check_connected(&g), Err(BoardError::Disconnected));
    }

    #[test]
    fn hint_only_board_is_rejected() {
        let mut g = Grid::bordered(2, 2);
        for y in 1..=2 {
            for x in 1..=2 {
                g.set(x, y, Cell::hint());
            }
        }
        assert_eq!(check_connected(&g), Err(BoardError::Disconnected));
    }

    #[test]
    fn diagonal_contact_does_not_connect() {
        // Two number regions touching only at a corner.
        let mut g = Grid::bordered(3, 3);
        g.set(3, 1, Cell::hint());
        g.set(2, 2, Cell::hint());
        g.set(1, 3, Cell::hint());
        assert_eq!(check_connected(&g), Err(BoardError::Disconnected));
    }
}
