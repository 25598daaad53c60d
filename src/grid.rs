use std::fmt;

/// Hint payload. Sums stay `None` until the assigner computes them; an
/// empty run gets `Some(0)`, which renderers treat as "no clue".
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct HintCell {
    pub border: bool,
    pub down_sum: Option<u32>,
    pub across_sum: Option<u32>,
}

/// Number payload: a digit 1..=9 once assigned.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct NumberCell {
    pub value: Option<u8>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Cell {
    Hint(HintCell),
    Number(NumberCell),
}

impl Cell {
    pub fn hint() -> Self {
        Cell::Hint(HintCell::default())
    }

    pub fn border_hint() -> Self {
        Cell::Hint(HintCell {
            border: true,
            ..HintCell::default()
        })
    }

    pub fn number() -> Self {
        Cell::Number(NumberCell::default())
    }

    pub fn is_hint(&self) -> bool {
        matches!(self, Cell::Hint(_))
    }

    pub fn is_number(&self) -> bool {
        matches!(self, Cell::Number(_))
    }

    pub fn is_border(&self) -> bool {
        matches!(self, Cell::Hint(h) if h.border)
    }

    pub fn value(&self) -> Option<u8> {
        match self {
            Cell::Number(n) => n.value,
            Cell::Hint(_) => None,
        }
    }
}

/// Rectangular board, row-major, fully populated. Coordinates are
/// `(x, y)` with x = column, y = row; out-of-bounds lookups return `None`
/// rather than erroring, so traversal code can walk off the edge freely.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    width: usize,
    height: usize,
    cells: Vec<Cell>,
}

impl Grid {
    /// Build a `(w + 2) x (h + 2)` grid: an outer ring of border hints
    /// framing `w x h` unset number cells.
    pub fn bordered(interior_width: usize, interior_height: usize) -> Self {
        let width = interior_width + 2;
        let height = interior_height + 2;
        let mut cells = Vec::with_capacity(width * height);
        for y in 0..height {
            for x in 0..width {
                if x == 0 || x == width - 1 || y == 0 || y == height - 1 {
                    cells.push(Cell::border_hint());
                } else {
                    cells.push(Cell::number());
                }
            }
        }
        Grid {
            width,
            height,
            cells,
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    fn index(&self, x: i32, y: i32) -> Option<usize> {
        if x < 0 || y < 0 || x >= self.width as i32 || y >= self.height as i32 {
            None
        } else {
            Some(y as usize * self.width + x as usize)
        }
    }

    pub fn get(&self, x: i32, y: i32) -> Option<&Cell> {
        self.index(x, y).map(|i| &self.cells[i])
    }

    pub fn get_mut(&mut self, x: i32, y: i32) -> Option<&mut Cell> {
        self.index(x, y).map(|i| &mut self.cells[i])
    }

    /// Replace the cell at `(x, y)`. Out-of-bounds writes are ignored;
    /// border cells must keep their kind, which is the caller's contract.
    pub fn set(&mut self, x: i32, y: i32, cell: Cell) {
        if let Some(slot) = self.get_mut(x, y) {
            debug_assert!(!slot.is_border());
            *slot = cell;
        }
    }

    pub fn is_number(&self, x: i32, y: i32) -> bool {
        matches!(self.get(x, y), Some(Cell::Number(_)))
    }

    pub fn is_hint(&self, x: i32, y: i32) -> bool {
        matches!(self.get(x, y), Some(Cell::Hint(_)))
    }

    /// Row-major iteration over all cells with their coordinates.
    pub fn iter(&self) -> impl Iterator<Item = (i32, i32, &Cell)> {
        let width = self.width;
        self.cells.iter().enumerate().map(move |(i, cell)| {
            ((i % width) as i32, (i / width) as i32, cell)
        })
    }

    pub fn number_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_number()).count()
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (x, _, cell) in self.iter() {
            match cell {
                Cell::Number(n) => match n.value {
                    Some(v) => write!(f, "  {v}  ")?,
                    None => write!(f, "  .  ")?,
                },
                Cell::Hint(h) => {
                    let down = h.down_sum.unwrap_or(0);
                    let across = h.across_sum.unwrap_or(0);
                    if down == 0 && across == 0 {
                        write!(f, "#####")?;
                    } else {
                        write!(f, "{down:>2}\\{across:<2}")?;
                    }
                }
            }
            if x == self.width as i32 - 1 {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}
