use crate::{Point, Result, SearchError};

/// The cost of a single cell of a [`GridMap`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CellCost {
    /// Impassable.
    Obstacle,
    /// No extra cost.
    Normal,
    /// Passable, with a positive extra cost.
    Penalty(usize),
}

impl CellCost {
    /// Whether an Agent may stand on this cell.
    pub fn is_passable(self) -> bool {
        self != CellCost::Obstacle
    }

    /// The extra cost of this cell, `None` for obstacles.
    pub fn penalty(self) -> Option<usize> {
        match self {
            CellCost::Obstacle => None,
            CellCost::Normal => Some(0),
            CellCost::Penalty(penalty) => Some(penalty),
        }
    }
}

impl From<isize> for CellCost {
    /// Negative costs are obstacles, `0` is normal, anything else is a penalty.
    fn from(cost: isize) -> CellCost {
        match cost {
            c if c < 0 => CellCost::Obstacle,
            0 => CellCost::Normal,
            c => CellCost::Penalty(c as usize),
        }
    }
}

/// A position in `(row, column)` form.
///
/// Callers speak in `(x, y)` [`Point`]s; everything that indexes into the Grid
/// converts through [`From<Point>`] first, which is the only place the axes are
/// swapped. The ordering is row-major, which is also the tie-breaker of the A*
/// frontier.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RowCol {
    /// `y`
    pub row: usize,
    /// `x`
    pub col: usize,
}

impl From<Point> for RowCol {
    fn from((x, y): Point) -> RowCol {
        RowCol { row: y, col: x }
    }
}

impl From<RowCol> for Point {
    fn from(cell: RowCol) -> Point {
        (cell.col, cell.row)
    }
}

/// A static, row-major Grid of [`CellCost`]s.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GridMap {
    width: usize,
    height: usize,
    cells: Vec<CellCost>,
}

impl GridMap {
    /// Creates a Grid from `width * height` raw costs in row-major order.
    ///
    /// See [`CellCost::from`] for how the raw numbers are read.
    pub fn from_costs(
        width: usize,
        height: usize,
        costs: impl IntoIterator<Item = isize>,
    ) -> Result<GridMap> {
        let cells: Vec<CellCost> = costs.into_iter().map(CellCost::from).collect();
        if cells.len() != width * height {
            return Err(SearchError::GridShape {
                expected: width * height,
                actual: cells.len(),
            });
        }
        Ok(GridMap {
            width,
            height,
            cells,
        })
    }

    /// Creates a Grid from a slice of rows, so that `rows[y][x]` is the cost of `(x, y)`.
    pub fn from_rows<const W: usize>(rows: &[[isize; W]]) -> Result<GridMap> {
        GridMap::from_costs(W, rows.len(), rows.iter().flatten().copied())
    }

    /// Creates a Grid without any obstacles or penalties.
    pub fn open(width: usize, height: usize) -> GridMap {
        GridMap {
            width,
            height,
            cells: vec![CellCost::Normal; width * height],
        }
    }

    /// The number of columns.
    pub fn width(&self) -> usize {
        self.width
    }

    /// The number of rows.
    pub fn height(&self) -> usize {
        self.height
    }

    /// Whether `point` lies on the Grid.
    pub fn contains(&self, point: Point) -> bool {
        point.0 < self.width && point.1 < self.height
    }

    /// The cost of the cell at `point`, or `None` if it is outside the Grid.
    pub fn cost(&self, point: Point) -> Option<CellCost> {
        self.index(point.into()).map(|idx| self.cells[idx])
    }

    /// Whether `point` lies on the Grid and is not an obstacle.
    pub fn is_passable(&self, point: Point) -> bool {
        self.cost(point).map_or(false, CellCost::is_passable)
    }

    fn index(&self, cell: RowCol) -> Option<usize> {
        if cell.row < self.height && cell.col < self.width {
            Some(cell.row * self.width + cell.col)
        } else {
            None
        }
    }
}
