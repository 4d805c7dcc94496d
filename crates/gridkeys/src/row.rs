//! Row and cell capabilities consumed by the grid managers.
//!
//! The managers never own or mutate rows and cells. A row only has to expose
//! its cells as an ordered slice; cells are opaque and compared by `Arc`
//! pointer identity, never by value.

use std::fmt;
use std::sync::Arc;

use gridkeys_core::LiveList;

/// A row of cells in a navigable grid.
///
/// Rows of differing lengths are tolerated, but navigation that keeps the
/// column index (up/down) only succeeds when the target row has a cell there.
///
/// # Example
///
/// ```
/// use std::sync::Arc;
/// use gridkeys::GridRow;
///
/// struct Chip {
///     cells: Vec<Arc<String>>,
/// }
///
/// impl GridRow for Chip {
///     type Cell = String;
///
///     fn cells(&self) -> &[Arc<String>] {
///         &self.cells
///     }
/// }
/// ```
pub trait GridRow: Send + Sync + 'static {
    /// The cell type.
    type Cell: Send + Sync + 'static;

    /// The cells of this row, in navigation order.
    fn cells(&self) -> &[Arc<Self::Cell>];
}

/// A cell that can receive input focus.
pub trait FocusableCell {
    /// Move input focus to this cell.
    fn focus(&self);
}

/// Where a grid manager gets its rows from.
///
/// A [`GridRows::Fixed`] sequence is moved into the manager. A
/// [`GridRows::Live`] collection stays shared with its owner, and the manager
/// follows its change notifications to keep the active row index current.
pub enum GridRows<R> {
    /// A sequence that never changes.
    Fixed(Vec<Arc<R>>),
    /// A shared, observable sequence.
    Live(Arc<LiveList<Arc<R>>>),
}

impl<R: GridRow> GridRows<R> {
    /// Runs `f` against the current rows.
    pub(crate) fn with_rows<T>(&self, f: impl FnOnce(&[Arc<R>]) -> T) -> T {
        match self {
            GridRows::Fixed(rows) => f(rows.as_slice()),
            GridRows::Live(list) => list.with_items(f),
        }
    }

    /// Number of rows.
    pub fn len(&self) -> usize {
        match self {
            GridRows::Fixed(rows) => rows.len(),
            GridRows::Live(list) => list.len(),
        }
    }

    /// Returns `true` if there are no rows.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns `true` for a live collection.
    pub fn is_live(&self) -> bool {
        matches!(self, GridRows::Live(_))
    }
}

impl<R> From<Vec<Arc<R>>> for GridRows<R> {
    fn from(rows: Vec<Arc<R>>) -> Self {
        GridRows::Fixed(rows)
    }
}

impl<R> From<Arc<LiveList<Arc<R>>>> for GridRows<R> {
    fn from(list: Arc<LiveList<Arc<R>>>) -> Self {
        GridRows::Live(list)
    }
}

impl<R> fmt::Debug for GridRows<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GridRows::Fixed(rows) => f.debug_tuple("Fixed").field(&rows.len()).finish(),
            GridRows::Live(list) => f.debug_tuple("Live").field(&Arc::as_ptr(list)).finish(),
        }
    }
}

/// A `(row, column)` coordinate in a grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct CellPosition {
    pub row: usize,
    pub column: usize,
}

impl CellPosition {
    /// Create a position.
    pub const fn new(row: usize, column: usize) -> Self {
        Self { row, column }
    }
}

impl From<(usize, usize)> for CellPosition {
    fn from((row, column): (usize, usize)) -> Self {
        Self { row, column }
    }
}

impl fmt::Display for CellPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.column)
    }
}

/// What to make active: a coordinate, or a specific cell.
pub enum CellTarget<C> {
    /// A `(row, column)` coordinate.
    Position(CellPosition),
    /// A cell, located by pointer identity.
    Cell(Arc<C>),
}

impl<C> From<CellPosition> for CellTarget<C> {
    fn from(position: CellPosition) -> Self {
        CellTarget::Position(position)
    }
}

impl<C> From<(usize, usize)> for CellTarget<C> {
    fn from(position: (usize, usize)) -> Self {
        CellTarget::Position(position.into())
    }
}

impl<C> From<Arc<C>> for CellTarget<C> {
    fn from(cell: Arc<C>) -> Self {
        CellTarget::Cell(cell)
    }
}

impl<C> From<&Arc<C>> for CellTarget<C> {
    fn from(cell: &Arc<C>) -> Self {
        CellTarget::Cell(Arc::clone(cell))
    }
}

impl<C> fmt::Debug for CellTarget<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellTarget::Position(position) => f.debug_tuple("Position").field(position).finish(),
            CellTarget::Cell(cell) => f.debug_tuple("Cell").field(&Arc::as_ptr(cell)).finish(),
        }
    }
}
