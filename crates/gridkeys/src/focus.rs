//! Grid navigation that moves real input focus.
//!
//! [`GridFocusKeyManager`] is a [`GridKeyManager`] whose activation hook
//! focuses the active cell. Every operation that goes through
//! `set_active_cell` (which is every navigation operation) ends with the
//! active cell receiving focus. Focus is only ever an effect of the logical
//! state: there is no way to move focus without updating the state, and no way
//! to update the state without moving focus.

use std::fmt;
use std::sync::Arc;

use gridkeys_core::logging::targets;
use gridkeys_core::Signal;

use crate::config::GridKeyConfig;
use crate::direction::Direction;
use crate::keyboard::KeyboardEvent;
use crate::manager::GridKeyManager;
use crate::row::{CellPosition, CellTarget, FocusableCell, GridRow, GridRows};

/// A grid key manager that focuses the active cell whenever it is set.
///
/// # Example
///
/// ```
/// use std::sync::Arc;
/// use std::sync::atomic::{AtomicUsize, Ordering};
/// use gridkeys::{FocusableCell, GridFocusKeyManager, GridRow};
///
/// #[derive(Default)]
/// struct Cell {
///     focus_count: AtomicUsize,
/// }
///
/// impl FocusableCell for Cell {
///     fn focus(&self) {
///         self.focus_count.fetch_add(1, Ordering::SeqCst);
///     }
/// }
///
/// struct Row(Vec<Arc<Cell>>);
///
/// impl GridRow for Row {
///     type Cell = Cell;
///     fn cells(&self) -> &[Arc<Cell>] {
///         &self.0
///     }
/// }
///
/// let row = Arc::new(Row(vec![Arc::default(), Arc::default()]));
/// let manager = GridFocusKeyManager::new(vec![row.clone()]);
///
/// manager.set_active_cell((0, 1));
/// assert_eq!(row.0[1].focus_count.load(Ordering::SeqCst), 1);
/// ```
pub struct GridFocusKeyManager<R: GridRow>
where
    R::Cell: FocusableCell,
{
    inner: GridKeyManager<R>,
}

impl<R: GridRow> GridFocusKeyManager<R>
where
    R::Cell: FocusableCell,
{
    /// Create a manager over `rows` with no active cell.
    pub fn new(rows: impl Into<GridRows<R>>) -> Self {
        let inner = GridKeyManager::new(rows).with_activation_hook(|cell: &Arc<R::Cell>| {
            tracing::trace!(target: targets::FOCUS, "focusing active cell");
            cell.focus();
        });
        Self { inner }
    }

    /// Set the text direction used to map the horizontal arrow keys.
    pub fn with_directionality(self, direction: Direction) -> Self {
        Self {
            inner: self.inner.with_directionality(direction),
        }
    }

    /// Apply a loaded configuration.
    pub fn with_config(self, config: &GridKeyConfig) -> Self {
        Self {
            inner: self.inner.with_config(config),
        }
    }

    /// Change the text direction. Takes effect on the next key press.
    pub fn set_directionality(&self, direction: Direction) {
        self.inner.set_directionality(direction);
    }

    /// The current text direction.
    pub fn directionality(&self) -> Direction {
        self.inner.directionality()
    }

    /// The notification emitted when the active cell moves.
    pub fn change(&self) -> &Arc<Signal<CellPosition>> {
        self.inner.change()
    }

    /// The row source this manager navigates.
    pub fn rows(&self) -> &GridRows<R> {
        self.inner.rows()
    }

    /// Number of rows currently in the grid.
    pub fn row_count(&self) -> usize {
        self.inner.row_count()
    }

    /// Index of the active row, or `None` if no cell is active.
    pub fn active_row_index(&self) -> Option<usize> {
        self.inner.active_row_index()
    }

    /// Index of the active cell within its row, or `None` if no cell is active.
    pub fn active_column_index(&self) -> Option<usize> {
        self.inner.active_column_index()
    }

    /// Position of the active cell, or `None` if no cell is active.
    pub fn active_position(&self) -> Option<CellPosition> {
        self.inner.active_position()
    }

    /// The active row, or `None` if no cell is active.
    pub fn active_row(&self) -> Option<Arc<R>> {
        self.inner.active_row()
    }

    /// The active cell, or `None` if no cell is active.
    pub fn active_cell(&self) -> Option<Arc<R::Cell>> {
        self.inner.active_cell()
    }

    /// Make `target` the active cell, then focus the active cell.
    ///
    /// Focus is applied whenever a cell is active afterwards, including when
    /// the target was already active or could not be resolved.
    pub fn set_active_cell(&self, target: impl Into<CellTarget<R::Cell>>) {
        self.inner.set_active_cell(target);
    }

    /// React to a key press. See [`GridKeyManager::on_keydown`].
    pub fn on_keydown<E: KeyboardEvent + ?Sized>(&self, event: &mut E) -> bool {
        self.inner.on_keydown(event)
    }

    /// Focus the first cell of the first row.
    pub fn set_first_cell_active(&self) {
        self.inner.set_first_cell_active();
    }

    /// Focus the last cell of the last row.
    pub fn set_last_cell_active(&self) {
        self.inner.set_last_cell_active();
    }

    /// Focus the same column of the next row.
    pub fn set_next_row_active(&self) {
        self.inner.set_next_row_active();
    }

    /// Focus the same column of the previous row.
    pub fn set_previous_row_active(&self) {
        self.inner.set_previous_row_active();
    }

    /// Focus the next cell, wrapping onto the next row.
    pub fn set_next_column_active(&self) {
        self.inner.set_next_column_active();
    }

    /// Focus the previous cell, wrapping onto the previous row.
    pub fn set_previous_column_active(&self) {
        self.inner.set_previous_column_active();
    }

    /// Render the grid shape with the active cell marked.
    pub fn debug_layout(&self) -> String {
        self.inner.debug_layout()
    }
}

impl<R: GridRow> fmt::Debug for GridFocusKeyManager<R>
where
    R::Cell: FocusableCell,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("GridFocusKeyManager").field(&self.inner).finish()
    }
}
