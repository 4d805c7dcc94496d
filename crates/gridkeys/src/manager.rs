//! Keyboard navigation over a grid of rows of cells.
//!
//! [`GridKeyManager`] tracks a single *active cell* in a grid and moves it in
//! response to arrow keys. It never renders, lays out, or mutates the grid; it
//! only reads the row sequence and reports where the active cell went.
//!
//! # Navigation rules
//!
//! - Up/Down move one row and keep the column. There is no vertical wrap, and
//!   moving into a row that has no cell at that column does nothing.
//! - Left/Right move one column. Running off the end of a row continues at
//!   the first cell of the next row; running off the start continues at the
//!   last cell of the previous row. Past the first or last cell of the grid
//!   nothing happens.
//! - In a right-to-left host the horizontal arrows are mirrored.
//! - With no active cell, "next row" and "next column" jump to `(0, 0)`.
//!
//! Out-of-range requests of any kind are silent no-ops.
//!
//! # Live rows
//!
//! When built over a [`LiveList`](gridkeys_core::LiveList), the manager
//! follows the list's change notifications: if the active row moved, the
//! active row index is updated to its new position without emitting
//! [`change`](GridKeyManager::change). If the active row was removed the last
//! known position is kept as-is. Callers that remove the active row should set
//! a new active cell themselves.
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//! use gridkeys::keyboard::{Key, KeyPressEvent};
//! use gridkeys::{CellPosition, Direction, GridKeyManager, GridRow};
//!
//! struct Row(Vec<Arc<&'static str>>);
//!
//! impl GridRow for Row {
//!     type Cell = &'static str;
//!     fn cells(&self) -> &[Arc<&'static str>] {
//!         &self.0
//!     }
//! }
//!
//! let rows = vec![
//!     Arc::new(Row(vec![Arc::new("a"), Arc::new("a-remove")])),
//!     Arc::new(Row(vec![Arc::new("b"), Arc::new("b-remove")])),
//! ];
//! let manager = GridKeyManager::new(rows).with_directionality(Direction::Ltr);
//!
//! manager.change().connect(|position: &CellPosition| {
//!     println!("active cell moved to {position}");
//! });
//!
//! let mut event = KeyPressEvent::from_key(Key::ArrowRight);
//! manager.on_keydown(&mut event);
//! assert_eq!(manager.active_position(), Some(CellPosition::new(0, 0)));
//! ```

use std::fmt;
use std::sync::Arc;

use gridkeys_core::logging::{format_grid, targets, GridStyle};
use gridkeys_core::{ConnectionGuard, Signal};
use parking_lot::Mutex;

use crate::config::GridKeyConfig;
use crate::direction::Direction;
use crate::keyboard::{ArrowKey, KeyboardEvent};
use crate::row::{CellPosition, CellTarget, GridRow, GridRows};

type ActivationHook<C> = Arc<dyn Fn(&Arc<C>) + Send + Sync>;

/// The resolved active cell. Indices, row and cell always travel together.
struct ActiveCell<R: GridRow> {
    row_index: usize,
    column_index: usize,
    row: Arc<R>,
    cell: Arc<R::Cell>,
}

impl<R: GridRow> ActiveCell<R> {
    fn position(&self) -> CellPosition {
        CellPosition::new(self.row_index, self.column_index)
    }
}

/// Mutable state shared with the live-rows subscription.
struct GridState<R: GridRow> {
    active: Option<ActiveCell<R>>,
    direction: Direction,
}

impl<R: GridRow> GridState<R> {
    fn new() -> Self {
        Self {
            active: None,
            direction: Direction::default(),
        }
    }

    fn position(&self) -> Option<CellPosition> {
        self.active.as_ref().map(ActiveCell::position)
    }

    /// Point the active cell at `target`. Returns `false` and leaves the state
    /// untouched if the target is not in `rows`.
    fn resolve(&mut self, rows: &[Arc<R>], target: &CellTarget<R::Cell>) -> bool {
        let resolved = match target {
            CellTarget::Position(position) => rows.get(position.row).and_then(|row| {
                row.cells().get(position.column).map(|cell| ActiveCell {
                    row_index: position.row,
                    column_index: position.column,
                    row: Arc::clone(row),
                    cell: Arc::clone(cell),
                })
            }),
            CellTarget::Cell(target) => rows.iter().enumerate().find_map(|(row_index, row)| {
                row.cells()
                    .iter()
                    .position(|cell| Arc::ptr_eq(cell, target))
                    .map(|column_index| ActiveCell {
                        row_index,
                        column_index,
                        row: Arc::clone(row),
                        cell: Arc::clone(target),
                    })
            }),
        };

        match resolved {
            Some(active) => {
                self.active = Some(active);
                true
            }
            None => false,
        }
    }

    /// Re-derive the active row index after the row sequence changed.
    fn reconcile(&mut self, rows: &[Arc<R>]) {
        let Some(active) = self.active.as_mut() else {
            return;
        };

        match rows.iter().position(|row| Arc::ptr_eq(row, &active.row)) {
            Some(new_index) if new_index != active.row_index => {
                tracing::debug!(
                    target: targets::MANAGER,
                    from = active.row_index,
                    to = new_index,
                    "active row moved"
                );
                active.row_index = new_index;
            }
            Some(_) => {}
            None => {
                tracing::debug!(
                    target: targets::MANAGER,
                    row = active.row_index,
                    column = active.column_index,
                    "active row no longer present, keeping last known position"
                );
            }
        }
    }
}

/// Tracks the active cell of a grid and moves it in response to arrow keys.
///
/// All methods take `&self`; state lives behind a mutex so the manager can be
/// shared with the host and with the live-rows subscription. No lock is held
/// while [`change`](Self::change) is emitted or the activation hook runs, so
/// slots may call back into the manager.
///
/// # Signals
///
/// - `change`: Emitted with the new position whenever
///   [`set_active_cell`](Self::set_active_cell) (or any navigation method)
///   actually moves the active cell.
pub struct GridKeyManager<R: GridRow> {
    rows: GridRows<R>,
    state: Arc<Mutex<GridState<R>>>,
    change: Arc<Signal<CellPosition>>,
    activation_hook: Option<ActivationHook<R::Cell>>,
    /// Keeps the live-rows subscription alive; dropping it unsubscribes.
    rows_subscription: Option<ConnectionGuard<Vec<Arc<R>>>>,
}

impl<R: GridRow> GridKeyManager<R> {
    /// Create a manager over `rows` with no active cell.
    ///
    /// A live collection is subscribed to immediately and unsubscribed from
    /// when the manager is dropped.
    pub fn new(rows: impl Into<GridRows<R>>) -> Self {
        let rows = rows.into();
        let state = Arc::new(Mutex::new(GridState::new()));

        let rows_subscription = match &rows {
            GridRows::Live(list) => {
                let weak_state = Arc::downgrade(&state);
                Some(list.changes().connect_scoped(move |new_rows: &Vec<Arc<R>>| {
                    if let Some(state) = weak_state.upgrade() {
                        state.lock().reconcile(new_rows);
                    }
                }))
            }
            GridRows::Fixed(_) => None,
        };

        Self {
            rows,
            state,
            change: Arc::new(Signal::new()),
            activation_hook: None,
            rows_subscription,
        }
    }

    /// Set the text direction used to map the horizontal arrow keys.
    pub fn with_directionality(self, direction: Direction) -> Self {
        self.set_directionality(direction);
        self
    }

    /// Apply a loaded configuration.
    pub fn with_config(self, config: &GridKeyConfig) -> Self {
        self.with_directionality(config.resolved_direction())
    }

    /// Install a callback that runs with the active cell after every
    /// [`set_active_cell`](Self::set_active_cell) that leaves a cell active,
    /// whether or not the position changed.
    ///
    /// Replaces any previously installed hook.
    pub fn with_activation_hook<F>(mut self, hook: F) -> Self
    where
        F: Fn(&Arc<R::Cell>) + Send + Sync + 'static,
    {
        self.activation_hook = Some(Arc::new(hook));
        self
    }

    /// Change the text direction. Takes effect on the next key press.
    pub fn set_directionality(&self, direction: Direction) {
        self.state.lock().direction = direction;
    }

    /// The current text direction.
    pub fn directionality(&self) -> Direction {
        self.state.lock().direction
    }

    /// The notification emitted when the active cell moves.
    pub fn change(&self) -> &Arc<Signal<CellPosition>> {
        &self.change
    }

    /// The row source this manager navigates.
    pub fn rows(&self) -> &GridRows<R> {
        &self.rows
    }

    /// Number of rows currently in the grid.
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Index of the active row, or `None` if no cell is active.
    pub fn active_row_index(&self) -> Option<usize> {
        self.state.lock().active.as_ref().map(|active| active.row_index)
    }

    /// Index of the active cell within its row, or `None` if no cell is active.
    pub fn active_column_index(&self) -> Option<usize> {
        self.state.lock().active.as_ref().map(|active| active.column_index)
    }

    /// Position of the active cell, or `None` if no cell is active.
    pub fn active_position(&self) -> Option<CellPosition> {
        self.state.lock().position()
    }

    /// The active row, or `None` if no cell is active.
    pub fn active_row(&self) -> Option<Arc<R>> {
        self.state.lock().active.as_ref().map(|active| Arc::clone(&active.row))
    }

    /// The active cell, or `None` if no cell is active.
    pub fn active_cell(&self) -> Option<Arc<R::Cell>> {
        self.state.lock().active.as_ref().map(|active| Arc::clone(&active.cell))
    }

    /// Make `target` the active cell.
    ///
    /// `target` is either a [`CellPosition`] (or `(row, column)` tuple) or an
    /// `Arc` to one of the grid's cells, located by pointer identity. A target
    /// that is not in the grid leaves the state unchanged.
    ///
    /// Emits [`change`](Self::change) if the active position moved, then runs
    /// the activation hook if a cell is active.
    pub fn set_active_cell(&self, target: impl Into<CellTarget<R::Cell>>) {
        let requested = target.into();

        let (previous, current, cell) = {
            let mut state = self.state.lock();
            let previous = state.position();
            let resolved = self.rows.with_rows(|rows| state.resolve(rows, &requested));
            if !resolved {
                tracing::trace!(target: targets::MANAGER, ?requested, "target not in grid, ignoring");
            }
            let cell = state.active.as_ref().map(|active| Arc::clone(&active.cell));
            (previous, state.position(), cell)
        };

        if let Some(position) = current.filter(|&position| Some(position) != previous) {
            tracing::trace!(target: targets::MANAGER, %position, "active cell changed");
            self.change.emit(position);
        }

        if let (Some(hook), Some(cell)) = (&self.activation_hook, cell) {
            hook(&cell);
        }
    }

    /// Make `target` the active cell without emitting
    /// [`change`](Self::change) or running the activation hook.
    ///
    /// Useful for syncing the manager to a cell the user focused by other
    /// means (e.g. a pointer click).
    pub fn update_active_cell(&self, target: impl Into<CellTarget<R::Cell>>) {
        let target = target.into();
        let mut state = self.state.lock();
        self.rows.with_rows(|rows| state.resolve(rows, &target));
    }

    /// React to a key press.
    ///
    /// Arrow keys move the active cell and have their default action
    /// suppressed; returns `true` for them. Every other key is left alone,
    /// without touching state or the event, and returns `false`.
    #[tracing::instrument(skip_all, target = "gridkeys::manager", level = "trace")]
    pub fn on_keydown<E: KeyboardEvent + ?Sized>(&self, event: &mut E) -> bool {
        let Some(arrow) = event.key().arrow() else {
            return false;
        };

        let rtl = self.directionality().is_rtl();
        tracing::trace!(target: targets::KEYBOARD, ?arrow, rtl, "handling arrow key");

        match arrow {
            ArrowKey::Down => self.set_next_row_active(),
            ArrowKey::Up => self.set_previous_row_active(),
            ArrowKey::Right if rtl => self.set_previous_column_active(),
            ArrowKey::Right => self.set_next_column_active(),
            ArrowKey::Left if rtl => self.set_next_column_active(),
            ArrowKey::Left => self.set_previous_column_active(),
        }

        event.prevent_default();
        true
    }

    /// Make the first cell of the first row active.
    pub fn set_first_cell_active(&self) {
        self.set_active_cell_by_index(0, 0);
    }

    /// Make the last cell of the last row active.
    pub fn set_last_cell_active(&self) {
        let last = self.rows.with_rows(|rows| {
            let row_index = rows.len().checked_sub(1)?;
            let column_index = rows[row_index].cells().len().checked_sub(1)?;
            Some((row_index, column_index))
        });

        if let Some((row, column)) = last {
            self.set_active_cell_by_index(row, column);
        }
    }

    /// Move to the same column of the next row. With no active cell, jump to
    /// the first cell.
    pub fn set_next_row_active(&self) {
        if self.active_position().is_none() {
            self.set_first_cell_active();
        } else {
            self.set_active_cell_by_delta(1, 0);
        }
    }

    /// Move to the same column of the previous row.
    pub fn set_previous_row_active(&self) {
        self.set_active_cell_by_delta(-1, 0);
    }

    /// Move to the next cell, continuing on the next row past the end of the
    /// current one. With no active cell, jump to the first cell.
    pub fn set_next_column_active(&self) {
        if self.active_position().is_none() {
            self.set_first_cell_active();
        } else {
            self.set_active_cell_by_delta(0, 1);
        }
    }

    /// Move to the previous cell, continuing on the last cell of the previous
    /// row before the start of the current one.
    pub fn set_previous_column_active(&self) {
        self.set_active_cell_by_delta(0, -1);
    }

    /// Render the grid shape with the active cell marked.
    pub fn debug_layout(&self) -> String {
        let lengths: Vec<usize> = self
            .rows
            .with_rows(|rows| rows.iter().map(|row| row.cells().len()).collect());
        let active = self
            .active_position()
            .map(|position| (position.row, position.column));
        format_grid(&lengths, active, GridStyle::Brackets)
    }

    fn set_active_cell_by_delta(&self, row_delta: isize, column_delta: isize) {
        if let Some((row, column)) = self.target_by_delta(row_delta, column_delta) {
            self.set_active_cell_by_index(row, column);
        }
    }

    /// Where a move by `(row_delta, column_delta)` lands, wrapping across row
    /// boundaries horizontally. `None` when there is nowhere to go.
    fn target_by_delta(&self, row_delta: isize, column_delta: isize) -> Option<(usize, usize)> {
        let state = self.state.lock();
        let active = state.active.as_ref()?;

        match active.column_index.checked_add_signed(column_delta) {
            Some(column) if column >= active.row.cells().len() => Some((active.row_index + 1, 0)),
            Some(column) => Some((active.row_index.checked_add_signed(row_delta)?, column)),
            None => {
                let previous_row = active.row_index.checked_sub(1)?;
                let previous_len = self
                    .rows
                    .with_rows(|rows| rows.get(previous_row).map(|row| row.cells().len()))?;
                Some((previous_row, previous_len.checked_sub(1)?))
            }
        }
    }

    fn set_active_cell_by_index(&self, row: usize, column: usize) {
        let exists = self
            .rows
            .with_rows(|rows| rows.get(row).is_some_and(|r| column < r.cells().len()));

        if exists {
            self.set_active_cell(CellPosition::new(row, column));
        } else {
            tracing::trace!(target: targets::MANAGER, row, column, "move leaves the grid, ignoring");
        }
    }
}

impl<R: GridRow> fmt::Debug for GridKeyManager<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = self.state.lock();
        f.debug_struct("GridKeyManager")
            .field("rows", &self.rows)
            .field("active", &state.position())
            .field("direction", &state.direction)
            .field("subscribed", &self.rows_subscription.is_some())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::keyboard::{Key, KeyPressEvent};
    use gridkeys_core::LiveList;

    struct TestCell;

    struct TestRow {
        cells: Vec<Arc<TestCell>>,
    }

    impl TestRow {
        fn new(len: usize) -> Arc<Self> {
            Arc::new(Self {
                cells: (0..len).map(|_| Arc::new(TestCell)).collect(),
            })
        }
    }

    impl GridRow for TestRow {
        type Cell = TestCell;

        fn cells(&self) -> &[Arc<TestCell>] {
            &self.cells
        }
    }

    fn grid(shape: &[usize]) -> Vec<Arc<TestRow>> {
        shape.iter().map(|&len| TestRow::new(len)).collect()
    }

    fn record_changes(manager: &GridKeyManager<TestRow>) -> Arc<Mutex<Vec<CellPosition>>> {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let seen_clone = seen.clone();
        manager.change().connect(move |&position| seen_clone.lock().push(position));
        seen
    }

    fn pos(row: usize, column: usize) -> Option<CellPosition> {
        Some(CellPosition::new(row, column))
    }

    #[test]
    fn test_initial_state_is_unset() {
        let manager = GridKeyManager::new(grid(&[2, 2]));
        assert_eq!(manager.active_row_index(), None);
        assert_eq!(manager.active_column_index(), None);
        assert!(manager.active_row().is_none());
        assert!(manager.active_cell().is_none());
        assert_eq!(manager.directionality(), Direction::Ltr);
        assert_eq!(manager.row_count(), 2);
    }

    #[test]
    fn test_set_active_cell_by_position_emits_change() {
        let rows = grid(&[2, 2]);
        let manager = GridKeyManager::new(rows.clone());
        let seen = record_changes(&manager);

        manager.set_active_cell((1, 1));

        assert_eq!(manager.active_position(), pos(1, 1));
        assert!(Arc::ptr_eq(&manager.active_row().unwrap(), &rows[1]));
        assert!(Arc::ptr_eq(&manager.active_cell().unwrap(), &rows[1].cells[1]));
        assert_eq!(*seen.lock(), vec![CellPosition::new(1, 1)]);
    }

    #[test]
    fn test_set_same_cell_does_not_emit() {
        let manager = GridKeyManager::new(grid(&[2, 2]));
        let seen = record_changes(&manager);

        manager.set_active_cell((0, 1));
        manager.set_active_cell((0, 1));
        manager.set_active_cell(CellPosition::new(0, 1));

        assert_eq!(seen.lock().len(), 1);
    }

    #[test]
    fn test_out_of_range_position_is_ignored() {
        let manager = GridKeyManager::new(grid(&[2, 2]));
        let seen = record_changes(&manager);

        manager.set_active_cell((2, 0));
        assert_eq!(manager.active_position(), None);

        manager.set_active_cell((0, 0));
        manager.set_active_cell((0, 5));
        manager.set_active_cell((9, 9));

        assert_eq!(manager.active_position(), pos(0, 0));
        assert_eq!(seen.lock().len(), 1);
    }

    #[test]
    fn test_set_active_cell_by_identity() {
        let rows = grid(&[3, 3, 3]);
        let manager = GridKeyManager::new(rows.clone());

        manager.set_active_cell(&rows[2].cells[1]);
        assert_eq!(manager.active_position(), pos(2, 1));

        manager.set_active_cell(Arc::clone(&rows[0].cells[2]));
        assert_eq!(manager.active_position(), pos(0, 2));
    }

    #[test]
    fn test_unknown_cell_is_ignored() {
        let manager = GridKeyManager::new(grid(&[2]));
        manager.set_active_cell((0, 1));

        manager.set_active_cell(Arc::new(TestCell));

        assert_eq!(manager.active_position(), pos(0, 1));
    }

    #[test]
    fn test_first_and_last_cell() {
        let manager = GridKeyManager::new(grid(&[3, 3, 2]));

        manager.set_last_cell_active();
        assert_eq!(manager.active_position(), pos(2, 1));

        manager.set_first_cell_active();
        assert_eq!(manager.active_position(), pos(0, 0));
    }

    #[test]
    fn test_first_and_last_on_empty_grid() {
        let manager = GridKeyManager::new(grid(&[]));
        manager.set_first_cell_active();
        manager.set_last_cell_active();
        manager.set_next_row_active();
        manager.set_next_column_active();
        assert_eq!(manager.active_position(), None);
    }

    #[test]
    fn test_last_cell_with_empty_last_row() {
        let manager = GridKeyManager::new(grid(&[2, 0]));
        manager.set_last_cell_active();
        assert_eq!(manager.active_position(), None);
    }

    #[test]
    fn test_next_from_unset_jumps_to_first_cell() {
        let manager = GridKeyManager::new(grid(&[3, 3]));
        manager.set_next_row_active();
        assert_eq!(manager.active_position(), pos(0, 0));

        let manager = GridKeyManager::new(grid(&[3, 3]));
        manager.set_next_column_active();
        assert_eq!(manager.active_position(), pos(0, 0));
    }

    #[test]
    fn test_previous_from_unset_is_noop() {
        let manager = GridKeyManager::new(grid(&[3, 3]));
        manager.set_previous_row_active();
        manager.set_previous_column_active();
        assert_eq!(manager.active_position(), None);
    }

    #[test]
    fn test_row_moves_keep_column() {
        let manager = GridKeyManager::new(grid(&[3, 3, 3]));
        manager.set_active_cell((0, 2));

        manager.set_next_row_active();
        assert_eq!(manager.active_position(), pos(1, 2));
        manager.set_next_row_active();
        assert_eq!(manager.active_position(), pos(2, 2));
        manager.set_previous_row_active();
        assert_eq!(manager.active_position(), pos(1, 2));
    }

    #[test]
    fn test_no_vertical_wrap() {
        let manager = GridKeyManager::new(grid(&[3, 3, 3]));
        let seen = record_changes(&manager);

        manager.set_active_cell((2, 1));
        manager.set_next_row_active();
        assert_eq!(manager.active_position(), pos(2, 1));

        manager.set_active_cell((0, 1));
        manager.set_previous_row_active();
        assert_eq!(manager.active_position(), pos(0, 1));

        assert_eq!(seen.lock().len(), 2);
    }

    #[test]
    fn test_row_move_into_shorter_row_is_noop() {
        let manager = GridKeyManager::new(grid(&[3, 1]));
        manager.set_active_cell((0, 2));
        manager.set_next_row_active();
        assert_eq!(manager.active_position(), pos(0, 2));
    }

    #[test]
    fn test_column_wraps_forward_to_next_row() {
        let manager = GridKeyManager::new(grid(&[3, 3, 3]));
        manager.set_active_cell((1, 2));
        manager.set_next_column_active();
        assert_eq!(manager.active_position(), pos(2, 0));
    }

    #[test]
    fn test_column_wraps_backward_to_previous_row() {
        let manager = GridKeyManager::new(grid(&[2, 3]));
        manager.set_active_cell((1, 0));
        manager.set_previous_column_active();
        assert_eq!(manager.active_position(), pos(0, 1));
    }

    #[test]
    fn test_column_moves_stop_at_grid_edges() {
        let manager = GridKeyManager::new(grid(&[3, 3, 3]));

        manager.set_active_cell((2, 2));
        manager.set_next_column_active();
        assert_eq!(manager.active_position(), pos(2, 2));

        manager.set_active_cell((0, 0));
        manager.set_previous_column_active();
        assert_eq!(manager.active_position(), pos(0, 0));
    }

    #[test]
    fn test_backward_wrap_into_empty_row_is_noop() {
        let manager = GridKeyManager::new(grid(&[0, 2]));
        manager.set_active_cell((1, 0));
        manager.set_previous_column_active();
        assert_eq!(manager.active_position(), pos(1, 0));
    }

    #[test]
    fn test_keydown_ltr() {
        let manager = GridKeyManager::new(grid(&[2, 2]));

        let mut right = KeyPressEvent::from_key(Key::ArrowRight);
        assert!(manager.on_keydown(&mut right));
        assert!(right.base.is_accepted());
        assert_eq!(manager.active_position(), pos(0, 0));

        manager.on_keydown(&mut KeyPressEvent::from_key(Key::ArrowRight));
        assert_eq!(manager.active_position(), pos(0, 1));

        manager.on_keydown(&mut KeyPressEvent::from_key(Key::ArrowDown));
        assert_eq!(manager.active_position(), pos(1, 1));

        manager.on_keydown(&mut KeyPressEvent::from_key(Key::ArrowLeft));
        assert_eq!(manager.active_position(), pos(1, 0));

        manager.on_keydown(&mut KeyPressEvent::from_key(Key::ArrowUp));
        assert_eq!(manager.active_position(), pos(0, 0));
    }

    #[test]
    fn test_keydown_rtl_mirrors_horizontal_keys() {
        let manager = GridKeyManager::new(grid(&[2, 2])).with_directionality(Direction::Rtl);
        manager.set_active_cell((0, 1));

        manager.on_keydown(&mut KeyPressEvent::from_key(Key::ArrowRight));
        assert_eq!(manager.active_position(), pos(0, 0));

        manager.on_keydown(&mut KeyPressEvent::from_key(Key::ArrowLeft));
        assert_eq!(manager.active_position(), pos(0, 1));

        manager.on_keydown(&mut KeyPressEvent::from_key(Key::ArrowDown));
        assert_eq!(manager.active_position(), pos(1, 1));
    }

    #[test]
    fn test_directionality_read_at_key_time() {
        let manager = GridKeyManager::new(grid(&[3]));
        manager.set_active_cell((0, 1));

        manager.set_directionality(Direction::Rtl);
        manager.on_keydown(&mut KeyPressEvent::from_key(Key::ArrowLeft));
        assert_eq!(manager.active_position(), pos(0, 2));
    }

    #[test]
    fn test_boundary_arrow_still_prevents_default() {
        let manager = GridKeyManager::new(grid(&[1]));
        manager.set_active_cell((0, 0));

        let mut up = KeyPressEvent::from_key(Key::ArrowUp);
        assert!(manager.on_keydown(&mut up));
        assert!(up.base.is_accepted());
        assert_eq!(manager.active_position(), pos(0, 0));
    }

    #[test]
    fn test_unhandled_keys_pass_through() {
        let manager = GridKeyManager::new(grid(&[2, 2]));
        let seen = record_changes(&manager);

        for key in [Key::Tab, Key::Home, Key::End, Key::Enter, Key::Character('a')] {
            let mut event = KeyPressEvent::from_key(key);
            assert!(!manager.on_keydown(&mut event));
            assert!(!event.base.is_accepted());
        }

        assert_eq!(manager.active_position(), None);
        assert!(seen.lock().is_empty());
    }

    #[test]
    fn test_update_active_cell_is_silent() {
        let hook_calls = Arc::new(Mutex::new(0));
        let hook_calls_clone = hook_calls.clone();
        let manager = GridKeyManager::new(grid(&[2, 2]))
            .with_activation_hook(move |_| *hook_calls_clone.lock() += 1);
        let seen = record_changes(&manager);

        manager.update_active_cell((1, 0));

        assert_eq!(manager.active_position(), pos(1, 0));
        assert!(seen.lock().is_empty());
        assert_eq!(*hook_calls.lock(), 0);
    }

    #[test]
    fn test_activation_hook_runs_after_change() {
        let rows = grid(&[2, 2]);
        let order = Arc::new(Mutex::new(Vec::new()));

        let order_hook = order.clone();
        let expected = Arc::clone(&rows[0].cells[1]);
        let manager = GridKeyManager::new(rows).with_activation_hook(move |cell| {
            assert!(Arc::ptr_eq(cell, &expected));
            order_hook.lock().push("hook");
        });
        let order_change = order.clone();
        manager.change().connect(move |_| order_change.lock().push("change"));

        manager.set_active_cell((0, 1));
        manager.set_active_cell((0, 1));

        assert_eq!(*order.lock(), vec!["change", "hook", "hook"]);
    }

    #[test]
    fn test_change_slot_can_read_manager() {
        let manager = Arc::new(GridKeyManager::new(grid(&[2, 2])));
        let observed = Arc::new(Mutex::new(None));

        let weak = Arc::downgrade(&manager);
        let observed_clone = observed.clone();
        manager.change().connect(move |_| {
            if let Some(manager) = weak.upgrade() {
                *observed_clone.lock() = manager.active_position();
            }
        });

        manager.set_active_cell((1, 0));
        assert_eq!(*observed.lock(), pos(1, 0));
    }

    #[test]
    fn test_live_rows_reconcile_without_change_event() {
        let rows = grid(&[2, 2, 2]);
        let list = Arc::new(LiveList::new(rows.clone()));
        let manager = GridKeyManager::new(Arc::clone(&list));
        let seen = record_changes(&manager);

        manager.set_active_cell((1, 1));
        assert_eq!(seen.lock().len(), 1);

        list.remove(0);

        assert_eq!(manager.active_position(), pos(0, 1));
        assert!(Arc::ptr_eq(&manager.active_row().unwrap(), &rows[1]));
        assert_eq!(seen.lock().len(), 1);
    }

    #[test]
    fn test_live_rows_removed_active_row_keeps_stale_state() {
        let rows = grid(&[2, 2]);
        let list = Arc::new(LiveList::new(rows.clone()));
        let manager = GridKeyManager::new(Arc::clone(&list));

        manager.set_active_cell((1, 0));
        list.remove(1);

        assert_eq!(manager.active_position(), pos(1, 0));
        assert!(Arc::ptr_eq(&manager.active_row().unwrap(), &rows[1]));
        assert!(manager.debug_layout().contains("outside the grid"));

        manager.set_previous_row_active();
        assert_eq!(manager.active_position(), pos(0, 0));
    }

    #[test]
    fn test_live_rows_growth_is_navigable() {
        let list = Arc::new(LiveList::new(grid(&[2])));
        let manager = GridKeyManager::new(Arc::clone(&list));
        manager.set_active_cell((0, 1));

        manager.set_next_column_active();
        assert_eq!(manager.active_position(), pos(0, 1));

        list.push(TestRow::new(2));
        manager.set_next_column_active();
        assert_eq!(manager.active_position(), pos(1, 0));
    }

    #[test]
    fn test_drop_unsubscribes_from_live_rows() {
        let list = Arc::new(LiveList::new(grid(&[1])));
        let manager = GridKeyManager::new(Arc::clone(&list));
        assert_eq!(list.changes().connection_count(), 1);

        drop(manager);

        assert_eq!(list.changes().connection_count(), 0);
        list.push(TestRow::new(1));
    }

    #[test]
    fn test_with_config() {
        let config = GridKeyConfig::default().with_locale("he-IL");
        let manager = GridKeyManager::new(grid(&[1])).with_config(&config);
        assert_eq!(manager.directionality(), Direction::Rtl);
    }

    #[test]
    fn test_debug_layout() {
        let manager = GridKeyManager::new(grid(&[2, 1]));
        manager.set_active_cell((1, 0));
        assert_eq!(manager.debug_layout(), "0: [ ][ ]\n1: [*]\n");
    }
}
