//! Two-dimensional keyboard navigation for grids of focusable cells.
//!
//! gridkeys tracks an *active cell* inside a grid made of rows of cells and
//! moves it in response to arrow keys, the way a chip grid or a data grid
//! behaves for keyboard users:
//!
//! - [`GridKeyManager`] - The navigation state machine and its `change` signal
//! - [`GridFocusKeyManager`] - The same, focusing the active cell on every move
//! - [`GridRow`] / [`FocusableCell`] - What the host's rows and cells provide
//! - [`GridRows`] - A fixed row sequence or a shared [`LiveList`]
//! - [`GridKeyConfig`] - TOML configuration (direction, locale)
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//! use gridkeys::keyboard::{Key, KeyPressEvent};
//! use gridkeys::{Direction, GridKeyManager, GridRow, LiveList};
//!
//! struct Chip {
//!     cells: Vec<Arc<String>>,
//! }
//!
//! impl GridRow for Chip {
//!     type Cell = String;
//!     fn cells(&self) -> &[Arc<String>] {
//!         &self.cells
//!     }
//! }
//!
//! let chip = |name: &str| {
//!     Arc::new(Chip {
//!         cells: vec![Arc::new(name.to_string()), Arc::new(format!("remove {name}"))],
//!     })
//! };
//!
//! let rows = Arc::new(LiveList::new(vec![chip("apple"), chip("pear")]));
//! let manager = GridKeyManager::new(rows.clone()).with_directionality(Direction::Rtl);
//!
//! manager.set_active_cell((1, 0));
//! rows.remove(0);
//! assert_eq!(manager.active_row_index(), Some(0));
//!
//! let mut event = KeyPressEvent::from_key(Key::ArrowLeft);
//! assert!(manager.on_keydown(&mut event));
//! assert_eq!(manager.active_column_index(), Some(1));
//! ```

pub mod config;
pub mod direction;
mod error;
pub mod focus;
pub mod keyboard;
pub mod manager;
pub mod row;

pub use config::GridKeyConfig;
pub use direction::Direction;
pub use error::{GridError, Result};
pub use focus::GridFocusKeyManager;
pub use keyboard::{ArrowKey, Key, KeyPressEvent, KeyboardEvent, KeyboardModifiers};
pub use manager::GridKeyManager;
pub use row::{CellPosition, CellTarget, FocusableCell, GridRow, GridRows};

pub use gridkeys_core::{ConnectionGuard, ConnectionId, LiveList, Signal};
