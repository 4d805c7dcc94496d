//! Logging and debugging facilities for gridkeys.
//!
//! This module provides:
//! - Target names for filtering `tracing` output per subsystem
//! - A plain-text visualization of a grid's shape and active cell
//!
//! # Tracing Integration
//!
//! gridkeys uses the `tracing` crate for instrumentation. To see logs, install
//! a subscriber in your application:
//!
//! ```
//! let _ = tracing_subscriber::fmt()
//!     .with_env_filter("gridkeys=trace,gridkeys_core=debug")
//!     .try_init();
//! ```

use std::fmt::Write as FmtWrite;

/// Target names for log filtering.
///
/// Use these with `tracing` directives to filter logs by subsystem.
pub mod targets {
    /// Core crate target.
    pub const CORE: &str = "gridkeys_core";
    /// Signal/slot system target.
    pub const SIGNAL: &str = "gridkeys_core::signal";
    /// Observable collection target.
    pub const LIVE_LIST: &str = "gridkeys_core::live_list";
    /// Grid key manager state machine target.
    pub const MANAGER: &str = "gridkeys::manager";
    /// Focus delegation target.
    pub const FOCUS: &str = "gridkeys::focus";
    /// Keyboard mapping target.
    pub const KEYBOARD: &str = "gridkeys::keyboard";
    /// Configuration loading target.
    pub const CONFIG: &str = "gridkeys::config";
}

/// Style options for grid visualization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GridStyle {
    /// `[ ]` for cells and `[*]` for the active cell.
    #[default]
    Brackets,
    /// One character per cell: `.` and `#`.
    Compact,
}

/// Render a grid shape as text.
///
/// `row_lengths[i]` is the number of cells in row `i`; `active` marks the
/// active `(row, column)` if any. Each row is prefixed with its index so jagged
/// grids stay readable. An active position outside the grid is reported on a
/// trailing line instead of being dropped.
///
/// ```
/// use gridkeys_core::logging::{format_grid, GridStyle};
///
/// let text = format_grid(&[2, 2], Some((1, 0)), GridStyle::Compact);
/// assert_eq!(text, "0: ..\n1: #.\n");
/// ```
pub fn format_grid(row_lengths: &[usize], active: Option<(usize, usize)>, style: GridStyle) -> String {
    let mut output = String::new();

    if row_lengths.is_empty() {
        output.push_str("(empty)\n");
    }

    let width = row_lengths.len().saturating_sub(1).to_string().len();
    for (row, &len) in row_lengths.iter().enumerate() {
        let _ = write!(output, "{row:>width$}: ");
        for column in 0..len {
            let is_active = active == Some((row, column));
            let cell = match (style, is_active) {
                (GridStyle::Brackets, false) => "[ ]",
                (GridStyle::Brackets, true) => "[*]",
                (GridStyle::Compact, false) => ".",
                (GridStyle::Compact, true) => "#",
            };
            output.push_str(cell);
        }
        output.push('\n');
    }

    if let Some((row, column)) = active {
        let in_bounds = row_lengths.get(row).is_some_and(|&len| column < len);
        if !in_bounds {
            let _ = writeln!(output, "active ({row}, {column}) is outside the grid");
        }
    }

    output
}
