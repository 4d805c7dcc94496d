//! Core systems for gridkeys.
//!
//! This crate provides the reactive plumbing the navigation managers are built on:
//!
//! - **Signal/Slot System**: Hot, multicast, synchronous notifications
//! - **Live Collections**: Ordered sequences that announce structural changes
//! - **Logging**: `tracing` targets and grid debug formatting
//!
//! # Signal/Slot Example
//!
//! ```
//! use gridkeys_core::Signal;
//!
//! let value_changed = Signal::<i32>::new();
//!
//! let conn_id = value_changed.connect(|value| {
//!     println!("Value changed to: {}", value);
//! });
//!
//! value_changed.emit(42);
//! value_changed.disconnect(conn_id);
//! ```

mod error;
pub mod live_list;
pub mod logging;
pub mod signal;

pub use error::{CollectionError, CollectionResult};
pub use live_list::LiveList;
pub use logging::{format_grid, GridStyle};
pub use signal::{ConnectionGuard, ConnectionId, Signal};
