//! Core systems for Horizon Assess.
//!
//! This crate provides the foundational pieces shared by the assessment
//! views:
//!
//! - **Signal/Slot System**: Type-safe, synchronous listener notification
//! - **Logging**: Tracing targets and span names for log filtering
//!
//! # Signal/Slot Example
//!
//! ```
//! use horizon_assess_core::Signal;
//!
//! // Create a signal that notifies when a row is selected
//! let result_selected = Signal::<usize>::new();
//!
//! // Connect a slot to handle the signal
//! let conn_id = result_selected.connect(|row| {
//!     println!("Result {} selected", row);
//! });
//!
//! // Emit the signal
//! result_selected.emit(2);
//!
//! // Disconnect when done
//! result_selected.disconnect(conn_id);
//! ```

pub mod logging;
pub mod signal;

pub use logging::{span_names, targets};
pub use signal::{ConnectionId, Signal};
