//! Foundation types for the slidein transition engine.
//!
//! This crate provides the pieces the transition library builds on:
//!
//! - **Geometry**: [`Point`], [`Size`] and [`Rect`] value types, including
//!   the frame interpolation primitive [`Rect::lerp`]
//! - **Signal/Slot System**: [`Signal`] for host-facing notifications
//!   (progress updates, transition completion)
//! - **Logging**: tracing target constants in [`logging::targets`]
//!
//! # Signal Example
//!
//! ```
//! use slidein_core::Signal;
//!
//! let progress_changed = Signal::<f32>::new();
//!
//! let conn_id = progress_changed.connect(|p| {
//!     println!("progress: {p}");
//! });
//!
//! progress_changed.emit(0.5);
//! progress_changed.disconnect(conn_id);
//! ```

pub mod geometry;
pub mod logging;
pub mod signal;

pub use geometry::{Point, Rect, Size};
pub use signal::{ConnectionGuard, ConnectionId, Signal};
